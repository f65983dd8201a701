#![allow(dead_code)]

use setter_builder::Builder;

#[derive(Builder, Default)]
struct User {
    email: String,
}

fn main() {}
