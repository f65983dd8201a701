#![allow(dead_code)]

use setter_builder::builder;

#[builder(skip)]
struct User {
    name: String,
}

fn main() {}
