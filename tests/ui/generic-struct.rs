#![allow(dead_code)]

use setter_builder::Builder;

#[derive(Builder)]
struct Wrapper<T> {
    inner: T,
}

fn main() {}
