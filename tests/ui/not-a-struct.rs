#![allow(dead_code)]

use setter_builder::Builder;

#[derive(Builder)]
enum Mode {
    Fast,
    Slow,
}

fn main() {}
