// Copyright (c) 2024 Andy Allison
//
// Licensed under either of
//
// * MIT license (LICENSE-MIT or http://opensource.org/licenses/MIT)
// * Apache License, Version 2.0 (LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0)
//
// at your option.
//
// Unless you explicitly state otherwise, any contribution intentionally submitted
// for inclusion in the work by you, as defined in the Apache-2.0 license, shall
// be dual licensed as above, without any additional terms or conditions.

//! This crate provides the `Builder` derive macro and the `#[builder]` marker
//! attribute of `setter-builder`.
//!
//! # Setter builders
//! A builder collects values through fluent setters and, on `build()`,
//! creates the target through `Default` and hands each value to the
//! target's own `set_<field>` setter. Only private fields are managed by the
//! builder; fields with any `pub` qualifier are left to the target.
//!
//! Example usage:
//!
//! ```rust
//! use setter_builder_macro::Builder;
//!
//! #[derive(Builder, Default)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl Person {
//!     fn set_name(&mut self, name: String) {
//!         self.name = name;
//!     }
//!     fn set_age(&mut self, age: u32) {
//!         self.age = age;
//!     }
//! }
//!
//! let person = PersonBuilder::new()
//!     .name("Alice".to_string())
//!     .age(30)
//!     .build();
//! assert_eq!(person.age, 30);
//! ```

#![warn(missing_docs)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use proc_macro_error::{abort, proc_macro_error};
use setter_builder_codegen::{parse, GeneratedBuilder};
use syn::{parse_macro_input, DeriveInput};

/// The `Builder` derive macro generates `<Name>Builder` next to the struct.
///
/// The builder has one `Option` slot and one `&mut Self`-returning setter per
/// private field, a `new()` constructor and a `build(&mut self)` method that
/// moves the stored values out, leaving the builder empty. The struct must
/// implement `Default` and provide `fn set_<field>(&mut self, T)` for every
/// private field; a missing setter is reported by rustc at the field.
///
/// # Errors
/// Emits a compile error when applied to an enum, a union or a generic struct.
#[proc_macro_derive(Builder)]
#[proc_macro_error]
pub fn builder_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // The module path of the input is not visible to a derive.
    let target = match parse::from_derive_input(&input, "") {
        Ok(target) => target,
        Err(err) => abort!(err.span(), "{}", err),
    };

    GeneratedBuilder::new(&target).tokens().into()
}

/// Marks a struct for the `build.rs` generator of `setter-builder-codegen`.
///
/// The item is returned untouched; the generator finds the marker when it
/// scans the source file. Do not combine it with `#[derive(Builder)]` on the
/// same struct, or the builder is defined twice.
#[proc_macro_attribute]
#[proc_macro_error]
pub fn builder(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = TokenStream2::from(args);
    if !args.is_empty() {
        abort!(args, "`#[builder]` is a marker and takes no arguments");
    }
    item
}
