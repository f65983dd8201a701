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

//! Metadata model and source generator behind the `setter-builder` crates.
//!
//! The generator turns the description of a marked struct ([`TargetType`])
//! into a companion `<Type>Builder` with one fluent setter per private field
//! and a `build()` method that hands every stored value to the struct's
//! conventional `set_<field>` setter.
//!
//! Two front-ends feed it:
//!
//! * the `#[derive(Builder)]` procedural macro, which splices the generated
//!   tokens back into the defining module, and
//! * [`Processor`], meant for `build.rs` scripts, which scans Rust source
//!   files for `#[builder]`-marked structs and writes one file per type
//!   through a [`Filer`], reporting failures to a [`Messager`].
//!
//! ```
//! use setter_builder_codegen::{Context, Diagnostics, MemoryFiler, Processor};
//!
//! let source = r#"
//!     #[builder]
//!     #[derive(Default)]
//!     pub struct User {
//!         name: String,
//!         pub id: u64,
//!     }
//! "#;
//!
//! let mut filer = MemoryFiler::default();
//! let mut messager = Diagnostics::default();
//! let mut cx = Context::new(&mut filer, &mut messager);
//! let summary = Processor::default()
//!     .process_source(source, "demo::model", &mut cx)
//!     .unwrap();
//!
//! assert_eq!(summary.written.len(), 1);
//! assert!(filer.get("demo/model/UserBuilder.rs").is_some());
//! ```

#![warn(missing_docs)]

mod analyze;
pub mod config;
pub mod emit;
pub mod error;
mod graph;
pub mod helper;
pub mod model;
pub mod parse;
pub mod processor;
pub mod produce;

pub use analyze::{missing_setters, select_builder_fields};
pub use config::{Config, SetterPolicy};
pub use emit::{
    emit, CargoMessager, Context, Diagnostic, DiagnosticKind, Diagnostics, Filer, FsFiler,
    MemoryFiler, Messager,
};
pub use error::{Error, Result};
pub use helper::string::{
    conventional_setter_name, derive_builder_name, derive_target_variable_name,
};
pub use model::{Field, Member, MemberKind, TargetType, TypeDescriptor, Visibility};
pub use processor::{Processor, Summary};
pub use produce::{
    build_method::generate_build_method, builder::generate_field_declarations,
    setters::generate_setter_methods, GeneratedBuilder, Setter,
};
