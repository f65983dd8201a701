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

//! Naming rules and small path helpers.

use std::path::PathBuf;

/// Directory of a `::`-separated module path, relative to the output root.
pub fn package_dir(package: &str) -> PathBuf {
    package
        .split("::")
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

pub mod string {
    //! Identifier derivations used by the generated code.

    /// `User` → `UserBuilder`. Existing names are not checked for collisions.
    pub fn derive_builder_name(simple_name: &str) -> String {
        format!("{}Builder", simple_name)
    }

    /// Lower-cases only the first character: `User` → `user`, `URL` → `uRL`.
    pub fn derive_target_variable_name(simple_name: &str) -> String {
        let mut chars = simple_name.chars();
        match chars.next() {
            None => String::new(),
            Some(first) => first.to_lowercase().chain(chars).collect(),
        }
    }

    /// `email` → `set_email`.
    pub fn conventional_setter_name(field_name: &str) -> String {
        format!("set_{}", field_name)
    }

    /// Name bound to a stored value inside `build()`, kept clear of the
    /// target variable.
    pub fn value_binding_name(target_variable: &str) -> String {
        if target_variable == "value" {
            "value_".to_string()
        } else {
            "value".to_string()
        }
    }
}
