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

//! Generator configuration.
//!
//! Every key is optional; an empty file is the default configuration:
//!
//! ```toml
//! setter_policy = "validate"   # or "trust"
//! header = true
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What to do about target types that may lack a `set_<field>` setter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetterPolicy {
    /// Emit the builder regardless. A missing setter shows up when the
    /// generated code is compiled.
    #[default]
    Trust,
    /// Check the target's inherent `impl` blocks and refuse to emit a
    /// builder whose setters are not all there.
    Validate,
}

/// Knobs of a [`Processor`](crate::Processor).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Missing-setter handling.
    pub setter_policy: SetterPolicy,
    /// Prefix each emitted file with an `@generated` banner.
    pub header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            setter_policy: SetterPolicy::default(),
            header: true,
        }
    }
}

impl Config {
    /// Parses a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Replaces the setter policy.
    pub fn with_setter_policy(mut self, setter_policy: SetterPolicy) -> Self {
        self.setter_policy = setter_policy;
        self
    }

    /// Turns the `@generated` banner on or off.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}
