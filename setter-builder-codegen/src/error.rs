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

//! Errors raised while discovering, generating and writing builders.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong for one processing call.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a source file or writing a generated one failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// A source file is not valid Rust.
    #[error("failed to parse {origin}: {source}")]
    Parse {
        /// File path, or a placeholder for in-memory sources.
        origin: String,
        /// Underlying error.
        #[source]
        source: syn::Error,
    },

    /// The configuration file is malformed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// Setter validation found fields without a conventional setter.
    #[error("`{target}` is missing conventional setters: {}", .setters.join(", "))]
    MissingSetters {
        /// Qualified name of the marked type.
        target: String,
        /// Setter names that were expected.
        setters: Vec<String>,
    },
}
