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

//! One processing round over the marked types of a crate.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    analyze::missing_setters,
    config::{Config, SetterPolicy},
    emit::{emit, Context},
    error::{Error, Result},
    model::TargetType,
    parse,
    produce::GeneratedBuilder,
};

/// Outcome of a round.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Paths written, in processing order.
    pub written: Vec<PathBuf>,
    /// Types whose builder was not produced.
    pub failed: usize,
}

/// Drives generation for every marked type, one at a time.
///
/// A failure is reported through the context's messager and only affects the
/// type it concerns; the round carries on with the rest.
#[derive(Debug, Default, Clone)]
pub struct Processor {
    config: Config,
}

impl Processor {
    /// A processor with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generates and writes a builder for each of `targets`.
    pub fn process(&self, targets: &[TargetType], cx: &mut Context<'_>) -> Summary {
        let mut summary = Summary::default();
        for target in targets {
            match self.process_one(target, cx) {
                Ok(path) => summary.written.push(path),
                Err(err) => {
                    tracing::debug!(name = %target.qualified_name(), error = %err, "no builder produced");
                    summary.failed += 1;
                }
            }
        }
        summary
    }

    /// Parses `source` as a Rust file of module `package` and processes every
    /// `#[builder]`-marked struct in it.
    pub fn process_source(
        &self,
        source: &str,
        package: &str,
        cx: &mut Context<'_>,
    ) -> Result<Summary> {
        self.process_parsed(source, package, "<source>", cx)
    }

    /// Reads and processes one Rust source file.
    pub fn process_file(
        &self,
        path: impl AsRef<Path>,
        package: &str,
        cx: &mut Context<'_>,
    ) -> Result<Summary> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.process_parsed(&source, package, &path.display().to_string(), cx)
    }

    fn process_parsed(
        &self,
        source: &str,
        package: &str,
        origin: &str,
        cx: &mut Context<'_>,
    ) -> Result<Summary> {
        let file = syn::parse_file(source).map_err(|source| Error::Parse {
            origin: origin.to_string(),
            source,
        })?;
        let targets = parse::discover(&file, package);
        Ok(self.process(&targets, cx))
    }

    fn process_one(&self, target: &TargetType, cx: &mut Context<'_>) -> Result<PathBuf> {
        let builder = GeneratedBuilder::new(target);

        if self.config.setter_policy == SetterPolicy::Validate {
            let missing = missing_setters(target, &builder.fields);
            if !missing.is_empty() {
                for setter in &missing {
                    cx.error(
                        target.qualified_name(),
                        format!("missing conventional setter `{}`", setter),
                    );
                }
                return Err(Error::MissingSetters {
                    target: target.qualified_name(),
                    setters: missing,
                });
            }
        }

        emit(&builder, &self.config, cx)
    }
}
