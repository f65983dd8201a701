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

//! Collaborators of a processing round: where generated files go and where
//! diagnostics are reported.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    config::Config,
    error::{Error, Result},
    produce::GeneratedBuilder,
};

/// Persists generated source units.
pub trait Filer {
    /// Writes `contents` to `relative`, resolved against the filer's root.
    /// Returns the path that was written.
    fn write_source(&mut self, relative: &Path, contents: &str) -> io::Result<PathBuf>;
}

/// Writes under a root directory, creating package directories on demand.
#[derive(Debug, Clone)]
pub struct FsFiler {
    root: PathBuf,
}

impl FsFiler {
    /// A filer rooted at `root`, typically `OUT_DIR`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Filer for FsFiler {
    fn write_source(&mut self, relative: &Path, contents: &str) -> io::Result<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Keeps generated units in memory, keyed by relative path.
#[derive(Debug, Default, Clone)]
pub struct MemoryFiler {
    files: IndexMap<PathBuf, String>,
}

impl MemoryFiler {
    /// Contents written to `relative`, if any.
    pub fn get(&self, relative: impl AsRef<Path>) -> Option<&str> {
        self.files.get(relative.as_ref()).map(String::as_str)
    }

    /// Every written unit, in write order.
    pub fn files(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files
            .iter()
            .map(|(path, contents)| (path.as_path(), contents.as_str()))
    }

    /// Number of units written.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing was written.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Filer for MemoryFiler {
    fn write_source(&mut self, relative: &Path, contents: &str) -> io::Result<PathBuf> {
        self.files.insert(relative.to_path_buf(), contents.to_string());
        Ok(relative.to_path_buf())
    }
}

/// Severity of a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// The element's builder was not produced.
    Error,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
        }
    }
}

/// A message tied to the marked type it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity.
    pub kind: DiagnosticKind,
    /// Human-readable text.
    pub message: String,
    /// Qualified name of the originating type.
    pub element: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (`{}`)", self.kind, self.message, self.element)
    }
}

/// Receives diagnostics produced during a round.
pub trait Messager {
    /// Reports one diagnostic.
    fn print_message(&mut self, diagnostic: Diagnostic);
}

/// Collects diagnostics for later inspection.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// All diagnostics, in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    /// Only the [`DiagnosticKind::Error`] ones.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0
            .iter()
            .filter(|diagnostic| diagnostic.kind == DiagnosticKind::Error)
    }

    /// Number of diagnostics.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Messager for Diagnostics {
    fn print_message(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }
}

/// Forwards diagnostics to Cargo from a build script as `cargo:warning=` lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct CargoMessager;

impl Messager for CargoMessager {
    fn print_message(&mut self, diagnostic: Diagnostic) {
        println!("cargo:warning={}", diagnostic);
    }
}

/// The collaborators passed into every generation call.
pub struct Context<'a> {
    /// Where generated units are written.
    pub filer: &'a mut dyn Filer,
    /// Where failures are reported.
    pub messager: &'a mut dyn Messager,
}

impl<'a> Context<'a> {
    /// Bundles a filer and a messager.
    pub fn new(filer: &'a mut dyn Filer, messager: &'a mut dyn Messager) -> Self {
        Self { filer, messager }
    }

    /// Reports an [`DiagnosticKind::Error`] against `element`.
    pub fn error(&mut self, element: impl Into<String>, message: impl Into<String>) {
        self.messager.print_message(Diagnostic {
            kind: DiagnosticKind::Error,
            message: message.into(),
            element: element.into(),
        });
    }
}

/// Renders `builder` and writes it through the context's filer.
///
/// A failed write is reported once as an error diagnostic against the
/// builder's target and returned; nothing is retried.
pub fn emit(builder: &GeneratedBuilder, config: &Config, cx: &mut Context<'_>) -> Result<PathBuf> {
    let relative = builder.relative_path();
    let source = builder.render(config.header);
    let element = builder.qualified_target();

    match cx.filer.write_source(&relative, &source) {
        Ok(path) => {
            tracing::info!(element = %element, path = %path.display(), "wrote builder");
            Ok(path)
        }
        Err(err) => {
            tracing::error!(
                element = %element,
                path = %relative.display(),
                error = %err,
                "failed to write builder"
            );
            cx.error(element, "Failed to write file for element");
            Err(Error::Io {
                path: relative,
                source: err,
            })
        }
    }
}
