//! fwdgen — forwarding header generator.
//!
//! Writes one thin header per logical name into an output directory, each
//! including the real header inside a vendored third-party tree. Downstream
//! code can then `#include "absl/flat_hash_map.hpp"` instead of spelling out
//! the vendored path.
//!
//! Generation is idempotent: a header that already exists is never read or
//! rewritten, and headers whose entry left the mapping are never removed.
//!
//! # Quick start
//!
//! From a config file (suitable for `build.rs` or a pre-build step):
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = fwdgen::run(Path::new("fwdgen.toml"), None).unwrap();
//! println!("created {} headers", report.created_count());
//! ```
//!
//! Or with an injected mapping:
//!
//! ```no_run
//! use fwdgen::{Generator, mapping::{DuplicatePolicy, Mapping}};
//!
//! let mapping = Mapping::from_entries(
//!     [("flat_hash_map", "container/flat_hash_map.h")],
//!     DuplicatePolicy::Reject,
//! )
//! .unwrap();
//! Generator::new(mapping, "includes/absl", "../../third-party/abseil-cpp/absl")
//!     .generate()
//!     .unwrap();
//! ```

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

pub mod config;
pub mod emit;
pub mod mapping;

use emit::{GuardStyle, HeaderStyle};
use mapping::Mapping;

/// Run the full pipeline: load config, resolve the output directory, and
/// write any missing headers.
///
/// `config_path` is the path to a `fwdgen.toml` configuration file.
/// `output_dir` optionally overrides the output directory from the config.
pub fn run(config_path: &Path, output_dir: Option<&Path>) -> Result<Report> {
    let cfg = config::load_config(config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    generate_from_config(&cfg, base_dir, output_dir)
}

/// Generate headers from an already-loaded [`config::Config`].
///
/// `base_dir` is the directory relative to which the configured output
/// directory is resolved (typically the parent directory of the TOML file).
pub fn generate_from_config(
    cfg: &config::Config,
    base_dir: &Path,
    output_dir: Option<&Path>,
) -> Result<Report> {
    Generator::from_config(cfg, base_dir, output_dir)?.generate()
}

/// Immutable description of one generation pass.
#[derive(Debug, Clone)]
pub struct Generator {
    mapping: Mapping,
    output_dir: PathBuf,
    vendor_root: String,
    style: HeaderStyle,
}

impl Generator {
    /// Generator with the default header style (`.hpp`, `#pragma once`,
    /// quoted include).
    pub fn new(
        mapping: Mapping,
        output_dir: impl Into<PathBuf>,
        vendor_root: impl Into<String>,
    ) -> Self {
        Self {
            mapping,
            output_dir: output_dir.into(),
            vendor_root: vendor_root.into(),
            style: HeaderStyle::default(),
        }
    }

    /// Replace the header style. It is checked by [`Generator::check`]
    /// before anything is written.
    pub fn with_style(mut self, style: HeaderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn from_config(
        cfg: &config::Config,
        base_dir: &Path,
        output_dir: Option<&Path>,
    ) -> Result<Self> {
        let mapping = cfg.mapping()?;
        let style = cfg.style()?;
        let output_dir = match output_dir {
            Some(p) => p.to_path_buf(),
            None => cfg.output_dir(base_dir),
        };
        info!(
            entries = mapping.len(),
            output = %output_dir.display(),
            vendor_root = %cfg.vendor.root,
            "loaded configuration"
        );
        let generator = Self::new(mapping, output_dir, cfg.vendor.root.clone()).with_style(style);
        generator.check()?;
        Ok(generator)
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Output path for a logical name.
    pub fn header_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(self.style.file_name(name))
    }

    /// Header text for one entry.
    pub fn render(&self, name: &str, relative_path: &str) -> Result<String> {
        let target = emit::include_target(&self.vendor_root, relative_path);
        self.style.render(name, &target)
    }

    /// Validate the style against the whole mapping.
    ///
    /// With `#ifndef` guards every entry needs a well-formed macro name, and
    /// no two entries may share one.
    pub fn check(&self) -> Result<()> {
        self.style.validate()?;
        if self.style.guard != GuardStyle::Ifndef {
            return Ok(());
        }
        let mut seen: HashMap<String, &str> = HashMap::new();
        for (name, _) in self.mapping.iter() {
            let macro_name = self.style.guard_macro(name)?;
            if let Some(other) = seen.insert(macro_name.clone(), name) {
                bail!("logical names `{other}` and `{name}` share include guard {macro_name}");
            }
        }
        Ok(())
    }

    /// Make sure every mapping entry has a header on disk.
    ///
    /// Stops at the first error; headers written before it stay in place.
    pub fn generate(&self) -> Result<Report> {
        self.check()?;
        let meta = fs::metadata(&self.output_dir).with_context(|| {
            format!("output directory {} is not accessible", self.output_dir.display())
        })?;
        if !meta.is_dir() {
            bail!("output path {} is not a directory", self.output_dir.display());
        }

        let mut report = Report::default();
        for (name, relative_path) in self.mapping.iter() {
            let path = self.header_path(name);
            let content = self.render(name, relative_path)?;
            if create_if_absent(&path, &content)? {
                info!(path = %path.display(), "wrote forwarding header");
                report.created.push(path);
            } else {
                debug!(path = %path.display(), "header exists, skipping");
                report.skipped.push(path);
            }
        }

        info!(
            dir = %self.output_dir.display(),
            created = report.created_count(),
            skipped = report.skipped_count(),
            "generation complete"
        );
        Ok(report)
    }
}

/// Atomically create `path` with `content` unless it already exists.
///
/// Returns `false` when a regular file is already there; its content is not
/// read. Anything else occupying the name is an error.
fn create_if_absent(path: &Path, content: &str) -> Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(content.as_bytes())
                .with_context(|| format!("writing {}", path.display()))?;
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            let meta = fs::metadata(path)
                .with_context(|| format!("inspecting existing {}", path.display()))?;
            if meta.is_file() {
                Ok(false)
            } else {
                bail!(
                    "cannot write header {}: path is occupied by something that is not a regular file",
                    path.display()
                )
            }
        }
        Err(e) => Err(e).with_context(|| format!("creating {}", path.display())),
    }
}

/// Paths touched by one [`Generator::generate`] pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Headers written by this pass.
    pub created: Vec<PathBuf>,
    /// Headers left alone because they already existed.
    pub skipped: Vec<PathBuf>,
}

impl Report {
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}
