//! Core generation logic for the `includes/absl` forwarding headers.

use std::path::{Path, PathBuf};

use anyhow::Result;
use fwdgen::Report;
use fwdgen::config::{self, Config};

/// The abseil-cpp mapping, compiled into the binary.
pub const ABSL_TOML: &str = include_str!("../absl.toml");

/// Parse the embedded abseil-cpp mapping.
pub fn absl_config() -> Result<Config> {
    config::parse_config(ABSL_TOML)
}

/// Output directory named by `[output] dir` in `absl.toml`, resolved
/// against this crate's directory (`<workspace>/includes/absl`).
pub fn output_dir() -> Result<PathBuf> {
    Ok(absl_config()?.output_dir(Path::new(env!("CARGO_MANIFEST_DIR"))))
}

/// Write any missing abseil forwarding headers into `output_dir`.
///
/// Existing headers are left alone, so this is safe to run before every
/// build.
pub fn generate(output_dir: &Path) -> Result<Report> {
    let cfg = absl_config()?;
    fwdgen::generate_from_config(&cfg, Path::new(env!("CARGO_MANIFEST_DIR")), Some(output_dir))
}
