//! Configuration types for `fwdgen.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::emit::{GuardStyle, HeaderStyle, IncludeStyle};
use crate::mapping::{DuplicatePolicy, Mapping};

/// Root configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub vendor: VendorConfig,
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    #[serde(default)]
    pub header: Vec<HeaderEntry>,
}

/// Where generated headers go and what they look like.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory. Relative paths resolve against the config file's
    /// directory. Must already exist.
    pub dir: PathBuf,
    /// Generated file suffix, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
    #[serde(default)]
    pub guard: GuardStyle,
    #[serde(default)]
    pub include: IncludeStyle,
}

fn default_extension() -> String {
    "hpp".to_string()
}

/// The vendored library tree the headers forward into.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VendorConfig {
    /// Prefix written in front of every entry's path, as seen from the
    /// output directory (e.g. `../../third-party/abseil-cpp/absl`).
    pub root: String,
}

/// A single mapping entry.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderEntry {
    /// Logical name; also the output file's base name.
    pub name: String,
    /// Path relative to the vendored root.
    pub path: String,
}

impl Config {
    /// Build the immutable mapping, applying the configured duplicate policy.
    pub fn mapping(&self) -> Result<Mapping> {
        Mapping::from_entries(
            self.header.iter().map(|h| (h.name.as_str(), h.path.as_str())),
            self.duplicates,
        )
    }

    /// Header naming and content style.
    pub fn style(&self) -> Result<HeaderStyle> {
        HeaderStyle::new(
            self.output.extension.clone(),
            self.output.guard,
            self.output.include,
        )
    }

    /// Output directory resolved against `base_dir`.
    pub fn output_dir(&self, base_dir: &Path) -> PathBuf {
        if self.output.dir.is_absolute() {
            self.output.dir.clone()
        } else {
            base_dir.join(&self.output.dir)
        }
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> Result<Config> {
    toml::from_str(content).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))
}

/// Load and parse a `fwdgen.toml` configuration file.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config file {}: {}", path.display(), e))?;
    parse_config(&content).with_context(|| format!("in config file {}", path.display()))
}
