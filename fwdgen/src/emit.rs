//! Emission — forwarding header text for one mapping entry.

use anyhow::{Result, bail};
use serde::Deserialize;

/// Directive that stops a header from being processed twice in one
/// translation unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuardStyle {
    /// `#pragma once`
    #[default]
    PragmaOnce,
    /// Classic `#ifndef` / `#define` / `#endif` macro guard.
    Ifndef,
}

/// Spelling of the include directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncludeStyle {
    /// `#include "target"`
    #[default]
    Quoted,
    /// `#include <target>`
    Angled,
}

/// How generated headers are named and what they contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderStyle {
    /// File name suffix, without the leading dot.
    pub extension: String,
    pub guard: GuardStyle,
    pub include: IncludeStyle,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            extension: "hpp".to_string(),
            guard: GuardStyle::default(),
            include: IncludeStyle::default(),
        }
    }
}

impl HeaderStyle {
    /// Style with a checked extension.
    pub fn new(
        extension: impl Into<String>,
        guard: GuardStyle,
        include: IncludeStyle,
    ) -> Result<Self> {
        let style = Self {
            extension: extension.into(),
            guard,
            include,
        };
        style.validate()?;
        Ok(style)
    }

    /// The extension must be a bare suffix: non-empty, no leading dot, no
    /// path separators.
    pub fn validate(&self) -> Result<()> {
        let ext = &self.extension;
        if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
            bail!("output extension `{ext}` must be a bare suffix without dots or separators");
        }
        Ok(())
    }

    /// Output file name for a logical name, e.g. `flat_hash_map.hpp`.
    pub fn file_name(&self, name: &str) -> String {
        format!("{name}.{}", self.extension)
    }

    /// Full header text forwarding to `target`.
    pub fn render(&self, name: &str, target: &str) -> Result<String> {
        let include = match self.include {
            IncludeStyle::Quoted => format!("#include \"{target}\""),
            IncludeStyle::Angled => format!("#include <{target}>"),
        };
        Ok(match self.guard {
            GuardStyle::PragmaOnce => format!("#pragma once\n\n{include}\n"),
            GuardStyle::Ifndef => {
                let macro_name = self.guard_macro(name)?;
                format!("#ifndef {macro_name}\n#define {macro_name}\n\n{include}\n\n#endif\n")
            }
        })
    }

    /// `flat_hash_map` + `hpp` → `FLAT_HASH_MAP_HPP`.
    ///
    /// Distinct names can map to the same macro (`str-cat`, `str_cat`);
    /// callers emitting several headers check for that.
    pub fn guard_macro(&self, name: &str) -> Result<String> {
        if !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
            bail!("logical name `{name}` cannot start an include guard macro");
        }
        Ok(format!("{name}_{}", self.extension)
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect())
    }
}

/// Join the vendored root and an entry's relative path with a single `/`.
///
/// Both are opaque text; nothing here checks that the target exists.
pub fn include_target(vendor_root: &str, relative_path: &str) -> String {
    let root = vendor_root.trim_end_matches('/');
    if root.is_empty() {
        relative_path.to_string()
    } else {
        format!("{root}/{relative_path}")
    }
}
