//! The logical name → vendored path table.

use std::collections::BTreeMap;

use anyhow::{Result, bail};
use serde::Deserialize;
use tracing::warn;

/// What to do when the same logical name appears twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail construction, naming the repeated entry.
    #[default]
    Reject,
    /// The later entry replaces the earlier one.
    LastWins,
}

/// Immutable mapping from logical name to a path relative to the vendored
/// library root.
///
/// Logical names double as output file base names, so they are checked to
/// be plain file names when the mapping is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: BTreeMap<String, String>,
}

impl Mapping {
    /// Build a mapping from `(name, relative_path)` pairs.
    pub fn from_entries<I, N, P>(entries: I, policy: DuplicatePolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (N, P)>,
        N: Into<String>,
        P: Into<String>,
    {
        let mut map = BTreeMap::new();
        for (name, path) in entries {
            let name: String = name.into();
            let path: String = path.into();
            validate_name(&name)?;
            if let Some(previous) = map.get(&name) {
                match policy {
                    DuplicatePolicy::Reject => {
                        bail!("duplicate logical name `{name}` in header mapping")
                    }
                    DuplicatePolicy::LastWins => {
                        warn!(
                            logical_name = %name,
                            previous = %previous,
                            path = %path,
                            "duplicate logical name, later entry wins"
                        );
                    }
                }
            }
            map.insert(name, path);
        }
        Ok(Self { entries: map })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p.as_str()))
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("logical name must not be empty");
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        bail!("logical name `{name}` is not a plain file name");
    }
    Ok(())
}
