//! Tooltip table persistence and layering.
//!
//! The table is the static key/description mapping driving all lookups.
//! It is assembled once at startup (builtin entries, optionally layered
//! with JSON overlays) and read-only afterward. Overlay files are flat
//! JSON objects of string to string.

use crate::builtin;
use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A hint overlay file: a flat key/description object.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
struct HintOverlay(HashMap<String, String>);

/// Default user overlay path.
fn user_overlay_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ui-hints")
        .join("hints.json")
}

/// Immutable key to description mapping.
///
/// Keys are drawn from three namespaces that may collide (label text,
/// option value, class name); which one wins for a given element is fixed
/// by [`resolve_tooltip`](crate::resolver::resolve_tooltip), not by the
/// table. There is no mutation API: build the full table up front and
/// hand it to the binder.
#[derive(Debug, Clone, Default)]
pub struct TooltipTable {
    entries: HashMap<String, String>,
}

impl TooltipTable {
    /// An empty table.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The compiled-in hint table.
    pub fn builtin() -> Self {
        let entries = builtin::HINTS
            .entries()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { entries }
    }

    /// Build a table from key/description pairs. Later pairs win on
    /// duplicate keys.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { entries }
    }

    /// Parse a table from overlay-file JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let overlay: HintOverlay = serde_json::from_str(json)?;
        Ok(Self { entries: overlay.0 })
    }

    /// Read a table from an overlay file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Layer additional pairs on top of this table. Overlay entries win
    /// on key collision.
    pub fn with_overlay_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in pairs {
            self.entries.insert(k.into(), v.into());
        }
        self
    }

    /// Layer an overlay file on top of this table.
    pub fn with_overlay_file(self, path: &Path) -> Result<Self> {
        let overlay = Self::from_path(path)?;
        Ok(self.with_overlay_pairs(overlay.entries))
    }

    /// Builtin table plus the user overlay, if one exists.
    ///
    /// A missing overlay file is normal; a malformed one is reported and
    /// skipped so startup never fails on hint data.
    pub fn load_default() -> Self {
        let table = Self::builtin();
        let path = user_overlay_path();
        if !path.exists() {
            return table;
        }
        match table.clone().with_overlay_file(&path) {
            Ok(overlaid) => overlaid,
            Err(e) => {
                tracing::warn!("Ignoring hint overlay {}: {}", path.display(), e);
                table
            }
        }
    }

    /// Look up a description by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
