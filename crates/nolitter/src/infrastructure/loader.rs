//! TOML custom-file loader.
//!
//! A custom file is a flat TOML document of `identifier = value` pairs:
//!
//! ```toml
//! fill-column = 100
//! indent-tabs-mode = false
//! user-full-name = "Ada"
//! load-path = ["lisp/", "site-lisp/"]
//!
//! [display-buffer-alist]
//! "*Help*" = "bottom"
//! ```
//!
//! TOML values map onto [`SettingValue`] as follows:
//!
//! | TOML             | SettingValue          |
//! |------------------|-----------------------|
//! | string           | `String`              |
//! | integer          | `Integer`             |
//! | float            | `Float`               |
//! | boolean          | `Bool`                |
//! | datetime         | `String` (RFC 3339)   |
//! | array            | `List`                |
//! | table            | `Alist`, keys sorted  |
//!
//! Entries are returned in key order.

use std::path::Path;

use nolitter_core::SettingValue;
use tracing::debug;

use crate::application::ports::{LoadError, SettingsFileLoader};

/// Reads TOML custom files from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlSettingsLoader;

impl TomlSettingsLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parses TOML text into `(identifier, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Parse`] if `content` is not valid TOML.  `path`
    /// is only used for the error message.
    pub fn parse(path: &Path, content: &str) -> Result<Vec<(String, SettingValue)>, LoadError> {
        let table: toml::Table = content.parse().map_err(|source: toml::de::Error| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(table
            .into_iter()
            .map(|(key, value)| (key, convert(value)))
            .collect())
    }
}

impl SettingsFileLoader for TomlSettingsLoader {
    fn load(&mut self, path: &Path) -> Result<Vec<(String, SettingValue)>, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries = Self::parse(path, &content)?;
        debug!(path = %path.display(), entries = entries.len(), "parsed settings file");
        Ok(entries)
    }
}

fn convert(value: toml::Value) -> SettingValue {
    match value {
        toml::Value::String(s) => SettingValue::String(s),
        toml::Value::Integer(i) => SettingValue::Integer(i),
        toml::Value::Float(f) => SettingValue::Float(f),
        toml::Value::Boolean(b) => SettingValue::Bool(b),
        toml::Value::Datetime(dt) => SettingValue::String(dt.to_string()),
        toml::Value::Array(items) => SettingValue::List(items.into_iter().map(convert).collect()),
        toml::Value::Table(table) => SettingValue::Alist(
            table
                .into_iter()
                .map(|(key, value)| (key, convert(value)))
                .collect(),
        ),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
