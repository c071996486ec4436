//! Host-neutral values assigned to settings.
//!
//! A host application stores settings in its own representation.  nolitter
//! only needs a small vocabulary to describe what it assigns: scalars, paths,
//! lists, and association lists (ordered key/value pairs such as
//! `[(".", "/home/u/.app/var/backup/")]`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A value assigned to a host setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingValue {
    /// The empty value (`nil`, `null`, unset).
    Nil,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// An absolute path produced by the resolver.
    Path(PathBuf),
    List(Vec<SettingValue>),
    /// Ordered key/value pairs.  Keys are usually match patterns.
    Alist(Vec<(String, SettingValue)>),
}

impl SettingValue {
    /// Builds an association list from `(key, value)` pairs.
    pub fn alist<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<SettingValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        SettingValue::Alist(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the path if this value is a [`SettingValue::Path`].
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            SettingValue::Path(p) => Some(p),
            _ => None,
        }
    }

    /// Looks up `key` in an association list.
    pub fn assoc(&self, key: &str) -> Option<&SettingValue> {
        match self {
            SettingValue::Alist(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Bool(v)
    }
}

impl From<i64> for SettingValue {
    fn from(v: i64) -> Self {
        SettingValue::Integer(v)
    }
}

impl From<f64> for SettingValue {
    fn from(v: f64) -> Self {
        SettingValue::Float(v)
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::String(v.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        SettingValue::String(v)
    }
}

impl From<PathBuf> for SettingValue {
    fn from(v: PathBuf) -> Self {
        SettingValue::Path(v)
    }
}

impl From<Vec<SettingValue>> for SettingValue {
    fn from(v: Vec<SettingValue>) -> Self {
        SettingValue::List(v)
    }
}
