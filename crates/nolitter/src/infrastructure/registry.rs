//! In-memory setting registry.
//!
//! Each identifier has two layers:
//!
//! ```text
//! value(id) = local(id)  if set
//!           | default(id) otherwise
//! ```
//!
//! [`SettingSink::set_default`] writes the default layer and
//! [`SettingSink::set`] writes the local layer, so a global assignment is
//! visible everywhere the identifier has not been overridden locally.
//!
//! Assigning an identifier the registry has never seen simply defines it.

use std::collections::{HashMap, HashSet};

use nolitter_core::SettingValue;

use crate::application::ports::SettingSink;

#[derive(Debug, Clone, Default, PartialEq)]
struct Entry {
    default: Option<SettingValue>,
    local: Option<SettingValue>,
}

/// A [`SettingSink`] backed by a `HashMap`.
///
/// User options are either declared one by one, or every identifier counts
/// as one when the registry is [`permissive`](InMemoryRegistry::permissive).
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    entries: HashMap<String, Entry>,
    user_options: HashSet<String>,
    all_user_options: bool,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that reports every identifier as a user option.
    pub fn permissive() -> Self {
        Self {
            all_user_options: true,
            ..Self::default()
        }
    }

    /// Marks `id` as a user-facing configurable identifier.
    pub fn declare_user_option(&mut self, id: impl Into<String>) {
        self.user_options.insert(id.into());
    }

    /// The effective value: local if set, otherwise the default.
    pub fn value(&self, id: &str) -> Option<&SettingValue> {
        let entry = self.entries.get(id)?;
        entry.local.as_ref().or(entry.default.as_ref())
    }

    pub fn default_value(&self, id: &str) -> Option<&SettingValue> {
        self.entries.get(id)?.default.as_ref()
    }

    pub fn local_value(&self, id: &str) -> Option<&SettingValue> {
        self.entries.get(id)?.local.as_ref()
    }

    /// Whether `id` has been assigned in either layer.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of assigned identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingSink for InMemoryRegistry {
    fn set_default(&mut self, id: &str, value: SettingValue) {
        self.entries.entry(id.to_string()).or_default().default = Some(value);
    }

    fn set(&mut self, id: &str, value: SettingValue) {
        self.entries.entry(id.to_string()).or_default().local = Some(value);
    }

    fn is_user_option(&self, id: &str) -> bool {
        self.all_user_options || self.user_options.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_starts_empty() {
        let registry = InMemoryRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.value("anything"), None);
    }

    #[test]
    fn test_set_defines_unknown_identifier() {
        let mut registry = InMemoryRegistry::new();
        registry.set("not-yet-loaded-var", SettingValue::Bool(true));
        assert!(registry.contains("not-yet-loaded-var"));
        assert_eq!(registry.value("not-yet-loaded-var"), Some(&SettingValue::Bool(true)));
    }

    #[test]
    fn test_default_is_visible_when_no_local_value() {
        let mut registry = InMemoryRegistry::new();
        registry.set_default("savehist-file", "a".into());
        assert_eq!(registry.value("savehist-file"), Some(&SettingValue::from("a")));
        assert_eq!(registry.local_value("savehist-file"), None);
    }

    #[test]
    fn test_local_value_shadows_default() {
        // Arrange
        let mut registry = InMemoryRegistry::new();
        registry.set_default("fill-column", SettingValue::Integer(70));

        // Act
        registry.set("fill-column", SettingValue::Integer(100));

        // Assert
        assert_eq!(registry.value("fill-column"), Some(&SettingValue::Integer(100)));
        assert_eq!(registry.default_value("fill-column"), Some(&SettingValue::Integer(70)));
    }

    #[test]
    fn test_reassigning_overwrites_previous_value() {
        let mut registry = InMemoryRegistry::new();
        registry.set("x", SettingValue::Integer(1));
        registry.set("x", SettingValue::Integer(2));
        assert_eq!(registry.value("x"), Some(&SettingValue::Integer(2)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_declared_user_options_only() {
        let mut registry = InMemoryRegistry::new();
        registry.declare_user_option("recentf-save-file");
        assert!(registry.is_user_option("recentf-save-file"));
        assert!(!registry.is_user_option("internal-var"));
    }

    #[test]
    fn test_permissive_registry_treats_everything_as_user_option() {
        let registry = InMemoryRegistry::permissive();
        assert!(registry.is_user_option("whatever"));
    }
}
