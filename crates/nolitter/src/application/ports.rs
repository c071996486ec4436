//! Traits through which the application layer reaches the host.
//!
//! # Testability
//!
//! Both traits are mocked with `mockall` in unit tests, so the applier and
//! the driver can be verified without a real host.

use std::path::{Path, PathBuf};

use nolitter_core::SettingValue;
use thiserror::Error;

/// Write access to the host's namespace of named settings.
///
/// Assignment has no existence precondition: an identifier that the host has
/// never seen becomes defined with the assigned value.  Subsystems that own
/// these identifiers typically load later and pick the value up.
#[cfg_attr(test, mockall::automock)]
pub trait SettingSink {
    /// Sets the identifier's default value, visible to every context that has
    /// not overridden it locally.
    fn set_default(&mut self, id: &str, value: SettingValue);

    /// Sets the identifier in the current context only.
    fn set(&mut self, id: &str, value: SettingValue);

    /// Whether `id` is a user-facing configurable identifier.  Only those are
    /// recorded in tracking groups.
    fn is_user_option(&self, id: &str) -> bool;
}

/// Error type for settings-file loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("I/O error reading settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid TOML.
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Loads a file of user settings.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsFileLoader {
    /// Reads `path` and returns the `(identifier, value)` pairs it defines, in
    /// the order they should be assigned.
    fn load(&mut self, path: &Path) -> Result<Vec<(String, SettingValue)>, LoadError>;
}
