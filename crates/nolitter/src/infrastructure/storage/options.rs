//! TOML-based options for nolitter.
//!
//! Options are read once, before initialization.  They live next to the
//! roots they describe, in the platform-appropriate application directory:
//! - Windows:  `%APPDATA%\<app>\nolitter.toml`
//! - Linux:    `~/.config/<app>/nolitter.toml`
//! - macOS:    `~/Library/Application Support/<app>/nolitter.toml`
//!
//! Example:
//!
//! ```toml
//! [directories]
//! var = "/var/cache/editor/"
//!
//! [init]
//! assign_globally = true
//! load_custom_file = true
//! divert_backups = true
//! ```
//!
//! Every field has a serde default, so an empty or partial file is valid and
//! the application works on first run before any file exists.

use std::path::{Path, PathBuf};

use nolitter_core::{backup_bindings, resolve, Roots};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::application::apply_setting::AssignMode;
use crate::application::initialize::{InitSettings, Initializer, DEFAULT_CUSTOM_FILE_SETTING};

/// File name of the options file inside the application directory.
pub const OPTIONS_FILE_NAME: &str = "nolitter.toml";

/// Error type for options operations.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The platform application directory could not be determined.
    #[error("could not determine platform application directory")]
    NoPlatformAppDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing options at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse options TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Options schema types ──────────────────────────────────────────────────────

/// Top-level options stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Options {
    #[serde(default)]
    pub directories: DirectoryOptions,
    #[serde(default)]
    pub init: InitOptions,
}

/// Root overrides.  Anything left unset falls back to the application
/// directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryOptions {
    /// Application directory the default roots are placed under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_dir: Option<PathBuf>,
    /// Overrides the etc root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etc: Option<PathBuf>,
    /// Overrides the var root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub var: Option<PathBuf>,
}

/// Initialization flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InitOptions {
    /// Assign defaults instead of current-context values.
    #[serde(default)]
    pub assign_globally: bool,
    /// Record user options in the tracking groups.
    #[serde(default = "default_true")]
    pub track_settings: bool,
    /// Report the two group containers.
    #[serde(default)]
    pub define_groups: bool,
    /// Load the custom file after the table, if it exists.
    #[serde(default)]
    pub load_custom_file: bool,
    /// Also divert auto-save files, backups and undo history.
    #[serde(default)]
    pub divert_backups: bool,
    /// Setting that names the custom file.
    #[serde(default = "default_custom_file_setting")]
    pub custom_file_setting: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_true() -> bool {
    true
}
fn default_custom_file_setting() -> String {
    DEFAULT_CUSTOM_FILE_SETTING.to_string()
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            assign_globally: false,
            track_settings: default_true(),
            define_groups: false,
            load_custom_file: false,
            divert_backups: false,
            custom_file_setting: default_custom_file_setting(),
        }
    }
}

impl Options {
    /// Parses options from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Parse`] if the TOML is malformed.
    pub fn from_toml_str(content: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(content)?)
    }

    /// Roots for a given application directory, with overrides applied.
    pub fn roots_under(&self, app_dir: &Path) -> Roots {
        let etc = self
            .directories
            .etc
            .clone()
            .unwrap_or_else(|| resolve(app_dir, "etc/"));
        let var = self
            .directories
            .var
            .clone()
            .unwrap_or_else(|| resolve(app_dir, "var/"));
        Roots::new(etc, var)
    }

    /// Roots with overrides applied.  The application directory is
    /// `directories.app_dir` or, failing that, [`default_app_dir`].
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::NoPlatformAppDir`] only when a root is not
    /// overridden and no application directory can be determined.
    pub fn resolve_roots(&self, app_name: &str) -> Result<Roots, OptionsError> {
        if let (Some(etc), Some(var)) = (&self.directories.etc, &self.directories.var) {
            return Ok(Roots::new(etc.clone(), var.clone()));
        }
        let app_dir = match &self.directories.app_dir {
            Some(dir) => dir.clone(),
            None => default_app_dir(app_name)?,
        };
        Ok(self.roots_under(&app_dir))
    }

    /// Flags for the initialization driver.
    pub fn init_settings(&self) -> InitSettings {
        InitSettings {
            mode: AssignMode::from_flag(self.init.assign_globally),
            track: self.init.track_settings,
            define_groups: self.init.define_groups,
            load_custom_file: self.init.load_custom_file,
            custom_file_setting: self.init.custom_file_setting.clone(),
        }
    }

    /// Builds an [`Initializer`] with the default table, plus the backup
    /// bindings when `divert_backups` is set.
    ///
    /// # Errors
    ///
    /// See [`Options::resolve_roots`].
    pub fn initializer(&self, app_name: &str) -> Result<Initializer, OptionsError> {
        let roots = self.resolve_roots(app_name)?;
        let backups = self.init.divert_backups.then(|| backup_bindings(&roots));
        let mut initializer = Initializer::new(self.init_settings(), roots);
        if let Some(bindings) = backups {
            initializer.extend(bindings);
        }
        Ok(initializer)
    }
}

// ── Options repository ────────────────────────────────────────────────────────

/// Determines the platform-appropriate application directory for `app_name`.
///
/// # Errors
///
/// Returns [`OptionsError::NoPlatformAppDir`] when the platform base
/// directory cannot be determined from the environment.
pub fn default_app_dir(app_name: &str) -> Result<PathBuf, OptionsError> {
    platform_config_dir()
        .map(|base| base.join(app_name))
        .ok_or(OptionsError::NoPlatformAppDir)
}

/// Resolves the full path to the options file.
///
/// # Errors
///
/// Returns [`OptionsError::NoPlatformAppDir`] if the base directory cannot be
/// determined.
pub fn options_file_path(app_name: &str) -> Result<PathBuf, OptionsError> {
    Ok(default_app_dir(app_name)?.join(OPTIONS_FILE_NAME))
}

/// Loads options from `path`, returning `Options::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`OptionsError::Io`] for file-system errors other than "not found",
/// and [`OptionsError::Parse`] if the TOML is malformed.
pub fn load_options_from(path: &Path) -> Result<Options, OptionsError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Options::from_toml_str(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no options file; using defaults");
            Ok(Options::default())
        }
        Err(e) => Err(OptionsError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Loads options for `app_name` from the platform application directory.
///
/// # Errors
///
/// See [`options_file_path`] and [`load_options_from`].
pub fn load_options(app_name: &str) -> Result<Options, OptionsError> {
    load_options_from(&options_file_path(app_name)?)
}

/// Resolves the platform config base directory without the application
/// subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME")
            .map(|h| PathBuf::from(h).join("Library").join("Application Support"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
