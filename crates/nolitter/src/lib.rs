//! nolitter library entry point.
//!
//! Applies [`nolitter_core`] bindings to a host application's setting
//! namespace.  The crate is split the same way as the rest of the workspace:
//!
//! - **`application`** – the settings applier and the initialization driver.
//!   They talk to the host only through the [`application::ports`] traits.
//! - **`infrastructure`** – concrete adapters: an in-memory setting registry,
//!   a TOML settings-file loader, and TOML-backed [`Options`].
//!
//! # Example
//!
//! ```rust
//! use nolitter::infrastructure::{InMemoryRegistry, TomlSettingsLoader};
//! use nolitter::Options;
//!
//! let mut options = Options::default();
//! options.directories.app_dir = Some(std::env::temp_dir().join("nolitter-doc"));
//!
//! let initializer = options.initializer("nolitter-doc").unwrap();
//! let mut registry = InMemoryRegistry::new();
//! let report = initializer
//!     .run(&mut registry, &mut TomlSettingsLoader::new())
//!     .unwrap();
//! assert!(report.value("recentf-save-file").is_some());
//! ```

pub mod application;
pub mod infrastructure;

pub use application::apply_setting::{ApplyOptions, AssignMode, SettingsApplier};
pub use application::initialize::{
    initialize, GroupContainer, InitError, InitReport, InitSettings, Initializer,
};
pub use application::ports::{LoadError, SettingSink, SettingsFileLoader};
pub use infrastructure::storage::options::{load_options, Options, OptionsError};
