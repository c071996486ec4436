//! Infrastructure layer for nolitter.
//!
//! Contains concrete adapters for the application ports plus option storage:
//!
//! - **`registry`** – [`InMemoryRegistry`], a [`SettingSink`] with default and
//!   local value layers, for hosts without a setting namespace of their own
//!   and for tests.
//! - **`loader`**   – [`TomlSettingsLoader`], a [`SettingsFileLoader`] for
//!   TOML custom files.
//! - **`storage`**  – TOML-backed [`Options`](storage::options::Options).
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `nolitter_core`, but MUST NOT be imported by the `application` layer.
//!
//! [`SettingSink`]: crate::application::ports::SettingSink
//! [`SettingsFileLoader`]: crate::application::ports::SettingsFileLoader

pub mod loader;
pub mod registry;
pub mod storage;

pub use loader::TomlSettingsLoader;
pub use registry::InMemoryRegistry;
