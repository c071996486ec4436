//! # nolitter-core
//!
//! Shared library for nolitter containing the path resolver, the setting
//! binding model, the tracking groups, and the built-in binding tables.
//!
//! This crate performs no file-system I/O and knows nothing about the host
//! application whose settings are being diverted.
//!
//! # Architecture overview (for beginners)
//!
//! Editors and similar applications tend to drop dozens of small files into
//! the user's home or application directory: history lists, caches, bookmark
//! files, backup copies.  nolitter redirects all of them into exactly two
//! directories:
//!
//! - the **etc** root, for configuration files the user may want to keep
//!   under version control;
//! - the **var** root, for persistent data the application writes on its own.
//!
//! This crate (`nolitter-core`) is the pure foundation.  It defines:
//!
//! - **`domain`** – [`Roots`] and the resolver that turns a relative fragment
//!   into an absolute path, the [`SettingValue`] model, [`SettingBinding`]s,
//!   and the two [`TrackingGroups`].
//!
//! - **`table`** – The static table of well-known settings and the files they
//!   should point at.  This is data, not logic.

pub mod domain;
pub mod table;

// Re-export the most-used types at the crate root so callers can write
// `nolitter_core::Roots` instead of `nolitter_core::domain::path::Roots`.
pub use domain::binding::{SettingBinding, ValueSpec};
pub use domain::path::{
    normalize_fragment, normalize_fragment_for, resolve, BaseDir, Platform, Roots,
};
pub use domain::tracking::{Group, Registration, TrackingGroups};
pub use domain::value::SettingValue;
pub use table::{backup_bindings, default_bindings};
