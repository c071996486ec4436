//! Storage infrastructure: option file persistence.
//!
//! The `options` sub-module handles:
//!
//! - Resolving the platform application directory the default roots live in.
//! - Reading the TOML options file, with defaults for anything missing.
//! - Writing options back to disk.

pub mod options;
