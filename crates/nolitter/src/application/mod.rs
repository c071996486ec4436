//! Application layer: applying bindings and driving initialization.
//!
//! # What is the "application" layer? (for beginners)
//!
//! The application layer sits between the domain (`nolitter-core`: roots,
//! bindings, values) and the infrastructure (registries, file loaders, TOML
//! options).  Code here:
//!
//! - **Orchestrates** domain objects: evaluate a binding, assign the value,
//!   record it in a tracking group.
//! - **Depends on abstractions** ([`ports::SettingSink`],
//!   [`ports::SettingsFileLoader`]) rather than on a particular host.
//! - **Performs no file reads of its own** apart from the existence check on
//!   the custom file.
//!
//! # Sub-modules
//!
//! - **`ports`**         – Traits the host implements.
//! - **`apply_setting`** – Applies one binding.
//! - **`initialize`**    – Applies a whole table, then optionally loads the
//!   custom file.

pub mod apply_setting;
pub mod initialize;
pub mod ports;
