//! Domain entities for nolitter.
//!
//! This module contains pure logic with no infrastructure dependencies: it
//! never touches the file system, never reads environment variables, and
//! never talks to the host application.  Everything here can be unit-tested
//! on any platform without setup.
//!
//! Code in outer layers (the `nolitter` crate's application and
//! infrastructure modules) depends on the domain, but the domain never
//! depends on them.

/// Base directories and the path resolver.
pub mod path;

/// The value model assigned to host settings.
pub mod value;

/// Setting bindings: one row of the initialization table.
pub mod binding;

/// The two disjoint tracking groups.
pub mod tracking;
