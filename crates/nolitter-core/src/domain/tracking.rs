//! The two tracking groups.
//!
//! Every identifier nolitter assigns may be recorded in one of two groups so a
//! host can later list "which settings were diverted to etc/" and "which to
//! var/".  The groups are write-only accumulators during initialization and
//! are never consulted when resolving paths.
//!
//! The groups are disjoint: an identifier recorded in one group is refused by
//! the other.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::path::BaseDir;

/// One of the two tracking groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Group {
    /// Settings naming files under the etc root.
    ConfigFiles,
    /// Settings naming files under the var root.
    PersistentFiles,
}

impl Group {
    /// The group fed by bindings on `base`.
    pub fn for_base(base: BaseDir) -> Self {
        match base {
            BaseDir::Etc => Group::ConfigFiles,
            BaseDir::Var => Group::PersistentFiles,
        }
    }

    /// Stable name, suitable as a host-side group identifier.
    pub fn name(self) -> &'static str {
        match self {
            Group::ConfigFiles => "nolitter-etc-files",
            Group::PersistentFiles => "nolitter-var-files",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Group::ConfigFiles => "Configuration files diverted into the etc directory.",
            Group::PersistentFiles => "Persistent data files diverted into the var directory.",
        }
    }

    fn other(self) -> Self {
        match self {
            Group::ConfigFiles => Group::PersistentFiles,
            Group::PersistentFiles => Group::ConfigFiles,
        }
    }
}

/// Outcome of [`TrackingGroups::register`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The identifier was recorded for the first time.
    Added,
    /// The identifier was already in the requested group.
    AlreadyPresent,
    /// The identifier is recorded in the named other group and was not added.
    Conflict(Group),
}

/// Two disjoint, ordered sets of setting identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackingGroups {
    config_files: BTreeSet<String>,
    persistent_files: BTreeSet<String>,
}

impl TrackingGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `id` in `group` unless it already belongs to the other group.
    pub fn register(&mut self, group: Group, id: &str) -> Registration {
        if self.set(group.other()).contains(id) {
            return Registration::Conflict(group.other());
        }
        if self.set_mut(group).insert(id.to_string()) {
            Registration::Added
        } else {
            Registration::AlreadyPresent
        }
    }

    /// Returns the group `id` was recorded in, if any.
    pub fn group_of(&self, id: &str) -> Option<Group> {
        [Group::ConfigFiles, Group::PersistentFiles]
            .into_iter()
            .find(|g| self.set(*g).contains(id))
    }

    /// Members of `group` in lexical order.
    pub fn members(&self, group: Group) -> impl Iterator<Item = &str> {
        self.set(group).iter().map(String::as_str)
    }

    /// Total number of tracked identifiers across both groups.
    pub fn len(&self) -> usize {
        self.config_files.len() + self.persistent_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn set(&self, group: Group) -> &BTreeSet<String> {
        match group {
            Group::ConfigFiles => &self.config_files,
            Group::PersistentFiles => &self.persistent_files,
        }
    }

    fn set_mut(&mut self, group: Group) -> &mut BTreeSet<String> {
        match group {
            Group::ConfigFiles => &mut self.config_files,
            Group::PersistentFiles => &mut self.persistent_files,
        }
    }
}
