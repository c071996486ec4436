//! Setting bindings: one row of the initialization table.
//!
//! A binding names a host setting, describes the value it should receive, and
//! selects the root a path fragment is resolved against.
//!
//! # Path fragments versus literals
//!
//! Most bindings carry a relative fragment such as `"recentf.el"`; the final
//! value is only known once it has been joined onto a root.  Some settings
//! need a structured value instead (for example an association list mapping a
//! match pattern to a directory).  Those are stored as [`ValueSpec::Literal`]
//! and are assigned as-is.  Any path embedded in a literal is resolved by
//! whoever builds the table, before the binding is ever applied.

use serde::{Deserialize, Serialize};

use super::path::{BaseDir, Roots};
use super::tracking::Group;
use super::value::SettingValue;

/// How the final value of a binding is obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSpec {
    /// A relative fragment resolved against the binding's root.
    Path(String),
    /// A value assigned unchanged.
    Literal(SettingValue),
}

/// One `(identifier, value specification, base directory)` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingBinding {
    /// Name of the host setting, e.g. `"recentf-save-file"`.
    pub id: String,
    pub spec: ValueSpec,
    /// Root used for path fragments; also selects the tracking group.
    pub base: BaseDir,
}

impl SettingBinding {
    /// A fragment resolved under the etc root.
    pub fn etc(id: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            spec: ValueSpec::Path(fragment.into()),
            base: BaseDir::Etc,
        }
    }

    /// A fragment resolved under the var root.
    pub fn var(id: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            spec: ValueSpec::Path(fragment.into()),
            base: BaseDir::Var,
        }
    }

    /// A literal value.  `base` is not used for resolution, only for grouping.
    pub fn literal(id: impl Into<String>, value: SettingValue, base: BaseDir) -> Self {
        Self {
            id: id.into(),
            spec: ValueSpec::Literal(value),
            base,
        }
    }

    /// The tracking group this binding's identifier belongs to.
    pub fn group(&self) -> Group {
        Group::for_base(self.base)
    }

    /// Computes the final value: fragments are resolved, literals are cloned.
    pub fn evaluate(&self, roots: &Roots) -> SettingValue {
        match &self.spec {
            ValueSpec::Path(fragment) => SettingValue::Path(roots.resolve(self.base, fragment)),
            ValueSpec::Literal(value) => value.clone(),
        }
    }
}
