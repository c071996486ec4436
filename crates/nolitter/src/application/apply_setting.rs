//! SettingsApplier: evaluates one binding and assigns it to the host.
//!
//! For each [`SettingBinding`] the applier:
//!
//! 1. Computes the final value.  Path fragments are resolved against the
//!    binding's root; literals are used as-is.
//! 2. Assigns it through the [`SettingSink`], either as the identifier's
//!    default ([`AssignMode::Global`]) or in the current context only
//!    ([`AssignMode::Local`]).
//! 3. If tracking is on and the host reports the identifier as a user option,
//!    records it in the tracking group that matches the binding's root.
//!
//! Applying the same binding twice leaves the host and the tracking groups in
//! the same state as applying it once.

use nolitter_core::{Registration, Roots, SettingBinding, SettingValue, TrackingGroups};
use tracing::{debug, warn};

use super::ports::SettingSink;

/// Where an assigned value becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssignMode {
    /// Set the identifier's default value.
    Global,
    /// Set the identifier in the current context only.
    #[default]
    Local,
}

impl AssignMode {
    /// `Global` when `assign_globally` is set, `Local` otherwise.
    pub fn from_flag(assign_globally: bool) -> Self {
        if assign_globally {
            AssignMode::Global
        } else {
            AssignMode::Local
        }
    }
}

/// Per-run applier behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyOptions {
    pub mode: AssignMode,
    /// Record user options in the tracking groups.
    pub track: bool,
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            mode: AssignMode::default(),
            track: true,
        }
    }
}

/// Applies bindings against fixed roots and a host sink.
pub struct SettingsApplier<'a, S: SettingSink + ?Sized> {
    roots: &'a Roots,
    sink: &'a mut S,
    options: ApplyOptions,
    tracking: TrackingGroups,
}

impl<'a, S: SettingSink + ?Sized> SettingsApplier<'a, S> {
    pub fn new(roots: &'a Roots, sink: &'a mut S, options: ApplyOptions) -> Self {
        Self {
            roots,
            sink,
            options,
            tracking: TrackingGroups::new(),
        }
    }

    /// Evaluates `binding`, assigns the result, and returns it.
    pub fn apply(&mut self, binding: &SettingBinding) -> SettingValue {
        let value = binding.evaluate(self.roots);
        self.assign(&binding.id, value.clone());
        debug!(setting = %binding.id, base = %binding.base, value = ?value, "assigned setting");

        if self.options.track && self.sink.is_user_option(&binding.id) {
            let group = binding.group();
            if let Registration::Conflict(existing) = self.tracking.register(group, &binding.id) {
                warn!(
                    setting = %binding.id,
                    requested = group.name(),
                    existing = existing.name(),
                    "setting already tracked in the other group; keeping the first"
                );
            }
        }

        value
    }

    /// Assigns `value` to `id` according to the assignment mode, without
    /// resolution or tracking.
    pub fn assign(&mut self, id: &str, value: SettingValue) {
        match self.options.mode {
            AssignMode::Global => self.sink.set_default(id, value),
            AssignMode::Local => self.sink.set(id, value),
        }
    }

    pub fn tracking(&self) -> &TrackingGroups {
        &self.tracking
    }

    /// Consumes the applier, returning the accumulated tracking groups.
    pub fn into_tracking(self) -> TrackingGroups {
        self.tracking
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
