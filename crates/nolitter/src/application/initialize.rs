//! Initialization driver: applies a whole table, then finishes up.
//!
//! ```text
//! initialize()
//!  ├─ apply every binding, in table order   (SettingsApplier)
//!  ├─ build the two group containers        (if define_groups)
//!  └─ load the custom file                  (if load_custom_file and it exists)
//! ```
//!
//! Table order only matters for literals that embed a resolved path; those
//! are built from the same [`Roots`] before the table is handed in.
//!
//! # Re-initialization
//!
//! Running initialization again recomputes and reassigns every value.  It
//! overrides whatever a subsystem stored in the meantime, unconditionally.

use std::path::PathBuf;

use nolitter_core::{default_bindings, Group, Roots, SettingBinding, SettingValue, TrackingGroups};
use thiserror::Error;
use tracing::{debug, info};

use super::apply_setting::{ApplyOptions, AssignMode, SettingsApplier};
use super::ports::{LoadError, SettingSink, SettingsFileLoader};

/// Setting whose value names the custom file, unless configured otherwise.
pub const DEFAULT_CUSTOM_FILE_SETTING: &str = "custom-file";

/// Error type for initialization.
#[derive(Debug, Error)]
pub enum InitError {
    /// The custom file exists but the loader failed on it.
    #[error("failed to load custom file {path}: {source}")]
    CustomFileLoad {
        path: PathBuf,
        #[source]
        source: LoadError,
    },
}

/// Flags read once at the start of initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitSettings {
    pub mode: AssignMode,
    pub track: bool,
    /// Produce the two [`GroupContainer`]s in the report.
    pub define_groups: bool,
    /// Load the custom file after the table is applied, if it exists.
    pub load_custom_file: bool,
    /// Identifier whose assigned value is the custom file path.
    pub custom_file_setting: String,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            mode: AssignMode::default(),
            track: true,
            define_groups: false,
            load_custom_file: false,
            custom_file_setting: DEFAULT_CUSTOM_FILE_SETTING.to_string(),
        }
    }
}

impl InitSettings {
    fn apply_options(&self) -> ApplyOptions {
        ApplyOptions {
            mode: self.mode,
            track: self.track,
        }
    }
}

/// Metadata holder for one tracking group.  Carries no behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupContainer {
    pub group: Group,
    pub name: &'static str,
    pub description: &'static str,
    /// Identifiers recorded in the group, in lexical order.
    pub members: Vec<String>,
}

impl GroupContainer {
    fn snapshot(group: Group, tracking: &TrackingGroups) -> Self {
        Self {
            group,
            name: group.name(),
            description: group.description(),
            members: tracking.members(group).map(str::to_string).collect(),
        }
    }
}

/// Result of a successful initialization.
#[derive(Debug, Clone, PartialEq)]
pub struct InitReport {
    /// Every assignment made from the table, in table order.
    pub assigned: Vec<(String, SettingValue)>,
    pub tracking: TrackingGroups,
    /// Empty unless `define_groups` was set.
    pub groups: Vec<GroupContainer>,
    /// The custom file, if one was loaded.
    pub custom_file_loaded: Option<PathBuf>,
}

impl InitReport {
    /// The last value assigned to `id` by the table.
    pub fn value(&self, id: &str) -> Option<&SettingValue> {
        self.assigned
            .iter()
            .rev()
            .find(|(name, _)| name == id)
            .map(|(_, value)| value)
    }
}

/// Applies `table` to `sink`, then optionally loads the custom file.
///
/// # Errors
///
/// Returns [`InitError::CustomFileLoad`] if the custom file exists and the
/// loader fails.  Assignments made before the failure are not rolled back.
pub fn initialize<S, L>(
    settings: &InitSettings,
    roots: &Roots,
    table: &[SettingBinding],
    sink: &mut S,
    loader: &mut L,
) -> Result<InitReport, InitError>
where
    S: SettingSink + ?Sized,
    L: SettingsFileLoader + ?Sized,
{
    info!(
        etc = %roots.etc().display(),
        var = %roots.var().display(),
        bindings = table.len(),
        "diverting settings"
    );

    let mut applier = SettingsApplier::new(roots, sink, settings.apply_options());
    let assigned: Vec<(String, SettingValue)> = table
        .iter()
        .map(|binding| (binding.id.clone(), applier.apply(binding)))
        .collect();

    let mut report = InitReport {
        assigned,
        tracking: applier.tracking().clone(),
        groups: Vec::new(),
        custom_file_loaded: None,
    };

    if settings.define_groups {
        report.groups = [Group::ConfigFiles, Group::PersistentFiles]
            .into_iter()
            .map(|group| GroupContainer::snapshot(group, &report.tracking))
            .collect();
    }

    if settings.load_custom_file {
        if let Some(path) = custom_file_path(report.value(&settings.custom_file_setting)) {
            if path.is_file() {
                let entries = loader
                    .load(&path)
                    .map_err(|source| InitError::CustomFileLoad {
                        path: path.clone(),
                        source,
                    })?;
                info!(path = %path.display(), settings = entries.len(), "loaded custom file");
                for (id, value) in entries {
                    applier.assign(&id, value);
                }
                report.custom_file_loaded = Some(path);
            } else {
                debug!(path = %path.display(), "custom file absent; skipping");
            }
        } else {
            debug!(
                setting = %settings.custom_file_setting,
                "custom file setting not assigned by the table; skipping"
            );
        }
    }

    Ok(report)
}

/// Accepts a resolved path or a plain string naming a file.
fn custom_file_path(value: Option<&SettingValue>) -> Option<PathBuf> {
    match value? {
        SettingValue::Path(p) => Some(p.clone()),
        SettingValue::String(s) if !s.is_empty() => Some(PathBuf::from(s)),
        _ => None,
    }
}

/// Roots, flags and table bundled for the common case.
#[derive(Debug, Clone)]
pub struct Initializer {
    settings: InitSettings,
    roots: Roots,
    table: Vec<SettingBinding>,
}

impl Initializer {
    /// Uses the built-in [`default_bindings`] table.
    pub fn new(settings: InitSettings, roots: Roots) -> Self {
        let table = default_bindings(&roots);
        Self {
            settings,
            roots,
            table,
        }
    }

    /// Appends bindings after the current table.
    pub fn extend(&mut self, bindings: impl IntoIterator<Item = SettingBinding>) {
        self.table.extend(bindings);
    }

    pub fn roots(&self) -> &Roots {
        &self.roots
    }

    pub fn table(&self) -> &[SettingBinding] {
        &self.table
    }

    /// Runs [`initialize`] with the bundled table.
    ///
    /// # Errors
    ///
    /// See [`initialize`].
    pub fn run<S, L>(&self, sink: &mut S, loader: &mut L) -> Result<InitReport, InitError>
    where
        S: SettingSink + ?Sized,
        L: SettingsFileLoader + ?Sized,
    {
        initialize(&self.settings, &self.roots, &self.table, sink, loader)
    }

    /// The managed path `fragment` under the etc root.
    pub fn expand_etc(&self, fragment: &str) -> PathBuf {
        self.roots.expand_etc(fragment)
    }

    /// The managed path `fragment` under the var root.
    pub fn expand_var(&self, fragment: &str) -> PathBuf {
        self.roots.expand_var(fragment)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
