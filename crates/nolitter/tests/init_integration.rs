//! Integration tests for the initialization pipeline.
//!
//! These tests exercise nolitter end-to-end: `Options` + `initialize` +
//! `InMemoryRegistry` + `TomlSettingsLoader`, with real files in a temp
//! directory where a custom file is involved.

use std::path::{Path, PathBuf};

use nolitter::infrastructure::{InMemoryRegistry, TomlSettingsLoader};
use nolitter::{initialize, InitError, InitSettings, Options, SettingSink};
use nolitter_core::{
    default_bindings, resolve, BaseDir, Group, Roots, SettingBinding, SettingValue,
};
use uuid::Uuid;

fn temp_app_dir() -> PathBuf {
    std::env::temp_dir().join(format!("nolitter_it_{}", Uuid::new_v4()))
}

fn options_for(app_dir: &Path, extra: &str) -> Options {
    let mut options = Options::from_toml_str(extra).expect("options toml");
    options.directories.app_dir = Some(app_dir.to_path_buf());
    options
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[cfg(unix)]
#[test]
fn test_custom_file_binding_resolves_under_config_root() {
    let roots = Roots::new("/home/u/.app/etc/", "/home/u/.app/var/");
    let table = vec![SettingBinding::etc("custom-file", "custom/custom-file.el")];
    let mut registry = InMemoryRegistry::new();

    initialize(
        &InitSettings::default(),
        &roots,
        &table,
        &mut registry,
        &mut TomlSettingsLoader::new(),
    )
    .expect("initialize");

    assert_eq!(
        registry.value("custom-file"),
        Some(&SettingValue::Path(PathBuf::from(
            "/home/u/.app/etc/custom/custom-file.el"
        )))
    );
}

#[cfg(unix)]
#[test]
fn test_recentf_binding_resolves_under_data_root() {
    let roots = Roots::new("/home/u/.app/etc/", "/home/u/.app/var/");
    let table = vec![SettingBinding::var("recentf-save-file", "recentf.el")];
    let mut registry = InMemoryRegistry::new();

    initialize(
        &InitSettings::default(),
        &roots,
        &table,
        &mut registry,
        &mut TomlSettingsLoader::new(),
    )
    .expect("initialize");

    assert_eq!(
        registry.value("recentf-save-file"),
        Some(&SettingValue::Path(PathBuf::from("/home/u/.app/var/recentf.el")))
    );
}

#[cfg(unix)]
#[test]
fn test_structured_literal_is_assigned_with_embedded_resolved_path() {
    // Arrange: the literal is built from the roots before the table runs
    let roots = Roots::new("/home/u/.app/etc/", "/home/u/.app/var/");
    let table = vec![SettingBinding::literal(
        "backup-directory-alist",
        SettingValue::alist([(".", resolve(roots.var(), "backups/"))]),
        BaseDir::Var,
    )];
    let mut registry = InMemoryRegistry::new();

    // Act
    initialize(
        &InitSettings::default(),
        &roots,
        &table,
        &mut registry,
        &mut TomlSettingsLoader::new(),
    )
    .expect("initialize");

    // Assert
    assert_eq!(
        registry.value("backup-directory-alist"),
        Some(&SettingValue::Alist(vec![(
            ".".to_string(),
            SettingValue::Path(PathBuf::from("/home/u/.app/var/backups/"))
        )]))
    );
}

#[test]
fn test_missing_custom_file_is_not_loaded_and_not_an_error() {
    let app_dir = temp_app_dir();
    let options = options_for(&app_dir, "[init]\nload_custom_file = true\n");
    let initializer = options.initializer("unused").expect("initializer");
    let mut registry = InMemoryRegistry::new();

    let report = initializer
        .run(&mut registry, &mut TomlSettingsLoader::new())
        .expect("missing custom file must not fail initialization");

    assert_eq!(report.custom_file_loaded, None);
    assert!(!app_dir.exists(), "initialization must not create directories");
}

// ── Custom file loading ───────────────────────────────────────────────────────

#[test]
fn test_existing_custom_file_is_loaded_into_registry() {
    // Arrange
    let app_dir = temp_app_dir();
    let options = options_for(&app_dir, "[init]\nload_custom_file = true\n");
    let initializer = options.initializer("unused").expect("initializer");
    let custom = initializer.expand_etc("custom.toml");
    std::fs::create_dir_all(initializer.roots().etc()).unwrap();
    std::fs::write(&custom, "fill-column = 88\nuser-full-name = \"Ada\"\n").unwrap();
    let mut registry = InMemoryRegistry::new();

    // Act
    let report = initializer
        .run(&mut registry, &mut TomlSettingsLoader::new())
        .expect("initialize");

    // Assert
    assert_eq!(report.custom_file_loaded, Some(custom));
    assert_eq!(registry.value("fill-column"), Some(&SettingValue::Integer(88)));
    assert_eq!(registry.value("user-full-name"), Some(&SettingValue::from("Ada")));

    // Cleanup
    std::fs::remove_dir_all(&app_dir).ok();
}

#[test]
fn test_default_table_custom_file_is_readable_by_toml_loader() {
    // Arrange: write to whatever path the built-in table assigns
    let app_dir = temp_app_dir();
    let options = options_for(&app_dir, "[init]\nload_custom_file = true\n");
    let initializer = options.initializer("unused").expect("initializer");
    let custom = initializer
        .table()
        .iter()
        .find(|b| b.id == "custom-file")
        .map(|b| b.evaluate(initializer.roots()))
        .and_then(|v| v.as_path().map(Path::to_path_buf))
        .expect("default table binds custom-file to a path");
    std::fs::create_dir_all(custom.parent().unwrap()).unwrap();
    std::fs::write(&custom, "fill-column = 80\n[display-buffer-alist]\n\"*Help*\" = \"bottom\"\n")
        .unwrap();
    let mut registry = InMemoryRegistry::new();

    // Act
    let report = initializer
        .run(&mut registry, &mut TomlSettingsLoader::new())
        .expect("the default custom file must parse with the bundled loader");

    // Assert
    assert_eq!(custom.extension().and_then(|e| e.to_str()), Some("toml"));
    assert_eq!(report.custom_file_loaded, Some(custom));
    assert_eq!(registry.value("fill-column"), Some(&SettingValue::Integer(80)));
    assert_eq!(
        registry.value("display-buffer-alist").and_then(|v| v.assoc("*Help*")),
        Some(&SettingValue::from("bottom"))
    );

    std::fs::remove_dir_all(&app_dir).ok();
}

#[test]
fn test_malformed_custom_file_aborts_initialization() {
    // Arrange
    let app_dir = temp_app_dir();
    let options = options_for(&app_dir, "[init]\nload_custom_file = true\n");
    let initializer = options.initializer("unused").expect("initializer");
    let custom = initializer.expand_etc("custom.toml");
    std::fs::create_dir_all(initializer.roots().etc()).unwrap();
    std::fs::write(&custom, "[[[ not valid toml").unwrap();
    let mut registry = InMemoryRegistry::new();

    // Act
    let result = initializer.run(&mut registry, &mut TomlSettingsLoader::new());

    // Assert
    match result {
        Err(InitError::CustomFileLoad { path, .. }) => assert_eq!(path, custom),
        other => panic!("expected CustomFileLoad, got {other:?}"),
    }

    std::fs::remove_dir_all(&app_dir).ok();
}

// ── Assignment mode ───────────────────────────────────────────────────────────

#[test]
fn test_assign_globally_writes_defaults_only() {
    let app_dir = temp_app_dir();
    let options = options_for(&app_dir, "[init]\nassign_globally = true\n");
    let initializer = options.initializer("unused").expect("initializer");
    let mut registry = InMemoryRegistry::new();

    initializer
        .run(&mut registry, &mut TomlSettingsLoader::new())
        .expect("initialize");

    assert!(registry.default_value("savehist-file").is_some());
    assert_eq!(registry.local_value("savehist-file"), None);
}

#[test]
fn test_local_assignment_shadows_existing_default() {
    // Arrange: a subsystem already installed its own default
    let app_dir = temp_app_dir();
    let options = options_for(&app_dir, "");
    let initializer = options.initializer("unused").expect("initializer");
    let mut registry = InMemoryRegistry::new();
    registry.set_default("savehist-file", SettingValue::from("~/.savehist"));

    // Act
    initializer
        .run(&mut registry, &mut TomlSettingsLoader::new())
        .expect("initialize");

    // Assert
    assert_eq!(
        registry.value("savehist-file"),
        Some(&SettingValue::Path(initializer.expand_var("savehist.el")))
    );
    assert_eq!(
        registry.default_value("savehist-file"),
        Some(&SettingValue::from("~/.savehist"))
    );
}

// ── Re-initialization and tracking ────────────────────────────────────────────

#[test]
fn test_reinitialization_overrides_subsystem_values() {
    // Arrange
    let app_dir = temp_app_dir();
    let initializer = options_for(&app_dir, "").initializer("unused").expect("initializer");
    let mut registry = InMemoryRegistry::new();
    let mut loader = TomlSettingsLoader::new();
    let first = initializer.run(&mut registry, &mut loader).expect("first run");
    registry.set("recentf-save-file", SettingValue::from("/elsewhere/recentf"));

    // Act
    let second = initializer.run(&mut registry, &mut loader).expect("second run");

    // Assert
    assert_eq!(first, second);
    assert_eq!(
        registry.value("recentf-save-file"),
        first.value("recentf-save-file")
    );
}

#[test]
fn test_tracked_identifiers_are_in_exactly_one_group() {
    // Arrange
    let app_dir = temp_app_dir();
    let options = options_for(
        &app_dir,
        "[init]\ndefine_groups = true\ndivert_backups = true\n",
    );
    let initializer = options.initializer("unused").expect("initializer");
    let mut registry = InMemoryRegistry::permissive();

    // Act
    let report = initializer
        .run(&mut registry, &mut TomlSettingsLoader::new())
        .expect("initialize");

    // Assert
    assert_eq!(report.tracking.len(), initializer.table().len());
    for binding in initializer.table() {
        let containing: Vec<_> = report
            .groups
            .iter()
            .filter(|g| g.members.contains(&binding.id))
            .collect();
        assert_eq!(containing.len(), 1, "{} must be in exactly one group", binding.id);
        assert_eq!(containing[0].group, binding.group());
    }
}

#[test]
fn test_only_declared_user_options_are_tracked() {
    let roots = Roots::under(&temp_app_dir());
    let mut registry = InMemoryRegistry::new();
    registry.declare_user_option("savehist-file");

    let report = initialize(
        &InitSettings::default(),
        &roots,
        &default_bindings(&roots),
        &mut registry,
        &mut TomlSettingsLoader::new(),
    )
    .expect("initialize");

    assert_eq!(report.tracking.len(), 1);
    assert_eq!(report.tracking.group_of("savehist-file"), Some(Group::PersistentFiles));
    assert!(registry.contains("recentf-save-file"), "untracked settings are still assigned");
}
