//! Built-in binding tables.
//!
//! These tables are static data: the well-known settings of common editor
//! subsystems and the file each one should point at.  They contain no logic
//! beyond building literals that embed already-resolved paths, which is why
//! both functions take the [`Roots`] the table will later be applied with.
//!
//! | Table               | Contents                                               |
//! |---------------------|--------------------------------------------------------|
//! | [`default_bindings`] | Config and data files of built-in subsystems          |
//! | [`backup_bindings`]  | Opt-in: auto-save, backup and undo history into `var/` |

use crate::domain::binding::SettingBinding;
use crate::domain::path::{BaseDir, Roots};
use crate::domain::value::SettingValue;

/// Config files, resolved under the etc root.
const ETC_FILES: &[(&str, &str)] = &[
    ("abbrev-file-name", "abbrev.el"),
    ("auto-insert-directory", "auto-insert/"),
    ("calc-settings-file", "calc-settings.el"),
    ("custom-file", "custom.toml"),
    ("eshell-aliases-file", "eshell/aliases"),
    ("eshell-rc-script", "eshell/profile"),
    ("eshell-login-script", "eshell/login"),
    ("gnus-init-file", "gnus/init.el"),
    ("transient-levels-file", "transient/levels.el"),
    ("transient-values-file", "transient/values.el"),
];

/// Persistent data files, resolved under the var root.
const VAR_FILES: &[(&str, &str)] = &[
    ("auto-save-list-file-prefix", "auto-save/sessions/"),
    ("bookmark-default-file", "bookmark-default.el"),
    ("eshell-directory-name", "eshell/"),
    ("eww-bookmarks-directory", "eww/"),
    ("ido-save-directory-list-file", "ido-save-directory-list.el"),
    ("image-dired-dir", "image-dired/"),
    ("lsp-session-file", "lsp-session.el"),
    ("nsm-settings-file", "nsm-settings.el"),
    ("project-list-file", "project-list.el"),
    ("recentf-save-file", "recentf-save.el"),
    ("save-place-file", "save-place.el"),
    ("savehist-file", "savehist.el"),
    ("shared-game-score-directory", "shared-game-score/"),
    ("tramp-auto-save-directory", "tramp/auto-save/"),
    ("tramp-persistency-file-name", "tramp/persistency.el"),
    ("transient-history-file", "transient/history.el"),
    ("url-cache-directory", "url/cache/"),
    ("url-configuration-directory", "url/"),
];

/// The default table applied at initialization.
///
/// Path fragments come first, literals last.  `yas-snippet-dirs` is a list
/// literal whose single entry is resolved here, from `roots`, so it is fixed
/// before the binding is applied.
pub fn default_bindings(roots: &Roots) -> Vec<SettingBinding> {
    let mut table: Vec<SettingBinding> = ETC_FILES
        .iter()
        .map(|(id, fragment)| SettingBinding::etc(*id, *fragment))
        .chain(
            VAR_FILES
                .iter()
                .map(|(id, fragment)| SettingBinding::var(*id, *fragment)),
        )
        .collect();

    table.push(SettingBinding::literal(
        "yas-snippet-dirs",
        SettingValue::List(vec![roots.expand_etc("yasnippet/snippets/").into()]),
        BaseDir::Etc,
    ));
    table
}

/// Opt-in bindings that keep auto-save files, backups and undo history out
/// of the directories being edited.
///
/// Every value is a literal that embeds a directory under the var root.
pub fn backup_bindings(roots: &Roots) -> Vec<SettingBinding> {
    vec![
        SettingBinding::literal(
            "auto-save-file-name-transforms",
            SettingValue::List(vec![SettingValue::List(vec![
                ".*".into(),
                roots.expand_var("auto-save/").into(),
                true.into(),
            ])]),
            BaseDir::Var,
        ),
        SettingBinding::literal(
            "backup-directory-alist",
            SettingValue::alist([(".", roots.expand_var("backup/"))]),
            BaseDir::Var,
        ),
        SettingBinding::literal(
            "undo-tree-history-directory-alist",
            SettingValue::alist([(".", roots.expand_var("undo-tree-hist/"))]),
            BaseDir::Var,
        ),
    ]
}
