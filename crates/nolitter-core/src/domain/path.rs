//! Base directories and the path resolver.
//!
//! Every managed path is produced by joining a relative *fragment* onto one of
//! two roots:
//!
//! ```text
//! <app dir>/
//!   ├─ etc/   BaseDir::Etc  configuration the user edits (keep in VCS)
//!   └─ var/   BaseDir::Var  data the application writes on its own
//! ```
//!
//! # Trailing separators (for beginners)
//!
//! A fragment such as `"backups/"` names a *directory*.  Host subsystems
//! only treat a setting as a directory when the string ends in a separator, so
//! [`resolve`] keeps it: `resolve("/a/var/", "backups/")` yields
//! `/a/var/backups/`.  The join works on the raw `OsString`.

use std::borrow::Cow;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use serde::{Deserialize, Serialize};

/// Characters that may not appear in a Windows file name.
const WINDOWS_RESERVED: [char; 7] = ['<', '>', ':', '"', '|', '?', '*'];

/// Substitute for every character that is illegal on the host platform.
const REPLACEMENT: char = '!';

/// Selects one of the two canonical roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseDir {
    /// The config root: files the user maintains.
    Etc,
    /// The data root: files subsystems persist on their own.
    Var,
}

impl BaseDir {
    /// Returns the lowercase name used in TOML and log output.
    pub fn as_str(self) -> &'static str {
        match self {
            BaseDir::Etc => "etc",
            BaseDir::Var => "var",
        }
    }
}

impl fmt::Display for BaseDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File-name rules a fragment is normalized against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Reserved characters and control characters are replaced.
    Windows,
    /// Every character except NUL is legal; fragments pass through unchanged.
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub const fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// Normalizes `fragment` for the file-name rules of `platform`.
///
/// On Windows each of `< > : " | ? *` and every ASCII control character is
/// replaced with `!`.  Separators are left alone so fragments may contain
/// subdirectories.  Applying the function twice yields the same result as
/// applying it once.
pub fn normalize_fragment_for(platform: Platform, fragment: &str) -> Cow<'_, str> {
    match platform {
        Platform::Unix => Cow::Borrowed(fragment),
        Platform::Windows => {
            let illegal = |c: char| WINDOWS_RESERVED.contains(&c) || c.is_ascii_control();
            if fragment.chars().any(illegal) {
                Cow::Owned(
                    fragment
                        .chars()
                        .map(|c| if illegal(c) { REPLACEMENT } else { c })
                        .collect(),
                )
            } else {
                Cow::Borrowed(fragment)
            }
        }
    }
}

/// Normalizes `fragment` for the platform this binary runs on.
pub fn normalize_fragment(fragment: &str) -> Cow<'_, str> {
    normalize_fragment_for(Platform::current(), fragment)
}

/// Joins a normalized `fragment` onto `base_root`.
///
/// Exactly one separator is placed between the root and the fragment, and a
/// trailing separator on `fragment` survives into the result.  The function
/// is pure: it never checks whether anything exists on disk.
///
/// Fragments are expected to be relative.  An absolute fragment is appended
/// textually without validation.
pub fn resolve(base_root: &Path, fragment: &str) -> PathBuf {
    let fragment = normalize_fragment(fragment);
    let root = base_root.as_os_str();

    let mut joined = OsString::with_capacity(root.len() + fragment.len() + 1);
    joined.push(root);
    let needs_separator = !root.is_empty()
        && !root
            .to_string_lossy()
            .chars()
            .last()
            .is_some_and(std::path::is_separator);
    if needs_separator {
        joined.push(MAIN_SEPARATOR.to_string());
    }
    joined.push(&*fragment);
    PathBuf::from(joined)
}

/// The two established base directories.
///
/// Holding a `Roots` value is proof that both directories were decided
/// (explicitly or by default) before any binding is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    etc: PathBuf,
    var: PathBuf,
}

impl Roots {
    /// Creates roots from two explicit directories.
    pub fn new(etc: impl Into<PathBuf>, var: impl Into<PathBuf>) -> Self {
        Self {
            etc: etc.into(),
            var: var.into(),
        }
    }

    /// Default roots: `<app_dir>/etc/` and `<app_dir>/var/`.
    pub fn under(app_dir: &Path) -> Self {
        Self::new(resolve(app_dir, "etc/"), resolve(app_dir, "var/"))
    }

    pub fn etc(&self) -> &Path {
        &self.etc
    }

    pub fn var(&self) -> &Path {
        &self.var
    }

    /// Returns the root selected by `base`.
    pub fn get(&self, base: BaseDir) -> &Path {
        match base {
            BaseDir::Etc => &self.etc,
            BaseDir::Var => &self.var,
        }
    }

    /// Resolves `fragment` against the root selected by `base`.
    pub fn resolve(&self, base: BaseDir, fragment: &str) -> PathBuf {
        resolve(self.get(base), fragment)
    }

    /// Shorthand for `resolve(BaseDir::Etc, fragment)`.
    pub fn expand_etc(&self, fragment: &str) -> PathBuf {
        self.resolve(BaseDir::Etc, fragment)
    }

    /// Shorthand for `resolve(BaseDir::Var, fragment)`.
    pub fn expand_var(&self, fragment: &str) -> PathBuf {
        self.resolve(BaseDir::Var, fragment)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
