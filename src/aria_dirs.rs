//! Application directory paths.
//!
//! Uses the [`dirs`] crate for platform-appropriate directory resolution.
//!
//! | Purpose | macOS | Linux |
//! |---------|-------|-------|
//! | App data | `~/Library/Application Support/aria/` | `~/.local/share/aria/` |
//! | Config | `~/Library/Application Support/aria/` | `~/.config/aria/` |
//!
//! # Environment Overrides
//!
//! - `ARIA_DATA_DIR`: overrides [`data_dir`]
//! - `ARIA_CONFIG_DIR`: overrides [`config_dir`]

use std::ffi::OsString;
use std::path::PathBuf;

fn resolve(override_dir: Option<OsString>, platform: Option<PathBuf>, fallback: &str) -> PathBuf {
    if let Some(dir) = override_dir {
        return PathBuf::from(dir);
    }
    platform
        .map(|d| d.join("aria"))
        .unwrap_or_else(|| PathBuf::from(fallback))
}

/// Application data root directory (persisted store, reminders).
///
/// Resolves to `dirs::data_dir()/aria/` by default. Override with
/// the `ARIA_DATA_DIR` environment variable.
#[must_use]
pub fn data_dir() -> PathBuf {
    resolve(
        std::env::var_os("ARIA_DATA_DIR"),
        dirs::data_dir(),
        "/tmp/aria-data",
    )
}

/// Application config directory.
///
/// Resolves to `dirs::config_dir()/aria/` by default. Override with
/// the `ARIA_CONFIG_DIR` environment variable.
#[must_use]
pub fn config_dir() -> PathBuf {
    resolve(
        std::env::var_os("ARIA_CONFIG_DIR"),
        dirs::config_dir(),
        "/tmp/aria-config",
    )
}

/// Persisted key-value store file (`data_dir()/store.json`).
#[must_use]
pub fn store_file() -> PathBuf {
    data_dir().join("store.json")
}
