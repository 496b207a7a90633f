//! Per-user directories: config, logs and persisted state.

use std::env;
use std::path::{Path, PathBuf};

/// Directory name under the config base.
const APP_DIR: &str = "mishpacha";

/// File holding persisted session state.
pub const STATE_FILE: &str = "state.json";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/mishpacha`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    let home = env::var("HOME").ok()?;
    let dir = Path::new(&home).join(".config").join(APP_DIR);
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Config directory (ensured to exist): `$HOME/.config/mishpacha`, else under `XDG_CONFIG_HOME`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: "$HOME/.config/mishpacha/logs" (ensured to exist)
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Default persisted-state file.
#[must_use]
pub fn state_file() -> PathBuf {
    config_dir().join(STATE_FILE)
}

/// What: Find a site config in the user config dir.
///
/// Output:
/// - First existing of `config.json`, `config.toml`.
#[must_use]
pub fn resolve_site_config_path() -> Option<PathBuf> {
    let base = config_dir();
    ["config.json", "config.toml"]
        .into_iter()
        .map(|name| base.join(name))
        .find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    #[test]
    /// What: Config, logs and state live under `$HOME/.config/mishpacha`.
    fn paths_under_home() {
        let _guard = crate::test_mutex().lock().expect("env lock");
        let orig_home = std::env::var_os("HOME");
        let base = tempfile::TempDir::new().expect("temp home");
        unsafe { std::env::set_var("HOME", base.path()) };

        let cfg = super::config_dir();
        assert!(cfg.ends_with(".config/mishpacha"));
        assert!(cfg.is_dir());
        assert!(super::logs_dir().ends_with("logs"));
        assert_eq!(super::state_file(), cfg.join("state.json"));
        assert_eq!(super::resolve_site_config_path(), None);
        std::fs::write(cfg.join("config.toml"), "").expect("write config");
        assert_eq!(super::resolve_site_config_path(), Some(cfg.join("config.toml")));

        unsafe {
            if let Some(v) = orig_home {
                std::env::set_var("HOME", v);
            } else {
                std::env::remove_var("HOME");
            }
        }
    }
}
