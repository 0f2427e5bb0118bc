//! Path utilities for vaxsched.
//!
//! All data lives under `~/.vaxsched/`:
//! - `~/.vaxsched/config.toml` - optional configuration
//! - `~/.vaxsched/vaxsched.db` - scheduler database

use std::path::PathBuf;

/// Returns the vaxsched home directory (`~/.vaxsched/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".vaxsched")
}

/// Returns the default config file path (`~/.vaxsched/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.vaxsched/vaxsched.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("vaxsched.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_vaxsched_home() {
        let home = home_dir();
        let config = default_config();
        let db = default_database();

        assert!(home.to_string_lossy().contains(".vaxsched"));
        assert!(config.starts_with(&home));
        assert!(db.starts_with(&home));
        assert_eq!(db.file_name().unwrap(), "vaxsched.db");
    }
}
