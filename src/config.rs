use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// User configuration, loaded from `.eda.json` in the repository root (or
/// the path given with `--config`). A missing file means defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Require a yes/no confirmation before deleting a worktree.
    #[serde(default)]
    pub confirm_delete: Option<bool>,
    /// Older name for `confirm_delete`, still honored when the new key is
    /// absent.
    #[serde(default)]
    pub confirm_deletions: Option<bool>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let data = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            let config: Self = serde_json::from_str(&data)
                .with_context(|| format!("failed to parse config file {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// The new key wins; the legacy key is the fallback; both absent means
    /// no confirmation.
    pub fn confirm_required(&self) -> bool {
        self.confirm_delete
            .or(self.confirm_deletions)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_confirmation() {
        assert!(!Config::default().confirm_required());
    }

    #[test]
    fn test_confirm_delete_key() {
        let config: Config = serde_json::from_str(r#"{"confirm_delete": true}"#).unwrap();
        assert!(config.confirm_required());
    }

    #[test]
    fn test_legacy_key_is_honored() {
        let config: Config = serde_json::from_str(r#"{"confirm_deletions": true}"#).unwrap();
        assert!(config.confirm_required());
    }

    #[test]
    fn test_new_key_wins_over_legacy() {
        let config: Config =
            serde_json::from_str(r#"{"confirm_delete": false, "confirm_deletions": true}"#)
                .unwrap();
        assert!(!config.confirm_required());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load(&dir.path().join(".eda.json")).unwrap();
        assert!(!config.confirm_required());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".eda.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(Config::load(&path).is_err());
    }
}
