//! personactl configuration.
//!
//! Stored at ~/.config/persona/config.toml (XDG aware). A missing file
//! is not an error; defaults apply and the file is created on first save.

use anyhow::Result;
use persona_common::{anonymous_user_id, UserProfile};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CtlConfig {
    /// Anonymous user identifier. Generated and saved on first use.
    #[serde(default)]
    pub user_id: Option<String>,

    /// Catalog variant used when --location is not given.
    #[serde(default)]
    pub default_location: Option<String>,

    /// Robot preselected when --robot is not given.
    #[serde(default)]
    pub default_robot: Option<String>,

    /// Database path override (otherwise the XDG data directory).
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Demographic profile attached to each stored diagnosis.
    #[serde(default)]
    pub profile: UserProfile,
}

impl CtlConfig {
    /// Load the user config, falling back to defaults if absent or
    /// unreadable.
    pub fn load() -> Self {
        if let Some(path) = Self::user_config_path() {
            if let Ok(config) = Self::load_from_path(&path) {
                return config;
            }
        }
        Self::default()
    }

    fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CtlConfig = toml::from_str(&content)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save to the user config path, creating directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::user_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Config path: ~/.config/persona/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        let config_dir = if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            PathBuf::from(xdg)
        } else {
            let home = std::env::var("HOME").ok()?;
            PathBuf::from(home).join(".config")
        };

        Some(config_dir.join("persona").join("config.toml"))
    }

    /// The user id, generating and persisting one on first use.
    pub fn ensure_user_id(&mut self) -> Result<String> {
        if let Some(id) = &self.user_id {
            return Ok(id.clone());
        }
        let id = anonymous_user_id();
        self.user_id = Some(id.clone());
        self.save()?;
        Ok(id)
    }

    /// Apply a `key=value` setting from `personactl config --set`.
    pub fn apply_setting(&mut self, setting: &str) -> Result<()> {
        let (key, value) = setting
            .split_once('=')
            .ok_or_else(|| anyhow::anyhow!("expected key=value, got '{setting}'"))?;

        match key.trim() {
            "user_id" => self.user_id = Some(value.trim().to_string()),
            "default_location" => self.default_location = Some(value.trim().to_string()),
            "default_robot" => self.default_robot = Some(value.trim().to_string()),
            "database" => self.database = Some(PathBuf::from(value.trim())),
            "gender" => {
                self.profile.gender = persona_common::Gender::from_label(value)
                    .ok_or_else(|| anyhow::anyhow!("unknown gender '{value}'"))?;
            }
            "age_group" => {
                self.profile.age_group = persona_common::AgeGroup::from_label(value)
                    .ok_or_else(|| anyhow::anyhow!("unknown age group '{value}'"))?;
            }
            "occupation" => self.profile.occupation = value.trim().to_string(),
            other => anyhow::bail!("unknown config key '{other}'"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persona_common::{AgeGroup, Gender};

    #[test]
    fn test_apply_setting_known_keys() {
        let mut config = CtlConfig::default();
        config.apply_setting("default_location=hospital").unwrap();
        config.apply_setting("gender=female").unwrap();
        config.apply_setting("age_group=30s").unwrap();
        config.apply_setting("occupation=researcher").unwrap();

        assert_eq!(config.default_location.as_deref(), Some("hospital"));
        assert_eq!(config.profile.gender, Gender::Female);
        assert_eq!(config.profile.age_group, AgeGroup::Thirties);
        assert_eq!(config.profile.occupation, "researcher");
    }

    #[test]
    fn test_apply_setting_rejects_bad_input() {
        let mut config = CtlConfig::default();
        assert!(config.apply_setting("no-equals-sign").is_err());
        assert!(config.apply_setting("unknown_key=x").is_err());
        assert!(config.apply_setting("age_group=90s").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = CtlConfig::default();
        config.user_id = Some("user_abcd1234".to_string());
        config.default_location = Some("library".to_string());

        let text = toml::to_string_pretty(&config).unwrap();
        let back: CtlConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.user_id, config.user_id);
        assert_eq!(back.default_location, config.default_location);
    }
}
