use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::models::CouponType;
use crate::progress::Thresholds;

fn default_name() -> String {
    "Me".to_string()
}
fn default_snack_box_days() -> u32 {
    CouponType::SnackBox.default_threshold()
}
fn default_cheat_day_days() -> u32 {
    CouponType::CheatDay.default_threshold()
}
fn default_recommend_limit() -> usize {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Name shown when comparing with friends
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsConfig {
    #[serde(default = "default_snack_box_days")]
    pub snack_box_days: u32,
    #[serde(default = "default_cheat_day_days")]
    pub cheat_day_days: u32,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            snack_box_days: default_snack_box_days(),
            cheat_day_days: default_cheat_day_days(),
        }
    }
}

impl RewardsConfig {
    /// A zero threshold would issue a coupon every day; treat it as 1.
    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            snack_box: self.snack_box_days.max(1),
            cheat_day: self.cheat_day_days.max(1),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// How many locked achievements to suggest
    #[serde(default = "default_recommend_limit")]
    pub recommend_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            recommend_limit: default_recommend_limit(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub rewards: RewardsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "girogi")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.data_dir().to_path_buf())
    }

    pub fn db_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("girogi.db"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            log::debug!("no config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(&path).with_context(|| format!("Reading {:?}", path))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Parsing config.toml")
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(&path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    pub fn ensure_data_dir() -> Result<PathBuf> {
        let dir = Self::data_dir()?;
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.profile.name, "Me");
        assert_eq!(config.rewards.thresholds(), Thresholds::default());
        assert_eq!(config.display.recommend_limit, 3);
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::parse(
            r#"
            [profile]
            name = "Jiwoo"

            [rewards]
            cheat_day_days = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.profile.name, "Jiwoo");
        assert_eq!(config.rewards.snack_box_days, 3);
        assert_eq!(config.rewards.thresholds().cheat_day, 10);
    }

    #[test]
    fn test_zero_threshold_is_clamped() {
        let config = AppConfig::parse("[rewards]\nsnack_box_days = 0\n").unwrap();
        assert_eq!(config.rewards.thresholds().snack_box, 1);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(AppConfig::parse("[profile\nname = 1").is_err());
    }

    #[test]
    fn test_serializes_back() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back = AppConfig::parse(&text).unwrap();
        assert_eq!(back.rewards.cheat_day_days, 7);
    }
}
