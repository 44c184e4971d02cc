//! Configuration file support.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bazi/config.toml`.

use crate::solar_terms::DEFAULT_LI_CHUN_DAY;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub solar_terms: SolarTermsConfig,

    #[serde(default)]
    pub da_yun: DaYunConfig,
}

/// Solar-term approximation configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolarTermsConfig {
    /// Day of February used as the start-of-spring boundary
    #[serde(default = "default_li_chun_day")]
    pub li_chun_day: u32,
}

impl Default for SolarTermsConfig {
    fn default() -> Self {
        Self {
            li_chun_day: default_li_chun_day(),
        }
    }
}

/// Decade-cycle configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DaYunConfig {
    /// Placeholder start age until the day-distance rule is implemented
    #[serde(default = "default_start_age")]
    pub start_age: u32,

    /// Number of decade steps front ends should display
    #[serde(default = "default_steps")]
    pub steps: u32,
}

impl Default for DaYunConfig {
    fn default() -> Self {
        Self {
            start_age: default_start_age(),
            steps: default_steps(),
        }
    }
}

// Default value functions
fn default_li_chun_day() -> u32 {
    DEFAULT_LI_CHUN_DAY
}

fn default_start_age() -> u32 {
    1
}

fn default_steps() -> u32 {
    10
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("bazi").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject values the calculators cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(1..=28).contains(&self.solar_terms.li_chun_day) {
            return Err(Error::Config(format!(
                "li_chun_day {} must fall within February",
                self.solar_terms.li_chun_day
            )));
        }
        if self.da_yun.steps == 0 {
            return Err(Error::Config("da_yun steps must be at least 1".into()));
        }
        if self.da_yun.start_age == 0 {
            return Err(Error::Config("da_yun start_age must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.solar_terms.li_chun_day, 4);
        assert_eq!(config.da_yun.start_age, 1);
        assert_eq!(config.da_yun.steps, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.solar_terms.li_chun_day, parsed.solar_terms.li_chun_day);
        assert_eq!(config.da_yun.steps, parsed.da_yun.steps);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[da_yun]
start_age = 2
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.da_yun.start_age, 2);
        assert_eq!(config.da_yun.steps, 10); // default
        assert_eq!(config.solar_terms.li_chun_day, 4); // default
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.solar_terms.li_chun_day = 30;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.da_yun.steps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[solar_terms]\nli_chun_day = 5\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.solar_terms.li_chun_day, 5);
    }

    #[test]
    fn test_load_from_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[da_yun]\nsteps = 0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.da_yun.steps = 8;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.da_yun.steps, 8);
    }
}
