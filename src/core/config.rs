//! Generator configuration
//!
//! Supplied once before a run. Defaults reproduce the classic six-house
//! realm with four rival kingdoms and a century of history.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{KingdomError, Result};

/// Configuration for a kingdom generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KingdomConfig {
    // === HORIZON ===
    /// Number of years to simulate after the founding
    pub years_to_simulate: u32,

    /// Seed for the run's random stream
    ///
    /// Two runs with the same configuration and seed produce identical
    /// event logs. `None` draws a fresh seed per run.
    pub seed: Option<u64>,

    // === REALM ===
    /// One noble house is founded per name
    pub noble_house_names: Vec<String>,

    /// Rival kingdoms, all at peace when the realm is founded
    pub other_kingdoms: Vec<String>,

    /// Founding population of every house
    ///
    /// Also sets the breeding elite: only the best third of this number
    /// may bear children each year.
    pub house_size: u32,

    /// Reserved. Names are drawn from the per-race catalogs instead.
    pub male_names: Vec<String>,

    /// Reserved. Names are drawn from the per-race catalogs instead.
    pub female_names: Vec<String>,

    // === SUCCESSION ===
    /// Whether a stronger house may seize the throne when a ruler dies
    pub allow_usurping: bool,

    // === CHRONICLE ===
    /// Log monument construction
    pub inline_monuments: bool,

    /// Log war declarations and peace treaties
    pub inline_wars: bool,

    /// Log deaths of notable nobles
    pub inline_deaths: bool,

    /// Log coronations
    pub inline_ascensions: bool,

    /// Reserved for power reports; not read by the engine
    pub inline_power: bool,

    /// A review of the realm is logged every this many years
    pub noble_review_period: u32,
}

impl Default for KingdomConfig {
    fn default() -> Self {
        Self {
            years_to_simulate: 100,
            seed: None,

            noble_house_names: ["Alphus", "Betan", "Gammris", "Celos", "Kaeivar", "Nautus"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            other_kingdoms: ["Austaria", "Griggledorn", "Carthal", "Tortestra"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            house_size: 1000,
            male_names: Vec::new(),
            female_names: Vec::new(),

            allow_usurping: true,

            inline_monuments: true,
            inline_wars: true,
            inline_deaths: true,
            inline_ascensions: true,
            inline_power: true,
            noble_review_period: 10,
        }
    }
}

impl KingdomConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML; missing keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: KingdomConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration before a run
    pub fn validate(&self) -> Result<()> {
        if self.noble_house_names.is_empty() {
            return Err(KingdomError::InvalidConfig(
                "at least one noble house is required".into(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.noble_house_names {
            if name.trim().is_empty() {
                return Err(KingdomError::InvalidConfig(
                    "noble house names must not be blank".into(),
                ));
            }
            if !seen.insert(name.as_str()) {
                return Err(KingdomError::InvalidConfig(format!(
                    "duplicate noble house name: {}",
                    name
                )));
            }
        }

        if self.other_kingdoms.iter().any(|name| name.trim().is_empty()) {
            return Err(KingdomError::InvalidConfig(
                "rival kingdom names must not be blank".into(),
            ));
        }

        if self.house_size == 0 {
            return Err(KingdomError::InvalidConfig(
                "house_size must be positive".into(),
            ));
        }

        if self.noble_review_period == 0 {
            return Err(KingdomError::InvalidConfig(
                "noble_review_period must be positive".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = KingdomConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.noble_house_names.len(), 6);
        assert_eq!(config.other_kingdoms.len(), 4);
        assert_eq!(config.house_size, 1000);
    }

    #[test]
    fn test_rejects_empty_houses() {
        let config = KingdomConfig {
            noble_house_names: Vec::new(),
            ..KingdomConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(KingdomError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_house() {
        let config = KingdomConfig {
            noble_house_names: vec!["Alphus".into(), "Alphus".into()],
            ..KingdomConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_rejects_zero_review_period() {
        let config = KingdomConfig {
            noble_review_period: 0,
            ..KingdomConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_house_size() {
        let config = KingdomConfig {
            house_size: 0,
            ..KingdomConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_partial_override() {
        let config = KingdomConfig::from_toml_str(
            r#"
            years_to_simulate = 25
            seed = 99
            noble_house_names = ["Stark", "Tully"]
            allow_usurping = false
            "#,
        )
        .unwrap();

        assert_eq!(config.years_to_simulate, 25);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.noble_house_names, vec!["Stark", "Tully"]);
        assert!(!config.allow_usurping);
        // Untouched keys keep their defaults
        assert_eq!(config.noble_review_period, 10);
        assert_eq!(config.other_kingdoms.len(), 4);
    }

    #[test]
    fn test_toml_invalid_rejected() {
        let result = KingdomConfig::from_toml_str("noble_review_period = 0");
        assert!(matches!(result, Err(KingdomError::InvalidConfig(_))));

        let result = KingdomConfig::from_toml_str("years_to_simulate = \"lots\"");
        assert!(matches!(result, Err(KingdomError::TomlError(_))));
    }
}
