use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AppErrors as Error;

/// Fuzzy-match acceptance threshold used when the configuration doesn't
/// supply one. Empirical value carried over from the original category map
/// tuning.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 70.0;

#[derive(Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Known merchant name (lowercase) -> category label. A `BTreeMap` so
    /// that fuzzy-match tie-breaking sees a stable iteration order.
    pub categories: BTreeMap<String, String>,

    /// City names stripped from PDF statement descriptions, lowercase.
    #[serde(default)]
    pub cities: Vec<String>,

    /// Minimum similarity score (0-100) for accepting a fuzzy match.
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
}

fn default_fuzzy_threshold() -> f64 {
    DEFAULT_FUZZY_THRESHOLD
}

/// Get the configuration from the configuration file
///
/// # Errors
/// Will return errors if the config can't be read or deserialised.
pub fn get_config() -> Result<Settings, Error> {
    // Initialise our configuration reader
    let settings = config::Config::builder()
        // Add configuration values from a file named `configuration.yaml`.
        .add_source(config::File::new(
            "configuration.yaml",
            config::FileFormat::Yaml,
        ))
        .build()?;
    Ok(settings.try_deserialize::<Settings>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_defaults_when_absent() {
        // Arrange
        let yaml = r"
categories:
  publix: Groceries
";

        // Act
        let settings = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        // Assert
        assert_eq!(settings.fuzzy_threshold, DEFAULT_FUZZY_THRESHOLD);
        assert!(settings.cities.is_empty());
        assert_eq!(settings.categories["publix"], "Groceries");
    }

    #[test]
    fn full_settings_deserialise() {
        // Arrange
        let yaml = r"
categories:
  publix: Groceries
  shell: Gas
cities:
  - gainesville
fuzzy_threshold: 85.0
";

        // Act
        let settings = config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        // Assert
        assert_eq!(settings.fuzzy_threshold, 85.0);
        assert_eq!(settings.cities, vec!["gainesville".to_string()]);
        assert_eq!(settings.categories.len(), 2);
    }
}
