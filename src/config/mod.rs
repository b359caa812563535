use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// CSV file holding the historical closing prices.
    pub data_file: String,
    /// Symbol whose latest known date seeds the default sell date.
    pub reference_symbol: String,
    /// How many days before today the default purchase date falls.
    pub default_holding_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: "data/prices.csv".to_string(),
            reference_symbol: "Amazon".to_string(),
            default_holding_days: 14,
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parses_all_fields() {
        let yaml = "\
data_file: tests/data/sample_prices.csv
reference_symbol: Acme
default_holding_days: 7
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.data_file, "tests/data/sample_prices.csv");
        assert_eq!(config.reference_symbol, "Acme");
        assert_eq!(config.default_holding_days, 7);
    }

    #[test]
    fn test_defaults_match_the_original_form() {
        let config = Config::default();

        assert_eq!(config.reference_symbol, "Amazon");
        assert_eq!(config.default_holding_days, 14);
    }
}
