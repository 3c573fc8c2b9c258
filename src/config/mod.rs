pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::DEFAULT_MAX_RESULTS;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::{TomlConfig, OUTPUT_FORMATS};

pub const DEFAULT_TAG_DELIMITER: &str = ", ";

/// Effective settings after merging the config file and command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_results: usize,
    pub default_ratings: Vec<String>,
    pub output_format: String,
    pub tag_delimiter: String,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            default_ratings: Vec::new(),
            output_format: "text".to_string(),
            tag_delimiter: DEFAULT_TAG_DELIMITER.to_string(),
            log_level: None,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();

        Self {
            max_results: config.max_results().unwrap_or(defaults.max_results),
            default_ratings: config
                .default_ratings()
                .map(<[String]>::to_vec)
                .unwrap_or(defaults.default_ratings),
            output_format: config
                .output_format()
                .map(str::to_string)
                .unwrap_or(defaults.output_format),
            tag_delimiter: config
                .tag_delimiter()
                .map(str::to_string)
                .unwrap_or(defaults.tag_delimiter),
            log_level: config.log_level().map(str::to_string),
        }
    }
}

impl ConfigProvider for Settings {
    fn max_results(&self) -> usize {
        self.max_results
    }

    fn default_ratings(&self) -> &[String] {
        &self.default_ratings
    }

    fn output_format(&self) -> &str {
        &self.output_format
    }

    fn tag_delimiter(&self) -> &str {
        &self.tag_delimiter
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_one_of("format", &self.output_format, &OUTPUT_FORMATS)?;
        validation::validate_non_empty_string("tag_delimiter", &self.tag_delimiter)?;
        Ok(())
    }
}
