use crate::domain::model::{is_recognized_rating, RECOGNIZED_RATINGS};
use crate::utils::error::{MovieNightError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub recommend: Option<RecommendConfig>,
    pub display: Option<DisplayConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendConfig {
    pub max_results: Option<usize>,
    pub default_ratings: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub format: Option<String>,
    pub tag_delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MovieNightError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MOVIE_NIGHT_FORMAT})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MovieNightError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn max_results(&self) -> Option<usize> {
        self.recommend.as_ref().and_then(|r| r.max_results)
    }

    pub fn default_ratings(&self) -> Option<&[String]> {
        self.recommend
            .as_ref()
            .and_then(|r| r.default_ratings.as_deref())
    }

    pub fn output_format(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.format.as_deref())
    }

    pub fn tag_delimiter(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.tag_delimiter.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(max_results) = self.max_results() {
            validation::validate_positive_number("recommend.max_results", max_results, 1)?;
        }

        for rating in self.default_ratings().unwrap_or_default() {
            if !is_recognized_rating(rating) {
                return Err(MovieNightError::InvalidConfigValueError {
                    field: "recommend.default_ratings".to_string(),
                    value: rating.clone(),
                    reason: format!("Recognized ratings: {}", RECOGNIZED_RATINGS.join(", ")),
                });
            }
        }

        if let Some(format) = self.output_format() {
            validation::validate_one_of("display.format", format, &OUTPUT_FORMATS)?;
        }

        if let Some(delimiter) = self.tag_delimiter() {
            validation::validate_non_empty_string("display.tag_delimiter", delimiter)?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_one_of(
                "logging.level",
                level,
                &["trace", "debug", "info", "warn", "error"],
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[recommend]
max_results = 3
default_ratings = ["G", "PG"]

[display]
format = "json"
tag_delimiter = " | "

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.max_results(), Some(3));
        assert_eq!(
            config.default_ratings(),
            Some(&["G".to_string(), "PG".to_string()][..])
        );
        assert_eq!(config.output_format(), Some("json"));
        assert_eq!(config.tag_delimiter(), Some(" | "));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_every_section_is_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.max_results(), None);
        assert_eq!(config.default_ratings(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MOVIE_NIGHT_TEST_FORMAT", "json");

        let toml_content = r#"
[display]
format = "${MOVIE_NIGHT_TEST_FORMAT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_format(), Some("json"));

        std::env::remove_var("MOVIE_NIGHT_TEST_FORMAT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[display]
tag_delimiter = "${MOVIE_NIGHT_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.tag_delimiter(), Some("${MOVIE_NIGHT_SURELY_UNSET_VAR}"));
    }

    #[test]
    fn test_config_validation() {
        let bad_rating = TomlConfig::from_toml_str("[recommend]\ndefault_ratings = [\"PG-12\"]\n")
            .unwrap();
        assert!(bad_rating.validate().is_err());

        let zero_results = TomlConfig::from_toml_str("[recommend]\nmax_results = 0\n").unwrap();
        assert!(zero_results.validate().is_err());

        let bad_format = TomlConfig::from_toml_str("[display]\nformat = \"csv\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let empty_delimiter =
            TomlConfig::from_toml_str("[display]\ntag_delimiter = \"\"\n").unwrap();
        assert!(empty_delimiter.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[recommend\nmax_results = ").unwrap_err();
        assert!(matches!(err, MovieNightError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[recommend]\nmax_results = 2\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.max_results(), Some(2));
    }
}
