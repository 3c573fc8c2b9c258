use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::input::{parse_max_results, RawPreferences};
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "movie-night")]
#[command(about = "Recommend movies from a small catalog by rating, length and mood")]
pub struct CliConfig {
    /// Allowed ratings, comma separated (e.g. G,PG,PG-13)
    #[arg(long)]
    pub ratings: Option<String>,

    /// Maximum duration in minutes; unparsable values mean no cap
    #[arg(long)]
    pub max_duration: Option<String>,

    /// Mood tag to require (e.g. exciting, funny, emotional)
    #[arg(long)]
    pub mood: Option<String>,

    /// Maximum number of recommendations
    #[arg(long, allow_hyphen_values = true)]
    pub max_results: Option<String>,

    /// Output format: text or json
    #[arg(long)]
    pub format: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Prompt for preferences on stdin
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn raw_preferences(&self) -> RawPreferences {
        RawPreferences {
            ratings: self.ratings.clone(),
            max_duration: self.max_duration.clone(),
            mood: self.mood.clone(),
        }
    }

    /// 沒有任何偏好參數時進入互動模式
    pub fn wants_prompt(&self) -> bool {
        self.interactive || self.raw_preferences().is_empty()
    }

    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// 命令列參數覆蓋配置檔
    pub fn apply_overrides(&self, mut settings: Settings) -> Settings {
        if let Some(raw) = &self.max_results {
            settings.max_results = parse_max_results(raw, settings.max_results);
        }
        if let Some(format) = &self.format {
            settings.output_format = format.to_lowercase();
        }
        settings
    }

    pub fn resolve_settings(&self) -> Result<Settings> {
        let file_config = self.load_file_config()?;
        let settings = self.apply_overrides(Settings::from_toml(&file_config));
        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::parse_from([
            "movie-night",
            "--ratings",
            "g,pg",
            "--max-duration",
            "90",
            "--mood",
            "Funny",
            "--max-results",
            "-1",
        ]);

        assert_eq!(cli.ratings.as_deref(), Some("g,pg"));
        assert_eq!(cli.max_results.as_deref(), Some("-1"));
        assert!(!cli.wants_prompt());

        let settings = cli.resolve_settings().unwrap();
        assert_eq!(settings.max_results, 0);
    }

    #[test]
    fn test_no_preferences_means_prompt() {
        let cli = CliConfig::parse_from(["movie-night"]);
        assert!(cli.wants_prompt());

        let cli = CliConfig::parse_from(["movie-night", "--mood", "happy", "-i"]);
        assert!(cli.wants_prompt());
    }

    #[test]
    fn test_format_override_is_validated() {
        let cli = CliConfig::parse_from(["movie-night", "--format", "xml"]);
        assert!(cli.resolve_settings().is_err());

        let cli = CliConfig::parse_from(["movie-night", "--format", "JSON"]);
        assert_eq!(cli.resolve_settings().unwrap().output_format, "json");
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let cli = CliConfig::parse_from([
            "movie-night",
            "--config",
            "/definitely/not/here/movie-night.toml",
        ]);

        let err = cli.resolve_settings().unwrap_err();
        assert!(matches!(err, crate::MovieNightError::IoError(_)));
    }
}
