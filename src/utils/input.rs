use crate::domain::model::Query;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use std::collections::HashSet;
use std::io::{BufRead, Write};

pub const RATINGS_PROMPT: &str = "Allowed ratings (comma separated, e.g. G,PG,PG-13): ";
pub const DURATION_PROMPT: &str = "Maximum duration in minutes (or leave blank): ";
pub const MOOD_PROMPT: &str = "Mood tag (e.g. exciting, funny, emotional): ";

/// 使用者輸入的原始字串，尚未解析
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPreferences {
    pub ratings: Option<String>,
    pub max_duration: Option<String>,
    pub mood: Option<String>,
}

impl RawPreferences {
    pub fn is_empty(&self) -> bool {
        self.ratings.is_none() && self.max_duration.is_none() && self.mood.is_none()
    }

    /// 未輸入分級時採用配置中的預設分級
    pub fn into_query(self, config: &impl ConfigProvider) -> Query {
        let allowed_ratings = match self.ratings {
            Some(raw) => parse_ratings(&raw),
            None => config.default_ratings().iter().cloned().collect(),
        };

        Query {
            allowed_ratings,
            max_duration: self.max_duration.as_deref().and_then(parse_duration),
            mood: self.mood.as_deref().and_then(parse_mood),
            max_results: config.max_results(),
        }
    }
}

pub fn parse_ratings(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(|token| token.trim().to_uppercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// 無法解析 (空白、非數字、負數) 一律視為未設定
pub fn parse_duration(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

pub fn parse_mood(raw: &str) -> Option<String> {
    let mood = raw.trim();
    if mood.is_empty() {
        None
    } else {
        Some(mood.to_lowercase())
    }
}

/// 負數視為 0，無法解析時沿用預設值
pub fn parse_max_results(raw: &str, default: usize) -> usize {
    match raw.trim().parse::<i64>() {
        Ok(n) => usize::try_from(n).unwrap_or(0),
        Err(_) => default,
    }
}

/// Asks for ratings, duration and mood in that order. EOF leaves the rest unset.
pub fn prompt_preferences<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<RawPreferences> {
    writeln!(output, "Movie Recommendation System")?;
    writeln!(output, "Enter your preferences:")?;

    let ratings = prompt_line(input, output, RATINGS_PROMPT)?;
    let max_duration = prompt_line(input, output, DURATION_PROMPT)?;
    let mood = prompt_line(input, output, MOOD_PROMPT)?;

    Ok(RawPreferences {
        ratings,
        max_duration,
        mood,
    })
}

fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
