use crate::domain::model::Movie;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;

pub const RESULTS_HEADING: &str = "Recommended Movies:";
pub const NO_MATCHES_MESSAGE: &str = "No movies match your criteria.";

pub fn format_movie(movie: &Movie, tag_delimiter: &str) -> String {
    let tags: Vec<&str> = movie.tags().iter().map(String::as_str).collect();
    format!(
        "{} ({}, {} min, Rating Score: {}, Tags: {})",
        movie.title(),
        movie.rating(),
        movie.duration_minutes(),
        movie.score(),
        tags.join(tag_delimiter)
    )
}

pub fn render_text(movies: &[&Movie], tag_delimiter: &str) -> String {
    let mut lines = vec![RESULTS_HEADING.to_string()];

    if movies.is_empty() {
        lines.push(NO_MATCHES_MESSAGE.to_string());
    } else {
        lines.extend(movies.iter().map(|m| format_movie(m, tag_delimiter)));
    }

    lines.join("\n")
}

/// 輸出為電影物件陣列，沒有結果時為 `[]`
pub fn render_json(movies: &[&Movie]) -> Result<String> {
    Ok(serde_json::to_string_pretty(movies)?)
}

pub fn render(movies: &[&Movie], config: &impl ConfigProvider) -> Result<String> {
    match config.output_format() {
        "json" => render_json(movies),
        _ => Ok(render_text(movies, config.tag_delimiter())),
    }
}
