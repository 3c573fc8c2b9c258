use crate::utils::error::{MovieNightError, Result};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// 可接受的分級代碼 (大小寫敏感，不可擴充)
pub const RECOGNIZED_RATINGS: [&str; 10] = [
    "G", "PG", "PG-13", "R", "NC-17", "NR", "TV-MA", "TV-14", "TV-Y", "TV-Y7",
];

pub const DEFAULT_MAX_RESULTS: usize = 5;

pub fn is_recognized_rating(rating: &str) -> bool {
    RECOGNIZED_RATINGS.contains(&rating)
}

/// A catalog entry. Fields are private so a constructed movie cannot change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    title: String,
    rating: String,
    duration_minutes: u32,
    tags: BTreeSet<String>,
    score: f64,
}

impl Movie {
    pub fn new<I, T>(
        title: impl Into<String>,
        rating: impl Into<String>,
        duration_minutes: u32,
        tags: I,
        score: f64,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let rating = rating.into();
        if !is_recognized_rating(&rating) {
            return Err(MovieNightError::InvalidRating { rating });
        }

        Ok(Self {
            title: title.into(),
            rating,
            duration_minutes,
            tags: tags
                .into_iter()
                .map(|tag| tag.as_ref().to_lowercase())
                .collect(),
            score,
        })
    }

    /// 未提供分數時預設為 0
    pub fn unscored<I, T>(
        title: impl Into<String>,
        rating: impl Into<String>,
        duration_minutes: u32,
        tags: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self::new(title, rating, duration_minutes, tags, 0.0)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(&tag.to_lowercase())
    }

    /// Returns a copy carrying one more tag; `self` is left as is.
    pub fn with_tag(&self, tag: &str) -> Self {
        let mut movie = self.clone();
        movie.tags.insert(tag.to_lowercase());
        movie
    }

    /// Hard-constraint check. Absent or empty criteria always pass.
    pub fn matches(
        &self,
        max_duration: Option<u32>,
        allowed_ratings: &HashSet<String>,
        mood: Option<&str>,
    ) -> bool {
        if let Some(max) = max_duration {
            if self.duration_minutes > max {
                return false;
            }
        }

        if !allowed_ratings.is_empty() && !allowed_ratings.contains(&self.rating) {
            return false;
        }

        match mood {
            Some(mood) if !mood.trim().is_empty() => self.has_tag(mood),
            _ => true,
        }
    }

    pub fn matches_query(&self, query: &Query) -> bool {
        self.matches(
            query.max_duration,
            &query.allowed_ratings,
            query.mood.as_deref(),
        )
    }
}

/// 單次推薦請求的條件，用完即丟
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub allowed_ratings: HashSet<String>,
    pub max_duration: Option<u32>,
    pub mood: Option<String>,
    pub max_results: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            allowed_ratings: HashSet::new(),
            max_duration: None,
            mood: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ratings<I, T>(mut self, ratings: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.allowed_ratings = ratings.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_max_duration(mut self, max_duration: Option<u32>) -> Self {
        self.max_duration = max_duration;
        self
    }

    pub fn with_mood(mut self, mood: Option<String>) -> Self {
        self.mood = mood;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(codes: &[&str]) -> HashSet<String> {
        codes.iter().map(|code| code.to_string()).collect()
    }

    fn toy_story() -> Movie {
        Movie::new("Toy Story", "G", 81, ["family", "funny", "happy"], 8.3).unwrap()
    }

    #[test]
    fn test_every_recognized_rating_constructs() {
        for rating in RECOGNIZED_RATINGS {
            assert!(Movie::unscored("Any", rating, 90, ["drama"]).is_ok(), "{}", rating);
        }
    }

    #[test]
    fn test_unrecognized_rating_is_rejected() {
        for rating in ["X", "pg-13", "PG13", "", "TV-G"] {
            let err = Movie::unscored("Any", rating, 90, Vec::<String>::new()).unwrap_err();
            assert!(err.is_validation_error(), "{}", rating);
        }
    }

    #[test]
    fn test_tags_are_lowercased_and_deduplicated() {
        let movie = Movie::unscored("Any", "PG", 90, ["Funny", "FUNNY", "funny"]).unwrap();

        assert_eq!(movie.tags().len(), 1);
        assert!(movie.tags().contains("funny"));
    }

    #[test]
    fn test_unscored_defaults_to_zero() {
        let movie = Movie::unscored("Any", "PG", 90, ["drama"]).unwrap();
        assert_eq!(movie.score(), 0.0);
    }

    #[test]
    fn test_with_tag_leaves_original_untouched() {
        let original = toy_story();
        let tagged = original.with_tag("Classic");

        assert!(tagged.has_tag("classic"));
        assert!(!original.has_tag("classic"));
        assert_eq!(tagged.title(), original.title());
    }

    #[test]
    fn test_matches_with_no_criteria() {
        assert!(toy_story().matches(None, &HashSet::new(), None));
    }

    #[test]
    fn test_matches_duration_cap_is_inclusive() {
        let movie = toy_story();

        assert!(movie.matches(Some(81), &HashSet::new(), None));
        assert!(!movie.matches(Some(80), &HashSet::new(), None));
    }

    #[test]
    fn test_matches_allowed_ratings() {
        let movie = toy_story();

        assert!(movie.matches(None, &ratings(&["G", "PG"]), None));
        assert!(!movie.matches(None, &ratings(&["R"]), None));
    }

    #[test]
    fn test_matches_mood_is_case_insensitive() {
        let movie = toy_story();

        assert!(movie.matches(None, &HashSet::new(), Some("FAMILY")));
        assert!(!movie.matches(None, &HashSet::new(), Some("scary")));
    }

    #[test]
    fn test_blank_mood_is_no_restriction() {
        let movie = toy_story();

        assert!(movie.matches(None, &HashSet::new(), Some("")));
        assert!(movie.matches(None, &HashSet::new(), Some("   ")));
    }

    #[test]
    fn test_matches_requires_all_constraints() {
        let movie = toy_story();
        let allowed = ratings(&["G"]);

        assert!(movie.matches(Some(90), &allowed, Some("funny")));
        assert!(!movie.matches(Some(60), &allowed, Some("funny")));
        assert!(!movie.matches(Some(90), &ratings(&["PG"]), Some("funny")));
        assert!(!movie.matches(Some(90), &allowed, Some("sad")));
    }

    #[test]
    fn test_matches_query_uses_query_fields() {
        let query = Query::new()
            .with_ratings(["G"])
            .with_max_duration(Some(100))
            .with_mood(Some("happy".to_string()));

        assert!(toy_story().matches_query(&query));
        assert_eq!(query.max_results, DEFAULT_MAX_RESULTS);
    }
}
