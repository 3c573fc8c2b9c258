use crate::domain::model::{Movie, Query};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Filter, rank, then truncate.
///
/// Survivors keep catalog order before sorting and the sort is stable, so
/// movies tied on both score and duration come out in catalog order.
pub fn get_recommendations<'a>(
    catalog: &'a [Movie],
    allowed_ratings: &HashSet<String>,
    max_duration: Option<u32>,
    mood: Option<&str>,
    max_results: usize,
) -> Vec<&'a Movie> {
    let survivors = filter_catalog(catalog, allowed_ratings, max_duration, mood);
    rank_and_limit(survivors, max_results)
}

pub fn filter_catalog<'a>(
    catalog: &'a [Movie],
    allowed_ratings: &HashSet<String>,
    max_duration: Option<u32>,
    mood: Option<&str>,
) -> Vec<&'a Movie> {
    catalog
        .iter()
        .filter(|movie| movie.matches(max_duration, allowed_ratings, mood))
        .collect()
}

pub fn rank_and_limit(mut survivors: Vec<&Movie>, max_results: usize) -> Vec<&Movie> {
    survivors.sort_by(|a, b| compare_rank(a, b));
    survivors.truncate(max_results);
    survivors
}

/// 分數由高到低，同分時片長短者優先
pub fn compare_rank(a: &Movie, b: &Movie) -> Ordering {
    score_key(b)
        .total_cmp(&score_key(a))
        .then_with(|| a.duration_minutes().cmp(&b.duration_minutes()))
}

// NaN 排在最後；-0.0 與 0.0 視為同分
fn score_key(movie: &Movie) -> f64 {
    let score = movie.score();
    if score.is_nan() {
        f64::NEG_INFINITY
    } else {
        score + 0.0
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Recommender;

impl Recommender {
    pub fn new() -> Self {
        Self
    }

    pub fn filter<'a>(&self, catalog: &'a [Movie], query: &Query) -> Vec<&'a Movie> {
        filter_catalog(
            catalog,
            &query.allowed_ratings,
            query.max_duration,
            query.mood.as_deref(),
        )
    }

    pub fn recommend<'a>(&self, catalog: &'a [Movie], query: &Query) -> Vec<&'a Movie> {
        rank_and_limit(self.filter(catalog, query), query.max_results)
    }
}
