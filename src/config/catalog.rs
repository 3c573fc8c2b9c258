use crate::domain::model::Movie;
use crate::utils::error::Result;

/// Raw catalog record, validated when turned into a [`Movie`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub title: &'a str,
    pub rating: &'a str,
    pub duration_minutes: u32,
    pub tags: &'a [&'a str],
    pub score: f64,
}

impl CatalogEntry<'_> {
    pub fn to_movie(&self) -> Result<Movie> {
        Movie::new(
            self.title,
            self.rating,
            self.duration_minutes,
            self.tags.iter().copied(),
            self.score,
        )
    }
}

pub const BUILTIN_ENTRIES: [CatalogEntry<'static>; 4] = [
    CatalogEntry {
        title: "The Avengers",
        rating: "PG-13",
        duration_minutes: 143,
        tags: &["action", "adventure", "exciting"],
        score: 8.0,
    },
    CatalogEntry {
        title: "Toy Story",
        rating: "G",
        duration_minutes: 81,
        tags: &["family", "funny", "happy"],
        score: 8.3,
    },
    CatalogEntry {
        title: "Inception",
        rating: "PG-13",
        duration_minutes: 148,
        tags: &["mind-bending", "exciting", "suspenseful"],
        score: 8.8,
    },
    CatalogEntry {
        title: "Finding Nemo",
        rating: "G",
        duration_minutes: 100,
        tags: &["family", "happy", "emotional"],
        score: 8.1,
    },
];

/// 任何一筆驗證失敗即中止
pub fn build_catalog(entries: &[CatalogEntry<'_>]) -> Result<Vec<Movie>> {
    entries.iter().map(CatalogEntry::to_movie).collect()
}

/// 略過無效的資料並記錄警告
pub fn build_catalog_lenient(entries: &[CatalogEntry<'_>]) -> Vec<Movie> {
    entries
        .iter()
        .filter_map(|entry| match entry.to_movie() {
            Ok(movie) => Some(movie),
            Err(e) => {
                tracing::warn!("⚠️ Skipping catalog entry '{}': {}", entry.title, e);
                None
            }
        })
        .collect()
}

pub fn builtin_catalog() -> Result<Vec<Movie>> {
    build_catalog(&BUILTIN_ENTRIES)
}
