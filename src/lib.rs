pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::catalog::{build_catalog, build_catalog_lenient, builtin_catalog, CatalogEntry};
pub use config::Settings;
pub use core::{
    engine::RecommendationEngine,
    recommender::{get_recommendations, Recommender},
};
pub use domain::model::{Movie, Query, RECOGNIZED_RATINGS};
pub use utils::error::{MovieNightError, Result};
