pub mod engine;
pub mod recommender;

pub use crate::domain::model::{Movie, Query};
pub use crate::domain::ports::{CatalogProvider, ConfigProvider};
pub use crate::utils::error::Result;
