use crate::domain::model::Movie;

/// 提供目錄內容；推薦期間只讀不寫
pub trait CatalogProvider {
    fn movies(&self) -> &[Movie];
}

impl CatalogProvider for Vec<Movie> {
    fn movies(&self) -> &[Movie] {
        self
    }
}

pub trait ConfigProvider {
    fn max_results(&self) -> usize;
    fn default_ratings(&self) -> &[String];
    fn output_format(&self) -> &str;
    fn tag_delimiter(&self) -> &str;
}
