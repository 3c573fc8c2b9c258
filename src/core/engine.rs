use crate::core::recommender::{rank_and_limit, Recommender};
use crate::domain::model::{Movie, Query};
use crate::domain::ports::CatalogProvider;

pub struct RecommendationEngine<C: CatalogProvider> {
    catalog: C,
    recommender: Recommender,
}

impl<C: CatalogProvider> RecommendationEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            recommender: Recommender::new(),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn run(&self, query: &Query) -> Vec<&Movie> {
        let movies = self.catalog.movies();
        tracing::debug!("Query: {:?}", query);
        tracing::info!("🎬 Searching {} movies", movies.len());

        let survivors = self.recommender.filter(movies, query);
        let matching = survivors.len();
        tracing::debug!("{} movies passed the filters", matching);

        let recommendations = rank_and_limit(survivors, query.max_results);
        tracing::info!(
            "✅ Returning {} of {} matching movies (limit {})",
            recommendations.len(),
            matching,
            query.max_results
        );

        recommendations
    }
}
