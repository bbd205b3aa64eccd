pub mod browse;
pub mod config;
pub mod genres;
pub mod list;
pub mod show;

use comicdeck_types::{CatalogQuery, GenreFilter};

/// Filter state for one-shot commands; a missing genre means `All`
pub(crate) fn catalog_query(query: Option<String>, genre: Option<String>) -> CatalogQuery {
    let genre = genre
        .as_deref()
        .map(GenreFilter::parse)
        .unwrap_or_default();
    CatalogQuery::new(query.unwrap_or_default(), genre)
}
