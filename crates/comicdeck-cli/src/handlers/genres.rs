use anyhow::Result;
use comicdeck_client::CatalogSource;
use comicdeck_types::{GenreFilter, genre_facets};

use crate::context::AppContext;
use crate::presentation::presenters;

/// Facets are derived from the fetched list, so a query narrows them
pub fn handle(ctx: &AppContext, query: Option<String>) -> Result<()> {
    let catalog = ctx.catalog()?;
    let query = super::catalog_query(query, None);

    let comics = catalog.fetch(&query)?;
    let facets: Vec<GenreFilter> = genre_facets(&comics);
    tracing::debug!(facets = facets.len(), "genre facets derived");

    let view_model = presenters::present_genres(&catalog.describe(), &query, &comics, &facets);
    ctx.render(view_model)
}
