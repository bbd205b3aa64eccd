use anyhow::Result;
use comicdeck_client::CatalogSource;

use crate::context::AppContext;
use crate::presentation::formatters::terminal_width;
use crate::presentation::presenters;

pub fn handle(ctx: &AppContext, query: Option<String>, genre: Option<String>) -> Result<()> {
    let catalog = ctx.catalog()?;
    let query = super::catalog_query(query, genre);

    let comics = catalog.fetch(&query)?;
    tracing::info!(count = comics.len(), "catalog listed");

    let view_model = presenters::present_list(
        &catalog.describe(),
        &query,
        &comics,
        terminal_width(),
    );
    ctx.render(view_model)
}
