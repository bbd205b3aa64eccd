use anyhow::{Result, anyhow};
use comicdeck_client::CatalogSource;

use crate::context::AppContext;
use crate::presentation::presenters;

/// The backend has no single-item endpoint; look the comic up in the
/// (optionally filtered) listing
pub fn handle(
    ctx: &AppContext,
    id: &str,
    query: Option<String>,
    genre: Option<String>,
) -> Result<()> {
    let catalog = ctx.catalog()?;
    let query = super::catalog_query(query, genre);

    let comics = catalog.fetch(&query)?;
    let comic = comics
        .iter()
        .find(|c| c.id.matches(id))
        .ok_or_else(|| anyhow!("No comic with id '{}' in the catalog", id))?;

    ctx.render(presenters::present_detail(comic))
}
