use serde::{Deserialize, Serialize};

use super::genre::GenreFilter;

/// Filter state sent to `GET /api/comics`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub q: String,
    pub genre: GenreFilter,
}

impl CatalogQuery {
    pub fn new(q: impl Into<String>, genre: GenreFilter) -> Self {
        Self {
            q: q.into(),
            genre,
        }
    }

    /// Request parameters in wire order.
    ///
    /// `q` is sent only when non-empty and is passed through untrimmed;
    /// `genre` is sent verbatim unless it is the `All` sentinel.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if !self.q.is_empty() {
            pairs.push(("q", self.q.clone()));
        }
        if let Some(genre) = self.genre.as_param() {
            pairs.push(("genre", genre.to_string()));
        }
        pairs
    }
}
