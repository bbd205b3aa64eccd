use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::comic::Comic;

/// Label of the sentinel facet that disables genre filtering
pub const ALL_GENRES: &str = "All";

/// Active genre facet
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GenreFilter {
    #[default]
    All,
    Named(String),
}

impl GenreFilter {
    /// `"All"` (exact match) is the sentinel; anything else is a genre label
    pub fn parse(label: &str) -> Self {
        if label == ALL_GENRES {
            GenreFilter::All
        } else {
            GenreFilter::Named(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            GenreFilter::All => ALL_GENRES,
            GenreFilter::Named(name) => name,
        }
    }

    /// Value for the `genre` request parameter; `None` means omit it
    pub fn as_param(&self) -> Option<&str> {
        match self {
            GenreFilter::All => None,
            GenreFilter::Named(name) => Some(name),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, GenreFilter::All)
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for GenreFilter {
    fn from(label: String) -> Self {
        GenreFilter::parse(&label)
    }
}

impl From<&str> for GenreFilter {
    fn from(label: &str) -> Self {
        GenreFilter::parse(label)
    }
}

impl From<GenreFilter> for String {
    fn from(filter: GenreFilter) -> Self {
        filter.label().to_string()
    }
}

/// Derive the genre facet list from the currently loaded comics.
///
/// Always starts with the `All` sentinel, followed by the distinct genres in
/// ascending order. Blank labels and a literal `"All"` genre are folded away
/// so the list never carries duplicates.
pub fn genre_facets(comics: &[Comic]) -> Vec<GenreFilter> {
    let distinct: BTreeSet<&str> = comics
        .iter()
        .map(|c| c.genre.as_str())
        .filter(|g| !g.trim().is_empty() && *g != ALL_GENRES)
        .collect();

    std::iter::once(GenreFilter::All)
        .chain(distinct.into_iter().map(|g| GenreFilter::Named(g.to_string())))
        .collect()
}
