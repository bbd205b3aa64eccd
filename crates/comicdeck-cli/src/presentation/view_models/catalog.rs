use serde::Serialize;
use std::fmt;

use crate::presentation::views::{ComicDetailView, ComicListView, ConfigView, GenreListView};

/// One comic as shown on a card, in a list row or in the detail view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComicCardViewModel {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub rating: f64,
    /// `rating` with exactly one decimal place
    pub rating_label: String,
    pub tags: Vec<String>,
    pub description: String,
    pub cover_url: String,
}

#[derive(Debug, Serialize)]
pub struct ComicListViewModel {
    pub endpoint: String,
    pub query: Option<String>,
    pub genre: String,
    pub total_count: usize,
    pub comics: Vec<ComicCardViewModel>,
    /// Column budget for one-line descriptions in text mode
    #[serde(skip)]
    pub description_width: usize,
}

#[derive(Debug, Serialize)]
pub struct GenreListViewModel {
    pub endpoint: String,
    pub query: Option<String>,
    pub genres: Vec<String>,
    pub comic_count: usize,
}

#[derive(Debug, Serialize)]
pub struct ComicDetailViewModel {
    pub comic: ComicCardViewModel,
}

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub data_dir: String,
    pub config_path: String,
    pub config_exists: bool,
    pub base_url: String,
    pub endpoint: String,
    pub timeout_secs: Option<u64>,
    pub log_file: String,
}

// --------------------------------------------------------
// Display bridges to the console views
// --------------------------------------------------------

impl fmt::Display for ComicListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ComicListView::new(self))
    }
}

impl fmt::Display for GenreListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", GenreListView::new(self))
    }
}

impl fmt::Display for ComicDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ComicDetailView::new(self))
    }
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ConfigView::new(self))
    }
}
