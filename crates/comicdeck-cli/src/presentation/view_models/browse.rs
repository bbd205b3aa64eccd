//! ViewModels for the interactive browser.
//!
//! One `BrowseScreenViewModel` is a complete snapshot of what the screen
//! shows. The renderer draws it as-is; it never looks at domain types.

use serde::Serialize;

use super::catalog::ComicCardViewModel;
use super::common::StatusLevel;

#[derive(Debug, Clone, Serialize)]
pub struct BrowseScreenViewModel {
    pub hero: HeroViewModel,
    pub filter_bar: FilterBarViewModel,
    /// Present only while the last fetch failed
    pub banner: Option<BannerViewModel>,
    pub grid: GridViewModel,
    /// Present only while a comic is selected
    pub detail: Option<DetailViewModel>,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeroViewModel {
    pub title: String,
    pub tagline: String,
    pub endpoint: String,
    pub loaded_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterBarViewModel {
    pub query: String,
    pub genres: Vec<GenreChipViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreChipViewModel {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BannerViewModel {
    pub message: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum GridViewModel {
    Skeletons { count: usize },
    Cards { cards: Vec<ComicCardViewModel> },
    Empty { message: String },
}

impl GridViewModel {
    /// Number of real (non-placeholder) cards
    pub fn card_count(&self) -> usize {
        match self {
            GridViewModel::Cards { cards } => cards.len(),
            GridViewModel::Skeletons { .. } | GridViewModel::Empty { .. } => 0,
        }
    }

    /// Id of the card at `index`, if that card is on screen
    pub fn card_id(&self, index: usize) -> Option<&str> {
        match self {
            GridViewModel::Cards { cards } => cards.get(index).map(|card| card.id.as_str()),
            GridViewModel::Skeletons { .. } | GridViewModel::Empty { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailViewModel {
    pub comic: ComicCardViewModel,
    pub select_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub comic_count: usize,
    pub status_message: String,
    pub status_level: StatusLevel,
}
