//! Presenter for the interactive browser.
//!
//! PURE FUNCTIONS from `BrowseState` to `BrowseScreenViewModel`. The handler
//! owns the state; every decision about what the screen shows is made here.

use comicdeck_client::{BrowseState, GridState};

use super::catalog::present_card;
use crate::presentation::view_models::{
    BannerViewModel, BrowseScreenViewModel, DetailViewModel, FilterBarViewModel,
    GenreChipViewModel, GridViewModel, HeroViewModel, StatusBarViewModel, StatusLevel,
};

pub const HERO_TITLE: &str = "COMICDECK";
pub const HERO_TAGLINE: &str = "Find your next favourite series";
pub const EMPTY_MESSAGE: &str = "No comics found. Try a different search or genre.";
pub const SELECT_LABEL: &str = "Select this Comic";

/// Build the complete screen snapshot from controller state
pub fn build_screen_view_model(state: &BrowseState, endpoint: &str) -> BrowseScreenViewModel {
    BrowseScreenViewModel {
        hero: HeroViewModel {
            title: HERO_TITLE.to_string(),
            tagline: HERO_TAGLINE.to_string(),
            endpoint: endpoint.to_string(),
            loaded_count: state.comics().len(),
        },
        filter_bar: build_filter_bar(state),
        banner: state.error().map(|message| BannerViewModel {
            message: message.to_string(),
            level: StatusLevel::Error,
        }),
        grid: build_grid(state),
        detail: state.selected().map(|comic| DetailViewModel {
            comic: present_card(comic),
            select_label: SELECT_LABEL.to_string(),
        }),
        status_bar: build_status_bar(state),
    }
}

fn build_filter_bar(state: &BrowseState) -> FilterBarViewModel {
    let mut genres: Vec<GenreChipViewModel> = state
        .genre_facets()
        .into_iter()
        .map(|facet| GenreChipViewModel {
            active: &facet == state.genre(),
            label: facet.label().to_string(),
        })
        .collect();

    // The active genre may be missing from the facets (e.g. its fetch came
    // back empty); keep it visible so the user can see and change it.
    if !genres.iter().any(|chip| chip.active) {
        genres.push(GenreChipViewModel {
            label: state.genre().label().to_string(),
            active: true,
        });
    }

    FilterBarViewModel {
        query: state.query().to_string(),
        genres,
    }
}

fn build_grid(state: &BrowseState) -> GridViewModel {
    match state.grid() {
        GridState::Skeletons(count) => GridViewModel::Skeletons { count },
        GridState::Empty => GridViewModel::Empty {
            message: EMPTY_MESSAGE.to_string(),
        },
        GridState::Cards(comics) => GridViewModel::Cards {
            cards: comics.iter().map(present_card).collect(),
        },
    }
}

fn build_status_bar(state: &BrowseState) -> StatusBarViewModel {
    let count = state.comics().len();
    let (status_message, status_level) = if state.is_loading() {
        ("Loading comics...".to_string(), StatusLevel::Info)
    } else if state.error().is_some() {
        (
            "Request failed. Change a filter or press Ctrl-R to retry".to_string(),
            StatusLevel::Error,
        )
    } else {
        (
            format!("{} comic{} loaded", count, if count == 1 { "" } else { "s" }),
            StatusLevel::Success,
        )
    };

    StatusBarViewModel {
        comic_count: count,
        status_message,
        status_level,
    }
}
