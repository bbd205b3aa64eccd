//! Browsing controller state.
//!
//! `BrowseState` is the one place where the comic list, the two filters,
//! the loading/error flags and the open detail live. It performs no IO:
//! callers ask it for a [`FetchTicket`], run the fetch however they like,
//! and hand the outcome back through [`BrowseState::apply`].
//!
//! Only the most recently issued ticket is ever applied, so a slow response
//! for an old filter value can never overwrite the list for the current one.

use comicdeck_types::{CatalogQuery, Comic, GenreFilter, genre_facets};

use crate::Result;

/// Number of placeholder cards shown while a fetch is pending
pub const SKELETON_COUNT: usize = 8;

/// A fetch the caller must perform for the given filter state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub id: u64,
    pub query: CatalogQuery,
}

/// What [`BrowseState::apply`] did with an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Loaded(usize),
    Failed,
    /// A newer ticket has been issued since; the outcome was dropped
    Stale,
}

/// What the grid area should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridState<'a> {
    Skeletons(usize),
    Empty,
    Cards(&'a [Comic]),
}

#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    comics: Vec<Comic>,
    loading: bool,
    error: Option<String>,
    query: String,
    genre: GenreFilter,
    selected: Option<Comic>,
    latest_ticket: u64,
}

impl BrowseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comics(&self) -> &[Comic] {
        &self.comics
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn genre(&self) -> &GenreFilter {
        &self.genre
    }

    pub fn selected(&self) -> Option<&Comic> {
        self.selected.as_ref()
    }

    pub fn current_query(&self) -> CatalogQuery {
        CatalogQuery::new(self.query.clone(), self.genre.clone())
    }

    /// Mark a fetch for the current filters as in flight
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.latest_ticket += 1;
        self.loading = true;
        FetchTicket {
            id: self.latest_ticket,
            query: self.current_query(),
        }
    }

    /// Update the free-text query; returns a ticket only if the value changed
    pub fn set_query(&mut self, query: impl Into<String>) -> Option<FetchTicket> {
        let query = query.into();
        if query == self.query {
            return None;
        }
        self.query = query;
        Some(self.begin_fetch())
    }

    /// Update the active genre; returns a ticket only if the value changed
    pub fn set_genre(&mut self, genre: GenreFilter) -> Option<FetchTicket> {
        if genre == self.genre {
            return None;
        }
        self.genre = genre;
        Some(self.begin_fetch())
    }

    /// Apply a finished fetch.
    ///
    /// Success replaces the list and clears the error. Failure records the
    /// message and keeps whatever list was loaded before. Either way the
    /// loading flag drops, unless the outcome belongs to a superseded ticket,
    /// in which case nothing changes.
    pub fn apply(&mut self, ticket: u64, result: Result<Vec<Comic>>) -> Applied {
        if ticket != self.latest_ticket {
            return Applied::Stale;
        }

        self.loading = false;
        match result {
            Ok(comics) => {
                let count = comics.len();
                self.comics = comics;
                self.error = None;
                Applied::Loaded(count)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Applied::Failed
            }
        }
    }

    pub fn genre_facets(&self) -> Vec<GenreFilter> {
        genre_facets(&self.comics)
    }

    pub fn grid(&self) -> GridState<'_> {
        if self.loading {
            GridState::Skeletons(SKELETON_COUNT)
        } else if self.comics.is_empty() {
            if self.error.is_some() {
                GridState::Cards(&[])
            } else {
                GridState::Empty
            }
        } else {
            GridState::Cards(&self.comics)
        }
    }

    /// Open the detail for the comic at `index` (list order)
    pub fn select(&mut self, index: usize) -> bool {
        match self.comics.get(index) {
            Some(comic) => {
                self.selected = Some(comic.clone());
                true
            }
            None => false,
        }
    }

    /// Open the detail for the loaded comic whose id is `id`
    pub fn select_id(&mut self, id: &str) -> bool {
        match self.comics.iter().find(|comic| comic.id.matches(id)) {
            Some(comic) => {
                self.selected = Some(comic.clone());
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
