pub mod catalog;
pub mod tui;

pub use catalog::{ComicDetailView, ComicListView, ConfigView, GenreListView};
