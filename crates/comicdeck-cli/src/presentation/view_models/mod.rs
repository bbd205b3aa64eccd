pub mod browse;
pub mod catalog;
pub mod common;
pub mod result;

pub use browse::{
    BannerViewModel, BrowseScreenViewModel, DetailViewModel, FilterBarViewModel,
    GenreChipViewModel, GridViewModel, HeroViewModel, StatusBarViewModel,
};
pub use catalog::{
    ComicCardViewModel, ComicDetailViewModel, ComicListViewModel, ConfigViewModel,
    GenreListViewModel,
};
pub use common::{Guidance, StatusBadge, StatusLevel};
pub use result::CommandResultViewModel;
