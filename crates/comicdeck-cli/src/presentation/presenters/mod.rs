pub mod browse;
pub mod catalog;

pub use browse::build_screen_view_model;
pub use catalog::{present_card, present_config, present_detail, present_genres, present_list};
