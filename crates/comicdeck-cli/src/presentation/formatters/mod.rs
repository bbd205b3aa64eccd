pub mod terminal;
pub mod text;

pub use terminal::terminal_width;
pub use text::{one_line, truncate};
