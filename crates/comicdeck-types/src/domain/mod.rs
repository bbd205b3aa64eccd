pub mod comic;
pub mod genre;
pub mod query;

pub use comic::*;
pub use genre::*;
pub use query::*;
