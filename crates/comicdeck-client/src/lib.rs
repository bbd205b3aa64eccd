//! Catalog access and browsing state for comicdeck.
//!
//! - [`HttpCatalog`]: blocking client for `GET /api/comics`
//! - [`FetchCoordinator`]: runs fetches off the UI loop and reports outcomes by ticket
//! - [`BrowseState`]: the single owner of list, filters, loading/error flags and selection
//! - [`Config`]: `config.toml` and endpoint resolution

pub mod browse;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;

pub use browse::{Applied, BrowseState, FetchTicket, GridState, SKELETON_COUNT};
pub use catalog::{CatalogSource, HttpCatalog};
pub use config::{ApiConfig, Config, resolve_base_url, resolve_workspace_path};
pub use error::{Error, Result};
pub use fetch::{FetchCoordinator, FetchOutcome};
