//! # Presentation Layer
//!
//! MVVM-style split between data and drawing, shared by the console
//! commands and the interactive browser.
//!
//! ## Data Flow
//!
//! ### Console output (text / JSON):
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ ConsoleRenderer ] ==(JSON)==> serde_json
//!                                                                        ==(Text)==> Display (views/)
//! ```
//!
//! ### Interactive browser:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ BrowseScreenViewModel ] --channel--> [ TuiRenderer (router) ]
//!      ^                                                                          |
//!      +------------------------- RendererSignal <---- [ Component ] <---- user input
//!                                                      (UI state)
//!                                                           |
//!                                                       [ View ] (ratatui Widget)
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels are data.** Raw values plus the labels the views need;
//!    they must serialize cleanly to JSON.
//! 2. **Presenters are pure.** All decisions (grid mode, facet activity,
//!    banner level) are made there, never in views.
//! 3. **Components own UI state only** (`views/tui/components`). Focus,
//!    cursors, scroll offsets and hit-test rectangles. Catalog data is read
//!    from the ViewModel each frame, and cursors are clamped against it
//!    before use.
//! 4. **Views only draw.** They take a reference to a ViewModel and paint it.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
