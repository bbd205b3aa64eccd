// NOTE: comicdeck layout
//
// Handler (controller) owns BrowseState and the fetch coordinator.
// Renderer (TUI thread) owns focus, cursors and the search edit buffer.
// They talk over two channels:
// - handler -> renderer: TuiEvent::Update(screen view model)
// - renderer -> handler: RendererSignal (query/genre changes, open/close detail, quit)
//
// Console commands (list, genres, show) run one fetch and go through the same
// presenter -> view model -> renderer path, so `--format json` dumps exactly
// what the text view shows.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
