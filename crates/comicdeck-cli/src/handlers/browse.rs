//! Browse Handler for the interactive TUI
//!
//! This module implements the Handler (Controller) that:
//! - Owns state (BrowseState) and the fetch coordinator
//! - Turns renderer signals into filter changes and fetches
//! - Calls Presenter to build ViewModels
//! - Sends ViewModels to Renderer via channel

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use comicdeck_client::{Applied, BrowseState, CatalogSource, FetchCoordinator, FetchOutcome};
use comicdeck_types::GenreFilter;

use crate::context::AppContext;
use crate::presentation::presenters::build_screen_view_model;
use crate::presentation::renderers::{RendererSignal, TuiEvent, TuiRenderer};

/// How long one loop pass waits for a finished fetch
const FETCH_POLL: Duration = Duration::from_millis(50);

/// Handler state that manages domain data
struct BrowseHandler {
    state: BrowseState,
    coordinator: FetchCoordinator,
    endpoint: String,
    /// Sender to TUI renderer
    tx: Sender<TuiEvent>,
}

impl BrowseHandler {
    fn new(source: Arc<dyn CatalogSource>, tx: Sender<TuiEvent>) -> Self {
        let endpoint = source.describe();
        Self {
            state: BrowseState::new(),
            coordinator: FetchCoordinator::new(source),
            endpoint,
            tx,
        }
    }

    /// Kick off the first load with empty filters
    fn start(&mut self) {
        let ticket = self.state.begin_fetch();
        self.coordinator.dispatch(ticket);
        self.send_update();
    }

    fn process_signal(&mut self, signal: RendererSignal) -> ControlFlow<()> {
        tracing::debug!(?signal, "renderer signal");

        match signal {
            RendererSignal::QueryChanged(query) => {
                if let Some(ticket) = self.state.set_query(query) {
                    self.coordinator.dispatch(ticket);
                }
            }
            RendererSignal::GenreSelected(label) => {
                if let Some(ticket) = self.state.set_genre(GenreFilter::parse(&label)) {
                    self.coordinator.dispatch(ticket);
                }
            }
            RendererSignal::OpenComic(id) => {
                if !self.state.select_id(&id) {
                    tracing::warn!(%id, "open requested for a comic that is not loaded");
                    return ControlFlow::Continue(());
                }
            }
            RendererSignal::CloseDetail => self.state.clear_selection(),
            RendererSignal::Refresh => {
                let ticket = self.state.begin_fetch();
                self.coordinator.dispatch(ticket);
            }
            RendererSignal::Quit => return ControlFlow::Break(()),
        }

        self.send_update();
        ControlFlow::Continue(())
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        let ticket = outcome.ticket;
        match self.state.apply(ticket, outcome.result) {
            Applied::Loaded(count) => {
                tracing::info!(ticket, count, "catalog loaded");
                self.send_update();
            }
            Applied::Failed => {
                tracing::warn!(ticket, error = self.state.error().unwrap_or(""), "catalog fetch failed");
                self.send_update();
            }
            Applied::Stale => {
                tracing::debug!(ticket, "dropped response for a superseded request");
            }
        }
    }

    /// Send updated ViewModel to renderer
    fn send_update(&self) {
        let screen_vm = build_screen_view_model(&self.state, &self.endpoint);

        // Ignore errors if renderer has quit
        let _ = self.tx.send(TuiEvent::Update(Box::new(screen_vm)));
    }

    fn send_error(&self, msg: String) {
        let _ = self.tx.send(TuiEvent::Error(msg));
    }
}

/// Main entry point for the interactive browser
pub fn handle(ctx: &AppContext) -> Result<()> {
    // Create channels for bidirectional communication
    let (event_tx, event_rx) = mpsc::channel(); // Handler -> Renderer (events)
    let (signal_tx, signal_rx) = mpsc::channel(); // Renderer -> Handler (signals)

    // Spawn TUI renderer thread
    let tui_handle = thread::spawn(move || {
        let renderer = TuiRenderer::new().with_signal_sender(signal_tx);
        renderer.run(event_rx)
    });

    // Run handler in main thread
    let result = run_handler(ctx, event_tx, signal_rx);

    // Wait for TUI to finish
    match tui_handle.join() {
        Ok(Err(e)) => tracing::error!(error = %e, "TUI renderer failed"),
        Ok(Ok(())) => {}
        Err(e) => eprintln!("TUI thread panicked: {:?}", e),
    }

    result
}

fn run_handler(
    ctx: &AppContext,
    tx: Sender<TuiEvent>,
    signal_rx: Receiver<RendererSignal>,
) -> Result<()> {
    let catalog = match ctx.catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            let _ = tx.send(TuiEvent::Error(format!(
                "Cannot use catalog address '{}': {}",
                ctx.base_url, e
            )));
            return Err(e);
        }
    };
    tracing::info!(endpoint = %catalog.endpoint(), "browse session started");

    let mut handler = BrowseHandler::new(Arc::new(catalog), tx);
    handler.start();
    run_loop(&mut handler, &signal_rx);

    tracing::info!(
        pending = handler.coordinator.in_flight(),
        "browse session ended"
    );
    Ok(())
}

/// Event loop: drain renderer signals, then wait briefly for fetches
fn run_loop(handler: &mut BrowseHandler, signal_rx: &Receiver<RendererSignal>) {
    loop {
        loop {
            match signal_rx.try_recv() {
                Ok(signal) => {
                    if handler.process_signal(signal).is_break() {
                        return;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // Renderer disconnected unexpectedly
                    handler.send_error("Renderer disconnected".to_string());
                    return;
                }
            }
        }

        if let Some(outcome) = handler.coordinator.recv_timeout(FETCH_POLL) {
            handler.apply_outcome(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{BrowseScreenViewModel, GridViewModel};
    use comicdeck_client::Error;
    use comicdeck_types::{CatalogQuery, Comic};
    use std::sync::Mutex;

    /// Serves the fixture catalog; the query text "boom" fails
    struct FixtureSource {
        seen: Mutex<Vec<CatalogQuery>>,
    }

    impl FixtureSource {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl CatalogSource for FixtureSource {
        fn fetch(&self, query: &CatalogQuery) -> comicdeck_client::Result<Vec<Comic>> {
            self.seen.lock().unwrap().push(query.clone());
            if query.q == "boom" {
                return Err(Error::Status {
                    status: 500,
                    message: Some("Internal error".to_string()),
                });
            }
            Ok(comicdeck_testing::fixtures::sample_comics()
                .into_iter()
                .filter(|c| query.genre.as_param().is_none_or(|g| c.genre == g))
                .collect())
        }

        fn describe(&self) -> String {
            "http://fixture/api/comics".to_string()
        }
    }

    fn handler_with(source: Arc<FixtureSource>) -> (BrowseHandler, Receiver<TuiEvent>) {
        let (tx, rx) = mpsc::channel();
        (BrowseHandler::new(source, tx), rx)
    }

    fn settle(handler: &mut BrowseHandler) {
        while handler.coordinator.in_flight() > 0 {
            let outcome = handler
                .coordinator
                .recv_timeout(Duration::from_secs(5))
                .expect("fetch did not finish");
            handler.apply_outcome(outcome);
        }
    }

    fn last_screen(rx: &Receiver<TuiEvent>) -> BrowseScreenViewModel {
        let mut last = None;
        while let Ok(event) = rx.try_recv() {
            if let TuiEvent::Update(vm) = event {
                last = Some(*vm);
            }
        }
        last.expect("no screen update was sent")
    }

    #[test]
    fn test_start_shows_skeletons_then_cards() {
        let (mut handler, rx) = handler_with(FixtureSource::new());
        handler.start();
        assert!(matches!(
            last_screen(&rx).grid,
            GridViewModel::Skeletons { count: 8 }
        ));

        settle(&mut handler);
        let screen = last_screen(&rx);
        assert_eq!(screen.grid.card_count(), 6);
        assert!(screen.banner.is_none());
    }

    #[test]
    fn test_genre_signal_refetches_with_parameter() {
        let source = FixtureSource::new();
        let (mut handler, rx) = handler_with(source.clone());
        handler.start();
        settle(&mut handler);

        let flow = handler.process_signal(RendererSignal::GenreSelected("Horror".to_string()));
        assert!(flow.is_continue());
        settle(&mut handler);

        assert_eq!(last_screen(&rx).grid.card_count(), 2);
        let seen = source.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].genre.as_param(), Some("Horror"));
    }

    #[test]
    fn test_selecting_all_drops_genre_parameter() {
        let source = FixtureSource::new();
        let (mut handler, _rx) = handler_with(source.clone());
        handler.start();
        let _ = handler.process_signal(RendererSignal::GenreSelected("Horror".to_string()));
        let _ = handler.process_signal(RendererSignal::GenreSelected("All".to_string()));
        settle(&mut handler);

        let seen = source.seen.lock().unwrap();
        assert_eq!(seen.last().unwrap().genre.as_param(), None);
    }

    #[test]
    fn test_unchanged_query_does_not_refetch() {
        let source = FixtureSource::new();
        let (mut handler, _rx) = handler_with(source.clone());
        handler.start();
        let _ = handler.process_signal(RendererSignal::QueryChanged("ash".to_string()));
        let _ = handler.process_signal(RendererSignal::QueryChanged("ash".to_string()));
        settle(&mut handler);

        assert_eq!(source.seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_failure_keeps_list_and_shows_banner() {
        let (mut handler, rx) = handler_with(FixtureSource::new());
        handler.start();
        settle(&mut handler);

        let _ = handler.process_signal(RendererSignal::QueryChanged("boom".to_string()));
        settle(&mut handler);

        let screen = last_screen(&rx);
        assert!(screen.banner.is_some());
        assert_eq!(screen.grid.card_count(), 6);
    }

    #[test]
    fn test_open_and_close_detail() {
        let (mut handler, rx) = handler_with(FixtureSource::new());
        handler.start();
        settle(&mut handler);

        let _ = handler.process_signal(RendererSignal::OpenComic("3".to_string()));
        let detail = last_screen(&rx).detail.expect("detail should be open");
        assert_eq!(detail.comic.title, "Orbit of Ash");

        let _ = handler.process_signal(RendererSignal::CloseDetail);
        assert!(last_screen(&rx).detail.is_none());
    }

    #[test]
    fn test_open_unknown_id_is_ignored() {
        let (mut handler, rx) = handler_with(FixtureSource::new());
        handler.start();
        settle(&mut handler);
        let _ = last_screen(&rx);

        let _ = handler.process_signal(RendererSignal::OpenComic("99".to_string()));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_open_resolves_id_against_the_newest_list() {
        let (mut handler, rx) = handler_with(FixtureSource::new());
        handler.start();
        settle(&mut handler);
        let _ = last_screen(&rx);

        // the user clicks while the Horror list replaces the full one
        let _ = handler.process_signal(RendererSignal::GenreSelected("Horror".to_string()));
        settle(&mut handler);
        let _ = handler.process_signal(RendererSignal::OpenComic("6".to_string()));

        let detail = last_screen(&rx).detail.expect("detail should be open");
        assert_eq!(detail.comic.title, "The Drowned Choir");

        let _ = handler.process_signal(RendererSignal::CloseDetail);
        let _ = last_screen(&rx);
        let _ = handler.process_signal(RendererSignal::OpenComic("3".to_string()));
        assert!(rx.try_recv().is_err());
        assert!(handler.state.selected().is_none());
    }

    #[test]
    fn test_quit_breaks_the_loop() {
        let (mut handler, _rx) = handler_with(FixtureSource::new());
        let (signal_tx, signal_rx) = mpsc::channel();
        signal_tx.send(RendererSignal::Refresh).unwrap();
        signal_tx.send(RendererSignal::Quit).unwrap();

        run_loop(&mut handler, &signal_rx);
        assert!(handler.state.is_loading());
    }

    #[test]
    fn test_renderer_disconnect_ends_loop() {
        let (mut handler, rx) = handler_with(FixtureSource::new());
        let (signal_tx, signal_rx) = mpsc::channel::<RendererSignal>();
        drop(signal_tx);

        run_loop(&mut handler, &signal_rx);
        assert!(matches!(rx.try_recv(), Ok(TuiEvent::Error(_))));
    }
}
