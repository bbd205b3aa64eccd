use comicdeck_types::Comic;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crate::browse::FetchTicket;
use crate::catalog::CatalogSource;
use crate::Result;

/// Result of one dispatched fetch, tagged with its ticket
#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: u64,
    pub result: Result<Vec<Comic>>,
}

/// Runs catalog fetches on worker threads and funnels the outcomes back.
///
/// Requests are never coalesced or cancelled in flight; every dispatched
/// ticket produces exactly one outcome and the controller decides which
/// ones still matter.
pub struct FetchCoordinator {
    source: Arc<dyn CatalogSource>,
    tx: Sender<FetchOutcome>,
    rx: Receiver<FetchOutcome>,
    in_flight: usize,
}

impl FetchCoordinator {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn source(&self) -> &Arc<dyn CatalogSource> {
        &self.source
    }

    pub fn dispatch(&mut self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        self.in_flight += 1;

        tracing::info!(ticket = ticket.id, q = %ticket.query.q, genre = %ticket.query.genre, "fetch dispatched");

        thread::spawn(move || {
            let result = source.fetch(&ticket.query);
            // Receiver gone means the UI has shut down.
            let _ = tx.send(FetchOutcome {
                ticket: ticket.id,
                result,
            });
        });
    }

    /// Wait up to `timeout` for the next finished fetch
    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<FetchOutcome> {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(outcome)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Number of dispatched fetches whose outcome has not been received yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::{Applied, BrowseState};
    use crate::Error;
    use comicdeck_types::{CatalogQuery, ComicId};
    use std::sync::Mutex;

    /// Answers each query after a delay keyed on the query text
    struct ScriptedSource {
        seen: Mutex<Vec<CatalogQuery>>,
    }

    impl CatalogSource for ScriptedSource {
        fn fetch(&self, query: &CatalogQuery) -> Result<Vec<Comic>> {
            self.seen.lock().unwrap().push(query.clone());
            if query.q == "slow" {
                thread::sleep(Duration::from_millis(200));
            }
            if query.q == "boom" {
                return Err(Error::Status {
                    status: 500,
                    message: None,
                });
            }
            Ok(vec![Comic {
                id: ComicId::Text(query.q.clone()),
                title: query.q.clone(),
                author: String::new(),
                description: String::new(),
                genre: "Noir".to_string(),
                tags: Vec::new(),
                rating: 4.5,
                cover_url: String::new(),
            }])
        }

        fn describe(&self) -> String {
            "scripted".to_string()
        }
    }

    fn drain(coordinator: &mut FetchCoordinator, state: &mut BrowseState) -> Vec<Applied> {
        let mut applied = Vec::new();
        while coordinator.in_flight() > 0 {
            let outcome = coordinator
                .recv_timeout(Duration::from_secs(5))
                .expect("fetch did not finish");
            applied.push(state.apply(outcome.ticket, outcome.result));
        }
        applied
    }

    #[test]
    fn test_latest_request_wins_even_if_it_finishes_first() {
        let source = Arc::new(ScriptedSource {
            seen: Mutex::new(Vec::new()),
        });
        let mut coordinator = FetchCoordinator::new(source.clone());
        let mut state = BrowseState::new();

        coordinator.dispatch(state.set_query("slow").unwrap());
        coordinator.dispatch(state.set_query("fast").unwrap());

        let applied = drain(&mut coordinator, &mut state);
        assert_eq!(applied, vec![Applied::Loaded(1), Applied::Stale]);
        assert_eq!(state.comics()[0].title, "fast");
        assert_eq!(source.seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_failure_outcome_reaches_state() {
        let source = Arc::new(ScriptedSource {
            seen: Mutex::new(Vec::new()),
        });
        let mut coordinator = FetchCoordinator::new(source);
        let mut state = BrowseState::new();

        coordinator.dispatch(state.set_query("boom").unwrap());
        let applied = drain(&mut coordinator, &mut state);

        assert_eq!(applied, vec![Applied::Failed]);
        assert_eq!(state.error(), Some("Failed to load comics (HTTP 500)"));
    }
}
