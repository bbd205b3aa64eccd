//! In-process HTTP server that impersonates the catalog backend.
//!
//! Speaks just enough HTTP/1.1 for a single `GET` per connection and records
//! every request so tests can assert on the query parameters that went out.

use comicdeck_types::Comic;
use reqwest::Url;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use crate::fixtures::comics_json;

/// A request as seen by the fake backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.param(key).is_some()
    }
}

/// Canned answer for one request
#[derive(Debug, Clone)]
pub struct FakeResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl FakeResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
            delay: None,
        }
    }

    pub fn comics(comics: &[Comic]) -> Self {
        Self::json(comics_json(comics))
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

type Responder = dyn Fn(&RecordedRequest) -> FakeResponse + Send + Sync;

/// Running fake backend. Stops accepting connections when dropped.
pub struct FakeCatalog {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown: Arc<AtomicBool>,
}

impl FakeCatalog {
    /// Start a server that answers every request with `responder`
    pub fn start<F>(responder: F) -> Self
    where
        F: Fn(&RecordedRequest) -> FakeResponse + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake catalog");
        let addr = listener.local_addr().expect("fake catalog address");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let shutdown = Arc::new(AtomicBool::new(false));
        let responder: Arc<Responder> = Arc::new(responder);

        let accept_requests = Arc::clone(&requests);
        let accept_shutdown = Arc::clone(&shutdown);
        thread::spawn(move || {
            for stream in listener.incoming() {
                if accept_shutdown.load(Ordering::SeqCst) {
                    break;
                }
                let Ok(stream) = stream else { continue };
                let requests = Arc::clone(&accept_requests);
                let responder = Arc::clone(&responder);
                thread::spawn(move || handle_connection(stream, &requests, responder.as_ref()));
            }
        });

        Self {
            addr,
            requests,
            shutdown,
        }
    }

    /// Start a server that behaves like the real backend over `comics`:
    /// `q` is a case-insensitive substring match on title, author,
    /// description and tags; `genre` is an exact match.
    pub fn serving(comics: Vec<Comic>) -> Self {
        Self::start(move |request| {
            if request.path != "/api/comics" {
                return FakeResponse::status(404, r#"{"error": "Not found"}"#);
            }
            let q = request.param("q").unwrap_or("").to_lowercase();
            let genre = request.param("genre");
            let matching: Vec<Comic> = comics
                .iter()
                .filter(|c| genre.is_none_or(|g| c.genre == g))
                .filter(|c| {
                    q.is_empty()
                        || c.title.to_lowercase().contains(&q)
                        || c.author.to_lowercase().contains(&q)
                        || c.description.to_lowercase().contains(&q)
                        || c.tags.iter().any(|t| t.to_lowercase().contains(&q))
                })
                .cloned()
                .collect();
            FakeResponse::comics(&matching)
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl Drop for FakeCatalog {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        // Wake the accept loop so it observes the flag.
        let _ = TcpStream::connect(self.addr);
    }
}

fn handle_connection(
    mut stream: TcpStream,
    requests: &Mutex<Vec<RecordedRequest>>,
    responder: &Responder,
) {
    let Some(request) = read_request(&stream) else {
        return;
    };
    if let Ok(mut log) = requests.lock() {
        log.push(request.clone());
    }

    let response = responder(&request);
    if let Some(delay) = response.delay {
        thread::sleep(delay);
    }

    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason_phrase(response.status),
        response.body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(response.body.as_bytes());
    let _ = stream.flush();
}

fn read_request(stream: &TcpStream) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;

    // Drain headers; GET requests from the client carry no body.
    loop {
        let mut line = String::new();
        let read = reader.read_line(&mut line).ok()?;
        if read == 0 || line == "\r\n" || line == "\n" {
            break;
        }
    }

    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?;
    let url = Url::parse(&format!("http://fake{}", target)).ok()?;

    Some(RecordedRequest {
        method,
        path: url.path().to_string(),
        params: url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
    })
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
