use comicdeck_client::{
    ApiConfig, Applied, BrowseState, CatalogSource, Error, FetchCoordinator, GridState,
    HttpCatalog, SKELETON_COUNT,
};
use comicdeck_testing::fixtures::{UNRATED_COMIC_JSON, sample_comics};
use comicdeck_testing::{FakeCatalog, FakeResponse};
use comicdeck_types::{CatalogQuery, GenreFilter};
use std::sync::Arc;
use std::time::Duration;

fn client_for(catalog: &FakeCatalog) -> HttpCatalog {
    HttpCatalog::new(&catalog.base_url(), &ApiConfig::default()).expect("client builds")
}

#[test]
fn test_fetch_all_omits_genre_param() {
    let catalog = FakeCatalog::serving(sample_comics());
    let client = client_for(&catalog);

    let comics = client.fetch(&CatalogQuery::default()).unwrap();
    assert_eq!(comics.len(), 6);

    let requests = catalog.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/comics");
    assert!(!requests[0].has_param("genre"));
    assert!(!requests[0].has_param("q"));
}

#[test]
fn test_named_genre_sent_verbatim() {
    let catalog = FakeCatalog::serving(sample_comics());
    let client = client_for(&catalog);

    let query = CatalogQuery::new("fenn", GenreFilter::from("Horror"));
    let comics = client.fetch(&query).unwrap();
    assert_eq!(comics.len(), 2);

    let request = &catalog.requests()[0];
    assert_eq!(request.param("genre"), Some("Horror"));
    assert_eq!(request.param("q"), Some("fenn"));
}

#[test]
fn test_genre_with_spaces_roundtrips() {
    let catalog = FakeCatalog::serving(sample_comics());
    let client = client_for(&catalog);

    let comics = client
        .fetch(&CatalogQuery::new("", GenreFilter::from("Slice of Life & More")))
        .unwrap();
    assert!(comics.is_empty());
    assert_eq!(
        catalog.requests()[0].param("genre"),
        Some("Slice of Life & More")
    );
}

#[test]
fn test_missing_rating_reads_as_default() {
    let body = format!("[{}]", UNRATED_COMIC_JSON);
    let catalog = FakeCatalog::start(move |_| FakeResponse::json(body.clone()));
    let client = client_for(&catalog);

    let comics = client.fetch(&CatalogQuery::default()).unwrap();
    assert_eq!(comics[0].rating_label(), "4.5");
}

#[test]
fn test_error_status_uses_server_message() {
    let catalog = FakeCatalog::start(|_| {
        FakeResponse::status(503, r#"{"error": "Catalog is being reindexed"}"#)
    });
    let client = client_for(&catalog);

    let err = client.fetch(&CatalogQuery::default()).unwrap_err();
    assert!(matches!(err, Error::Status { status: 503, .. }));
    assert_eq!(err.to_string(), "Catalog is being reindexed");
}

#[test]
fn test_error_status_without_body_is_generic() {
    let catalog = FakeCatalog::start(|_| FakeResponse::status(500, ""));
    let client = client_for(&catalog);

    let err = client.fetch(&CatalogQuery::default()).unwrap_err();
    assert_eq!(err.to_string(), "Failed to load comics (HTTP 500)");
}

#[test]
fn test_non_array_body_is_decode_error() {
    let catalog = FakeCatalog::start(|_| FakeResponse::json(r#"{"comics": []}"#));
    let client = client_for(&catalog);

    let err = client.fetch(&CatalogQuery::default()).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn test_unreachable_backend_is_transport_error() {
    // Reserve a free port, then release it so nothing is listening there
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = HttpCatalog::new(&format!("http://127.0.0.1:{}", port), &ApiConfig::default())
        .unwrap();
    let err = client.fetch(&CatalogQuery::default()).unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "unexpected error: {:?}", err);
}

#[test]
fn test_browse_cycle_against_backend() {
    let catalog = FakeCatalog::serving(sample_comics());
    let source: Arc<dyn CatalogSource> = Arc::new(client_for(&catalog));
    let mut coordinator = FetchCoordinator::new(source);
    let mut state = BrowseState::new();

    coordinator.dispatch(state.begin_fetch());
    assert_eq!(state.grid(), GridState::Skeletons(SKELETON_COUNT));

    let outcome = coordinator.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(state.apply(outcome.ticket, outcome.result), Applied::Loaded(6));

    let labels: Vec<String> = state.genre_facets().into_iter().map(String::from).collect();
    assert_eq!(labels, vec!["All", "Fantasy", "Horror", "Sci-Fi", "Superhero"]);

    coordinator.dispatch(state.set_genre(GenreFilter::from("Superhero")).unwrap());
    let outcome = coordinator.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(state.apply(outcome.ticket, outcome.result), Applied::Loaded(2));
    assert!(matches!(state.grid(), GridState::Cards(cards) if cards.len() == 2));

    let requests = catalog.requests();
    assert!(!requests[0].has_param("genre"));
    assert_eq!(requests[1].param("genre"), Some("Superhero"));
}

#[test]
fn test_slow_stale_response_never_wins() {
    let catalog = FakeCatalog::start(|request| {
        let comics = sample_comics();
        match request.param("q") {
            Some("night") => FakeResponse::comics(&comics[..1]).with_delay(Duration::from_millis(300)),
            _ => FakeResponse::comics(&comics[1..3]),
        }
    });
    let source: Arc<dyn CatalogSource> = Arc::new(client_for(&catalog));
    let mut coordinator = FetchCoordinator::new(source);
    let mut state = BrowseState::new();

    coordinator.dispatch(state.set_query("night").unwrap());
    coordinator.dispatch(state.set_query("nigh").unwrap());

    let mut results = Vec::new();
    while coordinator.in_flight() > 0 {
        let outcome = coordinator.recv_timeout(Duration::from_secs(5)).unwrap();
        results.push(state.apply(outcome.ticket, outcome.result));
    }

    assert_eq!(results, vec![Applied::Loaded(2), Applied::Stale]);
    assert_eq!(state.comics().len(), 2);
    assert!(!state.is_loading());
}
