//! End-to-end tests for the one-shot catalog commands against a fake backend.

use comicdeck_testing::fixtures::sample_comics;
use comicdeck_testing::{FakeCatalog, FakeResponse, TestWorld};

fn world() -> TestWorld {
    TestWorld::new().with_catalog(FakeCatalog::serving(sample_comics()))
}

#[test]
fn test_list_prints_table_with_badge() {
    let world = world();
    let result = world.run(&["list"]).expect("run list");

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("6 comics"));
    assert!(result.stdout().contains("The Night Archive"));
    assert!(result.stdout().contains("Filters: genre=All"));

    let requests = world.catalog().unwrap().requests();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].has_param("genre"));
}

#[test]
fn test_list_json_contains_every_comic() {
    let world = world();
    let result = world.run(&["list", "--format", "json"]).expect("run list");
    assert!(result.success());

    let json = result.json().expect("valid JSON");
    let comics = json["content"]["comics"].as_array().unwrap();
    assert_eq!(comics.len(), 6);
    assert_eq!(comics[0]["rating_label"], "4.8");
    assert_eq!(json["content"]["total_count"], 6);
}

#[test]
fn test_list_sends_genre_and_query_verbatim() {
    let world = world();
    let result = world
        .run(&["list", "--genre", "Horror", "--query", "lantern"])
        .expect("run list");
    assert!(result.success());
    assert!(result.stdout().contains("Hollow Lantern"));
    assert!(!result.stdout().contains("The Drowned Choir"));

    let requests = world.catalog().unwrap().requests();
    assert_eq!(requests[0].param("genre"), Some("Horror"));
    assert_eq!(requests[0].param("q"), Some("lantern"));
}

#[test]
fn test_list_all_genre_is_not_sent() {
    let world = world();
    let result = world.run(&["list", "--genre", "All"]).expect("run list");
    assert!(result.success());
    assert!(!world.catalog().unwrap().requests()[0].has_param("genre"));
}

#[test]
fn test_empty_result_suggests_dropping_filters() {
    let world = world();
    let result = world
        .run(&["list", "--query", "no such comic"])
        .expect("run list");

    assert!(result.success());
    assert!(result.stdout().contains("No comics matched"));
    assert!(result.stdout().contains("comicdeck list"));
}

#[test]
fn test_genres_are_sorted_and_distinct() {
    let world = world();
    let result = world.run(&["genres"]).expect("run genres");
    assert!(result.success());

    let stdout = result.stdout();
    let listed: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.strip_prefix("  "))
        .collect();
    assert_eq!(listed, vec!["All", "Fantasy", "Horror", "Sci-Fi", "Superhero"]);
}

#[test]
fn test_show_prints_full_detail() {
    let world = world();
    let result = world.run(&["show", "3"]).expect("run show");

    assert!(result.success());
    assert!(result.stdout().contains("Orbit of Ash"));
    assert!(result.stdout().contains("#space #rebellion #mecha"));
    assert!(result.stdout().contains("Miners on a dying moon"));
}

#[test]
fn test_show_unknown_id_fails() {
    let world = world();
    let result = world.run(&["show", "404"]).expect("run show");

    assert!(!result.success());
    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr().contains("No comic with id '404'"));
}

#[test]
fn test_server_error_message_reaches_stderr() {
    let world = TestWorld::new().with_catalog(FakeCatalog::start(|_| {
        FakeResponse::status(500, r#"{"error": "Database is down"}"#)
    }));
    let result = world.run(&["list"]).expect("run list");

    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr().contains("Error: Database is down"));
}

#[test]
fn test_unreachable_backend_fails() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let api_url = format!("http://127.0.0.1:{}", port);

    let world = TestWorld::new();
    let result = world.run(&["--api-url", &api_url, "list"]).expect("run list");

    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr().contains("Could not reach the catalog"));
}

#[test]
fn test_env_var_selects_backend() {
    let catalog = FakeCatalog::serving(sample_comics());
    let base_url = catalog.base_url();
    let world = TestWorld::new().with_env("COMICDECK_API_URL", &base_url);

    let result = world.run(&["list", "--genre", "Fantasy"]).expect("run list");
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Paper Crowns"));
    assert_eq!(catalog.requests().len(), 1);
}
