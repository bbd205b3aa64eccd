use comicdeck_testing::TestWorld;

#[test]
fn test_config_show_without_file_uses_defaults() {
    let world = TestWorld::new();
    let result = world.run(&["config", "show"]).expect("run config show");

    assert!(result.success());
    assert!(result.stdout().contains("not found, using defaults"));
    assert!(result.stdout().contains("http://localhost:8000/api/comics"));
    assert!(result.stdout().contains("comicdeck config init"));
}

#[test]
fn test_config_file_sets_backend() {
    let world = TestWorld::new()
        .with_config("[api]\nbase_url = \"http://catalog.test:9000/\"\ntimeout_secs = 3\n");
    let result = world
        .run(&["config", "show", "--format", "json"])
        .expect("run config show");

    assert!(result.success());
    let json = result.json().unwrap();
    assert_eq!(json["content"]["base_url"], "http://catalog.test:9000");
    assert_eq!(json["content"]["endpoint"], "http://catalog.test:9000/api/comics");
    assert_eq!(json["content"]["timeout_secs"], 3);
    assert_eq!(json["content"]["config_exists"], true);
}

#[test]
fn test_flag_beats_env_and_config() {
    let world = TestWorld::new()
        .with_config("[api]\nbase_url = \"http://from-config\"\n")
        .with_env("COMICDECK_API_URL", "http://from-env");
    let result = world
        .run(&["--api-url", "http://from-flag", "config", "show", "--format", "json"])
        .expect("run config show");

    assert_eq!(result.json().unwrap()["content"]["base_url"], "http://from-flag");
}

#[test]
fn test_config_init_writes_file_once() {
    let world = TestWorld::new();
    let first = world.run(&["config", "init"]).expect("run config init");
    assert!(first.success());

    let written = std::fs::read_to_string(world.data_dir().join("config.toml")).unwrap();
    assert!(written.contains("base_url = \"http://localhost:8000\""));

    let second = world.run(&["config", "init"]).expect("run config init");
    assert_eq!(second.status.code(), Some(1));
    assert!(second.stderr().contains("--force"));

    let forced = world
        .run(&["--api-url", "http://other:1", "config", "init", "--force"])
        .expect("run config init");
    assert!(forced.success());
    let written = std::fs::read_to_string(world.data_dir().join("config.toml")).unwrap();
    assert!(written.contains("http://other:1"));
}
