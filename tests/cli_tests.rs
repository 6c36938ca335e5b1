//! CLI integration tests against the built binary.
//!
//! Each test points `HOME` at a temp directory so the config file and the
//! item store never touch the real `~/.wynnxp/`.

mod support;

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Nothing listens on the discard port, so requests fail fast.
const UNREACHABLE_API: &str = "http://127.0.0.1:9/api/items";

fn wynnxp(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("wynnxp");
    cmd.env("HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env("WYNNXP_API_URL", UNREACHABLE_API);
    cmd
}

fn seed_cache(home: &Path, timestamp: i64) {
    let store = home.join(".wynnxp").join("store");
    fs::create_dir_all(&store).unwrap();
    fs::write(
        store.join("itemsData.json"),
        support::fixtures::cache_entry(timestamp),
    )
    .unwrap();
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    wynnxp(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("cache"));
}

#[test]
fn version_names_the_binary() {
    let home = TempDir::new().unwrap();
    wynnxp(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wynnxp"));
}

#[test]
fn cache_status_on_empty_store() {
    let home = TempDir::new().unwrap();
    wynnxp(home.path())
        .args(["cache", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cached items"));
}

#[test]
fn cache_status_json_reports_entry() {
    let home = TempDir::new().unwrap();
    seed_cache(home.path(), chrono::Utc::now().timestamp_millis());

    wynnxp(home.path())
        .args(["--json", "cache", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"state\":\"present\""))
        .stdout(predicate::str::contains("\"fresh\":true"))
        .stdout(predicate::str::contains("\"items\":4"));
}

#[test]
fn cache_clear_removes_the_entry() {
    let home = TempDir::new().unwrap();
    seed_cache(home.path(), chrono::Utc::now().timestamp_millis());

    wynnxp(home.path())
        .args(["cache", "clear"])
        .assert()
        .success();

    assert!(!home
        .path()
        .join(".wynnxp/store/itemsData.json")
        .exists());
}

#[test]
fn config_show_json_uses_config_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");
    fs::write(&path, "[logging]\nlevel = \"debug\"\n\n[display]\ncollapsed = true\n").unwrap();

    wynnxp(home.path())
        .args(["--json", "config", "show", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"command\":\"config.show\""))
        .stdout(predicate::str::contains("\"file_found\":true"))
        .stdout(predicate::str::contains("\"level\":\"debug\""))
        .stdout(predicate::str::contains("\"collapsed\":true"))
        .stdout(predicate::str::contains(UNREACHABLE_API));
}

#[test]
fn invalid_config_exits_nonzero() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("bad.toml");
    fs::write(&path, "[api]\ntimeout_ms = 0\n").unwrap();

    wynnxp(home.path())
        .args(["config", "show", "-c"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"))
        .stderr(predicate::str::contains("timeout_ms"));
}

#[test]
fn missing_explicit_config_exits_nonzero() {
    let home = TempDir::new().unwrap();

    wynnxp(home.path())
        .args(["config", "show", "-c"])
        .arg(home.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn show_without_cache_or_api_fails() {
    let home = TempDir::new().unwrap();

    wynnxp(home.path())
        .arg("show")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("No cached data available."));
}

#[test]
fn show_uses_fresh_cache_without_network() {
    let home = TempDir::new().unwrap();
    seed_cache(home.path(), chrono::Utc::now().timestamp_millis());

    wynnxp(home.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ring (2 items)"))
        .stdout(predicate::str::contains("Scholar's Bow"))
        .stdout(predicate::str::contains("May be less efficient"))
        .stdout(predicate::str::contains("Next refresh in:"));
}

#[test]
fn quiet_show_keeps_listing_and_summary() {
    let home = TempDir::new().unwrap();
    seed_cache(home.path(), chrono::Utc::now().timestamp_millis());

    wynnxp(home.path())
        .args(["-q", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ring (2 items)"))
        .stdout(predicate::str::contains("Total Items"))
        .stdout(predicate::str::contains("from cache").not())
        .stdout(predicate::str::contains("Next refresh in:").not());
}

#[test]
fn show_category_filter_limits_listing() {
    let home = TempDir::new().unwrap();
    seed_cache(home.path(), chrono::Utc::now().timestamp_millis());

    wynnxp(home.path())
        .args(["show", "--category", "bow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bow (1 items)"))
        .stdout(predicate::str::contains("Ring (2 items)").not());
}

#[test]
fn fetch_failure_falls_back_to_fresh_cache() {
    let home = TempDir::new().unwrap();
    seed_cache(home.path(), chrono::Utc::now().timestamp_millis());

    wynnxp(home.path())
        .arg("fetch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to fetch items"))
        .stdout(predicate::str::contains("Ring (2 items)"));
}

#[test]
fn expired_cache_is_not_shown() {
    let home = TempDir::new().unwrap();
    let two_days_ago = chrono::Utc::now().timestamp_millis() - 2 * 86_400_000;
    seed_cache(home.path(), two_days_ago);

    wynnxp(home.path())
        .arg("summary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No cached data available."));

    assert!(!home
        .path()
        .join(".wynnxp/store/itemsData.json")
        .exists());
}

#[tokio::test]
async fn fetch_json_writes_the_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::fixtures::items_body()))
        .mount(&server)
        .await;
    let home = TempDir::new().unwrap();

    wynnxp(home.path())
        .env("WYNNXP_API_URL", format!("{}/api/items", server.uri()))
        .args(["--json", "fetch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\":\"report\""))
        .stdout(predicate::str::contains("\"origin\":\"fetched\""));

    assert!(home.path().join(".wynnxp/store/itemsData.json").exists());
    assert!(home.path().join(".wynnxp/store/lastUpdate.json").exists());
}
