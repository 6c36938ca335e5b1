//! Fetch orchestration end to end: HTTP client, file store and cache.

mod support;

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use wynnxp::adapter::outbound::api::client::ItemApiClient;
use wynnxp::adapter::outbound::store::file::FileStore;
use wynnxp::application::cache::{ItemCache, CACHE_TTL_MS, ITEMS_KEY, LAST_UPDATE_KEY};
use wynnxp::application::orchestrator::{LoadOutcome, Orchestrator, OrchestratorOptions};
use wynnxp::port::outbound::report::{DataOrigin, EFFICIENCY_WARNING};
use wynnxp::port::outbound::store::KeyValueStore;
use wynnxp::testkit::clock::ManualClock;
use wynnxp::testkit::presenter::{Presented, RecordingPresenter};

const NOW: i64 = 1_750_000_000_000;

struct Setup {
    orchestrator: Orchestrator,
    store: Arc<FileStore>,
    clock: Arc<ManualClock>,
    presenter: Arc<RecordingPresenter>,
    _dir: tempfile::TempDir,
}

fn setup(server: &MockServer) -> Setup {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(FileStore::new(dir.path().join("store")));
    let clock = Arc::new(ManualClock::new(NOW));
    let presenter = Arc::new(RecordingPresenter::new());
    let source = Arc::new(ItemApiClient::new(format!("{}/api/items", server.uri())));

    let orchestrator = Orchestrator::new(
        source,
        ItemCache::new(store.clone(), clock.clone()),
        presenter.clone(),
        clock.clone(),
        OrchestratorOptions::default(),
    );

    Setup {
        orchestrator,
        store,
        clock,
        presenter,
        _dir: dir,
    }
}

#[tokio::test]
async fn first_load_fetches_then_second_load_uses_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::fixtures::items_body()))
        .expect(1)
        .mount(&server)
        .await;
    let mut s = setup(&server);

    assert_eq!(s.orchestrator.load().await, LoadOutcome::Fetched);
    s.clock.advance(60_000);
    assert_eq!(s.orchestrator.load().await, LoadOutcome::Cached);

    assert!(s.store.get(ITEMS_KEY).unwrap().is_some());
    assert_eq!(s.store.get(LAST_UPDATE_KEY).unwrap(), Some(NOW.to_string()));

    let reports = s.presenter.reports();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].origin, DataOrigin::Fetched);
    assert_eq!(reports[1].origin, DataOrigin::Cache);
    assert_eq!(reports[0].listing, reports[1].listing);
}

#[tokio::test]
async fn classification_flows_into_the_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::fixtures::items_body()))
        .mount(&server)
        .await;
    let mut s = setup(&server);

    s.orchestrator.load().await;
    let report = &s.presenter.reports()[0];

    let keys: Vec<_> = report.listing.categories.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["ring", "bow", "ingredient"]);

    let rings = &report.listing.categories[0].items;
    assert_eq!(rings[0].name, "Ring of Wisdom");
    assert_eq!(rings[0].warning, None);
    assert_eq!(rings[1].name, "Dull Ring");
    assert_eq!(rings[1].warning, Some(EFFICIENCY_WARNING));

    assert_eq!(report.summary.total_items, 4);
    assert_eq!(report.summary.categories[0].tradable, 1);
    assert_eq!(report.summary.categories[1].max_xp, 12.0);
}

#[tokio::test]
async fn server_error_falls_back_to_stale_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let mut s = setup(&server);
    s.store
        .set(ITEMS_KEY, &support::fixtures::cache_entry(NOW - 1_000))
        .unwrap();

    let outcome = s.orchestrator.refresh().await;

    assert_eq!(
        outcome,
        LoadOutcome::Stale {
            reason: "HTTP error! status: 500".into()
        }
    );
    assert!(matches!(
        s.presenter.last(),
        Some(Presented::Report(report)) if matches!(report.origin, DataOrigin::Stale { .. })
    ));
}

#[tokio::test]
async fn rejection_without_cache_reports_the_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": false, "error": "Maintenance" })),
        )
        .mount(&server)
        .await;
    let mut s = setup(&server);

    let outcome = s.orchestrator.load().await;

    assert!(!outcome.presented());
    assert_eq!(s.presenter.errors(), vec!["Maintenance".to_string()]);
    assert_eq!(s.store.get(ITEMS_KEY).unwrap(), None);
}

#[tokio::test]
async fn expired_cache_is_replaced_by_a_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(support::fixtures::items_body()))
        .expect(1)
        .mount(&server)
        .await;
    let mut s = setup(&server);
    s.store
        .set(ITEMS_KEY, &support::fixtures::cache_entry(NOW - CACHE_TTL_MS - 1))
        .unwrap();

    assert_eq!(s.orchestrator.load().await, LoadOutcome::Fetched);

    let status = ItemCache::new(s.store.clone(), s.clock.clone()).status().unwrap();
    assert!(matches!(
        status,
        wynnxp::application::cache::CacheStatus::Present { timestamp: NOW, fresh: true, .. }
    ));
}
