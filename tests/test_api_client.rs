// ABOUTME: API client tests against the in-process mock server and against scripted failures

mod helpers;

use pretty_assertions::assert_eq;
use std::time::Duration;
use tokio::time::timeout;
use tradein::api::{ApiError, TradeInApiClient};
use tradein::app::App;
use tradein::app::state::{CatalogState, CATALOG_ERROR};
use tradein::models::EstimateRequest;
use tradein::wizard::state::{ESTIMATE_ERROR, OPTIONS_ERROR, SERIES_ERROR};
use tradein::wizard::WizardStep;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn json_mock(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mock API that serves the option lists but fails everything else with 500
async fn options_only_server() -> MockServer {
    let server = MockServer::start().await;
    json_mock(&server, "/phone-brands", serde_json::json!(["Apple", "Samsung"])).await;
    json_mock(&server, "/phone-variants", serde_json::json!(["64GB/4GB"])).await;
    json_mock(&server, "/time-slots", serde_json::json!(["10:00 AM"])).await;
    json_mock(&server, "/phone-series/Apple", serde_json::json!(["iPhone 12"])).await;
    Mock::given(method("GET"))
        .and(path("/phone-series/Samsung"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/estimate-price"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    server
}

/// App whose catalog load is skipped so only wizard requests are in flight
fn wizard_app(base_url: &str) -> App {
    let mut app = App::new(helpers::config_for(base_url)).unwrap();
    app.state.pending_async_action = None;
    app
}

/// Dispatch queued wizard requests and apply results until the step settles
async fn settle_wizard(app: &mut App) {
    app.tick().await.unwrap();
    while app.state.wizard.is_loading() && app.state.wizard.error.is_none() {
        let got = timeout(Duration::from_secs(5), app.wait_for_fetch())
            .await
            .expect("fetch timed out");
        assert!(got);
    }
}

#[tokio::test]
async fn test_client_against_mock_server() {
    let base_url = helpers::spawn_server().await;
    let client = TradeInApiClient::with_base_url(&base_url).unwrap();

    let options = client.fetch_wizard_options().await.unwrap();
    assert_eq!(options.brands, ["Apple", "Samsung", "Google", "OnePlus"]);
    assert_eq!(options.variants, ["64GB/4GB", "128GB/6GB", "256GB/8GB"]);
    assert_eq!(
        options.time_slots,
        ["10:00 AM", "12:00 PM", "2:00 PM", "4:00 PM", "6:00 PM"]
    );

    assert_eq!(
        client.fetch_series("OnePlus").await.unwrap(),
        ["OnePlus 9", "OnePlus 10"]
    );

    let price = client
        .estimate_price(&EstimateRequest::new("Google", "Pixel 7", "256GB/8GB"))
        .await
        .unwrap();
    assert!((10_000..60_000).contains(&price));
}

#[tokio::test]
async fn test_http_error_maps_to_status_error() {
    let server = options_only_server().await;
    let client = TradeInApiClient::with_base_url(&server.uri()).unwrap();

    let err = client.fetch_series("Samsung").await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Status { status, .. } if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR
    ));
    assert_eq!(err.endpoint(), "/phone-series/Samsung");
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() {
    let server = MockServer::start().await;
    json_mock(&server, "/phones", serde_json::json!({"phones": []})).await;
    let client = TradeInApiClient::with_base_url(&server.uri()).unwrap();

    let err = client.fetch_phones().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_one_failed_list_fails_the_options_request() {
    let server = MockServer::start().await;
    json_mock(&server, "/phone-brands", serde_json::json!(["Apple"])).await;
    json_mock(&server, "/phone-variants", serde_json::json!(["64GB/4GB"])).await;
    // /time-slots unmatched: wiremock answers 404
    let client = TradeInApiClient::with_base_url(&server.uri()).unwrap();

    assert!(client.fetch_wizard_options().await.is_err());
}

#[tokio::test]
async fn test_unreachable_server_is_request_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TradeInApiClient::with_base_url(&format!("http://{addr}")).unwrap();
    let err = client.fetch_brands().await.unwrap_err();
    assert!(matches!(err, ApiError::Request { .. }));
}

#[tokio::test]
async fn test_catalog_failure_shows_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/phones"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut app = App::new(helpers::config_for(&server.uri())).unwrap();
    app.init().await;
    let got = timeout(Duration::from_secs(5), app.wait_for_fetch())
        .await
        .expect("fetch timed out");
    assert!(got);

    assert_eq!(app.state.catalog, CatalogState::Failed(CATALOG_ERROR.to_string()));
}

#[tokio::test]
async fn test_wizard_errors_show_fixed_messages() {
    // Options failure: nothing mounted on an empty server
    let empty = MockServer::start().await;
    let mut failing = wizard_app(&empty.uri());
    failing.state.wizard.open(None);
    settle_wizard(&mut failing).await;
    assert_eq!(failing.state.wizard.error.as_deref(), Some(OPTIONS_ERROR));

    let server = options_only_server().await;
    let mut app = wizard_app(&server.uri());

    // Series failure
    app.state.wizard.open(None);
    settle_wizard(&mut app).await;
    assert!(app.state.wizard.select_brand("Samsung"));
    settle_wizard(&mut app).await;
    assert_eq!(app.state.wizard.error.as_deref(), Some(SERIES_ERROR));
    assert_eq!(app.state.wizard.step, WizardStep::SeriesSelect);

    // Estimate failure
    app.state.wizard.open(None);
    settle_wizard(&mut app).await;
    assert!(app.state.wizard.select_brand("Apple"));
    settle_wizard(&mut app).await;
    let wizard = &mut app.state.wizard;
    assert!(wizard.select_series("iPhone 12"));
    assert!(wizard.select_variant("64GB/4GB"));
    assert!(wizard.set_time_slot("10:00 AM"));
    assert!(wizard.set_date("2024-05-01"));
    settle_wizard(&mut app).await;
    assert_eq!(app.state.wizard.error.as_deref(), Some(ESTIMATE_ERROR));
    assert_eq!(app.state.wizard.step, WizardStep::Estimate);
}
