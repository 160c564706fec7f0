// ABOUTME: End-to-end wizard tests driving the app against a real in-process mock API

mod helpers;

use std::time::Duration;
use tokio::time::timeout;
use tradein::app::App;
use tradein::app::state::{CatalogState, View};
use tradein::server::PRICE_RANGE;
use tradein::wizard::WizardStep;

/// Apply background results until the app has nothing left in flight
async fn settle(app: &mut App) {
    app.tick().await.unwrap();
    while app.state.wizard.is_loading() || app.state.catalog == CatalogState::Loading {
        let got = timeout(Duration::from_secs(5), app.wait_for_fetch())
            .await
            .expect("fetch timed out");
        assert!(got);
    }
}

async fn started_app() -> App {
    let base_url = helpers::spawn_server().await;
    let mut app = App::new(helpers::config_for(&base_url)).unwrap();
    app.init().await;
    settle(&mut app).await;
    app
}

#[tokio::test]
async fn test_catalog_loads_mock_listings() {
    let app = started_app().await;
    let listings = app.state.listings();
    assert_eq!(listings.len(), 3);
    assert_eq!(listings[0].display_name(), "Apple iPhone 12");
    assert_eq!(listings[1].image_url, "/images/samsung.png");
}

#[tokio::test]
async fn test_catalog_waits_for_configured_delay() {
    let base_url = helpers::spawn_server().await;
    let mut config = helpers::config_for(&base_url);
    config.catalog.load_delay_ms = 400;

    let started = std::time::Instant::now();
    let mut app = App::new(config).unwrap();
    app.init().await;

    tokio::time::sleep(Duration::from_millis(150)).await;
    app.tick().await.unwrap();
    assert_eq!(app.state.catalog, CatalogState::Loading);

    let got = timeout(Duration::from_secs(5), app.wait_for_fetch())
        .await
        .expect("fetch timed out");
    assert!(got);
    assert!(started.elapsed() >= Duration::from_millis(400));
    assert_eq!(app.state.listings().len(), 3);
}

#[tokio::test]
async fn test_full_trade_in_flow() {
    let mut app = started_app().await;

    app.state.next_listing();
    app.state.open_wizard();
    assert_eq!(app.state.current_view, View::Wizard);
    settle(&mut app).await;

    let wizard = &mut app.state.wizard;
    let options = wizard.options.clone().unwrap();
    assert_eq!(options.brands, ["Apple", "Samsung", "Google", "OnePlus"]);
    assert_eq!(options.variants.len(), 3);
    assert_eq!(options.time_slots.len(), 5);

    assert!(wizard.select_brand("Samsung"));
    settle(&mut app).await;
    assert_eq!(
        app.state.wizard.current_options(),
        ["Galaxy S21", "Galaxy S22", "Galaxy S23"]
    );

    let wizard = &mut app.state.wizard;
    assert!(wizard.select_series("Galaxy S22"));
    assert!(wizard.select_variant("128GB/6GB"));
    assert!(wizard.set_date("2024-05-01"));
    assert_eq!(wizard.step, WizardStep::Appointment);
    assert!(wizard.set_time_slot("2:00 PM"));
    assert_eq!(wizard.step, WizardStep::Estimate);
    settle(&mut app).await;

    let selection = &app.state.wizard.selection;
    let price = selection.estimated_price.unwrap();
    assert!(PRICE_RANGE.contains(&price));
    assert_eq!(
        selection.summary(),
        "Brand: Samsung / Series: Galaxy S22 / Variant: 128GB/6GB / Appointment: 2024-05-01 at 2:00 PM"
    );
    assert_eq!(app.state.wizard.error, None);
}

#[tokio::test]
async fn test_reopen_after_close_starts_fresh() {
    let mut app = started_app().await;

    app.state.open_wizard();
    settle(&mut app).await;
    app.state.wizard.select_brand("Apple");
    // Close before the series request lands
    app.tick().await.unwrap();
    app.state.close_wizard();

    app.state.open_wizard();
    settle(&mut app).await;

    let wizard = &app.state.wizard;
    assert_eq!(wizard.step, WizardStep::BrandSelect);
    assert_eq!(wizard.selection.brand, None);
    assert_eq!(wizard.cached_series("Apple"), None);
    assert!(wizard.options.is_some());
}

#[tokio::test]
async fn test_unknown_brand_series_is_empty_not_an_error() {
    let base_url = helpers::spawn_server().await;
    let client = tradein::api::TradeInApiClient::with_base_url(&base_url).unwrap();
    let series = client.fetch_series("Nokia").await.unwrap();
    assert!(series.is_empty());
}
