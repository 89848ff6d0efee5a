//! Shared test helpers for integration tests.
//!
//! Builds a fully wired [`AppState`] on top of the in-memory repositories and
//! exposes seeding helpers so each test starts from a known store. The repos
//! are handed back alongside the state so tests can assert on stored data
//! directly.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use shorturls::AppState;
use shorturls::application::services::{LinkService, StatsService};
use shorturls::domain::entities::{Click, Link};
use shorturls::domain::repositories::{ClickRepository, LinkRepository};
use shorturls::infrastructure::geoip::NullGeoIp;
use shorturls::infrastructure::memory::{MemoryClickRepository, MemoryLinkRepository};

pub const TEST_BASE_URL: &str = "http://localhost:8000";

/// Application state plus direct handles to the backing repositories.
pub struct TestApp {
    pub state: AppState,
    pub links: Arc<MemoryLinkRepository>,
    pub clicks: Arc<MemoryClickRepository>,
}

/// Creates an [`AppState`] backed by fresh in-memory repositories.
///
/// Geolocation uses [`NullGeoIp`], so every recorded click carries the
/// `"Unknown"` location.
pub fn create_test_state() -> TestApp {
    let links = Arc::new(MemoryLinkRepository::new());
    let clicks = Arc::new(MemoryClickRepository::new());

    let link_service = Arc::new(LinkService::new(links.clone(), TEST_BASE_URL));
    let stats_service = Arc::new(StatsService::new(links.clone(), clicks.clone()));

    let state = AppState::new(
        link_service,
        stats_service,
        Arc::new(NullGeoIp::new()),
        false,
    );

    TestApp {
        state,
        links,
        clicks,
    }
}

/// Seeds a link that expires 30 minutes from now, with an empty click
/// sequence.
pub async fn create_test_link(app: &TestApp, code: &str, url: &str) {
    let now = Utc::now();
    let link = Link::new(
        code.to_string(),
        url.to_string(),
        now,
        now + Duration::minutes(30),
    );
    app.links.insert(link).await.unwrap();
    app.clicks.init(code).await.unwrap();
}

/// Seeds a link whose expiry already passed an hour ago.
pub async fn create_expired_link(app: &TestApp, code: &str, url: &str) {
    let now = Utc::now();
    let link = Link::new(
        code.to_string(),
        url.to_string(),
        now - Duration::hours(2),
        now - Duration::hours(1),
    );
    app.links.insert(link).await.unwrap();
    app.clicks.init(code).await.unwrap();
}

/// Appends a click to a seeded link's history.
pub async fn record_test_click(app: &TestApp, code: &str, referrer: Option<&str>) {
    let click = Click::new(Utc::now(), referrer.map(String::from), "Unknown");
    app.clicks.record(code, click).await.unwrap();
}
