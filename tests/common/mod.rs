use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use charity_events_server::config::Config;
use charity_events_server::models::{Category, Event, EventDetail, EventListing};
use charity_events_server::routes::create_routes;
use charity_events_server::services::{
    EventFilter, EventQueryService, EventStore, FixedClock, LocationMatch,
};

pub fn at(date: &str, time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
}

/// A `charity_organizations` row; the service only ever sees its joined columns.
#[derive(Debug, Clone)]
pub struct Organization {
    pub organization_id: i32,
    pub organization_name: String,
    pub mission_statement: Option<String>,
    pub contact_email: String,
}

/// Mirrors the Postgres queries over fixed rows.
#[derive(Default)]
pub struct InMemoryStore {
    pub events: Vec<Event>,
    pub categories: Vec<Category>,
    pub organizations: Vec<Organization>,
    pub location_match: LocationMatch,
    pub fail: bool,
}

fn location_contains(mode: LocationMatch, location: &str, needle: &str) -> bool {
    match mode {
        LocationMatch::CaseSensitive => location.contains(needle),
        LocationMatch::CaseInsensitive => location.to_lowercase().contains(&needle.to_lowercase()),
    }
}

impl InMemoryStore {
    fn check(&self) -> Result<(), sqlx::Error> {
        if self.fail {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }

    fn category(&self, id: i32) -> &Category {
        self.categories.iter().find(|c| c.category_id == id).unwrap()
    }

    fn organization(&self, id: i32) -> &Organization {
        self.organizations
            .iter()
            .find(|o| o.organization_id == id)
            .unwrap()
    }

    fn listings<'a>(&'a self, keep: impl Fn(&Event) -> bool + 'a) -> Vec<EventListing> {
        let mut rows: Vec<EventListing> = self
            .events
            .iter()
            .filter(|e| e.is_active && keep(*e))
            .map(|e| EventListing {
                event: e.clone(),
                category_name: self.category(e.category_id).category_name.clone(),
                organization_name: self.organization(e.organization_id).organization_name.clone(),
            })
            .collect();
        rows.sort_by_key(|row| row.event.event_date);
        rows
    }
}

#[async_trait]
impl EventStore for InMemoryStore {
    async fn upcoming_events(&self, now: NaiveDateTime) -> Result<Vec<EventListing>, sqlx::Error> {
        self.check()?;
        Ok(self.listings(move |e| e.event_date >= now))
    }

    async fn categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        self.check()?;
        let mut categories = self.categories.clone();
        categories.sort_by(|a, b| a.category_name.cmp(&b.category_name));
        Ok(categories)
    }

    async fn search_events(&self, filter: &EventFilter) -> Result<Vec<EventListing>, sqlx::Error> {
        self.check()?;
        let filter = filter.clone();
        let mode = self.location_match;
        Ok(self.listings(move |e| {
            filter.date.map_or(true, |d| e.event_date.date() == d)
                && filter
                    .location
                    .as_deref()
                    .map_or(true, |l| location_contains(mode, &e.event_location, l))
                && filter.category_id.map_or(true, |c| e.category_id == c)
        }))
    }

    async fn event_detail(&self, event_id: i32) -> Result<Option<EventDetail>, sqlx::Error> {
        self.check()?;
        Ok(self
            .events
            .iter()
            .find(|e| e.event_id == event_id && e.is_active)
            .map(|e| {
                let category = self.category(e.category_id);
                let organization = self.organization(e.organization_id);
                EventDetail {
                    event: e.clone(),
                    category_name: category.category_name.clone(),
                    category_description: category.category_description.clone(),
                    organization_name: organization.organization_name.clone(),
                    mission_statement: organization.mission_statement.clone(),
                    contact_email: organization.contact_email.clone(),
                }
            }))
    }
}

fn event(id: i32, when: NaiveDateTime, location: &str, category_id: i32, active: bool) -> Event {
    Event {
        event_id: id,
        event_name: format!("Event {}", id),
        short_description: Some("Community fundraiser".to_string()),
        full_description: None,
        event_date: when,
        event_location: location.to_string(),
        is_active: active,
        category_id,
        organization_id: if category_id == 1 { 2 } else { 1 },
        ticket_price: Some(Decimal::new(2500, 2)),
        fundraising_goal: Some(Decimal::new(1_000_000, 2)),
        current_amount: Some(Decimal::new(420_000, 2)),
        image_url: None,
    }
}

pub fn seeded_store() -> InMemoryStore {
    let category = |id: i32, name: &str| Category {
        category_id: id,
        category_name: name.to_string(),
        category_description: Some(format!("{} events", name)),
    };

    InMemoryStore {
        events: vec![
            event(1, at("2024-06-01", "18:00:00"), "City Hall", 3, true),
            event(2, at("2024-06-01", "12:00:00"), "Town Hall", 3, true),
            event(3, at("2024-05-30", "10:00:00"), "Hall of Fame", 3, true),
            event(4, at("2024-06-01", "20:00:00"), "City Hall", 3, false),
            event(5, at("2024-06-02", "09:00:00"), "Riverside Park", 1, true),
            event(6, at("2024-06-01", "11:59:59"), "Main Hall", 2, true),
        ],
        categories: vec![
            category(1, "Music"),
            category(2, "Auction"),
            category(3, "Gala"),
            category(4, "Auction"),
        ],
        organizations: vec![
            Organization {
                organization_id: 1,
                organization_name: "Hope Trust".to_string(),
                mission_statement: Some("Housing for every family".to_string()),
                contact_email: "hello@hopetrust.org".to_string(),
            },
            Organization {
                organization_id: 2,
                organization_name: "Green Earth".to_string(),
                mission_statement: None,
                contact_email: "info@greenearth.org".to_string(),
            },
        ],
        location_match: LocationMatch::default(),
        fail: false,
    }
}

/// "Now" for every test: 2024-06-01 12:00:00.
pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn app_with(store: InMemoryStore) -> Router {
    let service = EventQueryService::new(Arc::new(store), Arc::new(FixedClock::new(now())));
    create_routes(service, &Config::default())
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|e| e["event_id"].as_i64().unwrap())
        .collect()
}
