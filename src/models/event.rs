use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of `charity_events`. Ticketing and fundraising columns are passed
/// through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub event_id: i32,
    pub event_name: String,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub event_date: NaiveDateTime,
    pub event_location: String,
    pub is_active: bool,
    pub category_id: i32,
    pub organization_id: i32,
    pub ticket_price: Option<Decimal>,
    pub fundraising_goal: Option<Decimal>,
    pub current_amount: Option<Decimal>,
    pub image_url: Option<String>,
}

/// An event joined with the display names used by the list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventListing {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub event: Event,
    pub category_name: String,
    pub organization_name: String,
}

/// An event joined with its full category and organization details.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventDetail {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub event: Event,
    pub category_name: String,
    pub category_description: Option<String>,
    pub organization_name: String,
    pub mission_statement: Option<String>,
    pub contact_email: String,
}
