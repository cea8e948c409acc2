use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;

use crate::models::{Category, EventDetail, EventListing};
use crate::services::filter::{EventFilter, LocationMatch};

/// Read access to the events schema. Each method issues exactly one query.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn upcoming_events(&self, now: NaiveDateTime) -> Result<Vec<EventListing>, sqlx::Error>;
    async fn categories(&self) -> Result<Vec<Category>, sqlx::Error>;
    async fn search_events(&self, filter: &EventFilter) -> Result<Vec<EventListing>, sqlx::Error>;
    async fn event_detail(&self, event_id: i32) -> Result<Option<EventDetail>, sqlx::Error>;
}

const UPCOMING_QUERY: &str = "SELECT e.*, c.category_name, o.organization_name \
     FROM charity_events e \
     JOIN event_categories c ON e.category_id = c.category_id \
     JOIN charity_organizations o ON e.organization_id = o.organization_id \
     WHERE e.event_date >= $1 AND e.is_active = true \
     ORDER BY e.event_date ASC";

const CATEGORIES_QUERY: &str = "SELECT * FROM event_categories ORDER BY category_name";

const DETAIL_QUERY: &str = "SELECT e.*, c.category_name, c.category_description, \
            o.organization_name, o.mission_statement, o.contact_email \
     FROM charity_events e \
     JOIN event_categories c ON e.category_id = c.category_id \
     JOIN charity_organizations o ON e.organization_id = o.organization_id \
     WHERE e.event_id = $1 AND e.is_active = true";

pub struct PgEventStore {
    pool: PgPool,
    location_match: LocationMatch,
}

impl PgEventStore {
    pub fn new(pool: PgPool, location_match: LocationMatch) -> Self {
        Self {
            pool,
            location_match,
        }
    }
}

#[async_trait]
impl EventStore for PgEventStore {
    async fn upcoming_events(&self, now: NaiveDateTime) -> Result<Vec<EventListing>, sqlx::Error> {
        sqlx::query_as::<_, EventListing>(UPCOMING_QUERY)
            .bind(now)
            .fetch_all(&self.pool)
            .await
    }

    async fn categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(CATEGORIES_QUERY)
            .fetch_all(&self.pool)
            .await
    }

    async fn search_events(&self, filter: &EventFilter) -> Result<Vec<EventListing>, sqlx::Error> {
        let mut builder = filter.to_query(self.location_match);
        tracing::debug!(sql = builder.sql(), "Searching events");
        builder
            .build_query_as::<EventListing>()
            .fetch_all(&self.pool)
            .await
    }

    async fn event_detail(&self, event_id: i32) -> Result<Option<EventDetail>, sqlx::Error> {
        sqlx::query_as::<_, EventDetail>(DETAIL_QUERY)
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await
    }
}
