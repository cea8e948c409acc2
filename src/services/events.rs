use std::sync::Arc;

use crate::models::{Category, EventDetail, EventListing};
use crate::services::clock::Clock;
use crate::services::filter::EventFilter;
use crate::services::store::EventStore;
use crate::utils::error::AppError;

pub const EVENT_NOT_FOUND: &str = "Event not found or inactive";

/// Read-only queries over active charity events.
///
/// Stateless apart from the shared store and clock, so it is cheap to clone
/// into every request.
#[derive(Clone)]
pub struct EventQueryService {
    store: Arc<dyn EventStore>,
    clock: Arc<dyn Clock>,
}

impl EventQueryService {
    pub fn new(store: Arc<dyn EventStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Active events scheduled at or after the current second.
    pub async fn list_upcoming(&self) -> Result<Vec<EventListing>, AppError> {
        let now = self.clock.now();
        self.store
            .upcoming_events(now)
            .await
            .map_err(AppError::data_access("Failed to fetch upcoming events"))
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.store
            .categories()
            .await
            .map_err(AppError::data_access("Failed to fetch categories"))
    }

    pub async fn search(&self, filter: &EventFilter) -> Result<Vec<EventListing>, AppError> {
        self.store
            .search_events(filter)
            .await
            .map_err(AppError::data_access("Search failed"))
    }

    /// Looks up one active event by its path identifier. Identifiers that are
    /// not integers cannot exist, so they are reported as not found.
    pub async fn get_by_id(&self, event_id: &str) -> Result<EventDetail, AppError> {
        let Ok(id) = event_id.trim().parse::<i32>() else {
            return Err(AppError::NotFound(EVENT_NOT_FOUND.to_string()));
        };

        self.store
            .event_detail(id)
            .await
            .map_err(AppError::data_access("Failed to fetch event details"))?
            .ok_or_else(|| AppError::NotFound(EVENT_NOT_FOUND.to_string()))
    }
}
