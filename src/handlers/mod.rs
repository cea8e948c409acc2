use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;

use crate::models::{Category, EventDetail, EventListing};
use crate::services::events::EVENT_NOT_FOUND;
use crate::services::{EventFilter, EventQueryService, SearchParams};
use crate::utils::error::AppError;

#[derive(Serialize)]
pub struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Json<HealthPayload> {
    Json(HealthPayload {
        status: "ok",
        service: "charity-events-api",
    })
}

pub async fn upcoming_events(
    State(service): State<EventQueryService>,
) -> Result<Json<Vec<EventListing>>, AppError> {
    let events = service.list_upcoming().await?;
    tracing::debug!(count = events.len(), "Fetched upcoming events");
    Ok(Json(events))
}

pub async fn list_categories(
    State(service): State<EventQueryService>,
) -> Result<Json<Vec<Category>>, AppError> {
    Ok(Json(service.list_categories().await?))
}

pub async fn search_events(
    State(service): State<EventQueryService>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<EventListing>>, AppError> {
    let Query(params) = params.map_err(|e| AppError::ValidationError(e.body_text()))?;
    let filter = EventFilter::try_from(params)?;
    let events = service.search(&filter).await?;
    tracing::debug!(?filter, count = events.len(), "Searched events");
    Ok(Json(events))
}

pub async fn event_by_id(
    State(service): State<EventQueryService>,
    event_id: Result<Path<String>, PathRejection>,
) -> Result<Json<EventDetail>, AppError> {
    // An identifier that cannot be decoded cannot name a row either.
    let Path(event_id) = event_id.map_err(|e| {
        tracing::debug!(error = %e.body_text(), "Undecodable event id");
        AppError::NotFound(EVENT_NOT_FOUND.to_string())
    })?;
    Ok(Json(service.get_by_id(&event_id).await?))
}
