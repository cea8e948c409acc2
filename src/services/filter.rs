use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::{Postgres, QueryBuilder};

use crate::utils::error::AppError;

/// Columns shared by every event list query.
pub(crate) const LISTING_SELECT: &str = "SELECT e.*, c.category_name, o.organization_name \
     FROM charity_events e \
     JOIN event_categories c ON e.category_id = c.category_id \
     JOIN charity_organizations o ON e.organization_id = o.organization_id";

/// How the location filter compares against `event_location`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationMatch {
    CaseSensitive,
    #[default]
    CaseInsensitive,
}

impl LocationMatch {
    fn operator(self) -> &'static str {
        match self {
            LocationMatch::CaseSensitive => "LIKE",
            LocationMatch::CaseInsensitive => "ILIKE",
        }
    }
}

impl FromStr for LocationMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sensitive" | "case-sensitive" => Ok(LocationMatch::CaseSensitive),
            "insensitive" | "case-insensitive" => Ok(LocationMatch::CaseInsensitive),
            other => Err(format!("unknown location match mode '{}'", other)),
        }
    }
}

impl fmt::Display for LocationMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationMatch::CaseSensitive => f.write_str("sensitive"),
            LocationMatch::CaseInsensitive => f.write_str("insensitive"),
        }
    }
}

/// Raw `/events/search` query string. Empty values count as absent.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub date: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
}

/// Validated search criteria. Every field is optional and they combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub category_id: Option<i32>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<SearchParams> for EventFilter {
    type Error = AppError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let date = non_empty(params.date)
            .map(|raw| {
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                    AppError::ValidationError(format!(
                        "Invalid date '{}', expected YYYY-MM-DD",
                        raw
                    ))
                })
            })
            .transpose()?;

        let category_id = non_empty(params.category_id)
            .map(|raw| {
                raw.trim().parse::<i32>().map_err(|_| {
                    AppError::ValidationError(format!("Invalid categoryId '{}'", raw))
                })
            })
            .transpose()?;

        Ok(Self {
            date,
            location: non_empty(params.location),
            category_id,
        })
    }
}

impl EventFilter {
    /// Builds the full search statement. Each supplied criterion adds one
    /// `AND` clause with a positional bind; user input never reaches the SQL text.
    pub fn to_query(&self, location_match: LocationMatch) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(LISTING_SELECT);
        builder.push(" WHERE e.is_active = true");

        if let Some(date) = self.date {
            builder.push(" AND e.event_date::date = ");
            builder.push_bind(date);
        }
        if let Some(location) = &self.location {
            builder.push(" AND e.event_location ");
            builder.push(location_match.operator());
            builder.push(" ");
            builder.push_bind(like_contains(location));
        }
        if let Some(category_id) = self.category_id {
            builder.push(" AND e.category_id = ");
            builder.push_bind(category_id);
        }

        builder.push(" ORDER BY e.event_date ASC");
        builder
    }
}

/// Wraps `value` in `%` after escaping LIKE metacharacters, so it matches
/// as a literal substring. Backslash is Postgres' default LIKE escape.
fn like_contains(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
