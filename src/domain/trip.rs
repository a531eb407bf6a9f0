//! Personal trip plans.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Trip {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "Goa")]
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewTrip {
    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewTrip {
    pub fn check_dates(&self) -> AppResult<()> {
        check_trip_dates(self.start_date, self.end_date)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct TripChanges {
    #[validate(length(min = 1, message = "Destination cannot be empty"))]
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TripChanges {
    /// Validate the dates the trip would have after applying these changes.
    pub fn check_against(&self, current: &Trip) -> AppResult<()> {
        check_trip_dates(
            self.start_date.unwrap_or(current.start_date),
            self.end_date.unwrap_or(current.end_date),
        )
    }
}

fn check_trip_dates(start: NaiveDate, end: NaiveDate) -> AppResult<()> {
    if end < start {
        return Err(AppError::validation("End date cannot be before start date"));
    }
    Ok(())
}
