//! Flight listings.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Flight {
    pub id: Uuid,
    #[schema(example = "IndiGo")]
    pub airline: String,
    #[schema(example = "6E-204")]
    pub flight_number: String,
    #[schema(example = "Delhi")]
    pub from: String,
    #[schema(example = "Goa")]
    pub to: String,
    pub date: NaiveDate,
    #[schema(example = "06:15")]
    pub departure_time: String,
    #[schema(example = "08:50")]
    pub arrival_time: String,
    #[schema(example = "2h 35m")]
    pub duration: String,
    /// Fare per seat
    pub price: f64,
    pub seats_available: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Flight {
    pub fn snapshot(&self, seats: i32) -> serde_json::Value {
        json!({
            "airline": self.airline,
            "flight_number": self.flight_number,
            "from": self.from,
            "to": self.to,
            "date": self.date,
            "departure_time": self.departure_time,
            "seats_booked": seats,
        })
    }
}

/// New flight listing (admin)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewFlight {
    #[validate(length(min = 1, message = "Airline is required"))]
    pub airline: String,
    #[validate(length(min = 1, message = "Flight number is required"))]
    pub flight_number: String,
    #[validate(length(min = 1, message = "Origin is required"))]
    pub from: String,
    #[validate(length(min = 1, message = "Destination is required"))]
    pub to: String,
    pub date: NaiveDate,
    #[validate(length(min = 1, message = "Departure time is required"))]
    pub departure_time: String,
    #[validate(length(min = 1, message = "Arrival time is required"))]
    pub arrival_time: String,
    #[serde(default)]
    pub duration: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    /// Defaults to 150
    #[validate(range(min = 0, message = "Seats cannot be negative"))]
    pub seats_available: Option<i32>,
}

/// Partial flight update (admin)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct FlightChanges {
    #[validate(length(min = 1, message = "Airline cannot be empty"))]
    pub airline: Option<String>,
    #[validate(length(min = 1, message = "Flight number cannot be empty"))]
    pub flight_number: Option<String>,
    #[validate(length(min = 1, message = "Origin cannot be empty"))]
    pub from: Option<String>,
    #[validate(length(min = 1, message = "Destination cannot be empty"))]
    pub to: Option<String>,
    pub date: Option<NaiveDate>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub duration: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    #[validate(range(min = 0, message = "Seats cannot be negative"))]
    pub seats_available: Option<i32>,
}
