//! Bus listings.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A scheduled bus departure with bookable seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Bus {
    pub id: Uuid,
    /// Operator name
    #[schema(example = "VRL Travels")]
    pub name: String,
    #[schema(example = "Mumbai")]
    pub from: String,
    #[schema(example = "Delhi")]
    pub to: String,
    /// Travel day
    #[schema(example = "2024-10-25")]
    pub date: NaiveDate,
    #[schema(example = "08:00 AM")]
    pub departure_time: String,
    #[schema(example = "10:00 PM")]
    pub arrival_time: String,
    /// Fare per seat
    #[schema(example = 2500.0)]
    pub price: f64,
    pub seats_available: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bus {
    /// Details stored on a booking so it survives later edits to the listing.
    pub fn snapshot(&self, seats: i32) -> serde_json::Value {
        json!({
            "name": self.name,
            "from": self.from,
            "to": self.to,
            "date": self.date,
            "departure_time": self.departure_time,
            "seats_booked": seats,
        })
    }
}

/// New bus listing (admin)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewBus {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Sharma Transports")]
    pub name: String,
    #[validate(length(min = 1, message = "Origin is required"))]
    #[schema(example = "Bangalore")]
    pub from: String,
    #[validate(length(min = 1, message = "Destination is required"))]
    #[schema(example = "Hyderabad")]
    pub to: String,
    pub date: NaiveDate,
    #[validate(length(min = 1, message = "Departure time is required"))]
    #[schema(example = "10:00 PM")]
    pub departure_time: String,
    #[validate(length(min = 1, message = "Arrival time is required"))]
    #[schema(example = "06:00 AM")]
    pub arrival_time: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    #[schema(example = 1200.0)]
    pub price: f64,
    /// Defaults to 40
    #[validate(range(min = 0, message = "Seats cannot be negative"))]
    pub seats_available: Option<i32>,
}

/// Partial bus update (admin)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct BusChanges {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Origin cannot be empty"))]
    pub from: Option<String>,
    #[validate(length(min = 1, message = "Destination cannot be empty"))]
    pub to: Option<String>,
    pub date: Option<NaiveDate>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    #[validate(range(min = 0, message = "Seats cannot be negative"))]
    pub seats_available: Option<i32>,
}
