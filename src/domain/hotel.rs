//! Hotel listings and stay-date rules.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Hotel {
    pub id: Uuid,
    #[schema(example = "Taj Palace")]
    pub name: String,
    #[schema(example = "Mumbai")]
    pub city: String,
    pub address: Option<String>,
    pub description: Option<String>,
    #[schema(example = 15000.0)]
    pub price_per_night: f64,
    /// Star rating, 1 to 5
    #[schema(example = 5.0)]
    pub rating: f64,
    pub image: Option<String>,
    pub amenities: Vec<String>,
    pub rooms_available: i32,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Hotel {
    pub fn snapshot(&self, stay: &Stay) -> serde_json::Value {
        json!({
            "name": self.name,
            "city": self.city,
            "nights": stay.nights,
            "check_in": stay.check_in,
            "check_out": stay.check_out,
        })
    }
}

/// New hotel listing (admin)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewHotel {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    pub address: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price_per_night: f64,
    #[validate(range(min = 1.0, max = 5.0, message = "Rating must be between 1 and 5"))]
    pub rating: f64,
    pub image: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Defaults to 10
    #[validate(range(min = 0, message = "Rooms cannot be negative"))]
    pub rooms_available: Option<i32>,
    #[serde(default)]
    pub featured: bool,
}

/// Partial hotel update (admin)
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct HotelChanges {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "City cannot be empty"))]
    pub city: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price_per_night: Option<f64>,
    #[validate(range(min = 1.0, max = 5.0, message = "Rating must be between 1 and 5"))]
    pub rating: Option<f64>,
    pub image: Option<String>,
    pub amenities: Option<Vec<String>>,
    #[validate(range(min = 0, message = "Rooms cannot be negative"))]
    pub rooms_available: Option<i32>,
    pub featured: Option<bool>,
}

/// Resolved check-in/check-out for a hotel booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stay {
    pub nights: i32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl Stay {
    /// Fill in missing dates: check-in defaults to `today`, check-out to
    /// check-in plus `nights`. An explicit check-out only has to fall after
    /// check-in; `nights` alone drives the price.
    pub fn resolve(
        nights: i32,
        check_in: Option<NaiveDate>,
        check_out: Option<NaiveDate>,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let nights_u64 = u64::try_from(nights)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| AppError::validation("Nights must be at least 1"))?;

        let check_in = check_in.unwrap_or(today);
        let check_out = match check_out {
            Some(date) => date,
            None => check_in
                .checked_add_days(Days::new(nights_u64))
                .ok_or_else(|| AppError::validation("Stay dates are out of range"))?,
        };

        if check_out <= check_in {
            return Err(AppError::validation("Check-out must be after check-in"));
        }

        Ok(Self {
            nights,
            check_in,
            check_out,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_stay_defaults_to_today() {
        let stay = Stay::resolve(3, None, None, day(2024, 10, 25)).unwrap();
        assert_eq!(stay.check_in, day(2024, 10, 25));
        assert_eq!(stay.check_out, day(2024, 10, 28));
    }

    #[test]
    fn test_stay_derives_checkout_from_checkin() {
        let stay = Stay::resolve(2, Some(day(2024, 12, 30)), None, day(2024, 10, 1)).unwrap();
        assert_eq!(stay.check_out, day(2025, 1, 1));
    }

    #[test]
    fn test_stay_rejects_backwards_dates() {
        let result = Stay::resolve(
            1,
            Some(day(2024, 10, 25)),
            Some(day(2024, 10, 24)),
            day(2024, 10, 1),
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_stay_keeps_explicit_checkout() {
        let stay = Stay::resolve(
            2,
            Some(day(2024, 10, 25)),
            Some(day(2024, 10, 30)),
            day(2024, 10, 1),
        )
        .unwrap();
        assert_eq!(stay.nights, 2);
        assert_eq!(stay.check_out, day(2024, 10, 30));
    }

    #[test]
    fn test_stay_out_of_range_is_validation_error() {
        let result = Stay::resolve(i32::MAX, None, None, day(2024, 10, 25));
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = Stay::resolve(2, Some(NaiveDate::MAX), None, day(2024, 10, 25));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_stay_requires_a_night() {
        assert!(Stay::resolve(0, None, None, day(2024, 10, 1)).is_err());
    }
}
