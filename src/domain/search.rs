//! Catalog search filters.

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Filters for buses and flights.
///
/// `from` and `to` match case-insensitively anywhere in the city name;
/// `date` matches the travel day exactly.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RouteQuery {
    /// Origin city (partial match)
    pub from: Option<String>,
    /// Destination city (partial match)
    pub to: Option<String>,
    /// Travel day, `YYYY-MM-DD`
    pub date: Option<NaiveDate>,
}

/// Filters for hotels.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HotelQuery {
    /// City (partial match)
    pub city: Option<String>,
    #[validate(range(min = 0.0, message = "min_price cannot be negative"))]
    pub min_price: Option<f64>,
    #[validate(range(min = 0.0, message = "max_price cannot be negative"))]
    pub max_price: Option<f64>,
    /// Minimum star rating
    #[validate(range(min = 1.0, max = 5.0, message = "Rating must be between 1 and 5"))]
    pub rating: Option<f64>,
    /// Only featured hotels when `true`
    pub featured: Option<bool>,
}

impl HotelQuery {
    pub fn check_price_range(&self) -> AppResult<()> {
        check_price_range(self.min_price, self.max_price)
    }
}

/// `GET /hotels/search` parameters; the city is mandatory.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CitySearch {
    #[serde(default)]
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
}

/// Filters for holiday packages.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PackageQuery {
    /// Destination (partial match)
    pub destination: Option<String>,
    #[validate(range(min = 0.0, message = "min_price cannot be negative"))]
    pub min_price: Option<f64>,
    #[validate(range(min = 0.0, message = "max_price cannot be negative"))]
    pub max_price: Option<f64>,
    pub featured: Option<bool>,
}

impl PackageQuery {
    pub fn check_price_range(&self) -> AppResult<()> {
        check_price_range(self.min_price, self.max_price)
    }
}

fn check_price_range(min: Option<f64>, max: Option<f64>) -> AppResult<()> {
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(AppError::validation(
            "min_price cannot be greater than max_price",
        )),
        _ => Ok(()),
    }
}

/// Trim a free-text filter, treating blank input as absent.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_range_order() {
        let inverted = HotelQuery {
            min_price: Some(9000.0),
            max_price: Some(5000.0),
            ..Default::default()
        };
        assert!(inverted.check_price_range().is_err());

        let open_ended = PackageQuery {
            min_price: Some(20000.0),
            ..Default::default()
        };
        assert!(open_ended.check_price_range().is_ok());
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(&Some("  Goa ".to_string())), Some("Goa"));
        assert_eq!(non_blank(&Some("   ".to_string())), None);
        assert_eq!(non_blank(&None), None);
    }

    #[test]
    fn test_rating_bounds() {
        let query = HotelQuery {
            rating: Some(6.0),
            ..Default::default()
        };
        assert!(query.validate().is_err());
    }
}
