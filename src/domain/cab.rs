//! Cab providers and fare estimation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::booking::round_money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cab {
    pub id: Uuid,
    #[schema(example = "QuickCabs")]
    pub provider: String,
    #[schema(example = "Sedan")]
    pub vehicle_type: String,
    /// Flat charge per ride
    #[schema(example = 3.0)]
    pub base_fare: f64,
    /// Charge per kilometre
    #[schema(example = 1.2)]
    pub per_km: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cab {
    /// `base_fare + per_km * distance_km`, rounded to cents.
    pub fn fare(&self, distance_km: f64) -> f64 {
        round_money(self.base_fare + self.per_km * distance_km)
    }

    pub fn snapshot(&self, origin: &str, destination: &str, distance_km: f64) -> serde_json::Value {
        json!({
            "provider": self.provider,
            "vehicle_type": self.vehicle_type,
            "origin": origin,
            "destination": destination,
            "distance_km": distance_km,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewCab {
    #[validate(length(min = 1, message = "Provider is required"))]
    pub provider: String,
    #[validate(length(min = 1, message = "Vehicle type is required"))]
    pub vehicle_type: String,
    #[validate(range(min = 0.0, message = "Base fare cannot be negative"))]
    pub base_fare: f64,
    #[validate(range(min = 0.0, message = "Per-km rate cannot be negative"))]
    pub per_km: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct CabChanges {
    #[validate(length(min = 1, message = "Provider cannot be empty"))]
    pub provider: Option<String>,
    #[validate(length(min = 1, message = "Vehicle type cannot be empty"))]
    pub vehicle_type: Option<String>,
    #[validate(range(min = 0.0, message = "Base fare cannot be negative"))]
    pub base_fare: Option<f64>,
    #[validate(range(min = 0.0, message = "Per-km rate cannot be negative"))]
    pub per_km: Option<f64>,
}

/// Fare estimate request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct FareEstimateRequest {
    pub cab_id: Uuid,
    #[validate(range(min = 0.0, message = "Distance cannot be negative"))]
    #[schema(example = 12.5)]
    pub distance_km: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FareEstimate {
    pub cab_id: Uuid,
    pub distance_km: f64,
    #[schema(example = 18.0)]
    pub fare: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick_cabs() -> Cab {
        let now = Utc::now();
        Cab {
            id: Uuid::new_v4(),
            provider: "QuickCabs".to_string(),
            vehicle_type: "Sedan".to_string(),
            base_fare: 3.0,
            per_km: 1.2,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_fare_includes_base_and_distance() {
        assert_eq!(quick_cabs().fare(10.0), 15.0);
        assert_eq!(quick_cabs().fare(12.5), 18.0);
    }

    #[test]
    fn test_zero_distance_costs_base_fare() {
        assert_eq!(quick_cabs().fare(0.0), 3.0);
    }

    #[test]
    fn test_fare_rounds_to_cents() {
        assert_eq!(quick_cabs().fare(0.333), 3.4);
    }
}
