//! Holiday package listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Package {
    pub id: Uuid,
    #[schema(example = "Kerala Backwaters")]
    pub destination: String,
    pub description: String,
    /// Price for the whole package
    #[schema(example = 25000.0)]
    pub price: f64,
    pub image: Option<String>,
    #[schema(example = "5 Days / 4 Nights")]
    pub duration: String,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Package {
    pub fn snapshot(&self) -> serde_json::Value {
        json!({
            "destination": self.destination,
            "duration": self.duration,
        })
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct NewPackage {
    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    pub image: Option<String>,
    #[validate(length(min = 1, message = "Duration is required"))]
    pub duration: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PackageChanges {
    #[validate(length(min = 1, message = "Destination cannot be empty"))]
    pub destination: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    pub image: Option<String>,
    pub duration: Option<String>,
    pub featured: Option<bool>,
}
