//! Bookings: what was reserved, by whom, and for how much.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Kind of listing a booking refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum BookingKind {
    Bus,
    Flight,
    Hotel,
    Package,
    Cab,
}

impl BookingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingKind::Bus => "Bus",
            BookingKind::Flight => "Flight",
            BookingKind::Hotel => "Hotel",
            BookingKind::Package => "Package",
            BookingKind::Cab => "Cab",
        }
    }

    /// Whether booking this kind consumes seats or rooms.
    pub fn holds_inventory(&self) -> bool {
        matches!(self, BookingKind::Bus | BookingKind::Flight | BookingKind::Hotel)
    }

    /// Message returned when the listing has run out.
    pub fn sold_out_message(&self) -> &'static str {
        match self {
            BookingKind::Hotel => "No rooms available",
            _ => "Not enough seats available",
        }
    }
}

impl std::str::FromStr for BookingKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bus" => Ok(BookingKind::Bus),
            "Flight" => Ok(BookingKind::Flight),
            "Hotel" => Ok(BookingKind::Hotel),
            "Package" => Ok(BookingKind::Package),
            "Cab" => Ok(BookingKind::Cab),
            other => Err(AppError::internal(format!("Unknown booking kind: {}", other))),
        }
    }
}

impl std::fmt::Display for BookingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Pending => "Pending",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

impl From<&str> for BookingStatus {
    fn from(s: &str) -> Self {
        match s {
            "Pending" => BookingStatus::Pending,
            "Cancelled" => BookingStatus::Cancelled,
            _ => BookingStatus::Confirmed,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reservation of one listing by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: BookingKind,
    /// The booked bus, flight, hotel, package or cab
    pub item_id: Uuid,
    /// Seats or rooms held; 1 for packages and cabs
    pub quantity: i32,
    pub booking_date: DateTime<Utc>,
    pub total_amount: f64,
    pub status: BookingStatus,
    /// Listing fields captured at booking time
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }

    pub fn ensure_cancellable(&self) -> AppResult<()> {
        if self.is_cancelled() {
            return Err(AppError::bad_request("Booking is already cancelled"));
        }
        Ok(())
    }

    /// Seats or rooms to hand back when this booking is cancelled.
    pub fn held_inventory(&self) -> Option<i32> {
        if self.kind.holds_inventory() && self.quantity > 0 {
            Some(self.quantity)
        } else {
            None
        }
    }
}

/// Booking row to insert; amounts are already computed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub user_id: Uuid,
    pub kind: BookingKind,
    pub item_id: Uuid,
    pub quantity: i32,
    pub total_amount: f64,
    pub details: serde_json::Value,
}

/// Response to a successful booking
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingReceipt {
    #[schema(example = "Bus booked successfully!")]
    pub message: String,
    pub booking: Booking,
}

impl BookingReceipt {
    pub fn new(booking: Booking) -> Self {
        Self {
            message: format!("{} booked successfully!", booking.kind),
            booking,
        }
    }
}

// =============================================================================
// Booking requests
// =============================================================================

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BusBookingRequest {
    pub bus_id: Uuid,
    #[validate(range(min = 1, message = "At least one seat must be booked"))]
    #[schema(example = 2)]
    pub seats: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct FlightBookingRequest {
    pub flight_id: Uuid,
    #[validate(range(min = 1, message = "At least one seat must be booked"))]
    #[schema(example = 1)]
    pub seats: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct HotelBookingRequest {
    pub hotel_id: Uuid,
    #[validate(range(min = 1, max = 365, message = "Nights must be between 1 and 365"))]
    #[schema(example = 3, minimum = 1, maximum = 365)]
    pub nights: i32,
    /// Defaults to today
    pub check_in: Option<NaiveDate>,
    /// Defaults to check-in plus `nights`
    pub check_out: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PackageBookingRequest {
    pub package_id: Uuid,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CabBookingRequest {
    pub cab_id: Uuid,
    #[validate(length(min = 1, message = "Pickup location is required"))]
    pub origin: String,
    #[validate(length(min = 1, message = "Drop location is required"))]
    pub destination: String,
    #[validate(range(min = 0.0, message = "Distance cannot be negative"))]
    pub distance_km: f64,
}

// =============================================================================
// Pricing
// =============================================================================

/// Round a monetary amount to two decimals.
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Total for `seats` seats at `price` each.
pub fn seat_total(price: f64, seats: i32) -> AppResult<f64> {
    if seats < 1 {
        return Err(AppError::validation("At least one seat must be booked"));
    }
    Ok(round_money(price * f64::from(seats)))
}

/// Total for a hotel stay.
pub fn stay_total(price_per_night: f64, nights: i32) -> AppResult<f64> {
    if nights < 1 {
        return Err(AppError::validation("Nights must be at least 1"));
    }
    Ok(round_money(price_per_night * f64::from(nights)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(kind: BookingKind, quantity: i32, status: BookingStatus) -> Booking {
        let now = Utc::now();
        Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            kind,
            item_id: Uuid::new_v4(),
            quantity,
            booking_date: now,
            total_amount: 100.0,
            status,
            details: serde_json::json!({}),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_seat_total() {
        assert_eq!(seat_total(2500.0, 3).unwrap(), 7500.0);
        assert_eq!(seat_total(19.99, 3).unwrap(), 59.97);
        assert!(seat_total(2500.0, 0).is_err());
    }

    #[test]
    fn test_stay_total() {
        assert_eq!(stay_total(15000.0, 2).unwrap(), 30000.0);
        assert!(stay_total(15000.0, 0).is_err());
    }

    #[test]
    fn test_hotel_nights_bounded() {
        let request = |nights| HotelBookingRequest {
            hotel_id: Uuid::new_v4(),
            nights,
            check_in: None,
            check_out: None,
        };
        assert!(request(3).validate().is_ok());
        assert!(request(365).validate().is_ok());
        assert!(request(0).validate().is_err());
        assert!(request(i32::MAX).validate().is_err());
    }

    #[test]
    fn test_kind_parsing_round_trips() {
        for kind in [
            BookingKind::Bus,
            BookingKind::Flight,
            BookingKind::Hotel,
            BookingKind::Package,
            BookingKind::Cab,
        ] {
            assert_eq!(kind.as_str().parse::<BookingKind>().unwrap(), kind);
        }
        assert!("Train".parse::<BookingKind>().is_err());
    }

    #[test]
    fn test_cancelled_booking_cannot_be_cancelled_again() {
        let cancelled = booking(BookingKind::Bus, 2, BookingStatus::Cancelled);
        assert!(matches!(cancelled.ensure_cancellable(), Err(AppError::BadRequest(_))));

        let confirmed = booking(BookingKind::Bus, 2, BookingStatus::Confirmed);
        assert!(confirmed.ensure_cancellable().is_ok());
    }

    #[test]
    fn test_held_inventory_only_for_seats_and_rooms() {
        assert_eq!(booking(BookingKind::Flight, 2, BookingStatus::Confirmed).held_inventory(), Some(2));
        assert_eq!(booking(BookingKind::Hotel, 1, BookingStatus::Confirmed).held_inventory(), Some(1));
        assert_eq!(booking(BookingKind::Package, 1, BookingStatus::Confirmed).held_inventory(), None);
        assert_eq!(booking(BookingKind::Cab, 1, BookingStatus::Confirmed).held_inventory(), None);
    }

    #[test]
    fn test_receipt_message_names_kind() {
        let receipt = BookingReceipt::new(booking(BookingKind::Hotel, 1, BookingStatus::Confirmed));
        assert_eq!(receipt.message, "Hotel booked successfully!");
    }

    #[test]
    fn test_status_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&BookingStatus::Cancelled).unwrap(), "\"Cancelled\"");
        assert_eq!(BookingStatus::from("Pending"), BookingStatus::Pending);
    }
}
