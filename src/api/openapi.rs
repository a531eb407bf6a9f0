//! OpenAPI documentation configuration.
//!
//! Served at `/api-docs/openapi.json` and browsable through Swagger UI.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, booking_handler, bus_handler, cab_handler, flight_handler, hotel_handler,
    package_handler, trip_handler,
};
use crate::domain::{
    Booking, BookingKind, BookingReceipt, BookingStatus, Bus, BusBookingRequest, BusChanges, Cab,
    CabBookingRequest, CabChanges, FareEstimate, FareEstimateRequest, Flight,
    FlightBookingRequest, FlightChanges, Hotel, HotelBookingRequest, HotelChanges, NewBus, NewCab,
    NewFlight, NewHotel, NewPackage, NewTrip, Package, PackageBookingRequest, PackageChanges,
    Trip, TripChanges, UserResponse, UserRole,
};
use crate::services::TokenResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the Voyago API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Voyago",
        version = "0.1.0",
        description = "Travel booking API: buses, flights, hotels, holiday packages and cabs",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "Voyago Team", email = "dev@voyago.com")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        // Authentication
        auth_handler::register,
        auth_handler::login,
        auth_handler::logout,
        auth_handler::me,
        // Buses
        bus_handler::list_buses,
        bus_handler::get_bus,
        bus_handler::book_bus,
        bus_handler::create_bus,
        bus_handler::update_bus,
        bus_handler::delete_bus,
        // Flights
        flight_handler::list_flights,
        flight_handler::get_flight,
        flight_handler::book_flight,
        flight_handler::create_flight,
        flight_handler::update_flight,
        flight_handler::delete_flight,
        // Hotels
        hotel_handler::list_hotels,
        hotel_handler::search_hotels,
        hotel_handler::get_hotel,
        hotel_handler::book_hotel,
        hotel_handler::create_hotel,
        hotel_handler::update_hotel,
        hotel_handler::delete_hotel,
        // Packages
        package_handler::list_packages,
        package_handler::get_package,
        package_handler::book_package,
        package_handler::create_package,
        package_handler::update_package,
        package_handler::delete_package,
        // Cabs
        cab_handler::list_cabs,
        cab_handler::get_cab,
        cab_handler::estimate_fare,
        cab_handler::book_cab,
        cab_handler::create_cab,
        cab_handler::update_cab,
        cab_handler::delete_cab,
        // Bookings
        booking_handler::my_bookings,
        booking_handler::user_bookings,
        booking_handler::get_booking,
        booking_handler::cancel_booking,
        // Trips
        trip_handler::list_trips,
        trip_handler::create_trip,
        trip_handler::get_trip,
        trip_handler::update_trip,
        trip_handler::delete_trip,
    ),
    components(
        schemas(
            // Accounts
            UserRole,
            UserResponse,
            TokenResponse,
            MessageResponse,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::AuthResponse,
            // Listings
            Bus, NewBus, BusChanges,
            Flight, NewFlight, FlightChanges,
            Hotel, NewHotel, HotelChanges,
            Package, NewPackage, PackageChanges,
            Cab, NewCab, CabChanges,
            FareEstimateRequest, FareEstimate,
            // Bookings
            Booking, BookingKind, BookingStatus, BookingReceipt,
            BusBookingRequest, FlightBookingRequest, HotelBookingRequest,
            PackageBookingRequest, CabBookingRequest,
            // Trips
            Trip, NewTrip, TripChanges,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and session"),
        (name = "Buses", description = "Bus search, booking and administration"),
        (name = "Flights", description = "Flight search, booking and administration"),
        (name = "Hotels", description = "Hotel search, booking and administration"),
        (name = "Packages", description = "Holiday packages"),
        (name = "Cabs", description = "Cab fares and rides"),
        (name = "Bookings", description = "Viewing and cancelling bookings"),
        (name = "Trips", description = "Personal trip plans")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT from /api/auth/login; the `token` cookie also works"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_booking_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/bus/book"));
        assert!(doc.paths.paths.contains_key("/api/bookings/{id}/cancel"));
        assert!(doc.paths.paths.contains_key("/api/hotels/search"));
    }
}
