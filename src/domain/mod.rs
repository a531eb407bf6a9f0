//! Domain layer - Core business entities and logic
//!
//! Listings (buses, flights, hotels, packages, cabs), the bookings made
//! against them, trip plans and user accounts. Nothing here touches the
//! database or HTTP.

pub mod booking;
pub mod bus;
pub mod cab;
pub mod flight;
pub mod hotel;
pub mod package;
pub mod password;
pub mod search;
pub mod trip;
pub mod user;

pub use booking::{
    round_money, seat_total, stay_total, Booking, BookingKind, BookingReceipt, BookingStatus,
    BusBookingRequest, CabBookingRequest, FlightBookingRequest, HotelBookingRequest, NewBooking,
    PackageBookingRequest,
};
pub use bus::{Bus, BusChanges, NewBus};
pub use cab::{Cab, CabChanges, FareEstimate, FareEstimateRequest, NewCab};
pub use flight::{Flight, FlightChanges, NewFlight};
pub use hotel::{Hotel, HotelChanges, NewHotel, Stay};
pub use package::{NewPackage, Package, PackageChanges};
pub use password::Password;
pub use search::{CitySearch, HotelQuery, PackageQuery, RouteQuery};
pub use trip::{NewTrip, Trip, TripChanges};
pub use user::{Actor, NewAccount, User, UserResponse, UserRole};
