//! Catalog service - browsing and administering listings.
//!
//! Reads are public; writes are admin-only, which the HTTP layer enforces
//! before calling in.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{
    Bus, BusChanges, Cab, CabChanges, CitySearch, FareEstimate, FareEstimateRequest, Flight,
    FlightChanges, Hotel, HotelChanges, HotelQuery, NewBus, NewCab, NewFlight, NewHotel,
    NewPackage, Package, PackageChanges, PackageQuery, RouteQuery,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait CatalogService: Send + Sync {
    // Buses
    async fn list_buses(&self, query: RouteQuery) -> AppResult<Vec<Bus>>;
    async fn get_bus(&self, id: Uuid) -> AppResult<Bus>;
    async fn create_bus(&self, bus: NewBus) -> AppResult<Bus>;
    async fn update_bus(&self, id: Uuid, changes: BusChanges) -> AppResult<Bus>;
    async fn delete_bus(&self, id: Uuid) -> AppResult<()>;

    // Flights
    async fn list_flights(&self, query: RouteQuery) -> AppResult<Vec<Flight>>;
    async fn get_flight(&self, id: Uuid) -> AppResult<Flight>;
    async fn create_flight(&self, flight: NewFlight) -> AppResult<Flight>;
    async fn update_flight(&self, id: Uuid, changes: FlightChanges) -> AppResult<Flight>;
    async fn delete_flight(&self, id: Uuid) -> AppResult<()>;

    // Hotels
    async fn list_hotels(&self, query: HotelQuery) -> AppResult<Vec<Hotel>>;
    /// City search; the city must not be blank
    async fn search_hotels(&self, search: CitySearch) -> AppResult<Vec<Hotel>>;
    async fn get_hotel(&self, id: Uuid) -> AppResult<Hotel>;
    async fn create_hotel(&self, hotel: NewHotel) -> AppResult<Hotel>;
    async fn update_hotel(&self, id: Uuid, changes: HotelChanges) -> AppResult<Hotel>;
    async fn delete_hotel(&self, id: Uuid) -> AppResult<()>;

    // Packages
    async fn list_packages(&self, query: PackageQuery) -> AppResult<Vec<Package>>;
    async fn get_package(&self, id: Uuid) -> AppResult<Package>;
    async fn create_package(&self, package: NewPackage) -> AppResult<Package>;
    async fn update_package(&self, id: Uuid, changes: PackageChanges) -> AppResult<Package>;
    async fn delete_package(&self, id: Uuid) -> AppResult<()>;

    // Cabs
    async fn list_cabs(&self) -> AppResult<Vec<Cab>>;
    async fn get_cab(&self, id: Uuid) -> AppResult<Cab>;
    async fn create_cab(&self, cab: NewCab) -> AppResult<Cab>;
    async fn update_cab(&self, id: Uuid, changes: CabChanges) -> AppResult<Cab>;
    async fn delete_cab(&self, id: Uuid) -> AppResult<()>;
    async fn estimate_fare(&self, request: FareEstimateRequest) -> AppResult<FareEstimate>;
}

pub struct Catalog<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Catalog<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for Catalog<U> {
    async fn list_buses(&self, query: RouteQuery) -> AppResult<Vec<Bus>> {
        self.uow.buses().search(query).await
    }

    async fn get_bus(&self, id: Uuid) -> AppResult<Bus> {
        self.uow.buses().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_bus(&self, bus: NewBus) -> AppResult<Bus> {
        let bus = self.uow.buses().create(bus).await?;
        tracing::info!(bus_id = %bus.id, "Bus listed");
        Ok(bus)
    }

    async fn update_bus(&self, id: Uuid, changes: BusChanges) -> AppResult<Bus> {
        self.uow.buses().update(id, changes).await
    }

    async fn delete_bus(&self, id: Uuid) -> AppResult<()> {
        self.uow.buses().delete(id).await
    }

    async fn list_flights(&self, query: RouteQuery) -> AppResult<Vec<Flight>> {
        self.uow.flights().search(query).await
    }

    async fn get_flight(&self, id: Uuid) -> AppResult<Flight> {
        self.uow.flights().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_flight(&self, flight: NewFlight) -> AppResult<Flight> {
        let flight = self.uow.flights().create(flight).await?;
        tracing::info!(flight_id = %flight.id, "Flight listed");
        Ok(flight)
    }

    async fn update_flight(&self, id: Uuid, changes: FlightChanges) -> AppResult<Flight> {
        self.uow.flights().update(id, changes).await
    }

    async fn delete_flight(&self, id: Uuid) -> AppResult<()> {
        self.uow.flights().delete(id).await
    }

    async fn list_hotels(&self, query: HotelQuery) -> AppResult<Vec<Hotel>> {
        query.check_price_range()?;
        self.uow.hotels().search(query).await
    }

    async fn search_hotels(&self, search: CitySearch) -> AppResult<Vec<Hotel>> {
        let city = search.city.trim();
        if city.is_empty() {
            return Err(AppError::validation("City is required"));
        }

        let query = HotelQuery {
            city: Some(city.to_string()),
            ..Default::default()
        };
        self.uow.hotels().search(query).await
    }

    async fn get_hotel(&self, id: Uuid) -> AppResult<Hotel> {
        self.uow.hotels().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_hotel(&self, hotel: NewHotel) -> AppResult<Hotel> {
        let hotel = self.uow.hotels().create(hotel).await?;
        tracing::info!(hotel_id = %hotel.id, "Hotel listed");
        Ok(hotel)
    }

    async fn update_hotel(&self, id: Uuid, changes: HotelChanges) -> AppResult<Hotel> {
        self.uow.hotels().update(id, changes).await
    }

    async fn delete_hotel(&self, id: Uuid) -> AppResult<()> {
        self.uow.hotels().delete(id).await
    }

    async fn list_packages(&self, query: PackageQuery) -> AppResult<Vec<Package>> {
        query.check_price_range()?;
        self.uow.packages().search(query).await
    }

    async fn get_package(&self, id: Uuid) -> AppResult<Package> {
        self.uow.packages().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_package(&self, package: NewPackage) -> AppResult<Package> {
        let package = self.uow.packages().create(package).await?;
        tracing::info!(package_id = %package.id, "Package listed");
        Ok(package)
    }

    async fn update_package(&self, id: Uuid, changes: PackageChanges) -> AppResult<Package> {
        self.uow.packages().update(id, changes).await
    }

    async fn delete_package(&self, id: Uuid) -> AppResult<()> {
        self.uow.packages().delete(id).await
    }

    async fn list_cabs(&self) -> AppResult<Vec<Cab>> {
        self.uow.cabs().list().await
    }

    async fn get_cab(&self, id: Uuid) -> AppResult<Cab> {
        self.uow.cabs().find_by_id(id).await?.ok_or_not_found()
    }

    async fn create_cab(&self, cab: NewCab) -> AppResult<Cab> {
        let cab = self.uow.cabs().create(cab).await?;
        tracing::info!(cab_id = %cab.id, "Cab listed");
        Ok(cab)
    }

    async fn update_cab(&self, id: Uuid, changes: CabChanges) -> AppResult<Cab> {
        self.uow.cabs().update(id, changes).await
    }

    async fn delete_cab(&self, id: Uuid) -> AppResult<()> {
        self.uow.cabs().delete(id).await
    }

    async fn estimate_fare(&self, request: FareEstimateRequest) -> AppResult<FareEstimate> {
        let cab = self.get_cab(request.cab_id).await?;

        Ok(FareEstimate {
            cab_id: cab.id,
            distance_km: request.distance_km,
            fare: cab.fare(request.distance_km),
        })
    }
}
