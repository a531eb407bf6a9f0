//! Seed command - Loads an admin account and sample listings.
//!
//! Catalog tables (buses, flights, hotels, packages, cabs) are emptied
//! first unless `--keep-existing` is passed. Users and bookings are never
//! cleared; the admin account is created only when its email is unused.

use chrono::NaiveDate;

use crate::cli::args::SeedArgs;
use crate::config::Config;
use crate::domain::{NewBus, NewCab, NewFlight, NewHotel, NewPackage, Password, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::{Database, Persistence, UnitOfWork};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
    let uow = Persistence::new(db.get_connection());

    if !args.keep_existing {
        clear_catalog(&uow).await?;
    }

    ensure_admin(&uow, &config).await?;

    for bus in sample_buses()? {
        uow.buses().create(bus).await?;
    }
    for flight in sample_flights()? {
        uow.flights().create(flight).await?;
    }
    for hotel in sample_hotels() {
        uow.hotels().create(hotel).await?;
    }
    for package in sample_packages() {
        uow.packages().create(package).await?;
    }
    for cab in sample_cabs() {
        uow.cabs().create(cab).await?;
    }

    tracing::info!("Database seeded successfully");
    Ok(())
}

async fn clear_catalog<U: UnitOfWork>(uow: &U) -> AppResult<()> {
    let buses = uow.buses().delete_all().await?;
    let flights = uow.flights().delete_all().await?;
    let hotels = uow.hotels().delete_all().await?;
    let packages = uow.packages().delete_all().await?;
    let cabs = uow.cabs().delete_all().await?;

    tracing::info!(buses, flights, hotels, packages, cabs, "Cleared catalog");
    Ok(())
}

async fn ensure_admin<U: UnitOfWork>(uow: &U, config: &Config) -> AppResult<()> {
    let email = config.seed_admin_email.trim().to_lowercase();

    if uow.users().find_by_email(&email).await?.is_some() {
        tracing::info!(email = %email, "Admin account already present");
        return Ok(());
    }

    let password = Password::new(config.seed_admin_password())?;
    uow.users()
        .create(
            "Admin".to_string(),
            email.clone(),
            password.into_string(),
            UserRole::Admin,
        )
        .await?;

    tracing::info!(email = %email, "Created admin account");
    Ok(())
}

fn date(y: i32, m: u32, d: u32) -> AppResult<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| AppError::internal(format!("Invalid seed date {}-{}-{}", y, m, d)))
}

fn sample_buses() -> AppResult<Vec<NewBus>> {
    let bus = |name: &str, from: &str, to: &str, day, dep: &str, arr: &str, price, seats| NewBus {
        name: name.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        date: day,
        departure_time: dep.to_string(),
        arrival_time: arr.to_string(),
        price,
        seats_available: Some(seats),
    };

    Ok(vec![
        bus("VRL Travels", "Mumbai", "Delhi", date(2024, 10, 25)?, "08:00 AM", "10:00 PM", 2500.0, 30),
        bus("Sharma Transports", "Bangalore", "Hyderabad", date(2024, 10, 26)?, "10:00 PM", "06:00 AM", 1200.0, 25),
        bus("Red Bus", "Chennai", "Madurai", date(2024, 10, 27)?, "09:30 PM", "05:00 AM", 800.0, 40),
    ])
}

fn sample_flights() -> AppResult<Vec<NewFlight>> {
    Ok(vec![
        NewFlight {
            airline: "IndiGo".to_string(),
            flight_number: "6E-204".to_string(),
            from: "Delhi".to_string(),
            to: "Goa".to_string(),
            date: date(2024, 10, 28)?,
            departure_time: "06:15 AM".to_string(),
            arrival_time: "08:50 AM".to_string(),
            duration: "2h 35m".to_string(),
            price: 5400.0,
            seats_available: None,
        },
        NewFlight {
            airline: "Air India".to_string(),
            flight_number: "AI-677".to_string(),
            from: "Mumbai".to_string(),
            to: "Bangalore".to_string(),
            date: date(2024, 10, 29)?,
            departure_time: "07:40 PM".to_string(),
            arrival_time: "09:25 PM".to_string(),
            duration: "1h 45m".to_string(),
            price: 4200.0,
            seats_available: None,
        },
    ])
}

fn sample_hotels() -> Vec<NewHotel> {
    let hotel = |name: &str, city: &str, price, rating, image: &str, featured| NewHotel {
        name: name.to_string(),
        city: city.to_string(),
        address: None,
        description: None,
        price_per_night: price,
        rating,
        image: Some(image.to_string()),
        amenities: vec!["WiFi".to_string(), "Pool".to_string()],
        rooms_available: None,
        featured,
    };

    vec![
        hotel(
            "Taj Palace",
            "Mumbai",
            15000.0,
            5.0,
            "https://images.pexels.com/photos/271624/pexels-photo-271624.jpeg",
            true,
        ),
        hotel(
            "The Leela",
            "Goa",
            12000.0,
            5.0,
            "https://images.pexels.com/photos/261102/pexels-photo-261102.jpeg",
            false,
        ),
        hotel(
            "Hyatt Regency",
            "Delhi",
            8000.0,
            4.0,
            "https://images.pexels.com/photos/258154/pexels-photo-258154.jpeg",
            false,
        ),
    ]
}

fn sample_packages() -> Vec<NewPackage> {
    let package = |destination: &str, description: &str, price, image: &str, duration: &str| {
        NewPackage {
            destination: destination.to_string(),
            description: description.to_string(),
            price,
            image: Some(image.to_string()),
            duration: duration.to_string(),
            featured: false,
        }
    };

    vec![
        package(
            "Kerala Backwaters",
            "A serene trip through the backwaters of Alleppey.",
            25000.0,
            "https://images.pexels.com/photos/1586795/pexels-photo-1586795.jpeg",
            "5 Days / 4 Nights",
        ),
        package(
            "Rajasthan Desert Tour",
            "Explore the majestic forts and deserts of Rajasthan.",
            30000.0,
            "https://images.pexels.com/photos/3889928/pexels-photo-3889928.jpeg",
            "7 Days / 6 Nights",
        ),
        package(
            "Himalayan Adventure",
            "Trekking and adventure sports in the Himalayas.",
            40000.0,
            "https://images.pexels.com/photos/547114/pexels-photo-547114.jpeg",
            "10 Days / 9 Nights",
        ),
    ]
}

fn sample_cabs() -> Vec<NewCab> {
    vec![NewCab {
        provider: "QuickCabs".to_string(),
        vehicle_type: "Sedan".to_string(),
        base_fare: 3.0,
        per_km: 1.2,
    }]
}
