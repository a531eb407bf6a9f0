//! Migration: Create listing tables (buses, flights, hotels, packages, cabs).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Buses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Buses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Buses::Name).string().not_null())
                    .col(ColumnDef::new(Buses::Origin).string().not_null())
                    .col(ColumnDef::new(Buses::Destination).string().not_null())
                    .col(ColumnDef::new(Buses::TravelDate).date().not_null())
                    .col(ColumnDef::new(Buses::DepartureTime).string().not_null())
                    .col(ColumnDef::new(Buses::ArrivalTime).string().not_null())
                    .col(ColumnDef::new(Buses::Price).double().not_null())
                    .col(
                        ColumnDef::new(Buses::SeatsAvailable)
                            .integer()
                            .not_null()
                            .default(40)
                            .check(Expr::col(Buses::SeatsAvailable).gte(0)),
                    )
                    .col(timestamp(Buses::CreatedAt))
                    .col(timestamp(Buses::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_buses_travel_date")
                    .table(Buses::Table)
                    .col(Buses::TravelDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Flights::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Flights::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Flights::Airline).string().not_null())
                    .col(ColumnDef::new(Flights::FlightNumber).string().not_null())
                    .col(ColumnDef::new(Flights::Origin).string().not_null())
                    .col(ColumnDef::new(Flights::Destination).string().not_null())
                    .col(ColumnDef::new(Flights::TravelDate).date().not_null())
                    .col(ColumnDef::new(Flights::DepartureTime).string().not_null())
                    .col(ColumnDef::new(Flights::ArrivalTime).string().not_null())
                    .col(
                        ColumnDef::new(Flights::Duration)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Flights::Price).double().not_null())
                    .col(
                        ColumnDef::new(Flights::SeatsAvailable)
                            .integer()
                            .not_null()
                            .default(150)
                            .check(Expr::col(Flights::SeatsAvailable).gte(0)),
                    )
                    .col(timestamp(Flights::CreatedAt))
                    .col(timestamp(Flights::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flights_travel_date")
                    .table(Flights::Table)
                    .col(Flights::TravelDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Hotels::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Hotels::Name).string().not_null())
                    .col(ColumnDef::new(Hotels::City).string().not_null())
                    .col(ColumnDef::new(Hotels::Address).string().null())
                    .col(ColumnDef::new(Hotels::Description).text().null())
                    .col(ColumnDef::new(Hotels::PricePerNight).double().not_null())
                    .col(
                        ColumnDef::new(Hotels::Rating)
                            .double()
                            .not_null()
                            .check(Expr::col(Hotels::Rating).between(1, 5)),
                    )
                    .col(ColumnDef::new(Hotels::Image).string().null())
                    .col(
                        ColumnDef::new(Hotels::Amenities)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Hotels::RoomsAvailable)
                            .integer()
                            .not_null()
                            .default(10)
                            .check(Expr::col(Hotels::RoomsAvailable).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Hotels::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp(Hotels::CreatedAt))
                    .col(timestamp(Hotels::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Packages::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Packages::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Packages::Destination).string().not_null())
                    .col(ColumnDef::new(Packages::Description).text().not_null())
                    .col(ColumnDef::new(Packages::Price).double().not_null())
                    .col(ColumnDef::new(Packages::Image).string().null())
                    .col(ColumnDef::new(Packages::Duration).string().not_null())
                    .col(
                        ColumnDef::new(Packages::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(timestamp(Packages::CreatedAt))
                    .col(timestamp(Packages::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Cabs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Cabs::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Cabs::Provider).string().not_null())
                    .col(ColumnDef::new(Cabs::VehicleType).string().not_null())
                    .col(ColumnDef::new(Cabs::BaseFare).double().not_null())
                    .col(ColumnDef::new(Cabs::PerKm).double().not_null())
                    .col(timestamp(Cabs::CreatedAt))
                    .col(timestamp(Cabs::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cabs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Packages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Flights::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Buses::Table).to_owned())
            .await
    }
}

fn timestamp<T: Iden + 'static>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

#[derive(Iden)]
enum Buses {
    Table,
    Id,
    Name,
    Origin,
    Destination,
    TravelDate,
    DepartureTime,
    ArrivalTime,
    Price,
    SeatsAvailable,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Flights {
    Table,
    Id,
    Airline,
    FlightNumber,
    Origin,
    Destination,
    TravelDate,
    DepartureTime,
    ArrivalTime,
    Duration,
    Price,
    SeatsAvailable,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Hotels {
    Table,
    Id,
    Name,
    City,
    Address,
    Description,
    PricePerNight,
    Rating,
    Image,
    Amenities,
    RoomsAvailable,
    Featured,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Packages {
    Table,
    Id,
    Destination,
    Description,
    Price,
    Image,
    Duration,
    Featured,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Cabs {
    Table,
    Id,
    Provider,
    VehicleType,
    BaseFare,
    PerKm,
    CreatedAt,
    UpdatedAt,
}
