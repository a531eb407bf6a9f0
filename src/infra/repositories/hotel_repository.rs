//! Hotel listing storage.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::base::{contains_ci, delete_existing};
use super::entities::hotel::{self, ActiveModel, Entity as HotelEntity};
use crate::config::DEFAULT_HOTEL_ROOMS;
use crate::domain::search::non_blank;
use crate::domain::{Hotel, HotelChanges, HotelQuery, NewHotel};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Hotel>>;

    /// Hotels matching the filters, featured and best rated first
    async fn search(&self, query: HotelQuery) -> AppResult<Vec<Hotel>>;

    async fn create(&self, hotel: NewHotel) -> AppResult<Hotel>;

    async fn update(&self, id: Uuid, changes: HotelChanges) -> AppResult<Hotel>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    async fn delete_all(&self) -> AppResult<u64>;
}

pub struct HotelStore {
    db: Arc<DatabaseConnection>,
}

impl HotelStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HotelRepository for HotelStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Hotel>> {
        let result = HotelEntity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(result.map(Hotel::from))
    }

    async fn search(&self, query: HotelQuery) -> AppResult<Vec<Hotel>> {
        let mut select = HotelEntity::find();

        if let Some(city) = non_blank(&query.city) {
            select = select.filter(contains_ci(hotel::Column::City, city));
        }
        if let Some(min) = query.min_price {
            select = select.filter(hotel::Column::PricePerNight.gte(min));
        }
        if let Some(max) = query.max_price {
            select = select.filter(hotel::Column::PricePerNight.lte(max));
        }
        if let Some(rating) = query.rating {
            select = select.filter(hotel::Column::Rating.gte(rating));
        }
        if query.featured == Some(true) {
            select = select.filter(hotel::Column::Featured.eq(true));
        }

        let models = select
            .order_by_desc(hotel::Column::Featured)
            .order_by_desc(hotel::Column::Rating)
            .order_by_asc(hotel::Column::Name)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Hotel::from).collect())
    }

    async fn create(&self, hotel: NewHotel) -> AppResult<Hotel> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(hotel.name),
            city: Set(hotel.city),
            address: Set(hotel.address),
            description: Set(hotel.description),
            price_per_night: Set(hotel.price_per_night),
            rating: Set(hotel.rating),
            image: Set(hotel.image),
            amenities: Set(json!(hotel.amenities)),
            rooms_available: Set(hotel.rooms_available.unwrap_or(DEFAULT_HOTEL_ROOMS)),
            featured: Set(hotel.featured),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(Hotel::from(model))
    }

    async fn update(&self, id: Uuid, changes: HotelChanges) -> AppResult<Hotel> {
        let existing = HotelEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(city) = changes.city {
            active.city = Set(city);
        }
        if let Some(address) = changes.address {
            active.address = Set(Some(address));
        }
        if let Some(description) = changes.description {
            active.description = Set(Some(description));
        }
        if let Some(price) = changes.price_per_night {
            active.price_per_night = Set(price);
        }
        if let Some(rating) = changes.rating {
            active.rating = Set(rating);
        }
        if let Some(image) = changes.image {
            active.image = Set(Some(image));
        }
        if let Some(amenities) = changes.amenities {
            active.amenities = Set(json!(amenities));
        }
        if let Some(rooms) = changes.rooms_available {
            active.rooms_available = Set(rooms);
        }
        if let Some(featured) = changes.featured {
            active.featured = Set(featured);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(self.db.as_ref()).await?;
        Ok(Hotel::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        delete_existing::<HotelEntity, _>(self.db.as_ref(), id).await
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = HotelEntity::delete_many().exec(self.db.as_ref()).await?;
        Ok(result.rows_affected)
    }
}
