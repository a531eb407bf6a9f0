//! Cab provider storage.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::base::delete_existing;
use super::entities::cab::{self, ActiveModel, Entity as CabEntity};
use crate::domain::{Cab, CabChanges, NewCab};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CabRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Cab>>;

    /// All cab offerings, cheapest base fare first
    async fn list(&self) -> AppResult<Vec<Cab>>;

    async fn create(&self, cab: NewCab) -> AppResult<Cab>;

    async fn update(&self, id: Uuid, changes: CabChanges) -> AppResult<Cab>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    async fn delete_all(&self) -> AppResult<u64>;
}

pub struct CabStore {
    db: Arc<DatabaseConnection>,
}

impl CabStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CabRepository for CabStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Cab>> {
        let result = CabEntity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(result.map(Cab::from))
    }

    async fn list(&self) -> AppResult<Vec<Cab>> {
        let models = CabEntity::find()
            .order_by_asc(cab::Column::BaseFare)
            .order_by_asc(cab::Column::Provider)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Cab::from).collect())
    }

    async fn create(&self, cab: NewCab) -> AppResult<Cab> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            provider: Set(cab.provider),
            vehicle_type: Set(cab.vehicle_type),
            base_fare: Set(cab.base_fare),
            per_km: Set(cab.per_km),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(Cab::from(model))
    }

    async fn update(&self, id: Uuid, changes: CabChanges) -> AppResult<Cab> {
        let existing = CabEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(provider) = changes.provider {
            active.provider = Set(provider);
        }
        if let Some(vehicle_type) = changes.vehicle_type {
            active.vehicle_type = Set(vehicle_type);
        }
        if let Some(base_fare) = changes.base_fare {
            active.base_fare = Set(base_fare);
        }
        if let Some(per_km) = changes.per_km {
            active.per_km = Set(per_km);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(self.db.as_ref()).await?;
        Ok(Cab::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        delete_existing::<CabEntity, _>(self.db.as_ref(), id).await
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = CabEntity::delete_many().exec(self.db.as_ref()).await?;
        Ok(result.rows_affected)
    }
}
