//! Holiday package storage.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::base::{contains_ci, delete_existing};
use super::entities::package::{self, ActiveModel, Entity as PackageEntity};
use crate::domain::search::non_blank;
use crate::domain::{NewPackage, Package, PackageChanges, PackageQuery};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PackageRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Package>>;

    /// Packages matching the filters, featured first then cheapest
    async fn search(&self, query: PackageQuery) -> AppResult<Vec<Package>>;

    async fn create(&self, package: NewPackage) -> AppResult<Package>;

    async fn update(&self, id: Uuid, changes: PackageChanges) -> AppResult<Package>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    async fn delete_all(&self) -> AppResult<u64>;
}

pub struct PackageStore {
    db: Arc<DatabaseConnection>,
}

impl PackageStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PackageRepository for PackageStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Package>> {
        let result = PackageEntity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(result.map(Package::from))
    }

    async fn search(&self, query: PackageQuery) -> AppResult<Vec<Package>> {
        let mut select = PackageEntity::find();

        if let Some(destination) = non_blank(&query.destination) {
            select = select.filter(contains_ci(package::Column::Destination, destination));
        }
        if let Some(min) = query.min_price {
            select = select.filter(package::Column::Price.gte(min));
        }
        if let Some(max) = query.max_price {
            select = select.filter(package::Column::Price.lte(max));
        }
        if query.featured == Some(true) {
            select = select.filter(package::Column::Featured.eq(true));
        }

        let models = select
            .order_by_desc(package::Column::Featured)
            .order_by_asc(package::Column::Price)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Package::from).collect())
    }

    async fn create(&self, package: NewPackage) -> AppResult<Package> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            destination: Set(package.destination),
            description: Set(package.description),
            price: Set(package.price),
            image: Set(package.image),
            duration: Set(package.duration),
            featured: Set(package.featured),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await?;
        Ok(Package::from(model))
    }

    async fn update(&self, id: Uuid, changes: PackageChanges) -> AppResult<Package> {
        let existing = PackageEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();

        if let Some(destination) = changes.destination {
            active.destination = Set(destination);
        }
        if let Some(description) = changes.description {
            active.description = Set(description);
        }
        if let Some(price) = changes.price {
            active.price = Set(price);
        }
        if let Some(image) = changes.image {
            active.image = Set(Some(image));
        }
        if let Some(duration) = changes.duration {
            active.duration = Set(duration);
        }
        if let Some(featured) = changes.featured {
            active.featured = Set(featured);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(self.db.as_ref()).await?;
        Ok(Package::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        delete_existing::<PackageEntity, _>(self.db.as_ref(), id).await
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = PackageEntity::delete_many().exec(self.db.as_ref()).await?;
        Ok(result.rows_affected)
    }
}
