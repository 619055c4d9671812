//! Merchandise data repository

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::merchandise::{
    CreateMerchandiseParams, Merchandise, UpdateMerchandiseParams,
};

pub struct MerchandiseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MerchandiseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateMerchandiseParams) -> Result<Merchandise, DbErr> {
        let merchandise = entity::merchandise::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            stock: ActiveValue::Set(params.stock),
            image: ActiveValue::Set(params.image),
            category: ActiveValue::Set(params.category),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Merchandise::from_entity(merchandise))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Merchandise>, DbErr> {
        Ok(entity::prelude::Merchandise::find_by_id(id)
            .one(self.db)
            .await?
            .map(Merchandise::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Merchandise>, DbErr> {
        Ok(entity::prelude::Merchandise::find()
            .order_by_asc(entity::merchandise::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Merchandise::from_entity)
            .collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateMerchandiseParams,
    ) -> Result<Merchandise, DbErr> {
        let merchandise = entity::prelude::Merchandise::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Merchandise with id {} not found",
                id
            )))?;

        let mut active = merchandise.clone().into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(stock) = params.stock {
            active.stock = ActiveValue::Set(stock);
        }
        if let Some(image) = params.image {
            active.image = ActiveValue::Set(image);
        }
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(category);
        }

        if !active.is_changed() {
            return Ok(Merchandise::from_entity(merchandise));
        }

        Ok(Merchandise::from_entity(active.update(self.db).await?))
    }

    /// Deletes a merchandise item
    ///
    /// Fails with a foreign key error while order items still reference it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Merchandise::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
