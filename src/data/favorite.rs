use entity::sea_orm_active_enums::FavoriteKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::{
    data::{
        person::PersonRepository, planet::PlanetRepository, species::SpeciesRepository,
        vehicle::VehicleRepository,
    },
    model::{
        db::FavoriteModel,
        kind::{ItemKind, ItemRef},
    },
};

impl ItemRef {
    /// Looks up the name of the referenced catalog row
    ///
    /// Returns `None` if no row of that kind has the ID.
    pub async fn resolve_name<C: ConnectionTrait>(&self, db: &C) -> Result<Option<String>, DbErr> {
        let ids = [self.id];
        let mut names = match self.kind {
            ItemKind::Person => PersonRepository::new(db).get_names(&ids).await?,
            ItemKind::Planet => PlanetRepository::new(db).get_names(&ids).await?,
            ItemKind::Species => SpeciesRepository::new(db).get_names(&ids).await?,
            ItemKind::Vehicle => VehicleRepository::new(db).get_names(&ids).await?,
        };

        Ok(names.remove(&self.id))
    }
}

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite of `item` for the user, storing `name` as the display name
    pub async fn create(
        &self,
        user_id: i32,
        item: ItemRef,
        name: String,
    ) -> Result<FavoriteModel, DbErr> {
        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            kind: ActiveValue::Set(FavoriteKind::from(item.kind)),
            item_id: ActiveValue::Set(item.id),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_user_item(
        &self,
        user_id: i32,
        item: ItemRef,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::Kind.eq(FavoriteKind::from(item.kind)))
            .filter(entity::favorite::Column::ItemId.eq(item.id))
            .one(self.db)
            .await
    }

    /// Gets a favorite by its ID, only if it is owned by `user_id`
    pub async fn get_by_id_for_user(
        &self,
        user_id: i32,
        favorite_id: i32,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find_by_id(favorite_id)
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Gets a user's favorites in insertion order
    pub async fn get_many_by_user_id(&self, user_id: i32) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }

    /// Deletes every user's favorite of `item`
    pub async fn delete_by_item(&self, item: ItemRef) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::Kind.eq(FavoriteKind::from(item.kind)))
            .filter(entity::favorite::Column::ItemId.eq(item.id))
            .exec(self.db)
            .await
    }

    pub async fn delete_by_user(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }
}
