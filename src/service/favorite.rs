//! Favorite service layer.
//!
//! A favorite points at a catalog row through an [`ItemRef`]. The referenced row's name is
//! copied into the favorite when it is created.

use sea_orm::DatabaseConnection;

use crate::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::{catalog::CatalogError, Error},
    model::{
        db::FavoriteModel,
        favorite::FavoriteDto,
        kind::{EntityKind, ItemRef},
    },
};

impl From<FavoriteModel> for FavoriteDto {
    fn from(favorite: FavoriteModel) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            kind: favorite.kind.into(),
            item_id: favorite.item_id,
            name: favorite.name,
            created_at: favorite.created_at,
        }
    }
}

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds `item` to the user's favorites.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created favorite
    /// - `Err(Error::CatalogError)` - User or item not found, or item already favorited
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add(&self, user_id: i32, item: ItemRef) -> Result<FavoriteDto, Error> {
        self.ensure_user(user_id).await?;

        let name = item
            .resolve_name(self.db)
            .await?
            .ok_or_else(|| CatalogError::not_found(item.kind.into(), item.id))?;

        // The (user, kind, item) unique index rejects duplicates
        let favorite = FavoriteRepository::new(self.db)
            .create(user_id, item, name)
            .await
            .map_err(CatalogError::on_conflict(CatalogError::DuplicateFavorite(item)))?;

        tracing::info!(
            user_id,
            kind = %item.kind,
            item_id = item.id,
            "Added favorite"
        );

        Ok(favorite.into())
    }

    /// Removes the user's favorite of `item`.
    pub async fn remove(&self, user_id: i32, item: ItemRef) -> Result<(), Error> {
        self.ensure_user(user_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let favorite = favorite_repo
            .get_by_user_item(user_id, item)
            .await?
            .ok_or(CatalogError::FavoriteNotFound(item))?;

        favorite_repo.delete(favorite.id).await?;

        Ok(())
    }

    /// Removes one of the user's favorites by its own ID.
    ///
    /// A favorite owned by another user is reported as not found.
    pub async fn remove_by_id(&self, user_id: i32, favorite_id: i32) -> Result<(), Error> {
        self.ensure_user(user_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let favorite = favorite_repo
            .get_by_id_for_user(user_id, favorite_id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::Favorite, favorite_id))?;

        favorite_repo.delete(favorite.id).await?;

        Ok(())
    }

    /// Lists the user's favorites in the order they were added.
    pub async fn list(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        self.ensure_user(user_id).await?;

        let favorites = FavoriteRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(favorites.into_iter().map(FavoriteDto::from).collect())
    }

    async fn ensure_user(&self, user_id: i32) -> Result<(), Error> {
        match UserRepository::new(self.db).get(user_id).await? {
            Some(_) => Ok(()),
            None => Err(CatalogError::not_found(EntityKind::User, user_id).into()),
        }
    }
}
