use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{favorite::FavoriteRepository, user::UserRepository},
    error::{catalog::CatalogError, validation::ValidationError, Error},
    model::{
        db::UserModel,
        kind::EntityKind,
        user::{UserDto, UserInputDto},
    },
    service::validate,
};

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

/// Service for managing user accounts.
///
/// Passwords are stored as provided and never returned.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ValidationError)` - `email`, `password` or `is_active` missing, or a
    ///   blank email/password
    /// - `Err(Error::CatalogError)` - Email already registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, input: UserInputDto) -> Result<UserDto, Error> {
        let email = validate::required_text("email", input.email.as_deref())?;
        limit_lengths(&input)?;
        let password = validate::required_text("password", input.password.as_deref())?;
        let is_active = input
            .is_active
            .ok_or(ValidationError::MissingField("is_active"))?;

        let user = UserRepository::new(self.db)
            .create(email.clone(), password, is_active)
            .await
            .map_err(CatalogError::on_conflict(CatalogError::DuplicateEmail(email)))?;

        tracing::info!(user_id = user.id, "Created user");

        Ok(user.into())
    }

    pub async fn get(&self, user_id: i32) -> Result<UserDto, Error> {
        Ok(self.find(user_id).await?.into())
    }

    pub async fn list(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Applies a partial update to a user.
    ///
    /// Changing the email to one registered by another user fails with
    /// [`CatalogError::DuplicateEmail`].
    pub async fn update(&self, user_id: i32, input: UserInputDto) -> Result<UserDto, Error> {
        let user = self.find(user_id).await?;

        validate::reject_blank("email", input.email.as_deref())?;
        limit_lengths(&input)?;
        validate::reject_blank("password", input.password.as_deref())?;

        let duplicate = CatalogError::DuplicateEmail(input.email.clone().unwrap_or_default());
        let user = UserRepository::new(self.db)
            .update(user, &input)
            .await
            .map_err(CatalogError::on_conflict(duplicate))?;

        Ok(user.into())
    }

    /// Deletes a user along with all of their favorites.
    pub async fn delete(&self, user_id: i32) -> Result<(), Error> {
        self.find(user_id).await?;

        let txn = self.db.begin().await?;

        FavoriteRepository::new(&txn).delete_by_user(user_id).await?;
        UserRepository::new(&txn).delete(user_id).await?;

        txn.commit().await?;

        tracing::info!(user_id, "Deleted user");

        Ok(())
    }

    async fn find(&self, user_id: i32) -> Result<UserModel, Error> {
        UserRepository::new(self.db)
            .get(user_id)
            .await?
            .ok_or_else(|| CatalogError::not_found(EntityKind::User, user_id).into())
    }
}

fn limit_lengths(input: &UserInputDto) -> Result<(), ValidationError> {
    validate::limit_lengths(&[("email", input.email.as_deref())])
}
