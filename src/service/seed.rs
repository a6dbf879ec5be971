//! Demo users inserted at startup when `LOAD_SEED_DATA` is enabled.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{data::user::UserRepository, error::Error};

/// `(email, password, is_active)` of the demo users.
const SEED_USERS: [(&str, &str, bool); 2] = [
    ("thomas.mosley@example.com", "1234", true),
    ("thomas2.mosley2@example.com", "1234", false),
];

/// Inserts the demo users unless any user already exists.
///
/// # Returns
/// - `Ok(usize)` - Number of users inserted, 0 if the table was not empty
/// - `Err(Error::DbErr)` - Database operation failed
pub async fn seed_users(db: &DatabaseConnection) -> Result<usize, Error> {
    if UserRepository::new(db).count().await? > 0 {
        tracing::debug!("Users already present, skipping seed data");

        return Ok(0);
    }

    let txn = db.begin().await?;

    let user_repo = UserRepository::new(&txn);
    for (email, password, is_active) in SEED_USERS {
        user_repo
            .create(email.to_string(), password.to_string(), is_active)
            .await?;
    }

    txn.commit().await?;

    tracing::info!("Inserted {} seed users", SEED_USERS.len());

    Ok(SEED_USERS.len())
}
