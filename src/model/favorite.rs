use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::kind::ItemKind;

/// A user's favorite catalog item.
///
/// `name` is the item's name at the time it was favorited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub kind: ItemKind,
    pub item_id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}
