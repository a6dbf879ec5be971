//! Entity kinds and the tagged reference used by favorites.

use std::{fmt, str::FromStr};

use entity::sea_orm_active_enums::FavoriteKind;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::validation::ValidationError;

/// Every kind of record the catalog stores, used to label errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Favorite,
    Person,
    Planet,
    Species,
    Vehicle,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::User => "User",
            Self::Favorite => "Favorite",
            Self::Person => "Person",
            Self::Planet => "Planet",
            Self::Species => "Species",
            Self::Vehicle => "Vehicle",
        };

        f.write_str(label)
    }
}

/// Kind of catalog item a favorite can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Person,
    Planet,
    Species,
    Vehicle,
}

impl ItemKind {
    /// Capitalized name used in messages, e.g. `"Person already in favorites"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Person => "Person",
            Self::Planet => "Planet",
            Self::Species => "Species",
            Self::Vehicle => "Vehicle",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Person => "person",
            Self::Planet => "planet",
            Self::Species => "species",
            Self::Vehicle => "vehicle",
        };

        f.write_str(kind)
    }
}

/// Parses the `{kind}` segment of `/favorite/{kind}/{id}`.
///
/// Both the singular and the collection spelling are accepted (`people`/`person`,
/// `planet`/`planets`, `vehicle`/`vehicles`, `species`).
impl FromStr for ItemKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "person" | "people" => Ok(Self::Person),
            "planet" | "planets" => Ok(Self::Planet),
            "species" => Ok(Self::Species),
            "vehicle" | "vehicles" => Ok(Self::Vehicle),
            _ => Err(ValidationError::UnknownItemKind(s.to_string())),
        }
    }
}

impl From<ItemKind> for EntityKind {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Person => Self::Person,
            ItemKind::Planet => Self::Planet,
            ItemKind::Species => Self::Species,
            ItemKind::Vehicle => Self::Vehicle,
        }
    }
}

impl From<ItemKind> for FavoriteKind {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Person => Self::Person,
            ItemKind::Planet => Self::Planet,
            ItemKind::Species => Self::Species,
            ItemKind::Vehicle => Self::Vehicle,
        }
    }
}

impl From<FavoriteKind> for ItemKind {
    fn from(kind: FavoriteKind) -> Self {
        match kind {
            FavoriteKind::Person => Self::Person,
            FavoriteKind::Planet => Self::Planet,
            FavoriteKind::Species => Self::Species,
            FavoriteKind::Vehicle => Self::Vehicle,
        }
    }
}

/// Tagged reference to a catalog row: which table plus the row's ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRef {
    pub kind: ItemKind,
    pub id: i32,
}

impl ItemRef {
    pub fn new(kind: ItemKind, id: i32) -> Self {
        Self { kind, id }
    }
}
