use sea_orm::entity::prelude::*;

/// Catalog table a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FavoriteKind {
    #[sea_orm(string_value = "person")]
    Person,
    #[sea_orm(string_value = "planet")]
    Planet,
    #[sea_orm(string_value = "species")]
    Species,
    #[sea_orm(string_value = "vehicle")]
    Vehicle,
}
