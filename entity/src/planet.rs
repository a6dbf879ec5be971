use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub surface_water: Option<i32>,
    pub diameter: Option<i32>,
    pub gravity: Option<String>,
    pub orbital_period: Option<i32>,
    pub population: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::person::Entity")]
    Resident,
    #[sea_orm(has_many = "super::species::Entity")]
    Fauna,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Resident.def()
    }
}

impl Related<super::species::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fauna.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
