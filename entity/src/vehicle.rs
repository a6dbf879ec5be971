use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub consumables: Option<String>,
    pub cargo_capacity: Option<i64>,
    pub max_atmosphering_speed: Option<i32>,
    pub crew: Option<i32>,
    pub length: Option<i32>,
    pub model: Option<String>,
    pub vehicle_class: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pilot::Entity")]
    Pilot,
}

impl Related<super::pilot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pilot.def()
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        super::pilot::Relation::Person.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pilot::Relation::Vehicle.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
