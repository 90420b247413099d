use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(50))")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::animal::Entity")]
    Animal,
}

impl Related<super::animal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Animal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
