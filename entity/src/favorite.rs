use sea_orm::entity::prelude::*;

/// A user's bookmark on an animal listing.
///
/// `(user_id, animal_id)` is unique; the constraint is created by the migration
/// since it spans two columns.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub animal_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::animal::Entity",
        from = "Column::AnimalId",
        to = "super::animal::Column::Id"
    )]
    Animal,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::animal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Animal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
