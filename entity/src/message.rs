use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sender_id: i32,
    pub recipient_id: i32,
    pub animal_id: Option<i32>,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTime,
    pub is_read: bool,
}

// Sender and recipient both point at `users`, so there is no `Related<user::Entity>`
// impl; join through `Relation::Sender` or `Relation::Recipient` explicitly.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SenderId",
        to = "super::user::Column::Id"
    )]
    Sender,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RecipientId",
        to = "super::user::Column::Id"
    )]
    Recipient,
    #[sea_orm(
        belongs_to = "super::animal::Entity",
        from = "Column::AnimalId",
        to = "super::animal::Column::Id"
    )]
    Animal,
}

impl Related<super::animal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Animal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
