pub use sea_orm_migration::prelude::*;

mod m20251017_000001_users;
mod m20251017_000002_categories;
mod m20251017_000003_animals;
mod m20251017_000004_favorites;
mod m20251017_000005_messages;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_users::Migration),
            Box::new(m20251017_000002_categories::Migration),
            Box::new(m20251017_000003_animals::Migration),
            Box::new(m20251017_000004_favorites::Migration),
            Box::new(m20251017_000005_messages::Migration),
        ]
    }
}
