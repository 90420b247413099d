//! SeaORM entities for the PetPal schema.

pub mod prelude;

pub mod animal;
pub mod category;
pub mod favorite;
pub mod message;
pub mod user;
