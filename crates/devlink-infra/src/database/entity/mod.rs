//! SeaORM entities and their conversions to and from the domain types.

pub mod post;
pub mod profile;
pub mod user;
