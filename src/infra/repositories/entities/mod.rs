//! SeaORM entity definitions, kept separate from domain models.

pub mod user;
