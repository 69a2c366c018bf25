//! SeaORM entities for the Galactic service.

pub mod prelude;

pub mod armament;
pub mod space_ship;
