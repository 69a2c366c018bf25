pub use super::armament::Entity as Armament;
pub use super::space_ship::Entity as SpaceShip;
