//! Domain input and output shapes for spaceship operations.

/// Input shape for creating or updating a spaceship.
///
/// Decoded from a request body by the transport layer and handed through the
/// service to the data layer, where it becomes entity rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpaceShipDraft {
    pub name: String,
    pub class: String,
    pub crew: i64,
    pub image: String,
    pub value: f64,
    pub status: String,
    pub armaments: Vec<ArmamentDraft>,
}

/// Input shape for a single armament attached to a draft.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArmamentDraft {
    pub title: String,
    pub qty: i32,
}

/// A spaceship row together with its non-deleted armaments, in id order.
#[derive(Clone, Debug, PartialEq)]
pub struct SpaceShipRecord {
    pub ship: entity::space_ship::Model,
    pub armaments: Vec<entity::armament::Model>,
}

/// List filter for spaceships; empty fields act as wildcards.
///
/// `name` matches as a case-sensitive substring, `class` and `status` match
/// exactly when non-empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpaceShipFilter {
    pub name: String,
    pub class: String,
    pub status: String,
}
