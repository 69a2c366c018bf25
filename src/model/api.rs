//! Wire-facing request and response DTOs.
//!
//! Request bodies decode permissively: missing fields fall back to their zero
//! values rather than rejecting the request.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::spaceship::{ArmamentDraft, SpaceShipDraft, SpaceShipFilter, SpaceShipRecord};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for a mutation that has no payload to return
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessDto {
    /// Whether the operation completed
    pub success: bool,
}

/// A single armament as it appears in request and response bodies
#[derive(Serialize, Deserialize, Default, ToSchema)]
pub struct ArmamentDto {
    /// Armament title, e.g. "Turbo Laser"
    pub title: String,
    /// Number of units mounted
    pub qty: i32,
}

/// Request body for creating a spaceship
#[derive(Deserialize, Default, ToSchema)]
#[serde(default)]
pub struct CreateSpaceShipDto {
    pub name: String,
    pub class: String,
    pub crew: i64,
    pub image: String,
    pub value: f64,
    pub status: String,
    #[serde(rename = "armament")]
    pub armaments: Vec<ArmamentDto>,
}

impl CreateSpaceShipDto {
    pub fn into_draft(self) -> SpaceShipDraft {
        SpaceShipDraft {
            name: self.name,
            class: self.class,
            crew: self.crew,
            image: self.image,
            value: self.value,
            status: self.status,
            armaments: self
                .armaments
                .into_iter()
                .map(|armament| ArmamentDraft {
                    title: armament.title,
                    qty: armament.qty,
                })
                .collect(),
        }
    }
}

/// Request body for updating a spaceship.
///
/// Same shape as create plus an `id` field; the path parameter is the
/// authoritative target, the body id is accepted for compatibility.
#[derive(Deserialize, Default, ToSchema)]
#[serde(default)]
pub struct UpdateSpaceShipDto {
    pub id: i64,
    pub name: String,
    pub class: String,
    pub crew: i64,
    pub image: String,
    pub value: f64,
    pub status: String,
    #[serde(rename = "armament")]
    pub armaments: Vec<ArmamentDto>,
}

impl UpdateSpaceShipDto {
    pub fn into_draft(self) -> SpaceShipDraft {
        SpaceShipDraft {
            name: self.name,
            class: self.class,
            crew: self.crew,
            image: self.image,
            value: self.value,
            status: self.status,
            armaments: self
                .armaments
                .into_iter()
                .map(|armament| ArmamentDraft {
                    title: armament.title,
                    qty: armament.qty,
                })
                .collect(),
        }
    }
}

/// Query parameters for listing spaceships; all fields optional
#[derive(Deserialize, Default, IntoParams)]
#[serde(default)]
pub struct SpaceShipQueryDto {
    /// Substring match on ship name
    pub name: String,
    /// Exact match on ship class
    pub class: String,
    /// Exact match on ship status
    pub status: String,
}

impl SpaceShipQueryDto {
    pub fn into_filter(self) -> SpaceShipFilter {
        SpaceShipFilter {
            name: self.name,
            class: self.class,
            status: self.status,
        }
    }
}

/// Full spaceship detail returned by the fetch-by-id endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SpaceShipDetailDto {
    pub id: i64,
    pub name: String,
    pub class: String,
    pub crew: i64,
    pub image: String,
    pub status: String,
    #[serde(rename = "armament")]
    pub armaments: Vec<ArmamentDto>,
}

impl SpaceShipDetailDto {
    pub fn from_record(record: SpaceShipRecord) -> Self {
        Self {
            id: record.ship.id,
            name: record.ship.name,
            class: record.ship.class,
            crew: record.ship.crew,
            image: record.ship.image,
            status: record.ship.status,
            armaments: record
                .armaments
                .into_iter()
                .map(|armament| ArmamentDto {
                    title: armament.title,
                    qty: armament.qty,
                })
                .collect(),
        }
    }
}

/// One row of the list endpoint's `data` array
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SpaceShipSummaryDto {
    pub id: i64,
    pub name: String,
    pub status: String,
}

impl SpaceShipSummaryDto {
    pub fn from_model(ship: entity::space_ship::Model) -> Self {
        Self {
            id: ship.id,
            name: ship.name,
            status: ship.status,
        }
    }
}

/// Response body of the list endpoint
#[derive(Serialize, Deserialize, ToSchema)]
pub struct SpaceShipListDto {
    pub data: Vec<SpaceShipSummaryDto>,
}
