//! Tests for the delete endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use galactic::{
    controller::spaceship::{delete_space_ship, get_space_ship},
    model::app::AppState,
};

use super::*;

/// Expect 200 and the ship to disappear from reads
#[tokio::test]
async fn deleted_ship_is_gone() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fleet_tables().build().await?;

    let ship = test
        .insert_ship("Devastator", "Star Destroyer", "Operational")
        .await?;

    let result =
        delete_space_ship(State(test.to_app_state::<AppState>()), Ok(Path(ship.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let result = get_space_ship(State(test.to_app_state::<AppState>()), Ok(Path(ship.id))).await;
    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect a second delete to fail the existence check; a soft-deleted ship is
/// indistinguishable from a missing one
#[tokio::test]
async fn second_delete_maps_to_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fleet_tables().build().await?;

    let ship = test
        .insert_ship("Devastator", "Star Destroyer", "Operational")
        .await?;

    delete_space_ship(State(test.to_app_state::<AppState>()), Ok(Path(ship.id)))
        .await
        .unwrap();

    let result =
        delete_space_ship(State(test.to_app_state::<AppState>()), Ok(Path(ship.id))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 400 when deleting an id that never existed
#[tokio::test]
async fn not_found_maps_to_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fleet_tables().build().await?;

    let result =
        delete_space_ship(State(test.to_app_state::<AppState>()), Ok(Path(999_999))).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
