//! Tests for the list endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use galactic::{
    controller::spaceship::get_space_ships,
    model::{api::SpaceShipQueryDto, app::AppState},
};

use super::*;

/// Expect every non-deleted ship back when no filters are supplied
#[tokio::test]
async fn no_filter_returns_all() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fleet_tables().build().await?;

    test.insert_ship("Devastator", "Star Destroyer", "Operational")
        .await?;
    test.insert_ship("Millennium Falcon", "Light Freighter", "Operational")
        .await?;

    let result = get_space_ships(
        State(test.to_app_state::<AppState>()),
        Query(SpaceShipQueryDto::default()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = response_json(resp).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["name"], "Devastator");
    assert_eq!(data[1]["name"], "Millennium Falcon");

    Ok(())
}

/// Expect the summary rows to carry only id, name, and status
#[tokio::test]
async fn summary_shape() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fleet_tables().build().await?;

    let ship = test
        .insert_ship("Devastator", "Star Destroyer", "Operational")
        .await?;

    let result = get_space_ships(
        State(test.to_app_state::<AppState>()),
        Query(SpaceShipQueryDto::default()),
    )
    .await;

    let resp = result.unwrap().into_response();
    let body = response_json(resp).await;
    let row = &body["data"][0];

    assert_eq!(row["id"], ship.id);
    assert_eq!(row["name"], "Devastator");
    assert_eq!(row["status"], "Operational");
    assert_eq!(row.as_object().unwrap().len(), 3);

    Ok(())
}

/// Expect the class filter to match exactly
#[tokio::test]
async fn class_filter_is_exact() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fleet_tables().build().await?;

    test.insert_ship("Devastator", "Star Destroyer", "Operational")
        .await?;
    test.insert_ship("Millennium Falcon", "Light Freighter", "Operational")
        .await?;

    let query = SpaceShipQueryDto {
        class: "Star Destroyer".to_string(),
        ..Default::default()
    };
    let result = get_space_ships(State(test.to_app_state::<AppState>()), Query(query)).await;

    let resp = result.unwrap().into_response();
    let body = response_json(resp).await;
    let data = body["data"].as_array().unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Devastator");

    Ok(())
}

/// Expect the name filter to match as a substring
#[tokio::test]
async fn name_filter_is_substring() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fleet_tables().build().await?;

    test.insert_ship("Devastator", "Star Destroyer", "Operational")
        .await?;
    test.insert_ship("Millennium Falcon", "Light Freighter", "Operational")
        .await?;

    let query = SpaceShipQueryDto {
        name: "Devas".to_string(),
        ..Default::default()
    };
    let result = get_space_ships(State(test.to_app_state::<AppState>()), Query(query)).await;

    let resp = result.unwrap().into_response();
    let body = response_json(resp).await;
    let data = body["data"].as_array().unwrap();

    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Devastator");

    Ok(())
}

/// Expect soft-deleted ships to be excluded from the listing
#[tokio::test]
async fn excludes_soft_deleted() -> Result<(), TestError> {
    use galactic::{
        data::spaceship::{SpaceShipRepository, SpaceShipStore},
        model::spaceship::SpaceShipFilter,
    };

    let test = TestBuilder::new().with_fleet_tables().build().await?;
    let repository = SpaceShipRepository::new(&test.db);

    let ship = test
        .insert_ship("Devastator", "Star Destroyer", "Operational")
        .await?;
    test.insert_ship("Millennium Falcon", "Light Freighter", "Operational")
        .await?;
    repository.delete(ship.id).await?;

    let ships = repository.get_all(SpaceShipFilter::default()).await?;

    assert_eq!(ships.len(), 1);
    assert_eq!(ships[0].name, "Millennium Falcon");

    Ok(())
}

/// Expect 500 when the database tables are missing
#[tokio::test]
async fn internal_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_space_ships(
        State(test.to_app_state::<AppState>()),
        Query(SpaceShipQueryDto::default()),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
