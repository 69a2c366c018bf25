//! Whole-router scenario exercising create, list, and fetch together.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use galactic::model::app::AppState;
use tower::ServiceExt;

use super::*;

fn app(test: &TestContext) -> Router {
    galactic::router::routes().with_state(test.to_app_state::<AppState>())
}

/// Create a ship over HTTP, find its id in the listing, and read it back
#[tokio::test]
async fn create_then_fetch_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fleet_tables().build().await?;

    let payload = r#"{
        "name": "Devastator",
        "class": "Star Destroyer",
        "crew": 1200,
        "status": "Operational",
        "armament": [{"title": "Turbo Laser", "qty": 60}]
    }"#;

    let request = Request::builder()
        .method("POST")
        .uri("/spaceship")
        .header("content-type", "application/json")
        .body(Body::from(payload))
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = response_json(resp).await;
    assert_eq!(body["success"], true);

    let request = Request::builder()
        .method("GET")
        .uri("/spaceship?name=Devas")
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = response_json(resp).await;
    let id = body["data"][0]["id"].as_i64().unwrap();

    let request = Request::builder()
        .method("GET")
        .uri(format!("/spaceship/{id}"))
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = response_json(resp).await;
    assert_eq!(body["name"], "Devastator");
    assert_eq!(body["class"], "Star Destroyer");
    assert_eq!(body["crew"], 1200);
    assert_eq!(body["status"], "Operational");
    assert_eq!(body["armament"][0]["title"], "Turbo Laser");
    assert_eq!(body["armament"][0]["qty"], 60);

    Ok(())
}

/// Delete over HTTP and confirm the listing no longer includes the ship
#[tokio::test]
async fn delete_then_list_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new().with_fleet_tables().build().await?;

    let ship = test
        .insert_ship("Devastator", "Star Destroyer", "Operational")
        .await?;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/spaceship/{}", ship.id))
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let request = Request::builder()
        .method("GET")
        .uri("/spaceship")
        .body(Body::empty())
        .unwrap();
    let resp = app(&test).oneshot(request).await.unwrap();

    let body = response_json(resp).await;
    assert!(body["data"].as_array().unwrap().is_empty());

    Ok(())
}
