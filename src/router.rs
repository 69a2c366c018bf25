//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All endpoints are registered here with their
//! OpenAPI specifications, and Swagger UI is configured to provide interactive
//! API documentation at `/swagger`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /` - Liveness probe
/// - `GET /ping` - Ping
/// - `POST /spaceship` - Create a spaceship with armaments
/// - `GET /spaceship` - List spaceships with optional name/class/status filters
/// - `GET /spaceship/{id}` - Fetch one spaceship
/// - `PATCH /spaceship/{id}` - Update a spaceship, replacing its armaments
/// - `DELETE /spaceship/{id}` - Soft-delete a spaceship
///
/// The OpenAPI document is served at `/swagger/openapi.json` and browsable at
/// `/swagger`.
///
/// # Returns
/// An Axum `Router<AppState>` ready to be served once state is attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Galactic", description = "Galactic service APIs"), tags(
        (name = controller::spaceship::SPACESHIP_TAG, description = "Spaceship API routes"),
        (name = controller::status::STATUS_TAG, description = "Liveness routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::status::index))
        .routes(routes!(controller::status::ping))
        .routes(routes!(
            controller::spaceship::create_space_ship,
            controller::spaceship::get_space_ships
        ))
        .routes(routes!(
            controller::spaceship::get_space_ship,
            controller::spaceship::update_space_ship,
            controller::spaceship::delete_space_ship
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/swagger").url("/swagger/openapi.json", api));

    routes
}
