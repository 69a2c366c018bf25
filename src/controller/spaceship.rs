use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::spaceship::SpaceShipRepository,
    error::Error,
    model::{
        api::{
            CreateSpaceShipDto, ErrorDto, SpaceShipDetailDto, SpaceShipListDto,
            SpaceShipQueryDto, SpaceShipSummaryDto, SuccessDto, UpdateSpaceShipDto,
        },
        app::AppState,
    },
    service::spaceship::SpaceShipService,
};

pub static SPACESHIP_TAG: &str = "spaceship";

/// Create a new spaceship with its armaments
#[utoipa::path(
    post,
    path = "/spaceship",
    tag = SPACESHIP_TAG,
    request_body = CreateSpaceShipDto,
    responses(
        (status = 201, description = "Spaceship created", body = SuccessDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_space_ship(
    State(state): State<AppState>,
    payload: Result<Json<CreateSpaceShipDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload.map_err(|err| Error::Decode(err.to_string()))?;

    let service = SpaceShipService::new(SpaceShipRepository::new(&state.db));
    service.create(payload.into_draft()).await?;

    Ok((StatusCode::CREATED, Json(SuccessDto { success: true })))
}

/// Get all spaceships matching the optional filters
#[utoipa::path(
    get,
    path = "/spaceship",
    tag = SPACESHIP_TAG,
    params(SpaceShipQueryDto),
    responses(
        (status = 200, description = "Matching spaceships", body = SpaceShipListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_space_ships(
    State(state): State<AppState>,
    Query(query): Query<SpaceShipQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let service = SpaceShipService::new(SpaceShipRepository::new(&state.db));
    let ships = service.get_all(query.into_filter()).await?;

    let data = ships
        .into_iter()
        .map(SpaceShipSummaryDto::from_model)
        .collect();

    Ok((StatusCode::OK, Json(SpaceShipListDto { data })))
}

/// Fetch an existing spaceship by id
#[utoipa::path(
    get,
    path = "/spaceship/{id}",
    tag = SPACESHIP_TAG,
    params(
        ("id" = i64, Path, description = "Spaceship id")
    ),
    responses(
        (status = 200, description = "The spaceship", body = SpaceShipDetailDto),
        (status = 400, description = "Invalid id or spaceship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_space_ship(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id.map_err(|_| Error::InvalidPathParam)?;

    let service = SpaceShipService::new(SpaceShipRepository::new(&state.db));
    let record = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(SpaceShipDetailDto::from_record(record))))
}

/// Update an existing spaceship, replacing its armament set
#[utoipa::path(
    patch,
    path = "/spaceship/{id}",
    tag = SPACESHIP_TAG,
    params(
        ("id" = i64, Path, description = "Spaceship id")
    ),
    request_body = UpdateSpaceShipDto,
    responses(
        (status = 200, description = "Spaceship updated", body = SuccessDto),
        (status = 400, description = "Invalid id or spaceship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_space_ship(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateSpaceShipDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id.map_err(|_| Error::InvalidPathParam)?;
    let Json(payload) = payload.map_err(|err| Error::Decode(err.to_string()))?;

    let service = SpaceShipService::new(SpaceShipRepository::new(&state.db));
    service.update(id, payload.into_draft()).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Delete an existing spaceship by id
#[utoipa::path(
    delete,
    path = "/spaceship/{id}",
    tag = SPACESHIP_TAG,
    params(
        ("id" = i64, Path, description = "Spaceship id")
    ),
    responses(
        (status = 200, description = "Spaceship deleted", body = SuccessDto),
        (status = 400, description = "Invalid id or spaceship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_space_ship(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(id) = id.map_err(|_| Error::InvalidPathParam)?;

    let service = SpaceShipService::new(SpaceShipRepository::new(&state.db));
    service.delete(id).await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
