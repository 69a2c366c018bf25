pub static STATUS_TAG: &str = "status";

/// Liveness probe for the service root
#[utoipa::path(
    get,
    path = "/",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    ),
)]
pub async fn index() -> &'static str {
    "You're alive!"
}

/// Ping endpoint
#[utoipa::path(
    get,
    path = "/ping",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Pong", body = String, content_type = "text/plain")
    ),
)]
pub async fn ping() -> &'static str {
    "Pong!"
}
