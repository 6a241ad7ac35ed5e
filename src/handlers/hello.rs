use axum::Json;
use serde::Serialize;

/// The response payload for the hello endpoint.
#[derive(Serialize)]
pub struct HelloResponse {
    pub message: String,
}

/// A liveness-style hello endpoint.
#[axum::debug_handler]
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "hello".to_string(),
    })
}
