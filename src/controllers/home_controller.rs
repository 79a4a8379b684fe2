use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use mongodb::bson::doc;
use serde::Deserialize;
use serde_json::json;

use crate::{services::cities, AppState};

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub async fn health_db(State(state): State<AppState>) -> Response {
    match state.db.run_command(doc! { "ping": 1 }, None).await {
        Ok(_) => (StatusCode::OK, Json(json!({ "mongo": "ok" }))).into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "mongo": "down", "error": e.to_string() })),
        )
            .into_response(),
    }
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}

// GET /cities
pub async fn get_cities() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "cities": cities::SUPPORTED, "default": cities::DEFAULT_CITY })))
}

#[derive(Deserialize)]
pub struct NearestQuery {
    pub lat: f64,
    pub lon: f64,
}

// GET /cities/nearest?lat=..&lon=..
pub async fn get_nearest_city(Query(q): Query<NearestQuery>) -> impl IntoResponse {
    let city = cities::nearest_city(q.lat, q.lon);
    (StatusCode::OK, Json(json!({ "city": city })))
}
