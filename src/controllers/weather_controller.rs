use axum::{
    extract::{Extension, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    events,
    models::CurrentUser,
    services::{alert_evaluator, alert_message::Locale, cities},
    AppState,
};

#[derive(Deserialize, Default)]
pub struct WeatherQuery {
    #[serde(default)]
    pub lang: Option<String>,
}

// GET /weather/:city
//
// One refresh: read the weather, run a single alert pass for the signed-in
// user and fold the result into their notification list. A failed alert
// check is reported next to the weather instead of failing the request.
pub async fn get_weather(
    State(state): State<AppState>,
    Path(city): Path<String>,
    Query(q): Query<WeatherQuery>,
    user: Option<Extension<CurrentUser>>,
) -> Response {
    if !cities::is_supported(&city) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unsupported city: {city}") })),
        )
            .into_response();
    }

    let weather = state.weather.current(&city).await;

    let Some(Extension(u)) = user else {
        return (
            StatusCode::OK,
            Json(json!({
                "weather": weather,
                "alert_check": { "status": "anonymous" },
            })),
        )
            .into_response();
    };

    let alert_check = if weather.is_mock {
        json!({ "status": "skipped" })
    } else {
        let locale = q.lang.as_deref().map(Locale::from_tag).unwrap_or_default();

        match alert_evaluator::evaluate_localized(&state.alerts, &u.id, &weather, locale).await {
            Ok(triggered) => {
                let count = triggered.len();
                if count > 0 {
                    let fresh = triggered.into_iter().map(|t| t.for_city(&city)).collect();
                    state.notifications.merge(&u.id, fresh).await;
                    state.notify(&u.id, events::NOTIFICATIONS_UPDATED);
                }
                json!({ "status": "ok", "triggered": count })
            }
            Err(e) => {
                tracing::error!(user_id = %u.id, city = %city, error = %e, "alert check failed");
                json!({ "status": "failed", "error": "alert check unavailable" })
            }
        }
    };

    let notifications = state.notifications.get(&u.id).await;

    (
        StatusCode::OK,
        Json(json!({
            "weather": weather,
            "alert_check": alert_check,
            "notifications": notifications,
        })),
    )
        .into_response()
}
