use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::{events, models::CurrentUser, AppState};

// GET /notifications
pub async fn get_notifications(
    State(state): State<AppState>,
    Extension(u): Extension<CurrentUser>,
) -> Response {
    let list = state.notifications.get(&u.id).await;
    (StatusCode::OK, Json(json!({ "notifications": list }))).into_response()
}

// DELETE /notifications/:id
pub async fn delete_notification(
    State(state): State<AppState>,
    Extension(u): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Response {
    let (list, found) = state.notifications.dismiss(&u.id, &id).await;

    if found {
        state.notify(&u.id, events::NOTIFICATIONS_UPDATED);
    }

    (
        StatusCode::OK,
        Json(json!({ "dismissed": found, "notifications": list })),
    )
        .into_response()
}
