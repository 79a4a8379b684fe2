use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use serde_json::json;

use crate::{
    events,
    models::{AlertDefinition, CurrentUser, NewAlert},
    AppState,
};

fn alert_json(a: &AlertDefinition) -> serde_json::Value {
    json!({
        "id": a.id.to_hex(),
        "city": a.city,
        "condition_type": a.condition_type,
        "threshold": a.threshold,
        "active": a.active,
        "created_at": a.created_at,
    })
}

fn bad_id() -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad id" }))).into_response()
}

// GET /alerts
pub async fn get_alerts(
    State(state): State<AppState>,
    Extension(u): Extension<CurrentUser>,
) -> Response {
    match state.alerts.list_user_alerts(&u.id).await {
        Ok(alerts) => {
            let items: Vec<serde_json::Value> = alerts.iter().map(alert_json).collect();
            (StatusCode::OK, Json(json!({ "alerts": items }))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

// POST /alerts
pub async fn post_create_alert(
    State(state): State<AppState>,
    Extension(u): Extension<CurrentUser>,
    Json(form): Json<NewAlert>,
) -> Response {
    match state.alerts.create_alert(&u.id, form).await {
        Ok(alert) => {
            state.notify(&u.id, events::ALERTS_UPDATED);
            (StatusCode::CREATED, Json(alert_json(&alert))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

#[derive(Deserialize)]
pub struct SetActiveForm {
    pub active: bool,
}

// POST /alerts/:id/active
pub async fn post_set_active(
    State(state): State<AppState>,
    Extension(u): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(form): Json<SetActiveForm>,
) -> Response {
    let Ok(oid) = ObjectId::parse_str(&id) else {
        return bad_id();
    };

    match state.alerts.set_active(&u.id, oid, form.active).await {
        Ok(()) => {
            state.notify(&u.id, events::ALERTS_UPDATED);
            (StatusCode::OK, Json(json!({ "id": id, "active": form.active }))).into_response()
        }
        Err(e) => e.into_response(),
    }
}

// DELETE /alerts/:id
pub async fn delete_alert(
    State(state): State<AppState>,
    Extension(u): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> Response {
    let Ok(oid) = ObjectId::parse_str(&id) else {
        return bad_id();
    };

    match state.alerts.delete_alert(&u.id, oid).await {
        Ok(()) => {
            state.notify(&u.id, events::ALERTS_UPDATED);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => e.into_response(),
    }
}
