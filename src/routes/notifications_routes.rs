use axum::{Router, routing::{delete, get}};
use crate::{AppState, controllers::notifications_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/notifications", get(notifications_controller::get_notifications))
        .route("/notifications/:id", delete(notifications_controller::delete_notification))
}
