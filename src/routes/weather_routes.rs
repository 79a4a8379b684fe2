use axum::{Router, routing::get};
use crate::{AppState, controllers::weather_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/weather/:city", get(weather_controller::get_weather))
}
