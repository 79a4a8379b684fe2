//! Library entrypoint for ClimaBolivia.
//!
//! The alert pipeline (`services::alert_evaluator`, `services::alert_message`,
//! `models::notification`) has no HTTP dependency; the controllers are the
//! caller that feeds it a weather reading per refresh.

pub mod config;
pub mod error;
pub mod events;
pub mod models;

#[path = "middleware/auth.rs"]
pub mod auth;

pub mod services;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub db: mongodb::Database,
    pub settings: config::Settings,
    pub weather: services::openweather::OpenWeatherClient,
    pub alerts: services::alerts_service::MongoAlertStore,
    pub notifications: services::notification_board::NotificationBoard,
    pub events_tx: tokio::sync::broadcast::Sender<events::UserEvent>,
}

impl AppState {
    pub fn new(db: mongodb::Database, settings: config::Settings) -> Self {
        let weather = services::openweather::OpenWeatherClient::new(
            settings.openweather_api_key.clone(),
            settings.openweather_base_url.clone(),
        );
        let alerts = services::alerts_service::MongoAlertStore::new(&db);
        let (events_tx, _events_rx) = tokio::sync::broadcast::channel::<events::UserEvent>(64);

        Self {
            db,
            settings,
            weather,
            alerts,
            notifications: services::notification_board::NotificationBoard::new(),
            events_tx,
        }
    }

    /// Fire-and-forget; nobody listening is fine.
    pub fn notify(&self, user_id: &str, name: &'static str) {
        let _ = self.events_tx.send(events::UserEvent::new(user_id, name));
    }
}
