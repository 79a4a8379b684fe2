pub const ALERTS_UPDATED: &str = "alertsUpdated";
pub const NOTIFICATIONS_UPDATED: &str = "notificationsUpdated";

#[derive(Debug, Clone)]
pub struct UserEvent {
    pub user_id: String,
    pub name: &'static str,
}

impl UserEvent {
    pub fn new(user_id: &str, name: &'static str) -> Self {
        Self {
            user_id: user_id.to_string(),
            name,
        }
    }
}
