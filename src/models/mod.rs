pub mod user;
pub mod alert;
pub mod weather;
pub mod notification;

pub use user::CurrentUser;
pub use alert::{AlertDefinition, ConditionType, NewAlert};
pub use weather::WeatherSnapshot;
pub use notification::{NotificationList, TriggeredAlert};
