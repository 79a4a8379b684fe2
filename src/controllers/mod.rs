pub mod home_controller;
pub mod weather_controller;
pub mod alerts_controller;
pub mod notifications_controller;
pub mod realtime_controller;
