pub mod openweather;
pub mod db_init;
pub mod cities;

pub mod alerts_service;
pub mod alert_evaluator;
pub mod alert_message;
pub mod notification_board;
