use serde::{Deserialize, Serialize};

/// Point-in-time reading for one city.
///
/// `is_mock` is set whenever the values are a synthetic fallback rather
/// than a live measurement; such snapshots never drive alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,

    // °C
    pub temperature: f64,
    // m/s
    pub wind_speed: f64,
    // "Rain", "Clear", "Clouds", ...
    pub condition_main: String,

    pub description: String,
    pub humidity: i64,
    pub pressure: i64,
    pub icon: String,

    pub is_mock: bool,
}

impl WeatherSnapshot {
    pub fn mock(city: &str) -> Self {
        Self {
            city: city.to_string(),
            temperature: 22.0,
            wind_speed: 5.0,
            condition_main: "Clear".to_string(),
            description: "clear sky".to_string(),
            humidity: 60,
            pressure: 1015,
            icon: "01d".to_string(),
            is_mock: true,
        }
    }
}
