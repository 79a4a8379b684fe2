use crate::models::{AlertDefinition, ConditionType, WeatherSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_lowercase().starts_with("es") {
            Locale::Es
        } else {
            Locale::En
        }
    }
}

pub fn render(alert: &AlertDefinition, weather: &WeatherSnapshot) -> String {
    render_localized(alert, weather, Locale::En)
}

/// Sentence shown to the user for a satisfied alert. Temperature is
/// rounded for display, thresholds and wind are printed as configured.
pub fn render_localized(alert: &AlertDefinition, weather: &WeatherSnapshot, locale: Locale) -> String {
    let temp = round_half_up(weather.temperature);
    let threshold = alert.threshold.map(|t| t.to_string()).unwrap_or_default();

    match (alert.condition(), locale) {
        (Some(ConditionType::TempAbove), Locale::En) => {
            format!("temperature ({temp}°C) exceeded the threshold of {threshold}°C")
        }
        (Some(ConditionType::TempAbove), Locale::Es) => {
            format!("La temperatura ({temp}°C) superó el umbral de {threshold}°C")
        }
        (Some(ConditionType::TempBelow), Locale::En) => {
            format!("temperature ({temp}°C) dropped below the threshold of {threshold}°C")
        }
        (Some(ConditionType::TempBelow), Locale::Es) => {
            format!("La temperatura ({temp}°C) bajó del umbral de {threshold}°C")
        }
        (Some(ConditionType::Rain), Locale::En) => "it is raining".to_string(),
        (Some(ConditionType::Rain), Locale::Es) => "Está lloviendo".to_string(),
        (Some(ConditionType::WindAbove), Locale::En) => format!(
            "wind ({} m/s) exceeded the threshold of {threshold} m/s",
            weather.wind_speed
        ),
        (Some(ConditionType::WindAbove), Locale::Es) => format!(
            "El viento ({} m/s) superó el umbral de {threshold} m/s",
            weather.wind_speed
        ),
        (None, Locale::En) => "condition met".to_string(),
        (None, Locale::Es) => "Condición cumplida".to_string(),
    }
}

/// Nearest integer with halves going up (-2.5 -> -2, 2.5 -> 3). The cast
/// also folds -0 into 0.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
