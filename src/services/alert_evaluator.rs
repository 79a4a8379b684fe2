use crate::{
    error::StoreError,
    models::{AlertDefinition, ConditionType, TriggeredAlert, WeatherSnapshot},
    services::{
        alert_message::{self, Locale},
        alerts_service::AlertStore,
    },
};

/// English-locale entry point; see [`evaluate_localized`].
pub async fn evaluate<S>(
    store: &S,
    user_id: &str,
    weather: &WeatherSnapshot,
) -> Result<Vec<TriggeredAlert>, StoreError>
where
    S: AlertStore,
{
    evaluate_localized(store, user_id, weather, Locale::En).await
}

/// One evaluation pass for a user against a fresh reading.
///
/// Mock readings short-circuit before the store is touched. Store errors
/// propagate untouched; there is no partial result.
pub async fn evaluate_localized<S>(
    store: &S,
    user_id: &str,
    weather: &WeatherSnapshot,
    locale: Locale,
) -> Result<Vec<TriggeredAlert>, StoreError>
where
    S: AlertStore,
{
    if weather.is_mock {
        tracing::debug!(city = %weather.city, "mock weather, skipping alert check");
        return Ok(Vec::new());
    }

    let alerts = store.list_active_alerts(user_id).await?;

    let triggered: Vec<TriggeredAlert> = alerts
        .iter()
        .filter(|a| a.active && a.city == weather.city)
        .filter(|a| is_triggered(a, weather))
        .map(|a| TriggeredAlert {
            id: a.id.to_hex(),
            message: alert_message::render_localized(a, weather, locale),
        })
        .collect();

    tracing::debug!(
        user_id,
        city = %weather.city,
        checked = alerts.len(),
        triggered = triggered.len(),
        "alert check done"
    );

    Ok(triggered)
}

/// Strict comparisons; a missing threshold or an unknown kind never fires.
pub fn is_triggered(alert: &AlertDefinition, weather: &WeatherSnapshot) -> bool {
    match alert.condition() {
        Some(ConditionType::TempAbove) => alert.threshold.is_some_and(|t| weather.temperature > t),
        Some(ConditionType::TempBelow) => alert.threshold.is_some_and(|t| weather.temperature < t),
        Some(ConditionType::Rain) => weather.condition_main.to_lowercase().contains("rain"),
        Some(ConditionType::WindAbove) => alert.threshold.is_some_and(|t| weather.wind_speed > t),
        None => false,
    }
}
