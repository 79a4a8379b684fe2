use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::models::WeatherSnapshot;

#[derive(Clone)]
pub struct OpenWeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            http: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn has_key(&self) -> bool {
        let key = self.api_key.trim();
        !key.is_empty() && !key.contains("YOUR_API_KEY")
    }

    /// Current conditions for a Bolivian city. Never fails: any problem
    /// upstream yields a synthetic snapshot flagged `is_mock`.
    pub async fn current(&self, city: &str) -> WeatherSnapshot {
        if !self.has_key() {
            tracing::warn!(city, "OPENWEATHER_API_KEY is missing, serving mock weather");
            return WeatherSnapshot::mock(city);
        }

        match self.fetch_current(city).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(city, error = %e, "weather fetch failed, serving mock weather");
                WeatherSnapshot::mock(city)
            }
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherSnapshot, String> {
        let url = format!("{}/weather", self.base_url);
        let q = format!("{city},BO");

        let res = self
            .http
            .get(url)
            .query(&[("q", q.as_str()), ("units", "metric"), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if res.status() == StatusCode::UNAUTHORIZED {
            return Err("API key unauthorized (401), it may not be activated yet".to_string());
        }

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("OpenWeather current failed: {status} {body}"));
        }

        let body = res
            .json::<CurrentWeatherResponse>()
            .await
            .map_err(|e| e.to_string())?;

        Ok(body.into_snapshot(city))
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CurrentWeatherResponse {
    #[serde(default)]
    pub name: String,
    pub main: MainBlock,
    #[serde(default)]
    pub weather: Vec<ConditionBlock>,
    pub wind: WindBlock,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MainBlock {
    pub temp: f64,
    #[serde(default)]
    pub humidity: i64,
    #[serde(default)]
    pub pressure: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ConditionBlock {
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct WindBlock {
    pub speed: f64,
}

impl CurrentWeatherResponse {
    /// The snapshot is keyed by the requested city, not by `name`: the API
    /// may spell it differently (e.g. without the accent in Potosí) and
    /// alerts match on the exact supported name.
    pub fn into_snapshot(self, city: &str) -> WeatherSnapshot {
        let first = self.weather.into_iter().next();

        WeatherSnapshot {
            city: city.to_string(),
            temperature: self.main.temp,
            wind_speed: self.wind.speed,
            condition_main: first.as_ref().map(|w| w.main.clone()).unwrap_or_default(),
            description: first.as_ref().map(|w| w.description.clone()).unwrap_or_default(),
            humidity: self.main.humidity,
            pressure: self.main.pressure,
            icon: first.map(|w| w.icon).unwrap_or_default(),
            is_mock: false,
        }
    }
}
