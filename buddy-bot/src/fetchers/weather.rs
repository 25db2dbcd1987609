//! OpenWeatherMap current-weather lookup and its three-line summary.

use serde::Deserialize;

use super::{FetchError, HttpFetcher};

#[derive(Debug, Deserialize)]
struct WeatherBody {
    name: String,
    main: MainReading,
    weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
struct MainReading {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct Condition {
    description: String,
}

pub fn weather_fallback(city: &str) -> String {
    format!(
        "⚠️ Could not fetch weather for \"{}\". Please check the city name and try again.",
        city
    )
}

fn format_weather(name: &str, temp: f64, description: &str) -> String {
    format!(
        "🌤️ Weather in {}\n🌡️ Temperature: {}°C\n☁️ Condition: {}",
        name, temp, description
    )
}

impl HttpFetcher {
    pub(super) async fn try_weather(&self, city: &str) -> Result<String, FetchError> {
        let body: WeatherBody = self
            .get_json(
                &self.endpoints.weather_url,
                &[
                    ("q", city),
                    ("units", "metric"),
                    ("appid", self.weather_api_key.as_str()),
                ],
            )
            .await?;
        let condition = body
            .weather
            .first()
            .ok_or_else(|| FetchError::Malformed("empty weather array".to_string()))?;
        Ok(format_weather(&body.name, body.main.temp, &condition.description))
    }
}
