//! Current temperature from Open-Meteo for the device's location.

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Position as GeolocationPosition;

const FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("no browser window")]
    NoWindow,
    #[error("geolocation failed: {0}")]
    Geolocation(String),
    #[error(transparent)]
    Http(#[from] gloo::net::Error),
    #[error("unexpected forecast payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CurrentWeather {
    pub temperature_2m: f64,
    #[serde(default)]
    pub weather_code: Option<u32>,
}

#[derive(Deserialize)]
struct ForecastResponse {
    current: CurrentWeather,
}

pub fn forecast_url(at: Coordinates) -> String {
    format!(
        "{}?latitude={}&longitude={}&current=temperature_2m,weather_code&timezone=Asia%2FTokyo&forecast_days=1",
        FORECAST_ENDPOINT, at.latitude, at.longitude
    )
}

pub fn parse_forecast(raw: &str) -> Result<CurrentWeather, WeatherError> {
    let response: ForecastResponse = serde_json::from_str(raw)?;
    Ok(response.current)
}

fn geolocation_error(value: JsValue) -> WeatherError {
    WeatherError::Geolocation(format!("{:?}", value))
}

/// Asks the browser for the current position once.
pub async fn current_position() -> Result<Coordinates, WeatherError> {
    let geolocation = web_sys::window()
        .ok_or(WeatherError::NoWindow)?
        .navigator()
        .geolocation()
        .map_err(geolocation_error)?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        if let Err(err) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            let _ = reject.call1(&JsValue::NULL, &err);
        }
    });
    let position: GeolocationPosition = JsFuture::from(promise)
        .await
        .map_err(geolocation_error)?
        .unchecked_into();
    let coords = position.coords();
    Ok(Coordinates {
        latitude: coords.latitude(),
        longitude: coords.longitude(),
    })
}

pub async fn fetch_current(at: Coordinates) -> Result<CurrentWeather, WeatherError> {
    let body = gloo::net::http::Request::get(&forecast_url(at))
        .send()
        .await?
        .text()
        .await?;
    parse_forecast(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_url_carries_coordinates() {
        let url = forecast_url(Coordinates {
            latitude: 35.6895,
            longitude: 139.6917,
        });
        assert_eq!(
            url,
            "https://api.open-meteo.com/v1/forecast?latitude=35.6895&longitude=139.6917&current=temperature_2m,weather_code&timezone=Asia%2FTokyo&forecast_days=1"
        );
    }

    #[test]
    fn test_parse_forecast_reads_current_block() {
        let raw = r#"{
            "latitude": 35.7,
            "longitude": 139.7,
            "current_units": {"temperature_2m": "°C"},
            "current": {"time": "2026-10-15T09:00", "interval": 900, "temperature_2m": 18.4, "weather_code": 3}
        }"#;
        let current = parse_forecast(raw).unwrap();
        assert_eq!(current.temperature_2m, 18.4);
        assert_eq!(current.weather_code, Some(3));
    }

    #[test]
    fn test_parse_forecast_rejects_missing_temperature() {
        let raw = r#"{"current": {"weather_code": 1}}"#;
        assert!(matches!(
            parse_forecast(raw),
            Err(WeatherError::Decode(_))
        ));
    }
}
