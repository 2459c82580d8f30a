use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    model::{CurrentWeather, WeatherRequest},
    query::{DEFAULT_BASE_URL, build_query_url},
};

use super::{FetchError, WeatherProvider};

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    /// Point the provider at a different endpoint, e.g. a proxy or a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn fetch_current(&self, request: &WeatherRequest) -> Result<CurrentWeather, FetchError> {
        let url = build_query_url(&self.base_url, &request.city, request.units, &self.api_key)?;

        debug!(city = %request.city_name(), units = %request.units, "Requesting current weather");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        let status = res.status();
        debug!(%status, "OpenWeather responded");

        match status {
            StatusCode::UNAUTHORIZED => return Err(FetchError::Unauthorized),
            StatusCode::NOT_FOUND => return Err(FetchError::CityNotFound),
            s if !s.is_success() => return Err(FetchError::Status(s.as_u16())),
            _ => {}
        }

        let body = res.text().await.map_err(|e| FetchError::Transport(e.without_url()))?;

        parse_current(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: i64,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

fn parse_current(body: &str) -> Result<CurrentWeather, FetchError> {
    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    let OwCurrentResponse { name, main, weather } = parsed;

    let condition = weather
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::Malformed("response contained no weather conditions".into()))?;

    Ok(CurrentWeather {
        city: name,
        condition_id: condition.id,
        description: condition.description,
        temperature: main.temp,
    })
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<CurrentWeather, FetchError> {
        self.fetch_current(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Units;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const WEATHER_PATH: &str = "/data/2.5/weather";

    fn paris_body() -> serde_json::Value {
        json!({
            "coord": { "lon": 2.35, "lat": 48.85 },
            "name": "Paris",
            "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
            "main": { "temp": 21.5, "humidity": 40 },
            "cod": 200
        })
    }

    fn provider_for(server: &MockServer) -> OpenWeatherProvider {
        OpenWeatherProvider::new("TEST_KEY".to_string())
            .with_base_url(format!("{}{WEATHER_PATH}", server.uri()))
    }

    fn request(city: &[&str], units: Units) -> WeatherRequest {
        WeatherRequest::new(city.iter().map(|s| s.to_string()).collect(), units)
    }

    async fn respond_with(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(WEATHER_PATH))
            .respond_with(template)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn returns_current_weather_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(WEATHER_PATH))
            .and(query_param("q", "Paris"))
            .and(query_param("units", "metric"))
            .and(query_param("appid", "TEST_KEY"))
            .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
            .expect(1)
            .mount(&server)
            .await;

        let weather = provider_for(&server)
            .current_weather(&request(&["Paris"], Units::Metric))
            .await
            .expect("lookup should succeed");

        assert_eq!(
            weather,
            CurrentWeather {
                city: "Paris".to_string(),
                condition_id: 800,
                description: "clear sky".to_string(),
                temperature: 21.5,
            }
        );
    }

    #[tokio::test]
    async fn sends_joined_city_and_imperial_units() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(WEATHER_PATH))
            .and(query_param("q", "New York"))
            .and(query_param("units", "imperial"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "New York",
                "weather": [{ "id": 500, "description": "light rain" }],
                "main": { "temp": 55 }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let weather = provider_for(&server)
            .current_weather(&request(&["New", "York"], Units::Imperial))
            .await
            .expect("lookup should succeed");

        assert_eq!(weather.city, "New York");
        assert_eq!(weather.condition_id, 500);
        assert_eq!(weather.temperature, 55.0);
    }

    #[tokio::test]
    async fn unauthorized_maps_to_auth_error() {
        let server = respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "cod": 401, "message": "Invalid API key" })),
        )
        .await;

        let err = provider_for(&server)
            .current_weather(&request(&["Paris"], Units::Metric))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Unauthorized));
        assert!(err.to_string().contains("API key"));
    }

    #[tokio::test]
    async fn not_found_maps_to_city_not_found() {
        let server = respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "cod": "404", "message": "city not found" })),
        )
        .await;

        let err = provider_for(&server)
            .current_weather(&request(&["Atlantis"], Units::Metric))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::CityNotFound));
        assert!(err.to_string().contains("Can't find weather data for this city"));
    }

    #[tokio::test]
    async fn other_status_reports_code() {
        let server = respond_with(ResponseTemplate::new(503)).await;

        let err = provider_for(&server)
            .current_weather(&request(&["Paris"], Units::Metric))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Status(503)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let server = respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

        let err = provider_for(&server)
            .current_weather(&request(&["Paris"], Units::Metric))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Malformed(_)));
        assert!(err.to_string().starts_with("Couldn't read the server response"));
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let err = parse_current(r#"{"name": "Paris", "weather": [{"id": 800, "description": "clear sky"}]}"#)
            .unwrap_err();

        assert!(matches!(err, FetchError::Malformed(ref msg) if msg.contains("main")));
    }

    #[test]
    fn empty_condition_list_is_malformed() {
        let err = parse_current(r#"{"name": "Paris", "weather": [], "main": {"temp": 1.0}}"#)
            .unwrap_err();

        assert!(matches!(err, FetchError::Malformed(ref msg) if msg.contains("no weather conditions")));
    }

    #[test]
    fn first_condition_wins() {
        let weather = parse_current(
            r#"{"name": "Oslo", "weather": [{"id": 701, "description": "mist"}, {"id": 500, "description": "light rain"}], "main": {"temp": -3}}"#,
        )
        .unwrap();

        assert_eq!(weather.condition_id, 701);
        assert_eq!(weather.description, "mist");
        assert_eq!(weather.temperature, -3.0);
    }

    #[tokio::test]
    async fn transport_error_does_not_leak_api_key() {
        // Nothing listens on port 9 of the loopback interface.
        let provider = OpenWeatherProvider::new("SECRET_KEY".to_string())
            .with_base_url("http://127.0.0.1:9/data/2.5/weather");

        let err = provider
            .current_weather(&request(&["Paris"], Units::Metric))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));

        let full = format!("{:#}", anyhow::Error::new(err));
        assert!(full.starts_with("Could not reach the weather service"));
        assert!(!full.contains("SECRET_KEY"));
    }

    #[tokio::test]
    async fn invalid_base_url_is_a_query_error() {
        let provider = OpenWeatherProvider::new("KEY".to_string()).with_base_url("::nope::");

        let err = provider
            .current_weather(&request(&["Paris"], Units::Metric))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Query(_)));
    }
}
