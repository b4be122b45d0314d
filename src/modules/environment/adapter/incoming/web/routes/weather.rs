use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::environment::application::domain::geo::{Bounds, Coordinates};
use crate::modules::environment::application::domain::weather::WeatherSnapshot;
use crate::modules::environment::application::ports::incoming::use_cases::CityWeather;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::geo_query::{BoundsQuery, CoordinatesQuery};

#[derive(Serialize, ToSchema)]
pub struct WeatherResponse {
    pub location: Coordinates,
    pub weather: WeatherSnapshot,
}

#[derive(Serialize, ToSchema)]
pub struct RegionalWeatherResponse {
    pub count: usize,
    pub cities: Vec<CityWeather>,
}

/// Current weather
///
/// Live Open-Meteo data when reachable, otherwise synthetic values tagged `fallback`.
#[utoipa::path(
    get,
    path = "/api/environment/weather",
    tag = "environment",
    params(CoordinatesQuery),
    responses(
        (status = 200, description = "Current conditions", body = WeatherResponse),
        (status = 400, description = "Coordinates missing or out of range", body = ErrorResponse),
    )
)]
#[get("/api/environment/weather")]
pub async fn get_weather_handler(
    query: web::Query<CoordinatesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let location = match Coordinates::try_from(query.into_inner()) {
        Ok(location) => location,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    let weather = data.environment.weather.execute(location).await;
    ApiResponse::success(WeatherResponse { location, weather })
}

/// Weather markers for the major cities inside a viewport
#[utoipa::path(
    get,
    path = "/api/environment/regional-weather",
    tag = "environment",
    params(BoundsQuery),
    responses(
        (status = 200, description = "One marker per city", body = RegionalWeatherResponse),
        (status = 400, description = "Bounds missing, out of range or inverted", body = ErrorResponse),
    )
)]
#[get("/api/environment/regional-weather")]
pub async fn get_regional_weather_handler(
    query: web::Query<BoundsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let bounds = match Bounds::try_from(query.into_inner()) {
        Ok(bounds) => bounds,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    let cities = data.environment.weather.regional(bounds).await;
    ApiResponse::success(RegionalWeatherResponse {
        count: cities.len(),
        cities,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    use crate::shared::api::custom_query_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    async fn call(uri: &str) -> (u16, Value) {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_query_config())
                .service(get_weather_handler)
                .service(get_regional_weather_handler),
        )
        .await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_weather_is_public_and_wrapped() {
        let (status, body) = call("/api/environment/weather?lat=-23.55&lng=-46.63").await;

        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(body["location"]["lat"], -23.55);
        assert!(body["weather"]["temperature"].is_number());
        assert!(body["weather"]["source"].is_string());
    }

    #[actix_web::test]
    async fn test_weather_out_of_range_latitude() {
        let (status, body) = call("/api/environment/weather?lat=123&lng=-46.63").await;

        assert_eq!(status, 400);
        assert_eq!(body["message"], "Latitude must be between -90 and 90");
    }

    #[actix_web::test]
    async fn test_weather_missing_longitude() {
        let (status, body) = call("/api/environment/weather?lat=-23.55").await;

        assert_eq!(status, 400);
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_regional_weather_lists_cities_in_view() {
        let (status, body) =
            call("/api/environment/regional-weather?south=-24&west=-47.5&north=-22&east=-43").await;

        assert_eq!(status, 200);
        assert_eq!(body["count"], 4);
        let first = &body["cities"][0];
        assert_eq!(first["city"], "São Paulo");
        assert_eq!(first["location"]["lat"], -23.5505);
        assert!(first["weather"]["temperature"].is_number());
        assert!(first["weather"]["relativeHumidity"].is_number());
        assert!(first["weather"]["apparentTemperature"].is_number());
        assert!(first["weather"]["description"].is_string());
        assert!(first["weather"]["band"].is_string());
    }

    #[actix_web::test]
    async fn test_regional_weather_requires_bounds() {
        let (status, body) = call("/api/environment/regional-weather?south=-24&west=-47.5").await;

        assert_eq!(status, 400);
        assert_eq!(body["success"], false);
    }
}
