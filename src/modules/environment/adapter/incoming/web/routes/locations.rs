use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::modules::environment::application::domain::locations::{BrazilState, City};
use crate::modules::environment::application::domain::source::DataSource;
use crate::modules::environment::application::ports::incoming::use_cases::GeocodedPlace;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct StateListResponse {
    pub count: usize,
    pub source: DataSource,
    pub states: Vec<BrazilState>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityListResponse {
    pub state_id: u32,
    pub count: usize,
    pub source: DataSource,
    pub cities: Vec<City>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(default)]
pub struct GeocodeQuery {
    /// City name
    pub city: String,
    /// State code, e.g. `SP`
    pub state: String,
}

#[derive(Serialize, ToSchema)]
pub struct GeocodeResponse {
    pub city: String,
    pub state: String,
    #[serde(flatten)]
    pub place: GeocodedPlace,
}

/// Brazilian states
#[utoipa::path(
    get,
    path = "/api/locations/states",
    tag = "locations",
    responses((status = 200, description = "States sorted by name", body = StateListResponse))
)]
#[get("/api/locations/states")]
pub async fn list_states_handler(data: web::Data<AppState>) -> impl Responder {
    let states = data.environment.locations.states().await;
    ApiResponse::success(StateListResponse {
        count: states.value.len(),
        source: states.source,
        states: states.value,
    })
}

/// Municipalities of a state
#[utoipa::path(
    get,
    path = "/api/locations/states/{state_id}/cities",
    tag = "locations",
    params(("state_id" = u32, Path, description = "IBGE state code")),
    responses((status = 200, description = "Cities sorted by name", body = CityListResponse))
)]
#[get("/api/locations/states/{state_id}/cities")]
pub async fn list_cities_handler(
    path: web::Path<u32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let state_id = path.into_inner();
    let cities = data.environment.locations.cities(state_id).await;

    ApiResponse::success(CityListResponse {
        state_id,
        count: cities.value.len(),
        source: cities.source,
        cities: cities.value,
    })
}

/// Coordinates of a city
#[utoipa::path(
    get,
    path = "/api/locations/geocode",
    tag = "locations",
    params(GeocodeQuery),
    responses(
        (status = 200, description = "Location, live or state-centre fallback", body = GeocodeResponse),
        (status = 400, description = "City or state missing", body = ErrorResponse),
    )
)]
#[get("/api/locations/geocode")]
pub async fn geocode_handler(
    query: web::Query<GeocodeQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let GeocodeQuery { city, state } = query.into_inner();
    let (city, state) = (city.trim().to_string(), state.trim().to_string());
    if city.is_empty() || state.is_empty() {
        return ApiResponse::bad_request("City and state are required");
    }

    let place = data.environment.locations.geocode(&city, &state).await;
    info!(city = %city, state = %state, source = ?place.source, "Geocoded city");

    ApiResponse::success(GeocodeResponse { city, state, place })
}
