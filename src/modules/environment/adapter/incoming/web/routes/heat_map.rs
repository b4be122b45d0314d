use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::environment::application::domain::geo::{Bounds, Coordinates};
use crate::modules::environment::application::ports::incoming::use_cases::{HeatMap, RegionalHeat};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::geo_query::{BoundsQuery, CoordinatesQuery};

#[derive(Serialize, ToSchema)]
pub struct HeatMapResponse {
    pub count: usize,
    #[serde(flatten)]
    pub heat_map: HeatMap,
}

#[derive(Serialize, ToSchema)]
pub struct RegionalHeatResponse {
    pub count: usize,
    #[serde(flatten)]
    pub regional: RegionalHeat,
}

/// Urban heat-island points around a centre
#[utoipa::path(
    get,
    path = "/api/environment/heat-map",
    tag = "environment",
    params(CoordinatesQuery),
    responses(
        (status = 200, description = "Heat points", body = HeatMapResponse),
        (status = 400, description = "Coordinates missing or out of range", body = ErrorResponse),
    )
)]
#[get("/api/environment/heat-map")]
pub async fn get_heat_map_handler(
    query: web::Query<CoordinatesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let center = match Coordinates::try_from(query.into_inner()) {
        Ok(center) => center,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    let heat_map = data.environment.heat_map.around(center).await;
    ApiResponse::success(HeatMapResponse {
        count: heat_map.points.len(),
        heat_map,
    })
}

/// Heat points for the major cities inside a viewport
#[utoipa::path(
    get,
    path = "/api/environment/regional-heat",
    tag = "environment",
    params(BoundsQuery),
    responses(
        (status = 200, description = "Heat points", body = RegionalHeatResponse),
        (status = 400, description = "Bounds missing, out of range or inverted", body = ErrorResponse),
    )
)]
#[get("/api/environment/regional-heat")]
pub async fn get_regional_heat_handler(
    query: web::Query<BoundsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let bounds = match Bounds::try_from(query.into_inner()) {
        Ok(bounds) => bounds,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    let regional = data.environment.heat_map.regional(bounds).await;
    ApiResponse::success(RegionalHeatResponse {
        count: regional.points.len(),
        regional,
    })
}
