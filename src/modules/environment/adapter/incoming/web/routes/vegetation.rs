use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::environment::application::domain::geo::Coordinates;
use crate::modules::environment::application::domain::vegetation::VegetationPatch;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::geo_query::CoordinatesQuery;

#[derive(Serialize, ToSchema)]
pub struct VegetationResponse {
    pub count: usize,
    pub center: Coordinates,
    pub patches: Vec<VegetationPatch>,
}

/// Synthetic NDVI patches around a centre
#[utoipa::path(
    get,
    path = "/api/environment/vegetation",
    tag = "environment",
    params(CoordinatesQuery),
    responses(
        (status = 200, description = "Vegetation patches", body = VegetationResponse),
        (status = 400, description = "Coordinates missing or out of range", body = ErrorResponse),
    )
)]
#[get("/api/environment/vegetation")]
pub async fn get_vegetation_handler(
    query: web::Query<CoordinatesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let center = match Coordinates::try_from(query.into_inner()) {
        Ok(center) => center,
        Err(e) => return ApiResponse::bad_request(&e.to_string()),
    };

    let patches = data.environment.vegetation.execute(center);
    ApiResponse::success(VegetationResponse {
        count: patches.len(),
        center,
        patches,
    })
}
