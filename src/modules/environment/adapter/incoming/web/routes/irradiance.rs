use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::ErrorResponse;
use crate::modules::environment::application::ports::incoming::use_cases::{
    IrradianceFilter, IrradianceReport,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct IrradianceQuery {
    /// Keep only the most recent month
    #[serde(default)]
    pub latest: bool,
    /// Pair with `month` to keep a single month
    pub year: Option<i32>,
    /// 1 to 12
    pub month: Option<u32>,
}

impl TryFrom<IrradianceQuery> for IrradianceFilter {
    type Error = &'static str;

    fn try_from(q: IrradianceQuery) -> Result<Self, Self::Error> {
        match (q.latest, q.year, q.month) {
            (true, None, None) => Ok(IrradianceFilter::Latest),
            (true, _, _) => Err("Use either latest or year and month"),
            (false, None, None) => Ok(IrradianceFilter::All),
            (false, Some(year), Some(month)) if (1..=12).contains(&month) => {
                Ok(IrradianceFilter::Month { year, month })
            }
            (false, Some(_), Some(_)) => Err("Month must be between 1 and 12"),
            _ => Err("Year and month must be given together"),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct IrradianceResponse {
    pub count: usize,
    #[serde(flatten)]
    pub report: IrradianceReport,
}

/// Diffuse solar irradiance from a NASA POWER monthly export
///
/// Send the POWER point JSON as the body. A missing or unusable body yields a
/// synthetic three-month series tagged `fallback`.
#[utoipa::path(
    post,
    path = "/api/environment/irradiance",
    tag = "environment",
    params(IrradianceQuery),
    request_body(content = Object, description = "NASA POWER monthly point export"),
    responses(
        (status = 200, description = "Monthly values with stats", body = IrradianceResponse),
        (status = 400, description = "Conflicting or incomplete month filter", body = ErrorResponse),
    )
)]
#[post("/api/environment/irradiance")]
pub async fn irradiance_handler(
    query: web::Query<IrradianceQuery>,
    body: Option<web::Json<JsonValue>>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match IrradianceFilter::try_from(query.into_inner()) {
        Ok(filter) => filter,
        Err(message) => return ApiResponse::bad_request(message),
    };

    let payload = body.map(web::Json::into_inner);
    let report = data.environment.irradiance.execute(payload, filter);
    ApiResponse::success(IrradianceResponse {
        count: report.months.len(),
        report,
    })
}
