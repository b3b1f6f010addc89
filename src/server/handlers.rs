use super::pages::{BANNER, TEST_PAGE};
use super::types::{ErrorResponse, PingResponse, RollResponse};
use crate::{
    Error,
    dice::{self, RollRequest},
};
use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, Json},
};
use tracing::{debug, info};

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        ok: true,
        message: "API awake",
    })
}

pub async fn roll(
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<RollResponse>, (StatusCode, Json<ErrorResponse>)> {
    let pairs = params.iter().map(|(k, v)| (k.as_str(), v.as_str()));

    let request = match RollRequest::from_query(pairs) {
        Ok(request) => request,
        Err(e) => {
            debug!("Rejected roll parameters {:?}: {}", params, e);
            return Err(error_response(&e));
        }
    };

    let result = dice::roll_dice(&request);
    info!(
        "Rolled {}d{}: {:?} (total {})",
        request.count, request.sides, result.rolls, result.total
    );

    Ok(Json(RollResponse::new(request, result)))
}

pub async fn banner() -> &'static str {
    BANNER
}

pub async fn test_page() -> Html<&'static str> {
    Html(TEST_PAGE)
}

pub(crate) fn error_response(err: &Error) -> (StatusCode, Json<ErrorResponse>) {
    (
        err.status_code(),
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
