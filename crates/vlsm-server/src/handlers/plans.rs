use crate::handlers::bad_request;
use crate::models::{ErrorResponse, PlanRequest, PlanResponse};
use axum::{http::StatusCode, Json};
use tracing::debug;
use vlsm_core::{plan_allocation, Demand};

/// Size each department demand to its smallest sufficient block
#[utoipa::path(
    post,
    path = "/api/plan",
    tag = "allocation",
    request_body = PlanRequest,
    responses(
        (status = 200, description = "Allocation plan", body = PlanResponse),
        (status = 400, description = "A demand exceeds the largest block", body = ErrorResponse)
    )
)]
pub async fn create_plan(
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, (StatusCode, Json<ErrorResponse>)> {
    let demands: Vec<Demand> = request
        .departments
        .iter()
        .map(|d| Demand {
            name: d.name.clone(),
            required_hosts: d.required_hosts,
        })
        .collect();

    debug!(
        "Planning allocation of {} demands against a pool of {}",
        demands.len(),
        request.pool_size
    );

    let plan = plan_allocation(request.pool_size, &demands).map_err(bad_request)?;
    Ok(Json(PlanResponse::from(&plan)))
}
