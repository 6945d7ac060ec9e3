use crate::handlers::bad_request;
use crate::models::{ErrorResponse, RangePlanResponse, PlanResponse, RangeRequest};
use axum::{http::StatusCode, Json};
use tracing::debug;
use vlsm_core::{generate_ranges, parse_address, plan_allocation, Demand};

/// Plan the demands and lay the blocks out from the base address
#[utoipa::path(
    post,
    path = "/api/ranges",
    tag = "allocation",
    request_body = RangeRequest,
    responses(
        (status = 200, description = "Plan with concrete address ranges", body = RangePlanResponse),
        (status = 400, description = "Invalid input or address space exhausted", body = ErrorResponse)
    )
)]
pub async fn create_ranges(
    Json(request): Json<RangeRequest>,
) -> Result<Json<RangePlanResponse>, (StatusCode, Json<ErrorResponse>)> {
    let base = parse_address(&request.base_address).map_err(bad_request)?;

    let demands: Vec<Demand> = request
        .departments
        .iter()
        .map(|d| Demand {
            name: d.name.clone(),
            required_hosts: d.required_hosts,
        })
        .collect();

    let plan = plan_allocation(request.pool_size, &demands).map_err(bad_request)?;

    debug!(
        "Generating {} ranges from base {}",
        plan.allocations.len(),
        request.base_address
    );

    let ranges = generate_ranges(base, &plan.allocations).map_err(bad_request)?;

    Ok(Json(RangePlanResponse {
        plan: PlanResponse::from(&plan),
        ranges: ranges.into_iter().map(Into::into).collect(),
    }))
}
