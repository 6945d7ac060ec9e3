use crate::handlers::bad_request;
use crate::models::{ErrorResponse, SubnetDetailResponse, SubnetRequest};
use axum::{http::StatusCode, Json};
use tracing::debug;
use vlsm_core::{compute_subnet_detail, parse_address};

/// Calculate subnet boundaries and host counts for an address/prefix pair
#[utoipa::path(
    post,
    path = "/api/subnet",
    tag = "subnets",
    request_body = SubnetRequest,
    responses(
        (status = 200, description = "Subnet detail", body = SubnetDetailResponse),
        (status = 400, description = "Malformed address or prefix", body = ErrorResponse)
    )
)]
pub async fn calculate_subnet(
    Json(request): Json<SubnetRequest>,
) -> Result<Json<SubnetDetailResponse>, (StatusCode, Json<ErrorResponse>)> {
    let address = parse_address(&request.address).map_err(bad_request)?;

    let prefix: u8 = match request.prefix.parse() {
        Ok(p) if p <= 32 => p,
        _ => {
            return Err(bad_request(format!(
                "invalid prefix length: {:?}",
                request.prefix
            )))
        }
    };

    debug!("Calculating subnet detail for {}/{}", request.address, prefix);

    let detail = compute_subnet_detail(address, prefix).map_err(bad_request)?;
    Ok(Json(detail.into()))
}
