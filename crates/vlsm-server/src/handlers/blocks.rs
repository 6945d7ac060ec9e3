use crate::models::BlockSizeResponse;
use axum::Json;
use vlsm_core::BLOCK_SIZES;

/// List the standard block size catalog, most specific first
#[utoipa::path(
    get,
    path = "/api/blocks",
    tag = "allocation",
    responses(
        (status = 200, description = "Block size catalog", body = Vec<BlockSizeResponse>)
    )
)]
pub async fn list_blocks() -> Json<Vec<BlockSizeResponse>> {
    Json(BLOCK_SIZES.iter().map(Into::into).collect())
}
