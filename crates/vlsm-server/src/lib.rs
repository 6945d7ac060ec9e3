pub mod config;
pub mod handlers;
pub mod models;

pub use config::Config;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::subnets::calculate_subnet,
        handlers::plans::create_plan,
        handlers::ranges::create_ranges,
        handlers::blocks::list_blocks,
    ),
    components(
        schemas(
            models::SubnetRequest,
            models::SubnetDetailResponse,
            models::DepartmentDemand,
            models::PlanRequest,
            models::PlanResponse,
            models::AllocationResponse,
            models::RangeRequest,
            models::RangePlanResponse,
            models::AddressRangeResponse,
            models::BlockSizeResponse,
            models::ErrorResponse,
        )
    ),
    tags(
        (name = "subnets", description = "Subnet detail calculation"),
        (name = "allocation", description = "VLSM allocation planning and range layout"),
    )
)]
pub struct ApiDoc;

pub fn create_router() -> Router {
    let app = Router::new()
        .route("/api/subnet", post(handlers::subnets::calculate_subnet))
        .route("/api/plan", post(handlers::plans::create_plan))
        .route("/api/ranges", post(handlers::ranges::create_ranges))
        .route("/api/blocks", get(handlers::blocks::list_blocks))
        .route("/health", get(handlers::health::health_check))
        .layer(TraceLayer::new_for_http());

    // Merge with Swagger UI
    app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
