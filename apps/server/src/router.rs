use axum::Router;
use pethub::kernel::server::ApiState;
use pethub::server::router::{pets_router, system_router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(title = "PetHub API", description = "Read-only pet listing"),
    tags(
        (name = "Pets", description = "Pet records"),
        (name = "System", description = "Platform endpoints"),
    )
)]
struct ApiDoc;

/// Builds the full application router: system routes, feature slices, and the API docs UI at `/api`.
pub fn init(state: ApiState) -> Router {
    let (routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(system_router())
        .merge(pets_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    Router::new().merge(routes).merge(Scalar::with_url("/api", api_doc))
}
