//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its utoipa specification. Swagger UI is
//! served at `/api/docs` with the OpenAPI document at `/api/docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/auth/login`, `/api/auth/callback`, `/api/auth/logout`, `/api/auth/user`
/// - `GET /api/dashboard`
/// - `GET|POST /api/armies`, `PATCH|DELETE /api/armies/{id}`
/// - `GET|POST /api/squads`, `PATCH|DELETE /api/squads/{id}`
/// - `GET|POST /api/minis`, `PATCH|DELETE /api/minis/{id}`
/// - `POST /api/minis/{id}/toggle-stage`
/// - `GET /api/export`
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, oauth, http_client });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "PaintTracker", description = "PaintTracker API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard API routes"),
        (name = controller::army::ARMY_TAG, description = "Army API routes"),
        (name = controller::squad::SQUAD_TAG, description = "Squad API routes"),
        (name = controller::mini::MINI_TAG, description = "Mini API routes"),
        (name = controller::export::EXPORT_TAG, description = "Export API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::dashboard::get_dashboard))
        .routes(routes!(
            controller::army::list_armies,
            controller::army::create_army
        ))
        .routes(routes!(
            controller::army::update_army,
            controller::army::delete_army
        ))
        .routes(routes!(
            controller::squad::list_squads,
            controller::squad::create_squad
        ))
        .routes(routes!(
            controller::squad::update_squad,
            controller::squad::delete_squad
        ))
        .routes(routes!(
            controller::mini::list_minis,
            controller::mini::create_mini
        ))
        .routes(routes!(
            controller::mini::update_mini,
            controller::mini::delete_mini
        ))
        .routes(routes!(controller::mini::toggle_stage))
        .routes(routes!(controller::export::export))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
