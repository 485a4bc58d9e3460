mod academic;
mod admin;
mod announcement;
mod auth;
mod tuition;

use crate::state::AppState;
use anyhow::Result;
use axum::{Extension, Router, extract::DefaultBodyLimit};
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::academic::academic_routes;
pub use self::admin::admin_routes;
pub use self::announcement::announcement_routes;
pub use self::auth::auth_routes;
pub use self::tuition::tuition_routes;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::health_checker_handler,
        auth::student_login_handler,
        auth::student_me_handler,

        admin::admin_login_handler,
        admin::admin_me_handler,

        tuition::get_invoices,
        tuition::get_installments,
        tuition::get_payment_summary,
        tuition::pay_installment,

        academic::get_schedule,
        academic::get_grades,

        announcement::list_announcements,
        announcement::get_announcement,
        announcement::create_announcement,
        announcement::update_announcement,
        announcement::update_visibility,
        announcement::delete_announcement,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Auth", description = "Student sign-in and identity"),
        (name = "Admin", description = "Administrator sign-in and identity"),
        (name = "Tuition", description = "Tuition invoices and installment payments"),
        (name = "Academic", description = "Schedules, grades and term summaries"),
        (name = "Announcement", description = "Announcement board"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(admin_routes(shared_state.clone()))
            .merge(tuition_routes(shared_state.clone()))
            .merge(academic_routes(shared_state.clone()))
            .merge(announcement_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(Extension(shared_state.jwt_config.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES));

        let (app_router, api) = router_with_layers.split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
