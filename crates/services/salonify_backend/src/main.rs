// File: services/salonify_backend/src/main.rs
use axum::{routing::get, Router};
use salonify_catalog::routes as catalog_routes;
use salonify_common::is_feature_enabled;
use salonify_common::services::ServiceFactory;
use salonify_config::load_config;
use salonify_plan::routes as plan_routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::warn;

mod app_state;
mod service_factory;

use app_state::AppState;

use axum::{extract::State, Json};
use salonify_config::AppConfig;
#[allow(dead_code)]
#[axum::debug_handler]
async fn show_config(State(config): State<Arc<AppConfig>>) -> Json<AppConfig> {
    Json(config.as_ref().clone())
}

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    salonify_common::logging::init();

    let state = AppState::new(config.clone()).await;
    let catalog_provider = state.service_factory.catalog_provider();

    let mut api_router = Router::new()
        .route("/", get(|| async { "Welcome to Salonify API!" }))
        .merge(salonify_common::routes());

    if is_feature_enabled(&config, config.use_catalog, config.catalog.as_ref()) {
        if let Some(provider) = catalog_provider.clone() {
            api_router = api_router.merge(catalog_routes::routes(config.clone(), provider));
        }
    }

    if is_feature_enabled(&config, config.use_plans, config.plan.as_ref()) {
        match (state.plan_repository.clone(), catalog_provider) {
            (Some(repository), Some(catalog)) => {
                api_router =
                    api_router.merge(plan_routes::routes(config.clone(), repository, catalog));
            }
            (None, _) => {
                warn!("Plans enabled but no database is available; plan routes not mounted.");
            }
            (_, None) => {
                warn!("Plans enabled but the catalog provider is not; plan routes not mounted.");
            }
        }
    }

    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use salonify_catalog::doc::CatalogApiDoc;
        use salonify_plan::doc::PlanApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Salonify API",
                version = "0.1.0",
                description = "Salonify Service API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Salonify", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(PlanApiDoc::openapi());
        openapi_doc.merge(CatalogApiDoc::openapi());
        println!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Serve the wizard frontend in dev mode
    if cfg!(debug_assertions) {
        println!("Running in development mode, serving static files from ../../dist");
        let static_router = Router::new().nest_service("/static", ServeDir::new("../../dist"));
        app = app.merge(static_router);
        app = app.fallback_service(ServeDir::new("../dist"));
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
