use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{error, http::header, web, App, HttpResponse, HttpServer};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod api;
pub mod config;
pub mod extraction;
pub mod mcp;
pub mod narrative;
pub mod state;

pub use crate::config::ServerConfig;
pub use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::create_narratives,
        crate::api::handlers::health,
    ),
    components(
        schemas(
            api::models::NarrativeBatchRequest,
            api::models::NarrativeBatchResponse,
            api::models::HealthResponse,
            narrative::StructuredFields,
            narrative::NarrativeReport,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Narrative Service", description = "KTP narrative endpoints.")
    )
)]
pub struct ApiDoc;

/// Malformed JSON bodies on the REST API answer with an [`ErrorResponse`].
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::bad_request(&err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

/// Register the REST API, the MCP endpoint and Swagger UI.
pub fn configure_app(cfg: &mut web::ServiceConfig, state: web::Data<AppState>) {
    let mcp_state = web::Data::new(Arc::new(mcp::McpState::new(mcp::McpService::new(
        mcp::tools::ToolRegistry::new(state.config.max_batch_size),
    ))));

    cfg.app_data(state)
        .app_data(mcp_state)
        .service(
            web::scope("/api")
                .app_data(json_config())
                .configure(api::config),
        )
        .configure(mcp::handlers::config)
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
        );
}

pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let bind = (config.host.clone(), config.port);
    let app_state = web::Data::new(AppState::new(config));

    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let cors = app_state
            .config
            .allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(cors)
            .configure(|cfg| configure_app(cfg, app_state))
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(bind)?
    .run()
    .await
}
