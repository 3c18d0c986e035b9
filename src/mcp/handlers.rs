//! MCP stateless HTTP handlers for Actix-Web.
//!
//! Each POST is independent; no SSE connections are kept open.

use actix_web::{error, web, HttpResponse, Responder};
use std::sync::Arc;

use crate::mcp::rpc::{OutboundResponse, RpcRequest, PARSE_ERROR};
use crate::mcp::service::McpService;

pub struct McpState {
    pub service: McpService,
}

impl McpState {
    pub fn new(service: McpService) -> Self {
        Self { service }
    }
}

/// RPC handler - POST /mcp
pub async fn rpc_handler(
    state: web::Data<Arc<McpState>>,
    body: web::Json<RpcRequest>,
) -> impl Responder {
    log::info!("Received MCP request: {}", body.method);

    if let Some(response) = state.service.handle_request(body.into_inner()) {
        return HttpResponse::Ok()
            .content_type("application/json")
            .json(response);
    }

    // Notifications return 202 Accepted
    HttpResponse::Accepted().finish()
}

/// Bodies that are not a JSON-RPC request still get a JSON-RPC reply.
fn json_error_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected MCP body: {}", err);
        let response = HttpResponse::Ok()
            .content_type("application/json")
            .json(OutboundResponse::error(None, PARSE_ERROR, err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/mcp")
            .app_data(json_error_config())
            .route(web::post().to(rpc_handler)),
    );
}
