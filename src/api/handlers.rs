use actix_web::{web, HttpResponse, Responder};

use super::models::{HealthResponse, NarrativeBatchRequest, NarrativeBatchResponse};
use crate::narrative::report_batch;
use crate::{AppState, ErrorResponse};

#[utoipa::path(
    post,
    path = "/api/narratives",
    tag = "Narrative Service",
    request_body = NarrativeBatchRequest,
    responses(
        (status = 200, description = "One narrative per document, in request order", body = NarrativeBatchResponse),
        (status = 400, description = "Malformed body, empty batch or batch too large", body = ErrorResponse)
    )
)]
pub async fn create_narratives(
    state: web::Data<AppState>,
    body: web::Json<NarrativeBatchRequest>,
) -> impl Responder {
    let request = body.into_inner();
    log::info!("Received narrative request for {} document(s)", request.documents.len());

    if let Some(message) = state.batch_rejection(request.documents.len()) {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message));
    }

    let response = NarrativeBatchResponse {
        narratives: report_batch(&request.documents),
    };

    HttpResponse::Ok().json(response)
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Narrative Service",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
    })
}
