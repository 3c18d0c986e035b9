//! REST endpoints for narrative formatting.

pub mod handlers;
pub mod models;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/narratives").route(web::post().to(handlers::create_narratives)))
        .service(web::resource("/health").route(web::get().to(handlers::health)));
}
