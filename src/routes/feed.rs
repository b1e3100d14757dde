use actix_web::{HttpResponse, Responder, get, web};

use crate::forms::weights::{FeedQueryForm, FeedQueryPayload};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::feed::show_feed as show_feed_service;

#[get("/feed")]
pub async fn show_feed(
    web::Query(form): web::Query<FeedQueryForm>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let payload: FeedQueryPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match show_feed_service(payload, server_config.default_weight_unit, repo.get_ref()) {
        Ok(feed) => HttpResponse::Ok().json(feed),
        Err(err) => error_response(err),
    }
}
