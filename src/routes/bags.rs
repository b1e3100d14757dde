use actix_web::{HttpResponse, Responder, get, web};

use crate::forms::weights::{WeightQueryForm, WeightQueryPayload};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::bags::{
    show_bag_categories as show_bag_categories_service,
    show_bag_summary as show_bag_summary_service,
};

#[get("/bags/{bag_id}/categories")]
pub async fn show_bag_categories(
    bag_id: web::Path<i32>,
    web::Query(form): web::Query<WeightQueryForm>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let payload: WeightQueryPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match show_bag_categories_service(
        bag_id.into_inner(),
        payload,
        server_config.default_weight_unit,
        repo.get_ref(),
    ) {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => error_response(err),
    }
}

#[get("/bags/{bag_id}/summary")]
pub async fn show_bag_summary(
    bag_id: web::Path<i32>,
    web::Query(form): web::Query<WeightQueryForm>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let payload: WeightQueryPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => return error_response(ServiceError::from(e)),
    };

    match show_bag_summary_service(
        bag_id.into_inner(),
        payload,
        server_config.default_weight_unit,
        repo.get_ref(),
    ) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(err) => error_response(err),
    }
}
