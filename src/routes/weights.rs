use actix_web::{HttpResponse, Responder, post, web};

use crate::forms::weights::{CalculateWeightsForm, CalculateWeightsPayload};
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::weights::calculate_weights as calculate_weights_service;

#[post("/weights")]
pub async fn calculate_weights(web::Json(form): web::Json<CalculateWeightsForm>) -> impl Responder {
    let payload: CalculateWeightsPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            log::debug!("Rejected weights form: {e}");
            return error_response(ServiceError::from(e));
        }
    };

    HttpResponse::Ok().json(calculate_weights_service(payload))
}
