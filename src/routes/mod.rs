use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod bags;
pub mod feed;
pub mod weights;

/// JSON body sent with every error status.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Maps a service error onto an HTTP response.
pub fn error_response(err: ServiceError) -> HttpResponse {
    let body = ErrorBody {
        error: err.to_string(),
    };
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(body),
        ServiceError::Form(_) | ServiceError::TypeConstraint(_) => {
            HttpResponse::BadRequest().json(body)
        }
        ServiceError::Internal => HttpResponse::InternalServerError().json(body),
    }
}

/// Registers every API route under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(bags::show_bag_categories)
            .service(bags::show_bag_summary)
            .service(feed::show_feed)
            .service(weights::calculate_weights),
    );
}
