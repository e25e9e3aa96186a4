//! HTTP handlers and response helpers.

use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod dashboard;
pub mod lead;

/// `{ "message": ... }` body used for confirmations and errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Maps a service failure to its status code with the message as body.
pub fn error_response(err: ServiceError) -> HttpResponse {
    let body = MessageResponse::new(err.to_string());
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().json(body),
        ServiceError::Validation(_) | ServiceError::Internal(_) => {
            HttpResponse::BadRequest().json(body)
        }
    }
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template '{template}': {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
