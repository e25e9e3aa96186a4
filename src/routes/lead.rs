use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::lead::LeadForm;
use crate::repository::DieselRepository;
use crate::routes::{MessageResponse, error_response};
use crate::services::lead as lead_service;

#[post("/leads")]
pub async fn create_lead(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<LeadForm>,
) -> impl Responder {
    match lead_service::create_lead(repo.get_ref(), form) {
        Ok(lead) => HttpResponse::Created().json(lead),
        Err(err) => error_response(err),
    }
}

#[get("/leads")]
pub async fn list_leads(repo: web::Data<DieselRepository>) -> impl Responder {
    match lead_service::list_leads(repo.get_ref()) {
        Ok(leads) => HttpResponse::Ok().json(leads),
        Err(err) => error_response(err),
    }
}

#[get("/leads/{id}")]
pub async fn show_lead(
    lead_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match lead_service::get_lead(repo.get_ref(), &lead_id) {
        Ok(lead) => HttpResponse::Ok().json(lead),
        Err(err) => error_response(err),
    }
}

#[put("/leads/{id}")]
pub async fn update_lead(
    lead_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<LeadForm>,
) -> impl Responder {
    match lead_service::update_lead(repo.get_ref(), &lead_id, form) {
        Ok(lead) => HttpResponse::Ok().json(lead),
        Err(err) => error_response(err),
    }
}

#[delete("/leads/{id}")]
pub async fn delete_lead(
    lead_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match lead_service::delete_lead(repo.get_ref(), &lead_id) {
        Ok(()) => HttpResponse::Ok().json(MessageResponse::new(lead_service::LEAD_DELETED_MESSAGE)),
        Err(err) => error_response(err),
    }
}
