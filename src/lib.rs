#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpResponse, HttpServer, error::InternalError, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::db::{establish_connection_pool, run_migrations};
#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::DieselRepository;
#[cfg(feature = "server")]
use crate::routes::MessageResponse;
#[cfg(feature = "server")]
use crate::routes::dashboard::show_dashboard;
#[cfg(feature = "server")]
use crate::routes::lead::{create_lead, delete_lead, list_leads, show_lead, update_lead};

#[cfg(feature = "server")]
pub mod dashboard;
pub mod db;
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod models;
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Answers unreadable JSON bodies with 400 and a `{message}` body.
#[cfg(feature = "server")]
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let body = MessageResponse::new(err.to_string());
        InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
    })
}

/// Registers the `/api/leads` resource routes.
#[cfg(feature = "server")]
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/api/leads")
            .service(create_lead)
            .service(list_leads)
            .service(show_lead)
            .service(update_lead)
            .service(delete_lead),
    );
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
///
/// Fails before binding when the store cannot be opened or migrated.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;
    run_migrations(&pool).map_err(|e| std::io::Error::other(e.to_string()))?;
    log::info!("Lead store ready at {}", server_config.database_url);

    let repo = DieselRepository::new(pool);

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Server running on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::Logger::default())
            .configure(configure_api)
            .service(show_dashboard)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
