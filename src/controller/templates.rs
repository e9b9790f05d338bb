use actix_web::dev::HttpServiceFactory;
use actix_web::{get, web, HttpResponse, Responder};

use crate::templates::catalog;

#[tracing::instrument(name = "List templates")]
#[get("")]
async fn list() -> impl Responder {
    HttpResponse::Ok().json(catalog())
}

/// Template catalog endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/templates").service(list)
}
