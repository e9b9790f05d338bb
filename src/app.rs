use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{get, HttpResponse, Responder};
use actix_web::{web, App, HttpServer};

use tracing_actix_web::TracingLogger;

use crate::composer::Composer;
use crate::controller::{newsletters, sections, templates};

/// Simple health-check endpoint
#[tracing::instrument(name = "Health check")]
#[get("/health_check")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}

/// Run the application on a specified TCP listener
pub fn run(listener: TcpListener, composer: Composer) -> anyhow::Result<Server> {
    // Wrap application data
    let composer = web::Data::new(composer);

    // Start the server
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(composer.clone())
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                crate::controller::RestError::ParseError(err.to_string()).into()
            }))
            .service(health_check)
            .service(templates::scope())
            .service(sections::scope())
            .service(newsletters::scope())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
