use actix_web::dev::HttpServiceFactory;
use actix_web::http::header::ContentType;
use actix_web::{get, post, put, web, HttpResponse, Responder};

use chrono::{DateTime, Utc};

use serde::Deserialize;

use crate::composer::Composer;
use crate::controller::{json_or_default, RestResult};
use crate::domain::NewsletterId;

#[derive(Debug, Deserialize)]
pub struct SubjectBody {
    subject: String,
}

#[derive(Debug, Deserialize)]
pub struct LayoutBody {
    layout: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBody {
    /// Defaults to one schedule delay from now
    #[serde(default)]
    scheduled_for: Option<DateTime<Utc>>,
}

#[tracing::instrument(name = "List newsletters", skip(composer))]
#[get("")]
async fn list(composer: web::Data<Composer>) -> impl Responder {
    HttpResponse::Ok().json(composer.list())
}

#[tracing::instrument(name = "Create a newsletter", skip(composer))]
#[post("")]
async fn create(composer: web::Data<Composer>) -> RestResult<impl Responder> {
    let newsletter = composer.create()?;

    Ok(HttpResponse::Created().json(newsletter))
}

#[tracing::instrument(name = "Fetch a newsletter", skip(composer))]
#[get("/{id}")]
async fn fetch(
    composer: web::Data<Composer>,
    path: web::Path<(NewsletterId,)>,
) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();
    let newsletter = composer.get(&id)?;

    Ok(HttpResponse::Ok().json(newsletter))
}

#[tracing::instrument(name = "Change newsletter subject", skip(composer))]
#[put("/{id}/subject")]
async fn update_subject(
    composer: web::Data<Composer>,
    path: web::Path<(NewsletterId,)>,
    body: web::Json<SubjectBody>,
) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();
    let newsletter = composer.update_subject(&id, body.0.subject)?;

    Ok(HttpResponse::Ok().json(newsletter))
}

#[tracing::instrument(name = "Change newsletter layout", skip(composer))]
#[put("/{id}/layout")]
async fn update_layout(
    composer: web::Data<Composer>,
    path: web::Path<(NewsletterId,)>,
    body: web::Json<LayoutBody>,
) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();
    let newsletter = composer.update_layout(&id, body.0.layout)?;

    Ok(HttpResponse::Ok().json(newsletter))
}

#[tracing::instrument(name = "Save a draft", skip(composer))]
#[post("/{id}/draft")]
async fn save_draft(
    composer: web::Data<Composer>,
    path: web::Path<(NewsletterId,)>,
) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();
    let newsletter = composer.save_draft(&id)?;

    Ok(HttpResponse::Ok().json(newsletter))
}

#[tracing::instrument(name = "Schedule a newsletter", skip(composer, body))]
#[post("/{id}/schedule")]
async fn schedule(
    composer: web::Data<Composer>,
    path: web::Path<(NewsletterId,)>,
    body: web::Bytes,
) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();
    let body: ScheduleBody = json_or_default(&body)?;
    let newsletter = composer.schedule(&id, body.scheduled_for)?;

    Ok(HttpResponse::Ok().json(newsletter))
}

#[tracing::instrument(name = "Preview a newsletter", skip(composer))]
#[get("/{id}/preview")]
async fn preview(
    composer: web::Data<Composer>,
    path: web::Path<(NewsletterId,)>,
) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();
    let html = composer.preview(&id, Utc::now().date_naive())?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(html))
}

/// Newsletter API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/newsletters")
        .service(list)
        .service(create)
        .service(fetch)
        .service(update_subject)
        .service(update_layout)
        .service(save_draft)
        .service(schedule)
        .service(preview)
}
