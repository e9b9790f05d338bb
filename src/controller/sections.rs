use actix_web::dev::HttpServiceFactory;
use actix_web::{delete, post, put, web, HttpResponse, Responder};

use serde::Deserialize;

use crate::composer::Composer;
use crate::controller::{json_or_default, RestResult};
use crate::domain::{NewsletterId, SectionId, SectionKind};

#[derive(Debug, Default, Deserialize)]
pub struct NewSectionBody {
    #[serde(rename = "type", default)]
    kind: SectionKind,
}

#[derive(Debug, Deserialize)]
pub struct ContentBody {
    content: String,
}

/// Move the section at list position `from` to list position `to`
#[derive(Debug, Deserialize)]
pub struct ReorderBody {
    from: usize,
    to: usize,
}

#[tracing::instrument(name = "Add a section", skip(composer, body))]
#[post("")]
async fn add(
    composer: web::Data<Composer>,
    path: web::Path<(NewsletterId,)>,
    body: web::Bytes,
) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();
    let body: NewSectionBody = json_or_default(&body)?;
    let section = composer.add_section(&id, body.kind)?;

    Ok(HttpResponse::Created().json(section))
}

#[tracing::instrument(name = "Edit a section", skip(composer, body))]
#[put("/{section_id}")]
async fn update(
    composer: web::Data<Composer>,
    path: web::Path<(NewsletterId, SectionId)>,
    body: web::Json<ContentBody>,
) -> RestResult<impl Responder> {
    let (id, section_id) = path.into_inner();
    let newsletter = composer.update_section(&id, &section_id, body.0.content)?;

    Ok(HttpResponse::Ok().json(newsletter))
}

#[tracing::instrument(name = "Delete a section", skip(composer))]
#[delete("/{section_id}")]
async fn remove(
    composer: web::Data<Composer>,
    path: web::Path<(NewsletterId, SectionId)>,
) -> RestResult<impl Responder> {
    let (id, section_id) = path.into_inner();
    let newsletter = composer.remove_section(&id, &section_id)?;

    Ok(HttpResponse::Ok().json(newsletter))
}

#[tracing::instrument(name = "Reorder sections", skip(composer))]
#[post("/reorder")]
async fn reorder(
    composer: web::Data<Composer>,
    path: web::Path<(NewsletterId,)>,
    body: web::Json<ReorderBody>,
) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();
    let newsletter = composer.reorder_sections(&id, body.from, body.to)?;

    Ok(HttpResponse::Ok().json(newsletter))
}

/// Section API endpoints, nested under a newsletter
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/newsletters/{id}/sections")
        .service(add)
        .service(reorder)
        .service(update)
        .service(remove)
}
