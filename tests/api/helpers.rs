use std::net::TcpListener;

use reqwest::{Client, Method, Response};

use serde::Serialize;
use serde_json::json;

use newsletter_composer::app;
use newsletter_composer::composer::Composer;
use newsletter_composer::domain::{Newsletter, NewsletterId, SectionId};
use newsletter_composer::repo::{KeyValueStore, MemoryStore};
use newsletter_composer::settings::ComposerSettings;

#[derive(Debug, Serialize)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

pub struct TestApp {
    addr: String,

    pub client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(Box::new(MemoryStore::new()))
    }

    pub fn spawn_with(store: Box<dyn KeyValueStore>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to listen on random port");
        let port = listener.local_addr().unwrap().port();

        let addr = format!("http://127.0.0.1:{}", port);

        let composer = Composer::load(store, ComposerSettings::default());

        let server = app::run(listener, composer).expect("Failed to spawn app instance");
        let _ = tokio::spawn(server);

        let client = Client::new();

        Self { addr, client }
    }

    pub fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", &self.addr, url);
        self.client.request(method, url)
    }

    pub async fn health_check(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "health_check").send().await
    }

    pub async fn templates(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "templates").send().await
    }

    pub async fn newsletter_list(&self) -> reqwest::Result<Response> {
        self.request(Method::GET, "newsletters").send().await
    }

    pub async fn newsletter_create(&self) -> reqwest::Result<Response> {
        self.request(Method::POST, "newsletters").send().await
    }

    /// Create a newsletter and parse the response, for tests that only need one to exist
    pub async fn create_newsletter(&self) -> Newsletter {
        self.newsletter_create()
            .await
            .expect("Failed to send request to create newsletter")
            .json()
            .await
            .expect("Failed to parse created newsletter")
    }

    pub async fn newsletter_get(&self, id: &NewsletterId) -> reqwest::Result<Response> {
        self.request(Method::GET, &format!("newsletters/{}", id))
            .send()
            .await
    }

    pub async fn newsletter_subject(
        &self,
        id: &NewsletterId,
        subject: &str,
    ) -> reqwest::Result<Response> {
        self.request(Method::PUT, &format!("newsletters/{}/subject", id))
            .json(&json!({ "subject": subject }))
            .send()
            .await
    }

    pub async fn newsletter_layout(
        &self,
        id: &NewsletterId,
        layout: &str,
    ) -> reqwest::Result<Response> {
        self.request(Method::PUT, &format!("newsletters/{}/layout", id))
            .json(&json!({ "layout": layout }))
            .send()
            .await
    }

    pub async fn newsletter_draft(&self, id: &NewsletterId) -> reqwest::Result<Response> {
        self.request(Method::POST, &format!("newsletters/{}/draft", id))
            .send()
            .await
    }

    pub async fn newsletter_schedule(
        &self,
        id: &NewsletterId,
        body: &serde_json::Value,
    ) -> reqwest::Result<Response> {
        self.request(Method::POST, &format!("newsletters/{}/schedule", id))
            .json(body)
            .send()
            .await
    }

    /// Schedule without a body, as the composer's schedule button does
    pub async fn newsletter_schedule_default(&self, id: &NewsletterId) -> reqwest::Result<Response> {
        self.request(Method::POST, &format!("newsletters/{}/schedule", id))
            .send()
            .await
    }

    pub async fn newsletter_preview(&self, id: &NewsletterId) -> reqwest::Result<Response> {
        self.request(Method::GET, &format!("newsletters/{}/preview", id))
            .send()
            .await
    }

    pub async fn section_add(
        &self,
        id: &NewsletterId,
        body: &serde_json::Value,
    ) -> reqwest::Result<Response> {
        self.request(Method::POST, &format!("newsletters/{}/sections", id))
            .json(body)
            .send()
            .await
    }

    pub async fn section_add_default(&self, id: &NewsletterId) -> reqwest::Result<Response> {
        self.request(Method::POST, &format!("newsletters/{}/sections", id))
            .send()
            .await
    }

    pub async fn section_update(
        &self,
        id: &NewsletterId,
        section_id: &SectionId,
        content: &str,
    ) -> reqwest::Result<Response> {
        self.request(
            Method::PUT,
            &format!("newsletters/{}/sections/{}", id, section_id),
        )
        .json(&json!({ "content": content }))
        .send()
        .await
    }

    pub async fn section_delete(
        &self,
        id: &NewsletterId,
        section_id: &SectionId,
    ) -> reqwest::Result<Response> {
        self.request(
            Method::DELETE,
            &format!("newsletters/{}/sections/{}", id, section_id),
        )
        .send()
        .await
    }

    pub async fn sections_reorder(
        &self,
        id: &NewsletterId,
        reorder: &Reorder,
    ) -> reqwest::Result<Response> {
        self.request(Method::POST, &format!("newsletters/{}/sections/reorder", id))
            .json(reorder)
            .send()
            .await
    }
}
