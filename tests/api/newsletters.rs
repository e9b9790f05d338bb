use chrono::{DateTime, Duration, Utc};

use reqwest::StatusCode;

use serde_json::json;

use tempfile::TempDir;

use newsletter_composer::domain::{Newsletter, NewsletterId, Status};
use newsletter_composer::repo::FileStore;

use crate::helpers::TestApp;

#[tokio::test]
async fn collection_starts_empty() {
    let app = TestApp::spawn().await;

    let res = app.newsletter_list().await.expect("Failed to list");
    assert_eq!(StatusCode::OK, res.status());

    let newsletters: Vec<Newsletter> = res.json().await.expect("Failed to parse list");
    assert!(newsletters.is_empty());
}

#[tokio::test]
async fn create_returns_a_seeded_draft() {
    let app = TestApp::spawn().await;

    let res = app.newsletter_create().await.expect("Failed to create");
    assert_eq!(StatusCode::CREATED, res.status());

    let newsletter: Newsletter = res.json().await.expect("Failed to parse newsletter");
    assert_eq!(Status::Draft, newsletter.status());
    assert_eq!("modern", newsletter.layout);
    assert_eq!(1, newsletter.sections().len());

    let listed: Vec<Newsletter> = app.newsletter_list().await.unwrap().json().await.unwrap();
    assert_eq!(vec![newsletter], listed);
}

#[tokio::test]
async fn unknown_newsletter_is_not_found() {
    let app = TestApp::spawn().await;
    let missing: NewsletterId = "newsletter-missing".parse().unwrap();

    let test_cases = vec![
        ("Fetch", app.newsletter_get(&missing).await),
        ("Subject", app.newsletter_subject(&missing, "Hi").await),
        ("Draft", app.newsletter_draft(&missing).await),
        ("Preview", app.newsletter_preview(&missing).await),
    ];

    for (test_name, res) in test_cases {
        let res = res.expect("Failed to send request");
        assert_eq!(StatusCode::NOT_FOUND, res.status(), "{}", test_name);
    }
}

#[tokio::test]
async fn subject_and_layout_are_updated() {
    let app = TestApp::spawn().await;
    let newsletter = app.create_newsletter().await;

    let res = app
        .newsletter_subject(newsletter.id(), "October update")
        .await
        .expect("Failed to update subject");
    assert_eq!(StatusCode::OK, res.status());

    let res = app
        .newsletter_layout(newsletter.id(), "newsletter")
        .await
        .expect("Failed to update layout");
    assert_eq!(StatusCode::OK, res.status());

    let fetched: Newsletter = app
        .newsletter_get(newsletter.id())
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!("October update", fetched.subject);
    assert_eq!("newsletter", fetched.layout);
    assert_eq!(newsletter.created_at(), fetched.created_at());
}

#[tokio::test]
async fn unknown_layouts_are_rejected() {
    let app = TestApp::spawn().await;
    let newsletter = app.create_newsletter().await;

    let res = app
        .newsletter_layout(newsletter.id(), "glossy")
        .await
        .expect("Failed to send request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());
}

#[tokio::test]
async fn malformed_bodies_are_rejected() {
    let app = TestApp::spawn().await;
    let newsletter = app.create_newsletter().await;

    let test_cases = vec![
        ("Wrong scheduledFor type", json!({ "scheduledFor": 42 })),
        ("Not a date", json!({ "scheduledFor": "tomorrow" })),
    ];

    for (test_name, body) in test_cases {
        let res = app
            .newsletter_schedule(newsletter.id(), &body)
            .await
            .expect("Failed to send request");
        assert_eq!(StatusCode::BAD_REQUEST, res.status(), "{}", test_name);
    }
}

#[tokio::test]
async fn schedule_defaults_to_a_day_ahead() {
    let app = TestApp::spawn().await;
    let newsletter = app.create_newsletter().await;
    let before = Utc::now();

    let res = app
        .newsletter_schedule(newsletter.id(), &json!({}))
        .await
        .expect("Failed to schedule");
    assert_eq!(StatusCode::OK, res.status());

    let scheduled: Newsletter = res.json().await.unwrap();
    assert_eq!(Status::Scheduled, scheduled.status());
    let at = scheduled.scheduled_for().expect("Missing schedule time");
    assert!(at >= before + Duration::hours(24));
    assert!(at <= Utc::now() + Duration::hours(24));
}

#[tokio::test]
async fn schedule_without_a_body_uses_the_default_delay() {
    let app = TestApp::spawn().await;
    let newsletter = app.create_newsletter().await;
    let before = Utc::now();

    let res = app
        .newsletter_schedule_default(newsletter.id())
        .await
        .expect("Failed to schedule");
    assert_eq!(StatusCode::OK, res.status());

    let scheduled: Newsletter = res.json().await.unwrap();
    assert_eq!(Status::Scheduled, scheduled.status());
    let at = scheduled.scheduled_for().expect("Missing schedule time");
    assert!(at >= before + Duration::hours(24));
}

#[tokio::test]
async fn schedule_at_a_given_time_then_save_as_draft() {
    let app = TestApp::spawn().await;
    let newsletter = app.create_newsletter().await;
    let at: DateTime<Utc> = "2030-05-01T09:30:00Z".parse().unwrap();

    let scheduled: Newsletter = app
        .newsletter_schedule(newsletter.id(), &json!({ "scheduledFor": at }))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(Some(at), scheduled.scheduled_for());

    let res = app
        .newsletter_draft(newsletter.id())
        .await
        .expect("Failed to save draft");
    assert_eq!(StatusCode::OK, res.status());

    let draft: Newsletter = res.json().await.unwrap();
    assert_eq!(Status::Draft, draft.status());
    assert_eq!(None, draft.scheduled_for());
}

#[tokio::test]
async fn preview_renders_html_with_the_selected_layout() {
    let app = TestApp::spawn().await;
    let newsletter = app.create_newsletter().await;
    app.newsletter_subject(newsletter.id(), "Fish & Chips")
        .await
        .unwrap();

    let res = app
        .newsletter_preview(newsletter.id())
        .await
        .expect("Failed to preview");
    assert_eq!(StatusCode::OK, res.status());
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = res.text().await.unwrap();
    assert!(html.contains("layout-modern"));
    assert!(html.contains("Fish &amp; Chips"));
    assert!(html.contains("Section 1 content..."));
}

#[tokio::test]
async fn saved_collection_survives_a_restart() {
    let data_dir = TempDir::new().expect("Failed to create data dir");

    let app = TestApp::spawn_with(Box::new(FileStore::new(data_dir.path())));
    let newsletter = app.create_newsletter().await;
    app.newsletter_subject(newsletter.id(), "Persisted")
        .await
        .unwrap();
    let before: Vec<Newsletter> = app.newsletter_list().await.unwrap().json().await.unwrap();

    let restarted = TestApp::spawn_with(Box::new(FileStore::new(data_dir.path())));
    let after: Vec<Newsletter> = restarted
        .newsletter_list()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(before, after);
    assert_eq!("Persisted", after[0].subject);
}

#[tokio::test]
async fn corrupt_saved_data_starts_empty() {
    let data_dir = TempDir::new().expect("Failed to create data dir");
    std::fs::write(
        data_dir.path().join("newsletter-composer-data.json"),
        "not json at all",
    )
    .unwrap();

    let app = TestApp::spawn_with(Box::new(FileStore::new(data_dir.path())));

    let newsletters: Vec<Newsletter> = app.newsletter_list().await.unwrap().json().await.unwrap();
    assert!(newsletters.is_empty());
}
