use reqwest::StatusCode;

use serde_json::Value;

use crate::helpers::TestApp;

#[tokio::test]
async fn catalog_lists_all_templates_default_first() {
    let app = TestApp::spawn().await;

    let res = app.templates().await.expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let templates: Vec<Value> = res.json().await.expect("Failed to parse catalog");
    let ids: Vec<&str> = templates
        .iter()
        .map(|template| template["id"].as_str().unwrap())
        .collect();

    assert_eq!(vec!["modern", "simple", "newsletter", "creative"], ids);
    assert_eq!("professional", templates[0]["category"]);
    assert_eq!("Modern Professional", templates[0]["name"]);
}
