//! tests/pages/root.rs
//! Ensures that `/` serves the rendered hello.html page.

// Include the helper module defined in tests/mod.rs.
#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn root_serves_hello_page() {
    // Use the helper function to spawn the app.
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::OK);

    // The page is served as HTML.
    let content_type: String = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(
        content_type.starts_with("text/html"),
        "unexpected content type: {content_type}"
    );

    let body: String = resp.text().await.unwrap();
    assert!(body.contains("Hello World!"));

    // The template has no variables, so no placeholders may survive rendering.
    assert!(!body.contains("{{"));
    assert!(!body.contains("{%"));
}
