//! tests/pages/alias.rs
//! Ensures that `/hello.html` serves the exact same page as `/`.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn hello_html_matches_root() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = reqwest::Client::new();

    let root_resp: reqwest::Response = client
        .get(format!("{}/", base_url))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(root_resp.status(), StatusCode::OK);
    let root_body: String = root_resp.text().await.unwrap();

    let alias_resp: reqwest::Response = client
        .get(format!("{}/hello.html", base_url))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(alias_resp.status(), StatusCode::OK);
    let alias_body: String = alias_resp.text().await.unwrap();

    // Both paths are mapped to the same handler, so the bodies are identical.
    assert_eq!(root_body, alias_body);
}
