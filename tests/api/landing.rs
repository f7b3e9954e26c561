use crate::support::start_server;

#[tokio::test]
async fn root_serves_index_html() {
    let server = start_server().await;

    let resp = server.client.get(server.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let body = resp.text().await.unwrap();
    assert!(body.contains("<title>Workout Log</title>"));
}

#[tokio::test]
async fn missing_index_is_404() {
    let server = start_server().await;
    std::fs::remove_file(server.static_dir.join("index.html")).unwrap();

    let resp = server.client.get(server.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
}
