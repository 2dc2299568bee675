//! End-to-end requests against a one-shot HTTP server on 127.0.0.1.

use lab_client::{ApiClient, ClientError};
use lab_config::ApiConfig;
use lab_core::entities::Profile;
use pretty_assertions::assert_eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve exactly one request with the given status line and body, and return
/// the raw request text the client sent.
async fn serve_once(status: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.expect("read");
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&request) {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write");
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}"), handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

fn client_for(base_url: String) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url,
        timeout_secs: 5,
        ..ApiConfig::default()
    })
    .expect("client should build")
}

#[tokio::test]
async fn search_returns_researchers_in_server_order() {
    let (base, server) = serve_once(
        "200 OK",
        r#"[{"user_id":"b","email":"b@x","name":"Second"},{"user_id":"a","email":"a@x","name":"First"}]"#,
    )
    .await;

    let results = client_for(base).search_researchers("stem cell").await.unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Second", "First"]);

    let request = server.await.unwrap();
    assert!(
        request.starts_with("GET /api/v1/search?query=stem%20cell HTTP/1.1"),
        "{request}"
    );
}

#[tokio::test]
async fn search_non_success_is_api_error() {
    let (base, _server) = serve_once("503 Service Unavailable", "down").await;
    let err = client_for(base).search_researchers("x").await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 503, .. }), "{err}");
}

#[tokio::test]
async fn search_malformed_body_is_parse_error() {
    let (base, _server) = serve_once("200 OK", r#"{"not":"an array"}"#).await;
    let err = client_for(base).search_researchers("x").await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)), "{err}");
}

#[tokio::test]
async fn save_profile_sends_bearer_token_and_json_body() {
    let (base, server) = serve_once("200 OK", "{}").await;
    let profile = Profile::for_user("Test User", "test@example.com");

    client_for(base)
        .save_profile("mock-jwt-token", &profile)
        .await
        .unwrap();

    let request = server.await.unwrap();
    assert!(request.starts_with("PUT /api/profile HTTP/1.1"), "{request}");
    let lower = request.to_ascii_lowercase();
    assert!(lower.contains("authorization: bearer mock-jwt-token"), "{request}");
    assert!(lower.contains("content-type: application/json"), "{request}");
    assert!(request.contains(r#""email":"test@example.com""#), "{request}");
}

#[tokio::test]
async fn save_profile_rejection_is_api_error() {
    let (base, _server) = serve_once("401 Unauthorized", "").await;
    let err = client_for(base)
        .save_profile("bad", &Profile::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 401, .. }));
}

#[tokio::test]
async fn unreachable_backend_is_http_error() {
    // Bind then drop to obtain a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(format!("http://{addr}"))
        .search_researchers("x")
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http(_)), "{err}");
}
