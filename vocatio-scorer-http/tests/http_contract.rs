//! Contract tests against a canned in-process HTTP endpoint.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use vocatio::{JudgmentStage, Session, SubmitError};
use vocatio_scorer_http::HttpScorer;

const REPORT_BODY: &str = r#"{
    "traits": ["proto", "ops", "debug"],
    "user_vector": [0.2, 0.9, 0.5],
    "top": [
        { "role": "DevOps Engineer", "score": 0.87, "vector": [0.1, 0.8, 0.4] },
        { "role": "Backend Developer", "score": 0.81, "vector": [0.3, 0.6, 0.5] }
    ]
}"#;

/// Serve exactly one request with a fixed response, returning the raw
/// request for assertions.
async fn one_shot_endpoint(
    status_line: &'static str,
    body: &'static str,
) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fixture");
    let addr = listener.local_addr().expect("fixture addr");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = stream.read(&mut buf).await.expect("read request");
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&request) {
                break;
            }
        }
        let response = format!(
            "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.expect("write response");
        stream.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (addr, handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let Some(header_end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let headers = String::from_utf8_lossy(&raw[..header_end]);
    let content_length = headers.lines().find_map(|line| {
        let (name, value) = line.split_once(':')?;
        name.trim()
            .eq_ignore_ascii_case("content-length")
            .then(|| value.trim().parse::<usize>().ok())
            .flatten()
    });
    match content_length {
        Some(len) => raw.len() >= header_end + 4 + len,
        None => true,
    }
}

fn request_body(raw: &str) -> serde_json::Value {
    let (_, body) = raw.split_once("\r\n\r\n").expect("request has a body");
    serde_json::from_str(body).expect("request body is JSON")
}

fn endpoint_url(addr: SocketAddr) -> reqwest::Url {
    reqwest::Url::parse(&format!("http://{addr}/api/predict")).expect("valid url")
}

fn completed_session() -> Session {
    let mut session = Session::new(example_quizzes::aptitude::bank().sequence());
    while !session.is_complete() {
        match session.stage() {
            JudgmentStage::Best => session.record("1"),
            JudgmentStage::Second => session.record("2"),
            JudgmentStage::None => session.record("1"),
        };
    }
    session
}

#[tokio::test]
async fn scores_a_completed_session() {
    let (addr, request) = one_shot_endpoint("HTTP/1.1 200 OK", REPORT_BODY).await;

    let mut session = completed_session();
    let scorer = HttpScorer::new(endpoint_url(addr));
    let report = session.submit(&scorer).await.expect("submission succeeds");

    assert_eq!(report.traits, vec!["proto", "ops", "debug"]);
    assert_eq!(report.user_vector, vec![0.2, 0.9, 0.5]);
    assert_eq!(report.top.len(), 2);
    assert_eq!(report.top[0].role, "DevOps Engineer");

    let raw = request.await.expect("fixture finished");
    assert!(raw.starts_with("POST /api/predict HTTP/1.1"));

    let body = request_body(&raw);
    assert_eq!(body["answers"]["FC01"], serde_json::json!("1"));
    assert_eq!(
        body["answers"]["SJT01"],
        serde_json::json!({ "best": "1", "second": "2" })
    );
    assert!(body.get("top_k").is_none());
}

#[tokio::test]
async fn sends_top_k_when_configured() {
    let (addr, request) = one_shot_endpoint("HTTP/1.1 200 OK", REPORT_BODY).await;

    let mut session = completed_session();
    let scorer = HttpScorer::new(endpoint_url(addr)).top_k(3);
    session.submit(&scorer).await.expect("submission succeeds");

    let body = request_body(&request.await.expect("fixture finished"));
    assert_eq!(body["top_k"], serde_json::json!(3));
}

#[tokio::test]
async fn non_success_status_is_a_network_error() {
    let (addr, request) =
        one_shot_endpoint("HTTP/1.1 500 Internal Server Error", "{}").await;

    let mut session = completed_session();
    let scorer = HttpScorer::new(endpoint_url(addr));
    let err = session.submit(&scorer).await.unwrap_err();

    assert!(matches!(err, SubmitError::Network(_)));
    // The sheet survives the failure; a retry would reuse it unchanged.
    assert!(session.is_complete());

    request.await.expect("fixture finished");
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let mut session = completed_session();
    let scorer = HttpScorer::new(endpoint_url(addr));
    let err = session.submit(&scorer).await.unwrap_err();

    assert!(matches!(err, SubmitError::Network(_)));
    assert!(session.is_complete());
}
