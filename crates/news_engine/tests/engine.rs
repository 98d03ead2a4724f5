use std::sync::Arc;
use std::time::Duration;

use news_engine::{
    EngineEvent, EngineHandle, FailureKind, FetchError, FetchMetadata, FetchOutput, FetchSettings,
    Fetcher, NewsArticle, ProgressSink, RequestId,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WAIT: Duration = Duration::from_secs(5);

/// Collects completions until `count` have arrived, in arrival order.
fn completions(
    engine: &EngineHandle,
    count: usize,
) -> Vec<(RequestId, Result<Vec<NewsArticle>, FetchError>)> {
    let mut done = Vec::new();
    while done.len() < count {
        match engine.recv_timeout(WAIT) {
            Some(EngineEvent::FetchCompleted { request_id, result }) => {
                done.push((request_id, result))
            }
            Some(EngineEvent::Progress(_)) => {}
            None => panic!("timed out waiting for completions, got {done:?}"),
        }
    }
    done
}

/// Answers with one article per request after a per-url delay.
struct DelayedFetcher;

#[async_trait::async_trait]
impl Fetcher for DelayedFetcher {
    async fn fetch(
        &self,
        _request_id: RequestId,
        url: &str,
        _sink: &dyn ProgressSink,
    ) -> Result<FetchOutput, FetchError> {
        let (delay, category) = if url.ends_with("sports") {
            (300, "sports")
        } else {
            (10, "health")
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        let body = json!([{
            "title": category,
            "description": "d",
            "url": url,
            "source": "s",
            "category": category,
        }]);
        let bytes = serde_json::to_vec(&body).unwrap();
        Ok(FetchOutput {
            metadata: FetchMetadata {
                url: url.to_string(),
                final_url: url.to_string(),
                status: 200,
                content_type: Some("application/json".to_string()),
                byte_len: bytes.len() as u64,
            },
            bytes,
        })
    }
}

#[test]
fn completions_arrive_in_network_order_not_issue_order() {
    let engine = EngineHandle::with_fetcher(Arc::new(DelayedFetcher)).expect("engine starts");

    engine.fetch(1, "http://news.test/api/news?category=sports");
    engine.fetch(2, "http://news.test/api/news?category=health");

    let done = completions(&engine, 2);
    let order: Vec<_> = done.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, vec![2, 1]);
    let first_title = done[0].1.as_ref().unwrap()[0].title.clone();
    assert_eq!(first_title, "health");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn engine_decodes_articles_from_the_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news"))
        .and(query_param("category", "business"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "title": "A",
            "description": "d",
            "url": "u",
            "source": "s",
            "category": "business",
        }])))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(FetchSettings::default()).expect("engine starts");
    engine.fetch(1, format!("{}/api/news?category=business", server.uri()));

    let done = tokio::task::spawn_blocking(move || completions(&engine, 1))
        .await
        .unwrap();
    let (request_id, result) = &done[0];
    assert_eq!(*request_id, 1);
    let articles = result.as_ref().expect("decoded");
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "A");
    assert_eq!(articles[0].category, "business");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn engine_reports_non_array_payload_as_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "oops"})))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(FetchSettings::default()).expect("engine starts");
    engine.fetch(9, format!("{}/api/news", server.uri()));

    let done = tokio::task::spawn_blocking(move || completions(&engine, 1))
        .await
        .unwrap();
    let err = done[0].1.clone().unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedPayload);
    assert!(err.message.contains("array"), "{}", err.message);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn engine_reports_http_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(FetchSettings::default()).expect("engine starts");
    engine.fetch(3, format!("{}/api/news", server.uri()));

    let done = tokio::task::spawn_blocking(move || completions(&engine, 1))
        .await
        .unwrap();
    assert_eq!(done[0].0, 3);
    assert_eq!(
        done[0].1.as_ref().unwrap_err().kind,
        FailureKind::HttpStatus(500)
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn engine_follows_redirect_and_accepts_unfiltered_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/news"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("Location", format!("{}/v2/news", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "title": "A",
            "description": null,
            "url": "u",
            "source": "s",
            "category": null,
        }])))
        .mount(&server)
        .await;

    let engine = EngineHandle::new(FetchSettings::default()).expect("engine starts");
    engine.fetch(4, format!("{}/api/news", server.uri()));

    let done = tokio::task::spawn_blocking(move || completions(&engine, 1))
        .await
        .unwrap();
    let articles = done[0].1.as_ref().expect("decoded after redirect");
    assert_eq!(articles[0].title, "A");
    assert_eq!(articles[0].category, "");
    assert_eq!(articles[0].description, "");
}
