//! HTTP client tests against a mock server.

use std::time::Duration;

use bluefeed::{
    domain::{
        fragment::{FragmentQuery, FragmentScope},
        post::RecordId,
    },
    infrastructure::api::{ApiClient, ApiError},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(format!("{}/api", server.uri()), Duration::from_secs(2))
        .expect("failed to build client")
}

fn post_json(id: i64, posted_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Post {id}"),
        "content": "<p>Hotfix notes</p>",
        "summary": null,
        "sourceUrl": format!("https://forums.example.com/t/{id}"),
        "postedAt": posted_at,
        "author": { "id": 7, "name": "Kaivax", "role": "Community Manager" },
        "region": { "id": 1, "name": "US" },
        "forumCategory": { "id": "news", "name": "News" }
    })
}

fn fragment_json(post_id: i64) -> serde_json::Value {
    json!({
        "id": format!("f{post_id}"),
        "postId": post_id,
        "postedAt": "2025-03-01T12:00:00Z",
        "text": "Shaman changes",
        "textHtml": "<mark>Shaman</mark> changes",
        "matchedTerms": ["shaman"],
        "scope": "PTR",
        "postTitle": "Class Tuning",
        "authorName": "Kaivax",
        "region": "US",
        "category": "News",
        "sourceUrl": "https://forums.example.com/t/1",
        "isPvP": true
    })
}

fn query(offset: u64, scope: FragmentScope) -> FragmentQuery {
    FragmentQuery {
        query: "shaman".to_string(),
        limit: 2,
        offset,
        dedupe: true,
        scope,
    }
}

#[tokio::test]
async fn test_fetch_posts_sends_page_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/BluePosts"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            post_json(11, "2025-03-01T10:00:00Z"),
            post_json(12, "2025-03-01T11:00:00Z"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = client(&server).fetch_posts(2, 10).await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, RecordId::Number(11));
    assert_eq!(posts[0].author.role.as_deref(), Some("Community Manager"));
    assert_eq!(posts[1].forum_category.id, RecordId::Text("news".into()));
}

#[tokio::test]
async fn test_search_fragments_reads_pagination_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search/fragments"))
        .and(query_param("query", "shaman"))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "0"))
        .and(query_param("dedupe", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Next-Offset", "2")
                .insert_header("X-Total-Count", "5")
                .set_body_json(json!([fragment_json(1), fragment_json(2)])),
        )
        .mount(&server)
        .await;

    let page = client(&server)
        .search_fragments(&query(0, FragmentScope::Any))
        .await
        .unwrap();

    assert_eq!(page.fragments.len(), 2);
    assert_eq!(page.next_offset, Some(2));
    assert_eq!(page.total, 5);
    let first = &page.fragments[0];
    assert!(first.is_pvp);
    assert_eq!(first.scope_label(), "PTR");
    assert_eq!(first.body(), "<mark>Shaman</mark> changes");
}

#[tokio::test]
async fn test_search_fragments_without_headers_is_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search/fragments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([fragment_json(3)])))
        .mount(&server)
        .await;

    let page = client(&server)
        .search_fragments(&query(4, FragmentScope::Any))
        .await
        .unwrap();

    assert_eq!(page.next_offset, None);
    assert_eq!(page.total, 5);
}

#[tokio::test]
async fn test_scope_param_only_sent_when_narrowed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search/fragments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    let api = client(&server);

    api.search_fragments(&query(0, FragmentScope::Any))
        .await
        .unwrap();
    api.search_fragments(&query(0, FragmentScope::Classic))
        .await
        .unwrap();

    let requests: Vec<Request> = server.received_requests().await.unwrap();
    let scopes: Vec<Option<String>> = requests
        .iter()
        .map(|request| {
            request
                .url
                .query_pairs()
                .find(|(name, _)| name == "scope")
                .map(|(_, value)| value.into_owned())
        })
        .collect();
    assert_eq!(scopes, vec![None, Some("classic".to_string())]);
}

#[tokio::test]
async fn test_fetch_topics() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/topics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["Delves", "Hotfixes"])))
        .mount(&server)
        .await;

    let topics = client(&server).fetch_topics().await.unwrap();

    assert_eq!(topics, vec!["Delves".to_string(), "Hotfixes".to_string()]);
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/BluePosts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = client(&server).fetch_posts(1, 10).await.unwrap_err();

    match error {
        ApiError::Status { status, url } => {
            assert_eq!(status.as_u16(), 500);
            assert!(url.contains("/api/BluePosts"));
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/topics"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let error = client(&server).fetch_topics().await.unwrap_err();

    assert!(matches!(error, ApiError::Network(_)));
}
