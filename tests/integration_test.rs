//! End-to-end tests of the client against a mock Pantip server.

use pantip_scraper::PantipClient;
use pantip_scraper::models::{Config, SearchQuery};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOPIC_HTML: &str = r#"<html><body>
    <div class="display-post-wrapper main-post type">
        <h2 class="display-post-title">ชานมไข่มุก</h2>
        <div class="display-post-story">ร้านนี้อร่อย {{em}}มาก{{eem}} &amp; ราคาถูก</div>
    </div>
    <div class="display-post-wrapper section-comment">
        <div class="display-post-story">comment body</div>
    </div>
</body></html>"#;

fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.scraper.auth_token = "Basic test-token".to_string();
    config.scraper.user_agents = vec!["integration-agent".to_string()];
    config.scraper.topic_base_url = format!("{}/topic/", server.uri());
    config.scraper.comment_api = format!("{}/forum/topic/render_comments", server.uri());
    config.scraper.search_api = format!("{}/api/search-service/search/getresult", server.uri());
    config
}

#[tokio::test]
async fn topic_detail_is_fetched_with_auth_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topic/43000001"))
        .and(header("ptauthorize", "Basic test-token"))
        .and(header("user-agent", "integration-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TOPIC_HTML))
        .expect(2)
        .mount(&server)
        .await;

    let client = PantipClient::new(&config_for(&server)).unwrap();

    let raw = client.get_topic_detail("43000001").await;
    assert!(raw.contains("ร้านนี้อร่อย"));
    assert!(!raw.contains("comment body"));

    let clean = client.get_clean_topic_detail("43000001", false, None).await;
    assert_eq!(clean, "ร้านนี้อร่อย มาก & ราคาถูก");
}

#[tokio::test]
async fn topic_detail_is_empty_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/topic/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = PantipClient::new(&config_for(&server)).unwrap();
    assert_eq!(client.get_topic_detail("1").await, "");
}

#[tokio::test]
async fn all_comment_pages_are_concatenated_in_order() {
    let server = MockServer::start().await;
    for (page, ids) in [(1, [1, 2]), (2, [3, 4])] {
        Mock::given(method("GET"))
            .and(path("/forum/topic/render_comments"))
            .and(query_param("tid", "43000001"))
            .and(query_param("param", format!("page{page}")))
            .and(header("x-requested-with", "XMLHttpRequest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "paging": {"max_comments": 150},
                "comments": [{"comment_no": ids[0]}, {"comment_no": ids[1]}],
            })))
            .mount(&server)
            .await;
    }

    let client = PantipClient::new(&config_for(&server)).unwrap();

    let page = client.get_topic_comments("43000001", 2).await;
    assert_eq!(page.error, None);
    assert_eq!(page.page_count, 2);

    let all = client.get_all_comments("43000001").await;
    let numbers: Vec<i64> = all
        .iter()
        .filter_map(|c| c["comment_no"].as_i64())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn search_posts_query_and_decodes_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search-service/search/getresult"))
        .and(header("ptauthorize", "Basic test-token"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "keyword": "ชานม",
            "page": 1,
            "rooms": ["food"],
            "timebias": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "total": "พบ 1,234 กระทู้",
            "data": [{"id": "43000001"}, {"id": 43000002}],
        })))
        .mount(&server)
        .await;

    let client = PantipClient::new(&config_for(&server)).unwrap();
    let query = SearchQuery::new("ชานม").rooms(["food"]).sort_by_time(true);

    let result = client.search(&query).await;
    assert_eq!(result.error, None);
    assert_eq!(result.total_topics, 1234);
    assert_eq!(result.topic_ids, vec!["43000001", "43000002"]);
    assert_eq!(result.data.len(), 2);
}

#[tokio::test]
async fn search_reports_service_error_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/search-service/search/getresult"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error_message": "keyword too short",
        })))
        .mount(&server)
        .await;

    let client = PantipClient::new(&config_for(&server)).unwrap();

    let result = client.search(&SearchQuery::new("x")).await;
    assert!(result.data.is_empty());
    assert_eq!(result.total_topics, 0);
    assert!(result.error.unwrap().contains("keyword too short"));

    assert_eq!(client.count_search_results("x", &[]).await, 0);
    assert!(client.get_search_topic_ids(&SearchQuery::new("x")).await.is_empty());
}
