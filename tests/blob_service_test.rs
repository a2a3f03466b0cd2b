//! Mock API tests for `BlobUrlService`.

use edu_services_client::prelude::*;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(mock_server: &MockServer) -> BlobUrlService {
    let config = ClientConfig::default().with_base_url(mock_server.uri());
    BlobUrlService::from_config(config).unwrap()
}

#[tokio::test]
async fn test_presigned_url_request_shape_and_raw_body() {
    let mock_server = MockServer::start().await;

    // The request URL is {base}/blob?url=abc123/ with the trailing slash
    // landing inside the query value, because the suffix is query-style.
    Mock::given(method("GET"))
        .and(path("/blob"))
        .and(query_param("url", "abc123/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("https://cdn/x.png"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let url = service.fetch_presigned_url("abc123", None).await.unwrap();

    assert_eq!(url, "https://cdn/x.png");
}

#[tokio::test]
async fn test_presigned_url_forwards_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blob"))
        .and(query_param("url", "abc123/"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("https://cdn/y.png"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let url = service
        .fetch_presigned_url("abc123", Some("secret-token"))
        .await
        .unwrap();

    assert_eq!(url, "https://cdn/y.png");
}

#[tokio::test]
async fn test_presigned_url_body_is_never_json_decoded() {
    // Even a body that happens to be valid JSON comes back verbatim,
    // quotes and all.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blob"))
        .and(query_param("url", "quoted/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"https://cdn/z.png\""))
        .mount(&mock_server)
        .await;

    let service = service_for(&mock_server);
    let url = service.fetch_presigned_url("quoted", None).await.unwrap();

    assert_eq!(url, "\"https://cdn/z.png\"");
}
