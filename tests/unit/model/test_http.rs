use crate::common::TEST_TOKEN;
use buyback_client::application::config::Config;
use buyback_client::model::http::{HttpClient, make_http_request};
use buyback_client::model::requests::ApiRequest;
use mockito::{Matcher, Server};
use reqwest::Method;
use serde_json::json;
use tokio_test::block_on;

#[test]
fn url_is_built_from_configuration() {
    let client = HttpClient::new(Config::with_token(TEST_TOKEN)).unwrap();
    assert_eq!(
        client.url("/orders/abc"),
        "https://preprod.backmarket.fr/ws/buyback/v1/orders/abc"
    );
}

#[test]
fn execute_returns_error_statuses_as_responses() {
    let mut server = Server::new();
    server
        .mock("GET", "/ws/buyback/v1/orders/x")
        .with_status(500)
        .with_body("boom")
        .create();

    let client =
        HttpClient::new(Config::with_token(TEST_TOKEN).with_base_url(server.url())).unwrap();
    let response = block_on(client.execute(&ApiRequest::get("/orders/x"))).unwrap();

    assert_eq!(response.status_code(), 500);
    assert_eq!(response.text(), "boom");
}

#[tokio::test]
async fn execute_checked_raises_error_statuses() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/ws/buyback/v1/orders/x")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let client =
        HttpClient::new(Config::with_token(TEST_TOKEN).with_base_url(server.url())).unwrap();
    let err = client
        .execute_checked(&ApiRequest::get("/orders/x"))
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
}

#[tokio::test]
async fn make_http_request_sends_query_and_body_once() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/anything")
        .match_query(Matcher::UrlEncoded("a".into(), "1".into()))
        .match_body(Matcher::Json(json!({"status": "sent"})))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let client = reqwest::Client::new();
    let body = json!({"status": "sent"});
    let response = make_http_request(
        &client,
        Method::PUT,
        &format!("{}/anything", server.url()),
        &[("a".to_string(), "1".to_string())],
        Some(&body),
    )
    .await
    .unwrap();

    assert!(response.is_success());
    mock.assert_async().await;
}
