//! End-to-end tests against a running server.

use std::time::Duration;

use reqwest::StatusCode;

use microversion_parse::config::MicroversionConfig;

mod common;

const VERSIONS: &[&str] = &["1.0", "1.1", "1.2"];

#[tokio::test]
async fn test_no_header_gets_minimum() {
    let server = common::start_server("cats", VERSIONS).await;

    let res = common::client().get(server.url("/")).send().await.expect("server unreachable");
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["openstack-api-version"], "cats 1.0");
    assert_eq!(res.headers()["vary"], "openstack-api-version");

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["version"], "1.0");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_latest_and_explicit() {
    let server = common::start_server("cats", VERSIONS).await;
    let client = common::client();

    let res = client
        .get(server.url("/"))
        .header("OpenStack-API-Version", "cats latest")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["version"], "1.2");
    assert_eq!(body["latest"], true);

    let res = client
        .get(server.url("/"))
        .header("OpenStack-API-Version", "dogs 9.0, cats 1.1")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["openstack-api-version"], "cats 1.1");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_rejections() {
    let server = common::start_server("cats", VERSIONS).await;
    let client = common::client();

    let res = client
        .get(server.url("/"))
        .header("OpenStack-API-Version", "cats 2.0")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_ACCEPTABLE);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["max_version"], "1.2");

    let res = client
        .get(server.url("/"))
        .header("OpenStack-API-Version", "cats one.two")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_not_found_still_echoes() {
    let server = common::start_server("cats", VERSIONS).await;

    let res = common::client()
        .get(server.url("/missing"))
        .header("OpenStack-API-Version", "cats 1.1")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.headers()["openstack-api-version"], "cats 1.1");

    server.shutdown.trigger();
}

#[tokio::test]
async fn test_reload_disables_version() {
    let server = common::start_server("cats", VERSIONS).await;
    let client = common::client();

    let request = || {
        client
            .get(server.url("/"))
            .header("OpenStack-API-Version", "cats 1.1")
            .send()
    };
    assert_eq!(request().await.unwrap().status(), StatusCode::OK);

    let mut config = MicroversionConfig::default();
    config.service.versions = vec!["1.0".into(), "1.2".into()];
    server.config_tx.send(config).unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(request().await.unwrap().status(), StatusCode::NOT_ACCEPTABLE);

    server.shutdown.trigger();
}
