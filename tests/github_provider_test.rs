// ABOUTME: Wire-level tests for the GitHub GraphQL provider against a mock server
// ABOUTME: Covers viewer and named-user scoping, auth header, and the error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use seqhub::credential::Credential;
use seqhub::errors::FetchError;
use seqhub::providers::github::{GithubConfig, GithubProvider};
use seqhub::providers::ContributionProvider;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn provider_for(server: &MockServer) -> GithubProvider {
    GithubProvider::with_config(GithubConfig {
        graphql_url: format!("{}/graphql", server.uri()),
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(5),
    })
}

fn calendar_body(scope: &str) -> serde_json::Value {
    let account = json!({
        "contributionsCollection": {
            "startedAt": "2024-09-01T00:00:00Z",
            "contributionCalendar": {
                "weeks": [
                    { "contributionDays": [
                        { "contributionCount": 2 },
                        { "contributionCount": 0 },
                        { "contributionCount": 5 }
                    ]}
                ]
            }
        }
    });
    let mut data = serde_json::Map::new();
    data.insert(scope.to_owned(), account);
    json!({ "data": data })
}

#[tokio::test]
async fn viewer_fetch_sends_bearer_token_and_decodes_calendar() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer tok123"))
        .and(body_string_contains("viewer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body("viewer")))
        .expect(1)
        .mount(&server)
        .await;

    let data = provider_for(&server)
        .fetch_contributions(&Credential::parse("tok123"))
        .await
        .expect("fetch should succeed");

    assert_eq!(data.started_at, "2024-09-01T00:00:00Z");
    assert_eq!(data.calendar.weeks.len(), 1);
    let counts: Vec<u32> = data.calendar.weeks[0].days.iter().map(|d| d.count).collect();
    assert_eq!(counts, vec![2, 0, 5]);
}

#[tokio::test]
async fn named_user_fetch_scopes_query_with_variable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_string_contains("user(login: $username)"))
        .and(body_string_contains("\"octocat\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(calendar_body("user")))
        .expect(1)
        .mount(&server)
        .await;

    let data = provider_for(&server)
        .fetch_contributions(&Credential::parse("octocat@tok123"))
        .await
        .expect("fetch should succeed");

    assert_eq!(data.calendar.day_count(), 3);
}

#[tokio::test]
async fn non_success_status_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .fetch_contributions(&Credential::parse("octocat@wrong"))
        .await
        .expect_err("401 must fail");

    match err {
        FetchError::Http { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("bad credentials"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn graphql_errors_with_null_data_map_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "Bad credentials" }]
        })))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .fetch_contributions(&Credential::parse("tok123"))
        .await
        .expect_err("null data must fail");

    match err {
        FetchError::Decode(message) => assert!(message.contains("Bad credentials")),
        other => panic!("expected Decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = provider_for(&server)
        .fetch_contributions(&Credential::parse("tok123"))
        .await
        .expect_err("garbage body must fail");

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn unreachable_endpoint_maps_to_transport_error() {
    let provider = GithubProvider::with_config(GithubConfig {
        graphql_url: "http://127.0.0.1:1/graphql".to_owned(),
        timeout: Duration::from_secs(2),
        connect_timeout: Duration::from_secs(2),
    });

    let err = provider
        .fetch_contributions(&Credential::parse("tok123"))
        .await
        .expect_err("closed port must fail");

    assert!(matches!(err, FetchError::Transport(_)));
}
