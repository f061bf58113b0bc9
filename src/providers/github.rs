// ABOUTME: GitHub GraphQL integration fetching the contribution calendar
// ABOUTME: Builds the viewer/user scoped query, posts it with bearer auth, and decodes the reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{ContributionData, ContributionProvider};
use crate::constants::{env_config, http};
use crate::credential::Credential;
use crate::errors::FetchError;
use crate::models::{RawCalendar, RawDay, RawWeek};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fields selected from `contributionsCollection` for every fetch
const CONTRIBUTIONS_SELECTION: &str = "contributionsCollection { startedAt contributionCalendar { weeks { contributionDays { contributionCount } } } }";

/// Configuration for GitHub GraphQL access
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Full GraphQL endpoint URL
    pub graphql_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connection timeout
    pub connect_timeout: Duration,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            graphql_url: env_config::github_graphql_url(),
            timeout: Duration::from_secs(env_config::http_timeout_secs()),
            connect_timeout: Duration::from_secs(env_config::http_connect_timeout_secs()),
        }
    }
}

/// Shared pooled HTTP client for default-configured providers
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

fn build_client(config: &GithubConfig) -> Client {
    ClientBuilder::new()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(http::USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Contribution provider backed by the GitHub GraphQL API
pub struct GithubProvider {
    client: Client,
    config: GithubConfig,
}

impl Default for GithubProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GithubProvider {
    /// Create a provider with environment-derived configuration and the
    /// shared pooled client.
    #[must_use]
    pub fn new() -> Self {
        let config = GithubConfig::default();
        let client = SHARED_CLIENT.get_or_init(|| build_client(&config)).clone();
        Self { client, config }
    }

    /// Create a provider with explicit configuration. Builds a dedicated
    /// client so endpoint and timeout overrides (e.g. in tests) take effect.
    #[must_use]
    pub fn with_config(config: GithubConfig) -> Self {
        let client = build_client(&config);
        Self { client, config }
    }

    /// Build the GraphQL request body, scoped to the authenticated viewer
    /// when no username is given, else to the named user. The username
    /// travels as a GraphQL variable, never spliced into the query text.
    fn build_request_body(username: Option<&str>) -> Value {
        match username {
            Some(username) => json!({
                "query": format!(
                    "query($username: String!) {{ user(login: $username) {{ {CONTRIBUTIONS_SELECTION} }} }}"
                ),
                "variables": { "username": username },
            }),
            None => json!({
                "query": format!("query {{ viewer {{ {CONTRIBUTIONS_SELECTION} }} }}"),
            }),
        }
    }
}

#[async_trait]
impl ContributionProvider for GithubProvider {
    async fn fetch_contributions(
        &self,
        credential: &Credential,
    ) -> Result<ContributionData, FetchError> {
        let username = credential.effective_username();
        let body = Self::build_request_body(username);
        debug!(scope = username.unwrap_or("viewer"), "sending contribution query");

        let response = self
            .client
            .post(&self.config.graphql_url)
            .bearer_auth(&credential.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|err| {
                warn!("failed to read error response body: {err}");
                "unable to read error response".to_owned()
            });
            return Err(FetchError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let decoded: GraphQlResponse = serde_json::from_str(&text)?;

        let graphql_errors = decoded
            .errors
            .unwrap_or_default()
            .into_iter()
            .map(|err| err.message)
            .collect::<Vec<_>>()
            .join("; ");

        let account = match username {
            Some(_) => decoded.data.and_then(|data| data.user),
            None => decoded.data.and_then(|data| data.viewer),
        };

        let Some(account) = account else {
            return Err(FetchError::Decode(if graphql_errors.is_empty() {
                "response is missing contribution data".to_owned()
            } else {
                format!("GraphQL error: {graphql_errors}")
            }));
        };

        let collection = account.contributions_collection;
        let calendar = RawCalendar::from(collection.contribution_calendar);
        info!(
            days = calendar.day_count(),
            started_at = %collection.started_at,
            "fetched contribution calendar"
        );

        Ok(ContributionData {
            started_at: collection.started_at,
            calendar,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    viewer: Option<Account>,
    user: Option<Account>,
}

#[derive(Debug, Deserialize)]
struct Account {
    #[serde(rename = "contributionsCollection")]
    contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize)]
struct ContributionsCollection {
    #[serde(rename = "startedAt")]
    started_at: String,
    #[serde(rename = "contributionCalendar")]
    contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Deserialize)]
struct ContributionCalendar {
    weeks: Vec<CalendarWeek>,
}

#[derive(Debug, Deserialize)]
struct CalendarWeek {
    #[serde(rename = "contributionDays")]
    contribution_days: Vec<CalendarDay>,
}

#[derive(Debug, Deserialize)]
struct CalendarDay {
    #[serde(rename = "contributionCount")]
    contribution_count: u32,
}

impl From<ContributionCalendar> for RawCalendar {
    fn from(calendar: ContributionCalendar) -> Self {
        Self {
            weeks: calendar
                .weeks
                .into_iter()
                .map(|week| RawWeek {
                    days: week
                        .contribution_days
                        .into_iter()
                        .map(|day| RawDay {
                            count: day.contribution_count,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}
