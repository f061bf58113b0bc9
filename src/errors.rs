// ABOUTME: Fetch error taxonomy shared by the GitHub client and the fetch worker
// ABOUTME: Classifies failures as transport, HTTP status, or decode errors with owned payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Errors produced by a contribution fetch.
///
/// Variants carry owned strings rather than source errors so a failed
/// fetch's cause can be cloned into shared worker state and inspected
/// after the fact, instead of collapsing into an opaque status flag.
///
/// An empty token is deliberately not represented here: the worker
/// short-circuits to `Idle` before a client is ever invoked, so "no
/// token" is a no-op, not a failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// DNS, connect, TLS, or timeout failure before a response arrived
    #[error("transport failure: {0}")]
    Transport(String),

    /// The API answered with a non-success status
    #[error("GitHub API returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code of the response
        status: u16,
        /// Response body, useful for diagnosing auth and scope problems
        body: String,
    },

    /// The response arrived but was not the expected shape
    #[error("failed to decode contribution response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
