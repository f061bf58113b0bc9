// ABOUTME: Provider abstraction for contribution calendar sources
// ABOUTME: Defines the async fetch seam the worker depends on, plus the GitHub implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Contribution providers
//!
//! The [`ContributionProvider`] trait is the seam between the fetch worker
//! and the network. Production code uses [`github::GithubProvider`]; tests
//! substitute scripted implementations to drive the worker state machine
//! deterministically.

pub mod github;

use crate::credential::Credential;
use crate::errors::FetchError;
use crate::models::RawCalendar;
use async_trait::async_trait;

/// Result of one successful contribution fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionData {
    /// ISO-8601 start of the contribution window reported by the source
    pub started_at: String,
    /// Raw weekly calendar in chronological order
    pub calendar: RawCalendar,
}

/// A source of contribution calendars.
///
/// One call per fetch, no internal retry: retry policy belongs to the
/// caller. Implementations may assume the credential carries a non-empty
/// token; the worker short-circuits empty tokens before this seam.
#[async_trait]
pub trait ContributionProvider: Send + Sync {
    /// Fetch the contribution calendar for the credential's user, or for
    /// the authenticated viewer when no username is present.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on transport failure, a non-success HTTP
    /// status, or a response that does not match the expected shape.
    async fn fetch_contributions(
        &self,
        credential: &Credential,
    ) -> Result<ContributionData, FetchError>;
}
