// ABOUTME: Main library entry point for the seqhub contribution sequencer core
// ABOUTME: Wires the credential parser, GitHub client, normalizer, and fetch worker together
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # seqhub
//!
//! Background fetch/normalize core for a contribution-driven sequencer.
//! seqhub retrieves a user's daily GitHub contribution history over the
//! GraphQL API, normalizes it into a fixed 360-day intensity window, and
//! exposes the result (plus a small fetch status) to an interactive host
//! such as a synthesis module's UI.
//!
//! ## Architecture
//!
//! - **Credential**: positional parsing of `user@token` auth strings
//! - **Providers**: the [`providers::ContributionProvider`] seam and the
//!   GitHub GraphQL implementation
//! - **Normalizer**: variable-length weekly calendar → bounded, ordered,
//!   amplitude-normalized per-day sequence
//! - **Worker**: single-flight background task owning the fetch status
//!   machine and the published [`models::ModuleState`]
//! - **State**: tolerant JSON persistence of the published state (the
//!   credential deliberately never crosses this boundary)
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use seqhub::providers::github::GithubProvider;
//! use seqhub::worker::WorkerHandle;
//!
//! #[tokio::main]
//! async fn main() {
//!     let handle = WorkerHandle::spawn(Arc::new(GithubProvider::new()));
//!     handle.submit_credential("octocat@ghp_exampletoken");
//!     // ... poll handle.current_status() / handle.current_state() ...
//!     handle.shutdown().await;
//! }
//! ```

pub mod constants;
pub mod credential;
pub mod errors;
pub mod logging;
pub mod models;
pub mod normalizer;
pub mod providers;
pub mod state;
pub mod worker;
