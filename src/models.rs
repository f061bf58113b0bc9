// ABOUTME: Core domain models for contribution calendars and published worker state
// ABOUTME: Defines the raw calendar shapes, fetch status machine, and persisted module state
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// One day's activity count as reported by the remote calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawDay {
    /// Number of contributions recorded on this day
    pub count: u32,
}

/// One calendar week, days in chronological order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawWeek {
    /// Days of the week, oldest first
    pub days: Vec<RawDay>,
}

/// The raw weekly contribution calendar, weeks in chronological order.
///
/// Transient: produced by a provider, consumed by the normalizer, and
/// discarded. Only the normalized sequence is retained or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawCalendar {
    /// Weeks of the calendar, oldest first
    pub weeks: Vec<RawWeek>,
}

impl RawCalendar {
    /// Build a calendar from plain per-week count slices, oldest first.
    /// Mostly useful in tests and examples.
    #[must_use]
    pub fn from_counts(weeks: &[&[u32]]) -> Self {
        Self {
            weeks: weeks
                .iter()
                .map(|days| RawWeek {
                    days: days.iter().map(|&count| RawDay { count }).collect(),
                })
                .collect(),
        }
    }

    /// Total number of days across all weeks
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(|week| week.days.len()).sum()
    }
}

/// Observable state of the fetch worker.
///
/// Owned exclusively by the worker; all other components read it through
/// the worker handle. `Success` is kept distinct from `Idle` so a host
/// can tell "never fetched" apart from "data available".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// No fetch performed yet, or the last request carried no token
    #[default]
    Idle,
    /// A fetch is currently in flight; new requests are ignored
    InProgress,
    /// The last fetch failed; see the retained error for the cause
    Error,
    /// The last fetch completed and published fresh data
    Success,
}

/// The state published by the worker and round-tripped through
/// persistence. The credential is deliberately excluded: tokens are never
/// part of this state and never reach a patch file.
///
/// Persistence goes through the tolerant `to_json`/`from_json` bridge in
/// the state module rather than derived serde impls, so damaged documents
/// load as defaults instead of failing and the on-disk key names stay
/// fixed (`startDate`, `contributionsPerDay`).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModuleState {
    /// ISO-8601 start of the contribution window, or empty when unknown
    pub start_date: String,
    /// Normalized per-day intensities, oldest to newest, each in `[0, 10]`
    pub contributions: Vec<f32>,
}
