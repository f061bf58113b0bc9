// ABOUTME: Persistence bridge serializing ModuleState to and from a JSON document
// ABOUTME: Loads are tolerant of missing or malformed fields so old patches still open
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::models::ModuleState;
use serde_json::{json, Value};
use tracing::debug;

impl ModuleState {
    /// Serialize to the persisted two-field document
    /// `{"startDate": ..., "contributionsPerDay": [...]}`.
    ///
    /// The stored values are the normalized `[0, 10]` intensities; raw
    /// counts never reach persistence. The credential is not part of this
    /// state and is therefore never written.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "startDate": self.start_date,
            "contributionsPerDay": self.contributions,
        })
    }

    /// Deserialize from a persisted document, tolerating damage.
    ///
    /// Missing or non-string `startDate` becomes the empty string.
    /// A missing or non-array `contributionsPerDay` becomes an empty
    /// sequence, and non-numeric array elements are skipped instead of
    /// failing the whole load.
    #[must_use]
    pub fn from_json(document: &Value) -> Self {
        let start_date = document
            .get("startDate")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        #[allow(clippy::cast_possible_truncation)] // stored values fit f32 exactly
        let contributions = document
            .get("contributionsPerDay")
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_f64)
                    .map(|v| v as f32)
                    .collect()
            })
            .unwrap_or_default();

        let state = Self {
            start_date,
            contributions,
        };
        debug!(
            days = state.contributions.len(),
            start_date = %state.start_date,
            "restored module state from document"
        );
        state
    }
}
