// ABOUTME: Credential parsing for combined "username@token" auth strings
// ABOUTME: Positional split on the first '@' plus a masking helper for display
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// An API credential parsed from a single auth string.
///
/// Parsing is purely positional on the first `@`: text before it is the
/// username, text after it is the token. A string without `@` is all
/// token and has no username. A *leading* `@` yields an empty username,
/// which is distinct from no username at all; downstream display logic
/// masks the token relative to the same split point, so the split must
/// not be "fixed" with trimming or validation. Shape validation is
/// deferred to the network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Username ahead of the `@`, if the input contained one
    pub username: Option<String>,
    /// Token used as the bearer credential; may be empty
    pub token: String,
}

impl Credential {
    /// Parse an auth string. Total: every input produces a credential.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.find('@') {
            Some(at) => Self {
                username: Some(input[..at].to_owned()),
                token: input[at + 1..].to_owned(),
            },
            None => Self {
                username: None,
                token: input.to_owned(),
            },
        }
    }

    /// True when no usable token is present and a fetch must not be attempted.
    #[must_use]
    pub fn is_empty_token(&self) -> bool {
        self.token.is_empty()
    }

    /// Username suitable for query scoping: `None` and `Some("")` both
    /// fall back to the authenticated viewer.
    #[must_use]
    pub fn effective_username(&self) -> Option<&str> {
        self.username.as_deref().filter(|u| !u.is_empty())
    }

    /// Display form with every token character replaced by `*`.
    ///
    /// The username and the `@` separator stay readable so a host text
    /// field can echo what was typed without exposing the secret.
    #[must_use]
    pub fn masked(&self) -> String {
        let stars = "*".repeat(self.token.len());
        match &self.username {
            Some(username) => format!("{username}@{stars}"),
            None => stars,
        }
    }
}
