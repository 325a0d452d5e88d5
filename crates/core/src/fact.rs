use serde::Deserialize;

use crate::number::{digits, is_armstrong};

/// Public Numbers API host used when no other provider is configured
pub const DEFAULT_NUMBERS_API_URL: &str = "http://numbersapi.com";

/// Numbers API response for `/{n}/math?json`
///
/// Only `text` is used; `number`, `found` and `type` are ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct NumbersApiFact {
    pub text: Option<String>,
}

/// Why a remote fact could not be obtained
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FactFailure {
    #[error("fact provider unreachable: {0}")]
    Network(String),

    #[error("fact provider returned HTTP {0}")]
    Status(u16),

    #[error("fact provider returned a malformed body: {0}")]
    Malformed(String),
}

/// Result of resolving a fun fact
///
/// Callers that only need the text use [`FactOutcome::into_text`], which
/// collapses every failure into an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactOutcome {
    /// Built locally for Armstrong numbers
    Synthesized(String),
    /// Returned by the remote provider
    Fetched(String),
    /// Provider failed; absorbed
    Unavailable(FactFailure),
}

impl FactOutcome {
    pub fn into_text(self) -> String {
        match self {
            FactOutcome::Synthesized(text) | FactOutcome::Fetched(text) => text,
            FactOutcome::Unavailable(_) => String::new(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, FactOutcome::Unavailable(_))
    }
}

/// Explain why `n` is an Armstrong number
///
/// Returns `None` when `n` is not Armstrong. The number keeps its sign in the
/// sentence while the digits come from `|n|`.
///
/// ```
/// use numclass_core::fact::armstrong_fact;
///
/// assert_eq!(
///     armstrong_fact(371).as_deref(),
///     Some("371 is an Armstrong number because 3^3 + 7^3 + 1^3 = 371")
/// );
/// assert_eq!(armstrong_fact(10), None);
/// ```
pub fn armstrong_fact(n: i64) -> Option<String> {
    if !is_armstrong(n) {
        return None;
    }

    let digits = digits(n);
    let power = digits.len();
    let parts = digits
        .iter()
        .map(|d| format!("{d}^{power}"))
        .collect::<Vec<_>>()
        .join(" + ");

    Some(format!("{n} is an Armstrong number because {parts} = {n}"))
}

/// Build the math-fact URL for `n` against `base_url`
pub fn numbers_api_url(base_url: &str, n: i64) -> String {
    format!("{}/{n}/math?json", base_url.trim_end_matches('/'))
}

/// Extract the fact text from a provider response body
///
/// A body without `text` yields an empty string; a body that is not the
/// expected JSON object is a [`FactFailure::Malformed`].
pub fn decode_fact(body: &str) -> Result<String, FactFailure> {
    let fact: NumbersApiFact =
        serde_json::from_str(body).map_err(|e| FactFailure::Malformed(e.to_string()))?;

    Ok(fact.text.unwrap_or_default())
}
