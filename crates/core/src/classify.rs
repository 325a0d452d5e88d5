use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::number::{digit_sum, is_armstrong, is_odd, is_perfect, is_prime};

/// Integer literal grammar accepted on input: optional sign, ASCII digits,
/// single underscores only between digits.
static INTEGER_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9](?:_?[0-9])*$").unwrap());

/// Tag attached to a classified number
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Armstrong,
    Odd,
    Even,
}

/// Full classification record returned by the API
///
/// Field order is the serialized order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Classification {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<Property>,
    pub digit_sum: u64,
    pub fun_fact: String,
}

/// Body returned when the `number` parameter cannot be used
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct InvalidNumberBody {
    /// The raw value as received, `null` when the parameter was absent
    pub number: Option<String>,
    pub error: bool,
}

impl InvalidNumberBody {
    pub fn new(raw: Option<String>) -> Self {
        Self {
            number: raw,
            error: true,
        }
    }
}

/// Reasons a raw `number` value is rejected
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseNumberError {
    #[error("missing number parameter")]
    Missing,

    #[error("empty number parameter")]
    Empty,

    #[error("not an integer: {0:?}")]
    NotAnInteger(String),

    /// Well-formed integer text that does not fit `i64`. Arbitrary-precision
    /// input is not classified; it is answered like any other invalid value.
    #[error("integer out of range: {0}")]
    OutOfRange(String),
}

/// Parse the raw `number` query value into an integer
///
/// Surrounding whitespace is ignored, a leading `+` or `-` is accepted, and
/// digits may be grouped with single underscores (`1_000`). Leading zeros are
/// fine. Values outside the `i64` range are rejected.
pub fn parse_number(raw: Option<&str>) -> Result<i64, ParseNumberError> {
    let raw = raw.ok_or(ParseNumberError::Missing)?;
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ParseNumberError::Empty);
    }

    if !INTEGER_LITERAL.is_match(trimmed) {
        return Err(ParseNumberError::NotAnInteger(raw.to_string()));
    }

    let normalized: String = trimmed
        .trim_start_matches('+')
        .chars()
        .filter(|c| *c != '_')
        .collect();

    normalized
        .parse::<i64>()
        .map_err(|_| ParseNumberError::OutOfRange(trimmed.to_string()))
}

/// Build the ordered property list for `n`
///
/// `armstrong` comes first when it applies, followed by exactly one of
/// `odd` / `even`.
pub fn properties(n: i64) -> Vec<Property> {
    let mut properties = Vec::with_capacity(2);

    if is_armstrong(n) {
        properties.push(Property::Armstrong);
    }

    properties.push(if is_odd(n) {
        Property::Odd
    } else {
        Property::Even
    });

    properties
}

/// Classify `n` and attach the resolved fun fact
pub fn classify(n: i64, fun_fact: String) -> Classification {
    Classification {
        number: n,
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        properties: properties(n),
        digit_sum: digit_sum(n),
        fun_fact,
    }
}
