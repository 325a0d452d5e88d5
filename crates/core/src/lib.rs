//! Core library for numclass
//!
//! This crate implements the **Functional Core** of the numclass service,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`numclass_core`** (this crate): Pure number classification and fact
//!   formatting, zero I/O
//! - **`numclass`**: HTTP server, outbound fact provider client and CLI (the
//!   Imperative Shell)
//!
//! Everything here is deterministic: the same input always yields the same
//! output, so it is tested with plain fixture values and no mocking.
//!
//! # Module Organization
//!
//! - [`number`]: Numeric predicates (prime, perfect, Armstrong, digit sum, parity)
//! - [`classify`]: Input parsing, property tags and the response models
//! - [`fact`]: Armstrong fact synthesis and Numbers API payload handling
//!
//! # Example Usage
//!
//! ```rust
//! use numclass_core::classify::{classify, parse_number, Property};
//! use numclass_core::fact::armstrong_fact;
//!
//! let n = parse_number(Some("371")).unwrap();
//! let fact = armstrong_fact(n).unwrap_or_default();
//! let result = classify(n, fact);
//!
//! assert_eq!(result.properties, vec![Property::Armstrong, Property::Odd]);
//! assert_eq!(result.digit_sum, 11);
//! ```

pub mod classify;
pub mod fact;
pub mod number;
