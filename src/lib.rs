// Copyright 2025
// SPDX-License-Identifier: Apache-2.0

//! Extraction and security validation of personal data patterns in free text.
//!
//! The crate scans text for four categories: email addresses, web URLs,
//! phone numbers and credit card numbers. Recognition is deliberately
//! permissive; every candidate then passes a category validator that either
//! accepts it or rejects it with a reason (`malformed`,
//! `suspicious-content`, `out-of-range`). Rejected candidates are part of
//! the report, not silently dropped, so injection attempts and placeholder
//! filler stay visible. Credit card numbers are masked to their last four
//! digits before they ever reach a report.
//!
//! Matching runs on a linear-time regex engine, so scan cost stays bounded
//! in the input size regardless of how hostile the text is.
//!
//! ```
//! use pii_sieve::{Extractor, ScanConfig};
//!
//! let extractor = Extractor::new(ScanConfig::default())?;
//! let report = extractor.extract("reach me at jane.doe@example.com")?;
//! assert_eq!(report.emails.valid_count(), 1);
//! # Ok::<(), pii_sieve::SieveError>(())
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod masking;
pub mod patterns;
pub mod report;
pub mod validate;

pub use config::{Category, ScanConfig};
pub use error::SieveError;
pub use extractor::{Candidate, Candidates, Extractor};
pub use report::{CategoryResult, ScanEntry, ScanReport};
pub use validate::{RejectReason, ValidationOutcome};
