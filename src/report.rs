// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Scan results: per-category aggregation, human report and JSON dump

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::config::Category;
use crate::error::SieveError;
use crate::extractor::Candidate;
use crate::validate::{RejectReason, ValidationOutcome};

/// One extracted candidate together with its validation outcome.
///
/// For credit cards the candidate value is already masked; the offsets still
/// delimit the original span in the scanned text.
#[derive(Debug, Clone)]
pub struct ScanEntry {
    pub candidate: Candidate,
    pub outcome: ValidationOutcome,
}

/// All entries of one category, in the order they occur in the text.
#[derive(Debug, Clone, Default)]
pub struct CategoryResult {
    entries: Vec<ScanEntry>,
}

impl CategoryResult {
    pub(crate) fn new(entries: Vec<ScanEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ScanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn valid_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome.is_valid()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.entries.len() - self.valid_count()
    }

    /// Values that passed validation, in text order.
    pub fn valid_values(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.outcome.is_valid())
            .map(|e| e.candidate.value.as_str())
    }

    /// Rejected values with their reasons, in text order.
    pub fn rejected(&self) -> impl Iterator<Item = (&str, RejectReason)> {
        self.entries.iter().filter_map(|e| {
            e.outcome
                .reason()
                .map(|reason| (e.candidate.value.as_str(), reason))
        })
    }
}

impl Serialize for CategoryResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(serde::Serialize)]
        struct RejectedEntry<'a> {
            value: &'a str,
            reason: RejectReason,
        }

        let valid: Vec<&str> = self.valid_values().collect();
        let invalid: Vec<RejectedEntry<'_>> = self
            .rejected()
            .map(|(value, reason)| RejectedEntry { value, reason })
            .collect();

        let mut state = serializer.serialize_struct("CategoryResult", 2)?;
        state.serialize_field("valid", &valid)?;
        state.serialize_field("invalid", &invalid)?;
        state.end()
    }
}

/// Results of one scan, one [`CategoryResult`] per category.
///
/// Categories always appear, in a fixed order, even when disabled or empty.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct ScanReport {
    pub emails: CategoryResult,
    pub urls: CategoryResult,
    pub phones: CategoryResult,
    pub credit_cards: CategoryResult,
}

impl ScanReport {
    pub fn category(&self, category: Category) -> &CategoryResult {
        match category {
            Category::Emails => &self.emails,
            Category::Urls => &self.urls,
            Category::Phones => &self.phones,
            Category::CreditCards => &self.credit_cards,
        }
    }

    pub(crate) fn category_mut(&mut self, category: Category) -> &mut CategoryResult {
        match category {
            Category::Emails => &mut self.emails,
            Category::Urls => &mut self.urls,
            Category::Phones => &mut self.phones,
            Category::CreditCards => &mut self.credit_cards,
        }
    }

    /// Total number of candidates across all categories.
    pub fn total(&self) -> usize {
        Category::ALL
            .iter()
            .map(|&category| self.category(category).len())
            .sum()
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// Each category serializes as `{"valid": [...], "invalid": [{"value",
    /// "reason"}, ...]}`.
    pub fn to_json(&self) -> Result<String, SieveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in Category::ALL {
            let result = self.category(category);
            writeln!(
                f,
                "{}: {} valid, {} rejected",
                category.as_str(),
                result.valid_count(),
                result.rejected_count()
            )?;
            for value in result.valid_values() {
                writeln!(f, "  \u{2713} {value}")?;
            }
            for (value, reason) in result.rejected() {
                writeln!(f, "  \u{2717} {value} ({reason})")?;
            }
        }
        Ok(())
    }
}
