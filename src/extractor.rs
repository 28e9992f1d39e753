// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Candidate extraction and report assembly

use regex::Matches;
use tracing::{debug, warn};

use crate::config::{Category, ScanConfig};
use crate::error::SieveError;
use crate::masking::mask_card;
use crate::patterns::{compile_patterns, CompiledPatterns};
use crate::report::{CategoryResult, ScanEntry, ScanReport};
use crate::validate::{validate, RejectReason};

/// Trailing punctuation that prose attaches to URLs but is not part of them.
const URL_TRAILING: &[char] = &['.', ',', ';', ':', '!', '?'];

/// Separators the card recognizer may have swallowed at the end of a match.
const CARD_TRAILING: &[char] = &[' ', '-'];

/// A single recognizer match: the matched text and its byte offsets in the
/// scanned input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub value: String,
    pub start: usize,
    pub end: usize,
}

/// Lazy stream of candidates for one category.
///
/// Yields raw matched text; masking happens later, when entries are
/// assembled into a report.
pub struct Candidates<'r, 'h> {
    matches: Option<Matches<'r, 'h>>,
    category: Category,
}

impl Iterator for Candidates<'_, '_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        let m = self.matches.as_mut()?.next()?;
        let trimmed = match self.category {
            Category::Urls => m.as_str().trim_end_matches(URL_TRAILING),
            Category::CreditCards => m.as_str().trim_end_matches(CARD_TRAILING),
            _ => m.as_str(),
        };
        Some(Candidate {
            value: trimmed.to_string(),
            start: m.start(),
            end: m.start() + trimmed.len(),
        })
    }
}

/// Extracts and validates personal data candidates from text.
///
/// An extractor is stateless across calls: each [`extract`](Self::extract)
/// scans its input from scratch and returns an owned report.
pub struct Extractor {
    patterns: CompiledPatterns,
    config: ScanConfig,
}

impl Extractor {
    /// Compiles the recognizers for every category enabled in `config`.
    pub fn new(config: ScanConfig) -> Result<Self, SieveError> {
        let patterns = compile_patterns(&config)?;
        Ok(Self { patterns, config })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Streams raw candidates of one category out of `text`.
    ///
    /// Disabled categories yield nothing.
    pub fn candidates<'r, 'h>(&'r self, text: &'h str, category: Category) -> Candidates<'r, 'h> {
        Candidates {
            matches: self
                .patterns
                .find(category)
                .map(|pattern| pattern.regex.find_iter(text)),
            category,
        }
    }

    /// Scans `text` and returns a report covering every category.
    ///
    /// A set-based prefilter decides in one pass which categories occur at
    /// all; only those are scanned candidate by candidate. Each candidate is
    /// validated, credit card values are masked, and rejected candidates are
    /// reported alongside valid ones rather than dropped.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::InvalidInput`] when `text` contains a NUL byte;
    /// no extraction is attempted in that case.
    pub fn extract(&self, text: &str) -> Result<ScanReport, SieveError> {
        self.check_input(text)?;

        let mut report = ScanReport::default();
        let hits = self.patterns.regex_set.matches(text);
        for (idx, pattern) in self.patterns.patterns.iter().enumerate() {
            if !hits.matched(idx) {
                continue;
            }
            *report.category_mut(pattern.category) = self.scan_category(text, pattern.category);
        }

        for category in Category::ALL {
            let suspicious = report
                .category(category)
                .entries()
                .iter()
                .filter(|e| e.outcome.reason() == Some(RejectReason::SuspiciousContent))
                .count();
            if suspicious > 0 {
                warn!(
                    category = category.as_str(),
                    count = suspicious,
                    "rejected suspicious candidates"
                );
            }
        }
        debug!(
            emails = report.emails.len(),
            urls = report.urls.len(),
            phones = report.phones.len(),
            credit_cards = report.credit_cards.len(),
            "extraction complete"
        );

        Ok(report)
    }

    /// Scans `text` for a single category.
    pub fn extract_category(
        &self,
        text: &str,
        category: Category,
    ) -> Result<CategoryResult, SieveError> {
        self.check_input(text)?;
        Ok(self.scan_category(text, category))
    }

    fn check_input(&self, text: &str) -> Result<(), SieveError> {
        if text.contains('\0') {
            return Err(SieveError::invalid_input("input text contains a NUL byte"));
        }
        Ok(())
    }

    fn scan_category(&self, text: &str, category: Category) -> CategoryResult {
        let mut entries = Vec::new();
        for mut candidate in self.candidates(text, category) {
            let outcome = validate(category, &candidate.value);
            if category == Category::CreditCards {
                // Raw digits stop here, whatever the verdict was.
                candidate.value = mask_card(&candidate.value, self.config.mask_char);
            }
            entries.push(ScanEntry { candidate, outcome });
        }
        CategoryResult::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationOutcome;

    fn extractor() -> Extractor {
        Extractor::new(ScanConfig::default()).unwrap()
    }

    #[test]
    fn test_extract_mixed_text() {
        let text = "email john@company.com, call 555-123-4567, \
                    visit https://example.com/docs, card 4111-1111-1111-1111";
        let report = extractor().extract(text).unwrap();
        assert_eq!(report.emails.valid_count(), 1);
        assert_eq!(report.phones.valid_count(), 1);
        assert_eq!(report.urls.valid_count(), 1);
        assert_eq!(report.credit_cards.valid_count(), 1);
    }

    #[test]
    fn test_nul_byte_input_is_an_error() {
        let err = extractor().extract("john@company.com\0rest").unwrap_err();
        assert!(matches!(err, SieveError::InvalidInput { .. }));
    }

    #[test]
    fn test_disabled_categories_stay_empty_but_present() {
        let extractor = Extractor::new(ScanConfig::only(&[Category::Emails])).unwrap();
        let report = extractor
            .extract("john@company.com and https://example.com")
            .unwrap();
        assert_eq!(report.emails.valid_count(), 1);
        assert!(report.urls.is_empty());
        assert!(report.phones.is_empty());
        assert!(report.credit_cards.is_empty());
    }

    #[test]
    fn test_cards_masked_in_both_outcomes() {
        let text = "good 4111-1111-1111-1111 and filler 9999-9999-9999-9999";
        let report = extractor().extract(text).unwrap();
        let entries = report.credit_cards.entries();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].candidate.value, "****-****-****-1111");
        assert!(entries[0].outcome.is_valid());

        assert_eq!(entries[1].candidate.value, "****-****-****-9999");
        assert_eq!(
            entries[1].outcome,
            ValidationOutcome::Rejected(RejectReason::SuspiciousContent)
        );
    }

    #[test]
    fn test_url_trailing_punctuation_trimmed() {
        let report = extractor()
            .extract("docs live at https://example.com/guide, enjoy")
            .unwrap();
        let urls: Vec<&str> = report.urls.valid_values().collect();
        assert_eq!(urls, vec!["https://example.com/guide"]);
    }

    #[test]
    fn test_card_trailing_separator_trimmed() {
        let report = extractor().extract("pay 4111-1111-1111-1111 today").unwrap();
        let entries = report.credit_cards.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].candidate.value, "****-****-****-1111");
        assert_eq!(
            entries[0].candidate.end - entries[0].candidate.start,
            "4111-1111-1111-1111".len()
        );
    }

    #[test]
    fn test_offsets_slice_back_into_the_input() {
        let text = "reach john.smith@company.com for details";
        let report = extractor().extract(text).unwrap();
        let entry = &report.emails.entries()[0];
        assert_eq!(
            &text[entry.candidate.start..entry.candidate.end],
            entry.candidate.value
        );
    }

    #[test]
    fn test_candidates_stream_is_lazy_and_raw() {
        let ex = extractor();
        let text = "cards 4111-1111-1111-1111 and 5412 1234 5678 9012";
        let mut stream = ex.candidates(text, Category::CreditCards);
        let first = stream.next().unwrap();
        assert_eq!(first.value, "4111-1111-1111-1111");
        assert!(stream.next().is_some());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_candidates_empty_for_disabled_category() {
        let ex = Extractor::new(ScanConfig::only(&[Category::Phones])).unwrap();
        assert!(ex.candidates("john@company.com", Category::Emails).next().is_none());
    }

    #[test]
    fn test_extract_category_scans_one_category() {
        let ex = extractor();
        let result = ex
            .extract_category("john@company.com or 555-123-4567", Category::Emails)
            .unwrap();
        assert_eq!(result.valid_count(), 1);
        assert_eq!(result.len(), 1);
    }
}
