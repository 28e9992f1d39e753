// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Recognizer patterns and compilation

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder, RegexSet};

use crate::config::{Category, ScanConfig};
use crate::error::SieveError;

// Recognizers are deliberately permissive: they surface candidates that a
// category validator then accepts or rejects. Matching is linear-time, so
// hostile input cannot trigger pathological scan behavior.

/// Local part, domain with at least one dot, alphabetic TLD of 2+ characters.
const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

/// Web URLs plus dangerous-scheme links (javascript:, data:, ...), matched up
/// to the next whitespace or quote so embedded payloads stay inside the
/// candidate and can be screened.
const URL_PATTERN: &str =
    r#"\b(?:https?://|www\.|(?:javascript|data|vbscript|file|about):)[^\s"']+"#;

/// 3-3-4 digit groups with optional +country-code, separators and extension.
const PHONE_PATTERN: &str =
    r"(?:\+\d{1,3}[-.\s]?)?(?:\(\d{3}\)|\d{3})[-.\s]?\d{3}[-.\s]?\d{4}(?:\s?(?:ext|x)\s?\d{2,5})?\b";

/// 13 to 19 digits, each optionally followed by a space or dash.
const CARD_PATTERN: &str = r"\b(?:\d[ -]?){13,19}\b";

/// Recognizer definitions in report order.
static PATTERN_DEFS: Lazy<Vec<(Category, &'static str)>> = Lazy::new(|| {
    vec![
        (Category::Emails, EMAIL_PATTERN),
        (Category::Urls, URL_PATTERN),
        (Category::Phones, PHONE_PATTERN),
        (Category::CreditCards, CARD_PATTERN),
    ]
});

/// A compiled recognizer for one category.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub category: Category,
    pub regex: Regex,
}

/// All compiled recognizers plus a set used to prefilter the input in a
/// single pass before any per-category scan runs.
#[derive(Debug)]
pub struct CompiledPatterns {
    pub regex_set: RegexSet,
    pub patterns: Vec<CompiledPattern>,
}

impl CompiledPatterns {
    /// Returns the compiled recognizer for a category, if it is enabled.
    pub fn find(&self, category: Category) -> Option<&CompiledPattern> {
        self.patterns.iter().find(|p| p.category == category)
    }
}

/// Compiles the recognizers for every category enabled in `config`.
///
/// All patterns are case-insensitive. The returned set and pattern vector
/// share the same index order.
pub fn compile_patterns(config: &ScanConfig) -> Result<CompiledPatterns, SieveError> {
    let mut pattern_strings = Vec::new();
    let mut patterns = Vec::new();

    for (category, pattern) in PATTERN_DEFS.iter() {
        if !config.is_enabled(*category) {
            continue;
        }
        pattern_strings.push(format!("(?i){pattern}"));
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| SieveError::pattern(*pattern, e))?;
        patterns.push(CompiledPattern {
            category: *category,
            regex,
        });
    }

    let regex_set = if pattern_strings.is_empty() {
        RegexSet::empty()
    } else {
        RegexSet::new(&pattern_strings).map_err(|e| SieveError::pattern("prefilter set", e))?
    };

    Ok(CompiledPatterns {
        regex_set,
        patterns,
    })
}
