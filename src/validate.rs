// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Security validation of extracted candidates

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Category;

/// Why a candidate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RejectReason {
    /// Structurally broken (bad domain, stray characters, ...)
    Malformed,
    /// Carries injection markers or placeholder filler
    SuspiciousContent,
    /// A length or digit-count limit was exceeded
    OutOfRange,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::Malformed => "malformed",
            RejectReason::SuspiciousContent => "suspicious-content",
            RejectReason::OutOfRange => "out-of-range",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of validating one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Rejected(RejectReason),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// The rejection reason, if the candidate was rejected.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

/// SQL fragments that have no business inside an email address.
const SQL_TOKENS: &[&str] = &["union", "select", "drop", "--", "/*", "*/", ";"];

/// Schemes that execute or smuggle content instead of locating it.
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "data:", "vbscript:", "file:", "about:"];

/// Markup fragments typical of script injection.
const INJECTION_MARKERS: &[&str] = &["<script", "onerror", "onload"];

const MAX_LOCAL_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 255;
const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;
const MIN_CARD_DIGITS: usize = 13;
const MAX_CARD_DIGITS: usize = 19;

/// Validates a candidate against the rules of its category.
pub fn validate(category: Category, candidate: &str) -> ValidationOutcome {
    match category {
        Category::Emails => validate_email(candidate),
        Category::Urls => validate_url(candidate),
        Category::Phones => validate_phone(candidate),
        Category::CreditCards => validate_credit_card(candidate),
    }
}

/// Validates an email candidate.
///
/// Structural checks run first: consecutive or edge dots, a missing or
/// duplicated `@`, and empty parts are malformed; an oversized local part or
/// domain is out of range. A candidate that passes structure but carries a
/// SQL fragment anywhere is rejected as suspicious.
pub fn validate_email(email: &str) -> ValidationOutcome {
    if email.contains("..") || email.starts_with('.') || email.ends_with('.') {
        return ValidationOutcome::Rejected(RejectReason::Malformed);
    }

    let (local, domain) = match email.split_once('@') {
        Some((local, domain)) if !domain.contains('@') => (local, domain),
        _ => return ValidationOutcome::Rejected(RejectReason::Malformed),
    };
    if local.is_empty() || domain.is_empty() {
        return ValidationOutcome::Rejected(RejectReason::Malformed);
    }
    if local.len() > MAX_LOCAL_LEN || domain.len() > MAX_DOMAIN_LEN {
        return ValidationOutcome::Rejected(RejectReason::OutOfRange);
    }

    let lowered = email.to_ascii_lowercase();
    if SQL_TOKENS.iter().any(|token| lowered.contains(token)) {
        return ValidationOutcome::Rejected(RejectReason::SuspiciousContent);
    }

    ValidationOutcome::Valid
}

/// Validates a URL candidate.
///
/// Dangerous schemes, script-injection markers and embedded NUL bytes are
/// suspicious regardless of structure. Everything else must be an
/// `http(s)://` or bare `www.` reference to a well-formed host, with an
/// optional all-digit port and an unconstrained path or query.
pub fn validate_url(url: &str) -> ValidationOutcome {
    let lowered = url.to_ascii_lowercase();
    if BLOCKED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
        return ValidationOutcome::Rejected(RejectReason::SuspiciousContent);
    }
    if INJECTION_MARKERS.iter().any(|marker| lowered.contains(marker)) || url.contains('\0') {
        return ValidationOutcome::Rejected(RejectReason::SuspiciousContent);
    }

    let rest = if let Some(rest) = lowered
        .strip_prefix("https://")
        .or_else(|| lowered.strip_prefix("http://"))
    {
        rest
    } else if lowered.starts_with("www.") {
        lowered.as_str()
    } else {
        return ValidationOutcome::Rejected(RejectReason::Malformed);
    };

    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (authority, None),
    };
    if let Some(port) = port {
        if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
            return ValidationOutcome::Rejected(RejectReason::Malformed);
        }
    }
    if !is_well_formed_host(host) {
        return ValidationOutcome::Rejected(RejectReason::Malformed);
    }

    ValidationOutcome::Valid
}

/// A host is a dotted name of two or more non-empty labels ending in an
/// alphabetic TLD, or a dotted-quad IPv4 literal.
fn is_well_formed_host(host: &str) -> bool {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return false;
    }

    if labels
        .iter()
        .all(|label| label.bytes().all(|b| b.is_ascii_digit()))
    {
        return labels.len() == 4 && labels.iter().all(|label| label.parse::<u8>().is_ok());
    }

    if !labels.iter().all(|label| {
        label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    }) {
        return false;
    }
    let tld = labels[labels.len() - 1];
    tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Validates a phone candidate.
///
/// The digit count (separators stripped, extension included) must fall in
/// 10..=15; shorter or longer is out of range. A number made of one repeated
/// digit is placeholder filler and rejected as suspicious.
pub fn validate_phone(phone: &str) -> ValidationOutcome {
    let digits: Vec<u8> = phone.bytes().filter(u8::is_ascii_digit).collect();
    if digits.len() < MIN_PHONE_DIGITS || digits.len() > MAX_PHONE_DIGITS {
        return ValidationOutcome::Rejected(RejectReason::OutOfRange);
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return ValidationOutcome::Rejected(RejectReason::SuspiciousContent);
    }
    ValidationOutcome::Valid
}

/// Validates a credit card candidate.
///
/// Grouping separators (spaces, dashes) are stripped; any other residue is
/// malformed. The digit count must fall in 13..=19 and a number made of one
/// repeated digit is rejected as suspicious.
pub fn validate_credit_card(card: &str) -> ValidationOutcome {
    let cleaned: String = card.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return ValidationOutcome::Rejected(RejectReason::Malformed);
    }
    if cleaned.len() < MIN_CARD_DIGITS || cleaned.len() > MAX_CARD_DIGITS {
        return ValidationOutcome::Rejected(RejectReason::OutOfRange);
    }
    let first = cleaned.as_bytes()[0];
    if cleaned.bytes().all(|b| b == first) {
        return ValidationOutcome::Rejected(RejectReason::SuspiciousContent);
    }
    ValidationOutcome::Valid
}
