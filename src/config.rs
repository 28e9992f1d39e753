// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Configuration types for extraction

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default character used to mask credit card digits.
pub const DEFAULT_MASK_CHAR: char = '*';

/// Categories of personal data the extractor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Emails,
    Urls,
    Phones,
    CreditCards,
}

impl Category {
    /// All categories, in report order.
    pub const ALL: [Category; 4] = [
        Category::Emails,
        Category::Urls,
        Category::Phones,
        Category::CreditCards,
    ];

    /// Returns the category name as used in reports and JSON keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Emails => "emails",
            Category::Urls => "urls",
            Category::Phones => "phones",
            Category::CreditCards => "credit_cards",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emails" => Ok(Category::Emails),
            "urls" => Ok(Category::Urls),
            "phones" => Ok(Category::Phones),
            "credit_cards" => Ok(Category::CreditCards),
            other => Err(format!(
                "unknown category '{other}' (expected emails, urls, phones or credit_cards)"
            )),
        }
    }
}

/// Configuration for a scan: which categories to detect and how to mask
/// card digits in reported values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Detect email addresses
    pub detect_emails: bool,
    /// Detect web URLs
    pub detect_urls: bool,
    /// Detect phone numbers
    pub detect_phones: bool,
    /// Detect credit card numbers
    pub detect_credit_cards: bool,
    /// Character substituted for masked card digits
    pub mask_char: char,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            detect_emails: true,
            detect_urls: true,
            detect_phones: true,
            detect_credit_cards: true,
            mask_char: DEFAULT_MASK_CHAR,
        }
    }
}

impl ScanConfig {
    /// Returns a config with only the given categories enabled.
    pub fn only(categories: &[Category]) -> Self {
        let mut config = Self {
            detect_emails: false,
            detect_urls: false,
            detect_phones: false,
            detect_credit_cards: false,
            mask_char: DEFAULT_MASK_CHAR,
        };
        for category in categories {
            config.set_enabled(*category, true);
        }
        config
    }

    /// Whether the given category is detected by this config.
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Emails => self.detect_emails,
            Category::Urls => self.detect_urls,
            Category::Phones => self.detect_phones,
            Category::CreditCards => self.detect_credit_cards,
        }
    }

    /// Enables or disables detection of a category.
    pub fn set_enabled(&mut self, category: Category, enabled: bool) {
        match category {
            Category::Emails => self.detect_emails = enabled,
            Category::Urls => self.detect_urls = enabled,
            Category::Phones => self.detect_phones = enabled,
            Category::CreditCards => self.detect_credit_cards = enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_detects_everything() {
        let config = ScanConfig::default();
        for category in Category::ALL {
            assert!(config.is_enabled(category));
        }
        assert_eq!(config.mask_char, '*');
    }

    #[test]
    fn test_only_restricts_categories() {
        let config = ScanConfig::only(&[Category::Emails, Category::Phones]);
        assert!(config.detect_emails);
        assert!(!config.detect_urls);
        assert!(config.detect_phones);
        assert!(!config.detect_credit_cards);
    }

    #[test]
    fn test_category_names() {
        assert_eq!(Category::Emails.as_str(), "emails");
        assert_eq!(Category::CreditCards.as_str(), "credit_cards");
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("urls".parse::<Category>().unwrap(), Category::Urls);
        assert_eq!(
            "credit_cards".parse::<Category>().unwrap(),
            Category::CreditCards
        );
        assert!("cards".parse::<Category>().is_err());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = ScanConfig {
            detect_emails: true,
            detect_urls: false,
            detect_phones: true,
            detect_credit_cards: true,
            mask_char: '#',
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ScanConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
