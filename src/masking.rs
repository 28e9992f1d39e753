// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Masking of credit card numbers for safe display

/// How many trailing digits stay visible after masking.
const VISIBLE_DIGITS: usize = 4;

/// Masks a credit card number while preserving its grouping separators.
///
/// Every digit except the last four is replaced with `mask_char`; spaces and
/// dashes keep their positions. Values with four digits or fewer are already
/// nothing but the visible tail and come back unchanged.
///
/// # Examples
///
/// ```
/// use pii_sieve::masking::mask_card;
///
/// assert_eq!(mask_card("4111-1111-1111-1111", '*'), "****-****-****-1111");
/// assert_eq!(mask_card("3782 822463 10005", '*'), "**** ****** *0005");
/// ```
pub fn mask_card(card: &str, mask_char: char) -> String {
    let digit_count = card.chars().filter(|c| c.is_ascii_digit()).count();
    let to_mask = digit_count.saturating_sub(VISIBLE_DIGITS);

    let mut masked = String::with_capacity(card.len());
    let mut seen = 0;
    for ch in card.chars() {
        if ch.is_ascii_digit() {
            seen += 1;
            if seen <= to_mask {
                masked.push(mask_char);
                continue;
            }
        }
        masked.push(ch);
    }
    masked
}
