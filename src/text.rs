//! Text-level helpers shared by both datasets.
//!
//! All patterns are compiled once at startup using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches runs of whitespace (including newlines/tabs from markup).
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE regex"));

/// Matches a trailing "(DLC)" marker, with any surrounding whitespace.
static DLC_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(DLC\)\s*$").expect("DLC_SUFFIX regex"));

/// Matches the first run of decimal digits anywhere in a string.
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("DIGITS regex"));

/// Collapse every run of whitespace to a single space and trim the ends.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
/// Empty input yields an empty string.
#[must_use]
pub fn normalize(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

/// Whether a raw name carries the "(DLC)" marker.
///
/// Must be checked on the raw name, before [`strip_dlc_suffix`] removes
/// the marker that signals DLC status.
#[must_use]
pub fn is_dlc(name: &str) -> bool {
    name.contains("(DLC)")
}

/// Remove a trailing "(DLC)" marker from a name, if present.
#[must_use]
pub fn strip_dlc_suffix(name: &str) -> String {
    DLC_SUFFIX.replace(name, "").into_owned()
}

/// Parse the first run of decimal digits found anywhere in the text.
///
/// Returns 0 when the text is empty, contains no digits, or the digit
/// run does not fit a `u32`. Used for both the item price and the item
/// limit; for the limit, 0 is overloaded to mean both "unlimited" and
/// "unparsable" (the wiki itself does not distinguish the two).
#[must_use]
pub fn first_number(text: &str) -> u32 {
    DIGITS
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_interior_whitespace() {
        assert_eq!(normalize("Melee \t Damage\nBoost"), "Melee Damage Boost");
    }

    #[test]
    fn normalize_trims_ends() {
        assert_eq!(normalize("  spaced out  "), "spaced out");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("  a \n b  ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_empty_yields_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \n\t "), "");
    }

    #[test]
    fn normalized_output_has_no_double_spaces() {
        let out = normalize("a  b\t\tc \n d");
        assert!(!out.contains("  "));
        assert_eq!(out, out.trim());
    }

    #[test]
    fn first_number_takes_first_digit_run() {
        assert_eq!(first_number("Cost: 15 coins"), 15);
        assert_eq!(first_number("3 of 5"), 3);
    }

    #[test]
    fn first_number_defaults_to_zero() {
        assert_eq!(first_number(""), 0);
        assert_eq!(first_number("no numbers here"), 0);
        assert_eq!(first_number("   "), 0);
    }

    #[test]
    fn first_number_overflow_is_unparsable() {
        assert_eq!(first_number("99999999999999999999"), 0);
    }

    #[test]
    fn dlc_marker_detected_before_stripping() {
        assert!(is_dlc("Doctor (DLC)"));
        assert_eq!(strip_dlc_suffix("Doctor (DLC)"), "Doctor");

        assert!(!is_dlc("Soldier"));
        assert_eq!(strip_dlc_suffix("Soldier"), "Soldier");
    }

    #[test]
    fn dlc_suffix_only_stripped_at_end() {
        assert_eq!(strip_dlc_suffix("(DLC) Doctor"), "(DLC) Doctor");
    }
}
