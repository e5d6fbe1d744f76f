//! Shared, side-effect-free validation helpers.
//!
//! These functions define the validation contract used on both sides of the
//! request boundary: the API applies them server-side, and any client-side
//! mirror must match them exactly to avoid double-validation divergence.

use regex::Regex;
use std::sync::LazyLock;

/// Basic `local@domain.tld` shape: no whitespace or `@` in the local part,
/// domain, or TLD, with a `.` before the TLD.
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Returns true if `text` contains at least one non-whitespace character.
pub fn is_non_empty_trimmed(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Returns true if `text` matches the basic email shape.
///
/// This is deliberately not a full RFC 5322 check; it mirrors the
/// client-side pattern so both sides accept and reject the same inputs.
pub fn is_valid_email_shape(text: &str) -> bool {
    EMAIL_SHAPE.is_match(text)
}
