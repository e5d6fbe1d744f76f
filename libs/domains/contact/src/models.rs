use std::collections::BTreeMap;

use serde::Deserialize;
use utoipa::ToSchema;
use validation::{is_non_empty_trimmed, is_valid_email_shape};

/// A contact-form submission.
///
/// Every field defaults to an empty string so a body that omits one still
/// deserializes and gets a per-field "is required" message, instead of an
/// opaque parse failure.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Validate a submission, returning one message per failing field.
///
/// An empty map means the submission is acceptable. A missing email and a
/// malformed email are distinct failures with distinct messages.
pub fn validate_contact(contact: &ContactMessage) -> BTreeMap<String, String> {
    let mut errors = BTreeMap::new();

    if !is_non_empty_trimmed(&contact.name) {
        errors.insert("name".to_string(), "Name is required".to_string());
    }

    if !is_non_empty_trimmed(&contact.email) {
        errors.insert("email".to_string(), "Email is required".to_string());
    } else if !is_valid_email_shape(contact.email.trim()) {
        errors.insert("email".to_string(), "Enter a valid email".to_string());
    }

    if !is_non_empty_trimmed(&contact.message) {
        errors.insert("message".to_string(), "Message is required".to_string());
    }

    errors
}
