//! Environment variable helpers.

/// Raw value of an environment variable, `None` if unset or not UTF-8.
#[must_use]
pub fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Trimmed value of an environment variable, `None` if unset or blank.
#[must_use]
pub fn env_non_empty(name: &str) -> Option<String> {
    env_value(name).and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Whether a string reads as an enabled flag (1, true, yes, on).
#[must_use]
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
