//! Username generation for provisioned users.
//!
//! ## Summary
//! Users arriving from the identity provider do not always carry a username.
//! These helpers turn a display name or an email address into a URL-safe
//! handle that can be used in public profile paths such as
//! `/api/app/users/{username}/skills`.

/// Fallback handle used when nothing usable remains after normalization.
pub const FALLBACK_USERNAME: &str = "user";

/// Maximum length of a generated username, excluding any collision suffix.
pub const MAX_USERNAME_LEN: usize = 32;

/// Generate a URL-safe username from a display name or email address.
///
/// Only the local part of an email is used. The result is lowercase,
/// alphanumeric with single hyphens, and never empty.
///
/// Examples:
/// - "Jane Doe" -> "jane-doe"
/// - "jane.doe@example.com" -> "jane-doe"
/// - "  ***  " -> "user"
#[must_use]
pub fn generate_username(source: &str) -> String {
    let local = source.split('@').next().unwrap_or(source);

    let slug = local
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    let truncated: String = slug.chars().take(MAX_USERNAME_LEN).collect();
    let truncated = truncated.trim_end_matches('-');

    if truncated.is_empty() {
        FALLBACK_USERNAME.to_string()
    } else {
        truncated.to_string()
    }
}

/// Append a short disambiguating suffix taken from an id.
///
/// Used when the generated username is already taken.
#[must_use]
pub fn with_suffix(base: &str, id: uuid::Uuid) -> String {
    let simple = id.simple().to_string();
    let suffix = &simple[simple.len() - 6..];
    format!("{base}-{suffix}")
}
