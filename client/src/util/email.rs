//! Minimal email shape check shared by every form.

#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

/// `local@domain.tld`: exactly one `@`, no whitespace, a non-empty local
/// part, and a dot inside the domain with text on both sides.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
