//! Gravatar avatar URLs.

use md5::{Digest, Md5};

pub const DEFAULT_SIZE: u32 = 150;

const AVATAR_BASE_URL: &str = "http://www.gravatar.com/avatar";

/// Gravatar identifies an account by the MD5 of its trimmed, lower-cased e-mail.
pub fn email_hash(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    hex::encode(Md5::digest(normalized.as_bytes()))
}

/// Avatar URL for `email` at `size` pixels.
pub fn gravatar_url(email: &str, size: u32) -> String {
    format!("{}/{}?s={}", AVATAR_BASE_URL, email_hash(email), size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_hash_known_value() {
        // md5("test@example.com")
        assert_eq!(
            email_hash("test@example.com"),
            "55502f40dc8b7c769880b10874abc9d0"
        );
    }

    #[test]
    fn test_email_hash_normalizes_case_and_whitespace() {
        assert_eq!(
            email_hash("  Test@Example.COM \n"),
            email_hash("test@example.com")
        );
    }

    #[test]
    fn test_gravatar_url() {
        assert_eq!(
            gravatar_url("test@example.com", 80),
            "http://www.gravatar.com/avatar/55502f40dc8b7c769880b10874abc9d0?s=80"
        );
    }

    #[test]
    fn test_gravatar_url_default_size() {
        assert!(gravatar_url("test@example.com", DEFAULT_SIZE).ends_with("?s=150"));
    }
}
