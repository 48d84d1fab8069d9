//! Short URL entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL mapping with metadata.
///
/// `code` is the base62 encoding of `counter`, the sequential ID the record
/// was allocated from. `expires_at` is `None` for permanent links.
#[derive(Debug, Clone)]
pub struct ShortUrl {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub counter: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl ShortUrl {
    /// Returns true if the link has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|e| Utc::now() >= e)
    }
}

/// Input data for creating a new short URL.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub code: String,
    pub long_url: String,
    pub counter: i64,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample(expires_at: Option<DateTime<Utc>>) -> ShortUrl {
        ShortUrl {
            id: 1,
            code: "3D7".to_string(),
            long_url: "https://example.com/".to_string(),
            counter: 12345,
            created_at: Utc::now(),
            expires_at,
        }
    }

    #[test]
    fn test_permanent_link_never_expires() {
        assert!(!sample(None).is_expired());
    }

    #[test]
    fn test_future_expiry_is_not_expired() {
        assert!(!sample(Some(Utc::now() + Duration::days(7))).is_expired());
    }

    #[test]
    fn test_past_expiry_is_expired() {
        assert!(sample(Some(Utc::now() - Duration::seconds(1))).is_expired());
    }
}
