//! URL record entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A stored mapping between a short identifier and its original URL.
///
/// Both `original_url` and `short_id` are unique across all records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub original_url: String,
    pub short_id: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(original_url: String, short_id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            original_url,
            short_id,
            created_at,
        }
    }
}

/// Input data for inserting a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub original_url: String,
    pub short_id: String,
}

impl NewUrlRecord {
    pub fn new(original_url: impl Into<String>, short_id: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_id: short_id.into(),
        }
    }

    /// Materializes the record with the given insertion time.
    pub fn into_record(self, created_at: DateTime<Utc>) -> UrlRecord {
        UrlRecord::new(self.original_url, self.short_id, created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_record_creation() {
        let now = Utc::now();
        let record = UrlRecord::new(
            "https://example.com/page".to_string(),
            "abc1234".to_string(),
            now,
        );

        assert_eq!(record.original_url, "https://example.com/page");
        assert_eq!(record.short_id, "abc1234");
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_new_record_into_record_keeps_fields() {
        let now = Utc::now();
        let record = NewUrlRecord::new("https://rust-lang.org/", "xyz789A").into_record(now);

        assert_eq!(record.original_url, "https://rust-lang.org/");
        assert_eq!(record.short_id, "xyz789A");
        assert_eq!(record.created_at, now);
    }
}
