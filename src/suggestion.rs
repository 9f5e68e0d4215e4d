use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type SuggestionId = i64;

/// A ranked completion candidate as served by the backend.
///
/// Values are never edited on the client; the controller swaps whole lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub id: SuggestionId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub frequency: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl Suggestion {
    pub fn new(id: SuggestionId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            category: None,
            frequency: 0,
            last_used: None,
            created_at: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_frequency(mut self, frequency: u64) -> Self {
        self.frequency = frequency;
        self
    }
}

/// Corpus counters reported by `/admin/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionStats {
    pub total_suggestions: u64,
    pub english_words: u64,
    pub sample_words: u64,
}

pub const DEFAULT_LIMIT: usize = 10;

/// Parameters of a single lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionQuery {
    pub text: String,
    pub category: Option<String>,
    pub limit: usize,
}

impl SuggestionQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
            limit: DEFAULT_LIMIT,
        }
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category.filter(|c| !c.trim().is_empty());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn suggestion_reads_backend_payload() {
        let payload = json!({
            "id": 7,
            "text": "apple",
            "category": "english",
            "frequency": 12,
            "lastUsed": "2024-03-01T10:15:30.123",
            "createdAt": "2024-02-01T08:00:00"
        });

        let suggestion: Suggestion = serde_json::from_value(payload).unwrap();

        assert_eq!(suggestion.id, 7);
        assert_eq!(suggestion.text, "apple");
        assert_eq!(suggestion.category.as_deref(), Some("english"));
        assert_eq!(suggestion.frequency, 12);
        assert!(suggestion.last_used.is_some());
        assert!(suggestion.created_at.is_some());
    }

    #[test]
    fn suggestion_tolerates_missing_optional_fields() {
        let suggestion: Suggestion =
            serde_json::from_value(json!({"id": 1, "text": "app", "category": null})).unwrap();

        assert_eq!(suggestion, Suggestion::new(1, "app"));
    }

    #[test]
    fn stats_use_camel_case_names() {
        let stats: SuggestionStats = serde_json::from_value(json!({
            "totalSuggestions": 120,
            "englishWords": 100,
            "sampleWords": 20
        }))
        .unwrap();

        assert_eq!(stats.total_suggestions, 120);
        assert_eq!(stats.english_words, 100);
        assert_eq!(stats.sample_words, 20);
    }

    #[test]
    fn query_drops_blank_category() {
        let query = SuggestionQuery::new("ap").with_category(Some("  ".to_string()));
        assert!(query.category.is_none());
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }
}
