use super::{AdminBackend, BackendError, BackendResult, SuggestionBackend};
use crate::suggestion::{Suggestion, SuggestionId, SuggestionQuery, SuggestionStats};
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use std::cmp::Ordering;
use tokio::sync::Mutex;

const SAMPLE_WORDS: &[&str] = &[
    "apple",
    "application",
    "apply",
    "approach",
    "banana",
    "band",
    "bandwidth",
    "cache",
    "calendar",
    "debounce",
    "delta",
    "keyboard",
    "rust",
    "suggestion",
    "typeahead",
];

#[derive(Default)]
struct Corpus {
    items: Vec<Suggestion>,
    next_id: SuggestionId,
}

impl Corpus {
    fn insert(&mut self, text: &str, category: Option<&str>, now: NaiveDateTime) -> Suggestion {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|s| s.text.eq_ignore_ascii_case(text))
        {
            existing.frequency += 1;
            existing.last_used = Some(now);
            return existing.clone();
        }

        self.next_id += 1;
        let suggestion = Suggestion {
            id: self.next_id,
            text: text.to_string(),
            category: category.map(str::to_string),
            frequency: 1,
            last_used: Some(now),
            created_at: Some(now),
        };
        self.items.push(suggestion.clone());
        suggestion
    }

    fn find_mut(&mut self, id: SuggestionId) -> BackendResult<&mut Suggestion> {
        self.items
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(BackendError::NotFound { id })
    }
}

/// Frequency desc, then most recently used, then alphabetical.
fn rank(a: &Suggestion, b: &Suggestion) -> Ordering {
    b.frequency
        .cmp(&a.frequency)
        .then_with(|| b.last_used.cmp(&a.last_used))
        .then_with(|| a.text.cmp(&b.text))
}

/// In-memory suggestion service for offline runs and tests.
pub struct MockBackend {
    corpus: Mutex<Corpus>,
}

impl MockBackend {
    pub fn new() -> Self {
        let now = Local::now().naive_local();
        let mut corpus = Corpus::default();
        for word in SAMPLE_WORDS {
            corpus.insert(word, Some("sample"), now);
        }
        Self {
            corpus: Mutex::new(corpus),
        }
    }

    pub fn empty() -> Self {
        Self {
            corpus: Mutex::new(Corpus::default()),
        }
    }

    pub fn with_suggestions(suggestions: Vec<Suggestion>) -> Self {
        let next_id = suggestions.iter().map(|s| s.id).max().unwrap_or(0);
        Self {
            corpus: Mutex::new(Corpus {
                items: suggestions,
                next_id,
            }),
        }
    }

    pub async fn get(&self, id: SuggestionId) -> Option<Suggestion> {
        let corpus = self.corpus.lock().await;
        corpus.items.iter().find(|s| s.id == id).cloned()
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SuggestionBackend for MockBackend {
    async fn fetch_suggestions(&self, query: &SuggestionQuery) -> BackendResult<Vec<Suggestion>> {
        let prefix = query.text.trim().to_lowercase();
        if prefix.is_empty() {
            return Ok(Vec::new());
        }

        let corpus = self.corpus.lock().await;
        let mut matches: Vec<Suggestion> = corpus
            .items
            .iter()
            .filter(|s| s.text.to_lowercase().starts_with(&prefix))
            .filter(|s| match &query.category {
                Some(category) => s.category.as_deref() == Some(category.as_str()),
                None => true,
            })
            .cloned()
            .collect();
        matches.sort_by(rank);
        matches.truncate(query.limit);
        Ok(matches)
    }

    async fn record_selection(&self, id: SuggestionId) -> BackendResult<()> {
        let mut corpus = self.corpus.lock().await;
        let suggestion = corpus.find_mut(id)?;
        suggestion.frequency += 1;
        suggestion.last_used = Some(Local::now().naive_local());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}

#[async_trait]
impl AdminBackend for MockBackend {
    async fn list_suggestions(&self) -> BackendResult<Vec<Suggestion>> {
        let corpus = self.corpus.lock().await;
        Ok(corpus.items.clone())
    }

    async fn list_by_category(&self, category: &str) -> BackendResult<Vec<Suggestion>> {
        let corpus = self.corpus.lock().await;
        Ok(corpus
            .items
            .iter()
            .filter(|s| s.category.as_deref() == Some(category))
            .cloned()
            .collect())
    }

    async fn recently_used(&self, limit: usize) -> BackendResult<Vec<Suggestion>> {
        let corpus = self.corpus.lock().await;
        let mut used: Vec<Suggestion> = corpus
            .items
            .iter()
            .filter(|s| s.last_used.is_some())
            .cloned()
            .collect();
        used.sort_by(|a, b| b.last_used.cmp(&a.last_used));
        used.truncate(limit);
        Ok(used)
    }

    async fn by_frequency_range(
        &self,
        min_freq: u64,
        max_freq: u64,
    ) -> BackendResult<Vec<Suggestion>> {
        let corpus = self.corpus.lock().await;
        let mut hits: Vec<Suggestion> = corpus
            .items
            .iter()
            .filter(|s| (min_freq..=max_freq).contains(&s.frequency))
            .cloned()
            .collect();
        hits.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        Ok(hits)
    }

    async fn create_suggestion(
        &self,
        text: &str,
        category: Option<&str>,
    ) -> BackendResult<Suggestion> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BackendError::InvalidRequest("text must not be empty".to_string()));
        }
        let mut corpus = self.corpus.lock().await;
        Ok(corpus.insert(text, category, Local::now().naive_local()))
    }

    async fn update_suggestion(
        &self,
        id: SuggestionId,
        text: &str,
        category: Option<&str>,
    ) -> BackendResult<Suggestion> {
        let mut corpus = self.corpus.lock().await;
        let suggestion = corpus.find_mut(id)?;
        suggestion.text = text.to_string();
        suggestion.category = category.map(str::to_string);
        Ok(suggestion.clone())
    }

    async fn delete_suggestion(&self, id: SuggestionId) -> BackendResult<()> {
        let mut corpus = self.corpus.lock().await;
        let before = corpus.items.len();
        corpus.items.retain(|s| s.id != id);
        if corpus.items.len() == before {
            return Err(BackendError::NotFound { id });
        }
        Ok(())
    }

    async fn bulk_create(&self, texts: &[String], category: Option<&str>) -> BackendResult<()> {
        let now = Local::now().naive_local();
        let mut corpus = self.corpus.lock().await;
        for text in texts.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
            corpus.insert(text, category, now);
        }
        Ok(())
    }

    async fn stats(&self) -> BackendResult<SuggestionStats> {
        let corpus = self.corpus.lock().await;
        let count = |category: &str| {
            corpus
                .items
                .iter()
                .filter(|s| s.category.as_deref() == Some(category))
                .count() as u64
        };
        Ok(SuggestionStats {
            total_suggestions: corpus.items.len() as u64,
            english_words: count("english"),
            sample_words: count("sample"),
        })
    }

    async fn health(&self) -> BackendResult<String> {
        let corpus = self.corpus.lock().await;
        Ok(format!(
            "Mock backend is working. Total suggestions: {}",
            corpus.items.len()
        ))
    }
}
