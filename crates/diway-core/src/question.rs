//! Question Records
//!
//! The persisted shape of a logged visitor question and the newest-first
//! log that holds them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::intent::IntentTag;

/// A single logged visitor question
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Opaque unique id, generated at creation time
    pub id: String,

    /// The question as entered, trimmed; never empty
    pub text: String,

    /// Category assigned by the classifier
    pub tag: IntentTag,

    /// Creation timestamp (ISO-8601, UTC)
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl QuestionRecord {
    /// Create a record for an already-trimmed question
    pub fn new(text: impl Into<String>, tag: IntentTag) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            tag,
            created_at: Utc::now(),
        }
    }
}

/// Ordered question log, newest first.
///
/// Insertion always prepends; the sequence is never reordered or
/// deduplicated. Serializes transparently as a bare JSON array, which is
/// also the persisted layout.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionLog {
    records: Vec<QuestionRecord>,
}

impl QuestionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }

    /// Insert at the front
    pub fn prepend(&mut self, record: QuestionRecord) {
        self.records.insert(0, record);
    }

    /// All records, newest first
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    /// Most recent record
    pub fn first(&self) -> Option<&QuestionRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tag -> count, recomputed on demand from the full sequence
    pub fn stats(&self) -> HashMap<IntentTag, usize> {
        let mut stats = HashMap::new();
        for record in &self.records {
            *stats.entry(record.tag).or_insert(0) += 1;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_keeps_newest_first() {
        let mut log = QuestionLog::new();
        log.prepend(QuestionRecord::new("first", IntentTag::Product));
        log.prepend(QuestionRecord::new("second", IntentTag::Economics));

        assert_eq!(log.len(), 2);
        assert_eq!(log.first().unwrap().text, "second");
        assert_eq!(log.records()[1].text, "first");
    }

    #[test]
    fn test_stats_counts_per_tag() {
        let mut log = QuestionLog::new();
        log.prepend(QuestionRecord::new("a", IntentTag::Economics));
        log.prepend(QuestionRecord::new("b", IntentTag::Security));
        log.prepend(QuestionRecord::new("c", IntentTag::Economics));

        let stats = log.stats();
        assert_eq!(stats.get(&IntentTag::Economics), Some(&2));
        assert_eq!(stats.get(&IntentTag::Security), Some(&1));
        assert_eq!(stats.get(&IntentTag::Product), None);
    }

    #[test]
    fn test_record_ids_do_not_collide() {
        let a = QuestionRecord::new("same text", IntentTag::Product);
        let b = QuestionRecord::new("same text", IntentTag::Product);
        assert_ne!(a.id, b.id);
    }
}
