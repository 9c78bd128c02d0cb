//! Question Journal
//!
//! Owns the in-memory question log and keeps it synchronized with the
//! injected storage port: loaded once at session start, mutated only by
//! appension, the full sequence written back after every appension.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::error::Result;
use crate::intent::{IntentClassifier, IntentResult, IntentTag};
use crate::question::{QuestionLog, QuestionRecord};
use crate::store::QuestionStore;

/// Outcome of a successful appension
#[derive(Clone, Debug)]
pub struct Appended {
    /// Canned answer for display in the chat
    pub answer: String,

    /// The record that was prepended
    pub record: QuestionRecord,
}

/// The question journal: log, classifier and storage port
pub struct QuestionJournal<S: QuestionStore> {
    store: S,
    classifier: IntentClassifier,
    log: QuestionLog,
}

impl<S: QuestionStore> QuestionJournal<S> {
    /// Load the journal from the store.
    ///
    /// An absent, unreadable, unparsable or non-array payload yields an
    /// empty log. That silent fallback is the only recovery path for
    /// corrupted persisted state.
    pub fn load(store: S) -> Self {
        let log = match store.read() {
            Ok(Some(raw)) => decode(&raw),
            Ok(None) => QuestionLog::new(),
            Err(err) => {
                tracing::warn!("question store unreadable, starting empty: {err}");
                QuestionLog::new()
            }
        };

        Self {
            store,
            classifier: IntentClassifier::default(),
            log,
        }
    }

    /// Replace the default rule table
    pub fn with_classifier(mut self, classifier: IntentClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// The current log, newest first
    pub fn log(&self) -> &QuestionLog {
        &self.log
    }

    /// The classifier in use
    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    /// The underlying storage port
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Classify a visitor question, prepend it to the log and persist the
    /// full sequence before returning.
    ///
    /// Whitespace-only input is a no-op: no record is created and nothing
    /// is written. Returns the canned answer plus the new record.
    pub fn append(&mut self, question: &str) -> Result<Option<Appended>> {
        let text = question.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let IntentResult { tag, answer } = self.classifier.classify(text);
        let record = QuestionRecord::new(text, tag);
        self.log.prepend(record.clone());

        let payload = self.export_payload()?;
        self.store.write(&payload)?;
        tracing::debug!(tag = %record.tag, "question appended");

        Ok(Some(Appended { answer, record }))
    }

    /// Pretty-printed JSON array of the current log.
    ///
    /// Byte-identical to the payload the last appension persisted; does
    /// not mutate the log.
    pub fn export_payload(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.log)?)
    }

    /// Tag -> count over the current log
    pub fn stats(&self) -> HashMap<IntentTag, usize> {
        self.log.stats()
    }
}

/// Export artifact name for `date`, e.g. `developer-questions-2026-08-07.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("developer-questions-{}.json", date.format("%Y-%m-%d"))
}

fn decode(raw: &str) -> QuestionLog {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        tracing::warn!("discarding unreadable question log: {err}");
        QuestionLog::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_append_classifies_and_prepends() {
        let mut journal = QuestionJournal::load(MemoryStore::new());

        let appended = journal
            .append("What about 1C integration?")
            .unwrap()
            .expect("non-empty question must append");

        assert_eq!(appended.record.tag, IntentTag::Integrations);
        assert_eq!(journal.log().len(), 1);
        assert_eq!(journal.log().records()[0].id, appended.record.id);

        journal.append("And the price?").unwrap();
        assert_eq!(journal.log().len(), 2);
        assert_eq!(journal.log().records()[0].text, "And the price?");
    }

    #[test]
    fn test_blank_input_is_a_no_op() {
        let mut journal = QuestionJournal::load(MemoryStore::new());

        assert!(journal.append("").unwrap().is_none());
        assert!(journal.append("   ").unwrap().is_none());

        assert!(journal.log().is_empty());
        assert_eq!(journal.store().payload(), None);
    }

    #[test]
    fn test_append_trims_the_question() {
        let mut journal = QuestionJournal::load(MemoryStore::new());
        let appended = journal.append("  how much does it cost?  ").unwrap().unwrap();
        assert_eq!(appended.record.text, "how much does it cost?");
    }

    #[test]
    fn test_round_trip_survives_restart() {
        let mut journal = QuestionJournal::load(MemoryStore::new());
        let appended = journal.append("Do you read camera feeds?").unwrap().unwrap();

        // The persisted payload seeds a fresh journal, simulating a restart.
        let payload = journal.store().payload().expect("append must persist");
        let reloaded = QuestionJournal::load(MemoryStore::with_payload(payload));

        assert_eq!(reloaded.log().len(), 1);
        assert_eq!(reloaded.log().first(), Some(&appended.record));
    }

    #[test]
    fn test_corrupted_payload_falls_back_to_empty() {
        let journal = QuestionJournal::load(MemoryStore::with_payload("not json"));
        assert!(journal.log().is_empty());

        // A non-array payload is discarded too.
        let journal = QuestionJournal::load(MemoryStore::with_payload("{}"));
        assert!(journal.log().is_empty());
    }

    #[test]
    fn test_stats_counts_appended_tags() {
        let mut journal = QuestionJournal::load(MemoryStore::new());
        journal.append("What is the payback?").unwrap();
        journal.append("Who gets access?").unwrap();

        let stats = journal.stats();
        assert_eq!(stats.get(&IntentTag::Economics), Some(&1));
        assert_eq!(stats.get(&IntentTag::Security), Some(&1));
        assert_eq!(stats.len(), 2);
    }

    #[test]
    fn test_export_payload_matches_log_and_store() {
        let mut journal = QuestionJournal::load(MemoryStore::new());
        journal.append("Connect our ERP").unwrap();
        journal.append("Show photo evidence").unwrap();

        let payload = journal.export_payload().unwrap();

        // Parses back deeply equal to the in-memory sequence.
        let parsed: QuestionLog = serde_json::from_str(&payload).unwrap();
        assert_eq!(&parsed, journal.log());

        // Byte-identical to the persisted representation.
        assert_eq!(journal.store().payload().as_deref(), Some(payload.as_str()));
    }

    #[test]
    fn test_export_file_name_embeds_the_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(export_file_name(date), "developer-questions-2026-08-07.json");
    }
}
