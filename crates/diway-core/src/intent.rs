//! Intent Classification
//!
//! Maps a free-text visitor question to exactly one category and a canned
//! answer. Matching is lowercase substring search over an ordered rule
//! table; the first rule with a matching keyword wins, so the table is a
//! priority list, not a set of independent rules. Unmatched questions fall
//! through to the `Product` overview answer.
//!
//! The keyword table is a placeholder policy, not a semantic model. Any
//! equivalent first-match-wins rule table can be swapped in via
//! [`IntentClassifier::from_rules`].

use serde::{Deserialize, Serialize};

/// Fixed category labels for visitor questions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentTag {
    Integrations,
    #[serde(rename = "Field Evidence")]
    FieldEvidence,
    Economics,
    Security,
    Product,
}

impl IntentTag {
    /// Display label, also used as the persisted representation
    pub const fn label(self) -> &'static str {
        match self {
            IntentTag::Integrations => "Integrations",
            IntentTag::FieldEvidence => "Field Evidence",
            IntentTag::Economics => "Economics",
            IntentTag::Security => "Security",
            IntentTag::Product => "Product",
        }
    }
}

impl std::fmt::Display for IntentTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classification outcome: category plus the canned answer to display
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentResult {
    pub tag: IntentTag,
    pub answer: String,
}

/// One keyword group in the priority table
#[derive(Clone, Debug)]
pub struct IntentRule {
    /// Category assigned when any keyword matches
    pub tag: IntentTag,

    /// Lowercase substrings tested against the normalized question
    pub keywords: Vec<String>,

    /// Canned answer shown in the chat
    pub answer: String,
}

impl IntentRule {
    pub fn new(tag: IntentTag, keywords: &[&str], answer: impl Into<String>) -> Self {
        Self {
            tag,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            answer: answer.into(),
        }
    }
}

/// Ordered keyword-group classifier
#[derive(Clone, Debug)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
    fallback_answer: String,
}

impl IntentClassifier {
    /// Build a classifier from a custom rule table.
    ///
    /// Rule order is priority order: the first matching rule wins.
    pub fn from_rules(rules: Vec<IntentRule>, fallback_answer: impl Into<String>) -> Self {
        Self {
            rules,
            fallback_answer: fallback_answer.into(),
        }
    }

    /// The rule table in priority order
    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    /// Every tag the classifier can produce, fallback last
    pub fn tags(&self) -> Vec<IntentTag> {
        let mut tags: Vec<IntentTag> = self.rules.iter().map(|rule| rule.tag).collect();
        tags.push(IntentTag::Product);
        tags
    }

    /// Classify a question.
    ///
    /// Total and pure: every input resolves to a tag, identical input
    /// resolves to the identical result.
    pub fn classify(&self, question: &str) -> IntentResult {
        let text = question.to_lowercase();

        for rule in &self.rules {
            if rule.keywords.iter().any(|keyword| text.contains(keyword.as_str())) {
                return IntentResult {
                    tag: rule.tag,
                    answer: rule.answer.clone(),
                };
            }
        }

        IntentResult {
            tag: IntentTag::Product,
            answer: self.fallback_answer.clone(),
        }
    }
}

impl Default for IntentClassifier {
    /// The canonical DIWAY rule table
    fn default() -> Self {
        Self::from_rules(
            vec![
                IntentRule::new(
                    IntentTag::Integrations,
                    &["1c", "erp", "crm", "integration"],
                    "We connect 1C/CRM through the API or scheduled exports. Batch \
                     synchronization is enough for the first stage; near real-time can follow.",
                ),
                IntentRule::new(
                    IntentTag::FieldEvidence,
                    &["photo", "video", "sensor", "camera"],
                    "The field loop confirms paper risks: photos, video, reports and sensors \
                     are linked to specific work items and payments.",
                ),
                IntentRule::new(
                    IntentTag::Economics,
                    &["roi", "payback", "cost", "price"],
                    "The effect is counted from prevented overpayments, less rework and fewer \
                     schedule slips. A pilot is usually scoped to one project and one risk zone.",
                ),
                IntentRule::new(
                    IntentTag::Security,
                    &["security", "access", "permission"],
                    "Role-based access, an action journal and a stored source link for every AI \
                     conclusion keep the recommendations auditable.",
                ),
            ],
            "The rollout sequence: developer data, paper losses, causes, field evidence, then \
             the management cockpit and AI dialogue.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = IntentClassifier::default();
        let first = classifier.classify("What about 1C integration?");
        let second = classifier.classify("What about 1C integration?");
        assert_eq!(first, second);
        assert_eq!(first.tag, IntentTag::Integrations);
    }

    #[test]
    fn test_first_match_wins() {
        // "1c" (Integrations) and "cost" (Economics) both match; the
        // earlier rule takes priority.
        let classifier = IntentClassifier::default();
        let result = classifier.classify("What does the 1C connector cost?");
        assert_eq!(result.tag, IntentTag::Integrations);

        // Reversing the table flips the outcome.
        let reversed = IntentClassifier::from_rules(
            vec![
                IntentRule::new(IntentTag::Economics, &["cost"], "economics"),
                IntentRule::new(IntentTag::Integrations, &["1c"], "integrations"),
            ],
            "overview",
        );
        let result = reversed.classify("What does the 1C connector cost?");
        assert_eq!(result.tag, IntentTag::Economics);
    }

    #[test]
    fn test_nonsense_falls_back_to_product() {
        let classifier = IntentClassifier::default();
        let result = classifier.classify("qwertyuiop");
        assert_eq!(result.tag, IntentTag::Product);
        assert!(!result.answer.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let classifier = IntentClassifier::default();
        assert_eq!(
            classifier.classify("Can we attach PHOTO reports?").tag,
            IntentTag::FieldEvidence
        );
    }

    #[test]
    fn test_tag_labels_round_trip_through_serde() {
        let json = serde_json::to_string(&IntentTag::FieldEvidence).unwrap();
        assert_eq!(json, "\"Field Evidence\"");
        let tag: IntentTag = serde_json::from_str(&json).unwrap();
        assert_eq!(tag, IntentTag::FieldEvidence);
    }
}
