//! Rule-based response generation for the AnswerGenie assistant.
//!
//! Replies come from a fixed, ordered keyword table per language. The first
//! keyword found as a substring of the lowercased query wins; there is no
//! ranking and no ambiguity resolution.
//!
//! ```rust
//! use ambulance_vibe::bot::{Topic, classify, respond};
//! use ambulance_vibe::types::Language;
//!
//! assert_eq!(classify("I need an ambulance", Language::English), Topic::Ambulance);
//! assert!(respond("I need an ambulance", Language::Hindi).contains("एम्बुलेंस"));
//! ```

mod phrases;

use crate::types::Language;
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    Emergency,
    Ambulance,
    Hospital,
    ChestPain,
    Stroke,
    Bleeding,
    HeartAttack,
    Accident,
    Help,
    Location,
    Capabilities,
    Thanks,
    Greeting,
    Fallback,
}

impl Topic {
    /// Matching order. Emergency topics come before the generic ones.
    pub const ORDER: [Topic; 13] = [
        Topic::Emergency,
        Topic::Ambulance,
        Topic::Hospital,
        Topic::ChestPain,
        Topic::Stroke,
        Topic::Bleeding,
        Topic::HeartAttack,
        Topic::Accident,
        Topic::Help,
        Topic::Location,
        Topic::Capabilities,
        Topic::Thanks,
        Topic::Greeting,
    ];

    pub fn is_emergency(self) -> bool {
        matches!(
            self,
            Topic::Emergency
                | Topic::Ambulance
                | Topic::Hospital
                | Topic::ChestPain
                | Topic::Stroke
                | Topic::Bleeding
                | Topic::HeartAttack
                | Topic::Accident
                | Topic::Help
        )
    }

    pub fn reply(self, language: Language) -> &'static str {
        phrases::reply(self, language)
    }
}

type KeywordTable = Vec<(&'static str, Topic)>;

static KEYWORDS: Lazy<HashMap<Language, KeywordTable>> = Lazy::new(|| {
    Language::ALL
        .into_iter()
        .map(|language| (language, build_table(language)))
        .collect()
});

fn build_table(language: Language) -> KeywordTable {
    let mut table = Vec::new();
    for topic in Topic::ORDER {
        for keyword in phrases::native_keywords(topic, language) {
            table.push((*keyword, topic));
        }
        for keyword in phrases::english_keywords(topic) {
            table.push((*keyword, topic));
        }
    }
    table
}

/// Ordered `(keyword, topic)` pairs consulted for `language`.
pub fn keywords(language: Language) -> &'static [(&'static str, Topic)] {
    KEYWORDS
        .get(&language)
        .map(|table| table.as_slice())
        .unwrap_or_default()
}

pub fn classify(query: &str, language: Language) -> Topic {
    let query = query.to_lowercase();
    keywords(language)
        .iter()
        .find(|(keyword, _)| query.contains(keyword))
        .map(|(_, topic)| *topic)
        .unwrap_or(Topic::Fallback)
}

pub fn respond(query: &str, language: Language) -> &'static str {
    let topic = classify(query, language);
    tracing::debug!(?topic, %language, "matched assistant topic");
    topic.reply(language)
}

pub fn welcome_message(language: Language) -> &'static str {
    phrases::welcome(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emergency_keywords_win_over_generic() {
        // "help me" is shadowed by the earlier "help" keyword.
        assert_eq!(classify("please help me", Language::English), Topic::Help);
        assert_eq!(
            classify("hello, I had an accident", Language::English),
            Topic::Accident
        );
    }

    #[test]
    fn test_query_is_lowercased() {
        assert_eq!(classify("CHEST PAIN!!", Language::English), Topic::ChestPain);
        assert_eq!(classify("Stroke", Language::English), Topic::Stroke);
    }

    #[test]
    fn test_heart_attack_spellings() {
        assert_eq!(classify("heartattack", Language::English), Topic::HeartAttack);
        assert_eq!(
            classify("my father has a heart attack", Language::English),
            Topic::HeartAttack
        );
    }

    #[test]
    fn test_generic_topics() {
        assert_eq!(classify("where is my location", Language::English), Topic::Location);
        assert_eq!(classify("what can you do?", Language::English), Topic::Capabilities);
        assert_eq!(classify("thanks a lot", Language::English), Topic::Thanks);
        assert_eq!(classify("hello there", Language::English), Topic::Greeting);
    }

    #[test]
    fn test_fallback() {
        assert_eq!(classify("qwerty", Language::English), Topic::Fallback);
        assert_eq!(classify("", Language::Gujarati), Topic::Fallback);
        assert!(respond("qwerty", Language::English).starts_with("I understand you need assistance"));
    }

    #[test]
    fn test_native_keywords() {
        assert_eq!(classify("मुझे अस्पताल जाना है", Language::Hindi), Topic::Hospital);
        assert_eq!(classify("माझा अपघात झाला", Language::Marathi), Topic::Accident);
        assert_eq!(classify("મને મદદ કરો", Language::Gujarati), Topic::Help);
    }

    #[test]
    fn test_english_keywords_work_in_every_language() {
        for language in Language::ALL {
            assert_eq!(classify("ambulance please", language), Topic::Ambulance);
            assert_eq!(
                respond("ambulance please", language),
                Topic::Ambulance.reply(language)
            );
        }
    }

    #[test]
    fn test_topic_order_beats_keyword_language() {
        // Topic order still decides: hospital precedes help.
        assert_eq!(classify("help hospital", Language::Hindi), Topic::Hospital);
    }

    #[test]
    fn test_every_topic_has_reply_in_every_language() {
        for language in Language::ALL {
            for topic in Topic::ORDER {
                assert!(!topic.reply(language).is_empty());
            }
            assert!(!Topic::Fallback.reply(language).is_empty());
            assert!(!welcome_message(language).is_empty());
        }
    }
}
