//! Integration tests for the AnswerGenie assistant
//!
//! Drives a chat log through the keyword bot the way the widget does

use ambulance_vibe::bot::{self, Topic, classify, respond};
use ambulance_vibe::chat::{ChatLog, WidgetState, can_send};
use ambulance_vibe::types::{Language, Role};

fn converse(log: &mut ChatLog, text: &str, language: Language) -> String {
    let query = log
        .push_user(text)
        .map(|msg| msg.text.clone())
        .expect("user message should be accepted");
    let reply = respond(&query, language);
    log.push_bot(reply).text.clone()
}

mod conversation_tests {
    use super::*;

    #[test]
    fn test_conversation_alternates_roles() {
        let mut log = ChatLog::new(Language::English);
        converse(&mut log, "hello there", Language::English);
        converse(&mut log, "where is the nearest hospital?", Language::English);

        let roles: Vec<Role> = log.messages().iter().map(|msg| msg.role).collect();
        assert_eq!(
            roles,
            vec![Role::Bot, Role::User, Role::Bot, Role::User, Role::Bot]
        );
        let ids: Vec<u64> = log.messages().iter().map(|msg| msg.id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_reply_follows_selected_language() {
        let mut log = ChatLog::new(Language::English);
        let english = converse(&mut log, "ambulance please", Language::English);
        let hindi = converse(&mut log, "ambulance please", Language::Hindi);

        assert_eq!(english, Topic::Ambulance.reply(Language::English));
        assert_eq!(hindi, Topic::Ambulance.reply(Language::Hindi));
        assert_ne!(english, hindi);
        // Earlier replies keep the language they were sent in.
        assert_eq!(log.messages()[2].text, english);
    }

    #[test]
    fn test_native_keyword_in_native_language() {
        assert_eq!(classify("मुझे एम्बुलेंस चाहिए", Language::Hindi), Topic::Ambulance);
        assert_eq!(classify("मला रुग्णवाहिका हवी आहे", Language::Marathi), Topic::Ambulance);
        assert_eq!(classify("મને એમ્બ્યુલન્સ જોઈએ", Language::Gujarati), Topic::Ambulance);
    }

    #[test]
    fn test_unmatched_query_falls_back() {
        for language in Language::ALL {
            assert_eq!(classify("qwerty zxcv", language), Topic::Fallback);
            assert_eq!(
                respond("qwerty zxcv", language),
                Topic::Fallback.reply(language)
            );
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify("CHEST PAIN since morning", Language::English), Topic::ChestPain);
        assert_eq!(classify("Possible Stroke", Language::Gujarati), Topic::Stroke);
    }

    #[test]
    fn test_emergency_topic_wins_over_greeting() {
        assert_eq!(classify("hello, there was an accident", Language::English), Topic::Accident);
        assert!(Topic::Accident.is_emergency());
        assert!(!Topic::Greeting.is_emergency());
    }

    #[test]
    fn test_every_language_has_welcome_and_replies() {
        for language in Language::ALL {
            assert!(!bot::welcome_message(language).is_empty());
            assert!(!bot::keywords(language).is_empty());
            for topic in Topic::ORDER {
                assert!(!topic.reply(language).is_empty(), "{topic:?} in {language}");
            }
        }
    }
}

mod widget_tests {
    use super::*;

    #[test]
    fn test_widget_cycle() {
        let state = WidgetState::default();
        assert!(!state.is_visible());

        let open = state.toggle_open();
        assert_eq!(open, WidgetState::Open);

        let minimized = open.toggle_minimize();
        assert_eq!(minimized, WidgetState::Minimized);
        assert!(minimized.is_visible());

        assert_eq!(minimized.toggle_minimize(), WidgetState::Open);
        assert_eq!(minimized.toggle_open(), WidgetState::Closed);
    }

    #[test]
    fn test_send_gate() {
        assert!(can_send("help", false));
        assert!(!can_send("help", true));
        assert!(!can_send("  \n ", false));
    }
}
