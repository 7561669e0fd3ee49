use crate::bot;
use crate::types::{ChatMessage, Language, Role};
use time::OffsetDateTime;

/// Session-local conversation with the assistant.
///
/// Ids start at 1 with the welcome message and strictly increase. Nothing is
/// persisted; the log lives as long as the widget that owns it.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatLog {
    pub fn new(language: Language) -> Self {
        let mut log = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        log.push_bot(bot::welcome_message(language));
        log
    }

    /// Appends the user's turn. Blank input is rejected.
    pub fn push_user(&mut self, text: &str) -> Option<&ChatMessage> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(self.push(Role::User, trimmed.to_string()))
    }

    pub fn push_bot(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Role::Bot, text.into())
    }

    fn push(&mut self, role: Role, text: String) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            text,
            role,
            timestamp: current_time(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last_bot(&self) -> Option<&ChatMessage> {
        self.messages.iter().rev().find(|msg| msg.is_bot())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn current_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetState {
    #[default]
    Closed,
    Open,
    Minimized,
}

impl WidgetState {
    pub fn toggle_open(self) -> Self {
        match self {
            WidgetState::Closed => WidgetState::Open,
            WidgetState::Open | WidgetState::Minimized => WidgetState::Closed,
        }
    }

    pub fn toggle_minimize(self) -> Self {
        match self {
            WidgetState::Open => WidgetState::Minimized,
            WidgetState::Minimized => WidgetState::Open,
            WidgetState::Closed => WidgetState::Closed,
        }
    }

    pub fn is_visible(self) -> bool {
        !matches!(self, WidgetState::Closed)
    }
}

/// Whether the composer may submit `input` right now.
pub fn can_send(input: &str, bot_typing: bool) -> bool {
    !bot_typing && !input.trim().is_empty()
}

/// Where a recognised transcript goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TranscriptRoute {
    Send,
    /// The bot is still replying; the transcript waits in the composer.
    Draft,
    Ignore,
}

pub fn route_transcript(transcript: &str, bot_typing: bool) -> TranscriptRoute {
    if transcript.trim().is_empty() {
        TranscriptRoute::Ignore
    } else if bot_typing {
        TranscriptRoute::Draft
    } else {
        TranscriptRoute::Send
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log_starts_with_welcome() {
        let log = ChatLog::new(Language::English);
        assert_eq!(log.len(), 1);
        let first = &log.messages()[0];
        assert_eq!(first.id, 1);
        assert!(first.is_bot());
        assert!(first.text.contains("AnswerGenie"));
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut log = ChatLog::new(Language::Hindi);
        log.push_user("hello");
        log.push_bot("reply");
        log.push_user("again");
        let ids: Vec<u64> = log.messages().iter().map(|msg| msg.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_blank_user_input_rejected() {
        let mut log = ChatLog::new(Language::English);
        assert!(log.push_user("   ").is_none());
        assert!(log.push_user("").is_none());
        assert_eq!(log.len(), 1);
        let msg = log.push_user("  bleeding  ").cloned();
        assert_eq!(msg.map(|m| m.text), Some("bleeding".to_string()));
    }

    #[test]
    fn test_last_bot() {
        let mut log = ChatLog::new(Language::English);
        log.push_user("hi");
        assert_eq!(log.last_bot().map(|m| m.id), Some(1));
        log.push_bot("hello");
        assert_eq!(log.last_bot().map(|m| m.text.as_str()), Some("hello"));
    }

    #[test]
    fn test_widget_transitions() {
        let state = WidgetState::default();
        assert_eq!(state, WidgetState::Closed);
        assert_eq!(state.toggle_minimize(), WidgetState::Closed);
        let open = state.toggle_open();
        assert_eq!(open, WidgetState::Open);
        let minimized = open.toggle_minimize();
        assert_eq!(minimized, WidgetState::Minimized);
        assert!(minimized.is_visible());
        assert_eq!(minimized.toggle_minimize(), WidgetState::Open);
        assert_eq!(minimized.toggle_open(), WidgetState::Closed);
    }

    #[test]
    fn test_can_send() {
        assert!(can_send("help", false));
        assert!(!can_send("help", true));
        assert!(!can_send("  ", false));
    }

    #[test]
    fn test_transcript_while_typing_becomes_draft() {
        assert_eq!(route_transcript("chest pain", false), TranscriptRoute::Send);
        assert_eq!(route_transcript("chest pain", true), TranscriptRoute::Draft);
        assert_eq!(route_transcript("  ", true), TranscriptRoute::Ignore);
        assert_eq!(route_transcript("", false), TranscriptRoute::Ignore);
    }
}
