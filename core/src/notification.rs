//! Notification and bubble content models

use serde::{Deserialize, Serialize};

/// A local notification for an incoming message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalNotification {
    /// Conversation the message belongs to
    pub conversation_id: String,
    /// Display name of the sender
    pub sender_name: String,
    /// Message body text
    pub body: String,
    /// Avatar asset handle, if the sender has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl LocalNotification {
    pub fn new(
        conversation_id: impl Into<String>,
        sender_name: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            conversation_id: conversation_id.into(),
            sender_name: sender_name.into(),
            body: body.into(),
            avatar: None,
        }
    }
}

/// Displayable bubble content derived from a notification
///
/// Construction is fallible: a notification with nothing to show yields
/// `None` and the display trigger becomes a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatHeadContent {
    pub title: String,
    pub text: String,
    pub avatar: Option<String>,
}

impl ChatHeadContent {
    pub fn from_notification(note: &LocalNotification) -> Option<Self> {
        let text = note.body.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            title: note.sender_name.clone(),
            text: text.to_string(),
            avatar: note.avatar.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_from_notification() {
        let note = LocalNotification::new("c1", "Alice", "  hello  ");
        let content = ChatHeadContent::from_notification(&note).unwrap();
        assert_eq!(content.title, "Alice");
        assert_eq!(content.text, "hello");
    }

    #[test]
    fn blank_body_yields_no_content() {
        let note = LocalNotification::new("c1", "Alice", "   ");
        assert!(ChatHeadContent::from_notification(&note).is_none());
    }
}
