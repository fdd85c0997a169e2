use serde::{Deserialize, Serialize};

/// A message in a conversation. Ordering of messages is significant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: MessageContent,
}

/// Message content: plain text, or a list of typed parts for multimodal turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

/// A single content part of a multimodal message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ContentPart {
    Text(String),
    /// Reference to an image by URL (remote or data URL).
    Image { url: String },
}

impl Message {
    /// Create a new message with role and text content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Message {
            role,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Message::new(Role::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Message::new(Role::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Message::new(Role::Assistant, content)
    }

    /// Create a user message with text and an attached image.
    pub fn user_with_image(text: impl Into<String>, image_url: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: MessageContent::Parts(vec![
                ContentPart::Text(text.into()),
                ContentPart::Image {
                    url: image_url.into(),
                },
            ]),
        }
    }

    /// Get the role of this message.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether this message carries any image content.
    pub fn has_image(&self) -> bool {
        match &self.content {
            MessageContent::Text(_) => false,
            MessageContent::Parts(parts) => parts
                .iter()
                .any(|part| matches!(part, ContentPart::Image { .. })),
        }
    }

    /// All text content of this message, image parts skipped.
    pub fn text_content(&self) -> String {
        match &self.content {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(|part| match part {
                    ContentPart::Text(text) => Some(text.as_str()),
                    ContentPart::Image { .. } => None,
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Role of a message participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_message_has_no_image() {
        let msg = Message::user("Hello");
        assert!(!msg.has_image());
        assert_eq!(msg.text_content(), "Hello");
        assert_eq!(msg.role(), Role::User);
    }

    #[test]
    fn test_multimodal_message_detection() {
        let msg = Message::user_with_image("What is in this picture?", "https://example.com/a.png");
        assert!(msg.has_image());
        assert_eq!(msg.text_content(), "What is in this picture?");
    }

    #[test]
    fn test_parts_without_image_are_not_multimodal() {
        let msg = Message {
            role: Role::User,
            content: MessageContent::Parts(vec![
                ContentPart::Text("first".to_string()),
                ContentPart::Text("second".to_string()),
            ]),
        };
        assert!(!msg.has_image());
        assert_eq!(msg.text_content(), "first\nsecond");
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }
}
