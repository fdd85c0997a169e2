use super::message::Message;

/// A structured prompt containing an ordered sequence of messages.
#[derive(Debug, Clone, Default)]
pub struct Prompt {
    messages: Vec<Message>,
}

impl Prompt {
    /// Create a new empty prompt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a prompt with a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(content)],
        }
    }

    /// Create a prompt with a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(content)],
        }
    }

    /// Add a system message.
    pub fn with_system(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::system(content));
        self
    }

    /// Add a user message.
    pub fn with_user(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::user(content));
        self
    }

    /// Add an assistant message.
    pub fn with_assistant(mut self, content: impl Into<String>) -> Self {
        self.messages.push(Message::assistant(content));
        self
    }

    /// Add a user message with an attached image.
    pub fn with_user_image(
        mut self,
        text: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        self.messages.push(Message::user_with_image(text, image_url));
        self
    }

    /// Add a message.
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Get the messages in conversation order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Whether the prompt holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<&str> for Prompt {
    fn from(s: &str) -> Self {
        Prompt::user(s)
    }
}

impl From<String> for Prompt {
    fn from(s: String) -> Self {
        Prompt::user(s)
    }
}

impl From<Message> for Prompt {
    fn from(message: Message) -> Self {
        Prompt {
            messages: vec![message],
        }
    }
}

impl From<Vec<Message>> for Prompt {
    fn from(messages: Vec<Message>) -> Self {
        Prompt { messages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn test_prompt_builder() {
        let prompt = Prompt::system("You are a writing assistant")
            .with_user("Summarize this note")
            .with_assistant("Sure, here is a summary.");

        let messages = prompt.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role(), Role::System);
        assert_eq!(messages[1].role(), Role::User);
        assert_eq!(messages[2].role(), Role::Assistant);
    }

    #[test]
    fn test_from_impls() {
        let from_str: Prompt = "Hello".into();
        assert_eq!(from_str.messages().len(), 1);

        let from_string: Prompt = "Hello".to_string().into();
        assert_eq!(from_string.messages().len(), 1);

        let from_vec: Prompt = vec![Message::user("a"), Message::assistant("b")].into();
        assert_eq!(from_vec.messages().len(), 2);
        assert!(!from_vec.is_empty());
    }
}
