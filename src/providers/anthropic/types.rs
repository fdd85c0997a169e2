use crate::types::{Message, Role};
use serde::{Deserialize, Serialize};

/// Messages endpoint request body. Streaming is always disabled on this
/// path, see the client.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<AnthropicMessage>,
    pub stream: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnthropicMessage {
    pub role: Role,
    pub content: String,
}

impl From<&Message> for AnthropicMessage {
    fn from(message: &Message) -> Self {
        // Image parts are not supported on this path; only the text
        // content of a multimodal turn is forwarded.
        AnthropicMessage {
            role: message.role,
            content: message.text_content(),
        }
    }
}

/// Messages endpoint response body. Only the first content block is read.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    pub text: String,
}

/// Error body shape of the messages endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetails,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: String,
}
