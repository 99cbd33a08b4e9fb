/// Outbound message type for the sendmessage route
use serde::Serialize;
use serde_json::json;

/// Server to client echo payload
/// {"message": <string>}
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoMessage {
    /// Echoed message text
    message: String,
}

impl EchoMessage {
    /// Create an echo payload from the extracted message text
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Convert message to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_value(self).unwrap_or(json!(null)).to_string()
    }

    /// Message text accessor
    pub fn message(&self) -> &str {
        &self.message
    }
}
