use serde::Serialize;

/// Body used both to edit the original interaction response and to create a followup message.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WebhookMessage {
    pub content: Box<str>,
}

impl WebhookMessage {
    pub fn new(content: impl Into<Box<str>>) -> Self {
        Self {
            content: content.into(),
        }
    }
}
