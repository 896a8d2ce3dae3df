use serde::{Deserialize, Serialize};

/// Input handed to the state machine when a slash command is run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct WorkflowRequest {
    pub interaction_id: Box<str>,
    pub interaction_token: Box<str>,
    pub sub_command: Box<str>,
}

/// What the state machine passes to the responder once it has a result for the user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction_id: Option<Box<str>>,
    pub interaction_token: Box<str>,
    pub discord: DiscordMessage,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct DiscordMessage {
    pub message: Box<str>,
}

impl NotificationRequest {
    pub fn message(&self) -> &str {
        &self.discord.message
    }
}
