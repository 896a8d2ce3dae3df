use crate::interaction::ApplicationCommandOption;
use crate::Snowflake;
use serde::{Deserialize, Serialize};
use serde_repr::Serialize_repr;

/// A command as Discord returns it after registration. Only the fields the registrar reads.
#[derive(Deserialize, Debug)]
pub struct ApplicationCommand {
    pub id: Snowflake,
    pub name: Box<str>,
}

/// Request body for registering a guild command.
#[derive(Serialize, Debug)]
pub struct CreateApplicationCommand {
    pub name: Box<str>,
    pub r#type: ApplicationCommandType,
    pub description: Box<str>,
    pub default_permission: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ApplicationCommandOption>,
}

/// Slash commands are `ChatInput`; the other two live in context menus.
#[derive(Serialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ApplicationCommandType {
    ChatInput = 1,
    User = 2,
    Message = 3,
}
