use crate::interaction::ApplicationCommandInteractionData;
use crate::Snowflake;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_repr::{Deserialize_repr, Serialize_repr};

/// An inbound interaction. Only the types the gateway acts upon are modelled; any other type
/// fails to deserialize.
#[derive(Serialize, Debug)]
#[serde(untagged)]
#[non_exhaustive]
pub enum Interaction {
    Ping(Box<PingInteraction>),
    ApplicationCommand(Box<ApplicationCommandInteraction>),
}

#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
    ApplicationCommandAutoComplete = 4,
    ModalSubmit = 5,
}

impl TryFrom<u64> for InteractionType {
    type Error = Box<str>;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            3 => Self::MessageComponent,
            4 => Self::ApplicationCommandAutoComplete,
            5 => Self::ModalSubmit,
            _ => return Err(format!("invalid interaction type \"{}\"", value).into_boxed_str()),
        })
    }
}

impl InteractionType {
    /// Reads the `type` field of a raw payload without decoding anything else.
    pub fn peek(raw: &[u8]) -> Option<u64> {
        #[derive(Deserialize)]
        struct Peek {
            r#type: u64,
        }

        serde_json::from_slice::<Peek>(raw).ok().map(|p| p.r#type)
    }
}

// ============================================================================
// Ping Interaction
// ============================================================================

// Discord sends more fields with a ping, but none of them are needed to answer it
#[derive(Serialize, Deserialize, Debug)]
pub struct PingInteraction {
    pub r#type: InteractionType,
}

// ============================================================================
// Application Command Interaction
// ============================================================================

#[derive(Serialize, Deserialize, Debug)]
pub struct ApplicationCommandInteraction {
    pub id: Box<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,
    pub r#type: InteractionType,
    pub data: ApplicationCommandInteractionData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Snowflake>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Snowflake>,
    pub token: Box<str>,
}

impl ApplicationCommandInteraction {
    /// The sub-command the user picked: the name of the first entry in the option list.
    pub fn sub_command(&self) -> Option<&str> {
        self.data
            .options
            .first()
            .map(|option| &*option.name)
    }
}

impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        let interaction_type = value
            .get("type")
            .and_then(Value::as_u64)
            .ok_or_else(|| Box::from("interaction type was not an integer"))
            .and_then(InteractionType::try_from)
            .map_err(D::Error::custom)?;

        let interaction = match interaction_type {
            InteractionType::Ping => serde_json::from_value(value).map(Interaction::Ping),
            InteractionType::ApplicationCommand => {
                serde_json::from_value(value).map(Interaction::ApplicationCommand)
            }
            other => {
                return Err(D::Error::custom(format!(
                    "unsupported interaction type {:?}",
                    other
                )))
            }
        }
        .map_err(D::Error::custom)?;

        Ok(interaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_bare_ping() {
        let interaction: Interaction = serde_json::from_str(r#"{"type":1}"#).unwrap();
        assert!(matches!(interaction, Interaction::Ping(_)));

        let interaction: Interaction =
            serde_json::from_str(r#"{"type":1,"id":12345,"application_id":"1","version":1}"#)
                .unwrap();
        assert!(matches!(interaction, Interaction::Ping(_)));
    }

    #[test]
    fn test_deserialize_application_command() {
        let raw = r#"{"type":2,"id":"I1","token":"T1","data":{"options":[{"name":"start"}]}}"#;
        let interaction: Interaction = serde_json::from_str(raw).unwrap();

        match interaction {
            Interaction::ApplicationCommand(command) => {
                assert_eq!(&*command.id, "I1");
                assert_eq!(&*command.token, "T1");
                assert_eq!(command.sub_command(), Some("start"));
            }
            other => panic!("unexpected interaction {:?}", other),
        }
    }

    #[test]
    fn test_missing_options_has_no_sub_command() {
        let raw = r#"{"type":2,"id":"I1","token":"T1","data":{"name":"game"}}"#;
        let interaction: Interaction = serde_json::from_str(raw).unwrap();

        match interaction {
            Interaction::ApplicationCommand(command) => assert_eq!(command.sub_command(), None),
            other => panic!("unexpected interaction {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_type_is_rejected() {
        assert!(serde_json::from_str::<Interaction>(r#"{"type":3}"#).is_err());
        assert!(serde_json::from_str::<Interaction>(r#"{"type":42}"#).is_err());
        assert!(serde_json::from_str::<Interaction>(r#"{"type":"1"}"#).is_err());
    }

    #[test]
    fn test_peek() {
        assert_eq!(InteractionType::peek(br#"{"type":2,"id":"x"}"#), Some(2));
        assert_eq!(InteractionType::peek(b"not json"), None);
    }
}
