use crate::interaction::InteractionApplicationCommandCallbackData;
use serde::Serialize;
use serde_repr::Serialize_repr;

#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum InteractionResponse {
    PongResponse(SimpleInteractionResponse),
    ChannelMessageWithSource(ApplicationCommandResponse),
    DeferredChannelMessageWithSource(SimpleInteractionResponse),
}

#[derive(Serialize, Debug)]
pub struct SimpleInteractionResponse {
    r#type: InteractionResponseType,
}

#[derive(Serialize, Debug)]
pub struct ApplicationCommandResponse {
    r#type: InteractionResponseType,
    data: InteractionApplicationCommandCallbackData,
}

#[derive(Serialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum InteractionResponseType {
    Pong = 1,
    ChannelMessageWithSource = 4,
    DeferredChannelMessageWithSource = 5,
}

impl InteractionResponse {
    pub fn new_pong() -> InteractionResponse {
        InteractionResponse::PongResponse(SimpleInteractionResponse {
            r#type: InteractionResponseType::Pong,
        })
    }

    pub fn new_channel_message_with_source(
        data: InteractionApplicationCommandCallbackData,
    ) -> InteractionResponse {
        InteractionResponse::ChannelMessageWithSource(ApplicationCommandResponse {
            r#type: InteractionResponseType::ChannelMessageWithSource,
            data,
        })
    }

    /// Tells Discord to show a loading state; the real answer replaces it later by editing the
    /// original response.
    pub fn new_deferred_message_with_source() -> InteractionResponse {
        InteractionResponse::DeferredChannelMessageWithSource(SimpleInteractionResponse {
            r#type: InteractionResponseType::DeferredChannelMessageWithSource,
        })
    }
}
