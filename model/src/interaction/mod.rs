mod application_command;
pub use application_command::{
    ApplicationCommand, ApplicationCommandType, CreateApplicationCommand,
};

mod application_command_option;
pub use application_command_option::{ApplicationCommandOption, ApplicationCommandOptionType};

mod interaction;
pub use interaction::{
    ApplicationCommandInteraction, Interaction, InteractionType, PingInteraction,
};

mod application_command_interaction_data;
pub use application_command_interaction_data::ApplicationCommandInteractionData;

mod application_command_interaction_data_option;
pub use application_command_interaction_data_option::ApplicationCommandInteractionDataOption;

mod interaction_response;
pub use interaction_response::{InteractionResponse, InteractionResponseType};

mod interaction_application_command_callback_data;
pub use interaction_application_command_callback_data::InteractionApplicationCommandCallbackData;

mod webhook_message;
pub use webhook_message::WebhookMessage;
