use crate::{Error, Result};
use common::discord::RestClient;
use common::secrets::SecretBundle;
use model::interaction::{
    ApplicationCommandOption, ApplicationCommandType, CreateApplicationCommand,
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrarResult {
    /// Discord's id for the registered command, stored by the provisioner and handed back on
    /// delete.
    pub physical_id: String,
}

/// The guild command every deployment exposes: `/<name> status|start|stop`.
pub fn command_definition(name: &str) -> CreateApplicationCommand {
    CreateApplicationCommand {
        name: Box::from(name),
        r#type: ApplicationCommandType::ChatInput,
        description: Box::from("Game server commands"),
        default_permission: false,
        options: vec![
            ApplicationCommandOption::sub_command("status", "Check the status of the server"),
            ApplicationCommandOption::sub_command("start", "Start the server, if it isn't running"),
            ApplicationCommandOption::sub_command("stop", "Stop the server, if it is running"),
        ],
    }
}

pub struct Registrar {
    rest: RestClient,
    secrets: Arc<SecretBundle>,
    command_name: Box<str>,
}

impl Registrar {
    pub fn new(rest: RestClient, secrets: Arc<SecretBundle>, command_name: &str) -> Registrar {
        Registrar {
            rest,
            secrets,
            command_name: Box::from(command_name),
        }
    }

    pub async fn reconcile(&self, action: Action, prior_id: Option<&str>) -> Result<RegistrarResult> {
        match action {
            // Registration upserts by name, so an update is a second create
            Action::Create | Action::Update => self.register().await,
            Action::Delete => {
                let physical_id = prior_id.ok_or(Error::MissingPhysicalId)?;
                self.delete(physical_id).await;

                Ok(RegistrarResult {
                    physical_id: physical_id.to_owned(),
                })
            }
        }
    }

    async fn register(&self) -> Result<RegistrarResult> {
        let definition = command_definition(&self.command_name);

        let command = self
            .rest
            .create_guild_command(
                self.secrets.app_id,
                self.secrets.guild_id,
                &self.secrets.bot_authorization(),
                &definition,
            )
            .await?;

        info!(command_id = %command.id, name = %command.name, "Registered command");

        Ok(RegistrarResult {
            physical_id: command.id.to_string(),
        })
    }

    /// Best effort: the command may already be gone, and a failed cleanup must not block
    /// tearing down the rest of the deployment.
    async fn delete(&self, command_id: &str) {
        let res = self
            .rest
            .delete_guild_command(
                self.secrets.app_id,
                self.secrets.guild_id,
                command_id,
                &self.secrets.bot_authorization(),
            )
            .await;

        match res {
            Ok(()) => info!(%command_id, "Deleted command"),
            Err(e) => warn!(error = %e, %command_id, "Failed to delete command"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::test_utils::{self, FakeDiscord};
    use serde_json::json;

    fn registrar(discord: &FakeDiscord) -> Registrar {
        Registrar::new(
            RestClient::new(&discord.base_url).unwrap(),
            Arc::new(test_utils::secret_bundle()),
            "minecraft",
        )
    }

    #[test]
    fn test_command_definition() {
        let definition = serde_json::to_value(command_definition("minecraft")).unwrap();

        assert_eq!(
            definition,
            json!({
                "name": "minecraft",
                "type": 1,
                "description": "Game server commands",
                "default_permission": false,
                "options": [
                    { "type": 1, "name": "status", "description": "Check the status of the server" },
                    { "type": 1, "name": "start", "description": "Start the server, if it isn't running" },
                    { "type": 1, "name": "stop", "description": "Stop the server, if it is running" },
                ],
            })
        );
    }

    #[tokio::test]
    async fn test_create() {
        let discord = FakeDiscord::start(200, r#"{"id":"555","name":"minecraft"}"#).await;

        let res = registrar(&discord)
            .reconcile(Action::Create, None)
            .await
            .unwrap();
        assert_eq!(res.physical_id, "555");

        let requests = discord.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/applications/1000/guilds/2000/commands");
        assert_eq!(requests[0].authorization.as_deref(), Some("Bot bot-token"));
        assert_eq!(requests[0].json()["name"], "minecraft");
    }

    #[tokio::test]
    async fn test_update_registers_again() {
        let discord = FakeDiscord::start(200, r#"{"id":"556","name":"minecraft"}"#).await;

        let res = registrar(&discord)
            .reconcile(Action::Update, Some("555"))
            .await
            .unwrap();
        assert_eq!(res.physical_id, "556");
        assert_eq!(discord.requests()[0].method, "POST");
    }

    #[tokio::test]
    async fn test_create_failure_is_raised() {
        let discord = FakeDiscord::start(403, r#"{"message":"Missing Access"}"#).await;

        let res = registrar(&discord).reconcile(Action::Create, None).await;
        assert!(matches!(
            res,
            Err(Error::CommonError(common::Error::DiscordError { .. }))
        ));
    }

    #[tokio::test]
    async fn test_delete() {
        let discord = FakeDiscord::start(204, "").await;

        let res = registrar(&discord)
            .reconcile(Action::Delete, Some("555"))
            .await
            .unwrap();
        assert_eq!(res.physical_id, "555");

        let requests = discord.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(
            requests[0].path,
            "/applications/1000/guilds/2000/commands/555"
        );
        assert_eq!(requests[0].authorization.as_deref(), Some("Bot bot-token"));
    }

    #[tokio::test]
    async fn test_delete_failure_is_swallowed() {
        let discord = FakeDiscord::start(404, r#"{"message":"Unknown application command"}"#).await;

        let res = registrar(&discord)
            .reconcile(Action::Delete, Some("555"))
            .await
            .unwrap();
        assert_eq!(res.physical_id, "555");
    }

    #[tokio::test]
    async fn test_delete_requires_id() {
        let discord = FakeDiscord::start(204, "").await;

        let res = registrar(&discord).reconcile(Action::Delete, None).await;
        assert!(matches!(res, Err(Error::MissingPhysicalId)));
        assert!(discord.requests().is_empty());
    }
}
