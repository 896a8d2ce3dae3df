use crate::{Error, Result};
use model::interaction::{
    ApplicationCommand, CreateApplicationCommand, InteractionResponse, WebhookMessage,
};
use model::Snowflake;
use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, error};

pub const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

/// Thin client over the handful of Discord REST endpoints the handlers call. Every call is
/// single-shot; a non-success status is logged with its body and returned as
/// [`Error::DiscordError`].
#[derive(Clone, Debug)]
pub struct RestClient {
    http_client: reqwest::Client,
    base_url: Box<str>,
}

impl RestClient {
    pub fn new(base_url: &str) -> Result<RestClient> {
        Ok(RestClient::new_with_client(build_http_client()?, base_url))
    }

    pub fn new_with_client(http_client: reqwest::Client, base_url: &str) -> RestClient {
        RestClient {
            http_client,
            base_url: Box::from(base_url.trim_end_matches('/')),
        }
    }

    /// `POST /interactions/{id}/{token}/callback`
    pub async fn create_interaction_response(
        &self,
        interaction_id: &str,
        interaction_token: &str,
        authorization: &str,
        response: &InteractionResponse,
    ) -> Result<()> {
        let url = format!(
            "{}/interactions/{}/{}/callback",
            self.base_url, interaction_id, interaction_token
        );

        let req = self
            .http_client
            .post(url)
            .header(AUTHORIZATION, authorization)
            .json(response);

        self.execute(req).await.map(|_| ())
    }

    /// `PATCH /webhooks/{application_id}/{token}/messages/@original`
    pub async fn edit_original_response(
        &self,
        application_id: Snowflake,
        interaction_token: &str,
        authorization: &str,
        message: &WebhookMessage,
    ) -> Result<()> {
        let url = format!(
            "{}/webhooks/{}/{}/messages/@original",
            self.base_url, application_id, interaction_token
        );

        let req = self
            .http_client
            .patch(url)
            .header(AUTHORIZATION, authorization)
            .json(message);

        self.execute(req).await.map(|_| ())
    }

    /// `POST /webhooks/{application_id}/{token}`
    pub async fn create_followup_message(
        &self,
        application_id: Snowflake,
        interaction_token: &str,
        authorization: &str,
        message: &WebhookMessage,
    ) -> Result<()> {
        let url = format!(
            "{}/webhooks/{}/{}",
            self.base_url, application_id, interaction_token
        );

        let req = self
            .http_client
            .post(url)
            .header(AUTHORIZATION, authorization)
            .json(message);

        self.execute(req).await.map(|_| ())
    }

    /// `POST /applications/{application_id}/guilds/{guild_id}/commands`. Discord upserts by
    /// name, so this also serves as the update path.
    pub async fn create_guild_command(
        &self,
        application_id: Snowflake,
        guild_id: Snowflake,
        authorization: &str,
        command: &CreateApplicationCommand,
    ) -> Result<ApplicationCommand> {
        let url = format!(
            "{}/applications/{}/guilds/{}/commands",
            self.base_url, application_id, guild_id
        );

        let req = self
            .http_client
            .post(url)
            .header(AUTHORIZATION, authorization)
            .json(command);

        let res = self.execute(req).await?;
        let bytes = res.bytes().await?;

        Ok(serde_json::from_slice(&bytes[..])?)
    }

    /// `DELETE /applications/{application_id}/guilds/{guild_id}/commands/{command_id}`
    pub async fn delete_guild_command(
        &self,
        application_id: Snowflake,
        guild_id: Snowflake,
        command_id: &str,
        authorization: &str,
    ) -> Result<()> {
        let url = format!(
            "{}/applications/{}/guilds/{}/commands/{}",
            self.base_url, application_id, guild_id, command_id
        );

        let req = self
            .http_client
            .delete(url)
            .header(AUTHORIZATION, authorization);

        self.execute(req).await.map(|_| ())
    }

    async fn execute(&self, req: RequestBuilder) -> Result<Response> {
        let res = req.send().await?;
        let status = res.status();

        if status.is_success() {
            debug!(%status, url = %res.url(), "Discord request succeeded");
            return Ok(res);
        }

        let body = res.text().await.unwrap_or_default();
        error!(%status, %body, "Discord returned an error response");

        Err(Error::DiscordError {
            status,
            body: body.into_boxed_str(),
        })
    }
}

fn build_http_client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(3))
        .timeout(Duration::from_secs(10))
        .build()?)
}
