use crate::{Error, Result};
use async_trait::async_trait;
use ed25519_dalek::PublicKey;
use model::Snowflake;
use serde::Deserialize;
use std::env;
use std::fmt;
use tracing::info;

/// Credentials shared by every handler. Loaded once when the process starts and never
/// refreshed; rotating the secret requires a restart.
pub struct SecretBundle {
    pub public_key: PublicKey,
    pub app_id: Snowflake,
    pub guild_id: Snowflake,
    bot_token: Box<str>,
    authorization: Box<str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawSecretBundle {
    public_key: String,
    app_id: Snowflake,
    guild_id: Snowflake,
    bot_token: String,
    authorization: String,
}

impl SecretBundle {
    pub fn from_json(raw: &str) -> Result<SecretBundle> {
        let raw: RawSecretBundle = serde_json::from_str(raw)?;

        Ok(SecretBundle {
            public_key: read_public_key(raw.public_key.trim())?,
            app_id: raw.app_id,
            guild_id: raw.guild_id,
            bot_token: raw.bot_token.into_boxed_str(),
            authorization: raw.authorization.into_boxed_str(),
        })
    }

    /// `Authorization` header value identifying the request as coming from the bot.
    pub fn bot_authorization(&self) -> String {
        format!("Bot {}", self.bot_token)
    }

    /// Pre-built `Authorization` header value stored alongside the bot token.
    pub fn authorization(&self) -> &str {
        &self.authorization
    }
}

impl fmt::Debug for SecretBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBundle")
            .field("public_key", &hex::encode(self.public_key.as_bytes()))
            .field("app_id", &self.app_id)
            .field("guild_id", &self.guild_id)
            .field("bot_token", &"<redacted>")
            .field("authorization", &"<redacted>")
            .finish()
    }
}

fn read_public_key(key: &str) -> Result<PublicKey> {
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(key, &mut bytes)?;

    Ok(PublicKey::from_bytes(&bytes)?)
}

#[async_trait]
pub trait SecretProvider: Send + Sync {
    async fn get_secret_string(&self, secret_id: &str) -> Result<String>;

    async fn load(&self, secret_id: &str) -> Result<SecretBundle> {
        let raw = self.get_secret_string(secret_id).await?;
        SecretBundle::from_json(&raw)
    }
}

pub struct SecretsManagerProvider {
    client: aws_sdk_secretsmanager::Client,
}

impl SecretsManagerProvider {
    pub fn new(client: aws_sdk_secretsmanager::Client) -> SecretsManagerProvider {
        SecretsManagerProvider { client }
    }
}

#[async_trait]
impl SecretProvider for SecretsManagerProvider {
    async fn get_secret_string(&self, secret_id: &str) -> Result<String> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(aws_sdk_secretsmanager::Error::from)?;

        output
            .secret_string()
            .map(str::to_owned)
            .ok_or_else(|| Error::EmptySecret(Box::from(secret_id)))
    }
}

/// Reads the secret JSON document from the environment variable named by the secret id.
pub struct EnvSecretProvider;

#[async_trait]
impl SecretProvider for EnvSecretProvider {
    async fn get_secret_string(&self, secret_id: &str) -> Result<String> {
        env::var(secret_id).map_err(|_| Error::MissingSecret(Box::from(secret_id)))
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SecretSource {
    #[default]
    SecretsManager,
    Env,
}

pub async fn load_secrets(source: SecretSource, secret_name: &str) -> Result<SecretBundle> {
    let bundle = match source {
        SecretSource::SecretsManager => {
            let sdk_config = crate::aws::load_sdk_config().await;
            let client = aws_sdk_secretsmanager::Client::new(&sdk_config);

            SecretsManagerProvider::new(client).load(secret_name).await?
        }
        SecretSource::Env => EnvSecretProvider.load(secret_name).await?,
    };

    info!(secret = %secret_name, ?source, app_id = %bundle.app_id, "Loaded secret bundle");
    Ok(bundle)
}
