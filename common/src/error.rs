use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error while performing HTTP request: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("discord returned status {status}: {body}")]
    DiscordError { status: StatusCode, body: Box<str> },

    #[error("error while operating on JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("error while parsing config: {0}")]
    ConfigError(#[from] envy::Error),

    #[error("secret {0} has no string value")]
    EmptySecret(Box<str>),

    #[error("secret {0} was not found in the environment")]
    MissingSecret(Box<str>),

    #[error("invalid ed25519 public key: {0}")]
    InvalidPublicKeyFormat(#[from] hex::FromHexError),

    #[error("invalid ed25519 public key: {0}")]
    InvalidPublicKey(#[from] ed25519_dalek::SignatureError),

    #[error("error while reading secret from Secrets Manager: {0}")]
    SecretsManagerError(#[from] aws_sdk_secretsmanager::Error),

    #[cfg(feature = "use-sentry")]
    #[error("invalid sentry DSN: {0}")]
    InvalidDsn(#[from] sentry::types::ParseDsnError),
}
