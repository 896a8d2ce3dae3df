use std::net;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error while delivering message: {0}")]
    DeliveryError(#[from] DeliveryError),

    #[error("error occurred during parsing address: {0}")]
    AddrParseError(#[from] net::AddrParseError),

    #[error("error while parsing config: {0}")]
    ConfigError(#[from] envy::Error),

    #[error("{0}")]
    CommonError(#[from] common::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum DeliveryError {
    #[error("the callback delivery shape requires an interaction id")]
    MissingInteractionId,

    #[error("{0}")]
    DiscordError(#[from] common::Error),
}
