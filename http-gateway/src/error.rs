use std::net;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid request signature: {0}")]
    InvalidSignature(#[from] AuthError),

    #[error("malformed request: {0}")]
    MalformedRequest(Box<str>),

    #[error("error while decoding json payload: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("error while starting workflow: {0}")]
    TriggerError(#[from] TriggerError),

    #[error("error occurred during parsing address: {0}")]
    AddrParseError(#[from] net::AddrParseError),

    #[error("error while parsing config: {0}")]
    ConfigError(#[from] envy::Error),

    #[error("{0}")]
    CommonError(#[from] common::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum AuthError {
    #[error("bad signature: {0}")]
    BadSignature(Box<str>),
}

#[derive(thiserror::Error, Debug)]
pub enum TriggerError {
    #[error("error while encoding workflow input: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("error while starting execution: {0}")]
    StartExecutionError(#[from] aws_sdk_sfn::Error),
}
