use std::net;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error occurred during parsing address: {0}")]
    AddrParseError(#[from] net::AddrParseError),

    #[error("error while parsing config: {0}")]
    ConfigError(#[from] envy::Error),

    #[error("{0}")]
    CommonError(#[from] common::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum ReactorError {
    #[error("sns record could not be decoded: {0}")]
    MalformedRecord(serde_json::Error),

    #[error("alarm message could not be decoded: {0}")]
    MalformedMessage(#[from] serde_json::Error),

    #[error("cluster and service are required, alarm is missing the {0} dimension")]
    MissingDimension(&'static str),

    #[error("error while updating service: {0}")]
    ControlPlaneError(Box<str>),

    #[error("{failed} of {total} alarm records failed")]
    BatchFailed { failed: usize, total: usize },
}
