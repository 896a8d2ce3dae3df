pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("a physical id is required to delete the command")]
    MissingPhysicalId,

    #[error("error while parsing config: {0}")]
    ConfigError(#[from] envy::Error),

    #[error("{0}")]
    CommonError(#[from] common::Error),
}
