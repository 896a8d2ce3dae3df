mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

mod registrar;
pub use registrar::{command_definition, Action, Registrar, RegistrarResult};
