pub mod alarm;
pub mod http;
pub mod scaler;

mod config;
pub use config::Config;

mod error;
pub use error::{Error, ReactorError, Result};

mod reactor;
pub use reactor::Reactor;
