pub mod http;

mod config;
pub use config::Config;

mod error;
pub use error::{DeliveryError, Error, Result};

mod notifier;
pub use notifier::Notifier;
