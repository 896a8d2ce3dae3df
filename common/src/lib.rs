pub mod aws;
pub mod delivery;
pub mod discord;
pub mod observability;
pub mod secrets;
pub mod workflow;

mod error;
pub use error::{Error, Result};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
