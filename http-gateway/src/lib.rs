pub mod dispatch;
pub mod http;
pub mod trigger;
pub mod verifier;

mod config;
pub use config::Config;

mod error;
pub use error::{AuthError, Error, Result, TriggerError};

pub use dispatch::{Dispatcher, SignedRequest};
pub use trigger::{ExecutionNaming, StepFunctionsTrigger, WorkflowTrigger};
pub use verifier::SignatureVerifier;
