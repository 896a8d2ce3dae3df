use crate::TriggerError;
use async_trait::async_trait;
use common::workflow::WorkflowRequest;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::info;

/// How the execution name is derived from the interaction. The engine refuses a second
/// execution with the same name, so a retried trigger for one interaction is a no-op.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionNaming {
    #[default]
    InteractionId,
    /// Hex sha256 of the interaction token
    TokenHash,
}

impl ExecutionNaming {
    pub fn execution_name(&self, interaction_id: &str, interaction_token: &str) -> String {
        match self {
            ExecutionNaming::InteractionId => interaction_id.to_owned(),
            ExecutionNaming::TokenHash => {
                hex::encode(Sha256::digest(interaction_token.as_bytes()))
            }
        }
    }
}

#[async_trait]
pub trait WorkflowTrigger: Send + Sync {
    async fn start(&self, name: &str, input: &WorkflowRequest) -> Result<(), TriggerError>;
}

pub struct StepFunctionsTrigger {
    client: aws_sdk_sfn::Client,
    state_machine_arn: Box<str>,
}

impl StepFunctionsTrigger {
    pub fn new(client: aws_sdk_sfn::Client, state_machine_arn: &str) -> StepFunctionsTrigger {
        StepFunctionsTrigger {
            client,
            state_machine_arn: Box::from(state_machine_arn),
        }
    }
}

#[async_trait]
impl WorkflowTrigger for StepFunctionsTrigger {
    async fn start(&self, name: &str, input: &WorkflowRequest) -> Result<(), TriggerError> {
        let input = serde_json::to_string(input)?;

        self.client
            .start_execution()
            .state_machine_arn(self.state_machine_arn.to_string())
            .name(name)
            .input(input)
            .send()
            .await
            .map_err(aws_sdk_sfn::Error::from)?;

        info!(execution = %name, "Started state machine execution");
        Ok(())
    }
}
