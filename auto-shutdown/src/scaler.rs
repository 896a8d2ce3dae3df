use crate::alarm::ServiceTarget;
use crate::ReactorError;
use async_trait::async_trait;
use aws_sdk_ecs::error::DisplayErrorContext;

#[async_trait]
pub trait ServiceScaler: Send + Sync {
    /// Sets the desired task count of the service to zero.
    async fn scale_to_zero(&self, target: &ServiceTarget) -> Result<(), ReactorError>;
}

pub struct EcsScaler {
    client: aws_sdk_ecs::Client,
}

impl EcsScaler {
    pub fn new(client: aws_sdk_ecs::Client) -> EcsScaler {
        EcsScaler { client }
    }
}

#[async_trait]
impl ServiceScaler for EcsScaler {
    async fn scale_to_zero(&self, target: &ServiceTarget) -> Result<(), ReactorError> {
        self.client
            .update_service()
            .cluster(&target.cluster)
            .service(&target.service)
            .desired_count(0)
            .send()
            .await
            .map_err(|e| {
                ReactorError::ControlPlaneError(
                    DisplayErrorContext(&e).to_string().into_boxed_str(),
                )
            })?;

        Ok(())
    }
}
