use crate::http::DispatchResponse;
use crate::{AuthError, Error, ExecutionNaming, Result, SignatureVerifier, WorkflowTrigger};
use common::delivery::DeliveryShape;
use common::workflow::WorkflowRequest;
use model::interaction::{
    ApplicationCommandInteraction, Interaction, InteractionResponse, InteractionType,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};
use warp::http::{HeaderValue, StatusCode};
use warp::hyper::body::Bytes;

/// An interaction exactly as it arrived: the raw body plus the two signature headers, which
/// may be absent and are not yet known to be text.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub signature: Option<HeaderValue>,
    pub timestamp: Option<HeaderValue>,
    pub body: Bytes,
}

pub struct Dispatcher {
    verifier: SignatureVerifier,
    trigger: Arc<dyn WorkflowTrigger>,
    delivery_shape: DeliveryShape,
    execution_naming: ExecutionNaming,
}

impl Dispatcher {
    pub fn new(
        verifier: SignatureVerifier,
        trigger: Arc<dyn WorkflowTrigger>,
        delivery_shape: DeliveryShape,
        execution_naming: ExecutionNaming,
    ) -> Dispatcher {
        Dispatcher {
            verifier,
            trigger,
            delivery_shape,
            execution_naming,
        }
    }

    pub async fn dispatch(&self, request: SignedRequest) -> DispatchResponse {
        // Only logged: nothing in the body is trusted until the signature checks out
        let interaction_type = InteractionType::peek(&request.body[..]);
        debug!(?interaction_type, "Received interaction");

        if let Err(e) = self.authenticate(&request) {
            warn!(error = %e, ?interaction_type, "Rejected interaction");
            return DispatchResponse::unauthorized();
        }

        match self.route(&request.body[..]).await {
            Ok(res) => res,
            Err(e) => {
                warn!(error = %e, ?interaction_type, "Could not handle interaction");
                DispatchResponse::bad_request()
            }
        }
    }

    fn authenticate(&self, request: &SignedRequest) -> std::result::Result<(), AuthError> {
        match (&request.signature, &request.timestamp) {
            (Some(signature), Some(timestamp)) => self.verifier.verify(
                header_str(signature)?,
                header_str(timestamp)?,
                &request.body[..],
            ),
            _ => Err(AuthError::BadSignature(Box::from(
                "missing signature headers",
            ))),
        }
    }

    async fn route(&self, body: &[u8]) -> Result<DispatchResponse> {
        let interaction: Interaction = serde_json::from_slice(body)?;

        match interaction {
            Interaction::Ping(_) => {
                Ok(DispatchResponse::json(StatusCode::OK, &InteractionResponse::new_pong())?)
            }
            Interaction::ApplicationCommand(command) => self.handle_command(&command).await,
            _ => Err(Error::MalformedRequest(Box::from(
                "unsupported interaction type",
            ))),
        }
    }

    async fn handle_command(
        &self,
        command: &ApplicationCommandInteraction,
    ) -> Result<DispatchResponse> {
        let sub_command = command
            .sub_command()
            .ok_or_else(|| Error::MalformedRequest(Box::from("command has no options")))?;

        let input = WorkflowRequest {
            interaction_id: command.id.clone(),
            interaction_token: command.token.clone(),
            sub_command: Box::from(sub_command),
        };

        let name = self
            .execution_naming
            .execution_name(&command.id, &command.token);

        info!(interaction_id = %command.id, %sub_command, execution = %name, "Starting workflow");

        // The acknowledgement does not depend on the outcome, Discord only needs to hear back
        // within its response window
        if let Err(e) = self.trigger.start(&name, &input).await {
            error!(error = %e, execution = %name, "Failed to start workflow");
        }

        self.acknowledgement()
    }

    fn acknowledgement(&self) -> Result<DispatchResponse> {
        if self.delivery_shape.defers_response() {
            Ok(DispatchResponse::json(
                StatusCode::OK,
                &InteractionResponse::new_deferred_message_with_source(),
            )?)
        } else {
            Ok(DispatchResponse::accepted())
        }
    }
}

fn header_str(value: &HeaderValue) -> std::result::Result<&str, AuthError> {
    value
        .to_str()
        .map_err(|_| AuthError::BadSignature(Box::from("signature header is not visible ascii")))
}
