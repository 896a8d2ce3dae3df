use crate::DeliveryError;
use common::delivery::DeliveryShape;
use common::discord::RestClient;
use common::secrets::SecretBundle;
use common::workflow::NotificationRequest;
use model::interaction::{
    InteractionApplicationCommandCallbackData, InteractionResponse, WebhookMessage,
};
use std::sync::Arc;
use tracing::info;

/// Posts a workflow's result back to Discord with exactly one REST call. Failures are returned
/// to the caller, which owns any retry policy.
pub struct Notifier {
    rest: RestClient,
    secrets: Arc<SecretBundle>,
    delivery_shape: DeliveryShape,
}

impl Notifier {
    pub fn new(
        rest: RestClient,
        secrets: Arc<SecretBundle>,
        delivery_shape: DeliveryShape,
    ) -> Notifier {
        Notifier {
            rest,
            secrets,
            delivery_shape,
        }
    }

    pub async fn notify(&self, request: &NotificationRequest) -> Result<(), DeliveryError> {
        let token = &*request.interaction_token;

        match self.delivery_shape {
            DeliveryShape::Callback => {
                let interaction_id = request
                    .interaction_id
                    .as_deref()
                    .ok_or(DeliveryError::MissingInteractionId)?;

                let response = InteractionResponse::new_channel_message_with_source(
                    InteractionApplicationCommandCallbackData::from_content(request.message()),
                );

                self.rest
                    .create_interaction_response(
                        interaction_id,
                        token,
                        &self.secrets.bot_authorization(),
                        &response,
                    )
                    .await?;
            }

            DeliveryShape::EditOriginal => {
                self.rest
                    .edit_original_response(
                        self.secrets.app_id,
                        token,
                        self.secrets.authorization(),
                        &WebhookMessage::new(request.message()),
                    )
                    .await?;
            }

            DeliveryShape::Followup => {
                self.rest
                    .create_followup_message(
                        self.secrets.app_id,
                        token,
                        &self.secrets.bot_authorization(),
                        &WebhookMessage::new(request.message()),
                    )
                    .await?;
            }
        }

        info!(
            interaction_id = ?request.interaction_id,
            delivery_shape = ?self.delivery_shape,
            "Delivered workflow result"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::test_utils::{self, FakeDiscord};
    use common::workflow::DiscordMessage;
    use serde_json::json;

    fn request(interaction_id: Option<&str>) -> NotificationRequest {
        NotificationRequest {
            interaction_id: interaction_id.map(Box::from),
            interaction_token: Box::from("T1"),
            discord: DiscordMessage {
                message: Box::from("Server is now running"),
            },
        }
    }

    fn notifier(discord: &FakeDiscord, shape: DeliveryShape) -> Notifier {
        Notifier::new(
            RestClient::new(&discord.base_url).unwrap(),
            Arc::new(test_utils::secret_bundle()),
            shape,
        )
    }

    #[tokio::test]
    async fn test_edit_original() {
        let discord = FakeDiscord::start(200, "{}").await;

        notifier(&discord, DeliveryShape::EditOriginal)
            .notify(&request(None))
            .await
            .unwrap();

        let requests = discord.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "PATCH");
        assert_eq!(requests[0].path, "/webhooks/1000/T1/messages/@original");
        assert_eq!(requests[0].authorization.as_deref(), Some("Bearer abc"));
        assert_eq!(requests[0].json(), json!({ "content": "Server is now running" }));
    }

    #[tokio::test]
    async fn test_callback() {
        let discord = FakeDiscord::start(204, "").await;

        notifier(&discord, DeliveryShape::Callback)
            .notify(&request(Some("I1")))
            .await
            .unwrap();

        let requests = discord.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/interactions/I1/T1/callback");
        assert_eq!(requests[0].authorization.as_deref(), Some("Bot bot-token"));
        assert_eq!(
            requests[0].json(),
            json!({ "type": 4, "data": { "content": "Server is now running" } })
        );
    }

    #[tokio::test]
    async fn test_callback_without_id_makes_no_call() {
        let discord = FakeDiscord::start(204, "").await;

        let err = notifier(&discord, DeliveryShape::Callback)
            .notify(&request(None))
            .await
            .unwrap_err();

        assert!(matches!(err, DeliveryError::MissingInteractionId));
        assert!(discord.requests().is_empty());
    }

    #[tokio::test]
    async fn test_followup() {
        let discord = FakeDiscord::start(200, r#"{"id":"1"}"#).await;

        notifier(&discord, DeliveryShape::Followup)
            .notify(&request(Some("I1")))
            .await
            .unwrap();

        let requests = discord.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/webhooks/1000/T1");
        assert_eq!(requests[0].authorization.as_deref(), Some("Bot bot-token"));
        assert_eq!(requests[0].json(), json!({ "content": "Server is now running" }));
    }

    #[tokio::test]
    async fn test_error_status_is_surfaced() {
        let discord = FakeDiscord::start(401, r#"{"message":"401: Unauthorized","code":0}"#).await;

        let err = notifier(&discord, DeliveryShape::EditOriginal)
            .notify(&request(None))
            .await
            .unwrap_err();

        match err {
            DeliveryError::DiscordError(common::Error::DiscordError { status, body }) => {
                assert_eq!(status.as_u16(), 401);
                assert!(body.contains("Unauthorized"));
            }
            other => panic!("unexpected error {:?}", other),
        }

        // single shot, no retry
        assert_eq!(discord.requests().len(), 1);
    }
}
