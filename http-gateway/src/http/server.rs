use crate::http::DispatchResponse;
use crate::{Config, Dispatcher, Error};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use warp::{Filter, Rejection};

pub struct Server {
    pub config: Config,
    pub dispatcher: Dispatcher,
}

impl Server {
    pub fn new(config: Config, dispatcher: Dispatcher) -> Server {
        Server { config, dispatcher }
    }

    pub async fn start(self) -> Result<(), Error> {
        let address: SocketAddr = self.config.server_addr.parse()?;

        let filter = Arc::new(self).filter_handle();

        info!(%address, "Starting server");
        warp::serve(filter).run(address).await;

        Ok(())
    }

    pub fn filter_handle(
        self: Arc<Self>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
        warp::post()
            .and(warp::path("interactions"))
            .and(warp::path::end())
            .and(warp::any().map(move || self.clone()))
            .and(warp::header::headers_cloned())
            .and(warp::body::bytes())
            .and_then(super::handle)
            .recover(|_: Rejection| async move {
                Ok::<_, Infallible>(DispatchResponse::bad_request())
            })
            .with(warp::log("http_gateway"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExecutionNaming, SignatureVerifier, TriggerError, WorkflowTrigger};
    use async_trait::async_trait;
    use common::delivery::DeliveryShape;
    use common::test_utils;
    use common::workflow::WorkflowRequest;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use warp::http::StatusCode;

    #[derive(Default)]
    struct CountingTrigger(AtomicUsize);

    #[async_trait]
    impl WorkflowTrigger for CountingTrigger {
        async fn start(&self, _: &str, _: &WorkflowRequest) -> Result<(), TriggerError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn server(trigger: Arc<CountingTrigger>) -> Arc<Server> {
        let config = Config {
            server_addr: "127.0.0.1:0".to_owned(),
            state_machine: "arn".to_owned(),
            secret_name: "secret".to_owned(),
            secret_source: Default::default(),
            delivery_shape: DeliveryShape::EditOriginal,
            execution_naming: ExecutionNaming::InteractionId,
        };

        let dispatcher = Dispatcher::new(
            SignatureVerifier::new(test_utils::keypair().public),
            trigger,
            config.delivery_shape,
            config.execution_naming,
        );

        Arc::new(Server::new(config, dispatcher))
    }

    #[tokio::test]
    async fn test_ping_over_http() {
        let filter = server(Arc::default()).filter_handle();
        let body = r#"{"type":1}"#;

        let res = warp::test::request()
            .method("POST")
            .path("/interactions")
            .header("x-signature-ed25519", test_utils::sign("1", body.as_bytes()))
            .header("x-signature-timestamp", "1")
            .body(body)
            .reply(&filter)
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["content-type"], "application/json");
        assert_eq!(res.body(), r#"{"type":1}"#);
    }

    #[tokio::test]
    async fn test_command_over_http() {
        let trigger = Arc::new(CountingTrigger::default());
        let filter = server(trigger.clone()).filter_handle();
        let body = r#"{"type":2,"id":"I1","token":"T1","data":{"options":[{"name":"start"}]}}"#;

        let res = warp::test::request()
            .method("POST")
            .path("/interactions")
            .header("x-signature-ed25519", test_utils::sign("1", body.as_bytes()))
            .header("x-signature-timestamp", "1")
            .body(body)
            .reply(&filter)
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body(), r#"{"type":5}"#);
        assert_eq!(trigger.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_bad_signature_over_http() {
        let trigger = Arc::new(CountingTrigger::default());
        let filter = server(trigger.clone()).filter_handle();
        let body = r#"{"type":2,"id":"I1","token":"T1","data":{"options":[{"name":"stop"}]}}"#;

        let res = warp::test::request()
            .method("POST")
            .path("/interactions")
            .header("x-signature-ed25519", "00".repeat(64))
            .header("x-signature-timestamp", "1")
            .body(body)
            .reply(&filter)
            .await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(res.headers()["content-type"], "text/plain");
        assert_eq!(res.body(), "Invalid request signature");
        assert_eq!(trigger.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_ascii_signature_over_http() {
        let trigger = Arc::new(CountingTrigger::default());
        let filter = server(trigger.clone()).filter_handle();
        let body = r#"{"type":2,"id":"I1","token":"T1","data":{"options":[{"name":"stop"}]}}"#;

        let res = warp::test::request()
            .method("POST")
            .path("/interactions")
            .header("x-signature-ed25519", &b"\xff\xfe"[..])
            .header("x-signature-timestamp", "1")
            .body(body)
            .reply(&filter)
            .await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(res.body(), "Invalid request signature");
        assert_eq!(trigger.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_post_is_rejected() {
        let filter = server(Arc::default()).filter_handle();

        for method in ["GET", "PUT", "DELETE"] {
            let res = warp::test::request()
                .method(method)
                .path("/interactions")
                .reply(&filter)
                .await;

            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
            assert_eq!(res.headers()["content-type"], "text/plain");
            assert_eq!(res.body(), "wut?");
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_rejected() {
        let filter = server(Arc::default()).filter_handle();

        let res = warp::test::request()
            .method("POST")
            .path("/somewhere-else")
            .body("{}")
            .reply(&filter)
            .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(res.body(), "wut?");
    }
}
