use common::observability::{configure_observability, ObservabilityConfig};
use common::secrets::load_secrets;
use http_gateway::http::Server;
use http_gateway::{Config, Dispatcher, Error, SignatureVerifier, StepFunctionsTrigger};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _guard = configure_observability(&ObservabilityConfig::from_envvar()?)?;

    let config = Config::from_envvar()?;
    let secrets = load_secrets(config.secret_source, &config.secret_name).await?;

    let sdk_config = common::aws::load_sdk_config().await;
    let trigger = StepFunctionsTrigger::new(
        aws_sdk_sfn::Client::new(&sdk_config),
        &config.state_machine,
    );

    info!(
        delivery_shape = ?config.delivery_shape,
        execution_naming = ?config.execution_naming,
        "Configured dispatcher"
    );

    let dispatcher = Dispatcher::new(
        SignatureVerifier::new(secrets.public_key),
        Arc::new(trigger),
        config.delivery_shape,
        config.execution_naming,
    );

    let server = Server::new(config, dispatcher);
    server.start().await
}
