use auto_shutdown::http::Server;
use auto_shutdown::scaler::EcsScaler;
use auto_shutdown::{Config, Error, Reactor};
use common::observability::{configure_observability, ObservabilityConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _guard = configure_observability(&ObservabilityConfig::from_envvar()?)?;

    let config = Config::from_envvar()?;

    let sdk_config = common::aws::load_sdk_config().await;
    let reactor = Reactor::new(Arc::new(EcsScaler::new(aws_sdk_ecs::Client::new(
        &sdk_config,
    ))));

    let server = Server::new(config, reactor);
    server.start().await
}
