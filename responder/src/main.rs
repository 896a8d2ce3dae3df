use common::discord::RestClient;
use common::observability::{configure_observability, ObservabilityConfig};
use common::secrets::load_secrets;
use responder::http::Server;
use responder::{Config, Error, Notifier};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _guard = configure_observability(&ObservabilityConfig::from_envvar()?)?;

    let config = Config::from_envvar()?;
    let secrets = Arc::new(load_secrets(config.secret_source, &config.secret_name).await?);

    let rest = RestClient::new(&config.discord_api_base)?;
    let notifier = Notifier::new(rest, secrets, config.delivery_shape);

    info!(delivery_shape = ?config.delivery_shape, "Configured notifier");

    let server = Server::new(config, notifier);
    server.start().await
}
