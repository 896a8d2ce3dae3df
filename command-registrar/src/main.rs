use clap::{Parser, Subcommand};
use command_registrar::{Action, Config, Error, Registrar};
use common::discord::RestClient;
use common::observability::{configure_observability, ObservabilityConfig};
use common::secrets::load_secrets;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "command-registrar",
    about = "Registers the game server slash command with Discord",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register the command
    Create,
    /// Register the command again, replacing the previous definition
    Update {
        /// Id returned by the previous create
        #[arg(long)]
        id: Option<String>,
    },
    /// Remove the command. Failures are logged and ignored
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let observability = ObservabilityConfig {
        log_to_stderr: true,
        ..ObservabilityConfig::from_envvar()?
    };
    let _guard = configure_observability(&observability)?;

    let cli = Cli::parse();
    let (action, prior_id) = match cli.command {
        Commands::Create => (Action::Create, None),
        Commands::Update { id } => (Action::Update, id),
        Commands::Delete { id } => (Action::Delete, Some(id)),
    };

    let config = Config::from_envvar()?;
    let secrets = Arc::new(load_secrets(config.secret_source, &config.secret_name).await?);

    let registrar = Registrar::new(
        RestClient::new(&config.discord_api_base)?,
        secrets,
        &config.command_name,
    );

    let res = registrar.reconcile(action, prior_id.as_deref()).await?;
    println!("{}", res.physical_id);

    Ok(())
}
