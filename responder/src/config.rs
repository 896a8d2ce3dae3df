use common::delivery::DeliveryShape;
use common::discord::DISCORD_API_BASE;
use common::secrets::SecretSource;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub server_addr: String,
    pub secret_name: String,
    #[serde(default)]
    pub secret_source: SecretSource,
    /// Must match the gateway's setting, the gateway's acknowledgement depends on it
    #[serde(default)]
    pub delivery_shape: DeliveryShape,
    #[serde(default = "default_api_base")]
    pub discord_api_base: String,
}

fn default_api_base() -> String {
    DISCORD_API_BASE.to_owned()
}

impl Config {
    pub fn from_envvar() -> Result<Config, envy::Error> {
        envy::from_env()
    }
}
