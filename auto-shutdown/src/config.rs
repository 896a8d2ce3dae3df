use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub server_addr: String,
}

impl Config {
    pub fn from_envvar() -> Result<Config, envy::Error> {
        envy::from_env()
    }
}
