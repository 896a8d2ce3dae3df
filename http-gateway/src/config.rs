use crate::ExecutionNaming;
use common::delivery::DeliveryShape;
use common::secrets::SecretSource;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub server_addr: String,
    /// ARN of the state machine started for every slash command
    pub state_machine: String,
    pub secret_name: String,
    #[serde(default)]
    pub secret_source: SecretSource,
    #[serde(default)]
    pub delivery_shape: DeliveryShape,
    #[serde(default)]
    pub execution_naming: ExecutionNaming,
}

impl Config {
    pub fn from_envvar() -> Result<Config, envy::Error> {
        envy::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(extra: &[(&str, &str)]) -> Vec<(String, String)> {
        [
            ("SERVER_ADDR", "0.0.0.0:8080"),
            ("STATE_MACHINE", "arn:aws:states:eu-west-1:1:stateMachine:discord"),
            ("SECRET_NAME", "discord/game-server"),
        ]
        .iter()
        .chain(extra.iter())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_defaults() {
        let config: Config = envy::from_iter(vars(&[])).unwrap();

        assert_eq!(config.secret_source, SecretSource::SecretsManager);
        assert_eq!(config.delivery_shape, DeliveryShape::EditOriginal);
        assert_eq!(config.execution_naming, ExecutionNaming::InteractionId);
    }

    #[test]
    fn test_overrides() {
        let config: Config = envy::from_iter(vars(&[
            ("SECRET_SOURCE", "env"),
            ("DELIVERY_SHAPE", "callback"),
            ("EXECUTION_NAMING", "token_hash"),
        ]))
        .unwrap();

        assert_eq!(config.secret_source, SecretSource::Env);
        assert_eq!(config.delivery_shape, DeliveryShape::Callback);
        assert_eq!(config.execution_naming, ExecutionNaming::TokenHash);
    }

    #[test]
    fn test_missing_state_machine() {
        let vars = vec![
            ("SERVER_ADDR".to_owned(), "0.0.0.0:8080".to_owned()),
            ("SECRET_NAME".to_owned(), "discord".to_owned()),
        ];

        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
