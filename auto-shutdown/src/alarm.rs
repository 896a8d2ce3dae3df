//! Typed shape of a CloudWatch alarm delivered through SNS.

use crate::ReactorError;
use serde::Deserialize;

pub const CLUSTER_DIMENSION: &str = "ClusterName";
pub const SERVICE_DIMENSION: &str = "ServiceName";

/// Records are kept undecoded so that one bad envelope cannot reject the whole batch.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct SnsEvent {
    pub records: Vec<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct SnsRecord {
    pub sns: SnsMessage,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct SnsMessage {
    #[serde(default)]
    pub message_id: Option<String>,
    /// The alarm itself, JSON encoded as a string
    pub message: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct AlarmMessage {
    #[serde(default)]
    pub alarm_name: Option<String>,
    pub trigger: AlarmTrigger,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct AlarmTrigger {
    #[serde(default)]
    pub dimensions: Vec<Dimension>,
}

// CloudWatch uses lower case keys here, unlike the rest of the message
#[derive(Deserialize, Debug)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTarget {
    pub cluster: String,
    pub service: String,
}

impl SnsRecord {
    pub fn from_value(raw: &serde_json::Value) -> Result<SnsRecord, ReactorError> {
        SnsRecord::deserialize(raw).map_err(ReactorError::MalformedRecord)
    }
}

impl SnsMessage {
    pub fn alarm(&self) -> Result<AlarmMessage, ReactorError> {
        Ok(serde_json::from_str(&self.message)?)
    }
}

impl AlarmMessage {
    pub fn service_target(&self) -> Result<ServiceTarget, ReactorError> {
        let cluster = self
            .dimension(CLUSTER_DIMENSION)
            .ok_or(ReactorError::MissingDimension(CLUSTER_DIMENSION))?;

        let service = self
            .dimension(SERVICE_DIMENSION)
            .ok_or(ReactorError::MissingDimension(SERVICE_DIMENSION))?;

        Ok(ServiceTarget {
            cluster: cluster.to_owned(),
            service: service.to_owned(),
        })
    }

    /// Last non-empty value of the named dimension. Names are matched exactly.
    fn dimension(&self, name: &str) -> Option<&str> {
        self.trigger
            .dimensions
            .iter()
            .rev()
            .find(|d| d.name == name && !d.value.is_empty())
            .map(|d| d.value.as_str())
    }
}
