use crate::alarm::{ServiceTarget, SnsEvent, SnsRecord};
use serde_json::Value;
use crate::scaler::ServiceScaler;
use crate::ReactorError;
use std::sync::Arc;
use tracing::{error, info};

/// Stops idle services: every alarm record names a cluster and service whose desired count is
/// set to zero.
pub struct Reactor {
    scaler: Arc<dyn ServiceScaler>,
}

impl Reactor {
    pub fn new(scaler: Arc<dyn ServiceScaler>) -> Reactor {
        Reactor { scaler }
    }

    /// Records are handled independently: a bad record is logged and skipped, and the batch
    /// only reports failure once every record has been attempted.
    pub async fn handle(&self, event: &SnsEvent) -> Result<(), ReactorError> {
        let total = event.records.len();
        let mut failed = 0;

        for (index, record) in event.records.iter().enumerate() {
            if let Err(e) = self.handle_record(record).await {
                error!(
                    error = %e,
                    record = index,
                    message_id = ?record.pointer("/Sns/MessageId").and_then(serde_json::Value::as_str),
                    "Failed to handle alarm record"
                );
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(ReactorError::BatchFailed { failed, total });
        }

        Ok(())
    }

    pub async fn handle_record(&self, raw: &Value) -> Result<ServiceTarget, ReactorError> {
        let record = SnsRecord::from_value(raw)?;
        let alarm = record.sns.alarm()?;
        let target = alarm.service_target()?;

        info!(
            cluster = %target.cluster,
            service = %target.service,
            alarm = ?alarm.alarm_name,
            "Setting desired count to zero"
        );

        self.scaler.scale_to_zero(&target).await?;

        info!(service = %target.service, "Done");
        Ok(target)
    }
}
