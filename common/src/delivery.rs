use serde::Deserialize;

/// How a finished workflow's message reaches Discord. Fixed per deployment, and shared by the
/// gateway (which picks the matching acknowledgement) and the responder (which delivers).
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryShape {
    /// Gateway answers with a deferred response (type 5); the responder edits `@original`.
    #[default]
    EditOriginal,
    /// Gateway answers 202 with no body; the responder completes the interaction callback.
    Callback,
    /// Gateway answers 202 with no body; the responder posts a new followup message.
    Followup,
}

impl DeliveryShape {
    pub fn defers_response(&self) -> bool {
        matches!(self, DeliveryShape::EditOriginal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        shape: DeliveryShape,
    }

    #[test]
    fn test_parse_names() {
        let parse = |s: &str| {
            serde_json::from_str::<Wrapper>(&format!(r#"{{"shape":"{}"}}"#, s))
                .map(|w| w.shape)
                .ok()
        };

        assert_eq!(parse("edit_original"), Some(DeliveryShape::EditOriginal));
        assert_eq!(parse("callback"), Some(DeliveryShape::Callback));
        assert_eq!(parse("followup"), Some(DeliveryShape::Followup));
        assert_eq!(parse("patch"), None);
    }

    #[test]
    fn test_only_edit_original_defers() {
        assert!(DeliveryShape::EditOriginal.defers_response());
        assert!(!DeliveryShape::Callback.defers_response());
        assert!(!DeliveryShape::Followup.defers_response());
    }
}
