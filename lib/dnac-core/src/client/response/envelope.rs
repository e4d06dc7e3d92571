use serde::{Deserialize, Serialize};

/// The `{"response": ..., "version": ...}` wrapper.
///
/// Most controller endpoints wrap their payload this way; some answer with
/// the bare payload. Each endpoint wrapper declares which one it expects.
///
/// ```rust
/// use dnac_core::Envelope;
///
/// let count: Envelope<i64> = serde_json::from_str(r#"{"response": 14, "version": "1.0"}"#)?;
/// assert_eq!(count.response, 14);
/// assert_eq!(count.version.as_deref(), Some("1.0"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The payload.
    pub response: T,
    /// API version reported by the controller; a few endpoints omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl<T> Envelope<T> {
    /// Drops the version and keeps the payload.
    pub fn into_inner(self) -> T {
        self.response
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn should_decode_envelope_without_version() {
        let envelope: Envelope<Vec<String>> =
            serde_json::from_value(json!({"response": ["config", "ejbca"]})).expect("valid envelope");

        assert_eq!(envelope.version, None);
        assert_eq!(envelope.into_inner(), vec!["config", "ejbca"]);
    }

    #[test]
    fn should_require_response_field() {
        let result = serde_json::from_value::<Envelope<i64>>(json!({"version": "1.0"}));

        assert!(result.is_err());
    }

    #[test]
    fn should_encode_envelope() {
        let envelope = Envelope {
            response: 3,
            version: Some("1.0".to_string()),
        };

        let json = serde_json::to_string(&envelope).expect("serializable");

        insta::assert_snapshot!(json, @r#"{"response":3,"version":"1.0"}"#);
    }
}
