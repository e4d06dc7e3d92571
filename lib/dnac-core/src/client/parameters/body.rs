use headers::ContentType;
use serde::Serialize;

use crate::client::ApiClientError;

/// A serialized request body with its content type.
#[derive(Clone, derive_more::Debug)]
pub struct CallBody {
    pub(in crate::client) content_type: ContentType,
    #[debug(ignore)]
    pub(in crate::client) data: Vec<u8>,
}

impl CallBody {
    /// Encodes the payload as JSON, using its serde field names as wire keys.
    ///
    /// # Errors
    ///
    /// Fails if the payload cannot be serialized.
    pub fn json<T>(payload: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_vec(payload)?;
        Ok(Self {
            content_type: ContentType::json(),
            data,
        })
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// The content type sent with the body.
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct FlowRequest {
        #[serde(rename = "sourceIP")]
        source_ip: String,
        protocol: Option<String>,
        #[serde(rename = "type")]
        kind: &'static str,
    }

    #[test]
    fn should_encode_wire_keys() {
        let body = CallBody::json(&FlowRequest {
            source_ip: "10.10.22.98".to_string(),
            protocol: Some("TCP".to_string()),
            kind: "flow",
        })
        .expect("serializable body");

        insta::assert_snapshot!(
            String::from_utf8_lossy(body.as_bytes()),
            @r#"{"sourceIP":"10.10.22.98","protocol":"TCP","type":"flow"}"#
        );
        assert_eq!(body.content_type().to_string(), "application/json");
    }

    #[test]
    fn should_debug_without_payload() {
        let body = CallBody::json(&["secret"]).expect("serializable body");

        let debug = format!("{body:?}");

        assert!(!debug.contains("secret"));
    }
}
