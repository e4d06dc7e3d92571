use headers::{ContentType, HeaderMapExt};
use http::StatusCode;
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::client::ApiClientError;

/// A response whose status was accepted, with its body fully read.
#[derive(Clone, derive_more::Debug)]
pub struct CallResult {
    status: StatusCode,
    content_type: Option<ContentType>,
    #[debug(ignore)]
    body: Vec<u8>,
}

impl CallResult {
    pub(in crate::client) async fn new(response: Response) -> Result<Self, ApiClientError> {
        let status = response.status();
        let content_type = response.headers().typed_get::<ContentType>();
        let body = response.bytes().await?.to_vec();

        Ok(Self {
            status,
            content_type,
            body,
        })
    }

    /// Builds a result from parts.
    pub fn from_parts(status: StatusCode, content_type: Option<ContentType>, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }

    /// The response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response content type, if the controller sent one.
    pub fn content_type(&self) -> Option<&ContentType> {
        self.content_type.as_ref()
    }

    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::JsonError`] with the JSON path of the first
    /// mismatch when the body does not fit `T`.
    pub fn as_json<T>(&self) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        let deserializer = &mut serde_json::Deserializer::from_slice(&self.body);
        let result: T = serde_path_to_error::deserialize(deserializer).map_err(|err| {
            ApiClientError::JsonError {
                path: err.path().to_string(),
                error: err.into_inner(),
                body: String::from_utf8_lossy(&self.body).into_owned(),
            }
        })?;
        Ok(result)
    }

    /// Decodes the body as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidUtf8Output`] when the body is not UTF-8.
    pub fn as_text(&self) -> Result<String, ApiClientError> {
        String::from_utf8(self.body.clone())
            .map_err(|error| ApiClientError::InvalidUtf8Output { error })
    }

    /// Discards the body.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other decoders.
    pub fn as_empty(&self) -> Result<(), ApiClientError> {
        Ok(())
    }

    /// Borrows the raw body.
    pub fn as_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Takes the raw body.
    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Device {
        id: String,
        management_ip_address: String,
    }

    fn json_result(body: &str) -> CallResult {
        CallResult::from_parts(
            StatusCode::OK,
            Some(ContentType::json()),
            body.as_bytes().to_vec(),
        )
    }

    #[test]
    fn should_decode_json() {
        let result = json_result(r#"{"id": "abc-123", "managementIpAddress": "10.10.22.66"}"#);

        let device: Device = result.as_json().expect("valid device");

        assert_eq!(
            device,
            Device {
                id: "abc-123".to_string(),
                management_ip_address: "10.10.22.66".to_string(),
            }
        );
    }

    #[test]
    fn should_report_path_of_mismatch() {
        let result = json_result(r#"{"id": "abc-123", "managementIpAddress": 42}"#);

        let error = result.as_json::<Device>().expect_err("schema mismatch");

        let ApiClientError::JsonError { path, body, .. } = &error else {
            panic!("expected a JSON error, got {error:?}");
        };
        assert_eq!(path, "managementIpAddress");
        assert!(body.contains("abc-123"));
        assert!(error.is_decode_error());
    }

    #[test]
    fn should_report_empty_body_as_decode_error() {
        let result = json_result("");

        let error = result.as_json::<Device>().expect_err("empty body");

        assert!(error.is_decode_error());
    }

    #[test]
    fn should_read_text_and_bytes() {
        let result = CallResult::from_parts(StatusCode::OK, None, b"hostname edge-1".to_vec());

        assert_eq!(result.as_text().expect("utf8"), "hostname edge-1");
        assert!(result.as_empty().is_ok());
        assert_eq!(result.into_bytes(), b"hostname edge-1");
    }

    #[test]
    fn should_reject_invalid_utf8_text() {
        let result = CallResult::from_parts(StatusCode::OK, None, vec![0xff, 0xfe]);

        assert!(matches!(
            result.as_text(),
            Err(ApiClientError::InvalidUtf8Output { .. })
        ));
    }
}
