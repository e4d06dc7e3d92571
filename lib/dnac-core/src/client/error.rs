use serde::{Deserialize, Serialize};

use super::Envelope;
use super::auth::AuthenticationError;

/// Errors that can occur when calling the controller.
///
/// Two families reach the caller through this one type:
/// - the call failed: transport errors ([`ReqwestError`](Self::ReqwestError)) or a
///   status outside the expected range ([`UnexpectedStatusCode`](Self::UnexpectedStatusCode))
/// - the response arrived but does not match the declared shape
///   ([`JsonError`](Self::JsonError))
///
/// The remaining variants are raised while the request is being built, before
/// anything is sent.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when the controller is unreachable, the TLS handshake fails, or the
    /// connection drops.
    ReqwestError(reqwest::Error),

    /// URL parsing error when joining the base URI and the endpoint path.
    UrlError(url::ParseError),

    /// HTTP protocol error from the http crate.
    HttpError(http::Error),

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// JSON serialization error while encoding a request body or parameter set.
    JsonValueError(serde_json::Error),

    /// Query parameter serialization error.
    QuerySerializationError(serde_urlencoded::ser::Error),

    /// Credentials cannot be turned into a header.
    AuthenticationError(AuthenticationError),

    /// Invalid base path configuration.
    #[display("Invalid base path: {error}")]
    #[from(skip)]
    InvalidBasePath {
        /// Description of why the base path is invalid.
        error: String,
    },

    /// Parameter set did not serialize to a JSON object.
    #[display("Serialization error: {message}")]
    #[from(skip)]
    SerializationError {
        /// Description of the serialization failure.
        message: String,
    },

    /// Path template contains unresolved parameters.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The path template that couldn't be resolved.
        path: String,
        /// List of missing parameter names.
        missings: Vec<String>,
    },

    /// A path value would not stay a single segment once sent.
    ///
    /// Empty, `.` and `..` values are dropped or collapsed by URL
    /// normalization, which would target another endpoint.
    #[display("Path '{path}' has an invalid value for '{name}': {value:?}")]
    #[from(skip)]
    InvalidPathSegment {
        /// The path template.
        path: String,
        /// Name of the placeholder.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The response body is not valid UTF-8 text.
    #[display("Response body is not valid UTF-8: {error}")]
    #[from(skip)]
    InvalidUtf8Output {
        /// The underlying decoding error.
        error: std::string::FromUtf8Error,
    },

    /// JSON response deserialization failure.
    #[display("Failed to deserialize JSON at '{path}': {error}\n{body}")]
    #[from(skip)]
    JsonError {
        /// JSON path of the first mismatch.
        path: String,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The response body that failed to parse.
        body: String,
    },

    /// Controller answered with a status outside the expected range.
    #[display("Unexpected status code {status_code}: {body}")]
    #[from(skip)]
    UnexpectedStatusCode {
        /// The HTTP status code received.
        status_code: u16,
        /// The response body, truncated.
        body: String,
        /// The controller error payload, when the body carries one.
        error_response: Option<ErrorResponse>,
    },
}

impl ApiClientError {
    /// The HTTP status of a rejected call, `None` for every other failure.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatusCode { status_code, .. } => Some(*status_code),
            Self::ReqwestError(error) => error.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// The controller error payload of a rejected call, if it sent one.
    pub fn error_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::UnexpectedStatusCode { error_response, .. } => error_response.as_ref(),
            _ => None,
        }
    }

    /// `true` when the response arrived but did not match the declared shape.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Self::JsonError { .. } | Self::InvalidUtf8Output { .. })
    }
}

/// Error payload of a rejected call.
///
/// The controller sends it either wrapped (`{"response": {...}, "version": "1.0"}`)
/// or bare.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine readable error code, e.g. `NCND01050`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Human readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Additional detail, a string or a structured payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub(super) fn parse(body: &str) -> Option<Self> {
        let parsed = serde_json::from_str::<Envelope<Self>>(body)
            .map(|envelope| envelope.response)
            .or_else(|_| serde_json::from_str::<Self>(body))
            .ok()?;
        (!parsed.is_empty()).then_some(parsed)
    }

    fn is_empty(&self) -> bool {
        self.error_code.is_none() && self.message.is_none() && self.detail.is_none()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_api_client_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<ApiClientError>();
        assert_sync::<ApiClientError>();
    }

    #[test]
    fn should_parse_enveloped_error_response() {
        let body = r#"{
            "response": {
                "errorCode": "NCND01050",
                "message": "Device not found",
                "detail": "No device with id abc-123"
            },
            "version": "1.0"
        }"#;

        let error = ErrorResponse::parse(body);

        insta::assert_debug_snapshot!(error, @r#"
        Some(
            ErrorResponse {
                error_code: Some(
                    "NCND01050",
                ),
                message: Some(
                    "Device not found",
                ),
                detail: Some(
                    String("No device with id abc-123"),
                ),
            },
        )
        "#);
    }

    #[test]
    fn should_parse_bare_error_response() {
        let body = r#"{"message": "Bad request"}"#;

        let error = ErrorResponse::parse(body);

        assert_eq!(
            error,
            Some(ErrorResponse {
                message: Some("Bad request".to_string()),
                ..Default::default()
            })
        );
    }

    #[test]
    fn should_keep_structured_detail() {
        let body = r#"{
            "response": {
                "errorCode": "NCND00050",
                "message": "Validation failed",
                "detail": {"field": "ipAddress", "reasons": ["duplicate"]}
            },
            "version": "1.0"
        }"#;

        let error = ErrorResponse::parse(body).expect("error payload");

        assert_eq!(error.error_code.as_deref(), Some("NCND00050"));
        assert_eq!(error.message.as_deref(), Some("Validation failed"));
        assert_eq!(
            error.detail,
            Some(json!({"field": "ipAddress", "reasons": ["duplicate"]}))
        );
    }

    #[test]
    fn should_ignore_unrelated_body() {
        assert_eq!(ErrorResponse::parse("<html>oops</html>"), None);
        assert_eq!(ErrorResponse::parse(r#"{"status": 500}"#), None);
    }

    #[test]
    fn should_expose_status_code_and_error_response() {
        let error = ApiClientError::UnexpectedStatusCode {
            status_code: 404,
            body: String::new(),
            error_response: Some(ErrorResponse {
                error_code: Some("NCND01050".to_string()),
                ..Default::default()
            }),
        };

        assert_eq!(error.status_code(), Some(404));
        assert_eq!(
            error.error_response().and_then(|it| it.error_code.as_deref()),
            Some("NCND01050")
        );
        assert!(!error.is_decode_error());
    }
}
