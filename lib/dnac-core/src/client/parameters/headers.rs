use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::{reject_nil_headers, to_named_values};
use crate::client::ApiClientError;

/// Extra headers of a call.
///
/// Values are flattened with [`reject_nil_headers`] when the request is
/// built, so an optional header left to `None` is not sent at all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallHeaders {
    headers: IndexMap<String, Value>,
}

impl CallHeaders {
    /// Creates an empty header set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds headers from a parameter struct whose (renamed) field names are
    /// the header names.
    ///
    /// # Errors
    ///
    /// Fails when the value does not serialize to a JSON object.
    pub fn from_serializable<T>(value: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let headers = to_named_values(value)?.into_iter().collect();
        Ok(Self { headers })
    }

    /// Adds or replaces one header.
    #[must_use]
    pub fn add_header(mut self, name: impl Into<String>, value: impl Serialize) -> Self {
        let name = name.into();
        let value = serde_json::to_value(value).unwrap_or_else(|error| {
            warn!(%name, %error, "header value cannot be serialized, skipping");
            Value::Null
        });
        self.headers.insert(name, value);
        self
    }

    /// Adds every header of `other`, replacing existing ones.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.headers.extend(other.headers);
        self
    }

    /// `true` when no header is declared.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Number of declared headers, including the ones that are `None`.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub(in crate::client) fn to_http_headers(&self) -> IndexMap<String, String> {
        reject_nil_headers(
            self.headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct IntentHeaders {
        #[serde(rename = "__runsync")]
        runsync: Option<bool>,
        #[serde(rename = "__timeout")]
        timeout: Option<u32>,
    }

    #[test]
    fn test_new_empty_headers() {
        let headers = CallHeaders::new();

        assert!(headers.is_empty());
        assert_eq!(headers.len(), 0);
    }

    #[test]
    fn test_headers_from_struct() {
        let headers = CallHeaders::from_serializable(&IntentHeaders {
            runsync: Some(true),
            timeout: None,
        })
        .expect("serializable headers");

        assert_eq!(headers.len(), 2);
        insta::assert_debug_snapshot!(headers.to_http_headers(), @r#"
        {
            "__runsync": "true",
        }
        "#);
    }

    #[test]
    fn test_add_and_merge_headers() {
        let headers = CallHeaders::new()
            .add_header("Authorization", "Basic dXNlcjpwYXNz")
            .merge(CallHeaders::new().add_header("__timeout", 60));

        let http_headers = headers.to_http_headers();

        assert_eq!(
            http_headers.get("Authorization").map(String::as_str),
            Some("Basic dXNlcjpwYXNz")
        );
        assert_eq!(http_headers.get("__timeout").map(String::as_str), Some("60"));
    }

    #[test]
    fn test_merge_replaces_existing_header() {
        let headers = CallHeaders::new()
            .add_header("__runsync", false)
            .merge(CallHeaders::new().add_header("__runsync", true));

        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.to_http_headers().get("__runsync").map(String::as_str),
            Some("true")
        );
    }
}
