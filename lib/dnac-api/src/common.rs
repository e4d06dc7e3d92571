//! Payloads shared by several resources.

use dnac_core::{ApiClientError, Envelope, RequestBuilder};
use serde::{Deserialize, Serialize};

/// What every endpoint wrapper returns: a call ready to be awaited, or the
/// reason it could not be built.
pub type EndpointCall<T> = Result<RequestBuilder<T>, ApiClientError>;

/// Reference to the asynchronous task started by a mutating call.
///
/// Poll it with [`misc::get_task_by_id`](crate::misc::get_task_by_id).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskId {
    /// Identifier of the task.
    pub task_id: String,
    /// Relative URL of the task, e.g. `/api/v1/task/<taskId>`.
    pub url: String,
}

/// Enveloped [`TaskId`], the answer of most `POST`, `PUT`, and `DELETE` calls.
pub type TaskIdResult = Envelope<TaskId>;

/// Enveloped number, the answer of every `.../count` endpoint.
pub type CountResult = Envelope<i64>;

/// Paging of list endpoints.
///
/// Both fields are sent only when set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Paging {
    /// Index of the first record, starting at 1 for most endpoints.
    pub offset: Option<i64>,
    /// Maximum number of records.
    pub limit: Option<i64>,
}

impl Paging {
    /// Paging with both values set.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

#[cfg(test)]
pub(crate) mod testing {
    use std::fmt::Debug;

    use dnac_core::{DnacClient, RequestBuilder};
    use http::uri::Scheme;
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use serde_json::Value;

    pub(crate) fn client() -> DnacClient {
        DnacClient::builder()
            .with_scheme(Scheme::HTTP)
            .with_host("dnac.local")
            .with_port(80)
            .build()
            .expect("should build client")
    }

    pub(crate) fn url<T>(call: &RequestBuilder<T>) -> String {
        call.to_request()
            .expect("should build request")
            .url()
            .to_string()
    }

    pub(crate) fn body<T>(call: &RequestBuilder<T>) -> String {
        let request = call.to_request().expect("should build request");
        request
            .body()
            .and_then(|body| body.as_bytes())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default()
    }

    /// Decodes `json` as `T`, then checks that encoding gives the same wire
    /// keys and values back and decodes to an equal value.
    pub(crate) fn assert_round_trip<T>(json: &str)
    where
        T: Serialize + DeserializeOwned + PartialEq + Debug,
    {
        let expected: Value = serde_json::from_str(json).expect("valid json");
        let decoded: T = serde_json::from_value(expected.clone()).expect("should decode");

        let encoded = serde_json::to_value(&decoded).expect("should encode");
        assert_eq!(encoded, expected, "wire form of {}", std::any::type_name::<T>());

        let again: T = serde_json::from_value(encoded).expect("should decode again");
        assert_eq!(again, decoded);
    }
}
