use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use tracing::{trace, warn};

use super::{map_values_to_query_items, to_named_values};
use crate::client::ApiClientError;

/// Query parameters of a call.
///
/// Values are kept as JSON until the URL is built, then flattened with
/// [`map_values_to_query_items`]: `None` fields disappear and list fields repeat
/// their key.
///
/// ```rust
/// use dnac_core::CallQuery;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// #[serde(rename_all = "camelCase")]
/// struct JobQuery {
///     offset: Option<i64>,
///     limit: Option<i64>,
///     ip_address: Vec<String>,
/// }
///
/// let query = CallQuery::from_serializable(&JobQuery {
///     offset: Some(5),
///     limit: None,
///     ip_address: vec!["10.0.0.1".to_string(), "10.0.0.2".to_string()],
/// })?;
/// assert_eq!(query.to_query_string()?, "offset=5&ipAddress=10.0.0.1&ipAddress=10.0.0.2");
/// # Ok::<(), dnac_core::ApiClientError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallQuery {
    params: IndexMap<String, Value>,
}

impl CallQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a query from a parameter struct, keeping field declaration order.
    ///
    /// # Errors
    ///
    /// Fails when the value does not serialize to a JSON object.
    pub fn from_serializable<T>(value: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let params = to_named_values(value)?.into_iter().collect();
        Ok(Self { params })
    }

    /// Adds or replaces one parameter.
    #[must_use]
    pub fn add_param(mut self, name: impl Into<String>, value: impl Serialize) -> Self {
        let name = name.into();
        let value = serde_json::to_value(value).unwrap_or_else(|error| {
            warn!(%name, %error, "query parameter cannot be serialized, skipping");
            Value::Null
        });
        self.params.insert(name, value);
        self
    }

    /// Adds every parameter of `other`, replacing existing ones.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.params.extend(other.params);
        self
    }

    /// `true` when no item would be sent.
    pub fn is_empty(&self) -> bool {
        self.to_query_items().is_empty()
    }

    /// The flattened `(name, value)` items, in declaration order.
    pub fn to_query_items(&self) -> Vec<(String, String)> {
        map_values_to_query_items(
            self.params
                .iter()
                .map(|(name, value)| (name.as_str(), value.clone())),
        )
    }

    /// The `application/x-www-form-urlencoded` query string, without the leading `?`.
    ///
    /// # Errors
    ///
    /// Fails if the items cannot be url-encoded.
    pub fn to_query_string(&self) -> Result<String, ApiClientError> {
        let items = self.to_query_items();
        trace!(?items, "query items");
        let result = serde_urlencoded::to_string(&items)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Default, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct PagedQuery {
        offset: Option<i64>,
        limit: Option<i64>,
        name: Option<String>,
    }

    #[test]
    fn should_encode_declared_order_without_nil() {
        let query = CallQuery::from_serializable(&PagedQuery {
            offset: Some(5),
            limit: None,
            name: Some("foo".to_string()),
        })
        .expect("serializable query");

        let query_string = query.to_query_string().expect("encodable query");

        insta::assert_snapshot!(query_string, @"offset=5&name=foo");
    }

    #[test]
    fn should_be_empty_when_every_value_is_nil() {
        let query = CallQuery::from_serializable(&PagedQuery::default()).expect("serializable query");

        assert!(query.is_empty());
        assert_eq!(query.to_query_string().expect("encodable query"), "");
    }

    #[test]
    fn should_repeat_list_keys() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct DeviceFilter {
            hostname: Vec<String>,
            serial_number: Vec<String>,
        }

        let query = CallQuery::from_serializable(&DeviceFilter {
            hostname: vec!["edge 1".to_string(), "edge&2".to_string()],
            serial_number: vec![],
        })
        .expect("serializable query");

        insta::assert_snapshot!(query.to_query_string().expect("encodable query"), @"hostname=edge+1&hostname=edge%262");
    }

    #[test]
    fn should_accept_unit_as_empty_query() {
        let query = CallQuery::from_serializable(&()).expect("unit is an empty query");

        assert!(query.is_empty());
    }

    #[test]
    fn should_reject_scalar_as_query() {
        let result = CallQuery::from_serializable(&42);

        assert!(matches!(
            result,
            Err(ApiClientError::SerializationError { .. })
        ));
    }

    #[test]
    fn should_add_and_merge_params() {
        let query = CallQuery::new()
            .add_param("forceSync", true)
            .merge(CallQuery::new().add_param("limit", json!(10)));

        assert_eq!(
            query.to_query_items(),
            vec![
                ("forceSync".to_string(), "true".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }
}
