mod body;
pub use self::body::CallBody;

mod flatten;
pub use self::flatten::{map_values_to_query_items, reject_nil_headers};

mod headers;
pub use self::headers::CallHeaders;

mod path;
pub(super) use self::path::PathResolved;
pub use self::path::CallPath;

mod query;
pub use self::query::CallQuery;

use serde::Serialize;
use serde_json::{Map, Value};

use super::ApiClientError;

/// Serializes a parameter set into its named values, in declaration order.
///
/// `()` and `None` count as an empty set.
fn to_named_values<T>(value: &T) -> Result<Map<String, Value>, ApiClientError>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value)? {
        Value::Object(values) => Ok(values),
        Value::Null => Ok(Map::new()),
        other => Err(ApiClientError::SerializationError {
            message: format!("expected a struct or a map of parameters, got {other}"),
        }),
    }
}
