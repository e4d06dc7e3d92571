//! Flattening of named optional values into the shapes HTTP needs.
//!
//! Both functions are total: every JSON value has a representation.

use indexmap::IndexMap;
use serde_json::Value;

/// Drops absent header values and renders the others as strings.
///
/// - `null` is dropped
/// - booleans, numbers, and strings use their plain text form
/// - arrays are joined with `,` (simple style)
/// - objects are rendered as compact JSON
///
/// ```rust
/// use dnac_core::reject_nil_headers;
/// use serde_json::{Value, json};
///
/// let headers = reject_nil_headers([
///     ("__runsync", json!(true)),
///     ("__timeout", Value::Null),
/// ]);
/// assert_eq!(headers.get("__runsync").map(String::as_str), Some("true"));
/// assert!(!headers.contains_key("__timeout"));
/// ```
pub fn reject_nil_headers<I, K>(values: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    values
        .into_iter()
        .filter_map(|(name, value)| {
            let rendered = match &value {
                Value::Null => return None,
                Value::Array(elements) => elements
                    .iter()
                    .filter_map(render)
                    .collect::<Vec<_>>()
                    .join(","),
                other => render(other)?,
            };
            Some((name.into(), rendered))
        })
        .collect()
}

/// Turns named optional values into ordered query items.
///
/// - `null` is dropped
/// - an array yields one item per non-null element, all sharing the name,
///   in element order
/// - any other value yields exactly one item
///
/// Items keep the order of the input.
///
/// ```rust
/// use dnac_core::map_values_to_query_items;
/// use serde_json::{Value, json};
///
/// let items = map_values_to_query_items([
///     ("family", json!(["Switches and Hubs", "Routers"])),
///     ("limit", Value::Null),
///     ("offset", json!(5)),
/// ]);
/// assert_eq!(items, vec![
///     ("family".to_string(), "Switches and Hubs".to_string()),
///     ("family".to_string(), "Routers".to_string()),
///     ("offset".to_string(), "5".to_string()),
/// ]);
/// ```
pub fn map_values_to_query_items<I, K>(values: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, Value)>,
    K: Into<String>,
{
    let mut items = Vec::new();
    for (name, value) in values {
        match value {
            Value::Null => {}
            Value::Array(elements) => {
                let name = name.into();
                items.extend(
                    elements
                        .iter()
                        .filter_map(render)
                        .map(|element| (name.clone(), element)),
                );
            }
            other => {
                if let Some(rendered) = render(&other) {
                    items.push((name.into(), rendered));
                }
            }
        }
    }
    items
}

fn render(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::String(text) => Some(text.clone()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn should_drop_nil_headers() {
        let headers = reject_nil_headers([
            ("__runsync", json!(false)),
            ("__timeout", Value::Null),
            ("__persistbapioutput", json!(true)),
        ]);

        insta::assert_debug_snapshot!(headers, @r#"
        {
            "__runsync": "false",
            "__persistbapioutput": "true",
        }
        "#);
    }

    #[rstest]
    #[case::bool(json!(true), "true")]
    #[case::integer(json!(30), "30")]
    #[case::float(json!(1.5), "1.5")]
    #[case::string(json!("Basic dXNlcjpwYXNz"), "Basic dXNlcjpwYXNz")]
    #[case::array(json!(["a", 1, null, true]), "a,1,true")]
    #[case::object(json!({"key": "value"}), r#"{"key":"value"}"#)]
    fn should_render_header_value(#[case] value: Value, #[case] expected: &str) {
        let headers = reject_nil_headers([("x-test", value)]);

        assert_eq!(headers.get("x-test").map(String::as_str), Some(expected));
    }

    #[test]
    fn should_expand_query_lists_in_order() {
        let items = map_values_to_query_items([
            ("hostname", json!(["cat_9k_1", "cat_9k_2", "cs3850"])),
            ("family", Value::Null),
            ("offset", json!(1)),
        ]);

        assert_eq!(
            items,
            vec![
                ("hostname".to_string(), "cat_9k_1".to_string()),
                ("hostname".to_string(), "cat_9k_2".to_string()),
                ("hostname".to_string(), "cs3850".to_string()),
                ("offset".to_string(), "1".to_string()),
            ]
        );
    }

    #[rstest]
    #[case::empty_list(json!([]), 0)]
    #[case::one_element(json!(["a"]), 1)]
    #[case::nulls_inside(json!(["a", null, "b"]), 2)]
    #[case::scalar(json!("a"), 1)]
    #[case::null(Value::Null, 0)]
    fn should_count_query_items(#[case] value: Value, #[case] expected: usize) {
        let items = map_values_to_query_items([("name", value)]);

        assert_eq!(items.len(), expected);
        assert!(items.iter().all(|(name, _)| name == "name"));
    }

    #[test]
    fn should_keep_declaration_order() {
        let items = map_values_to_query_items([
            ("offset", json!(5)),
            ("limit", Value::Null),
            ("name", json!("foo")),
        ]);

        let names: Vec<_> = items.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["offset", "name"]);
    }
}
