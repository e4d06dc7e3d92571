use std::collections::HashSet;
use std::fmt::Display;
use std::sync::LazyLock;

use indexmap::IndexMap;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::warn;

use crate::client::ApiClientError;

static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

/// Everything but the RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn replace_path_param(path: &str, param_name: &str, value: &str) -> String {
    let pattern = ["{", param_name, "}"].concat();
    path.replace(&pattern, value)
}

/// Values URL normalization would remove or collapse.
fn is_dot_or_empty_segment(value: &str) -> bool {
    matches!(value, "" | "." | "..")
}

fn encode_path_param_value(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// An endpoint path template with its `{placeholder}` values.
///
/// Values are percent-encoded as a single path segment when the path is
/// resolved, so a `/` inside a value never creates a new segment. Empty,
/// `.` and `..` values are rejected.
///
/// ```rust
/// use dnac_core::CallPath;
///
/// let path = CallPath::from("/api/v1/interface/network-device/{deviceId}/{startIndex}/{recordsToReturn}")
///     .add_param("deviceId", "abc-123")
///     .add_param("startIndex", 1)
///     .add_param("recordsToReturn", 500);
/// assert_eq!(path.template(), "/api/v1/interface/network-device/{deviceId}/{startIndex}/{recordsToReturn}");
/// ```
#[derive(Debug, Clone, Default, derive_more::Display)]
#[display("{path}")]
pub struct CallPath {
    path: String,
    args: IndexMap<String, String>,
}

impl CallPath {
    /// Sets the value of the `{name}` placeholder.
    #[must_use]
    pub fn add_param(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.args.insert(name.into(), value.to_string());
        self
    }

    /// The unresolved template.
    pub fn template(&self) -> &str {
        &self.path
    }
}

impl From<&str> for CallPath {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<String> for CallPath {
    fn from(path: String) -> Self {
        Self {
            path,
            args: IndexMap::new(),
        }
    }
}

/// A path with every placeholder substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(in crate::client) struct PathResolved {
    pub(in crate::client) path: String,
}

impl TryFrom<CallPath> for PathResolved {
    type Error = ApiClientError;

    fn try_from(value: CallPath) -> Result<Self, Self::Error> {
        let CallPath { mut path, args } = value;

        let mut names: HashSet<String> = RE
            .captures_iter(&path)
            .filter_map(|caps| caps.name("name"))
            .map(|found| found.as_str().to_string())
            .collect();

        for (name, value) in args {
            if !names.remove(&name) {
                warn!(?name, %path, "argument name not found");
                continue;
            }
            if is_dot_or_empty_segment(&value) {
                return Err(ApiClientError::InvalidPathSegment { path, name, value });
            }
            let encoded_value = encode_path_param_value(&value);
            path = replace_path_param(&path, &name, &encoded_value);
        }

        if names.is_empty() {
            return Ok(Self { path });
        }

        let mut missings: Vec<String> = names.into_iter().collect();
        missings.sort();
        Err(ApiClientError::PathUnresolved { path, missings })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn resolve(path: CallPath) -> String {
        PathResolved::try_from(path)
            .expect("path should resolve")
            .path
    }

    #[test]
    fn should_build_call_path() {
        let path = CallPath::from("/api/v1/network-device/{id}").add_param("id", "abc-123");

        insta::assert_debug_snapshot!(path, @r#"
        CallPath {
            path: "/api/v1/network-device/{id}",
            args: {
                "id": "abc-123",
            },
        }
        "#);
    }

    #[test]
    fn should_resolve_single_param() {
        let path = CallPath::from("/resource/{id}").add_param("id", "abc-123");

        insta::assert_snapshot!(resolve(path), @"/resource/abc-123");
    }

    #[test]
    fn should_resolve_multiple_params() {
        let path = CallPath::from("/api/v1/discovery/{id}/network-device/{startIndex}/{recordsToReturn}")
            .add_param("recordsToReturn", 500)
            .add_param("id", 42)
            .add_param("startIndex", 1);

        insta::assert_snapshot!(resolve(path), @"/api/v1/discovery/42/network-device/1/500");
    }

    #[test]
    fn should_resolve_repeated_placeholder() {
        let path = CallPath::from("/a/{id}/b/{id}").add_param("id", "x");

        assert_eq!(resolve(path), "/a/x/b/x");
    }

    #[rstest]
    #[case::slash("a/b", "a%2Fb")]
    #[case::space("a b", "a%20b")]
    #[case::question_mark("a?b", "a%3Fb")]
    #[case::hash("a#b", "a%23b")]
    #[case::percent("100%", "100%25")]
    #[case::braces("{other}", "%7Bother%7D")]
    #[case::ip_address("10.10.20.51", "10.10.20.51")]
    #[case::unreserved("a-b_c.d~e", "a-b_c.d~e")]
    #[case::unicode("café", "caf%C3%A9")]
    fn should_percent_encode_path_values(#[case] value: &str, #[case] expected: &str) {
        let path = CallPath::from("/api/v1/file/namespace/{nameSpace}").add_param("nameSpace", value);

        let resolved = resolve(path);

        assert_eq!(resolved, format!("/api/v1/file/namespace/{expected}"));
        assert!(!RE.is_match(&resolved));
    }

    #[test]
    fn should_not_substitute_inside_encoded_values() {
        let path = CallPath::from("/x/{first}/{second}")
            .add_param("first", "{second}")
            .add_param("second", "2");

        assert_eq!(resolve(path), "/x/%7Bsecond%7D/2");
    }

    #[test]
    fn should_fail_on_missing_params() {
        let path = CallPath::from("/api/v1/task/operation/{operationId}/{offset}/{limit}")
            .add_param("offset", 0);

        let result = PathResolved::try_from(path);

        insta::assert_debug_snapshot!(result, @r#"
        Err(
            PathUnresolved {
                path: "/api/v1/task/operation/{operationId}/0/{limit}",
                missings: [
                    "limit",
                    "operationId",
                ],
            },
        )
        "#);
    }

    #[rstest]
    #[case::empty("")]
    #[case::current(".")]
    #[case::parent("..")]
    fn should_reject_dot_and_empty_values(#[case] value: &str) {
        let path = CallPath::from("/api/v1/discovery/{id}").add_param("id", value);

        let result = PathResolved::try_from(path);

        let Err(ApiClientError::InvalidPathSegment { path, name, value: rejected }) = result else {
            panic!("expected an invalid segment error, got {result:?}");
        };
        assert_eq!(path, "/api/v1/discovery/{id}");
        assert_eq!(name, "id");
        assert_eq!(rejected, value);
    }

    #[test]
    fn should_accept_values_with_dots() {
        let path = CallPath::from("/api/v1/discovery/{id}").add_param("id", "...");

        assert_eq!(resolve(path), "/api/v1/discovery/...");
    }

    #[test]
    fn should_ignore_unknown_params() {
        let path = CallPath::from("/api/v1/network-device/count").add_param("id", "unused");

        assert_eq!(resolve(path), "/api/v1/network-device/count");
    }
}
