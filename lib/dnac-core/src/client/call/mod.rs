use http::{Method, Uri};

use super::parameters::PathResolved;
use super::response::ExpectedStatusCodes;
use super::{Authentication, CallBody, CallHeaders, CallQuery};

/// Unexpected response bodies are cut to this many bytes in errors.
pub(in crate::client) const BODY_MAX_LENGTH: usize = 1024;

mod builder;
mod execution;
#[cfg(test)]
mod tests;

/// One HTTP call under construction.
///
/// Obtained from [`DnacClient::get`](super::DnacClient::get) and friends with a
/// fully resolved path, then refined with query parameters, headers, and a body.
/// Bind it to a response type with [`into_json`](Self::into_json),
/// [`into_empty`](Self::into_empty), [`into_bytes`](Self::into_bytes), or
/// [`into_text`](Self::into_text), or `.await` it for the raw [`CallResult`](super::CallResult).
///
/// # Method Groups
///
/// ## Request Body
/// - [`json(payload)`](Self::json) - JSON request body
/// - [`with_body(body)`](Self::with_body) - prebuilt body
///
/// ## Parameters
/// - [`with_query(query)`](Self::with_query) / [`with_query_params(&params)`](Self::with_query_params)
/// - [`with_headers(headers)`](Self::with_headers) / [`with_header_params(&params)`](Self::with_header_params)
/// - [`with_header(name, value)`](Self::with_header)
///
/// ## Status Code Validation
/// - [`with_expected_status_codes(codes)`](Self::with_expected_status_codes), `2xx` by default
///
/// ## Inspection
/// - [`to_request()`](Self::to_request) - the request that would be sent
#[derive(derive_more::Debug)]
pub struct ApiCall {
    #[debug(ignore)]
    pub(super) client: reqwest::Client,
    pub(super) base_uri: Uri,

    pub(super) method: Method,
    pub(super) path: PathResolved,
    pub(super) query: CallQuery,
    pub(super) headers: Option<CallHeaders>,

    #[debug(ignore)]
    pub(super) body: Option<CallBody>,

    pub(super) authentication: Option<Authentication>,
    pub(super) expected_status_codes: ExpectedStatusCodes,
}
