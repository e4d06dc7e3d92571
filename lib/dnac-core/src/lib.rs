//! # DNA Center core
//!
//! Request building and dispatch for the Cisco DNA Center REST API.
//!
//! This crate holds everything that is not specific to one endpoint:
//! - **[`DnacClient`]** - the explicit client context (base URI, transport, credentials)
//! - **[`ApiCall`]** - an untyped request under construction
//! - **[`RequestBuilder`]** - a request bound to the type its response decodes into
//! - **[`Envelope`]** - the `{response, version}` wrapper most endpoints answer with
//! - **[`map_values_to_query_items`]** and **[`reject_nil_headers`]** - parameter flattening
//!
//! The endpoint wrappers themselves live in the `dnac-api` crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dnac_core::{Authentication, CallPath, DnacClient, Envelope};
//! # use serde::Deserialize;
//! # #[derive(Deserialize)]
//! # struct Device { id: String }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DnacClient::builder()
//!     .with_host("sandboxdnac.cisco.com")
//!     .with_authentication(Authentication::Token("a-token".into()))
//!     .build()?;
//!
//! let path = CallPath::from("/api/v1/network-device/{id}").add_param("id", "abc-123");
//! let device: Envelope<Device> = client.get(path)?.into_json().await?;
//! println!("{}", device.response.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every failure surfaces as one [`ApiClientError`], returned exactly once.
//! Use [`ApiClientError::status_code`] to tell a rejected call apart from a
//! response that did not match the expected shape.

mod client;

pub use self::client::{
    ApiCall, ApiClientError, Authentication, AuthenticationError, CallBody, CallHeaders, CallPath,
    CallQuery, CallResult, DnacClient, DnacClientBuilder, Envelope, ErrorResponse,
    ExpectedStatusCodes, RequestBuilder, SecureString, map_values_to_query_items,
    reject_nil_headers,
};
