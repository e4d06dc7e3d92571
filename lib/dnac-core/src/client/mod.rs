use http::{Method, Uri};

mod builder;
pub use self::builder::DnacClientBuilder;

mod call;
pub use self::call::ApiCall;

mod request;
pub use self::request::RequestBuilder;

mod parameters;
pub use self::parameters::{
    CallBody, CallHeaders, CallPath, CallQuery, map_values_to_query_items, reject_nil_headers,
};

mod response;
pub use self::response::{CallResult, Envelope, ExpectedStatusCodes};

mod auth;
pub use self::auth::{Authentication, AuthenticationError, SecureString};

mod error;
pub use self::error::{ApiClientError, ErrorResponse};

/// The client context every endpoint wrapper receives.
///
/// A `DnacClient` carries the transport, the controller base URI, and the
/// credentials. It holds no per-call state: cloning it is cheap (the inner
/// [`reqwest::Client`] is reference counted) and clones can be used from
/// several tasks at once.
///
/// # Example
///
/// ```rust
/// use dnac_core::{CallPath, DnacClient};
///
/// # fn main() -> Result<(), dnac_core::ApiClientError> {
/// let client = DnacClient::builder()
///     .with_host("dnac.example.com")
///     .build()?;
///
/// let call = client.delete(CallPath::from("/api/v1/discovery/{id}").add_param("id", "42"))?;
/// let request = call.to_request()?;
/// assert_eq!(request.url().as_str(), "https://dnac.example.com/api/v1/discovery/42");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DnacClient {
    client: reqwest::Client,
    base_uri: Uri,
    authentication: Option<Authentication>,
}

// Create
impl DnacClient {
    /// Creates a builder with HTTPS on `127.0.0.1:443` and no credentials.
    pub fn builder() -> DnacClientBuilder {
        DnacClientBuilder::default()
    }

    /// Returns a copy of this client that sends the given credentials.
    ///
    /// Typical use is switching from Basic credentials to the token returned
    /// by the authentication endpoint.
    #[must_use]
    pub fn with_authentication(&self, authentication: Authentication) -> Self {
        Self {
            client: self.client.clone(),
            base_uri: self.base_uri.clone(),
            authentication: Some(authentication),
        }
    }

    /// The controller base URI, e.g. `https://dnac.example.com/`.
    pub fn base_uri(&self) -> &Uri {
        &self.base_uri
    }

    /// The credentials sent with every call, if any.
    pub fn authentication(&self) -> Option<&Authentication> {
        self.authentication.as_ref()
    }
}

// Call
impl DnacClient {
    /// Starts a call with an arbitrary method.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::PathUnresolved`] when a `{placeholder}` of
    /// the path template received no value.
    pub fn call(
        &self,
        method: Method,
        path: impl Into<CallPath>,
    ) -> Result<ApiCall, ApiClientError> {
        ApiCall::build(
            self.client.clone(),
            self.base_uri.clone(),
            method,
            path.into(),
            self.authentication.clone(),
        )
    }

    /// Starts a `GET` call.
    ///
    /// # Errors
    ///
    /// See [`DnacClient::call`].
    pub fn get(&self, path: impl Into<CallPath>) -> Result<ApiCall, ApiClientError> {
        self.call(Method::GET, path)
    }

    /// Starts a `POST` call.
    ///
    /// # Errors
    ///
    /// See [`DnacClient::call`].
    pub fn post(&self, path: impl Into<CallPath>) -> Result<ApiCall, ApiClientError> {
        self.call(Method::POST, path)
    }

    /// Starts a `PUT` call.
    ///
    /// # Errors
    ///
    /// See [`DnacClient::call`].
    pub fn put(&self, path: impl Into<CallPath>) -> Result<ApiCall, ApiClientError> {
        self.call(Method::PUT, path)
    }

    /// Starts a `DELETE` call.
    ///
    /// # Errors
    ///
    /// See [`DnacClient::call`].
    pub fn delete(&self, path: impl Into<CallPath>) -> Result<ApiCall, ApiClientError> {
        self.call(Method::DELETE, path)
    }
}
