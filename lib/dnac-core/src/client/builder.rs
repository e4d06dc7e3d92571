use std::fmt::Debug;
use std::net::{IpAddr, Ipv4Addr};

use http::Uri;
use http::uri::{PathAndQuery, Scheme};

use super::{ApiClientError, Authentication, DnacClient};

/// Builder for [`DnacClient`].
///
/// Defaults target `https://127.0.0.1:443/` without credentials. A DNA Center
/// appliance usually ships with a self-signed certificate; see
/// [`with_danger_accept_invalid_certs`](Self::with_danger_accept_invalid_certs).
///
/// ```rust
/// use dnac_core::{Authentication, DnacClient};
///
/// # fn main() -> Result<(), dnac_core::ApiClientError> {
/// let client = DnacClient::builder()
///     .with_host("10.10.20.85")
///     .with_authentication(Authentication::Basic {
///         username: "admin".to_string(),
///         password: "secret".into(),
///     })
///     .build()?;
/// assert_eq!(client.base_uri().to_string(), "https://10.10.20.85/");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DnacClientBuilder {
    client: Option<reqwest::Client>,
    scheme: Scheme,
    host: String,
    port: u16,
    base_path: Option<PathAndQuery>,
    authentication: Option<Authentication>,
    accept_invalid_certs: bool,
}

impl DnacClientBuilder {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails when the scheme, host, port, and base path do not form a valid URI,
    /// or when the underlying transport cannot be initialised.
    pub fn build(self) -> Result<DnacClient, ApiClientError> {
        let Self {
            client,
            scheme,
            host,
            port,
            base_path,
            authentication,
            accept_invalid_certs,
        } = self;

        let default_port = (scheme == Scheme::HTTPS && port == 443)
            || (scheme == Scheme::HTTP && port == 80);
        let authority = if default_port {
            host
        } else {
            format!("{host}:{port}")
        };

        let builder = Uri::builder().scheme(scheme).authority(authority);
        let builder = if let Some(path) = &base_path {
            builder.path_and_query(path.path())
        } else {
            builder.path_and_query("/")
        };
        let base_uri = builder.build()?;

        let client = match client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .danger_accept_invalid_certs(accept_invalid_certs)
                .build()?,
        };

        Ok(DnacClient {
            client,
            base_uri,
            authentication,
        })
    }

    /// Sets the URI scheme, HTTPS by default.
    #[must_use]
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the controller host name or IP address.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the controller port, 443 by default.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Prefixes every endpoint path, e.g. when the controller sits behind a proxy.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidBasePath`] if the value is not a valid URI path.
    pub fn with_base_path<P>(mut self, base_path: P) -> Result<Self, ApiClientError>
    where
        P: TryInto<PathAndQuery>,
        P::Error: Debug + 'static,
    {
        let base_path = base_path
            .try_into()
            .map_err(|err| ApiClientError::InvalidBasePath {
                error: format!("{err:?}"),
            })?;
        self.base_path = Some(base_path);
        Ok(self)
    }

    /// Sets the credentials sent with every call.
    #[must_use]
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        self.authentication = Some(authentication);
        self
    }

    /// Uses a preconfigured transport (timeouts, proxies, root certificates).
    ///
    /// When set, [`with_danger_accept_invalid_certs`](Self::with_danger_accept_invalid_certs)
    /// is ignored.
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Accepts any TLS certificate presented by the controller.
    ///
    /// Only meant for lab appliances with self-signed certificates.
    #[must_use]
    pub fn with_danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

impl Default for DnacClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            scheme: Scheme::HTTPS,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST).to_string(),
            port: 443,
            base_path: None,
            authentication: None,
            accept_invalid_certs: false,
        }
    }
}
