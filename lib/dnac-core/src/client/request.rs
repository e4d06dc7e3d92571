use std::fmt;
use std::future::{Future, IntoFuture};
use std::pin::Pin;

use reqwest::Request;
use tokio::task::JoinHandle;

use super::{ApiCall, ApiClientError, CallResult};

type Decoder<T> = fn(CallResult) -> Result<T, ApiClientError>;

/// A call bound to the type its response decodes into.
///
/// A `RequestBuilder` is consumed by the call: it sends exactly one request,
/// never retries, and yields exactly one of a decoded value or an
/// [`ApiClientError`].
///
/// - `.await` (or [`execute`](Self::execute)) drives it on the current task
/// - [`execute_with`](Self::execute_with) spawns it and hands the outcome to a continuation
///
/// Dropping the future before it completes cancels the request.
///
/// ```rust,no_run
/// use dnac_core::{CallPath, DnacClient, Envelope};
///
/// # async fn example(client: DnacClient) -> Result<(), dnac_core::ApiClientError> {
/// let count: Envelope<i64> = client
///     .get(CallPath::from("/api/v1/network-device/count"))?
///     .into_json()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct RequestBuilder<T> {
    call: ApiCall,
    decode: Decoder<T>,
}

impl<T> RequestBuilder<T> {
    pub(in crate::client) fn new(call: ApiCall, decode: Decoder<T>) -> Self {
        Self { call, decode }
    }

    /// The underlying call.
    pub fn call(&self) -> &ApiCall {
        &self.call
    }

    /// Builds the request that would be sent, without sending it.
    ///
    /// # Errors
    ///
    /// Fails when the URL, a header, or the credentials are invalid.
    pub fn to_request(&self) -> Result<Request, ApiClientError> {
        self.call.to_request()
    }

    /// Sends the request and decodes the response.
    ///
    /// # Errors
    ///
    /// - the controller is unreachable ([`ApiClientError::ReqwestError`])
    /// - the status is not accepted ([`ApiClientError::UnexpectedStatusCode`])
    /// - the body does not match `T` ([`ApiClientError::JsonError`])
    pub async fn execute(self) -> Result<T, ApiClientError> {
        let Self { call, decode } = self;
        let result = call.exchange().await?;
        decode(result)
    }
}

impl<T> RequestBuilder<T>
where
    T: Send + 'static,
{
    /// Spawns the call on the Tokio runtime and invokes `continuation` exactly
    /// once with its outcome.
    ///
    /// Aborting the returned handle cancels the request; the continuation is
    /// then never invoked.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn execute_with<F>(self, continuation: F) -> JoinHandle<()>
    where
        F: FnOnce(Result<T, ApiClientError>) + Send + 'static,
    {
        tokio::spawn(async move {
            let outcome = self.execute().await;
            continuation(outcome);
        })
    }
}

impl<T> IntoFuture for RequestBuilder<T>
where
    T: Send + 'static,
{
    type Output = Result<T, ApiClientError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.execute())
    }
}

impl<T> fmt::Debug for RequestBuilder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("call", &self.call)
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}
