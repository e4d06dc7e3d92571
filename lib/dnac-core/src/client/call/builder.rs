use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ApiCall;
use crate::client::{
    ApiClientError, CallBody, CallHeaders, CallQuery, ExpectedStatusCodes, RequestBuilder,
};

// Parameters
impl ApiCall {
    /// Adds query parameters; later values replace earlier ones with the same name.
    #[must_use]
    pub fn with_query(mut self, query: CallQuery) -> Self {
        self.query = self.query.merge(query);
        self
    }

    /// Adds the fields of a query parameter struct, in declaration order.
    ///
    /// # Errors
    ///
    /// Fails when `params` does not serialize to a JSON object.
    pub fn with_query_params<T>(self, params: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let query = CallQuery::from_serializable(params)?;
        Ok(self.with_query(query))
    }

    /// Adds headers; later values replace earlier ones with the same name.
    #[must_use]
    pub fn with_headers(mut self, headers: CallHeaders) -> Self {
        self.headers = Some(match self.headers.take() {
            Some(existing) => existing.merge(headers),
            None => headers,
        });
        self
    }

    /// Adds one header. A `None` value is not sent.
    #[must_use]
    pub fn with_header(self, name: impl Into<String>, value: impl Serialize) -> Self {
        self.with_headers(CallHeaders::new().add_header(name, value))
    }

    /// Adds the fields of a header parameter struct.
    ///
    /// # Errors
    ///
    /// Fails when `params` does not serialize to a JSON object.
    pub fn with_header_params<T>(self, params: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let headers = CallHeaders::from_serializable(params)?;
        Ok(self.with_headers(headers))
    }
}

// Body
impl ApiCall {
    /// Sets a JSON request body.
    ///
    /// # Errors
    ///
    /// Fails if the payload cannot be serialized.
    pub fn json<T>(self, payload: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let body = CallBody::json(payload)?;
        Ok(self.with_body(body))
    }

    /// Sets a prebuilt request body.
    #[must_use]
    pub fn with_body(mut self, body: CallBody) -> Self {
        self.body = Some(body);
        self
    }
}

// Status
impl ApiCall {
    /// Replaces the accepted status codes.
    #[must_use]
    pub fn with_expected_status_codes(mut self, codes: ExpectedStatusCodes) -> Self {
        self.expected_status_codes = codes;
        self
    }
}

// Output
impl ApiCall {
    /// Decodes the response body as JSON into `T`.
    ///
    /// Use `Envelope<X>` for endpoints that wrap their payload, `X` otherwise.
    pub fn into_json<T>(self) -> RequestBuilder<T>
    where
        T: DeserializeOwned,
    {
        RequestBuilder::new(self, decode_json::<T>)
    }

    /// Ignores the response body.
    pub fn into_empty(self) -> RequestBuilder<()> {
        RequestBuilder::new(self, decode_empty)
    }

    /// Returns the raw response body.
    pub fn into_bytes(self) -> RequestBuilder<Vec<u8>> {
        RequestBuilder::new(self, decode_bytes)
    }

    /// Returns the response body as UTF-8 text.
    pub fn into_text(self) -> RequestBuilder<String> {
        RequestBuilder::new(self, decode_text)
    }
}

fn decode_json<T>(result: crate::CallResult) -> Result<T, ApiClientError>
where
    T: DeserializeOwned,
{
    result.as_json()
}

fn decode_empty(result: crate::CallResult) -> Result<(), ApiClientError> {
    result.as_empty()
}

#[allow(clippy::unnecessary_wraps)]
fn decode_bytes(result: crate::CallResult) -> Result<Vec<u8>, ApiClientError> {
    Ok(result.into_bytes())
}

fn decode_text(result: crate::CallResult) -> Result<String, ApiClientError> {
    result.as_text()
}
