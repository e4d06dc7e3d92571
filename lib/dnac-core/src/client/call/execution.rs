use std::future::{Future, IntoFuture};
use std::pin::Pin;

use headers::HeaderMapExt;
use http::header::{HeaderName, HeaderValue};
use http::{Method, Uri};
use reqwest::{Body, Request};
use tracing::debug;
use url::Url;

use super::{ApiCall, BODY_MAX_LENGTH};
use crate::client::parameters::PathResolved;
use crate::client::response::ExpectedStatusCodes;
use crate::client::{
    ApiClientError, Authentication, CallBody, CallHeaders, CallPath, CallQuery, CallResult,
    ErrorResponse,
};

impl ApiCall {
    pub(in crate::client) fn build(
        client: reqwest::Client,
        base_uri: Uri,
        method: Method,
        path: CallPath,
        authentication: Option<Authentication>,
    ) -> Result<Self, ApiClientError> {
        let path = PathResolved::try_from(path)?;

        Ok(Self {
            client,
            base_uri,
            method,
            path,
            query: CallQuery::default(),
            headers: None,
            body: None,
            authentication,
            expected_status_codes: ExpectedStatusCodes::default(),
        })
    }
}

impl ApiCall {
    /// Builds the request this call would send, without sending it.
    ///
    /// # Errors
    ///
    /// Fails when the URL, a header, or the credentials are invalid.
    pub fn to_request(&self) -> Result<Request, ApiClientError> {
        let url = Self::build_url(&self.base_uri, &self.path, &self.query)?;
        Self::build_request(
            self.method.clone(),
            url,
            self.headers.as_ref(),
            self.body.as_ref(),
            self.authentication.as_ref(),
        )
    }

    /// Sends the request once and checks the status code.
    pub(in crate::client) async fn exchange(self) -> Result<CallResult, ApiClientError> {
        let request = self.to_request()?;
        let Self {
            client,
            expected_status_codes,
            ..
        } = self;

        debug!(?request, "sending...");
        let response = client.execute(request).await?;
        debug!(?response, "...receiving");

        let status_code = response.status().as_u16();
        if !expected_status_codes.contains(status_code) {
            let text = response
                .text()
                .await
                .unwrap_or_else(|err| format!("<unable to read response body: {err}>"));
            let error_response = ErrorResponse::parse(&text);
            let body = truncate_body(text);
            return Err(ApiClientError::UnexpectedStatusCode {
                status_code,
                body,
                error_response,
            });
        }

        CallResult::new(response).await
    }

    pub(super) fn build_url(
        base_uri: &Uri,
        path: &PathResolved,
        query: &CallQuery,
    ) -> Result<Url, ApiClientError> {
        let base_uri = base_uri.to_string();
        let url = format!(
            "{}/{}",
            base_uri.trim_end_matches('/'),
            path.path.trim_start_matches('/')
        );
        let mut url = url.parse::<Url>()?;

        if !query.is_empty() {
            let query_string = query.to_query_string()?;
            url.set_query(Some(&query_string));
        }

        Ok(url)
    }

    pub(super) fn build_request(
        method: Method,
        url: Url,
        headers: Option<&CallHeaders>,
        body: Option<&CallBody>,
        authentication: Option<&Authentication>,
    ) -> Result<Request, ApiClientError> {
        let mut request = Request::new(method, url);
        let req_headers = request.headers_mut();

        if let Some(auth) = authentication {
            let (header_name, header_value) = auth.to_header()?;
            req_headers.insert(header_name, header_value);
        }

        // Explicit headers win over the client credentials
        if let Some(headers) = headers {
            for (name, value) in headers.to_http_headers() {
                req_headers.insert(
                    HeaderName::from_bytes(name.as_bytes())?,
                    HeaderValue::from_str(&value)?,
                );
            }
        }

        if let Some(body) = body {
            req_headers.typed_insert(body.content_type.clone());
            *request.body_mut() = Some(Body::from(body.data.clone()));
        }

        Ok(request)
    }
}

fn truncate_body(text: String) -> String {
    if text.len() <= BODY_MAX_LENGTH {
        return text;
    }
    let mut end = BODY_MAX_LENGTH;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let head = text.get(..end).unwrap_or_default();
    format!("{head}... (truncated)")
}

impl IntoFuture for ApiCall {
    type Output = Result<CallResult, ApiClientError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.exchange())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_short_body() {
        assert_eq!(truncate_body("oops".to_string()), "oops");
    }

    #[test]
    fn should_truncate_long_body_on_char_boundary() {
        let text = "é".repeat(BODY_MAX_LENGTH);

        let truncated = truncate_body(text);

        assert!(truncated.ends_with("... (truncated)"));
        let head = truncated.trim_end_matches("... (truncated)");
        assert_eq!(head.len(), BODY_MAX_LENGTH);
        assert!(head.chars().all(|it| it == 'é'));
    }
}
