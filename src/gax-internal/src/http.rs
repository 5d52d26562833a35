// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! The REST/JSON transport shared by all the generated clients.

use auth::credentials::{CacheableResource, Credentials};
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::exponential_backoff::ExponentialBackoff;
use gax::options::RequestOptions;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::{Aip194Strict, PollingErrorPolicy};
use gax::response::{Parts, Response};
use gax::retry_policy::RetryPolicy;
use gax::retry_throttler::SharedRetryThrottler;
use http::Extensions;
use std::sync::Arc;

/// Sends requests to a service, with authentication and retries.
///
/// One instance is shared by all the requests in a client, and it is cheap to
/// clone.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    retry_throttler: SharedRetryThrottler,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl ReqwestClient {
    /// Creates a client for `default_endpoint`, unless `config` overrides it.
    ///
    /// `scopes` are requested by the default credentials. They are unused if
    /// `config` has credentials.
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
        scopes: &[&str],
    ) -> gax::client_builder::Result<Self> {
        let cred = Self::make_credentials(&config, scopes)?;
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| default_endpoint.to_string());
        Ok(Self {
            inner,
            cred,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
            retry_throttler: config.retry_throttler,
            polling_error_policy: config.polling_error_policy,
            polling_backoff_policy: config.polling_backoff_policy,
        })
    }

    /// Starts a request for `path`, relative to the client endpoint.
    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner.request(method, format!("{}{path}", &self.endpoint))
    }

    /// Sends the request, retrying as prescribed by the policies.
    ///
    /// The request options take precedence over the client configuration.
    /// Without a retry policy the request is sent exactly once.
    pub async fn execute<I, O>(
        &self,
        mut builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>>
    where
        I: serde::ser::Serialize,
        O: serde::de::DeserializeOwned + Default,
    {
        if let Some(user_agent) = options.user_agent() {
            builder = builder.header(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
            );
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        match self.get_retry_policy(&options) {
            None => self.request_attempt::<O>(builder, &options, None).await,
            Some(policy) => self.retry_loop::<O>(builder, options, policy).await,
        }
    }

    fn make_credentials(
        config: &crate::options::ClientConfig,
        scopes: &[&str],
    ) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        default_credentials(scopes)
            .build()
            .map_err(BuilderError::cred)
    }

    async fn retry_loop<O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        options: RequestOptions,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<Response<O>> {
        let idempotent = options.idempotent().unwrap_or(false);
        let throttler = self.get_retry_throttler(&options);
        let backoff = self.get_backoff_policy(&options);
        let this = self.clone();
        let inner = async move |remaining_time| {
            // Requests with streaming bodies cannot be cloned. The generated
            // clients only send JSON bodies.
            let builder = builder.try_clone().ok_or_else(|| {
                Error::ser("the request body cannot be cloned, it must not be a stream")
            })?;
            this.request_attempt(builder, &options, remaining_time).await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        gax::retry_loop_internal::retry_loop(
            inner,
            sleep,
            idempotent,
            throttler,
            retry_policy,
            backoff,
        )
        .await
    }

    async fn request_attempt<O: serde::de::DeserializeOwned + Default>(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &RequestOptions,
        remaining_time: Option<std::time::Duration>,
    ) -> Result<Response<O>> {
        if let Some(timeout) = gax::retry_loop_internal::effective_timeout(options, remaining_time) {
            builder = builder.timeout(timeout);
        }
        let auth_headers = match self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?
        {
            CacheableResource::New { data, .. } => data,
            // Only requests with an entity tag can get this result.
            CacheableResource::NotModified => {
                return Err(Error::authentication(
                    auth::errors::CredentialsError::from_msg(
                        false,
                        "unexpected NotModified result without an entity tag",
                    ),
                ));
            }
        };
        builder = builder.headers(auth_headers);
        let response = builder.send().await.map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), url = %response.url(), "request failed");
            return self::to_http_error(response).await;
        }
        self::to_http_response(response).await
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    fn get_retry_policy(&self, options: &RequestOptions) -> Option<Arc<dyn RetryPolicy>> {
        options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone())
    }

    fn get_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }

    fn get_retry_throttler(&self, options: &RequestOptions) -> SharedRetryThrottler {
        options
            .retry_throttler()
            .clone()
            .unwrap_or_else(|| self.retry_throttler.clone())
    }

    /// The polling error policy for long-running operations started with
    /// `options`.
    pub fn get_polling_error_policy(&self, options: &RequestOptions) -> Arc<dyn PollingErrorPolicy> {
        options
            .polling_error_policy()
            .clone()
            .or_else(|| self.polling_error_policy.clone())
            .unwrap_or_else(|| Arc::new(Aip194Strict))
    }

    /// The polling backoff policy for long-running operations started with
    /// `options`.
    pub fn get_polling_backoff_policy(
        &self,
        options: &RequestOptions,
    ) -> Arc<dyn PollingBackoffPolicy> {
        options
            .polling_backoff_policy()
            .clone()
            .or_else(|| self.polling_backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

/// The body type for requests without a body.
#[derive(serde::Serialize)]
pub struct NoBody;

/// Converts an unsuccessful HTTP response into an error.
///
/// Responses with a `google.rpc.Status` payload become service errors, any
/// other payload is preserved in a transport error.
pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match gax::error::rpc::Status::try_from(&body) {
        Ok(status) => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        Err(_) => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

// Application default credentials, requesting the service's scopes.
fn default_credentials(scopes: &[&str]) -> auth::credentials::Builder {
    auth::credentials::Builder::default().with_scopes(scopes.iter().copied())
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    // A 204 response has no body, and an empty body is not valid JSON.
    let no_content = response.status() == reqwest::StatusCode::NO_CONTENT;
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let body = match body {
        content if content.is_empty() && no_content => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new().set_headers(parts.headers),
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, HeaderValue};
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    fn response(code: u16, content: &str) -> anyhow::Result<reqwest::Response> {
        let response = http::Response::builder()
            .header("Content-Type", "application/json")
            .status(code)
            .body(content.to_string())?;
        Ok(response.into())
    }

    #[tokio::test]
    async fn http_error_bytes() -> TestResult {
        let response = response(400, r#"{"error": "bad request"}"#)?;
        let err = to_http_error::<()>(response).await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        assert!(err.status().is_none(), "{err:?}");
        let mut want = HeaderMap::new();
        want.insert("content-type", HeaderValue::from_static("application/json"));
        assert_eq!(err.http_headers(), Some(&want));
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from(r#"{"error": "bad request"}"#))
        );
        Ok(())
    }

    #[tokio::test]
    async fn http_error_with_status() -> TestResult {
        use gax::error::rpc::{Code, ErrorInfo, Status, StatusDetails};
        let body = serde_json::json!({"error": {
            "code": 404,
            "message": "instance projects/p/instances/i not found",
            "status": "NOT_FOUND",
            "details": [{
                "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                "reason": "NOT_FOUND",
                "domain": "bigtableadmin.googleapis.com",
            }]
        }});
        let response = response(404, &body.to_string())?;
        let err = to_http_error::<()>(response).await.unwrap_err();
        let want = Status::default()
            .set_code(Code::NotFound)
            .set_message("instance projects/p/instances/i not found")
            .set_details([StatusDetails::ErrorInfo(
                ErrorInfo::default()
                    .set_reason("NOT_FOUND")
                    .set_domain("bigtableadmin.googleapis.com"),
            )]);
        assert_eq!(err.status(), Some(&want));
        assert_eq!(err.http_status_code(), Some(404));
        Ok(())
    }

    #[tokio::test]
    #[test_case(200, "{}"; "200 with empty object")]
    #[test_case(204, "{}"; "204 with empty object")]
    #[test_case(204, ""; "204 with empty content")]
    async fn empty_content(code: u16, content: &str) -> TestResult {
        let response = to_http_response::<wkt::Empty>(response(code, content)?).await?;
        assert_eq!(response.into_body(), wkt::Empty::default());
        Ok(())
    }

    #[tokio::test]
    async fn empty_content_requires_204() -> TestResult {
        let got = to_http_response::<wkt::Empty>(response(200, "")?).await;
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn response_headers() -> TestResult {
        let response = http::Response::builder()
            .header("x-test-header", "test-value")
            .status(200)
            .body(r#"{"name": "projects/p"}"#.to_string())?;
        let response = to_http_response::<serde_json::Value>(response.into()).await?;
        assert_eq!(
            response.headers().get("x-test-header"),
            Some(&HeaderValue::from_static("test-value"))
        );
        assert_eq!(response.body(), &serde_json::json!({"name": "projects/p"}));
        Ok(())
    }

    #[test]
    fn default_credentials_request_scopes() {
        let builder = default_credentials(&[
            "https://www.googleapis.com/auth/cloud-platform",
            "https://www.googleapis.com/auth/datastore",
        ]);
        let got = format!("{builder:?}");
        assert!(got.contains("https://www.googleapis.com/auth/cloud-platform"), "{got}");
        assert!(got.contains("https://www.googleapis.com/auth/datastore"), "{got}");
    }

    #[tokio::test]
    async fn configured_credentials_ignore_scopes() -> TestResult {
        let mut config = crate::options::ClientConfig::default();
        config.cred = Some(auth::credentials::anonymous::Builder::new().build());
        let cred = ReqwestClient::make_credentials(&config, &["https://www.googleapis.com/auth/cloud-platform"])?;
        match cred.headers(Extensions::new()).await? {
            CacheableResource::New { data, .. } => assert!(data.is_empty(), "{data:?}"),
            CacheableResource::NotModified => panic!("anonymous credentials always return new headers"),
        }
        Ok(())
    }
}
