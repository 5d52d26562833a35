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


//! Verify the HTTP client uses the retry policy, backoff policy, and retry
//! throttler as expected. The policy implementations are tested in the
//! `gapic-gax` unit tests.
//!
//! The tests use an HTTP server that returns a sequence of responses, specific
//! to each test.

#[cfg(test)]
mod tests {
    use gapic_gax_internal::http::ReqwestClient;
    use gapic_gax_internal::options::ClientConfig;
    use gax::backoff_policy::BackoffPolicy;
    use gax::error::rpc::Code;
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::*;
    use gax::retry_policy::{Aip194Strict, RetryCodes, RetryPolicyExt};
    use gax::retry_throttler::CircuitBreaker;
    use http::StatusCode;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    #[tokio::test]
    async fn no_retry_immediate_success() -> Result<()> {
        let server = start(vec![success()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), test_options())
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test]
    async fn no_retry_immediate_failure() -> Result<()> {
        let server = start(vec![permanent()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), test_options())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(StatusCode::BAD_REQUEST.as_u16()));
        assert_eq!(err.status().map(|s| s.code), Some(Code::InvalidArgument));
        Ok(())
    }

    #[tokio::test]
    async fn retry_success() -> Result<()> {
        let server = start(vec![transient(), transient(), success()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), test_options())
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test]
    async fn retry_codes_policy() -> Result<()> {
        // `RetryCodes` is the policy created from the client configuration.
        let server = start(vec![transient(), success()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let mut options = test_options();
        options.set_retry_policy(RetryCodes::new([Code::Unavailable]).with_attempt_limit(3));
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), options)
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test]
    async fn retry_exhausted() -> Result<()> {
        let server = start(vec![transient(), transient(), transient()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let mut options = test_options();
        options.set_retry_policy(Aip194Strict.with_attempt_limit(3));
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), options)
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn non_idempotent_requests_are_not_retried() -> Result<()> {
        let server = start(vec![transient()]);
        let endpoint = format!("http://{}", server.addr());

        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::POST, "/retry".into());
        let mut options = test_options();
        options.set_idempotency(false);
        let err = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), options)
            .await
            .unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable));
        Ok(())
    }

    #[tokio::test]
    async fn client_policies() -> Result<()> {
        let server = start(vec![transient(), success()]);
        let endpoint = format!("http://{}", server.addr());

        let mut config = test_config();
        config.retry_policy = Some(Arc::new(Aip194Strict.with_attempt_limit(2)));
        config.backoff_policy = Some(Arc::new(test_backoff()));
        config.retry_throttler = Arc::new(Mutex::new(CircuitBreaker::default()));
        let client = ReqwestClient::new(config, &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), options)
            .await?;
        assert_eq!(response.into_body(), json!({"status": "done"}));
        Ok(())
    }

    #[tokio::test]
    async fn retry_attempts_are_logged() -> Result<()> {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = {
            let buffer = buffer.clone();
            move || LogWriter(buffer.clone())
        };
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = start(vec![transient(), success()]);
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry".into());
        client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), test_options())
            .await?;

        let logs = String::from_utf8(buffer.lock().expect("log buffer is not poisoned").clone())?;
        assert!(logs.contains("retrying after error"), "{logs}");
        assert!(logs.contains("try-again"), "{logs}");
        assert!(logs.contains("request failed"), "{logs}");
        Ok(())
    }

    struct LogWriter(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .expect("log buffer is not poisoned")
                .extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn success() -> (StatusCode, String) {
        (StatusCode::OK, json!({"status": "done"}).to_string())
    }

    fn transient() -> (StatusCode, String) {
        let status = json!({"error": {
            "code": StatusCode::SERVICE_UNAVAILABLE.as_u16(),
            "status": "UNAVAILABLE",
            "message": "try-again",
        }});
        (StatusCode::SERVICE_UNAVAILABLE, status.to_string())
    }

    fn permanent() -> (StatusCode, String) {
        let status = json!({"error": {
            "code": StatusCode::BAD_REQUEST.as_u16(),
            "status": "INVALID_ARGUMENT",
            "message": "uh-oh",
        }});
        (StatusCode::BAD_REQUEST, status.to_string())
    }

    fn test_config() -> ClientConfig {
        use auth::credentials::anonymous::Builder as Anonymous;
        let mut config = ClientConfig::default();
        config.cred = Some(Anonymous::new().build());
        config
    }

    fn test_options() -> RequestOptions {
        let mut options = RequestOptions::default();
        options.set_retry_policy(Aip194Strict.with_attempt_limit(5));
        options.set_backoff_policy(test_backoff());
        options.set_idempotency(true);
        options
    }

    fn test_backoff() -> impl BackoffPolicy {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }

    fn start(responses: Vec<(StatusCode, String)>) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::path("/retry"))
                .times(responses.len())
                .respond_with(cycle(
                    responses
                        .into_iter()
                        .map(|(status, body)| to_responder(status, body))
                        .collect(),
                )),
        );
        server
    }

    fn to_responder(status: StatusCode, body: String) -> Box<dyn Responder> {
        Box::new(
            status_code(status.as_u16())
                .insert_header("Content-Type", "application/json")
                .body(body),
        )
    }
}
