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


//! Drive the retry loop with the policies resolved from a client
//! configuration. The clock is paused, so the backoff delays do not slow
//! down the tests.

#[cfg(test)]
mod tests {
    use gax::client_config::ClientConfig;
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::options::RequestOptions;
    use gax::retry_loop_internal::retry_loop;
    use gax::retry_throttler::{CircuitBreaker, RetryThrottlerArg};
    use gapic_gax as gax;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    const CONFIG: &str = r#"{"interfaces": {"google.test.v1.Service": {
        "retry_codes": {"idempotent": ["UNAVAILABLE"], "non_idempotent": []},
        "retry_params": {"default": {
            "initial_retry_delay_millis": 100, "retry_delay_multiplier": 2.0,
            "max_retry_delay_millis": 1000, "initial_rpc_timeout_millis": 5000,
            "rpc_timeout_multiplier": 1.0, "max_rpc_timeout_millis": 5000,
            "total_timeout_millis": 10000}},
        "methods": {
            "GetThing": {"timeout_millis": 5000, "retry_codes_name": "idempotent", "retry_params_name": "default"},
            "CreateThing": {"timeout_millis": 5000, "retry_codes_name": "non_idempotent", "retry_params_name": "default"}
        }}}}"#;

    fn options(method: &str) -> anyhow::Result<RequestOptions> {
        let settings = ClientConfig::from_json(CONFIG)?.service_settings("google.test.v1.Service")?;
        Ok(settings.apply(method, RequestOptions::default()))
    }

    async fn run(
        options: RequestOptions,
        attempts: Arc<AtomicU32>,
        fail_first: u32,
        code: Code,
    ) -> gax::Result<String> {
        let throttler = RetryThrottlerArg::from(CircuitBreaker::clamp(1000, 1, 1));
        let retry_policy = options.retry_policy().clone().expect("retry policy is set");
        let backoff_policy = options.backoff_policy().clone().expect("backoff policy is set");
        let inner = async |_remaining: Option<Duration>| {
            let n = attempts.fetch_add(1, Ordering::SeqCst);
            if n < fail_first {
                return Err(Error::service(Status::default().set_code(code).set_message("fail")));
            }
            Ok(format!("success after {n} failures"))
        };
        retry_loop(
            inner,
            async |d| tokio::time::sleep(d).await,
            options.idempotent().unwrap_or(false),
            throttler.into(),
            retry_policy,
            backoff_policy,
        )
        .await
    }

    #[tokio::test(start_paused = true)]
    async fn retries_transient_errors() -> anyhow::Result<()> {
        let options = options("GetThing")?;
        assert_eq!(options.idempotent(), Some(true));
        let attempts = Arc::new(AtomicU32::new(0));
        let start = Instant::now();
        let got = run(options, attempts.clone(), 2, Code::Unavailable).await?;
        assert_eq!(got, "success after 2 failures");
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
        // The backoff delays are 100ms and 200ms, before jitter.
        assert!(start.elapsed() <= Duration::from_millis(300), "{:?}", start.elapsed());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn permanent_errors_stop_the_loop() -> anyhow::Result<()> {
        let attempts = Arc::new(AtomicU32::new(0));
        let got = run(options("GetThing")?, attempts.clone(), 5, Code::PermissionDenied).await;
        let err = got.unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::PermissionDenied), "{err:?}");
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn non_idempotent_methods_do_not_retry() -> anyhow::Result<()> {
        let options = options("CreateThing")?;
        assert_eq!(options.idempotent(), Some(false));
        let attempts = Arc::new(AtomicU32::new(0));
        let got = run(options, attempts.clone(), 5, Code::Unavailable).await;
        let err = got.unwrap_err();
        assert_eq!(err.status().map(|s| s.code), Some(Code::Unavailable), "{err:?}");
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn total_timeout_exhausts_the_loop() -> anyhow::Result<()> {
        let attempts = Arc::new(AtomicU32::new(0));
        let start = Instant::now();
        let got = run(options("GetThing")?, attempts.clone(), u32::MAX, Code::Unavailable).await;
        let err = got.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert!(attempts.load(Ordering::SeqCst) > 1);
        assert!(start.elapsed() <= Duration::from_secs(10), "{:?}", start.elapsed());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn request_options_override_the_configuration() -> anyhow::Result<()> {
        use gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
        let mut options = RequestOptions::default();
        options.set_retry_policy(AlwaysRetry.with_attempt_limit(2));
        let settings = ClientConfig::from_json(CONFIG)?.service_settings("google.test.v1.Service")?;
        let options = settings.apply("GetThing", options);
        let attempts = Arc::new(AtomicU32::new(0));
        let got = run(options, attempts.clone(), u32::MAX, Code::Unavailable).await;
        assert!(got.is_err(), "{got:?}");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
        Ok(())
    }
}
