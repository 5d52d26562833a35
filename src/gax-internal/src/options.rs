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


//! Client configuration shared by all the generated transports.

use gax::client_builder::Result;
use gax::client_config::{ClientConfig as JsonConfig, ServiceSettings};

pub use auth::credentials::Credentials;

/// The client configuration for [crate::http::ReqwestClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub(crate) const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

/// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Resolves the per-method settings for `interface`.
///
/// `bundled` is the JSON client configuration shipped with the client
/// library. Any configuration provided via `with_client_config()` is merged
/// on top of it. The retry and backoff policies set in the client builder
/// replace the policies derived from the JSON configuration.
pub fn service_settings(
    config: &ClientConfig,
    bundled: &str,
    interface: &str,
) -> Result<ServiceSettings> {
    let mut json = JsonConfig::from_json(bundled)?;
    if let Some(overrides) = &config.client_config {
        json = json.merge(JsonConfig::from_json(overrides)?);
    }
    let settings = json
        .service_settings(interface)?
        .with_client_policies(config.retry_policy.clone(), config.backoff_policy.clone());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::options::RequestOptions;
    use scoped_env::ScopedEnv;
    use std::time::Duration;

    const BUNDLED: &str = r#"{"interfaces": {"google.test.v1.Service": {
        "retry_codes": {"idempotent": ["UNAVAILABLE"], "non_idempotent": []},
        "retry_params": {"default": {
            "initial_retry_delay_millis": 100, "retry_delay_multiplier": 1.3,
            "max_retry_delay_millis": 60000, "initial_rpc_timeout_millis": 20000,
            "rpc_timeout_multiplier": 1.0, "max_rpc_timeout_millis": 20000,
            "total_timeout_millis": 600000}},
        "methods": {
            "GetThing": {"timeout_millis": 20000, "retry_codes_name": "idempotent", "retry_params_name": "default"},
            "ListThings": {"timeout_millis": 20000, "retry_codes_name": "idempotent", "retry_params_name": "default", "page_size": 50}
        }}}}"#;

    // This test must run serially because it manipulates the environment.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        let mut config = ClientConfig::default();
        config.tracing = true;
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "not-true");
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
    }

    #[test]
    fn bundled_settings() -> anyhow::Result<()> {
        let settings = service_settings(&ClientConfig::default(), BUNDLED, "google.test.v1.Service")?;
        let options = settings.apply("GetThing", RequestOptions::default());
        assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(20)));
        assert_eq!(options.idempotent(), Some(true));
        assert_eq!(settings.page_size("ListThings"), Some(50));
        Ok(())
    }

    #[test]
    fn user_overrides() -> anyhow::Result<()> {
        let mut config = ClientConfig::default();
        config.client_config = Some(
            r#"{"interfaces": {"google.test.v1.Service": {"methods": {
                "GetThing": {"timeout_millis": 5000},
                "ListThings": {"page_size": 10}}}}}"#
                .to_string(),
        );
        let settings = service_settings(&config, BUNDLED, "google.test.v1.Service")?;
        let options = settings.apply("GetThing", RequestOptions::default());
        assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(5)));
        assert_eq!(settings.page_size("ListThings"), Some(10));
        Ok(())
    }

    #[test]
    fn client_policies() -> anyhow::Result<()> {
        use gax::retry_policy::{NeverRetry, RetryPolicy};
        use std::sync::Arc;
        let mut config = ClientConfig::default();
        let policy: Arc<dyn RetryPolicy> = Arc::new(NeverRetry);
        config.retry_policy = Some(policy);
        let settings = service_settings(&config, BUNDLED, "google.test.v1.Service")?;
        let options = settings.apply("GetThing", RequestOptions::default());
        let got = options.retry_policy().as_ref().map(|p| format!("{p:?}"));
        assert_eq!(got.as_deref(), Some("NeverRetry"));
        Ok(())
    }

    #[test]
    fn errors() {
        let got = service_settings(&ClientConfig::default(), "not json", "google.test.v1.Service");
        assert!(matches!(&got, Err(e) if e.is_config()), "{got:?}");

        let got = service_settings(&ClientConfig::default(), BUNDLED, "google.test.v1.Missing");
        assert!(matches!(&got, Err(e) if e.is_config()), "{got:?}");

        let mut config = ClientConfig::default();
        config.client_config = Some("[]".to_string());
        let got = service_settings(&config, BUNDLED, "google.test.v1.Service");
        assert!(matches!(&got, Err(e) if e.is_config()), "{got:?}");
    }
}
