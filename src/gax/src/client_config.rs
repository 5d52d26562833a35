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


//! Parse and resolve the bundled GAPIC client configurations.
//!
//! Each generated client bundles a `*_client_config.json` file with the
//! default retry, timeout and paging settings for each RPC. The format is
//! shared with the other GAPIC client libraries:
//!
//! ```norust
//! {"interfaces": {"google.bigtable.admin.v2.BigtableTableAdmin": {
//!   "retry_codes": {"idempotent": ["DEADLINE_EXCEEDED", "UNAVAILABLE"], "non_idempotent": []},
//!   "retry_params": {"default": {
//!     "initial_retry_delay_millis": 100, "retry_delay_multiplier": 1.3,
//!     "max_retry_delay_millis": 60000, "initial_rpc_timeout_millis": 20000,
//!     "rpc_timeout_multiplier": 1.0, "max_rpc_timeout_millis": 20000,
//!     "total_timeout_millis": 600000}},
//!   "methods": {"CreateTable": {"timeout_millis": 130000,
//!     "retry_codes_name": "non_idempotent", "retry_params_name": "default"}}}}}
//! ```
//!
//! Applications may provide overrides in the same format, see
//! [ClientBuilder::with_client_config]. The overrides are [merged][ClientConfig::merge]
//! on top of the bundled configuration before the settings for each method
//! are resolved.
//!
//! # Example
//! ```
//! # use gapic_gax::client_config::*;
//! # use gapic_gax::error::rpc::Code;
//! let config = ClientConfig::from_json(r#"{"interfaces": {"google.example.v1.Example": {
//!     "retry_codes": {"idempotent": ["UNAVAILABLE"]},
//!     "methods": {"GetThing": {"timeout_millis": 5000, "retry_codes_name": "idempotent"}}}}}"#)?;
//! let settings = config.service_settings("google.example.v1.Example")?;
//! let method = settings.method("GetThing").expect("GetThing is configured");
//! assert_eq!(method.timeout(), std::time::Duration::from_secs(5));
//! assert_eq!(method.retry_codes(), &[Code::Unavailable]);
//! # Ok::<(), Error>(())
//! ```
//!
//! [ClientBuilder::with_client_config]: crate::client_builder::ClientBuilder::with_client_config

use crate::backoff_policy::BackoffPolicy;
use crate::error::rpc::Code;
use crate::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use crate::options::RequestOptions;
use crate::retry_policy::{RetryCodes, RetryPolicy, RetryPolicyExt};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Duration;

/// The attempt timeout for methods without a `timeout_millis` setting.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Problems parsing or resolving a client configuration.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot parse the client configuration: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("the client configuration has no entry for {0}")]
    MissingInterface(String),
    #[error("unknown status code {code} in retry codes {codes_name} of {interface}")]
    UnknownCode {
        interface: String,
        codes_name: String,
        code: String,
    },
    #[error("method {method} of {interface} references missing retry codes {name}")]
    MissingRetryCodes {
        interface: String,
        method: String,
        name: String,
    },
    #[error("method {method} of {interface} references missing retry params {name}")]
    MissingRetryParams {
        interface: String,
        method: String,
        name: String,
    },
    #[error("invalid retry params {name} in {interface}: {source}")]
    InvalidRetryParams {
        interface: String,
        name: String,
        #[source]
        source: crate::exponential_backoff::Error,
    },
}

type Result<T> = std::result::Result<T, Error>;

/// The client configuration, as found in the `*_client_config.json` files.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ClientConfig {
    /// The configuration for each service, keyed by its fully qualified name.
    pub interfaces: BTreeMap<String, InterfaceConfig>,
}

/// The configuration for one service.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct InterfaceConfig {
    /// Named sets of retryable status codes, e.g. `"idempotent"`.
    pub retry_codes: BTreeMap<String, Vec<String>>,
    /// Named sets of retry parameters, e.g. `"default"`.
    pub retry_params: BTreeMap<String, RetryParams>,
    /// Per-method settings, keyed by the RPC name, e.g. `"CreateTable"`.
    pub methods: BTreeMap<String, MethodConfig>,
}

/// A set of retry parameters.
///
/// All the parameters are required.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[non_exhaustive]
pub struct RetryParams {
    pub initial_retry_delay_millis: u64,
    pub retry_delay_multiplier: f64,
    pub max_retry_delay_millis: u64,
    pub initial_rpc_timeout_millis: u64,
    pub rpc_timeout_multiplier: f64,
    pub max_rpc_timeout_millis: u64,
    pub total_timeout_millis: u64,
}

/// The settings for one method.
///
/// Fields missing in an override keep the value of the bundled configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct MethodConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_millis: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_codes_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_params_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
}

impl ClientConfig {
    /// Parses a client configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Parse)
    }

    /// Merges `overrides` on top of this configuration.
    ///
    /// Retry codes and retry parameters in `overrides` replace the sets with
    /// the same name. Method settings are merged field by field.
    pub fn merge(mut self, overrides: ClientConfig) -> Self {
        for (name, update) in overrides.interfaces {
            let interface = self.interfaces.entry(name).or_default();
            interface.retry_codes.extend(update.retry_codes);
            interface.retry_params.extend(update.retry_params);
            for (method, update) in update.methods {
                let current = interface.methods.entry(method).or_default();
                current.timeout_millis = update.timeout_millis.or(current.timeout_millis);
                current.retry_codes_name = update.retry_codes_name.or(current.retry_codes_name.take());
                current.retry_params_name =
                    update.retry_params_name.or(current.retry_params_name.take());
                current.page_size = update.page_size.or(current.page_size);
            }
        }
        self
    }

    /// Resolves the settings for every method of `interface`.
    pub fn service_settings(&self, interface: &str) -> Result<ServiceSettings> {
        let config = self
            .interfaces
            .get(interface)
            .ok_or_else(|| Error::MissingInterface(interface.to_string()))?;

        let mut codes = HashMap::new();
        for (name, names) in &config.retry_codes {
            let parsed = names
                .iter()
                .map(|code| {
                    Code::try_from(code.as_str()).map_err(|_| Error::UnknownCode {
                        interface: interface.to_string(),
                        codes_name: name.clone(),
                        code: code.clone(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            codes.insert(name.as_str(), parsed);
        }

        let mut params = HashMap::new();
        for (name, p) in &config.retry_params {
            let backoff = ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_millis(p.initial_retry_delay_millis))
                .with_maximum_delay(Duration::from_millis(p.max_retry_delay_millis))
                .with_scaling(p.retry_delay_multiplier)
                .build()
                .map_err(|source| Error::InvalidRetryParams {
                    interface: interface.to_string(),
                    name: name.clone(),
                    source,
                })?;
            params.insert(name.as_str(), RetrySettings::new(p, backoff));
        }

        let mut methods = HashMap::new();
        for (method, m) in &config.methods {
            let retry_codes = match &m.retry_codes_name {
                None => Vec::new(),
                Some(name) => codes
                    .get(name.as_str())
                    .cloned()
                    .ok_or_else(|| Error::MissingRetryCodes {
                        interface: interface.to_string(),
                        method: method.clone(),
                        name: name.clone(),
                    })?,
            };
            let retry = match &m.retry_params_name {
                None => None,
                Some(name) => Some(params.get(name.as_str()).cloned().ok_or_else(|| {
                    Error::MissingRetryParams {
                        interface: interface.to_string(),
                        method: method.clone(),
                        name: name.clone(),
                    }
                })?),
            };
            let timeout = m
                .timeout_millis
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_TIMEOUT);
            methods.insert(
                method.clone(),
                MethodSettings::new(timeout, retry_codes, retry, m.page_size),
            );
        }
        Ok(ServiceSettings { methods })
    }
}

/// The retry parameters, converted to durations.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct RetrySettings {
    pub backoff: ExponentialBackoff,
    pub initial_rpc_timeout: Duration,
    pub rpc_timeout_multiplier: f64,
    pub max_rpc_timeout: Duration,
    pub total_timeout: Duration,
}

impl RetrySettings {
    fn new(params: &RetryParams, backoff: ExponentialBackoff) -> Self {
        Self {
            backoff,
            initial_rpc_timeout: Duration::from_millis(params.initial_rpc_timeout_millis),
            rpc_timeout_multiplier: params.rpc_timeout_multiplier,
            max_rpc_timeout: Duration::from_millis(params.max_rpc_timeout_millis),
            total_timeout: Duration::from_millis(params.total_timeout_millis),
        }
    }
}

/// The resolved settings for one method.
#[derive(Clone, Debug)]
pub struct MethodSettings {
    timeout: Duration,
    retry_codes: Vec<Code>,
    retry: Option<RetrySettings>,
    page_size: Option<i32>,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
}

impl MethodSettings {
    fn new(
        timeout: Duration,
        retry_codes: Vec<Code>,
        retry: Option<RetrySettings>,
        page_size: Option<i32>,
    ) -> Self {
        let total = retry.as_ref().map(|r| r.total_timeout).unwrap_or(timeout);
        let retry_policy = Arc::new(RetryCodes::new(retry_codes.clone()).with_time_limit(total));
        let backoff_policy: Arc<dyn BackoffPolicy> = match &retry {
            Some(r) => Arc::new(r.backoff.clone()),
            None => Arc::new(ExponentialBackoff::default()),
        };
        Self {
            timeout,
            retry_codes,
            retry,
            page_size,
            retry_policy,
            backoff_policy,
        }
    }

    /// The attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The status codes that are retried for this method.
    pub fn retry_codes(&self) -> &[Code] {
        &self.retry_codes
    }

    /// The retry parameters, if the method has any.
    pub fn retry(&self) -> Option<&RetrySettings> {
        self.retry.as_ref()
    }

    /// The default page size, for List RPCs.
    pub fn page_size(&self) -> Option<i32> {
        self.page_size
    }

    /// Methods that retry some status codes are idempotent.
    pub fn idempotent(&self) -> bool {
        !self.retry_codes.is_empty()
    }

    /// Fills in the request options the caller did not set.
    pub fn apply(&self, mut options: RequestOptions) -> RequestOptions {
        if options.attempt_timeout().is_none() {
            options.set_attempt_timeout(self.timeout);
        }
        if options.retry_policy().is_none() {
            options.set_retry_policy(self.retry_policy.clone());
        }
        if options.backoff_policy().is_none() {
            options.set_backoff_policy(self.backoff_policy.clone());
        }
        options.set_default_idempotency(self.idempotent());
        options
    }
}

/// The resolved settings for all the methods of a service.
#[derive(Clone, Debug, Default)]
pub struct ServiceSettings {
    methods: HashMap<String, MethodSettings>,
}

impl ServiceSettings {
    /// Returns the settings for `method`, if the configuration includes it.
    pub fn method(&self, method: &str) -> Option<&MethodSettings> {
        self.methods.get(method)
    }

    /// Replaces the JSON policies with the policies configured in the client
    /// builder.
    ///
    /// Policies set in the client builder take precedence over the client
    /// configuration, but not over the per-request options.
    pub fn with_client_policies(
        mut self,
        retry_policy: Option<Arc<dyn RetryPolicy>>,
        backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    ) -> Self {
        for m in self.methods.values_mut() {
            if let Some(p) = &retry_policy {
                m.retry_policy = p.clone();
            }
            if let Some(p) = &backoff_policy {
                m.backoff_policy = p.clone();
            }
        }
        self
    }

    /// Fills in the request options for `method` the caller did not set.
    ///
    /// Methods missing from the configuration only get the
    /// [DEFAULT_TIMEOUT].
    pub fn apply(&self, method: &str, mut options: RequestOptions) -> RequestOptions {
        match self.methods.get(method) {
            Some(m) => m.apply(options),
            None => {
                if options.attempt_timeout().is_none() {
                    options.set_attempt_timeout(DEFAULT_TIMEOUT);
                }
                options
            }
        }
    }

    /// The default page size for `method`, if any.
    pub fn page_size(&self, method: &str) -> Option<i32> {
        self.methods.get(method).and_then(MethodSettings::page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error as RpcError;
    use crate::error::rpc::Status;
    use crate::retry_state::RetryState;
    use serde_json::json;
    use test_case::test_case;

    const INTERFACE: &str = "google.bigtable.admin.v2.BigtableTableAdmin";

    fn bundled() -> ClientConfig {
        let value = json!({"interfaces": {INTERFACE: {
            "retry_codes": {
                "idempotent": ["DEADLINE_EXCEEDED", "UNAVAILABLE"],
                "non_idempotent": []
            },
            "retry_params": {"default": {
                "initial_retry_delay_millis": 100,
                "retry_delay_multiplier": 1.3,
                "max_retry_delay_millis": 60000,
                "initial_rpc_timeout_millis": 20000,
                "rpc_timeout_multiplier": 1.0,
                "max_rpc_timeout_millis": 20000,
                "total_timeout_millis": 600000
            }},
            "methods": {
                "CreateTable": {
                    "timeout_millis": 130000,
                    "retry_codes_name": "non_idempotent",
                    "retry_params_name": "default"
                },
                "ListTables": {
                    "timeout_millis": 60000,
                    "retry_codes_name": "idempotent",
                    "retry_params_name": "default"
                },
                "DropRowRange": {
                    "retry_codes_name": "non_idempotent",
                    "retry_params_name": "default"
                }
            }
        }}});
        serde_json::from_value(value).unwrap()
    }

    fn status(code: Code) -> RpcError {
        RpcError::service(Status::default().set_code(code))
    }

    #[test]
    fn parse() -> anyhow::Result<()> {
        let config = bundled();
        let interface = config.interfaces.get(INTERFACE).unwrap();
        assert_eq!(interface.retry_codes.len(), 2);
        let params = interface.retry_params.get("default").unwrap();
        assert_eq!(params.retry_delay_multiplier, 1.3);
        assert_eq!(params.total_timeout_millis, 600000);
        let method = interface.methods.get("CreateTable").unwrap();
        assert_eq!(method.timeout_millis, Some(130000));
        assert_eq!(method.page_size, None);

        let roundtrip = ClientConfig::from_json(&serde_json::to_string(&config)?)?;
        assert_eq!(roundtrip, config);
        Ok(())
    }

    #[test]
    fn parse_error() {
        let got = ClientConfig::from_json("{\"interfaces\": 42}");
        assert!(matches!(got, Err(Error::Parse(_))), "{got:?}");
        let got = ClientConfig::from_json(
            r#"{"interfaces": {"a.B": {"retry_params": {"default": {"initial_retry_delay_millis": 100}}}}}"#,
        );
        assert!(matches!(got, Err(Error::Parse(_))), "{got:?}");
    }

    #[test]
    fn resolve() -> anyhow::Result<()> {
        let settings = bundled().service_settings(INTERFACE)?;

        let create = settings.method("CreateTable").unwrap();
        assert_eq!(create.timeout(), Duration::from_millis(130000));
        assert!(create.retry_codes().is_empty());
        assert!(!create.idempotent());
        let retry = create.retry().unwrap();
        assert_eq!(retry.total_timeout, Duration::from_secs(600));
        assert_eq!(retry.initial_rpc_timeout, Duration::from_secs(20));
        assert_eq!(retry.max_rpc_timeout, Duration::from_secs(20));
        assert_eq!(retry.rpc_timeout_multiplier, 1.0);
        use crate::polling_backoff_policy::PollingBackoffPolicy;
        let state = crate::polling_state::PollingState::default().set_attempt_count(1_u32);
        assert_eq!(retry.backoff.wait_period(&state), Duration::from_millis(100));

        let list = settings.method("ListTables").unwrap();
        assert_eq!(list.timeout(), Duration::from_secs(60));
        assert_eq!(list.retry_codes(), &[Code::DeadlineExceeded, Code::Unavailable]);
        assert!(list.idempotent());

        let drop = settings.method("DropRowRange").unwrap();
        assert_eq!(drop.timeout(), DEFAULT_TIMEOUT);
        assert!(settings.method("Unknown").is_none());
        Ok(())
    }

    #[test_case(r#"{"interfaces": {}}"#; "missing interface")]
    #[test_case(r#"{"interfaces": {"google.bigtable.admin.v2.BigtableTableAdmin": {"retry_codes": {"bad": ["NOT_A_CODE"]}}}}"#; "unknown code")]
    #[test_case(r#"{"interfaces": {"google.bigtable.admin.v2.BigtableTableAdmin": {"methods": {"GetTable": {"retry_codes_name": "missing"}}}}}"#; "missing codes")]
    #[test_case(r#"{"interfaces": {"google.bigtable.admin.v2.BigtableTableAdmin": {"methods": {"GetTable": {"retry_params_name": "missing"}}}}}"#; "missing params")]
    #[test_case(r#"{"interfaces": {"google.bigtable.admin.v2.BigtableTableAdmin": {"retry_params": {"bad": {
        "initial_retry_delay_millis": 100, "retry_delay_multiplier": 0.5, "max_retry_delay_millis": 60000,
        "initial_rpc_timeout_millis": 20000, "rpc_timeout_multiplier": 1.0, "max_rpc_timeout_millis": 20000,
        "total_timeout_millis": 600000}}}}}"#; "invalid params")]
    fn resolve_errors(input: &str) -> anyhow::Result<()> {
        let config = ClientConfig::from_json(input)?;
        let got = config.service_settings(INTERFACE);
        let err = got.err().expect("resolution should fail");
        let msg = err.to_string();
        assert!(!msg.is_empty(), "{err:?}");
        assert!(
            matches!(
                err,
                Error::MissingInterface(_)
                    | Error::UnknownCode { .. }
                    | Error::MissingRetryCodes { .. }
                    | Error::MissingRetryParams { .. }
                    | Error::InvalidRetryParams { .. }
            ),
            "{err:?}"
        );
        Ok(())
    }

    #[test]
    fn merge() -> anyhow::Result<()> {
        let overrides = ClientConfig::from_json(
            r#"{"interfaces": {"google.bigtable.admin.v2.BigtableTableAdmin": {
                "retry_codes": {"non_idempotent": ["UNAVAILABLE"]},
                "methods": {
                    "CreateTable": {"timeout_millis": 5000},
                    "ListTables": {"page_size": 25}
                }
            }}}"#,
        )?;
        let settings = bundled().merge(overrides).service_settings(INTERFACE)?;

        let create = settings.method("CreateTable").unwrap();
        assert_eq!(create.timeout(), Duration::from_secs(5));
        assert_eq!(create.retry_codes(), &[Code::Unavailable]);
        assert!(create.retry().is_some());

        let list = settings.method("ListTables").unwrap();
        assert_eq!(list.timeout(), Duration::from_secs(60));
        assert_eq!(list.page_size(), Some(25));
        assert_eq!(settings.page_size("ListTables"), Some(25));
        assert_eq!(settings.page_size("CreateTable"), None);
        Ok(())
    }

    #[test]
    fn apply_defaults() -> anyhow::Result<()> {
        let settings = bundled().service_settings(INTERFACE)?;
        let options = settings.apply("ListTables", RequestOptions::default());
        assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(60)));
        assert_eq!(options.idempotent(), Some(true));
        let policy = options.retry_policy().clone().unwrap();
        let state = RetryState::new(true);
        assert!(policy.on_error(&state, status(Code::Unavailable)).is_continue());
        assert!(policy.on_error(&state, status(Code::NotFound)).is_permanent());
        assert!(options.backoff_policy().is_some(), "{options:?}");

        let options = settings.apply("CreateTable", RequestOptions::default());
        assert_eq!(options.idempotent(), Some(false));
        let policy = options.retry_policy().clone().unwrap();
        assert!(policy.on_error(&state, status(Code::Unavailable)).is_permanent());
        let remaining = policy.remaining_time(&state).unwrap();
        assert!(remaining <= Duration::from_secs(600), "{remaining:?}");

        let options = settings.apply("Unknown", RequestOptions::default());
        assert_eq!(options.attempt_timeout(), &Some(DEFAULT_TIMEOUT));
        assert!(options.retry_policy().is_none(), "{options:?}");
        Ok(())
    }

    #[test]
    fn apply_precedence() -> anyhow::Result<()> {
        use crate::retry_policy::AlwaysRetry;
        let settings = bundled()
            .service_settings(INTERFACE)?
            .with_client_policies(Some(Arc::new(AlwaysRetry)), None);

        // The client policy replaces the JSON policy.
        let options = settings.apply("CreateTable", RequestOptions::default());
        let policy = options.retry_policy().clone().unwrap();
        let state = RetryState::new(false);
        assert!(policy.on_error(&state, status(Code::NotFound)).is_continue());

        // The request options replace both.
        let mut options = RequestOptions::default();
        options.set_retry_policy(crate::retry_policy::NeverRetry);
        options.set_attempt_timeout(Duration::from_secs(1));
        options.set_idempotency(true);
        let options = settings.apply("CreateTable", options);
        let policy = options.retry_policy().clone().unwrap();
        assert!(policy.on_error(&state, status(Code::Unavailable)).is_exhausted());
        assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(1)));
        assert_eq!(options.idempotent(), Some(true));
        Ok(())
    }
}
