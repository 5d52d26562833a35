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


//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint, the authentication
//! credentials, or the retry settings in the bundled client configuration.
//! The client libraries use a generic builder type to provide such
//! functionality.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use gapic_gax::client_builder::examples;
//! # use gapic_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use gapic_gax::client_builder::examples;
//! # use gapic_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://private.googleapis.com")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use crate::retry_throttler::{RetryThrottlerArg, SharedRetryThrottler};
use std::sync::Arc;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use gapic_gax::client_builder::examples;
/// use gapic_gax::client_builder::Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_default_credentials() => {
///         println!("error during client initialization: {e}");
///         println!("troubleshoot using https://cloud.google.com/docs/authentication/client-libraries");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, the client configuration (bundled or provided by the
    /// application) is invalid.
    pub fn is_config(&self) -> bool {
        matches!(&self.0, ErrorKind::Config(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

impl From<crate::client_config::Error> for Error {
    fn from(value: crate::client_config::Error) -> Self {
        Self(ErrorKind::Config(value))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("invalid client configuration")]
    Config(#[source] crate::client_config::Error),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// Each client library defines one or more client types, all initialized
/// using a `ClientBuilder`. Applications obtain a builder with the correct
/// generic types using the `builder()` method on each client.
///
/// ```
/// # use gapic_gax::client_builder::examples;
/// # use gapic_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_endpoint("http://private.googleapis.com")
///     .with_tracing()
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The default endpoint is `https://{SERVICE_ADDRESS}`, where the service
    /// address is the `DEFAULT_HOST` of each client library.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the tracing
    /// framework. Setting this flag enables this instrumentation. Tracing can
    /// also be enabled with the `GOOGLE_CLOUD_RUST_LOGGING` environment
    /// variable.
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// Most Google Cloud services require authentication. Without this
    /// setting the client uses [Application Default Credentials].
    ///
    /// [Application Default Credentials]: https://cloud.google.com/docs/authentication/application-default-credentials
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Configure the retry policy.
    ///
    /// This replaces, for all the RPCs in the client, the retry policy
    /// derived from the client configuration. Per-request options still take
    /// precedence.
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Configure the retry backoff policy.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }

    /// Configure the retry throttler.
    ///
    /// The default throttler is an [AdaptiveThrottler] shared by all the
    /// requests in a client.
    ///
    /// [AdaptiveThrottler]: crate::retry_throttler::AdaptiveThrottler
    pub fn with_retry_throttler<V: Into<RetryThrottlerArg>>(mut self, v: V) -> Self {
        self.config.retry_throttler = v.into().into();
        self
    }

    /// Configure the polling error policy for long-running operations.
    pub fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_error_policy = Some(v.into().into());
        self
    }

    /// Configure the polling backoff policy for long-running operations.
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_backoff_policy = Some(v.into().into());
        self
    }

    /// Overrides the bundled client configuration.
    ///
    /// The override uses the same JSON format as the bundled configuration.
    /// Its settings are merged on top of the bundled defaults, any retry
    /// codes, retry parameters, or methods it does not mention keep their
    /// default values. Errors in the override are reported by `build()`.
    ///
    /// # Example
    /// ```
    /// # use gapic_gax::client_builder::examples;
    /// # use gapic_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_client_config(r#"{"interfaces": {"google.example.v1.Example": {
    ///         "methods": {"GetThing": {"timeout_millis": 5000}}}}}"#)
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_client_config<V: Into<String>>(mut self, v: V) -> Self {
        self.config.client_config = Some(v.into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: internal::ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> super::ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// The configuration collected by [ClientBuilder][super::ClientBuilder].
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
        pub retry_throttler: SharedRetryThrottler,
        pub polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
        pub polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
        /// A JSON client configuration merged over the bundled defaults.
        pub client_config: Option<String>,
    }

    impl<Cr> Default for ClientConfig<Cr> {
        fn default() -> Self {
            use crate::retry_throttler::AdaptiveThrottler;
            use std::sync::Mutex;
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
                retry_policy: None,
                backoff_policy: None,
                retry_throttler: Arc::new(Mutex::new(AdaptiveThrottler::default())),
                polling_error_policy: None,
                polling_backoff_policy: None,
                client_config: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! Helper types used in the rustdoc examples.

    type Config = super::internal::ClientConfig<Credentials>;
    use super::Result;

    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            if let Some(json) = &config.client_config {
                crate::client_config::ClientConfig::from_json(json)?;
            }
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Credentials>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Client = super::Client;
            async fn build(self, config: super::Config) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub scopes: Vec<String>,
    }

    impl Credentials {
        pub fn with_scopes<I, V>(scopes: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<String>,
        {
            Self {
                scopes: scopes.into_iter().map(|v| v.into()).collect(),
            }
        }
    }

    // The examples double as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn build_default() -> anyhow::Result<()> {
            let client = Client::builder().build().await?;
            let config = client.0;
            assert_eq!(config.endpoint, None);
            assert_eq!(config.cred, None);
            assert!(!config.tracing);
            assert!(
                format!("{:?}", &config).contains("AdaptiveThrottler"),
                "{config:?}"
            );
            assert!(config.retry_policy.is_none(), "{config:?}");
            assert!(config.backoff_policy.is_none(), "{config:?}");
            assert!(config.polling_error_policy.is_none(), "{config:?}");
            assert!(config.polling_backoff_policy.is_none(), "{config:?}");
            assert!(config.client_config.is_none(), "{config:?}");
            Ok(())
        }

        #[tokio::test]
        async fn endpoint_tracing_credentials() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_endpoint("http://example.com")
                .with_tracing()
                .with_credentials(Credentials::with_scopes(["test-scope"]))
                .build()
                .await?;
            let config = client.0;
            assert_eq!(config.endpoint.as_deref(), Some("http://example.com"));
            assert!(config.tracing);
            assert_eq!(
                config.cred.map(|c| c.scopes),
                Some(vec!["test-scope".to_string()])
            );
            Ok(())
        }

        #[tokio::test]
        async fn policies() -> anyhow::Result<()> {
            use crate::exponential_backoff::ExponentialBackoff;
            use crate::polling_error_policy::{AlwaysContinue, PollingErrorPolicyExt};
            use crate::retry_policy::{AlwaysRetry, RetryPolicyExt};
            use crate::retry_throttler::CircuitBreaker;
            let client = Client::builder()
                .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
                .with_backoff_policy(ExponentialBackoff::default())
                .with_retry_throttler(CircuitBreaker::default())
                .with_polling_error_policy(AlwaysContinue.with_attempt_limit(3))
                .with_polling_backoff_policy(ExponentialBackoff::default())
                .build()
                .await?;
            let config = client.0;
            assert!(config.retry_policy.is_some(), "{config:?}");
            assert!(config.backoff_policy.is_some(), "{config:?}");
            assert!(
                format!("{:?}", &config).contains("CircuitBreaker"),
                "{config:?}"
            );
            assert!(config.polling_error_policy.is_some(), "{config:?}");
            assert!(config.polling_backoff_policy.is_some(), "{config:?}");
            Ok(())
        }

        #[tokio::test]
        async fn client_config() {
            let client = Client::builder()
                .with_client_config(r#"{"interfaces": {}}"#)
                .build()
                .await;
            assert!(client.is_ok());

            let client = Client::builder()
                .with_client_config("not json")
                .build()
                .await;
            assert!(matches!(&client, Err(e) if e.is_config()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn error_credentials() {
        let source = wkt::TimestampError::OutOfRange;
        let error = Error::cred(source);
        assert!(error.is_default_credentials(), "{error:?}");
        assert!(error.to_string().contains("default credentials"), "{error}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<wkt::TimestampError>());
        assert!(
            matches!(got, Some(wkt::TimestampError::OutOfRange)),
            "{error:?}"
        );
    }

    #[test]
    fn error_transport() {
        let error = Error::transport("cannot create TLS context");
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_config(), "{error:?}");
        assert!(error.to_string().contains("transport client"), "{error}");
    }

    #[test]
    fn error_config() {
        let source = crate::client_config::ClientConfig::from_json("{").unwrap_err();
        let error = Error::from(source);
        assert!(error.is_config(), "{error:?}");
        assert!(error.to_string().contains("client configuration"), "{error}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<crate::client_config::Error>());
        assert!(got.is_some(), "{error:?}");
    }
}
