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


//! Client configuration and per request options.
//!
//! The client library defaults, including the bundled client configuration
//! for each service, are intended to work for most applications. Sometimes
//! applications need to customize the behavior of specific calls, for
//! example, to change the timeout or the retry policy of one RPC. The
//! `*Builder` returned by each client method implements the
//! [RequestOptionsBuilder] trait where applications can override these
//! defaults.
//!
//! # Example
//! ```
//! # use gapic_gax::options::*;
//! # use gapic_gax::retry_policy::*;
//! use std::time::Duration;
//! fn configure<B: RequestOptionsBuilder>(builder: B) -> B {
//!     builder
//!         .with_attempt_timeout(Duration::from_secs(5))
//!         .with_retry_policy(AlwaysRetry.with_attempt_limit(3))
//! }
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use crate::retry_throttler::{RetryThrottlerArg, SharedRetryThrottler};
use std::sync::Arc;
use std::time::Duration;

/// A set of options configuring a single request.
///
/// Applications only use this type directly in mocks, where they may want to
/// verify their application has configured the right options. All other code
/// uses this type indirectly, via the per-request builders.
///
/// Every field is optional. Fields the application does not set are filled in
/// by the client, first from the client builder and then from the bundled
/// client configuration.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    retry_throttler: Option<SharedRetryThrottler>,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl RequestOptions {
    /// Gets the idempotency
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treat the RPC underlying this method as idempotent.
    ///
    /// Retry policies may examine the idempotency to decide if an error is
    /// retryable. The client libraries provide a default, derived from the
    /// retry codes in the client configuration.
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    /// Set the idempotency unless it is already set.
    pub(crate) fn set_default_idempotency(&mut self, default: bool) {
        self.idempotent.get_or_insert(default);
    }

    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop, this affects the timeout for each attempt. The
    /// overall timeout for a request is set by the retry policy.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// Get the current retry policy override, if any.
    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    /// Sets the retry policy configuration.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().into());
    }

    /// Get the current backoff policy override, if any.
    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Sets the backoff policy configuration.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }

    /// Get the current retry throttler override, if any.
    pub fn retry_throttler(&self) -> &Option<SharedRetryThrottler> {
        &self.retry_throttler
    }

    /// Sets the retry throttling configuration.
    pub fn set_retry_throttler<V: Into<RetryThrottlerArg>>(&mut self, v: V) {
        self.retry_throttler = Some(v.into().into());
    }

    /// Get the current polling error policy override, if any.
    pub fn polling_error_policy(&self) -> &Option<Arc<dyn PollingErrorPolicy>> {
        &self.polling_error_policy
    }

    /// Sets the polling error policy configuration.
    pub fn set_polling_error_policy<V: Into<PollingErrorPolicyArg>>(&mut self, v: V) {
        self.polling_error_policy = Some(v.into().into());
    }

    /// Get the current polling backoff policy override, if any.
    pub fn polling_backoff_policy(&self) -> &Option<Arc<dyn PollingBackoffPolicy>> {
        &self.polling_backoff_policy
    }

    /// Sets the polling backoff policy configuration.
    pub fn set_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(&mut self, v: V) {
        self.polling_backoff_policy = Some(v.into().into());
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client libraries provide a builder for each RPC. These builders set the
/// request fields, e.g., the name of the resource targeted by the RPC, as well
/// as any options affecting the request, such as timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// If `v` is `true`, treat the RPC underlying this method as idempotent.
    fn with_idempotency(self, v: bool) -> Self;

    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    /// Sets the retry policy configuration.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Sets the backoff policy configuration.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;

    /// Sets the retry throttler configuration.
    fn with_retry_throttler<V: Into<RetryThrottlerArg>>(self, v: V) -> Self;

    /// Sets the polling error policy configuration.
    fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(self, v: V) -> Self;

    /// Sets the polling backoff policy configuration.
    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! Implementation details used by the generated clients. Applications
    //! should not use any types contained within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.set_default_idempotency(default);
        options
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }

    fn with_retry_throttler<V: Into<RetryThrottlerArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_throttler(v);
        self
    }

    fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_error_policy(v);
        self
    }

    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_backoff_policy(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::polling_error_policy;
    use crate::retry_policy::{Aip194Strict, RetryPolicyExt};
    use crate::retry_throttler::CircuitBreaker;
    use static_assertions::assert_impl_all;

    assert_impl_all!(RequestOptions: Clone, Send, Sync, std::fmt::Debug);

    #[derive(Debug, Default)]
    struct TestBuilder {
        options: RequestOptions,
    }

    impl internal::RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert_eq!(opts.idempotent(), None);
        opts.set_idempotency(true);
        assert_eq!(opts.idempotent(), Some(true));
        opts.set_idempotency(false);
        assert_eq!(opts.idempotent(), Some(false));

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));

        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.attempt_timeout(), &Some(d));

        opts.set_retry_policy(Aip194Strict.with_attempt_limit(3));
        assert!(opts.retry_policy().is_some(), "{opts:?}");
        opts.set_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
        opts.set_retry_throttler(CircuitBreaker::default());
        assert!(opts.retry_throttler().is_some(), "{opts:?}");
        opts.set_polling_error_policy(polling_error_policy::AlwaysContinue);
        assert!(opts.polling_error_policy().is_some(), "{opts:?}");
        opts.set_polling_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        assert!(opts.polling_backoff_policy().is_some(), "{opts:?}");
    }

    #[test]
    fn default_idempotency() {
        let opts = internal::set_default_idempotency(RequestOptions::default(), true);
        assert_eq!(opts.idempotent(), Some(true));

        let mut opts = RequestOptions::default();
        opts.set_idempotency(false);
        let opts = internal::set_default_idempotency(opts, true);
        assert_eq!(opts.idempotent(), Some(false));
    }

    #[test]
    fn request_options_builder() {
        let builder = TestBuilder::default()
            .with_idempotency(true)
            .with_user_agent("test-only")
            .with_attempt_timeout(Duration::from_secs(7))
            .with_retry_policy(Aip194Strict)
            .with_backoff_policy(ExponentialBackoffBuilder::new().clamp())
            .with_retry_throttler(CircuitBreaker::default())
            .with_polling_error_policy(polling_error_policy::Aip194Strict)
            .with_polling_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        let opts = builder.options;
        assert_eq!(opts.idempotent(), Some(true));
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(7)));
        assert!(opts.retry_policy().is_some(), "{opts:?}");
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
        assert!(opts.retry_throttler().is_some(), "{opts:?}");
        assert!(opts.polling_error_policy().is_some(), "{opts:?}");
        assert!(opts.polling_backoff_policy().is_some(), "{opts:?}");
    }
}
