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


//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries automatically retry RPCs when they fail due to
//! transient errors and the RPC is idempotent, that is, it is safe to perform
//! the RPC more than once.
//!
//! Each RPC has a default retry policy, derived from the `retry_codes` and
//! `retry_params` in the bundled client configuration. Applications may
//! override the default behavior, and maybe retry operations that, while not
//! safe in general, may be safe given how the application manages resources.
//!
//! # Example
//! ```
//! # use gapic_gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = Aip194Strict
//!     .with_time_limit(Duration::from_secs(60))
//!     .with_attempt_limit(5);
//! ```

use crate::error::Error;
use crate::error::rpc::Code;
use crate::retry_result::RetryResult;
use crate::retry_state::RetryState;
use crate::throttle_result::ThrottleResult;
use std::sync::Arc;
use std::time::Duration;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `state` - the idempotency of the request, the loop start time and
    ///   the number of attempts so far.
    /// * `error` - the last error when attempting the request.
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;

    /// Query the retry policy after a retry attempt is throttled.
    ///
    /// Retry attempts may be throttled before they are even sent out. The
    /// retry policy may choose to treat these as normal errors, or may prefer
    /// to ignore them. The default implementation continues the loop.
    fn on_throttle(&self, _state: &RetryState, error: Error) -> ThrottleResult {
        ThrottleResult::Continue(error)
    }

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop uses this value to adjust the next attempt
    /// timeout. For policies that are not time based this returns `None`.
    fn remaining_time(&self, _state: &RetryState) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(Arc<dyn RetryPolicy>);

impl<T> From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [RetryPolicy]
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// While the time spent in the retry loop (including time in backoff) is
    /// less than the prescribed duration the `on_error()` method returns the
    /// results of the inner policy. After that time it returns
    /// [Exhausted][RetryResult::Exhausted] if the inner policy returns
    /// [Continue][RetryResult::Continue].
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of retry attempts.
    ///
    /// The policy returns [Exhausted][RetryResult::Exhausted] once the number
    /// of attempts reaches `maximum_attempts`.
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// A retry policy that strictly follows [AIP-194].
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop.
///
/// The policy interprets AIP-194 **strictly**, the retry decision for
/// server-side errors is based only on the status code, and the only retryable
/// status code is `UNAVAILABLE`.
///
/// [AIP-194]: https://google.aip.dev/194
#[derive(Clone, Debug)]
pub struct Aip194Strict;

impl RetryPolicy for Aip194Strict {
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        if error.is_transient_and_before_rpc() {
            return RetryResult::Continue(error);
        }
        if !state.idempotent {
            return RetryResult::Permanent(error);
        }
        if error.is_io() {
            return RetryResult::Continue(error);
        }
        if let Some(status) = error.status() {
            return if status.code == Code::Unavailable {
                RetryResult::Continue(error)
            } else {
                RetryResult::Permanent(error)
            };
        }
        match error.http_status_code() {
            Some(code) if code == http::StatusCode::SERVICE_UNAVAILABLE.as_u16() => {
                RetryResult::Continue(error)
            }
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that retries the status codes named in a client
/// configuration.
///
/// The bundled client configurations list, for each RPC, the status codes
/// that are safe to retry. For example, most `Get*` and `List*` RPCs retry
/// `DEADLINE_EXCEEDED` and `UNAVAILABLE`, while RPCs that create resources
/// retry nothing.
///
/// The decision is based only on the codes: the request idempotency is not
/// consulted, as the configuration already encodes it. Errors without a
/// service status are mapped to codes:
/// - a broken connection is treated as `UNAVAILABLE`,
/// - an attempt timeout is treated as `DEADLINE_EXCEEDED`,
/// - HTTP 503 and 504 responses without a status payload are treated as
///   `UNAVAILABLE` and `DEADLINE_EXCEEDED` respectively.
///
/// This policy must be decorated to limit the duration of the retry loop.
///
/// # Example
/// ```
/// # use gapic_gax::retry_policy::*;
/// # use gapic_gax::error::rpc::Code;
/// use std::time::Duration;
/// let policy = RetryCodes::new([Code::DeadlineExceeded, Code::Unavailable])
///     .with_time_limit(Duration::from_secs(600));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RetryCodes {
    codes: Vec<Code>,
}

impl RetryCodes {
    /// Creates a policy retrying the given codes.
    pub fn new<I: IntoIterator<Item = Code>>(codes: I) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    /// The codes retried by this policy.
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    fn effective_code(error: &Error) -> Option<Code> {
        if let Some(status) = error.status() {
            return Some(status.code);
        }
        if error.is_io() {
            return Some(Code::Unavailable);
        }
        if error.is_timeout() {
            return Some(Code::DeadlineExceeded);
        }
        match error.http_status_code() {
            Some(503) => Some(Code::Unavailable),
            Some(504) => Some(Code::DeadlineExceeded),
            _ => None,
        }
    }
}

impl RetryPolicy for RetryCodes {
    fn on_error(&self, _state: &RetryState, error: Error) -> RetryResult {
        if error.is_transient_and_before_rpc() {
            return RetryResult::Continue(error);
        }
        match Self::effective_code(&error) {
            Some(code) if self.codes.contains(&code) => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that retries all errors.
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop. It is mostly useful in tests.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(&self, _state: &RetryState, error: Error) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy that never retries.
///
/// This policy is useful when the caller has a retry loop at a higher level.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(&self, _state: &RetryState, error: Error) -> RetryResult {
        RetryResult::Exhausted(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// This policy decorates an inner policy and limits the duration of retry
/// loops. Once the loop exceeds its duration limit, [Continue] results from
/// the inner policy become [Exhausted].
///
/// [Continue]: RetryResult::Continue
/// [Exhausted]: RetryResult::Exhausted
#[derive(Debug)]
pub struct LimitedElapsedTime<P = Aip194Strict>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: Aip194Strict,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn error_if_exhausted(&self, state: &RetryState, error: Error) -> ThrottleResult {
        let deadline = state.start + self.maximum_duration;
        let now = tokio::time::Instant::now().into_std();
        if now < deadline {
            ThrottleResult::Continue(error)
        } else {
            ThrottleResult::Exhausted(Error::exhausted(error))
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Permanent(e) => RetryResult::Permanent(e),
            RetryResult::Exhausted(e) => RetryResult::Exhausted(e),
            RetryResult::Continue(e) => {
                let deadline = state.start + self.maximum_duration;
                if tokio::time::Instant::now().into_std() >= deadline {
                    RetryResult::Exhausted(Error::exhausted(e))
                } else {
                    RetryResult::Continue(e)
                }
            }
        }
    }

    fn on_throttle(&self, state: &RetryState, error: Error) -> ThrottleResult {
        match self.inner.on_throttle(state, error) {
            ThrottleResult::Continue(e) => self.error_if_exhausted(state, e),
            ThrottleResult::Exhausted(e) => ThrottleResult::Exhausted(e),
        }
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        let deadline = state.start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now().into_std());
        if let Some(inner) = self.inner.remaining_time(state) {
            return Some(std::cmp::min(remaining, inner));
        }
        Some(remaining)
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// Once the number of attempts reaches the limit, [Continue] results from the
/// inner policy become [Exhausted].
///
/// [Continue]: RetryResult::Continue
/// [Exhausted]: RetryResult::Exhausted
#[derive(Debug)]
pub struct LimitedAttemptCount<P = Aip194Strict>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: Aip194Strict,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) if state.attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(Error::exhausted(e))
            }
            r => r,
        }
    }

    fn on_throttle(&self, state: &RetryState, error: Error) -> ThrottleResult {
        // The retry loop only calls `on_throttle()` if the policy has not
        // been exhausted.
        assert!(state.attempt_count < self.maximum_attempts);
        self.inner.on_throttle(state, error)
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        self.inner.remaining_time(state)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::CredentialsError;
    use crate::error::rpc::Status;
    use http::HeaderMap;
    use test_case::test_case;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) Policy {}
        impl RetryPolicy for Policy {
            fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;
            fn on_throttle(&self, state: &RetryState, error: Error) -> ThrottleResult;
            fn remaining_time(&self, state: &RetryState) -> Option<Duration>;
        }
    }

    fn from_status(code: Code) -> Error {
        Error::service(Status::default().set_code(code).set_message("test-only"))
    }

    fn http_error(code: u16) -> Error {
        Error::http(code, HeaderMap::new(), bytes::Bytes::from_static(b"test-only"))
    }

    fn idempotent() -> RetryState {
        RetryState::new(true)
    }

    fn non_idempotent() -> RetryState {
        RetryState::new(false)
    }

    #[test]
    fn retry_policy_arg() {
        let _ = RetryPolicyArg::from(Aip194Strict);
        let policy: Arc<dyn RetryPolicy> = Arc::new(AlwaysRetry);
        let arg = RetryPolicyArg::from(policy);
        let _: Arc<dyn RetryPolicy> = arg.into();
    }

    #[test]
    fn aip194_strict() {
        let p = Aip194Strict;
        assert!(p.on_error(&idempotent(), from_status(Code::Unavailable)).is_continue());
        assert!(p.on_error(&non_idempotent(), from_status(Code::Unavailable)).is_permanent());
        assert!(p.on_error(&idempotent(), from_status(Code::PermissionDenied)).is_permanent());
        assert!(p.on_error(&idempotent(), Error::io("reset")).is_continue());
        assert!(p.on_error(&non_idempotent(), Error::io("reset")).is_permanent());
        assert!(p.on_error(&idempotent(), http_error(503)).is_continue());
        assert!(p.on_error(&idempotent(), http_error(404)).is_permanent());
        assert!(p.on_error(&idempotent(), Error::deser("bad")).is_permanent());
        assert!(p.on_error(&idempotent(), Error::timeout("slow")).is_permanent());

        let transient = Error::authentication(CredentialsError::from_msg(true, "try-again"));
        assert!(p.on_error(&non_idempotent(), transient).is_continue());
        let permanent = Error::authentication(CredentialsError::from_msg(false, "bad key"));
        assert!(p.on_error(&idempotent(), permanent).is_permanent());

        assert!(p.remaining_time(&idempotent()).is_none());
    }

    #[test_case(from_status(Code::Unavailable), true)]
    #[test_case(from_status(Code::DeadlineExceeded), true)]
    #[test_case(from_status(Code::Aborted), false)]
    #[test_case(from_status(Code::NotFound), false)]
    #[test_case(Error::io("reset"), true)]
    #[test_case(Error::timeout("slow"), true)]
    #[test_case(http_error(503), true)]
    #[test_case(http_error(504), true)]
    #[test_case(http_error(502), false)]
    #[test_case(Error::deser("bad"), false)]
    fn retry_codes(error: Error, want_continue: bool) {
        let p = RetryCodes::new([Code::DeadlineExceeded, Code::Unavailable]);
        // The idempotency flag is not consulted.
        let got = p.on_error(&non_idempotent(), error);
        assert_eq!(got.is_continue(), want_continue, "{got:?}");
        assert_eq!(got.is_permanent(), !want_continue, "{got:?}");
    }

    #[test]
    fn retry_codes_empty() {
        let p = RetryCodes::default();
        assert!(p.codes().is_empty());
        assert!(p.on_error(&idempotent(), from_status(Code::Unavailable)).is_permanent());
        assert!(p.on_error(&idempotent(), Error::io("reset")).is_permanent());

        let transient = Error::authentication(CredentialsError::from_msg(true, "try-again"));
        assert!(p.on_error(&idempotent(), transient).is_continue());
    }

    #[test]
    fn always_and_never() {
        let error = from_status(Code::PermissionDenied);
        assert!(AlwaysRetry.on_error(&non_idempotent(), error).is_continue());
        let error = from_status(Code::Unavailable);
        assert!(NeverRetry.on_error(&idempotent(), error).is_exhausted());
        let t = NeverRetry.on_throttle(&idempotent(), from_status(Code::Unavailable));
        assert!(matches!(t, ThrottleResult::Continue(_)), "{t:?}");
    }

    #[test]
    fn limited_time_forwards() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1..)
            .returning(|_, e| RetryResult::Continue(e));
        mock.expect_on_throttle()
            .times(1..)
            .returning(|_, e| ThrottleResult::Continue(e));
        mock.expect_remaining_time().times(1).returning(|_| None);

        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let state = idempotent();
        let rf = policy.on_error(&state, from_status(Code::Unavailable));
        assert!(rf.is_continue(), "{rf:?}");
        let rt = policy.on_throttle(&state, from_status(Code::Unavailable));
        assert!(matches!(rt, ThrottleResult::Continue(_)), "{rt:?}");
        let remaining = policy.remaining_time(&state);
        assert!(
            matches!(remaining, Some(d) if d <= Duration::from_secs(60)),
            "{remaining:?}"
        );
    }

    #[test]
    fn limited_time_exhausted() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Continue(e));
        mock.expect_on_throttle()
            .times(1)
            .returning(|_, e| ThrottleResult::Continue(e));

        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let start = std::time::Instant::now()
            .checked_sub(Duration::from_secs(120))
            .unwrap_or_else(std::time::Instant::now);
        let state = idempotent().set_start(start);
        let rf = policy.on_error(&state, from_status(Code::Unavailable));
        assert!(rf.is_exhausted(), "{rf:?}");
        let rt = policy.on_throttle(&state, from_status(Code::Unavailable));
        assert!(matches!(rt, ThrottleResult::Exhausted(_)), "{rt:?}");
    }

    #[test]
    fn limited_time_inner_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Permanent(e));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let rf = policy.on_error(&idempotent(), from_status(Code::NotFound));
        assert!(rf.is_permanent(), "{rf:?}");
    }

    #[test]
    fn limited_time_remaining_inner_shorter() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_| Some(Duration::from_secs(5)));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        assert_eq!(
            policy.remaining_time(&idempotent()),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn limited_attempt_count() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(3)
            .returning(|_, e| RetryResult::Continue(e));
        mock.expect_remaining_time().times(1).returning(|_| None);
        let policy = LimitedAttemptCount::custom(mock, 3);

        let rf = policy.on_error(
            &idempotent().set_attempt_count(1_u32),
            from_status(Code::Unavailable),
        );
        assert!(rf.is_continue(), "{rf:?}");
        let rf = policy.on_error(
            &idempotent().set_attempt_count(2_u32),
            from_status(Code::Unavailable),
        );
        assert!(rf.is_continue(), "{rf:?}");
        let rf = policy.on_error(
            &idempotent().set_attempt_count(3_u32),
            from_status(Code::Unavailable),
        );
        assert!(rf.is_exhausted(), "{rf:?}");
        assert!(policy.remaining_time(&idempotent()).is_none());
    }

    #[test]
    fn limited_attempt_count_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Permanent(e));
        let policy = LimitedAttemptCount::custom(mock, 3);
        let rf = policy.on_error(
            &idempotent().set_attempt_count(5_u32),
            from_status(Code::NotFound),
        );
        assert!(rf.is_permanent(), "{rf:?}");
    }

    #[test]
    fn extension_trait() {
        let policy = RetryCodes::new([Code::Unavailable])
            .with_attempt_limit(2)
            .with_time_limit(Duration::from_secs(10));
        let rf = policy.on_error(
            &idempotent().set_attempt_count(1_u32),
            from_status(Code::Unavailable),
        );
        assert!(rf.is_continue(), "{rf:?}");
        let rf = policy.on_error(
            &idempotent().set_attempt_count(2_u32),
            from_status(Code::Unavailable),
        );
        assert!(rf.is_exhausted(), "{rf:?}");
    }
}
