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


//! Defines the types for polling error policies.
//!
//! The client libraries automatically poll long-running operations (LROs).
//! The polling loop needs to distinguish transient errors from permanent
//! ones, and needs some mechanism to limit its total duration. Applications
//! may implement [PollingErrorPolicy] to customize this behavior, though the
//! policies in this module should meet most needs.
//!
//! To configure the default polling error policy for a client, use
//! [ClientBuilder::with_polling_error_policy]. To configure the policy used
//! for a specific request, use
//! [RequestOptionsBuilder::with_polling_error_policy].
//!
//! [ClientBuilder::with_polling_error_policy]: crate::client_builder::ClientBuilder::with_polling_error_policy
//! [RequestOptionsBuilder::with_polling_error_policy]: crate::options::RequestOptionsBuilder::with_polling_error_policy
//!
//! # Example
//! ```
//! # use gapic_gax::polling_error_policy::*;
//! use std::time::Duration;
//! // Poll for at most 15 minutes or at most 50 attempts.
//! let policy = Aip194Strict
//!     .with_time_limit(Duration::from_secs(15 * 60))
//!     .with_attempt_limit(50);
//! ```

use crate::Result;
use crate::error::Error;
use crate::error::rpc::Code;
use crate::polling_state::PollingState;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

/// Determines how errors are handled in the polling loop.
pub trait PollingErrorPolicy: Send + Sync + std::fmt::Debug {
    /// Query the polling policy after an error.
    ///
    /// # Parameters
    /// * `state` - the loop start time and the number of polling attempts.
    ///   This method is called after the LRO starts, the attempt count is
    ///   always non-zero.
    /// * `error` - the last error when polling the operation.
    fn on_error(&self, state: &PollingState, error: Error) -> RetryResult;

    /// Called when the LRO is successfully polled, but the LRO is still in
    /// progress.
    ///
    /// Returning an error stops the polling loop.
    fn on_in_progress(&self, _state: &PollingState, _operation_name: &str) -> Result<()> {
        Ok(())
    }
}

/// A helper type to use [PollingErrorPolicy] in client and request options.
#[derive(Clone)]
pub struct PollingErrorPolicyArg(pub(crate) Arc<dyn PollingErrorPolicy>);

impl<T> From<T> for PollingErrorPolicyArg
where
    T: PollingErrorPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn PollingErrorPolicy>> for PollingErrorPolicyArg {
    fn from(value: Arc<dyn PollingErrorPolicy>) -> Self {
        Self(value)
    }
}

impl From<PollingErrorPolicyArg> for Arc<dyn PollingErrorPolicy> {
    fn from(value: PollingErrorPolicyArg) -> Self {
        value.0
    }
}

/// Extension trait for [PollingErrorPolicy]
pub trait PollingErrorPolicyExt: PollingErrorPolicy + Sized {
    /// Decorate a [PollingErrorPolicy] to limit the total elapsed time in the
    /// polling loop.
    ///
    /// # Example
    /// ```
    /// # use gapic_gax::polling_error_policy::*;
    /// # use gapic_gax::polling_state::PollingState;
    /// use std::time::{Duration, Instant};
    /// let policy = Aip194Strict.with_time_limit(Duration::from_secs(10)).with_attempt_limit(3);
    /// let state = PollingState::default().set_attempt_count(4_u32);
    /// assert!(policy.on_error(&state, transient_error()).is_exhausted());
    ///
    /// use gapic_gax::error::{Error, rpc::Code, rpc::Status};
    /// fn transient_error() -> Error { Error::service(Status::default().set_code(Code::Unavailable)) }
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [PollingErrorPolicy] to limit the number of poll attempts.
    ///
    /// `on_error()` is only called after a polling attempt, setting the
    /// maximum number of attempts to 0 or 1 results in no polling after the
    /// LRO starts.
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: PollingErrorPolicy> PollingErrorPolicyExt for T {}

/// A polling policy that strictly follows [AIP-194].
///
/// Polling is always idempotent, so the policy only examines the error to
/// decide if the loop may continue. Broken connections and `UNAVAILABLE`
/// continue, anything else stops the loop.
///
/// This policy must be decorated to limit the number of polling attempts or
/// the duration of the polling loop.
///
/// [AIP-194]: https://google.aip.dev/194
#[derive(Clone, Debug)]
pub struct Aip194Strict;

impl PollingErrorPolicy for Aip194Strict {
    fn on_error(&self, _state: &PollingState, error: Error) -> RetryResult {
        if error.is_transient_and_before_rpc() || error.is_io() {
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

/// A polling policy that continues on any error.
///
/// This policy must be decorated to limit the number of polling attempts or
/// the duration of the polling loop.
#[derive(Clone, Debug)]
pub struct AlwaysContinue;

impl PollingErrorPolicy for AlwaysContinue {
    fn on_error(&self, _state: &PollingState, error: Error) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A polling policy decorator that limits the total time in the polling loop.
///
/// Once the loop exceeds the time limit, [Continue] results from the inner
/// policy become [Exhausted], and in-progress operations stop the loop with an
/// [exhausted][Error::is_exhausted] error.
///
/// [Continue]: RetryResult::Continue
/// [Exhausted]: RetryResult::Exhausted
#[derive(Debug)]
pub struct LimitedElapsedTime<P = Aip194Strict>
where
    P: PollingErrorPolicy,
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
    P: PollingErrorPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn expired(&self, state: &PollingState) -> bool {
        tokio::time::Instant::now().into_std() >= state.start + self.maximum_duration
    }
}

impl<P> PollingErrorPolicy for LimitedElapsedTime<P>
where
    P: PollingErrorPolicy,
{
    fn on_error(&self, state: &PollingState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) if self.expired(state) => {
                RetryResult::Exhausted(Error::exhausted(e))
            }
            r => r,
        }
    }

    fn on_in_progress(&self, state: &PollingState, operation_name: &str) -> Result<()> {
        self.inner.on_in_progress(state, operation_name)?;
        if self.expired(state) {
            return Err(Error::exhausted(format!(
                "polling loop for {operation_name} exceeded its time limit of {:?}",
                self.maximum_duration
            )));
        }
        Ok(())
    }
}

/// A polling policy decorator that limits the number of attempts.
///
/// Once the number of attempts reaches the limit, [Continue] results from the
/// inner policy become [Exhausted], and in-progress operations stop the loop
/// with an [exhausted][Error::is_exhausted] error.
///
/// [Continue]: RetryResult::Continue
/// [Exhausted]: RetryResult::Exhausted
#[derive(Debug)]
pub struct LimitedAttemptCount<P = Aip194Strict>
where
    P: PollingErrorPolicy,
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
    P: PollingErrorPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> PollingErrorPolicy for LimitedAttemptCount<P>
where
    P: PollingErrorPolicy,
{
    fn on_error(&self, state: &PollingState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) if state.attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(Error::exhausted(e))
            }
            r => r,
        }
    }

    fn on_in_progress(&self, state: &PollingState, operation_name: &str) -> Result<()> {
        self.inner.on_in_progress(state, operation_name)?;
        if state.attempt_count >= self.maximum_attempts {
            return Err(Error::exhausted(format!(
                "polling loop for {operation_name} reached its limit of {} attempts",
                self.maximum_attempts
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Status;
    use http::HeaderMap;
    use std::time::Instant;

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl PollingErrorPolicy for Policy {
            fn on_error(&self, state: &PollingState, error: Error) -> RetryResult;
            fn on_in_progress(&self, state: &PollingState, operation_name: &str) -> Result<()>;
        }
    }

    fn from_status(code: Code) -> Error {
        Error::service(Status::default().set_code(code).set_message("test-only"))
    }

    fn long_ago() -> Instant {
        Instant::now()
            .checked_sub(Duration::from_secs(120))
            .unwrap_or_else(Instant::now)
    }

    #[test]
    fn polling_error_policy_arg() {
        let _ = PollingErrorPolicyArg::from(Aip194Strict);
        let policy: Arc<dyn PollingErrorPolicy> = Arc::new(AlwaysContinue);
        let arg = PollingErrorPolicyArg::from(policy);
        let _: Arc<dyn PollingErrorPolicy> = arg.into();
    }

    #[test]
    fn aip194_strict() {
        let p = Aip194Strict;
        let state = PollingState::default();
        assert!(p.on_error(&state, from_status(Code::Unavailable)).is_continue());
        assert!(p.on_error(&state, Error::io("broken pipe")).is_continue());
        assert!(
            p.on_error(&state, Error::http(503, HeaderMap::new(), bytes::Bytes::new()))
                .is_continue()
        );
        assert!(p.on_error(&state, from_status(Code::NotFound)).is_permanent());
        assert!(p.on_error(&state, from_status(Code::DeadlineExceeded)).is_permanent());
        assert!(
            p.on_error(&state, Error::http(404, HeaderMap::new(), bytes::Bytes::new()))
                .is_permanent()
        );
        assert!(p.on_error(&state, Error::deser("bad")).is_permanent());
        assert!(p.on_in_progress(&state, "unused").is_ok());
    }

    #[test]
    fn always_continue() {
        let p = AlwaysContinue;
        let state = PollingState::default();
        assert!(p.on_error(&state, from_status(Code::NotFound)).is_continue());
        assert!(p.on_error(&state, Error::deser("bad")).is_continue());
    }

    #[test]
    fn limited_time_forwards() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Continue(e));
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Permanent(e));
        mock.expect_on_in_progress()
            .times(1)
            .returning(|_, _| Ok(()));

        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let state = PollingState::default();
        let r = policy.on_error(&state, from_status(Code::Unavailable));
        assert!(r.is_continue(), "{r:?}");
        let r = policy.on_error(&state, from_status(Code::Unavailable));
        assert!(r.is_permanent(), "{r:?}");
        let r = policy.on_in_progress(&state, "op");
        assert!(r.is_ok(), "{r:?}");
    }

    #[test]
    fn limited_time_exhausted() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Continue(e));
        mock.expect_on_in_progress()
            .times(1)
            .returning(|_, _| Ok(()));

        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let state = PollingState::default().set_start(long_ago());
        let r = policy.on_error(&state, from_status(Code::Unavailable));
        assert!(r.is_exhausted(), "{r:?}");
        let r = policy.on_in_progress(&state, "op-name");
        assert!(matches!(&r, Err(e) if e.is_exhausted()), "{r:?}");
        let msg = r.unwrap_err().to_string();
        assert!(msg.contains("op-name"), "{msg}");
    }

    #[test]
    fn limited_time_inner_in_progress_error() {
        let mut mock = MockPolicy::new();
        mock.expect_on_in_progress()
            .times(1)
            .returning(|_, _| Err(from_status(Code::Aborted)));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let r = policy.on_in_progress(&PollingState::default(), "op");
        let status = r.as_ref().err().and_then(|e| e.status());
        assert_eq!(status.map(|s| s.code), Some(Code::Aborted), "{r:?}");
    }

    #[test]
    fn limited_attempt_count() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(3)
            .returning(|_, e| RetryResult::Continue(e));
        mock.expect_on_in_progress()
            .times(2)
            .returning(|_, _| Ok(()));

        let policy = LimitedAttemptCount::custom(mock, 3);
        let state = PollingState::default();
        let r = policy.on_error(&state.clone().set_attempt_count(1_u32), from_status(Code::Unavailable));
        assert!(r.is_continue(), "{r:?}");
        let r = policy.on_error(&state.clone().set_attempt_count(2_u32), from_status(Code::Unavailable));
        assert!(r.is_continue(), "{r:?}");
        let r = policy.on_error(&state.clone().set_attempt_count(3_u32), from_status(Code::Unavailable));
        assert!(r.is_exhausted(), "{r:?}");

        let r = policy.on_in_progress(&state.clone().set_attempt_count(2_u32), "op");
        assert!(r.is_ok(), "{r:?}");
        let r = policy.on_in_progress(&state.set_attempt_count(3_u32), "op");
        assert!(matches!(&r, Err(e) if e.is_exhausted()), "{r:?}");
    }

    #[test]
    fn extension_trait() {
        let policy = AlwaysContinue
            .with_time_limit(Duration::from_secs(60))
            .with_attempt_limit(2);
        let state = PollingState::default().set_attempt_count(1_u32);
        assert!(policy.on_error(&state, Error::deser("bad")).is_continue());
        let state = PollingState::default().set_attempt_count(2_u32);
        assert!(policy.on_error(&state, Error::deser("bad")).is_exhausted());
        let state = PollingState::default().set_start(long_ago());
        assert!(policy.on_error(&state, Error::deser("bad")).is_exhausted());
    }
}
