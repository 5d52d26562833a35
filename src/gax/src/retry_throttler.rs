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


//! Defines traits for retry throttling and some common implementations.
//!
//! Retry strategies that do not throttle themselves can slow down recovery
//! when the service is overloaded. The retry attempts can grow to be more than
//! the normal traffic and hinder recovery, these are known as "retry storms".
//! A retry throttler limits the retry attempts, based on the recent history of
//! successes and failures. See [Addressing Cascading Failures] and
//! [Handling Overload] for background.
//!
//! To configure the default throttler for a client, use
//! [ClientBuilder::with_retry_throttler]. To configure the throttler used for
//! a specific request, use [RequestOptionsBuilder::with_retry_throttler].
//! Applications typically create one retry throttler and share it across all
//! the clients for a service.
//!
//! [ClientBuilder::with_retry_throttler]: crate::client_builder::ClientBuilder::with_retry_throttler
//! [RequestOptionsBuilder::with_retry_throttler]: crate::options::RequestOptionsBuilder::with_retry_throttler
//! [Handling Overload]: https://sre.google/sre-book/handling-overload/
//! [Addressing Cascading Failures]: https://sre.google/sre-book/addressing-cascading-failures/
//!
//! # Example
//! ```
//! # use gapic_gax::retry_throttler::*;
//! let adaptive = AdaptiveThrottler::new(2.0)?;
//! let breaker = CircuitBreaker::new(1000, 250, 10)?;
//! # Ok::<(), Error>(())
//! ```

use crate::retry_result::RetryResult;
use std::sync::{Arc, Mutex};

/// The error type for throttler policy creation.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling factor ({0}) must be greater or equal than 0.0")]
    ScalingOutOfRange(f64),
    #[error(
        "the minimum tokens ({min}) must be less than or equal to the initial token ({initial}) count"
    )]
    TooFewMinTokens { min: u64, initial: u64 },
}

/// Implementations of this trait prevent a client from sending too many
/// retries.
///
/// Retry throttlers are shared by all the requests in a client, and may be
/// shared by multiple clients.
pub trait RetryThrottler: Send + Sync + std::fmt::Debug {
    /// Called by the retry loop before issuing a retry attempt. Returns `true`
    /// if the attempt should be throttled.
    ///
    /// Throttled attempts are not sent. The retry policy is consulted via
    /// [on_throttle][crate::retry_policy::RetryPolicy::on_throttle] instead.
    fn throttle_retry_attempt(&self) -> bool;

    /// Called by the retry loop after a retry failure.
    fn on_retry_failure(&mut self, flow: &RetryResult);

    /// Called by the retry loop when a RPC succeeds.
    fn on_success(&mut self);
}

/// Retry throttlers are shared by many requests, possibly in different
/// threads.
pub type SharedRetryThrottler = Arc<Mutex<dyn RetryThrottler>>;

/// A helper type to use [RetryThrottler] in client and request options.
#[derive(Clone)]
pub struct RetryThrottlerArg(pub(crate) SharedRetryThrottler);

impl<T: RetryThrottler + 'static> From<T> for RetryThrottlerArg {
    fn from(value: T) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }
}

impl From<SharedRetryThrottler> for RetryThrottlerArg {
    fn from(value: SharedRetryThrottler) -> Self {
        Self(value)
    }
}

impl From<RetryThrottlerArg> for SharedRetryThrottler {
    fn from(value: RetryThrottlerArg) -> SharedRetryThrottler {
        value.0
    }
}

/// A probabilistic throttler based on observed failure rates.
///
/// Implements the [Adaptive Throttling] strategy from the SRE book. Retry
/// attempts are rejected with probability:
///
/// ```norust
/// max(0, (requests - factor * accepts) / (requests + 1))
/// ```
///
/// Where `requests` is the number of completed requests and `accepts` is the
/// number of requests accepted by the service. Requests that fail with
/// non-transient errors (e.g. `NOT_FOUND`) count as accepted.
///
/// Lower `factor` values reject more retry attempts, the recommended value is
/// `2.0`.
///
/// [Adaptive Throttling]: https://sre.google/sre-book/handling-overload/
#[derive(Clone, Debug)]
pub struct AdaptiveThrottler {
    accept_count: f64,
    request_count: f64,
    factor: f64,
}

impl AdaptiveThrottler {
    /// Creates a new adaptive throttler, `factor` must not be negative.
    pub fn new(factor: f64) -> Result<Self, Error> {
        if factor < 0.0 {
            return Err(Error::ScalingOutOfRange(factor));
        }
        Ok(Self::clamp(factor))
    }

    /// Creates a new adaptive throttler clamping `factor` to a valid range.
    pub fn clamp(factor: f64) -> Self {
        Self {
            accept_count: 0.0,
            request_count: 0.0,
            factor: factor.max(0.0),
        }
    }

    fn reject_probability(&self) -> f64 {
        let p = (self.request_count - self.factor * self.accept_count) / (self.request_count + 1.0);
        p.max(0.0)
    }

    // `sample` is uniformly distributed in [0.0, 1.0].
    fn throttle_with(&self, sample: f64) -> bool {
        let p = self.reject_probability();
        p > 0.0 && sample <= p
    }
}

impl Default for AdaptiveThrottler {
    fn default() -> Self {
        Self::clamp(2.0)
    }
}

impl RetryThrottler for AdaptiveThrottler {
    fn throttle_retry_attempt(&self) -> bool {
        use rand::Rng;
        self.throttle_with(rand::rng().random_range(0.0..=1.0))
    }

    fn on_retry_failure(&mut self, flow: &RetryResult) {
        self.request_count += 1.0;
        if flow.is_permanent() {
            self.accept_count += 1.0;
        }
    }

    fn on_success(&mut self) {
        self.request_count += 1.0;
        self.accept_count += 1.0;
    }
}

/// Rejects all retry attempts while the success rate is too low.
///
/// Implements the [gRPC throttler] algorithm. The throttler tracks a number of
/// tokens. Retry failures decrement the tokens by `error_cost`, completed
/// requests (successfully or with a permanent error) increment them by one.
/// While the tokens are at or below `min_tokens` **all** retry attempts are
/// throttled. The initial request is never throttled.
///
/// [gRPC throttler]: https://github.com/grpc/proposal/blob/master/A6-client-retries.md
#[derive(Clone, Debug)]
pub struct CircuitBreaker {
    max_tokens: u64,
    min_tokens: u64,
    cur_tokens: u64,
    error_cost: u64,
}

impl CircuitBreaker {
    /// Creates a new instance, fails if `min_tokens > tokens`.
    pub fn new(tokens: u64, min_tokens: u64, error_cost: u64) -> Result<Self, Error> {
        if min_tokens > tokens {
            return Err(Error::TooFewMinTokens {
                min: min_tokens,
                initial: tokens,
            });
        }
        Ok(Self::clamp(tokens, min_tokens, error_cost))
    }

    /// Creates a new instance, clamping `min_tokens` to `tokens`.
    pub fn clamp(tokens: u64, min_tokens: u64, error_cost: u64) -> Self {
        Self {
            max_tokens: tokens,
            min_tokens: std::cmp::min(min_tokens, tokens),
            cur_tokens: tokens,
            error_cost,
        }
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        CircuitBreaker::clamp(100, 50, 10)
    }
}

impl RetryThrottler for CircuitBreaker {
    fn throttle_retry_attempt(&self) -> bool {
        self.cur_tokens <= self.min_tokens
    }

    fn on_retry_failure(&mut self, flow: &RetryResult) {
        if flow.is_permanent() {
            self.on_success();
        } else {
            self.cur_tokens = self.cur_tokens.saturating_sub(self.error_cost);
        }
    }

    fn on_success(&mut self) {
        self.cur_tokens = std::cmp::min(self.max_tokens, self.cur_tokens.saturating_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error as GaxError;
    use crate::error::rpc::{Code, Status};

    fn test_error() -> GaxError {
        GaxError::service(Status::default().set_code(Code::Aborted))
    }

    #[test]
    fn retry_throttler_arg() {
        let _ = RetryThrottlerArg::from(AdaptiveThrottler::default());
        let throttler: SharedRetryThrottler = Arc::new(Mutex::new(CircuitBreaker::default()));
        let arg = RetryThrottlerArg::from(throttler);
        let _: SharedRetryThrottler = arg.into();
    }

    #[test]
    fn adaptive_construction() {
        let throttler = AdaptiveThrottler::new(-2.0);
        assert!(
            matches!(throttler, Err(Error::ScalingOutOfRange(_))),
            "{throttler:?}"
        );
        let throttler = AdaptiveThrottler::new(0.0);
        assert!(throttler.is_ok(), "{throttler:?}");
        assert_eq!(AdaptiveThrottler::clamp(-1.0).factor, 0.0);
    }

    #[test]
    fn adaptive_counters() {
        let mut throttler = AdaptiveThrottler::default();
        assert!(!throttler.throttle_retry_attempt(), "{throttler:?}");

        throttler.on_retry_failure(&RetryResult::Continue(test_error()));
        assert_eq!(throttler.request_count, 1.0);
        assert_eq!(throttler.accept_count, 0.0);

        throttler.on_success();
        assert_eq!(throttler.request_count, 2.0);
        assert_eq!(throttler.accept_count, 1.0);

        throttler.on_retry_failure(&RetryResult::Permanent(test_error()));
        assert_eq!(throttler.request_count, 3.0);
        assert_eq!(throttler.accept_count, 2.0);
    }

    #[test]
    fn adaptive_throttle() {
        let mut throttler = AdaptiveThrottler::default();
        throttler.on_retry_failure(&RetryResult::Continue(test_error()));
        // requests = 1, accepts = 0 => p = 0.5
        assert_eq!(throttler.reject_probability(), 0.5);
        assert!(throttler.throttle_with(0.0), "{throttler:?}");
        assert!(throttler.throttle_with(0.5), "{throttler:?}");
        assert!(!throttler.throttle_with(0.75), "{throttler:?}");

        let mut throttler = AdaptiveThrottler::default();
        throttler.on_success();
        assert_eq!(throttler.reject_probability(), 0.0);
        assert!(!throttler.throttle_with(0.0), "{throttler:?}");
    }

    #[test]
    fn circuit_breaker_validation() {
        let throttler = CircuitBreaker::new(100, 200, 1);
        assert!(
            matches!(throttler, Err(Error::TooFewMinTokens { .. })),
            "{throttler:?}"
        );
        let throttler = CircuitBreaker::clamp(100, 200, 1);
        assert_eq!(throttler.min_tokens, 100);
    }

    #[test]
    fn circuit_breaker() {
        let mut throttler = CircuitBreaker::default();
        assert!(!throttler.throttle_retry_attempt(), "{throttler:?}");

        // 100 tokens, each failure costs 10, throttles at 50.
        for _ in 0..4 {
            throttler.on_retry_failure(&RetryResult::Continue(test_error()));
            assert!(!throttler.throttle_retry_attempt(), "{throttler:?}");
        }
        throttler.on_retry_failure(&RetryResult::Exhausted(test_error()));
        assert!(throttler.throttle_retry_attempt(), "{throttler:?}");

        throttler.on_success();
        assert!(!throttler.throttle_retry_attempt(), "{throttler:?}");

        throttler.on_retry_failure(&RetryResult::Continue(test_error()));
        assert!(throttler.throttle_retry_attempt(), "{throttler:?}");
        throttler.on_retry_failure(&RetryResult::Permanent(test_error()));
        assert!(throttler.throttle_retry_attempt(), "{throttler:?}");
        for _ in 0..9 {
            throttler.on_success();
        }
        assert!(!throttler.throttle_retry_attempt(), "{throttler:?}");
        for _ in 0..100 {
            throttler.on_success();
        }
        assert_eq!(throttler.cur_tokens, 100);
    }
}
