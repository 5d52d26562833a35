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


//! Truncated exponential backoff.
//!
//! This module provides an implementation of truncated [exponential backoff].
//! It implements the [BackoffPolicy] and [PollingBackoffPolicy] traits.
//!
//! The retry settings in the bundled client configurations map directly into
//! this type: `initial_retry_delay_millis` is the initial delay,
//! `retry_delay_multiplier` is the scaling factor and `max_retry_delay_millis`
//! is the maximum delay.
//!
//! [exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff
//! [BackoffPolicy]: crate::backoff_policy::BackoffPolicy
//! [PollingBackoffPolicy]: crate::polling_backoff_policy::PollingBackoffPolicy

use crate::polling_state::PollingState;
use crate::retry_state::RetryState;
use std::time::Duration;

/// The error type for exponential backoff creation.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the scaling value ({0}) should be >= 1.0")]
    InvalidScalingFactor(f64),
    #[error("the initial delay ({0:?}) should be greater than zero")]
    InvalidInitialDelay(Duration),
    #[error(
        "the maximum delay ({maximum:?}) should be greater than or equal to the initial delay ({initial:?})"
    )]
    EmptyRange {
        maximum: Duration,
        initial: Duration,
    },
}

/// Builds [ExponentialBackoff] policies.
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoffBuilder {
    /// Creates a builder with the default parameters.
    ///
    /// # Example
    /// ```
    /// # use gapic_gax::exponential_backoff::Error;
    /// # use gapic_gax::exponential_backoff::ExponentialBackoffBuilder;
    /// use std::time::Duration;
    ///
    /// let policy = ExponentialBackoffBuilder::new()
    ///         .with_initial_delay(Duration::from_millis(100))
    ///         .with_maximum_delay(Duration::from_secs(5))
    ///         .with_scaling(4.0)
    ///         .build()?;
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            maximum_delay: Duration::from_secs(60),
            scaling: 2.0,
        }
    }

    /// Change the initial delay.
    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    /// Change the maximum delay.
    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    /// Change the scaling factor in this backoff policy.
    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Creates a new exponential backoff policy.
    ///
    /// Fails if the scaling factor is below 1.0, the initial delay is zero,
    /// or the maximum delay is smaller than the initial delay.
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.scaling < 1.0 {
            return Err(Error::InvalidScalingFactor(self.scaling));
        }
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(ExponentialBackoff {
            maximum_delay: self.maximum_delay,
            scaling: self.scaling,
            initial_delay: self.initial_delay,
        })
    }

    /// Creates a new exponential backoff policy clamping the ranges towards
    /// recommended values.
    ///
    /// The maximum delay is clamped first, to be between one second and one day
    /// (both inclusive). Then the initial delay is clamped to be between one
    /// millisecond and the maximum delay. Finally, the scaling factor is
    /// clamped to the `[1.0, 32.0]` range.
    ///
    /// # Example
    /// ```
    /// # use gapic_gax::exponential_backoff::ExponentialBackoffBuilder;
    /// # use gapic_gax::backoff_policy::BackoffPolicy;
    /// # use gapic_gax::retry_state::RetryState;
    /// use std::time::Duration;
    /// let backoff = ExponentialBackoffBuilder::new().clamp();
    /// let state = RetryState::new(true).set_attempt_count(1_u32);
    /// assert!(backoff.on_failure(&state) <= Duration::from_secs(1));
    /// ```
    pub fn clamp(self) -> ExponentialBackoff {
        let scaling = self.scaling.clamp(1.0, 32.0);
        let maximum_delay = self
            .maximum_delay
            .clamp(Duration::from_secs(1), Duration::from_secs(24 * 60 * 60));
        let initial_delay = self
            .initial_delay
            .clamp(Duration::from_millis(1), maximum_delay);
        ExponentialBackoff {
            initial_delay,
            maximum_delay,
            scaling,
        }
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Implements truncated exponential backoff with full jitter.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
}

impl ExponentialBackoff {
    fn delay(&self, attempt_count: u32) -> Duration {
        let exp = std::cmp::min(i32::MAX as u32, attempt_count) as i32;
        let exp = exp.saturating_sub(1);
        let scaling = self.scaling.powi(exp);
        if scaling >= self.maximum_delay.div_duration_f64(self.initial_delay) {
            self.maximum_delay
        } else {
            // scaling >= 1.0 and initial_delay * scaling < maximum_delay, so
            // mul_f64() cannot overflow.
            self.initial_delay.mul_f64(scaling)
        }
    }

    fn delay_with_jitter(&self, attempt_count: u32, rng: &mut impl rand::Rng) -> Duration {
        let delay = self.delay(attempt_count);
        rng.random_range(Duration::ZERO..=delay)
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(1),
            maximum_delay: Duration::from_secs(60),
            scaling: 2.0,
        }
    }
}

impl crate::polling_backoff_policy::PollingBackoffPolicy for ExponentialBackoff {
    fn wait_period(&self, state: &PollingState) -> Duration {
        self.delay(state.attempt_count)
    }
}

impl crate::backoff_policy::BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, state: &RetryState) -> Duration {
        self.delay_with_jitter(state.attempt_count, &mut rand::rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn build_errors() {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::ZERO)
            .with_maximum_delay(Duration::from_secs(5))
            .build();
        assert!(matches!(b, Err(Error::InvalidInitialDelay(_))), "{b:?}");

        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(10))
            .with_maximum_delay(Duration::from_secs(5))
            .build();
        assert!(matches!(b, Err(Error::EmptyRange { .. })), "{b:?}");

        let b = ExponentialBackoffBuilder::new().with_scaling(0.5).build();
        assert!(matches!(b, Err(Error::InvalidScalingFactor(_))), "{b:?}");
    }

    #[test]
    fn build_limits() {
        let r = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_nanos(1))
            .with_maximum_delay(Duration::MAX)
            .with_scaling(1.0)
            .build();
        assert!(r.is_ok(), "{r:?}");

        let r = ExponentialBackoffBuilder::default().build();
        assert!(r.is_ok(), "{r:?}");
    }

    #[test_case(Duration::from_secs(1), Duration::MAX, 0.5; "scaling below range")]
    #[test_case(Duration::from_secs(1), Duration::MAX, 1_000_000.0; "scaling over range")]
    #[test_case(Duration::from_secs(1), Duration::ZERO, 8.0; "max below range")]
    #[test_case(Duration::from_secs(10), Duration::ZERO, 8.0; "init over range")]
    #[test_case(Duration::ZERO, Duration::ZERO, 8.0; "init below range")]
    fn clamp(init: Duration, max: Duration, scaling: f64) {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(init)
            .with_maximum_delay(max)
            .with_scaling(scaling)
            .clamp();
        assert_eq!(b.scaling.clamp(1.0, 32.0), b.scaling);
        assert_eq!(
            b.initial_delay.clamp(Duration::from_millis(1), b.maximum_delay),
            b.initial_delay
        );
        assert_eq!(
            b.maximum_delay
                .clamp(b.initial_delay, Duration::from_secs(24 * 60 * 60)),
            b.maximum_delay
        );
    }

    #[test]
    fn scaling() -> anyhow::Result<()> {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(1))
            .with_maximum_delay(Duration::from_secs(4))
            .with_scaling(2.0)
            .build()?;
        assert_eq!(b.delay(1), Duration::from_secs(1));
        assert_eq!(b.delay(2), Duration::from_secs(2));
        assert_eq!(b.delay(3), Duration::from_secs(4));
        assert_eq!(b.delay(4), Duration::from_secs(4));
        assert_eq!(b.delay(u32::MAX), Duration::from_secs(4));
        Ok(())
    }

    #[test]
    fn gapic_retry_params() -> anyhow::Result<()> {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(100))
            .with_maximum_delay(Duration::from_secs(60))
            .with_scaling(1.3)
            .build()?;
        let near = |got: Duration, want: Duration| {
            got.abs_diff(want) < Duration::from_micros(1)
        };
        assert!(near(b.delay(1), Duration::from_millis(100)), "{:?}", b.delay(1));
        assert!(near(b.delay(2), Duration::from_millis(130)), "{:?}", b.delay(2));
        assert_eq!(b.delay(100), Duration::from_secs(60));
        Ok(())
    }

    #[test]
    fn wait_period() -> anyhow::Result<()> {
        use crate::polling_backoff_policy::PollingBackoffPolicy;
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(1))
            .with_maximum_delay(Duration::from_secs(4))
            .with_scaling(2.0)
            .build()?;
        let state = PollingState::default();
        assert_eq!(b.wait_period(&state.clone().set_attempt_count(1_u32)), Duration::from_secs(1));
        assert_eq!(b.wait_period(&state.clone().set_attempt_count(2_u32)), Duration::from_secs(2));
        assert_eq!(b.wait_period(&state.clone().set_attempt_count(3_u32)), Duration::from_secs(4));
        assert_eq!(b.wait_period(&state.set_attempt_count(4_u32)), Duration::from_secs(4));
        Ok(())
    }

    #[test]
    fn on_failure() -> anyhow::Result<()> {
        use crate::backoff_policy::BackoffPolicy;
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_secs(1))
            .with_maximum_delay(Duration::from_secs(4))
            .with_scaling(2.0)
            .build()?;
        for (attempt, max) in [(1_u32, 1_u64), (2, 2), (3, 4), (4, 4), (5, 4)] {
            let state = RetryState::new(true).set_attempt_count(attempt);
            let d = b.on_failure(&state);
            assert!(d <= Duration::from_secs(max), "{attempt} {d:?}");
        }
        Ok(())
    }

    #[test]
    fn jitter_in_range() {
        let b = ExponentialBackoff::default();
        let mut rng = rand::rng();
        for attempt in 1..10 {
            let d = b.delay_with_jitter(attempt, &mut rng);
            assert!(d <= b.delay(attempt), "{attempt} {d:?}");
        }
    }
}
