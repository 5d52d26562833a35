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


//! Defines traits for backoff policies and a common implementation.
//!
//! The client libraries automatically retry RPCs when they fail due to
//! transient errors **and** the RPC is [idempotent], or when they fail before
//! the RPC was started. Retry strategies should avoid immediately retrying an
//! RPC, as the service may need time to recover. [Exponential backoff] is a
//! well known algorithm to find an acceptable delay between retries.
//!
//! The bundled client configurations use exponential backoff, with the
//! parameters in the `retry_params` section of each configuration file.
//!
//! # Example
//! ```
//! # use gapic_gax::*;
//! # use gapic_gax::backoff_policy::*;
//! use exponential_backoff::ExponentialBackoffBuilder;
//! use std::time::Duration;
//!
//! let policy = ExponentialBackoffBuilder::new()
//!     .with_initial_delay(Duration::from_millis(100))
//!     .with_maximum_delay(Duration::from_secs(60))
//!     .with_scaling(1.3)
//!     .build()?;
//! # Ok::<(), exponential_backoff::Error>(())
//! ```
//!
//! [Exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff
//! [idempotent]: https://en.wikipedia.org/wiki/Idempotence

use crate::retry_state::RetryState;
use std::sync::Arc;

/// Defines the trait implemented by all backoff strategies.
pub trait BackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the backoff delay on a failure.
    ///
    /// This method is always called after the first attempt, so
    /// `state.attempt_count` is always at least 1.
    fn on_failure(&self, state: &RetryState) -> std::time::Duration;
}

/// A helper type to use [BackoffPolicy] in client and request options.
#[derive(Clone)]
pub struct BackoffPolicyArg(pub(crate) Arc<dyn BackoffPolicy>);

impl<T: BackoffPolicy + 'static> From<T> for BackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn BackoffPolicy>> for BackoffPolicyArg {
    fn from(value: Arc<dyn BackoffPolicy>) -> Self {
        Self(value)
    }
}

impl From<BackoffPolicyArg> for Arc<dyn BackoffPolicy> {
    fn from(value: BackoffPolicyArg) -> Arc<dyn BackoffPolicy> {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;

    #[test]
    fn backoff_policy_arg() {
        let policy = ExponentialBackoffBuilder::default().clamp();
        let _ = BackoffPolicyArg::from(policy);

        let policy: Arc<dyn BackoffPolicy> = Arc::new(ExponentialBackoffBuilder::default().clamp());
        let arg = BackoffPolicyArg::from(policy);
        let _: Arc<dyn BackoffPolicy> = arg.into();
    }
}
