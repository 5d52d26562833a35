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


//! Defines the trait for polling backoff policies.
//!
//! The client libraries can automatically poll long-running operations (LROs)
//! until completion. The polling loop waits between attempts to avoid
//! overloading the service.
//!
//! These policies are not retry backoff policies. Polling is expected, not a
//! failure, and polling backoff policies should not use jitter.
//! [ExponentialBackoff] implements this trait **without** jitter.
//!
//! To configure the default polling backoff policy for a client, use
//! [ClientBuilder::with_polling_backoff_policy]. To configure the policy used
//! for a specific request, use
//! [RequestOptionsBuilder::with_polling_backoff_policy].
//!
//! [ExponentialBackoff]: crate::exponential_backoff::ExponentialBackoff
//! [ClientBuilder::with_polling_backoff_policy]: crate::client_builder::ClientBuilder::with_polling_backoff_policy
//! [RequestOptionsBuilder::with_polling_backoff_policy]: crate::options::RequestOptionsBuilder::with_polling_backoff_policy
//!
//! # Example
//! ```
//! # use gapic_gax::exponential_backoff::Error;
//! # use gapic_gax::exponential_backoff::ExponentialBackoffBuilder;
//! use std::time::Duration;
//!
//! let policy = ExponentialBackoffBuilder::new()
//!     .with_initial_delay(Duration::from_millis(500))
//!     .with_maximum_delay(Duration::from_secs(45))
//!     .with_scaling(1.5)
//!     .build()?;
//! // `policy` implements the `PollingBackoffPolicy` trait.
//! # Ok::<(), Error>(())
//! ```

use crate::polling_state::PollingState;
use std::sync::Arc;

/// Defines the trait implemented by all polling backoff strategies.
pub trait PollingBackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the delay before the next poll.
    ///
    /// This is always called after the first attempt, `state.attempt_count` is
    /// at least 1.
    fn wait_period(&self, state: &PollingState) -> std::time::Duration;
}

/// A helper type to use [PollingBackoffPolicy] in client and request options.
#[derive(Clone)]
pub struct PollingBackoffPolicyArg(pub(crate) Arc<dyn PollingBackoffPolicy>);

impl<T: PollingBackoffPolicy + 'static> From<T> for PollingBackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn PollingBackoffPolicy>> for PollingBackoffPolicyArg {
    fn from(value: Arc<dyn PollingBackoffPolicy>) -> Self {
        Self(value)
    }
}

impl From<PollingBackoffPolicyArg> for Arc<dyn PollingBackoffPolicy> {
    fn from(value: PollingBackoffPolicyArg) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;

    #[test]
    fn polling_backoff_policy_arg() {
        let policy = ExponentialBackoffBuilder::default().clamp();
        let _ = PollingBackoffPolicyArg::from(policy);

        let policy: Arc<dyn PollingBackoffPolicy> =
            Arc::new(ExponentialBackoffBuilder::default().clamp());
        let arg = PollingBackoffPolicyArg::from(policy);
        let _: Arc<dyn PollingBackoffPolicy> = arg.into();
    }
}
