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


//! Defines types related to throttling the retry loop.

use crate::error::Error;

/// The result of a retry throttling control decision.
///
/// The retry loop may throttle some retry attempts: the request previously
/// failed and it is retryable, but the retry throttler has no budget left. In
/// such cases the attempt is not started, and the retry policy is consulted
/// to determine if the retry loop should continue.
#[derive(Debug)]
pub enum ThrottleResult {
    /// The error is retryable, but the policy is stopping the loop.
    Exhausted(Error),

    /// The error was retryable, continue the loop.
    Continue(Error),
}
