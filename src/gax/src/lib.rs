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


//! Runtime support for the GAPIC client libraries.
//!
//! This crate contains the types and functions shared by every generated
//! client: the error type, the request options, the retry, backoff and
//! polling policies, pagination helpers, the client builder, and the parser
//! for the JSON client configuration bundled with each client.
//!
//! <div class="warning">
//! The items marked as <code>doc(hidden)</code> are <b>not</b> intended for
//! general use. They support the generated code and may change without notice.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod error;

pub mod options;

pub mod paginator;
pub mod response;

pub mod client_builder;
pub mod client_config;

pub mod backoff_policy;
pub mod exponential_backoff;
pub mod retry_policy;
pub mod retry_result;
pub mod retry_state;
pub mod retry_throttler;
pub mod throttle_result;

pub mod polling_backoff_policy;
pub mod polling_error_policy;
pub mod polling_state;

pub mod path_template;

#[doc(hidden)]
pub mod retry_loop_internal;
