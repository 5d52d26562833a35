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

mod core_error;
pub use core_error::*;

/// The credentials error type, re-exported so callers can match on it without
/// depending on `google-cloud-auth` directly.
pub use auth::errors::CredentialsError;

/// Errors and error details returned by Service RPCs.
///
/// The client libraries distinguish between errors detected while trying to
/// send a RPC (e.g. cannot open a connection), errors trying to receive a
/// response, and errors returned by the service itself.
///
/// The types in this module represent detailed information returned by the
/// services.
///
/// # Examples
///
/// ```
/// use gapic_gax::error::Error;
/// use gapic_gax::error::rpc::{Code, Status};
/// fn handle(e: Error) {
///     match e.status() {
///         Some(s) if s.code == Code::NotFound => println!("the table does not exist"),
///         Some(s) => println!("the service rejected the request: {}", s.message),
///         None => println!("some other problem: {e}"),
///     }
/// }
/// # handle(Error::service(Status::default().set_code(Code::NotFound)));
/// ```
pub mod rpc;
