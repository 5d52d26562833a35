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


//! Types and functions to make long-running operations easier to use.
//!
//! Some RPCs start a long-running operation (LRO) on the service. The service
//! returns an [Operation][longrunning::model::Operation] which the client
//! library must poll until the operation completes. The generated clients
//! return an implementation of [Poller] for these RPCs, which hides the
//! polling loop, the backoff between polls, and the conversion of the
//! operation metadata and response into their typed representation.
//!
//! # Example
//! ```
//! # use gapic_lro::{Poller, PollingResult};
//! async fn wait<P: Poller<wkt::Duration, wkt::Timestamp>>(mut poller: P) -> gax::Result<wkt::Duration> {
//!     while let Some(p) = poller.poll().await {
//!         match p {
//!             PollingResult::Completed(r) => return r,
//!             PollingResult::InProgress(m) => println!("in progress, metadata={m:?}"),
//!             PollingResult::PollingError(e) => println!("transient polling error {e:?}"),
//!         }
//!     }
//!     unreachable!("pollers return a Completed result before ending")
//! }
//! ```

use gax::Result;
use gax::error::Error;
use std::future::Future;

/// The result of polling a Long-Running Operation (LRO).
///
/// # Parameters
/// * `R` - the response type. This is the type returned when the LRO completes
///   successfully.
/// * `M` - the metadata type. While operations are in progress the LRO may
///   return values of this type.
#[derive(Debug)]
pub enum PollingResult<R, M> {
    /// The operation is still in progress.
    InProgress(Option<M>),
    /// The operation completed. This includes the result.
    Completed(Result<R>),
    /// An error trying to poll the LRO.
    ///
    /// Not all errors indicate that the operation failed. For example, this
    /// may fail because it was not possible to connect to the service. Such
    /// transient errors may disappear in the next polling attempt.
    ///
    /// Errors that the polling error policy deems permanent are returned as
    /// `Completed(Err(..))` instead.
    PollingError(Error),
}

/// The trait implemented by LRO helpers.
///
/// # Parameters
/// * `R` - the response type, that is, the type of response included when the
///   long-running operation completes successfully.
/// * `M` - the metadata type, that is, the type returned by the service when
///   the long-running operation is still in progress.
pub trait Poller<R, M>: Send + sealed::Poller {
    /// Query the current status of the long-running operation.
    ///
    /// Returns `None` once the operation has completed and the completion
    /// was reported by a previous call.
    fn poll(&mut self) -> impl Future<Output = Option<PollingResult<R, M>>> + Send;

    /// Poll the long-running operation until it completes.
    ///
    /// The polling error policy decides which polling errors end the loop,
    /// and the polling backoff policy controls the delay between polls.
    fn until_done(self) -> impl Future<Output = Result<R>> + Send;

    /// Convert a poller to a [futures::Stream].
    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> + Unpin;
}

pub(crate) mod sealed {
    pub trait Poller {}
}

#[doc(hidden)]
pub mod internal;
mod details;
