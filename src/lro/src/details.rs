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


//! Converts the results of starting and polling an operation into
//! [PollingResult] values.

use super::internal::Operation;
use super::{PollingResult, Result};
use gax::error::Error;
use gax::polling_error_policy::PollingErrorPolicy;
use gax::polling_state::PollingState;
use gax::retry_result::RetryResult;

/// Handles the result of the RPC starting the operation.
///
/// Returns the name of the operation to poll, if the operation is still in
/// progress.
pub(crate) fn handle_start<R, M>(
    result: Result<Operation<R, M>>,
) -> (Option<String>, PollingResult<R, M>)
where
    R: wkt::message::Message,
    M: wkt::message::Message,
{
    match result {
        Err(e) => (None, PollingResult::Completed(Err(e))),
        Ok(op) => handle_common(op),
    }
}

/// Handles the result of polling the operation.
pub(crate) fn handle_poll<R, M>(
    error_policy: &dyn PollingErrorPolicy,
    state: &PollingState,
    operation_name: String,
    result: Result<Operation<R, M>>,
) -> (Option<String>, PollingResult<R, M>)
where
    R: wkt::message::Message,
    M: wkt::message::Message,
{
    let op = match result {
        Err(e) => return handle_polling_error(error_policy.on_error(state, e), operation_name),
        Ok(op) => op,
    };
    match handle_common(op) {
        (name, PollingResult::InProgress(m)) => {
            match error_policy.on_in_progress(state, &operation_name) {
                Ok(()) => (name, PollingResult::InProgress(m)),
                Err(e) => (None, PollingResult::Completed(Err(e))),
            }
        }
        r => r,
    }
}

fn handle_polling_error<R, M>(
    flow: RetryResult,
    operation_name: String,
) -> (Option<String>, PollingResult<R, M>) {
    match flow {
        RetryResult::Continue(e) => (Some(operation_name), PollingResult::PollingError(e)),
        RetryResult::Exhausted(e) | RetryResult::Permanent(e) => {
            (None, PollingResult::Completed(Err(e)))
        }
    }
}

fn handle_common<R, M>(op: Operation<R, M>) -> (Option<String>, PollingResult<R, M>)
where
    R: wkt::message::Message,
    M: wkt::message::Message,
{
    if op.done() {
        return (None, PollingResult::Completed(as_result(&op)));
    }
    let metadata = as_metadata(&op);
    (Some(op.name().to_string()), PollingResult::InProgress(metadata))
}

fn as_result<R, M>(op: &Operation<R, M>) -> Result<R>
where
    R: wkt::message::Message,
{
    // A completed operation must set either the response or the error.
    // Setting neither does not satisfy the invariants of the message.
    match (op.response(), op.error()) {
        (Some(any), None) => any.to_msg::<R>().map_err(Error::deser),
        (None, Some(status)) => Err(Error::service(status.clone())),
        (None, None) => Err(Error::deser("neither response nor error set in LRO result")),
        (Some(_), Some(_)) => unreachable!("response and error are held in a oneof"),
    }
}

// Metadata with an unexpected type is not an error, the operation is still
// in progress.
fn as_metadata<R, M>(op: &Operation<R, M>) -> Option<M>
where
    M: wkt::message::Message,
{
    op.metadata().and_then(|a| a.to_msg::<M>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use gax::polling_error_policy::{Aip194Strict, AlwaysContinue, PollingErrorPolicyExt};
    use longrunning::model::Operation as RawOperation;
    use test_case::test_case;

    type ResponseType = wkt::Duration;
    type MetadataType = wkt::Timestamp;
    type TestOperation = Operation<ResponseType, MetadataType>;
    type TestResult = anyhow::Result<()>;

    fn in_progress() -> anyhow::Result<TestOperation> {
        let any = wkt::Any::from_msg(&wkt::Timestamp::clamp(123, 0))?;
        let op = RawOperation::default()
            .set_name("test-only-name")
            .set_metadata(any);
        Ok(TestOperation::new(op))
    }

    #[test]
    fn start_in_progress() -> TestResult {
        let (name, result) = handle_start(Ok(in_progress()?));
        assert_eq!(name.as_deref(), Some("test-only-name"));
        assert!(
            matches!(&result, PollingResult::InProgress(Some(m)) if *m == wkt::Timestamp::clamp(123, 0)),
            "{result:?}"
        );
        Ok(())
    }

    #[test]
    fn start_error() {
        let error = Error::service(Status::default().set_code(Code::PermissionDenied));
        let (name, result) = handle_start::<ResponseType, MetadataType>(Err(error));
        assert!(name.is_none());
        assert!(
            matches!(&result, PollingResult::Completed(Err(e)) if e.status().is_some()),
            "{result:?}"
        );
    }

    #[test]
    fn done_with_response() -> TestResult {
        let any = wkt::Any::from_msg(&wkt::Duration::clamp(234, 0))?;
        let op = RawOperation::default()
            .set_name("test-only-name")
            .set_done(true)
            .set_result(any);
        let (name, result) = handle_common(TestOperation::new(op));
        assert!(name.is_none());
        assert!(
            matches!(&result, PollingResult::Completed(Ok(d)) if *d == wkt::Duration::clamp(234, 0)),
            "{result:?}"
        );
        Ok(())
    }

    #[test]
    fn done_with_error() {
        let status = Status::default()
            .set_code(Code::ResourceExhausted)
            .set_message("quota exceeded");
        let op = RawOperation::default()
            .set_done(true)
            .set_result(status.clone());
        let (_, result) = handle_common(TestOperation::new(op));
        assert!(
            matches!(&result, PollingResult::Completed(Err(e)) if e.status() == Some(&status)),
            "{result:?}"
        );
    }

    #[test]
    fn done_without_result() {
        let op = RawOperation::default().set_done(true);
        let (_, result) = handle_common(TestOperation::new(op));
        assert!(
            matches!(&result, PollingResult::Completed(Err(e)) if e.is_deserialization()),
            "{result:?}"
        );
    }

    #[test]
    fn done_with_wrong_type() -> TestResult {
        let any = wkt::Any::from_msg(&wkt::Timestamp::clamp(234, 0))?;
        let op = RawOperation::default().set_done(true).set_result(any);
        let (_, result) = handle_common(TestOperation::new(op));
        assert!(
            matches!(&result, PollingResult::Completed(Err(e)) if e.is_deserialization()),
            "{result:?}"
        );
        Ok(())
    }

    #[test]
    fn metadata_with_wrong_type() -> TestResult {
        let any = wkt::Any::from_msg(&wkt::Duration::clamp(1, 0))?;
        let op = RawOperation::default().set_name("op").set_metadata(any);
        let (name, result) = handle_common(TestOperation::new(op));
        assert_eq!(name.as_deref(), Some("op"));
        assert!(matches!(&result, PollingResult::InProgress(None)), "{result:?}");
        Ok(())
    }

    #[test_case(Code::Unavailable, true ; "unavailable continues")]
    #[test_case(Code::NotFound, false ; "not found stops")]
    #[test_case(Code::PermissionDenied, false ; "permission denied stops")]
    fn poll_errors(code: Code, continues: bool) {
        let error = Error::service(Status::default().set_code(code));
        let state = PollingState::default().set_attempt_count(2_u32);
        let (name, result) =
            handle_poll::<ResponseType, MetadataType>(&Aip194Strict, &state, "op".into(), Err(error));
        if continues {
            assert_eq!(name.as_deref(), Some("op"));
            assert!(matches!(&result, PollingResult::PollingError(_)), "{result:?}");
        } else {
            assert!(name.is_none());
            assert!(matches!(&result, PollingResult::Completed(Err(_))), "{result:?}");
        }
    }

    #[test]
    fn poll_error_exhausted() {
        let policy = AlwaysContinue.with_attempt_limit(3);
        let error = Error::service(Status::default().set_code(Code::Unavailable));
        let state = PollingState::default().set_attempt_count(3_u32);
        let (name, result) =
            handle_poll::<ResponseType, MetadataType>(&policy, &state, "op".into(), Err(error));
        assert!(name.is_none());
        assert!(
            matches!(&result, PollingResult::Completed(Err(e)) if e.is_exhausted()),
            "{result:?}"
        );
    }

    #[test]
    fn poll_in_progress_exhausted() -> TestResult {
        let policy = AlwaysContinue.with_attempt_limit(3);
        let state = PollingState::default().set_attempt_count(2_u32);
        let (name, result) = handle_poll(&policy, &state, "op".into(), Ok(in_progress()?));
        assert!(name.is_some());
        assert!(matches!(&result, PollingResult::InProgress(_)), "{result:?}");

        let state = PollingState::default().set_attempt_count(3_u32);
        let (name, result) = handle_poll(&policy, &state, "op".into(), Ok(in_progress()?));
        assert!(name.is_none());
        assert!(
            matches!(&result, PollingResult::Completed(Err(e)) if e.is_exhausted()),
            "{result:?}"
        );
        Ok(())
    }
}
