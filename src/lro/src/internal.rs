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


//! Implementation details for the generated clients.
//!
//! It is not part of the public API of this crate. Types and functions in this
//! module may be changed or removed without notice. Applications should not use
//! any types or functions contained within.

use super::{Poller, PollingResult, Result, details};
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::PollingErrorPolicy;
use gax::polling_state::PollingState;
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

/// A wrapper around [longrunning::model::Operation] with typed responses.
pub struct Operation<R, M> {
    inner: longrunning::model::Operation,
    _types: PhantomData<fn() -> (R, M)>,
}

impl<R, M> Operation<R, M> {
    pub fn new(inner: longrunning::model::Operation) -> Self {
        Self {
            inner,
            _types: PhantomData,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.inner.name
    }

    pub(crate) fn done(&self) -> bool {
        self.inner.done
    }

    pub(crate) fn metadata(&self) -> Option<&wkt::Any> {
        self.inner.metadata.as_ref()
    }

    pub(crate) fn response(&self) -> Option<&wkt::Any> {
        self.inner.response()
    }

    pub(crate) fn error(&self) -> Option<&gax::error::rpc::Status> {
        self.inner.error()
    }
}

/// Creates a new `impl Poller<R, M>` from the closures created by the
/// generated clients.
///
/// # Parameters
/// * `polling_error_policy` - decides which polling errors end the loop.
/// * `polling_backoff_policy` - the delay between polls in `until_done()`.
/// * `start` - starts the LRO. All the request parameters and options are
///   captured by this closure.
/// * `query` - queries the status of the LRO, given its name.
pub fn new_poller<R, M, S, SF, Q, QF>(
    polling_error_policy: Arc<dyn PollingErrorPolicy>,
    polling_backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: S,
    query: Q,
) -> impl Poller<R, M>
where
    R: wkt::message::Message + Send + 'static,
    M: wkt::message::Message + Send + 'static,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
    Q: Fn(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
{
    PollerImpl::new(polling_error_policy, polling_backoff_policy, start, query)
}

/// An implementation of [Poller] based on closures.
///
/// The generated code provides one closure to start the operation and one
/// closure to query its progress.
struct PollerImpl<R, M, S, Q> {
    error_policy: Arc<dyn PollingErrorPolicy>,
    backoff_policy: Arc<dyn PollingBackoffPolicy>,
    start: Option<S>,
    query: Q,
    operation: Option<String>,
    state: PollingState,
    _types: PhantomData<fn() -> (R, M)>,
}

impl<R, M, S, Q> PollerImpl<R, M, S, Q> {
    fn new(
        error_policy: Arc<dyn PollingErrorPolicy>,
        backoff_policy: Arc<dyn PollingBackoffPolicy>,
        start: S,
        query: Q,
    ) -> Self {
        Self {
            error_policy,
            backoff_policy,
            start: Some(start),
            query,
            operation: None,
            state: PollingState::default(),
            _types: PhantomData,
        }
    }
}

impl<R, M, S, Q> crate::sealed::Poller for PollerImpl<R, M, S, Q> {}

impl<R, M, S, SF, Q, QF> Poller<R, M> for PollerImpl<R, M, S, Q>
where
    R: wkt::message::Message + Send + 'static,
    M: wkt::message::Message + Send + 'static,
    S: FnOnce() -> SF + Send + Sync,
    SF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
    Q: Fn(String) -> QF + Send + Sync + Clone,
    QF: Future<Output = Result<Operation<R, M>>> + Send + 'static,
{
    async fn poll(&mut self) -> Option<PollingResult<R, M>> {
        if let Some(start) = self.start.take() {
            self.state = PollingState::default().set_attempt_count(1_u32);
            let result = start().await;
            let (name, result) = details::handle_start(result);
            self.operation = name;
            return Some(result);
        }
        let name = self.operation.take()?;
        self.state.attempt_count += 1;
        let result = (self.query)(name.clone()).await;
        let (name, result) = details::handle_poll(&*self.error_policy, &self.state, name, result);
        self.operation = name;
        Some(result)
    }

    async fn until_done(mut self) -> Result<R> {
        while let Some(p) = self.poll().await {
            match p {
                PollingResult::Completed(r) => return r,
                PollingResult::InProgress(_) => {}
                PollingResult::PollingError(e) => {
                    tracing::debug!(
                        attempt_count = self.state.attempt_count,
                        "transient error polling long-running operation: {e}"
                    );
                }
            }
            let wait = self.backoff_policy.wait_period(&self.state);
            tokio::time::sleep(wait).await;
        }
        // `poll()` only returns `None` after a `Completed` result, and the
        // loop returns on the first `Completed` result.
        unreachable!("the polling loop ends with a Completed result")
    }

    #[cfg(feature = "unstable-stream")]
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> + Unpin {
        use futures::stream::unfold;
        Box::pin(unfold(Some(self), move |state| async move {
            let mut poller = state?;
            let p = poller.poll().await?;
            Some((p, Some(poller)))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::polling_error_policy::{Aip194Strict, PollingErrorPolicyExt};
    use longrunning::model::Operation as RawOperation;
    use std::sync::Mutex;
    use std::time::Duration;

    type ResponseType = wkt::Duration;
    type MetadataType = wkt::Timestamp;
    type TestOperation = Operation<ResponseType, MetadataType>;
    type TestResult = anyhow::Result<()>;

    fn pending(name: &str, seconds: i64) -> Result<TestOperation> {
        let any = wkt::Any::from_msg(&wkt::Timestamp::clamp(seconds, 0)).map_err(Error::ser)?;
        let op = RawOperation::default().set_name(name).set_metadata(any);
        Ok(TestOperation::new(op))
    }

    fn done(name: &str, seconds: i64) -> Result<TestOperation> {
        let any = wkt::Any::from_msg(&wkt::Duration::clamp(seconds, 0)).map_err(Error::ser)?;
        let op = RawOperation::default()
            .set_name(name)
            .set_done(true)
            .set_result(any);
        Ok(TestOperation::new(op))
    }

    fn unavailable() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable))
    }

    fn policies() -> (Arc<dyn PollingErrorPolicy>, Arc<dyn PollingBackoffPolicy>) {
        let backoff = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(100))
            .with_maximum_delay(Duration::from_secs(1))
            .clamp();
        (Arc::new(Aip194Strict.with_attempt_limit(5)), Arc::new(backoff))
    }

    // A fake query closure returning the responses in order.
    fn sequence(
        responses: Vec<Result<TestOperation>>,
    ) -> (
        Arc<Mutex<Vec<String>>>,
        impl Fn(String) -> std::future::Ready<Result<TestOperation>> + Send + Sync + Clone,
    ) {
        let names = Arc::new(Mutex::new(Vec::new()));
        let responses = Arc::new(Mutex::new(std::collections::VecDeque::from(responses)));
        let captured = names.clone();
        let query = move |name: String| {
            captured.lock().expect("mutex is not poisoned").push(name);
            let next = responses
                .lock()
                .expect("mutex is not poisoned")
                .pop_front()
                .unwrap_or_else(|| Err(Error::deser("no more responses")));
            std::future::ready(next)
        };
        (names, query)
    }

    #[tokio::test]
    async fn poll_basic_flow() -> TestResult {
        let (error_policy, backoff_policy) = policies();
        let (names, query) = sequence(vec![done("op-001", 234)]);
        let start = || async { pending("op-001", 123) };
        let mut poller = new_poller(error_policy, backoff_policy, start, query);

        let p0 = poller.poll().await;
        assert!(
            matches!(&p0, Some(PollingResult::InProgress(Some(m))) if *m == wkt::Timestamp::clamp(123, 0)),
            "{p0:?}"
        );
        let p1 = poller.poll().await;
        assert!(
            matches!(&p1, Some(PollingResult::Completed(Ok(r))) if *r == wkt::Duration::clamp(234, 0)),
            "{p1:?}"
        );
        let p2 = poller.poll().await;
        assert!(p2.is_none(), "{p2:?}");
        assert_eq!(*names.lock().expect("mutex is not poisoned"), vec!["op-001"]);
        Ok(())
    }

    #[tokio::test]
    async fn start_error() {
        let (error_policy, backoff_policy) = policies();
        let (names, query) = sequence(vec![]);
        let start = || async { Err::<TestOperation, _>(unavailable()) };
        let mut poller = new_poller(error_policy, backoff_policy, start, query);
        let p0 = poller.poll().await;
        assert!(
            matches!(&p0, Some(PollingResult::Completed(Err(e))) if e.status().is_some()),
            "{p0:?}"
        );
        assert!(poller.poll().await.is_none());
        assert!(names.lock().expect("mutex is not poisoned").is_empty());
    }

    #[tokio::test]
    async fn transient_polling_error() -> TestResult {
        let (error_policy, backoff_policy) = policies();
        let (_, query) = sequence(vec![Err(unavailable()), done("op-001", 234)]);
        let start = || async { pending("op-001", 123) };
        let mut poller = new_poller(error_policy, backoff_policy, start, query);

        let _ = poller.poll().await;
        let p1 = poller.poll().await;
        assert!(matches!(&p1, Some(PollingResult::PollingError(_))), "{p1:?}");
        let p2 = poller.poll().await;
        assert!(
            matches!(&p2, Some(PollingResult::Completed(Ok(_)))),
            "{p2:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn permanent_polling_error() {
        let (error_policy, backoff_policy) = policies();
        let not_found = Error::service(Status::default().set_code(Code::NotFound));
        let (_, query) = sequence(vec![Err(not_found)]);
        let start = || async { pending("op-001", 123) };
        let mut poller = new_poller(error_policy, backoff_policy, start, query);

        let _ = poller.poll().await;
        let p1 = poller.poll().await;
        assert!(
            matches!(&p1, Some(PollingResult::Completed(Err(e))) if e.status().map(|s| s.code) == Some(Code::NotFound)),
            "{p1:?}"
        );
        assert!(poller.poll().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn until_done_success() -> TestResult {
        let (error_policy, backoff_policy) = policies();
        let (names, query) = sequence(vec![
            pending("op-001", 50),
            Err(unavailable()),
            done("op-001", 234),
        ]);
        let start = || async { pending("op-001", 0) };
        let poller = new_poller(error_policy, backoff_policy, start, query);
        let response = poller.until_done().await?;
        assert_eq!(response, wkt::Duration::clamp(234, 0));
        assert_eq!(names.lock().expect("mutex is not poisoned").len(), 3);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn until_done_exhausted() {
        let (_, backoff_policy) = policies();
        let error_policy: Arc<dyn PollingErrorPolicy> = Arc::new(Aip194Strict.with_attempt_limit(3));
        let (names, query) = sequence(vec![
            pending("op-001", 25),
            pending("op-001", 50),
            pending("op-001", 75),
        ]);
        let start = || async { pending("op-001", 0) };
        let poller = new_poller(error_policy, backoff_policy, start, query);
        let err = poller.until_done().await.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(names.lock().expect("mutex is not poisoned").len(), 2);
    }

    #[cfg(feature = "unstable-stream")]
    #[tokio::test]
    async fn into_stream() -> TestResult {
        use futures::StreamExt;
        let (error_policy, backoff_policy) = policies();
        let (_, query) = sequence(vec![pending("op-001", 50), done("op-001", 234)]);
        let start = || async { pending("op-001", 0) };
        let stream = new_poller(error_policy, backoff_policy, start, query).into_stream();
        let results = stream.collect::<Vec<_>>().await;
        assert_eq!(results.len(), 3, "{results:?}");
        assert!(matches!(results[0], PollingResult::InProgress(Some(_))));
        assert!(matches!(results[1], PollingResult::InProgress(Some(_))));
        assert!(matches!(results[2], PollingResult::Completed(Ok(_))));
        Ok(())
    }
}
