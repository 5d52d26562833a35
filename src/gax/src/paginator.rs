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


//! Types to iterate over the results of List RPCs.
//!
//! List RPCs return a page of results and a `next_page_token`, as described
//! in [AIP-4233]. [Paginator] converts these RPCs into a stream of pages,
//! and [ItemPaginator] into a stream of items.
//!
//! [AIP-4233]: https://google.aip.dev/client-libraries/4233

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

#[doc(hidden)]
pub mod internal {
    /// Describes the responses returned by List RPCs.
    ///
    /// Implemented by the generated list response messages.
    pub trait PageableResponse {
        type PageItem: Send;

        /// Consumes the response and returns the items in this page.
        fn items(self) -> Vec<Self::PageItem>;

        /// The token to fetch the next page, empty on the last page.
        fn next_page_token(&self) -> String;
    }
}

use internal::PageableResponse;

type BoxStream<T> = Pin<Box<dyn Stream<Item = T> + Send>>;

/// An adapter that converts List RPCs into a [Stream] of pages.
///
/// The paginator sends the initial request with the seed token, and then
/// sends a new request with each `next_page_token` until the service returns
/// an empty token. The stream ends after the first error.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: BoxStream<Result<T, E>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch each page.
    pub fn new<F, X>(seed_token: String, execute: X) -> Self
    where
        X: Fn(String) -> F + Clone + Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page) => {
                        let next = page.next_page_token();
                        let state = if next.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(next)
                        };
                        Some((Ok(page), state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts this paginator into a stream of the items in each page.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// An adapter that converts List RPCs into a [Stream] of items.
///
/// Pages are fetched lazily, only after all the items in the previous page
/// are consumed. The stream ends after the first error.
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    stream: BoxStream<Result<T::PageItem, E>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new(pages: Paginator<T, E>) -> Self {
        let state = (Some(pages), VecDeque::new());
        let stream = unfold(state, |(pages, mut buffer)| async move {
            if let Some(item) = buffer.pop_front() {
                return Some((Ok(item), (pages, buffer)));
            }
            let mut pages = pages?;
            loop {
                match pages.next().await? {
                    Ok(page) => {
                        buffer.extend(page.items());
                        if let Some(item) = buffer.pop_front() {
                            return Some((Ok(item), (Some(pages), buffer)));
                        }
                    }
                    Err(e) => return Some((Err(e), (None, buffer))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next item.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq)]
    struct TestResponse {
        items: Vec<String>,
        next_page_token: String,
    }

    impl PageableResponse for TestResponse {
        type PageItem = String;
        fn items(self) -> Vec<String> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn page(items: &[&str], token: &str) -> TestResponse {
        TestResponse {
            items: items.iter().map(|s| s.to_string()).collect(),
            next_page_token: token.to_string(),
        }
    }

    type TestResult = Result<TestResponse, String>;

    // Returns a paginator over `responses`, recording the tokens it receives.
    fn test_paginator(
        seed: &str,
        responses: Vec<TestResult>,
    ) -> (Paginator<TestResponse, String>, Arc<Mutex<Vec<String>>>) {
        let responses = Arc::new(Mutex::new(VecDeque::from(responses)));
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let recorded = tokens.clone();
        let execute = move |token: String| {
            tokens.lock().unwrap().push(token);
            let response = responses.lock().unwrap().pop_front();
            async move { response.unwrap_or_else(|| Err("too many requests".to_string())) }
        };
        (Paginator::new(seed.to_string(), execute), recorded)
    }

    #[tokio::test]
    async fn pages() {
        let (mut paginator, tokens) = test_paginator(
            "seed",
            vec![Ok(page(&["a", "b"], "t1")), Ok(page(&["c"], ""))],
        );
        let mut got = Vec::new();
        while let Some(p) = paginator.next().await {
            got.push(p);
        }
        assert_eq!(got, vec![Ok(page(&["a", "b"], "t1")), Ok(page(&["c"], ""))]);
        assert_eq!(*tokens.lock().unwrap(), vec!["seed", "t1"]);
    }

    #[tokio::test]
    async fn pages_stop_on_error() {
        let (mut paginator, tokens) = test_paginator(
            "",
            vec![
                Ok(page(&["a"], "t1")),
                Err("uh-oh".to_string()),
                Ok(page(&["c"], "")),
            ],
        );
        assert_eq!(paginator.next().await, Some(Ok(page(&["a"], "t1"))));
        assert_eq!(paginator.next().await, Some(Err("uh-oh".to_string())));
        assert_eq!(paginator.next().await, None);
        assert_eq!(*tokens.lock().unwrap(), vec!["", "t1"]);
    }

    #[tokio::test]
    async fn items() {
        let (paginator, tokens) = test_paginator(
            "",
            vec![
                Ok(page(&["a", "b"], "t1")),
                Ok(page(&[], "t2")),
                Ok(page(&["c"], "")),
            ],
        );
        let got = paginator.items().collect::<Vec<_>>().await;
        assert_eq!(
            got,
            vec![Ok("a".to_string()), Ok("b".to_string()), Ok("c".to_string())]
        );
        assert_eq!(*tokens.lock().unwrap(), vec!["", "t1", "t2"]);
    }

    #[tokio::test]
    async fn items_are_lazy() {
        let (paginator, tokens) =
            test_paginator("", vec![Ok(page(&["a", "b"], "t1")), Ok(page(&["c"], ""))]);
        let mut items = paginator.items();
        assert_eq!(items.next().await, Some(Ok("a".to_string())));
        assert_eq!(items.next().await, Some(Ok("b".to_string())));
        assert_eq!(tokens.lock().unwrap().len(), 1);
        assert_eq!(items.next().await, Some(Ok("c".to_string())));
        assert_eq!(items.next().await, None);
        assert_eq!(tokens.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn items_stop_on_error() {
        let (paginator, _) =
            test_paginator("", vec![Ok(page(&["a"], "t1")), Err("uh-oh".to_string())]);
        let got = paginator.items().collect::<Vec<_>>().await;
        assert_eq!(got, vec![Ok("a".to_string()), Err("uh-oh".to_string())]);
    }
}
