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


use gapic_firestore_v1::{client, model, stub};
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::response::Response;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const DATABASE: &str = "projects/p/databases/(default)";
const DOCUMENTS: &str = "projects/p/databases/(default)/documents";

mockall::mock! {
    #[derive(Debug)]
    Firestore {}
    impl stub::Firestore for Firestore {
        async fn list_documents(&self, req: model::ListDocumentsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::ListDocumentsResponse>>;
        async fn begin_transaction(&self, req: model::BeginTransactionRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::BeginTransactionResponse>>;
        async fn commit(&self, req: model::CommitRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::CommitResponse>>;
        async fn rollback(&self, req: model::RollbackRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<wkt::Empty>>;
        async fn run_query(&self, req: model::RunQueryRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<Vec<model::RunQueryResponse>>>;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn transaction_commit() -> Result<()> {
    let mut seq = mockall::Sequence::new();
    let mut mock = MockFirestore::new();
    mock.expect_begin_transaction()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.database == DATABASE)
        .return_once(|_, _| {
            Ok(Response::from(
                model::BeginTransactionResponse::new().set_transaction(bytes::Bytes::from_static(b"tx-1")),
            ))
        });
    mock.expect_commit()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| {
            r.transaction == bytes::Bytes::from_static(b"tx-1")
                && r.writes.len() == 2
                && r.writes[1].delete == format!("{DOCUMENTS}/cities/SF")
        })
        .return_once(|r, _| {
            let results = r.writes.iter().map(|_| {
                model::WriteResult::new().set_update_time(wkt::Timestamp::clamp(1_700_000_000, 0))
            });
            Ok(Response::from(
                model::CommitResponse::new()
                    .set_write_results(results)
                    .set_commit_time(wkt::Timestamp::clamp(1_700_000_000, 0)),
            ))
        });

    let client = client::Firestore::from_stub(mock);
    let tx = client.begin_transaction().set_database(DATABASE).send().await?;
    let la = model::Document::new()
        .set_name(format!("{DOCUMENTS}/cities/LA"))
        .set_fields([("population", model::Value::new().set_integer_value(3_898_747))]);
    let response = client
        .commit()
        .set_database(DATABASE)
        .set_transaction(tx.transaction)
        .set_writes([
            model::Write::new().set_update(la),
            model::Write::new().set_delete(format!("{DOCUMENTS}/cities/SF")),
        ])
        .send()
        .await?;
    assert_eq!(response.write_results.len(), 2);
    assert_eq!(response.commit_time, Some(wkt::Timestamp::clamp(1_700_000_000, 0)));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn rollback_error() -> Result<()> {
    let mut mock = MockFirestore::new();
    mock.expect_rollback().return_once(|_, _| {
        Err(Error::service(
            Status::default()
                .set_code(Code::FailedPrecondition)
                .set_message("transaction expired"),
        ))
    });

    let client = client::Firestore::from_stub(mock);
    let err = client
        .rollback()
        .set_database(DATABASE)
        .set_transaction(bytes::Bytes::from_static(b"tx-1"))
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.code), Some(Code::FailedPrecondition), "{err:?}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn list_documents_by_item() -> Result<()> {
    let mut seq = mockall::Sequence::new();
    let mut mock = MockFirestore::new();
    mock.expect_list_documents()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token.is_empty() && r.collection_id == "cities")
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListDocumentsResponse::new()
                    .set_documents([city("LA"), city("NYC")])
                    .set_next_page_token("page-2"),
            ))
        });
    mock.expect_list_documents()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token == "page-2")
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListDocumentsResponse::new().set_documents([city("SF")]),
            ))
        });

    let client = client::Firestore::from_stub(mock);
    let mut items = client
        .list_documents()
        .set_parent(DOCUMENTS)
        .set_collection_id("cities")
        .by_item();
    let mut names = Vec::new();
    while let Some(doc) = items.next().await {
        names.push(doc?.name);
    }
    assert_eq!(
        names,
        ["LA", "NYC", "SF"]
            .map(|id| format!("{DOCUMENTS}/cities/{id}"))
            .to_vec()
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn run_query_collects_responses() -> Result<()> {
    let mut mock = MockFirestore::new();
    mock.expect_run_query()
        .withf(|r, _| {
            r.structured_query
                .as_ref()
                .is_some_and(|q| q.limit == Some(2) && q.from[0].collection_id == "cities")
        })
        .return_once(|_, _| {
            Ok(Response::from(vec![
                model::RunQueryResponse::new().set_document(city("LA")),
                model::RunQueryResponse::new().set_document(city("NYC")),
                model::RunQueryResponse::new().set_skipped_results(1),
            ]))
        });

    let client = client::Firestore::from_stub(mock);
    let query = model::StructuredQuery::new()
        .set_from([model::CollectionSelector::new().set_collection_id("cities")])
        .set_where(
            model::Filter::new().set_field_filter(
                model::FieldFilter::new()
                    .set_field(model::FieldReference::new().set_field_path("population"))
                    .set_op(model::FieldOperator::GreaterThan)
                    .set_value(model::Value::new().set_integer_value(1_000_000)),
            ),
        )
        .set_limit(2);
    let responses = client
        .run_query()
        .set_parent(DOCUMENTS)
        .set_structured_query(query)
        .send()
        .await?;
    let documents = responses
        .iter()
        .filter_map(|r| r.document.as_ref())
        .map(|d| d.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        documents,
        [
            format!("{DOCUMENTS}/cities/LA"),
            format!("{DOCUMENTS}/cities/NYC")
        ]
    );
    assert_eq!(responses[2].skipped_results, 1);
    Ok(())
}

fn city(id: &str) -> model::Document {
    model::Document::new()
        .set_name(format!("{DOCUMENTS}/cities/{id}"))
        .set_fields([("name", model::Value::new().set_string_value(id))])
}
