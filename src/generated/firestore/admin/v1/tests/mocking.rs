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


use gapic_firestore_admin_v1::{client, model, stub};
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::response::Response;
use lro::{Poller, PollingResult};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const GROUP: &str = "projects/p/databases/(default)/collectionGroups/cities";
const OPERATION: &str = "projects/p/databases/(default)/operations/op-001";

mockall::mock! {
    #[derive(Debug)]
    FirestoreAdmin {}
    impl stub::FirestoreAdmin for FirestoreAdmin {
        async fn create_index(&self, req: model::CreateIndexRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
        async fn list_indexes(&self, req: model::ListIndexesRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::ListIndexesResponse>>;
        async fn delete_index(&self, req: model::DeleteIndexRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<wkt::Empty>>;
        async fn import_documents(&self, req: model::ImportDocumentsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
        async fn get_operation(&self, req: longrunning::model::GetOperationRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
    }
}

#[tokio::test(start_paused = true)]
async fn create_index_until_done() -> Result<()> {
    let index = model::Index::new()
        .set_name(format!("{GROUP}/indexes/idx-1"))
        .set_query_scope(model::QueryScope::Collection)
        .set_fields([
            model::IndexField::new()
                .set_field_path("state")
                .set_order(model::Order::Ascending),
            model::IndexField::new()
                .set_field_path("population")
                .set_order(model::Order::Descending),
        ])
        .set_state(model::IndexState::Ready);
    let response = wkt::Any::from_msg(&index)?;
    let metadata = wkt::Any::from_msg(
        &model::IndexOperationMetadata::new()
            .set_index(format!("{GROUP}/indexes/idx-1"))
            .set_state(model::OperationState::Processing),
    )?;

    let mut seq = mockall::Sequence::new();
    let mut mock = MockFirestoreAdmin::new();
    mock.expect_create_index()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.parent == GROUP && r.index.as_ref().is_some_and(|i| i.fields.len() == 2))
        .return_once(move |_, _| {
            Ok(Response::from(
                longrunning::model::Operation::default()
                    .set_name(OPERATION)
                    .set_metadata(metadata),
            ))
        });
    mock.expect_get_operation()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.name == OPERATION)
        .return_once(|_, _| {
            Err(Error::service(
                Status::default().set_code(Code::Unavailable).set_message("try again"),
            ))
        });
    mock.expect_get_operation()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.name == OPERATION)
        .return_once(|_, _| {
            Ok(Response::from(
                longrunning::model::Operation::default()
                    .set_name(OPERATION)
                    .set_done(true)
                    .set_result(response),
            ))
        });

    let client = client::FirestoreAdmin::from_stub(mock);
    let got = client
        .create_index()
        .set_parent(client::FirestoreAdmin::collection_group_path(
            "p",
            "(default)",
            "cities",
        )?)
        .set_index(
            model::Index::new()
                .set_query_scope(model::QueryScope::Collection)
                .set_fields(index.fields.clone()),
        )
        .poller()
        .until_done()
        .await?;
    assert_eq!(got, index);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn import_documents_poll() -> Result<()> {
    let metadata = model::ImportDocumentsMetadata::new()
        .set_operation_state(model::OperationState::Processing)
        .set_progress_documents(
            model::Progress::new()
                .set_estimated_work(1000)
                .set_completed_work(250),
        )
        .set_input_uri_prefix("gs://bucket/backup");
    let any = wkt::Any::from_msg(&metadata)?;
    let empty = wkt::Any::from_msg(&wkt::Empty::default())?;

    let mut mock = MockFirestoreAdmin::new();
    mock.expect_import_documents()
        .once()
        .withf(|r, _| r.input_uri_prefix == "gs://bucket/backup")
        .return_once(move |_, _| {
            Ok(Response::from(
                longrunning::model::Operation::default()
                    .set_name(OPERATION)
                    .set_metadata(any),
            ))
        });
    mock.expect_get_operation().once().return_once(move |_, _| {
        Ok(Response::from(
            longrunning::model::Operation::default()
                .set_name(OPERATION)
                .set_done(true)
                .set_result(empty),
        ))
    });

    let client = client::FirestoreAdmin::from_stub(mock);
    let mut poller = client
        .import_documents()
        .set_name("projects/p/databases/(default)")
        .set_input_uri_prefix("gs://bucket/backup")
        .poller();
    let p0 = poller.poll().await;
    assert!(
        matches!(&p0, Some(PollingResult::InProgress(Some(m))) if *m == metadata),
        "{p0:?}"
    );
    let p1 = poller.poll().await;
    assert!(matches!(&p1, Some(PollingResult::Completed(Ok(_)))), "{p1:?}");
    assert!(poller.poll().await.is_none());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn list_indexes_by_page() -> Result<()> {
    let mut seq = mockall::Sequence::new();
    let mut mock = MockFirestoreAdmin::new();
    mock.expect_list_indexes()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.parent == GROUP && r.page_token.is_empty())
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListIndexesResponse::new()
                    .set_indexes([index("a"), index("b")])
                    .set_next_page_token("next"),
            ))
        });
    mock.expect_list_indexes()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token == "next")
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListIndexesResponse::new().set_indexes([index("c")]),
            ))
        });

    let client = client::FirestoreAdmin::from_stub(mock);
    let mut pages = client.list_indexes().set_parent(GROUP).by_page();
    let mut sizes = Vec::new();
    while let Some(page) = pages.next().await {
        sizes.push(page?.indexes.len());
    }
    assert_eq!(sizes, [2, 1]);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn delete_index_error() -> Result<()> {
    let mut mock = MockFirestoreAdmin::new();
    mock.expect_delete_index().return_once(|_, _| {
        Err(Error::service(
            Status::default()
                .set_code(Code::NotFound)
                .set_message("index not found"),
        ))
    });

    let client = client::FirestoreAdmin::from_stub(mock);
    let err = client
        .delete_index()
        .set_name(format!("{GROUP}/indexes/missing"))
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
    Ok(())
}

fn index(id: &str) -> model::Index {
    model::Index::new().set_name(format!("{GROUP}/indexes/{id}"))
}
