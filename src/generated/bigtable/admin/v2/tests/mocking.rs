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


use gapic_bigtable_admin_v2::{client, model, stub};
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::response::Response;
use lro::{Poller, PollingResult};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

mockall::mock! {
    #[derive(Debug)]
    BigtableInstanceAdmin {}
    impl stub::BigtableInstanceAdmin for BigtableInstanceAdmin {
        async fn create_instance(&self, req: model::CreateInstanceRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
        async fn get_instance(&self, req: model::GetInstanceRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::Instance>>;
        async fn delete_cluster(&self, req: model::DeleteClusterRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<wkt::Empty>>;
        async fn get_operation(&self, req: longrunning::model::GetOperationRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
    }
}

mockall::mock! {
    #[derive(Debug)]
    BigtableTableAdmin {}
    impl stub::BigtableTableAdmin for BigtableTableAdmin {
        async fn list_tables(&self, req: model::ListTablesRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::ListTablesResponse>>;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn get_instance() -> Result<()> {
    let mut mock = MockBigtableInstanceAdmin::new();
    mock.expect_get_instance()
        .withf(|r, _| r.name == "projects/my-project/instances/my-instance")
        .return_once(|r, _| {
            Ok(Response::from(
                model::Instance::new()
                    .set_name(r.name)
                    .set_display_name("My Instance")
                    .set_state(model::InstanceState::Ready),
            ))
        });

    let client = client::BigtableInstanceAdmin::from_stub(mock);
    let instance = client
        .get_instance()
        .set_name(client::BigtableInstanceAdmin::instance_path(
            "my-project",
            "my-instance",
        )?)
        .send()
        .await?;
    assert_eq!(instance.name, "projects/my-project/instances/my-instance");
    assert_eq!(instance.display_name, "My Instance");
    assert_eq!(instance.state, model::InstanceState::Ready);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn delete_cluster_error() -> Result<()> {
    let mut mock = MockBigtableInstanceAdmin::new();
    mock.expect_delete_cluster()
        .withf(|r, _| r.name == "projects/p/instances/i/clusters/c")
        .return_once(|_, _| Err(not_found("cluster not found")));

    let client = client::BigtableInstanceAdmin::from_stub(mock);
    let err = client
        .delete_cluster()
        .set_name("projects/p/instances/i/clusters/c")
        .send()
        .await
        .unwrap_err();
    let status = err.status().cloned();
    assert_eq!(status.map(|s| s.code), Some(Code::NotFound), "{err:?}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn list_tables_by_page() -> Result<()> {
    let mut mock = MockBigtableTableAdmin::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_list_tables()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.parent == "projects/p/instances/i" && r.page_token.is_empty())
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListTablesResponse::new()
                    .set_tables(make_tables(0..2))
                    .set_next_page_token("page-001"),
            ))
        });
    mock.expect_list_tables()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.parent == "projects/p/instances/i" && r.page_token == "page-001")
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListTablesResponse::new().set_tables(make_tables(2..3)),
            ))
        });

    let client = client::BigtableTableAdmin::from_stub(mock);
    let mut pages = client
        .list_tables()
        .set_parent("projects/p/instances/i")
        .by_page();
    let mut got = Vec::new();
    while let Some(page) = pages.next().await {
        got.push(page?);
    }
    assert_eq!(
        got,
        vec![
            model::ListTablesResponse::new()
                .set_tables(make_tables(0..2))
                .set_next_page_token("page-001"),
            model::ListTablesResponse::new().set_tables(make_tables(2..3)),
        ]
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn list_tables_by_item() -> Result<()> {
    let mut mock = MockBigtableTableAdmin::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_list_tables()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token.is_empty() && r.view == model::TableView::NameOnly)
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListTablesResponse::new()
                    .set_tables(make_tables(0..3))
                    .set_next_page_token("page-001"),
            ))
        });
    mock.expect_list_tables()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token == "page-001")
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListTablesResponse::new().set_tables(make_tables(3..5)),
            ))
        });

    let client = client::BigtableTableAdmin::from_stub(mock);
    let mut items = client
        .list_tables()
        .set_parent("projects/p/instances/i")
        .set_view(model::TableView::NameOnly)
        .by_item();
    let mut names = Vec::new();
    while let Some(table) = items.next().await {
        names.push(table?.name);
    }
    let want = make_tables(0..5)
        .into_iter()
        .map(|t| t.name)
        .collect::<Vec<_>>();
    assert_eq!(names, want);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn list_tables_error_ends_stream() -> Result<()> {
    let mut mock = MockBigtableTableAdmin::new();
    mock.expect_list_tables()
        .once()
        .return_once(|_, _| Err(not_found("instance not found")));

    let client = client::BigtableTableAdmin::from_stub(mock);
    let mut items = client
        .list_tables()
        .set_parent("projects/p/instances/i")
        .by_item();
    let first = items.next().await;
    assert!(matches!(first, Some(Err(_))), "{first:?}");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn create_instance_until_done() -> Result<()> {
    let metadata = wkt::Any::from_msg(
        &model::CreateInstanceMetadata::new().set_request_time(wkt::Timestamp::clamp(123, 0)),
    )?;
    let instance = model::Instance::new()
        .set_name("projects/p/instances/i")
        .set_state(model::InstanceState::Ready);
    let response = wkt::Any::from_msg(&instance)?;

    let mut mock = MockBigtableInstanceAdmin::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_create_instance()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| {
            r.parent == "projects/p"
                && r.instance_id == "i"
                && r.clusters.contains_key("c1")
                && r.instance.as_ref().map(|i| i.display_name.as_str()) == Some("Test")
        })
        .return_once(move |_, _| {
            Ok(Response::from(
                longrunning::model::Operation::default()
                    .set_name("operations/op-001")
                    .set_metadata(metadata),
            ))
        });
    mock.expect_get_operation()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.name == "operations/op-001")
        .return_once(|_, _| {
            Ok(Response::from(
                longrunning::model::Operation::default()
                    .set_name("operations/op-001")
                    .set_done(true)
                    .set_result(response),
            ))
        });

    let client = client::BigtableInstanceAdmin::from_stub(mock);
    let got = client
        .create_instance()
        .set_parent("projects/p")
        .set_instance_id("i")
        .set_instance(model::Instance::new().set_display_name("Test"))
        .set_clusters([(
            "c1",
            model::Cluster::new()
                .set_location("projects/p/locations/us-central1-b")
                .set_serve_nodes(3),
        )])
        .poller()
        .until_done()
        .await?;
    assert_eq!(got, instance);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn create_instance_poll_metadata() -> Result<()> {
    let metadata =
        model::CreateInstanceMetadata::new().set_request_time(wkt::Timestamp::clamp(123, 0));
    let any = wkt::Any::from_msg(&metadata)?;

    let mut mock = MockBigtableInstanceAdmin::new();
    mock.expect_create_instance().once().return_once(move |_, _| {
        Ok(Response::from(
            longrunning::model::Operation::default()
                .set_name("operations/op-001")
                .set_metadata(any),
        ))
    });
    mock.expect_get_operation().once().return_once(|_, _| {
        Ok(Response::from(
            longrunning::model::Operation::default()
                .set_name("operations/op-001")
                .set_done(true)
                .set_result(
                    Status::default()
                        .set_code(Code::ResourceExhausted)
                        .set_message("out of quota"),
                ),
        ))
    });

    let client = client::BigtableInstanceAdmin::from_stub(mock);
    let mut poller = client.create_instance().set_parent("projects/p").poller();
    let p0 = poller.poll().await;
    assert!(
        matches!(&p0, Some(PollingResult::InProgress(Some(m))) if *m == metadata),
        "{p0:?}"
    );
    let p1 = poller.poll().await;
    assert!(
        matches!(&p1, Some(PollingResult::Completed(Err(e))) if e.status().map(|s| s.code) == Some(Code::ResourceExhausted)),
        "{p1:?}"
    );
    assert!(poller.poll().await.is_none());
    Ok(())
}

fn make_tables(range: std::ops::Range<i32>) -> Vec<model::Table> {
    range
        .map(|i| model::Table::new().set_name(format!("projects/p/instances/i/tables/table-{i:03}")))
        .collect()
}

fn not_found(message: &str) -> Error {
    Error::service(Status::default().set_code(Code::NotFound).set_message(message))
}
