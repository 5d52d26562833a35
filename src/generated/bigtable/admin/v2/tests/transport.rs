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


//! Verify the HTTP transport sends the expected requests.

use gapic_bigtable_admin_v2::{client, model};
use gax::error::rpc::Code;
use httptest::{Expectation, Server, matchers::*, responders::*};
use lro::Poller;
use serde_json::json;
use std::time::Duration;

type Result<T> = anyhow::Result<T>;

async fn instance_admin(server: &Server) -> Result<client::BigtableInstanceAdmin> {
    use auth::credentials::anonymous::Builder as Anonymous;
    let client = client::BigtableInstanceAdmin::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(Anonymous::new().build())
        .with_polling_backoff_policy(
            gax::exponential_backoff::ExponentialBackoffBuilder::new()
                .with_initial_delay(Duration::from_millis(1))
                .with_maximum_delay(Duration::from_millis(1))
                .build()?,
        )
        .build()
        .await?;
    Ok(client)
}

async fn table_admin(server: &Server, client_config: Option<&str>) -> Result<client::BigtableTableAdmin> {
    use auth::credentials::anonymous::Builder as Anonymous;
    let builder = client::BigtableTableAdmin::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(Anonymous::new().build());
    let builder = match client_config {
        Some(c) => builder.with_client_config(c),
        None => builder,
    };
    Ok(builder.build().await?)
}

#[tokio::test]
async fn get_instance() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/v2/projects/p/instances/i"))
            .respond_with(json_encoded(json!({
                "name": "projects/p/instances/i",
                "displayName": "Test Instance",
                "state": "READY",
                "type": "PRODUCTION",
                "labels": {"env": "test"},
            }))),
    );
    let client = instance_admin(&server).await?;
    let instance = client.get_instance().set_name("projects/p/instances/i").send().await?;
    assert_eq!(
        instance,
        model::Instance::new()
            .set_name("projects/p/instances/i")
            .set_display_name("Test Instance")
            .set_state(model::InstanceState::Ready)
            .set_type(model::InstanceType::Production)
            .set_labels([("env", "test")])
    );
    Ok(())
}

#[tokio::test]
async fn get_instance_bad_name() -> Result<()> {
    let server = Server::run();
    let client = instance_admin(&server).await?;
    let err = client
        .get_instance()
        .set_name("projects/p/clusters/c")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_binding(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn get_instance_not_found() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/v2/projects/p/instances/i"))
            .respond_with(status_code(404).body(
                json!({"error": {
                    "code": 404,
                    "message": "instance not found",
                    "status": "NOT_FOUND",
                }})
                .to_string(),
            )),
    );
    let client = instance_admin(&server).await?;
    let err = client
        .get_instance()
        .set_name("projects/p/instances/i")
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.code), Some(Code::NotFound), "{err:?}");
    assert_eq!(err.http_status_code(), Some(404));
    Ok(())
}

#[tokio::test]
async fn update_instance_sends_full_body() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("PUT", "/v2/projects/p/instances/i"),
            request::body(json_decoded(eq(json!({
                "name": "projects/p/instances/i",
                "displayName": "Renamed",
                "type": "DEVELOPMENT",
            })))),
        ])
        .respond_with(json_encoded(json!({
            "name": "projects/p/instances/i",
            "displayName": "Renamed",
        }))),
    );
    let client = instance_admin(&server).await?;
    let instance = client
        .update_instance()
        .set_name("projects/p/instances/i")
        .set_display_name("Renamed")
        .set_type(model::InstanceType::Development)
        .send()
        .await?;
    assert_eq!(instance.display_name, "Renamed");
    Ok(())
}

#[tokio::test]
async fn create_cluster_until_done() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/v2/projects/p/instances/i/clusters"),
            request::query(url_decoded(contains(("clusterId", "c1")))),
            request::body(json_decoded(eq(json!({
                "location": "projects/p/locations/us-central1-b",
                "serveNodes": 3,
            })))),
        ])
        .respond_with(json_encoded(json!({
            "name": "operations/projects/p/instances/i/clusters/c1/locations/us-central1-b/operations/op-001",
            "metadata": {
                "@type": "type.googleapis.com/google.bigtable.admin.v2.CreateClusterMetadata",
                "requestTime": "2026-01-01T00:00:00Z",
            },
        }))),
    );
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/v2/operations/projects/p/instances/i/clusters/c1/locations/us-central1-b/operations/op-001",
        ))
        .respond_with(json_encoded(json!({
            "name": "operations/projects/p/instances/i/clusters/c1/locations/us-central1-b/operations/op-001",
            "done": true,
            "response": {
                "@type": "type.googleapis.com/google.bigtable.admin.v2.Cluster",
                "name": "projects/p/instances/i/clusters/c1",
                "state": "READY",
                "serveNodes": 3,
            },
        }))),
    );
    let client = instance_admin(&server).await?;
    let cluster = client
        .create_cluster()
        .set_parent("projects/p/instances/i")
        .set_cluster_id("c1")
        .set_cluster(
            model::Cluster::new()
                .set_location("projects/p/locations/us-central1-b")
                .set_serve_nodes(3),
        )
        .poller()
        .until_done()
        .await?;
    assert_eq!(
        cluster,
        model::Cluster::new()
            .set_name("projects/p/instances/i/clusters/c1")
            .set_state(model::ClusterState::Ready)
            .set_serve_nodes(3)
    );
    Ok(())
}

#[tokio::test]
async fn list_tables_default_page_size() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v2/projects/p/instances/i/tables"),
            request::query(url_decoded(contains(("pageSize", "100")))),
            request::query(url_decoded(contains(("view", "SCHEMA_VIEW")))),
        ])
        .respond_with(json_encoded(json!({
            "tables": [{"name": "projects/p/instances/i/tables/t1"}],
        }))),
    );
    let client = table_admin(&server, None).await?;
    let response = client
        .list_tables()
        .set_parent("projects/p/instances/i")
        .set_view(model::TableView::SchemaView)
        .send()
        .await?;
    assert_eq!(
        response,
        model::ListTablesResponse::new()
            .set_tables([model::Table::new().set_name("projects/p/instances/i/tables/t1")])
    );
    Ok(())
}

#[tokio::test]
async fn list_tables_explicit_page_size() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v2/projects/p/instances/i/tables"),
            request::query(url_decoded(contains(("pageSize", "7")))),
            request::query(url_decoded(not(contains(key("view"))))),
        ])
        .respond_with(json_encoded(json!({}))),
    );
    let client = table_admin(&server, None).await?;
    let response = client
        .list_tables()
        .set_parent("projects/p/instances/i")
        .set_page_size(7)
        .send()
        .await?;
    assert_eq!(response, model::ListTablesResponse::new());
    Ok(())
}

#[tokio::test]
async fn list_tables_client_config_page_size() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v2/projects/p/instances/i/tables"),
            request::query(url_decoded(contains(("pageSize", "25")))),
        ])
        .respond_with(json_encoded(json!({}))),
    );
    let config = r#"{"interfaces": {"google.bigtable.admin.v2.BigtableTableAdmin": {
        "methods": {"ListTables": {"page_size": 25}}}}}"#;
    let client = table_admin(&server, Some(config)).await?;
    client
        .list_tables()
        .set_parent("projects/p/instances/i")
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn invalid_client_config() -> Result<()> {
    let server = Server::run();
    let err = table_admin(&server, Some("not json"))
        .await
        .map(|_| ())
        .unwrap_err();
    let err = err.downcast::<gax::client_builder::Error>()?;
    assert!(err.is_config(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn drop_row_range_encodes_bytes() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/v2/projects/p/instances/i/tables/t:dropRowRange"),
            request::body(json_decoded(eq(json!({
                "name": "projects/p/instances/i/tables/t",
                "rowKeyPrefix": "dXNlcg==",
            })))),
        ])
        .respond_with(json_encoded(json!({}))),
    );
    let client = table_admin(&server, None).await?;
    client
        .drop_row_range()
        .set_name("projects/p/instances/i/tables/t")
        .set_row_key_prefix(bytes::Bytes::from_static(b"user"))
        .send()
        .await?;
    Ok(())
}
