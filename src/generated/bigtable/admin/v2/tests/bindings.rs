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

//! Verify each RPC uses the HTTP verb, path, query parameters and body from
//! its HTTP binding.

use gapic_bigtable_admin_v2::{client, model};
use httptest::matchers::{AllOf, KV, Matcher, all_of, contains, eq, json_decoded, request, url_decoded};
use httptest::{Expectation, Server, responders::json_encoded};
use serde_json::{Value, json};
use test_case::test_case;

type Result<T> = anyhow::Result<T>;
type Query = &'static [(&'static str, &'static str)];

const INSTANCE: &str = "projects/p/instances/i";
const CLUSTER: &str = "projects/p/instances/i/clusters/c";
const TABLE: &str = "projects/p/instances/i/tables/t";
const OPERATION: &str = "operations/projects/p/instances/i/op-1";

type HttpRequest = http::Request<bytes::Bytes>;

/// Matches the verb and path, each `query` pair, and the JSON body.
///
/// A `null` body matches requests without a payload.
fn binding(verb: &'static str, path: &'static str, query: Query, body: Value) -> AllOf<HttpRequest> {
    let query: Vec<Box<dyn Matcher<[KV<str, str>]>>> = query
        .iter()
        .map(|pair| Box::new(contains(*pair)) as Box<dyn Matcher<[KV<str, str>]>>)
        .collect();
    let body: Box<dyn Matcher<HttpRequest>> = match body {
        Value::Null => Box::new(request::body("")),
        body => Box::new(request::body(json_decoded(eq(body)))),
    };
    all_of(vec![
        Box::new(request::method_path(verb, path)) as Box<dyn Matcher<HttpRequest>>,
        Box::new(request::query(url_decoded(all_of(query)))),
        body,
    ])
}

fn credentials() -> auth::credentials::Credentials {
    auth::credentials::anonymous::Builder::new().build()
}

#[test_case("CreateInstance", "POST", "/v2/projects/p/instances", &[], json!({"parent": "projects/p", "instanceId": "i"}); "create_instance")]
#[test_case("GetInstance", "GET", "/v2/projects/p/instances/i", &[], json!(null); "get_instance")]
#[test_case("ListInstances", "GET", "/v2/projects/p/instances", &[("pageToken", "t1")], json!(null); "list_instances")]
#[test_case("UpdateInstance", "PUT", "/v2/projects/p/instances/i", &[], json!({"name": INSTANCE, "displayName": "Updated"}); "update_instance")]
#[test_case("DeleteInstance", "DELETE", "/v2/projects/p/instances/i", &[], json!(null); "delete_instance")]
#[test_case("CreateCluster", "POST", "/v2/projects/p/instances/i/clusters", &[("clusterId", "c")], json!({"serveNodes": 3}); "create_cluster")]
#[test_case("GetCluster", "GET", "/v2/projects/p/instances/i/clusters/c", &[], json!(null); "get_cluster")]
#[test_case("ListClusters", "GET", "/v2/projects/p/instances/i/clusters", &[("pageToken", "t1")], json!(null); "list_clusters")]
#[test_case("UpdateCluster", "PUT", "/v2/projects/p/instances/i/clusters/c", &[], json!({"name": CLUSTER, "serveNodes": 5}); "update_cluster")]
#[test_case("DeleteCluster", "DELETE", "/v2/projects/p/instances/i/clusters/c", &[], json!(null); "delete_cluster")]
#[test_case("GetOperation", "GET", "/v2/operations/projects/p/instances/i/op-1", &[], json!(null); "get_operation")]
#[test_case("CancelOperation", "POST", "/v2/operations/projects/p/instances/i/op-1:cancel", &[], json!({"name": OPERATION}); "cancel_operation")]
#[test_case("DeleteOperation", "DELETE", "/v2/operations/projects/p/instances/i/op-1", &[], json!(null); "delete_operation")]
#[tokio::test]
async fn instance_admin(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = Server::run();
    server.expect(Expectation::matching(binding(verb, path, query, body)).respond_with(json_encoded(json!({}))));
    let client = client::BigtableInstanceAdmin::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(credentials())
        .build()
        .await?;
    match rpc {
        "CreateInstance" => {
            client.create_instance().set_parent("projects/p").set_instance_id("i").send().await?;
        }
        "GetInstance" => {
            client.get_instance().set_name(INSTANCE).send().await?;
        }
        "ListInstances" => {
            client.list_instances().set_parent("projects/p").set_page_token("t1").send().await?;
        }
        "UpdateInstance" => {
            client.update_instance().set_name(INSTANCE).set_display_name("Updated").send().await?;
        }
        "DeleteInstance" => {
            client.delete_instance().set_name(INSTANCE).send().await?;
        }
        "CreateCluster" => {
            client
                .create_cluster()
                .set_parent(INSTANCE)
                .set_cluster_id("c")
                .set_cluster(model::Cluster::new().set_serve_nodes(3))
                .send()
                .await?;
        }
        "GetCluster" => {
            client.get_cluster().set_name(CLUSTER).send().await?;
        }
        "ListClusters" => {
            client.list_clusters().set_parent(INSTANCE).set_page_token("t1").send().await?;
        }
        "UpdateCluster" => {
            client.update_cluster().set_name(CLUSTER).set_serve_nodes(5).send().await?;
        }
        "DeleteCluster" => {
            client.delete_cluster().set_name(CLUSTER).send().await?;
        }
        "GetOperation" => {
            client.get_operation().set_name(OPERATION).send().await?;
        }
        "CancelOperation" => {
            client.cancel_operation().set_name(OPERATION).send().await?;
        }
        "DeleteOperation" => {
            client.delete_operation().set_name(OPERATION).send().await?;
        }
        other => panic!("unexpected RPC {other}"),
    }
    Ok(())
}

#[test_case("CreateTable", "POST", "/v2/projects/p/instances/i/tables", &[], json!({"parent": INSTANCE, "tableId": "t"}); "create_table")]
#[test_case("ListTables", "GET", "/v2/projects/p/instances/i/tables", &[("view", "NAME_ONLY"), ("pageToken", "t1")], json!(null); "list_tables")]
#[test_case("GetTable", "GET", "/v2/projects/p/instances/i/tables/t", &[("view", "SCHEMA_VIEW")], json!(null); "get_table")]
#[test_case("DeleteTable", "DELETE", "/v2/projects/p/instances/i/tables/t", &[], json!(null); "delete_table")]
#[test_case("ModifyColumnFamilies", "POST", "/v2/projects/p/instances/i/tables/t:modifyColumnFamilies", &[], json!({"name": TABLE, "modifications": [{"id": "cf1", "drop": true}]}); "modify_column_families")]
#[test_case("DropRowRange", "POST", "/v2/projects/p/instances/i/tables/t:dropRowRange", &[], json!({"name": TABLE, "deleteAllDataFromTable": true}); "drop_row_range")]
#[tokio::test]
async fn table_admin(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = Server::run();
    server.expect(Expectation::matching(binding(verb, path, query, body)).respond_with(json_encoded(json!({}))));
    let client = client::BigtableTableAdmin::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(credentials())
        .build()
        .await?;
    match rpc {
        "CreateTable" => {
            client.create_table().set_parent(INSTANCE).set_table_id("t").send().await?;
        }
        "ListTables" => {
            client
                .list_tables()
                .set_parent(INSTANCE)
                .set_view(model::TableView::NameOnly)
                .set_page_token("t1")
                .send()
                .await?;
        }
        "GetTable" => {
            client.get_table().set_name(TABLE).set_view(model::TableView::SchemaView).send().await?;
        }
        "DeleteTable" => {
            client.delete_table().set_name(TABLE).send().await?;
        }
        "ModifyColumnFamilies" => {
            client
                .modify_column_families()
                .set_name(TABLE)
                .set_modifications([model::Modification::new().set_id("cf1").set_drop(true)])
                .send()
                .await?;
        }
        "DropRowRange" => {
            client.drop_row_range().set_name(TABLE).set_delete_all_data_from_table(true).send().await?;
        }
        other => panic!("unexpected RPC {other}"),
    }
    Ok(())
}
