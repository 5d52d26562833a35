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

use gapic_firestore_admin_v1::{client, model};
use httptest::matchers::{AllOf, KV, Matcher, all_of, contains, eq, json_decoded, request, url_decoded};
use httptest::{Expectation, Server, responders::json_encoded};
use serde_json::{Value, json};
use test_case::test_case;

type Result<T> = anyhow::Result<T>;
type Query = &'static [(&'static str, &'static str)];
type HttpRequest = http::Request<bytes::Bytes>;

const DATABASE: &str = "projects/p/databases/d";
const GROUP: &str = "projects/p/databases/d/collectionGroups/cities";
const INDEX: &str = "projects/p/databases/d/collectionGroups/cities/indexes/idx-1";
const FIELD: &str = "projects/p/databases/d/collectionGroups/cities/fields/population";
const OPERATION: &str = "projects/p/databases/d/operations/op-1";

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

#[test_case("CreateIndex", "POST", "/v1/projects/p/databases/d/collectionGroups/cities/indexes", &[], json!({"queryScope": "COLLECTION", "fields": [{"fieldPath": "state", "order": "DESCENDING"}]}); "create_index")]
#[test_case("ListIndexes", "GET", "/v1/projects/p/databases/d/collectionGroups/cities/indexes", &[("filter", "state=READY"), ("pageSize", "7"), ("pageToken", "t1")], json!(null); "list_indexes")]
#[test_case("GetIndex", "GET", "/v1/projects/p/databases/d/collectionGroups/cities/indexes/idx-1", &[], json!(null); "get_index")]
#[test_case("DeleteIndex", "DELETE", "/v1/projects/p/databases/d/collectionGroups/cities/indexes/idx-1", &[], json!(null); "delete_index")]
#[test_case("GetField", "GET", "/v1/projects/p/databases/d/collectionGroups/cities/fields/population", &[], json!(null); "get_field")]
#[test_case("UpdateField", "PATCH", "/v1/projects/p/databases/d/collectionGroups/cities/fields/population", &[("updateMask", "indexConfig")], json!({"name": FIELD}); "update_field")]
#[test_case("ListFields", "GET", "/v1/projects/p/databases/d/collectionGroups/cities/fields", &[("filter", "indexConfig.usesAncestorConfig:false"), ("pageToken", "t1")], json!(null); "list_fields")]
#[test_case("ExportDocuments", "POST", "/v1/projects/p/databases/d:exportDocuments", &[], json!({"name": DATABASE, "collectionIds": ["cities"], "outputUriPrefix": "gs://bucket/export"}); "export_documents")]
#[test_case("ImportDocuments", "POST", "/v1/projects/p/databases/d:importDocuments", &[], json!({"name": DATABASE, "collectionIds": ["cities"], "inputUriPrefix": "gs://bucket/export"}); "import_documents")]
#[test_case("GetOperation", "GET", "/v1/projects/p/databases/d/operations/op-1", &[], json!(null); "get_operation")]
#[test_case("CancelOperation", "POST", "/v1/projects/p/databases/d/operations/op-1:cancel", &[], json!({"name": OPERATION}); "cancel_operation")]
#[test_case("DeleteOperation", "DELETE", "/v1/projects/p/databases/d/operations/op-1", &[], json!(null); "delete_operation")]
#[tokio::test]
async fn firestore_admin(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = Server::run();
    server.expect(Expectation::matching(binding(verb, path, query, body)).respond_with(json_encoded(json!({}))));
    let client = client::FirestoreAdmin::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(auth::credentials::anonymous::Builder::new().build())
        .build()
        .await?;
    match rpc {
        "CreateIndex" => {
            let index = model::Index::new()
                .set_query_scope(model::QueryScope::Collection)
                .set_fields([model::IndexField::new().set_field_path("state").set_order(model::Order::Descending)]);
            client.create_index().set_parent(GROUP).set_index(index).send().await?;
        }
        "ListIndexes" => {
            client
                .list_indexes()
                .set_parent(GROUP)
                .set_filter("state=READY")
                .set_page_size(7)
                .set_page_token("t1")
                .send()
                .await?;
        }
        "GetIndex" => {
            client.get_index().set_name(INDEX).send().await?;
        }
        "DeleteIndex" => {
            client.delete_index().set_name(INDEX).send().await?;
        }
        "GetField" => {
            client.get_field().set_name(FIELD).send().await?;
        }
        "UpdateField" => {
            client
                .update_field()
                .set_field(model::Field::new().set_name(FIELD))
                .set_update_mask(wkt::FieldMask::default().set_paths(["indexConfig"]))
                .send()
                .await?;
        }
        "ListFields" => {
            client
                .list_fields()
                .set_parent(GROUP)
                .set_filter("indexConfig.usesAncestorConfig:false")
                .set_page_token("t1")
                .send()
                .await?;
        }
        "ExportDocuments" => {
            client
                .export_documents()
                .set_name(DATABASE)
                .set_collection_ids(["cities"])
                .set_output_uri_prefix("gs://bucket/export")
                .send()
                .await?;
        }
        "ImportDocuments" => {
            client
                .import_documents()
                .set_name(DATABASE)
                .set_collection_ids(["cities"])
                .set_input_uri_prefix("gs://bucket/export")
                .send()
                .await?;
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
