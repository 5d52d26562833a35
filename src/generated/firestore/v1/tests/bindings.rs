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

use gapic_firestore_v1::{client, model};
use httptest::matchers::{AllOf, KV, Matcher, all_of, contains, eq, json_decoded, request, url_decoded};
use httptest::{Expectation, Server, responders::json_encoded};
use serde_json::{Value, json};
use test_case::test_case;

type Result<T> = anyhow::Result<T>;
type Query = &'static [(&'static str, &'static str)];
type HttpRequest = http::Request<bytes::Bytes>;

const DATABASE: &str = "projects/p/databases/d";
const DOCUMENTS: &str = "projects/p/databases/d/documents";
const SF: &str = "projects/p/databases/d/documents/cities/SF";

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

fn mask() -> model::DocumentMask {
    model::DocumentMask::new().set_field_paths(["name"])
}

fn from_cities() -> model::StructuredQuery {
    model::StructuredQuery::new().set_from([model::CollectionSelector::new().set_collection_id("cities")])
}

#[test_case("GetDocument", "GET", "/v1/projects/p/databases/d/documents/cities/SF", &[("mask.fieldPaths", "name"), ("transaction", "dHgx")], json!(null); "get_document")]
#[test_case("ListDocuments", "GET", "/v1/projects/p/databases/d/documents/cities", &[("pageSize", "5"), ("pageToken", "t1"), ("orderBy", "name"), ("showMissing", "true")], json!(null); "list_documents")]
#[test_case("CreateDocument", "POST", "/v1/projects/p/databases/d/documents/cities", &[("documentId", "SF"), ("mask.fieldPaths", "name")], json!({"fields": {"name": {"stringValue": "San Francisco"}}}); "create_document")]
#[test_case("UpdateDocument", "PATCH", "/v1/projects/p/databases/d/documents/cities/SF", &[("updateMask.fieldPaths", "name"), ("currentDocument.exists", "true")], json!({"name": SF, "fields": {"name": {"stringValue": "San Francisco"}}}); "update_document")]
#[test_case("DeleteDocument", "DELETE", "/v1/projects/p/databases/d/documents/cities/SF", &[("currentDocument.exists", "true")], json!(null); "delete_document")]
#[test_case("BatchGetDocuments", "POST", "/v1/projects/p/databases/d/documents:batchGet", &[], json!({"database": DATABASE, "documents": [SF]}); "batch_get_documents")]
#[test_case("BeginTransaction", "POST", "/v1/projects/p/databases/d/documents:beginTransaction", &[], json!({"database": DATABASE, "options": {"readOnly": {}}}); "begin_transaction")]
#[test_case("Commit", "POST", "/v1/projects/p/databases/d/documents:commit", &[], json!({"database": DATABASE, "writes": [{"delete": SF}], "transaction": "dHgx"}); "commit")]
#[test_case("Rollback", "POST", "/v1/projects/p/databases/d/documents:rollback", &[], json!({"database": DATABASE, "transaction": "dHgx"}); "rollback")]
#[test_case("RunQuery", "POST", "/v1/projects/p/databases/d/documents:runQuery", &[], json!({"parent": DOCUMENTS, "structuredQuery": {"from": [{"collectionId": "cities"}]}}); "run_query")]
#[test_case("PartitionQuery", "POST", "/v1/projects/p/databases/d/documents:partitionQuery", &[], json!({"parent": DOCUMENTS, "structuredQuery": {"from": [{"collectionId": "cities"}]}, "partitionCount": "8", "pageSize": 4}); "partition_query")]
#[test_case("ListCollectionIds", "POST", "/v1/projects/p/databases/d/documents/cities/SF:listCollectionIds", &[], json!({"parent": SF, "pageSize": 3, "pageToken": "t1"}); "list_collection_ids")]
#[test_case("BatchWrite", "POST", "/v1/projects/p/databases/d/documents:batchWrite", &[], json!({"database": DATABASE, "writes": [{"delete": SF}], "labels": {"team": "maps"}}); "batch_write")]
#[tokio::test]
async fn firestore(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    // Server-streaming RPCs return a JSON array of messages.
    let response = match rpc {
        "BatchGetDocuments" | "RunQuery" => json!([]),
        _ => json!({}),
    };
    let server = Server::run();
    server.expect(Expectation::matching(binding(verb, path, query, body)).respond_with(json_encoded(response)));
    let client = client::Firestore::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(auth::credentials::anonymous::Builder::new().build())
        .build()
        .await?;
    let transaction = bytes::Bytes::from_static(b"tx1");
    let name = model::Value::new().set_string_value("San Francisco");
    match rpc {
        "GetDocument" => {
            client.get_document().set_name(SF).set_mask(mask()).set_transaction(transaction).send().await?;
        }
        "ListDocuments" => {
            client
                .list_documents()
                .set_parent(DOCUMENTS)
                .set_collection_id("cities")
                .set_page_size(5)
                .set_page_token("t1")
                .set_order_by("name")
                .set_show_missing(true)
                .send()
                .await?;
        }
        "CreateDocument" => {
            client
                .create_document()
                .set_parent(DOCUMENTS)
                .set_collection_id("cities")
                .set_document_id("SF")
                .set_document(model::Document::new().set_fields([("name", name)]))
                .set_mask(mask())
                .send()
                .await?;
        }
        "UpdateDocument" => {
            client
                .update_document()
                .set_document(model::Document::new().set_name(SF).set_fields([("name", name)]))
                .set_update_mask(mask())
                .set_current_document(model::Precondition::new().set_exists(true))
                .send()
                .await?;
        }
        "DeleteDocument" => {
            client
                .delete_document()
                .set_name(SF)
                .set_current_document(model::Precondition::new().set_exists(true))
                .send()
                .await?;
        }
        "BatchGetDocuments" => {
            client.batch_get_documents().set_database(DATABASE).set_documents([SF]).send().await?;
        }
        "BeginTransaction" => {
            client
                .begin_transaction()
                .set_database(DATABASE)
                .set_options(model::TransactionOptions::new().set_read_only(model::ReadOnly::new()))
                .send()
                .await?;
        }
        "Commit" => {
            client
                .commit()
                .set_database(DATABASE)
                .set_writes([model::Write::new().set_delete(SF)])
                .set_transaction(transaction)
                .send()
                .await?;
        }
        "Rollback" => {
            client.rollback().set_database(DATABASE).set_transaction(transaction).send().await?;
        }
        "RunQuery" => {
            client.run_query().set_parent(DOCUMENTS).set_structured_query(from_cities()).send().await?;
        }
        "PartitionQuery" => {
            client
                .partition_query()
                .set_parent(DOCUMENTS)
                .set_structured_query(from_cities())
                .set_partition_count(8)
                .set_page_size(4)
                .send()
                .await?;
        }
        "ListCollectionIds" => {
            client.list_collection_ids().set_parent(SF).set_page_size(3).set_page_token("t1").send().await?;
        }
        "BatchWrite" => {
            client
                .batch_write()
                .set_database(DATABASE)
                .set_writes([model::Write::new().set_delete(SF)])
                .set_labels([("team", "maps")])
                .send()
                .await?;
        }
        other => panic!("unexpected RPC {other}"),
    }
    Ok(())
}
