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

use gapic_firestore_v1::{client, model};
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::json;

type Result<T> = anyhow::Result<T>;

const DOCUMENTS: &str = "projects/p/databases/d/documents";

async fn firestore(server: &Server) -> Result<client::Firestore> {
    use auth::credentials::anonymous::Builder as Anonymous;
    let client = client::Firestore::builder()
        .with_endpoint(format!("http://{}", server.addr()))
        .with_credentials(Anonymous::new().build())
        .build()
        .await?;
    Ok(client)
}

#[tokio::test]
async fn get_nested_document() -> Result<()> {
    let name = format!("{DOCUMENTS}/cities/SF/landmarks/golden-gate");
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", format!("/v1/{name}")),
            request::query(url_decoded(contains(("mask.fieldPaths", "name")))),
            request::query(url_decoded(contains(("mask.fieldPaths", "opened")))),
        ])
        .respond_with(json_encoded(json!({
            "name": name,
            "fields": {
                "name": {"stringValue": "Golden Gate Bridge"},
                "opened": {"integerValue": "1937"},
                "closed": {"nullValue": null},
                "location": {"mapValue": {"fields": {
                    "lat": {"doubleValue": 37.8199},
                }}},
            },
            "updateTime": "2023-11-14T22:13:20Z",
        }))),
    );
    let client = firestore(&server).await?;
    let doc = client
        .get_document()
        .set_name(&name)
        .set_mask(model::DocumentMask::new().set_field_paths(["name", "opened"]))
        .send()
        .await?;
    assert_eq!(doc.name, name);
    assert_eq!(
        doc.fields["name"].string_value().map(String::as_str),
        Some("Golden Gate Bridge")
    );
    assert_eq!(doc.fields["opened"].integer_value(), Some(&1937));
    assert_eq!(
        doc.fields["closed"].value_type,
        Some(model::value::ValueType::NullValue(model::NullValue))
    );
    let location = doc.fields["location"].map_value().expect("location is a map");
    assert_eq!(location.fields["lat"].double_value(), Some(&37.8199));
    assert_eq!(doc.update_time, Some(wkt::Timestamp::clamp(1_700_000_000, 0)));
    Ok(())
}

#[tokio::test]
async fn document_ids_are_percent_encoded() -> Result<()> {
    let name = format!("{DOCUMENTS}/cities/a#b");
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", format!("/v1/{DOCUMENTS}/cities/a%23b")))
            .respond_with(json_encoded(json!({"name": name}))),
    );
    server.expect(
        Expectation::matching(request::method_path("DELETE", format!("/v1/{DOCUMENTS}/cities/a%23b")))
            .respond_with(json_encoded(json!({}))),
    );
    let client = firestore(&server).await?;
    let doc = client.get_document().set_name(&name).send().await?;
    assert_eq!(doc.name, name);
    client.delete_document().set_name(&name).send().await?;
    Ok(())
}

#[tokio::test]
async fn get_document_requires_document_path() -> Result<()> {
    let server = Server::run();
    let client = firestore(&server).await?;
    let err = client
        .get_document()
        .set_name("projects/p/databases/d")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_binding(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn create_document_with_id() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", format!("/v1/{DOCUMENTS}/cities")),
            request::query(url_decoded(contains(("documentId", "LA")))),
            request::body(json_decoded(eq(json!({
                "fields": {
                    "population": {"integerValue": "3898747"},
                    "capital": {"booleanValue": false},
                },
            })))),
        ])
        .respond_with(json_encoded(json!({
            "name": format!("{DOCUMENTS}/cities/LA"),
        }))),
    );
    let client = firestore(&server).await?;
    let doc = client
        .create_document()
        .set_parent(DOCUMENTS)
        .set_collection_id("cities")
        .set_document_id("LA")
        .set_document(model::Document::new().set_fields([
            ("population", model::Value::new().set_integer_value(3_898_747)),
            ("capital", model::Value::new().set_boolean_value(false)),
        ]))
        .send()
        .await?;
    assert_eq!(doc.name, format!("{DOCUMENTS}/cities/LA"));
    Ok(())
}

#[tokio::test]
async fn update_document_with_mask_and_precondition() -> Result<()> {
    let name = format!("{DOCUMENTS}/cities/LA");
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("PATCH", format!("/v1/{name}")),
            request::query(url_decoded(contains(("updateMask.fieldPaths", "population")))),
            request::query(url_decoded(contains(("currentDocument.exists", "true")))),
            request::body(json_decoded(eq(json!({
                "name": name,
                "fields": {"population": {"integerValue": "4000000"}},
            })))),
        ])
        .respond_with(json_encoded(json!({
            "name": name,
            "fields": {"population": {"integerValue": "4000000"}},
        }))),
    );
    let client = firestore(&server).await?;
    let doc = client
        .update_document()
        .set_document(
            model::Document::new()
                .set_name(&name)
                .set_fields([("population", model::Value::new().set_integer_value(4_000_000))]),
        )
        .set_update_mask(model::DocumentMask::new().set_field_paths(["population"]))
        .set_current_document(model::Precondition::new().set_exists(true))
        .send()
        .await?;
    assert_eq!(doc.fields["population"].integer_value(), Some(&4_000_000));
    Ok(())
}

#[tokio::test]
async fn update_document_missing_document() -> Result<()> {
    let server = Server::run();
    let client = firestore(&server).await?;
    let err = client.update_document().send().await.unwrap_err();
    assert!(err.is_binding(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn delete_document_precondition() -> Result<()> {
    let name = format!("{DOCUMENTS}/cities/LA");
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("DELETE", format!("/v1/{name}")),
            request::query(url_decoded(contains(("currentDocument.exists", "true")))),
        ])
        .respond_with(json_encoded(json!({}))),
    );
    let client = firestore(&server).await?;
    client
        .delete_document()
        .set_name(&name)
        .set_current_document(model::Precondition::new().set_exists(true))
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn begin_transaction_bytes() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/v1/projects/p/databases/d/documents:beginTransaction"),
            request::body(json_decoded(eq(json!({
                "database": "projects/p/databases/d",
                "options": {"readOnly": {}},
            })))),
        ])
        .respond_with(json_encoded(json!({"transaction": "dHgtMQ=="}))),
    );
    let client = firestore(&server).await?;
    let response = client
        .begin_transaction()
        .set_database("projects/p/databases/d")
        .set_options(model::TransactionOptions::new().set_read_only(model::ReadOnly::new()))
        .send()
        .await?;
    assert_eq!(response.transaction, bytes::Bytes::from_static(b"tx-1"));
    Ok(())
}

#[tokio::test]
async fn run_query_returns_all_responses() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", format!("/v1/{DOCUMENTS}:runQuery")),
            request::body(json_decoded(eq(json!({
                "parent": DOCUMENTS,
                "structuredQuery": {
                    "from": [{"collectionId": "cities"}],
                    "where": {"fieldFilter": {
                        "field": {"fieldPath": "capital"},
                        "op": "EQUAL",
                        "value": {"booleanValue": true},
                    }},
                    "limit": 10,
                },
            })))),
        ])
        .respond_with(json_encoded(json!([
            {"document": {"name": format!("{DOCUMENTS}/cities/DC")}, "readTime": "2023-11-14T22:13:20Z"},
            {"document": {"name": format!("{DOCUMENTS}/cities/TOK")}, "readTime": "2023-11-14T22:13:20Z"},
            {"readTime": "2023-11-14T22:13:20Z"},
        ]))),
    );
    let client = firestore(&server).await?;
    let query = model::StructuredQuery::new()
        .set_from([model::CollectionSelector::new().set_collection_id("cities")])
        .set_where(
            model::Filter::new().set_field_filter(
                model::FieldFilter::new()
                    .set_field(model::FieldReference::new().set_field_path("capital"))
                    .set_op(model::FieldOperator::Equal)
                    .set_value(model::Value::new().set_boolean_value(true)),
            ),
        )
        .set_limit(10);
    let responses = client
        .run_query()
        .set_parent(DOCUMENTS)
        .set_structured_query(query)
        .send()
        .await?;
    assert_eq!(responses.len(), 3, "{responses:?}");
    assert!(responses[2].document.is_none(), "{responses:?}");
    Ok(())
}

#[tokio::test]
async fn list_collection_ids_by_page() -> Result<()> {
    let parent = format!("{DOCUMENTS}/cities/SF");
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", format!("/v1/{parent}:listCollectionIds")),
            request::body(json_decoded(eq(json!({"parent": parent})))),
        ])
        .respond_with(json_encoded(json!({
            "collectionIds": ["landmarks", "neighborhoods"],
            "nextPageToken": "p2",
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", format!("/v1/{parent}:listCollectionIds")),
            request::body(json_decoded(eq(json!({"parent": parent, "pageToken": "p2"})))),
        ])
        .respond_with(json_encoded(json!({"collectionIds": ["parks"]}))),
    );
    let client = firestore(&server).await?;
    let mut pages = client.list_collection_ids().set_parent(&parent).by_page();
    let mut ids = Vec::new();
    while let Some(page) = pages.next().await {
        ids.extend(page?.collection_ids);
    }
    assert_eq!(ids, ["landmarks", "neighborhoods", "parks"]);
    Ok(())
}
