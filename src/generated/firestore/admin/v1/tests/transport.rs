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

use gapic_firestore_admin_v1::{client, model};
use httptest::{Expectation, Server, matchers::*, responders::*};
use lro::Poller;
use serde_json::json;
use std::time::Duration;

type Result<T> = anyhow::Result<T>;

const GROUP: &str = "projects/p/databases/d/collectionGroups/cities";

async fn admin(server: &Server) -> Result<client::FirestoreAdmin> {
    use auth::credentials::anonymous::Builder as Anonymous;
    let client = client::FirestoreAdmin::builder()
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

#[test]
fn resource_paths() -> Result<()> {
    type Admin = client::FirestoreAdmin;
    assert_eq!(Admin::database_path("p", "(default)")?, "projects/p/databases/(default)");
    assert_eq!(
        Admin::collection_group_path("p", "(default)", "cities")?,
        "projects/p/databases/(default)/collectionGroups/cities"
    );
    assert_eq!(
        Admin::field_path("p", "(default)", "cities", "population")?,
        "projects/p/databases/(default)/collectionGroups/cities/fields/population"
    );
    assert_eq!(
        Admin::index_path("p", "(default)", "cities", "idx-1")?,
        "projects/p/databases/(default)/collectionGroups/cities/indexes/idx-1"
    );
    assert!(Admin::database_path("p", "").is_err());
    Ok(())
}

#[tokio::test]
async fn create_index_until_done() -> Result<()> {
    let operation = "projects/p/databases/d/operations/op-001";
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", format!("/v1/{GROUP}/indexes")),
            request::body(json_decoded(eq(json!({
                "queryScope": "COLLECTION",
                "fields": [
                    {"fieldPath": "state", "order": "ASCENDING"},
                    {"fieldPath": "tags", "arrayConfig": "CONTAINS"},
                ],
            })))),
        ])
        .respond_with(json_encoded(json!({
            "name": operation,
            "metadata": {
                "@type": "type.googleapis.com/google.firestore.admin.v1.IndexOperationMetadata",
                "index": format!("{GROUP}/indexes/idx-1"),
                "state": "INITIALIZING",
            },
        }))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", format!("/v1/{operation}")))
            .respond_with(json_encoded(json!({
                "name": operation,
                "done": true,
                "response": {
                    "@type": "type.googleapis.com/google.firestore.admin.v1.Index",
                    "name": format!("{GROUP}/indexes/idx-1"),
                    "queryScope": "COLLECTION",
                    "state": "READY",
                },
            }))),
    );
    let client = admin(&server).await?;
    let index = client
        .create_index()
        .set_parent(GROUP)
        .set_index(
            model::Index::new()
                .set_query_scope(model::QueryScope::Collection)
                .set_fields([
                    model::IndexField::new()
                        .set_field_path("state")
                        .set_order(model::Order::Ascending),
                    model::IndexField::new()
                        .set_field_path("tags")
                        .set_array_config(model::ArrayConfig::Contains),
                ]),
        )
        .poller()
        .until_done()
        .await?;
    assert_eq!(
        index,
        model::Index::new()
            .set_name(format!("{GROUP}/indexes/idx-1"))
            .set_query_scope(model::QueryScope::Collection)
            .set_state(model::IndexState::Ready)
    );
    Ok(())
}

#[tokio::test]
async fn list_indexes_with_filter() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", format!("/v1/{GROUP}/indexes")),
            request::query(url_decoded(contains(("filter", "state=READY")))),
            request::query(url_decoded(contains(("pageSize", "100")))),
            request::query(url_decoded(not(contains(key("pageToken"))))),
        ])
        .respond_with(json_encoded(json!({
            "indexes": [
                {"name": format!("{GROUP}/indexes/a"), "state": "READY"},
                {"name": format!("{GROUP}/indexes/b"), "state": "READY"},
            ],
        }))),
    );
    let client = admin(&server).await?;
    let mut items = client
        .list_indexes()
        .set_parent(GROUP)
        .set_filter("state=READY")
        .by_item();
    let mut names = Vec::new();
    while let Some(index) = items.next().await {
        names.push(index?.name);
    }
    assert_eq!(
        names,
        [format!("{GROUP}/indexes/a"), format!("{GROUP}/indexes/b")]
    );
    Ok(())
}

#[tokio::test]
async fn update_field_with_mask() -> Result<()> {
    let name = format!("{GROUP}/fields/description");
    let operation = "projects/p/databases/d/operations/op-002";
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("PATCH", format!("/v1/{name}")),
            request::query(url_decoded(contains(("updateMask", "indexConfig")))),
            request::body(json_decoded(eq(json!({
                "name": name,
                "indexConfig": {},
            })))),
        ])
        .respond_with(json_encoded(json!({
            "name": operation,
            "done": true,
            "response": {
                "@type": "type.googleapis.com/google.firestore.admin.v1.Field",
                "name": name,
                "indexConfig": {"ancestorField": format!("{GROUP}/fields/*")},
            },
        }))),
    );
    let client = admin(&server).await?;
    let field = client
        .update_field()
        .set_field(
            model::Field::new()
                .set_name(&name)
                .set_index_config(model::IndexConfig::new()),
        )
        .set_update_mask(wkt::FieldMask::default().set_paths(["indexConfig"]))
        .poller()
        .until_done()
        .await?;
    assert_eq!(field.name, name);
    assert_eq!(
        field.index_config.map(|c| c.ancestor_field),
        Some(format!("{GROUP}/fields/*"))
    );
    Ok(())
}

#[tokio::test]
async fn update_field_requires_field() -> Result<()> {
    let server = Server::run();
    let client = admin(&server).await?;
    let err = client.update_field().send().await.unwrap_err();
    assert!(err.is_binding(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn export_documents_until_done() -> Result<()> {
    let operation = "projects/p/databases/d/operations/op-003";
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/v1/projects/p/databases/d:exportDocuments"),
            request::body(json_decoded(eq(json!({
                "name": "projects/p/databases/d",
                "collectionIds": ["cities", "landmarks"],
                "outputUriPrefix": "gs://bucket/export",
            })))),
        ])
        .respond_with(json_encoded(json!({
            "name": operation,
            "metadata": {
                "@type": "type.googleapis.com/google.firestore.admin.v1.ExportDocumentsMetadata",
                "operationState": "PROCESSING",
                "progressDocuments": {"estimatedWork": "100", "completedWork": "10"},
            },
        }))),
    );
    server.expect(
        Expectation::matching(request::method_path("GET", format!("/v1/{operation}")))
            .respond_with(json_encoded(json!({
                "name": operation,
                "done": true,
                "response": {
                    "@type": "type.googleapis.com/google.firestore.admin.v1.ExportDocumentsResponse",
                    "outputUriPrefix": "gs://bucket/export/2026-01-01",
                },
            }))),
    );
    let client = admin(&server).await?;
    let response = client
        .export_documents()
        .set_name("projects/p/databases/d")
        .set_collection_ids(["cities", "landmarks"])
        .set_output_uri_prefix("gs://bucket/export")
        .poller()
        .until_done()
        .await?;
    assert_eq!(response.output_uri_prefix, "gs://bucket/export/2026-01-01");
    Ok(())
}

#[tokio::test]
async fn cancel_operation() -> Result<()> {
    let operation = "projects/p/databases/d/operations/op-004";
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", format!("/v1/{operation}:cancel")),
            request::body(json_decoded(eq(json!({"name": operation})))),
        ])
        .respond_with(json_encoded(json!({}))),
    );
    let client = admin(&server).await?;
    client.cancel_operation().set_name(operation).send().await?;

    let err = client
        .get_operation()
        .set_name("operations/op-004")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_binding(), "{err:?}");
    Ok(())
}
