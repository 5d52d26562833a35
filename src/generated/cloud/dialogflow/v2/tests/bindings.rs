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

use gapic_dialogflow_v2::{client, model};
use httptest::matchers::{AllOf, KV, Matcher, all_of, contains, eq, json_decoded, request, url_decoded};
use httptest::{Expectation, Server, responders::json_encoded};
use serde_json::{Value, json};
use test_case::test_case;

type Result<T> = anyhow::Result<T>;
type Query = &'static [(&'static str, &'static str)];
type HttpRequest = http::Request<bytes::Bytes>;

const AGENT: &str = "projects/p/agent";
const SESSION: &str = "projects/p/agent/sessions/s";
const CONTEXT: &str = "projects/p/agent/sessions/s/contexts/c";
const ENTITY_TYPE: &str = "projects/p/agent/entityTypes/e";
const INTENT: &str = "projects/p/agent/intents/i";
const SESSION_ENTITY_TYPE: &str = "projects/p/agent/sessions/s/entityTypes/color";
const OPERATION: &str = "projects/p/operations/op-1";

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

fn expect(verb: &'static str, path: &'static str, query: Query, body: Value) -> Server {
    let server = Server::run();
    server.expect(Expectation::matching(binding(verb, path, query, body)).respond_with(json_encoded(json!({}))));
    server
}

fn endpoint(server: &Server) -> String {
    format!("http://{}", server.addr())
}

fn anonymous() -> auth::credentials::Credentials {
    auth::credentials::anonymous::Builder::new().build()
}

fn mask(path: &str) -> wkt::FieldMask {
    wkt::FieldMask::default().set_paths([path])
}

fn red() -> model::Entity {
    model::Entity::new().set_value("red").set_synonyms(["red", "crimson"])
}

#[test_case("GetAgent", "GET", "/v2/projects/p/agent", &[], json!(null); "get_agent")]
#[test_case("SearchAgents", "GET", "/v2/projects/-/agent:search", &[("pageSize", "10"), ("pageToken", "t1")], json!(null); "search_agents")]
#[test_case("TrainAgent", "POST", "/v2/projects/p/agent:train", &[], json!({"parent": "projects/p"}); "train_agent")]
#[test_case("ExportAgent", "POST", "/v2/projects/p/agent:export", &[], json!({"parent": "projects/p", "agentUri": "gs://b/agent.zip"}); "export_agent")]
#[test_case("ImportAgent", "POST", "/v2/projects/p/agent:import", &[], json!({"parent": "projects/p", "agentContent": "emlw"}); "import_agent")]
#[test_case("RestoreAgent", "POST", "/v2/projects/p/agent:restore", &[], json!({"parent": "projects/p", "agentUri": "gs://b/agent.zip"}); "restore_agent")]
#[test_case("GetOperation", "GET", "/v2/projects/p/operations/op-1", &[], json!(null); "get_operation")]
#[test_case("CancelOperation", "POST", "/v2/projects/p/operations/op-1:cancel", &[], json!({"name": OPERATION}); "cancel_operation")]
#[test_case("DeleteOperation", "DELETE", "/v2/projects/p/operations/op-1", &[], json!(null); "delete_operation")]
#[tokio::test]
async fn agents(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = expect(verb, path, query, body);
    let client = client::Agents::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    match rpc {
        "GetAgent" => {
            client.get_agent().set_parent("projects/p").send().await?;
        }
        "SearchAgents" => {
            client.search_agents().set_parent("projects/-").set_page_size(10).set_page_token("t1").send().await?;
        }
        "TrainAgent" => {
            client.train_agent().set_parent("projects/p").send().await?;
        }
        "ExportAgent" => {
            client.export_agent().set_parent("projects/p").set_agent_uri("gs://b/agent.zip").send().await?;
        }
        "ImportAgent" => {
            client
                .import_agent()
                .set_parent("projects/p")
                .set_agent_content(bytes::Bytes::from_static(b"zip"))
                .send()
                .await?;
        }
        "RestoreAgent" => {
            client.restore_agent().set_parent("projects/p").set_agent_uri("gs://b/agent.zip").send().await?;
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

#[test_case("ListContexts", "GET", "/v2/projects/p/agent/sessions/s/contexts", &[("pageSize", "10"), ("pageToken", "t1")], json!(null); "list_contexts")]
#[test_case("GetContext", "GET", "/v2/projects/p/agent/sessions/s/contexts/c", &[], json!(null); "get_context")]
#[test_case("CreateContext", "POST", "/v2/projects/p/agent/sessions/s/contexts", &[], json!({"name": CONTEXT, "lifespanCount": 5}); "create_context")]
#[test_case("UpdateContext", "PATCH", "/v2/projects/p/agent/sessions/s/contexts/c", &[("updateMask", "lifespanCount")], json!({"name": CONTEXT, "lifespanCount": 2}); "update_context")]
#[test_case("DeleteContext", "DELETE", "/v2/projects/p/agent/sessions/s/contexts/c", &[], json!(null); "delete_context")]
#[test_case("DeleteAllContexts", "DELETE", "/v2/projects/p/agent/sessions/s/contexts", &[], json!(null); "delete_all_contexts")]
#[tokio::test]
async fn contexts(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = expect(verb, path, query, body);
    let client = client::Contexts::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    match rpc {
        "ListContexts" => {
            client.list_contexts().set_parent(SESSION).set_page_size(10).set_page_token("t1").send().await?;
        }
        "GetContext" => {
            client.get_context().set_name(CONTEXT).send().await?;
        }
        "CreateContext" => {
            client
                .create_context()
                .set_parent(SESSION)
                .set_context(model::Context::new().set_name(CONTEXT).set_lifespan_count(5))
                .send()
                .await?;
        }
        "UpdateContext" => {
            client
                .update_context()
                .set_context(model::Context::new().set_name(CONTEXT).set_lifespan_count(2))
                .set_update_mask(mask("lifespanCount"))
                .send()
                .await?;
        }
        "DeleteContext" => {
            client.delete_context().set_name(CONTEXT).send().await?;
        }
        "DeleteAllContexts" => {
            client.delete_all_contexts().set_parent(SESSION).send().await?;
        }
        other => panic!("unexpected RPC {other}"),
    }
    Ok(())
}

#[test_case("ListEntityTypes", "GET", "/v2/projects/p/agent/entityTypes", &[("languageCode", "fr"), ("pageToken", "t1")], json!(null); "list_entity_types")]
#[test_case("GetEntityType", "GET", "/v2/projects/p/agent/entityTypes/e", &[("languageCode", "fr")], json!(null); "get_entity_type")]
#[test_case("CreateEntityType", "POST", "/v2/projects/p/agent/entityTypes", &[("languageCode", "fr")], json!({"displayName": "color", "kind": "KIND_MAP"}); "create_entity_type")]
#[test_case("UpdateEntityType", "PATCH", "/v2/projects/p/agent/entityTypes/e", &[("languageCode", "fr"), ("updateMask", "displayName")], json!({"name": ENTITY_TYPE, "displayName": "colour"}); "update_entity_type")]
#[test_case("DeleteEntityType", "DELETE", "/v2/projects/p/agent/entityTypes/e", &[], json!(null); "delete_entity_type")]
#[test_case("BatchUpdateEntityTypes", "POST", "/v2/projects/p/agent/entityTypes:batchUpdate", &[], json!({"parent": AGENT, "entityTypeBatchUri": "gs://b/types.json", "languageCode": "fr"}); "batch_update_entity_types")]
#[test_case("BatchDeleteEntityTypes", "POST", "/v2/projects/p/agent/entityTypes:batchDelete", &[], json!({"parent": AGENT, "entityTypeNames": [ENTITY_TYPE]}); "batch_delete_entity_types")]
#[test_case("BatchCreateEntities", "POST", "/v2/projects/p/agent/entityTypes/e/entities:batchCreate", &[], json!({"parent": ENTITY_TYPE, "entities": [{"value": "red", "synonyms": ["red", "crimson"]}], "languageCode": "fr"}); "batch_create_entities")]
#[test_case("BatchUpdateEntities", "POST", "/v2/projects/p/agent/entityTypes/e/entities:batchUpdate", &[], json!({"parent": ENTITY_TYPE, "entities": [{"value": "red", "synonyms": ["red", "crimson"]}], "updateMask": "synonyms"}); "batch_update_entities")]
#[test_case("BatchDeleteEntities", "POST", "/v2/projects/p/agent/entityTypes/e/entities:batchDelete", &[], json!({"parent": ENTITY_TYPE, "entityValues": ["red"]}); "batch_delete_entities")]
#[test_case("GetOperation", "GET", "/v2/projects/p/operations/op-1", &[], json!(null); "get_operation")]
#[test_case("CancelOperation", "POST", "/v2/projects/p/operations/op-1:cancel", &[], json!({"name": OPERATION}); "cancel_operation")]
#[test_case("DeleteOperation", "DELETE", "/v2/projects/p/operations/op-1", &[], json!(null); "delete_operation")]
#[tokio::test]
async fn entity_types(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = expect(verb, path, query, body);
    let client = client::EntityTypes::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    match rpc {
        "ListEntityTypes" => {
            client.list_entity_types().set_parent(AGENT).set_language_code("fr").set_page_token("t1").send().await?;
        }
        "GetEntityType" => {
            client.get_entity_type().set_name(ENTITY_TYPE).set_language_code("fr").send().await?;
        }
        "CreateEntityType" => {
            client
                .create_entity_type()
                .set_parent(AGENT)
                .set_entity_type(model::EntityType::new().set_display_name("color").set_kind(model::EntityKind::KindMap))
                .set_language_code("fr")
                .send()
                .await?;
        }
        "UpdateEntityType" => {
            client
                .update_entity_type()
                .set_entity_type(model::EntityType::new().set_name(ENTITY_TYPE).set_display_name("colour"))
                .set_language_code("fr")
                .set_update_mask(mask("displayName"))
                .send()
                .await?;
        }
        "DeleteEntityType" => {
            client.delete_entity_type().set_name(ENTITY_TYPE).send().await?;
        }
        "BatchUpdateEntityTypes" => {
            client
                .batch_update_entity_types()
                .set_parent(AGENT)
                .set_entity_type_batch_uri("gs://b/types.json")
                .set_language_code("fr")
                .send()
                .await?;
        }
        "BatchDeleteEntityTypes" => {
            client.batch_delete_entity_types().set_parent(AGENT).set_entity_type_names([ENTITY_TYPE]).send().await?;
        }
        "BatchCreateEntities" => {
            client
                .batch_create_entities()
                .set_parent(ENTITY_TYPE)
                .set_entities([red()])
                .set_language_code("fr")
                .send()
                .await?;
        }
        "BatchUpdateEntities" => {
            client
                .batch_update_entities()
                .set_parent(ENTITY_TYPE)
                .set_entities([red()])
                .set_update_mask(mask("synonyms"))
                .send()
                .await?;
        }
        "BatchDeleteEntities" => {
            client.batch_delete_entities().set_parent(ENTITY_TYPE).set_entity_values(["red"]).send().await?;
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

#[test_case("ListIntents", "GET", "/v2/projects/p/agent/intents", &[("languageCode", "fr"), ("intentView", "INTENT_VIEW_FULL"), ("pageToken", "t1")], json!(null); "list_intents")]
#[test_case("GetIntent", "GET", "/v2/projects/p/agent/intents/i", &[("languageCode", "fr"), ("intentView", "INTENT_VIEW_FULL")], json!(null); "get_intent")]
#[test_case("CreateIntent", "POST", "/v2/projects/p/agent/intents", &[("languageCode", "fr"), ("intentView", "INTENT_VIEW_FULL")], json!({"displayName": "greet", "priority": 500000}); "create_intent")]
#[test_case("UpdateIntent", "PATCH", "/v2/projects/p/agent/intents/i", &[("languageCode", "fr"), ("updateMask", "displayName")], json!({"name": INTENT, "displayName": "hello"}); "update_intent")]
#[test_case("DeleteIntent", "DELETE", "/v2/projects/p/agent/intents/i", &[], json!(null); "delete_intent")]
#[test_case("BatchUpdateIntents", "POST", "/v2/projects/p/agent/intents:batchUpdate", &[], json!({"parent": AGENT, "intentBatchUri": "gs://b/intents.json", "languageCode": "fr"}); "batch_update_intents")]
#[test_case("BatchDeleteIntents", "POST", "/v2/projects/p/agent/intents:batchDelete", &[], json!({"parent": AGENT, "intents": [{"name": INTENT}]}); "batch_delete_intents")]
#[test_case("GetOperation", "GET", "/v2/projects/p/operations/op-1", &[], json!(null); "get_operation")]
#[test_case("CancelOperation", "POST", "/v2/projects/p/operations/op-1:cancel", &[], json!({"name": OPERATION}); "cancel_operation")]
#[test_case("DeleteOperation", "DELETE", "/v2/projects/p/operations/op-1", &[], json!(null); "delete_operation")]
#[tokio::test]
async fn intents(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = expect(verb, path, query, body);
    let client = client::Intents::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    match rpc {
        "ListIntents" => {
            client
                .list_intents()
                .set_parent(AGENT)
                .set_language_code("fr")
                .set_intent_view(model::IntentView::IntentViewFull)
                .set_page_token("t1")
                .send()
                .await?;
        }
        "GetIntent" => {
            client
                .get_intent()
                .set_name(INTENT)
                .set_language_code("fr")
                .set_intent_view(model::IntentView::IntentViewFull)
                .send()
                .await?;
        }
        "CreateIntent" => {
            client
                .create_intent()
                .set_parent(AGENT)
                .set_intent(model::Intent::new().set_display_name("greet").set_priority(500000))
                .set_language_code("fr")
                .set_intent_view(model::IntentView::IntentViewFull)
                .send()
                .await?;
        }
        "UpdateIntent" => {
            client
                .update_intent()
                .set_intent(model::Intent::new().set_name(INTENT).set_display_name("hello"))
                .set_language_code("fr")
                .set_update_mask(mask("displayName"))
                .send()
                .await?;
        }
        "DeleteIntent" => {
            client.delete_intent().set_name(INTENT).send().await?;
        }
        "BatchUpdateIntents" => {
            client
                .batch_update_intents()
                .set_parent(AGENT)
                .set_intent_batch_uri("gs://b/intents.json")
                .set_language_code("fr")
                .send()
                .await?;
        }
        "BatchDeleteIntents" => {
            client
                .batch_delete_intents()
                .set_parent(AGENT)
                .set_intents([model::Intent::new().set_name(INTENT)])
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

#[test_case("ListSessionEntityTypes", "GET", "/v2/projects/p/agent/sessions/s/entityTypes", &[("pageSize", "10"), ("pageToken", "t1")], json!(null); "list_session_entity_types")]
#[test_case("GetSessionEntityType", "GET", "/v2/projects/p/agent/sessions/s/entityTypes/color", &[], json!(null); "get_session_entity_type")]
#[test_case("CreateSessionEntityType", "POST", "/v2/projects/p/agent/sessions/s/entityTypes", &[], json!({"name": SESSION_ENTITY_TYPE, "entityOverrideMode": "ENTITY_OVERRIDE_MODE_OVERRIDE", "entities": [{"value": "red", "synonyms": ["red", "crimson"]}]}); "create_session_entity_type")]
#[test_case("UpdateSessionEntityType", "PATCH", "/v2/projects/p/agent/sessions/s/entityTypes/color", &[("updateMask", "entities")], json!({"name": SESSION_ENTITY_TYPE, "entities": [{"value": "red", "synonyms": ["red", "crimson"]}]}); "update_session_entity_type")]
#[test_case("DeleteSessionEntityType", "DELETE", "/v2/projects/p/agent/sessions/s/entityTypes/color", &[], json!(null); "delete_session_entity_type")]
#[tokio::test]
async fn session_entity_types(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = expect(verb, path, query, body);
    let client = client::SessionEntityTypes::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    match rpc {
        "ListSessionEntityTypes" => {
            client
                .list_session_entity_types()
                .set_parent(SESSION)
                .set_page_size(10)
                .set_page_token("t1")
                .send()
                .await?;
        }
        "GetSessionEntityType" => {
            client.get_session_entity_type().set_name(SESSION_ENTITY_TYPE).send().await?;
        }
        "CreateSessionEntityType" => {
            let session_entity_type = model::SessionEntityType::new()
                .set_name(SESSION_ENTITY_TYPE)
                .set_entity_override_mode(model::EntityOverrideMode::EntityOverrideModeOverride)
                .set_entities([red()]);
            client
                .create_session_entity_type()
                .set_parent(SESSION)
                .set_session_entity_type(session_entity_type)
                .send()
                .await?;
        }
        "UpdateSessionEntityType" => {
            client
                .update_session_entity_type()
                .set_session_entity_type(
                    model::SessionEntityType::new().set_name(SESSION_ENTITY_TYPE).set_entities([red()]),
                )
                .set_update_mask(mask("entities"))
                .send()
                .await?;
        }
        "DeleteSessionEntityType" => {
            client.delete_session_entity_type().set_name(SESSION_ENTITY_TYPE).send().await?;
        }
        other => panic!("unexpected RPC {other}"),
    }
    Ok(())
}
