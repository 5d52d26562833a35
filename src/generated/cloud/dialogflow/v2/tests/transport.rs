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

use gapic_dialogflow_v2::{client, model};
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::json;

type Result<T> = anyhow::Result<T>;

fn endpoint(server: &Server) -> String {
    format!("http://{}", server.addr())
}

fn anonymous() -> auth::credentials::Credentials {
    auth::credentials::anonymous::Builder::new().build()
}

#[tokio::test]
async fn get_agent() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/v2/projects/p/agent")).respond_with(
            json_encoded(json!({
                "parent": "projects/p",
                "displayName": "Support Bot",
                "defaultLanguageCode": "en",
                "supportedLanguageCodes": ["fr", "de"],
                "timeZone": "America/New_York",
                "matchMode": "MATCH_MODE_HYBRID",
                "classificationThreshold": 0.3,
            })),
        ),
    );
    let client = client::Agents::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let agent = client.get_agent().set_parent("projects/p").send().await?;
    assert_eq!(agent.display_name, "Support Bot");
    assert_eq!(agent.supported_language_codes, ["fr", "de"]);
    assert_eq!(agent.match_mode, model::MatchMode::MatchModeHybrid);
    assert_eq!(agent.classification_threshold, 0.3_f32);
    Ok(())
}

#[tokio::test]
async fn search_agents_all_projects() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v2/projects/-/agent:search"),
            request::query(url_decoded(contains(("pageSize", "100")))),
        ])
        .respond_with(json_encoded(json!({
            "agents": [{"parent": "projects/p1"}, {"parent": "projects/p2"}],
        }))),
    );
    let client = client::Agents::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let mut items = client.search_agents().set_parent("projects/-").by_item();
    let mut parents = Vec::new();
    while let Some(agent) = items.next().await {
        parents.push(agent?.parent);
    }
    assert_eq!(parents, ["projects/p1", "projects/p2"]);
    Ok(())
}

#[tokio::test]
async fn update_context_with_mask() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("PATCH", "/v2/projects/p/agent/sessions/s/contexts/c"),
            request::query(url_decoded(contains(("updateMask", "lifespanCount,parameters")))),
            request::body(json_decoded(eq(json!({
                "name": "projects/p/agent/sessions/s/contexts/c",
                "lifespanCount": 5,
                "parameters": {"city": "Paris", "nights": 3.0},
            })))),
        ])
        .respond_with(json_encoded(json!({
            "name": "projects/p/agent/sessions/s/contexts/c",
            "lifespanCount": 5,
        }))),
    );
    let client = client::Contexts::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let mut parameters = wkt::Struct::new();
    parameters.insert("city".to_string(), json!("Paris"));
    parameters.insert("nights".to_string(), json!(3.0));
    let context = client
        .update_context()
        .set_context(
            model::Context::new()
                .set_name("projects/p/agent/sessions/s/contexts/c")
                .set_lifespan_count(5)
                .set_parameters(parameters),
        )
        .set_update_mask(wkt::FieldMask::default().set_paths(["lifespanCount", "parameters"]))
        .send()
        .await?;
    assert_eq!(context.lifespan_count, 5);
    Ok(())
}

#[tokio::test]
async fn update_context_missing_context() -> Result<()> {
    let server = Server::run();
    let client = client::Contexts::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let err = client.update_context().send().await.unwrap_err();
    assert!(err.is_binding(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn delete_all_contexts() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "DELETE",
            "/v2/projects/p/agent/sessions/s/contexts",
        ))
        .respond_with(json_encoded(json!({}))),
    );
    let client = client::Contexts::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    client
        .delete_all_contexts()
        .set_parent(client::Contexts::session_path("p", "s")?)
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn list_intents_query() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v2/projects/p/agent/intents"),
            request::query(url_decoded(contains(("languageCode", "fr")))),
            request::query(url_decoded(contains(("intentView", "INTENT_VIEW_FULL")))),
            request::query(url_decoded(contains(("pageToken", "t1")))),
        ])
        .respond_with(json_encoded(json!({
            "intents": [{
                "name": "projects/p/agent/intents/i1",
                "displayName": "greeting",
                "webhookState": "WEBHOOK_STATE_ENABLED",
                "trainingPhrases": [{
                    "type": "EXAMPLE",
                    "parts": [{"text": "bonjour"}],
                }],
            }],
        }))),
    );
    let client = client::Intents::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let response = client
        .list_intents()
        .set_parent("projects/p/agent")
        .set_language_code("fr")
        .set_intent_view(model::IntentView::IntentViewFull)
        .set_page_token("t1")
        .send()
        .await?;
    let want = model::Intent::new()
        .set_name("projects/p/agent/intents/i1")
        .set_display_name("greeting")
        .set_webhook_state(model::WebhookState::WebhookStateEnabled)
        .set_training_phrases([model::TrainingPhrase::new()
            .set_type(model::TrainingPhraseType::Example)
            .set_parts([model::TrainingPhrasePart::new().set_text("bonjour")])]);
    assert_eq!(response.intents, [want]);
    Ok(())
}

#[tokio::test]
async fn entity_type_operations() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/v2/projects/p/operations/op-001"))
            .respond_with(json_encoded(json!({
                "name": "projects/p/operations/op-001",
                "done": true,
                "response": {"@type": "type.googleapis.com/google.protobuf.Empty"},
            }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/v2/projects/p/operations/op-001:cancel"),
            request::body(json_decoded(eq(json!({"name": "projects/p/operations/op-001"})))),
        ])
        .respond_with(json_encoded(json!({}))),
    );
    let client = client::EntityTypes::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let op = client
        .get_operation()
        .set_name("projects/p/operations/op-001")
        .send()
        .await?;
    assert!(op.done, "{op:?}");
    client
        .cancel_operation()
        .set_name("projects/p/operations/op-001")
        .send()
        .await?;
    let err = client
        .delete_operation()
        .set_name("operations/op-001")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_binding(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn batch_create_entities_body() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path(
                "POST",
                "/v2/projects/p/agent/entityTypes/fruit/entities:batchCreate"
            ),
            request::body(json_decoded(eq(json!({
                "parent": "projects/p/agent/entityTypes/fruit",
                "entities": [{"value": "apple", "synonyms": ["apple", "pomme"]}],
                "languageCode": "fr",
            })))),
        ])
        .respond_with(json_encoded(json!({"name": "projects/p/operations/op-003"}))),
    );
    let client = client::EntityTypes::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let op = client
        .batch_create_entities()
        .set_parent(client::EntityTypes::entity_type_path("p", "fruit")?)
        .set_entities([model::Entity::new()
            .set_value("apple")
            .set_synonyms(["apple", "pomme"])])
        .set_language_code("fr")
        .send()
        .await?;
    assert_eq!(op.name, "projects/p/operations/op-003");
    assert!(!op.done);
    Ok(())
}
