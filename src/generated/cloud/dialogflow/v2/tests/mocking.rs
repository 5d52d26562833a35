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


use gapic_dialogflow_v2::{client, model, stub};
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::response::Response;
use lro::Poller;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

mockall::mock! {
    #[derive(Debug)]
    Intents {}
    impl stub::Intents for Intents {
        async fn list_intents(&self, req: model::ListIntentsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::ListIntentsResponse>>;
        async fn create_intent(&self, req: model::CreateIntentRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::Intent>>;
        async fn batch_delete_intents(&self, req: model::BatchDeleteIntentsRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
        async fn get_operation(&self, req: longrunning::model::GetOperationRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
    }
}

mockall::mock! {
    #[derive(Debug)]
    Agents {}
    impl stub::Agents for Agents {
        async fn export_agent(&self, req: model::ExportAgentRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
        async fn get_operation(&self, req: longrunning::model::GetOperationRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<longrunning::model::Operation>>;
    }
}

/// Creates an intent with a single annotated training phrase.
async fn add_greeting(client: &client::Intents, project: &str) -> gax::Result<model::Intent> {
    let phrase = model::TrainingPhrase::new()
        .set_type(model::TrainingPhraseType::Example)
        .set_parts([
            model::TrainingPhrasePart::new().set_text("hello "),
            model::TrainingPhrasePart::new()
                .set_text("Alice")
                .set_entity_type("@sys.given-name")
                .set_alias("name"),
        ]);
    client
        .create_intent()
        .set_parent(format!("projects/{project}/agent"))
        .set_intent(
            model::Intent::new()
                .set_display_name("greeting")
                .set_training_phrases([phrase]),
        )
        .set_language_code("en")
        .send()
        .await
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn create_intent() -> Result<()> {
    let mut mock = MockIntents::new();
    mock.expect_create_intent()
        .withf(|r, _| {
            let Some(intent) = r.intent.as_ref() else {
                return false;
            };
            r.parent == "projects/my-project/agent"
                && r.language_code == "en"
                && intent.display_name == "greeting"
                && intent.training_phrases.len() == 1
                && intent.training_phrases[0].parts.len() == 2
                && intent.training_phrases[0].parts[1].alias == "name"
        })
        .return_once(|r, _| {
            let intent = r.intent.unwrap_or_default();
            Ok(Response::from(
                intent.set_name("projects/my-project/agent/intents/i-001"),
            ))
        });

    let client = client::Intents::from_stub(mock);
    let intent = add_greeting(&client, "my-project").await?;
    assert_eq!(intent.name, "projects/my-project/agent/intents/i-001");
    assert_eq!(intent.display_name, "greeting");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn create_intent_error() -> Result<()> {
    let mut mock = MockIntents::new();
    mock.expect_create_intent().return_once(|_, _| {
        Err(Error::service(
            Status::default()
                .set_code(Code::AlreadyExists)
                .set_message("intent with the same display name exists"),
        ))
    });

    let client = client::Intents::from_stub(mock);
    let err = add_greeting(&client, "my-project").await.unwrap_err();
    assert_eq!(err.status().map(|s| s.code), Some(Code::AlreadyExists), "{err:?}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn list_intents_by_item() -> Result<()> {
    let mut mock = MockIntents::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_list_intents()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| {
            r.parent == "projects/p/agent"
                && r.intent_view == model::IntentView::IntentViewFull
                && r.page_token.is_empty()
        })
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListIntentsResponse::new()
                    .set_intents([intent("a"), intent("b")])
                    .set_next_page_token("t1"),
            ))
        });
    mock.expect_list_intents()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token == "t1" && r.intent_view == model::IntentView::IntentViewFull)
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListIntentsResponse::new().set_intents([intent("c")]),
            ))
        });

    let client = client::Intents::from_stub(mock);
    let mut items = client
        .list_intents()
        .set_parent("projects/p/agent")
        .set_intent_view(model::IntentView::IntentViewFull)
        .by_item();
    let mut names = Vec::new();
    while let Some(item) = items.next().await {
        names.push(item?.display_name);
    }
    assert_eq!(names, ["a", "b", "c"]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn batch_delete_intents_until_done() -> Result<()> {
    let done = wkt::Any::from_msg(&wkt::Empty::default())?;
    let mut mock = MockIntents::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_batch_delete_intents()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| {
            r.parent == "projects/p/agent"
                && r.intents.iter().map(|i| i.name.as_str()).eq(["projects/p/agent/intents/a"])
        })
        .return_once(|_, _| {
            Ok(Response::from(
                longrunning::model::Operation::default().set_name("projects/p/operations/op-001"),
            ))
        });
    mock.expect_get_operation()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.name == "projects/p/operations/op-001")
        .return_once(|_, _| {
            Ok(Response::from(
                longrunning::model::Operation::default()
                    .set_name("projects/p/operations/op-001")
                    .set_done(true)
                    .set_result(done),
            ))
        });

    let client = client::Intents::from_stub(mock);
    let response = client
        .batch_delete_intents()
        .set_parent("projects/p/agent")
        .set_intents([model::Intent::new().set_name("projects/p/agent/intents/a")])
        .poller()
        .until_done()
        .await?;
    assert_eq!(response, wkt::Empty::default());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn export_agent_until_done() -> Result<()> {
    let mut metadata = wkt::Struct::new();
    metadata.insert("progress".to_string(), serde_json::json!(50));
    let metadata = wkt::Any::from_msg(&metadata)?;
    let response = wkt::Any::from_msg(
        &model::ExportAgentResponse::new().set_agent_uri("gs://my-bucket/agent.zip"),
    )?;

    let mut mock = MockAgents::new();
    let mut seq = mockall::Sequence::new();
    mock.expect_export_agent()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.parent == "projects/p" && r.agent_uri == "gs://my-bucket/agent.zip")
        .return_once(move |_, _| {
            Ok(Response::from(
                longrunning::model::Operation::default()
                    .set_name("projects/p/operations/op-002")
                    .set_metadata(metadata),
            ))
        });
    mock.expect_get_operation()
        .times(2)
        .in_sequence(&mut seq)
        .returning(|_, _| Err(unavailable()));
    mock.expect_get_operation()
        .once()
        .in_sequence(&mut seq)
        .return_once(move |_, _| {
            Ok(Response::from(
                longrunning::model::Operation::default()
                    .set_name("projects/p/operations/op-002")
                    .set_done(true)
                    .set_result(response),
            ))
        });

    let client = client::Agents::from_stub(mock);
    let response = client
        .export_agent()
        .set_parent("projects/p")
        .set_agent_uri("gs://my-bucket/agent.zip")
        .poller()
        .until_done()
        .await?;
    assert_eq!(response.agent_uri, "gs://my-bucket/agent.zip");
    Ok(())
}

fn intent(display_name: &str) -> model::Intent {
    model::Intent::new()
        .set_name(format!("projects/p/agent/intents/{display_name}"))
        .set_display_name(display_name)
}

fn unavailable() -> Error {
    Error::service(
        Status::default()
            .set_code(Code::Unavailable)
            .set_message("try-again"),
    )
}
