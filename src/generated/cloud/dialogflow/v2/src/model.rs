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
//
// Code generated by sidekick. DO NOT EDIT.

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]
#![no_implicit_prelude]
extern crate async_trait;
extern crate bytes;
extern crate gax;
extern crate gaxi;
extern crate lazy_static;
extern crate longrunning;
extern crate lro;
extern crate reqwest;
extern crate serde;
extern crate serde_json;
extern crate serde_with;
extern crate std;
extern crate tracing;
extern crate wkt;

/// A Dialogflow agent is a virtual agent that handles conversations with your
/// end-users. It is a natural language understanding module that understands the
/// nuances of human language.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Agent {
    /// The project of this agent.
    /// Format: `projects/<Project ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The name of this agent.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// The default language of the agent as a language tag.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub default_language_code: std::string::String,

    /// The list of all languages supported by this agent (except for the
    /// `default_language_code`).
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub supported_language_codes: std::vec::Vec<std::string::String>,

    /// The time zone of this agent from the
    /// [time zone database](https://www.iana.org/time-zones), e.g.,
    /// America/New_York, Europe/Paris.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub time_zone: std::string::String,

    /// The description of this agent.
    /// The maximum length is 500 characters. If exceeded, the request is rejected.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub description: std::string::String,

    /// The URI of the agent's avatar.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub avatar_uri: std::string::String,

    /// Determines whether this agent should log conversation queries.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub enable_logging: bool,

    /// Determines how intents are detected from user queries.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub match_mode: crate::model::MatchMode,

    /// To filter out false positive results and still get variety in matched
    /// natural language inputs for your agent, you can tune the machine learning
    /// classification threshold.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub classification_threshold: f32,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Agent {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::Agent::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::Agent::display_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [default_language_code][crate::model::Agent::default_language_code].
    ///
    /// This is a **required** field for requests.
    pub fn set_default_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.default_language_code = v.into();
        self
    }

    /// Sets the value of [supported_language_codes][crate::model::Agent::supported_language_codes].
    pub fn set_supported_language_codes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.supported_language_codes = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [time_zone][crate::model::Agent::time_zone].
    ///
    /// This is a **required** field for requests.
    pub fn set_time_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.time_zone = v.into();
        self
    }

    /// Sets the value of [description][crate::model::Agent::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [avatar_uri][crate::model::Agent::avatar_uri].
    pub fn set_avatar_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.avatar_uri = v.into();
        self
    }

    /// Sets the value of [enable_logging][crate::model::Agent::enable_logging].
    pub fn set_enable_logging<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.enable_logging = v.into();
        self
    }

    /// Sets the value of [match_mode][crate::model::Agent::match_mode].
    pub fn set_match_mode<T: std::convert::Into<crate::model::MatchMode>>(mut self, v: T) -> Self {
        self.match_mode = v.into();
        self
    }

    /// Sets the value of [classification_threshold][crate::model::Agent::classification_threshold].
    pub fn set_classification_threshold<T: std::convert::Into<f32>>(mut self, v: T) -> Self {
        self.classification_threshold = v.into();
        self
    }
}

impl wkt::message::Message for Agent {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.Agent"
    }
}

/// The request message for
/// [Agents.GetAgent][google.cloud.dialogflow.v2.Agents.GetAgent].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetAgentRequest {
    /// The project that the agent to fetch is associated with.
    /// Format: `projects/<Project ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetAgentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::GetAgentRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

impl wkt::message::Message for GetAgentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.GetAgentRequest"
    }
}

/// The request message for
/// [Agents.SearchAgents][google.cloud.dialogflow.v2.Agents.SearchAgents].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchAgentsRequest {
    /// The project to list agents from.
    /// Format: `projects/<Project ID or '-'>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The maximum number of items to return in a single page. By
    /// default 100 and at most 1000.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The next_page_token value returned from a previous list request.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl SearchAgentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::SearchAgentsRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::SearchAgentsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::SearchAgentsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for SearchAgentsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.SearchAgentsRequest"
    }
}

/// The response message for
/// [Agents.SearchAgents][google.cloud.dialogflow.v2.Agents.SearchAgents].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchAgentsResponse {
    /// The list of agents. There will be a maximum number of items returned based
    /// on the page_size field in the request.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub agents: std::vec::Vec<crate::model::Agent>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl SearchAgentsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [agents][crate::model::SearchAgentsResponse::agents].
    pub fn set_agents<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Agent>,
    {
        use std::iter::Iterator;
        self.agents = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::SearchAgentsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for SearchAgentsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.SearchAgentsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for SearchAgentsResponse {
    type PageItem = crate::model::Agent;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.agents
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The request message for
/// [Agents.TrainAgent][google.cloud.dialogflow.v2.Agents.TrainAgent].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TrainAgentRequest {
    /// The project that the agent to train is associated with.
    /// Format: `projects/<Project ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TrainAgentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::TrainAgentRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

impl wkt::message::Message for TrainAgentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.TrainAgentRequest"
    }
}

/// The request message for
/// [Agents.ExportAgent][google.cloud.dialogflow.v2.Agents.ExportAgent].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportAgentRequest {
    /// The project that the agent to export is associated with.
    /// Format: `projects/<Project ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The [Google Cloud Storage](https://cloud.google.com/storage/docs/)
    /// URI to export the agent to.
    /// If left unspecified, the serialized agent is returned inline.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub agent_uri: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ExportAgentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ExportAgentRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [agent_uri][crate::model::ExportAgentRequest::agent_uri].
    pub fn set_agent_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_uri = v.into();
        self
    }
}

impl wkt::message::Message for ExportAgentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ExportAgentRequest"
    }
}

/// The response message for
/// [Agents.ExportAgent][google.cloud.dialogflow.v2.Agents.ExportAgent].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportAgentResponse {
    /// The URI to a file containing the exported agent. This field is populated
    /// only if `agent_uri` is specified in `ExportAgentRequest`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub agent_uri: std::string::String,

    /// Zip compressed raw byte content for agent.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub agent_content: ::bytes::Bytes,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ExportAgentResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [agent_uri][crate::model::ExportAgentResponse::agent_uri].
    pub fn set_agent_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_uri = v.into();
        self
    }

    /// Sets the value of [agent_content][crate::model::ExportAgentResponse::agent_content].
    pub fn set_agent_content<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.agent_content = v.into();
        self
    }
}

impl wkt::message::Message for ExportAgentResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ExportAgentResponse"
    }
}

/// The request message for
/// [Agents.ImportAgent][google.cloud.dialogflow.v2.Agents.ImportAgent].
///
/// Only one of `agent_uri` or `agent_content` should be set.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportAgentRequest {
    /// The project that the agent to import is associated with.
    /// Format: `projects/<Project ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The URI to a Google Cloud Storage file containing the agent to import.
    /// Note: The URI must start with "gs://".
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub agent_uri: std::string::String,

    /// Zip compressed raw byte content for agent.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub agent_content: ::bytes::Bytes,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ImportAgentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ImportAgentRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [agent_uri][crate::model::ImportAgentRequest::agent_uri].
    pub fn set_agent_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_uri = v.into();
        self
    }

    /// Sets the value of [agent_content][crate::model::ImportAgentRequest::agent_content].
    pub fn set_agent_content<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.agent_content = v.into();
        self
    }
}

impl wkt::message::Message for ImportAgentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ImportAgentRequest"
    }
}

/// The request message for
/// [Agents.RestoreAgent][google.cloud.dialogflow.v2.Agents.RestoreAgent].
///
/// Only one of `agent_uri` or `agent_content` should be set.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RestoreAgentRequest {
    /// The project that the agent to restore is associated with.
    /// Format: `projects/<Project ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The URI to a Google Cloud Storage file containing the agent to restore.
    /// Note: The URI must start with "gs://".
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub agent_uri: std::string::String,

    /// Zip compressed raw byte content for agent.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub agent_content: ::bytes::Bytes,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RestoreAgentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::RestoreAgentRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [agent_uri][crate::model::RestoreAgentRequest::agent_uri].
    pub fn set_agent_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_uri = v.into();
        self
    }

    /// Sets the value of [agent_content][crate::model::RestoreAgentRequest::agent_content].
    pub fn set_agent_content<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.agent_content = v.into();
        self
    }
}

impl wkt::message::Message for RestoreAgentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.RestoreAgentRequest"
    }
}

/// Dialogflow contexts are similar to natural language context. If a person says
/// to you "they are orange", you need context in order to understand what "they"
/// is referring to. Similarly, for Dialogflow to handle an end-user expression
/// like that, it needs to be provided with context in order to correctly match
/// an intent.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Context {
    /// The unique identifier of the context. Format:
    /// `projects/<Project ID>/agent/sessions/<Session ID>/contexts/<Context ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The number of conversational query requests after which the
    /// context expires. The default is `0`. If set to `0`, the context expires
    /// immediately.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub lifespan_count: i32,

    /// The collection of parameters associated with this context.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub parameters: std::option::Option<wkt::Struct>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Context {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Context::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [lifespan_count][crate::model::Context::lifespan_count].
    pub fn set_lifespan_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.lifespan_count = v.into();
        self
    }

    /// Sets the value of [parameters][crate::model::Context::parameters].
    pub fn set_parameters<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Struct>,
    {
        self.parameters = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [parameters][crate::model::Context::parameters].
    pub fn set_or_clear_parameters<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Struct>,
    {
        self.parameters = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Context {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.Context"
    }
}

/// The request message for
/// [Contexts.ListContexts][google.cloud.dialogflow.v2.Contexts.ListContexts].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListContextsRequest {
    /// The session to list all contexts from.
    /// Format: `projects/<Project ID>/agent/sessions/<Session ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The maximum number of items to return in a single page. By
    /// default 100 and at most 1000.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The next_page_token value returned from a previous list request.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListContextsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListContextsRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListContextsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListContextsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListContextsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ListContextsRequest"
    }
}

/// The response message for
/// [Contexts.ListContexts][google.cloud.dialogflow.v2.Contexts.ListContexts].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListContextsResponse {
    /// The list of contexts. There will be a maximum number of items
    /// returned based on the page_size field in the request.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub contexts: std::vec::Vec<crate::model::Context>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListContextsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [contexts][crate::model::ListContextsResponse::contexts].
    pub fn set_contexts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Context>,
    {
        use std::iter::Iterator;
        self.contexts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListContextsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListContextsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ListContextsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListContextsResponse {
    type PageItem = crate::model::Context;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.contexts
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The request message for
/// [Contexts.GetContext][google.cloud.dialogflow.v2.Contexts.GetContext].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetContextRequest {
    /// The name of the context. Format:
    /// `projects/<Project ID>/agent/sessions/<Session ID>/contexts/<Context ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetContextRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetContextRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetContextRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.GetContextRequest"
    }
}

/// The request message for
/// [Contexts.CreateContext][google.cloud.dialogflow.v2.Contexts.CreateContext].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateContextRequest {
    /// The session to create a context for.
    /// Format: `projects/<Project ID>/agent/sessions/<Session ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The context to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub context: std::option::Option<crate::model::Context>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateContextRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateContextRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [context][crate::model::CreateContextRequest::context].
    ///
    /// This is a **required** field for requests.
    pub fn set_context<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Context>,
    {
        self.context = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [context][crate::model::CreateContextRequest::context].
    pub fn set_or_clear_context<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Context>,
    {
        self.context = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateContextRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.CreateContextRequest"
    }
}

/// The request message for
/// [Contexts.UpdateContext][google.cloud.dialogflow.v2.Contexts.UpdateContext].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateContextRequest {
    /// The context to update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub context: std::option::Option<crate::model::Context>,

    /// The mask to control which fields get updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateContextRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [context][crate::model::UpdateContextRequest::context].
    ///
    /// This is a **required** field for requests.
    pub fn set_context<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Context>,
    {
        self.context = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [context][crate::model::UpdateContextRequest::context].
    pub fn set_or_clear_context<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Context>,
    {
        self.context = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][crate::model::UpdateContextRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::UpdateContextRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UpdateContextRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.UpdateContextRequest"
    }
}

/// The request message for
/// [Contexts.DeleteContext][google.cloud.dialogflow.v2.Contexts.DeleteContext].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteContextRequest {
    /// The name of the context to delete. Format:
    /// `projects/<Project ID>/agent/sessions/<Session ID>/contexts/<Context ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteContextRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteContextRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteContextRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.DeleteContextRequest"
    }
}

/// The request message for
/// [Contexts.DeleteAllContexts][google.cloud.dialogflow.v2.Contexts.DeleteAllContexts].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteAllContextsRequest {
    /// The name of the session to delete all contexts from. Format:
    /// `projects/<Project ID>/agent/sessions/<Session ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteAllContextsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::DeleteAllContextsRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

impl wkt::message::Message for DeleteAllContextsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.DeleteAllContextsRequest"
    }
}

/// An **entity entry** for an associated entity type.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Entity {
    /// The primary value associated with this entity entry.
    /// For example, if the entity type is *vegetable*, the value could be
    /// *scallions*.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub value: std::string::String,

    /// A collection of value synonyms. For example, if the entity type
    /// is *vegetable*, and `value` is *scallions*, a synonym could be *green
    /// onions*.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub synonyms: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Entity {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [value][crate::model::Entity::value].
    ///
    /// This is a **required** field for requests.
    pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value = v.into();
        self
    }

    /// Sets the value of [synonyms][crate::model::Entity::synonyms].
    pub fn set_synonyms<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.synonyms = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for Entity {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.EntityType.Entity"
    }
}

/// Each intent parameter has a type, called the entity type, which dictates
/// exactly how data from an end-user expression is extracted.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EntityType {
    /// The unique identifier of the entity type.
    /// Required for
    /// [EntityTypes.UpdateEntityType][google.cloud.dialogflow.v2.EntityTypes.UpdateEntityType]
    /// and
    /// [EntityTypes.BatchUpdateEntityTypes][google.cloud.dialogflow.v2.EntityTypes.BatchUpdateEntityTypes]
    /// methods.
    /// Format: `projects/<Project ID>/agent/entityTypes/<Entity Type ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The name of the entity type.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Indicates the kind of entity type.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub kind: crate::model::EntityKind,

    /// Indicates whether the entity type can be automatically
    /// expanded.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub auto_expansion_mode: crate::model::AutoExpansionMode,

    /// The collection of entity entries associated with the entity type.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entities: std::vec::Vec<crate::model::Entity>,

    /// Enables fuzzy entity extraction during classification.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub enable_fuzzy_extraction: bool,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl EntityType {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::EntityType::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::EntityType::display_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [kind][crate::model::EntityType::kind].
    ///
    /// This is a **required** field for requests.
    pub fn set_kind<T: std::convert::Into<crate::model::EntityKind>>(mut self, v: T) -> Self {
        self.kind = v.into();
        self
    }

    /// Sets the value of [auto_expansion_mode][crate::model::EntityType::auto_expansion_mode].
    pub fn set_auto_expansion_mode<T: std::convert::Into<crate::model::AutoExpansionMode>>(mut self, v: T) -> Self {
        self.auto_expansion_mode = v.into();
        self
    }

    /// Sets the value of [entities][crate::model::EntityType::entities].
    pub fn set_entities<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Entity>,
    {
        use std::iter::Iterator;
        self.entities = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [enable_fuzzy_extraction][crate::model::EntityType::enable_fuzzy_extraction].
    pub fn set_enable_fuzzy_extraction<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.enable_fuzzy_extraction = v.into();
        self
    }
}

impl wkt::message::Message for EntityType {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.EntityType"
    }
}

/// This message is a wrapper around a collection of entity types.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EntityTypeBatch {
    /// A collection of entity types.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entity_types: std::vec::Vec<crate::model::EntityType>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl EntityTypeBatch {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entity_types][crate::model::EntityTypeBatch::entity_types].
    pub fn set_entity_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EntityType>,
    {
        use std::iter::Iterator;
        self.entity_types = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for EntityTypeBatch {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.EntityTypeBatch"
    }
}

/// The request message for
/// [EntityTypes.ListEntityTypes][google.cloud.dialogflow.v2.EntityTypes.ListEntityTypes].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListEntityTypesRequest {
    /// The agent to list all entity types from.
    /// Format: `projects/<Project ID>/agent`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The language used to access language-specific data.
    /// If not specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// The maximum number of items to return in a single page. By
    /// default 100 and at most 1000.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The next_page_token value returned from a previous list request.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListEntityTypesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListEntityTypesRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [language_code][crate::model::ListEntityTypesRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListEntityTypesRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListEntityTypesRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListEntityTypesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ListEntityTypesRequest"
    }
}

/// The response message for
/// [EntityTypes.ListEntityTypes][google.cloud.dialogflow.v2.EntityTypes.ListEntityTypes].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListEntityTypesResponse {
    /// The list of agent entity types. There will be a maximum number of items
    /// returned based on the page_size field in the request.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entity_types: std::vec::Vec<crate::model::EntityType>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListEntityTypesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entity_types][crate::model::ListEntityTypesResponse::entity_types].
    pub fn set_entity_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EntityType>,
    {
        use std::iter::Iterator;
        self.entity_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListEntityTypesResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListEntityTypesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ListEntityTypesResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListEntityTypesResponse {
    type PageItem = crate::model::EntityType;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.entity_types
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The request message for
/// [EntityTypes.GetEntityType][google.cloud.dialogflow.v2.EntityTypes.GetEntityType].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetEntityTypeRequest {
    /// The name of the entity type.
    /// Format: `projects/<Project ID>/agent/entityTypes/<EntityType ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The language used to access language-specific data.
    /// If not specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetEntityTypeRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [language_code][crate::model::GetEntityTypeRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }
}

impl wkt::message::Message for GetEntityTypeRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.GetEntityTypeRequest"
    }
}

/// The request message for
/// [EntityTypes.CreateEntityType][google.cloud.dialogflow.v2.EntityTypes.CreateEntityType].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateEntityTypeRequest {
    /// The agent to create a entity type for.
    /// Format: `projects/<Project ID>/agent`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The entity type to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type: std::option::Option<crate::model::EntityType>,

    /// The language used to access language-specific data.
    /// If not specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateEntityTypeRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [entity_type][crate::model::CreateEntityTypeRequest::entity_type].
    ///
    /// This is a **required** field for requests.
    pub fn set_entity_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EntityType>,
    {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_type][crate::model::CreateEntityTypeRequest::entity_type].
    pub fn set_or_clear_entity_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::EntityType>,
    {
        self.entity_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [language_code][crate::model::CreateEntityTypeRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }
}

impl wkt::message::Message for CreateEntityTypeRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.CreateEntityTypeRequest"
    }
}

/// The request message for
/// [EntityTypes.UpdateEntityType][google.cloud.dialogflow.v2.EntityTypes.UpdateEntityType].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateEntityTypeRequest {
    /// The entity type to update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type: std::option::Option<crate::model::EntityType>,

    /// The language used to access language-specific data.
    /// If not specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// The mask to control which fields get updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entity_type][crate::model::UpdateEntityTypeRequest::entity_type].
    ///
    /// This is a **required** field for requests.
    pub fn set_entity_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EntityType>,
    {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_type][crate::model::UpdateEntityTypeRequest::entity_type].
    pub fn set_or_clear_entity_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::EntityType>,
    {
        self.entity_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [language_code][crate::model::UpdateEntityTypeRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [update_mask][crate::model::UpdateEntityTypeRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::UpdateEntityTypeRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UpdateEntityTypeRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.UpdateEntityTypeRequest"
    }
}

/// The request message for
/// [EntityTypes.DeleteEntityType][google.cloud.dialogflow.v2.EntityTypes.DeleteEntityType].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteEntityTypeRequest {
    /// The name of the entity type to delete.
    /// Format: `projects/<Project ID>/agent/entityTypes/<EntityType ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteEntityTypeRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteEntityTypeRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.DeleteEntityTypeRequest"
    }
}

/// The request message for
/// [EntityTypes.BatchUpdateEntityTypes][google.cloud.dialogflow.v2.EntityTypes.BatchUpdateEntityTypes].
///
/// Only one of `entity_type_batch_uri` or `entity_type_batch_inline` should be
/// set.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchUpdateEntityTypesRequest {
    /// The name of the agent to update or create entity types in.
    /// Format: `projects/<Project ID>/agent`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The URI to a Google Cloud Storage file containing entity types to update
    /// or create. The file format can either be a serialized proto (of
    /// EntityBatch type) or a JSON object. Note: The URI must start with
    /// "gs://".
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub entity_type_batch_uri: std::string::String,

    /// The collection of entity types to update or create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub entity_type_batch_inline: std::option::Option<crate::model::EntityTypeBatch>,

    /// The language used to access language-specific data.
    /// If not specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// The mask to control which fields get updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BatchUpdateEntityTypesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::BatchUpdateEntityTypesRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [entity_type_batch_uri][crate::model::BatchUpdateEntityTypesRequest::entity_type_batch_uri].
    pub fn set_entity_type_batch_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type_batch_uri = v.into();
        self
    }

    /// Sets the value of [entity_type_batch_inline][crate::model::BatchUpdateEntityTypesRequest::entity_type_batch_inline].
    pub fn set_entity_type_batch_inline<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::EntityTypeBatch>,
    {
        self.entity_type_batch_inline = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_type_batch_inline][crate::model::BatchUpdateEntityTypesRequest::entity_type_batch_inline].
    pub fn set_or_clear_entity_type_batch_inline<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::EntityTypeBatch>,
    {
        self.entity_type_batch_inline = v.map(|x| x.into());
        self
    }

    /// Sets the value of [language_code][crate::model::BatchUpdateEntityTypesRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [update_mask][crate::model::BatchUpdateEntityTypesRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::BatchUpdateEntityTypesRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for BatchUpdateEntityTypesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.BatchUpdateEntityTypesRequest"
    }
}

/// The response message for
/// [EntityTypes.BatchUpdateEntityTypes][google.cloud.dialogflow.v2.EntityTypes.BatchUpdateEntityTypes].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchUpdateEntityTypesResponse {
    /// The collection of updated or created entity types.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entity_types: std::vec::Vec<crate::model::EntityType>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BatchUpdateEntityTypesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entity_types][crate::model::BatchUpdateEntityTypesResponse::entity_types].
    pub fn set_entity_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::EntityType>,
    {
        use std::iter::Iterator;
        self.entity_types = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for BatchUpdateEntityTypesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.BatchUpdateEntityTypesResponse"
    }
}

/// The request message for
/// [EntityTypes.BatchDeleteEntityTypes][google.cloud.dialogflow.v2.EntityTypes.BatchDeleteEntityTypes].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchDeleteEntityTypesRequest {
    /// The name of the agent to delete all entities types for. Format:
    /// `projects/<Project ID>/agent`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The names entity types to delete. All names must point to the
    /// same agent as `parent`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entity_type_names: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BatchDeleteEntityTypesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::BatchDeleteEntityTypesRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [entity_type_names][crate::model::BatchDeleteEntityTypesRequest::entity_type_names].
    ///
    /// This is a **required** field for requests.
    pub fn set_entity_type_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.entity_type_names = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for BatchDeleteEntityTypesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.BatchDeleteEntityTypesRequest"
    }
}

/// The request message for
/// [EntityTypes.BatchCreateEntities][google.cloud.dialogflow.v2.EntityTypes.BatchCreateEntities].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchCreateEntitiesRequest {
    /// The name of the entity type to create entities in. Format:
    /// `projects/<Project ID>/agent/entityTypes/<Entity Type ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The entities to create.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entities: std::vec::Vec<crate::model::Entity>,

    /// The language used to access language-specific data.
    /// If not specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BatchCreateEntitiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::BatchCreateEntitiesRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [entities][crate::model::BatchCreateEntitiesRequest::entities].
    ///
    /// This is a **required** field for requests.
    pub fn set_entities<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Entity>,
    {
        use std::iter::Iterator;
        self.entities = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [language_code][crate::model::BatchCreateEntitiesRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }
}

impl wkt::message::Message for BatchCreateEntitiesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.BatchCreateEntitiesRequest"
    }
}

/// The request message for
/// [EntityTypes.BatchUpdateEntities][google.cloud.dialogflow.v2.EntityTypes.BatchUpdateEntities].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchUpdateEntitiesRequest {
    /// The name of the entity type to update or create entities in.
    /// Format: `projects/<Project ID>/agent/entityTypes/<Entity Type ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The entities to update or create.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entities: std::vec::Vec<crate::model::Entity>,

    /// The language used to access language-specific data.
    /// If not specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// The mask to control which fields get updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BatchUpdateEntitiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::BatchUpdateEntitiesRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [entities][crate::model::BatchUpdateEntitiesRequest::entities].
    ///
    /// This is a **required** field for requests.
    pub fn set_entities<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Entity>,
    {
        use std::iter::Iterator;
        self.entities = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [language_code][crate::model::BatchUpdateEntitiesRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [update_mask][crate::model::BatchUpdateEntitiesRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::BatchUpdateEntitiesRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for BatchUpdateEntitiesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.BatchUpdateEntitiesRequest"
    }
}

/// The request message for
/// [EntityTypes.BatchDeleteEntities][google.cloud.dialogflow.v2.EntityTypes.BatchDeleteEntities].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchDeleteEntitiesRequest {
    /// The name of the entity type to delete entries for. Format:
    /// `projects/<Project ID>/agent/entityTypes/<Entity Type ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The reference `values` of the entities to delete. Note that
    /// these are not fully-qualified names, i.e. they don't start with
    /// `projects/<Project ID>`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entity_values: std::vec::Vec<std::string::String>,

    /// The language used to access language-specific data.
    /// If not specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BatchDeleteEntitiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::BatchDeleteEntitiesRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [entity_values][crate::model::BatchDeleteEntitiesRequest::entity_values].
    ///
    /// This is a **required** field for requests.
    pub fn set_entity_values<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.entity_values = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [language_code][crate::model::BatchDeleteEntitiesRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }
}

impl wkt::message::Message for BatchDeleteEntitiesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.BatchDeleteEntitiesRequest"
    }
}

/// Represents a part of a training phrase.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TrainingPhrasePart {
    /// The text for this part.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub text: std::string::String,

    /// The entity type name prefixed with `@`.
    /// This field is required for annotated parts of the training phrase.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub entity_type: std::string::String,

    /// The parameter name for the value extracted from the
    /// annotated part of the example.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub alias: std::string::String,

    /// Indicates whether the text was manually annotated.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub user_defined: bool,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TrainingPhrasePart {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [text][crate::model::TrainingPhrasePart::text].
    ///
    /// This is a **required** field for requests.
    pub fn set_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.text = v.into();
        self
    }

    /// Sets the value of [entity_type][crate::model::TrainingPhrasePart::entity_type].
    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = v.into();
        self
    }

    /// Sets the value of [alias][crate::model::TrainingPhrasePart::alias].
    pub fn set_alias<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.alias = v.into();
        self
    }

    /// Sets the value of [user_defined][crate::model::TrainingPhrasePart::user_defined].
    pub fn set_user_defined<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.user_defined = v.into();
        self
    }
}

impl wkt::message::Message for TrainingPhrasePart {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.Intent.TrainingPhrase.Part"
    }
}

/// Represents an example that the agent is trained on.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TrainingPhrase {
    /// The unique identifier of this training phrase.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The type of the training phrase.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub r#type: crate::model::TrainingPhraseType,

    /// The ordered list of training phrase parts.
    /// The parts are concatenated in order to form the training phrase.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub parts: std::vec::Vec<crate::model::TrainingPhrasePart>,

    /// Indicates how many times this example was added to
    /// the intent. Each time a developer adds an existing sample by editing an
    /// intent or training, this counter is increased.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub times_added_count: i32,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TrainingPhrase {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::TrainingPhrase::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [type][crate::model::TrainingPhrase::type].
    ///
    /// This is a **required** field for requests.
    pub fn set_type<T: std::convert::Into<crate::model::TrainingPhraseType>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [parts][crate::model::TrainingPhrase::parts].
    ///
    /// This is a **required** field for requests.
    pub fn set_parts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::TrainingPhrasePart>,
    {
        use std::iter::Iterator;
        self.parts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [times_added_count][crate::model::TrainingPhrase::times_added_count].
    pub fn set_times_added_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.times_added_count = v.into();
        self
    }
}

impl wkt::message::Message for TrainingPhrase {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.Intent.TrainingPhrase"
    }
}

/// An intent categorizes an end-user's intention for one conversation turn. For
/// each agent, you define many intents, where your combined intents can handle a
/// complete conversation.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Intent {
    /// The unique identifier of this intent.
    /// Required for
    /// [Intents.UpdateIntent][google.cloud.dialogflow.v2.Intents.UpdateIntent]
    /// and
    /// [Intents.BatchUpdateIntents][google.cloud.dialogflow.v2.Intents.BatchUpdateIntents]
    /// methods.
    /// Format: `projects/<Project ID>/agent/intents/<Intent ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The name of this intent.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Indicates whether webhooks are enabled for the intent.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub webhook_state: crate::model::WebhookState,

    /// The priority of this intent. Higher numbers represent higher
    /// priorities.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub priority: i32,

    /// Indicates whether this is a fallback intent.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub is_fallback: bool,

    /// Indicates whether Machine Learning is disabled for the intent.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub ml_disabled: bool,

    /// The list of context names required for this intent to be
    /// triggered.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub input_context_names: std::vec::Vec<std::string::String>,

    /// The collection of event names that trigger the intent.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub events: std::vec::Vec<std::string::String>,

    /// The collection of examples that the agent is
    /// trained on.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub training_phrases: std::vec::Vec<crate::model::TrainingPhrase>,

    /// The name of the action associated with the intent.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub action: std::string::String,

    /// The collection of contexts that are activated when the intent
    /// is matched.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub output_contexts: std::vec::Vec<crate::model::Context>,

    /// Indicates whether to delete all contexts in the current
    /// session when this intent is matched.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub reset_contexts: bool,

    /// The unique identifier of the root intent in the chain of
    /// followup intents.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub root_followup_intent_name: std::string::String,

    /// The unique identifier of the parent intent in the
    /// chain of followup intents. You can set this field when creating an intent,
    /// for example with [CreateIntent][google.cloud.dialogflow.v2.Intents.CreateIntent] or
    /// [BatchUpdateIntents][google.cloud.dialogflow.v2.Intents.BatchUpdateIntents], in order to make this
    /// intent a followup intent.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent_followup_intent_name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Intent {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Intent::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::Intent::display_name].
    ///
    /// This is a **required** field for requests.
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [webhook_state][crate::model::Intent::webhook_state].
    pub fn set_webhook_state<T: std::convert::Into<crate::model::WebhookState>>(mut self, v: T) -> Self {
        self.webhook_state = v.into();
        self
    }

    /// Sets the value of [priority][crate::model::Intent::priority].
    pub fn set_priority<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.priority = v.into();
        self
    }

    /// Sets the value of [is_fallback][crate::model::Intent::is_fallback].
    pub fn set_is_fallback<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_fallback = v.into();
        self
    }

    /// Sets the value of [ml_disabled][crate::model::Intent::ml_disabled].
    pub fn set_ml_disabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.ml_disabled = v.into();
        self
    }

    /// Sets the value of [input_context_names][crate::model::Intent::input_context_names].
    pub fn set_input_context_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.input_context_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [events][crate::model::Intent::events].
    pub fn set_events<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.events = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [training_phrases][crate::model::Intent::training_phrases].
    pub fn set_training_phrases<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::TrainingPhrase>,
    {
        use std::iter::Iterator;
        self.training_phrases = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [action][crate::model::Intent::action].
    pub fn set_action<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.action = v.into();
        self
    }

    /// Sets the value of [output_contexts][crate::model::Intent::output_contexts].
    pub fn set_output_contexts<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Context>,
    {
        use std::iter::Iterator;
        self.output_contexts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [reset_contexts][crate::model::Intent::reset_contexts].
    pub fn set_reset_contexts<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.reset_contexts = v.into();
        self
    }

    /// Sets the value of [root_followup_intent_name][crate::model::Intent::root_followup_intent_name].
    pub fn set_root_followup_intent_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.root_followup_intent_name = v.into();
        self
    }

    /// Sets the value of [parent_followup_intent_name][crate::model::Intent::parent_followup_intent_name].
    pub fn set_parent_followup_intent_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent_followup_intent_name = v.into();
        self
    }
}

impl wkt::message::Message for Intent {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.Intent"
    }
}

/// This message is a wrapper around a collection of intents.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IntentBatch {
    /// A collection of intents.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub intents: std::vec::Vec<crate::model::Intent>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl IntentBatch {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [intents][crate::model::IntentBatch::intents].
    pub fn set_intents<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Intent>,
    {
        use std::iter::Iterator;
        self.intents = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for IntentBatch {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.IntentBatch"
    }
}

/// The request message for
/// [Intents.ListIntents][google.cloud.dialogflow.v2.Intents.ListIntents].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListIntentsRequest {
    /// The agent to list all intents from.
    /// Format: `projects/<Project ID>/agent` or `projects/<Project
    /// ID>/locations/<Location ID>/agent`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The language used to access language-specific data.
    /// If not specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// The resource view to apply to the returned intent.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub intent_view: crate::model::IntentView,

    /// The maximum number of items to return in a single page. By
    /// default 100 and at most 1000.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The next_page_token value returned from a previous list request.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListIntentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListIntentsRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [language_code][crate::model::ListIntentsRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [intent_view][crate::model::ListIntentsRequest::intent_view].
    pub fn set_intent_view<T: std::convert::Into<crate::model::IntentView>>(mut self, v: T) -> Self {
        self.intent_view = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListIntentsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListIntentsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListIntentsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ListIntentsRequest"
    }
}

/// The response message for
/// [Intents.ListIntents][google.cloud.dialogflow.v2.Intents.ListIntents].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListIntentsResponse {
    /// The list of agent intents. There will be a maximum number of items
    /// returned based on the page_size field in the request.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub intents: std::vec::Vec<crate::model::Intent>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListIntentsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [intents][crate::model::ListIntentsResponse::intents].
    pub fn set_intents<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Intent>,
    {
        use std::iter::Iterator;
        self.intents = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListIntentsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListIntentsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ListIntentsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListIntentsResponse {
    type PageItem = crate::model::Intent;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.intents
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The request message for
/// [Intents.GetIntent][google.cloud.dialogflow.v2.Intents.GetIntent].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetIntentRequest {
    /// The name of the intent.
    /// Format: `projects/<Project ID>/agent/intents/<Intent ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The language used to access language-specific data.
    /// If not specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// The resource view to apply to the returned intent.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub intent_view: crate::model::IntentView,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetIntentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetIntentRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [language_code][crate::model::GetIntentRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [intent_view][crate::model::GetIntentRequest::intent_view].
    pub fn set_intent_view<T: std::convert::Into<crate::model::IntentView>>(mut self, v: T) -> Self {
        self.intent_view = v.into();
        self
    }
}

impl wkt::message::Message for GetIntentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.GetIntentRequest"
    }
}

/// The request message for
/// [Intents.CreateIntent][google.cloud.dialogflow.v2.Intents.CreateIntent].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateIntentRequest {
    /// The agent to create a intent for.
    /// Format: `projects/<Project ID>/agent`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The intent to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub intent: std::option::Option<crate::model::Intent>,

    /// The language used to access language-specific data.
    /// If not specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// The resource view to apply to the returned intent.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub intent_view: crate::model::IntentView,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateIntentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateIntentRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [intent][crate::model::CreateIntentRequest::intent].
    ///
    /// This is a **required** field for requests.
    pub fn set_intent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Intent>,
    {
        self.intent = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [intent][crate::model::CreateIntentRequest::intent].
    pub fn set_or_clear_intent<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Intent>,
    {
        self.intent = v.map(|x| x.into());
        self
    }

    /// Sets the value of [language_code][crate::model::CreateIntentRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [intent_view][crate::model::CreateIntentRequest::intent_view].
    pub fn set_intent_view<T: std::convert::Into<crate::model::IntentView>>(mut self, v: T) -> Self {
        self.intent_view = v.into();
        self
    }
}

impl wkt::message::Message for CreateIntentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.CreateIntentRequest"
    }
}

/// The request message for
/// [Intents.UpdateIntent][google.cloud.dialogflow.v2.Intents.UpdateIntent].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateIntentRequest {
    /// The intent to update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub intent: std::option::Option<crate::model::Intent>,

    /// The language used to access language-specific data.
    /// If not specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// The mask to control which fields get updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    /// The resource view to apply to the returned intent.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub intent_view: crate::model::IntentView,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateIntentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [intent][crate::model::UpdateIntentRequest::intent].
    ///
    /// This is a **required** field for requests.
    pub fn set_intent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Intent>,
    {
        self.intent = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [intent][crate::model::UpdateIntentRequest::intent].
    pub fn set_or_clear_intent<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Intent>,
    {
        self.intent = v.map(|x| x.into());
        self
    }

    /// Sets the value of [language_code][crate::model::UpdateIntentRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [update_mask][crate::model::UpdateIntentRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::UpdateIntentRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [intent_view][crate::model::UpdateIntentRequest::intent_view].
    pub fn set_intent_view<T: std::convert::Into<crate::model::IntentView>>(mut self, v: T) -> Self {
        self.intent_view = v.into();
        self
    }
}

impl wkt::message::Message for UpdateIntentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.UpdateIntentRequest"
    }
}

/// The request message for
/// [Intents.DeleteIntent][google.cloud.dialogflow.v2.Intents.DeleteIntent].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteIntentRequest {
    /// The name of the intent to delete. If this intent has direct or
    /// indirect followup intents, we also delete them.
    /// Format: `projects/<Project ID>/agent/intents/<Intent ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteIntentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteIntentRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteIntentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.DeleteIntentRequest"
    }
}

/// The request message for
/// [Intents.BatchUpdateIntents][google.cloud.dialogflow.v2.Intents.BatchUpdateIntents].
///
/// Only one of `intent_batch_uri` or `intent_batch_inline` should be set.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchUpdateIntentsRequest {
    /// The name of the agent to update or create intents in.
    /// Format: `projects/<Project ID>/agent`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The URI to a Google Cloud Storage file containing intents to update or
    /// create. The file format can either be a serialized proto (of IntentBatch
    /// type) or JSON object. Note: The URI must start with "gs://".
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub intent_batch_uri: std::string::String,

    /// The collection of intents to update or create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub intent_batch_inline: std::option::Option<crate::model::IntentBatch>,

    /// The language used to access language-specific data.
    /// If not specified, the agent's default language is used.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub language_code: std::string::String,

    /// The mask to control which fields get updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    /// The resource view to apply to the returned intent.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub intent_view: crate::model::IntentView,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BatchUpdateIntentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::BatchUpdateIntentsRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [intent_batch_uri][crate::model::BatchUpdateIntentsRequest::intent_batch_uri].
    pub fn set_intent_batch_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.intent_batch_uri = v.into();
        self
    }

    /// Sets the value of [intent_batch_inline][crate::model::BatchUpdateIntentsRequest::intent_batch_inline].
    pub fn set_intent_batch_inline<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::IntentBatch>,
    {
        self.intent_batch_inline = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [intent_batch_inline][crate::model::BatchUpdateIntentsRequest::intent_batch_inline].
    pub fn set_or_clear_intent_batch_inline<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::IntentBatch>,
    {
        self.intent_batch_inline = v.map(|x| x.into());
        self
    }

    /// Sets the value of [language_code][crate::model::BatchUpdateIntentsRequest::language_code].
    pub fn set_language_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [update_mask][crate::model::BatchUpdateIntentsRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::BatchUpdateIntentsRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [intent_view][crate::model::BatchUpdateIntentsRequest::intent_view].
    pub fn set_intent_view<T: std::convert::Into<crate::model::IntentView>>(mut self, v: T) -> Self {
        self.intent_view = v.into();
        self
    }
}

impl wkt::message::Message for BatchUpdateIntentsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.BatchUpdateIntentsRequest"
    }
}

/// The response message for
/// [Intents.BatchUpdateIntents][google.cloud.dialogflow.v2.Intents.BatchUpdateIntents].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchUpdateIntentsResponse {
    /// The collection of updated or created intents.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub intents: std::vec::Vec<crate::model::Intent>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BatchUpdateIntentsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [intents][crate::model::BatchUpdateIntentsResponse::intents].
    pub fn set_intents<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Intent>,
    {
        use std::iter::Iterator;
        self.intents = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for BatchUpdateIntentsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.BatchUpdateIntentsResponse"
    }
}

/// The request message for
/// [Intents.BatchDeleteIntents][google.cloud.dialogflow.v2.Intents.BatchDeleteIntents].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchDeleteIntentsRequest {
    /// The name of the agent to delete all entities types for. Format:
    /// `projects/<Project ID>/agent`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The collection of intents to delete. Only intent `name` must be
    /// filled in.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub intents: std::vec::Vec<crate::model::Intent>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BatchDeleteIntentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::BatchDeleteIntentsRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [intents][crate::model::BatchDeleteIntentsRequest::intents].
    ///
    /// This is a **required** field for requests.
    pub fn set_intents<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Intent>,
    {
        use std::iter::Iterator;
        self.intents = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for BatchDeleteIntentsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.BatchDeleteIntentsRequest"
    }
}

/// A session represents a conversation between a Dialogflow agent and an
/// end-user. You can create special entities, called session entities, during a
/// session. Session entities can extend or replace custom entity types and only
/// exist during the session that they were created for.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SessionEntityType {
    /// The unique identifier of this session entity type. Format:
    /// `projects/<Project ID>/agent/sessions/<Session ID>/entityTypes/<Entity Type
    /// Display Name>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Indicates whether the additional data should override or
    /// supplement the custom entity type definition.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub entity_override_mode: crate::model::EntityOverrideMode,

    /// The collection of entities associated with this session entity
    /// type.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entities: std::vec::Vec<crate::model::Entity>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl SessionEntityType {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::SessionEntityType::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [entity_override_mode][crate::model::SessionEntityType::entity_override_mode].
    ///
    /// This is a **required** field for requests.
    pub fn set_entity_override_mode<T: std::convert::Into<crate::model::EntityOverrideMode>>(mut self, v: T) -> Self {
        self.entity_override_mode = v.into();
        self
    }

    /// Sets the value of [entities][crate::model::SessionEntityType::entities].
    ///
    /// This is a **required** field for requests.
    pub fn set_entities<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Entity>,
    {
        use std::iter::Iterator;
        self.entities = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for SessionEntityType {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.SessionEntityType"
    }
}

/// The request message for
/// [SessionEntityTypes.ListSessionEntityTypes][google.cloud.dialogflow.v2.SessionEntityTypes.ListSessionEntityTypes].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSessionEntityTypesRequest {
    /// The session to list all session entity types from.
    /// Format: `projects/<Project ID>/agent/sessions/<Session ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The maximum number of items to return in a single page. By
    /// default 100 and at most 1000.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The next_page_token value returned from a previous list request.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListSessionEntityTypesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListSessionEntityTypesRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListSessionEntityTypesRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListSessionEntityTypesRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListSessionEntityTypesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ListSessionEntityTypesRequest"
    }
}

/// The response message for
/// [SessionEntityTypes.ListSessionEntityTypes][google.cloud.dialogflow.v2.SessionEntityTypes.ListSessionEntityTypes].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSessionEntityTypesResponse {
    /// The list of session entity types. There will be a maximum number of items
    /// returned based on the page_size field in the request.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub session_entity_types: std::vec::Vec<crate::model::SessionEntityType>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListSessionEntityTypesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [session_entity_types][crate::model::ListSessionEntityTypesResponse::session_entity_types].
    pub fn set_session_entity_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::SessionEntityType>,
    {
        use std::iter::Iterator;
        self.session_entity_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListSessionEntityTypesResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListSessionEntityTypesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.ListSessionEntityTypesResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListSessionEntityTypesResponse {
    type PageItem = crate::model::SessionEntityType;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.session_entity_types
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The request message for
/// [SessionEntityTypes.GetSessionEntityType][google.cloud.dialogflow.v2.SessionEntityTypes.GetSessionEntityType].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetSessionEntityTypeRequest {
    /// The name of the session entity type. Format:
    /// `projects/<Project ID>/agent/sessions/<Session ID>/entityTypes/<Entity Type
    /// Display Name>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetSessionEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetSessionEntityTypeRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetSessionEntityTypeRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.GetSessionEntityTypeRequest"
    }
}

/// The request message for
/// [SessionEntityTypes.CreateSessionEntityType][google.cloud.dialogflow.v2.SessionEntityTypes.CreateSessionEntityType].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateSessionEntityTypeRequest {
    /// The session to create a session entity type for.
    /// Format: `projects/<Project ID>/agent/sessions/<Session ID>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The session entity type to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub session_entity_type: std::option::Option<crate::model::SessionEntityType>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateSessionEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateSessionEntityTypeRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [session_entity_type][crate::model::CreateSessionEntityTypeRequest::session_entity_type].
    ///
    /// This is a **required** field for requests.
    pub fn set_session_entity_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SessionEntityType>,
    {
        self.session_entity_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [session_entity_type][crate::model::CreateSessionEntityTypeRequest::session_entity_type].
    pub fn set_or_clear_session_entity_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SessionEntityType>,
    {
        self.session_entity_type = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateSessionEntityTypeRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.CreateSessionEntityTypeRequest"
    }
}

/// The request message for
/// [SessionEntityTypes.UpdateSessionEntityType][google.cloud.dialogflow.v2.SessionEntityTypes.UpdateSessionEntityType].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateSessionEntityTypeRequest {
    /// The session entity type to update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub session_entity_type: std::option::Option<crate::model::SessionEntityType>,

    /// The mask to control which fields get updated.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateSessionEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [session_entity_type][crate::model::UpdateSessionEntityTypeRequest::session_entity_type].
    ///
    /// This is a **required** field for requests.
    pub fn set_session_entity_type<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::SessionEntityType>,
    {
        self.session_entity_type = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [session_entity_type][crate::model::UpdateSessionEntityTypeRequest::session_entity_type].
    pub fn set_or_clear_session_entity_type<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::SessionEntityType>,
    {
        self.session_entity_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][crate::model::UpdateSessionEntityTypeRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::UpdateSessionEntityTypeRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UpdateSessionEntityTypeRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.UpdateSessionEntityTypeRequest"
    }
}

/// The request message for
/// [SessionEntityTypes.DeleteSessionEntityType][google.cloud.dialogflow.v2.SessionEntityTypes.DeleteSessionEntityType].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteSessionEntityTypeRequest {
    /// The name of the entity type to delete. Format:
    /// `projects/<Project ID>/agent/sessions/<Session ID>/entityTypes/<Entity Type
    /// Display Name>`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteSessionEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteSessionEntityTypeRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteSessionEntityTypeRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dialogflow.v2.DeleteSessionEntityTypeRequest"
    }
}

/// Represents kinds of entities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum EntityKind {
    /// Not specified. This value should be never used.
    #[default]
    #[serde(rename = "KIND_UNSPECIFIED")]
    KindUnspecified,
    /// Map entity types allow mapping of a group of synonyms to a canonical
    /// value.
    #[serde(rename = "KIND_MAP")]
    KindMap,
    /// List entity types contain a set of entries that do not map to canonical
    /// values. However, list entity types can contain references to other entity
    /// types (with or without aliases).
    #[serde(rename = "KIND_LIST")]
    KindList,
    /// Regexp entity types allow to specify regular expressions in entries
    /// values.
    #[serde(rename = "KIND_REGEXP")]
    KindRegexp,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// Represents different entity type expansion modes. Automated expansion
/// allows an agent to recognize values that have not been explicitly listed in
/// the entity (for example, new kinds of shopping list items).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum AutoExpansionMode {
    /// Auto expansion disabled for the entity.
    #[default]
    #[serde(rename = "AUTO_EXPANSION_MODE_UNSPECIFIED")]
    AutoExpansionModeUnspecified,
    /// Allows an agent to recognize values that have not been explicitly
    /// listed in the entity.
    #[serde(rename = "AUTO_EXPANSION_MODE_DEFAULT")]
    AutoExpansionModeDefault,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// Represents the options for views of an intent.
/// An intent can be a sizable object. Therefore, we provide a resource view that
/// does not return training phrases in the response by default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum IntentView {
    /// Training phrases field is not populated in the response.
    #[default]
    #[serde(rename = "INTENT_VIEW_UNSPECIFIED")]
    IntentViewUnspecified,
    /// All fields are populated.
    #[serde(rename = "INTENT_VIEW_FULL")]
    IntentViewFull,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// Represents the different states that webhooks can be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum WebhookState {
    /// Webhook is disabled in the agent and in the intent.
    #[default]
    #[serde(rename = "WEBHOOK_STATE_UNSPECIFIED")]
    WebhookStateUnspecified,
    /// Webhook is enabled in the agent and in the intent.
    #[serde(rename = "WEBHOOK_STATE_ENABLED")]
    WebhookStateEnabled,
    /// Webhook is enabled in the agent and in the intent. Also, each slot
    /// filling prompt is forwarded to the webhook.
    #[serde(rename = "WEBHOOK_STATE_ENABLED_FOR_SLOT_FILLING")]
    WebhookStateEnabledForSlotFilling,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// Represents different types of training phrases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum TrainingPhraseType {
    /// Not specified. This value should never be used.
    #[default]
    #[serde(rename = "TYPE_UNSPECIFIED")]
    TypeUnspecified,
    /// Examples do not contain @-prefixed entity type names, but example parts
    /// can be annotated with entity types.
    #[serde(rename = "EXAMPLE")]
    Example,
    /// Templates are not annotated with entity types, but they can contain
    /// @-prefixed entity type names as substrings.
    /// Template mode has been deprecated.
    #[serde(rename = "TEMPLATE")]
    Template,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// The types of modifications for a session entity type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum EntityOverrideMode {
    /// Not specified. This value should be never used.
    #[default]
    #[serde(rename = "ENTITY_OVERRIDE_MODE_UNSPECIFIED")]
    EntityOverrideModeUnspecified,
    /// The collection of session entities overrides the collection of entities
    /// in the corresponding developer entity type.
    #[serde(rename = "ENTITY_OVERRIDE_MODE_OVERRIDE")]
    EntityOverrideModeOverride,
    /// The collection of session entities extends the collection of entities in
    /// the corresponding developer entity type.
    #[serde(rename = "ENTITY_OVERRIDE_MODE_SUPPLEMENT")]
    EntityOverrideModeSupplement,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// Match mode determines how intents are detected from user queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum MatchMode {
    /// Not specified.
    #[default]
    #[serde(rename = "MATCH_MODE_UNSPECIFIED")]
    MatchModeUnspecified,
    /// Best for agents with a small number of examples in intents and/or wide
    /// use of templates syntax and composite entities.
    #[serde(rename = "MATCH_MODE_HYBRID")]
    MatchModeHybrid,
    /// Can be used for agents with a large number of examples in intents,
    /// especially the ones using @sys.any or very large custom entities.
    #[serde(rename = "MATCH_MODE_ML_ONLY")]
    MatchModeMlOnly,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}
