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

use crate::Result;

/// Implements [Agents](super::stub::Agents) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Agents {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for Agents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Agents")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Agents {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::AGENTS,
            "google.cloud.dialogflow.v2.Agents",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::Agents for Agents {
    async fn get_agent(
        &self,
        req: crate::model::GetAgentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Agent>> {
        let options = self.settings.apply("GetAgent", options);
        let path = format!(
            "/v2/{}/agent",
            gaxi::path_parameter::matching(&req.parent, "projects/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn search_agents(
        &self,
        mut req: crate::model::SearchAgentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SearchAgentsResponse>> {
        let options = self.settings.apply("SearchAgents", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("SearchAgents")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v2/{}/agent:search",
            gaxi::path_parameter::matching(&req.parent, "projects/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = gaxi::query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn train_agent(
        &self,
        req: crate::model::TrainAgentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("TrainAgent", options);
        let path = format!(
            "/v2/{}/agent:train",
            gaxi::path_parameter::matching(&req.parent, "projects/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn export_agent(
        &self,
        req: crate::model::ExportAgentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("ExportAgent", options);
        let path = format!(
            "/v2/{}/agent:export",
            gaxi::path_parameter::matching(&req.parent, "projects/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn import_agent(
        &self,
        req: crate::model::ImportAgentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("ImportAgent", options);
        let path = format!(
            "/v2/{}/agent:import",
            gaxi::path_parameter::matching(&req.parent, "projects/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn restore_agent(
        &self,
        req: crate::model::RestoreAgentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("RestoreAgent", options);
        let path = format!(
            "/v2/{}/agent:restore",
            gaxi::path_parameter::matching(&req.parent, "projects/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("GetOperation", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/operations/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn cancel_operation(
        &self,
        req: longrunning::model::CancelOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("CancelOperation", options);
        let path = format!(
            "/v2/{}:cancel",
            gaxi::path_parameter::matching(&req.name, "projects/*/operations/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn delete_operation(
        &self,
        req: longrunning::model::DeleteOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteOperation", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/operations/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    fn get_polling_error_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        self.inner.get_polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        self.inner.get_polling_backoff_policy(options)
    }
}

/// Implements [Contexts](super::stub::Contexts) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Contexts {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for Contexts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Contexts")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Contexts {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::CONTEXTS,
            "google.cloud.dialogflow.v2.Contexts",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::Contexts for Contexts {
    async fn list_contexts(
        &self,
        mut req: crate::model::ListContextsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListContextsResponse>> {
        let options = self.settings.apply("ListContexts", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListContexts")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v2/{}/contexts",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent/sessions/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = gaxi::query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_context(
        &self,
        req: crate::model::GetContextRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Context>> {
        let options = self.settings.apply("GetContext", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/agent/sessions/*/contexts/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_context(
        &self,
        req: crate::model::CreateContextRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Context>> {
        let options = self.settings.apply("CreateContext", options);
        let path = format!(
            "/v2/{}/contexts",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent/sessions/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, req.context, options).await
    }

    async fn update_context(
        &self,
        req: crate::model::UpdateContextRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Context>> {
        let options = self.settings.apply("UpdateContext", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&gaxi::path_parameter::required(req.context.as_ref(), "context")?.name, "projects/*/agent/sessions/*/contexts/*", "context.name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "updateMask", &req.update_mask)?;
        self.inner.execute(builder, req.context, options).await
    }

    async fn delete_context(
        &self,
        req: crate::model::DeleteContextRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteContext", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/agent/sessions/*/contexts/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_all_contexts(
        &self,
        req: crate::model::DeleteAllContextsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteAllContexts", options);
        let path = format!(
            "/v2/{}/contexts",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent/sessions/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}

/// Implements [EntityTypes](super::stub::EntityTypes) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct EntityTypes {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for EntityTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("EntityTypes")
            .field("inner", &self.inner)
            .finish()
    }
}

impl EntityTypes {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::ENTITY_TYPES,
            "google.cloud.dialogflow.v2.EntityTypes",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::EntityTypes for EntityTypes {
    async fn list_entity_types(
        &self,
        mut req: crate::model::ListEntityTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListEntityTypesResponse>> {
        let options = self.settings.apply("ListEntityTypes", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListEntityTypes")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v2/{}/entityTypes",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "languageCode", &req.language_code)?;
        let builder = gaxi::query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = gaxi::query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_entity_type(
        &self,
        req: crate::model::GetEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EntityType>> {
        let options = self.settings.apply("GetEntityType", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/agent/entityTypes/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "languageCode", &req.language_code)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_entity_type(
        &self,
        req: crate::model::CreateEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EntityType>> {
        let options = self.settings.apply("CreateEntityType", options);
        let path = format!(
            "/v2/{}/entityTypes",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "languageCode", &req.language_code)?;
        self.inner.execute(builder, req.entity_type, options).await
    }

    async fn update_entity_type(
        &self,
        req: crate::model::UpdateEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EntityType>> {
        let options = self.settings.apply("UpdateEntityType", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&gaxi::path_parameter::required(req.entity_type.as_ref(), "entity_type")?.name, "projects/*/agent/entityTypes/*", "entity_type.name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "languageCode", &req.language_code)?;
        let builder = gaxi::query_parameter::add(builder, "updateMask", &req.update_mask)?;
        self.inner.execute(builder, req.entity_type, options).await
    }

    async fn delete_entity_type(
        &self,
        req: crate::model::DeleteEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteEntityType", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/agent/entityTypes/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn batch_update_entity_types(
        &self,
        req: crate::model::BatchUpdateEntityTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("BatchUpdateEntityTypes", options);
        let path = format!(
            "/v2/{}/entityTypes:batchUpdate",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn batch_delete_entity_types(
        &self,
        req: crate::model::BatchDeleteEntityTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("BatchDeleteEntityTypes", options);
        let path = format!(
            "/v2/{}/entityTypes:batchDelete",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn batch_create_entities(
        &self,
        req: crate::model::BatchCreateEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("BatchCreateEntities", options);
        let path = format!(
            "/v2/{}/entities:batchCreate",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent/entityTypes/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn batch_update_entities(
        &self,
        req: crate::model::BatchUpdateEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("BatchUpdateEntities", options);
        let path = format!(
            "/v2/{}/entities:batchUpdate",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent/entityTypes/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn batch_delete_entities(
        &self,
        req: crate::model::BatchDeleteEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("BatchDeleteEntities", options);
        let path = format!(
            "/v2/{}/entities:batchDelete",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent/entityTypes/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("GetOperation", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/operations/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn cancel_operation(
        &self,
        req: longrunning::model::CancelOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("CancelOperation", options);
        let path = format!(
            "/v2/{}:cancel",
            gaxi::path_parameter::matching(&req.name, "projects/*/operations/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn delete_operation(
        &self,
        req: longrunning::model::DeleteOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteOperation", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/operations/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    fn get_polling_error_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        self.inner.get_polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        self.inner.get_polling_backoff_policy(options)
    }
}

/// Implements [Intents](super::stub::Intents) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Intents {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for Intents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Intents")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Intents {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::INTENTS,
            "google.cloud.dialogflow.v2.Intents",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::Intents for Intents {
    async fn list_intents(
        &self,
        mut req: crate::model::ListIntentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListIntentsResponse>> {
        let options = self.settings.apply("ListIntents", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListIntents")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v2/{}/intents",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "languageCode", &req.language_code)?;
        let builder = if wkt::internal::is_default(&req.intent_view) {
            builder
        } else {
            gaxi::query_parameter::add(builder, "intentView", &req.intent_view)?
        };
        let builder = gaxi::query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = gaxi::query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_intent(
        &self,
        req: crate::model::GetIntentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Intent>> {
        let options = self.settings.apply("GetIntent", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/agent/intents/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "languageCode", &req.language_code)?;
        let builder = if wkt::internal::is_default(&req.intent_view) {
            builder
        } else {
            gaxi::query_parameter::add(builder, "intentView", &req.intent_view)?
        };
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_intent(
        &self,
        req: crate::model::CreateIntentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Intent>> {
        let options = self.settings.apply("CreateIntent", options);
        let path = format!(
            "/v2/{}/intents",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "languageCode", &req.language_code)?;
        let builder = if wkt::internal::is_default(&req.intent_view) {
            builder
        } else {
            gaxi::query_parameter::add(builder, "intentView", &req.intent_view)?
        };
        self.inner.execute(builder, req.intent, options).await
    }

    async fn update_intent(
        &self,
        req: crate::model::UpdateIntentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Intent>> {
        let options = self.settings.apply("UpdateIntent", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&gaxi::path_parameter::required(req.intent.as_ref(), "intent")?.name, "projects/*/agent/intents/*", "intent.name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "languageCode", &req.language_code)?;
        let builder = gaxi::query_parameter::add(builder, "updateMask", &req.update_mask)?;
        let builder = if wkt::internal::is_default(&req.intent_view) {
            builder
        } else {
            gaxi::query_parameter::add(builder, "intentView", &req.intent_view)?
        };
        self.inner.execute(builder, req.intent, options).await
    }

    async fn delete_intent(
        &self,
        req: crate::model::DeleteIntentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteIntent", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/agent/intents/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn batch_update_intents(
        &self,
        req: crate::model::BatchUpdateIntentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("BatchUpdateIntents", options);
        let path = format!(
            "/v2/{}/intents:batchUpdate",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn batch_delete_intents(
        &self,
        req: crate::model::BatchDeleteIntentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("BatchDeleteIntents", options);
        let path = format!(
            "/v2/{}/intents:batchDelete",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("GetOperation", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/operations/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn cancel_operation(
        &self,
        req: longrunning::model::CancelOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("CancelOperation", options);
        let path = format!(
            "/v2/{}:cancel",
            gaxi::path_parameter::matching(&req.name, "projects/*/operations/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn delete_operation(
        &self,
        req: longrunning::model::DeleteOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteOperation", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/operations/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    fn get_polling_error_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        self.inner.get_polling_error_policy(options)
    }

    fn get_polling_backoff_policy(
        &self,
        options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        self.inner.get_polling_backoff_policy(options)
    }
}

/// Implements [SessionEntityTypes](super::stub::SessionEntityTypes) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct SessionEntityTypes {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for SessionEntityTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("SessionEntityTypes")
            .field("inner", &self.inner)
            .finish()
    }
}

impl SessionEntityTypes {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::SESSION_ENTITY_TYPES,
            "google.cloud.dialogflow.v2.SessionEntityTypes",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::SessionEntityTypes for SessionEntityTypes {
    async fn list_session_entity_types(
        &self,
        mut req: crate::model::ListSessionEntityTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListSessionEntityTypesResponse>> {
        let options = self.settings.apply("ListSessionEntityTypes", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListSessionEntityTypes")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v2/{}/entityTypes",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent/sessions/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = gaxi::query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_session_entity_type(
        &self,
        req: crate::model::GetSessionEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SessionEntityType>> {
        let options = self.settings.apply("GetSessionEntityType", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/agent/sessions/*/entityTypes/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_session_entity_type(
        &self,
        req: crate::model::CreateSessionEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SessionEntityType>> {
        let options = self.settings.apply("CreateSessionEntityType", options);
        let path = format!(
            "/v2/{}/entityTypes",
            gaxi::path_parameter::matching(&req.parent, "projects/*/agent/sessions/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, req.session_entity_type, options).await
    }

    async fn update_session_entity_type(
        &self,
        req: crate::model::UpdateSessionEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SessionEntityType>> {
        let options = self.settings.apply("UpdateSessionEntityType", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&gaxi::path_parameter::required(req.session_entity_type.as_ref(), "session_entity_type")?.name, "projects/*/agent/sessions/*/entityTypes/*", "session_entity_type.name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "updateMask", &req.update_mask)?;
        self.inner.execute(builder, req.session_entity_type, options).await
    }

    async fn delete_session_entity_type(
        &self,
        req: crate::model::DeleteSessionEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteSessionEntityType", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/agent/sessions/*/entityTypes/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}
