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

/// Implements a client for the Dialogflow API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use gapic_dialogflow_v2::client::Agents;
/// # use auth::credentials::anonymous::Builder as Anonymous;
/// let client = Agents::builder()
///     .with_credentials(Anonymous::new().build())
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for managing [Agents][google.cloud.dialogflow.v2.Agent].
///
/// # Configuration
///
/// To configure `Agents` use the `with_*` methods in the type returned
/// by [builder()][Agents::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://dialogflow.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
/// * [with_client_config()]: overrides the timeouts, retryable codes, and page
///   sizes bundled with this client.
///
/// [with_endpoint()]: super::builder::agents::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::agents::ClientBuilder::with_credentials
/// [with_client_config()]: super::builder::agents::ClientBuilder::with_client_config
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `Agents` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Agents` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Agents {
    inner: std::sync::Arc<dyn super::stub::dynamic::Agents>,
}

impl Agents {
    /// Returns a builder for [Agents].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use gapic_dialogflow_v2::client::Agents;
    /// # use auth::credentials::anonymous::Builder as Anonymous;
    /// let client = Agents::builder()
    ///     .with_credentials(Anonymous::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::agents::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::agents::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Agents + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Agents>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Agents> {
        super::transport::Agents::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Agents> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Agents::new)
    }

    /// Retrieves the specified agent.
    pub fn get_agent(&self) -> super::builder::agents::GetAgent {
        super::builder::agents::GetAgent::new(self.inner.clone())
    }

    /// Returns the list of agents.
    ///
    /// Since there is at most one conversational agent per project, this method is
    /// useful primarily for listing all agents across projects the caller has
    /// access to. One can achieve that with a wildcard project collection id "-".
    pub fn search_agents(&self) -> super::builder::agents::SearchAgents {
        super::builder::agents::SearchAgents::new(self.inner.clone())
    }

    /// Trains the specified agent.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn train_agent(&self) -> super::builder::agents::TrainAgent {
        super::builder::agents::TrainAgent::new(self.inner.clone())
    }

    /// Exports the specified agent to a ZIP file.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn export_agent(&self) -> super::builder::agents::ExportAgent {
        super::builder::agents::ExportAgent::new(self.inner.clone())
    }

    /// Imports the specified agent from a ZIP file.
    ///
    /// Uploads new intents and entity types without deleting the existing ones.
    /// Intents and entity types with the same name are replaced with the new
    /// versions from ImportAgentRequest.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn import_agent(&self) -> super::builder::agents::ImportAgent {
        super::builder::agents::ImportAgent::new(self.inner.clone())
    }

    /// Restores the specified agent from a ZIP file.
    ///
    /// Replaces the current agent version with a new one. All the intents and
    /// entity types in the older version are deleted.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn restore_agent(&self) -> super::builder::agents::RestoreAgent {
        super::builder::agents::RestoreAgent::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn get_operation(&self) -> super::builder::agents::GetOperation {
        super::builder::agents::GetOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn cancel_operation(&self) -> super::builder::agents::CancelOperation {
        super::builder::agents::CancelOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn delete_operation(&self) -> super::builder::agents::DeleteOperation {
        super::builder::agents::DeleteOperation::new(self.inner.clone())
    }

    /// Returns the fully-qualified resource name for a project.
    ///
    /// # Example
    /// ```
    /// # use gapic_dialogflow_v2::client::Agents;
    /// let name = Agents::project_path("my-project")?;
    /// assert_eq!(name, "projects/my-project");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn project_path(
        project: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}",
        )?
            .render(&[("project", project)])
    }
}

/// Implements a client for the Dialogflow API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use gapic_dialogflow_v2::client::Contexts;
/// # use auth::credentials::anonymous::Builder as Anonymous;
/// let client = Contexts::builder()
///     .with_credentials(Anonymous::new().build())
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for managing [Contexts][google.cloud.dialogflow.v2.Context].
///
/// # Configuration
///
/// To configure `Contexts` use the `with_*` methods in the type returned
/// by [builder()][Contexts::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://dialogflow.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
/// * [with_client_config()]: overrides the timeouts, retryable codes, and page
///   sizes bundled with this client.
///
/// [with_endpoint()]: super::builder::contexts::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::contexts::ClientBuilder::with_credentials
/// [with_client_config()]: super::builder::contexts::ClientBuilder::with_client_config
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `Contexts` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Contexts` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Contexts {
    inner: std::sync::Arc<dyn super::stub::dynamic::Contexts>,
}

impl Contexts {
    /// Returns a builder for [Contexts].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use gapic_dialogflow_v2::client::Contexts;
    /// # use auth::credentials::anonymous::Builder as Anonymous;
    /// let client = Contexts::builder()
    ///     .with_credentials(Anonymous::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::contexts::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::contexts::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Contexts + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Contexts>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Contexts> {
        super::transport::Contexts::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Contexts> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Contexts::new)
    }

    /// Returns the list of all contexts in the specified session.
    pub fn list_contexts(&self) -> super::builder::contexts::ListContexts {
        super::builder::contexts::ListContexts::new(self.inner.clone())
    }

    /// Retrieves the specified context.
    pub fn get_context(&self) -> super::builder::contexts::GetContext {
        super::builder::contexts::GetContext::new(self.inner.clone())
    }

    /// Creates a context.
    ///
    /// If the specified context already exists, overrides the context.
    pub fn create_context(&self) -> super::builder::contexts::CreateContext {
        super::builder::contexts::CreateContext::new(self.inner.clone())
    }

    /// Updates the specified context.
    pub fn update_context(&self) -> super::builder::contexts::UpdateContext {
        super::builder::contexts::UpdateContext::new(self.inner.clone())
    }

    /// Deletes the specified context.
    pub fn delete_context(&self) -> super::builder::contexts::DeleteContext {
        super::builder::contexts::DeleteContext::new(self.inner.clone())
    }

    /// Deletes all active contexts in the specified session.
    pub fn delete_all_contexts(&self) -> super::builder::contexts::DeleteAllContexts {
        super::builder::contexts::DeleteAllContexts::new(self.inner.clone())
    }

    /// Returns the fully-qualified resource name for a session.
    ///
    /// # Example
    /// ```
    /// # use gapic_dialogflow_v2::client::Contexts;
    /// let name = Contexts::session_path("my-project", "my-session")?;
    /// assert_eq!(name, "projects/my-project/agent/sessions/my-session");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn session_path(
        project: &str,
        session: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/agent/sessions/{session}",
        )?
            .render(&[("project", project), ("session", session)])
    }

    /// Returns the fully-qualified resource name for a context.
    ///
    /// # Example
    /// ```
    /// # use gapic_dialogflow_v2::client::Contexts;
    /// let name = Contexts::context_path("my-project", "my-session", "my-context")?;
    /// assert_eq!(name, "projects/my-project/agent/sessions/my-session/contexts/my-context");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn context_path(
        project: &str,
        session: &str,
        context: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/agent/sessions/{session}/contexts/{context}",
        )?
            .render(&[("project", project), ("session", session), ("context", context)])
    }
}

/// Implements a client for the Dialogflow API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use gapic_dialogflow_v2::client::EntityTypes;
/// # use auth::credentials::anonymous::Builder as Anonymous;
/// let client = EntityTypes::builder()
///     .with_credentials(Anonymous::new().build())
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for managing [EntityTypes][google.cloud.dialogflow.v2.EntityType].
///
/// # Configuration
///
/// To configure `EntityTypes` use the `with_*` methods in the type returned
/// by [builder()][EntityTypes::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://dialogflow.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
/// * [with_client_config()]: overrides the timeouts, retryable codes, and page
///   sizes bundled with this client.
///
/// [with_endpoint()]: super::builder::entity_types::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::entity_types::ClientBuilder::with_credentials
/// [with_client_config()]: super::builder::entity_types::ClientBuilder::with_client_config
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `EntityTypes` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `EntityTypes` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct EntityTypes {
    inner: std::sync::Arc<dyn super::stub::dynamic::EntityTypes>,
}

impl EntityTypes {
    /// Returns a builder for [EntityTypes].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use gapic_dialogflow_v2::client::EntityTypes;
    /// # use auth::credentials::anonymous::Builder as Anonymous;
    /// let client = EntityTypes::builder()
    ///     .with_credentials(Anonymous::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::entity_types::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::entity_types::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::EntityTypes + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::EntityTypes>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::EntityTypes> {
        super::transport::EntityTypes::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::EntityTypes> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::EntityTypes::new)
    }

    /// Returns the list of all entity types in the specified agent.
    pub fn list_entity_types(&self) -> super::builder::entity_types::ListEntityTypes {
        super::builder::entity_types::ListEntityTypes::new(self.inner.clone())
    }

    /// Retrieves the specified entity type.
    pub fn get_entity_type(&self) -> super::builder::entity_types::GetEntityType {
        super::builder::entity_types::GetEntityType::new(self.inner.clone())
    }

    /// Creates an entity type in the specified agent.
    pub fn create_entity_type(&self) -> super::builder::entity_types::CreateEntityType {
        super::builder::entity_types::CreateEntityType::new(self.inner.clone())
    }

    /// Updates the specified entity type.
    pub fn update_entity_type(&self) -> super::builder::entity_types::UpdateEntityType {
        super::builder::entity_types::UpdateEntityType::new(self.inner.clone())
    }

    /// Deletes the specified entity type.
    pub fn delete_entity_type(&self) -> super::builder::entity_types::DeleteEntityType {
        super::builder::entity_types::DeleteEntityType::new(self.inner.clone())
    }

    /// Updates/Creates multiple entity types in the specified agent.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn batch_update_entity_types(&self) -> super::builder::entity_types::BatchUpdateEntityTypes {
        super::builder::entity_types::BatchUpdateEntityTypes::new(self.inner.clone())
    }

    /// Deletes entity types in the specified agent.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn batch_delete_entity_types(&self) -> super::builder::entity_types::BatchDeleteEntityTypes {
        super::builder::entity_types::BatchDeleteEntityTypes::new(self.inner.clone())
    }

    /// Creates multiple new entities in the specified entity type.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn batch_create_entities(&self) -> super::builder::entity_types::BatchCreateEntities {
        super::builder::entity_types::BatchCreateEntities::new(self.inner.clone())
    }

    /// Updates or creates multiple entities in the specified entity type. This
    /// method does not affect entities in the entity type that aren't explicitly
    /// specified in the request.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn batch_update_entities(&self) -> super::builder::entity_types::BatchUpdateEntities {
        super::builder::entity_types::BatchUpdateEntities::new(self.inner.clone())
    }

    /// Deletes entities in the specified entity type.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn batch_delete_entities(&self) -> super::builder::entity_types::BatchDeleteEntities {
        super::builder::entity_types::BatchDeleteEntities::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn get_operation(&self) -> super::builder::entity_types::GetOperation {
        super::builder::entity_types::GetOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn cancel_operation(&self) -> super::builder::entity_types::CancelOperation {
        super::builder::entity_types::CancelOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn delete_operation(&self) -> super::builder::entity_types::DeleteOperation {
        super::builder::entity_types::DeleteOperation::new(self.inner.clone())
    }

    /// Returns the fully-qualified resource name for the agent of a project.
    ///
    /// # Example
    /// ```
    /// # use gapic_dialogflow_v2::client::EntityTypes;
    /// let name = EntityTypes::project_agent_path("my-project")?;
    /// assert_eq!(name, "projects/my-project/agent");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn project_agent_path(
        project: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/agent",
        )?
            .render(&[("project", project)])
    }

    /// Returns the fully-qualified resource name for an entity type.
    ///
    /// # Example
    /// ```
    /// # use gapic_dialogflow_v2::client::EntityTypes;
    /// let name = EntityTypes::entity_type_path("my-project", "my-entity-type")?;
    /// assert_eq!(name, "projects/my-project/agent/entityTypes/my-entity-type");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn entity_type_path(
        project: &str,
        entity_type: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/agent/entityTypes/{entity_type}",
        )?
            .render(&[("project", project), ("entity_type", entity_type)])
    }
}

/// Implements a client for the Dialogflow API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use gapic_dialogflow_v2::client::Intents;
/// # use auth::credentials::anonymous::Builder as Anonymous;
/// let client = Intents::builder()
///     .with_credentials(Anonymous::new().build())
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for managing [Intents][google.cloud.dialogflow.v2.Intent].
///
/// # Configuration
///
/// To configure `Intents` use the `with_*` methods in the type returned
/// by [builder()][Intents::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://dialogflow.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
/// * [with_client_config()]: overrides the timeouts, retryable codes, and page
///   sizes bundled with this client.
///
/// [with_endpoint()]: super::builder::intents::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::intents::ClientBuilder::with_credentials
/// [with_client_config()]: super::builder::intents::ClientBuilder::with_client_config
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `Intents` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Intents` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Intents {
    inner: std::sync::Arc<dyn super::stub::dynamic::Intents>,
}

impl Intents {
    /// Returns a builder for [Intents].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use gapic_dialogflow_v2::client::Intents;
    /// # use auth::credentials::anonymous::Builder as Anonymous;
    /// let client = Intents::builder()
    ///     .with_credentials(Anonymous::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::intents::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::intents::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Intents + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Intents>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Intents> {
        super::transport::Intents::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Intents> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Intents::new)
    }

    /// Returns the list of all intents in the specified agent.
    pub fn list_intents(&self) -> super::builder::intents::ListIntents {
        super::builder::intents::ListIntents::new(self.inner.clone())
    }

    /// Retrieves the specified intent.
    pub fn get_intent(&self) -> super::builder::intents::GetIntent {
        super::builder::intents::GetIntent::new(self.inner.clone())
    }

    /// Creates an intent in the specified agent.
    pub fn create_intent(&self) -> super::builder::intents::CreateIntent {
        super::builder::intents::CreateIntent::new(self.inner.clone())
    }

    /// Updates the specified intent.
    pub fn update_intent(&self) -> super::builder::intents::UpdateIntent {
        super::builder::intents::UpdateIntent::new(self.inner.clone())
    }

    /// Deletes the specified intent and its direct or indirect followup intents.
    pub fn delete_intent(&self) -> super::builder::intents::DeleteIntent {
        super::builder::intents::DeleteIntent::new(self.inner.clone())
    }

    /// Updates/Creates multiple intents in the specified agent.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn batch_update_intents(&self) -> super::builder::intents::BatchUpdateIntents {
        super::builder::intents::BatchUpdateIntents::new(self.inner.clone())
    }

    /// Deletes intents in the specified agent.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn batch_delete_intents(&self) -> super::builder::intents::BatchDeleteIntents {
        super::builder::intents::BatchDeleteIntents::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn get_operation(&self) -> super::builder::intents::GetOperation {
        super::builder::intents::GetOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn cancel_operation(&self) -> super::builder::intents::CancelOperation {
        super::builder::intents::CancelOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn delete_operation(&self) -> super::builder::intents::DeleteOperation {
        super::builder::intents::DeleteOperation::new(self.inner.clone())
    }

    /// Returns the fully-qualified resource name for the agent of a project.
    ///
    /// # Example
    /// ```
    /// # use gapic_dialogflow_v2::client::Intents;
    /// let name = Intents::project_agent_path("my-project")?;
    /// assert_eq!(name, "projects/my-project/agent");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn project_agent_path(
        project: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/agent",
        )?
            .render(&[("project", project)])
    }

    /// Returns the fully-qualified resource name for an intent.
    ///
    /// # Example
    /// ```
    /// # use gapic_dialogflow_v2::client::Intents;
    /// let name = Intents::intent_path("my-project", "my-intent")?;
    /// assert_eq!(name, "projects/my-project/agent/intents/my-intent");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn intent_path(
        project: &str,
        intent: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/agent/intents/{intent}",
        )?
            .render(&[("project", project), ("intent", intent)])
    }

    /// Returns the fully-qualified resource name for an agent.
    ///
    /// # Example
    /// ```
    /// # use gapic_dialogflow_v2::client::Intents;
    /// let name = Intents::agent_path("my-project", "my-agent")?;
    /// assert_eq!(name, "projects/my-project/agents/my-agent");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn agent_path(
        project: &str,
        agent: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/agents/{agent}",
        )?
            .render(&[("project", project), ("agent", agent)])
    }
}

/// Implements a client for the Dialogflow API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use gapic_dialogflow_v2::client::SessionEntityTypes;
/// # use auth::credentials::anonymous::Builder as Anonymous;
/// let client = SessionEntityTypes::builder()
///     .with_credentials(Anonymous::new().build())
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for managing [SessionEntityTypes][google.cloud.dialogflow.v2.SessionEntityType].
///
/// # Configuration
///
/// To configure `SessionEntityTypes` use the `with_*` methods in the type returned
/// by [builder()][SessionEntityTypes::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://dialogflow.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
/// * [with_client_config()]: overrides the timeouts, retryable codes, and page
///   sizes bundled with this client.
///
/// [with_endpoint()]: super::builder::session_entity_types::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::session_entity_types::ClientBuilder::with_credentials
/// [with_client_config()]: super::builder::session_entity_types::ClientBuilder::with_client_config
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `SessionEntityTypes` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `SessionEntityTypes` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct SessionEntityTypes {
    inner: std::sync::Arc<dyn super::stub::dynamic::SessionEntityTypes>,
}

impl SessionEntityTypes {
    /// Returns a builder for [SessionEntityTypes].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use gapic_dialogflow_v2::client::SessionEntityTypes;
    /// # use auth::credentials::anonymous::Builder as Anonymous;
    /// let client = SessionEntityTypes::builder()
    ///     .with_credentials(Anonymous::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::session_entity_types::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::session_entity_types::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::SessionEntityTypes + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let inner = Self::build_inner(config).await?;
        Ok(Self { inner })
    }

    async fn build_inner(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::SessionEntityTypes>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::SessionEntityTypes> {
        super::transport::SessionEntityTypes::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::SessionEntityTypes> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::SessionEntityTypes::new)
    }

    /// Returns the list of all session entity types in the specified session.
    pub fn list_session_entity_types(&self) -> super::builder::session_entity_types::ListSessionEntityTypes {
        super::builder::session_entity_types::ListSessionEntityTypes::new(self.inner.clone())
    }

    /// Retrieves the specified session entity type.
    pub fn get_session_entity_type(&self) -> super::builder::session_entity_types::GetSessionEntityType {
        super::builder::session_entity_types::GetSessionEntityType::new(self.inner.clone())
    }

    /// Creates a session entity type.
    ///
    /// If the specified session entity type already exists, overrides the session
    /// entity type.
    pub fn create_session_entity_type(&self) -> super::builder::session_entity_types::CreateSessionEntityType {
        super::builder::session_entity_types::CreateSessionEntityType::new(self.inner.clone())
    }

    /// Updates the specified session entity type.
    pub fn update_session_entity_type(&self) -> super::builder::session_entity_types::UpdateSessionEntityType {
        super::builder::session_entity_types::UpdateSessionEntityType::new(self.inner.clone())
    }

    /// Deletes the specified session entity type.
    pub fn delete_session_entity_type(&self) -> super::builder::session_entity_types::DeleteSessionEntityType {
        super::builder::session_entity_types::DeleteSessionEntityType::new(self.inner.clone())
    }

    /// Returns the fully-qualified resource name for a session.
    ///
    /// # Example
    /// ```
    /// # use gapic_dialogflow_v2::client::SessionEntityTypes;
    /// let name = SessionEntityTypes::session_path("my-project", "my-session")?;
    /// assert_eq!(name, "projects/my-project/agent/sessions/my-session");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn session_path(
        project: &str,
        session: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/agent/sessions/{session}",
        )?
            .render(&[("project", project), ("session", session)])
    }

    /// Returns the fully-qualified resource name for a session entity type.
    ///
    /// # Example
    /// ```
    /// # use gapic_dialogflow_v2::client::SessionEntityTypes;
    /// let name = SessionEntityTypes::session_entity_type_path("my-project", "my-session", "my-entity-type")?;
    /// assert_eq!(name, "projects/my-project/agent/sessions/my-session/entityTypes/my-entity-type");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn session_entity_type_path(
        project: &str,
        session: &str,
        entity_type: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/agent/sessions/{session}/entityTypes/{entity_type}",
        )?
            .render(&[("project", project), ("session", session), ("entity_type", entity_type)])
    }
}
