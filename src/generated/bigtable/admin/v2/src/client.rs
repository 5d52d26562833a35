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

/// Implements a client for the Cloud Bigtable Admin API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use gapic_bigtable_admin_v2::client::BigtableInstanceAdmin;
/// # use auth::credentials::anonymous::Builder as Anonymous;
/// let client = BigtableInstanceAdmin::builder()
///     .with_credentials(Anonymous::new().build())
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for creating, configuring, and deleting Cloud Bigtable Instances and
/// Clusters. Provides access to the Instance and Cluster schemas only, not the
/// tables' metadata or data stored in those tables.
///
/// # Configuration
///
/// To configure `BigtableInstanceAdmin` use the `with_*` methods in the type returned
/// by [builder()][BigtableInstanceAdmin::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://bigtableadmin.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
/// * [with_client_config()]: overrides the timeouts, retryable codes, and page
///   sizes bundled with this client.
///
/// [with_endpoint()]: super::builder::bigtable_instance_admin::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::bigtable_instance_admin::ClientBuilder::with_credentials
/// [with_client_config()]: super::builder::bigtable_instance_admin::ClientBuilder::with_client_config
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `BigtableInstanceAdmin` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `BigtableInstanceAdmin` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct BigtableInstanceAdmin {
    inner: std::sync::Arc<dyn super::stub::dynamic::BigtableInstanceAdmin>,
}

impl BigtableInstanceAdmin {
    /// Returns a builder for [BigtableInstanceAdmin].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use gapic_bigtable_admin_v2::client::BigtableInstanceAdmin;
    /// # use auth::credentials::anonymous::Builder as Anonymous;
    /// let client = BigtableInstanceAdmin::builder()
    ///     .with_credentials(Anonymous::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::bigtable_instance_admin::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::bigtable_instance_admin::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::BigtableInstanceAdmin + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::BigtableInstanceAdmin>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::BigtableInstanceAdmin> {
        super::transport::BigtableInstanceAdmin::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::BigtableInstanceAdmin> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::BigtableInstanceAdmin::new)
    }

    /// Create an instance within a project.
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
    pub fn create_instance(&self) -> super::builder::bigtable_instance_admin::CreateInstance {
        super::builder::bigtable_instance_admin::CreateInstance::new(self.inner.clone())
    }

    /// Gets information about an instance.
    pub fn get_instance(&self) -> super::builder::bigtable_instance_admin::GetInstance {
        super::builder::bigtable_instance_admin::GetInstance::new(self.inner.clone())
    }

    /// Lists information about instances in a project.
    pub fn list_instances(&self) -> super::builder::bigtable_instance_admin::ListInstances {
        super::builder::bigtable_instance_admin::ListInstances::new(self.inner.clone())
    }

    /// Updates an instance within a project. This method updates only the display
    /// name and type for an Instance.
    pub fn update_instance(&self) -> super::builder::bigtable_instance_admin::UpdateInstance {
        super::builder::bigtable_instance_admin::UpdateInstance::new(self.inner.clone())
    }

    /// Delete an instance from a project.
    pub fn delete_instance(&self) -> super::builder::bigtable_instance_admin::DeleteInstance {
        super::builder::bigtable_instance_admin::DeleteInstance::new(self.inner.clone())
    }

    /// Creates a cluster within an instance.
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
    pub fn create_cluster(&self) -> super::builder::bigtable_instance_admin::CreateCluster {
        super::builder::bigtable_instance_admin::CreateCluster::new(self.inner.clone())
    }

    /// Gets information about a cluster.
    pub fn get_cluster(&self) -> super::builder::bigtable_instance_admin::GetCluster {
        super::builder::bigtable_instance_admin::GetCluster::new(self.inner.clone())
    }

    /// Lists information about clusters in an instance.
    pub fn list_clusters(&self) -> super::builder::bigtable_instance_admin::ListClusters {
        super::builder::bigtable_instance_admin::ListClusters::new(self.inner.clone())
    }

    /// Updates a cluster within an instance.
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
    pub fn update_cluster(&self) -> super::builder::bigtable_instance_admin::UpdateCluster {
        super::builder::bigtable_instance_admin::UpdateCluster::new(self.inner.clone())
    }

    /// Deletes a cluster from an instance.
    pub fn delete_cluster(&self) -> super::builder::bigtable_instance_admin::DeleteCluster {
        super::builder::bigtable_instance_admin::DeleteCluster::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn get_operation(&self) -> super::builder::bigtable_instance_admin::GetOperation {
        super::builder::bigtable_instance_admin::GetOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn cancel_operation(&self) -> super::builder::bigtable_instance_admin::CancelOperation {
        super::builder::bigtable_instance_admin::CancelOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn delete_operation(&self) -> super::builder::bigtable_instance_admin::DeleteOperation {
        super::builder::bigtable_instance_admin::DeleteOperation::new(self.inner.clone())
    }

    /// Returns the fully-qualified resource name for a project.
    ///
    /// # Example
    /// ```
    /// # use gapic_bigtable_admin_v2::client::BigtableInstanceAdmin;
    /// let name = BigtableInstanceAdmin::project_path("my-project")?;
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

    /// Returns the fully-qualified resource name for an instance.
    ///
    /// # Example
    /// ```
    /// # use gapic_bigtable_admin_v2::client::BigtableInstanceAdmin;
    /// let name = BigtableInstanceAdmin::instance_path("my-project", "my-instance")?;
    /// assert_eq!(name, "projects/my-project/instances/my-instance");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn instance_path(
        project: &str,
        instance: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/instances/{instance}",
        )?
            .render(&[("project", project), ("instance", instance)])
    }

    /// Returns the fully-qualified resource name for a cluster.
    ///
    /// # Example
    /// ```
    /// # use gapic_bigtable_admin_v2::client::BigtableInstanceAdmin;
    /// let name = BigtableInstanceAdmin::cluster_path("my-project", "my-instance", "my-cluster")?;
    /// assert_eq!(name, "projects/my-project/instances/my-instance/clusters/my-cluster");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn cluster_path(
        project: &str,
        instance: &str,
        cluster: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/instances/{instance}/clusters/{cluster}",
        )?
            .render(&[("project", project), ("instance", instance), ("cluster", cluster)])
    }

    /// Returns the fully-qualified resource name for a location.
    ///
    /// # Example
    /// ```
    /// # use gapic_bigtable_admin_v2::client::BigtableInstanceAdmin;
    /// let name = BigtableInstanceAdmin::location_path("my-project", "us-central1-b")?;
    /// assert_eq!(name, "projects/my-project/locations/us-central1-b");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn location_path(
        project: &str,
        location: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/locations/{location}",
        )?
            .render(&[("project", project), ("location", location)])
    }
}

/// Implements a client for the Cloud Bigtable Admin API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use gapic_bigtable_admin_v2::client::BigtableTableAdmin;
/// # use auth::credentials::anonymous::Builder as Anonymous;
/// let client = BigtableTableAdmin::builder()
///     .with_credentials(Anonymous::new().build())
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service for creating, configuring, and deleting Cloud Bigtable tables.
///
/// Provides access to the table schemas only, not the data stored within
/// the tables.
///
/// # Configuration
///
/// To configure `BigtableTableAdmin` use the `with_*` methods in the type returned
/// by [builder()][BigtableTableAdmin::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://bigtableadmin.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
/// * [with_client_config()]: overrides the timeouts, retryable codes, and page
///   sizes bundled with this client.
///
/// [with_endpoint()]: super::builder::bigtable_table_admin::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::bigtable_table_admin::ClientBuilder::with_credentials
/// [with_client_config()]: super::builder::bigtable_table_admin::ClientBuilder::with_client_config
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `BigtableTableAdmin` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `BigtableTableAdmin` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct BigtableTableAdmin {
    inner: std::sync::Arc<dyn super::stub::dynamic::BigtableTableAdmin>,
}

impl BigtableTableAdmin {
    /// Returns a builder for [BigtableTableAdmin].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use gapic_bigtable_admin_v2::client::BigtableTableAdmin;
    /// # use auth::credentials::anonymous::Builder as Anonymous;
    /// let client = BigtableTableAdmin::builder()
    ///     .with_credentials(Anonymous::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::bigtable_table_admin::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::bigtable_table_admin::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::BigtableTableAdmin + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::BigtableTableAdmin>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::BigtableTableAdmin> {
        super::transport::BigtableTableAdmin::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::BigtableTableAdmin> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::BigtableTableAdmin::new)
    }

    /// Creates a new table in the specified instance.
    /// The table can be created with a full set of initial column families,
    /// specified in the request.
    pub fn create_table(&self) -> super::builder::bigtable_table_admin::CreateTable {
        super::builder::bigtable_table_admin::CreateTable::new(self.inner.clone())
    }

    /// Lists all tables served from a specified instance.
    pub fn list_tables(&self) -> super::builder::bigtable_table_admin::ListTables {
        super::builder::bigtable_table_admin::ListTables::new(self.inner.clone())
    }

    /// Gets metadata information about the specified table.
    pub fn get_table(&self) -> super::builder::bigtable_table_admin::GetTable {
        super::builder::bigtable_table_admin::GetTable::new(self.inner.clone())
    }

    /// Permanently deletes a specified table and all of its data.
    pub fn delete_table(&self) -> super::builder::bigtable_table_admin::DeleteTable {
        super::builder::bigtable_table_admin::DeleteTable::new(self.inner.clone())
    }

    /// Performs a series of column family modifications on the specified table.
    /// Either all or none of the modifications will occur before this method
    /// returns, but data requests received prior to that point may see a table
    /// where only some modifications have taken effect.
    pub fn modify_column_families(&self) -> super::builder::bigtable_table_admin::ModifyColumnFamilies {
        super::builder::bigtable_table_admin::ModifyColumnFamilies::new(self.inner.clone())
    }

    /// Permanently drop/delete a row range from a specified table. The request can
    /// specify whether to delete all rows in a table, or only those that match a
    /// particular prefix.
    pub fn drop_row_range(&self) -> super::builder::bigtable_table_admin::DropRowRange {
        super::builder::bigtable_table_admin::DropRowRange::new(self.inner.clone())
    }

    /// Returns the fully-qualified resource name for an instance.
    ///
    /// # Example
    /// ```
    /// # use gapic_bigtable_admin_v2::client::BigtableTableAdmin;
    /// let name = BigtableTableAdmin::instance_path("my-project", "my-instance")?;
    /// assert_eq!(name, "projects/my-project/instances/my-instance");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn instance_path(
        project: &str,
        instance: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/instances/{instance}",
        )?
            .render(&[("project", project), ("instance", instance)])
    }

    /// Returns the fully-qualified resource name for a table.
    ///
    /// # Example
    /// ```
    /// # use gapic_bigtable_admin_v2::client::BigtableTableAdmin;
    /// let name = BigtableTableAdmin::table_path("my-project", "my-instance", "my-table")?;
    /// assert_eq!(name, "projects/my-project/instances/my-instance/tables/my-table");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn table_path(
        project: &str,
        instance: &str,
        table: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/instances/{instance}/tables/{table}",
        )?
            .render(&[("project", project), ("instance", instance), ("table", table)])
    }
}
