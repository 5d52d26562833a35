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

/// Implements a client for the Cloud Firestore Admin API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use gapic_firestore_admin_v1::client::FirestoreAdmin;
/// # use auth::credentials::anonymous::Builder as Anonymous;
/// let client = FirestoreAdmin::builder()
///     .with_credentials(Anonymous::new().build())
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Operations are created by service `FirestoreAdmin`, but are accessed via
/// service `google.longrunning.Operations`.
///
/// # Configuration
///
/// To configure `FirestoreAdmin` use the `with_*` methods in the type returned
/// by [builder()][FirestoreAdmin::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://firestore.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses
///   [Application Default Credentials]. Applications using custom
///   authentication may need to override this default.
/// * [with_client_config()]: overrides the timeouts, retryable codes, and page
///   sizes bundled with this client.
///
/// [with_endpoint()]: super::builder::firestore_admin::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::firestore_admin::ClientBuilder::with_credentials
/// [with_client_config()]: super::builder::firestore_admin::ClientBuilder::with_client_config
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `FirestoreAdmin` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `FirestoreAdmin` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct FirestoreAdmin {
    inner: std::sync::Arc<dyn super::stub::dynamic::FirestoreAdmin>,
}

impl FirestoreAdmin {
    /// Returns a builder for [FirestoreAdmin].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use gapic_firestore_admin_v1::client::FirestoreAdmin;
    /// # use auth::credentials::anonymous::Builder as Anonymous;
    /// let client = FirestoreAdmin::builder()
    ///     .with_credentials(Anonymous::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::firestore_admin::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::firestore_admin::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::FirestoreAdmin + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::FirestoreAdmin>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::FirestoreAdmin> {
        super::transport::FirestoreAdmin::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::FirestoreAdmin> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::FirestoreAdmin::new)
    }

    /// Creates a composite index. This returns a [google.longrunning.Operation][google.longrunning.Operation]
    /// which may be used to track the status of the creation. The metadata for
    /// the operation will be the type [IndexOperationMetadata][google.firestore.admin.v1.IndexOperationMetadata].
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
    pub fn create_index(&self) -> super::builder::firestore_admin::CreateIndex {
        super::builder::firestore_admin::CreateIndex::new(self.inner.clone())
    }

    /// Lists composite indexes.
    pub fn list_indexes(&self) -> super::builder::firestore_admin::ListIndexes {
        super::builder::firestore_admin::ListIndexes::new(self.inner.clone())
    }

    /// Gets a composite index.
    pub fn get_index(&self) -> super::builder::firestore_admin::GetIndex {
        super::builder::firestore_admin::GetIndex::new(self.inner.clone())
    }

    /// Deletes a composite index.
    pub fn delete_index(&self) -> super::builder::firestore_admin::DeleteIndex {
        super::builder::firestore_admin::DeleteIndex::new(self.inner.clone())
    }

    /// Gets the metadata and configuration for a Field.
    pub fn get_field(&self) -> super::builder::firestore_admin::GetField {
        super::builder::firestore_admin::GetField::new(self.inner.clone())
    }

    /// Updates a field configuration. Currently, field updates apply only to
    /// single field index configuration. However, calls to
    /// [FirestoreAdmin.UpdateField][google.firestore.admin.v1.FirestoreAdmin.UpdateField] should provide a field mask to avoid
    /// changing any configuration that the caller isn't aware of. The field mask
    /// should be specified as: `{ paths: "index_config" }`.
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
    pub fn update_field(&self) -> super::builder::firestore_admin::UpdateField {
        super::builder::firestore_admin::UpdateField::new(self.inner.clone())
    }

    /// Lists the field configuration and metadata for this database.
    ///
    /// Currently, [FirestoreAdmin.ListFields][google.firestore.admin.v1.FirestoreAdmin.ListFields] only supports listing fields
    /// that have been explicitly overridden. To issue this query, call
    /// [FirestoreAdmin.ListFields][google.firestore.admin.v1.FirestoreAdmin.ListFields] with the filter set to
    /// `indexConfig.usesAncestorConfig:false`.
    pub fn list_fields(&self) -> super::builder::firestore_admin::ListFields {
        super::builder::firestore_admin::ListFields::new(self.inner.clone())
    }

    /// Exports a copy of all or a subset of documents from Google Cloud Firestore
    /// to another storage system, such as Google Cloud Storage. Recent updates to
    /// documents may not be reflected in the export. The export occurs in the
    /// background and its progress can be monitored and managed via the
    /// Operation resource that is created. The output of an export may only be
    /// used once the associated operation is done. If an export operation is
    /// cancelled before completion it may leave partial data behind in Google
    /// Cloud Storage.
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
    pub fn export_documents(&self) -> super::builder::firestore_admin::ExportDocuments {
        super::builder::firestore_admin::ExportDocuments::new(self.inner.clone())
    }

    /// Imports documents into Google Cloud Firestore. Existing documents with the
    /// same name are overwritten. The import occurs in the background and its
    /// progress can be monitored and managed via the Operation resource that is
    /// created. If an ImportDocuments operation is cancelled, it is possible
    /// that a subset of the data has already been imported to Cloud Firestore.
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
    pub fn import_documents(&self) -> super::builder::firestore_admin::ImportDocuments {
        super::builder::firestore_admin::ImportDocuments::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn get_operation(&self) -> super::builder::firestore_admin::GetOperation {
        super::builder::firestore_admin::GetOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn cancel_operation(&self) -> super::builder::firestore_admin::CancelOperation {
        super::builder::firestore_admin::CancelOperation::new(self.inner.clone())
    }

    /// Provides the [Operations][google.longrunning.Operations] service functionality in this service.
    pub fn delete_operation(&self) -> super::builder::firestore_admin::DeleteOperation {
        super::builder::firestore_admin::DeleteOperation::new(self.inner.clone())
    }

    /// Returns the fully-qualified resource name for a database.
    ///
    /// # Example
    /// ```
    /// # use gapic_firestore_admin_v1::client::FirestoreAdmin;
    /// let name = FirestoreAdmin::database_path("my-project", "(default)")?;
    /// assert_eq!(name, "projects/my-project/databases/(default)");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn database_path(
        project: &str,
        database: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/databases/{database}",
        )?
            .render(&[("project", project), ("database", database)])
    }

    /// Returns the fully-qualified resource name for a collection group.
    ///
    /// # Example
    /// ```
    /// # use gapic_firestore_admin_v1::client::FirestoreAdmin;
    /// let name = FirestoreAdmin::collection_group_path("my-project", "(default)", "users")?;
    /// assert_eq!(name, "projects/my-project/databases/(default)/collectionGroups/users");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn collection_group_path(
        project: &str,
        database: &str,
        collection: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/databases/{database}/collectionGroups/{collection}",
        )?
            .render(&[("project", project), ("database", database), ("collection", collection)])
    }

    /// Returns the fully-qualified resource name for a field.
    ///
    /// # Example
    /// ```
    /// # use gapic_firestore_admin_v1::client::FirestoreAdmin;
    /// let name = FirestoreAdmin::field_path("my-project", "(default)", "users", "email")?;
    /// assert_eq!(name, "projects/my-project/databases/(default)/collectionGroups/users/fields/email");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn field_path(
        project: &str,
        database: &str,
        collection: &str,
        field: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/databases/{database}/collectionGroups/{collection}/fields/{field}",
        )?
            .render(&[
                ("project", project),
                ("database", database),
                ("collection", collection),
                ("field", field),
            ])
    }

    /// Returns the fully-qualified resource name for an index.
    ///
    /// # Example
    /// ```
    /// # use gapic_firestore_admin_v1::client::FirestoreAdmin;
    /// let name = FirestoreAdmin::index_path("my-project", "(default)", "users", "my-index")?;
    /// assert_eq!(name, "projects/my-project/databases/(default)/collectionGroups/users/indexes/my-index");
    /// # Ok::<(), gax::path_template::Error>(())
    /// ```
    pub fn index_path(
        project: &str,
        database: &str,
        collection: &str,
        index: &str,
    ) -> std::result::Result<std::string::String, gax::path_template::Error> {
        gax::path_template::PathTemplate::new(
            "projects/{project}/databases/{database}/collectionGroups/{collection}/indexes/{index}",
        )?
            .render(&[
                ("project", project),
                ("database", database),
                ("collection", collection),
                ("index", index),
            ])
    }
}
