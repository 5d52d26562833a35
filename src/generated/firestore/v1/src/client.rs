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

/// Implements a client for the Cloud Firestore API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use gapic_firestore_v1::client::Firestore;
/// # use auth::credentials::anonymous::Builder as Anonymous;
/// let client = Firestore::builder()
///     .with_credentials(Anonymous::new().build())
///     .build()
///     .await?;
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// The Cloud Firestore service.
///
/// Cloud Firestore is a fast, fully managed, serverless, cloud-native NoSQL
/// document database that simplifies storing, syncing, and querying data for
/// your mobile, web, and IoT apps at global scale. Its client libraries provide
/// live synchronization and offline support, while its security features and
/// integrations with Firebase and Google Cloud Platform accelerate building
/// truly serverless apps.
///
/// # Configuration
///
/// To configure `Firestore` use the `with_*` methods in the type returned
/// by [builder()][Firestore::builder]. The default configuration should
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
/// [with_endpoint()]: super::builder::firestore::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::firestore::ClientBuilder::with_credentials
/// [with_client_config()]: super::builder::firestore::ClientBuilder::with_client_config
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
/// [Application Default Credentials]: https://cloud.google.com/docs/authentication#adc
///
/// # Pooling and Cloning
///
/// `Firestore` holds a connection pool internally, it is advised to
/// create one and reuse it. You do not need to wrap `Firestore` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct Firestore {
    inner: std::sync::Arc<dyn super::stub::dynamic::Firestore>,
}

impl Firestore {
    /// Returns a builder for [Firestore].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use gapic_firestore_v1::client::Firestore;
    /// # use auth::credentials::anonymous::Builder as Anonymous;
    /// let client = Firestore::builder()
    ///     .with_credentials(Anonymous::new().build())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::firestore::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::firestore::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Firestore + 'static,
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
    ) -> gax::client_builder::Result<std::sync::Arc<dyn super::stub::dynamic::Firestore>> {
        if gaxi::options::tracing_enabled(&conf) {
            return Ok(std::sync::Arc::new(Self::build_with_tracing(conf).await?));
        }
        Ok(std::sync::Arc::new(Self::build_transport(conf).await?))
    }

    async fn build_transport(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Firestore> {
        super::transport::Firestore::new(conf).await
    }

    async fn build_with_tracing(
        conf: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<impl super::stub::Firestore> {
        Self::build_transport(conf)
            .await
            .map(super::tracing::Firestore::new)
    }

    /// Gets a single document.
    pub fn get_document(&self) -> super::builder::firestore::GetDocument {
        super::builder::firestore::GetDocument::new(self.inner.clone())
    }

    /// Lists documents.
    pub fn list_documents(&self) -> super::builder::firestore::ListDocuments {
        super::builder::firestore::ListDocuments::new(self.inner.clone())
    }

    /// Creates a new document.
    pub fn create_document(&self) -> super::builder::firestore::CreateDocument {
        super::builder::firestore::CreateDocument::new(self.inner.clone())
    }

    /// Updates or inserts a document.
    pub fn update_document(&self) -> super::builder::firestore::UpdateDocument {
        super::builder::firestore::UpdateDocument::new(self.inner.clone())
    }

    /// Deletes a document.
    pub fn delete_document(&self) -> super::builder::firestore::DeleteDocument {
        super::builder::firestore::DeleteDocument::new(self.inner.clone())
    }

    /// Gets multiple documents.
    ///
    /// Documents returned by this method are not guaranteed to be returned in the
    /// same order that they were requested.
    ///
    /// The service streams the responses, this method returns all of them once the
    /// stream completes.
    pub fn batch_get_documents(&self) -> super::builder::firestore::BatchGetDocuments {
        super::builder::firestore::BatchGetDocuments::new(self.inner.clone())
    }

    /// Starts a new transaction.
    pub fn begin_transaction(&self) -> super::builder::firestore::BeginTransaction {
        super::builder::firestore::BeginTransaction::new(self.inner.clone())
    }

    /// Commits a transaction, while optionally updating documents.
    pub fn commit(&self) -> super::builder::firestore::Commit {
        super::builder::firestore::Commit::new(self.inner.clone())
    }

    /// Rolls back a transaction.
    pub fn rollback(&self) -> super::builder::firestore::Rollback {
        super::builder::firestore::Rollback::new(self.inner.clone())
    }

    /// Runs a query.
    ///
    /// The service streams the responses, this method returns all of them once the
    /// stream completes.
    pub fn run_query(&self) -> super::builder::firestore::RunQuery {
        super::builder::firestore::RunQuery::new(self.inner.clone())
    }

    /// Partitions a query by returning partition cursors that can be used to run
    /// the query in parallel. The returned partition cursors are split points that
    /// can be used by RunQuery as starting/end points for the query results.
    pub fn partition_query(&self) -> super::builder::firestore::PartitionQuery {
        super::builder::firestore::PartitionQuery::new(self.inner.clone())
    }

    /// Lists all the collection IDs underneath a document.
    pub fn list_collection_ids(&self) -> super::builder::firestore::ListCollectionIds {
        super::builder::firestore::ListCollectionIds::new(self.inner.clone())
    }

    /// Applies a batch of write operations.
    ///
    /// The BatchWrite method does not apply the write operations atomically
    /// and can apply them out of order. Method does not allow more than one write
    /// per document. Each write succeeds or fails independently. See the
    /// [BatchWriteResponse][google.firestore.v1.BatchWriteResponse] for the
    /// success status of each write.
    ///
    /// If you require an atomically applied set of writes, use
    /// [Commit][google.firestore.v1.Firestore.Commit] instead.
    pub fn batch_write(&self) -> super::builder::firestore::BatchWrite {
        super::builder::firestore::BatchWrite::new(self.inner.clone())
    }
}
