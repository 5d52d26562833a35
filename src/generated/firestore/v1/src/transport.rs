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

/// Implements [Firestore](super::stub::Firestore) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct Firestore {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for Firestore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("Firestore")
            .field("inner", &self.inner)
            .finish()
    }
}

impl Firestore {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::FIRESTORE,
            "google.firestore.v1.Firestore",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::Firestore for Firestore {
    async fn get_document(
        &self,
        req: crate::model::GetDocumentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Document>> {
        let options = self.settings.apply("GetDocument", options);
        let path = format!(
            "/v1/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/databases/*/documents/*/**", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "mask", &req.mask)?;
        let builder = gaxi::query_parameter::add(
            builder,
            "transaction",
            &serde_with::ser::SerializeAsWrap::<_, serde_with::base64::Base64>::new(&req.transaction),
        )?;
        let builder = gaxi::query_parameter::add(builder, "readTime", &req.read_time)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_documents(
        &self,
        mut req: crate::model::ListDocumentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListDocumentsResponse>> {
        let options = self.settings.apply("ListDocuments", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListDocuments")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v1/{}/{}",
            gaxi::path_parameter::matching_any(
                &req.parent,
                &["projects/*/databases/*/documents", "projects/*/databases/*/documents/*/**"],
                "parent",
            )?,
            gaxi::path_parameter::matching(&req.collection_id, "*", "collection_id")?,
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
        let builder = gaxi::query_parameter::add(builder, "orderBy", &req.order_by)?;
        let builder = gaxi::query_parameter::add(builder, "mask", &req.mask)?;
        let builder = gaxi::query_parameter::add(
            builder,
            "transaction",
            &serde_with::ser::SerializeAsWrap::<_, serde_with::base64::Base64>::new(&req.transaction),
        )?;
        let builder = gaxi::query_parameter::add(builder, "readTime", &req.read_time)?;
        let builder = gaxi::query_parameter::add(builder, "showMissing", &req.show_missing)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn create_document(
        &self,
        req: crate::model::CreateDocumentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Document>> {
        let options = self.settings.apply("CreateDocument", options);
        let path = format!(
            "/v1/{}/{}",
            gaxi::path_parameter::matching_any(
                &req.parent,
                &["projects/*/databases/*/documents", "projects/*/databases/*/documents/**"],
                "parent",
            )?,
            gaxi::path_parameter::matching(&req.collection_id, "*", "collection_id")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "documentId", &req.document_id)?;
        let builder = gaxi::query_parameter::add(builder, "mask", &req.mask)?;
        self.inner.execute(builder, req.document, options).await
    }

    async fn update_document(
        &self,
        req: crate::model::UpdateDocumentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Document>> {
        let options = self.settings.apply("UpdateDocument", options);
        let path = format!(
            "/v1/{}",
            gaxi::path_parameter::matching(&gaxi::path_parameter::required(req.document.as_ref(), "document")?.name, "projects/*/databases/*/documents/*/**", "document.name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "updateMask", &req.update_mask)?;
        let builder = gaxi::query_parameter::add(builder, "mask", &req.mask)?;
        let builder = gaxi::query_parameter::add(builder, "currentDocument", &req.current_document)?;
        self.inner.execute(builder, req.document, options).await
    }

    async fn delete_document(
        &self,
        req: crate::model::DeleteDocumentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteDocument", options);
        let path = format!(
            "/v1/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/databases/*/documents/*/**", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "currentDocument", &req.current_document)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn batch_get_documents(
        &self,
        req: crate::model::BatchGetDocumentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<std::vec::Vec<crate::model::BatchGetDocumentsResponse>>> {
        let options = self.settings.apply("BatchGetDocuments", options);
        let path = format!(
            "/v1/{}/documents:batchGet",
            gaxi::path_parameter::matching(&req.database, "projects/*/databases/*", "database")?,
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

    async fn begin_transaction(
        &self,
        req: crate::model::BeginTransactionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BeginTransactionResponse>> {
        let options = self.settings.apply("BeginTransaction", options);
        let path = format!(
            "/v1/{}/documents:beginTransaction",
            gaxi::path_parameter::matching(&req.database, "projects/*/databases/*", "database")?,
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

    async fn commit(
        &self,
        req: crate::model::CommitRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CommitResponse>> {
        let options = self.settings.apply("Commit", options);
        let path = format!(
            "/v1/{}/documents:commit",
            gaxi::path_parameter::matching(&req.database, "projects/*/databases/*", "database")?,
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

    async fn rollback(
        &self,
        req: crate::model::RollbackRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("Rollback", options);
        let path = format!(
            "/v1/{}/documents:rollback",
            gaxi::path_parameter::matching(&req.database, "projects/*/databases/*", "database")?,
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

    async fn run_query(
        &self,
        req: crate::model::RunQueryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<std::vec::Vec<crate::model::RunQueryResponse>>> {
        let options = self.settings.apply("RunQuery", options);
        let path = format!(
            "/v1/{}:runQuery",
            gaxi::path_parameter::matching_any(
                &req.parent,
                &["projects/*/databases/*/documents", "projects/*/databases/*/documents/*/**"],
                "parent",
            )?,
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

    async fn partition_query(
        &self,
        mut req: crate::model::PartitionQueryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::PartitionQueryResponse>> {
        let options = self.settings.apply("PartitionQuery", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("PartitionQuery")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v1/{}:partitionQuery",
            gaxi::path_parameter::matching_any(
                &req.parent,
                &["projects/*/databases/*/documents", "projects/*/databases/*/documents/*/**"],
                "parent",
            )?,
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

    async fn list_collection_ids(
        &self,
        mut req: crate::model::ListCollectionIdsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListCollectionIdsResponse>> {
        let options = self.settings.apply("ListCollectionIds", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListCollectionIds")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v1/{}:listCollectionIds",
            gaxi::path_parameter::matching_any(
                &req.parent,
                &["projects/*/databases/*/documents", "projects/*/databases/*/documents/*/**"],
                "parent",
            )?,
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

    async fn batch_write(
        &self,
        req: crate::model::BatchWriteRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::BatchWriteResponse>> {
        let options = self.settings.apply("BatchWrite", options);
        let path = format!(
            "/v1/{}/documents:batchWrite",
            gaxi::path_parameter::matching(&req.database, "projects/*/databases/*", "database")?,
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
}
