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

/// Implements [FirestoreAdmin](super::stub::FirestoreAdmin) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct FirestoreAdmin {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for FirestoreAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("FirestoreAdmin")
            .field("inner", &self.inner)
            .finish()
    }
}

impl FirestoreAdmin {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::FIRESTORE_ADMIN,
            "google.firestore.admin.v1.FirestoreAdmin",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::FirestoreAdmin for FirestoreAdmin {
    async fn create_index(
        &self,
        req: crate::model::CreateIndexRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("CreateIndex", options);
        let path = format!(
            "/v1/{}/indexes",
            gaxi::path_parameter::matching(&req.parent, "projects/*/databases/*/collectionGroups/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, req.index, options).await
    }

    async fn list_indexes(
        &self,
        mut req: crate::model::ListIndexesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListIndexesResponse>> {
        let options = self.settings.apply("ListIndexes", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListIndexes")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v1/{}/indexes",
            gaxi::path_parameter::matching(&req.parent, "projects/*/databases/*/collectionGroups/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "filter", &req.filter)?;
        let builder = gaxi::query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = gaxi::query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_index(
        &self,
        req: crate::model::GetIndexRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Index>> {
        let options = self.settings.apply("GetIndex", options);
        let path = format!(
            "/v1/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/databases/*/collectionGroups/*/indexes/*", "name")?,
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

    async fn delete_index(
        &self,
        req: crate::model::DeleteIndexRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteIndex", options);
        let path = format!(
            "/v1/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/databases/*/collectionGroups/*/indexes/*", "name")?,
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

    async fn get_field(
        &self,
        req: crate::model::GetFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Field>> {
        let options = self.settings.apply("GetField", options);
        let path = format!(
            "/v1/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/databases/*/collectionGroups/*/fields/*", "name")?,
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

    async fn update_field(
        &self,
        req: crate::model::UpdateFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("UpdateField", options);
        let path = format!(
            "/v1/{}",
            gaxi::path_parameter::matching(&gaxi::path_parameter::required(req.field.as_ref(), "field")?.name, "projects/*/databases/*/collectionGroups/*/fields/*", "field.name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "updateMask", &req.update_mask)?;
        self.inner.execute(builder, req.field, options).await
    }

    async fn list_fields(
        &self,
        mut req: crate::model::ListFieldsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListFieldsResponse>> {
        let options = self.settings.apply("ListFields", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListFields")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v1/{}/fields",
            gaxi::path_parameter::matching(&req.parent, "projects/*/databases/*/collectionGroups/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "filter", &req.filter)?;
        let builder = gaxi::query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = gaxi::query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn export_documents(
        &self,
        req: crate::model::ExportDocumentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("ExportDocuments", options);
        let path = format!(
            "/v1/{}:exportDocuments",
            gaxi::path_parameter::matching(&req.name, "projects/*/databases/*", "name")?,
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

    async fn import_documents(
        &self,
        req: crate::model::ImportDocumentsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("ImportDocuments", options);
        let path = format!(
            "/v1/{}:importDocuments",
            gaxi::path_parameter::matching(&req.name, "projects/*/databases/*", "name")?,
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
            "/v1/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/databases/*/operations/*", "name")?,
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
            "/v1/{}:cancel",
            gaxi::path_parameter::matching(&req.name, "projects/*/databases/*/operations/*", "name")?,
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
            "/v1/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/databases/*/operations/*", "name")?,
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
