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

/// Implements [BigtableInstanceAdmin](super::stub::BigtableInstanceAdmin) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct BigtableInstanceAdmin {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for BigtableInstanceAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("BigtableInstanceAdmin")
            .field("inner", &self.inner)
            .finish()
    }
}

impl BigtableInstanceAdmin {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::BIGTABLE_INSTANCE_ADMIN,
            "google.bigtable.admin.v2.BigtableInstanceAdmin",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::BigtableInstanceAdmin for BigtableInstanceAdmin {
    async fn create_instance(
        &self,
        req: crate::model::CreateInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("CreateInstance", options);
        let path = format!(
            "/v2/{}/instances",
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

    async fn get_instance(
        &self,
        req: crate::model::GetInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Instance>> {
        let options = self.settings.apply("GetInstance", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/instances/*", "name")?,
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

    async fn list_instances(
        &self,
        req: crate::model::ListInstancesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListInstancesResponse>> {
        let options = self.settings.apply("ListInstances", options);
        let path = format!(
            "/v2/{}/instances",
            gaxi::path_parameter::matching(&req.parent, "projects/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_instance(
        &self,
        req: crate::model::Instance,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Instance>> {
        let options = self.settings.apply("UpdateInstance", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/instances/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PUT, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn delete_instance(
        &self,
        req: crate::model::DeleteInstanceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteInstance", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/instances/*", "name")?,
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

    async fn create_cluster(
        &self,
        req: crate::model::CreateClusterRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("CreateCluster", options);
        let path = format!(
            "/v2/{}/clusters",
            gaxi::path_parameter::matching(&req.parent, "projects/*/instances/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "clusterId", &req.cluster_id)?;
        self.inner.execute(builder, req.cluster, options).await
    }

    async fn get_cluster(
        &self,
        req: crate::model::GetClusterRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Cluster>> {
        let options = self.settings.apply("GetCluster", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/instances/*/clusters/*", "name")?,
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

    async fn list_clusters(
        &self,
        req: crate::model::ListClustersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListClustersResponse>> {
        let options = self.settings.apply("ListClusters", options);
        let path = format!(
            "/v2/{}/clusters",
            gaxi::path_parameter::matching(&req.parent, "projects/*/instances/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_cluster(
        &self,
        req: crate::model::Cluster,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("UpdateCluster", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/instances/*/clusters/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PUT, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, Some(req), options).await
    }

    async fn delete_cluster(
        &self,
        req: crate::model::DeleteClusterRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteCluster", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/instances/*/clusters/*", "name")?,
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

    async fn get_operation(
        &self,
        req: longrunning::model::GetOperationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<longrunning::model::Operation>> {
        let options = self.settings.apply("GetOperation", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "operations/**", "name")?,
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
            gaxi::path_parameter::matching(&req.name, "operations/**", "name")?,
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
            gaxi::path_parameter::matching(&req.name, "operations/**", "name")?,
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

/// Implements [BigtableTableAdmin](super::stub::BigtableTableAdmin) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct BigtableTableAdmin {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for BigtableTableAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("BigtableTableAdmin")
            .field("inner", &self.inner)
            .finish()
    }
}

impl BigtableTableAdmin {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::BIGTABLE_TABLE_ADMIN,
            "google.bigtable.admin.v2.BigtableTableAdmin",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::BigtableTableAdmin for BigtableTableAdmin {
    async fn create_table(
        &self,
        req: crate::model::CreateTableRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Table>> {
        let options = self.settings.apply("CreateTable", options);
        let path = format!(
            "/v2/{}/tables",
            gaxi::path_parameter::matching(&req.parent, "projects/*/instances/*", "parent")?,
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

    async fn list_tables(
        &self,
        mut req: crate::model::ListTablesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListTablesResponse>> {
        let options = self.settings.apply("ListTables", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListTables")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v2/{}/tables",
            gaxi::path_parameter::matching(&req.parent, "projects/*/instances/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = if wkt::internal::is_default(&req.view) {
            builder
        } else {
            gaxi::query_parameter::add(builder, "view", &req.view)?
        };
        let builder = gaxi::query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = gaxi::query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_table(
        &self,
        req: crate::model::GetTableRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Table>> {
        let options = self.settings.apply("GetTable", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/instances/*/tables/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = if wkt::internal::is_default(&req.view) {
            builder
        } else {
            gaxi::query_parameter::add(builder, "view", &req.view)?
        };
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn delete_table(
        &self,
        req: crate::model::DeleteTableRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteTable", options);
        let path = format!(
            "/v2/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/instances/*/tables/*", "name")?,
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

    async fn modify_column_families(
        &self,
        req: crate::model::ModifyColumnFamiliesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Table>> {
        let options = self.settings.apply("ModifyColumnFamilies", options);
        let path = format!(
            "/v2/{}:modifyColumnFamilies",
            gaxi::path_parameter::matching(&req.name, "projects/*/instances/*/tables/*", "name")?,
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

    async fn drop_row_range(
        &self,
        req: crate::model::DropRowRangeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DropRowRange", options);
        let path = format!(
            "/v2/{}:dropRowRange",
            gaxi::path_parameter::matching(&req.name, "projects/*/instances/*/tables/*", "name")?,
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
