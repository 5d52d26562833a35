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

/// Implements [AlertPolicyService](super::stub::AlertPolicyService) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct AlertPolicyService {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for AlertPolicyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("AlertPolicyService")
            .field("inner", &self.inner)
            .finish()
    }
}

impl AlertPolicyService {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::ALERT_POLICY_SERVICE,
            "google.monitoring.v3.AlertPolicyService",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::AlertPolicyService for AlertPolicyService {
    async fn list_alert_policies(
        &self,
        mut req: crate::model::ListAlertPoliciesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListAlertPoliciesResponse>> {
        let options = self.settings.apply("ListAlertPolicies", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListAlertPolicies")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v3/{}/alertPolicies",
            gaxi::path_parameter::matching(&req.name, "projects/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "filter", &req.filter)?;
        let builder = gaxi::query_parameter::add(builder, "orderBy", &req.order_by)?;
        let builder = gaxi::query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = gaxi::query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_alert_policy(
        &self,
        req: crate::model::GetAlertPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AlertPolicy>> {
        let options = self.settings.apply("GetAlertPolicy", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/alertPolicies/*", "name")?,
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

    async fn create_alert_policy(
        &self,
        req: crate::model::CreateAlertPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AlertPolicy>> {
        let options = self.settings.apply("CreateAlertPolicy", options);
        let path = format!(
            "/v3/{}/alertPolicies",
            gaxi::path_parameter::matching(&req.name, "projects/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, req.alert_policy, options).await
    }

    async fn delete_alert_policy(
        &self,
        req: crate::model::DeleteAlertPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteAlertPolicy", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/alertPolicies/*", "name")?,
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

    async fn update_alert_policy(
        &self,
        req: crate::model::UpdateAlertPolicyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AlertPolicy>> {
        let options = self.settings.apply("UpdateAlertPolicy", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&gaxi::path_parameter::required(req.alert_policy.as_ref(), "alert_policy")?.name, "projects/*/alertPolicies/*", "alert_policy.name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "updateMask", &req.update_mask)?;
        self.inner.execute(builder, req.alert_policy, options).await
    }
}

/// Implements [GroupService](super::stub::GroupService) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct GroupService {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for GroupService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("GroupService")
            .field("inner", &self.inner)
            .finish()
    }
}

impl GroupService {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::GROUP_SERVICE,
            "google.monitoring.v3.GroupService",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::GroupService for GroupService {
    async fn list_groups(
        &self,
        mut req: crate::model::ListGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListGroupsResponse>> {
        let options = self.settings.apply("ListGroups", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListGroups")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v3/{}/groups",
            gaxi::path_parameter::matching(&req.name, "projects/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "childrenOfGroup", &req.children_of_group)?;
        let builder = gaxi::query_parameter::add(builder, "ancestorsOfGroup", &req.ancestors_of_group)?;
        let builder = gaxi::query_parameter::add(builder, "descendantsOfGroup", &req.descendants_of_group)?;
        let builder = gaxi::query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = gaxi::query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_group(
        &self,
        req: crate::model::GetGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Group>> {
        let options = self.settings.apply("GetGroup", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/groups/*", "name")?,
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

    async fn create_group(
        &self,
        req: crate::model::CreateGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Group>> {
        let options = self.settings.apply("CreateGroup", options);
        let path = format!(
            "/v3/{}/groups",
            gaxi::path_parameter::matching(&req.name, "projects/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "validateOnly", &req.validate_only)?;
        self.inner.execute(builder, req.group, options).await
    }

    async fn update_group(
        &self,
        req: crate::model::UpdateGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Group>> {
        let options = self.settings.apply("UpdateGroup", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&gaxi::path_parameter::required(req.group.as_ref(), "group")?.name, "projects/*/groups/*", "group.name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PUT, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "validateOnly", &req.validate_only)?;
        self.inner.execute(builder, req.group, options).await
    }

    async fn delete_group(
        &self,
        req: crate::model::DeleteGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteGroup", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/groups/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "recursive", &req.recursive)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn list_group_members(
        &self,
        mut req: crate::model::ListGroupMembersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListGroupMembersResponse>> {
        let options = self.settings.apply("ListGroupMembers", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListGroupMembers")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v3/{}/members",
            gaxi::path_parameter::matching(&req.name, "projects/*/groups/*", "name")?,
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
        let builder = gaxi::query_parameter::add(builder, "filter", &req.filter)?;
        let builder = gaxi::query_parameter::add(builder, "interval", &req.interval)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}

/// Implements [MetricService](super::stub::MetricService) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct MetricService {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for MetricService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("MetricService")
            .field("inner", &self.inner)
            .finish()
    }
}

impl MetricService {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::METRIC_SERVICE,
            "google.monitoring.v3.MetricService",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::MetricService for MetricService {
    async fn list_monitored_resource_descriptors(
        &self,
        mut req: crate::model::ListMonitoredResourceDescriptorsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListMonitoredResourceDescriptorsResponse>> {
        let options = self.settings.apply("ListMonitoredResourceDescriptors", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListMonitoredResourceDescriptors")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v3/{}/monitoredResourceDescriptors",
            gaxi::path_parameter::matching(&req.name, "projects/*", "name")?,
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

    async fn get_monitored_resource_descriptor(
        &self,
        req: crate::model::GetMonitoredResourceDescriptorRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::MonitoredResourceDescriptor>> {
        let options = self.settings.apply("GetMonitoredResourceDescriptor", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/monitoredResourceDescriptors/**", "name")?,
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

    async fn list_metric_descriptors(
        &self,
        mut req: crate::model::ListMetricDescriptorsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListMetricDescriptorsResponse>> {
        let options = self.settings.apply("ListMetricDescriptors", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListMetricDescriptors")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v3/{}/metricDescriptors",
            gaxi::path_parameter::matching(&req.name, "projects/*", "name")?,
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

    async fn get_metric_descriptor(
        &self,
        req: crate::model::GetMetricDescriptorRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::MetricDescriptor>> {
        let options = self.settings.apply("GetMetricDescriptor", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/metricDescriptors/**", "name")?,
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

    async fn create_metric_descriptor(
        &self,
        req: crate::model::CreateMetricDescriptorRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::MetricDescriptor>> {
        let options = self.settings.apply("CreateMetricDescriptor", options);
        let path = format!(
            "/v3/{}/metricDescriptors",
            gaxi::path_parameter::matching(&req.name, "projects/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, req.metric_descriptor, options).await
    }

    async fn delete_metric_descriptor(
        &self,
        req: crate::model::DeleteMetricDescriptorRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteMetricDescriptor", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/metricDescriptors/**", "name")?,
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

    async fn list_time_series(
        &self,
        mut req: crate::model::ListTimeSeriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListTimeSeriesResponse>> {
        let options = self.settings.apply("ListTimeSeries", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListTimeSeries")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v3/{}/timeSeries",
            gaxi::path_parameter::matching(&req.name, "projects/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "filter", &req.filter)?;
        let builder = gaxi::query_parameter::add(builder, "interval", &req.interval)?;
        let builder = gaxi::query_parameter::add(builder, "aggregation", &req.aggregation)?;
        let builder = gaxi::query_parameter::add(builder, "orderBy", &req.order_by)?;
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

    async fn create_time_series(
        &self,
        req: crate::model::CreateTimeSeriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("CreateTimeSeries", options);
        let path = format!(
            "/v3/{}/timeSeries",
            gaxi::path_parameter::matching(&req.name, "projects/*", "name")?,
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

/// Implements [NotificationChannelService](super::stub::NotificationChannelService) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct NotificationChannelService {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for NotificationChannelService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("NotificationChannelService")
            .field("inner", &self.inner)
            .finish()
    }
}

impl NotificationChannelService {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::NOTIFICATION_CHANNEL_SERVICE,
            "google.monitoring.v3.NotificationChannelService",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::NotificationChannelService for NotificationChannelService {
    async fn list_notification_channel_descriptors(
        &self,
        mut req: crate::model::ListNotificationChannelDescriptorsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListNotificationChannelDescriptorsResponse>> {
        let options = self.settings.apply("ListNotificationChannelDescriptors", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListNotificationChannelDescriptors")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v3/{}/notificationChannelDescriptors",
            gaxi::path_parameter::matching(&req.name, "projects/*", "name")?,
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

    async fn get_notification_channel_descriptor(
        &self,
        req: crate::model::GetNotificationChannelDescriptorRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::NotificationChannelDescriptor>> {
        let options = self.settings.apply("GetNotificationChannelDescriptor", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/notificationChannelDescriptors/*", "name")?,
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

    async fn list_notification_channels(
        &self,
        mut req: crate::model::ListNotificationChannelsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListNotificationChannelsResponse>> {
        let options = self.settings.apply("ListNotificationChannels", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListNotificationChannels")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v3/{}/notificationChannels",
            gaxi::path_parameter::matching(&req.name, "projects/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::GET, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "filter", &req.filter)?;
        let builder = gaxi::query_parameter::add(builder, "orderBy", &req.order_by)?;
        let builder = gaxi::query_parameter::add(builder, "pageSize", &req.page_size)?;
        let builder = gaxi::query_parameter::add(builder, "pageToken", &req.page_token)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn get_notification_channel(
        &self,
        req: crate::model::GetNotificationChannelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::NotificationChannel>> {
        let options = self.settings.apply("GetNotificationChannel", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/notificationChannels/*", "name")?,
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

    async fn create_notification_channel(
        &self,
        req: crate::model::CreateNotificationChannelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::NotificationChannel>> {
        let options = self.settings.apply("CreateNotificationChannel", options);
        let path = format!(
            "/v3/{}/notificationChannels",
            gaxi::path_parameter::matching(&req.name, "projects/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, req.notification_channel, options).await
    }

    async fn update_notification_channel(
        &self,
        req: crate::model::UpdateNotificationChannelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::NotificationChannel>> {
        let options = self.settings.apply("UpdateNotificationChannel", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&gaxi::path_parameter::required(req.notification_channel.as_ref(), "notification_channel")?.name, "projects/*/notificationChannels/*", "notification_channel.name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "updateMask", &req.update_mask)?;
        self.inner.execute(builder, req.notification_channel, options).await
    }

    async fn delete_notification_channel(
        &self,
        req: crate::model::DeleteNotificationChannelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteNotificationChannel", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/notificationChannels/*", "name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::DELETE, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "force", &req.force)?;
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }
}

/// Implements [ServiceMonitoringService](super::stub::ServiceMonitoringService) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct ServiceMonitoringService {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for ServiceMonitoringService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("ServiceMonitoringService")
            .field("inner", &self.inner)
            .finish()
    }
}

impl ServiceMonitoringService {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::SERVICE_MONITORING_SERVICE,
            "google.monitoring.v3.ServiceMonitoringService",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::ServiceMonitoringService for ServiceMonitoringService {
    async fn create_service(
        &self,
        req: crate::model::CreateServiceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Service>> {
        let options = self.settings.apply("CreateService", options);
        let path = format!(
            "/v3/{}/services",
            gaxi::path_parameter::matching(&req.parent, "*/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "serviceId", &req.service_id)?;
        self.inner.execute(builder, req.service, options).await
    }

    async fn get_service(
        &self,
        req: crate::model::GetServiceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Service>> {
        let options = self.settings.apply("GetService", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "*/*/services/*", "name")?,
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

    async fn list_services(
        &self,
        mut req: crate::model::ListServicesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListServicesResponse>> {
        let options = self.settings.apply("ListServices", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListServices")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v3/{}/services",
            gaxi::path_parameter::matching(&req.parent, "*/*", "parent")?,
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

    async fn update_service(
        &self,
        req: crate::model::UpdateServiceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Service>> {
        let options = self.settings.apply("UpdateService", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&gaxi::path_parameter::required(req.service.as_ref(), "service")?.name, "*/*/services/*", "service.name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "updateMask", &req.update_mask)?;
        self.inner.execute(builder, req.service, options).await
    }

    async fn delete_service(
        &self,
        req: crate::model::DeleteServiceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteService", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "*/*/services/*", "name")?,
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

    async fn create_service_level_objective(
        &self,
        req: crate::model::CreateServiceLevelObjectiveRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ServiceLevelObjective>> {
        let options = self.settings.apply("CreateServiceLevelObjective", options);
        let path = format!(
            "/v3/{}/serviceLevelObjectives",
            gaxi::path_parameter::matching(&req.parent, "*/*/services/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "serviceLevelObjectiveId", &req.service_level_objective_id)?;
        self.inner.execute(builder, req.service_level_objective, options).await
    }

    async fn get_service_level_objective(
        &self,
        req: crate::model::GetServiceLevelObjectiveRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ServiceLevelObjective>> {
        let options = self.settings.apply("GetServiceLevelObjective", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "*/*/services/*/serviceLevelObjectives/*", "name")?,
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

    async fn list_service_level_objectives(
        &self,
        mut req: crate::model::ListServiceLevelObjectivesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListServiceLevelObjectivesResponse>> {
        let options = self.settings.apply("ListServiceLevelObjectives", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListServiceLevelObjectives")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v3/{}/serviceLevelObjectives",
            gaxi::path_parameter::matching(&req.parent, "*/*/services/*", "parent")?,
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
        let builder = if wkt::internal::is_default(&req.view) {
            builder
        } else {
            gaxi::query_parameter::add(builder, "view", &req.view)?
        };
        self.inner
            .execute(builder, None::<gaxi::http::NoBody>, options)
            .await
    }

    async fn update_service_level_objective(
        &self,
        req: crate::model::UpdateServiceLevelObjectiveRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ServiceLevelObjective>> {
        let options = self.settings.apply("UpdateServiceLevelObjective", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&gaxi::path_parameter::required(req.service_level_objective.as_ref(), "service_level_objective")?.name, "*/*/services/*/serviceLevelObjectives/*", "service_level_objective.name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "updateMask", &req.update_mask)?;
        self.inner.execute(builder, req.service_level_objective, options).await
    }

    async fn delete_service_level_objective(
        &self,
        req: crate::model::DeleteServiceLevelObjectiveRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteServiceLevelObjective", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "*/*/services/*/serviceLevelObjectives/*", "name")?,
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

/// Implements [UptimeCheckService](super::stub::UptimeCheckService) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct UptimeCheckService {
    inner: gaxi::http::ReqwestClient,
    settings: std::sync::Arc<gax::client_config::ServiceSettings>,
}

impl std::fmt::Debug for UptimeCheckService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("UptimeCheckService")
            .field("inner", &self.inner)
            .finish()
    }
}

impl UptimeCheckService {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let settings = gaxi::options::service_settings(
            &config,
            crate::config::UPTIME_CHECK_SERVICE,
            "google.monitoring.v3.UptimeCheckService",
        )?;
        let inner = gaxi::http::ReqwestClient::new(config, crate::DEFAULT_HOST, crate::ALL_SCOPES).await?;
        Ok(Self {
            inner,
            settings: std::sync::Arc::new(settings),
        })
    }
}

impl super::stub::UptimeCheckService for UptimeCheckService {
    async fn list_uptime_check_configs(
        &self,
        mut req: crate::model::ListUptimeCheckConfigsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListUptimeCheckConfigsResponse>> {
        let options = self.settings.apply("ListUptimeCheckConfigs", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListUptimeCheckConfigs")) {
            req.page_size = page_size;
        }
        let path = format!(
            "/v3/{}/uptimeCheckConfigs",
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

    async fn get_uptime_check_config(
        &self,
        req: crate::model::GetUptimeCheckConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UptimeCheckConfig>> {
        let options = self.settings.apply("GetUptimeCheckConfig", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/uptimeCheckConfigs/*", "name")?,
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

    async fn create_uptime_check_config(
        &self,
        req: crate::model::CreateUptimeCheckConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UptimeCheckConfig>> {
        let options = self.settings.apply("CreateUptimeCheckConfig", options);
        let path = format!(
            "/v3/{}/uptimeCheckConfigs",
            gaxi::path_parameter::matching(&req.parent, "projects/*", "parent")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::POST, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        self.inner.execute(builder, req.uptime_check_config, options).await
    }

    async fn update_uptime_check_config(
        &self,
        req: crate::model::UpdateUptimeCheckConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UptimeCheckConfig>> {
        let options = self.settings.apply("UpdateUptimeCheckConfig", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&gaxi::path_parameter::required(req.uptime_check_config.as_ref(), "uptime_check_config")?.name, "projects/*/uptimeCheckConfigs/*", "uptime_check_config.name")?,
        );
        let builder = self
            .inner
            .builder(reqwest::Method::PATCH, path)
            .header(
                "x-goog-api-client",
                reqwest::header::HeaderValue::from_static(&crate::info::X_GOOG_API_CLIENT_HEADER),
            );
        let builder = gaxi::query_parameter::add(builder, "updateMask", &req.update_mask)?;
        self.inner.execute(builder, req.uptime_check_config, options).await
    }

    async fn delete_uptime_check_config(
        &self,
        req: crate::model::DeleteUptimeCheckConfigRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<wkt::Empty>> {
        let options = self.settings.apply("DeleteUptimeCheckConfig", options);
        let path = format!(
            "/v3/{}",
            gaxi::path_parameter::matching(&req.name, "projects/*/uptimeCheckConfigs/*", "name")?,
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

    async fn list_uptime_check_ips(
        &self,
        mut req: crate::model::ListUptimeCheckIpsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ListUptimeCheckIpsResponse>> {
        let options = self.settings.apply("ListUptimeCheckIps", options);
        if let (0, Some(page_size)) = (req.page_size, self.settings.page_size("ListUptimeCheckIps")) {
            req.page_size = page_size;
        }
        let path = "/v3/uptimeCheckIps".to_string();
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
}
