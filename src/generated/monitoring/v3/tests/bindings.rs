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

//! Verify each RPC uses the HTTP verb, path, query parameters and body from
//! its HTTP binding.

use gapic_monitoring_v3::{client, model};
use httptest::matchers::{AllOf, KV, Matcher, all_of, contains, eq, json_decoded, request, url_decoded};
use httptest::{Expectation, Server, responders::json_encoded};
use serde_json::{Value, json};
use test_case::test_case;

type Result<T> = anyhow::Result<T>;
type Query = &'static [(&'static str, &'static str)];
type HttpRequest = http::Request<bytes::Bytes>;

const PROJECT: &str = "projects/p";
const ALERT_POLICY: &str = "projects/p/alertPolicies/a1";
const GROUP: &str = "projects/p/groups/g1";
const METRIC_DESCRIPTOR: &str = "projects/p/metricDescriptors/custom.googleapis.com/shop/orders";
const CHANNEL: &str = "projects/p/notificationChannels/n1";
const SERVICE: &str = "projects/p/services/checkout";
const SLO: &str = "projects/p/services/checkout/serviceLevelObjectives/availability";
const UPTIME_CHECK: &str = "projects/p/uptimeCheckConfigs/u1";

/// Matches the verb and path, each `query` pair, and the JSON body.
///
/// A `null` body matches requests without a payload.
fn binding(verb: &'static str, path: &'static str, query: Query, body: Value) -> AllOf<HttpRequest> {
    let query: Vec<Box<dyn Matcher<[KV<str, str>]>>> = query
        .iter()
        .map(|pair| Box::new(contains(*pair)) as Box<dyn Matcher<[KV<str, str>]>>)
        .collect();
    let body: Box<dyn Matcher<HttpRequest>> = match body {
        Value::Null => Box::new(request::body("")),
        body => Box::new(request::body(json_decoded(eq(body)))),
    };
    all_of(vec![
        Box::new(request::method_path(verb, path)) as Box<dyn Matcher<HttpRequest>>,
        Box::new(request::query(url_decoded(all_of(query)))),
        body,
    ])
}

fn expect(verb: &'static str, path: &'static str, query: Query, body: Value) -> Server {
    let server = Server::run();
    server.expect(Expectation::matching(binding(verb, path, query, body)).respond_with(json_encoded(json!({}))));
    server
}

fn endpoint(server: &Server) -> String {
    format!("http://{}", server.addr())
}

fn anonymous() -> auth::credentials::Credentials {
    auth::credentials::anonymous::Builder::new().build()
}

fn mask(path: &str) -> wkt::FieldMask {
    wkt::FieldMask::default().set_paths([path])
}

fn until_now() -> model::TimeInterval {
    model::TimeInterval::new().set_end_time(wkt::Timestamp::clamp(1_700_000_000, 0))
}

#[test_case("ListAlertPolicies", "GET", "/v3/projects/p/alertPolicies", &[("filter", "display_name=\"cpu\""), ("orderBy", "name"), ("pageSize", "10"), ("pageToken", "t1")], json!(null); "list_alert_policies")]
#[test_case("GetAlertPolicy", "GET", "/v3/projects/p/alertPolicies/a1", &[], json!(null); "get_alert_policy")]
#[test_case("CreateAlertPolicy", "POST", "/v3/projects/p/alertPolicies", &[], json!({"displayName": "cpu", "combiner": "OR"}); "create_alert_policy")]
#[test_case("DeleteAlertPolicy", "DELETE", "/v3/projects/p/alertPolicies/a1", &[], json!(null); "delete_alert_policy")]
#[test_case("UpdateAlertPolicy", "PATCH", "/v3/projects/p/alertPolicies/a1", &[("updateMask", "displayName")], json!({"name": ALERT_POLICY, "displayName": "high cpu"}); "update_alert_policy")]
#[tokio::test]
async fn alert_policies(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = expect(verb, path, query, body);
    let client = client::AlertPolicyService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    match rpc {
        "ListAlertPolicies" => {
            client
                .list_alert_policies()
                .set_name(PROJECT)
                .set_filter("display_name=\"cpu\"")
                .set_order_by("name")
                .set_page_size(10)
                .set_page_token("t1")
                .send()
                .await?;
        }
        "GetAlertPolicy" => {
            client.get_alert_policy().set_name(ALERT_POLICY).send().await?;
        }
        "CreateAlertPolicy" => {
            let policy = model::AlertPolicy::new()
                .set_display_name("cpu")
                .set_combiner(model::ConditionCombinerType::Or);
            client.create_alert_policy().set_name(PROJECT).set_alert_policy(policy).send().await?;
        }
        "DeleteAlertPolicy" => {
            client.delete_alert_policy().set_name(ALERT_POLICY).send().await?;
        }
        "UpdateAlertPolicy" => {
            client
                .update_alert_policy()
                .set_alert_policy(model::AlertPolicy::new().set_name(ALERT_POLICY).set_display_name("high cpu"))
                .set_update_mask(mask("displayName"))
                .send()
                .await?;
        }
        other => panic!("unexpected RPC {other}"),
    }
    Ok(())
}

#[test_case("ListGroups", "GET", "/v3/projects/p/groups", &[("childrenOfGroup", GROUP), ("pageToken", "t1")], json!(null); "list_groups")]
#[test_case("GetGroup", "GET", "/v3/projects/p/groups/g1", &[], json!(null); "get_group")]
#[test_case("CreateGroup", "POST", "/v3/projects/p/groups", &[("validateOnly", "true")], json!({"displayName": "frontend", "filter": "resource.type = gce_instance"}); "create_group")]
#[test_case("UpdateGroup", "PUT", "/v3/projects/p/groups/g1", &[("validateOnly", "true")], json!({"name": GROUP, "displayName": "frontends"}); "update_group")]
#[test_case("DeleteGroup", "DELETE", "/v3/projects/p/groups/g1", &[("recursive", "true")], json!(null); "delete_group")]
#[test_case("ListGroupMembers", "GET", "/v3/projects/p/groups/g1/members", &[("filter", "resource.type = gce_instance"), ("interval.endTime", "2023-11-14T22:13:20Z"), ("pageToken", "t1")], json!(null); "list_group_members")]
#[tokio::test]
async fn groups(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = expect(verb, path, query, body);
    let client = client::GroupService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    match rpc {
        "ListGroups" => {
            client.list_groups().set_name(PROJECT).set_children_of_group(GROUP).set_page_token("t1").send().await?;
        }
        "GetGroup" => {
            client.get_group().set_name(GROUP).send().await?;
        }
        "CreateGroup" => {
            client
                .create_group()
                .set_name(PROJECT)
                .set_group(model::Group::new().set_display_name("frontend").set_filter("resource.type = gce_instance"))
                .set_validate_only(true)
                .send()
                .await?;
        }
        "UpdateGroup" => {
            client
                .update_group()
                .set_group(model::Group::new().set_name(GROUP).set_display_name("frontends"))
                .set_validate_only(true)
                .send()
                .await?;
        }
        "DeleteGroup" => {
            client.delete_group().set_name(GROUP).set_recursive(true).send().await?;
        }
        "ListGroupMembers" => {
            client
                .list_group_members()
                .set_name(GROUP)
                .set_filter("resource.type = gce_instance")
                .set_interval(until_now())
                .set_page_token("t1")
                .send()
                .await?;
        }
        other => panic!("unexpected RPC {other}"),
    }
    Ok(())
}

#[test_case("ListMonitoredResourceDescriptors", "GET", "/v3/projects/p/monitoredResourceDescriptors", &[("filter", "resource.type = starts_with(\"gce_\")"), ("pageToken", "t1")], json!(null); "list_monitored_resource_descriptors")]
#[test_case("GetMonitoredResourceDescriptor", "GET", "/v3/projects/p/monitoredResourceDescriptors/gce_instance", &[], json!(null); "get_monitored_resource_descriptor")]
#[test_case("ListMetricDescriptors", "GET", "/v3/projects/p/metricDescriptors", &[("filter", "metric.type = starts_with(\"custom.\")"), ("pageToken", "t1")], json!(null); "list_metric_descriptors")]
#[test_case("GetMetricDescriptor", "GET", "/v3/projects/p/metricDescriptors/custom.googleapis.com/shop/orders", &[], json!(null); "get_metric_descriptor")]
#[test_case("CreateMetricDescriptor", "POST", "/v3/projects/p/metricDescriptors", &[], json!({"type": "custom.googleapis.com/shop/orders", "metricKind": "GAUGE", "valueType": "INT64"}); "create_metric_descriptor")]
#[test_case("DeleteMetricDescriptor", "DELETE", "/v3/projects/p/metricDescriptors/custom.googleapis.com/shop/orders", &[], json!(null); "delete_metric_descriptor")]
#[test_case("ListTimeSeries", "GET", "/v3/projects/p/timeSeries", &[("filter", "metric.type = \"custom.googleapis.com/shop/orders\""), ("interval.endTime", "2023-11-14T22:13:20Z"), ("aggregation.alignmentPeriod", "60s"), ("aggregation.perSeriesAligner", "ALIGN_RATE"), ("view", "HEADERS"), ("pageToken", "t1")], json!(null); "list_time_series")]
#[test_case("CreateTimeSeries", "POST", "/v3/projects/p/timeSeries", &[], json!({"name": PROJECT, "timeSeries": [{"metric": {"type": "custom.googleapis.com/shop/orders"}}]}); "create_time_series")]
#[tokio::test]
async fn metrics(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = expect(verb, path, query, body);
    let client = client::MetricService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    match rpc {
        "ListMonitoredResourceDescriptors" => {
            client
                .list_monitored_resource_descriptors()
                .set_name(PROJECT)
                .set_filter("resource.type = starts_with(\"gce_\")")
                .set_page_token("t1")
                .send()
                .await?;
        }
        "GetMonitoredResourceDescriptor" => {
            client
                .get_monitored_resource_descriptor()
                .set_name("projects/p/monitoredResourceDescriptors/gce_instance")
                .send()
                .await?;
        }
        "ListMetricDescriptors" => {
            client
                .list_metric_descriptors()
                .set_name(PROJECT)
                .set_filter("metric.type = starts_with(\"custom.\")")
                .set_page_token("t1")
                .send()
                .await?;
        }
        "GetMetricDescriptor" => {
            client.get_metric_descriptor().set_name(METRIC_DESCRIPTOR).send().await?;
        }
        "CreateMetricDescriptor" => {
            let descriptor = model::MetricDescriptor::new()
                .set_type("custom.googleapis.com/shop/orders")
                .set_metric_kind(model::MetricKind::Gauge)
                .set_value_type(model::ValueType::Int64);
            client.create_metric_descriptor().set_name(PROJECT).set_metric_descriptor(descriptor).send().await?;
        }
        "DeleteMetricDescriptor" => {
            client.delete_metric_descriptor().set_name(METRIC_DESCRIPTOR).send().await?;
        }
        "ListTimeSeries" => {
            client
                .list_time_series()
                .set_name(PROJECT)
                .set_filter("metric.type = \"custom.googleapis.com/shop/orders\"")
                .set_interval(until_now())
                .set_aggregation(
                    model::Aggregation::new()
                        .set_alignment_period(wkt::Duration::clamp(60, 0))
                        .set_per_series_aligner(model::Aligner::AlignRate),
                )
                .set_view(model::TimeSeriesView::Headers)
                .set_page_token("t1")
                .send()
                .await?;
        }
        "CreateTimeSeries" => {
            let series = model::TimeSeries::new()
                .set_metric(model::Metric::new().set_type("custom.googleapis.com/shop/orders"));
            client.create_time_series().set_name(PROJECT).set_time_series([series]).send().await?;
        }
        other => panic!("unexpected RPC {other}"),
    }
    Ok(())
}

#[test_case("ListNotificationChannelDescriptors", "GET", "/v3/projects/p/notificationChannelDescriptors", &[("pageSize", "10"), ("pageToken", "t1")], json!(null); "list_notification_channel_descriptors")]
#[test_case("GetNotificationChannelDescriptor", "GET", "/v3/projects/p/notificationChannelDescriptors/email", &[], json!(null); "get_notification_channel_descriptor")]
#[test_case("ListNotificationChannels", "GET", "/v3/projects/p/notificationChannels", &[("filter", "type=\"email\""), ("orderBy", "display_name"), ("pageToken", "t1")], json!(null); "list_notification_channels")]
#[test_case("GetNotificationChannel", "GET", "/v3/projects/p/notificationChannels/n1", &[], json!(null); "get_notification_channel")]
#[test_case("CreateNotificationChannel", "POST", "/v3/projects/p/notificationChannels", &[], json!({"type": "email", "displayName": "on-call", "labels": {"email_address": "oncall@example.com"}}); "create_notification_channel")]
#[test_case("UpdateNotificationChannel", "PATCH", "/v3/projects/p/notificationChannels/n1", &[("updateMask", "displayName")], json!({"name": CHANNEL, "displayName": "pager"}); "update_notification_channel")]
#[test_case("DeleteNotificationChannel", "DELETE", "/v3/projects/p/notificationChannels/n1", &[("force", "true")], json!(null); "delete_notification_channel")]
#[tokio::test]
async fn notification_channels(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = expect(verb, path, query, body);
    let client = client::NotificationChannelService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    match rpc {
        "ListNotificationChannelDescriptors" => {
            client
                .list_notification_channel_descriptors()
                .set_name(PROJECT)
                .set_page_size(10)
                .set_page_token("t1")
                .send()
                .await?;
        }
        "GetNotificationChannelDescriptor" => {
            client
                .get_notification_channel_descriptor()
                .set_name("projects/p/notificationChannelDescriptors/email")
                .send()
                .await?;
        }
        "ListNotificationChannels" => {
            client
                .list_notification_channels()
                .set_name(PROJECT)
                .set_filter("type=\"email\"")
                .set_order_by("display_name")
                .set_page_token("t1")
                .send()
                .await?;
        }
        "GetNotificationChannel" => {
            client.get_notification_channel().set_name(CHANNEL).send().await?;
        }
        "CreateNotificationChannel" => {
            let channel = model::NotificationChannel::new()
                .set_type("email")
                .set_display_name("on-call")
                .set_labels([("email_address", "oncall@example.com")]);
            client
                .create_notification_channel()
                .set_name(PROJECT)
                .set_notification_channel(channel)
                .send()
                .await?;
        }
        "UpdateNotificationChannel" => {
            client
                .update_notification_channel()
                .set_notification_channel(model::NotificationChannel::new().set_name(CHANNEL).set_display_name("pager"))
                .set_update_mask(mask("displayName"))
                .send()
                .await?;
        }
        "DeleteNotificationChannel" => {
            client.delete_notification_channel().set_name(CHANNEL).set_force(true).send().await?;
        }
        other => panic!("unexpected RPC {other}"),
    }
    Ok(())
}

#[test_case("CreateService", "POST", "/v3/projects/p/services", &[("serviceId", "checkout")], json!({"displayName": "Checkout"}); "create_service")]
#[test_case("GetService", "GET", "/v3/projects/p/services/checkout", &[], json!(null); "get_service")]
#[test_case("ListServices", "GET", "/v3/projects/p/services", &[("filter", "identifier_case=\"CUSTOM\""), ("pageToken", "t1")], json!(null); "list_services")]
#[test_case("UpdateService", "PATCH", "/v3/projects/p/services/checkout", &[("updateMask", "displayName")], json!({"name": SERVICE, "displayName": "Checkout v2"}); "update_service")]
#[test_case("DeleteService", "DELETE", "/v3/projects/p/services/checkout", &[], json!(null); "delete_service")]
#[test_case("CreateServiceLevelObjective", "POST", "/v3/projects/p/services/checkout/serviceLevelObjectives", &[("serviceLevelObjectiveId", "availability")], json!({"displayName": "99.9% available", "goal": 0.999, "rollingPeriod": "86400s"}); "create_service_level_objective")]
#[test_case("GetServiceLevelObjective", "GET", "/v3/projects/p/services/checkout/serviceLevelObjectives/availability", &[("view", "EXPLICIT")], json!(null); "get_service_level_objective")]
#[test_case("ListServiceLevelObjectives", "GET", "/v3/projects/p/services/checkout/serviceLevelObjectives", &[("filter", "goal > 0.9"), ("pageToken", "t1"), ("view", "FULL")], json!(null); "list_service_level_objectives")]
#[test_case("UpdateServiceLevelObjective", "PATCH", "/v3/projects/p/services/checkout/serviceLevelObjectives/availability", &[("updateMask", "goal")], json!({"name": SLO, "goal": 0.99}); "update_service_level_objective")]
#[test_case("DeleteServiceLevelObjective", "DELETE", "/v3/projects/p/services/checkout/serviceLevelObjectives/availability", &[], json!(null); "delete_service_level_objective")]
#[tokio::test]
async fn service_monitoring(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = expect(verb, path, query, body);
    let client = client::ServiceMonitoringService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    match rpc {
        "CreateService" => {
            client
                .create_service()
                .set_parent(PROJECT)
                .set_service_id("checkout")
                .set_service(model::Service::new().set_display_name("Checkout"))
                .send()
                .await?;
        }
        "GetService" => {
            client.get_service().set_name(SERVICE).send().await?;
        }
        "ListServices" => {
            client
                .list_services()
                .set_parent(PROJECT)
                .set_filter("identifier_case=\"CUSTOM\"")
                .set_page_token("t1")
                .send()
                .await?;
        }
        "UpdateService" => {
            client
                .update_service()
                .set_service(model::Service::new().set_name(SERVICE).set_display_name("Checkout v2"))
                .set_update_mask(mask("displayName"))
                .send()
                .await?;
        }
        "DeleteService" => {
            client.delete_service().set_name(SERVICE).send().await?;
        }
        "CreateServiceLevelObjective" => {
            let slo = model::ServiceLevelObjective::new()
                .set_display_name("99.9% available")
                .set_goal(0.999)
                .set_rolling_period(wkt::Duration::clamp(86400, 0));
            client
                .create_service_level_objective()
                .set_parent(SERVICE)
                .set_service_level_objective_id("availability")
                .set_service_level_objective(slo)
                .send()
                .await?;
        }
        "GetServiceLevelObjective" => {
            client
                .get_service_level_objective()
                .set_name(SLO)
                .set_view(model::ServiceLevelObjectiveView::Explicit)
                .send()
                .await?;
        }
        "ListServiceLevelObjectives" => {
            client
                .list_service_level_objectives()
                .set_parent(SERVICE)
                .set_filter("goal > 0.9")
                .set_page_token("t1")
                .set_view(model::ServiceLevelObjectiveView::Full)
                .send()
                .await?;
        }
        "UpdateServiceLevelObjective" => {
            client
                .update_service_level_objective()
                .set_service_level_objective(model::ServiceLevelObjective::new().set_name(SLO).set_goal(0.99))
                .set_update_mask(mask("goal"))
                .send()
                .await?;
        }
        "DeleteServiceLevelObjective" => {
            client.delete_service_level_objective().set_name(SLO).send().await?;
        }
        other => panic!("unexpected RPC {other}"),
    }
    Ok(())
}

#[test_case("ListUptimeCheckConfigs", "GET", "/v3/projects/p/uptimeCheckConfigs", &[("pageSize", "10"), ("pageToken", "t1")], json!(null); "list_uptime_check_configs")]
#[test_case("GetUptimeCheckConfig", "GET", "/v3/projects/p/uptimeCheckConfigs/u1", &[], json!(null); "get_uptime_check_config")]
#[test_case("CreateUptimeCheckConfig", "POST", "/v3/projects/p/uptimeCheckConfigs", &[], json!({"displayName": "home page", "period": "60s", "timeout": "10s"}); "create_uptime_check_config")]
#[test_case("UpdateUptimeCheckConfig", "PATCH", "/v3/projects/p/uptimeCheckConfigs/u1", &[("updateMask", "timeout")], json!({"name": UPTIME_CHECK, "timeout": "30s"}); "update_uptime_check_config")]
#[test_case("DeleteUptimeCheckConfig", "DELETE", "/v3/projects/p/uptimeCheckConfigs/u1", &[], json!(null); "delete_uptime_check_config")]
#[test_case("ListUptimeCheckIps", "GET", "/v3/uptimeCheckIps", &[("pageToken", "t1")], json!(null); "list_uptime_check_ips")]
#[tokio::test]
async fn uptime_checks(rpc: &str, verb: &'static str, path: &'static str, query: Query, body: Value) -> Result<()> {
    let server = expect(verb, path, query, body);
    let client = client::UptimeCheckService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    match rpc {
        "ListUptimeCheckConfigs" => {
            client.list_uptime_check_configs().set_parent(PROJECT).set_page_size(10).set_page_token("t1").send().await?;
        }
        "GetUptimeCheckConfig" => {
            client.get_uptime_check_config().set_name(UPTIME_CHECK).send().await?;
        }
        "CreateUptimeCheckConfig" => {
            let config = model::UptimeCheckConfig::new()
                .set_display_name("home page")
                .set_period(wkt::Duration::clamp(60, 0))
                .set_timeout(wkt::Duration::clamp(10, 0));
            client.create_uptime_check_config().set_parent(PROJECT).set_uptime_check_config(config).send().await?;
        }
        "UpdateUptimeCheckConfig" => {
            client
                .update_uptime_check_config()
                .set_uptime_check_config(
                    model::UptimeCheckConfig::new().set_name(UPTIME_CHECK).set_timeout(wkt::Duration::clamp(30, 0)),
                )
                .set_update_mask(mask("timeout"))
                .send()
                .await?;
        }
        "DeleteUptimeCheckConfig" => {
            client.delete_uptime_check_config().set_name(UPTIME_CHECK).send().await?;
        }
        "ListUptimeCheckIps" => {
            client.list_uptime_check_ips().set_page_token("t1").send().await?;
        }
        other => panic!("unexpected RPC {other}"),
    }
    Ok(())
}
