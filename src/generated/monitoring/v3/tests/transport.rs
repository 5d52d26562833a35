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


//! Verify the HTTP transport sends the expected requests.

use gapic_monitoring_v3::{client, model};
use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::json;

type Result<T> = anyhow::Result<T>;

fn endpoint(server: &Server) -> String {
    format!("http://{}", server.addr())
}

fn anonymous() -> auth::credentials::Credentials {
    auth::credentials::anonymous::Builder::new().build()
}

#[tokio::test]
async fn list_time_series_flattens_query() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v3/projects/p/timeSeries"),
            request::query(url_decoded(contains((
                "filter",
                r#"metric.type="compute.googleapis.com/instance/cpu/utilization""#
            )))),
            request::query(url_decoded(contains(("interval.startTime", "2023-11-14T21:13:20Z")))),
            request::query(url_decoded(contains(("interval.endTime", "2023-11-14T22:13:20Z")))),
            request::query(url_decoded(contains(("aggregation.alignmentPeriod", "60s")))),
            request::query(url_decoded(contains(("aggregation.perSeriesAligner", "ALIGN_MEAN")))),
            request::query(url_decoded(contains(("aggregation.crossSeriesReducer", "REDUCE_SUM")))),
            request::query(url_decoded(contains(("aggregation.groupByFields", "resource.label.zone")))),
            request::query(url_decoded(contains(("view", "HEADERS")))),
            request::query(url_decoded(contains(("pageSize", "100")))),
        ])
        .respond_with(json_encoded(json!({
            "timeSeries": [{
                "metric": {"type": "compute.googleapis.com/instance/cpu/utilization"},
                "resource": {"type": "gce_instance", "labels": {"zone": "us-central1-a"}},
                "metricKind": "GAUGE",
                "valueType": "DOUBLE",
            }],
        }))),
    );
    let client = client::MetricService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let response = client
        .list_time_series()
        .set_name("projects/p")
        .set_filter(r#"metric.type="compute.googleapis.com/instance/cpu/utilization""#)
        .set_interval(
            model::TimeInterval::new()
                .set_start_time(wkt::Timestamp::clamp(1_699_996_400, 0))
                .set_end_time(wkt::Timestamp::clamp(1_700_000_000, 0)),
        )
        .set_aggregation(
            model::Aggregation::new()
                .set_alignment_period(wkt::Duration::clamp(60, 0))
                .set_per_series_aligner(model::Aligner::AlignMean)
                .set_cross_series_reducer(model::Reducer::ReduceSum)
                .set_group_by_fields(["resource.label.zone"]),
        )
        .set_view(model::TimeSeriesView::Headers)
        .send()
        .await?;
    let series = &response.time_series[0];
    assert_eq!(series.metric_kind, model::MetricKind::Gauge);
    assert_eq!(series.value_type, model::ValueType::Double);
    assert_eq!(
        series.resource.as_ref().map(|r| r.labels["zone"].as_str()),
        Some("us-central1-a")
    );
    Ok(())
}

#[tokio::test]
async fn list_time_series_default_view() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v3/projects/p/timeSeries"),
            request::query(url_decoded(not(contains(key("view"))))),
            request::query(url_decoded(not(contains(key("aggregation.perSeriesAligner"))))),
            request::query(url_decoded(contains(("pageSize", "5")))),
        ])
        .respond_with(json_encoded(json!({}))),
    );
    let client = client::MetricService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let response = client
        .list_time_series()
        .set_name("projects/p")
        .set_aggregation(model::Aggregation::new().set_per_series_aligner(model::Aligner::AlignNone))
        .set_page_size(5)
        .send()
        .await?;
    assert!(response.time_series.is_empty(), "{response:?}");
    Ok(())
}

#[tokio::test]
async fn create_time_series_int64_points() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/v3/projects/p/timeSeries"),
            request::body(json_decoded(eq(json!({
                "name": "projects/p",
                "timeSeries": [{
                    "metric": {"type": "custom.googleapis.com/queue/depth"},
                    "resource": {"type": "global"},
                    "points": [{
                        "interval": {"endTime": "2023-11-14T22:13:20Z"},
                        "value": {"int64Value": "9007199254740993"},
                    }],
                }],
            })))),
        ])
        .respond_with(json_encoded(json!({}))),
    );
    let client = client::MetricService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let series = model::TimeSeries::new()
        .set_metric(model::Metric::new().set_type("custom.googleapis.com/queue/depth"))
        .set_resource(model::MonitoredResource::new().set_type("global"))
        .set_points([model::Point::new()
            .set_interval(
                model::TimeInterval::new().set_end_time(wkt::Timestamp::clamp(1_700_000_000, 0)),
            )
            .set_value(model::TypedValue::new().set_int64_value(9_007_199_254_740_993_i64))]);
    client
        .create_time_series()
        .set_name("projects/p")
        .set_time_series([series])
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn metric_descriptor_with_slashes() -> Result<()> {
    let name =
        client::MetricService::metric_descriptor_path("p", "custom.googleapis.com/queue/depth")?;
    assert_eq!(
        name,
        "projects/p/metricDescriptors/custom.googleapis.com/queue/depth"
    );
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/v3/projects/p/metricDescriptors/custom.googleapis.com/queue/depth",
        ))
        .respond_with(json_encoded(json!({
            "name": name,
            "type": "custom.googleapis.com/queue/depth",
            "metricKind": "GAUGE",
            "valueType": "INT64",
            "labels": [{"key": "queue", "valueType": "STRING"}],
        }))),
    );
    let client = client::MetricService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let descriptor = client.get_metric_descriptor().set_name(&name).send().await?;
    assert_eq!(descriptor.r#type, "custom.googleapis.com/queue/depth");
    assert_eq!(descriptor.value_type, model::ValueType::Int64);
    assert_eq!(descriptor.labels[0].value_type, model::LabelValueType::String);
    Ok(())
}

#[tokio::test]
async fn list_uptime_check_ips() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v3/uptimeCheckIps"),
            request::query(url_decoded(not(contains(key("pageToken"))))),
        ])
        .respond_with(json_encoded(json!({
            "uptimeCheckIps": [
                {"region": "USA", "location": "Iowa", "ipAddress": "203.0.113.10"},
                {"region": "EUROPE", "location": "Belgium", "ipAddress": "203.0.113.20"},
            ],
        }))),
    );
    let client = client::UptimeCheckService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let mut items = client.list_uptime_check_ips().by_item();
    let mut regions = Vec::new();
    while let Some(ip) = items.next().await {
        regions.push(ip?.region);
    }
    assert_eq!(
        regions,
        [model::UptimeCheckRegion::Usa, model::UptimeCheckRegion::Europe]
    );
    Ok(())
}

#[tokio::test]
async fn create_uptime_check_config() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/v3/projects/p/uptimeCheckConfigs"),
            request::body(json_decoded(eq(json!({
                "displayName": "homepage",
                "monitoredResource": {"type": "uptime_url", "labels": {"host": "example.com"}},
                "httpCheck": {
                    "requestMethod": "POST",
                    "useSsl": true,
                    "path": "/health",
                    "port": 443,
                    "contentType": "URL_ENCODED",
                    "body": "cGluZz0x",
                },
                "period": "60s",
                "timeout": "10s",
            })))),
        ])
        .respond_with(json_encoded(json!({
            "name": "projects/p/uptimeCheckConfigs/homepage-abc",
            "displayName": "homepage",
        }))),
    );
    let client = client::UptimeCheckService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let config = client
        .create_uptime_check_config()
        .set_parent(client::UptimeCheckService::project_path("p")?)
        .set_uptime_check_config(
            model::UptimeCheckConfig::new()
                .set_display_name("homepage")
                .set_monitored_resource(
                    model::MonitoredResource::new()
                        .set_type("uptime_url")
                        .set_labels([("host", "example.com")]),
                )
                .set_http_check(
                    model::HttpCheck::new()
                        .set_request_method(model::RequestMethod::Post)
                        .set_use_ssl(true)
                        .set_path("/health")
                        .set_port(443)
                        .set_content_type(model::ContentType::UrlEncoded)
                        .set_body(bytes::Bytes::from_static(b"ping=1")),
                )
                .set_period(wkt::Duration::clamp(60, 0))
                .set_timeout(wkt::Duration::clamp(10, 0)),
        )
        .send()
        .await?;
    assert_eq!(config.name, "projects/p/uptimeCheckConfigs/homepage-abc");
    Ok(())
}

#[tokio::test]
async fn update_group_uses_put() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("PUT", "/v3/projects/p/groups/g1"),
            request::query(url_decoded(contains(("validateOnly", "true")))),
            request::body(json_decoded(eq(json!({
                "name": "projects/p/groups/g1",
                "displayName": "frontends",
                "filter": r#"resource.metadata.name=starts_with("fe-")"#,
                "isCluster": true,
            })))),
        ])
        .respond_with(json_encoded(json!({
            "name": "projects/p/groups/g1",
            "displayName": "frontends",
            "isCluster": true,
        }))),
    );
    let client = client::GroupService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let group = client
        .update_group()
        .set_group(
            model::Group::new()
                .set_name(client::GroupService::group_path("p", "g1")?)
                .set_display_name("frontends")
                .set_filter(r#"resource.metadata.name=starts_with("fe-")"#)
                .set_is_cluster(true),
        )
        .set_validate_only(true)
        .send()
        .await?;
    assert!(group.is_cluster);
    Ok(())
}

#[tokio::test]
async fn delete_notification_channel_force() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("DELETE", "/v3/projects/p/notificationChannels/c1"),
            request::query(url_decoded(contains(("force", "true")))),
        ])
        .respond_with(json_encoded(json!({}))),
    );
    let client = client::NotificationChannelService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    client
        .delete_notification_channel()
        .set_name(client::NotificationChannelService::notification_channel_path("p", "c1")?)
        .set_force(true)
        .send()
        .await?;
    Ok(())
}

#[tokio::test]
async fn services_accept_any_container() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/v3/folders/f1/services"),
            request::query(url_decoded(contains(("filter", "identifier:app-engine")))),
        ])
        .respond_with(json_encoded(json!({
            "services": [{
                "name": "folders/f1/services/svc-1",
                "displayName": "checkout",
                "appEngine": {"moduleId": "default"},
            }],
        }))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path(
                "GET",
                "/v3/folders/f1/services/svc-1/serviceLevelObjectives/slo-1"
            ),
            request::query(url_decoded(contains(("view", "EXPLICIT")))),
        ])
        .respond_with(json_encoded(json!({
            "name": "folders/f1/services/svc-1/serviceLevelObjectives/slo-1",
            "goal": 0.999,
            "rollingPeriod": "2419200s",
        }))),
    );
    let client = client::ServiceMonitoringService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let mut items = client
        .list_services()
        .set_parent("folders/f1")
        .set_filter("identifier:app-engine")
        .by_item();
    let mut services = Vec::new();
    while let Some(service) = items.next().await {
        services.push(service?);
    }
    assert_eq!(services.len(), 1, "{services:?}");
    assert_eq!(
        services[0].app_engine.as_ref().map(|a| a.module_id.as_str()),
        Some("default")
    );

    let slo = client
        .get_service_level_objective()
        .set_name("folders/f1/services/svc-1/serviceLevelObjectives/slo-1")
        .set_view(model::ServiceLevelObjectiveView::Explicit)
        .send()
        .await?;
    assert_eq!(slo.goal, 0.999);
    assert_eq!(slo.rolling_period, Some(wkt::Duration::clamp(28 * 24 * 60 * 60, 0)));
    Ok(())
}

#[tokio::test]
async fn service_name_must_match() -> Result<()> {
    let server = Server::run();
    let client = client::ServiceMonitoringService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let err = client
        .get_service()
        .set_name("projects/p/alertPolicies/a1")
        .send()
        .await
        .unwrap_err();
    assert!(err.is_binding(), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn alert_policy_not_found() -> Result<()> {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/v3/projects/p/alertPolicies/a1"))
            .respond_with(status_code(404).body(
                json!({"error": {
                    "code": 404,
                    "message": "policy not found",
                    "status": "NOT_FOUND",
                }})
                .to_string(),
            )),
    );
    let client = client::AlertPolicyService::builder()
        .with_endpoint(endpoint(&server))
        .with_credentials(anonymous())
        .build()
        .await?;
    let err = client
        .get_alert_policy()
        .set_name(client::AlertPolicyService::alert_policy_path("p", "a1")?)
        .send()
        .await
        .unwrap_err();
    assert_eq!(
        err.status().map(|s| s.code),
        Some(gax::error::rpc::Code::NotFound),
        "{err:?}"
    );
    assert_eq!(err.http_status_code(), Some(404));
    Ok(())
}
