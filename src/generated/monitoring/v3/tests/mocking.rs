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


use gapic_monitoring_v3::{client, model, stub};
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::response::Response;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

mockall::mock! {
    #[derive(Debug)]
    AlertPolicyService {}
    impl stub::AlertPolicyService for AlertPolicyService {
        async fn list_alert_policies(&self, req: model::ListAlertPoliciesRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::ListAlertPoliciesResponse>>;
        async fn create_alert_policy(&self, req: model::CreateAlertPolicyRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::AlertPolicy>>;
        async fn update_alert_policy(&self, req: model::UpdateAlertPolicyRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::AlertPolicy>>;
    }
}

mockall::mock! {
    #[derive(Debug)]
    GroupService {}
    impl stub::GroupService for GroupService {
        async fn list_group_members(&self, req: model::ListGroupMembersRequest, _options: gax::options::RequestOptions) -> gax::Result<Response<model::ListGroupMembersResponse>>;
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn create_alert_policy() -> Result<()> {
    let mut mock = MockAlertPolicyService::new();
    mock.expect_create_alert_policy()
        .withf(|r, _| {
            r.name == "projects/my-project"
                && r.alert_policy.as_ref().is_some_and(|p| {
                    p.combiner == model::ConditionCombinerType::Or && p.conditions.len() == 1
                })
        })
        .return_once(|r, _| {
            let policy = r.alert_policy.unwrap_or_default();
            Ok(Response::from(
                policy.set_name("projects/my-project/alertPolicies/123"),
            ))
        });

    let client = client::AlertPolicyService::from_stub(mock);
    let policy = client
        .create_alert_policy()
        .set_name(client::AlertPolicyService::project_path("my-project")?)
        .set_alert_policy(cpu_policy())
        .send()
        .await?;
    assert_eq!(policy.name, "projects/my-project/alertPolicies/123");
    assert_eq!(policy.enabled, Some(true));
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn list_alert_policies_by_item() -> Result<()> {
    let mut seq = mockall::Sequence::new();
    let mut mock = MockAlertPolicyService::new();
    mock.expect_list_alert_policies()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.filter == "enabled = true" && r.page_token.is_empty())
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListAlertPoliciesResponse::new()
                    .set_alert_policies([policy("1"), policy("2")])
                    .set_next_page_token("t2"),
            ))
        });
    mock.expect_list_alert_policies()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token == "t2")
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListAlertPoliciesResponse::new().set_alert_policies([policy("3")]),
            ))
        });

    let client = client::AlertPolicyService::from_stub(mock);
    let mut items = client
        .list_alert_policies()
        .set_name("projects/p")
        .set_filter("enabled = true")
        .by_item();
    let mut names = Vec::new();
    while let Some(p) = items.next().await {
        names.push(p?.name);
    }
    assert_eq!(
        names,
        [
            "projects/p/alertPolicies/1",
            "projects/p/alertPolicies/2",
            "projects/p/alertPolicies/3"
        ]
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn update_alert_policy_error() -> Result<()> {
    let mut mock = MockAlertPolicyService::new();
    mock.expect_update_alert_policy()
        .withf(|r, _| {
            r.update_mask
                .as_ref()
                .is_some_and(|m| m.paths == ["display_name"])
        })
        .return_once(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::InvalidArgument)
                    .set_message("display name too long"),
            ))
        });

    let client = client::AlertPolicyService::from_stub(mock);
    let err = client
        .update_alert_policy()
        .set_alert_policy(policy("1").set_display_name("x".repeat(1024)))
        .set_update_mask(wkt::FieldMask::default().set_paths(["display_name"]))
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status().map(|s| s.code), Some(Code::InvalidArgument), "{err:?}");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn list_group_members_by_page() -> Result<()> {
    let mut seq = mockall::Sequence::new();
    let mut mock = MockGroupService::new();
    mock.expect_list_group_members()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.name == "projects/p/groups/g" && r.page_token.is_empty())
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListGroupMembersResponse::new()
                    .set_members([instance("a"), instance("b")])
                    .set_total_size(3)
                    .set_next_page_token("t2"),
            ))
        });
    mock.expect_list_group_members()
        .once()
        .in_sequence(&mut seq)
        .withf(|r, _| r.page_token == "t2")
        .return_once(|_, _| {
            Ok(Response::from(
                model::ListGroupMembersResponse::new()
                    .set_members([instance("c")])
                    .set_total_size(3),
            ))
        });

    let client = client::GroupService::from_stub(mock);
    let mut pages = client
        .list_group_members()
        .set_name(client::GroupService::group_path("p", "g")?)
        .by_page();
    let mut ids = Vec::new();
    while let Some(page) = pages.next().await {
        let page = page?;
        assert_eq!(page.total_size, 3);
        ids.extend(page.members.into_iter().map(|m| m.labels["instance_id"].clone()));
    }
    assert_eq!(ids, ["a", "b", "c"]);
    Ok(())
}

fn cpu_policy() -> model::AlertPolicy {
    model::AlertPolicy::new()
        .set_display_name("High CPU")
        .set_combiner(model::ConditionCombinerType::Or)
        .set_enabled(true)
        .set_conditions([model::Condition::new()
            .set_display_name("CPU above 80%")
            .set_condition_threshold(
                model::MetricThreshold::new()
                    .set_filter(r#"metric.type="compute.googleapis.com/instance/cpu/utilization""#)
                    .set_comparison(model::ComparisonType::ComparisonGt)
                    .set_threshold_value(0.8)
                    .set_duration(wkt::Duration::clamp(300, 0)),
            )])
}

fn policy(id: &str) -> model::AlertPolicy {
    model::AlertPolicy::new().set_name(format!("projects/p/alertPolicies/{id}"))
}

fn instance(id: &str) -> model::MonitoredResource {
    model::MonitoredResource::new()
        .set_type("gce_instance")
        .set_labels([("instance_id", id)])
}
