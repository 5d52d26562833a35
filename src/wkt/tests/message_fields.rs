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

//! Verify the well-known types work as fields of generated messages.

use gapic_wkt::{Duration, FieldMask, Timestamp};
use serde_json::json;
type Result = anyhow::Result<()>;

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
struct Update {
    #[serde(skip_serializing_if = "Option::is_none")]
    update_mask: Option<FieldMask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    create_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<Duration>,
}

#[test]
fn all_fields() -> Result {
    let input = Update {
        update_mask: Some(FieldMask::default().set_paths(["displayName", "labels"])),
        create_time: Some(Timestamp::clamp(1747388772, 0)),
        ttl: Some(Duration::clamp(90, 500_000_000)),
    };
    let got = serde_json::to_value(&input)?;
    let want = json!({
        "updateMask": "displayName,labels",
        "createTime": "2025-05-16T09:46:12Z",
        "ttl": "90.5s",
    });
    assert_eq!(got, want);
    let back = serde_json::from_value::<Update>(got)?;
    assert_eq!(back, input);
    Ok(())
}

#[test]
fn missing_fields() -> Result {
    let got = serde_json::from_value::<Update>(json!({}))?;
    assert_eq!(got, Update::default());
    assert_eq!(serde_json::to_value(&got)?, json!({}));
    Ok(())
}
