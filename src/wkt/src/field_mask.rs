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

/// A set of symbolic field paths.
///
/// Update RPCs (for example `UpdateInstance` in Bigtable, `UpdateField` in
/// Firestore, or `UpdateIntent` in Dialogflow) use a field mask to name the
/// fields the service should overwrite. Fields not named in the mask keep
/// their current value.
///
/// # JSON Mapping
///
/// In JSON a field mask is a single string, with the paths separated by
/// commas and each path in lower camel case. For example, the paths
/// `["display_name", "labels"]` become `"displayName,labels"`. The paths are
/// sent as provided, the application is responsible for using the JSON names.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct FieldMask {
    /// The set of field mask paths.
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Set the paths.
    pub fn set_paths<T, V>(mut self, paths: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = paths.into_iter().map(|v| v.into()).collect();
        self
    }
}

impl crate::message::Message for FieldMask {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.FieldMask"
    }

    fn to_map(&self) -> Result<crate::message::Map, crate::AnyError> {
        crate::message::to_json_other(self)
    }

    fn from_map(map: &crate::message::Map) -> Result<Self, crate::AnyError> {
        crate::message::from_other(map)
    }
}

impl serde::ser::Serialize for FieldMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.paths.join(","))
    }
}

struct PathVisitor;

impl serde::de::Visitor<'_> for PathVisitor {
    type Value = FieldMask;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a string with comma-separated field mask paths")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if value.is_empty() {
            return Ok(FieldMask::default());
        }
        Ok(FieldMask::default().set_paths(value.split(',')))
    }
}

impl<'de> serde::de::Deserialize<'de> for FieldMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(PathVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Any;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test_case(vec![], ""; "empty")]
    #[test_case(vec!["displayName"], "displayName"; "single")]
    #[test_case(vec!["displayName", "labels", "type"], "displayName,labels,type"; "multiple")]
    fn serialize(paths: Vec<&str>, want: &str) -> Result {
        let mask = FieldMask::default().set_paths(paths.clone());
        let got = serde_json::to_value(&mask)?;
        assert_eq!(got, json!(want));

        let back = serde_json::from_value::<FieldMask>(got)?;
        assert_eq!(back, mask);
        Ok(())
    }

    #[test]
    fn deserialize_unexpected_input_type() {
        let got = serde_json::from_value::<FieldMask>(json!({"paths": "a,b"}));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn in_any() -> Result {
        let mask = FieldMask::default().set_paths(["labels"]);
        let any = Any::from_msg(&mask)?;
        let got = serde_json::to_value(&any)?;
        assert_eq!(
            got,
            json!({"@type": "type.googleapis.com/google.protobuf.FieldMask", "value": "labels"})
        );
        assert_eq!(any.to_msg::<FieldMask>()?, mask);
        Ok(())
    }
}
