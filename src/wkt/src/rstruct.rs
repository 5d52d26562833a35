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

/// A structured data value, consisting of fields which map to dynamically
/// typed values.
///
/// Dialogflow uses this type for intent parameters and webhook payloads.
pub type Struct = serde_json::Map<String, serde_json::Value>;

/// A dynamically typed value: null, a number, a string, a boolean, a
/// [Struct], or a [ListValue].
pub type Value = serde_json::Value;

/// A repeated field of dynamically typed values.
pub type ListValue = Vec<serde_json::Value>;

impl crate::message::Message for Struct {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.Struct"
    }

    fn to_map(&self) -> Result<crate::message::Map, crate::AnyError> {
        crate::message::to_json_other(self)
    }

    fn from_map(map: &crate::message::Map) -> Result<Self, crate::AnyError> {
        crate::message::from_other(map)
    }
}

impl crate::message::Message for Value {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.Value"
    }

    fn to_map(&self) -> Result<crate::message::Map, crate::AnyError> {
        crate::message::to_json_other(self)
    }

    fn from_map(map: &crate::message::Map) -> Result<Self, crate::AnyError> {
        crate::message::from_other(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Any;
    use serde_json::json;

    #[test]
    fn struct_in_any() -> anyhow::Result<()> {
        let input = json!({"fruit": "apple", "count": 3});
        let value = input.as_object().cloned().unwrap_or_default();
        let any = Any::from_msg(&value)?;
        let got = serde_json::to_value(&any)?;
        assert_eq!(
            got,
            json!({"@type": "type.googleapis.com/google.protobuf.Struct", "value": input})
        );
        assert_eq!(any.to_msg::<Struct>()?, value);
        Ok(())
    }

    #[test]
    fn value_in_any() -> anyhow::Result<()> {
        let any = Any::from_msg(&json!([1, "two", null]))?;
        assert_eq!(any.type_url(), Some("type.googleapis.com/google.protobuf.Value"));
        assert_eq!(any.to_msg::<Value>()?, json!([1, "two", null]));
        Ok(())
    }
}
