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

//! Define traits required of all messages.

pub(crate) type Map = serde_json::Map<String, serde_json::Value>;
use crate::AnyError as Error;

/// A trait that must be implemented by all messages.
///
/// Messages sent to and received from Google Cloud services may be wrapped in
/// [Any][crate::Any]. `Any` uses a `@type` field to encode the type name and
/// then validates extraction and insertion against this type.
pub trait Message: serde::ser::Serialize + serde::de::DeserializeOwned {
    /// The typename of this message.
    fn typename() -> &'static str;

    /// Store the message in the JSON object used by [Any][crate::Any].
    ///
    /// Most messages are stored flatly, next to the `@type` field. Messages
    /// with a custom JSON encoding override this to use a `value` field.
    #[doc(hidden)]
    fn to_map(&self) -> Result<Map, Error> {
        to_json_object(self)
    }

    /// The analog of [to_map()][Message::to_map].
    #[doc(hidden)]
    fn from_map(map: &Map) -> Result<Self, Error> {
        from_object(map)
    }
}

/// Write the serialization of `T` flatly into a map.
///
/// We use this for types that do not have special encodings, as defined in:
/// https://protobuf.dev/programming-guides/json/
pub(crate) fn to_json_object<T>(message: &T) -> Result<Map, Error>
where
    T: Message,
{
    use serde_json::Value;

    let value = serde_json::to_value(message).map_err(Error::ser)?;
    match value {
        Value::Object(mut map) => {
            map.insert(
                "@type".to_string(),
                Value::String(T::typename().to_string()),
            );
            Ok(map)
        }
        _ => Err(Error::ser(
            "unexpected JSON type, only Object and String are supported",
        )),
    }
}

/// Write the serialization of `T` into the `value` field of a map.
///
/// Used for types whose JSON encoding is not an object.
pub(crate) fn to_json_other<T>(message: &T) -> Result<Map, Error>
where
    T: Message,
{
    let value = serde_json::to_value(message).map_err(Error::ser)?;
    let mut map = Map::new();
    map.insert("@type".to_string(), T::typename().into());
    map.insert("value".to_string(), value);
    Ok(map)
}

pub(crate) fn from_object<T>(map: &Map) -> Result<T, Error>
where
    T: Message,
{
    let map = map
        .iter()
        .filter(|(k, _)| k.as_str() != "@type")
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    serde_json::from_value::<T>(serde_json::Value::Object(map)).map_err(Error::deser)
}

pub(crate) fn from_other<T>(map: &Map) -> Result<T, Error>
where
    T: Message,
{
    map.get("value")
        .map(|v| serde_json::from_value::<T>(v.clone()))
        .ok_or_else(|| Error::deser("value field is missing"))?
        .map_err(Error::deser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct TestMessage {
        #[serde(flatten)]
        _unknown_fields: serde_json::Map<String, serde_json::Value>,
    }

    impl Message for TestMessage {
        fn typename() -> &'static str {
            "type.googleapis.com/test.TestMessage"
        }
    }

    #[test]
    fn drop_type_field() {
        let input = json!({
            "@type": "type.googleapis.com/test.TestMessage",
            "a": 1,
            "b": 2,
        });
        let map = input.as_object().cloned().unwrap();
        let test = TestMessage::from_map(&map).unwrap();
        assert!(test._unknown_fields.get("@type").is_none(), "{test:?}");
        assert_eq!(test._unknown_fields.get("a"), Some(&json!(1)));
    }

    #[test]
    fn add_type_field() {
        let mut fields = serde_json::Map::new();
        fields.insert("a".to_string(), json!(1));
        let test = TestMessage {
            _unknown_fields: fields,
        };
        let map = test.to_map().unwrap();
        assert_eq!(
            map.get("@type"),
            Some(&json!("type.googleapis.com/test.TestMessage"))
        );
        assert_eq!(map.get("a"), Some(&json!(1)));
    }

    #[test]
    fn missing_value_field() {
        let input = json!({"@type": "type.googleapis.com/google.protobuf.Duration"});
        let map = input.as_object().cloned().unwrap();
        let got = from_other::<crate::Duration>(&map);
        assert!(matches!(got, Err(Error::Deserialization(_))), "{got:?}");
    }
}
