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

use crate::message::Message;

/// `Any` contains an arbitrary serialized message along with a URL that
/// describes the type of the serialized message.
///
/// Long-running operations use `Any` for their metadata and their response.
///
/// # JSON
///
/// The JSON representation of an `Any` value uses the regular representation
/// of the embedded message, with an additional field `@type` which contains
/// the type URL. Example:
///
/// ```norust
///     {
///       "@type": "type.googleapis.com/google.bigtable.admin.v2.Instance",
///       "name": "projects/p/instances/i",
///       "displayName": "My Instance"
///     }
/// ```
///
/// If the embedded message type is well-known and has a custom JSON
/// representation, that representation is embedded in a field `value`:
///
/// ```norust
///     {
///       "@type": "type.googleapis.com/google.protobuf.Duration",
///       "value": "1.212s"
///     }
/// ```
///
/// # Example
/// ```
/// # use gapic_wkt::{Any, Duration, AnyError};
/// let any = Any::from_msg(&Duration::clamp(123, 0))?;
/// assert_eq!(any.type_url(), Some("type.googleapis.com/google.protobuf.Duration"));
/// let d = any.to_msg::<Duration>()?;
/// assert_eq!(d, Duration::clamp(123, 0));
/// # Ok::<(), AnyError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Any(serde_json::Map<String, serde_json::Value>);

/// Indicates a problem trying to use an [Any].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum AnyError {
    /// Problem serializing an object into an [Any].
    #[error("cannot serialize object into an Any, source={0}")]
    Serialization(#[source] BoxedError),

    /// Problem deserializing an object from an [Any].
    #[error("cannot deserialize from an Any, source={0}")]
    Deserialization(#[source] BoxedError),

    /// Mismatched type, the [Any] does not contain the desired type.
    #[error("expected type mismatch in Any deserialization has={has}, want={want}")]
    TypeMismatch { has: String, want: String },
}

type BoxedError = Box<dyn std::error::Error + Send + Sync>;
type Error = AnyError;

impl AnyError {
    pub(crate) fn ser<T: Into<BoxedError>>(v: T) -> Self {
        Self::Serialization(v.into())
    }

    pub(crate) fn deser<T: Into<BoxedError>>(v: T) -> Self {
        Self::Deserialization(v.into())
    }

    fn mismatch(has: &str, want: &str) -> Self {
        Self::TypeMismatch {
            has: has.into(),
            want: want.into(),
        }
    }
}

impl Any {
    /// Returns the type URL of the contained message, if any.
    pub fn type_url(&self) -> Option<&str> {
        self.0.get("@type").and_then(serde_json::Value::as_str)
    }

    /// Creates a new [Any] from any [Message] that supports serialization
    /// to JSON.
    pub fn from_msg<T>(message: &T) -> Result<Self, Error>
    where
        T: Message,
    {
        message.to_map().map(Any)
    }

    /// Extracts (if possible) a `T` value from the [Any].
    ///
    /// Fails with [AnyError::TypeMismatch] if the `@type` field does not
    /// match `T::typename()`.
    pub fn to_msg<T>(&self) -> Result<T, Error>
    where
        T: Message,
    {
        let r#type = self
            .type_url()
            .ok_or_else(|| Error::deser("@type field is missing or is not a string"))?;
        if r#type != T::typename() {
            return Err(Error::mismatch(r#type, T::typename()));
        }
        T::from_map(&self.0)
    }
}

impl serde::ser::Serialize for Any {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::de::Deserialize<'de> for Any {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(Any(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Duration;
    use crate::Empty;
    use crate::Timestamp;
    use serde_json::json;
    type Result = anyhow::Result<()>;

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Stored {
        parent: String,
        display_name: String,
    }

    impl Message for Stored {
        fn typename() -> &'static str {
            "type.googleapis.com/test.Stored"
        }
    }

    #[test]
    fn serialize_duration() -> Result {
        let any = Any::from_msg(&Duration::clamp(60, 0))?;
        let got = serde_json::to_value(any)?;
        let want = json!({"@type": "type.googleapis.com/google.protobuf.Duration", "value": "60s"});
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn deserialize_timestamp() -> Result {
        let input = json!({"@type": "type.googleapis.com/google.protobuf.Timestamp", "value": "1970-01-01T00:02:03Z"});
        let any = serde_json::from_value::<Any>(input)?;
        let got = any.to_msg::<Timestamp>()?;
        assert_eq!(got, Timestamp::clamp(123, 0));
        Ok(())
    }

    #[test]
    fn serialize_generic() -> Result {
        let stored = Stored {
            parent: "projects/p".into(),
            display_name: "name".into(),
        };
        let any = Any::from_msg(&stored)?;
        let got = serde_json::to_value(&any)?;
        let want = json!({"@type": "type.googleapis.com/test.Stored", "parent": "projects/p", "displayName": "name"});
        assert_eq!(got, want);
        assert_eq!(any.to_msg::<Stored>()?, stored);
        Ok(())
    }

    #[test]
    fn empty_roundtrip() -> Result {
        let any = Any::from_msg(&Empty::default())?;
        assert_eq!(any.type_url(), Some("type.googleapis.com/google.protobuf.Empty"));
        let got = any.to_msg::<Empty>()?;
        assert_eq!(got, Empty::default());
        Ok(())
    }

    #[test]
    fn type_mismatch() -> Result {
        let any = Any::from_msg(&Duration::clamp(60, 0))?;
        let got = any.to_msg::<Timestamp>();
        assert!(
            matches!(&got, Err(AnyError::TypeMismatch { has, want }) if has.contains("Duration") && want.contains("Timestamp")),
            "{got:?}"
        );
        Ok(())
    }

    #[test]
    fn deserialize_error() -> Result {
        let any = serde_json::from_value::<Any>(json!({"@type-is-missing": ""}))?;
        let got = any.to_msg::<Stored>();
        assert!(matches!(got, Err(AnyError::Deserialization(_))), "{got:?}");

        let any = serde_json::from_value::<Any>(json!({"@type": [1, 2, 3]}))?;
        let got = any.to_msg::<Stored>();
        assert!(matches!(got, Err(AnyError::Deserialization(_))), "{got:?}");

        let any = serde_json::from_value::<Any>(
            json!({"@type": "type.googleapis.com/google.protobuf.Duration", "value": ["1.2s"]}),
        )?;
        let got = any.to_msg::<Duration>();
        assert!(matches!(got, Err(AnyError::Deserialization(_))), "{got:?}");
        Ok(())
    }
}
