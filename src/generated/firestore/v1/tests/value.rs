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


//! Verify the JSON mapping of document values.

use gapic_firestore_v1::model::{self, value::ValueType};
use serde_json::json;
use test_case::test_case;

type Result<T> = anyhow::Result<T>;

#[test_case(json!({"integerValue": "42"}); "string")]
#[test_case(json!({"integerValue": 42}); "number")]
fn integer_accepts_string_or_number(input: serde_json::Value) -> Result<()> {
    let value = serde_json::from_value::<model::Value>(input)?;
    assert_eq!(value.integer_value(), Some(&42));
    Ok(())
}

#[test]
fn integer_serializes_as_string() -> Result<()> {
    let value = model::Value::new().set_integer_value(i64::MAX);
    assert_eq!(
        serde_json::to_value(&value)?,
        json!({"integerValue": "9223372036854775807"})
    );
    Ok(())
}

#[test_case(json!({"nullValue": null}); "null")]
#[test_case(json!({"nullValue": "NULL_VALUE"}); "enum name")]
fn null_value(input: serde_json::Value) -> Result<()> {
    let value = serde_json::from_value::<model::Value>(input)?;
    assert_eq!(value.value_type, Some(ValueType::NullValue(model::NullValue)));
    assert_eq!(serde_json::to_value(&value)?, json!({"nullValue": "NULL_VALUE"}));
    Ok(())
}

#[test]
fn null_value_rejects_other_strings() {
    let got = serde_json::from_value::<model::NullValue>(json!("NOT_NULL"));
    assert!(got.is_err(), "{got:?}");
}

#[test]
fn bytes_are_base64() -> Result<()> {
    let value = model::Value::new().set_bytes_value(bytes::Bytes::from_static(b"\x00\x01\xfe\xff"));
    let json = serde_json::to_value(&value)?;
    assert_eq!(json, json!({"bytesValue": "AAH+/w=="}));
    let got = serde_json::from_value::<model::Value>(json)?;
    assert_eq!(got, value);
    Ok(())
}

#[test]
fn nested_values() -> Result<()> {
    let input = json!({"mapValue": {"fields": {
        "tags": {"arrayValue": {"values": [
            {"stringValue": "a"},
            {"booleanValue": true},
        ]}},
        "where": {"geoPointValue": {"latitude": 37.5, "longitude": -122.25}},
        "ref": {"referenceValue": "projects/p/databases/d/documents/c/doc"},
    }}});
    let value = serde_json::from_value::<model::Value>(input.clone())?;
    let map = value.map_value().expect("value is a map");
    match &map.fields["tags"].value_type {
        Some(ValueType::ArrayValue(array)) => {
            assert_eq!(array.values[0].string_value().map(String::as_str), Some("a"));
            assert_eq!(array.values[1].boolean_value(), Some(&true));
        }
        other => panic!("expected an array, got {other:?}"),
    }
    match &map.fields["where"].value_type {
        Some(ValueType::GeoPointValue(point)) => {
            assert_eq!((point.latitude, point.longitude), (37.5, -122.25));
        }
        other => panic!("expected a geo point, got {other:?}"),
    }
    assert_eq!(serde_json::to_value(&value)?, input);
    Ok(())
}

#[test]
fn setters_replace_the_value() {
    let value = model::Value::new()
        .set_string_value("abc")
        .set_double_value(2.5);
    assert_eq!(value.string_value(), None);
    assert_eq!(value.double_value(), Some(&2.5));
}
