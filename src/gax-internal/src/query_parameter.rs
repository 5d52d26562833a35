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


//! Serialize query parameters.
//!
//! Query parameters in the Google APIs can be strings, integers, booleans,
//! enums, well-known types such as `FieldMask`, repeated fields, or even
//! messages. The generated code serializes all of them with [add], using
//! the JSON representation of the field. Messages are flattened into
//! `name.subfield` parameters and repeated fields produce one parameter per
//! element.
//!
//! Fields with default values (empty strings, zero, `false`, empty lists) are
//! omitted, they are indistinguishable from unset fields in the JSON mapping.

use gax::error::Error;
use serde_json::Value;

/// Adds the query parameter `name` with the JSON representation of `value`.
pub fn add<T>(
    builder: reqwest::RequestBuilder,
    name: &str,
    value: &T,
) -> gax::Result<reqwest::RequestBuilder>
where
    T: serde::Serialize + ?Sized,
{
    let value = serde_json::to_value(value).map_err(Error::ser)?;
    let mut pairs = Vec::new();
    flatten(&mut pairs, name.to_string(), value);
    if pairs.is_empty() {
        return Ok(builder);
    }
    Ok(builder.query(&pairs))
}

fn flatten(pairs: &mut Vec<(String, String)>, name: String, value: Value) {
    match value {
        Value::Object(object) => object
            .into_iter()
            .for_each(|(k, v)| flatten(pairs, format!("{name}.{k}"), v)),
        Value::Array(array) => array
            .into_iter()
            .for_each(|v| flatten(pairs, name.clone(), v)),
        Value::Null | Value::Bool(false) => {}
        Value::String(s) if s.is_empty() => {}
        Value::Number(n) if n.as_f64() == Some(0.0) => {}
        Value::String(s) => pairs.push((name, s)),
        Value::Number(n) => pairs.push((name, n.to_string())),
        Value::Bool(true) => pairs.push((name, "true".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split('&')
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn builder() -> anyhow::Result<reqwest::RequestBuilder> {
        Ok(reqwest::Client::builder()
            .build()?
            .get("https://test.googleapis.com/v1/unused"))
    }

    #[test]
    fn object() -> TestResult {
        let value = json!({
            "a": 123,
            "b": [123, 456],
            "c": "123",
            "d": true,
            "e": {"f": "abc", "g": false, "h": {"i": 42}},
        });
        let request = add(builder()?, "name", &value)?.build()?;
        assert_eq!(
            split_query(&request),
            vec![
                "name.a=123",
                "name.b=123",
                "name.b=456",
                "name.c=123",
                "name.d=true",
                "name.e.f=abc",
                "name.e.h.i=42",
            ]
        );
        Ok(())
    }

    #[test_case(json!("abc123"), vec!["name=abc123"]; "string")]
    #[test_case(json!(7.5), vec!["name=7.5"]; "number")]
    #[test_case(json!(-3), vec!["name=-3"]; "negative")]
    #[test_case(json!(true), vec!["name=true"]; "boolean")]
    #[test_case(json!([1, 3, 5]), vec!["name=1", "name=3", "name=5"]; "array")]
    #[test_case(json!(null), vec![]; "null")]
    #[test_case(json!(""), vec![]; "empty string")]
    #[test_case(json!(0), vec![]; "zero")]
    #[test_case(json!(false), vec![]; "false")]
    #[test_case(json!([]), vec![]; "empty array")]
    fn values(value: Value, want: Vec<&str>) -> TestResult {
        let request = add(builder()?, "name", &value)?.build()?;
        assert_eq!(split_query(&request), want);
        Ok(())
    }

    #[test]
    fn typed_fields() -> TestResult {
        let mask = wkt::FieldMask::default().set_paths(["displayName", "labels"]);
        let builder = add(builder()?, "updateMask", &mask)?;
        let builder = add(builder, "pageSize", &100_i32)?;
        let builder = add(builder, "pageToken", "")?;
        let builder = add(builder, "names", &vec!["a b", "c"])?;
        let request = builder.build()?;
        assert_eq!(
            split_query(&request),
            vec![
                "updateMask=displayName%2Clabels",
                "pageSize=100",
                "names=a+b",
                "names=c"
            ]
        );
        Ok(())
    }
}
