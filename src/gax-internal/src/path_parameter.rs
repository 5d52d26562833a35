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


//! Validation of path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required, and must match the pattern in the RPC's HTTP binding, e.g.
//! `{name=projects/*/instances/*}`. Some path parameters are nested in
//! optional message fields. These helpers keep the generated code short.
//!
//! The helpers return the value percent-encoded, ready to be used in the
//! request path. The `/` separators are preserved.

use gax::error::Error as RpcError;
use gax::path_template::PathTemplate;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters encoded in each segment of a path parameter.
///
/// Resource ids (e.g. Firestore document ids) may contain any of these, and
/// `#` or `?` would otherwise end the path.
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT_ENCODE_SET).to_string()
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("missing required parameter {0}")]
    MissingRequiredParameter(String),
    #[error("the value {value} for parameter {name} does not match {pattern}")]
    InvalidParameter {
        name: String,
        value: String,
        pattern: String,
    },
}

/// Returns the error for a missing path parameter.
pub fn missing(name: &str) -> RpcError {
    RpcError::binding(Error::MissingRequiredParameter(name.to_string()))
}

/// Unwraps a path parameter nested in an optional field.
///
/// # Example
/// ```
/// # use gapic_gax_internal::path_parameter::required;
/// let name = required(Some("projects/p"), "context.name")?;
/// assert_eq!(name, "projects/p");
/// # Ok::<(), gax::error::Error>(())
/// ```
pub fn required<T>(value: Option<T>, name: &str) -> gax::Result<T> {
    value.ok_or_else(|| missing(name))
}

/// Verifies `value` matches the path template `pattern`.
///
/// Returns the percent-encoded value, so the generated code can use it in a
/// `format!()` expression.
///
/// # Example
/// ```
/// # use gapic_gax_internal::path_parameter::matching;
/// let name = matching("projects/p/instances/i", "projects/*/instances/*", "name")?;
/// assert_eq!(name, "projects/p/instances/i");
/// let name = matching("projects/p/instances/a#b", "projects/*/instances/*", "name")?;
/// assert_eq!(name, "projects/p/instances/a%23b");
/// assert!(matching("projects/p", "projects/*/instances/*", "name").is_err());
/// # Ok::<(), gax::error::Error>(())
/// ```
pub fn matching(value: &str, pattern: &str, name: &str) -> gax::Result<String> {
    if value.is_empty() {
        return Err(missing(name));
    }
    let template = PathTemplate::new(pattern).map_err(RpcError::binding)?;
    template.match_path(value).map_err(|_| {
        RpcError::binding(Error::InvalidParameter {
            name: name.to_string(),
            value: value.to_string(),
            pattern: pattern.to_string(),
        })
    })?;
    Ok(encode(value))
}

/// Verifies `value` matches at least one of the path templates in `patterns`.
///
/// Some RPCs have additional HTTP bindings that produce the same URL shape,
/// they differ only on the accepted values.
///
/// # Example
/// ```
/// # use gapic_gax_internal::path_parameter::matching_any;
/// let patterns = ["projects/*/databases/*/documents", "projects/*/databases/*/documents/*/**"];
/// assert!(matching_any("projects/p/databases/d/documents", &patterns, "parent").is_ok());
/// assert!(matching_any("projects/p/databases/d/documents/c/doc", &patterns, "parent").is_ok());
/// assert!(matching_any("projects/p/databases/d", &patterns, "parent").is_err());
/// ```
pub fn matching_any(value: &str, patterns: &[&str], name: &str) -> gax::Result<String> {
    if value.is_empty() {
        return Err(missing(name));
    }
    for pattern in patterns {
        let template = PathTemplate::new(pattern).map_err(RpcError::binding)?;
        if template.match_path(value).is_ok() {
            return Ok(encode(value));
        }
    }
    Err(RpcError::binding(Error::InvalidParameter {
        name: name.to_string(),
        value: value.to_string(),
        pattern: patterns.join(" | "),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    #[test_case("projects/my-project", true)]
    #[test_case("projects/", false)]
    #[test_case("projects/my-project/", false)]
    #[test_case("projects/my-project/locations/my-location", false)]
    #[test_case("folders/my-folder", false)]
    fn single_wildcard(input: &str, ok: bool) {
        let got = matching(input, "projects/*", "parent");
        assert_eq!(got.is_ok(), ok, "{got:?}");
        if let Err(e) = got {
            assert!(e.is_binding(), "{e:?}");
        }
    }

    #[test_case("projects/p/databases/d/documents/a/b", true)]
    #[test_case("projects/p/databases/d/documents/a", true)]
    #[test_case("projects/p/databases/d/documents", false)]
    fn multi_wildcard(input: &str, ok: bool) {
        let got = matching(input, "projects/*/databases/*/documents/*/**", "name");
        assert_eq!(got.is_ok(), ok, "{got:?}");
    }

    #[test_case("projects/p/databases/d/documents/cities/a#b", "projects/p/databases/d/documents/cities/a%23b")]
    #[test_case("projects/p/databases/d/documents/cities/what?x=1", "projects/p/databases/d/documents/cities/what%3Fx=1")]
    #[test_case("projects/p/databases/d/documents/cities/100%", "projects/p/databases/d/documents/cities/100%25")]
    #[test_case("projects/p/databases/d/documents/cities/new york", "projects/p/databases/d/documents/cities/new%20york")]
    #[test_case("projects/p/databases/d/documents/cities/sf", "projects/p/databases/d/documents/cities/sf")]
    fn encoded_segments(input: &str, want: &str) -> anyhow::Result<()> {
        let got = matching(input, "projects/*/databases/*/documents/*/**", "name")?;
        assert_eq!(got, want);
        let got = matching_any(input, &["projects/*", "projects/*/databases/*/documents/*/**"], "name")?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn empty_is_missing() {
        let e = matching("", "projects/*", "parent").unwrap_err();
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert_eq!(source, Some(&Error::MissingRequiredParameter("parent".to_string())));
    }

    #[test]
    fn invalid() {
        let e = matching("folders/f", "projects/*", "parent").unwrap_err();
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::InvalidParameter { name, value, .. }) if name == "parent" && value == "folders/f"),
            "{e:?}"
        );
    }

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        assert!(e.is_binding(), "{e:?}");
        let source = e.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(
            matches!(source, Some(Error::MissingRequiredParameter(p)) if p == "abc123"),
            "{e:?}"
        );
    }

    #[test]
    fn required() -> anyhow::Result<()> {
        let got = super::required(Some(42), "field")?;
        assert_eq!(got, 42);
        let got = super::required::<i32>(None, "context.name").unwrap_err();
        assert!(got.is_binding(), "{got:?}");
        assert!(format!("{got}").contains("context.name"), "{got}");
        Ok(())
    }

    #[test]
    fn any_pattern() {
        let patterns = [
            "projects/*/databases/*/documents",
            "projects/*/databases/*/documents/*/**",
        ];
        assert!(matching_any("projects/p/databases/d/documents", &patterns, "parent").is_ok());
        assert!(matching_any("projects/p/databases/d/documents/c/d", &patterns, "parent").is_ok());
        let err = matching_any("projects/p", &patterns, "parent").unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let err = matching_any("", &patterns, "parent").unwrap_err();
        let source = err.source().and_then(|e| e.downcast_ref::<Error>());
        assert_eq!(
            source,
            Some(&Error::MissingRequiredParameter("parent".to_string()))
        );
    }
}
