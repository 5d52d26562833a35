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

use crate::error::Error;
use serde::{Deserialize, Serialize};

/// The [Status] type defines a logical error model that is suitable for
/// different programming environments, including REST APIs and RPC APIs. Each
/// [Status] message contains three pieces of data: error code, error message,
/// and error details.
///
/// Long-running operations also use this type to report failures, in the
/// `error` field of the operation.
///
/// You can find out more about this error model and how to work with it in the
/// [API Design Guide](https://cloud.google.com/apis/design/errors).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code.
    pub code: Code,

    /// A developer-facing error message, which should be in English.
    pub message: String,

    /// A list of messages that carry the error details.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<StatusDetails>,
}

impl Status {
    /// Sets the value for [code][Status::code].
    pub fn set_code<T: Into<Code>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value for [details][Status::details].
    pub fn set_details<T, I>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<StatusDetails>,
    {
        self.details = v.into_iter().map(|v| v.into()).collect();
        self
    }
}

impl wkt::message::Message for Status {
    fn typename() -> &'static str {
        "type.googleapis.com/google.rpc.Status"
    }
}

/// The canonical error codes for APIs.
///
/// Sometimes multiple error codes may apply. Services return the most specific
/// error code that applies. The bundled client configurations name these codes
/// (e.g. `"UNAVAILABLE"`) in their `retry_codes` sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Code {
    /// Not an error; returned on success.
    ///
    /// HTTP Mapping: 200 OK
    Ok = 0,

    /// The operation was cancelled, typically by the caller.
    ///
    /// HTTP Mapping: 499 Client Closed Request
    Cancelled = 1,

    /// Unknown error.
    ///
    /// HTTP Mapping: 500 Internal Server Error
    #[default]
    Unknown = 2,

    /// The client specified an invalid argument, regardless of the state of
    /// the system.
    ///
    /// HTTP Mapping: 400 Bad Request
    InvalidArgument = 3,

    /// The deadline expired before the operation could complete. For
    /// operations that change the state of the system, this error may be
    /// returned even if the operation has completed successfully.
    ///
    /// HTTP Mapping: 504 Gateway Timeout
    DeadlineExceeded = 4,

    /// Some requested entity was not found.
    ///
    /// HTTP Mapping: 404 Not Found
    NotFound = 5,

    /// The entity that a client attempted to create already exists.
    ///
    /// HTTP Mapping: 409 Conflict
    AlreadyExists = 6,

    /// The caller does not have permission to execute the specified
    /// operation.
    ///
    /// HTTP Mapping: 403 Forbidden
    PermissionDenied = 7,

    /// Some resource has been exhausted, perhaps a per-user quota.
    ///
    /// HTTP Mapping: 429 Too Many Requests
    ResourceExhausted = 8,

    /// The operation was rejected because the system is not in a state
    /// required for the operation's execution. The client should not retry
    /// until the system state has been explicitly fixed.
    ///
    /// HTTP Mapping: 400 Bad Request
    FailedPrecondition = 9,

    /// The operation was aborted, typically due to a concurrency issue such as
    /// a transaction abort. The client should retry at a higher level.
    ///
    /// HTTP Mapping: 409 Conflict
    Aborted = 10,

    /// The operation was attempted past the valid range.
    ///
    /// HTTP Mapping: 400 Bad Request
    OutOfRange = 11,

    /// The operation is not implemented or is not supported/enabled in this
    /// service.
    ///
    /// HTTP Mapping: 501 Not Implemented
    Unimplemented = 12,

    /// Internal errors. Some invariants expected by the underlying system have
    /// been broken.
    ///
    /// HTTP Mapping: 500 Internal Server Error
    Internal = 13,

    /// The service is currently unavailable. This is most likely a transient
    /// condition, which can be corrected by retrying with a backoff. Note that
    /// it is not always safe to retry non-idempotent operations.
    ///
    /// HTTP Mapping: 503 Service Unavailable
    Unavailable = 14,

    /// Unrecoverable data loss or corruption.
    ///
    /// HTTP Mapping: 500 Internal Server Error
    DataLoss = 15,

    /// The request does not have valid authentication credentials for the
    /// operation.
    ///
    /// HTTP Mapping: 401 Unauthorized
    Unauthenticated = 16,
}

impl Code {
    /// The canonical name of the code, e.g. `"DEADLINE_EXCEEDED"`.
    pub fn name(&self) -> &str {
        match self {
            Code::Ok => "OK",
            Code::Cancelled => "CANCELLED",
            Code::Unknown => "UNKNOWN",
            Code::InvalidArgument => "INVALID_ARGUMENT",
            Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Code::NotFound => "NOT_FOUND",
            Code::AlreadyExists => "ALREADY_EXISTS",
            Code::PermissionDenied => "PERMISSION_DENIED",
            Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
            Code::FailedPrecondition => "FAILED_PRECONDITION",
            Code::Aborted => "ABORTED",
            Code::OutOfRange => "OUT_OF_RANGE",
            Code::Unimplemented => "UNIMPLEMENTED",
            Code::Internal => "INTERNAL",
            Code::Unavailable => "UNAVAILABLE",
            Code::DataLoss => "DATA_LOSS",
            Code::Unauthenticated => "UNAUTHENTICATED",
        }
    }
}

impl From<i32> for Code {
    fn from(value: i32) -> Self {
        match value {
            0 => Code::Ok,
            1 => Code::Cancelled,
            2 => Code::Unknown,
            3 => Code::InvalidArgument,
            4 => Code::DeadlineExceeded,
            5 => Code::NotFound,
            6 => Code::AlreadyExists,
            7 => Code::PermissionDenied,
            8 => Code::ResourceExhausted,
            9 => Code::FailedPrecondition,
            10 => Code::Aborted,
            11 => Code::OutOfRange,
            12 => Code::Unimplemented,
            13 => Code::Internal,
            14 => Code::Unavailable,
            15 => Code::DataLoss,
            16 => Code::Unauthenticated,
            _ => Code::default(),
        }
    }
}

impl From<Code> for String {
    fn from(value: Code) -> String {
        value.name().to_string()
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&str> for Code {
    type Error = String;
    fn try_from(value: &str) -> std::result::Result<Code, Self::Error> {
        match value {
            "OK" => Ok(Code::Ok),
            "CANCELLED" => Ok(Code::Cancelled),
            "UNKNOWN" => Ok(Code::Unknown),
            "INVALID_ARGUMENT" => Ok(Code::InvalidArgument),
            "DEADLINE_EXCEEDED" => Ok(Code::DeadlineExceeded),
            "NOT_FOUND" => Ok(Code::NotFound),
            "ALREADY_EXISTS" => Ok(Code::AlreadyExists),
            "PERMISSION_DENIED" => Ok(Code::PermissionDenied),
            "RESOURCE_EXHAUSTED" => Ok(Code::ResourceExhausted),
            "FAILED_PRECONDITION" => Ok(Code::FailedPrecondition),
            "ABORTED" => Ok(Code::Aborted),
            "OUT_OF_RANGE" => Ok(Code::OutOfRange),
            "UNIMPLEMENTED" => Ok(Code::Unimplemented),
            "INTERNAL" => Ok(Code::Internal),
            "UNAVAILABLE" => Ok(Code::Unavailable),
            "DATA_LOSS" => Ok(Code::DataLoss),
            "UNAUTHENTICATED" => Ok(Code::Unauthenticated),
            _ => Err(format!("unknown status code value {value}")),
        }
    }
}

impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(*self as i32)
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        i32::deserialize(deserializer).map(Code::from)
    }
}

/// The services wrap the error status in an `error` field.
#[derive(Clone, Debug, Deserialize)]
struct ErrorWrapper {
    error: WrapperStatus,
}

/// Over HTTP the services send the code twice: the HTTP status code in `code`,
/// and the canonical name in `status`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct WrapperStatus {
    message: String,
    status: Option<String>,
    details: Vec<StatusDetails>,
}

impl TryFrom<&bytes::Bytes> for Status {
    type Error = Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let wrapper = serde_json::from_slice::<ErrorWrapper>(value)
            .map(|w| w.error)
            .map_err(Error::deser)?;
        let code = match wrapper.status.as_deref().map(Code::try_from) {
            Some(Ok(code)) => code,
            Some(Err(_)) | None => Code::Unknown,
        };
        Ok(Status {
            code,
            message: wrapper.message,
            details: wrapper.details,
        })
    }
}

/// The type of details associated with [Status].
///
/// Services often return a detailed error description, which can be used to
/// better understand the root cause of the problem. Detail types not listed
/// here are preserved as [wkt::Any].
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[non_exhaustive]
#[serde(tag = "@type")]
pub enum StatusDetails {
    #[serde(rename = "type.googleapis.com/google.rpc.BadRequest")]
    BadRequest(BadRequest),
    #[serde(rename = "type.googleapis.com/google.rpc.DebugInfo")]
    DebugInfo(DebugInfo),
    #[serde(rename = "type.googleapis.com/google.rpc.ErrorInfo")]
    ErrorInfo(ErrorInfo),
    #[serde(rename = "type.googleapis.com/google.rpc.Help")]
    Help(Help),
    #[serde(rename = "type.googleapis.com/google.rpc.LocalizedMessage")]
    LocalizedMessage(LocalizedMessage),
    #[serde(rename = "type.googleapis.com/google.rpc.RetryInfo")]
    RetryInfo(RetryInfo),
    #[serde(untagged)]
    Other(wkt::Any),
}

/// Describes violations in a client request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BadRequest {
    /// Describes all violations in a client request.
    pub field_violations: Vec<FieldViolation>,
}

impl BadRequest {
    /// Sets the value of [field_violations][BadRequest::field_violations].
    pub fn set_field_violations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<FieldViolation>,
    {
        self.field_violations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A single bad request field.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldViolation {
    /// A path leading to a field in the request body.
    pub field: String,
    /// A description of why the request element is bad.
    pub description: String,
}

impl FieldViolation {
    /// Sets the value of [field][FieldViolation::field].
    pub fn set_field<T: Into<String>>(mut self, v: T) -> Self {
        self.field = v.into();
        self
    }

    /// Sets the value of [description][FieldViolation::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }
}

/// Describes additional debugging info.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DebugInfo {
    /// The stack trace entries indicating where the error occurred.
    pub stack_entries: Vec<String>,
    /// Additional debugging information provided by the server.
    pub detail: String,
}

/// Describes the cause of the error with structured details.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorInfo {
    /// The reason of the error, a constant value in `UPPER_SNAKE_CASE`.
    pub reason: String,
    /// The logical grouping to which the "reason" belongs.
    pub domain: String,
    /// Additional structured details about this error.
    pub metadata: std::collections::HashMap<String, String>,
}

impl ErrorInfo {
    /// Sets the value of [reason][ErrorInfo::reason].
    pub fn set_reason<T: Into<String>>(mut self, v: T) -> Self {
        self.reason = v.into();
        self
    }

    /// Sets the value of [domain][ErrorInfo::domain].
    pub fn set_domain<T: Into<String>>(mut self, v: T) -> Self {
        self.domain = v.into();
        self
    }
}

/// Provides links to documentation or for performing an out of band action.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Help {
    /// URL(s) pointing to additional information on handling the current error.
    pub links: Vec<Link>,
}

/// Describes a URL link.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Link {
    /// Describes what the link offers.
    pub description: String,
    /// The URL of the link.
    pub url: String,
}

/// Provides a localized error message that is safe to return to the user.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LocalizedMessage {
    /// The locale used, e.g. "en-US".
    pub locale: String,
    /// The localized error message in the above locale.
    pub message: String,
}

/// Describes when the clients can retry a failed request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RetryInfo {
    /// Clients should wait at least this long between retrying the same request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_delay: Option<wkt::Duration>,
}

impl RetryInfo {
    /// Sets the value of [retry_delay][RetryInfo::retry_delay].
    pub fn set_retry_delay<T: Into<wkt::Duration>>(mut self, v: T) -> Self {
        self.retry_delay = Some(v.into());
        self
    }
}

impl From<BadRequest> for StatusDetails {
    fn from(value: BadRequest) -> Self {
        StatusDetails::BadRequest(value)
    }
}

impl From<ErrorInfo> for StatusDetails {
    fn from(value: ErrorInfo) -> Self {
        StatusDetails::ErrorInfo(value)
    }
}

impl From<RetryInfo> for StatusDetails {
    fn from(value: RetryInfo) -> Self {
        StatusDetails::RetryInfo(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type Result = anyhow::Result<()>;

    #[test]
    fn status_basic_setters() {
        let got = Status::default()
            .set_code(Code::Unimplemented)
            .set_message("test-message");
        let want = Status {
            code: Code::Unimplemented,
            message: "test-message".into(),
            ..Default::default()
        };
        assert_eq!(got, want);

        let got = Status::default().set_code(Code::Unavailable as i32);
        assert_eq!(got.code, Code::Unavailable);
    }

    #[test]
    fn status_detail_setter() {
        let got = Status::default().set_details([
            StatusDetails::from(ErrorInfo::default().set_reason("reason")),
            StatusDetails::from(RetryInfo::default().set_retry_delay(wkt::Duration::clamp(1, 0))),
        ]);
        assert_eq!(got.details.len(), 2, "{got:?}");
    }

    #[test]
    fn serialize_status() -> Result {
        let input = Status::default()
            .set_code(Code::NotFound)
            .set_message("table not found")
            .set_details([ErrorInfo::default()
                .set_reason("NOT_FOUND")
                .set_domain("bigtableadmin.googleapis.com")]);
        let got = serde_json::to_value(&input)?;
        let want = json!({
            "code": 5,
            "message": "table not found",
            "details": [{
                "@type": "type.googleapis.com/google.rpc.ErrorInfo",
                "reason": "NOT_FOUND",
                "domain": "bigtableadmin.googleapis.com",
                "metadata": {},
            }]
        });
        assert_eq!(got, want);
        let roundtrip = serde_json::from_value::<Status>(got)?;
        assert_eq!(roundtrip, input);
        Ok(())
    }

    #[test]
    fn deserialize_unknown_detail() -> Result {
        let input = json!({
            "code": 3,
            "message": "bad",
            "details": [{"@type": "type.googleapis.com/test.Unknown", "field": "value"}]
        });
        let got = serde_json::from_value::<Status>(input)?;
        assert_eq!(got.code, Code::InvalidArgument);
        let any = match &got.details[..] {
            [StatusDetails::Other(any)] => any,
            _ => panic!("unexpected details {got:?}"),
        };
        assert_eq!(any.type_url(), Some("type.googleapis.com/test.Unknown"));
        Ok(())
    }

    #[test]
    fn try_from_bytes() -> Result {
        let payload = json!({
            "error": {
                "code": 400,
                "message": "field `parent` is required",
                "status": "INVALID_ARGUMENT",
                "details": [{
                    "@type": "type.googleapis.com/google.rpc.BadRequest",
                    "fieldViolations": [{"field": "parent", "description": "required"}]
                }]
            }
        });
        let bytes = bytes::Bytes::from(serde_json::to_vec(&payload)?);
        let got = Status::try_from(&bytes)?;
        assert_eq!(got.code, Code::InvalidArgument);
        assert_eq!(got.message, "field `parent` is required");
        let want = BadRequest::default().set_field_violations([FieldViolation::default()
            .set_field("parent")
            .set_description("required")]);
        assert_eq!(got.details, vec![StatusDetails::BadRequest(want)]);
        Ok(())
    }

    #[test]
    fn try_from_bytes_unknown_status() -> Result {
        let bytes = bytes::Bytes::from_static(br#"{"error": {"code": 418, "message": "teapot", "status": "TEAPOT"}}"#);
        let got = Status::try_from(&bytes)?;
        assert_eq!(got.code, Code::Unknown);
        assert_eq!(got.message, "teapot");
        Ok(())
    }

    #[test]
    fn try_from_bytes_not_json() {
        let bytes = bytes::Bytes::from_static(b"<html>not found</html>");
        let got = Status::try_from(&bytes);
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }

    #[test_case("OK", Code::Ok)]
    #[test_case("CANCELLED", Code::Cancelled)]
    #[test_case("UNKNOWN", Code::Unknown)]
    #[test_case("INVALID_ARGUMENT", Code::InvalidArgument)]
    #[test_case("DEADLINE_EXCEEDED", Code::DeadlineExceeded)]
    #[test_case("NOT_FOUND", Code::NotFound)]
    #[test_case("ALREADY_EXISTS", Code::AlreadyExists)]
    #[test_case("PERMISSION_DENIED", Code::PermissionDenied)]
    #[test_case("RESOURCE_EXHAUSTED", Code::ResourceExhausted)]
    #[test_case("FAILED_PRECONDITION", Code::FailedPrecondition)]
    #[test_case("ABORTED", Code::Aborted)]
    #[test_case("OUT_OF_RANGE", Code::OutOfRange)]
    #[test_case("UNIMPLEMENTED", Code::Unimplemented)]
    #[test_case("INTERNAL", Code::Internal)]
    #[test_case("UNAVAILABLE", Code::Unavailable)]
    #[test_case("DATA_LOSS", Code::DataLoss)]
    #[test_case("UNAUTHENTICATED", Code::Unauthenticated)]
    fn code_names(name: &str, want: Code) {
        let got = Code::try_from(name);
        assert_eq!(got, Ok(want));
        assert_eq!(want.name(), name);
        assert_eq!(want.to_string(), name);
        assert_eq!(Code::from(want as i32), want);
    }

    #[test]
    fn code_unknown_name() {
        let got = Code::try_from("NOT-A-CODE");
        assert!(got.is_err(), "{got:?}");
        assert_eq!(Code::from(42), Code::Unknown);
    }
}
