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


use serde::{Deserialize, Serialize};

/// This resource represents a long-running operation that is the result of a
/// network API call.
///
/// # Example
/// ```
/// # use gapic_longrunning::model::{Operation, operation};
/// let op = serde_json::from_value::<Operation>(serde_json::json!({
///     "name": "operations/123",
///     "done": true,
///     "error": {"code": 5, "message": "not found"}
/// }))?;
/// assert!(op.done);
/// assert!(matches!(op.result, Some(operation::Result::Error(_))));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "operation::OperationJson", into = "operation::OperationJson")]
#[non_exhaustive]
pub struct Operation {
    /// The server-assigned name, which is only unique within the same service
    /// that originally returns it.
    pub name: String,

    /// Service-specific metadata associated with the operation.
    ///
    /// It typically contains progress information and common metadata such as
    /// create time.
    pub metadata: Option<wkt::Any>,

    /// If the value is `false`, it means the operation is still in progress.
    /// If `true`, the operation is completed, and either `error` or `response`
    /// is available.
    pub done: bool,

    /// The operation result, which can be either an `error` or a valid
    /// `response`.
    pub result: Option<operation::Result>,

    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Operation {
    /// Sets the value of [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [metadata][Operation::metadata].
    pub fn set_metadata<T: Into<wkt::Any>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets the value of [done][Operation::done].
    pub fn set_done<T: Into<bool>>(mut self, v: T) -> Self {
        self.done = v.into();
        self
    }

    /// Sets the value of [result][Operation::result].
    pub fn set_result<T: Into<operation::Result>>(mut self, v: T) -> Self {
        self.result = Some(v.into());
        self
    }

    /// The error result, if the operation completed with an error.
    pub fn error(&self) -> Option<&gax::error::rpc::Status> {
        match &self.result {
            Some(operation::Result::Error(e)) => Some(e),
            _ => None,
        }
    }

    /// The response, if the operation completed successfully.
    pub fn response(&self) -> Option<&wkt::Any> {
        match &self.result {
            Some(operation::Result::Response(r)) => Some(r),
            _ => None,
        }
    }
}

/// Defines additional types related to [Operation].
pub mod operation {
    use super::*;

    /// The operation result, which can be either an `error` or a valid
    /// `response`.
    #[derive(Clone, Debug, PartialEq)]
    #[non_exhaustive]
    pub enum Result {
        /// The error result of the operation in case of failure or
        /// cancellation.
        Error(Box<gax::error::rpc::Status>),
        /// The normal, successful response of the operation.
        Response(Box<wkt::Any>),
    }

    impl From<gax::error::rpc::Status> for Result {
        fn from(value: gax::error::rpc::Status) -> Self {
            Self::Error(Box::new(value))
        }
    }

    impl From<wkt::Any> for Result {
        fn from(value: wkt::Any) -> Self {
            Self::Response(Box::new(value))
        }
    }

    // The JSON representation inlines the `result` oneof: at most one of
    // `error` or `response` is present.
    #[derive(Clone, Debug, Default, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    pub(crate) struct OperationJson {
        #[serde(skip_serializing_if = "String::is_empty")]
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        metadata: Option<wkt::Any>,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        done: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<gax::error::rpc::Status>,
        #[serde(skip_serializing_if = "Option::is_none")]
        response: Option<wkt::Any>,
        #[serde(flatten)]
        _unknown_fields: serde_json::Map<String, serde_json::Value>,
    }

    impl From<OperationJson> for Operation {
        fn from(value: OperationJson) -> Self {
            let result = match (value.error, value.response) {
                (Some(e), _) => Some(Result::from(e)),
                (None, Some(r)) => Some(Result::from(r)),
                (None, None) => None,
            };
            Self {
                name: value.name,
                metadata: value.metadata,
                done: value.done,
                result,
                _unknown_fields: value._unknown_fields,
            }
        }
    }

    impl From<Operation> for OperationJson {
        fn from(value: Operation) -> Self {
            let (error, response) = match value.result {
                Some(Result::Error(e)) => (Some(*e), None),
                Some(Result::Response(r)) => (None, Some(*r)),
                None => (None, None),
            };
            Self {
                name: value.name,
                metadata: value.metadata,
                done: value.done,
                error,
                response,
                _unknown_fields: value._unknown_fields,
            }
        }
    }
}

/// The request message for `Operations.GetOperation`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetOperationRequest {
    /// The name of the operation resource.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GetOperationRequest {
    /// Sets the value of [name][GetOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for `Operations.CancelOperation`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelOperationRequest {
    /// The name of the operation resource to be cancelled.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CancelOperationRequest {
    /// Sets the value of [name][CancelOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for `Operations.DeleteOperation`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteOperationRequest {
    /// The name of the operation resource to be deleted.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DeleteOperationRequest {
    /// Sets the value of [name][DeleteOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use serde_json::json;
    type Result = anyhow::Result<()>;

    #[test]
    fn in_progress() -> Result {
        let input = json!({
            "name": "operations/op-001",
            "metadata": {"@type": "type.googleapis.com/google.protobuf.Duration", "value": "10s"},
        });
        let op = serde_json::from_value::<Operation>(input.clone())?;
        assert_eq!(op.name, "operations/op-001");
        assert!(!op.done);
        assert!(op.result.is_none(), "{op:?}");
        let metadata = op.metadata.as_ref().map(|a| a.to_msg::<wkt::Duration>());
        assert!(matches!(metadata, Some(Ok(d)) if d == wkt::Duration::clamp(10, 0)));
        assert_eq!(serde_json::to_value(&op)?, input);
        Ok(())
    }

    #[test]
    fn completed_with_response() -> Result {
        let input = json!({
            "name": "operations/op-001",
            "done": true,
            "response": {"@type": "type.googleapis.com/google.protobuf.Empty"},
        });
        let op = serde_json::from_value::<Operation>(input.clone())?;
        assert!(op.done);
        assert!(op.error().is_none());
        let response = op.response().map(|a| a.to_msg::<wkt::Empty>());
        assert!(matches!(response, Some(Ok(_))), "{response:?}");
        assert_eq!(serde_json::to_value(&op)?, input);
        Ok(())
    }

    #[test]
    fn completed_with_error() -> Result {
        let input = json!({
            "name": "operations/op-001",
            "done": true,
            "error": {"code": 9, "message": "precondition failed"},
        });
        let op = serde_json::from_value::<Operation>(input)?;
        assert!(op.response().is_none());
        let want = Status::default()
            .set_code(Code::FailedPrecondition)
            .set_message("precondition failed");
        assert_eq!(op.error(), Some(&want));
        Ok(())
    }

    #[test]
    fn unknown_fields() -> Result {
        let input = json!({"name": "operations/op-001", "futureField": [1, 2]});
        let op = serde_json::from_value::<Operation>(input.clone())?;
        assert_eq!(serde_json::to_value(&op)?, input);
        Ok(())
    }

    #[test]
    fn setters() {
        let op = Operation::default()
            .set_name("operations/op-001")
            .set_done(true)
            .set_result(Status::default().set_code(Code::Aborted));
        assert_eq!(op.name, "operations/op-001");
        assert!(op.done);
        assert!(matches!(&op.result, Some(operation::Result::Error(s)) if s.code == Code::Aborted));

        let request = GetOperationRequest::default().set_name("operations/op-002");
        assert_eq!(request.name, "operations/op-002");
    }
}
