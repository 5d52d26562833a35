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
//
// Code generated by sidekick. DO NOT EDIT.

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]
#![no_implicit_prelude]
extern crate async_trait;
extern crate bytes;
extern crate gax;
extern crate gaxi;
extern crate lazy_static;
extern crate reqwest;
extern crate serde;
extern crate serde_json;
extern crate serde_with;
extern crate std;
extern crate tracing;
extern crate wkt;

/// A Firestore document.
///
/// Must not exceed 1 MiB - 4 bytes.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Document {
    /// The resource name of the document, for example
    /// `projects/{project_id}/databases/{database_id}/documents/{document_path}`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The document's fields.
    ///
    /// The map keys represent field names.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub fields: std::collections::HashMap<std::string::String, crate::model::Value>,

    /// Output only. The time at which the document was created.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub create_time: std::option::Option<wkt::Timestamp>,

    /// Output only. The time at which the document was last changed.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Document {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Document::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [fields][crate::model::Document::fields].
    pub fn set_fields<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::Value>,
    {
        use std::iter::Iterator;
        self.fields = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [create_time][crate::model::Document::create_time].
    pub fn set_create_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [create_time][crate::model::Document::create_time].
    pub fn set_or_clear_create_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_time][crate::model::Document::update_time].
    pub fn set_update_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_time][crate::model::Document::update_time].
    pub fn set_or_clear_update_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Document {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.Document"
    }
}

/// An array value.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ArrayValue {
    /// Values in the array.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub values: std::vec::Vec<crate::model::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ArrayValue {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [values][crate::model::ArrayValue::values].
    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Value>,
    {
        use std::iter::Iterator;
        self.values = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for ArrayValue {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.ArrayValue"
    }
}

/// A map value.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MapValue {
    /// The map's fields.
    ///
    /// The map keys represent field names. Field names matching the
    /// regular expression `__.*__` are reserved.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub fields: std::collections::HashMap<std::string::String, crate::model::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl MapValue {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [fields][crate::model::MapValue::fields].
    pub fn set_fields<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<crate::model::Value>,
    {
        use std::iter::Iterator;
        self.fields = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl wkt::message::Message for MapValue {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.MapValue"
    }
}

/// A set of field paths on a document.
/// Used to restrict a get or update operation on a document to a subset of its
/// fields.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DocumentMask {
    /// The list of field paths in the mask.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub field_paths: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DocumentMask {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field_paths][crate::model::DocumentMask::field_paths].
    pub fn set_field_paths<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.field_paths = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for DocumentMask {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.DocumentMask"
    }
}

/// A precondition on a document, used for conditional operations.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Precondition {
    /// When set to `true`, the target document must exist.
    /// When set to `false`, the target document must not exist.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub exists: std::option::Option<bool>,

    /// When set, the target document must exist and have been last updated at
    /// that time. Timestamp must be microsecond aligned.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Precondition {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [exists][crate::model::Precondition::exists].
    pub fn set_exists<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.exists = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [exists][crate::model::Precondition::exists].
    pub fn set_or_clear_exists<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.exists = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_time][crate::model::Precondition::update_time].
    pub fn set_update_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_time][crate::model::Precondition::update_time].
    pub fn set_or_clear_update_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Precondition {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.Precondition"
    }
}

/// Options for a transaction that can only be used to read documents.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReadOnly {
    /// Reads documents at the given time.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_time: std::option::Option<wkt::Timestamp>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ReadOnly {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [read_time][crate::model::ReadOnly::read_time].
    pub fn set_read_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_time][crate::model::ReadOnly::read_time].
    pub fn set_or_clear_read_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for ReadOnly {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.TransactionOptions.ReadOnly"
    }
}

/// Options for a transaction that can be used to read and write documents.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReadWrite {
    /// An optional transaction to retry.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub retry_transaction: ::bytes::Bytes,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ReadWrite {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [retry_transaction][crate::model::ReadWrite::retry_transaction].
    pub fn set_retry_transaction<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.retry_transaction = v.into();
        self
    }
}

impl wkt::message::Message for ReadWrite {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.TransactionOptions.ReadWrite"
    }
}

/// Options for creating a new transaction.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TransactionOptions {
    /// The transaction can only be used for read operations.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_only: std::option::Option<crate::model::ReadOnly>,

    /// The transaction can be used for both read and write operations.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_write: std::option::Option<crate::model::ReadWrite>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TransactionOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [read_only][crate::model::TransactionOptions::read_only].
    pub fn set_read_only<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ReadOnly>,
    {
        self.read_only = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_only][crate::model::TransactionOptions::read_only].
    pub fn set_or_clear_read_only<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ReadOnly>,
    {
        self.read_only = v.map(|x| x.into());
        self
    }

    /// Sets the value of [read_write][crate::model::TransactionOptions::read_write].
    pub fn set_read_write<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ReadWrite>,
    {
        self.read_write = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_write][crate::model::TransactionOptions::read_write].
    pub fn set_or_clear_read_write<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ReadWrite>,
    {
        self.read_write = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for TransactionOptions {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.TransactionOptions"
    }
}

/// The request for [Firestore.GetDocument][google.firestore.v1.Firestore.GetDocument].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetDocumentRequest {
    /// The resource name of the Document to get. In the format:
    /// `projects/{project_id}/databases/{database_id}/documents/{document_path}`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The fields to return. If not set, returns all fields.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mask: std::option::Option<crate::model::DocumentMask>,

    /// Reads the document in a transaction.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub transaction: ::bytes::Bytes,

    /// Reads the version of the document at the given time.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_time: std::option::Option<wkt::Timestamp>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetDocumentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetDocumentRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [mask][crate::model::GetDocumentRequest::mask].
    pub fn set_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mask][crate::model::GetDocumentRequest::mask].
    pub fn set_or_clear_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [transaction][crate::model::GetDocumentRequest::transaction].
    pub fn set_transaction<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.transaction = v.into();
        self
    }

    /// Sets the value of [read_time][crate::model::GetDocumentRequest::read_time].
    pub fn set_read_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_time][crate::model::GetDocumentRequest::read_time].
    pub fn set_or_clear_read_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for GetDocumentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.GetDocumentRequest"
    }
}

/// The request for [Firestore.ListDocuments][google.firestore.v1.Firestore.ListDocuments].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDocumentsRequest {
    /// The parent resource name. In the format:
    /// `projects/{project_id}/databases/{database_id}/documents` or
    /// `projects/{project_id}/databases/{database_id}/documents/{document_path}`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The collection ID, relative to `parent`, to list. For example: `chatrooms`
    /// or `messages`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub collection_id: std::string::String,

    /// The maximum number of documents to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// The `next_page_token` value returned from a previous List request, if any.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// The order to sort results by. For example: `priority desc, name`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub order_by: std::string::String,

    /// The fields to return. If not set, returns all fields.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mask: std::option::Option<crate::model::DocumentMask>,

    /// Reads documents in a transaction.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub transaction: ::bytes::Bytes,

    /// Reads documents as they were at the given time.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_time: std::option::Option<wkt::Timestamp>,

    /// If the list should show missing documents. A missing document is a
    /// document that does not exist but has sub-documents.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub show_missing: bool,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListDocumentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListDocumentsRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [collection_id][crate::model::ListDocumentsRequest::collection_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_collection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.collection_id = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListDocumentsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListDocumentsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [order_by][crate::model::ListDocumentsRequest::order_by].
    pub fn set_order_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }

    /// Sets the value of [mask][crate::model::ListDocumentsRequest::mask].
    pub fn set_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mask][crate::model::ListDocumentsRequest::mask].
    pub fn set_or_clear_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [transaction][crate::model::ListDocumentsRequest::transaction].
    pub fn set_transaction<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.transaction = v.into();
        self
    }

    /// Sets the value of [read_time][crate::model::ListDocumentsRequest::read_time].
    pub fn set_read_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_time][crate::model::ListDocumentsRequest::read_time].
    pub fn set_or_clear_read_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [show_missing][crate::model::ListDocumentsRequest::show_missing].
    pub fn set_show_missing<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.show_missing = v.into();
        self
    }
}

impl wkt::message::Message for ListDocumentsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.ListDocumentsRequest"
    }
}

/// The response for [Firestore.ListDocuments][google.firestore.v1.Firestore.ListDocuments].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDocumentsResponse {
    /// The Documents found.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub documents: std::vec::Vec<crate::model::Document>,

    /// The next page token.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListDocumentsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [documents][crate::model::ListDocumentsResponse::documents].
    pub fn set_documents<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Document>,
    {
        use std::iter::Iterator;
        self.documents = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListDocumentsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListDocumentsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.ListDocumentsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListDocumentsResponse {
    type PageItem = crate::model::Document;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.documents
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The request for [Firestore.CreateDocument][google.firestore.v1.Firestore.CreateDocument].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateDocumentRequest {
    /// The parent resource. For example:
    /// `projects/{project_id}/databases/{database_id}/documents` or
    /// `projects/{project_id}/databases/{database_id}/documents/chatrooms/{chatroom_id}`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The collection ID, relative to `parent`, to list. For example: `chatrooms`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub collection_id: std::string::String,

    /// The client-assigned document ID to use for this document.
    ///
    /// Optional. If not specified, an ID will be assigned by the service.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub document_id: std::string::String,

    /// The document to create. `name` must not be set.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub document: std::option::Option<crate::model::Document>,

    /// The fields to return. If not set, returns all fields.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mask: std::option::Option<crate::model::DocumentMask>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateDocumentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateDocumentRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [collection_id][crate::model::CreateDocumentRequest::collection_id].
    ///
    /// This is a **required** field for requests.
    pub fn set_collection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.collection_id = v.into();
        self
    }

    /// Sets the value of [document_id][crate::model::CreateDocumentRequest::document_id].
    pub fn set_document_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.document_id = v.into();
        self
    }

    /// Sets the value of [document][crate::model::CreateDocumentRequest::document].
    ///
    /// This is a **required** field for requests.
    pub fn set_document<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Document>,
    {
        self.document = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [document][crate::model::CreateDocumentRequest::document].
    pub fn set_or_clear_document<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Document>,
    {
        self.document = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mask][crate::model::CreateDocumentRequest::mask].
    pub fn set_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mask][crate::model::CreateDocumentRequest::mask].
    pub fn set_or_clear_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.mask = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateDocumentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.CreateDocumentRequest"
    }
}

/// The request for [Firestore.UpdateDocument][google.firestore.v1.Firestore.UpdateDocument].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateDocumentRequest {
    /// The updated document.
    /// Creates the document if it does not already exist.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub document: std::option::Option<crate::model::Document>,

    /// The fields to update.
    /// None of the field paths in the mask may contain a reserved name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<crate::model::DocumentMask>,

    /// The fields to return. If not set, returns all fields.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mask: std::option::Option<crate::model::DocumentMask>,

    /// An optional precondition on the document.
    /// The request will fail if this is set and not met by the target document.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub current_document: std::option::Option<crate::model::Precondition>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateDocumentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [document][crate::model::UpdateDocumentRequest::document].
    ///
    /// This is a **required** field for requests.
    pub fn set_document<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Document>,
    {
        self.document = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [document][crate::model::UpdateDocumentRequest::document].
    pub fn set_or_clear_document<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Document>,
    {
        self.document = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][crate::model::UpdateDocumentRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::UpdateDocumentRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mask][crate::model::UpdateDocumentRequest::mask].
    pub fn set_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mask][crate::model::UpdateDocumentRequest::mask].
    pub fn set_or_clear_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [current_document][crate::model::UpdateDocumentRequest::current_document].
    pub fn set_current_document<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Precondition>,
    {
        self.current_document = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [current_document][crate::model::UpdateDocumentRequest::current_document].
    pub fn set_or_clear_current_document<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Precondition>,
    {
        self.current_document = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UpdateDocumentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.UpdateDocumentRequest"
    }
}

/// The request for [Firestore.DeleteDocument][google.firestore.v1.Firestore.DeleteDocument].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteDocumentRequest {
    /// The resource name of the Document to delete. In the format:
    /// `projects/{project_id}/databases/{database_id}/documents/{document_path}`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// An optional precondition on the document.
    /// The request will fail if this is set and not met by the target document.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub current_document: std::option::Option<crate::model::Precondition>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteDocumentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteDocumentRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [current_document][crate::model::DeleteDocumentRequest::current_document].
    pub fn set_current_document<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Precondition>,
    {
        self.current_document = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [current_document][crate::model::DeleteDocumentRequest::current_document].
    pub fn set_or_clear_current_document<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Precondition>,
    {
        self.current_document = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DeleteDocumentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.DeleteDocumentRequest"
    }
}

/// The request for [Firestore.BatchGetDocuments][google.firestore.v1.Firestore.BatchGetDocuments].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchGetDocumentsRequest {
    /// The database name. In the format:
    /// `projects/{project_id}/databases/{database_id}`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub database: std::string::String,

    /// The names of the documents to retrieve. In the format:
    /// `projects/{project_id}/databases/{database_id}/documents/{document_path}`.
    /// The request will fail if any of the document is not a child resource of the
    /// given `database`. Duplicate names will be elided.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub documents: std::vec::Vec<std::string::String>,

    /// The fields to return. If not set, returns all fields.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mask: std::option::Option<crate::model::DocumentMask>,

    /// Reads documents in a transaction.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub transaction: ::bytes::Bytes,

    /// Starts a new transaction and reads the documents.
    /// Defaults to a read-only transaction.
    /// The new transaction ID will be returned as the first response in the
    /// stream.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub new_transaction: std::option::Option<crate::model::TransactionOptions>,

    /// Reads documents as they were at the given time.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_time: std::option::Option<wkt::Timestamp>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BatchGetDocumentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [database][crate::model::BatchGetDocumentsRequest::database].
    ///
    /// This is a **required** field for requests.
    pub fn set_database<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.database = v.into();
        self
    }

    /// Sets the value of [documents][crate::model::BatchGetDocumentsRequest::documents].
    pub fn set_documents<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.documents = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [mask][crate::model::BatchGetDocumentsRequest::mask].
    pub fn set_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mask][crate::model::BatchGetDocumentsRequest::mask].
    pub fn set_or_clear_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [transaction][crate::model::BatchGetDocumentsRequest::transaction].
    pub fn set_transaction<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.transaction = v.into();
        self
    }

    /// Sets the value of [new_transaction][crate::model::BatchGetDocumentsRequest::new_transaction].
    pub fn set_new_transaction<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TransactionOptions>,
    {
        self.new_transaction = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [new_transaction][crate::model::BatchGetDocumentsRequest::new_transaction].
    pub fn set_or_clear_new_transaction<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TransactionOptions>,
    {
        self.new_transaction = v.map(|x| x.into());
        self
    }

    /// Sets the value of [read_time][crate::model::BatchGetDocumentsRequest::read_time].
    pub fn set_read_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_time][crate::model::BatchGetDocumentsRequest::read_time].
    pub fn set_or_clear_read_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for BatchGetDocumentsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.BatchGetDocumentsRequest"
    }
}

/// The streamed response for
/// [Firestore.BatchGetDocuments][google.firestore.v1.Firestore.BatchGetDocuments].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchGetDocumentsResponse {
    /// A document that was requested.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub found: std::option::Option<crate::model::Document>,

    /// A document name that was requested but does not exist. In the format:
    /// `projects/{project_id}/databases/{database_id}/documents/{document_path}`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub missing: std::string::String,

    /// The transaction that was started as part of this request.
    /// Will only be set in the first response, and only if
    /// [BatchGetDocumentsRequest.new_transaction][google.firestore.v1.BatchGetDocumentsRequest.new_transaction]
    /// was set in the request.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub transaction: ::bytes::Bytes,

    /// The time at which the document was read.
    /// This may be monotically increasing, in this case the previous documents in
    /// the result stream are guaranteed not to have changed between their
    /// read_time and this one.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_time: std::option::Option<wkt::Timestamp>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BatchGetDocumentsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [found][crate::model::BatchGetDocumentsResponse::found].
    pub fn set_found<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Document>,
    {
        self.found = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [found][crate::model::BatchGetDocumentsResponse::found].
    pub fn set_or_clear_found<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Document>,
    {
        self.found = v.map(|x| x.into());
        self
    }

    /// Sets the value of [missing][crate::model::BatchGetDocumentsResponse::missing].
    pub fn set_missing<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.missing = v.into();
        self
    }

    /// Sets the value of [transaction][crate::model::BatchGetDocumentsResponse::transaction].
    pub fn set_transaction<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.transaction = v.into();
        self
    }

    /// Sets the value of [read_time][crate::model::BatchGetDocumentsResponse::read_time].
    pub fn set_read_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_time][crate::model::BatchGetDocumentsResponse::read_time].
    pub fn set_or_clear_read_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for BatchGetDocumentsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.BatchGetDocumentsResponse"
    }
}

/// The request for [Firestore.BeginTransaction][google.firestore.v1.Firestore.BeginTransaction].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BeginTransactionRequest {
    /// The database name. In the format:
    /// `projects/{project_id}/databases/{database_id}`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub database: std::string::String,

    /// The options for the transaction.
    /// Defaults to a read-write transaction.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub options: std::option::Option<crate::model::TransactionOptions>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BeginTransactionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [database][crate::model::BeginTransactionRequest::database].
    ///
    /// This is a **required** field for requests.
    pub fn set_database<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.database = v.into();
        self
    }

    /// Sets the value of [options][crate::model::BeginTransactionRequest::options].
    pub fn set_options<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TransactionOptions>,
    {
        self.options = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [options][crate::model::BeginTransactionRequest::options].
    pub fn set_or_clear_options<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TransactionOptions>,
    {
        self.options = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for BeginTransactionRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.BeginTransactionRequest"
    }
}

/// The response for
/// [Firestore.BeginTransaction][google.firestore.v1.Firestore.BeginTransaction].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BeginTransactionResponse {
    /// The transaction that was started.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub transaction: ::bytes::Bytes,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BeginTransactionResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [transaction][crate::model::BeginTransactionResponse::transaction].
    pub fn set_transaction<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.transaction = v.into();
        self
    }
}

impl wkt::message::Message for BeginTransactionResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.BeginTransactionResponse"
    }
}

/// A transformation of a field of the document.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldTransform {
    /// The path of the field.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub field_path: std::string::String,

    /// Sets the field to the given server value.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub set_to_server_value: crate::model::ServerValue,

    /// Adds the given value to the field's current value.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub increment: std::option::Option<crate::model::Value>,

    /// Sets the field to the maximum of its current value and the given value.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub maximum: std::option::Option<crate::model::Value>,

    /// Sets the field to the minimum of its current value and the given value.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub minimum: std::option::Option<crate::model::Value>,

    /// Append the given elements in order if they are not already present in
    /// the current field value.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub append_missing_elements: std::option::Option<crate::model::ArrayValue>,

    /// Remove all of the given elements from the array in the field.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub remove_all_from_array: std::option::Option<crate::model::ArrayValue>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl FieldTransform {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field_path][crate::model::FieldTransform::field_path].
    pub fn set_field_path<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_path = v.into();
        self
    }

    /// Sets the value of [set_to_server_value][crate::model::FieldTransform::set_to_server_value].
    pub fn set_set_to_server_value<T: std::convert::Into<crate::model::ServerValue>>(mut self, v: T) -> Self {
        self.set_to_server_value = v.into();
        self
    }

    /// Sets the value of [increment][crate::model::FieldTransform::increment].
    pub fn set_increment<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Value>,
    {
        self.increment = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [increment][crate::model::FieldTransform::increment].
    pub fn set_or_clear_increment<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Value>,
    {
        self.increment = v.map(|x| x.into());
        self
    }

    /// Sets the value of [maximum][crate::model::FieldTransform::maximum].
    pub fn set_maximum<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Value>,
    {
        self.maximum = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [maximum][crate::model::FieldTransform::maximum].
    pub fn set_or_clear_maximum<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Value>,
    {
        self.maximum = v.map(|x| x.into());
        self
    }

    /// Sets the value of [minimum][crate::model::FieldTransform::minimum].
    pub fn set_minimum<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Value>,
    {
        self.minimum = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [minimum][crate::model::FieldTransform::minimum].
    pub fn set_or_clear_minimum<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Value>,
    {
        self.minimum = v.map(|x| x.into());
        self
    }

    /// Sets the value of [append_missing_elements][crate::model::FieldTransform::append_missing_elements].
    pub fn set_append_missing_elements<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ArrayValue>,
    {
        self.append_missing_elements = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [append_missing_elements][crate::model::FieldTransform::append_missing_elements].
    pub fn set_or_clear_append_missing_elements<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ArrayValue>,
    {
        self.append_missing_elements = v.map(|x| x.into());
        self
    }

    /// Sets the value of [remove_all_from_array][crate::model::FieldTransform::remove_all_from_array].
    pub fn set_remove_all_from_array<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ArrayValue>,
    {
        self.remove_all_from_array = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [remove_all_from_array][crate::model::FieldTransform::remove_all_from_array].
    pub fn set_or_clear_remove_all_from_array<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ArrayValue>,
    {
        self.remove_all_from_array = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for FieldTransform {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.DocumentTransform.FieldTransform"
    }
}

/// A transformation of a document.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DocumentTransform {
    /// The name of the document to transform.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub document: std::string::String,

    /// The list of transformations to apply to the fields of the document, in
    /// order.
    /// This must not be empty.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub field_transforms: std::vec::Vec<crate::model::FieldTransform>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DocumentTransform {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [document][crate::model::DocumentTransform::document].
    pub fn set_document<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.document = v.into();
        self
    }

    /// Sets the value of [field_transforms][crate::model::DocumentTransform::field_transforms].
    pub fn set_field_transforms<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::FieldTransform>,
    {
        use std::iter::Iterator;
        self.field_transforms = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for DocumentTransform {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.DocumentTransform"
    }
}

/// A write on a document.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Write {
    /// A document to write.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update: std::option::Option<crate::model::Document>,

    /// A document name to delete. In the format:
    /// `projects/{project_id}/databases/{database_id}/documents/{document_path}`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub delete: std::string::String,

    /// Applies a transformation to a document.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub transform: std::option::Option<crate::model::DocumentTransform>,

    /// The fields to update in this write.
    ///
    /// This field can be set only when the operation is `update`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<crate::model::DocumentMask>,

    /// The transforms to perform after update.
    ///
    /// This field can be set only when the operation is `update`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub update_transforms: std::vec::Vec<crate::model::FieldTransform>,

    /// An optional precondition on the document.
    ///
    /// The write will fail if this is set and not met by the target document.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub current_document: std::option::Option<crate::model::Precondition>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Write {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [update][crate::model::Write::update].
    pub fn set_update<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Document>,
    {
        self.update = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update][crate::model::Write::update].
    pub fn set_or_clear_update<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Document>,
    {
        self.update = v.map(|x| x.into());
        self
    }

    /// Sets the value of [delete][crate::model::Write::delete].
    pub fn set_delete<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.delete = v.into();
        self
    }

    /// Sets the value of [transform][crate::model::Write::transform].
    pub fn set_transform<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DocumentTransform>,
    {
        self.transform = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [transform][crate::model::Write::transform].
    pub fn set_or_clear_transform<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DocumentTransform>,
    {
        self.transform = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][crate::model::Write::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::Write::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DocumentMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_transforms][crate::model::Write::update_transforms].
    pub fn set_update_transforms<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::FieldTransform>,
    {
        use std::iter::Iterator;
        self.update_transforms = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [current_document][crate::model::Write::current_document].
    pub fn set_current_document<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Precondition>,
    {
        self.current_document = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [current_document][crate::model::Write::current_document].
    pub fn set_or_clear_current_document<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Precondition>,
    {
        self.current_document = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Write {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.Write"
    }
}

/// The result of applying a write.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WriteResult {
    /// The last update time of the document after applying the write. Not set
    /// after a `delete`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_time: std::option::Option<wkt::Timestamp>,

    /// The results of applying each
    /// [DocumentTransform.FieldTransform][google.firestore.v1.DocumentTransform.FieldTransform],
    /// in the same order.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub transform_results: std::vec::Vec<crate::model::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl WriteResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [update_time][crate::model::WriteResult::update_time].
    pub fn set_update_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_time][crate::model::WriteResult::update_time].
    pub fn set_or_clear_update_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.update_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [transform_results][crate::model::WriteResult::transform_results].
    pub fn set_transform_results<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Value>,
    {
        use std::iter::Iterator;
        self.transform_results = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for WriteResult {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.WriteResult"
    }
}

/// The request for [Firestore.Commit][google.firestore.v1.Firestore.Commit].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CommitRequest {
    /// The database name. In the format:
    /// `projects/{project_id}/databases/{database_id}`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub database: std::string::String,

    /// The writes to apply.
    ///
    /// Always executed atomically and in order.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub writes: std::vec::Vec<crate::model::Write>,

    /// If set, applies all writes in this transaction, and commits it.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub transaction: ::bytes::Bytes,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CommitRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [database][crate::model::CommitRequest::database].
    ///
    /// This is a **required** field for requests.
    pub fn set_database<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.database = v.into();
        self
    }

    /// Sets the value of [writes][crate::model::CommitRequest::writes].
    pub fn set_writes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Write>,
    {
        use std::iter::Iterator;
        self.writes = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [transaction][crate::model::CommitRequest::transaction].
    pub fn set_transaction<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.transaction = v.into();
        self
    }
}

impl wkt::message::Message for CommitRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.CommitRequest"
    }
}

/// The response for [Firestore.Commit][google.firestore.v1.Firestore.Commit].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CommitResponse {
    /// The result of applying the writes.
    ///
    /// This i-th write result corresponds to the i-th write in the
    /// request.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub write_results: std::vec::Vec<crate::model::WriteResult>,

    /// The time at which the commit occurred. Any read with an equal or greater
    /// `read_time` is guaranteed to see the effects of the commit.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub commit_time: std::option::Option<wkt::Timestamp>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CommitResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [write_results][crate::model::CommitResponse::write_results].
    pub fn set_write_results<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::WriteResult>,
    {
        use std::iter::Iterator;
        self.write_results = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [commit_time][crate::model::CommitResponse::commit_time].
    pub fn set_commit_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.commit_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [commit_time][crate::model::CommitResponse::commit_time].
    pub fn set_or_clear_commit_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.commit_time = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CommitResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.CommitResponse"
    }
}

/// The request for [Firestore.Rollback][google.firestore.v1.Firestore.Rollback].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RollbackRequest {
    /// The database name. In the format:
    /// `projects/{project_id}/databases/{database_id}`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub database: std::string::String,

    /// The transaction to roll back.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub transaction: ::bytes::Bytes,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RollbackRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [database][crate::model::RollbackRequest::database].
    ///
    /// This is a **required** field for requests.
    pub fn set_database<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.database = v.into();
        self
    }

    /// Sets the value of [transaction][crate::model::RollbackRequest::transaction].
    ///
    /// This is a **required** field for requests.
    pub fn set_transaction<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.transaction = v.into();
        self
    }
}

impl wkt::message::Message for RollbackRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.RollbackRequest"
    }
}

/// A reference to a field, such as `max(messages.time) as max_time`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldReference {
    /// The relative path of the document being referenced.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub field_path: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl FieldReference {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field_path][crate::model::FieldReference::field_path].
    pub fn set_field_path<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_path = v.into();
        self
    }
}

impl wkt::message::Message for FieldReference {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.StructuredQuery.FieldReference"
    }
}

/// The projection of document's fields to return.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Projection {
    /// The fields to return.
    ///
    /// If empty, all fields are returned. To only return the name
    /// of the document, use `['__name__']`.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub fields: std::vec::Vec<crate::model::FieldReference>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Projection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [fields][crate::model::Projection::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::FieldReference>,
    {
        use std::iter::Iterator;
        self.fields = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for Projection {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.StructuredQuery.Projection"
    }
}

/// A selection of a collection, such as `messages as m1`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CollectionSelector {
    /// The collection ID.
    /// When set, selects only collections with this ID.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub collection_id: std::string::String,

    /// When false, selects only collections that are immediate children of
    /// the `parent` specified in the containing `RunQueryRequest`.
    /// When true, selects all descendant collections.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub all_descendants: bool,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CollectionSelector {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [collection_id][crate::model::CollectionSelector::collection_id].
    pub fn set_collection_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.collection_id = v.into();
        self
    }

    /// Sets the value of [all_descendants][crate::model::CollectionSelector::all_descendants].
    pub fn set_all_descendants<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.all_descendants = v.into();
        self
    }
}

impl wkt::message::Message for CollectionSelector {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.StructuredQuery.CollectionSelector"
    }
}

/// A filter.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Filter {
    /// A composite filter.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub composite_filter: std::option::Option<crate::model::CompositeFilter>,

    /// A filter on a document field.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field_filter: std::option::Option<crate::model::FieldFilter>,

    /// A filter that takes exactly one argument.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub unary_filter: std::option::Option<crate::model::UnaryFilter>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Filter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [composite_filter][crate::model::Filter::composite_filter].
    pub fn set_composite_filter<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CompositeFilter>,
    {
        self.composite_filter = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [composite_filter][crate::model::Filter::composite_filter].
    pub fn set_or_clear_composite_filter<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CompositeFilter>,
    {
        self.composite_filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [field_filter][crate::model::Filter::field_filter].
    pub fn set_field_filter<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::FieldFilter>,
    {
        self.field_filter = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [field_filter][crate::model::Filter::field_filter].
    pub fn set_or_clear_field_filter<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::FieldFilter>,
    {
        self.field_filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unary_filter][crate::model::Filter::unary_filter].
    pub fn set_unary_filter<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UnaryFilter>,
    {
        self.unary_filter = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [unary_filter][crate::model::Filter::unary_filter].
    pub fn set_or_clear_unary_filter<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::UnaryFilter>,
    {
        self.unary_filter = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Filter {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.StructuredQuery.Filter"
    }
}

/// A filter that merges multiple other filters using the given operator.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CompositeFilter {
    /// The operator for combining multiple filters.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub op: crate::model::CompositeOperator,

    /// The list of filters to combine.
    /// Must contain at least one filter.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub filters: std::vec::Vec<crate::model::Filter>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CompositeFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [op][crate::model::CompositeFilter::op].
    pub fn set_op<T: std::convert::Into<crate::model::CompositeOperator>>(mut self, v: T) -> Self {
        self.op = v.into();
        self
    }

    /// Sets the value of [filters][crate::model::CompositeFilter::filters].
    pub fn set_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Filter>,
    {
        use std::iter::Iterator;
        self.filters = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for CompositeFilter {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.StructuredQuery.CompositeFilter"
    }
}

/// A filter on a specific field.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldFilter {
    /// The field to filter by.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field: std::option::Option<crate::model::FieldReference>,

    /// The operator to filter by.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub op: crate::model::FieldOperator,

    /// The value to compare to.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<crate::model::Value>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl FieldFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field][crate::model::FieldFilter::field].
    pub fn set_field<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::FieldReference>,
    {
        self.field = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [field][crate::model::FieldFilter::field].
    pub fn set_or_clear_field<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::FieldReference>,
    {
        self.field = v.map(|x| x.into());
        self
    }

    /// Sets the value of [op][crate::model::FieldFilter::op].
    pub fn set_op<T: std::convert::Into<crate::model::FieldOperator>>(mut self, v: T) -> Self {
        self.op = v.into();
        self
    }

    /// Sets the value of [value][crate::model::FieldFilter::value].
    pub fn set_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Value>,
    {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [value][crate::model::FieldFilter::value].
    pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Value>,
    {
        self.value = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for FieldFilter {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.StructuredQuery.FieldFilter"
    }
}

/// A filter with a single operand.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UnaryFilter {
    /// The unary operator to apply.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub op: crate::model::UnaryOperator,

    /// The field to which to apply the operator.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field: std::option::Option<crate::model::FieldReference>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UnaryFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [op][crate::model::UnaryFilter::op].
    pub fn set_op<T: std::convert::Into<crate::model::UnaryOperator>>(mut self, v: T) -> Self {
        self.op = v.into();
        self
    }

    /// Sets the value of [field][crate::model::UnaryFilter::field].
    pub fn set_field<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::FieldReference>,
    {
        self.field = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [field][crate::model::UnaryFilter::field].
    pub fn set_or_clear_field<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::FieldReference>,
    {
        self.field = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UnaryFilter {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.StructuredQuery.UnaryFilter"
    }
}

/// An order on a field.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Order {
    /// The field to order by.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub field: std::option::Option<crate::model::FieldReference>,

    /// The direction to order by. Defaults to `ASCENDING`.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub direction: crate::model::Direction,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Order {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [field][crate::model::Order::field].
    pub fn set_field<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::FieldReference>,
    {
        self.field = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [field][crate::model::Order::field].
    pub fn set_or_clear_field<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::FieldReference>,
    {
        self.field = v.map(|x| x.into());
        self
    }

    /// Sets the value of [direction][crate::model::Order::direction].
    pub fn set_direction<T: std::convert::Into<crate::model::Direction>>(mut self, v: T) -> Self {
        self.direction = v.into();
        self
    }
}

impl wkt::message::Message for Order {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.StructuredQuery.Order"
    }
}

/// A position in a query result set.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Cursor {
    /// The values that represent a position, in the order they appear in
    /// the order by clause of a query.
    ///
    /// Can contain fewer values than specified in the order by clause.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub values: std::vec::Vec<crate::model::Value>,

    /// If the position is just before or just after the given values, relative
    /// to the sort order defined by the query.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub before: bool,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Cursor {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [values][crate::model::Cursor::values].
    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Value>,
    {
        use std::iter::Iterator;
        self.values = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [before][crate::model::Cursor::before].
    pub fn set_before<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.before = v.into();
        self
    }
}

impl wkt::message::Message for Cursor {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.Cursor"
    }
}

/// A Firestore query.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StructuredQuery {
    /// The projection to return.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub select: std::option::Option<crate::model::Projection>,

    /// The collections to query.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub from: std::vec::Vec<crate::model::CollectionSelector>,

    /// The filter to apply.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub r#where: std::option::Option<crate::model::Filter>,

    /// The order to apply to the query results.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub order_by: std::vec::Vec<crate::model::Order>,

    /// A starting point for the query results.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_at: std::option::Option<crate::model::Cursor>,

    /// A end point for the query results.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_at: std::option::Option<crate::model::Cursor>,

    /// The number of results to skip.
    ///
    /// Applies before limit, but after all other constraints. Must be >= 0 if
    /// specified.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub offset: i32,

    /// The maximum number of results to return.
    ///
    /// Applies after all other constraints.
    /// Must be >= 0 if specified.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub limit: std::option::Option<i32>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl StructuredQuery {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [select][crate::model::StructuredQuery::select].
    pub fn set_select<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Projection>,
    {
        self.select = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [select][crate::model::StructuredQuery::select].
    pub fn set_or_clear_select<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Projection>,
    {
        self.select = v.map(|x| x.into());
        self
    }

    /// Sets the value of [from][crate::model::StructuredQuery::from].
    pub fn set_from<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::CollectionSelector>,
    {
        use std::iter::Iterator;
        self.from = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [where][crate::model::StructuredQuery::where].
    pub fn set_where<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Filter>,
    {
        self.r#where = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [where][crate::model::StructuredQuery::where].
    pub fn set_or_clear_where<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Filter>,
    {
        self.r#where = v.map(|x| x.into());
        self
    }

    /// Sets the value of [order_by][crate::model::StructuredQuery::order_by].
    pub fn set_order_by<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Order>,
    {
        use std::iter::Iterator;
        self.order_by = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [start_at][crate::model::StructuredQuery::start_at].
    pub fn set_start_at<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Cursor>,
    {
        self.start_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start_at][crate::model::StructuredQuery::start_at].
    pub fn set_or_clear_start_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Cursor>,
    {
        self.start_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [end_at][crate::model::StructuredQuery::end_at].
    pub fn set_end_at<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Cursor>,
    {
        self.end_at = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [end_at][crate::model::StructuredQuery::end_at].
    pub fn set_or_clear_end_at<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Cursor>,
    {
        self.end_at = v.map(|x| x.into());
        self
    }

    /// Sets the value of [offset][crate::model::StructuredQuery::offset].
    pub fn set_offset<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.offset = v.into();
        self
    }

    /// Sets the value of [limit][crate::model::StructuredQuery::limit].
    pub fn set_limit<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [limit][crate::model::StructuredQuery::limit].
    pub fn set_or_clear_limit<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i32>,
    {
        self.limit = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for StructuredQuery {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.StructuredQuery"
    }
}

/// The request for [Firestore.RunQuery][google.firestore.v1.Firestore.RunQuery].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunQueryRequest {
    /// The parent resource name. In the format:
    /// `projects/{project_id}/databases/{database_id}/documents` or
    /// `projects/{project_id}/databases/{database_id}/documents/{document_path}`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// A structured query.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub structured_query: std::option::Option<crate::model::StructuredQuery>,

    /// Run the query within an already active transaction.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub transaction: ::bytes::Bytes,

    /// Starts a new transaction and reads the documents.
    /// Defaults to a read-only transaction.
    /// The new transaction ID will be returned as the first response in the
    /// stream.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub new_transaction: std::option::Option<crate::model::TransactionOptions>,

    /// Reads documents as they were at the given time.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_time: std::option::Option<wkt::Timestamp>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RunQueryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::RunQueryRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [structured_query][crate::model::RunQueryRequest::structured_query].
    pub fn set_structured_query<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StructuredQuery>,
    {
        self.structured_query = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [structured_query][crate::model::RunQueryRequest::structured_query].
    pub fn set_or_clear_structured_query<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::StructuredQuery>,
    {
        self.structured_query = v.map(|x| x.into());
        self
    }

    /// Sets the value of [transaction][crate::model::RunQueryRequest::transaction].
    pub fn set_transaction<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.transaction = v.into();
        self
    }

    /// Sets the value of [new_transaction][crate::model::RunQueryRequest::new_transaction].
    pub fn set_new_transaction<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TransactionOptions>,
    {
        self.new_transaction = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [new_transaction][crate::model::RunQueryRequest::new_transaction].
    pub fn set_or_clear_new_transaction<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TransactionOptions>,
    {
        self.new_transaction = v.map(|x| x.into());
        self
    }

    /// Sets the value of [read_time][crate::model::RunQueryRequest::read_time].
    pub fn set_read_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_time][crate::model::RunQueryRequest::read_time].
    pub fn set_or_clear_read_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for RunQueryRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.RunQueryRequest"
    }
}

/// The response for [Firestore.RunQuery][google.firestore.v1.Firestore.RunQuery].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunQueryResponse {
    /// The transaction that was started as part of this request.
    /// Can only be set in the first response, and only if
    /// [RunQueryRequest.new_transaction][google.firestore.v1.RunQueryRequest.new_transaction]
    /// was set in the request.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub transaction: ::bytes::Bytes,

    /// A query result.
    /// Not set when reporting partial progress.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub document: std::option::Option<crate::model::Document>,

    /// The time at which the document was read.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub read_time: std::option::Option<wkt::Timestamp>,

    /// The number of results that have been skipped due to an offset between
    /// the last response and the current response.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub skipped_results: i32,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RunQueryResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [transaction][crate::model::RunQueryResponse::transaction].
    pub fn set_transaction<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.transaction = v.into();
        self
    }

    /// Sets the value of [document][crate::model::RunQueryResponse::document].
    pub fn set_document<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Document>,
    {
        self.document = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [document][crate::model::RunQueryResponse::document].
    pub fn set_or_clear_document<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Document>,
    {
        self.document = v.map(|x| x.into());
        self
    }

    /// Sets the value of [read_time][crate::model::RunQueryResponse::read_time].
    pub fn set_read_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [read_time][crate::model::RunQueryResponse::read_time].
    pub fn set_or_clear_read_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.read_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [skipped_results][crate::model::RunQueryResponse::skipped_results].
    pub fn set_skipped_results<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.skipped_results = v.into();
        self
    }
}

impl wkt::message::Message for RunQueryResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.RunQueryResponse"
    }
}

/// The request for [Firestore.PartitionQuery][google.firestore.v1.Firestore.PartitionQuery].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PartitionQueryRequest {
    /// The parent resource name. In the format:
    /// `projects/{project_id}/databases/{database_id}/documents`.
    /// Document resource names are not supported; only database resource names
    /// can be specified.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// A structured query.
    /// Query must specify collection with all descendants and be ordered by name
    /// ascending. Other filters, order bys, limits, offsets, and start/end
    /// cursors are not supported.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub structured_query: std::option::Option<crate::model::StructuredQuery>,

    /// The desired maximum number of partition points.
    /// The partitions may be returned across multiple pages of results.
    /// The number must be positive. The actual number of partitions
    /// returned may be fewer.
    #[serde_as(as = "serde_with::PickFirst<(serde_with::DisplayFromStr, _)>")]
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub partition_count: i64,

    /// The `next_page_token` value returned from a previous call to
    /// PartitionQuery that may be used to get an additional set of results.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// The maximum number of partitions to return in this call, subject to
    /// `partition_count`.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl PartitionQueryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::PartitionQueryRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [structured_query][crate::model::PartitionQueryRequest::structured_query].
    pub fn set_structured_query<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::StructuredQuery>,
    {
        self.structured_query = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [structured_query][crate::model::PartitionQueryRequest::structured_query].
    pub fn set_or_clear_structured_query<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::StructuredQuery>,
    {
        self.structured_query = v.map(|x| x.into());
        self
    }

    /// Sets the value of [partition_count][crate::model::PartitionQueryRequest::partition_count].
    pub fn set_partition_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.partition_count = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::PartitionQueryRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::PartitionQueryRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }
}

impl wkt::message::Message for PartitionQueryRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.PartitionQueryRequest"
    }
}

/// The response for [Firestore.PartitionQuery][google.firestore.v1.Firestore.PartitionQuery].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PartitionQueryResponse {
    /// Partition results.
    /// Each partition is a split point that can be used by RunQuery as a starting
    /// or end point for the query results.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub partitions: std::vec::Vec<crate::model::Cursor>,

    /// A page token that may be used to request an additional set of results, up
    /// to the number specified by `partition_count` in the PartitionQuery request.
    /// If blank, there are no more results.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl PartitionQueryResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [partitions][crate::model::PartitionQueryResponse::partitions].
    pub fn set_partitions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Cursor>,
    {
        use std::iter::Iterator;
        self.partitions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::PartitionQueryResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for PartitionQueryResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.PartitionQueryResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for PartitionQueryResponse {
    type PageItem = crate::model::Cursor;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.partitions
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The request for [Firestore.ListCollectionIds][google.firestore.v1.Firestore.ListCollectionIds].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCollectionIdsRequest {
    /// The parent document. In the format:
    /// `projects/{project_id}/databases/{database_id}/documents/{document_path}`.
    /// For example:
    /// `projects/my-project/databases/my-database/documents/chatrooms/my-chatroom`
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// The maximum number of results to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// A page token. Must be a value from
    /// [ListCollectionIdsResponse][google.firestore.v1.ListCollectionIdsResponse].
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListCollectionIdsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListCollectionIdsRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListCollectionIdsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListCollectionIdsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListCollectionIdsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.ListCollectionIdsRequest"
    }
}

/// The response from [Firestore.ListCollectionIds][google.firestore.v1.Firestore.ListCollectionIds].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListCollectionIdsResponse {
    /// The collection ids.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub collection_ids: std::vec::Vec<std::string::String>,

    /// A page token that may be used to continue the list.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListCollectionIdsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [collection_ids][crate::model::ListCollectionIdsResponse::collection_ids].
    pub fn set_collection_ids<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.collection_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListCollectionIdsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListCollectionIdsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.ListCollectionIdsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListCollectionIdsResponse {
    type PageItem = std::string::String;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.collection_ids
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The request for [Firestore.BatchWrite][google.firestore.v1.Firestore.BatchWrite].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchWriteRequest {
    /// The database name. In the format:
    /// `projects/{project_id}/databases/{database_id}`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub database: std::string::String,

    /// The writes to apply.
    ///
    /// Method does not apply writes atomically and does not guarantee ordering.
    /// Each write succeeds or fails independently. You cannot write to the same
    /// document more than once per request.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub writes: std::vec::Vec<crate::model::Write>,

    /// Labels associated with this batch write.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BatchWriteRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [database][crate::model::BatchWriteRequest::database].
    ///
    /// This is a **required** field for requests.
    pub fn set_database<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.database = v.into();
        self
    }

    /// Sets the value of [writes][crate::model::BatchWriteRequest::writes].
    pub fn set_writes<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Write>,
    {
        use std::iter::Iterator;
        self.writes = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [labels][crate::model::BatchWriteRequest::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

impl wkt::message::Message for BatchWriteRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.BatchWriteRequest"
    }
}

/// The response from [Firestore.BatchWrite][google.firestore.v1.Firestore.BatchWrite].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchWriteResponse {
    /// The result of applying the writes.
    ///
    /// This i-th write result corresponds to the i-th write in the
    /// request.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub write_results: std::vec::Vec<crate::model::WriteResult>,

    /// The status of applying the writes.
    ///
    /// This i-th write status corresponds to the i-th write in the
    /// request.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub status: std::vec::Vec<gax::error::rpc::Status>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BatchWriteResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [write_results][crate::model::BatchWriteResponse::write_results].
    pub fn set_write_results<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::WriteResult>,
    {
        use std::iter::Iterator;
        self.write_results = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [status][crate::model::BatchWriteResponse::status].
    pub fn set_status<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<gax::error::rpc::Status>,
    {
        use std::iter::Iterator;
        self.status = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for BatchWriteResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.BatchWriteResponse"
    }
}

/// A value that is calculated by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum ServerValue {
    /// Unspecified. This value must not be used.
    #[default]
    #[serde(rename = "SERVER_VALUE_UNSPECIFIED")]
    ServerValueUnspecified,
    /// The time at which the server processed the request, with millisecond
    /// precision. If used on multiple fields (same or different documents) in
    /// a transaction, all the fields will get the same server timestamp.
    #[serde(rename = "REQUEST_TIME")]
    RequestTime,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// A composite filter operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum CompositeOperator {
    /// Unspecified. This value must not be used.
    #[default]
    #[serde(rename = "OPERATOR_UNSPECIFIED")]
    OperatorUnspecified,
    /// Documents are required to satisfy all of the combined filters.
    #[serde(rename = "AND")]
    And,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// A field filter operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum FieldOperator {
    /// Unspecified. This value must not be used.
    #[default]
    #[serde(rename = "OPERATOR_UNSPECIFIED")]
    OperatorUnspecified,
    /// The given `field` is less than the given `value`.
    #[serde(rename = "LESS_THAN")]
    LessThan,
    /// The given `field` is less than or equal to the given `value`.
    #[serde(rename = "LESS_THAN_OR_EQUAL")]
    LessThanOrEqual,
    /// The given `field` is greater than the given `value`.
    #[serde(rename = "GREATER_THAN")]
    GreaterThan,
    /// The given `field` is greater than or equal to the given `value`.
    #[serde(rename = "GREATER_THAN_OR_EQUAL")]
    GreaterThanOrEqual,
    /// The given `field` is equal to the given `value`.
    #[serde(rename = "EQUAL")]
    Equal,
    /// The given `field` is not equal to the given `value`.
    #[serde(rename = "NOT_EQUAL")]
    NotEqual,
    /// The given `field` is an array that contains the given `value`.
    #[serde(rename = "ARRAY_CONTAINS")]
    ArrayContains,
    /// The given `field` is equal to at least one value in the given array.
    #[serde(rename = "IN")]
    In,
    /// The given `field` is an array that contains any of the values in the
    /// given array.
    #[serde(rename = "ARRAY_CONTAINS_ANY")]
    ArrayContainsAny,
    /// The value of the `field` is not in the given array.
    #[serde(rename = "NOT_IN")]
    NotIn,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// A unary operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum UnaryOperator {
    /// Unspecified. This value must not be used.
    #[default]
    #[serde(rename = "OPERATOR_UNSPECIFIED")]
    OperatorUnspecified,
    /// The given `field` is equal to `NaN`.
    #[serde(rename = "IS_NAN")]
    IsNan,
    /// The given `field` is equal to `NULL`.
    #[serde(rename = "IS_NULL")]
    IsNull,
    /// The given `field` is not equal to `NaN`.
    #[serde(rename = "IS_NOT_NAN")]
    IsNotNan,
    /// The given `field` is not equal to `NULL`.
    #[serde(rename = "IS_NOT_NULL")]
    IsNotNull,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// A sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum Direction {
    /// Unspecified.
    #[default]
    #[serde(rename = "DIRECTION_UNSPECIFIED")]
    DirectionUnspecified,
    /// Ascending.
    #[serde(rename = "ASCENDING")]
    Ascending,
    /// Descending.
    #[serde(rename = "DESCENDING")]
    Descending,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// A message that can hold any of the supported value types.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Value {
    /// Must have a value set.
    #[serde(flatten, skip_serializing_if = "std::option::Option::is_none")]
    pub value_type: std::option::Option<crate::model::value::ValueType>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Value {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [value_type][crate::model::Value::value_type].
    ///
    /// Note that all the setters affecting `value_type` are mutually
    /// exclusive.
    pub fn set_value_type<T: std::convert::Into<std::option::Option<crate::model::value::ValueType>>>(mut self, v: T) -> Self {
        self.value_type = v.into();
        self
    }

    /// Sets `value_type` to hold a `null_value`.
    pub fn set_null_value(mut self) -> Self {
        self.value_type = std::option::Option::Some(crate::model::value::ValueType::NullValue(crate::model::NullValue));
        self
    }

    /// Sets `value_type` to hold a `boolean_value`.
    pub fn set_boolean_value<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.value_type = std::option::Option::Some(crate::model::value::ValueType::BooleanValue(v.into()));
        self
    }

    /// Sets `value_type` to hold an `integer_value`.
    pub fn set_integer_value<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.value_type = std::option::Option::Some(crate::model::value::ValueType::IntegerValue(v.into()));
        self
    }

    /// Sets `value_type` to hold a `double_value`.
    pub fn set_double_value<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.value_type = std::option::Option::Some(crate::model::value::ValueType::DoubleValue(v.into()));
        self
    }

    /// Sets `value_type` to hold a `timestamp_value`.
    pub fn set_timestamp_value<T: std::convert::Into<std::boxed::Box<wkt::Timestamp>>>(mut self, v: T) -> Self {
        self.value_type = std::option::Option::Some(crate::model::value::ValueType::TimestampValue(v.into()));
        self
    }

    /// Sets `value_type` to hold a `string_value`.
    pub fn set_string_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value_type = std::option::Option::Some(crate::model::value::ValueType::StringValue(v.into()));
        self
    }

    /// Sets `value_type` to hold a `bytes_value`.
    pub fn set_bytes_value<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.value_type = std::option::Option::Some(crate::model::value::ValueType::BytesValue(v.into()));
        self
    }

    /// Sets `value_type` to hold a `reference_value`.
    pub fn set_reference_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value_type = std::option::Option::Some(crate::model::value::ValueType::ReferenceValue(v.into()));
        self
    }

    /// Sets `value_type` to hold a `geo_point_value`.
    pub fn set_geo_point_value<T: std::convert::Into<std::boxed::Box<crate::model::LatLng>>>(mut self, v: T) -> Self {
        self.value_type = std::option::Option::Some(crate::model::value::ValueType::GeoPointValue(v.into()));
        self
    }

    /// Sets `value_type` to hold an `array_value`.
    pub fn set_array_value<T: std::convert::Into<std::boxed::Box<crate::model::ArrayValue>>>(mut self, v: T) -> Self {
        self.value_type = std::option::Option::Some(crate::model::value::ValueType::ArrayValue(v.into()));
        self
    }

    /// Sets `value_type` to hold a `map_value`.
    pub fn set_map_value<T: std::convert::Into<std::boxed::Box<crate::model::MapValue>>>(mut self, v: T) -> Self {
        self.value_type = std::option::Option::Some(crate::model::value::ValueType::MapValue(v.into()));
        self
    }

    /// The value of `value_type` if it holds a `boolean_value`, `None` otherwise.
    pub fn boolean_value(&self) -> std::option::Option<&bool> {
        match &self.value_type {
            std::option::Option::Some(crate::model::value::ValueType::BooleanValue(v)) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }

    /// The value of `value_type` if it holds an `integer_value`, `None` otherwise.
    pub fn integer_value(&self) -> std::option::Option<&i64> {
        match &self.value_type {
            std::option::Option::Some(crate::model::value::ValueType::IntegerValue(v)) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }

    /// The value of `value_type` if it holds a `double_value`, `None` otherwise.
    pub fn double_value(&self) -> std::option::Option<&f64> {
        match &self.value_type {
            std::option::Option::Some(crate::model::value::ValueType::DoubleValue(v)) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }

    /// The value of `value_type` if it holds a `string_value`, `None` otherwise.
    pub fn string_value(&self) -> std::option::Option<&std::string::String> {
        match &self.value_type {
            std::option::Option::Some(crate::model::value::ValueType::StringValue(v)) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }

    /// The value of `value_type` if it holds a `map_value`, `None` otherwise.
    pub fn map_value(&self) -> std::option::Option<&std::boxed::Box<crate::model::MapValue>> {
        match &self.value_type {
            std::option::Option::Some(crate::model::value::ValueType::MapValue(v)) => std::option::Option::Some(v),
            _ => std::option::Option::None,
        }
    }
}

impl wkt::message::Message for Value {
    fn typename() -> &'static str {
        "type.googleapis.com/google.firestore.v1.Value"
    }
}

/// Defines additional types related to [Value].
pub mod value {
    #[allow(unused_imports)]
    use super::*;

    /// Must have a value set.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum ValueType {
        /// A null value.
        NullValue(crate::model::NullValue),
        /// A boolean value.
        BooleanValue(bool),
        /// An integer value.
        IntegerValue(#[serde_as(as = "serde_with::PickFirst<(serde_with::DisplayFromStr, _)>")] i64),
        /// A double value.
        DoubleValue(f64),
        /// A timestamp value.
        TimestampValue(std::boxed::Box<wkt::Timestamp>),
        /// A string value.
        StringValue(std::string::String),
        /// A bytes value.
        BytesValue(#[serde_as(as = "serde_with::base64::Base64")] ::bytes::Bytes),
        /// A reference to a document. For example:
        /// `projects/{project_id}/databases/{database_id}/documents/{document_path}`.
        ReferenceValue(std::string::String),
        /// A geo point value representing a point on the surface of Earth.
        GeoPointValue(std::boxed::Box<crate::model::LatLng>),
        /// An array value.
        ArrayValue(std::boxed::Box<crate::model::ArrayValue>),
        /// A map value.
        MapValue(std::boxed::Box<crate::model::MapValue>),
    }
}

/// Represents the JSON `null` value in a [Value].
///
/// It serializes as `"NULL_VALUE"` and deserializes from either `null` or
/// `"NULL_VALUE"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NullValue;

impl serde::Serialize for NullValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str("NULL_VALUE")
    }
}

impl<'de> serde::Deserialize<'de> for NullValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;
        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = NullValue;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("null or \"NULL_VALUE\"")
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                std::result::Result::Ok(NullValue)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                std::result::Result::Ok(NullValue)
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                match value {
                    "NULL_VALUE" => std::result::Result::Ok(NullValue),
                    _ => std::result::Result::Err(E::invalid_value(serde::de::Unexpected::Str(value), &self)),
                }
            }
        }
        deserializer.deserialize_any(Visitor)
    }
}

/// An object that represents a latitude/longitude pair, expressed in degrees.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LatLng {
    /// The latitude in degrees. It must be in the range [-90.0, +90.0].
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub latitude: f64,

    /// The longitude in degrees. It must be in the range [-180.0, +180.0].
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub longitude: f64,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LatLng {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [latitude][crate::model::LatLng::latitude].
    pub fn set_latitude<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.latitude = v.into();
        self
    }

    /// Sets the value of [longitude][crate::model::LatLng::longitude].
    pub fn set_longitude<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.longitude = v.into();
        self
    }
}

impl wkt::message::Message for LatLng {
    fn typename() -> &'static str {
        "type.googleapis.com/google.type.LatLng"
    }
}
