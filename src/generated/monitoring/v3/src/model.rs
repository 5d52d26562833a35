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

/// A description of a label.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelDescriptor {
    /// The label key.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub key: std::string::String,

    /// The type of data that can be assigned to the label.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub value_type: crate::model::LabelValueType,

    /// A human-readable description for the label.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub description: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LabelDescriptor {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [key][crate::model::LabelDescriptor::key].
    pub fn set_key<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.key = v.into();
        self
    }

    /// Sets the value of [value_type][crate::model::LabelDescriptor::value_type].
    pub fn set_value_type<T: std::convert::Into<crate::model::LabelValueType>>(mut self, v: T) -> Self {
        self.value_type = v.into();
        self
    }

    /// Sets the value of [description][crate::model::LabelDescriptor::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }
}

impl wkt::message::Message for LabelDescriptor {
    fn typename() -> &'static str {
        "type.googleapis.com/google.api.LabelDescriptor"
    }
}

/// An object that describes the schema of a
/// [MonitoredResource][google.api.MonitoredResource] object using a type name
/// and a set of labels.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MonitoredResourceDescriptor {
    /// Optional. The resource name of the monitored resource descriptor:
    /// `"projects/{project_id}/monitoredResourceDescriptors/{type}"`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The monitored resource type. For example, the type
    /// `"cloudsql_database"` represents databases in Google Cloud SQL.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub r#type: std::string::String,

    /// Optional. A concise name for the monitored resource type that might be
    /// displayed in user interfaces.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Optional. A detailed description of the monitored resource type that might
    /// be used in documentation.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub description: std::string::String,

    /// Required. A set of labels used to describe instances of this monitored
    /// resource type.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub labels: std::vec::Vec<crate::model::LabelDescriptor>,

    /// Optional. The launch stage of the monitored resource definition.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub launch_stage: crate::model::LaunchStage,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl MonitoredResourceDescriptor {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::MonitoredResourceDescriptor::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [type][crate::model::MonitoredResourceDescriptor::type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::MonitoredResourceDescriptor::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [description][crate::model::MonitoredResourceDescriptor::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::MonitoredResourceDescriptor::labels].
    pub fn set_labels<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LabelDescriptor>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [launch_stage][crate::model::MonitoredResourceDescriptor::launch_stage].
    pub fn set_launch_stage<T: std::convert::Into<crate::model::LaunchStage>>(mut self, v: T) -> Self {
        self.launch_stage = v.into();
        self
    }
}

impl wkt::message::Message for MonitoredResourceDescriptor {
    fn typename() -> &'static str {
        "type.googleapis.com/google.api.MonitoredResourceDescriptor"
    }
}

/// An object representing a resource that can be used for monitoring, logging,
/// billing, or other purposes.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MonitoredResource {
    /// Required. The monitored resource type. This field must match
    /// the `type` field of a
    /// [MonitoredResourceDescriptor][google.api.MonitoredResourceDescriptor]
    /// object.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub r#type: std::string::String,

    /// Required. Values for all of the labels listed in the associated monitored
    /// resource descriptor.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl MonitoredResource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [type][crate::model::MonitoredResource::type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::MonitoredResource::labels].
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

impl wkt::message::Message for MonitoredResource {
    fn typename() -> &'static str {
        "type.googleapis.com/google.api.MonitoredResource"
    }
}

/// Defines a metric type and its schema.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetricDescriptor {
    /// The resource name of the metric descriptor.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The metric type, including its DNS name prefix. The type is not
    /// URL-encoded. All user-defined metric types have the DNS name
    /// `custom.googleapis.com` or `external.googleapis.com`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub r#type: std::string::String,

    /// The set of labels that can be used to describe a specific
    /// instance of this metric type.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub labels: std::vec::Vec<crate::model::LabelDescriptor>,

    /// Whether the metric records instantaneous values, changes to a value, etc.
    /// Some combinations of `metric_kind` and `value_type` might not be supported.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub metric_kind: crate::model::MetricKind,

    /// Whether the measurement is an integer, a floating-point number, etc.
    /// Some combinations of `metric_kind` and `value_type` might not be supported.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub value_type: crate::model::ValueType,

    /// The units in which the metric value is reported.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub unit: std::string::String,

    /// A detailed description of the metric, which can be used in documentation.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub description: std::string::String,

    /// A concise name for the metric, which can be displayed in user interfaces.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Read-only. If present, then a [time
    /// series][google.monitoring.v3.TimeSeries], which is identified partially by
    /// a metric type and a
    /// [MonitoredResourceDescriptor][google.api.MonitoredResourceDescriptor], that
    /// is associated with this metric type can only be associated with one of the
    /// monitored resource types listed here.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub monitored_resource_types: std::vec::Vec<std::string::String>,

    /// Optional. The launch stage of the metric definition.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub launch_stage: crate::model::LaunchStage,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl MetricDescriptor {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::MetricDescriptor::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [type][crate::model::MetricDescriptor::type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::MetricDescriptor::labels].
    pub fn set_labels<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LabelDescriptor>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [metric_kind][crate::model::MetricDescriptor::metric_kind].
    pub fn set_metric_kind<T: std::convert::Into<crate::model::MetricKind>>(mut self, v: T) -> Self {
        self.metric_kind = v.into();
        self
    }

    /// Sets the value of [value_type][crate::model::MetricDescriptor::value_type].
    pub fn set_value_type<T: std::convert::Into<crate::model::ValueType>>(mut self, v: T) -> Self {
        self.value_type = v.into();
        self
    }

    /// Sets the value of [unit][crate::model::MetricDescriptor::unit].
    pub fn set_unit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.unit = v.into();
        self
    }

    /// Sets the value of [description][crate::model::MetricDescriptor::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::MetricDescriptor::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [monitored_resource_types][crate::model::MetricDescriptor::monitored_resource_types].
    pub fn set_monitored_resource_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.monitored_resource_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [launch_stage][crate::model::MetricDescriptor::launch_stage].
    pub fn set_launch_stage<T: std::convert::Into<crate::model::LaunchStage>>(mut self, v: T) -> Self {
        self.launch_stage = v.into();
        self
    }
}

impl wkt::message::Message for MetricDescriptor {
    fn typename() -> &'static str {
        "type.googleapis.com/google.api.MetricDescriptor"
    }
}

/// A specific metric, identified by specifying values for all of the
/// labels of a [`MetricDescriptor`][google.api.MetricDescriptor].
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Metric {
    /// An existing metric type, see
    /// [google.api.MetricDescriptor][google.api.MetricDescriptor]. For example,
    /// `custom.googleapis.com/invoice/paid/amount`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub r#type: std::string::String,

    /// The set of label values that uniquely identify this metric. All
    /// labels listed in the `MetricDescriptor` must be assigned values.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Metric {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [type][crate::model::Metric::type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::Metric::labels].
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

impl wkt::message::Message for Metric {
    fn typename() -> &'static str {
        "type.googleapis.com/google.api.Metric"
    }
}

/// A closed time interval. It extends from the start time to the end time, and
/// includes both.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TimeInterval {
    /// Required. The end of the time interval.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub end_time: std::option::Option<wkt::Timestamp>,

    /// Optional. The beginning of the time interval.  The default value
    /// for the start time is the end time. The start time must not be
    /// later than the end time.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub start_time: std::option::Option<wkt::Timestamp>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TimeInterval {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [end_time][crate::model::TimeInterval::end_time].
    pub fn set_end_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.end_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [end_time][crate::model::TimeInterval::end_time].
    pub fn set_or_clear_end_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.end_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start_time][crate::model::TimeInterval::start_time].
    pub fn set_start_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.start_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [start_time][crate::model::TimeInterval::start_time].
    pub fn set_or_clear_start_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.start_time = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for TimeInterval {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.TimeInterval"
    }
}

/// `Distribution` contains summary statistics for a population of values. It
/// optionally contains a histogram representing the distribution of those values
/// across a set of buckets.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Distribution {
    /// The number of values in the population. Must be non-negative.
    #[serde_as(as = "serde_with::PickFirst<(serde_with::DisplayFromStr, _)>")]
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub count: i64,

    /// The arithmetic mean of the values in the population. If `count` is zero
    /// then this field must be zero.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub mean: f64,

    /// The sum of squared deviations from the mean of the values in the
    /// population.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub sum_of_squared_deviation: f64,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Distribution {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [count][crate::model::Distribution::count].
    pub fn set_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.count = v.into();
        self
    }

    /// Sets the value of [mean][crate::model::Distribution::mean].
    pub fn set_mean<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.mean = v.into();
        self
    }

    /// Sets the value of [sum_of_squared_deviation][crate::model::Distribution::sum_of_squared_deviation].
    pub fn set_sum_of_squared_deviation<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.sum_of_squared_deviation = v.into();
        self
    }
}

impl wkt::message::Message for Distribution {
    fn typename() -> &'static str {
        "type.googleapis.com/google.api.Distribution"
    }
}

/// A single strongly-typed value.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TypedValue {
    /// A Boolean value: `true` or `false`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub bool_value: std::option::Option<bool>,

    /// A 64-bit integer. Its range is approximately &plusmn;9.2x10\<sup\>18\</sup\>.
    #[serde_as(as = "std::option::Option<serde_with::PickFirst<(serde_with::DisplayFromStr, _)>>")]
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub int64_value: std::option::Option<i64>,

    /// A 64-bit double-precision floating-point number.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub double_value: std::option::Option<f64>,

    /// A variable-length string value.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub string_value: std::option::Option<std::string::String>,

    /// A distribution value.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub distribution_value: std::option::Option<crate::model::Distribution>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TypedValue {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bool_value][crate::model::TypedValue::bool_value].
    pub fn set_bool_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.bool_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [bool_value][crate::model::TypedValue::bool_value].
    pub fn set_or_clear_bool_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.bool_value = v.map(|x| x.into());
        self
    }

    /// Sets the value of [int64_value][crate::model::TypedValue::int64_value].
    pub fn set_int64_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.int64_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [int64_value][crate::model::TypedValue::int64_value].
    pub fn set_or_clear_int64_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<i64>,
    {
        self.int64_value = v.map(|x| x.into());
        self
    }

    /// Sets the value of [double_value][crate::model::TypedValue::double_value].
    pub fn set_double_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.double_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [double_value][crate::model::TypedValue::double_value].
    pub fn set_or_clear_double_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<f64>,
    {
        self.double_value = v.map(|x| x.into());
        self
    }

    /// Sets the value of [string_value][crate::model::TypedValue::string_value].
    pub fn set_string_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.string_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [string_value][crate::model::TypedValue::string_value].
    pub fn set_or_clear_string_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<std::string::String>,
    {
        self.string_value = v.map(|x| x.into());
        self
    }

    /// Sets the value of [distribution_value][crate::model::TypedValue::distribution_value].
    pub fn set_distribution_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Distribution>,
    {
        self.distribution_value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [distribution_value][crate::model::TypedValue::distribution_value].
    pub fn set_or_clear_distribution_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Distribution>,
    {
        self.distribution_value = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for TypedValue {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.TypedValue"
    }
}

/// A single data point in a time series.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Point {
    /// The time interval to which the data point applies.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub interval: std::option::Option<crate::model::TimeInterval>,

    /// The value of the data point.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub value: std::option::Option<crate::model::TypedValue>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Point {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [interval][crate::model::Point::interval].
    pub fn set_interval<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TimeInterval>,
    {
        self.interval = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interval][crate::model::Point::interval].
    pub fn set_or_clear_interval<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TimeInterval>,
    {
        self.interval = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][crate::model::Point::value].
    pub fn set_value<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TypedValue>,
    {
        self.value = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [value][crate::model::Point::value].
    pub fn set_or_clear_value<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TypedValue>,
    {
        self.value = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Point {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.Point"
    }
}

/// A collection of data points that describes the time-varying values
/// of a metric. A time series is identified by a combination of a
/// fully-specified monitored resource and a fully-specified metric.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TimeSeries {
    /// The associated metric. A fully-specified metric used to identify the time
    /// series.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric: std::option::Option<crate::model::Metric>,

    /// The associated monitored resource.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource: std::option::Option<crate::model::MonitoredResource>,

    /// The metric kind of the time series.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub metric_kind: crate::model::MetricKind,

    /// The value type of the time series.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub value_type: crate::model::ValueType,

    /// The data points of this time series. When listing time series, points are
    /// returned in reverse time order.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub points: std::vec::Vec<crate::model::Point>,

    /// The units in which the metric value is reported.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub unit: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TimeSeries {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [metric][crate::model::TimeSeries::metric].
    pub fn set_metric<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Metric>,
    {
        self.metric = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metric][crate::model::TimeSeries::metric].
    pub fn set_or_clear_metric<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Metric>,
    {
        self.metric = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource][crate::model::TimeSeries::resource].
    pub fn set_resource<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MonitoredResource>,
    {
        self.resource = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource][crate::model::TimeSeries::resource].
    pub fn set_or_clear_resource<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MonitoredResource>,
    {
        self.resource = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metric_kind][crate::model::TimeSeries::metric_kind].
    pub fn set_metric_kind<T: std::convert::Into<crate::model::MetricKind>>(mut self, v: T) -> Self {
        self.metric_kind = v.into();
        self
    }

    /// Sets the value of [value_type][crate::model::TimeSeries::value_type].
    pub fn set_value_type<T: std::convert::Into<crate::model::ValueType>>(mut self, v: T) -> Self {
        self.value_type = v.into();
        self
    }

    /// Sets the value of [points][crate::model::TimeSeries::points].
    pub fn set_points<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Point>,
    {
        use std::iter::Iterator;
        self.points = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [unit][crate::model::TimeSeries::unit].
    pub fn set_unit<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.unit = v.into();
        self
    }
}

impl wkt::message::Message for TimeSeries {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.TimeSeries"
    }
}

/// Describes how to combine multiple time series to provide a different view of
/// the data.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Aggregation {
    /// The `alignment_period` specifies a time interval, in seconds, that is used
    /// to divide the data in all the
    /// [time series][google.monitoring.v3.TimeSeries] into consistent blocks of
    /// time.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub alignment_period: std::option::Option<wkt::Duration>,

    /// An `Aligner` describes how to bring the data points in a single
    /// time series into temporal alignment.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub per_series_aligner: crate::model::Aligner,

    /// The reduction operation to be used to combine time series into a single
    /// time series, where the value of each data point in the resulting series is
    /// a function of all the already aligned values in the input time series.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub cross_series_reducer: crate::model::Reducer,

    /// The set of fields to preserve when `cross_series_reducer` is
    /// specified.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub group_by_fields: std::vec::Vec<std::string::String>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Aggregation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [alignment_period][crate::model::Aggregation::alignment_period].
    pub fn set_alignment_period<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.alignment_period = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [alignment_period][crate::model::Aggregation::alignment_period].
    pub fn set_or_clear_alignment_period<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.alignment_period = v.map(|x| x.into());
        self
    }

    /// Sets the value of [per_series_aligner][crate::model::Aggregation::per_series_aligner].
    pub fn set_per_series_aligner<T: std::convert::Into<crate::model::Aligner>>(mut self, v: T) -> Self {
        self.per_series_aligner = v.into();
        self
    }

    /// Sets the value of [cross_series_reducer][crate::model::Aggregation::cross_series_reducer].
    pub fn set_cross_series_reducer<T: std::convert::Into<crate::model::Reducer>>(mut self, v: T) -> Self {
        self.cross_series_reducer = v.into();
        self
    }

    /// Sets the value of [group_by_fields][crate::model::Aggregation::group_by_fields].
    pub fn set_group_by_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.group_by_fields = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for Aggregation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.Aggregation"
    }
}

/// Describes a change made to a configuration.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MutationRecord {
    /// When the change occurred.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mutate_time: std::option::Option<wkt::Timestamp>,

    /// The email address of the user making the change.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub mutated_by: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl MutationRecord {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [mutate_time][crate::model::MutationRecord::mutate_time].
    pub fn set_mutate_time<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.mutate_time = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mutate_time][crate::model::MutationRecord::mutate_time].
    pub fn set_or_clear_mutate_time<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Timestamp>,
    {
        self.mutate_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mutated_by][crate::model::MutationRecord::mutated_by].
    pub fn set_mutated_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.mutated_by = v.into();
        self
    }
}

impl wkt::message::Message for MutationRecord {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.MutationRecord"
    }
}

/// A content string and a MIME type that describes the content string's
/// format.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Documentation {
    /// The text of the documentation, interpreted according to `mime_type`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub content: std::string::String,

    /// The format of the `content` field. Presently, only the value
    /// `"text/markdown"` is supported.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub mime_type: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Documentation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [content][crate::model::Documentation::content].
    pub fn set_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content = v.into();
        self
    }

    /// Sets the value of [mime_type][crate::model::Documentation::mime_type].
    pub fn set_mime_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.mime_type = v.into();
        self
    }
}

impl wkt::message::Message for Documentation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.AlertPolicy.Documentation"
    }
}

/// Specifies how many time series must fail a predicate to trigger a
/// condition.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Trigger {
    /// The absolute number of time series that must fail
    /// the predicate for the condition to be triggered.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub count: i32,

    /// The percentage of time series that must fail the
    /// predicate for the condition to be triggered.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub percent: f64,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Trigger {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [count][crate::model::Trigger::count].
    pub fn set_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.count = v.into();
        self
    }

    /// Sets the value of [percent][crate::model::Trigger::percent].
    pub fn set_percent<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.percent = v.into();
        self
    }
}

impl wkt::message::Message for Trigger {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.AlertPolicy.Condition.Trigger"
    }
}

/// A condition type that compares a collection of time series
/// against a threshold.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetricThreshold {
    /// A [filter](https://cloud.google.com/monitoring/api/v3/filters) that
    /// identifies which time series should be compared with the threshold.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// Specifies the alignment of data points in individual time series as
    /// well as how to combine the retrieved time series together.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub aggregations: std::vec::Vec<crate::model::Aggregation>,

    /// The comparison to apply between the time series (indicated by `filter`
    /// and `aggregation`) and the threshold (indicated by `threshold_value`).
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub comparison: crate::model::ComparisonType,

    /// A value against which to compare the time series.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub threshold_value: f64,

    /// The amount of time that a time series must violate the
    /// threshold to be considered failing.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub duration: std::option::Option<wkt::Duration>,

    /// The number/percent of time series for which the comparison must hold
    /// in order for the condition to trigger.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub trigger: std::option::Option<crate::model::Trigger>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl MetricThreshold {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [filter][crate::model::MetricThreshold::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [aggregations][crate::model::MetricThreshold::aggregations].
    pub fn set_aggregations<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Aggregation>,
    {
        use std::iter::Iterator;
        self.aggregations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [comparison][crate::model::MetricThreshold::comparison].
    pub fn set_comparison<T: std::convert::Into<crate::model::ComparisonType>>(mut self, v: T) -> Self {
        self.comparison = v.into();
        self
    }

    /// Sets the value of [threshold_value][crate::model::MetricThreshold::threshold_value].
    pub fn set_threshold_value<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.threshold_value = v.into();
        self
    }

    /// Sets the value of [duration][crate::model::MetricThreshold::duration].
    pub fn set_duration<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.duration = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [duration][crate::model::MetricThreshold::duration].
    pub fn set_or_clear_duration<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.duration = v.map(|x| x.into());
        self
    }

    /// Sets the value of [trigger][crate::model::MetricThreshold::trigger].
    pub fn set_trigger<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Trigger>,
    {
        self.trigger = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [trigger][crate::model::MetricThreshold::trigger].
    pub fn set_or_clear_trigger<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Trigger>,
    {
        self.trigger = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for MetricThreshold {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.AlertPolicy.Condition.MetricThreshold"
    }
}

/// A condition type that checks that monitored resources
/// are reporting data.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetricAbsence {
    /// A [filter](https://cloud.google.com/monitoring/api/v3/filters) that
    /// identifies which time series should be compared with the threshold.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// Specifies the alignment of data points in individual time series as
    /// well as how to combine the retrieved time series together.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub aggregations: std::vec::Vec<crate::model::Aggregation>,

    /// The amount of time that a time series must fail to report new
    /// data to be considered failing.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub duration: std::option::Option<wkt::Duration>,

    /// The number/percent of time series for which the comparison must hold
    /// in order for the condition to trigger.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub trigger: std::option::Option<crate::model::Trigger>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl MetricAbsence {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [filter][crate::model::MetricAbsence::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [aggregations][crate::model::MetricAbsence::aggregations].
    pub fn set_aggregations<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Aggregation>,
    {
        use std::iter::Iterator;
        self.aggregations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [duration][crate::model::MetricAbsence::duration].
    pub fn set_duration<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.duration = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [duration][crate::model::MetricAbsence::duration].
    pub fn set_or_clear_duration<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.duration = v.map(|x| x.into());
        self
    }

    /// Sets the value of [trigger][crate::model::MetricAbsence::trigger].
    pub fn set_trigger<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Trigger>,
    {
        self.trigger = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [trigger][crate::model::MetricAbsence::trigger].
    pub fn set_or_clear_trigger<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Trigger>,
    {
        self.trigger = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for MetricAbsence {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.AlertPolicy.Condition.MetricAbsence"
    }
}

/// A condition is a true/false test that determines when an alerting policy
/// should open an incident.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Condition {
    /// Required if the condition exists. The unique resource name for this
    /// condition. Its format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/alertPolicies/[POLICY_ID]/conditions/[CONDITION_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// A short name or phrase used to identify the condition in dashboards,
    /// notifications, and incidents.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// A condition that compares a time series against a threshold.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition_threshold: std::option::Option<crate::model::MetricThreshold>,

    /// A condition that checks that a time series continues to
    /// receive new data points.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub condition_absent: std::option::Option<crate::model::MetricAbsence>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Condition {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Condition::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::Condition::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [condition_threshold][crate::model::Condition::condition_threshold].
    pub fn set_condition_threshold<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MetricThreshold>,
    {
        self.condition_threshold = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [condition_threshold][crate::model::Condition::condition_threshold].
    pub fn set_or_clear_condition_threshold<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MetricThreshold>,
    {
        self.condition_threshold = v.map(|x| x.into());
        self
    }

    /// Sets the value of [condition_absent][crate::model::Condition::condition_absent].
    pub fn set_condition_absent<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MetricAbsence>,
    {
        self.condition_absent = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [condition_absent][crate::model::Condition::condition_absent].
    pub fn set_or_clear_condition_absent<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MetricAbsence>,
    {
        self.condition_absent = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Condition {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.AlertPolicy.Condition"
    }
}

/// A description of the conditions under which some aspect of your system is
/// considered to be "unhealthy" and the ways to notify people or services about
/// this state.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AlertPolicy {
    /// Required if the policy exists. The resource name for this policy. The
    /// format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/alertPolicies/[ALERT_POLICY_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// A short name or phrase used to identify the policy in dashboards,
    /// notifications, and incidents.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Documentation that is included with notifications and incidents related to
    /// this policy.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub documentation: std::option::Option<crate::model::Documentation>,

    /// User-supplied key/value data to be used for organizing and
    /// identifying the `AlertPolicy` objects.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub user_labels: std::collections::HashMap<std::string::String, std::string::String>,

    /// A list of conditions for the policy. The conditions are combined by AND or
    /// OR according to the `combiner` field.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub conditions: std::vec::Vec<crate::model::Condition>,

    /// How to combine the results of multiple conditions to determine if an
    /// incident should be opened.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub combiner: crate::model::ConditionCombinerType,

    /// Whether or not the policy is enabled. On write, the default interpretation
    /// if unset is that the policy is enabled.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enabled: std::option::Option<bool>,

    /// Identifies the notification channels to which notifications should be sent
    /// when incidents are opened or closed or when new violations occur on
    /// an already opened incident.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub notification_channels: std::vec::Vec<std::string::String>,

    /// A read-only record of the creation of the alerting policy.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub creation_record: std::option::Option<crate::model::MutationRecord>,

    /// A read-only record of the most recent change to the alerting policy.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub mutation_record: std::option::Option<crate::model::MutationRecord>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AlertPolicy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::AlertPolicy::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::AlertPolicy::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [documentation][crate::model::AlertPolicy::documentation].
    pub fn set_documentation<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Documentation>,
    {
        self.documentation = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [documentation][crate::model::AlertPolicy::documentation].
    pub fn set_or_clear_documentation<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Documentation>,
    {
        self.documentation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user_labels][crate::model::AlertPolicy::user_labels].
    pub fn set_user_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.user_labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [conditions][crate::model::AlertPolicy::conditions].
    pub fn set_conditions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Condition>,
    {
        use std::iter::Iterator;
        self.conditions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [combiner][crate::model::AlertPolicy::combiner].
    pub fn set_combiner<T: std::convert::Into<crate::model::ConditionCombinerType>>(mut self, v: T) -> Self {
        self.combiner = v.into();
        self
    }

    /// Sets the value of [enabled][crate::model::AlertPolicy::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::AlertPolicy::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }

    /// Sets the value of [notification_channels][crate::model::AlertPolicy::notification_channels].
    pub fn set_notification_channels<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.notification_channels = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [creation_record][crate::model::AlertPolicy::creation_record].
    pub fn set_creation_record<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MutationRecord>,
    {
        self.creation_record = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [creation_record][crate::model::AlertPolicy::creation_record].
    pub fn set_or_clear_creation_record<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MutationRecord>,
    {
        self.creation_record = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mutation_record][crate::model::AlertPolicy::mutation_record].
    pub fn set_mutation_record<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MutationRecord>,
    {
        self.mutation_record = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [mutation_record][crate::model::AlertPolicy::mutation_record].
    pub fn set_or_clear_mutation_record<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MutationRecord>,
    {
        self.mutation_record = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for AlertPolicy {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.AlertPolicy"
    }
}

/// The protocol for the `ListAlertPolicies` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAlertPoliciesRequest {
    /// Required. The project whose alert policies are to be listed. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// If provided, this field specifies the criteria that must be met by
    /// alert policies to be included in the response.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// A comma-separated list of fields by which to sort the result.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub order_by: std::string::String,

    /// A positive number that is the maximum number of results to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken` value
    /// returned by a previous call to this method. Using this field causes the
    /// method to return additional results from the previous method call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListAlertPoliciesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ListAlertPoliciesRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListAlertPoliciesRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [order_by][crate::model::ListAlertPoliciesRequest::order_by].
    pub fn set_order_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListAlertPoliciesRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListAlertPoliciesRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListAlertPoliciesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListAlertPoliciesRequest"
    }
}

/// The protocol for the `ListAlertPolicies` response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAlertPoliciesResponse {
    /// The returned alert policies.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub alert_policies: std::vec::Vec<crate::model::AlertPolicy>,

    /// If there might be more results than were returned, then this field is set
    /// to a non-empty value. To see the additional results,
    /// use that value as `page_token` in the next call to this method.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListAlertPoliciesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [alert_policies][crate::model::ListAlertPoliciesResponse::alert_policies].
    pub fn set_alert_policies<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::AlertPolicy>,
    {
        use std::iter::Iterator;
        self.alert_policies = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListAlertPoliciesResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListAlertPoliciesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListAlertPoliciesResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListAlertPoliciesResponse {
    type PageItem = crate::model::AlertPolicy;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.alert_policies
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The protocol for the `GetAlertPolicy` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetAlertPolicyRequest {
    /// Required. The alerting policy to retrieve. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/alertPolicies/[ALERT_POLICY_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetAlertPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetAlertPolicyRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetAlertPolicyRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.GetAlertPolicyRequest"
    }
}

/// The protocol for the `CreateAlertPolicy` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateAlertPolicyRequest {
    /// Required. The project in which to create the alerting policy. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The requested alerting policy. You should omit the `name` field in
    /// this policy. The name will be returned in the new policy, including
    /// a new `[ALERT_POLICY_ID]` value.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub alert_policy: std::option::Option<crate::model::AlertPolicy>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateAlertPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CreateAlertPolicyRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [alert_policy][crate::model::CreateAlertPolicyRequest::alert_policy].
    ///
    /// This is a **required** field for requests.
    pub fn set_alert_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AlertPolicy>,
    {
        self.alert_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [alert_policy][crate::model::CreateAlertPolicyRequest::alert_policy].
    pub fn set_or_clear_alert_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AlertPolicy>,
    {
        self.alert_policy = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateAlertPolicyRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.CreateAlertPolicyRequest"
    }
}

/// The protocol for the `DeleteAlertPolicy` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteAlertPolicyRequest {
    /// Required. The alerting policy to delete. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/alertPolicies/[ALERT_POLICY_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteAlertPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteAlertPolicyRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteAlertPolicyRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.DeleteAlertPolicyRequest"
    }
}

/// The protocol for the `UpdateAlertPolicy` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateAlertPolicyRequest {
    /// Optional. A list of alerting policy field names. If this field is not
    /// empty, each listed field in the existing alerting policy is set to the
    /// value of the corresponding field in the supplied policy (`alert_policy`),
    /// or to the field's default value if the field is not in the supplied
    /// alerting policy.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    /// Required. The updated alerting policy or the updated values for the
    /// fields listed in `update_mask`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub alert_policy: std::option::Option<crate::model::AlertPolicy>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateAlertPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [update_mask][crate::model::UpdateAlertPolicyRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::UpdateAlertPolicyRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [alert_policy][crate::model::UpdateAlertPolicyRequest::alert_policy].
    ///
    /// This is a **required** field for requests.
    pub fn set_alert_policy<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AlertPolicy>,
    {
        self.alert_policy = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [alert_policy][crate::model::UpdateAlertPolicyRequest::alert_policy].
    pub fn set_or_clear_alert_policy<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AlertPolicy>,
    {
        self.alert_policy = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UpdateAlertPolicyRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.UpdateAlertPolicyRequest"
    }
}

/// The description of a dynamic collection of monitored resources. Each group
/// has a filter that is matched against monitored resources and their associated
/// metadata. If a group's filter matches an available monitored resource, then
/// that resource is a member of that group.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Group {
    /// Output only. The name of this group. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/groups/[GROUP_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// A user-assigned name for this group, used only for display purposes.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// The name of the group's parent, if it has one. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/groups/[GROUP_ID]
    /// ```
    ///
    /// For groups with no parent, `parent_name` is the empty string, `""`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent_name: std::string::String,

    /// The filter used to determine which monitored resources belong to this
    /// group.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// If true, the members of this group are considered to be a cluster.
    /// The system can perform additional analysis on groups that are clusters.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub is_cluster: bool,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Group {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Group::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::Group::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [parent_name][crate::model::Group::parent_name].
    pub fn set_parent_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent_name = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::Group::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [is_cluster][crate::model::Group::is_cluster].
    pub fn set_is_cluster<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_cluster = v.into();
        self
    }
}

impl wkt::message::Message for Group {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.Group"
    }
}

/// The `ListGroup` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListGroupsRequest {
    /// Required. The project whose groups are to be listed. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// A group name. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/groups/[GROUP_ID]
    /// ```
    ///
    /// Returns groups whose `parent_name` field contains the group
    /// name.  If no groups have this parent, the results are empty.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub children_of_group: std::string::String,

    /// A group name. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/groups/[GROUP_ID]
    /// ```
    ///
    /// Returns groups that are ancestors of the specified group.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub ancestors_of_group: std::string::String,

    /// A group name. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/groups/[GROUP_ID]
    /// ```
    ///
    /// Returns the descendants of the specified group.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub descendants_of_group: std::string::String,

    /// A positive number that is the maximum number of results to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken` value
    /// returned by a previous call to this method. Using this field causes the
    /// method to return additional results from the previous method call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListGroupsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ListGroupsRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [children_of_group][crate::model::ListGroupsRequest::children_of_group].
    pub fn set_children_of_group<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.children_of_group = v.into();
        self
    }

    /// Sets the value of [ancestors_of_group][crate::model::ListGroupsRequest::ancestors_of_group].
    pub fn set_ancestors_of_group<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.ancestors_of_group = v.into();
        self
    }

    /// Sets the value of [descendants_of_group][crate::model::ListGroupsRequest::descendants_of_group].
    pub fn set_descendants_of_group<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.descendants_of_group = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListGroupsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListGroupsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListGroupsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListGroupsRequest"
    }
}

/// The `ListGroups` response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListGroupsResponse {
    /// The groups that match the specified filters.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub group: std::vec::Vec<crate::model::Group>,

    /// If there might be more results than were returned, then this field is set
    /// to a non-empty value. To see the additional results,
    /// use that value as `page_token` in the next call to this method.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListGroupsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [group][crate::model::ListGroupsResponse::group].
    pub fn set_group<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Group>,
    {
        use std::iter::Iterator;
        self.group = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListGroupsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListGroupsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListGroupsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListGroupsResponse {
    type PageItem = crate::model::Group;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.group
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The `GetGroup` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetGroupRequest {
    /// Required. The group to retrieve. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/groups/[GROUP_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetGroupRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetGroupRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.GetGroupRequest"
    }
}

/// The `CreateGroup` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateGroupRequest {
    /// Required. The project in which to create the group. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. A group definition. It is an error to define the `name` field because
    /// the system assigns the name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub group: std::option::Option<crate::model::Group>,

    /// If true, validate this request but do not create the group.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub validate_only: bool,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CreateGroupRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [group][crate::model::CreateGroupRequest::group].
    ///
    /// This is a **required** field for requests.
    pub fn set_group<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Group>,
    {
        self.group = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [group][crate::model::CreateGroupRequest::group].
    pub fn set_or_clear_group<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Group>,
    {
        self.group = v.map(|x| x.into());
        self
    }

    /// Sets the value of [validate_only][crate::model::CreateGroupRequest::validate_only].
    pub fn set_validate_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.validate_only = v.into();
        self
    }
}

impl wkt::message::Message for CreateGroupRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.CreateGroupRequest"
    }
}

/// The `UpdateGroup` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateGroupRequest {
    /// Required. The new definition of the group.  All fields of the existing group,
    /// excepting `name`, are replaced with the corresponding fields of this group.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub group: std::option::Option<crate::model::Group>,

    /// If true, validate this request but do not update the existing group.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub validate_only: bool,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [group][crate::model::UpdateGroupRequest::group].
    ///
    /// This is a **required** field for requests.
    pub fn set_group<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Group>,
    {
        self.group = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [group][crate::model::UpdateGroupRequest::group].
    pub fn set_or_clear_group<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Group>,
    {
        self.group = v.map(|x| x.into());
        self
    }

    /// Sets the value of [validate_only][crate::model::UpdateGroupRequest::validate_only].
    pub fn set_validate_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.validate_only = v.into();
        self
    }
}

impl wkt::message::Message for UpdateGroupRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.UpdateGroupRequest"
    }
}

/// The `DeleteGroup` request. The default behavior is to be able to delete a
/// single group without any descendants.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteGroupRequest {
    /// Required. The group to delete. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/groups/[GROUP_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// If this field is true, then the request means to delete a group with all
    /// its descendants. Otherwise, the request means to delete a group only when
    /// it has no descendants. The default value is false.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub recursive: bool,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteGroupRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [recursive][crate::model::DeleteGroupRequest::recursive].
    pub fn set_recursive<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.recursive = v.into();
        self
    }
}

impl wkt::message::Message for DeleteGroupRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.DeleteGroupRequest"
    }
}

/// The `ListGroupMembers` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListGroupMembersRequest {
    /// Required. The group whose members are listed. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/groups/[GROUP_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// A positive number that is the maximum number of results to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken` value
    /// returned by a previous call to this method. Using this field causes the
    /// method to return additional results from the previous method call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// An optional [list
    /// filter](https://cloud.google.com/monitoring/api/learn_more#filtering)
    /// describing the members to be returned.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// An optional time interval for which results should be returned. Only
    /// members that were part of the group during the specified interval are
    /// included in the response.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub interval: std::option::Option<crate::model::TimeInterval>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListGroupMembersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ListGroupMembersRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListGroupMembersRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListGroupMembersRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListGroupMembersRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [interval][crate::model::ListGroupMembersRequest::interval].
    pub fn set_interval<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TimeInterval>,
    {
        self.interval = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interval][crate::model::ListGroupMembersRequest::interval].
    pub fn set_or_clear_interval<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TimeInterval>,
    {
        self.interval = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for ListGroupMembersRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListGroupMembersRequest"
    }
}

/// The `ListGroupMembers` response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListGroupMembersResponse {
    /// A set of monitored resources in the group.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub members: std::vec::Vec<crate::model::MonitoredResource>,

    /// If there might be more results than were returned, then this field is set
    /// to a non-empty value. To see the additional results,
    /// use that value as `page_token` in the next call to this method.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    /// The total number of elements matching this request.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub total_size: i32,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListGroupMembersResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [members][crate::model::ListGroupMembersResponse::members].
    pub fn set_members<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::MonitoredResource>,
    {
        use std::iter::Iterator;
        self.members = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListGroupMembersResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }

    /// Sets the value of [total_size][crate::model::ListGroupMembersResponse::total_size].
    pub fn set_total_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_size = v.into();
        self
    }
}

impl wkt::message::Message for ListGroupMembersResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListGroupMembersResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListGroupMembersResponse {
    type PageItem = crate::model::MonitoredResource;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.members
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The `ListMonitoredResourceDescriptors` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListMonitoredResourceDescriptorsRequest {
    /// Required. The project on which to execute the request. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// An optional [filter](https://cloud.google.com/monitoring/api/v3/filters)
    /// describing the descriptors to be returned.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// A positive number that is the maximum number of results to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken` value
    /// returned by a previous call to this method. Using this field causes the
    /// method to return additional results from the previous method call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListMonitoredResourceDescriptorsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ListMonitoredResourceDescriptorsRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListMonitoredResourceDescriptorsRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListMonitoredResourceDescriptorsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListMonitoredResourceDescriptorsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListMonitoredResourceDescriptorsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListMonitoredResourceDescriptorsRequest"
    }
}

/// The `ListMonitoredResourceDescriptors` response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListMonitoredResourceDescriptorsResponse {
    /// The monitored resource descriptors that are available to this project
    /// and that match `filter`, if present.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub resource_descriptors: std::vec::Vec<crate::model::MonitoredResourceDescriptor>,

    /// If there might be more results than were returned, then this field is set
    /// to a non-empty value. To see the additional results,
    /// use that value as `page_token` in the next call to this method.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListMonitoredResourceDescriptorsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_descriptors][crate::model::ListMonitoredResourceDescriptorsResponse::resource_descriptors].
    pub fn set_resource_descriptors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::MonitoredResourceDescriptor>,
    {
        use std::iter::Iterator;
        self.resource_descriptors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListMonitoredResourceDescriptorsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListMonitoredResourceDescriptorsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListMonitoredResourceDescriptorsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListMonitoredResourceDescriptorsResponse {
    type PageItem = crate::model::MonitoredResourceDescriptor;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.resource_descriptors
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The `GetMonitoredResourceDescriptor` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetMonitoredResourceDescriptorRequest {
    /// Required. The monitored resource descriptor to get.  The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/monitoredResourceDescriptors/[RESOURCE_TYPE]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetMonitoredResourceDescriptorRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetMonitoredResourceDescriptorRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetMonitoredResourceDescriptorRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.GetMonitoredResourceDescriptorRequest"
    }
}

/// The `ListMetricDescriptors` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListMetricDescriptorsRequest {
    /// Required. The project on which to execute the request. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// If this field is empty, all custom and
    /// system-defined metric descriptors are returned.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// A positive number that is the maximum number of results to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken` value
    /// returned by a previous call to this method. Using this field causes the
    /// method to return additional results from the previous method call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListMetricDescriptorsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ListMetricDescriptorsRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListMetricDescriptorsRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListMetricDescriptorsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListMetricDescriptorsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListMetricDescriptorsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListMetricDescriptorsRequest"
    }
}

/// The `ListMetricDescriptors` response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListMetricDescriptorsResponse {
    /// The metric descriptors that are available to the project
    /// and that match the value of `filter`, if present.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub metric_descriptors: std::vec::Vec<crate::model::MetricDescriptor>,

    /// If there might be more results than were returned, then this field is set
    /// to a non-empty value. To see the additional results,
    /// use that value as `page_token` in the next call to this method.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListMetricDescriptorsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [metric_descriptors][crate::model::ListMetricDescriptorsResponse::metric_descriptors].
    pub fn set_metric_descriptors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::MetricDescriptor>,
    {
        use std::iter::Iterator;
        self.metric_descriptors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListMetricDescriptorsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListMetricDescriptorsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListMetricDescriptorsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListMetricDescriptorsResponse {
    type PageItem = crate::model::MetricDescriptor;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.metric_descriptors
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The `GetMetricDescriptor` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetMetricDescriptorRequest {
    /// Required. The metric descriptor on which to execute the request. The format
    /// is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/metricDescriptors/[METRIC_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetMetricDescriptorRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetMetricDescriptorRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetMetricDescriptorRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.GetMetricDescriptorRequest"
    }
}

/// The `CreateMetricDescriptor` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateMetricDescriptorRequest {
    /// Required. The project on which to execute the request. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The new [custom metric](https://cloud.google.com/monitoring/custom-metrics)
    /// descriptor.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric_descriptor: std::option::Option<crate::model::MetricDescriptor>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateMetricDescriptorRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CreateMetricDescriptorRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [metric_descriptor][crate::model::CreateMetricDescriptorRequest::metric_descriptor].
    ///
    /// This is a **required** field for requests.
    pub fn set_metric_descriptor<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MetricDescriptor>,
    {
        self.metric_descriptor = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metric_descriptor][crate::model::CreateMetricDescriptorRequest::metric_descriptor].
    pub fn set_or_clear_metric_descriptor<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MetricDescriptor>,
    {
        self.metric_descriptor = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateMetricDescriptorRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.CreateMetricDescriptorRequest"
    }
}

/// The `DeleteMetricDescriptor` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteMetricDescriptorRequest {
    /// Required. The metric descriptor on which to execute the request. The format
    /// is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/metricDescriptors/[METRIC_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteMetricDescriptorRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteMetricDescriptorRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteMetricDescriptorRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.DeleteMetricDescriptorRequest"
    }
}

/// The `ListTimeSeries` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTimeSeriesRequest {
    /// Required. The project on which to execute the request. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. A [monitoring filter](https://cloud.google.com/monitoring/api/v3/filters)
    /// that specifies which time series should be returned.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// Required. The time interval for which results should be returned. Only time series
    /// that contain data points in the specified interval are included
    /// in the response.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub interval: std::option::Option<crate::model::TimeInterval>,

    /// Specifies the alignment of data points in individual time series as
    /// well as how to combine the retrieved time series across specified labels.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub aggregation: std::option::Option<crate::model::Aggregation>,

    /// Unsupported: must be left blank. The points in each time series are
    /// currently returned in reverse time order (most recent to oldest).
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub order_by: std::string::String,

    /// Required. Specifies which information is returned about the time series.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub view: crate::model::TimeSeriesView,

    /// A positive number that is the maximum number of results to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken` value
    /// returned by a previous call to this method. Using this field causes the
    /// method to return additional results from the previous method call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListTimeSeriesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ListTimeSeriesRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListTimeSeriesRequest::filter].
    ///
    /// This is a **required** field for requests.
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [interval][crate::model::ListTimeSeriesRequest::interval].
    ///
    /// This is a **required** field for requests.
    pub fn set_interval<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TimeInterval>,
    {
        self.interval = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [interval][crate::model::ListTimeSeriesRequest::interval].
    pub fn set_or_clear_interval<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TimeInterval>,
    {
        self.interval = v.map(|x| x.into());
        self
    }

    /// Sets the value of [aggregation][crate::model::ListTimeSeriesRequest::aggregation].
    pub fn set_aggregation<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Aggregation>,
    {
        self.aggregation = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [aggregation][crate::model::ListTimeSeriesRequest::aggregation].
    pub fn set_or_clear_aggregation<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Aggregation>,
    {
        self.aggregation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [order_by][crate::model::ListTimeSeriesRequest::order_by].
    pub fn set_order_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }

    /// Sets the value of [view][crate::model::ListTimeSeriesRequest::view].
    ///
    /// This is a **required** field for requests.
    pub fn set_view<T: std::convert::Into<crate::model::TimeSeriesView>>(mut self, v: T) -> Self {
        self.view = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListTimeSeriesRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListTimeSeriesRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListTimeSeriesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListTimeSeriesRequest"
    }
}

/// The `ListTimeSeries` response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListTimeSeriesResponse {
    /// One or more time series that match the filter included in the request.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub time_series: std::vec::Vec<crate::model::TimeSeries>,

    /// If there might be more results than were returned, then this field is set
    /// to a non-empty value. To see the additional results,
    /// use that value as `page_token` in the next call to this method.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    /// Query execution errors that may have caused the time series data returned
    /// to be incomplete.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub execution_errors: std::vec::Vec<gax::error::rpc::Status>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListTimeSeriesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [time_series][crate::model::ListTimeSeriesResponse::time_series].
    pub fn set_time_series<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::TimeSeries>,
    {
        use std::iter::Iterator;
        self.time_series = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListTimeSeriesResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }

    /// Sets the value of [execution_errors][crate::model::ListTimeSeriesResponse::execution_errors].
    pub fn set_execution_errors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<gax::error::rpc::Status>,
    {
        use std::iter::Iterator;
        self.execution_errors = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for ListTimeSeriesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListTimeSeriesResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListTimeSeriesResponse {
    type PageItem = crate::model::TimeSeries;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.time_series
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The `CreateTimeSeries` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateTimeSeriesRequest {
    /// Required. The project on which to execute the request. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The new data to be added to a list of time series.
    /// Adds at most one data point to each of several time series.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub time_series: std::vec::Vec<crate::model::TimeSeries>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateTimeSeriesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CreateTimeSeriesRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [time_series][crate::model::CreateTimeSeriesRequest::time_series].
    ///
    /// This is a **required** field for requests.
    pub fn set_time_series<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::TimeSeries>,
    {
        use std::iter::Iterator;
        self.time_series = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl wkt::message::Message for CreateTimeSeriesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.CreateTimeSeriesRequest"
    }
}

/// A description of a notification channel. The descriptor includes
/// the properties of the channel and the set of labels or fields that
/// must be specified to configure channels of a given type.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NotificationChannelDescriptor {
    /// The full REST resource name for this descriptor. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/notificationChannelDescriptors/[TYPE]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// The type of notification channel, such as "email" and "sms".
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub r#type: std::string::String,

    /// A human-readable name for the notification channel type.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// A human-readable description of the notification channel
    /// type.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub description: std::string::String,

    /// The set of labels that must be defined to identify a particular
    /// channel of the corresponding type.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub labels: std::vec::Vec<crate::model::LabelDescriptor>,

    /// The product launch stage for channels of this type.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub launch_stage: crate::model::LaunchStage,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl NotificationChannelDescriptor {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::NotificationChannelDescriptor::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [type][crate::model::NotificationChannelDescriptor::type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::NotificationChannelDescriptor::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [description][crate::model::NotificationChannelDescriptor::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::NotificationChannelDescriptor::labels].
    pub fn set_labels<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::LabelDescriptor>,
    {
        use std::iter::Iterator;
        self.labels = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [launch_stage][crate::model::NotificationChannelDescriptor::launch_stage].
    pub fn set_launch_stage<T: std::convert::Into<crate::model::LaunchStage>>(mut self, v: T) -> Self {
        self.launch_stage = v.into();
        self
    }
}

impl wkt::message::Message for NotificationChannelDescriptor {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.NotificationChannelDescriptor"
    }
}

/// A `NotificationChannel` is a medium through which an alert is
/// delivered when a policy violation is detected.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NotificationChannel {
    /// The type of the notification channel. This field matches the
    /// value of the [NotificationChannelDescriptor.type][google.monitoring.v3.NotificationChannelDescriptor.type] field.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub r#type: std::string::String,

    /// The full REST resource name for this channel. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/notificationChannels/[CHANNEL_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// An optional human-readable name for this notification channel.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// An optional human-readable description of this notification channel.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub description: std::string::String,

    /// Configuration fields that define the channel and its behavior.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub labels: std::collections::HashMap<std::string::String, std::string::String>,

    /// User-supplied key/value data that does not need to conform to
    /// the corresponding `NotificationChannelDescriptor`'s schema, unlike
    /// the `labels` field.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub user_labels: std::collections::HashMap<std::string::String, std::string::String>,

    /// Indicates whether this channel has been verified or not.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub verification_status: crate::model::VerificationStatus,

    /// Whether notifications are forwarded to the described channel.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub enabled: std::option::Option<bool>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl NotificationChannel {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [type][crate::model::NotificationChannel::type].
    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [name][crate::model::NotificationChannel::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::NotificationChannel::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [description][crate::model::NotificationChannel::description].
    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [labels][crate::model::NotificationChannel::labels].
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

    /// Sets the value of [user_labels][crate::model::NotificationChannel::user_labels].
    pub fn set_user_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.user_labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [verification_status][crate::model::NotificationChannel::verification_status].
    pub fn set_verification_status<T: std::convert::Into<crate::model::VerificationStatus>>(mut self, v: T) -> Self {
        self.verification_status = v.into();
        self
    }

    /// Sets the value of [enabled][crate::model::NotificationChannel::enabled].
    pub fn set_enabled<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [enabled][crate::model::NotificationChannel::enabled].
    pub fn set_or_clear_enabled<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<bool>,
    {
        self.enabled = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for NotificationChannel {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.NotificationChannel"
    }
}

/// The `ListNotificationChannelDescriptors` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNotificationChannelDescriptorsRequest {
    /// Required. The REST resource name of the parent from which to retrieve
    /// the notification channel descriptors. The expected syntax is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// A positive number that is the maximum number of results to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken` value
    /// returned by a previous call to this method. Using this field causes the
    /// method to return additional results from the previous method call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListNotificationChannelDescriptorsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ListNotificationChannelDescriptorsRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListNotificationChannelDescriptorsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListNotificationChannelDescriptorsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListNotificationChannelDescriptorsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListNotificationChannelDescriptorsRequest"
    }
}

/// The `ListNotificationChannelDescriptors` response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNotificationChannelDescriptorsResponse {
    /// The monitored resource descriptors supported for the specified
    /// project, optionally filtered.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub channel_descriptors: std::vec::Vec<crate::model::NotificationChannelDescriptor>,

    /// If there might be more results than were returned, then this field is set
    /// to a non-empty value. To see the additional results,
    /// use that value as `page_token` in the next call to this method.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListNotificationChannelDescriptorsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [channel_descriptors][crate::model::ListNotificationChannelDescriptorsResponse::channel_descriptors].
    pub fn set_channel_descriptors<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NotificationChannelDescriptor>,
    {
        use std::iter::Iterator;
        self.channel_descriptors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListNotificationChannelDescriptorsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListNotificationChannelDescriptorsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListNotificationChannelDescriptorsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListNotificationChannelDescriptorsResponse {
    type PageItem = crate::model::NotificationChannelDescriptor;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.channel_descriptors
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The `GetNotificationChannelDescriptor` response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetNotificationChannelDescriptorRequest {
    /// Required. The channel type for which to execute the request. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/notificationChannelDescriptors/[CHANNEL_TYPE]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetNotificationChannelDescriptorRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetNotificationChannelDescriptorRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetNotificationChannelDescriptorRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.GetNotificationChannelDescriptorRequest"
    }
}

/// The `ListNotificationChannels` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNotificationChannelsRequest {
    /// Required. The project on which to execute the request. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// If provided, this field specifies the criteria that must be met by
    /// notification channels to be included in the response.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// A comma-separated list of fields by which to sort the result.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub order_by: std::string::String,

    /// A positive number that is the maximum number of results to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken` value
    /// returned by a previous call to this method. Using this field causes the
    /// method to return additional results from the previous method call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListNotificationChannelsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ListNotificationChannelsRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListNotificationChannelsRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [order_by][crate::model::ListNotificationChannelsRequest::order_by].
    pub fn set_order_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListNotificationChannelsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListNotificationChannelsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListNotificationChannelsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListNotificationChannelsRequest"
    }
}

/// The `ListNotificationChannels` response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNotificationChannelsResponse {
    /// The notification channels defined for the specified project.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub notification_channels: std::vec::Vec<crate::model::NotificationChannel>,

    /// If there might be more results than were returned, then this field is set
    /// to a non-empty value. To see the additional results,
    /// use that value as `page_token` in the next call to this method.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListNotificationChannelsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [notification_channels][crate::model::ListNotificationChannelsResponse::notification_channels].
    pub fn set_notification_channels<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::NotificationChannel>,
    {
        use std::iter::Iterator;
        self.notification_channels = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListNotificationChannelsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListNotificationChannelsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListNotificationChannelsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListNotificationChannelsResponse {
    type PageItem = crate::model::NotificationChannel;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.notification_channels
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The `GetNotificationChannel` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetNotificationChannelRequest {
    /// Required. The channel for which to execute the request. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/notificationChannels/[CHANNEL_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetNotificationChannelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetNotificationChannelRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetNotificationChannelRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.GetNotificationChannelRequest"
    }
}

/// The `CreateNotificationChannel` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateNotificationChannelRequest {
    /// Required. The project on which to execute the request. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Required. The definition of the `NotificationChannel` to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notification_channel: std::option::Option<crate::model::NotificationChannel>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateNotificationChannelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::CreateNotificationChannelRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [notification_channel][crate::model::CreateNotificationChannelRequest::notification_channel].
    ///
    /// This is a **required** field for requests.
    pub fn set_notification_channel<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::NotificationChannel>,
    {
        self.notification_channel = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [notification_channel][crate::model::CreateNotificationChannelRequest::notification_channel].
    pub fn set_or_clear_notification_channel<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NotificationChannel>,
    {
        self.notification_channel = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateNotificationChannelRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.CreateNotificationChannelRequest"
    }
}

/// The `UpdateNotificationChannel` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateNotificationChannelRequest {
    /// The fields to update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    /// Required. A description of the changes to be applied to the specified
    /// notification channel.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub notification_channel: std::option::Option<crate::model::NotificationChannel>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateNotificationChannelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [update_mask][crate::model::UpdateNotificationChannelRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::UpdateNotificationChannelRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [notification_channel][crate::model::UpdateNotificationChannelRequest::notification_channel].
    ///
    /// This is a **required** field for requests.
    pub fn set_notification_channel<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::NotificationChannel>,
    {
        self.notification_channel = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [notification_channel][crate::model::UpdateNotificationChannelRequest::notification_channel].
    pub fn set_or_clear_notification_channel<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::NotificationChannel>,
    {
        self.notification_channel = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UpdateNotificationChannelRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.UpdateNotificationChannelRequest"
    }
}

/// The `DeleteNotificationChannel` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteNotificationChannelRequest {
    /// Required. The channel for which to execute the request. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/notificationChannels/[CHANNEL_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// If true, the notification channel will be deleted regardless of its
    /// use in alert policies (the policies will be updated to remove the
    /// channel).
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub force: bool,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteNotificationChannelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteNotificationChannelRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [force][crate::model::DeleteNotificationChannelRequest::force].
    pub fn set_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.force = v.into();
        self
    }
}

impl wkt::message::Message for DeleteNotificationChannelRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.DeleteNotificationChannelRequest"
    }
}

/// Custom view of service telemetry. Currently a place-holder pending final
/// design.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Custom {
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Custom {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl wkt::message::Message for Custom {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.Service.Custom"
    }
}

/// App Engine service. Learn more at https://cloud.google.com/appengine.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AppEngine {
    /// The ID of the App Engine module underlying this service.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub module_id: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AppEngine {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [module_id][crate::model::AppEngine::module_id].
    pub fn set_module_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.module_id = v.into();
        self
    }
}

impl wkt::message::Message for AppEngine {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.Service.AppEngine"
    }
}

/// Cloud Endpoints service. Learn more at https://cloud.google.com/endpoints.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CloudEndpoints {
    /// The name of the Cloud Endpoints service underlying this service.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub service: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CloudEndpoints {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service][crate::model::CloudEndpoints::service].
    pub fn set_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.service = v.into();
        self
    }
}

impl wkt::message::Message for CloudEndpoints {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.Service.CloudEndpoints"
    }
}

/// Configuration for how to query telemetry on a Service.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Telemetry {
    /// The full name of the resource that defines this service. Formatted as
    /// described in https://cloud.google.com/apis/design/resource_names.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub resource_name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Telemetry {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_name][crate::model::Telemetry::resource_name].
    pub fn set_resource_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_name = v.into();
        self
    }
}

impl wkt::message::Message for Telemetry {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.Service.Telemetry"
    }
}

/// A `Service` is a discrete, autonomous, and network-accessible unit, designed
/// to solve an individual concern. In Cloud Monitoring, a `Service` acts as the
/// root resource under which operational aspects of the service are accessible.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Service {
    /// Resource name for this Service. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Name used for UI elements listing this Service.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// Custom service type.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub custom: std::option::Option<crate::model::Custom>,

    /// Type used for App Engine services.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub app_engine: std::option::Option<crate::model::AppEngine>,

    /// Type used for Cloud Endpoints services.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub cloud_endpoints: std::option::Option<crate::model::CloudEndpoints>,

    /// Configuration for how to query telemetry on a Service.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub telemetry: std::option::Option<crate::model::Telemetry>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Service {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Service::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::Service::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [custom][crate::model::Service::custom].
    pub fn set_custom<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Custom>,
    {
        self.custom = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [custom][crate::model::Service::custom].
    pub fn set_or_clear_custom<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Custom>,
    {
        self.custom = v.map(|x| x.into());
        self
    }

    /// Sets the value of [app_engine][crate::model::Service::app_engine].
    pub fn set_app_engine<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AppEngine>,
    {
        self.app_engine = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [app_engine][crate::model::Service::app_engine].
    pub fn set_or_clear_app_engine<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AppEngine>,
    {
        self.app_engine = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cloud_endpoints][crate::model::Service::cloud_endpoints].
    pub fn set_cloud_endpoints<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::CloudEndpoints>,
    {
        self.cloud_endpoints = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [cloud_endpoints][crate::model::Service::cloud_endpoints].
    pub fn set_or_clear_cloud_endpoints<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::CloudEndpoints>,
    {
        self.cloud_endpoints = v.map(|x| x.into());
        self
    }

    /// Sets the value of [telemetry][crate::model::Service::telemetry].
    pub fn set_telemetry<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Telemetry>,
    {
        self.telemetry = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [telemetry][crate::model::Service::telemetry].
    pub fn set_or_clear_telemetry<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Telemetry>,
    {
        self.telemetry = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for Service {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.Service"
    }
}

/// Range of numerical values within `min` and `max`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Range {
    /// Range minimum.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub min: f64,

    /// Range maximum.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub max: f64,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl Range {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [min][crate::model::Range::min].
    pub fn set_min<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.min = v.into();
        self
    }

    /// Sets the value of [max][crate::model::Range::max].
    pub fn set_max<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.max = v.into();
        self
    }
}

impl wkt::message::Message for Range {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.Range"
    }
}

/// Parameters for a latency threshold SLI.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LatencyCriteria {
    /// Good service is defined to be the count of requests made to this service
    /// that return in no more than `threshold`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub threshold: std::option::Option<wkt::Duration>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl LatencyCriteria {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [threshold][crate::model::LatencyCriteria::threshold].
    pub fn set_threshold<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.threshold = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [threshold][crate::model::LatencyCriteria::threshold].
    pub fn set_or_clear_threshold<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.threshold = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for LatencyCriteria {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.BasicSli.LatencyCriteria"
    }
}

/// Future parameters for the availability SLI.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AvailabilityCriteria {
    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl AvailabilityCriteria {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl wkt::message::Message for AvailabilityCriteria {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.BasicSli.AvailabilityCriteria"
    }
}

/// An SLI measuring performance on a well-known service type. Performance will
/// be computed on the basis of pre-defined metrics.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BasicSli {
    /// OPTIONAL: The set of RPCs to which this SLI is relevant.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub method: std::vec::Vec<std::string::String>,

    /// OPTIONAL: The set of locations to which this SLI is relevant.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub location: std::vec::Vec<std::string::String>,

    /// OPTIONAL: The set of API versions to which this SLI is relevant.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub version: std::vec::Vec<std::string::String>,

    /// Good service is defined to be the count of requests made to this service
    /// that return successfully.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub availability: std::option::Option<crate::model::AvailabilityCriteria>,

    /// Good service is defined to be the count of requests made to this service
    /// that are fast enough with respect to `latency.threshold`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub latency: std::option::Option<crate::model::LatencyCriteria>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BasicSli {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [method][crate::model::BasicSli::method].
    pub fn set_method<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.method = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [location][crate::model::BasicSli::location].
    pub fn set_location<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.location = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [version][crate::model::BasicSli::version].
    pub fn set_version<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.version = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [availability][crate::model::BasicSli::availability].
    pub fn set_availability<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::AvailabilityCriteria>,
    {
        self.availability = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [availability][crate::model::BasicSli::availability].
    pub fn set_or_clear_availability<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::AvailabilityCriteria>,
    {
        self.availability = v.map(|x| x.into());
        self
    }

    /// Sets the value of [latency][crate::model::BasicSli::latency].
    pub fn set_latency<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::LatencyCriteria>,
    {
        self.latency = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [latency][crate::model::BasicSli::latency].
    pub fn set_or_clear_latency<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::LatencyCriteria>,
    {
        self.latency = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for BasicSli {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.BasicSli"
    }
}

/// A `TimeSeriesRatio` specifies two `TimeSeries` to use for computing the
/// `good_service / total_service` ratio.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TimeSeriesRatio {
    /// A [monitoring filter](https://cloud.google.com/monitoring/api/v3/filters)
    /// specifying a `TimeSeries` quantifying good service provided.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub good_service_filter: std::string::String,

    /// A [monitoring filter](https://cloud.google.com/monitoring/api/v3/filters)
    /// specifying a `TimeSeries` quantifying bad service, either demanded service
    /// that was not provided or demanded service that was of inadequate quality.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub bad_service_filter: std::string::String,

    /// A [monitoring filter](https://cloud.google.com/monitoring/api/v3/filters)
    /// specifying a `TimeSeries` quantifying total demanded service.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub total_service_filter: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TimeSeriesRatio {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [good_service_filter][crate::model::TimeSeriesRatio::good_service_filter].
    pub fn set_good_service_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.good_service_filter = v.into();
        self
    }

    /// Sets the value of [bad_service_filter][crate::model::TimeSeriesRatio::bad_service_filter].
    pub fn set_bad_service_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bad_service_filter = v.into();
        self
    }

    /// Sets the value of [total_service_filter][crate::model::TimeSeriesRatio::total_service_filter].
    pub fn set_total_service_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.total_service_filter = v.into();
        self
    }
}

impl wkt::message::Message for TimeSeriesRatio {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.TimeSeriesRatio"
    }
}

/// A `DistributionCut` defines a `TimeSeries` and thresholds used for measuring
/// good service and total service.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DistributionCut {
    /// A [monitoring filter](https://cloud.google.com/monitoring/api/v3/filters)
    /// specifying a `TimeSeries` aggregating values.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub distribution_filter: std::string::String,

    /// Range of values considered "good." For a one-sided range, set one bound to
    /// an infinite value.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub range: std::option::Option<crate::model::Range>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DistributionCut {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [distribution_filter][crate::model::DistributionCut::distribution_filter].
    pub fn set_distribution_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.distribution_filter = v.into();
        self
    }

    /// Sets the value of [range][crate::model::DistributionCut::range].
    pub fn set_range<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Range>,
    {
        self.range = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [range][crate::model::DistributionCut::range].
    pub fn set_or_clear_range<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Range>,
    {
        self.range = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for DistributionCut {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.DistributionCut"
    }
}

/// Service Level Indicators for which atomic units of service are counted
/// directly.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RequestBasedSli {
    /// `good_total_ratio` is used when the ratio of `good_service` to
    /// `total_service` is computed from two `TimeSeries`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub good_total_ratio: std::option::Option<crate::model::TimeSeriesRatio>,

    /// `distribution_cut` is used when `good_service` is a count of values
    /// aggregated in a `Distribution` that fall into a good range.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub distribution_cut: std::option::Option<crate::model::DistributionCut>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl RequestBasedSli {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [good_total_ratio][crate::model::RequestBasedSli::good_total_ratio].
    pub fn set_good_total_ratio<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TimeSeriesRatio>,
    {
        self.good_total_ratio = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [good_total_ratio][crate::model::RequestBasedSli::good_total_ratio].
    pub fn set_or_clear_good_total_ratio<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TimeSeriesRatio>,
    {
        self.good_total_ratio = v.map(|x| x.into());
        self
    }

    /// Sets the value of [distribution_cut][crate::model::RequestBasedSli::distribution_cut].
    pub fn set_distribution_cut<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::DistributionCut>,
    {
        self.distribution_cut = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [distribution_cut][crate::model::RequestBasedSli::distribution_cut].
    pub fn set_or_clear_distribution_cut<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::DistributionCut>,
    {
        self.distribution_cut = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for RequestBasedSli {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.RequestBasedSli"
    }
}

/// A `MetricRange` is used when each window is good when the value x of a
/// single `TimeSeries` satisfies `range.min <= x <= range.max`.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetricRange {
    /// A [monitoring filter](https://cloud.google.com/monitoring/api/v3/filters)
    /// specifying the `TimeSeries` to use for evaluating window quality.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub time_series: std::string::String,

    /// Range of values considered "good." For a one-sided range, set one bound to
    /// an infinite value.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub range: std::option::Option<crate::model::Range>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl MetricRange {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [time_series][crate::model::MetricRange::time_series].
    pub fn set_time_series<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.time_series = v.into();
        self
    }

    /// Sets the value of [range][crate::model::MetricRange::range].
    pub fn set_range<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Range>,
    {
        self.range = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [range][crate::model::MetricRange::range].
    pub fn set_or_clear_range<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Range>,
    {
        self.range = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for MetricRange {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.WindowsBasedSli.MetricRange"
    }
}

/// A `WindowsBasedSli` defines `good_service` as the count of time windows for
/// which the provided service was of good quality.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WindowsBasedSli {
    /// A [monitoring filter](https://cloud.google.com/monitoring/api/v3/filters)
    /// specifying a `TimeSeries` with `ValueType = BOOL`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub good_bad_metric_filter: std::string::String,

    /// A window is good if the metric's value is in a good range, averaged across
    /// returned streams.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric_mean_in_range: std::option::Option<crate::model::MetricRange>,

    /// A window is good if the metric's value is in a good range, summed across
    /// returned streams.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub metric_sum_in_range: std::option::Option<crate::model::MetricRange>,

    /// Duration over which window quality is evaluated. Must be an integer
    /// fraction of a day and at least `60s`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub window_period: std::option::Option<wkt::Duration>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl WindowsBasedSli {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [good_bad_metric_filter][crate::model::WindowsBasedSli::good_bad_metric_filter].
    pub fn set_good_bad_metric_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.good_bad_metric_filter = v.into();
        self
    }

    /// Sets the value of [metric_mean_in_range][crate::model::WindowsBasedSli::metric_mean_in_range].
    pub fn set_metric_mean_in_range<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MetricRange>,
    {
        self.metric_mean_in_range = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metric_mean_in_range][crate::model::WindowsBasedSli::metric_mean_in_range].
    pub fn set_or_clear_metric_mean_in_range<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MetricRange>,
    {
        self.metric_mean_in_range = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metric_sum_in_range][crate::model::WindowsBasedSli::metric_sum_in_range].
    pub fn set_metric_sum_in_range<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MetricRange>,
    {
        self.metric_sum_in_range = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [metric_sum_in_range][crate::model::WindowsBasedSli::metric_sum_in_range].
    pub fn set_or_clear_metric_sum_in_range<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MetricRange>,
    {
        self.metric_sum_in_range = v.map(|x| x.into());
        self
    }

    /// Sets the value of [window_period][crate::model::WindowsBasedSli::window_period].
    pub fn set_window_period<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.window_period = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [window_period][crate::model::WindowsBasedSli::window_period].
    pub fn set_or_clear_window_period<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.window_period = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for WindowsBasedSli {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.WindowsBasedSli"
    }
}

/// A Service-Level Indicator (SLI) describes the "performance" of a service. For
/// some services, the SLI is well-defined. In such cases, the SLI can be
/// described easily by referencing the well-known SLI and providing the needed
/// parameters.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceLevelIndicator {
    /// Basic SLI on a well-known service type.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub basic_sli: std::option::Option<crate::model::BasicSli>,

    /// Request-based SLIs
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub request_based: std::option::Option<crate::model::RequestBasedSli>,

    /// Windows-based SLIs
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub windows_based: std::option::Option<crate::model::WindowsBasedSli>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ServiceLevelIndicator {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [basic_sli][crate::model::ServiceLevelIndicator::basic_sli].
    pub fn set_basic_sli<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::BasicSli>,
    {
        self.basic_sli = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [basic_sli][crate::model::ServiceLevelIndicator::basic_sli].
    pub fn set_or_clear_basic_sli<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::BasicSli>,
    {
        self.basic_sli = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_based][crate::model::ServiceLevelIndicator::request_based].
    pub fn set_request_based<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::RequestBasedSli>,
    {
        self.request_based = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [request_based][crate::model::ServiceLevelIndicator::request_based].
    pub fn set_or_clear_request_based<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::RequestBasedSli>,
    {
        self.request_based = v.map(|x| x.into());
        self
    }

    /// Sets the value of [windows_based][crate::model::ServiceLevelIndicator::windows_based].
    pub fn set_windows_based<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::WindowsBasedSli>,
    {
        self.windows_based = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [windows_based][crate::model::ServiceLevelIndicator::windows_based].
    pub fn set_or_clear_windows_based<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::WindowsBasedSli>,
    {
        self.windows_based = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for ServiceLevelIndicator {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ServiceLevelIndicator"
    }
}

/// A Service-Level Objective (SLO) describes a level of desired good service. It
/// consists of a service-level indicator (SLI), a performance goal, and a period
/// over which the objective is to be evaluated against that goal.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceLevelObjective {
    /// Resource name for this `ServiceLevelObjective`. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]/serviceLevelObjectives/[SLO_NAME]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// Name used for UI elements listing this SLO.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// The definition of good service, used to measure and calculate the quality
    /// of the `Service`'s performance with respect to a single aspect of service
    /// quality.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service_level_indicator: std::option::Option<crate::model::ServiceLevelIndicator>,

    /// The fraction of service that must be good in order for this objective to be
    /// met. `0 < goal <= 0.999`.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub goal: f64,

    /// A rolling time period, semantically "in the past `<rolling_period>`".
    /// Must be an integer multiple of 1 day no larger than 30 days.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub rolling_period: std::option::Option<wkt::Duration>,

    /// A calendar period, semantically "since the start of the current
    /// `<calendar_period>`".
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub calendar_period: crate::model::CalendarPeriod,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ServiceLevelObjective {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::ServiceLevelObjective::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::ServiceLevelObjective::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [service_level_indicator][crate::model::ServiceLevelObjective::service_level_indicator].
    pub fn set_service_level_indicator<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceLevelIndicator>,
    {
        self.service_level_indicator = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service_level_indicator][crate::model::ServiceLevelObjective::service_level_indicator].
    pub fn set_or_clear_service_level_indicator<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceLevelIndicator>,
    {
        self.service_level_indicator = v.map(|x| x.into());
        self
    }

    /// Sets the value of [goal][crate::model::ServiceLevelObjective::goal].
    pub fn set_goal<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.goal = v.into();
        self
    }

    /// Sets the value of [rolling_period][crate::model::ServiceLevelObjective::rolling_period].
    pub fn set_rolling_period<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.rolling_period = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [rolling_period][crate::model::ServiceLevelObjective::rolling_period].
    pub fn set_or_clear_rolling_period<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.rolling_period = v.map(|x| x.into());
        self
    }

    /// Sets the value of [calendar_period][crate::model::ServiceLevelObjective::calendar_period].
    pub fn set_calendar_period<T: std::convert::Into<crate::model::CalendarPeriod>>(mut self, v: T) -> Self {
        self.calendar_period = v.into();
        self
    }
}

impl wkt::message::Message for ServiceLevelObjective {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ServiceLevelObjective"
    }
}

/// The `CreateService` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateServiceRequest {
    /// Required. Resource name of the parent workspace. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Optional. The Service id to use for this Service. If omitted, an id will be
    /// generated instead.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub service_id: std::string::String,

    /// Required. The `Service` to create.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service: std::option::Option<crate::model::Service>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateServiceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateServiceRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [service_id][crate::model::CreateServiceRequest::service_id].
    pub fn set_service_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.service_id = v.into();
        self
    }

    /// Sets the value of [service][crate::model::CreateServiceRequest::service].
    ///
    /// This is a **required** field for requests.
    pub fn set_service<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Service>,
    {
        self.service = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service][crate::model::CreateServiceRequest::service].
    pub fn set_or_clear_service<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Service>,
    {
        self.service = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateServiceRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.CreateServiceRequest"
    }
}

/// The `GetService` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetServiceRequest {
    /// Required. Resource name of the `Service`. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetServiceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetServiceRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetServiceRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.GetServiceRequest"
    }
}

/// The `ListServices` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListServicesRequest {
    /// Required. Resource name of the parent containing the listed services, either a
    /// project or a Monitoring Workspace.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// A filter specifying what `Service`s to return.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// A positive number that is the maximum number of results to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken` value
    /// returned by a previous call to this method. Using this field causes the
    /// method to return additional results from the previous method call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListServicesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListServicesRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListServicesRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListServicesRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListServicesRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListServicesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListServicesRequest"
    }
}

/// The `ListServices` response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListServicesResponse {
    /// The `Service`s matching the specified filter.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub services: std::vec::Vec<crate::model::Service>,

    /// If there might be more results than were returned, then this field is set
    /// to a non-empty value. To see the additional results,
    /// use that value as `page_token` in the next call to this method.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListServicesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [services][crate::model::ListServicesResponse::services].
    pub fn set_services<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::Service>,
    {
        use std::iter::Iterator;
        self.services = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListServicesResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListServicesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListServicesResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListServicesResponse {
    type PageItem = crate::model::Service;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.services
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The `UpdateService` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateServiceRequest {
    /// Required. The `Service` to draw updates from.
    /// The given `name` specifies the resource to update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service: std::option::Option<crate::model::Service>,

    /// A set of field paths defining which fields to use for the update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateServiceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service][crate::model::UpdateServiceRequest::service].
    ///
    /// This is a **required** field for requests.
    pub fn set_service<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::Service>,
    {
        self.service = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service][crate::model::UpdateServiceRequest::service].
    pub fn set_or_clear_service<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::Service>,
    {
        self.service = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][crate::model::UpdateServiceRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::UpdateServiceRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UpdateServiceRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.UpdateServiceRequest"
    }
}

/// The `DeleteService` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteServiceRequest {
    /// Required. Resource name of the `Service` to delete. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteServiceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteServiceRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteServiceRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.DeleteServiceRequest"
    }
}

/// The `CreateServiceLevelObjective` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateServiceLevelObjectiveRequest {
    /// Required. Resource name of the parent `Service`. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Optional. The ServiceLevelObjective id to use for this
    /// ServiceLevelObjective. If omitted, an id will be generated instead.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub service_level_objective_id: std::string::String,

    /// Required. The `ServiceLevelObjective` to create.
    /// The provided `name` will be respected if no `ServiceLevelObjective` exists
    /// with this name.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service_level_objective: std::option::Option<crate::model::ServiceLevelObjective>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateServiceLevelObjectiveRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateServiceLevelObjectiveRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [service_level_objective_id][crate::model::CreateServiceLevelObjectiveRequest::service_level_objective_id].
    pub fn set_service_level_objective_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.service_level_objective_id = v.into();
        self
    }

    /// Sets the value of [service_level_objective][crate::model::CreateServiceLevelObjectiveRequest::service_level_objective].
    ///
    /// This is a **required** field for requests.
    pub fn set_service_level_objective<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceLevelObjective>,
    {
        self.service_level_objective = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service_level_objective][crate::model::CreateServiceLevelObjectiveRequest::service_level_objective].
    pub fn set_or_clear_service_level_objective<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceLevelObjective>,
    {
        self.service_level_objective = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateServiceLevelObjectiveRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.CreateServiceLevelObjectiveRequest"
    }
}

/// The `GetServiceLevelObjective` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetServiceLevelObjectiveRequest {
    /// Required. Resource name of the `ServiceLevelObjective` to get. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]/serviceLevelObjectives/[SLO_NAME]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// View of the `ServiceLevelObjective` to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub view: crate::model::ServiceLevelObjectiveView,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetServiceLevelObjectiveRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetServiceLevelObjectiveRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [view][crate::model::GetServiceLevelObjectiveRequest::view].
    pub fn set_view<T: std::convert::Into<crate::model::ServiceLevelObjectiveView>>(mut self, v: T) -> Self {
        self.view = v.into();
        self
    }
}

impl wkt::message::Message for GetServiceLevelObjectiveRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.GetServiceLevelObjectiveRequest"
    }
}

/// The `ListServiceLevelObjectives` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListServiceLevelObjectivesRequest {
    /// Required. Resource name of the parent containing the listed SLOs, either a
    /// project or a Monitoring Workspace.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// A filter specifying what `ServiceLevelObjective`s to return.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub filter: std::string::String,

    /// A positive number that is the maximum number of results to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken` value
    /// returned by a previous call to this method. Using this field causes the
    /// method to return additional results from the previous method call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    /// View of the `ServiceLevelObjective`s to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub view: crate::model::ServiceLevelObjectiveView,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListServiceLevelObjectivesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListServiceLevelObjectivesRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][crate::model::ListServiceLevelObjectivesRequest::filter].
    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListServiceLevelObjectivesRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListServiceLevelObjectivesRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [view][crate::model::ListServiceLevelObjectivesRequest::view].
    pub fn set_view<T: std::convert::Into<crate::model::ServiceLevelObjectiveView>>(mut self, v: T) -> Self {
        self.view = v.into();
        self
    }
}

impl wkt::message::Message for ListServiceLevelObjectivesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListServiceLevelObjectivesRequest"
    }
}

/// The `ListServiceLevelObjectives` response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListServiceLevelObjectivesResponse {
    /// The `ServiceLevelObjective`s matching the specified filter.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub service_level_objectives: std::vec::Vec<crate::model::ServiceLevelObjective>,

    /// If there might be more results than were returned, then this field is set
    /// to a non-empty value. To see the additional results,
    /// use that value as `page_token` in the next call to this method.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListServiceLevelObjectivesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_level_objectives][crate::model::ListServiceLevelObjectivesResponse::service_level_objectives].
    pub fn set_service_level_objectives<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ServiceLevelObjective>,
    {
        use std::iter::Iterator;
        self.service_level_objectives = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListServiceLevelObjectivesResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListServiceLevelObjectivesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListServiceLevelObjectivesResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListServiceLevelObjectivesResponse {
    type PageItem = crate::model::ServiceLevelObjective;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.service_level_objectives
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The `UpdateServiceLevelObjective` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateServiceLevelObjectiveRequest {
    /// Required. The `ServiceLevelObjective` to draw updates from.
    /// The given `name` specifies the resource to update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub service_level_objective: std::option::Option<crate::model::ServiceLevelObjective>,

    /// A set of field paths defining which fields to use for the update.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateServiceLevelObjectiveRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_level_objective][crate::model::UpdateServiceLevelObjectiveRequest::service_level_objective].
    ///
    /// This is a **required** field for requests.
    pub fn set_service_level_objective<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ServiceLevelObjective>,
    {
        self.service_level_objective = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [service_level_objective][crate::model::UpdateServiceLevelObjectiveRequest::service_level_objective].
    pub fn set_or_clear_service_level_objective<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ServiceLevelObjective>,
    {
        self.service_level_objective = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][crate::model::UpdateServiceLevelObjectiveRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::UpdateServiceLevelObjectiveRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UpdateServiceLevelObjectiveRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.UpdateServiceLevelObjectiveRequest"
    }
}

/// The `DeleteServiceLevelObjective` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteServiceLevelObjectiveRequest {
    /// Required. Resource name of the `ServiceLevelObjective` to delete. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/services/[SERVICE_ID]/serviceLevelObjectives/[SLO_NAME]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteServiceLevelObjectiveRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteServiceLevelObjectiveRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteServiceLevelObjectiveRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.DeleteServiceLevelObjectiveRequest"
    }
}

/// The resource submessage for group checks. It can be used instead of a
/// monitored resource, when multiple resources are being monitored.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceGroup {
    /// The group of resources being monitored. Should be only the `[GROUP_ID]`, and
    /// not the full-path `projects/[PROJECT_ID_OR_NUMBER]/groups/[GROUP_ID]`.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub group_id: std::string::String,

    /// The resource type of the group members.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub resource_type: crate::model::GroupResourceType,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ResourceGroup {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [group_id][crate::model::ResourceGroup::group_id].
    pub fn set_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.group_id = v.into();
        self
    }

    /// Sets the value of [resource_type][crate::model::ResourceGroup::resource_type].
    pub fn set_resource_type<T: std::convert::Into<crate::model::GroupResourceType>>(mut self, v: T) -> Self {
        self.resource_type = v.into();
        self
    }
}

impl wkt::message::Message for ResourceGroup {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.UptimeCheckConfig.ResourceGroup"
    }
}

/// The authentication parameters to provide to the specified resource or
/// URL that requires a username and password.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BasicAuthentication {
    /// The username to use when authenticating with the HTTP server.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub username: std::string::String,

    /// The password to use when authenticating with the HTTP server.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub password: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl BasicAuthentication {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [username][crate::model::BasicAuthentication::username].
    pub fn set_username<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.username = v.into();
        self
    }

    /// Sets the value of [password][crate::model::BasicAuthentication::password].
    pub fn set_password<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.password = v.into();
        self
    }
}

impl wkt::message::Message for BasicAuthentication {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.UptimeCheckConfig.HttpCheck.BasicAuthentication"
    }
}

/// Information involved in an HTTP/HTTPS Uptime check request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HttpCheck {
    /// The HTTP request method to use for the check. If set to
    /// `METHOD_UNSPECIFIED` then `request_method` defaults to `GET`.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub request_method: crate::model::RequestMethod,

    /// If `true`, use HTTPS instead of HTTP to run the check.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub use_ssl: bool,

    /// Optional (defaults to "/"). The path to the page against which to run
    /// the check.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub path: std::string::String,

    /// Optional (defaults to 80 when `use_ssl` is `false`, and 443 when
    /// `use_ssl` is `true`). The TCP port on the HTTP server against which to
    /// run the check.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub port: i32,

    /// The authentication information. Optional when creating an HTTP check;
    /// defaults to empty.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub auth_info: std::option::Option<crate::model::BasicAuthentication>,

    /// Boolean specifying whether to encrypt the header information.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub mask_headers: bool,

    /// The list of headers to send as part of the Uptime check request.
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub headers: std::collections::HashMap<std::string::String, std::string::String>,

    /// The content type header to use for the check.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub content_type: crate::model::ContentType,

    /// Boolean specifying whether to include SSL certificate validation as a
    /// part of the Uptime check.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub validate_ssl: bool,

    /// The request body associated with the HTTP POST request. If `content_type`
    /// is `URL_ENCODED`, the body passed in must be URL-encoded.
    #[serde_as(as = "serde_with::base64::Base64")]
    #[serde(skip_serializing_if = "::bytes::Bytes::is_empty")]
    pub body: ::bytes::Bytes,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl HttpCheck {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [request_method][crate::model::HttpCheck::request_method].
    pub fn set_request_method<T: std::convert::Into<crate::model::RequestMethod>>(mut self, v: T) -> Self {
        self.request_method = v.into();
        self
    }

    /// Sets the value of [use_ssl][crate::model::HttpCheck::use_ssl].
    pub fn set_use_ssl<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.use_ssl = v.into();
        self
    }

    /// Sets the value of [path][crate::model::HttpCheck::path].
    pub fn set_path<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.path = v.into();
        self
    }

    /// Sets the value of [port][crate::model::HttpCheck::port].
    pub fn set_port<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.port = v.into();
        self
    }

    /// Sets the value of [auth_info][crate::model::HttpCheck::auth_info].
    pub fn set_auth_info<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::BasicAuthentication>,
    {
        self.auth_info = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [auth_info][crate::model::HttpCheck::auth_info].
    pub fn set_or_clear_auth_info<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::BasicAuthentication>,
    {
        self.auth_info = v.map(|x| x.into());
        self
    }

    /// Sets the value of [mask_headers][crate::model::HttpCheck::mask_headers].
    pub fn set_mask_headers<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.mask_headers = v.into();
        self
    }

    /// Sets the value of [headers][crate::model::HttpCheck::headers].
    pub fn set_headers<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        use std::iter::Iterator;
        self.headers = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [content_type][crate::model::HttpCheck::content_type].
    pub fn set_content_type<T: std::convert::Into<crate::model::ContentType>>(mut self, v: T) -> Self {
        self.content_type = v.into();
        self
    }

    /// Sets the value of [validate_ssl][crate::model::HttpCheck::validate_ssl].
    pub fn set_validate_ssl<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.validate_ssl = v.into();
        self
    }

    /// Sets the value of [body][crate::model::HttpCheck::body].
    pub fn set_body<T: std::convert::Into<::bytes::Bytes>>(mut self, v: T) -> Self {
        self.body = v.into();
        self
    }
}

impl wkt::message::Message for HttpCheck {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.UptimeCheckConfig.HttpCheck"
    }
}

/// Information required for a TCP Uptime check request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TcpCheck {
    /// The TCP port on the server against which to run the check. Will be
    /// combined with host (specified within the `monitored_resource`) to
    /// construct the full URL. Required.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub port: i32,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl TcpCheck {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [port][crate::model::TcpCheck::port].
    pub fn set_port<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.port = v.into();
        self
    }
}

impl wkt::message::Message for TcpCheck {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.UptimeCheckConfig.TcpCheck"
    }
}

/// Optional. Used to perform content matching. This allows matching based on
/// substrings and regular expressions, together with their negations.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ContentMatcher {
    /// String or regex content to match. Maximum 1024 bytes. An empty `content`
    /// string indicates no content matching is to be performed.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub content: std::string::String,

    /// The type of content matcher that will be applied to the server output,
    /// compared to the `content` string when the check is run.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub matcher: crate::model::ContentMatcherOption,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ContentMatcher {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [content][crate::model::ContentMatcher::content].
    pub fn set_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content = v.into();
        self
    }

    /// Sets the value of [matcher][crate::model::ContentMatcher::matcher].
    pub fn set_matcher<T: std::convert::Into<crate::model::ContentMatcherOption>>(mut self, v: T) -> Self {
        self.matcher = v.into();
        self
    }
}

impl wkt::message::Message for ContentMatcher {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.UptimeCheckConfig.ContentMatcher"
    }
}

/// This message configures which resources and services to monitor for
/// availability.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UptimeCheckConfig {
    /// A unique resource name for this Uptime check configuration. The format is:
    ///
    /// ```norust
    ///  projects/[PROJECT_ID_OR_NUMBER]/uptimeCheckConfigs/[UPTIME_CHECK_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    /// A human-friendly name for the Uptime check configuration. The display name
    /// should be unique within a Cloud Monitoring Workspace in order to make it
    /// easier to identify; however, uniqueness is not enforced. Required.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub display_name: std::string::String,

    /// The [monitored
    /// resource](https://cloud.google.com/monitoring/api/resources) associated
    /// with the configuration.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub monitored_resource: std::option::Option<crate::model::MonitoredResource>,

    /// The group resource associated with the configuration.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub resource_group: std::option::Option<crate::model::ResourceGroup>,

    /// Contains information needed to make an HTTP or HTTPS check.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub http_check: std::option::Option<crate::model::HttpCheck>,

    /// Contains information needed to make a TCP check.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub tcp_check: std::option::Option<crate::model::TcpCheck>,

    /// How often, in seconds, the Uptime check is performed.
    /// Currently, the only supported values are `60s` (1 minute), `300s`
    /// (5 minutes), `600s` (10 minutes), and `900s` (15 minutes). Optional,
    /// defaults to `60s`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub period: std::option::Option<wkt::Duration>,

    /// The maximum amount of time to wait for the request to complete (must be
    /// between 1 and 60 seconds). Required.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub timeout: std::option::Option<wkt::Duration>,

    /// The content that is expected to appear in the data returned by the target
    /// server against which the check is run.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub content_matchers: std::vec::Vec<crate::model::ContentMatcher>,

    /// The list of regions from which the check will be run.
    /// Some regions contain one location, and others contain more than one.
    /// If this field is specified, enough regions must be provided to include a
    /// minimum of 3 locations.  Not specifying this field will result in Uptime
    /// checks running from all available regions.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub selected_regions: std::vec::Vec<crate::model::UptimeCheckRegion>,

    /// If this is `true`, then checks are made only from the 'internal_checkers'.
    /// If it is `false`, then internal_checkers configured for the Workspace
    /// are ignored.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub is_internal: bool,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UptimeCheckConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::UptimeCheckConfig::name].
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][crate::model::UptimeCheckConfig::display_name].
    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [monitored_resource][crate::model::UptimeCheckConfig::monitored_resource].
    pub fn set_monitored_resource<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::MonitoredResource>,
    {
        self.monitored_resource = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [monitored_resource][crate::model::UptimeCheckConfig::monitored_resource].
    pub fn set_or_clear_monitored_resource<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::MonitoredResource>,
    {
        self.monitored_resource = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_group][crate::model::UptimeCheckConfig::resource_group].
    pub fn set_resource_group<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::ResourceGroup>,
    {
        self.resource_group = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_group][crate::model::UptimeCheckConfig::resource_group].
    pub fn set_or_clear_resource_group<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::ResourceGroup>,
    {
        self.resource_group = v.map(|x| x.into());
        self
    }

    /// Sets the value of [http_check][crate::model::UptimeCheckConfig::http_check].
    pub fn set_http_check<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::HttpCheck>,
    {
        self.http_check = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [http_check][crate::model::UptimeCheckConfig::http_check].
    pub fn set_or_clear_http_check<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::HttpCheck>,
    {
        self.http_check = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tcp_check][crate::model::UptimeCheckConfig::tcp_check].
    pub fn set_tcp_check<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::TcpCheck>,
    {
        self.tcp_check = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [tcp_check][crate::model::UptimeCheckConfig::tcp_check].
    pub fn set_or_clear_tcp_check<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::TcpCheck>,
    {
        self.tcp_check = v.map(|x| x.into());
        self
    }

    /// Sets the value of [period][crate::model::UptimeCheckConfig::period].
    pub fn set_period<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.period = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [period][crate::model::UptimeCheckConfig::period].
    pub fn set_or_clear_period<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.period = v.map(|x| x.into());
        self
    }

    /// Sets the value of [timeout][crate::model::UptimeCheckConfig::timeout].
    pub fn set_timeout<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.timeout = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [timeout][crate::model::UptimeCheckConfig::timeout].
    pub fn set_or_clear_timeout<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::Duration>,
    {
        self.timeout = v.map(|x| x.into());
        self
    }

    /// Sets the value of [content_matchers][crate::model::UptimeCheckConfig::content_matchers].
    pub fn set_content_matchers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::ContentMatcher>,
    {
        use std::iter::Iterator;
        self.content_matchers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [selected_regions][crate::model::UptimeCheckConfig::selected_regions].
    pub fn set_selected_regions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::UptimeCheckRegion>,
    {
        use std::iter::Iterator;
        self.selected_regions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [is_internal][crate::model::UptimeCheckConfig::is_internal].
    pub fn set_is_internal<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_internal = v.into();
        self
    }
}

impl wkt::message::Message for UptimeCheckConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.UptimeCheckConfig"
    }
}

/// Contains the region, location, and list of IP
/// addresses where checkers in the location run from.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UptimeCheckIp {
    /// A broad region category in which the IP address is located.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub region: crate::model::UptimeCheckRegion,

    /// A more specific location within the region that typically encodes
    /// a particular city/town/metro (and its containing state/province or country)
    /// within the broader umbrella region category.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub location: std::string::String,

    /// The IP address from which the Uptime check originates. This is a fully
    /// specified IP address (not an IP address range). Most IP addresses, as of
    /// this publication, are in IPv4 format; however, one should not rely on the
    /// IP addresses being in IPv4 format indefinitely, and should support
    /// interpreting this field in either IPv4 or IPv6 format.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub ip_address: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UptimeCheckIp {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [region][crate::model::UptimeCheckIp::region].
    pub fn set_region<T: std::convert::Into<crate::model::UptimeCheckRegion>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [location][crate::model::UptimeCheckIp::location].
    pub fn set_location<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.location = v.into();
        self
    }

    /// Sets the value of [ip_address][crate::model::UptimeCheckIp::ip_address].
    pub fn set_ip_address<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.ip_address = v.into();
        self
    }
}

impl wkt::message::Message for UptimeCheckIp {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.UptimeCheckIp"
    }
}

/// The protocol for the `ListUptimeCheckConfigs` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListUptimeCheckConfigsRequest {
    /// Required. The project whose Uptime check configurations are listed. The format
    /// is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// A positive number that is the maximum number of results to return.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken` value
    /// returned by a previous call to this method. Using this field causes the
    /// method to return additional results from the previous method call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListUptimeCheckConfigsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::ListUptimeCheckConfigsRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][crate::model::ListUptimeCheckConfigsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListUptimeCheckConfigsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListUptimeCheckConfigsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListUptimeCheckConfigsRequest"
    }
}

/// The protocol for the `ListUptimeCheckConfigs` response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListUptimeCheckConfigsResponse {
    /// The returned Uptime check configurations.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub uptime_check_configs: std::vec::Vec<crate::model::UptimeCheckConfig>,

    /// If there might be more results than were returned, then this field is set
    /// to a non-empty value. To see the additional results,
    /// use that value as `page_token` in the next call to this method.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    /// The total number of Uptime check configurations for the project,
    /// irrespective of any pagination.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub total_size: i32,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListUptimeCheckConfigsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [uptime_check_configs][crate::model::ListUptimeCheckConfigsResponse::uptime_check_configs].
    pub fn set_uptime_check_configs<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::UptimeCheckConfig>,
    {
        use std::iter::Iterator;
        self.uptime_check_configs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListUptimeCheckConfigsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }

    /// Sets the value of [total_size][crate::model::ListUptimeCheckConfigsResponse::total_size].
    pub fn set_total_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_size = v.into();
        self
    }
}

impl wkt::message::Message for ListUptimeCheckConfigsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListUptimeCheckConfigsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListUptimeCheckConfigsResponse {
    type PageItem = crate::model::UptimeCheckConfig;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.uptime_check_configs
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The protocol for the `GetUptimeCheckConfig` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetUptimeCheckConfigRequest {
    /// Required. The Uptime check configuration to retrieve. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/uptimeCheckConfigs/[UPTIME_CHECK_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl GetUptimeCheckConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::GetUptimeCheckConfigRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for GetUptimeCheckConfigRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.GetUptimeCheckConfigRequest"
    }
}

/// The protocol for the `CreateUptimeCheckConfig` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateUptimeCheckConfigRequest {
    /// Required. The project in which to create the Uptime check. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub parent: std::string::String,

    /// Required. The new Uptime check configuration.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub uptime_check_config: std::option::Option<crate::model::UptimeCheckConfig>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl CreateUptimeCheckConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [parent][crate::model::CreateUptimeCheckConfigRequest::parent].
    ///
    /// This is a **required** field for requests.
    pub fn set_parent<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [uptime_check_config][crate::model::CreateUptimeCheckConfigRequest::uptime_check_config].
    ///
    /// This is a **required** field for requests.
    pub fn set_uptime_check_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UptimeCheckConfig>,
    {
        self.uptime_check_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [uptime_check_config][crate::model::CreateUptimeCheckConfigRequest::uptime_check_config].
    pub fn set_or_clear_uptime_check_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::UptimeCheckConfig>,
    {
        self.uptime_check_config = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for CreateUptimeCheckConfigRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.CreateUptimeCheckConfigRequest"
    }
}

/// The protocol for the `UpdateUptimeCheckConfig` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateUptimeCheckConfigRequest {
    /// Optional. If present, only the listed fields in the current Uptime check
    /// configuration are updated with values from the new configuration. If this
    /// field is empty, then the current configuration is completely replaced with
    /// the new configuration.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub update_mask: std::option::Option<wkt::FieldMask>,

    /// Required. If an `updateMask` has been specified, this field gives
    /// the values for the set of fields mentioned in the `updateMask`.
    #[serde(skip_serializing_if = "std::option::Option::is_none")]
    pub uptime_check_config: std::option::Option<crate::model::UptimeCheckConfig>,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl UpdateUptimeCheckConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [update_mask][crate::model::UpdateUptimeCheckConfigRequest::update_mask].
    pub fn set_update_mask<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::UpdateUptimeCheckConfigRequest::update_mask].
    pub fn set_or_clear_update_mask<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<wkt::FieldMask>,
    {
        self.update_mask = v.map(|x| x.into());
        self
    }

    /// Sets the value of [uptime_check_config][crate::model::UpdateUptimeCheckConfigRequest::uptime_check_config].
    ///
    /// This is a **required** field for requests.
    pub fn set_uptime_check_config<T>(mut self, v: T) -> Self
    where
        T: std::convert::Into<crate::model::UptimeCheckConfig>,
    {
        self.uptime_check_config = std::option::Option::Some(v.into());
        self
    }

    /// Sets or clears the value of [uptime_check_config][crate::model::UpdateUptimeCheckConfigRequest::uptime_check_config].
    pub fn set_or_clear_uptime_check_config<T>(mut self, v: std::option::Option<T>) -> Self
    where
        T: std::convert::Into<crate::model::UptimeCheckConfig>,
    {
        self.uptime_check_config = v.map(|x| x.into());
        self
    }
}

impl wkt::message::Message for UpdateUptimeCheckConfigRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.UpdateUptimeCheckConfigRequest"
    }
}

/// The protocol for the `DeleteUptimeCheckConfig` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteUptimeCheckConfigRequest {
    /// Required. The Uptime check configuration to delete. The format is:
    ///
    /// ```norust
    /// projects/[PROJECT_ID_OR_NUMBER]/uptimeCheckConfigs/[UPTIME_CHECK_ID]
    /// ```
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub name: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl DeleteUptimeCheckConfigRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::DeleteUptimeCheckConfigRequest::name].
    ///
    /// This is a **required** field for requests.
    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

impl wkt::message::Message for DeleteUptimeCheckConfigRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.DeleteUptimeCheckConfigRequest"
    }
}

/// The protocol for the `ListUptimeCheckIps` request.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListUptimeCheckIpsRequest {
    /// The maximum number of results to return in a single response. The server
    /// may further constrain the maximum number of results returned in a single
    /// page.
    #[serde(skip_serializing_if = "wkt::internal::is_default")]
    pub page_size: i32,

    /// If this field is not empty then it must contain the `nextPageToken` value
    /// returned by a previous call to this method. Using this field causes the
    /// method to return additional results from the previous method call.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListUptimeCheckIpsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [page_size][crate::model::ListUptimeCheckIpsRequest::page_size].
    pub fn set_page_size<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][crate::model::ListUptimeCheckIpsRequest::page_token].
    pub fn set_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListUptimeCheckIpsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListUptimeCheckIpsRequest"
    }
}

/// The protocol for the `ListUptimeCheckIps` response.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListUptimeCheckIpsResponse {
    /// The returned list of IP addresses (including region and location) that the
    /// checkers run from.
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub uptime_check_ips: std::vec::Vec<crate::model::UptimeCheckIp>,

    /// If there might be more results than were returned, then this field is set
    /// to a non-empty value. To see the additional results,
    /// use that value as `page_token` in the next call to this method.
    #[serde(skip_serializing_if = "std::string::String::is_empty")]
    pub next_page_token: std::string::String,

    #[serde(flatten, skip_serializing_if = "serde_json::Map::is_empty")]
    _unknown_fields: serde_json::Map<std::string::String, serde_json::Value>,
}

impl ListUptimeCheckIpsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [uptime_check_ips][crate::model::ListUptimeCheckIpsResponse::uptime_check_ips].
    pub fn set_uptime_check_ips<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::UptimeCheckIp>,
    {
        use std::iter::Iterator;
        self.uptime_check_ips = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListUptimeCheckIpsResponse::next_page_token].
    pub fn set_next_page_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl wkt::message::Message for ListUptimeCheckIpsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.monitoring.v3.ListUptimeCheckIpsResponse"
    }
}

#[doc(hidden)]
impl gax::paginator::internal::PageableResponse for ListUptimeCheckIpsResponse {
    type PageItem = crate::model::UptimeCheckIp;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.uptime_check_ips
    }

    fn next_page_token(&self) -> std::string::String {
        use std::clone::Clone;
        self.next_page_token.clone()
    }
}

/// The launch stage as defined by [Google Cloud Platform
/// Launch Stages](https://cloud.google.com/terms/launch-stages).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum LaunchStage {
    /// Do not use this default value.
    #[default]
    #[serde(rename = "LAUNCH_STAGE_UNSPECIFIED")]
    LaunchStageUnspecified,
    /// The feature is not yet implemented. Users can not use it.
    #[serde(rename = "UNIMPLEMENTED")]
    Unimplemented,
    /// Prelaunch features are hidden from users and are only visible internally.
    #[serde(rename = "PRELAUNCH")]
    Prelaunch,
    /// Early Access features are limited to a closed group of testers.
    #[serde(rename = "EARLY_ACCESS")]
    EarlyAccess,
    /// Alpha is a limited availability test for releases before they are cleared
    /// for widespread use.
    #[serde(rename = "ALPHA")]
    Alpha,
    /// Beta is the point at which we are ready to open a release for any
    /// customer to use.
    #[serde(rename = "BETA")]
    Beta,
    /// GA features are open to all developers and are considered stable and
    /// fully qualified for production use.
    #[serde(rename = "GA")]
    Ga,
    /// Deprecated features are scheduled to be shut down and removed.
    #[serde(rename = "DEPRECATED")]
    Deprecated,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// Value types that can be used as label values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum LabelValueType {
    /// A variable-length string. This is the default.
    #[default]
    #[serde(rename = "STRING")]
    String,
    /// Boolean; true or false.
    #[serde(rename = "BOOL")]
    Bool,
    /// A 64-bit signed integer.
    #[serde(rename = "INT64")]
    Int64,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// The kind of measurement. It describes how the data is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum MetricKind {
    /// Do not use this default value.
    #[default]
    #[serde(rename = "METRIC_KIND_UNSPECIFIED")]
    MetricKindUnspecified,
    /// An instantaneous measurement of a value.
    #[serde(rename = "GAUGE")]
    Gauge,
    /// The change in a value during a time interval.
    #[serde(rename = "DELTA")]
    Delta,
    /// A value accumulated over a time interval. Cumulative
    /// measurements in a time series should have the same start time
    /// and increasing end times, until an event resets the cumulative
    /// value to zero and sets a new start time for the following
    /// points.
    #[serde(rename = "CUMULATIVE")]
    Cumulative,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// The value type of a metric.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum ValueType {
    /// Do not use this default value.
    #[default]
    #[serde(rename = "VALUE_TYPE_UNSPECIFIED")]
    ValueTypeUnspecified,
    /// The value is a boolean.
    /// This value type can be used only if the metric kind is `GAUGE`.
    #[serde(rename = "BOOL")]
    Bool,
    /// The value is a signed 64-bit integer.
    #[serde(rename = "INT64")]
    Int64,
    /// The value is a double precision floating point number.
    #[serde(rename = "DOUBLE")]
    Double,
    /// The value is a text string.
    /// This value type can be used only if the metric kind is `GAUGE`.
    #[serde(rename = "STRING")]
    String,
    /// The value is a `Distribution`.
    #[serde(rename = "DISTRIBUTION")]
    Distribution,
    /// The value is money.
    #[serde(rename = "MONEY")]
    Money,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// The `Aligner` specifies the operation that will be applied to the data
/// points in each alignment period in a time series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum Aligner {
    /// No alignment. Raw data is returned.
    #[default]
    #[serde(rename = "ALIGN_NONE")]
    AlignNone,
    /// Align and convert to `DELTA`.
    #[serde(rename = "ALIGN_DELTA")]
    AlignDelta,
    /// Align and convert to a rate.
    #[serde(rename = "ALIGN_RATE")]
    AlignRate,
    /// Align by interpolating between adjacent points around the alignment
    /// period boundary.
    #[serde(rename = "ALIGN_INTERPOLATE")]
    AlignInterpolate,
    /// Align by moving the most recent data point before the end of the
    /// alignment period to the boundary at the end of the alignment period.
    #[serde(rename = "ALIGN_NEXT_OLDER")]
    AlignNextOlder,
    /// Align the time series by returning the minimum value in each alignment
    /// period.
    #[serde(rename = "ALIGN_MIN")]
    AlignMin,
    /// Align the time series by returning the maximum value in each alignment
    /// period.
    #[serde(rename = "ALIGN_MAX")]
    AlignMax,
    /// Align the time series by returning the mean value in each alignment
    /// period.
    #[serde(rename = "ALIGN_MEAN")]
    AlignMean,
    /// Align the time series by returning the number of values in each alignment
    /// period.
    #[serde(rename = "ALIGN_COUNT")]
    AlignCount,
    /// Align the time series by returning the sum of the values in each
    /// alignment period.
    #[serde(rename = "ALIGN_SUM")]
    AlignSum,
    /// Align the time series by returning the standard deviation of the values
    /// in each alignment period.
    #[serde(rename = "ALIGN_STDDEV")]
    AlignStddev,
    /// Align the time series by returning the number of `True` values in
    /// each alignment period.
    #[serde(rename = "ALIGN_COUNT_TRUE")]
    AlignCountTrue,
    /// Align the time series by returning the number of `False` values in
    /// each alignment period.
    #[serde(rename = "ALIGN_COUNT_FALSE")]
    AlignCountFalse,
    /// Align the time series by returning the ratio of the number of `True`
    /// values to the total number of values in each alignment period.
    #[serde(rename = "ALIGN_FRACTION_TRUE")]
    AlignFractionTrue,
    /// Align the time series by using percentile aggregation.
    #[serde(rename = "ALIGN_PERCENTILE_99")]
    AlignPercentile99,
    /// Align the time series by using percentile aggregation.
    #[serde(rename = "ALIGN_PERCENTILE_95")]
    AlignPercentile95,
    /// Align the time series by using percentile aggregation.
    #[serde(rename = "ALIGN_PERCENTILE_50")]
    AlignPercentile50,
    /// Align the time series by using percentile aggregation.
    #[serde(rename = "ALIGN_PERCENTILE_05")]
    AlignPercentile05,
    /// Align and convert to a percentage change.
    #[serde(rename = "ALIGN_PERCENT_CHANGE")]
    AlignPercentChange,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// A Reducer operation describes how to aggregate data points from multiple
/// time series into a single time series, where the value of each data point
/// in the resulting series is a function of all the already aligned values in
/// the input time series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum Reducer {
    /// No cross-time series reduction.
    #[default]
    #[serde(rename = "REDUCE_NONE")]
    ReduceNone,
    /// Reduce by computing the mean value across time series for each
    /// alignment period.
    #[serde(rename = "REDUCE_MEAN")]
    ReduceMean,
    /// Reduce by computing the minimum value across time series for each
    /// alignment period.
    #[serde(rename = "REDUCE_MIN")]
    ReduceMin,
    /// Reduce by computing the maximum value across time series for each
    /// alignment period.
    #[serde(rename = "REDUCE_MAX")]
    ReduceMax,
    /// Reduce by computing the sum across time series for each
    /// alignment period.
    #[serde(rename = "REDUCE_SUM")]
    ReduceSum,
    /// Reduce by computing the standard deviation across time series
    /// for each alignment period.
    #[serde(rename = "REDUCE_STDDEV")]
    ReduceStddev,
    /// Reduce by computing the number of data points across time series
    /// for each alignment period.
    #[serde(rename = "REDUCE_COUNT")]
    ReduceCount,
    /// Reduce by computing the number of `True`-valued data points across time
    /// series for each alignment period.
    #[serde(rename = "REDUCE_COUNT_TRUE")]
    ReduceCountTrue,
    /// Reduce by computing the number of `False`-valued data points across time
    /// series for each alignment period.
    #[serde(rename = "REDUCE_COUNT_FALSE")]
    ReduceCountFalse,
    /// Reduce by computing the ratio of the number of `True`-valued data points
    /// to the total number of data points for each alignment period.
    #[serde(rename = "REDUCE_FRACTION_TRUE")]
    ReduceFractionTrue,
    /// Reduce by computing the 99th percentile of data points across time series
    /// for each alignment period.
    #[serde(rename = "REDUCE_PERCENTILE_99")]
    ReducePercentile99,
    /// Reduce by computing the 95th percentile of data points across time series
    /// for each alignment period.
    #[serde(rename = "REDUCE_PERCENTILE_95")]
    ReducePercentile95,
    /// Reduce by computing the 50th percentile of data points across time series
    /// for each alignment period.
    #[serde(rename = "REDUCE_PERCENTILE_50")]
    ReducePercentile50,
    /// Reduce by computing the 5th percentile of data points across time series
    /// for each alignment period.
    #[serde(rename = "REDUCE_PERCENTILE_05")]
    ReducePercentile05,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// Specifies an ordering relationship on two arguments, called `left` and
/// `right`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum ComparisonType {
    /// No ordering relationship is specified.
    #[default]
    #[serde(rename = "COMPARISON_UNSPECIFIED")]
    ComparisonUnspecified,
    /// True if the left argument is greater than the right argument.
    #[serde(rename = "COMPARISON_GT")]
    ComparisonGt,
    /// True if the left argument is greater than or equal to the right argument.
    #[serde(rename = "COMPARISON_GE")]
    ComparisonGe,
    /// True if the left argument is less than the right argument.
    #[serde(rename = "COMPARISON_LT")]
    ComparisonLt,
    /// True if the left argument is less than or equal to the right argument.
    #[serde(rename = "COMPARISON_LE")]
    ComparisonLe,
    /// True if the left argument is equal to the right argument.
    #[serde(rename = "COMPARISON_EQ")]
    ComparisonEq,
    /// True if the left argument is not equal to the right argument.
    #[serde(rename = "COMPARISON_NE")]
    ComparisonNe,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// Operators for combining conditions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum ConditionCombinerType {
    /// An unspecified combiner.
    #[default]
    #[serde(rename = "COMBINE_UNSPECIFIED")]
    CombineUnspecified,
    /// Combine conditions using the logical `AND` operator. An
    /// incident is created only if all the conditions are met
    /// simultaneously.
    #[serde(rename = "AND")]
    And,
    /// Combine conditions using the logical `OR` operator. An incident
    /// is created if any of the listed conditions is met.
    #[serde(rename = "OR")]
    Or,
    /// Combine conditions using logical `AND` operator, but unlike the regular
    /// `AND` option, an incident is created only if all conditions are met
    /// simultaneously on at least one resource.
    #[serde(rename = "AND_WITH_MATCHING_RESOURCE")]
    AndWithMatchingResource,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// Controls which fields are returned by `ListTimeSeries`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum TimeSeriesView {
    /// Returns the identity of the metric(s), the time series,
    /// and the time series data.
    #[default]
    #[serde(rename = "FULL")]
    Full,
    /// Returns the identity of the metric and the time series resource,
    /// but not the time series data.
    #[serde(rename = "HEADERS")]
    Headers,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// Indicates whether the channel has been verified or not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum VerificationStatus {
    /// Sentinel value used to indicate that the state is unknown, omitted, or
    /// is not applicable.
    #[default]
    #[serde(rename = "VERIFICATION_STATUS_UNSPECIFIED")]
    VerificationStatusUnspecified,
    /// The channel has yet to be verified and requires verification to function.
    #[serde(rename = "UNVERIFIED")]
    Unverified,
    /// It has been proven that notifications can be received on this
    /// notification channel.
    #[serde(rename = "VERIFIED")]
    Verified,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// A `CalendarPeriod` represents the abstract concept of a time period that has
/// a canonical start.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum CalendarPeriod {
    /// Undefined period, raises an error.
    #[default]
    #[serde(rename = "CALENDAR_PERIOD_UNSPECIFIED")]
    CalendarPeriodUnspecified,
    /// A day.
    #[serde(rename = "DAY")]
    Day,
    /// A week. Weeks begin on Monday, following
    /// [ISO 8601](https://en.wikipedia.org/wiki/ISO_week_date).
    #[serde(rename = "WEEK")]
    Week,
    /// A fortnight. The first calendar fortnight of the year begins at the start
    /// of week 1 according to
    /// [ISO 8601](https://en.wikipedia.org/wiki/ISO_week_date).
    #[serde(rename = "FORTNIGHT")]
    Fortnight,
    /// A month.
    #[serde(rename = "MONTH")]
    Month,
    /// A quarter. Quarters start on dates 1-Jan, 1-Apr, 1-Jul, and 1-Oct of each
    /// year.
    #[serde(rename = "QUARTER")]
    Quarter,
    /// A half-year. Half-years start on dates 1-Jan and 1-Jul.
    #[serde(rename = "HALF")]
    Half,
    /// A year.
    #[serde(rename = "YEAR")]
    Year,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// `ServiceLevelObjective.View` determines what form of
/// `ServiceLevelObjective` is returned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum ServiceLevelObjectiveView {
    /// Same as FULL.
    #[default]
    #[serde(rename = "VIEW_UNSPECIFIED")]
    ViewUnspecified,
    /// Return the embedded `ServiceLevelIndicator` in the form in which it was
    /// defined.
    #[serde(rename = "FULL")]
    Full,
    /// For `ServiceLevelIndicator`s using `BasicSli` articulation, instead
    /// return the `ServiceLevelIndicator` with its mode of computation fully
    /// spelled out as a `RequestBasedSli`.
    #[serde(rename = "EXPLICIT")]
    Explicit,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// The regions from which an Uptime check can be run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum UptimeCheckRegion {
    /// Default value if no region is specified. Will result in Uptime checks
    /// running from all regions.
    #[default]
    #[serde(rename = "REGION_UNSPECIFIED")]
    RegionUnspecified,
    /// Allows checks to run from locations within the United States of America.
    #[serde(rename = "USA")]
    Usa,
    /// Allows checks to run from locations within the continent of Europe.
    #[serde(rename = "EUROPE")]
    Europe,
    /// Allows checks to run from locations within the continent of South
    /// America.
    #[serde(rename = "SOUTH_AMERICA")]
    SouthAmerica,
    /// Allows checks to run from locations within the Asia Pacific area (ex:
    /// Singapore).
    #[serde(rename = "ASIA_PACIFIC")]
    AsiaPacific,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// The supported resource types that can be used as values of
/// `group_resource.resource_type`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum GroupResourceType {
    /// Default value (not valid).
    #[default]
    #[serde(rename = "RESOURCE_TYPE_UNSPECIFIED")]
    ResourceTypeUnspecified,
    /// A group of instances from Google Cloud Platform (GCP) or
    /// Amazon Web Services (AWS).
    #[serde(rename = "INSTANCE")]
    Instance,
    /// A group of Amazon ELB load balancers.
    #[serde(rename = "AWS_ELB_LOAD_BALANCER")]
    AwsElbLoadBalancer,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// The HTTP request method options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum RequestMethod {
    /// No request method specified.
    #[default]
    #[serde(rename = "METHOD_UNSPECIFIED")]
    MethodUnspecified,
    /// GET request.
    #[serde(rename = "GET")]
    Get,
    /// POST request.
    #[serde(rename = "POST")]
    Post,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// Header options corresponding to the Content-Type of the body in HTTP
/// requests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum ContentType {
    /// No content type specified. If the request method is POST, an
    /// unspecified content type results in a check creation rejection.
    #[default]
    #[serde(rename = "TYPE_UNSPECIFIED")]
    TypeUnspecified,
    /// `body` is in URL-encoded form. Equivalent to setting the `Content-Type`
    /// to `application/x-www-form-urlencoded` in the HTTP request.
    #[serde(rename = "URL_ENCODED")]
    UrlEncoded,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}

/// Options to perform content matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub enum ContentMatcherOption {
    /// No content matcher type specified (maintained for backward
    /// compatibility, but deprecated for future use).
    /// Treated as `CONTAINS_STRING`.
    #[default]
    #[serde(rename = "CONTENT_MATCHER_OPTION_UNSPECIFIED")]
    ContentMatcherOptionUnspecified,
    /// Selects substring matching. The match succeeds if the output contains
    /// the `content` string.
    #[serde(rename = "CONTAINS_STRING")]
    ContainsString,
    /// Selects negation of substring matching. The match succeeds if the
    /// output does _NOT_ contain the `content` string.
    #[serde(rename = "NOT_CONTAINS_STRING")]
    NotContainsString,
    /// Selects regular-expression matching. The match succeeds of the output
    /// matches the regular expression specified in the `content` string.
    #[serde(rename = "MATCHES_REGEX")]
    MatchesRegex,
    /// Selects negation of regular-expression matching. The match succeeds if
    /// the output does _NOT_ match the regular expression specified in the
    /// `content` string.
    #[serde(rename = "NOT_MATCHES_REGEX")]
    NotMatchesRegex,
    /// A value not known to this version of the client library.
    ///
    /// Services may add new values at any time.
    #[serde(other)]
    UnknownValue,
}
