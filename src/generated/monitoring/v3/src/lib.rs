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

//! Google Cloud Client Libraries for Rust - Cloud Monitoring API
//!
//! This crate contains traits, types, and functions to interact with the
//! Cloud Monitoring API. Most applications will use the structs defined in the
//! [client] module. More specifically:
//!
//! * [AlertPolicyService](client/struct.AlertPolicyService.html)
//! * [GroupService](client/struct.GroupService.html)
//! * [MetricService](client/struct.MetricService.html)
//! * [NotificationChannelService](client/struct.NotificationChannelService.html)
//! * [ServiceMonitoringService](client/struct.ServiceMonitoringService.html)
//! * [UptimeCheckService](client/struct.UptimeCheckService.html)

#![allow(deprecated)]

/// The messages and enums that are part of this client library.
pub mod model;

pub use gax::Result;
pub use gax::error::Error;

#[allow(rustdoc::invalid_html_tags)]
#[allow(rustdoc::redundant_explicit_links)]
pub mod stub;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

#[doc(hidden)]
pub(crate) mod tracing;

#[doc(hidden)]
pub(crate) mod transport;

mod config;

/// The default host used by the service.
const DEFAULT_HOST: &str = "https://monitoring.googleapis.com";

/// The OAuth scopes requested by the default credentials of the clients in
/// this crate.
pub const ALL_SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/cloud-platform",
    "https://www.googleapis.com/auth/monitoring",
    "https://www.googleapis.com/auth/monitoring.read",
    "https://www.googleapis.com/auth/monitoring.write",
];

pub(crate) mod info {
    const NAME: &str = env!("CARGO_PKG_NAME");
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    lazy_static::lazy_static! {
        pub(crate) static ref X_GOOG_API_CLIENT_HEADER: String = {
            let ac = gaxi::api_header::XGoogApiClient{
                name:          NAME,
                version:       VERSION,
                library_type:  gaxi::api_header::GAPIC,
            };
            ac.header_value()
        };
    }
}
