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


//! Types for the `google.longrunning` API.
//!
//! Services that start long-running operations return an [Operation][model::Operation]
//! and offer `GetOperation`, `CancelOperation` and `DeleteOperation` RPCs to
//! manage it. The client libraries for those services embed these messages,
//! this crate only contains their definitions.

/// The messages used by long-running operations.
pub mod model;
