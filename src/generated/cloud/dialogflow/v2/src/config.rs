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

//! The bundled client configuration for each service.
//!
//! Each file contains the default timeouts, retryable status codes, and page
//! sizes for one service. Applications override these values with
//! `with_client_config()` in the client builders.

pub(crate) const AGENTS: &str = include_str!("config/agents_client_config.json");

pub(crate) const CONTEXTS: &str = include_str!("config/contexts_client_config.json");

pub(crate) const ENTITY_TYPES: &str = include_str!("config/entity_types_client_config.json");

pub(crate) const INTENTS: &str = include_str!("config/intents_client_config.json");

pub(crate) const SESSION_ENTITY_TYPES: &str = include_str!("config/session_entity_types_client_config.json");
