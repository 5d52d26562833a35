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


//! Telemetry header helpers.

/// Generated libraries create one static instance of this struct and use it
/// to lazy initialize the `x-goog-api-client` header value.
#[derive(Debug, PartialEq)]
pub struct XGoogApiClient {
    pub name: &'static str,
    pub library_type: &'static str,
    pub version: &'static str,
}

/// The library type for generated clients.
pub const GAPIC: &str = "gapic";

mod build_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/build_env.rs"));

    pub(crate) const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
}

impl XGoogApiClient {
    /// Format the struct as needed for the `x-goog-api-client` header.
    ///
    /// The header identifies the Rust compiler, the runtime version, the
    /// REST transport, and the client library.
    pub fn header_value(&self) -> String {
        let gax_version = build_info::PKG_VERSION;
        format!(
            "gl-rust/{} gax/{gax_version} rest/{gax_version}-reqwest {}/{}",
            rustc_version(),
            self.library_type,
            self.version
        )
    }
}

// `RUSTC_VERSION` looks like "rustc 1.85.0 (4d91de4e4 2025-02-17)".
fn rustc_version() -> &'static str {
    let version = build_info::RUSTC_VERSION;
    version.strip_prefix("rustc ").unwrap_or(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn breakdown(formatted: &str) -> HashMap<&str, &str> {
        formatted
            .split(' ')
            .filter_map(|v| v.split_once('/'))
            .collect()
    }

    #[test]
    fn format() {
        let header = XGoogApiClient {
            name: "unused",
            version: "1.2.3",
            library_type: GAPIC,
        };
        let formatted = header.header_value();
        let fields = breakdown(&formatted);
        assert_eq!(fields.get(GAPIC), Some(&"1.2.3"), "{formatted}");
        assert_eq!(fields.get("gax"), Some(&build_info::PKG_VERSION), "{formatted}");
        let rest = format!("{}-reqwest", build_info::PKG_VERSION);
        assert_eq!(fields.get("rest"), Some(&rest.as_str()), "{formatted}");
        assert!(!fields.contains_key("grpc"), "{formatted}");

        let got = fields.get("gl-rust").copied().unwrap_or_default();
        assert!(
            !got.is_empty() && build_info::RUSTC_VERSION.contains(got),
            "mismatched rustc version {} and {got}",
            build_info::RUSTC_VERSION
        );
    }

    #[test]
    fn strip_rustc() {
        assert!(!rustc_version().starts_with("rustc "), "{}", rustc_version());
    }
}
