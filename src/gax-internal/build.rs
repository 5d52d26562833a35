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


// Captures the compiler version for the `x-goog-api-client` header.
fn main() {
    let out_dir = std::env::var_os("OUT_DIR").expect("cargo always sets OUT_DIR");
    let version = rustc_version::version_meta().expect("cannot query the rustc version");
    let contents = format!(
        "pub(crate) const RUSTC_VERSION: &str = \"rustc {}\";\n",
        version.semver
    );
    std::fs::write(std::path::Path::new(&out_dir).join("build_env.rs"), contents)
        .expect("cannot write build_env.rs");
}
