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


/// The body of the default stub implementations.
///
/// The stub traits provide a default implementation for each RPC so new RPCs
/// do not break existing mocks. The transports override all the methods, so
/// only incomplete mocks reach this function.
pub async fn unimplemented_stub<T: Send>() -> gax::Result<gax::response::Response<T>> {
    unimplemented!("{UNIMPLEMENTED}");
}

pub const UNIMPLEMENTED: &str = concat!(
    "the stub traits provide a default implementation for each RPC. ",
    "The client library transports override every method, so this panic ",
    "only happens in tests that mock the stub. Verify that your mock ",
    "implements all the methods used by the code under test."
);
