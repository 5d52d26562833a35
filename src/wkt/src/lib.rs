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

//! Well-known-types for the GAPIC clients.
//!
//! Google Cloud APIs use a number of well-known types. These typically have
//! custom JSON encoding, and may provide conversion functions to and from
//! native or commonly used Rust types.

mod any;
pub use crate::any::*;
mod duration;
pub use crate::duration::*;
mod empty;
pub use crate::empty::*;
mod field_mask;
pub use crate::field_mask::*;
mod rstruct;
pub use crate::rstruct::*;
mod timestamp;
pub use crate::timestamp::*;
pub mod message;

#[doc(hidden)]
pub mod internal {
    /// Used by the generated code to omit fields with default values.
    pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
        *value == T::default()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn defaults() {
            assert!(is_default(&0_i32));
            assert!(is_default(&String::new()));
            assert!(!is_default(&1.5_f64));
            assert!(!is_default(&"abc".to_string()));
        }
    }
}
