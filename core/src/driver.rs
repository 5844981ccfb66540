// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Generic business logic for any service.
//!
//! Every service should implement its own `Driver` type, holding whatever in-memory state it
//! needs, and implement its operations as methods on it.
//!
//! Every operation implemented in the `Driver` should consume `self`.  The driver is cheap to
//! clone, and consuming `self` keeps every request working on its own handle to the shared
//! state.

/// Business logic errors.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum DriverError {
    /// Indicates an error in the input data.
    #[error("{0}")]
    InvalidInput(String),
}

/// Result type for this module.
pub type DriverResult<T> = Result<T, DriverError>;
