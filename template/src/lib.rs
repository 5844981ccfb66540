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

//! URI templates that can be expanded partially.
//!
//! A template such as `/customers{/id}{?q,page}` mixes literal text with variable expressions.
//! Unlike a regular URI template expander, `PartialUriTemplate` does not require all variables to
//! be known at once: variables without a value are kept as valid template syntax so that the
//! resulting link can be handed to a client for completion.  For example, binding `id` and `q`
//! in the template above yields `/customers/42?q=smith{&page}`.
//!
//! The supported expressions are a subset of RFC 6570:
//!
//! *   `{name}`: simple string expansion.
//! *   `{/name}`: path segment expansion.
//! *   `{?name}` and `{&name}`: form-style query expansion and continuation.
//! *   `{#name}`: fragment expansion.
//!
//! Every expression can hold a comma-separated list of names.  Values are always treated as
//! opaque data and are percent-encoded before being inserted into the URI.

// Keep these in sync with other top-level files.
#![warn(anonymous_parameters, bad_style, clippy::missing_docs_in_private_items, missing_docs)]
#![warn(unused, unused_extern_crates, unused_import_braces, unused_qualifications)]
#![warn(unsafe_code)]

mod assemble;
mod components;
pub use components::Components;
mod encode;
pub mod model;
pub use model::Bindings;
mod parse;
mod required;
pub use required::RequiredParameters;
mod template;
pub use template::PartialUriTemplate;

/// Template errors.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TemplateError {
    /// Indicates that a caller-supplied argument is not acceptable for the operation.
    #[error("{0}")]
    InvalidArgument(String),

    /// Indicates that the template string has malformed syntax.
    #[error("Invalid template: {0}")]
    Parse(String),
}

/// Result type for this crate.
pub type TemplateResult<T> = Result<T, TemplateError>;
