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

//! Data types exchanged with clients of the service.

use partial_uri_template::{Components, RequiredParameters};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query parameters of a request to decompose a template without binding anything.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub(crate) struct ComponentsQuery {
    /// The raw URI template.
    pub(crate) template: String,
}

/// Request to expand a template with named bindings.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub(crate) struct ExpandRequest {
    /// The raw URI template.
    pub(crate) template: String,

    /// Values for the variables to bind, keyed by variable name.
    #[serde(default)]
    pub(crate) bindings: BTreeMap<String, String>,
}

/// Request to expand a template by binding values in variable order.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub(crate) struct PositionalExpandRequest {
    /// The raw URI template.
    pub(crate) template: String,

    /// Values for the variables to bind, in order of first appearance in the template.
    #[serde(default)]
    pub(crate) values: Vec<String>,
}

/// Description of an operation that the link being built will afford.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub(crate) struct Operation {
    /// Names of the variables that the operation cannot do without.
    #[serde(default)]
    pub(crate) required: Vec<String>,
}

impl RequiredParameters for Operation {
    fn required_parameters(&self) -> Vec<&str> {
        self.required.iter().map(String::as_str).collect()
    }
}

/// Request to drop the query variables that none of the `operations` need.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub(crate) struct StripRequest {
    /// The raw URI template.
    pub(crate) template: String,

    /// Operations whose required variables must survive.
    #[serde(default)]
    pub(crate) operations: Vec<Operation>,
}

/// A link derived from a template, along with its individual components.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct LinkResponse {
    /// The full rendered link, possibly still containing template expressions.
    pub(crate) href: String,

    /// Everything before the query.
    pub(crate) base_uri: String,

    /// The expanded portion of the query.
    pub(crate) query_head: String,

    /// Names of the query variables that remain unbound.
    pub(crate) query_tail: Vec<String>,

    /// The fragment, if any.
    pub(crate) fragment_identifier: String,

    /// Whether `href` still needs expansion before it can be followed.
    pub(crate) templated: bool,
}

impl From<Components> for LinkResponse {
    fn from(components: Components) -> Self {
        Self {
            href: components.to_string(),
            base_uri: components.base_uri().to_owned(),
            query_head: components.query_head().to_owned(),
            query_tail: components.query_tail().to_vec(),
            fragment_identifier: components.fragment_identifier().to_owned(),
            templated: components.has_variables(),
        }
    }
}
