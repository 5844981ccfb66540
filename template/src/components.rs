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

//! The `Components` type.

use crate::{PartialUriTemplate, TemplateResult};
use std::fmt;

/// The result of expanding a template, split into the regions of a URI.
///
/// Any of the regions may still contain template syntax for the variables that did not receive
/// a value during expansion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Components {
    /// Scheme, authority and path.  May contain `{name}` or `{/name}` style variables.
    base_uri: String,

    /// Start of the query with already-expanded `name=value` pairs, beginning with `?`.  May be
    /// empty.
    query_head: String,

    /// Names of the query variables that remain unexpanded, in order of appearance.
    query_tail: Vec<String>,

    /// Fragment identifier beginning with `#`.  May contain a `{#name}` variable or be empty.
    fragment_identifier: String,
}

impl Components {
    /// Creates a new set of components from its regions.
    pub(crate) fn new(
        base_uri: String,
        query_head: String,
        query_tail: Vec<String>,
        fragment_identifier: String,
    ) -> Self {
        Self { base_uri, query_head, query_tail, fragment_identifier }
    }

    /// Returns the base URI, which may still contain path variables.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the expanded part of the query, which may be empty.
    pub fn query_head(&self) -> &str {
        &self.query_head
    }

    /// Returns the names of the query variables that are still unexpanded.
    pub fn query_tail(&self) -> &[String] {
        &self.query_tail
    }

    /// Returns the full query: the expanded pairs followed by a `{?...}` or `{&...}` expression
    /// for the unexpanded variables, if any.
    pub fn query(&self) -> String {
        if self.query_tail.is_empty() {
            return self.query_head.clone();
        }

        let tail = self.query_tail.join(",");
        if self.query_head.is_empty() {
            format!("{{?{}}}", tail)
        } else {
            format!("{}{{&{}}}", self.query_head, tail)
        }
    }

    /// Returns the fragment identifier, which may be empty.
    pub fn fragment_identifier(&self) -> &str {
        &self.fragment_identifier
    }

    /// Returns true if the base URI still contains variables.
    pub fn is_base_uri_templated(&self) -> bool {
        contains_expression(&self.base_uri)
    }

    /// Returns true if any of the components still contains variables.
    pub fn has_variables(&self) -> bool {
        self.is_base_uri_templated()
            || contains_expression(&self.query_head)
            || !self.query_tail.is_empty()
            || contains_expression(&self.fragment_identifier)
    }

    /// Parses the rendered components as a new template so that the variables that remain can
    /// be expanded later on.
    pub fn to_template(&self) -> TemplateResult<PartialUriTemplate> {
        PartialUriTemplate::new(&self.to_string())
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.base_uri, self.query(), self.fragment_identifier)
    }
}

/// Returns true if `s` contains something that looks like a `{...}` expression.
fn contains_expression(s: &str) -> bool {
    match s.find('{') {
        Some(i) => s[i..].contains('}'),
        None => false,
    }
}
