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

//! Assembly of the components of a URI out of the parts of a template.

use crate::Components;
use crate::encode::encode_value;
use crate::model::{Bindings, Part, RequiredFilter, Section, VariableType};
use log::debug;

/// Accumulators for the components of the URI being assembled.
struct Assembler<'a> {
    /// Selects which unresolved query variables to keep.
    filter: &'a RequiredFilter,

    /// Scheme, authority and path.
    base: String,

    /// Expanded query pairs.
    query_head: String,

    /// Names of unresolved query variables.
    query_tail: Vec<String>,

    /// Fragment identifier.
    fragment: String,
}

impl<'a> Assembler<'a> {
    /// Creates an empty assembler that applies `filter` to unresolved query variables.
    fn new(filter: &'a RequiredFilter) -> Self {
        Self {
            filter,
            base: String::new(),
            query_head: String::new(),
            query_tail: vec![],
            fragment: String::new(),
        }
    }

    /// Returns the region that simple variables write to, which is the last one that received
    /// content.
    fn open_region(&mut self) -> &mut String {
        if !self.fragment.is_empty() {
            &mut self.fragment
        } else if !self.query_head.is_empty() {
            &mut self.query_head
        } else {
            &mut self.base
        }
    }

    /// Copies the literal `text` into the region for `section`.
    ///
    /// A query literal always leaves the query head starting with `?`: its leading `?` or `&` is
    /// rewritten to match whether the head already has content.
    fn literal(&mut self, text: &str, section: Section) {
        match section {
            Section::Base => self.base.push_str(text),
            Section::Query => match text.strip_prefix(['?', '&']) {
                Some(rest) => {
                    self.query_head.push(if self.query_head.is_empty() { '?' } else { '&' });
                    self.query_head.push_str(rest);
                }
                None => self.query_head.push_str(text),
            },
            Section::Fragment => self.fragment.push_str(text),
        }
    }

    /// Expands the variable `name` of type `var_type` with `value`.
    fn bound(&mut self, var_type: VariableType, name: &str, value: &str) {
        let value = encode_value(value);
        match var_type {
            VariableType::Simple => self.open_region().push_str(&value),
            VariableType::PathSegment => {
                self.base.push('/');
                self.base.push_str(&value);
            }
            VariableType::QueryParam | VariableType::QueryParamContinued => {
                self.query_head.push(if self.query_head.is_empty() { '?' } else { '&' });
                self.query_head.push_str(name);
                self.query_head.push('=');
                self.query_head.push_str(&value);
            }
            VariableType::Fragment => {
                self.fragment.push('#');
                self.fragment.push_str(&value);
            }
        }
    }

    /// Keeps the variable `name` of type `var_type` unexpanded, unless it is a query variable
    /// rejected by the filter.
    ///
    /// Unbound simple variables go to the open region like bound ones, not always to the base.
    fn unbound(&mut self, var_type: VariableType, name: &str) {
        let expression = format!("{{{}{}}}", var_type.operator(), name);
        match var_type {
            VariableType::Simple => self.open_region().push_str(&expression),
            VariableType::PathSegment => self.base.push_str(&expression),
            VariableType::QueryParam | VariableType::QueryParamContinued => {
                if !self.filter.admits(name) {
                    debug!("Stripping optional query variable {}", name);
                } else if !self.query_tail.iter().any(|n| n == name) {
                    self.query_tail.push(name.to_owned());
                }
            }
            VariableType::Fragment => self.fragment.push_str(&expression),
        }
    }

    /// Consumes the assembler and returns the components it accumulated.
    fn finish(self) -> Components {
        Components::new(self.base, self.query_head, self.query_tail, self.fragment)
    }
}

/// Assembles the components of a URI by walking `parts` in order, expanding the variables that
/// have a value in `bindings` and keeping the others as template syntax subject to `filter`.
pub(crate) fn assemble(parts: &[Part], bindings: &Bindings, filter: &RequiredFilter) -> Components {
    let mut assembler = Assembler::new(filter);
    for part in parts {
        match part {
            Part::Literal { text, section } => assembler.literal(text, *section),
            Part::VariableGroup { var_type, names, .. } => {
                for name in names {
                    match bindings.get(name) {
                        Some(value) => assembler.bound(*var_type, name, value),
                        None => assembler.unbound(*var_type, name),
                    }
                }
            }
        }
    }
    assembler.finish()
}
