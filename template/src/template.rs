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

//! The `PartialUriTemplate` type.

use crate::assemble::assemble;
use crate::model::{Bindings, Part, RequiredFilter};
use crate::parse::tokenize;
use crate::{Components, RequiredParameters, TemplateError, TemplateResult};
use serde::de::Visitor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A URI template that can be expanded with any subset of its variables.
///
/// Variables that do not receive a value during expansion are kept as template syntax in the
/// result, no matter if they are required or not.  The template is immutable once parsed, so it
/// can be expanded any number of times, including concurrently.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartialUriTemplate {
    /// The template string as given at construction time.
    raw: String,

    /// The parts that make up the template, in order.
    parts: Vec<Part>,

    /// Names of all variables, each listed once in order of first appearance.
    variable_names: Vec<String>,
}

impl PartialUriTemplate {
    /// Parses the template `s`, which must not be empty.
    pub fn new<S: Into<String>>(s: S) -> TemplateResult<Self> {
        let raw = s.into();
        let parts = tokenize(&raw)?;

        let mut variable_names: Vec<String> = vec![];
        for part in &parts {
            if let Part::VariableGroup { names, .. } = part {
                for name in names {
                    if !variable_names.contains(name) {
                        variable_names.push(name.clone());
                    }
                }
            }
        }

        Ok(Self { raw, parts, variable_names })
    }

    /// Returns the template string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parts that make up the template.
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Returns the names of all variables in order of first appearance.
    pub fn variable_names(&self) -> &[String] {
        &self.variable_names
    }

    /// Returns the template as components, without expanding any variable.
    pub fn as_components(&self) -> Components {
        assemble(&self.parts, &Bindings::new(), &RequiredFilter::Unfiltered)
    }

    /// Expands the variables that have a value in `bindings`, keeping all others.
    pub fn expand_partially(&self, bindings: &Bindings) -> Components {
        assemble(&self.parts, bindings, &RequiredFilter::Unfiltered)
    }

    /// Expands the template using `bindings`, which must not be empty.
    ///
    /// Variables without a value are kept as template syntax, exactly as `expand_partially`
    /// does.  This is meant for callers that believe they supplied all values that matter.
    pub fn expand(&self, bindings: &Bindings) -> TemplateResult<Components> {
        if bindings.is_empty() {
            return Err(TemplateError::InvalidArgument(
                "Expansion requires at least one binding".to_owned(),
            ));
        }
        Ok(self.expand_partially(bindings))
    }

    /// Expands the template by assigning `values` to the variables in their order of first
    /// appearance.
    ///
    /// There must be at least one value.  Variables beyond the number of supplied values are
    /// kept as template syntax and excess values are ignored.
    pub fn expand_positional<S: AsRef<str>>(&self, values: &[S]) -> TemplateResult<Components> {
        if values.is_empty() {
            return Err(TemplateError::InvalidArgument(
                "Expansion requires at least one value".to_owned(),
            ));
        }
        let bindings = self
            .variable_names
            .iter()
            .zip(values)
            .map(|(name, value)| (name.as_str(), value.as_ref()))
            .collect::<Bindings>();
        Ok(self.expand_partially(&bindings))
    }

    /// Removes all query variables whose names are not in `required`, keeping the others
    /// unexpanded.
    ///
    /// Simple, path segment and fragment variables are never removed.
    pub fn strip_optional_variables<I, S>(&self, required: I) -> Components
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let required = required.into_iter().map(Into::into).collect::<BTreeSet<String>>();
        assemble(&self.parts, &Bindings::new(), &RequiredFilter::RequireOnly(required))
    }

    /// Removes all query variables that are not required by any of the given `operations`.
    ///
    /// If `operations` is empty, nothing is removed.
    pub fn strip_optional_variables_for(
        &self,
        operations: &[&dyn RequiredParameters],
    ) -> Components {
        if operations.is_empty() {
            return self.as_components();
        }
        let required = operations
            .iter()
            .flat_map(|operation| operation.required_parameters())
            .map(str::to_owned)
            .collect::<BTreeSet<String>>();
        assemble(&self.parts, &Bindings::new(), &RequiredFilter::RequireOnly(required))
    }
}

impl FromStr for PartialUriTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartialUriTemplate::new(s)
    }
}

impl fmt::Display for PartialUriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for PartialUriTemplate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

/// A deserialization visitor for a `PartialUriTemplate`.
struct PartialUriTemplateVisitor;

impl Visitor<'_> for PartialUriTemplateVisitor {
    type Value = PartialUriTemplate;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a URI template string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        PartialUriTemplate::new(v).map_err(|e| E::custom(e.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        PartialUriTemplate::new(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for PartialUriTemplate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_string(PartialUriTemplateVisitor)
    }
}
