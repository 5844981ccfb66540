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

//! Data types that describe a parsed template and the inputs to its expansion.

use std::collections::{BTreeMap, BTreeSet};

/// The kind of a variable, as determined by the operator that introduces its expression.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VariableType {
    /// A variable without operator, like `{name}`.
    Simple,

    /// A path segment variable, like `{/name}`.
    PathSegment,

    /// A variable that starts the query, like `{?name}`.
    QueryParam,

    /// A variable that continues an existing query, like `{&name}`.
    QueryParamContinued,

    /// A fragment variable, like `{#name}`.
    Fragment,
}

impl VariableType {
    /// Maps the operator `op` that follows the opening brace of an expression to the type of
    /// the variables in it.  Returns `None` if `op` is not an operator, in which case the
    /// expression holds simple variables.
    pub fn from_operator(op: char) -> Option<VariableType> {
        match op {
            '/' => Some(VariableType::PathSegment),
            '?' => Some(VariableType::QueryParam),
            '&' => Some(VariableType::QueryParamContinued),
            '#' => Some(VariableType::Fragment),
            _ => None,
        }
    }

    /// Returns the operator that introduces an expression for this type of variable.
    pub fn operator(self) -> &'static str {
        match self {
            VariableType::Simple => "",
            VariableType::PathSegment => "/",
            VariableType::QueryParam => "?",
            VariableType::QueryParamContinued => "&",
            VariableType::Fragment => "#",
        }
    }

    /// Returns true if this type of variable expands to a `name=value` query pair.
    pub fn is_query(self) -> bool {
        matches!(self, VariableType::QueryParam | VariableType::QueryParamContinued)
    }
}

/// Region of the URI a piece of the template belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Section {
    /// Everything before the query and the fragment: scheme, authority and path.
    Base,

    /// The query, starting at the first `?`.
    Query,

    /// The fragment identifier, starting at the first `#`.
    Fragment,
}

/// A piece of a parsed template.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Part {
    /// Literal text, copied verbatim into the section it belongs to.
    Literal {
        /// The text as it appears in the template.
        text: String,

        /// The region of the URI this text belongs to.
        section: Section,
    },

    /// A variable expression holding one or more variables of the same type.
    VariableGroup {
        /// The type shared by all variables in the group.
        var_type: VariableType,

        /// Names of the variables in the order they appear in the expression.
        names: Vec<String>,

        /// The expression as it appears in the template, braces included.
        raw: String,
    },
}

impl Part {
    /// Returns the text of this part as it appeared in the template.
    pub fn raw(&self) -> &str {
        match self {
            Part::Literal { text, .. } => text,
            Part::VariableGroup { raw, .. } => raw,
        }
    }
}

/// Values to assign to the variables of a template during expansion.
///
/// Bindings need not cover all variables of a template and may contain names that the template
/// does not know about, which are ignored.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Bindings(BTreeMap<String, String>);

impl Bindings {
    /// Creates an empty set of bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a binding of `name` to `value`, returning the modified bindings.
    pub fn with<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Binds `name` to `value`, replacing any previous value.
    pub fn insert<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.0.insert(name.into(), value.into());
    }

    /// Gets the value bound to `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns true if there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of bindings.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(n, v)| (n.into(), v.into())).collect())
    }
}

impl<N: Into<String>, V: Into<String>, const L: usize> From<[(N, V); L]> for Bindings {
    fn from(pairs: [(N, V); L]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Bindings {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

/// Selects which unresolved query variables survive an expansion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RequiredFilter {
    /// Keeps every unresolved query variable.
    Unfiltered,

    /// Keeps only the unresolved query variables whose names are in the set.
    RequireOnly(BTreeSet<String>),
}

impl RequiredFilter {
    /// Returns true if an unresolved query variable called `name` has to be kept.
    pub fn admits(&self, name: &str) -> bool {
        match self {
            RequiredFilter::Unfiltered => true,
            RequiredFilter::RequireOnly(names) => names.contains(name),
        }
    }
}
