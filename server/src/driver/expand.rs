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

//! Operations to resolve templates into links.

use crate::driver::{Driver, invalid_input};
use crate::model::Operation;
use partial_uri_core::driver::DriverResult;
use partial_uri_template::{Bindings, Components, RequiredParameters};

impl Driver {
    /// Decomposes `template` into its components without binding any variable.
    pub(crate) async fn components(self, template: &str) -> DriverResult<Components> {
        let template = self.parse(template).await?;
        Ok(template.as_components())
    }

    /// Expands `template` with `bindings`, which must not be empty.
    pub(crate) async fn expand(
        self,
        template: &str,
        bindings: &Bindings,
    ) -> DriverResult<Components> {
        let template = self.parse(template).await?;
        template.expand(bindings).map_err(invalid_input)
    }

    /// Expands `template` with `bindings`, leaving every unbound variable in place.
    pub(crate) async fn expand_partially(
        self,
        template: &str,
        bindings: &Bindings,
    ) -> DriverResult<Components> {
        let template = self.parse(template).await?;
        Ok(template.expand_partially(bindings))
    }

    /// Expands `template` by assigning `values` to its variables in order of appearance.
    pub(crate) async fn expand_positional(
        self,
        template: &str,
        values: &[String],
    ) -> DriverResult<Components> {
        let template = self.parse(template).await?;
        template.expand_positional(values).map_err(invalid_input)
    }

    /// Drops the query variables of `template` that none of the `operations` require.
    pub(crate) async fn strip_optional_variables(
        self,
        template: &str,
        operations: &[Operation],
    ) -> DriverResult<Components> {
        let template = self.parse(template).await?;
        let operations = operations
            .iter()
            .map(|operation| operation as &dyn RequiredParameters)
            .collect::<Vec<&dyn RequiredParameters>>();
        Ok(template.strip_optional_variables_for(&operations))
    }
}
