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

//! Test utilities for the business layer.

use crate::driver::{Driver, DriverOptions};

/// State of a running test.
pub(crate) struct TestContext {
    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes a driver with the default options.
    pub(crate) fn setup() -> Self {
        Self::setup_with_options(DriverOptions::default())
    }

    /// Initializes a driver with the given `opts`.
    pub(crate) fn setup_with_options(opts: DriverOptions) -> Self {
        Self { driver: Driver::new(opts) }
    }

    /// Returns a copy of the driver under test.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }
}
