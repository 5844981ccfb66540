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

//! Test utilities for the REST API.

use crate::driver::{Driver, DriverOptions};
use crate::rest::app;
use axum::Router;

/// State of a running test.
pub(crate) struct TestContext {
    /// The driver backing the app.
    driver: Driver,

    /// The app under test.
    app: Router,
}

impl TestContext {
    /// Initializes a new app with a fresh template cache.
    pub(crate) fn setup() -> Self {
        let driver = Driver::new(DriverOptions::default());
        let app = app(driver.clone());
        Self { driver, app }
    }

    /// Returns a copy of the app under test, sharing the template cache with other copies.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and returns the app under test.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Returns true if the app has the `raw` template in its cache.
    pub(crate) async fn is_cached(&self, raw: &str) -> bool {
        self.driver.is_cached(raw).await
    }
}
