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

//! REST interface for the partial URI service.

use crate::driver::Driver;
use axum::Router;

mod components_get;
mod expand_partial_post;
mod expand_positional_post;
mod expand_post;
mod strip_post;
#[cfg(test)]
mod testutils;

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::{get, post};
    Router::new()
        .route("/api/v1/components", get(components_get::handler))
        .route("/api/v1/expand", post(expand_post::handler))
        .route("/api/v1/expand/partial", post(expand_partial_post::handler))
        .route("/api/v1/expand/positional", post(expand_positional_post::handler))
        .route("/api/v1/strip", post(strip_post::handler))
        .with_state(driver)
}
