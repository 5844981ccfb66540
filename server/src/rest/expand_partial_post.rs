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

//! API to expand a template with whichever bindings are known so far.

use crate::driver::Driver;
use crate::model::{ExpandRequest, LinkResponse};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use partial_uri_core::rest::RestError;
use partial_uri_template::Bindings;

/// POST handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(request): Json<ExpandRequest>,
) -> Result<impl IntoResponse, RestError> {
    let bindings = Bindings::from(request.bindings);
    let components = driver.expand_partially(&request.template, &bindings).await?;
    Ok(Json(LinkResponse::from(components)))
}
