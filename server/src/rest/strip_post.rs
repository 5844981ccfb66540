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

//! API to remove the query variables that no afforded operation needs.

use crate::driver::Driver;
use crate::model::{LinkResponse, StripRequest};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use partial_uri_core::rest::RestError;

/// POST handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(request): Json<StripRequest>,
) -> Result<impl IntoResponse, RestError> {
    let components =
        driver.strip_optional_variables(&request.template, &request.operations).await?;
    Ok(Json(LinkResponse::from(components)))
}
