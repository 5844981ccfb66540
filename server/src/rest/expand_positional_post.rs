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

//! API to expand a template by binding values in variable order.

use crate::driver::Driver;
use crate::model::{LinkResponse, PositionalExpandRequest};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use partial_uri_core::rest::RestError;

/// POST handler for this API.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Json(request): Json<PositionalExpandRequest>,
) -> Result<impl IntoResponse, RestError> {
    let components = driver.expand_positional(&request.template, &request.values).await?;
    Ok(Json(LinkResponse::from(components)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http;
    use partial_uri_core::rest::testutils::*;

    fn route() -> (http::Method, String) {
        (http::Method::POST, "/api/v1/expand/positional".to_owned())
    }

    fn request(template: &str, values: &[&str]) -> PositionalExpandRequest {
        PositionalExpandRequest {
            template: template.to_owned(),
            values: values.iter().map(|v| (*v).to_owned()).collect(),
        }
    }

    #[tokio::test]
    async fn test_all_values() {
        let context = TestContext::setup();

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_json(request("/repos{/owner,repo}{?ref}", &["jmmv", "iii-iv", "main"]))
            .await
            .expect_json::<LinkResponse>()
            .await;
        assert_eq!("/repos/jmmv/iii-iv?ref=main", response.href);
        assert!(!response.templated);
    }

    #[tokio::test]
    async fn test_fewer_values_than_variables() {
        let context = TestContext::setup();

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_json(request("/repos{/owner,repo}{?ref}", &["jmmv"]))
            .await
            .expect_json::<LinkResponse>()
            .await;
        assert_eq!("/repos/jmmv{/repo}{?ref}", response.href);
        assert!(response.templated);
    }

    #[tokio::test]
    async fn test_repeated_variable_takes_one_value() {
        let context = TestContext::setup();

        let response = OneShotBuilder::new(context.into_app(), route())
            .send_json(request("/a{/x}/b{/x}{?y}", &["1", "2", "3"]))
            .await
            .expect_json::<LinkResponse>()
            .await;
        assert_eq!("/a/1/b/1?y=2", response.href);
    }

    #[tokio::test]
    async fn test_no_values() {
        let context = TestContext::setup();

        OneShotBuilder::new(context.into_app(), route())
            .send_json(request("/repos{/owner}", &[]))
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("at least one value")
            .await;
    }

    test_payload_must_be_json!(TestContext::setup().into_app(), route());
}
