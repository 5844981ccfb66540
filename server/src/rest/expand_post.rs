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

//! API to fully expand a template with named bindings.

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
    let components = driver.expand(&request.template, &bindings).await?;
    Ok(Json(LinkResponse::from(components)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::testutils::*;
    use axum::http;
    use partial_uri_core::rest::testutils::*;
    use std::collections::BTreeMap;

    fn route() -> (http::Method, String) {
        (http::Method::POST, "/api/v1/expand".to_owned())
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup();

        let request = ExpandRequest {
            template: "http://example.com/events{/city}/concerts{?eventName,location}{#section}"
                .to_owned(),
            bindings: BTreeMap::from([
                ("city".to_owned(), "Wiesbaden".to_owned()),
                ("location".to_owned(), "Schlachthof".to_owned()),
                ("unused".to_owned(), "ignored".to_owned()),
            ]),
        };
        let response = OneShotBuilder::new(context.into_app(), route())
            .send_json(request)
            .await
            .expect_json::<LinkResponse>()
            .await;
        let exp_response = LinkResponse {
            href: "http://example.com/events/Wiesbaden/concerts?location=Schlachthof{&eventName}{#section}"
                .to_owned(),
            base_uri: "http://example.com/events/Wiesbaden/concerts".to_owned(),
            query_head: "?location=Schlachthof".to_owned(),
            query_tail: vec!["eventName".to_owned()],
            fragment_identifier: "{#section}".to_owned(),
            templated: true,
        };
        assert_eq!(exp_response, response);
    }

    #[tokio::test]
    async fn test_encodes_values() {
        let context = TestContext::setup();

        let request = ExpandRequest {
            template: "/files{/path}{?name}".to_owned(),
            bindings: BTreeMap::from([
                ("path".to_owned(), "a/b".to_owned()),
                ("name".to_owned(), "año nuevo".to_owned()),
            ]),
        };
        let response = OneShotBuilder::new(context.into_app(), route())
            .send_json(request)
            .await
            .expect_json::<LinkResponse>()
            .await;
        assert_eq!("/files/a%2Fb?name=a%C3%B1o%20nuevo", response.href);
    }

    #[tokio::test]
    async fn test_empty_bindings() {
        let context = TestContext::setup();

        let request = ExpandRequest { template: "/a{?b}".to_owned(), bindings: BTreeMap::new() };
        OneShotBuilder::new(context.into_app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("at least one binding")
            .await;
    }

    #[tokio::test]
    async fn test_invalid_template() {
        let context = TestContext::setup();

        let request = ExpandRequest {
            template: "/a{+b}".to_owned(),
            bindings: BTreeMap::from([("b".to_owned(), "c".to_owned())]),
        };
        OneShotBuilder::new(context.into_app(), route())
            .send_json(request)
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_error("Unsupported operator '\\+'")
            .await;
    }

    test_payload_must_be_json!(TestContext::setup().into_app(), route());
}
