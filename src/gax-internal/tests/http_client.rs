// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


//! Verify the HTTP client sends the expected requests and maps the responses.

#[cfg(test)]
mod tests {
    use gapic_gax_internal::http::{NoBody, ReqwestClient};
    use gapic_gax_internal::options::ClientConfig;
    use gapic_gax_internal::query_parameter;
    use gax::error::rpc::Code;
    use gax::options::RequestOptions;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    fn test_config() -> ClientConfig {
        use auth::credentials::anonymous::Builder as Anonymous;
        let mut config = ClientConfig::default();
        config.cred = Some(Anonymous::new().build());
        config
    }

    #[tokio::test]
    async fn method_path_and_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/v2/projects/p/instances"),
                request::body(json_decoded(eq(json!({"instanceId": "i"})))),
            ])
            .respond_with(json_encoded(json!({"name": "operations/abc"}))),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::POST, "/v2/projects/p/instances".into());
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(
                builder,
                Some(json!({"instanceId": "i"})),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.body(), &json!({"name": "operations/abc"}));
        Ok(())
    }

    #[tokio::test]
    async fn query_parameters() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v3/projects/p/groups"),
                request::query(url_decoded(contains(("pageSize", "10")))),
                request::query(url_decoded(contains(("filter", "a=b")))),
                request::query(url_decoded(not(contains(key("pageToken"))))),
            ])
            .respond_with(json_encoded(json!({"group": [{"name": "g1"}]}))),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/v3/projects/p/groups".into());
        let builder = query_parameter::add(builder, "pageSize", &10)?;
        let builder = query_parameter::add(builder, "filter", "a=b")?;
        let builder = query_parameter::add(builder, "pageToken", "")?;
        let response = client
            .execute::<NoBody, serde_json::Value>(builder, None::<NoBody>, RequestOptions::default())
            .await?;
        assert_eq!(response.body(), &json!({"group": [{"name": "g1"}]}));
        Ok(())
    }

    #[tokio::test]
    async fn empty_response() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/v1/projects/p/databases/d"))
                .respond_with(status_code(204)),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::DELETE, "/v1/projects/p/databases/d".into());
        let response = client
            .execute::<NoBody, wkt::Empty>(builder, None::<NoBody>, RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), wkt::Empty::default());
        Ok(())
    }

    #[tokio::test]
    async fn streamed_responses_as_array() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/v1/projects/p/databases/d/documents:runQuery",
            ))
            .respond_with(json_encoded(json!([{"readTime": "2025-01-01T00:00:00Z"}, {"skippedResults": 1}]))),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(
            reqwest::Method::POST,
            "/v1/projects/p/databases/d/documents:runQuery".into(),
        );
        let response = client
            .execute::<serde_json::Value, Vec<serde_json::Value>>(
                builder,
                Some(json!({})),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.body().len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        let status = json!({"error": {
            "code": 404,
            "status": "NOT_FOUND",
            "message": "table not found",
        }});
        server.expect(
            Expectation::matching(request::method_path("GET", "/v2/projects/p/instances/i/tables/t"))
                .respond_with(
                    status_code(404)
                        .insert_header("content-type", "application/json")
                        .insert_header("x-test-header", "test-value")
                        .body(status.to_string()),
                ),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(
            reqwest::Method::GET,
            "/v2/projects/p/instances/i/tables/t".into(),
        );
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None::<NoBody>, RequestOptions::default())
            .await
            .unwrap_err();
        let status = err.status().expect("error should have a status");
        assert_eq!(status.code, Code::NotFound);
        assert_eq!(status.message, "table not found");
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(
            err.http_headers().and_then(|h| h.get("x-test-header")),
            Some(&http::HeaderValue::from_static("test-value"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn transport_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/test"))
                .respond_with(status_code(502).body("bad gateway")),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/test".into());
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None::<NoBody>, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        assert_eq!(err.http_payload(), Some(&bytes::Bytes::from("bad gateway")));
        Ok(())
    }

    #[tokio::test]
    async fn deserialization_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/test"))
                .respond_with(status_code(200).body("not json")),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/test".into());
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None::<NoBody>, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn attempt_timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/slow")).respond_with(
                delay_and_then(Duration::from_secs(5), json_encoded(json!({}))),
            ),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/slow".into());
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(50));
        let err = client
            .execute::<NoBody, serde_json::Value>(builder, None::<NoBody>, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn user_agent() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/test"),
                request::headers(contains(("user-agent", "test-agent/1.2.3"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/test".into());
        let mut options = RequestOptions::default();
        options.set_user_agent("test-agent/1.2.3");
        client
            .execute::<NoBody, serde_json::Value>(builder, None::<NoBody>, options)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn auth_headers() -> Result<()> {
        use auth::credentials::api_key_credentials::Builder;
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v1/test"),
                request::headers(contains(("x-goog-api-key", "test-api-key"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );
        let endpoint = format!("http://{}", server.addr());
        let mut config = ClientConfig::default();
        config.cred = Some(Builder::new("test-api-key").build());
        let client = ReqwestClient::new(config, &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/test".into());
        client
            .execute::<NoBody, serde_json::Value>(builder, None::<NoBody>, RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn endpoint_trailing_slash() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v1/test"))
                .respond_with(json_encoded(json!({}))),
        );
        let endpoint = format!("http://{}/", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint, &[]).await?;
        let builder = client.builder(reqwest::Method::GET, "/v1/test".into());
        client
            .execute::<NoBody, serde_json::Value>(builder, None::<NoBody>, RequestOptions::default())
            .await?;
        Ok(())
    }
}
