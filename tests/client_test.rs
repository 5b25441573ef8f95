// client_test.rs

#[cfg(test)]
mod tests {
    use fleethub_sdk::{ClientBuilder, FleetHubError, ResponseExt};
    use mockito::{Server, ServerGuard};
    use reqwest::Method;
    use serde::{Deserialize, Serialize};

    fn test_client(server: &ServerGuard) -> fleethub_sdk::FleetHubClient {
        ClientBuilder::new()
            .base_url(format!("{}/", server.url()))
            .auth_token("test-token")
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_request_resolves_relative_path() {
        let client = ClientBuilder::new().build().unwrap();
        let req = client.new_request(Method::GET, "foo", "", None::<&()>).unwrap();
        assert_eq!(req.url().as_str(), "https://api.fleethub.io/foo");
    }

    #[test]
    fn test_new_request_raw_query_override() {
        let client = ClientBuilder::new().build().unwrap();
        let req = client
            .new_request(
                Method::GET,
                "v4/device",
                "%24filter=uuid+eq+%27abc123%27",
                None::<&()>,
            )
            .unwrap();
        assert_eq!(req.url().query(), Some("%24filter=uuid+eq+%27abc123%27"));
    }

    #[test]
    fn test_new_request_rejects_base_url_without_trailing_slash() {
        let client = ClientBuilder::new()
            .base_url("https://api.fleethub.io/v6")
            .build()
            .unwrap();
        match client.new_request(Method::GET, "device", "", None::<&()>) {
            Err(FleetHubError::ConfigurationError(msg)) => {
                assert!(msg.contains("trailing slash"));
            }
            Err(other) => panic!("expected ConfigurationError, got {:?}", other),
            Ok(_) => panic!("request was built against a base URL without a trailing slash"),
        }
    }

    #[test]
    fn test_new_request_sets_headers() {
        let client = ClientBuilder::new().auth_token("secret").build().unwrap();
        let req = client
            .new_request(Method::POST, "foo", "", Some(&serde_json::json!({"a": 1})))
            .unwrap();
        assert_eq!(req.headers()["authorization"], "Bearer secret");
        assert_eq!(req.headers()["user-agent"], "fleethub-sdk/rust");
        assert_eq!(req.headers()["content-type"], "application/json");
    }

    #[test]
    fn test_new_request_empty_user_agent_skips_header() {
        let client = ClientBuilder::new().user_agent("").build().unwrap();
        let req = client.new_request(Method::GET, "foo", "", None::<&()>).unwrap();
        assert!(req.headers().get("user-agent").is_none());
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Message {
        message: String,
    }

    #[test]
    fn test_body_encoding_preserves_html_sensitive_characters() {
        let client = ClientBuilder::new().build().unwrap();
        let body = Message { message: "a&b <c> d".to_string() };
        let req = client.new_request(Method::POST, "foo", "", Some(&body)).unwrap();

        let bytes = req.body().unwrap().as_bytes().unwrap();
        assert_eq!(bytes, br#"{"message":"a&b <c> d"}"#.as_slice());

        // and the same bytes decode back to an equal value
        let decoded: Message = serde_json::from_slice(bytes).unwrap();
        assert_eq!(decoded, body);
    }

    #[tokio::test]
    async fn test_request_carries_auth_and_user_agent() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/v4/application")
            .match_header("authorization", "Bearer test-token")
            .match_header("user-agent", "fleethub-sdk/rust")
            .with_body(r#"{"d":[]}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let apps = client.application().list().await.unwrap();
        assert!(apps.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_2xx_maps_to_request_failed_without_decoding_body() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v4/application(123)")
            .with_status(404)
            .with_body("this is not json {")
            .create_async()
            .await;

        let client = test_client(&server);
        let err = client.application().get(123).await.unwrap_err();
        match &err {
            FleetHubError::RequestFailed { method, url, status } => {
                assert_eq!(method, &Method::GET);
                assert!(url.contains("v4/application(123)"));
                assert_eq!(status.as_u16(), 404);
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
        let msg = err.to_string();
        assert!(msg.contains("GET"));
        assert!(msg.contains("404"));
    }

    #[tokio::test]
    async fn test_get_with_empty_envelope_returns_none() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v4/application(42)")
            .with_body(r#"{"d":[]}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let app = client.application().get(42).await.unwrap();
        assert!(app.is_none());
    }

    #[tokio::test]
    async fn test_get_with_two_entities_is_a_data_integrity_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/v4/application(42)")
            .with_body(r#"{"d":[{"id":1,"app_name":"one"},{"id":2,"app_name":"two"}]}"#)
            .create_async()
            .await;

        let client = test_client(&server);
        let err = client.application().get(42).await.unwrap_err();
        match err {
            FleetHubError::DataIntegrity(msg) => assert!(msg.contains("more than 1")),
            other => panic!("expected DataIntegrity, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_patch_acknowledgement_bytes_pass_through_verbatim() {
        let mut server = Server::new_async().await;
        server
            .mock("PATCH", "/v4/application(42)")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "should_track_latest_release": true
            })))
            .with_body("OK")
            .create_async()
            .await;

        let client = test_client(&server);
        let ack = client.application().enable_track_latest_release(42).await.unwrap();
        assert_eq!(&ack[..], b"OK");
    }

    #[tokio::test]
    async fn test_execute_returns_raw_body_for_opaque_endpoints() {
        let mut server = Server::new_async().await;
        server.mock("GET", "/ping").with_body("OK").create_async().await;

        let client = test_client(&server);
        let req = client.new_request(Method::GET, "ping", "", None::<&()>).unwrap();
        let resp = client.execute(req).await.unwrap();
        assert_eq!(&resp.bytes()[..], b"OK");
    }
}
