// response_ext.rs

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::FleetHubError;

/// Extension trait for working with `http::Response<Bytes>`.
pub trait ResponseExt {
    /// Extracts the response body as `Bytes`.
    fn bytes(self) -> Bytes;

    /// Reads the response body as UTF-8 text with lossy fallback.
    fn text(self) -> String;

    /// Deserializes the response body as JSON.
    fn json<T: DeserializeOwned>(self) -> Result<T, FleetHubError>;
}

impl ResponseExt for http::Response<Bytes> {
    fn bytes(self) -> Bytes {
        self.into_body()
    }

    fn text(self) -> String {
        let body = self.into_body();
        String::from_utf8(body.to_vec()).unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned())
    }

    fn json<T: DeserializeOwned>(self) -> Result<T, FleetHubError> {
        let body = self.into_body();

        if body.is_empty() {
            return Err(FleetHubError::SerializationError("Empty response body".to_string()));
        }

        serde_json::from_slice::<T>(&body).map_err(|e| {
            let preview_len = body.len().min(100);
            let preview = String::from_utf8_lossy(&body[..preview_len]);
            FleetHubError::SerializationError(format!(
                "Failed to deserialize JSON: {}. Body preview: {}",
                e, preview
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_ext_bytes() {
        let body = Bytes::from("OK");
        let response = http::Response::builder().status(200).body(body.clone()).unwrap();

        assert_eq!(response.bytes(), body);
    }

    #[test]
    fn test_response_ext_text_utf8() {
        let body = Bytes::from("Hello, 世界!");
        let response = http::Response::builder().status(200).body(body).unwrap();

        assert_eq!(response.text(), "Hello, 世界!");
    }

    #[test]
    fn test_response_ext_text_invalid_utf8() {
        // Invalid UTF-8 falls back to lossy conversion
        let body = Bytes::from(vec![0xFF, 0xFE, 0xFD]);
        let response = http::Response::builder().status(200).body(body).unwrap();

        assert!(response.text().contains('�'));
    }

    #[test]
    fn test_response_ext_json() {
        use serde::Deserialize;

        #[derive(Debug, Deserialize, PartialEq)]
        struct TestData {
            message: String,
            code: i32,
        }

        let body = Bytes::from(r#"{"message":"success","code":200}"#);
        let response = http::Response::builder().status(200).body(body).unwrap();

        let parsed: TestData = response.json().unwrap();
        assert_eq!(parsed, TestData { message: "success".to_string(), code: 200 });
    }

    #[test]
    fn test_response_ext_json_empty() {
        let body = Bytes::new();
        let response = http::Response::builder().status(200).body(body).unwrap();

        let parsed: Result<serde_json::Value, _> = response.json();
        match parsed {
            Err(FleetHubError::SerializationError(msg)) => {
                assert!(msg.contains("Empty response body"));
            }
            other => panic!("Expected SerializationError for empty body, got {:?}", other.err()),
        }
    }
}
