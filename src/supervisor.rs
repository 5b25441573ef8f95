// supervisor.rs
//! Shared plumbing for the on-device supervisor clients.
//!
//! The supervisor is reachable two ways. Running on-device, calls go
//! straight to its local HTTP endpoint with the natural verb and path plus
//! an `apikey` query parameter. From anywhere else, calls are tunnelled
//! through the cloud API: the real method and body are wrapped into a
//! `{"uuid":...,"method":...,"data":...}` envelope and POSTed to a
//! `supervisor/`-prefixed path.

use bytes::Bytes;
use reqwest::Method;
use serde::Serialize;

use crate::client::FleetHubClient;
use crate::client_builder::ClientBuilder;
use crate::constants::*;
use crate::error::FleetHubError;

type Result<T> = std::result::Result<T, FleetHubError>;

/// Configuration for talking to the supervisor directly on-device.
#[derive(Debug, Clone)]
pub struct SupervisorConfig {
    /// Local supervisor address, e.g. `http://127.0.0.1:48484`.
    pub address: String,
    /// API key passed as the `apikey` query parameter.
    pub api_key: String,
    /// UUID of the device this code runs on.
    pub device_uuid: String,
    /// Numeric id of the application running on the device.
    pub app_id: String,
}

impl SupervisorConfig {
    /// Reads the configuration the device supervisor injects into every
    /// service container. All missing variables are reported in a single
    /// configuration error.
    pub fn from_env() -> Result<Self> {
        let mut missing = Vec::new();
        let address = require_env(ENV_SUPERVISOR_ADDRESS, &mut missing);
        let api_key = require_env(ENV_SUPERVISOR_API_KEY, &mut missing);
        let device_uuid = require_env(ENV_DEVICE_UUID, &mut missing);
        let app_id = require_env(ENV_APP_ID, &mut missing);
        if !missing.is_empty() {
            return Err(FleetHubError::ConfigurationError(format!(
                "missing supervisor environment variables: {}",
                missing.join(", ")
            )));
        }
        Ok(Self { address, api_key, device_uuid, app_id })
    }
}

fn require_env(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

/// The cloud-tunnel envelope wrapping a supervisor call.
#[derive(Serialize)]
struct TunnelRequest<'a, B> {
    uuid: &'a str,
    method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a B>,
}

/// Routes supervisor calls either to the local endpoint or through the
/// cloud tunnel, depending on how the service was constructed.
pub(crate) struct SupervisorTransport {
    client: FleetHubClient,
    pub(crate) device_uuid: String,
    pub(crate) app_id: String,
    api_key: Option<String>,
    local: bool,
}

impl SupervisorTransport {
    pub(crate) fn cloud(client: FleetHubClient, application_id: i64, device_uuid: String) -> Self {
        Self {
            client,
            device_uuid,
            app_id: application_id.to_string(),
            api_key: None,
            local: false,
        }
    }

    pub(crate) fn local(config: SupervisorConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .base_url(format!("{}/", config.address))
            .build()?;
        Ok(Self {
            client,
            device_uuid: config.device_uuid,
            app_id: config.app_id,
            api_key: Some(config.api_key),
            local: true,
        })
    }

    pub(crate) async fn request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<http::Response<Bytes>> {
        if self.local {
            let query = format!(
                "{}={}",
                SUPERVISOR_API_KEY_QUERY,
                self.api_key.as_deref().unwrap_or_default()
            );
            let req = self.client.new_request(method, path, &query, body)?;
            self.client.execute(req).await
        } else {
            let tunnel_path = format!("{}{}", SUPERVISOR_TUNNEL_PREFIX, path);
            let envelope = TunnelRequest {
                uuid: &self.device_uuid,
                method: method.as_str(),
                data: body,
            };
            let req = self.client.new_request(Method::POST, &tunnel_path, "", Some(&envelope))?;
            self.client.execute(req).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tunnel_request_omits_absent_data() {
        let envelope: TunnelRequest<()> = TunnelRequest {
            uuid: "00d859f123685e84772676f09465cc55",
            method: "GET",
            data: None,
        };
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"uuid":"00d859f123685e84772676f09465cc55","method":"GET"}"#
        );
    }

    #[test]
    fn test_tunnel_request_nests_body() {
        #[derive(Serialize)]
        struct Body {
            force: bool,
        }
        let body = Body { force: true };
        let envelope = TunnelRequest {
            uuid: "00d859f123685e84772676f09465cc55",
            method: "POST",
            data: Some(&body),
        };
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"uuid":"00d859f123685e84772676f09465cc55","method":"POST","data":{"force":true}}"#
        );
    }
}
