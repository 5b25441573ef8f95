// supervisor_v2.rs

use std::collections::HashMap;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::FleetHubClient;
use crate::constants::SUPERVISOR_V2_BASE_PATH;
use crate::error::FleetHubError;
use crate::response_ext::ResponseExt;
use crate::supervisor::{SupervisorConfig, SupervisorTransport};

type Result<T> = std::result::Result<T, FleetHubError>;

/// Client for the v2 supervisor API, either tunnelled through the cloud
/// (see [`crate::FleetHubClient::supervisor_v2`]) or talking to the local
/// endpoint directly (see [`SupervisorV2Service::local`]).
pub struct SupervisorV2Service {
    transport: SupervisorTransport,
}

/// State of one service running on the device.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceState {
    pub status: String,
    #[serde(rename = "releaseId")]
    pub release_id: i64,
    pub download_progress: Option<f64>,
}

/// State of one application on the device, keyed by service id.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApplicationState {
    pub services: HashMap<String, ServiceState>,
}

/// The supervisor's view of everything running on the device.
/// `local` typically holds a single entry keyed by the application id.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SupervisorV2ApplicationState {
    pub local: HashMap<String, ApplicationState>,
    pub dependent: Option<serde_json::Value>,
    pub commit: String,
}

#[derive(Serialize)]
struct ServiceNameRequest<'a> {
    #[serde(rename = "serviceName")]
    service_name: &'a str,
}

impl SupervisorV2Service {
    pub(crate) fn cloud(client: FleetHubClient, application_id: i64, device_uuid: String) -> Self {
        Self { transport: SupervisorTransport::cloud(client, application_id, device_uuid) }
    }

    /// Talk to the supervisor directly on-device.
    /// Use [`SupervisorConfig::from_env`] for the standard container
    /// environment.
    pub fn local(config: SupervisorConfig) -> Result<Self> {
        Ok(Self { transport: SupervisorTransport::local(config)? })
    }

    /// Restarts a service by name.
    pub async fn restart_service(&self, service_name: &str) -> Result<()> {
        self.transport
            .request(
                Method::POST,
                &self.application_path("restart-service"),
                Some(&ServiceNameRequest { service_name }),
            )
            .await?;
        Ok(())
    }

    /// Stops a service by name.
    pub async fn stop_service(&self, service_name: &str) -> Result<()> {
        self.transport
            .request(
                Method::POST,
                &self.application_path("stop-service"),
                Some(&ServiceNameRequest { service_name }),
            )
            .await?;
        Ok(())
    }

    /// Returns the state of every service running on the device.
    pub async fn application_state(&self) -> Result<SupervisorV2ApplicationState> {
        let resp = self
            .transport
            .request::<()>(Method::GET, &self.application_path("state"), None)
            .await?;
        resp.json()
    }

    fn application_path(&self, operation: &str) -> String {
        format!(
            "{}/applications/{}/{}",
            SUPERVISOR_V2_BASE_PATH, self.transport.app_id, operation
        )
    }
}
