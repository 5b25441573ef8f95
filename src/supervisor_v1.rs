// supervisor_v1.rs

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::FleetHubClient;
use crate::constants::SUPERVISOR_V1_BASE_PATH;
use crate::error::FleetHubError;
use crate::response_ext::ResponseExt;
use crate::supervisor::{SupervisorConfig, SupervisorTransport};

type Result<T> = std::result::Result<T, FleetHubError>;

/// Client for the v1 supervisor API, either tunnelled through the cloud
/// (see [`crate::FleetHubClient::supervisor_v1`]) or talking to the local
/// endpoint directly (see [`SupervisorV1Service::local`]).
pub struct SupervisorV1Service {
    transport: SupervisorTransport,
}

/// Device state as reported by the v1 supervisor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SupervisorV1Device {
    pub api_port: i64,
    pub ip_address: String,
    pub commit: String,
    pub status: String,
    pub download_progress: Option<f64>,
    pub os_version: String,
    pub supervisor_version: String,
    pub update_pending: bool,
    pub update_downloaded: bool,
    pub update_failed: bool,
}

#[derive(Serialize)]
struct ForceRequest {
    force: bool,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Acknowledgement {
    #[serde(rename = "Data")]
    data: String,
    #[serde(rename = "Error")]
    error: String,
}

impl SupervisorV1Service {
    pub(crate) fn cloud(client: FleetHubClient, application_id: i64, device_uuid: String) -> Self {
        Self { transport: SupervisorTransport::cloud(client, application_id, device_uuid) }
    }

    /// Talk to the supervisor directly on-device.
    /// Use [`SupervisorConfig::from_env`] for the standard container
    /// environment.
    pub fn local(config: SupervisorConfig) -> Result<Self> {
        Ok(Self { transport: SupervisorTransport::local(config)? })
    }

    /// Reboots the device. The supervisor acknowledges with
    /// `{"Data":"OK"}`; anything else is surfaced as a rejection carrying
    /// the supervisor's error text.
    pub async fn reboot(&self, force: bool) -> Result<()> {
        let resp = self
            .transport
            .request(
                Method::POST,
                &format!("{}/reboot", SUPERVISOR_V1_BASE_PATH),
                Some(&ForceRequest { force }),
            )
            .await?;
        let ack: Acknowledgement = resp.json()?;
        if ack.data != "OK" {
            return Err(FleetHubError::SupervisorRejected(ack.error));
        }
        Ok(())
    }

    /// Blinks the device LED for 15 seconds to identify it physically.
    pub async fn blink(&self) -> Result<()> {
        self.transport
            .request::<()>(Method::POST, &format!("{}/blink", SUPERVISOR_V1_BASE_PATH), None)
            .await?;
        Ok(())
    }

    /// Triggers an update check on the supervisor. With `force`, the update
    /// lock is overridden. The supervisor answers 204 when nothing new is
    /// available; any 2xx is success.
    pub async fn update(&self, force: bool) -> Result<()> {
        self.transport
            .request(
                Method::POST,
                &format!("{}/update", SUPERVISOR_V1_BASE_PATH),
                Some(&ForceRequest { force }),
            )
            .await?;
        Ok(())
    }

    /// Returns the current device state as seen by the supervisor.
    pub async fn device(&self) -> Result<SupervisorV1Device> {
        let resp = self
            .transport
            .request::<()>(Method::GET, &format!("{}/device", SUPERVISOR_V1_BASE_PATH), None)
            .await?;
        resp.json()
    }
}
