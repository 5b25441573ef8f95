// device.rs

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::client::FleetHubClient;
use crate::constants::DEVICE_BASE_PATH;
use crate::error::FleetHubError;
use crate::identifier::IdOrUuid;
use crate::odata::{self, Reference};
use crate::resource::Resource;

type Result<T> = std::result::Result<T, FleetHubError>;

/// Handles communication with the device related endpoints of the
/// FleetHub cloud API.
pub struct DeviceService {
    resource: Resource<DeviceResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceResponse {
    pub id: i64,
    pub actor: i64,
    pub device_name: String,
    pub device_type: Option<Reference>,
    pub uuid: String,
    #[serde(rename = "belongs_to__application")]
    pub belongs_to_application: Option<Reference>,
    #[serde(rename = "belongs_to__user")]
    pub belongs_to_user: Option<Reference>,
    #[serde(rename = "is_managed_by__device")]
    pub is_managed_by_device: Option<serde_json::Value>,
    #[serde(rename = "is_managed_by__service_instance")]
    pub is_managed_by_service_instance: Option<Reference>,
    #[serde(rename = "is_running__release")]
    pub is_running_release: Option<Reference>,
    #[serde(rename = "should_be_running__release")]
    pub should_be_running_release: Option<Reference>,
    #[serde(rename = "should_be_managed_by__supervisor_release")]
    pub should_be_managed_by_supervisor_release: Option<Reference>,
    #[serde(rename = "should_be_operated_by__release")]
    pub should_be_operated_by_release: Option<Reference>,
    pub note: Option<String>,
    pub local_id: Option<serde_json::Value>,
    pub status: String,
    pub overall_status: String,
    pub is_online: bool,
    pub is_connected_to_vpn: bool,
    pub is_web_accessible: bool,
    pub is_active: bool,
    pub last_connectivity_event: String,
    pub last_vpn_event: String,
    pub ip_address: String,
    pub mac_address: Option<String>,
    pub vpn_address: String,
    pub public_address: String,
    pub os_version: String,
    pub os_variant: String,
    pub supervisor_version: String,
    pub provisioning_state: String,
    pub provisioning_progress: Option<f64>,
    pub download_progress: Option<f64>,
    pub longitude: String,
    pub latitude: String,
    pub location: String,
    pub custom_longitude: String,
    pub custom_latitude: String,
    pub logs_channel: Option<serde_json::Value>,
    #[serde(rename = "is_locked_until__date")]
    pub is_locked_until: Option<String>,
    #[serde(rename = "is_accessible_by_support_until__date")]
    pub is_accessible_by_support_until: Option<String>,
    pub created_at: String,
    pub api_heartbeat_state: String,
    pub memory_usage: i64,
    pub memory_total: i64,
    pub storage_block_device: String,
    pub storage_usage: i64,
    pub storage_total: i64,
    pub cpu_temp: i64,
    pub cpu_usage: i64,
    pub cpu_id: String,
    pub is_undervolted: bool,
}

impl DeviceService {
    pub(crate) fn new(client: FleetHubClient) -> Self {
        Self { resource: Resource::new(client, DEVICE_BASE_PATH, "device") }
    }

    /// List all devices.
    pub async fn list(&self) -> Result<Vec<DeviceResponse>> {
        self.get_with_query("").await
    }

    /// List all devices owned by a single application given its ID.
    pub async fn list_by_application(&self, application_id: i64) -> Result<Vec<DeviceResponse>> {
        let query = format!("%24filter=belongs_to__application%20eq%20%27{}%27", application_id);
        self.get_with_query(&query).await
    }

    /// Returns information on a single device given its ID or UUID.
    /// A numeric ID goes through the entity path; a UUID goes through a
    /// `$filter` query against the collection. If the device does not
    /// exist, `Ok(None)` is returned.
    pub async fn get(&self, device: &IdOrUuid) -> Result<Option<DeviceResponse>> {
        let (path, query) = self.path_and_query(device);
        self.resource.get_one(&path, &query).await
    }

    /// Query devices with a custom open data protocol query.
    /// The query should be a valid, escaped OData query such as
    /// `%24filter=uuid+eq+%2712333422%27`.
    pub async fn get_with_query(&self, query: &str) -> Result<Vec<DeviceResponse>> {
        self.resource.list(query).await
    }

    /// Pins a device to a specific release. Returns the raw
    /// acknowledgement body.
    pub async fn pin_release(&self, device: &IdOrUuid, release_id: i64) -> Result<Bytes> {
        #[derive(Serialize)]
        struct Request {
            #[serde(rename = "should_be_running__release")]
            should_be_running_release: String,
        }
        let (path, query) = self.path_and_query(device);
        self.resource
            .update(&path, &query, &Request { should_be_running_release: release_id.to_string() })
            .await
    }

    /// Sets a device to track the latest available release. Returns the
    /// raw acknowledgement body.
    pub async fn track_latest_release(&self, device: &IdOrUuid) -> Result<Bytes> {
        #[derive(Serialize)]
        struct Request {
            #[serde(rename = "should_be_running__release")]
            should_be_running_release: Option<String>,
        }
        let (path, query) = self.path_and_query(device);
        self.resource
            .update(&path, &query, &Request { should_be_running_release: None })
            .await
    }

    fn path_and_query(&self, device: &IdOrUuid) -> (String, String) {
        if device.is_uuid() {
            let query = format!("%24filter=uuid+eq+%27{}%27", device.value());
            (DEVICE_BASE_PATH.to_string(), query)
        } else {
            (odata::entity_url(DEVICE_BASE_PATH, device.value()), String::new())
        }
    }
}

/// Resolves a device ID/UUID to the numeric id the mutation endpoints need.
pub(crate) async fn resolve_device_id(client: &FleetHubClient, device: &IdOrUuid) -> Result<String> {
    if !device.is_uuid() {
        return Ok(device.value().to_string());
    }
    match DeviceService::new(client.clone()).get(device).await? {
        Some(found) => Ok(found.id.to_string()),
        None => Err(FleetHubError::NotFound(format!("device {} not found", device.value()))),
    }
}
