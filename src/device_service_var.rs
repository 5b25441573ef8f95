// device_service_var.rs

use serde::{Deserialize, Serialize};

use crate::client::FleetHubClient;
use crate::constants::DEVICE_SERVICE_VAR_BASE_PATH;
use crate::device::resolve_device_id;
use crate::error::FleetHubError;
use crate::identifier::IdOrUuid;
use crate::odata::Reference;
use crate::resource::Resource;

type Result<T> = std::result::Result<T, FleetHubError>;

/// Handles communication with the device service environment variable
/// endpoints of the FleetHub cloud API. These variables are scoped to one
/// service installed on a device, hence the `service_install/...` filters.
pub struct DeviceServiceVarService {
    resource: Resource<DeviceServiceVarResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceServiceVarResponse {
    pub id: i64,
    pub created_at: String,
    pub device: Option<Reference>,
    pub name: String,
    pub value: String,
}

impl DeviceServiceVarService {
    pub(crate) fn new(client: FleetHubClient) -> Self {
        Self { resource: Resource::new(client, DEVICE_SERVICE_VAR_BASE_PATH, "device service variable") }
    }

    /// List all service environment variables of a given device ID/UUID.
    pub async fn list(&self, device: &IdOrUuid) -> Result<Vec<DeviceServiceVarResponse>> {
        self.resource.list(&device_filter(device)).await
    }

    /// Creates a service environment variable with name=value given a
    /// device ID/UUID. A UUID is resolved to the numeric device id first.
    pub async fn create(&self, device: &IdOrUuid, name: &str, value: &str) -> Result<DeviceServiceVarResponse> {
        let device_id = resolve_device_id(self.resource.client(), device).await?;
        #[derive(Serialize)]
        struct Request<'a> {
            device: String,
            name: &'a str,
            value: &'a str,
        }
        self.resource.create(&Request { device: device_id, name, value }).await
    }

    /// Deletes the variable with the given name from the device with the
    /// given ID/UUID. No error is returned if no such variable exists.
    pub async fn delete_with_name(&self, device: &IdOrUuid, name: &str) -> Result<()> {
        let query = format!("{}+and+name+eq+%27{}%27", device_filter(device), name);
        self.resource.delete(&query).await
    }
}

fn device_filter(device: &IdOrUuid) -> String {
    if device.is_uuid() {
        format!("%24filter=service_install/device/uuid+eq+%27{}%27", device.value())
    } else {
        format!("%24filter=service_install/device+eq+%27{}%27", device.value())
    }
}
