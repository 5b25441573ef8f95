// device_tag.rs

use serde::{Deserialize, Serialize};

use crate::client::FleetHubClient;
use crate::constants::DEVICE_TAG_BASE_PATH;
use crate::device::resolve_device_id;
use crate::error::FleetHubError;
use crate::identifier::IdOrUuid;
use crate::odata::Reference;
use crate::resource::Resource;

type Result<T> = std::result::Result<T, FleetHubError>;

/// Handles communication with the device tag related endpoints of the
/// FleetHub cloud API.
pub struct DeviceTagService {
    resource: Resource<DeviceTagResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceTagResponse {
    pub id: i64,
    pub device: Option<Reference>,
    pub tag_key: String,
    pub value: String,
}

impl DeviceTagService {
    pub(crate) fn new(client: FleetHubClient) -> Self {
        Self { resource: Resource::new(client, DEVICE_TAG_BASE_PATH, "device tag") }
    }

    /// List all tags for a given device ID/UUID.
    pub async fn list(&self, device: &IdOrUuid) -> Result<Vec<DeviceTagResponse>> {
        self.get_with_query(&device_filter(device)).await
    }

    /// Query device tags with a custom open data protocol query.
    /// The query should be a valid, escaped OData query such as
    /// `%24filter=tag_key+eq+%27site%27`.
    pub async fn get_with_query(&self, query: &str) -> Result<Vec<DeviceTagResponse>> {
        self.resource.list(query).await
    }

    /// Creates a device tag with key=value given a device ID/UUID.
    /// A UUID is resolved to the numeric device id first.
    /// The server rejects the call if the key already exists.
    pub async fn create(&self, device: &IdOrUuid, key: &str, value: &str) -> Result<DeviceTagResponse> {
        let device_id = resolve_device_id(self.resource.client(), device).await?;
        #[derive(Serialize)]
        struct Request<'a> {
            device: String,
            tag_key: &'a str,
            value: &'a str,
        }
        self.resource.create(&Request { device: device_id, tag_key: key, value }).await
    }

    /// Retrieves a tag with the given key from the given device ID/UUID.
    /// If no such key exists, `Ok(None)` is returned.
    pub async fn get_with_key(&self, device: &IdOrUuid, key: &str) -> Result<Option<DeviceTagResponse>> {
        let query = format!("{}+and+tag_key+eq+%27{}%27", device_filter(device), key);
        self.resource.get_one(DEVICE_TAG_BASE_PATH, &query).await
    }

    /// Updates the value of the tag matching the given key and device
    /// ID/UUID. No error is returned if the key or device does not exist.
    pub async fn update_with_key(&self, device: &IdOrUuid, key: &str, value: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            value: &'a str,
        }
        let query = format!("{}+and+tag_key+eq+%27{}%27", device_filter(device), key);
        self.resource.update(DEVICE_TAG_BASE_PATH, &query, &Request { value }).await?;
        Ok(())
    }

    /// Deletes the tag matching the given key and device ID/UUID.
    /// No error is returned if the tag does not exist.
    pub async fn delete_with_key(&self, device: &IdOrUuid, key: &str) -> Result<()> {
        let query = format!("{}+and+tag_key+eq+%27{}%27", device_filter(device), key);
        self.resource.delete(&query).await
    }
}

fn device_filter(device: &IdOrUuid) -> String {
    if device.is_uuid() {
        format!("%24filter=device/uuid+eq+%27{}%27", device.value())
    } else {
        format!("%24filter=device/id+eq+%27{}%27", device.value())
    }
}
