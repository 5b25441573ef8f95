// service_install.rs

use serde::Deserialize;

use crate::client::FleetHubClient;
use crate::constants::SERVICE_INSTALL_BASE_PATH;
use crate::error::FleetHubError;
use crate::identifier::IdOrUuid;
use crate::odata::Reference;
use crate::resource::Resource;

type Result<T> = std::result::Result<T, FleetHubError>;

/// Handles communication with the service install related endpoints of the
/// FleetHub cloud API.
pub struct ServiceInstallService {
    resource: Resource<ServiceInstallResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InstalledService {
    pub id: i64,
    pub service_name: String,
    pub application: Option<Reference>,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceInstallResponse {
    #[serde(rename = "installs__service")]
    pub installs_service: Vec<InstalledService>,
    pub id: i64,
    pub created_at: String,
    pub device: Option<Reference>,
}

/// All service installs of one device, with lookup helpers over the
/// services they expand.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ServiceInstalls(pub Vec<ServiceInstallResponse>);

impl ServiceInstalls {
    /// All service names contained in the install list.
    pub fn service_names(&self) -> Vec<&str> {
        self.0
            .iter()
            .flat_map(|install| &install.installs_service)
            .map(|service| service.service_name.as_str())
            .collect()
    }

    /// Finds the installed service with the given name, if any.
    pub fn find_by_service_name(&self, service_name: &str) -> Option<&InstalledService> {
        self.0
            .iter()
            .flat_map(|install| &install.installs_service)
            .find(|service| service.service_name == service_name)
    }
}

impl ServiceInstallService {
    pub(crate) fn new(client: FleetHubClient) -> Self {
        Self { resource: Resource::new(client, SERVICE_INSTALL_BASE_PATH, "service install") }
    }

    /// List all service installs for a particular device, expanding the
    /// installed services in place.
    pub async fn list(&self, device: &IdOrUuid) -> Result<ServiceInstalls> {
        let mut query = if device.is_uuid() {
            format!("%24filter=device/uuid+eq+%27{}%27", device.value())
        } else {
            format!("%24filter=device+eq+%27{}%27", device.value())
        };
        query += "&%24expand=installs__service(%24select=service_name,application,created_at,id)";
        Ok(ServiceInstalls(self.resource.list(&query).await?))
    }
}
