// organization.rs

use serde::Deserialize;

use crate::client::FleetHubClient;
use crate::constants::ORGANIZATION_BASE_PATH;
use crate::error::FleetHubError;
use crate::odata;
use crate::resource::Resource;

type Result<T> = std::result::Result<T, FleetHubError>;

/// Handles communication with the organization related endpoints of the
/// FleetHub cloud API.
pub struct OrganizationService {
    resource: Resource<OrganizationResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrganizationResponse {
    pub id: i64,
    pub created_at: String,
    pub name: String,
    pub handle: String,
    pub company_name: String,
    pub website: String,
    pub industry: String,
    pub billing_account_code: String,
}

impl OrganizationService {
    pub(crate) fn new(client: FleetHubClient) -> Self {
        Self { resource: Resource::new(client, ORGANIZATION_BASE_PATH, "organization") }
    }

    /// Returns information on a single organization given its ID.
    /// If the organization does not exist, `Ok(None)` is returned.
    pub async fn get(&self, organization_id: i64) -> Result<Option<OrganizationResponse>> {
        let path = odata::entity_url(ORGANIZATION_BASE_PATH, organization_id);
        self.resource.get_one(&path, "").await
    }

    /// Query organizations with a custom open data protocol query.
    /// The query should be a valid, escaped OData query such as
    /// `%24filter=handle+eq+%27acme%27`.
    pub async fn get_with_query(&self, query: &str) -> Result<Vec<OrganizationResponse>> {
        self.resource.list(query).await
    }
}
