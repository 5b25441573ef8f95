// release.rs

use serde::Deserialize;

use crate::client::FleetHubClient;
use crate::constants::RELEASE_BASE_PATH;
use crate::error::FleetHubError;
use crate::odata::{self, Reference};
use crate::resource::Resource;

type Result<T> = std::result::Result<T, FleetHubError>;

/// Handles communication with the release related endpoints of the
/// FleetHub cloud API.
pub struct ReleaseService {
    resource: Resource<ReleaseResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReleaseResponse {
    pub id: i64,
    pub created_at: String,
    #[serde(rename = "belongs_to__application")]
    pub belongs_to_application: Option<Reference>,
    #[serde(rename = "is_created_by__user")]
    pub created_by_user: Option<Reference>,
    pub composition: Option<serde_json::Value>,
    pub commit: String,
    pub status: String,
    pub source: String,
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub update_timestamp: String,
}

impl ReleaseService {
    pub(crate) fn new(client: FleetHubClient) -> Self {
        Self { resource: Resource::new(client, RELEASE_BASE_PATH, "release") }
    }

    /// List all releases.
    pub async fn list(&self) -> Result<Vec<ReleaseResponse>> {
        self.get_with_query("").await
    }

    /// Returns a release given its ID.
    /// If no such release exists, `Ok(None)` is returned.
    pub async fn get(&self, release_id: i64) -> Result<Option<ReleaseResponse>> {
        let path = odata::entity_url(RELEASE_BASE_PATH, release_id);
        self.resource.get_one(&path, "").await
    }

    /// Query releases with a custom open data protocol query.
    /// The query should be a valid, escaped OData query such as
    /// `%24filter=commit+eq+%27deadbeef%27`.
    pub async fn get_with_query(&self, query: &str) -> Result<Vec<ReleaseResponse>> {
        self.resource.list(query).await
    }
}
