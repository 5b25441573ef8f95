// release_tag.rs

use serde::Deserialize;

use crate::client::FleetHubClient;
use crate::constants::RELEASE_TAG_BASE_PATH;
use crate::error::FleetHubError;
use crate::odata::Reference;
use crate::resource::Resource;

type Result<T> = std::result::Result<T, FleetHubError>;

/// Handles communication with the release tag related endpoints of the
/// FleetHub cloud API.
pub struct ReleaseTagService {
    resource: Resource<ReleaseTagResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReleaseTagResponse {
    pub id: i64,
    pub release: Option<Reference>,
    pub tag_key: String,
    pub value: String,
}

impl ReleaseTagService {
    pub(crate) fn new(client: FleetHubClient) -> Self {
        Self { resource: Resource::new(client, RELEASE_TAG_BASE_PATH, "release tag") }
    }

    /// List all release tags for a given release ID.
    pub async fn list(&self, release_id: i64) -> Result<Vec<ReleaseTagResponse>> {
        let query = format!("%24filter=release/id+eq+%27{}%27", release_id);
        self.get_with_query(&query).await
    }

    /// List all release tags for a given release commit.
    pub async fn list_by_commit(&self, commit: &str) -> Result<Vec<ReleaseTagResponse>> {
        let query = format!("%24filter=release/commit+eq+%27{}%27", commit);
        self.get_with_query(&query).await
    }

    /// Query release tags with a custom open data protocol query.
    /// The query should be a valid, escaped OData query such as
    /// `%24filter=tag_key+eq+%27env%27`.
    pub async fn get_with_query(&self, query: &str) -> Result<Vec<ReleaseTagResponse>> {
        self.resource.list(query).await
    }
}
