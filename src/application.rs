// application.rs

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::client::FleetHubClient;
use crate::constants::APPLICATION_BASE_PATH;
use crate::error::FleetHubError;
use crate::odata::{self, Reference};
use crate::resource::Resource;

type Result<T> = std::result::Result<T, FleetHubError>;

/// Handles communication with the application related endpoints of the
/// FleetHub cloud API.
pub struct ApplicationService {
    resource: Resource<ApplicationResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApplicationResponse {
    pub id: i64,
    pub user: Option<Reference>,
    #[serde(rename = "depends_on__application")]
    pub depends_on_application: Option<serde_json::Value>,
    pub actor: i64,
    #[serde(rename = "app_name")]
    pub name: String,
    pub slug: String,
    pub commit: String,
    #[serde(rename = "application_type")]
    pub application_type: Option<Reference>,
    pub device_type: String,
    #[serde(rename = "should_track_latest_release")]
    pub track_latest_release: bool,
    #[serde(rename = "is_accessible_by_support_until__date")]
    pub is_accessible_by_support_until: Option<String>,
}

impl ApplicationService {
    pub(crate) fn new(client: FleetHubClient) -> Self {
        Self { resource: Resource::new(client, APPLICATION_BASE_PATH, "application") }
    }

    /// List all applications.
    pub async fn list(&self) -> Result<Vec<ApplicationResponse>> {
        self.get_with_query("").await
    }

    /// Query applications with a custom open data protocol query.
    /// The query should be a valid, escaped OData query such as
    /// `%24filter=app_name+eq+%27logger%27`.
    pub async fn get_with_query(&self, query: &str) -> Result<Vec<ApplicationResponse>> {
        self.resource.list(query).await
    }

    /// Returns information on a single application given its ID.
    /// If the application does not exist, `Ok(None)` is returned.
    pub async fn get(&self, application_id: i64) -> Result<Option<ApplicationResponse>> {
        let path = odata::entity_url(APPLICATION_BASE_PATH, application_id);
        self.resource.get_one(&path, "").await
    }

    /// Returns information on a single application given its name.
    /// If the application does not exist, `Ok(None)` is returned.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<ApplicationResponse>> {
        let query = format!("%24filter=app_name%20eq%20%27{}%27", name);
        self.resource.get_one(APPLICATION_BASE_PATH, &query).await
    }

    /// Sets all devices owned by the application to track the latest
    /// available release. Returns the raw acknowledgement body.
    pub async fn enable_track_latest_release(&self, application_id: i64) -> Result<Bytes> {
        self.set_track_latest_release(application_id, true).await
    }

    /// Sets all devices owned by the application to NOT track the latest
    /// available release. Returns the raw acknowledgement body.
    pub async fn disable_track_latest_release(&self, application_id: i64) -> Result<Bytes> {
        self.set_track_latest_release(application_id, false).await
    }

    async fn set_track_latest_release(&self, application_id: i64, track: bool) -> Result<Bytes> {
        #[derive(Serialize)]
        struct Request {
            should_track_latest_release: bool,
        }
        let path = odata::entity_url(APPLICATION_BASE_PATH, application_id);
        self.resource
            .update(&path, "", &Request { should_track_latest_release: track })
            .await
    }
}
