// client.rs

use bytes::Bytes;
use log::{debug, error};
use reqwest::{Client as ReqwestClient, Method, Request};
use serde::Serialize;
use url::Url;

use crate::application::ApplicationService;
use crate::device::DeviceService;
use crate::device_config_var::DeviceConfigVarService;
use crate::device_env_var::DeviceEnvVarService;
use crate::device_service_var::DeviceServiceVarService;
use crate::device_tag::DeviceTagService;
use crate::error::FleetHubError;
use crate::organization::OrganizationService;
use crate::release::ReleaseService;
use crate::release_tag::ReleaseTagService;
use crate::service_install::ServiceInstallService;
use crate::supervisor_v1::SupervisorV1Service;
use crate::supervisor_v2::SupervisorV2Service;

type Result<T> = std::result::Result<T, FleetHubError>;

/// Main FleetHub API client.
///
/// The client is cheap to clone: every service handle owns a clone and all
/// clones share the same underlying connection pool. All configuration is
/// immutable after construction, so a single client can be reused across
/// many concurrent calls.
#[derive(Clone)]
pub struct FleetHubClient {
    pub(crate) http: ReqwestClient,
    pub(crate) base_url: Url,
    pub(crate) user_agent: String,
    pub(crate) auth_token: Option<String>,
}

impl std::fmt::Debug for FleetHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FleetHubClient")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("auth_token", &self.auth_token.as_deref().map(|_| "<redacted>"))
            .finish()
    }
}

impl FleetHubClient {
    /// Create a client for the public FleetHub cloud API with a bearer token.
    ///
    /// Use [`crate::ClientBuilder`] for anything beyond the defaults.
    pub fn new(auth_token: impl Into<String>) -> Result<Self> {
        crate::ClientBuilder::new().auth_token(auth_token).build()
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Assemble an API request without performing any I/O.
    ///
    /// `path` is resolved relative to the base URL, which must carry a
    /// trailing slash. A non-empty `raw_query` replaces any query present in
    /// the resolved URL and is passed through as-is: callers supply
    /// already-escaped OData queries such as `%24filter=uuid+eq+%27...%27`.
    /// A body is JSON encoded verbatim (no HTML escaping) and sets
    /// `Content-Type: application/json`.
    pub fn new_request<B>(
        &self,
        method: Method,
        path: &str,
        raw_query: &str,
        body: Option<&B>,
    ) -> Result<Request>
    where
        B: Serialize + ?Sized,
    {
        if !self.base_url.path().ends_with('/') {
            return Err(FleetHubError::ConfigurationError(format!(
                "base URL must have a trailing slash, but {} does not",
                self.base_url
            )));
        }
        let mut url = self.base_url.join(path)?;
        if !raw_query.is_empty() {
            url.set_query(Some(raw_query));
        }
        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            let buf = serde_json::to_vec(body)?;
            builder = builder
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(buf);
        }
        if !self.user_agent.is_empty() {
            builder = builder.header(http::header::USER_AGENT, &self.user_agent);
        }
        if let Some(token) = &self.auth_token {
            builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {}", token));
        }
        Ok(builder.build()?)
    }

    /// Send a request and classify the outcome.
    ///
    /// Transport failures surface as-is. A status outside the 2xx range maps
    /// to [`FleetHubError::RequestFailed`] carrying method, URL and status;
    /// the body of such a response is never decoded. On success the full
    /// body is collected and handed back for the caller to interpret via
    /// [`crate::ResponseExt`].
    pub async fn execute(&self, request: Request) -> Result<http::Response<Bytes>> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("{} {}", method, url);

        let resp = self.http.execute(request).await?;
        let status = resp.status();
        if !status.is_success() {
            error!("{} {} returned {}", method, url, status);
            return Err(FleetHubError::RequestFailed {
                method,
                url: url.to_string(),
                status,
            });
        }

        let headers = resp.headers().clone();
        let body = resp.bytes().await?;

        let mut builder = http::Response::builder().status(status);
        *builder.headers_mut().unwrap() = headers;
        Ok(builder.body(body).expect("building http::Response should not fail"))
    }

    //
    // Resource services
    //

    pub fn application(&self) -> ApplicationService {
        ApplicationService::new(self.clone())
    }

    pub fn device(&self) -> DeviceService {
        DeviceService::new(self.clone())
    }

    pub fn release(&self) -> ReleaseService {
        ReleaseService::new(self.clone())
    }

    pub fn release_tag(&self) -> ReleaseTagService {
        ReleaseTagService::new(self.clone())
    }

    pub fn device_tag(&self) -> DeviceTagService {
        DeviceTagService::new(self.clone())
    }

    pub fn device_env_var(&self) -> DeviceEnvVarService {
        DeviceEnvVarService::new(self.clone())
    }

    pub fn device_config_var(&self) -> DeviceConfigVarService {
        DeviceConfigVarService::new(self.clone())
    }

    pub fn device_service_var(&self) -> DeviceServiceVarService {
        DeviceServiceVarService::new(self.clone())
    }

    pub fn service_install(&self) -> ServiceInstallService {
        ServiceInstallService::new(self.clone())
    }

    pub fn organization(&self) -> OrganizationService {
        OrganizationService::new(self.clone())
    }

    /// Supervisor v1 client tunnelled through the cloud API.
    ///
    /// For talking to the supervisor directly on-device use
    /// [`SupervisorV1Service::local`] instead.
    pub fn supervisor_v1(
        &self,
        application_id: i64,
        device_uuid: impl Into<String>,
    ) -> SupervisorV1Service {
        SupervisorV1Service::cloud(self.clone(), application_id, device_uuid.into())
    }

    /// Supervisor v2 client tunnelled through the cloud API.
    ///
    /// For talking to the supervisor directly on-device use
    /// [`SupervisorV2Service::local`] instead.
    pub fn supervisor_v2(
        &self,
        application_id: i64,
        device_uuid: impl Into<String>,
    ) -> SupervisorV2Service {
        SupervisorV2Service::cloud(self.clone(), application_id, device_uuid.into())
    }
}
