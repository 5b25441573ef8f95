// constants.rs

// Client defaults
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.fleethub.io/";
pub(crate) const DEFAULT_USER_AGENT: &str = "fleethub-sdk/rust";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 60;

// Resource base paths. The API version is part of the path and pinned per resource.
pub(crate) const APPLICATION_BASE_PATH: &str = "v4/application";
pub(crate) const DEVICE_BASE_PATH: &str = "v4/device";
pub(crate) const RELEASE_BASE_PATH: &str = "v4/release";
pub(crate) const RELEASE_TAG_BASE_PATH: &str = "v5/release_tag";
pub(crate) const DEVICE_TAG_BASE_PATH: &str = "v4/device_tag";
pub(crate) const DEVICE_ENV_VAR_BASE_PATH: &str = "v4/device_environment_variable";
pub(crate) const DEVICE_CONFIG_VAR_BASE_PATH: &str = "v6/device_config_variable";
pub(crate) const DEVICE_SERVICE_VAR_BASE_PATH: &str = "v6/device_service_environment_variable";
pub(crate) const SERVICE_INSTALL_BASE_PATH: &str = "v6/service_install";
pub(crate) const ORGANIZATION_BASE_PATH: &str = "v6/organization";

// Supervisor
pub(crate) const SUPERVISOR_V1_BASE_PATH: &str = "v1";
pub(crate) const SUPERVISOR_V2_BASE_PATH: &str = "v2";
pub(crate) const SUPERVISOR_TUNNEL_PREFIX: &str = "supervisor/";
pub(crate) const SUPERVISOR_API_KEY_QUERY: &str = "apikey";

// Environment variables read by the on-device supervisor client
pub(crate) const ENV_SUPERVISOR_ADDRESS: &str = "FLEETHUB_SUPERVISOR_ADDRESS";
pub(crate) const ENV_SUPERVISOR_API_KEY: &str = "FLEETHUB_SUPERVISOR_API_KEY";
pub(crate) const ENV_DEVICE_UUID: &str = "FLEETHUB_DEVICE_UUID";
pub(crate) const ENV_APP_ID: &str = "FLEETHUB_APP_ID";
