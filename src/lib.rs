// lib.rs
//! FleetHub SDK for Rust
//!
//! A typed async client for the FleetHub device fleet management API, plus
//! clients for the on-device supervisor (both tunnelled through the cloud
//! and talking to the local endpoint directly).

mod application;
mod client;
mod client_builder;
mod constants;
mod cpu_architecture;
mod device;
mod device_config_var;
mod device_env_var;
mod device_service_var;
mod device_tag;
mod device_type;
mod error;
mod identifier;
mod image;
pub mod odata;
mod organization;
mod release;
mod release_tag;
mod resource;
mod response_ext;
mod service_install;
mod supervisor;
mod supervisor_v1;
mod supervisor_v2;

pub use application::{ApplicationResponse, ApplicationService};
pub use client::FleetHubClient;
pub use client_builder::ClientBuilder;
pub use cpu_architecture::CpuArchitecture;
pub use device::{DeviceResponse, DeviceService};
pub use device_config_var::{DeviceConfigVarResponse, DeviceConfigVarService};
pub use device_env_var::{DeviceEnvVarResponse, DeviceEnvVarService};
pub use device_service_var::{DeviceServiceVarResponse, DeviceServiceVarService};
pub use device_tag::{DeviceTagResponse, DeviceTagService};
pub use device_type::DeviceType;
pub use error::FleetHubError;
pub use identifier::IdOrUuid;
pub use image::{Image, ImageResponse};
pub use organization::{OrganizationResponse, OrganizationService};
pub use release::{ReleaseResponse, ReleaseService};
pub use release_tag::{ReleaseTagResponse, ReleaseTagService};
pub use response_ext::ResponseExt;
pub use service_install::{InstalledService, ServiceInstallResponse, ServiceInstallService, ServiceInstalls};
pub use supervisor::SupervisorConfig;
pub use supervisor_v1::{SupervisorV1Device, SupervisorV1Service};
pub use supervisor_v2::{ApplicationState, ServiceState, SupervisorV2ApplicationState, SupervisorV2Service};
