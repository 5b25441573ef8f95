// device_type.rs

use serde::Deserialize;

use crate::odata::Reference;

/// A supported device type, usually decoded out of an expanded
/// `is_of__device_type` relation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceType {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub uuid: String,
    pub is_private: bool,
    #[serde(rename = "is_of__cpu_architecture")]
    pub cpu_architecture: Option<Reference>,
    #[serde(rename = "belongs_to__device_family")]
    pub device_family: Option<Reference>,
}
