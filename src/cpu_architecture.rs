// cpu_architecture.rs

use serde::Deserialize;

/// A CPU architecture entity, usually decoded out of an expanded
/// `is_of__cpu_architecture` relation via [`crate::odata::Reference::decode_as`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CpuArchitecture {
    pub id: i64,
    pub slug: String,
    pub name: String,
}
