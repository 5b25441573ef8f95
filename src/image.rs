// image.rs

use serde::Deserialize;

use crate::odata::Reference;

/// A container image built for one service of a release.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Image {
    pub created_at: String,
    pub modified_at: String,
    pub id: i64,
    pub start_timestamp: String,
    pub end_timestamp: String,
    pub dockerfile: String,
    #[serde(rename = "is_a_build_of__service")]
    pub is_a_build_of_service: Option<Reference>,
    pub image_size: i64,
    #[serde(rename = "is_stored_at__image_location")]
    pub image_location: String,
    pub project_type: String,
    pub error_message: String,
    pub build_log: String,
    pub push_timestamp: String,
    pub status: String,
    pub content_hash: String,
    pub contract: String,
}

/// The release-to-image join entity.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageResponse {
    pub created_at: String,
    pub id: i64,
    #[serde(rename = "is_part_of__release")]
    pub is_part_of_release: Option<Reference>,
    pub image: Vec<Image>,
}
