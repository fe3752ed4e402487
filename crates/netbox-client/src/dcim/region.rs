//! Region models and operations
//!
//! Regions form a tree via a nullable self-referential parent. No cycle
//! check is performed client-side; the server is the authority on
//! hierarchy shape.

use crate::common;
use crate::dcim::DcimService;
use crate::error::NetBoxError;
use crate::models::{NestedRegion, Tag, TagCreate};
use crate::validate::{
    Validate, ValidationError, ValidationErrors, validate_required, validate_slug,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const REGIONS_PATH: [&str; 2] = ["dcim", "regions"];

/// Region model matching the NetBox RegionSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Region {
    /// Server-assigned identifier
    pub id: u64,
    /// Canonical API URL
    #[serde(default)]
    pub url: String,
    /// Human-readable display value
    #[serde(default)]
    pub display: String,
    /// Region name
    pub name: String,
    /// URL-safe identifier
    pub slug: String,
    /// Parent region, if any
    #[serde(default)]
    pub parent: Option<NestedRegion>,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Assigned tags
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Open map of custom field values
    #[serde(default)]
    pub custom_fields: serde_json::Value,
    /// Server-assigned creation timestamp
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Server-assigned last-update timestamp
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    /// Number of sites in this region
    #[serde(default)]
    pub site_count: u64,
}

/// Filters for listing regions
#[derive(Debug, Clone, Default)]
pub struct ListRegionsInput {
    /// Filter by region name
    pub name: Option<String>,
    /// Filter by parent region ID
    pub parent: Option<String>,
    /// Filter by tag slug
    pub tag: Option<String>,
    /// Page size
    pub limit: Option<u32>,
    /// Page start offset
    pub offset: Option<u32>,
}

impl ListRegionsInput {
    pub(crate) fn filters(&self) -> Vec<(&'static str, String)> {
        let mut filters = Vec::new();
        if let Some(name) = &self.name {
            filters.push(("name", name.clone()));
        }
        if let Some(parent) = &self.parent {
            filters.push(("parent", parent.clone()));
        }
        if let Some(tag) = &self.tag {
            filters.push(("tag", tag.clone()));
        }
        if let Some(limit) = self.limit {
            filters.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            filters.push(("offset", offset.to_string()));
        }
        filters
    }
}

/// Input for creating a region
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateRegionInput {
    /// Region name (required)
    pub name: String,
    /// URL-safe identifier (required)
    pub slug: String,
    /// Parent region ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    /// Free-form description
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Tags to assign, as lightweight tuples
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagCreate>,
    /// Custom field values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

impl Validate for CreateRegionInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.record(validate_required("name", &self.name));
        errors.record(validate_slug(&self.slug));
        errors.into_result()
    }
}

/// Input for replacing a region (PUT)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UpdateRegionInput {
    /// Identifier of the region to replace; used in the URL, not the body
    #[serde(skip)]
    pub id: u64,
    /// Region name (required)
    pub name: String,
    /// URL-safe identifier (required)
    pub slug: String,
    /// Parent region ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    /// Free-form description
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Tags to assign, as lightweight tuples
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagCreate>,
    /// Custom field values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

impl Validate for UpdateRegionInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.record(validate_required("name", &self.name));
        errors.record(validate_slug(&self.slug));
        errors.into_result()
    }
}

/// Input for partially updating a region (PATCH)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PatchRegionInput {
    /// Identifier of the region to patch; used in the URL, not the body
    #[serde(skip)]
    pub id: Option<u64>,
    /// New region name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// New parent region ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement tag assignment, by tag ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,
    /// Custom field values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

impl Validate for PatchRegionInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.id.is_none() {
            errors.push(ValidationError::new("id", "is required"));
        }
        if let Some(slug) = &self.slug {
            errors.record(validate_slug(slug));
        }
        errors.into_result()
    }
}

impl DcimService<'_> {
    /// List regions matching the input filters
    pub async fn list_regions(
        &self,
        input: &ListRegionsInput,
    ) -> Result<Vec<Region>, NetBoxError> {
        common::list_resources(self.client, &REGIONS_PATH, &input.filters()).await
    }

    /// Get a single region by ID
    pub async fn get_region(&self, id: u64) -> Result<Region, NetBoxError> {
        common::get_resource(self.client, &REGIONS_PATH, id, "region").await
    }

    /// Create a new region; validates the input before sending
    pub async fn create_region(&self, input: &CreateRegionInput) -> Result<Region, NetBoxError> {
        common::create_resource(self.client, &REGIONS_PATH, input).await
    }

    /// Replace an existing region (PUT)
    pub async fn update_region(&self, input: &UpdateRegionInput) -> Result<Region, NetBoxError> {
        common::update_resource(self.client, &REGIONS_PATH, input.id, input, "region").await
    }

    /// Partially update an existing region (PATCH)
    pub async fn patch_region(&self, input: &PatchRegionInput) -> Result<Region, NetBoxError> {
        common::patch_resource(self.client, &REGIONS_PATH, input.id, input, "region").await
    }

    /// Delete a region
    pub async fn delete_region(&self, id: u64) -> Result<(), NetBoxError> {
        common::delete_resource(self.client, &REGIONS_PATH, id, "region").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_name_and_slug() {
        let errors = CreateRegionInput::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "slug"]);
    }

    #[test]
    fn test_create_valid_input_passes() {
        let input = CreateRegionInput {
            name: "Oceania".to_string(),
            slug: "oceania".to_string(),
            ..CreateRegionInput::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_patch_requires_id() {
        let input = PatchRegionInput {
            slug: Some("oceania".to_string()),
            ..PatchRegionInput::default()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "id");
    }

    #[test]
    fn test_patch_validates_slug_when_set() {
        let input = PatchRegionInput {
            id: Some(3),
            slug: Some("bad slug!".to_string()),
            ..PatchRegionInput::default()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "slug");
    }
}
