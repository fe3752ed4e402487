//! Location models and operations
//!
//! Locations are nested within a site and may form a tree via a nullable
//! parent. As with regions, no cycle check is performed client-side.

use crate::common;
use crate::dcim::DcimService;
use crate::error::NetBoxError;
use crate::models::{NestedLocation, NestedSite, Tag, TagCreate};
use crate::validate::{
    Validate, ValidationError, ValidationErrors, validate_required, validate_slug,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const LOCATIONS_PATH: [&str; 2] = ["dcim", "locations"];

/// Location model matching the NetBox LocationSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Location {
    /// Server-assigned identifier
    pub id: u64,
    /// Canonical API URL
    #[serde(default)]
    pub url: String,
    /// Human-readable display value
    #[serde(default)]
    pub display: String,
    /// Location name
    pub name: String,
    /// URL-safe identifier
    pub slug: String,
    /// Site this location belongs to
    pub site: NestedSite,
    /// Parent location, if any
    #[serde(default)]
    pub parent: Option<NestedLocation>,
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
    /// Number of racks at this location
    #[serde(default)]
    pub rack_count: u64,
    /// Number of devices at this location
    #[serde(default)]
    pub device_count: u64,
}

/// Filters for listing locations
#[derive(Debug, Clone, Default)]
pub struct ListLocationsInput {
    /// Filter by location name
    pub name: Option<String>,
    /// Filter by site (ID or slug fragment)
    pub site: Option<String>,
    /// Filter by parent location ID
    pub parent: Option<String>,
    /// Filter by tag slug
    pub tag: Option<String>,
    /// Page size
    pub limit: Option<u32>,
    /// Page start offset
    pub offset: Option<u32>,
}

impl ListLocationsInput {
    pub(crate) fn filters(&self) -> Vec<(&'static str, String)> {
        let mut filters = Vec::new();
        if let Some(name) = &self.name {
            filters.push(("name", name.clone()));
        }
        if let Some(site) = &self.site {
            filters.push(("site", site.clone()));
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

/// Input for creating a location
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateLocationInput {
    /// Location name (required)
    pub name: String,
    /// URL-safe identifier (required)
    pub slug: String,
    /// Site ID this location belongs to (required)
    pub site: u64,
    /// Parent location ID
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

impl Validate for CreateLocationInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.record(validate_required("name", &self.name));
        errors.record(validate_slug(&self.slug));
        if self.site == 0 {
            errors.push(ValidationError::new("site", "is required"));
        }
        errors.into_result()
    }
}

/// Input for replacing a location (PUT)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UpdateLocationInput {
    /// Identifier of the location to replace; used in the URL, not the body
    #[serde(skip)]
    pub id: u64,
    /// Location name (required)
    pub name: String,
    /// URL-safe identifier (required)
    pub slug: String,
    /// Site ID this location belongs to (required)
    pub site: u64,
    /// Parent location ID
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

impl Validate for UpdateLocationInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.record(validate_required("name", &self.name));
        errors.record(validate_slug(&self.slug));
        if self.site == 0 {
            errors.push(ValidationError::new("site", "is required"));
        }
        errors.into_result()
    }
}

/// Input for partially updating a location (PATCH)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PatchLocationInput {
    /// Identifier of the location to patch; used in the URL, not the body
    #[serde(skip)]
    pub id: Option<u64>,
    /// New location name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// New site ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<u64>,
    /// New parent location ID
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

impl Validate for PatchLocationInput {
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
    /// List locations matching the input filters
    pub async fn list_locations(
        &self,
        input: &ListLocationsInput,
    ) -> Result<Vec<Location>, NetBoxError> {
        common::list_resources(self.client, &LOCATIONS_PATH, &input.filters()).await
    }

    /// Get a single location by ID
    pub async fn get_location(&self, id: u64) -> Result<Location, NetBoxError> {
        common::get_resource(self.client, &LOCATIONS_PATH, id, "location").await
    }

    /// Create a new location; validates the input before sending
    pub async fn create_location(
        &self,
        input: &CreateLocationInput,
    ) -> Result<Location, NetBoxError> {
        common::create_resource(self.client, &LOCATIONS_PATH, input).await
    }

    /// Replace an existing location (PUT)
    pub async fn update_location(
        &self,
        input: &UpdateLocationInput,
    ) -> Result<Location, NetBoxError> {
        common::update_resource(self.client, &LOCATIONS_PATH, input.id, input, "location").await
    }

    /// Partially update an existing location (PATCH)
    pub async fn patch_location(
        &self,
        input: &PatchLocationInput,
    ) -> Result<Location, NetBoxError> {
        common::patch_resource(self.client, &LOCATIONS_PATH, input.id, input, "location").await
    }

    /// Delete a location
    pub async fn delete_location(&self, id: u64) -> Result<(), NetBoxError> {
        common::delete_resource(self.client, &LOCATIONS_PATH, id, "location").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_site() {
        let input = CreateLocationInput {
            name: "Row A".to_string(),
            slug: "row-a".to_string(),
            site: 0,
            ..CreateLocationInput::default()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "site");
    }

    #[test]
    fn test_create_valid_input_passes() {
        let input = CreateLocationInput {
            name: "Row A".to_string(),
            slug: "row-a".to_string(),
            site: 12,
            ..CreateLocationInput::default()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_aggregates_all_errors() {
        let errors = CreateLocationInput::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "slug", "site"]);
    }

    #[test]
    fn test_patch_requires_id() {
        let errors = PatchLocationInput::default().validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "id");
    }
}
