//! Site group models and operations

use crate::common;
use crate::dcim::DcimService;
use crate::error::NetBoxError;
use crate::models::{NestedSiteGroup, Tag, TagCreate};
use crate::validate::{
    Validate, ValidationError, ValidationErrors, validate_required, validate_slug,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SITE_GROUPS_PATH: [&str; 2] = ["dcim", "site-groups"];

/// Site group model matching the NetBox SiteGroupSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SiteGroup {
    /// Server-assigned identifier
    pub id: u64,
    /// Canonical API URL
    #[serde(default)]
    pub url: String,
    /// Human-readable display value
    #[serde(default)]
    pub display: String,
    /// Group name
    pub name: String,
    /// URL-safe identifier
    pub slug: String,
    /// Parent group, if any
    #[serde(default)]
    pub parent: Option<NestedSiteGroup>,
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
}

/// Filters for listing site groups
#[derive(Debug, Clone, Default)]
pub struct ListSiteGroupsInput {
    /// Filter by group name
    pub name: Option<String>,
    /// Filter by parent group ID
    pub parent: Option<String>,
    /// Filter by tag slug
    pub tag: Option<String>,
    /// Page size
    pub limit: Option<u32>,
    /// Page start offset
    pub offset: Option<u32>,
}

impl ListSiteGroupsInput {
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

/// Input for creating a site group
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateSiteGroupInput {
    /// Group name (required)
    pub name: String,
    /// URL-safe identifier (required)
    pub slug: String,
    /// Parent group ID
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

impl Validate for CreateSiteGroupInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.record(validate_required("name", &self.name));
        errors.record(validate_slug(&self.slug));
        errors.into_result()
    }
}

/// Input for replacing a site group (PUT)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UpdateSiteGroupInput {
    /// Identifier of the group to replace; used in the URL, not the body
    #[serde(skip)]
    pub id: u64,
    /// Group name (required)
    pub name: String,
    /// URL-safe identifier (required)
    pub slug: String,
    /// Parent group ID
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

impl Validate for UpdateSiteGroupInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.record(validate_required("name", &self.name));
        errors.record(validate_slug(&self.slug));
        errors.into_result()
    }
}

/// Input for partially updating a site group (PATCH)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PatchSiteGroupInput {
    /// Identifier of the group to patch; used in the URL, not the body
    #[serde(skip)]
    pub id: Option<u64>,
    /// New group name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// New parent group ID
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

impl Validate for PatchSiteGroupInput {
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
    /// List site groups matching the input filters
    pub async fn list_site_groups(
        &self,
        input: &ListSiteGroupsInput,
    ) -> Result<Vec<SiteGroup>, NetBoxError> {
        common::list_resources(self.client, &SITE_GROUPS_PATH, &input.filters()).await
    }

    /// Get a single site group by ID
    pub async fn get_site_group(&self, id: u64) -> Result<SiteGroup, NetBoxError> {
        common::get_resource(self.client, &SITE_GROUPS_PATH, id, "site group").await
    }

    /// Create a new site group; validates the input before sending
    pub async fn create_site_group(
        &self,
        input: &CreateSiteGroupInput,
    ) -> Result<SiteGroup, NetBoxError> {
        common::create_resource(self.client, &SITE_GROUPS_PATH, input).await
    }

    /// Replace an existing site group (PUT)
    pub async fn update_site_group(
        &self,
        input: &UpdateSiteGroupInput,
    ) -> Result<SiteGroup, NetBoxError> {
        common::update_resource(self.client, &SITE_GROUPS_PATH, input.id, input, "site group")
            .await
    }

    /// Partially update an existing site group (PATCH)
    pub async fn patch_site_group(
        &self,
        input: &PatchSiteGroupInput,
    ) -> Result<SiteGroup, NetBoxError> {
        common::patch_resource(self.client, &SITE_GROUPS_PATH, input.id, input, "site group")
            .await
    }

    /// Delete a site group
    pub async fn delete_site_group(&self, id: u64) -> Result<(), NetBoxError> {
        common::delete_resource(self.client, &SITE_GROUPS_PATH, id, "site group").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_name_and_slug() {
        let errors = CreateSiteGroupInput::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "slug"]);
    }

    #[test]
    fn test_patch_requires_id() {
        let errors = PatchSiteGroupInput::default().validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "id");
    }
}
