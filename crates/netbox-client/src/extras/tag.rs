//! Tag inputs and operations
//!
//! The [`Tag`](crate::models::Tag) read model lives in `models` because
//! other resources embed it; this module holds the CRUD surface.

use crate::common;
use crate::error::NetBoxError;
use crate::extras::ExtrasService;
use crate::models::Tag;
use crate::validate::{
    Validate, ValidationError, ValidationErrors, validate_required, validate_slug,
};
use serde::Serialize;

const TAGS_PATH: [&str; 2] = ["extras", "tags"];

/// Filters for listing tags
#[derive(Debug, Clone, Default)]
pub struct ListTagsInput {
    /// Filter by tag name
    pub name: Option<String>,
    /// Filter by slug
    pub slug: Option<String>,
    /// Filter by color hex string
    pub color: Option<String>,
    /// Page size
    pub limit: Option<u32>,
    /// Page start offset
    pub offset: Option<u32>,
}

impl ListTagsInput {
    pub(crate) fn filters(&self) -> Vec<(&'static str, String)> {
        let mut filters = Vec::new();
        if let Some(name) = &self.name {
            filters.push(("name", name.clone()));
        }
        if let Some(slug) = &self.slug {
            filters.push(("slug", slug.clone()));
        }
        if let Some(color) = &self.color {
            filters.push(("color", color.clone()));
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

/// Input for creating a tag
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateTagInput {
    /// Tag name (required)
    pub name: String,
    /// URL-safe identifier (required)
    pub slug: String,
    /// Hex color string, e.g. `9e9e9e`
    pub color: String,
    /// Free-form description
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Object types this tag may be applied to
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub object_types: Vec<String>,
}

impl Validate for CreateTagInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.record(validate_required("name", &self.name));
        errors.record(validate_slug(&self.slug));
        errors.into_result()
    }
}

/// Input for replacing a tag (PUT)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UpdateTagInput {
    /// Identifier of the tag to replace; used in the URL, not the body
    #[serde(skip)]
    pub id: u64,
    /// Tag name (required)
    pub name: String,
    /// URL-safe identifier (required)
    pub slug: String,
    /// Hex color string
    pub color: String,
    /// Free-form description
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Object types this tag may be applied to
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub object_types: Vec<String>,
}

impl Validate for UpdateTagInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.record(validate_required("name", &self.name));
        errors.record(validate_slug(&self.slug));
        errors.into_result()
    }
}

/// Input for partially updating a tag (PATCH)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PatchTagInput {
    /// Identifier of the tag to patch; used in the URL, not the body
    #[serde(skip)]
    pub id: Option<u64>,
    /// New tag name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// New color hex string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New applicable object types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_types: Option<Vec<String>>,
}

impl Validate for PatchTagInput {
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

impl ExtrasService<'_> {
    /// List tags matching the input filters
    pub async fn list_tags(&self, input: &ListTagsInput) -> Result<Vec<Tag>, NetBoxError> {
        common::list_resources(self.client, &TAGS_PATH, &input.filters()).await
    }

    /// Get a single tag by ID
    pub async fn get_tag(&self, id: u64) -> Result<Tag, NetBoxError> {
        common::get_resource(self.client, &TAGS_PATH, id, "tag").await
    }

    /// Create a new tag; validates the input before sending
    pub async fn create_tag(&self, input: &CreateTagInput) -> Result<Tag, NetBoxError> {
        common::create_resource(self.client, &TAGS_PATH, input).await
    }

    /// Replace an existing tag (PUT)
    pub async fn update_tag(&self, input: &UpdateTagInput) -> Result<Tag, NetBoxError> {
        common::update_resource(self.client, &TAGS_PATH, input.id, input, "tag").await
    }

    /// Partially update an existing tag (PATCH)
    pub async fn patch_tag(&self, input: &PatchTagInput) -> Result<Tag, NetBoxError> {
        common::patch_resource(self.client, &TAGS_PATH, input.id, input, "tag").await
    }

    /// Delete a tag
    pub async fn delete_tag(&self, id: u64) -> Result<(), NetBoxError> {
        common::delete_resource(self.client, &TAGS_PATH, id, "tag").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_name_and_slug() {
        let errors = CreateTagInput::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "slug"]);
    }

    #[test]
    fn test_patch_requires_id_and_checks_slug() {
        let input = PatchTagInput {
            slug: Some("bad slug!".to_string()),
            ..PatchTagInput::default()
        };
        let errors = input.validate().unwrap_err();
        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["id", "slug"]);
    }
}
