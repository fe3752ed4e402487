//! Site models and operations
//!
//! Sites are the top-level DCIM resource, optionally attached to a region
//! and carrying a fixed-vocabulary status.

use crate::common;
use crate::dcim::DcimService;
use crate::error::NetBoxError;
use crate::models::{NestedRegion, Tag, TagCreate};
use crate::validate::{
    Validate, ValidationError, ValidationErrors, validate_latitude, validate_longitude,
    validate_required, validate_slug,
};
use chrono::{DateTime, Utc};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

const SITES_PATH: [&str; 2] = ["dcim", "sites"];

/// Site status choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SiteStatus {
    /// Site is in service
    Active,
    /// Site is planned but not yet built
    Planned,
    /// Site is being commissioned
    Staging,
    /// Site is being taken out of service
    Decommissioning,
    /// Site is out of service
    Retired,
}

impl SiteStatus {
    /// The wire value of this status, as used in query parameters
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Planned => "planned",
            Self::Staging => "staging",
            Self::Decommissioning => "decommissioning",
            Self::Retired => "retired",
        }
    }
}

/// Status value/label pair as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Status {
    /// Machine-readable status value
    pub value: SiteStatus,
    /// Human-readable label, e.g. "Active"
    #[serde(default)]
    pub label: String,
}

/// Site model matching the NetBox SiteSerializer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Site {
    /// Server-assigned identifier
    pub id: u64,
    /// Canonical API URL
    #[serde(default)]
    pub url: String,
    /// Human-readable display value
    #[serde(default)]
    pub display: String,
    /// Site name
    pub name: String,
    /// URL-safe identifier
    pub slug: String,
    /// Operational status
    #[serde(default)]
    pub status: Option<Status>,
    /// Region this site belongs to, if any
    #[serde(default)]
    pub region: Option<NestedRegion>,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Physical street address
    #[serde(default)]
    pub physical_address: String,
    /// Shipping address, when it differs from the physical one
    #[serde(default)]
    pub shipping_address: String,
    /// GPS latitude in decimal degrees
    #[serde(default)]
    pub latitude: Option<f64>,
    /// GPS longitude in decimal degrees
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Free-form comments
    #[serde(default)]
    pub comments: String,
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

/// Filters for listing sites
#[derive(Debug, Clone, Default)]
pub struct ListSitesInput {
    /// Filter by site name
    pub name: Option<String>,
    /// Filter by status
    pub status: Option<SiteStatus>,
    /// Filter by region (ID or slug fragment)
    pub region: Option<String>,
    /// Filter by tag slug
    pub tag: Option<String>,
    /// Page size
    pub limit: Option<u32>,
    /// Page start offset
    pub offset: Option<u32>,
}

impl ListSitesInput {
    pub(crate) fn filters(&self) -> Vec<(&'static str, String)> {
        let mut filters = Vec::new();
        if let Some(name) = &self.name {
            filters.push(("name", name.clone()));
        }
        if let Some(status) = self.status {
            filters.push(("status", status.as_str().to_string()));
        }
        if let Some(region) = &self.region {
            filters.push(("region", region.clone()));
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

/// Input for creating a site
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateSiteInput {
    /// Site name (required)
    pub name: String,
    /// URL-safe identifier (required)
    pub slug: String,
    /// Operational status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SiteStatus>,
    /// Region ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<u64>,
    /// Free-form description
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Physical street address
    #[serde(skip_serializing_if = "String::is_empty")]
    pub physical_address: String,
    /// Shipping address
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shipping_address: String,
    /// GPS latitude in decimal degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// GPS longitude in decimal degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Free-form comments
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comments: String,
    /// Tags to assign, as lightweight tuples
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagCreate>,
    /// Custom field values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

impl Validate for CreateSiteInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.record(validate_required("name", &self.name));
        errors.record(validate_slug(&self.slug));
        if let Some(latitude) = self.latitude {
            errors.record(validate_latitude(latitude));
        }
        if let Some(longitude) = self.longitude {
            errors.record(validate_longitude(longitude));
        }
        errors.into_result()
    }
}

/// Input for replacing a site (PUT)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UpdateSiteInput {
    /// Identifier of the site to replace; used in the URL, not the body
    #[serde(skip)]
    pub id: u64,
    /// Site name (required)
    pub name: String,
    /// URL-safe identifier (required)
    pub slug: String,
    /// Operational status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SiteStatus>,
    /// Region ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<u64>,
    /// Free-form description
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Physical street address
    #[serde(skip_serializing_if = "String::is_empty")]
    pub physical_address: String,
    /// Shipping address
    #[serde(skip_serializing_if = "String::is_empty")]
    pub shipping_address: String,
    /// GPS latitude in decimal degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// GPS longitude in decimal degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Free-form comments
    #[serde(skip_serializing_if = "String::is_empty")]
    pub comments: String,
    /// Tags to assign, as lightweight tuples
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagCreate>,
    /// Custom field values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

impl Validate for UpdateSiteInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.record(validate_required("name", &self.name));
        errors.record(validate_slug(&self.slug));
        if let Some(latitude) = self.latitude {
            errors.record(validate_latitude(latitude));
        }
        if let Some(longitude) = self.longitude {
            errors.record(validate_longitude(longitude));
        }
        errors.into_result()
    }
}

/// Input for partially updating a site (PATCH)
///
/// Only the set fields are serialized into the request body.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PatchSiteInput {
    /// Identifier of the site to patch; used in the URL, not the body
    #[serde(skip)]
    pub id: Option<u64>,
    /// New site name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SiteStatus>,
    /// New region ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<u64>,
    /// New site group ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<u64>,
    /// New tenant ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<u64>,
    /// New facility designation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<String>,
    /// New time zone name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New physical address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_address: Option<String>,
    /// New shipping address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<String>,
    /// New latitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// New longitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// New comments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Replacement tag assignment, by tag ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,
    /// Custom field values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

impl Validate for PatchSiteInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.id.is_none() {
            errors.push(ValidationError::new("id", "is required"));
        }
        if let Some(slug) = &self.slug {
            errors.record(validate_slug(slug));
        }
        if let Some(latitude) = self.latitude {
            errors.record(validate_latitude(latitude));
        }
        if let Some(longitude) = self.longitude {
            errors.record(validate_longitude(longitude));
        }
        errors.into_result()
    }
}

/// Input for creating multiple sites in one request
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkCreateSitesInput {
    /// The sites to create
    pub sites: Vec<CreateSiteInput>,
}

impl Validate for BulkCreateSitesInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        if self.sites.is_empty() {
            return Err(ValidationError::new("sites", "at least one site must be provided").into());
        }

        let mut errors = ValidationErrors::new();
        for (idx, site) in self.sites.iter().enumerate() {
            if let Err(site_errors) = site.validate() {
                errors.extend_prefixed(&format!("sites[{idx}]"), site_errors);
            }
        }
        errors.into_result()
    }
}

/// Input for deleting multiple sites in one request
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkDeleteSitesInput {
    /// Identifiers of the sites to delete
    pub ids: Vec<u64>,
}

impl Validate for BulkDeleteSitesInput {
    fn validate(&self) -> Result<(), ValidationErrors> {
        if self.ids.is_empty() {
            return Err(ValidationError::new("ids", "at least one ID must be provided").into());
        }
        Ok(())
    }
}

impl DcimService<'_> {
    /// List sites matching the input filters
    ///
    /// Returns the first (server-paginated) page of results in server
    /// order; an empty input returns the unfiltered first page.
    ///
    /// # Errors
    /// * [`NetBoxError::UnexpectedStatus`] - the API answered with a
    ///   non-200 status
    /// * [`NetBoxError::Transport`] / [`NetBoxError::Decode`] - the call
    ///   or the response body failed
    pub async fn list_sites(&self, input: &ListSitesInput) -> Result<Vec<Site>, NetBoxError> {
        common::list_resources(self.client, &SITES_PATH, &input.filters()).await
    }

    /// Get a single site by ID
    ///
    /// # Errors
    /// * [`NetBoxError::NotFound`] - no site with this ID exists
    pub async fn get_site(&self, id: u64) -> Result<Site, NetBoxError> {
        common::get_resource(self.client, &SITES_PATH, id, "site").await
    }

    /// Create a new site
    ///
    /// The input is validated first; on validation failure no request is
    /// sent. Expects 201 and returns the created site.
    ///
    /// # Errors
    /// * [`NetBoxError::Validation`] - the input failed pre-flight checks
    pub async fn create_site(&self, input: &CreateSiteInput) -> Result<Site, NetBoxError> {
        common::create_resource(self.client, &SITES_PATH, input).await
    }

    /// Replace an existing site (PUT)
    ///
    /// # Errors
    /// * [`NetBoxError::Validation`] - the input failed pre-flight checks
    /// * [`NetBoxError::NotFound`] - no site with this ID exists
    pub async fn update_site(&self, input: &UpdateSiteInput) -> Result<Site, NetBoxError> {
        common::update_resource(self.client, &SITES_PATH, input.id, input, "site").await
    }

    /// Partially update an existing site (PATCH)
    ///
    /// Serializes only the set fields. The ID is required and checked
    /// before any network call.
    ///
    /// # Errors
    /// * [`NetBoxError::Validation`] - the ID is missing or a set field
    ///   failed its check
    /// * [`NetBoxError::NotFound`] - no site with this ID exists
    pub async fn patch_site(&self, input: &PatchSiteInput) -> Result<Site, NetBoxError> {
        common::patch_resource(self.client, &SITES_PATH, input.id, input, "site").await
    }

    /// Delete a site
    ///
    /// # Errors
    /// * [`NetBoxError::NotFound`] - no site with this ID exists
    pub async fn delete_site(&self, id: u64) -> Result<(), NetBoxError> {
        common::delete_resource(self.client, &SITES_PATH, id, "site").await
    }

    /// Create multiple sites in a single request
    ///
    /// Every element is validated up front; if any element fails, the
    /// whole batch is rejected before any request is sent, with failures
    /// attributed by index (e.g. `sites[1].slug`).
    ///
    /// # Errors
    /// * [`NetBoxError::Validation`] - an element failed pre-flight checks
    pub async fn bulk_create_sites(
        &self,
        input: &BulkCreateSitesInput,
    ) -> Result<Vec<Site>, NetBoxError> {
        input.validate()?;

        let url = self
            .client
            .build_path(&["dcim", "sites", "bulk", "create"]);
        let response = self.client.send(Method::POST, &url, Some(input)).await?;
        match response.status() {
            StatusCode::CREATED => common::decode_body(response).await,
            _ => Err(common::unexpected_status(response).await),
        }
    }

    /// Delete multiple sites in a single request
    ///
    /// # Errors
    /// * [`NetBoxError::Validation`] - the ID list is empty
    pub async fn bulk_delete_sites(
        &self,
        input: &BulkDeleteSitesInput,
    ) -> Result<(), NetBoxError> {
        input.validate()?;

        let url = self
            .client
            .build_path(&["dcim", "sites", "bulk", "delete"]);
        let response = self.client.send(Method::POST, &url, Some(input)).await?;
        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            _ => Err(common::unexpected_status(response).await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreateSiteInput {
        CreateSiteInput {
            name: "Sydney DC1".to_string(),
            slug: "sydney-dc1".to_string(),
            status: Some(SiteStatus::Active),
            ..CreateSiteInput::default()
        }
    }

    #[test]
    fn test_create_valid_input_passes() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_create_empty_name_fails_with_name_error() {
        let input = CreateSiteInput {
            name: String::new(),
            ..valid_create()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "name");
    }

    #[test]
    fn test_create_bad_slug_fails() {
        let input = CreateSiteInput {
            slug: "bad slug!".to_string(),
            ..valid_create()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "slug");

        let input = CreateSiteInput {
            slug: "bad-slug_2".to_string(),
            ..valid_create()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_latitude_out_of_range_fails() {
        for latitude in [91.0, -91.0] {
            let input = CreateSiteInput {
                latitude: Some(latitude),
                ..valid_create()
            };
            let errors = input.validate().unwrap_err();
            assert_eq!(errors.errors()[0].field, "latitude");
        }
        for latitude in [90.0, -90.0] {
            let input = CreateSiteInput {
                latitude: Some(latitude),
                ..valid_create()
            };
            assert!(input.validate().is_ok());
        }
    }

    #[test]
    fn test_create_aggregates_all_errors() {
        let input = CreateSiteInput {
            name: String::new(),
            slug: "bad slug!".to_string(),
            latitude: Some(100.0),
            longitude: Some(-200.0),
            ..CreateSiteInput::default()
        };
        let errors = input.validate().unwrap_err();
        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "slug", "latitude", "longitude"]);
    }

    #[test]
    fn test_patch_without_id_always_fails() {
        let input = PatchSiteInput {
            name: Some("Renamed".to_string()),
            slug: Some("renamed".to_string()),
            ..PatchSiteInput::default()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "id");
    }

    #[test]
    fn test_patch_checks_set_fields_only() {
        let input = PatchSiteInput {
            id: Some(7),
            ..PatchSiteInput::default()
        };
        assert!(input.validate().is_ok());

        let input = PatchSiteInput {
            id: Some(7),
            slug: Some("bad slug!".to_string()),
            longitude: Some(181.0),
            ..PatchSiteInput::default()
        };
        let errors = input.validate().unwrap_err();
        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["slug", "longitude"]);
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let input = PatchSiteInput {
            id: Some(7),
            name: Some("Renamed".to_string()),
            ..PatchSiteInput::default()
        };
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body, serde_json::json!({"name": "Renamed"}));
    }

    #[test]
    fn test_bulk_create_empty_fails() {
        let errors = BulkCreateSitesInput::default().validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "sites");
    }

    #[test]
    fn test_bulk_create_attributes_errors_by_index() {
        let input = BulkCreateSitesInput {
            sites: vec![
                valid_create(),
                CreateSiteInput {
                    slug: "bad slug!".to_string(),
                    ..valid_create()
                },
            ],
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "sites[1].slug");
    }

    #[test]
    fn test_bulk_delete_empty_fails() {
        let errors = BulkDeleteSitesInput::default().validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "ids");
    }

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&SiteStatus::Decommissioning).unwrap(),
            "\"decommissioning\""
        );
        assert_eq!(SiteStatus::Active.as_str(), "active");
    }
}
