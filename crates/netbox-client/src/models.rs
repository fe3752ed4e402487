//! Shared NetBox API models
//!
//! These types match the NetBox REST API serializers and are embedded by
//! several resources. Resource-specific models live in their own modules
//! (`dcim::site`, `dcim::region`, ...).

use serde::{Deserialize, Serialize};

/// Tag as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Tag {
    /// Server-assigned identifier
    pub id: u64,
    /// Canonical API URL of this tag
    #[serde(default)]
    pub url: String,
    /// Human-readable display value
    #[serde(default)]
    pub display: String,
    /// Tag name
    pub name: String,
    /// URL-safe identifier
    pub slug: String,
    /// Hex color string, e.g. `9e9e9e`
    #[serde(default)]
    pub color: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: String,
}

/// Lightweight tag form accepted by create/update payloads
///
/// Read operations return full [`Tag`] objects; mutating payloads embed
/// tags as `{name, slug, color}` tuples.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TagCreate {
    /// Tag name
    pub name: String,
    /// URL-safe identifier
    pub slug: String,
    /// Hex color string
    #[serde(default)]
    pub color: String,
}

/// Nested region reference embedded in other resources
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedRegion {
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
}

/// Nested site reference embedded in other resources
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedSite {
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
}

/// Nested site group reference embedded in other resources
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedSiteGroup {
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
}

/// Nested location reference embedded in other resources
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedLocation {
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
}
