//! NetBox REST API Client
//!
//! A Rust client library for the NetBox DCIM and Extras APIs: sites,
//! regions, locations, site groups, and tags, with full
//! list/get/create/update/patch/delete coverage plus bulk site
//! operations.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::{NetBoxClient, CreateSiteInput, SiteStatus};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = NetBoxClient::new("http://netbox:8080", "your-api-token")?;
//!
//! // Create a site (input is validated before any request is sent)
//! let input = CreateSiteInput {
//!     name: "Sydney DC1".to_string(),
//!     slug: "sydney-dc1".to_string(),
//!     status: Some(SiteStatus::Active),
//!     ..CreateSiteInput::default()
//! };
//! let site = client.dcim().create_site(&input).await?;
//!
//! // Fetch it back and delete it
//! let fetched = client.dcim().get_site(site.id).await?;
//! client.dcim().delete_site(fetched.id).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **DCIM Operations**: sites, regions, locations, site groups
//! - **Extras Operations**: tags
//! - **Pre-flight Validation**: required fields, slug format, and
//!   latitude/longitude ranges checked locally, with every violation
//!   aggregated into one field-tagged error list
//! - **Retry Logic**: automatic retry on network errors and 5xx
//!   responses with a fixed wait between attempts

pub mod client;
pub mod common;
pub mod dcim;
pub mod error;
pub mod extras;
pub mod models;
pub mod validate;

pub use client::{NetBoxClient, NetBoxClientBuilder};
pub use common::PaginatedResponse;
pub use dcim::*;
pub use error::NetBoxError;
pub use extras::*;
pub use models::*;
pub use validate::{Validate, ValidationError, ValidationErrors};
