//! DCIM API operations
//!
//! Covers sites, regions, locations, and site groups under the
//! `/api/dcim/` path family.

pub mod location;
pub mod region;
pub mod site;
pub mod site_group;

pub use location::*;
pub use region::*;
pub use site::*;
pub use site_group::*;

use crate::client::NetBoxClient;

/// DCIM operations, borrowing a shared [`NetBoxClient`]
///
/// Obtained via [`NetBoxClient::dcim`]. The service holds no state of its
/// own; the client owns the transport and credentials.
#[derive(Debug, Clone, Copy)]
pub struct DcimService<'a> {
    pub(crate) client: &'a NetBoxClient,
}

impl<'a> DcimService<'a> {
    pub(crate) fn new(client: &'a NetBoxClient) -> Self {
        Self { client }
    }
}
