//! Extras API operations
//!
//! Covers tags under the `/api/extras/` path family.

pub mod tag;

pub use tag::*;

use crate::client::NetBoxClient;

/// Extras operations, borrowing a shared [`NetBoxClient`]
///
/// Obtained via [`NetBoxClient::extras`].
#[derive(Debug, Clone, Copy)]
pub struct ExtrasService<'a> {
    pub(crate) client: &'a NetBoxClient,
}

impl<'a> ExtrasService<'a> {
    pub(crate) fn new(client: &'a NetBoxClient) -> Self {
        Self { client }
    }
}
