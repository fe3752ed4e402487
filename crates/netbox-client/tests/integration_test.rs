//! Integration tests for NetBox client
//!
//! These tests require a running NetBox instance.
//! Set NETBOX_URL and NETBOX_TOKEN environment variables to run.

use netbox_client::{
    CreateSiteInput, ListSitesInput, NetBoxClient, PatchSiteInput, SiteStatus,
};

fn client_from_env() -> NetBoxClient {
    let url =
        std::env::var("NETBOX_URL").unwrap_or_else(|_| "http://localhost:8001".to_string());
    let token =
        std::env::var("NETBOX_TOKEN").expect("NETBOX_TOKEN environment variable must be set");
    NetBoxClient::new(url, token).expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires running NetBox instance
async fn test_token_is_accepted() {
    let client = client_from_env();
    client
        .validate_token()
        .await
        .expect("Token was rejected by the NetBox instance");
}

#[tokio::test]
#[ignore]
async fn test_list_sites() {
    let client = client_from_env();

    let sites = client
        .dcim()
        .list_sites(&ListSitesInput::default())
        .await
        .expect("Failed to list sites");

    println!("Found {} sites", sites.len());
}

#[tokio::test]
#[ignore]
async fn test_site_lifecycle() {
    let client = client_from_env();

    let input = CreateSiteInput {
        name: "Integration Test Site".to_string(),
        slug: "integration-test-site".to_string(),
        status: Some(SiteStatus::Planned),
        description: "Created by the netbox-client test suite".to_string(),
        ..CreateSiteInput::default()
    };
    let site = client
        .dcim()
        .create_site(&input)
        .await
        .expect("Failed to create site");
    println!("Created site {} ({})", site.name, site.id);

    let fetched = client
        .dcim()
        .get_site(site.id)
        .await
        .expect("Failed to fetch created site");
    assert_eq!(fetched.slug, "integration-test-site");

    let patch = PatchSiteInput {
        id: Some(site.id),
        description: Some("Updated by the netbox-client test suite".to_string()),
        ..PatchSiteInput::default()
    };
    let patched = client
        .dcim()
        .patch_site(&patch)
        .await
        .expect("Failed to patch site");
    assert_eq!(patched.description, "Updated by the netbox-client test suite");

    // Clean up
    client
        .dcim()
        .delete_site(site.id)
        .await
        .expect("Failed to delete site");
}

#[tokio::test]
#[ignore]
async fn test_list_tags() {
    let client = client_from_env();

    let tags = client
        .extras()
        .list_tags(&netbox_client::ListTagsInput::default())
        .await
        .expect("Failed to list tags");

    println!("Found {} tags", tags.len());
}
