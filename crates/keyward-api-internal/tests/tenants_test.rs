//! Integration tests for internal tenant provisioning.

mod common;

use common::{internal_app, send};
use http::{Method, StatusCode};
use keyward_core::TenantId;
use keyward_store::{PartitionKey, SCHEMA_VERSION};
use serde_json::json;

#[tokio::test]
async fn test_create_ok() {
    let (app, registry) = internal_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/tenants",
        None,
        Some(json!({"tenant_id": "foobar"})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["partition"], "keyward-foobar");

    // The partition exists and carries its initialization marker.
    let tenant: TenantId = "foobar".parse().unwrap();
    let partition = PartitionKey::for_tenant(&tenant);
    assert!(registry.is_provisioned(&partition));
    let marker = registry.marker(&partition).expect("marker must exist");
    assert_eq!(marker.schema_version, SCHEMA_VERSION);
}

#[tokio::test]
async fn test_create_twice() {
    let (app, registry) = internal_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/tenants",
        None,
        Some(json!({"tenant_id": "foobar"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let marker_before = registry
        .marker(&PartitionKey::for_tenant(&"foobar".parse().unwrap()))
        .unwrap();

    // Creating once more should not fail
    let (status, _) = send(
        &app,
        Method::POST,
        "/tenants",
        None,
        Some(json!({"tenant_id": "foobar"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // And must not have reseeded the partition.
    let marker_after = registry
        .marker(&PartitionKey::for_tenant(&"foobar".parse().unwrap()))
        .unwrap();
    assert_eq!(marker_before, marker_after);
}

#[tokio::test]
async fn test_create_empty() {
    let (app, registry) = internal_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/tenants",
        None,
        Some(json!({"tenant_id": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert!(!registry.is_provisioned(&PartitionKey::default_partition()));
}

#[tokio::test]
async fn test_create_blank() {
    let (app, _registry) = internal_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/tenants",
        None,
        Some(json!({"tenant_id": "   "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
