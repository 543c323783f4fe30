//! Common test utilities for keyward-api-internal integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::Router;
use http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use keyward_core::{AuthSetId, AuthStatus};
use keyward_store::{DeviceRegistry, PartitionKey};
use serde_json::Value;
use tower::ServiceExt;

/// Build the internal router plus a handle on its registry for seeding
/// and assertions.
pub fn internal_app() -> (Router, DeviceRegistry) {
    let registry = DeviceRegistry::new();
    let app = keyward_api_internal::internal_router(registry.clone());
    (app, registry)
}

/// Send one request and collect (status, parsed JSON body).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    tenant: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(tenant) = tenant {
        builder = builder.header("X-Keyward-Tenant", tenant);
    }

    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let request = builder.body(body).expect("request must build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router must respond");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

/// Ids of the authentication sets seeded by [`init_auth_sets`], one per
/// reachable status.
pub struct SeededAuthSets {
    pub pending: AuthSetId,
    pub accepted: AuthSetId,
    pub rejected: AuthSetId,
    pub preauthorized: AuthSetId,
}

/// Seed a partition with sets in every state: five bootstrap submissions,
/// one accepted, one rejected, plus a preauthorized set.
pub fn init_auth_sets(registry: &DeviceRegistry, partition: &PartitionKey) -> SeededAuthSets {
    let mut pending_ids = Vec::new();
    for n in 0..5 {
        let outcome = registry.submit(
            partition,
            &format!(r#"{{"mac":"00:00:00:00:00:0{n}"}}"#),
            &format!("key-{n}"),
        );
        pending_ids.push(outcome.set.id);
    }

    registry
        .decide(partition, pending_ids[0], AuthStatus::Accepted)
        .expect("seeding accept must succeed");
    registry
        .decide(partition, pending_ids[3], AuthStatus::Rejected)
        .expect("seeding reject must succeed");

    let preauthorized = registry
        .preauthorize(partition, r#"{"mac":"preauth-mac"}"#, "preauth-key")
        .expect("seeding preauthorize must succeed");

    SeededAuthSets {
        pending: pending_ids[1],
        accepted: pending_ids[0],
        rejected: pending_ids[3],
        preauthorized: preauthorized.id,
    }
}
