//! Common test utilities for keyward-api-devices integration tests.
//!
//! Builds the management router together with the internal router over one
//! shared registry, so tests can drive the same flows operators and
//! internal services do in production.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use keyward_store::DeviceRegistry;
use keyward_tenant::{OpenTenantResolver, TenantResolver};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Both API surfaces over one shared registry, tenant claims unvetted.
pub fn apps() -> (Router, Router, DeviceRegistry) {
    apps_with_resolver(Arc::new(OpenTenantResolver))
}

/// Both API surfaces with an injected tenant resolver.
pub fn apps_with_resolver(
    resolver: Arc<dyn TenantResolver>,
) -> (Router, Router, DeviceRegistry) {
    let registry = DeviceRegistry::new();
    let management = keyward_api_devices::devices_router(registry.clone(), resolver);
    let internal = keyward_api_internal::internal_router(registry.clone());
    (management, internal, registry)
}

/// Builds an (unsigned) bearer token the way the fronting gateway would:
/// `sub` for the operator, `keyward.tenant` for the tenant scope.
pub fn make_user_token(sub: &str, tenant: Option<&str>) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let mut claims = json!({ "sub": sub });
    if let Some(tenant) = tenant {
        claims["keyward.tenant"] = Value::String(tenant.to_string());
    }
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.")
}

/// Send one request and collect (status, parsed JSON body).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    bearer: Option<&str>,
    tenant_header: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    if let Some(tenant) = tenant_header {
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
    let parsed = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, parsed)
}

/// First authentication-set id of a device JSON object.
pub fn first_set_id(device: &Value) -> String {
    device["auth_sets"][0]["id"]
        .as_str()
        .expect("device must have an auth set id")
        .to_string()
}

/// List devices through the management surface.
pub async fn get_all_devices(management: &Router, bearer: Option<&str>) -> Vec<Value> {
    let (status, body) = send(management, Method::GET, "/devices", bearer, None, None).await;
    assert_eq!(status, StatusCode::OK, "device listing must succeed");
    body.as_array().expect("device list must be an array").clone()
}

/// Seed a tenant the way a deployment fills up: five device bootstrap
/// submissions, one accepted, one rejected, one preauthorized identity.
/// Returns the resulting device list (6 entries).
pub async fn init_auth_sets(
    management: &Router,
    internal: &Router,
    tenant: Option<&str>,
) -> Vec<Value> {
    let bearer = tenant.map(|t| make_user_token("user", Some(t)));
    let bearer = bearer.as_deref();

    // 5 bootstrap submissions, all landing as pending sets.
    for n in 0..5 {
        let (status, _) = send(
            internal,
            Method::POST,
            "/devices",
            None,
            tenant,
            Some(json!({
                "identity_data": format!(r#"{{"mac":"00:00:00:00:00:0{n}"}}"#),
                "public_key": format!("key-{n}"),
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "bootstrap {n} must create");
    }

    let devices = get_all_devices(management, bearer).await;
    assert_eq!(devices.len(), 5);

    // Operator review: accept one, reject one.
    for (index, verdict) in [(0, "accepted"), (3, "rejected")] {
        let set_id = first_set_id(&devices[index]);
        let (status, _) = send(
            management,
            Method::POST,
            &format!("/devices/{set_id}/decision"),
            bearer,
            None,
            Some(json!({"status": verdict})),
        )
        .await;
        assert_eq!(status, StatusCode::OK, "decision {verdict} must succeed");
    }

    // Preauthorize one new identity.
    let (status, _) = send(
        management,
        Method::POST,
        "/devices",
        bearer,
        None,
        Some(json!({
            "identity_data": r#"{"mac":"preauth-mac"}"#,
            "public_key": "preauth-key",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "preauthorize must succeed");

    let devices = get_all_devices(management, bearer).await;
    assert_eq!(devices.len(), 6);
    devices
}
