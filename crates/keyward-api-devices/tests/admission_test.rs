//! End-to-end admission flow.
//!
//! Drives the full operator workflow for one tenant across both surfaces:
//! bootstrap five devices, review two of them, preauthorize a sixth
//! identity, then accept it and watch the device view follow along.

mod common;

use common::{apps, first_set_id, get_all_devices, make_user_token, send};
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_full_admission_flow() {
    let (management, internal, _) = apps();
    let tenant = "acme";
    let token = make_user_token("operator", Some(tenant));

    // Bootstrap 5 devices.
    for n in 0..5 {
        let (status, body) = send(
            &internal,
            Method::POST,
            "/devices",
            None,
            Some(tenant),
            Some(json!({
                "identity_data": format!(r#"{{"mac":"00:00:00:00:00:0{n}"}}"#),
                "public_key": format!("key-{n}"),
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "pending");
    }

    // All five are pending.
    let devices = get_all_devices(&management, Some(&token)).await;
    assert_eq!(devices.len(), 5);
    assert!(devices.iter().all(|d| d["status"] == "pending"));

    // Review: accept device[0], reject device[3].
    for (index, verdict) in [(0, "accepted"), (3, "rejected")] {
        let set_id = first_set_id(&devices[index]);
        let (status, body) = send(
            &management,
            Method::POST,
            &format!("/devices/{set_id}/decision"),
            Some(&token),
            None,
            Some(json!({"status": verdict})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], verdict);
    }

    // Preauthorize one new identity.
    let (status, _) = send(
        &management,
        Method::POST,
        "/devices",
        Some(&token),
        None,
        Some(json!({
            "identity_data": r#"{"mac":"preauth-mac"}"#,
            "public_key": "preauth-key",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Six devices now; exactly one preauthorized.
    let devices = get_all_devices(&management, Some(&token)).await;
    assert_eq!(devices.len(), 6);
    let preauth: Vec<_> = devices
        .iter()
        .filter(|d| d["status"] == "preauthorized")
        .cloned()
        .collect();
    assert_eq!(preauth.len(), 1);

    // Accept the preauthorized set through the internal surface.
    let set_id = first_set_id(&preauth[0]);
    let (status, body) = send(
        &internal,
        Method::PUT,
        &format!("/devices/{set_id}/status"),
        None,
        Some(tenant),
        Some(json!({"status": "accepted"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "accepted");

    // The change is visible in the very next device query.
    let devices = get_all_devices(&management, Some(&token)).await;
    let accepted: Vec<_> = devices
        .iter()
        .filter(|d| d["id"] == preauth[0]["id"] && d["status"] == "accepted")
        .collect();
    assert_eq!(accepted.len(), 1);
    assert_eq!(
        devices
            .iter()
            .filter(|d| d["status"] == "preauthorized")
            .count(),
        0
    );
}

#[tokio::test]
async fn test_bootstrap_resubmission_is_idempotent() {
    let (management, internal, _) = apps();
    let tenant = "acme";
    let token = make_user_token("operator", Some(tenant));

    let request = json!({
        "identity_data": r#"{"mac":"aa:bb:cc:dd:ee:ff"}"#,
        "public_key": "key-1",
    });

    let (status, first) = send(
        &internal,
        Method::POST,
        "/devices",
        None,
        Some(tenant),
        Some(request.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Same identity and key again: same set, nothing new created.
    let (status, second) = send(
        &internal,
        Method::POST,
        "/devices",
        None,
        Some(tenant),
        Some(request),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second["id"], first["id"]);

    let devices = get_all_devices(&management, Some(&token)).await;
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0]["auth_sets"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_rebootstrap_with_new_key_adds_set_to_same_device() {
    let (management, internal, _) = apps();
    let tenant = "acme";
    let token = make_user_token("operator", Some(tenant));

    for key in ["key-old", "key-new"] {
        let (status, _) = send(
            &internal,
            Method::POST,
            "/devices",
            None,
            Some(tenant),
            Some(json!({
                "identity_data": r#"{"mac":"aa:bb:cc:dd:ee:ff"}"#,
                "public_key": key,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    // One device, two authentication sets.
    let devices = get_all_devices(&management, Some(&token)).await;
    assert_eq!(devices.len(), 1);
    assert_eq!(devices[0]["auth_sets"].as_array().unwrap().len(), 2);
    assert_eq!(devices[0]["status"], "pending");
}
