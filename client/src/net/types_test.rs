use super::*;

fn profile_json() -> serde_json::Value {
    serde_json::json!({
        "id": "u-1",
        "email": "reader@example.com",
        "apiKey": "tldr_live_abc",
        "subscriptionTier": "premium",
        "requestsRemaining": 480,
        "subscriptionExternalId": "sub_123"
    })
}

#[test]
fn user_profile_decodes_camel_case_fields() {
    let profile: UserProfile = serde_json::from_value(profile_json()).unwrap();
    assert_eq!(profile.id, "u-1");
    assert_eq!(profile.email, "reader@example.com");
    assert_eq!(profile.api_key, "tldr_live_abc");
    assert_eq!(profile.subscription_tier, SubscriptionTier::Premium);
    assert_eq!(profile.requests_remaining, 480);
    assert_eq!(profile.subscription_external_id.as_deref(), Some("sub_123"));
}

#[test]
fn user_profile_accepts_underscore_id_alias() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "_id": "65f0c0ffee",
        "email": "a@b.co"
    }))
    .unwrap();
    assert_eq!(profile.id, "65f0c0ffee");
    assert_eq!(profile.subscription_tier, SubscriptionTier::Free);
    assert_eq!(profile.requests_remaining, 0);
    assert_eq!(profile.subscription_external_id, None);
}

#[test]
fn user_profile_accepts_both_id_keys() {
    let profile: UserProfile = serde_json::from_str(
        r#"{"_id":"65f0c0ffee","id":"65f0c0ffee","email":"a@b.co","subscriptionTier":"pro"}"#,
    )
    .unwrap();
    assert_eq!(profile.id, "65f0c0ffee");
    assert_eq!(profile.subscription_tier, SubscriptionTier::Pro);
}

#[test]
fn user_profile_prefers_id_over_underscore_id() {
    let profile: UserProfile =
        serde_json::from_value(serde_json::json!({ "_id": "legacy", "id": "u-7" })).unwrap();
    assert_eq!(profile.id, "u-7");

    let profile: UserProfile =
        serde_json::from_value(serde_json::json!({ "_id": "legacy", "id": "" })).unwrap();
    assert_eq!(profile.id, "legacy");
}

#[test]
fn unknown_or_null_tier_falls_back_to_free() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "email": "a@b.co",
        "subscriptionTier": "enterprise"
    }))
    .unwrap();
    assert_eq!(profile.subscription_tier, SubscriptionTier::Free);

    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "email": "a@b.co",
        "subscriptionTier": null
    }))
    .unwrap();
    assert_eq!(profile.subscription_tier, SubscriptionTier::Free);
}

#[test]
fn requests_remaining_accepts_float_and_clamps_negative() {
    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "email": "a@b.co",
        "requestsRemaining": 12.0
    }))
    .unwrap();
    assert_eq!(profile.requests_remaining, 12);

    let profile: UserProfile = serde_json::from_value(serde_json::json!({
        "email": "a@b.co",
        "requestsRemaining": -3
    }))
    .unwrap();
    assert_eq!(profile.requests_remaining, 0);
}

#[test]
fn requests_remaining_rejects_fractional_and_strings() {
    let fractional = serde_json::from_value::<UserProfile>(serde_json::json!({
        "email": "a@b.co",
        "requestsRemaining": 1.5
    }));
    assert!(fractional.is_err());

    let string = serde_json::from_value::<UserProfile>(serde_json::json!({
        "email": "a@b.co",
        "requestsRemaining": "12"
    }));
    assert!(string.is_err());
}

#[test]
fn profile_snapshot_serializes_back_to_camel_case() {
    let profile: UserProfile = serde_json::from_value(profile_json()).unwrap();
    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value, profile_json());
}

#[test]
fn tier_labels_and_classes() {
    assert_eq!(SubscriptionTier::Free.label(), "Free");
    assert_eq!(SubscriptionTier::Premium.label(), "Premium");
    assert_eq!(SubscriptionTier::Pro.label(), "Pro");
    assert!(SubscriptionTier::Pro.badge_class().ends_with("--pro"));
    assert!(!SubscriptionTier::Free.is_paid());
    assert!(SubscriptionTier::Premium.is_paid());
}

#[test]
fn can_manage_subscription_requires_paid_tier_and_external_id() {
    let mut profile: UserProfile = serde_json::from_value(profile_json()).unwrap();
    assert!(profile.can_manage_subscription());

    profile.subscription_external_id = Some(String::new());
    assert!(!profile.can_manage_subscription());

    profile.subscription_external_id = Some("sub_123".to_owned());
    profile.subscription_tier = SubscriptionTier::Free;
    assert!(!profile.can_manage_subscription());
}

#[test]
fn register_request_omits_missing_upgrade_id() {
    let body = serde_json::to_value(RegisterRequest {
        email: "a@b.co".to_owned(),
        password: "hunter22".to_owned(),
        extension_upgrade_id: None,
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.co", "password": "hunter22" }));

    let body = serde_json::to_value(RegisterRequest {
        email: "a@b.co".to_owned(),
        password: "hunter22".to_owned(),
        extension_upgrade_id: Some("ext-9".to_owned()),
    })
    .unwrap();
    assert_eq!(body["extensionUpgradeId"], "ext-9");
}

#[test]
fn auth_response_exposes_token_and_nested_user() {
    let body: AuthResponse = serde_json::from_value(serde_json::json!({
        "token": "T",
        "data": { "user": profile_json() }
    }))
    .unwrap();
    assert_eq!(body.token(), Some("T"));
    assert_eq!(body.user().map(|u| u.id.as_str()), Some("u-1"));

    let empty: AuthResponse = serde_json::from_value(serde_json::json!({ "token": "" })).unwrap();
    assert_eq!(empty.token(), None);
    assert!(empty.user().is_none());
}

#[test]
fn portal_link_requires_success_status() {
    let ok: PortalLinkResponse =
        serde_json::from_value(serde_json::json!({ "status": "success", "url": "https://portal.test" })).unwrap();
    assert_eq!(ok.success_url(), Some("https://portal.test"));

    let failed: PortalLinkResponse =
        serde_json::from_value(serde_json::json!({ "status": "error", "url": "https://portal.test" })).unwrap();
    assert_eq!(failed.success_url(), None);

    let missing: PortalLinkResponse = serde_json::from_value(serde_json::json!({ "status": "success" })).unwrap();
    assert_eq!(missing.success_url(), None);
}
