use super::*;
use crate::state::session::MemoryStore;
use crate::test_support::{FakeTransport, api, block_on, session, user_json};

fn profile(id: &str) -> UserProfile {
    serde_json::from_value(user_json(id)).unwrap()
}

fn me_body(id: &str) -> serde_json::Value {
    serde_json::json!({ "status": "success", "data": user_json(id) })
}

fn notice(user_id: &str) -> SubscriptionNotice {
    SubscriptionNotice { user_id: user_id.to_owned() }
}

#[test]
fn load_without_token_redirects_without_request() {
    let transport = FakeTransport::new();
    let outcome = block_on(load(&api(&transport), &session()));
    assert_eq!(outcome, LoadOutcome::Redirect("/auth/login"));
    assert_eq!(transport.sent_count(), 0);
}

#[test]
fn load_sends_bearer_and_caches_profile() {
    let transport = FakeTransport::new();
    transport.respond(200, me_body("u-1"));
    let store = session();
    store.establish("T", None).unwrap();

    let outcome = block_on(load(&api(&transport), &store));
    assert_eq!(outcome, LoadOutcome::Ready(profile("u-1")));
    assert_eq!(store.profile(), Some(profile("u-1")));

    let sent = transport.sent();
    assert_eq!(sent[0].url, "https://api.example.test/api/auth/me");
    assert_eq!(sent[0].bearer.as_deref(), Some("T"));
}

#[test]
fn unauthorized_clears_session_and_redirects() {
    let transport = FakeTransport::new();
    transport.respond(401, serde_json::json!({ "message": "jwt expired" }));
    let store = session();
    store.establish("stale", Some(&profile("u-1"))).unwrap();

    let outcome = block_on(load(&api(&transport), &store));
    assert_eq!(outcome, LoadOutcome::Redirect("/auth/login"));
    assert_eq!(store.token(), None);
    assert_eq!(store.profile(), None);
}

#[test]
fn other_failures_use_fixed_message() {
    let transport = FakeTransport::new();
    transport.respond(500, serde_json::json!({ "message": "database down" }));
    transport.fail("offline");
    transport.respond_raw(200, "<html>");
    let store = session();
    store.establish("T", None).unwrap();
    let client = api(&transport);

    for _ in 0..3 {
        assert_eq!(block_on(load(&client, &store)), LoadOutcome::Error(FETCH_FAILED.to_owned()));
    }
    assert!(store.is_signed_in());
}

#[test]
fn outcome_maps_to_phase() {
    assert_eq!(LoadOutcome::Redirect("/auth/login").into_phase(), None);
    assert_eq!(
        LoadOutcome::Error("x".to_owned()).into_phase(),
        Some(DashboardPhase::Error("x".to_owned()))
    );
    let ready = LoadOutcome::Ready(profile("u-1")).into_phase().unwrap();
    assert_eq!(ready.profile().map(|p| p.id.as_str()), Some("u-1"));
    assert_eq!(DashboardPhase::default(), DashboardPhase::Loading);
}

#[test]
fn notification_matching() {
    let current = profile("u-1");
    assert!(notification_matches(Some(&current), &notice("u-1")));
    assert!(!notification_matches(Some(&current), &notice("u-2")));
    assert!(!notification_matches(Some(&current), &notice("")));
    assert!(!notification_matches(None, &notice("u-1")));

    let blank = UserProfile { id: String::new(), ..profile("x") };
    assert!(!notification_matches(Some(&blank), &notice("")));
}

#[test]
fn matching_notification_refetches_and_toasts() {
    let transport = FakeTransport::new();
    let upgraded = serde_json::json!({
        "data": {
            "id": "u-1",
            "email": "reader@example.com",
            "apiKey": "tldr_live_abc",
            "subscriptionTier": "premium",
            "requestsRemaining": 500,
            "subscriptionExternalId": "sub_01"
        }
    });
    transport.respond(200, upgraded);
    let store = session();
    store.establish("T", None).unwrap();
    let current = profile("u-1");

    let refresh = block_on(handle_notification(&api(&transport), &store, Some(&current), &notice("u-1"))).unwrap();
    assert_eq!(refresh.toast, "Subscription updated 🎉");
    let LoadOutcome::Ready(updated) = refresh.outcome else {
        panic!("expected ready outcome");
    };
    assert_eq!(updated.subscription_tier, SubscriptionTier::Premium);
    assert_eq!(transport.sent_count(), 1);
}

#[test]
fn non_matching_notification_does_nothing() {
    let transport = FakeTransport::new();
    let store = session();
    store.establish("T", None).unwrap();
    let current = profile("u-1");

    assert_eq!(block_on(handle_notification(&api(&transport), &store, Some(&current), &notice("u-9"))), None);
    assert_eq!(block_on(handle_notification(&api(&transport), &store, Some(&current), &notice(""))), None);
    assert_eq!(transport.sent_count(), 0);
}

#[test]
fn portal_link_outcomes() {
    let transport = FakeTransport::new();
    transport.respond(200, serde_json::json!({ "status": "success", "url": "https://billing.example/p/1" }));
    transport.respond(200, serde_json::json!({ "status": "error" }));
    transport.respond(400, serde_json::json!({ "message": "no subscription" }));
    transport.fail("offline");
    let store = session();
    store.establish("T", None).unwrap();
    let client = api(&transport);

    assert_eq!(
        block_on(customer_portal(&client, &store)),
        PortalOutcome::Open("https://billing.example/p/1".to_owned())
    );
    assert_eq!(block_on(customer_portal(&client, &store)), PortalOutcome::Failed(PORTAL_LINK_FAILED));
    assert_eq!(block_on(customer_portal(&client, &store)), PortalOutcome::Failed(PORTAL_LINK_FAILED));
    assert_eq!(block_on(customer_portal(&client, &store)), PortalOutcome::Failed(PORTAL_OPEN_FAILED));
    assert_eq!(transport.sent()[0].bearer.as_deref(), Some("T"));
}

#[test]
fn portal_button_needs_paid_subscription_and_widget() {
    let free = profile("u-1");
    assert!(!portal_available(&free, true));

    let paid = UserProfile {
        subscription_tier: SubscriptionTier::Pro,
        subscription_external_id: Some("sub_01".to_owned()),
        ..profile("u-1")
    };
    assert!(portal_available(&paid, true));
    assert!(!portal_available(&paid, false));
}

#[test]
fn low_usage_modal_rules() {
    let low = UserProfile { requests_remaining: LOW_USAGE_THRESHOLD, ..profile("u-1") };
    let plenty = UserProfile { requests_remaining: LOW_USAGE_THRESHOLD + 1, ..profile("u-1") };
    let paid_low = UserProfile { subscription_tier: SubscriptionTier::Premium, ..low.clone() };

    assert!(low_usage_modal_visible(&low, false));
    assert!(!low_usage_modal_visible(&low, true));
    assert!(!low_usage_modal_visible(&plenty, false));
    assert!(!low_usage_modal_visible(&paid_low, false));
}

#[test]
fn low_usage_dismissal_round_trips_through_storage() {
    let store = MemoryStore::default();
    assert!(!low_usage_dismissed(&store));
    dismiss_low_usage(&store);
    assert!(low_usage_dismissed(&store));
    assert_eq!(store.get(LOW_USAGE_DISMISSED_KEY).as_deref(), Some("true"));
}

#[test]
fn upgrade_banner_only_for_free() {
    assert!(show_upgrade_banner(&profile("u-1")));
    let pro = UserProfile { subscription_tier: SubscriptionTier::Pro, ..profile("u-1") };
    assert!(!show_upgrade_banner(&pro));
}

#[test]
fn api_key_mask_hides_every_character() {
    assert_eq!(mask_api_key("abc"), "•••");
    assert_eq!(mask_api_key(""), "");
}
