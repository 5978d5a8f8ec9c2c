use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = PublicConfig::default();
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.pusher_cluster, "us2");
    assert_eq!(cfg.pusher_channel, "user-subscription-channel");
    assert_eq!(cfg.paddle_environment, PaddleEnvironment::Production);
    assert_eq!(cfg.premium_price_id, DEFAULT_PREMIUM_PRICE_ID);
    assert_eq!(cfg.pro_price_id, DEFAULT_PRO_PRICE_ID);
    assert_eq!(cfg.chrome_store_url, None);
    assert!(!cfg.realtime_enabled());
}

#[test]
fn overrides_are_trimmed_and_api_url_loses_trailing_slash() {
    let cfg = PublicConfig::from_lookup(lookup(&[
        ("TLDR_API_URL", " https://api.example.test/ "),
        ("TLDR_PUSHER_KEY", "abc123"),
        ("TLDR_CHROME_STORE_URL", "https://chrome.example.test/tldr"),
    ]));
    assert_eq!(cfg.api_url, "https://api.example.test");
    assert_eq!(cfg.pusher_key, "abc123");
    assert!(cfg.realtime_enabled());
    assert_eq!(cfg.chrome_store_url.as_deref(), Some("https://chrome.example.test/tldr"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = PublicConfig::from_lookup(lookup(&[("TLDR_API_URL", "   "), ("TLDR_PUSHER_CLUSTER", "")]));
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.pusher_cluster, DEFAULT_PUSHER_CLUSTER);
}

#[test]
fn paddle_environment_from_flag() {
    assert_eq!(PaddleEnvironment::from_flag(Some("development")), PaddleEnvironment::Sandbox);
    assert_eq!(PaddleEnvironment::from_flag(Some("Sandbox")), PaddleEnvironment::Sandbox);
    assert_eq!(PaddleEnvironment::from_flag(Some("production")), PaddleEnvironment::Production);
    assert_eq!(PaddleEnvironment::from_flag(Some("staging")), PaddleEnvironment::Production);
    assert_eq!(PaddleEnvironment::from_flag(None), PaddleEnvironment::Production);
    assert_eq!(PaddleEnvironment::Sandbox.as_str(), "sandbox");
}
