use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("HOST", "127.0.0.1"),
        ("SITE_ROOT", "/srv/site"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn blank_values_fall_back() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("HOST", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.host, DEFAULT_HOST);
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidEnv { name: "PORT", .. }));
    assert!(err.to_string().contains("eighty"));
}
