use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.static_dir, None);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", " 8080 "),
        ("STATIC_DIR", "/srv/public"),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.static_dir, Some(PathBuf::from("/srv/public")));
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", ""), ("STATIC_DIR", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.static_dir, None);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn from_lookup_rejects_bad_host() {
    let err = HostConfig::from_lookup(lookup_from(&[("HOST", "not-an-ip")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "HOST", .. }));
}
