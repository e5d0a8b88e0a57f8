use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.bind, DEFAULT_BIND);
    assert_eq!(config.dist_dir, PathBuf::from("client/dist"));
    assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_overrides() {
    let config = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BUS_ADMIN_BIND", "127.0.0.1"),
        ("BUS_ADMIN_DIST_DIR", "/srv/bus-admin"),
    ]))
    .unwrap();
    assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.index_path(), PathBuf::from("/srv/bus-admin/index.html"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("BUS_ADMIN_DIST_DIR", "")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
}

#[test]
fn invalid_port_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, HostError::InvalidPort(ref raw) if raw == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT: eighty");
}

#[test]
fn invalid_bind_is_an_error() {
    let err = HostConfig::from_lookup(lookup(&[("BUS_ADMIN_BIND", "localhost")])).unwrap_err();
    assert!(matches!(err, HostError::InvalidBind(_)));
}
