use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn empty_env_yields_all_defaults() {
    let map = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should build");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.port(), 3000);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.fetch_timeout_secs, 8);
    assert_eq!(cfg.cache_ttl_secs, 600);
    assert_eq!(cfg.max_concurrent_fetches, 8);
}

#[test]
fn environment_override_production() {
    let mut map = HashMap::new();
    map.insert("MOOKKA_ENV", "production");
    let cfg = build_app_config(lookup_from_map(&map)).expect("valid env");
    assert_eq!(cfg.env, Environment::Production);
}

#[test]
fn environment_invalid_is_rejected() {
    let mut map = HashMap::new();
    map.insert("MOOKKA_ENV", "staging");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MOOKKA_ENV"),
        "expected InvalidEnvVar(MOOKKA_ENV), got: {result:?}"
    );
}

#[test]
fn bind_addr_override() {
    let mut map = HashMap::new();
    map.insert("MOOKKA_BIND_ADDR", "127.0.0.1:8787");
    let cfg = build_app_config(lookup_from_map(&map)).expect("valid addr");
    assert_eq!(cfg.bind_addr.port(), 8787);
}

#[test]
fn bind_addr_invalid_is_rejected() {
    let mut map = HashMap::new();
    map.insert("MOOKKA_BIND_ADDR", "not-an-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MOOKKA_BIND_ADDR"),
        "expected InvalidEnvVar(MOOKKA_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn cache_ttl_override() {
    let mut map = HashMap::new();
    map.insert("MOOKKA_CACHE_TTL_SECS", "30");
    let cfg = build_app_config(lookup_from_map(&map)).expect("valid ttl");
    assert_eq!(cfg.cache_ttl_secs, 30);
}

#[test]
fn cache_ttl_invalid_is_rejected() {
    let mut map = HashMap::new();
    map.insert("MOOKKA_CACHE_TTL_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MOOKKA_CACHE_TTL_SECS"),
        "expected InvalidEnvVar(MOOKKA_CACHE_TTL_SECS), got: {result:?}"
    );
}

#[test]
fn max_concurrent_fetches_invalid_is_rejected() {
    let mut map = HashMap::new();
    map.insert("MOOKKA_MAX_CONCURRENT_FETCHES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MOOKKA_MAX_CONCURRENT_FETCHES"),
        "expected InvalidEnvVar(MOOKKA_MAX_CONCURRENT_FETCHES), got: {result:?}"
    );
}
