use super::*;

fn default_addr() -> SocketAddr {
    "127.0.0.1:3000".parse().expect("valid literal")
}

#[test]
fn no_overrides_keeps_default() {
    let config = ServerConfig::resolve(default_addr(), None, None).expect("valid");
    assert_eq!(config.addr, default_addr());
}

#[test]
fn port_override_keeps_host() {
    let config = ServerConfig::resolve(default_addr(), None, Some("8080")).expect("valid");
    assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().expect("valid literal"));
}

#[test]
fn site_addr_override_replaces_address() {
    let config = ServerConfig::resolve(default_addr(), Some("0.0.0.0:80"), None).expect("valid");
    assert_eq!(config.addr, "0.0.0.0:80".parse::<SocketAddr>().expect("valid literal"));
}

#[test]
fn port_applies_on_top_of_site_addr() {
    let config = ServerConfig::resolve(default_addr(), Some("0.0.0.0:80"), Some("9000")).expect("valid");
    assert_eq!(config.addr, "0.0.0.0:9000".parse::<SocketAddr>().expect("valid literal"));
}

#[test]
fn blank_values_are_ignored() {
    let config = ServerConfig::resolve(default_addr(), Some("  "), Some("")).expect("valid");
    assert_eq!(config.addr, default_addr());
}

#[test]
fn invalid_port_is_rejected() {
    assert!(matches!(
        ServerConfig::resolve(default_addr(), None, Some("http")),
        Err(ConfigError::InvalidPort { value, .. }) if value == "http"
    ));
    assert!(matches!(
        ServerConfig::resolve(default_addr(), None, Some("70000")),
        Err(ConfigError::InvalidPort { .. })
    ));
}

#[test]
fn invalid_site_addr_is_rejected() {
    assert!(matches!(
        ServerConfig::resolve(default_addr(), Some("localhost"), None),
        Err(ConfigError::InvalidAddr { value, .. }) if value == "localhost"
    ));
}
