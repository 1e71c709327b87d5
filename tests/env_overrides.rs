//! Integration tests for settings overrides from the environment
//!
//! These tests mutate the real process environment, so they are
//! serialized and remove every override variable they touch.

use serial_test::serial;

use rust_proxy_env::ProxySettings;

const OVERRIDE_KEYS: [&str; 6] = [
    "PROXY_ENABLED",
    "PROXY_HOST",
    "PROXY_SCHEME",
    "PROXY_PORT",
    "PROXY_USERNAME",
    "PROXY_PASSWORD",
];

fn clear_override_env() {
    for key in OVERRIDE_KEYS {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn load_config_applies_env_overrides() {
    clear_override_env();

    std::env::set_var("PROXY_ENABLED", "true");
    std::env::set_var("PROXY_HOST", "proxy.local");
    std::env::set_var("PROXY_SCHEME", "socks5");
    std::env::set_var("PROXY_PORT", "1080");
    std::env::set_var("PROXY_USERNAME", "bob");
    std::env::set_var("PROXY_PASSWORD", "hunter2");

    let settings = ProxySettings::load_config().unwrap();
    assert!(settings.enabled);
    assert_eq!(settings.host, "proxy.local");
    assert_eq!(settings.scheme, "socks5");
    assert_eq!(settings.port, "1080");
    assert_eq!(settings.username, "bob");
    assert_eq!(settings.password, "hunter2");

    clear_override_env();
}

#[test]
#[serial]
fn absent_override_keys_leave_settings_untouched() {
    clear_override_env();

    let mut settings = ProxySettings {
        enabled: true,
        host: "1.2.3.4".to_string(),
        scheme: "http".to_string(),
        port: "3128".to_string(),
        username: String::new(),
        password: String::new(),
    };

    // Only one key set; the rest must keep their values
    std::env::set_var("PROXY_HOST", "5.6.7.8");
    settings.apply_env_overrides();

    assert!(settings.enabled);
    assert_eq!(settings.host, "5.6.7.8");
    assert_eq!(settings.scheme, "http");
    assert_eq!(settings.port, "3128");

    clear_override_env();
}

#[test]
#[serial]
fn enabled_override_is_case_insensitive_and_strict() {
    clear_override_env();

    let mut settings = ProxySettings::default();
    std::env::set_var("PROXY_ENABLED", "TRUE");
    settings.apply_env_overrides();
    assert!(settings.enabled);

    // Anything other than "true" disables
    std::env::set_var("PROXY_ENABLED", "yes");
    settings.apply_env_overrides();
    assert!(!settings.enabled);

    clear_override_env();
}
