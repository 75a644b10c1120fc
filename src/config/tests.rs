use super::*;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::net::IpAddr;
use std::path::PathBuf;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_labmatch_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var(Config::ENV_PORT);
        env::remove_var(Config::ENV_BIND_ADDR);
        env::remove_var(Config::ENV_CATALOG_PATH);
        env::remove_var(Config::ENV_FALLBACK_URL);
        env::remove_var(Config::ENV_FALLBACK_TIMEOUT_MS);
    }
}

fn catalog_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(file, "[]").expect("write");
    file
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert_eq!(config.catalog_path, PathBuf::from("./catalog.json"));
    assert!(config.fallback_url.is_none());
    assert_eq!(config.fallback_timeout_ms, 2_000);
    assert_eq!(config.fallback_timeout(), std::time::Duration::from_secs(2));
}

#[test]
fn test_socket_addr() {
    let config = Config::default();
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");

    let config = Config {
        port: 3000,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
fn test_socket_addr_ipv6_is_parseable() {
    let config = Config {
        bind_addr: IpAddr::V6(std::net::Ipv6Addr::LOCALHOST),
        ..Default::default()
    };
    assert_eq!(config.socket_addr(), "[::1]:8080");
    assert!(config.socket_addr().parse::<std::net::SocketAddr>().is_ok());
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_labmatch_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert!(config.fallback_url.is_none());
}

#[test]
#[serial]
fn test_from_env_custom_port() {
    clear_labmatch_env();

    with_env_vars(&[("LABMATCH_PORT", "3000")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(config.port, 3000);
    });
}

#[test]
#[serial]
fn test_from_env_ipv6_bind_addr() {
    clear_labmatch_env();

    with_env_vars(&[("LABMATCH_BIND_ADDR", "::1")], || {
        let config = Config::from_env().expect("should parse");
        assert_eq!(
            config.bind_addr,
            IpAddr::V6(std::net::Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))
        );
    });
}

#[test]
#[serial]
fn test_from_env_fallback_settings() {
    clear_labmatch_env();

    with_env_vars(
        &[
            ("LABMATCH_CATALOG_PATH", "/srv/labmatch/catalog.json"),
            ("LABMATCH_FALLBACK_URL", " http://search.internal:9000 "),
            ("LABMATCH_FALLBACK_TIMEOUT_MS", "750"),
        ],
        || {
            let config = Config::from_env().expect("should parse");

            assert_eq!(
                config.catalog_path,
                PathBuf::from("/srv/labmatch/catalog.json")
            );
            assert_eq!(
                config.fallback_url.as_deref(),
                Some("http://search.internal:9000")
            );
            assert_eq!(config.fallback_timeout_ms, 750);
        },
    );
}

#[test]
#[serial]
fn test_from_env_blank_fallback_url_disables_fallback() {
    clear_labmatch_env();

    with_env_vars(&[("LABMATCH_FALLBACK_URL", "   ")], || {
        let config = Config::from_env().expect("should parse");
        assert!(config.fallback_url.is_none());
    });
}

#[test]
#[serial]
fn test_from_env_invalid_timeout_uses_default() {
    clear_labmatch_env();

    with_env_vars(&[("LABMATCH_FALLBACK_TIMEOUT_MS", "soon")], || {
        let config = Config::from_env().expect("should parse with fallback");
        assert_eq!(config.fallback_timeout_ms, 2_000);
    });
}

#[test]
#[serial]
fn test_invalid_port_zero() {
    clear_labmatch_env();

    with_env_vars(&[("LABMATCH_PORT", "0")], || {
        let err = Config::from_env().expect_err("port 0 is rejected");
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
        assert!(err.to_string().contains("invalid port"));
    });
}

#[test]
#[serial]
fn test_invalid_port_not_number() {
    clear_labmatch_env();

    with_env_vars(&[("LABMATCH_PORT", "not_a_port")], || {
        let err = Config::from_env().expect_err("should fail");
        assert!(matches!(err, ConfigError::PortParseError { .. }));
        assert!(err.to_string().contains("failed to parse port"));
    });
}

#[test]
#[serial]
fn test_invalid_port_too_large() {
    clear_labmatch_env();

    with_env_vars(&[("LABMATCH_PORT", "99999")], || {
        let err = Config::from_env().expect_err("should fail");
        assert!(matches!(err, ConfigError::PortParseError { .. }));
    });
}

#[test]
#[serial]
fn test_invalid_bind_addr() {
    clear_labmatch_env();

    with_env_vars(&[("LABMATCH_BIND_ADDR", "not.an.ip.address")], || {
        let err = Config::from_env().expect_err("should fail");
        assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
        assert!(err.to_string().contains("failed to parse bind address"));
    });
}

#[test]
fn test_validate_missing_catalog() {
    let config = Config {
        catalog_path: PathBuf::from("/nonexistent/path/to/catalog.json"),
        ..Default::default()
    };

    let err = config.validate().expect_err("catalog is missing");
    assert!(matches!(err, ConfigError::PathNotFound { .. }));
}

#[test]
fn test_validate_catalog_is_directory() {
    let config = Config {
        catalog_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src"),
        ..Default::default()
    };

    let err = config.validate().expect_err("directory is not a catalog");
    assert!(matches!(err, ConfigError::NotAFile { .. }));
}

#[test]
fn test_validate_rejects_non_http_fallback_url() {
    let catalog = catalog_file();
    let config = Config {
        catalog_path: catalog.path().to_path_buf(),
        fallback_url: Some("search.internal:9000".to_string()),
        ..Default::default()
    };

    let err = config.validate().expect_err("scheme is required");
    assert!(matches!(err, ConfigError::InvalidFallbackUrl { .. }));
}

#[test]
fn test_validate_success() {
    let catalog = catalog_file();
    let config = Config {
        catalog_path: catalog.path().to_path_buf(),
        fallback_url: Some("https://search.internal".to_string()),
        ..Default::default()
    };

    assert!(config.validate().is_ok());
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::InvalidPort {
        value: "0".to_string(),
    };
    assert!(err.to_string().contains("invalid port"));
    assert!(err.to_string().contains("1 and 65535"));

    let err = ConfigError::PathNotFound {
        path: PathBuf::from("/some/catalog.json"),
    };
    assert!(err.to_string().contains("/some/catalog.json"));
}
