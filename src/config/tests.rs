use super::*;
use serial_test::serial;
use std::env;
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

fn clear_amoura_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("AMOURA_PORT");
        env::remove_var("AMOURA_BIND_ADDR");
        env::remove_var("AMOURA_MODELS_DIR");
        env::remove_var("AMOURA_DATA_DIR");
        env::remove_var("AMOURA_MATCH_THRESHOLD");
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.port, 8080);
    assert_eq!(
        config.bind_addr,
        IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
    );
    assert_eq!(config.models_dir, PathBuf::from("./ml_models"));
    assert_eq!(config.data_dir, PathBuf::from("./data/users"));
    assert_eq!(config.match_threshold, 0.5);
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
#[serial]
fn test_from_env_with_defaults() {
    clear_amoura_env();

    let config = Config::from_env().expect("should parse with defaults");

    assert_eq!(config.port, 8080);
    assert_eq!(config.match_threshold, 0.5);
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_amoura_env();

    let config = with_env_vars(
        &[
            ("AMOURA_PORT", "9000"),
            ("AMOURA_MODELS_DIR", "/opt/amoura/models"),
            ("AMOURA_MATCH_THRESHOLD", "0.65"),
        ],
        || Config::from_env().expect("should parse overrides"),
    );

    assert_eq!(config.port, 9000);
    assert_eq!(config.models_dir, PathBuf::from("/opt/amoura/models"));
    assert_eq!(config.match_threshold, 0.65);
}

#[test]
#[serial]
fn test_from_env_rejects_zero_port() {
    clear_amoura_env();

    let result = with_env_vars(&[("AMOURA_PORT", "0")], Config::from_env);
    assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
}

#[test]
#[serial]
fn test_from_env_rejects_out_of_range_threshold() {
    clear_amoura_env();

    let result = with_env_vars(&[("AMOURA_MATCH_THRESHOLD", "1.5")], Config::from_env);
    assert!(matches!(
        result,
        Err(ConfigError::InvalidThreshold { value }) if value == 1.5
    ));
}

#[test]
#[serial]
fn test_from_env_rejects_unparseable_threshold() {
    clear_amoura_env();

    let result = with_env_vars(&[("AMOURA_MATCH_THRESHOLD", "half")], Config::from_env);
    assert!(matches!(
        result,
        Err(ConfigError::ThresholdParseError { .. })
    ));
}

#[test]
fn test_validate_rejects_file_as_models_dir() {
    let file = tempfile::NamedTempFile::new().expect("temp file");

    let config = Config {
        models_dir: file.path().to_path_buf(),
        ..Default::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::NotADirectory { .. })
    ));
}

#[test]
fn test_validate_accepts_missing_dirs() {
    let config = Config {
        models_dir: PathBuf::from("/definitely/not/present"),
        data_dir: PathBuf::from("/also/not/present"),
        ..Default::default()
    };

    // Missing directories are an artifact-loading concern, not a config one.
    assert!(config.validate().is_ok());
}
