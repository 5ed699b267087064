use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _dir, _port) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "this is not valid toml {{{{").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_unparseable_env_port_when_load_then_keeps_default() {
    // Given
    let (_temp, _dir, _port) = setup_config_dir();
    let _port_env = EnvGuard::set("PMS_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
#[serial]
fn given_database_path_with_traversal_when_validate_then_error() {
    // Given
    let (_temp, _dir, _port) = setup_config_dir();
    let _path = EnvGuard::set("PMS_DATABASE_PATH", "../../../etc/passwd");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring(".."));
}

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let (_temp, _dir, _port) = setup_config_dir();
    let _path = EnvGuard::set("PMS_DATABASE_PATH", "/tmp/data.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_empty_log_file_when_validate_then_error() {
    // Given
    let (_temp, _dir, _port) = setup_config_dir();
    let _file = EnvGuard::set("PMS_LOG_FILE", "");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
