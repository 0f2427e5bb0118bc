mod support;

use support::config::write_temp_config;
use vaxsched::domain::DatePolicy;
use vaxsched::error::{ConfigError, Error};
use vaxsched::infrastructure::config::settings::Config;

#[test]
fn config_loads_every_section() {
    let file = write_temp_config(
        r#"
[database]
path = "/var/lib/vaxsched/scheduler.db"
pool_size = 3
busy_timeout_ms = 1500

[logging]
level = "info"
format = "json"

[security]
pbkdf2_iterations = 150000

[schedule]
strict_dates = true
"#,
    );

    let config = Config::load(file.path()).expect("load config");

    assert_eq!(config.database.pool_size, 3);
    assert_eq!(config.database.busy_timeout_ms, 1500);
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.security.pbkdf2_iterations, 150_000);
    assert_eq!(config.schedule.date_policy(), DatePolicy::Strict);
}

#[test]
fn config_rejects_zero_pool_size() {
    let file = write_temp_config("[database]\npool_size = 0\n");

    let result = Config::load(file.path());

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "pool_size",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid pool size error, got {err}"),
        Ok(config) => panic!(
            "Expected pool size 0 to be rejected, got {}",
            config.database.pool_size
        ),
    }
}

#[test]
fn config_rejects_zero_busy_timeout() {
    let file = write_temp_config("[database]\nbusy_timeout_ms = 0\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "busy_timeout_ms",
            ..
        }))
    ));
}

#[test]
fn config_rejects_unknown_fields_type() {
    let file = write_temp_config("[schedule]\nstrict_dates = \"sometimes\"\n");

    assert!(matches!(
        Config::load(file.path()),
        Err(Error::Config(ConfigError::Parse(_)))
    ));
}

#[test]
fn missing_file_is_a_read_error_but_optional_default_is_not() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.toml");

    assert!(matches!(
        Config::load(&missing),
        Err(Error::Config(ConfigError::ReadFile(_)))
    ));
    let config = Config::load_or_default(&missing).expect("defaults");
    assert_eq!(config.security.pbkdf2_iterations, 100_000);
}
