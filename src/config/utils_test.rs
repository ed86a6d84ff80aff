use crate::config::constants::{
    LOG_FILE_PATH, NOTICE_DURATION_MS, SEED_ENDPOINT, SEED_LIMIT, SEED_TIMEOUT_SECS,
};

use super::*;

#[test]
fn test_load_configuration() {
    let config = load_configuration("./testdata/config.toml").expect("failed to load config");

    assert!(config.general.verbose);
    assert!(config.general.skip_home);

    let log = &config.log;
    assert_eq!(log.level.as_deref(), Some("debug"));
    let log_filters = log.filters.as_deref().unwrap_or_default();
    assert_eq!(log_filters.len(), 1);
    assert_eq!(log_filters[0].module.as_deref(), Some("taskboard::seed"));
    assert_eq!(log_filters[0].level.as_deref(), Some("trace"));
    assert_eq!(log.file.path, "/var/log/taskboard.log");
    assert!(log.file.append);

    let seed = &config.seed;
    assert!(!seed.enabled);
    assert_eq!(seed.endpoint, "http://localhost:3000");
    assert_eq!(seed.limit, Some(50));
    assert_eq!(seed.timeout_secs, Some(3));

    assert_eq!(config.notice.duration_ms, 5000);
    assert_eq!(
        config.notice.duration(),
        std::time::Duration::from_millis(5000)
    );
}

#[test]
fn test_load_configuration_with_some_default_fields() {
    let config =
        load_configuration("./testdata/config_with_default.toml").expect("failed to load config");

    assert!(!config.general.verbose);
    assert!(!config.general.skip_home);

    let log = &config.log;
    assert_eq!(log.level.as_deref(), Some("info"));
    assert_eq!(log.file.path, LOG_FILE_PATH);

    let seed = &config.seed;
    assert!(seed.enabled);
    assert_eq!(seed.endpoint, SEED_ENDPOINT);
    assert_eq!(seed.limit, Some(SEED_LIMIT));
    assert_eq!(seed.timeout_secs, Some(SEED_TIMEOUT_SECS));

    assert_eq!(config.notice.duration_ms, NOTICE_DURATION_MS);
}

#[test]
fn test_load_configuration_missing_file() {
    let err = load_configuration("./testdata/does_not_exist.toml").unwrap_err();
    assert!(err.to_string().contains("does_not_exist.toml"));
}

#[test]
fn test_resolve_path() {
    let ret = resolve_path("$TASKBOARD_UNSET_DIR/${TASKBOARD_UNSET_FILE}/config.toml")
        .expect("failed to resolve path");
    assert_eq!(ret, "//config.toml");

    let dir = "/tmp/test";
    let user_path = "user_path";
    unsafe {
        std::env::set_var("TASKBOARD_TEST_PATH", dir);
        std::env::set_var("TASKBOARD_USER_PATH", user_path);
    }
    let ret = resolve_path("$TASKBOARD_TEST_PATH/${TASKBOARD_USER_PATH}/config.toml")
        .expect("failed to resolve path");
    assert_eq!(ret, format!("{dir}/{user_path}/config.toml"));
}

#[test]
fn test_basename() {
    assert_eq!(basename("src/store/mod.rs"), "mod.rs");
    assert_eq!(basename("main.rs"), "main.rs");
}
