use super::constants::*;

pub(crate) fn log_level() -> Option<String> {
    Some("info".to_string())
}

pub(crate) fn log_file_path() -> String {
    LOG_FILE_PATH.to_string()
}

pub(crate) fn seed_endpoint() -> String {
    SEED_ENDPOINT.to_string()
}

pub(crate) fn seed_limit() -> Option<usize> {
    Some(SEED_LIMIT)
}

pub(crate) fn seed_timeout_secs() -> Option<u16> {
    Some(SEED_TIMEOUT_SECS)
}

pub(crate) fn notice_duration_ms() -> u64 {
    NOTICE_DURATION_MS
}

pub(crate) fn default_true() -> bool {
    true
}
