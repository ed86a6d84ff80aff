use std::time::Duration;

pub const SEED_ENDPOINT: &str = "https://jsonplaceholder.typicode.com";

/// Number of demo todos requested from the seed endpoint
pub const SEED_LIMIT: usize = 20;

pub const SEED_TIMEOUT_SECS: u16 = 10;

pub const LOG_FILE_PATH: &str = "/tmp/taskboard.log";

pub const NOTICE_DURATION_MS: u64 = 2000;

pub const FRAME_DURATION: Duration = Duration::from_millis(1000 / 30); // 30 fps
