#[cfg(test)]
#[path = "placeholder_test.rs"]
mod tests;

use std::{sync::Arc, time};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::{SeedConfig, user_agent};
use crate::models::{Status, Task, TaskId};

use super::{ArcSeedSource, SeedError, SeedSource};

const COMPLETED: &str = "Completed";
const NOT_COMPLETED: &str = "Not Completed";

/// Reads demo todos from a jsonplaceholder-compatible endpoint.
pub struct Placeholder {
    endpoint: String,
    limit: Option<usize>,
    timeout: Option<time::Duration>,
}

#[async_trait]
impl SeedSource for Placeholder {
    fn name(&self) -> &str {
        &self.endpoint
    }

    async fn fetch(&self) -> Result<Vec<Task>, SeedError> {
        let mut req = reqwest::Client::new()
            .get(format!("{}/todos", self.endpoint.trim_end_matches('/')))
            .header("User-Agent", user_agent());

        if let Some(limit) = self.limit {
            req = req.query(&[("_limit", limit)]);
        }

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        let res = req.send().await?;
        if !res.status().is_success() {
            return Err(SeedError::Status(res.status().as_u16()));
        }

        let body = res.text().await?;
        let records: Vec<serde_json::Value> = serde_json::from_str(&body)?;
        let total = records.len();

        // A bad record is skipped, the rest of the page still loads.
        let tasks = records
            .into_iter()
            .filter_map(|record| match serde_json::from_value::<TodoResponse>(record) {
                Ok(todo) => Some(Task::from(todo)),
                Err(err) => {
                    log::warn!("Skipping malformed todo from {}: {}", self.endpoint, err);
                    None
                }
            })
            .collect::<Vec<_>>();
        log::debug!(
            "Fetched {} todos from {} ({} skipped)",
            tasks.len(),
            self.endpoint,
            total - tasks.len()
        );

        Ok(tasks)
    }
}

impl From<Placeholder> for ArcSeedSource {
    fn from(value: Placeholder) -> Self {
        Arc::new(value)
    }
}

impl From<&SeedConfig> for Placeholder {
    fn from(value: &SeedConfig) -> Self {
        let mut placeholder = Placeholder::default().with_endpoint(&value.endpoint);
        placeholder.limit = value.limit;
        if let Some(secs) = value.timeout_secs {
            placeholder = placeholder.with_timeout(time::Duration::from_secs(secs as u64));
        }
        placeholder
    }
}

impl Placeholder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_timeout(mut self, timeout: time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn timeout(&self) -> Option<time::Duration> {
        self.timeout
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            endpoint: crate::config::constants::SEED_ENDPOINT.to_string(),
            limit: Some(crate::config::constants::SEED_LIMIT),
            timeout: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TodoResponse {
    id: TaskId,
    title: String,
    completed: bool,
}

impl From<TodoResponse> for Task {
    fn from(value: TodoResponse) -> Self {
        let (description, status) = if value.completed {
            (COMPLETED, Status::Done)
        } else {
            (NOT_COMPLETED, Status::ToDo)
        };
        Task::new(value.id, value.title, description, status)
    }
}
