pub mod placeholder;

pub use placeholder::Placeholder;

#[cfg(test)]
use mockall::automock;

use crate::models::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("requesting seed data: {0}")]
    Request(#[from] reqwest::Error),

    #[error("seed endpoint responded with HTTP {0}")]
    Status(u16),

    #[error("decoding seed data: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One-shot, read-only source of the initial task list.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait SeedSource {
    fn name(&self) -> &str;
    async fn fetch(&self) -> Result<Vec<Task>, SeedError>;
}

pub type ArcSeedSource = Arc<dyn SeedSource + Send + Sync>;
