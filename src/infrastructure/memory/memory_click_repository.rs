//! In-memory implementation of the click repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::Click;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Process-local click ledger.
///
/// One append-only `Vec<Click>` per short code behind a single `RwLock`.
/// Sequences are created empty by [`ClickRepository::init`] and grow through
/// [`ClickRepository::record`]; nothing ever shrinks or reorders them.
#[derive(Debug, Default)]
pub struct MemoryClickRepository {
    sequences: RwLock<HashMap<String, Vec<Click>>>,
}

impl MemoryClickRepository {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClickRepository for MemoryClickRepository {
    async fn init(&self, code: &str) -> Result<(), AppError> {
        let mut sequences = self.sequences.write().await;
        sequences.entry(code.to_string()).or_default();
        Ok(())
    }

    async fn record(&self, code: &str, click: Click) -> Result<(), AppError> {
        let mut sequences = self.sequences.write().await;
        match sequences.get_mut(code) {
            Some(sequence) => {
                sequence.push(click);
                Ok(())
            }
            None => Err(AppError::NotFound),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Vec<Click>>, AppError> {
        let sequences = self.sequences.read().await;
        Ok(sequences.get(code).cloned())
    }

    async fn count_by_code(&self, code: &str) -> Result<Option<usize>, AppError> {
        let sequences = self.sequences.read().await;
        Ok(sequences.get(code).map(Vec::len))
    }
}
