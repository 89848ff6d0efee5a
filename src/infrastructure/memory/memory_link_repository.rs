//! In-memory implementation of the link repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Insertion-ordered view over the stored links.
///
/// The map answers point lookups; the order vector remembers creation order
/// for listings. Both are only ever touched together under the table lock.
#[derive(Debug, Default)]
struct LinkTable {
    by_code: HashMap<String, Link>,
    order: Vec<String>,
}

/// Process-local link store.
///
/// All state sits behind a single `RwLock`, so the existence check and the
/// insert happen under one write guard and concurrent creates for the same
/// code cannot both succeed. Nothing is persisted: a restart starts empty.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    table: RwLock<LinkTable>,
}

impl MemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, link: Link) -> Result<(), AppError> {
        let mut table = self.table.write().await;

        if table.by_code.contains_key(&link.code) {
            return Err(AppError::CodeConflict);
        }

        table.order.push(link.code.clone());
        table.by_code.insert(link.code.clone(), link);
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let table = self.table.read().await;
        Ok(table.by_code.get(code).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let table = self.table.read().await;
        Ok(table
            .order
            .iter()
            .filter_map(|code| table.by_code.get(code).cloned())
            .collect())
    }
}
