//! In-memory screen storage for development and testing
//!
//! Screens live in a Vec in insertion order; saving an existing id replaces
//! the stored document in place. Nothing is persisted across restarts.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use marquee_domain::{Screen, ScreenId};

use crate::infrastructure::ports::{RepoError, ScreenRepo};

/// In-memory screen repository
#[derive(Clone, Default)]
pub struct InMemoryScreenRepo {
    screens: Arc<RwLock<Vec<Screen>>>,
}

impl InMemoryScreenRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing screens (kept in the given order).
    pub fn with_screens(screens: Vec<Screen>) -> Self {
        Self {
            screens: Arc::new(RwLock::new(screens)),
        }
    }
}

#[async_trait]
impl ScreenRepo for InMemoryScreenRepo {
    async fn save(&self, screen: &Screen) -> Result<Screen, RepoError> {
        let mut screens = self.screens.write().await;
        match screens.iter_mut().find(|s| s.id() == screen.id()) {
            Some(existing) => *existing = screen.clone(),
            None => screens.push(screen.clone()),
        }
        Ok(screen.clone())
    }

    async fn list_all(&self) -> Result<Vec<Screen>, RepoError> {
        Ok(self.screens.read().await.clone())
    }

    async fn get(&self, id: ScreenId) -> Result<Option<Screen>, RepoError> {
        let screens = self.screens.read().await;
        Ok(screens.iter().find(|s| s.id() == id).cloned())
    }
}
