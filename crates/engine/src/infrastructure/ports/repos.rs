//! Repository port traits for database access.

use async_trait::async_trait;
use marquee_domain::{Screen, ScreenId};

use super::error::RepoError;

// =============================================================================
// Database Ports (one per entity type)
// =============================================================================

/// Document-style storage for screens.
///
/// Implementations own durability and concurrency safety; callers make no
/// assumptions beyond what each method states.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScreenRepo: Send + Sync {
    /// Insert or replace the screen keyed by its id and return the stored form.
    async fn save(&self, screen: &Screen) -> Result<Screen, RepoError>;

    /// All stored screens, in the store's own order.
    async fn list_all(&self) -> Result<Vec<Screen>, RepoError>;

    async fn get(&self, id: ScreenId) -> Result<Option<Screen>, RepoError>;
}
