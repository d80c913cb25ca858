//! Management use cases for CRUD-style operations.
//!
//! These use cases keep HTTP handlers thin while talking to the repository ports.

mod screen;

pub use screen::ScreenCrud;

use crate::infrastructure::ports::RepoError;

/// Shared error type for management use cases.
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Container for management use cases.
pub struct ManagementUseCases {
    pub screen: ScreenCrud,
}

impl ManagementUseCases {
    pub fn new(screen: ScreenCrud) -> Self {
        Self { screen }
    }
}
