//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::ScreenRepo;
use crate::use_cases;
use crate::use_cases::management::ScreenCrud;

/// Main application state.
///
/// Holds all use cases, wired to the injected repository ports.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub management: use_cases::ManagementUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(screen_repo: Arc<dyn ScreenRepo>) -> Self {
        Self {
            use_cases: UseCases {
                management: use_cases::ManagementUseCases::new(ScreenCrud::new(screen_repo)),
            },
        }
    }
}
