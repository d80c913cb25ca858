//! Screen CRUD operations.

use std::sync::Arc;

use marquee_domain::{Screen, ScreenId};

use crate::infrastructure::ports::ScreenRepo;

use super::ManagementError;

pub struct ScreenCrud {
    screen: Arc<dyn ScreenRepo>,
}

impl ScreenCrud {
    pub fn new(screen: Arc<dyn ScreenRepo>) -> Self {
        Self { screen }
    }

    pub async fn list(&self) -> Result<Vec<Screen>, ManagementError> {
        Ok(self.screen.list_all().await?)
    }

    /// Look up a screen by its hex id.
    pub async fn get(&self, id: &str) -> Result<Screen, ManagementError> {
        let screen_id = ScreenId::parse(id)
            .map_err(|e| ManagementError::InvalidInput(format!("Invalid screen id: {}", e)))?;

        self.screen
            .get(screen_id)
            .await?
            .ok_or(ManagementError::NotFound {
                entity_type: "Screen",
                id: screen_id.to_string(),
            })
    }

    /// Store a new screen under a freshly generated id, replacing whatever id
    /// it arrived with, and return the repository's copy.
    pub async fn create(&self, mut screen: Screen) -> Result<Screen, ManagementError> {
        screen.set_id(ScreenId::new());

        let saved = self.screen.save(&screen).await?;
        tracing::info!(
            screen_id = %saved.id(),
            seats = saved.seats().len(),
            "Created screen"
        );
        Ok(saved)
    }

    /// Same contract as [`ScreenCrud::create`]; seat lists of any size are
    /// accepted as they are.
    pub async fn create_with_seats(&self, screen: Screen) -> Result<Screen, ManagementError> {
        self.create(screen).await
    }
}
