//! Read-only catalogue browsing

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Item, User},
    repository::Catalogue,
};

#[derive(Clone)]
pub struct CatalogService {
    catalogue: Arc<dyn Catalogue>,
}

impl CatalogService {
    pub fn new(catalogue: Arc<dyn Catalogue>) -> Self {
        Self { catalogue }
    }

    pub async fn list_items(&self) -> AppResult<Vec<Item>> {
        self.catalogue.list_items().await
    }

    /// Get item by ID
    pub async fn get_item(&self, id: i32) -> AppResult<Item> {
        self.catalogue
            .lookup_item(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", id)))
    }

    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.catalogue.list_users().await
    }

    /// Get user by ID
    pub async fn get_user(&self, id: i32) -> AppResult<User> {
        self.catalogue
            .lookup_user(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
    }

    /// Exact, case-sensitive name match
    pub async fn find_user_by_name(&self, name: &str) -> AppResult<User> {
        self.catalogue
            .lookup_user_by_name(name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryCatalogue;

    #[tokio::test]
    async fn test_missing_records_are_not_found() {
        let service = CatalogService::new(Arc::new(InMemoryCatalogue::seeded()));

        assert_eq!(service.get_item(201).await.unwrap().title, "Deep Space");
        assert!(matches!(service.get_item(999).await, Err(AppError::NotFound(_))));
        assert_eq!(service.find_user_by_name("Carol").await.unwrap().id, 3);
        assert!(matches!(
            service.find_user_by_name("Mallory").await,
            Err(AppError::NotFound(_))
        ));
    }
}
