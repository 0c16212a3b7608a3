//! In-memory catalogue

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::Catalogue;
use crate::{
    error::AppResult,
    models::{Item, User},
};

/// Catalogue keeping every record in process memory
#[derive(Debug, Default)]
pub struct InMemoryCatalogue {
    items: RwLock<IndexMap<i32, Item>>,
    users: RwLock<IndexMap<i32, User>>,
}

impl InMemoryCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalogue from existing records. Later records win on id clashes.
    pub fn with_records(
        items: impl IntoIterator<Item = Item>,
        users: impl IntoIterator<Item = User>,
    ) -> Self {
        Self {
            items: RwLock::new(items.into_iter().map(|item| (item.id, item)).collect()),
            users: RwLock::new(users.into_iter().map(|user| (user.id, user)).collect()),
        }
    }

    /// Catalogue loaded with the default dataset
    pub fn seeded() -> Self {
        Self::with_records(super::seed::default_items(), super::seed::default_users())
    }
}

#[async_trait]
impl Catalogue for InMemoryCatalogue {
    async fn lookup_item(&self, id: i32) -> AppResult<Option<Item>> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn lookup_user(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn lookup_user_by_name(&self, name: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.name == name)
            .cloned())
    }

    async fn persist_item(&self, item: &Item) -> AppResult<()> {
        tracing::trace!(item_id = item.id, status = ?item.status, "Persisting item");
        self.items.write().await.insert(item.id, item.clone());
        Ok(())
    }

    async fn persist_user(&self, user: &User) -> AppResult<()> {
        tracing::trace!(user_id = user.id, "Persisting user");
        self.users.write().await.insert(user.id, user.clone());
        Ok(())
    }

    async fn list_items(&self) -> AppResult<Vec<Item>> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemDetails, UserType};

    #[tokio::test]
    async fn test_persist_is_an_upsert() {
        let catalogue = InMemoryCatalogue::new();
        let mut item = Item::new(101, "The River", "J. Hill", ItemDetails::Fiction);

        catalogue.persist_item(&item).await.unwrap();
        item.title = "The River (2nd ed.)".into();
        catalogue.persist_item(&item).await.unwrap();
        catalogue.persist_item(&item).await.unwrap();

        let items = catalogue.list_items().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "The River (2nd ed.)");
    }

    #[tokio::test]
    async fn test_lookups() {
        let catalogue = InMemoryCatalogue::with_records(
            Vec::new(),
            vec![
                User::new(1, "Alice", UserType::Patron),
                User::new(2, "Bob", UserType::Patron),
            ],
        );

        assert_eq!(catalogue.lookup_user(2).await.unwrap().unwrap().name, "Bob");
        assert!(catalogue.lookup_user(3).await.unwrap().is_none());
        assert_eq!(
            catalogue.lookup_user_by_name("Alice").await.unwrap().unwrap().id,
            1
        );
        assert!(catalogue.lookup_user_by_name("alice").await.unwrap().is_none());
        assert!(catalogue.lookup_item(101).await.unwrap().is_none());
    }
}
