//! Catalogue access layer
//!
//! The [`Catalogue`] trait is the only way services reach item and user
//! records. Services receive an `Arc<dyn Catalogue>` at construction.

pub mod memory;
pub mod seed;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Item, User},
};

pub use memory::InMemoryCatalogue;

/// Owner of the canonical item and user records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Catalogue: Send + Sync {
    async fn lookup_item(&self, id: i32) -> AppResult<Option<Item>>;

    async fn lookup_user(&self, id: i32) -> AppResult<Option<User>>;

    async fn lookup_user_by_name(&self, name: &str) -> AppResult<Option<User>>;

    /// Insert or replace the item with the same id
    async fn persist_item(&self, item: &Item) -> AppResult<()>;

    /// Insert or replace the user with the same id
    async fn persist_user(&self, user: &User) -> AppResult<()>;

    /// All items, in insertion order
    async fn list_items(&self) -> AppResult<Vec<Item>>;

    /// All users, in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;
}
