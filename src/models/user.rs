//! User model and related types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::UserType;
use crate::error::{AppError, AppResult};

/// Library account
///
/// `loans` and `holds` keep insertion order and never hold duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub user_type: UserType,
    /// Item ids currently lent to this user
    pub loans: Vec<i32>,
    /// Item ids this user is queued for
    pub holds: Vec<i32>,
}

impl User {
    pub fn new(id: i32, name: impl Into<String>, user_type: UserType) -> Self {
        Self {
            id,
            name: name.into(),
            user_type,
            loans: Vec::new(),
            holds: Vec::new(),
        }
    }

    pub fn add_loan(&mut self, item_id: i32) {
        if !self.has_loan(item_id) {
            self.loans.push(item_id);
        }
    }

    pub fn remove_loan(&mut self, item_id: i32) -> bool {
        let before = self.loans.len();
        self.loans.retain(|&id| id != item_id);
        self.loans.len() != before
    }

    pub fn has_loan(&self, item_id: i32) -> bool {
        self.loans.contains(&item_id)
    }

    pub fn add_hold(&mut self, item_id: i32) {
        if !self.has_hold(item_id) {
            self.holds.push(item_id);
        }
    }

    pub fn remove_hold(&mut self, item_id: i32) -> bool {
        let before = self.holds.len();
        self.holds.retain(|&id| id != item_id);
        self.holds.len() != before
    }

    pub fn has_hold(&self, item_id: i32) -> bool {
        self.holds.contains(&item_id)
    }

    /// Circulation commands are reserved to patrons
    pub fn require_patron(&self) -> AppResult<()> {
        if self.user_type == UserType::Patron {
            Ok(())
        } else {
            Err(AppError::Authorization(format!(
                "{} accounts cannot borrow, return or hold items",
                self.user_type
            )))
        }
    }

    pub fn require_staff(&self) -> AppResult<()> {
        if self.user_type.is_staff() {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Staff account required".to_string(),
            ))
        }
    }
}

/// User as exposed by the API
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserView {
    pub id: i32,
    pub name: String,
    pub user_type: UserType,
    /// Display label of the role
    pub type_label: String,
    pub loans: Vec<i32>,
    pub holds: Vec<i32>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            user_type: user.user_type,
            type_label: user.user_type.to_string(),
            loans: user.loans.clone(),
            holds: user.holds.clone(),
        }
    }
}
