//! Item (catalogue entry) model and related types.
//!
//! An item carries its circulation state (status, borrower, due date, hold
//! queue) next to descriptive fields. The descriptive fields depend on the
//! kind of item and live in [`ItemDetails`]; circulation code never looks at
//! them.

use std::collections::VecDeque;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::enums::{Availability, ItemType};

/// Type-specific descriptive fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemDetails {
    Fiction,
    NonFiction {
        dewey: String,
    },
    Magazine {
        issue: String,
        published: NaiveDate,
    },
    Movie {
        genre: String,
        rating: String,
    },
    VideoGame {
        genre: String,
        rating: String,
    },
}

impl ItemDetails {
    pub fn item_type(&self) -> ItemType {
        match self {
            ItemDetails::Fiction => ItemType::Fiction,
            ItemDetails::NonFiction { .. } => ItemType::NonFiction,
            ItemDetails::Magazine { .. } => ItemType::Magazine,
            ItemDetails::Movie { .. } => ItemType::Movie,
            ItemDetails::VideoGame { .. } => ItemType::VideoGame,
        }
    }
}

/// Catalogue item
///
/// `status == CheckedOut` holds exactly when `borrower_id` and `due` are set.
/// The hold queue is FIFO and never contains the same user twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub title: String,
    /// Author, director, studio or publisher
    pub creator: String,
    pub details: ItemDetails,
    pub status: Availability,
    pub borrower_id: Option<i32>,
    pub due: Option<NaiveDate>,
    pub hold_queue: VecDeque<i32>,
}

impl Item {
    /// New item, available with an empty hold queue
    pub fn new(id: i32, title: impl Into<String>, creator: impl Into<String>, details: ItemDetails) -> Self {
        Self {
            id,
            title: title.into(),
            creator: creator.into(),
            details,
            status: Availability::Available,
            borrower_id: None,
            due: None,
            hold_queue: VecDeque::new(),
        }
    }

    pub fn item_type(&self) -> ItemType {
        self.details.item_type()
    }

    pub fn is_available(&self) -> bool {
        self.status == Availability::Available
    }

    pub fn is_checked_out(&self) -> bool {
        self.status == Availability::CheckedOut
    }

    /// Mark the item as lent to `borrower_id` until `due`
    pub fn check_out(&mut self, borrower_id: i32, due: NaiveDate) {
        self.status = Availability::CheckedOut;
        self.borrower_id = Some(borrower_id);
        self.due = Some(due);
    }

    /// Mark the item as back on the shelf. The hold queue is left untouched.
    pub fn check_in(&mut self) {
        self.status = Availability::Available;
        self.borrower_id = None;
        self.due = None;
    }

    pub fn is_queued(&self, user_id: i32) -> bool {
        self.hold_queue.contains(&user_id)
    }

    pub fn is_queue_head(&self, user_id: i32) -> bool {
        self.hold_queue.front() == Some(&user_id)
    }

    /// 1-indexed position of `user_id` in the hold queue
    pub fn queue_position(&self, user_id: i32) -> Option<usize> {
        self.hold_queue
            .iter()
            .position(|&id| id == user_id)
            .map(|idx| idx + 1)
    }

    /// Append `user_id` to the queue tail and return the new queue length
    pub fn enqueue_hold(&mut self, user_id: i32) -> usize {
        if !self.is_queued(user_id) {
            self.hold_queue.push_back(user_id);
        }
        self.hold_queue.len()
    }

    /// Remove every occurrence of `user_id`; true when something was removed
    pub fn dequeue_hold(&mut self, user_id: i32) -> bool {
        let before = self.hold_queue.len();
        self.hold_queue.retain(|&id| id != user_id);
        self.hold_queue.len() != before
    }
}

/// Item as exposed by the API
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ItemView {
    pub id: i32,
    pub item_type: ItemType,
    /// Display label of the item type
    pub type_label: String,
    pub title: String,
    pub creator: String,
    pub status: Availability,
    pub status_label: String,
    pub borrower_id: Option<i32>,
    pub due: Option<NaiveDate>,
    pub hold_queue: Vec<i32>,
    /// Dewey decimal code (non-fiction)
    pub dewey: Option<String>,
    /// Issue number (magazines)
    pub issue: Option<String>,
    /// Publication date (magazines)
    pub published: Option<NaiveDate>,
    /// Genre (movies and video games)
    pub genre: Option<String>,
    /// Rating (movies and video games)
    pub rating: Option<String>,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        let mut view = ItemView {
            id: item.id,
            item_type: item.item_type(),
            type_label: item.item_type().to_string(),
            title: item.title.clone(),
            creator: item.creator.clone(),
            status: item.status,
            status_label: item.status.to_string(),
            borrower_id: item.borrower_id,
            due: item.due,
            hold_queue: item.hold_queue.iter().copied().collect(),
            dewey: None,
            issue: None,
            published: None,
            genre: None,
            rating: None,
        };

        match &item.details {
            ItemDetails::Fiction => {}
            ItemDetails::NonFiction { dewey } => view.dewey = Some(dewey.clone()),
            ItemDetails::Magazine { issue, published } => {
                view.issue = Some(issue.clone());
                view.published = Some(*published);
            }
            ItemDetails::Movie { genre, rating } | ItemDetails::VideoGame { genre, rating } => {
                view.genre = Some(genre.clone());
                view.rating = Some(rating.clone());
            }
        }

        view
    }
}
