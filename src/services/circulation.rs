//! Circulation service: borrow, return and hold queue management
//!
//! Queries (`can_*`, [`CirculationService::queue_position`]) never mutate.
//! Each command re-runs its query as a gate, then mutates copies of the item
//! and user records and persists both. A refused command touches nothing.
//!
//! Commands are serialized through a single lock so the gate and the write
//! that follows it cannot interleave with another command.

use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};
use tokio::sync::Mutex;

use crate::{
    config::CirculationConfig,
    error::{AppError, AppResult},
    models::{Item, Outcome, Refusal, User},
    repository::Catalogue,
};

type Gate<T> = Result<T, Refusal>;

#[derive(Clone)]
pub struct CirculationService {
    catalogue: Arc<dyn Catalogue>,
    policy: CirculationConfig,
    command_lock: Arc<Mutex<()>>,
}

impl CirculationService {
    pub fn new(catalogue: Arc<dyn Catalogue>, policy: CirculationConfig) -> Self {
        Self {
            catalogue,
            policy,
            command_lock: Arc::new(Mutex::new(())),
        }
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// Check whether `user_id` may borrow `item_id` right now
    pub async fn can_borrow(&self, user_id: i32, item_id: i32) -> AppResult<Outcome> {
        Ok(to_outcome(self.borrow_gate(user_id, item_id).await?))
    }

    pub async fn can_return(&self, user_id: i32, item_id: i32) -> AppResult<Outcome> {
        Ok(to_outcome(self.return_gate(user_id, item_id).await?))
    }

    pub async fn can_place_hold(&self, user_id: i32, item_id: i32) -> AppResult<Outcome> {
        Ok(to_outcome(self.place_hold_gate(user_id, item_id).await?))
    }

    pub async fn can_cancel_hold(&self, user_id: i32, item_id: i32) -> AppResult<Outcome> {
        Ok(to_outcome(self.cancel_hold_gate(user_id, item_id).await?))
    }

    /// 1-indexed position of the user in the item's hold queue, `None` when
    /// the user is not queued or the item does not exist
    pub async fn queue_position(&self, user_id: i32, item_id: i32) -> AppResult<Option<usize>> {
        Ok(self
            .catalogue
            .lookup_item(item_id)
            .await?
            .and_then(|item| item.queue_position(user_id)))
    }

    // ---------------------------------------------------------------------
    // Commands
    // ---------------------------------------------------------------------

    /// Lend the item to the user, due `loan_period_days` from today
    pub async fn borrow(&self, user_id: i32, item_id: i32) -> AppResult<Outcome> {
        let _guard = self.command_lock.lock().await;

        let (mut item, mut user) = match self.borrow_gate(user_id, item_id).await? {
            Ok(records) => records,
            Err(refusal) => return Ok(refuse("borrow", user_id, item_id, refusal)),
        };

        let due = self.due_date(Utc::now().date_naive())?;
        let before = item.clone();
        item.check_out(user_id, due);
        user.add_loan(item_id);

        // Borrowing consumes the caller's own hold on this item
        if item.is_queue_head(user_id) {
            item.hold_queue.pop_front();
            user.remove_hold(item_id);
        }

        self.persist(&before, &item, &user).await?;

        tracing::info!(user_id, item_id, %due, "Item borrowed");
        Ok(Outcome::success("Borrowed."))
    }

    /// Take the item back. The hold queue is not advanced: the head keeps
    /// its place until it borrows the item itself.
    pub async fn return_item(&self, user_id: i32, item_id: i32) -> AppResult<Outcome> {
        let _guard = self.command_lock.lock().await;

        let mut item = match self.return_gate(user_id, item_id).await? {
            Ok(item) => item,
            Err(refusal) => return Ok(refuse("return", user_id, item_id, refusal)),
        };
        let Some(mut user) = self.catalogue.lookup_user(user_id).await? else {
            return Ok(refuse("return", user_id, item_id, Refusal::InvalidSelection));
        };
        let before = item.clone();

        item.check_in();
        user.remove_loan(item_id);

        self.persist(&before, &item, &user).await?;

        tracing::info!(user_id, item_id, waiting = item.hold_queue.len(), "Item returned");
        Ok(Outcome::success("Returned."))
    }

    /// Queue the user for a checked-out item. `aux` is the new position.
    pub async fn place_hold(&self, user_id: i32, item_id: i32) -> AppResult<Outcome> {
        let _guard = self.command_lock.lock().await;

        let mut item = match self.place_hold_gate(user_id, item_id).await? {
            Ok(item) => item,
            Err(refusal) => return Ok(refuse("place hold", user_id, item_id, refusal)),
        };
        let Some(mut user) = self.catalogue.lookup_user(user_id).await? else {
            return Ok(refuse("place hold", user_id, item_id, Refusal::InvalidSelection));
        };
        let before = item.clone();

        let position = item.enqueue_hold(user_id);
        user.add_hold(item_id);

        self.persist(&before, &item, &user).await?;

        tracing::info!(user_id, item_id, position, "Hold placed");
        let position = i32::try_from(position).unwrap_or(i32::MAX);
        Ok(Outcome::success_with(
            format!("Hold placed. You are #{}.", position),
            position,
        ))
    }

    pub async fn cancel_hold(&self, user_id: i32, item_id: i32) -> AppResult<Outcome> {
        let _guard = self.command_lock.lock().await;

        let mut item = match self.cancel_hold_gate(user_id, item_id).await? {
            Ok(item) => item,
            Err(refusal) => return Ok(refuse("cancel hold", user_id, item_id, refusal)),
        };
        let Some(mut user) = self.catalogue.lookup_user(user_id).await? else {
            return Ok(refuse("cancel hold", user_id, item_id, Refusal::InvalidSelection));
        };
        let before = item.clone();

        item.dequeue_hold(user_id);
        user.remove_hold(item_id);

        self.persist(&before, &item, &user).await?;

        tracing::info!(user_id, item_id, "Hold canceled");
        Ok(Outcome::success("Hold canceled."))
    }

    // ---------------------------------------------------------------------
    // Gates
    // ---------------------------------------------------------------------

    async fn borrow_gate(&self, user_id: i32, item_id: i32) -> AppResult<Gate<(Item, User)>> {
        let item = self.catalogue.lookup_item(item_id).await?;
        let user = self.catalogue.lookup_user(user_id).await?;

        let (Some(item), Some(user)) = (item, user) else {
            return Ok(Err(Refusal::InvalidSelection));
        };
        if !item.is_available() {
            return Ok(Err(Refusal::NotAvailable));
        }
        if user.loans.len() >= self.policy.max_loans {
            return Ok(Err(Refusal::LoanLimitReached(self.policy.max_loans)));
        }
        if !item.hold_queue.is_empty() && !item.is_queue_head(user_id) {
            return Ok(Err(Refusal::HoldQueueBlocked));
        }

        Ok(Ok((item, user)))
    }

    async fn return_gate(&self, user_id: i32, item_id: i32) -> AppResult<Gate<Item>> {
        let Some(item) = self.catalogue.lookup_item(item_id).await? else {
            return Ok(Err(Refusal::InvalidSelection));
        };
        if !item.is_checked_out() {
            return Ok(Err(Refusal::AlreadyAvailable));
        }
        if item.borrower_id != Some(user_id) {
            return Ok(Err(Refusal::NotBorrower));
        }

        Ok(Ok(item))
    }

    async fn place_hold_gate(&self, user_id: i32, item_id: i32) -> AppResult<Gate<Item>> {
        let Some(item) = self.catalogue.lookup_item(item_id).await? else {
            return Ok(Err(Refusal::InvalidSelection));
        };
        if !item.is_checked_out() {
            return Ok(Err(Refusal::HoldsRequireCheckout));
        }
        if item.is_queued(user_id) {
            return Ok(Err(Refusal::AlreadyQueued));
        }

        Ok(Ok(item))
    }

    async fn cancel_hold_gate(&self, user_id: i32, item_id: i32) -> AppResult<Gate<Item>> {
        let Some(item) = self.catalogue.lookup_item(item_id).await? else {
            return Ok(Err(Refusal::InvalidSelection));
        };
        if !item.is_queued(user_id) {
            return Ok(Err(Refusal::NoHold));
        }

        Ok(Ok(item))
    }

    // ---------------------------------------------------------------------
    // Helpers
    // ---------------------------------------------------------------------

    fn due_date(&self, today: NaiveDate) -> AppResult<NaiveDate> {
        let days = self.policy.loan_period_days;
        today
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or_else(|| {
                AppError::BadRequest(format!("Loan period of {} days is out of range", days))
            })
    }

    /// Write the item then the user. When the user write fails the item is
    /// put back to `before` so the pair stays consistent.
    async fn persist(&self, before: &Item, item: &Item, user: &User) -> AppResult<()> {
        self.catalogue.persist_item(item).await?;

        if let Err(e) = self.catalogue.persist_user(user).await {
            if let Err(rollback) = self.catalogue.persist_item(before).await {
                tracing::error!(item_id = item.id, error = %rollback, "Failed to restore item");
            }
            return Err(e);
        }

        Ok(())
    }
}

fn to_outcome<T>(gate: Gate<T>) -> Outcome {
    match gate {
        Ok(_) => Outcome::granted(),
        Err(refusal) => refusal.into(),
    }
}

fn refuse(command: &str, user_id: i32, item_id: i32, refusal: Refusal) -> Outcome {
    tracing::debug!(user_id, item_id, reason = %refusal, "Refused {}", command);
    refusal.into()
}
