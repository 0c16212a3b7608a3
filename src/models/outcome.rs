//! Result of a circulation query or command

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Pass/fail answer with a message meant to be shown verbatim.
///
/// `aux` carries the queue position after a hold is placed and is 0
/// everywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Outcome {
    pub ok: bool,
    pub message: String,
    pub aux: i32,
}

impl Outcome {
    /// Successful gate check, no message
    pub fn granted() -> Self {
        Self {
            ok: true,
            message: String::new(),
            aux: 0,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
            aux: 0,
        }
    }

    pub fn success_with(message: impl Into<String>, aux: i32) -> Self {
        Self {
            ok: true,
            message: message.into(),
            aux,
        }
    }

    pub fn refused(refusal: Refusal) -> Self {
        Self {
            ok: false,
            message: refusal.to_string(),
            aux: 0,
        }
    }
}

impl From<Refusal> for Outcome {
    fn from(refusal: Refusal) -> Self {
        Outcome::refused(refusal)
    }
}

/// Reason a circulation request is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Refusal {
    #[error("Invalid selection.")]
    InvalidSelection,

    #[error("Item is not available.")]
    NotAvailable,

    #[error("Maximum of {0} active loans reached.")]
    LoanLimitReached(usize),

    #[error("Another patron is first in the hold queue.")]
    HoldQueueBlocked,

    #[error("Item is already available.")]
    AlreadyAvailable,

    #[error("You can only return items you borrowed.")]
    NotBorrower,

    #[error("Holds allowed only on checked-out items.")]
    HoldsRequireCheckout,

    #[error("You are already in the hold queue.")]
    AlreadyQueued,

    #[error("You don't have a hold on this item.")]
    NoHold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refusal_messages() {
        let outcome = Outcome::from(Refusal::LoanLimitReached(3));
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "Maximum of 3 active loans reached.");
        assert_eq!(outcome.aux, 0);

        assert_eq!(
            Refusal::NoHold.to_string(),
            "You don't have a hold on this item."
        );
    }
}
