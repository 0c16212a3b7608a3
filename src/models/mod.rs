//! Data models for the circulation server

pub mod enums;
pub mod item;
pub mod outcome;
pub mod user;

// Re-export commonly used types
pub use enums::{Availability, ItemType, UserType};
pub use item::{Item, ItemDetails, ItemView};
pub use outcome::{Outcome, Refusal};
pub use user::{User, UserView};
