//! Domain Layer
//!
//! Contains the to-do entity, its value types and core abstractions.
//! This layer has NO browser dependencies.

mod entity;
mod activity_type;
mod accessibility;
mod todo;
mod draft;

pub use entity::{Entity, DomainError, DomainResult};
pub use activity_type::{ActivityType, ACTIVITY_TYPES};
pub use accessibility::{Accessibility, AccessibilityBand};
pub use todo::{Todo, TodoId};
pub use draft::{DraftField, TodoDraft, coerce_price, price_text_for};
