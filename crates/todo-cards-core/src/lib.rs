//! Domain types & synchronization logic for todo-cards.
//!
//! The [`TodoController`] owns the authoritative [`TaskStore`] and keeps a
//! [`CardBoard`] of rendered cards mirroring it. Presentation layers only read
//! the board and forward user actions to the controller.

/// Rendered card bookkeeping.
pub mod board;
/// User action orchestration.
pub mod controller;
/// Error types.
pub mod error;
/// Identifier types.
pub mod id;
/// Ordered task collection.
pub mod store;
/// Task entity.
pub mod task;
/// Input validation.
pub mod validate;
/// Display mode state machine.
pub mod visibility;

pub use board::{Card, CardBoard};
pub use controller::{AddOutcome, ErrorIndicators, TodoController};
pub use error::{StoreError, ValidationError, ValidationErrors};
pub use id::CardId;
pub use store::TaskStore;
pub use task::Task;
pub use validate::{RawTaskInput, TaskInput, validate};
pub use visibility::{DisplayMode, VisibilityController};
