use crate::error::{ValidationError, ValidationErrors};
use crate::store::TaskStore;
use crate::task::Task;

/// Untrimmed form contents as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTaskInput {
    /// Title field.
    pub title: String,
    /// Description field; may span several lines.
    pub description: String,
    /// High-priority checkbox.
    pub priority: bool,
}

impl RawTaskInput {
    /// Convenience constructor.
    pub fn new(title: impl Into<String>, description: impl Into<String>, priority: bool) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
        }
    }
}

/// Trimmed candidate task, borrowed from a [`RawTaskInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskInput<'a> {
    title: &'a str,
    description: &'a str,
    priority: bool,
}

impl<'a> TaskInput<'a> {
    /// Trim leading and trailing whitespace from both text fields.
    #[must_use]
    pub fn from_raw(raw: &'a RawTaskInput) -> Self {
        Self {
            title: raw.title.trim(),
            description: raw.description.trim(),
            priority: raw.priority,
        }
    }

    /// Trimmed title.
    #[must_use]
    pub const fn title(&self) -> &'a str {
        self.title
    }

    /// Trimmed description.
    #[must_use]
    pub const fn description(&self) -> &'a str {
        self.description
    }
}

/// Decide whether `input` may become a task in `store`.
///
/// Title and description emptiness are reported independently; the duplicate
/// check only runs for a non-empty title so empty input never looks like a
/// duplicate.
///
/// # Errors
/// Returns every applicable [`ValidationError`] at once.
pub fn validate(input: &TaskInput<'_>, store: &TaskStore) -> Result<Task, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if input.title.is_empty() {
        errors.insert(ValidationError::EmptyTitle);
    } else if store.contains_title(input.title) {
        errors.insert(ValidationError::DuplicateTitle);
    }
    if input.description.is_empty() {
        errors.insert(ValidationError::EmptyDescription);
    }

    if errors.is_empty() {
        Ok(Task::new(input.title, input.description, input.priority))
    } else {
        Err(errors)
    }
}
