use serde::Serialize;

/// A single to-do entry.
///
/// Tasks are only created by [`validate`](crate::validate) and never change
/// afterwards; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    title: String,
    description: String,
    priority: bool,
}

impl Task {
    pub(crate) fn new(title: impl Into<String>, description: impl Into<String>, priority: bool) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority,
        }
    }

    /// Unique, trimmed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Trimmed description; interior whitespace is kept as entered.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the task is flagged high priority.
    #[must_use]
    pub const fn priority(&self) -> bool {
        self.priority
    }
}
