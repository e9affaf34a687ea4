use std::collections::BTreeSet;

use thiserror::Error;

/// Errors returned by [`TaskStore`](crate::TaskStore) mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A task with the same title is already stored.
    #[error("a task titled {0:?} already exists")]
    DuplicateTitle(String),

    /// No stored task carries the requested title.
    #[error("no task titled {0:?}")]
    NotFound(String),
}

/// Single reason why candidate input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum ValidationError {
    /// Title is empty after trimming.
    #[error("title is empty")]
    EmptyTitle,

    /// Description is empty after trimming.
    #[error("description is empty")]
    EmptyDescription,

    /// Another task already uses this title.
    #[error("title already exists")]
    DuplicateTitle,
}

/// Every reason a candidate task was rejected; never empty when returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("invalid task: {}", join_reasons(.0))]
pub struct ValidationErrors(BTreeSet<ValidationError>);

impl ValidationErrors {
    pub(crate) fn insert(&mut self, reason: ValidationError) {
        self.0.insert(reason);
    }

    /// Whether the given reason was raised.
    #[must_use]
    pub fn contains(&self, reason: ValidationError) -> bool {
        self.0.contains(&reason)
    }

    /// Whether no reason was raised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of raised reasons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Raised reasons in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = ValidationError> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn join_reasons(reasons: &BTreeSet<ValidationError>) -> String {
    reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
