use tracing::error;

use crate::error::StoreError;
use crate::task::Task;

/// Ordered, in-memory collection of tasks with unique titles.
///
/// Insertion order is the display order until [`sort_by_title`](Self::sort_by_title)
/// reorders the whole collection.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append a task, returning a reference to the stored value.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateTitle`] if the title is already taken.
    pub fn add(&mut self, task: Task) -> Result<&Task, StoreError> {
        if self.contains_title(task.title()) {
            return Err(StoreError::DuplicateTitle(task.title().to_owned()));
        }
        let index = self.tasks.len();
        self.tasks.push(task);
        Ok(&self.tasks[index])
    }

    /// Remove the task carrying `title`.
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if no task has that title.
    pub fn remove(&mut self, title: &str) -> Result<Task, StoreError> {
        let mut matches = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.title() == title)
            .map(|(index, _)| index);
        let Some(index) = matches.next() else {
            return Err(StoreError::NotFound(title.to_owned()));
        };

        let duplicates = matches.count();
        debug_assert_eq!(duplicates, 0, "task titles must be unique");
        if duplicates > 0 {
            error!(title, duplicates, "task store holds duplicate titles");
        }

        Ok(self.tasks.remove(index))
    }

    /// Reorder every task lexicographically by title.
    pub fn sort_by_title(&mut self) {
        self.tasks.sort_by(|a, b| a.title().cmp(b.title()));
    }

    /// All tasks in current order.
    #[must_use]
    pub fn list_all(&self) -> &[Task] {
        &self.tasks
    }

    /// High-priority tasks in current order.
    pub fn list_priority(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(|task| task.priority())
    }

    /// Whether a task with exactly this title exists.
    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|task| task.title() == title)
    }

    /// Look up a task by title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.title() == title)
    }

    /// Number of stored tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(store: &TaskStore) -> Vec<&str> {
        store.list_all().iter().map(Task::title).collect()
    }

    fn store_with(entries: &[(&str, bool)]) -> TaskStore {
        let mut store = TaskStore::new();
        for (title, priority) in entries {
            if let Err(err) = store.add(Task::new(*title, "details", *priority)) {
                panic!("seed task {title}: {err}");
            }
        }
        store
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let store = store_with(&[("b", false), ("a", false), ("c", true)]);
        assert_eq!(titles(&store), vec!["b", "a", "c"]);
    }

    #[test]
    fn add_rejects_duplicate_title_and_keeps_store() {
        let mut store = store_with(&[("Buy milk", false)]);
        let result = store.add(Task::new("Buy milk", "dup", true));
        assert_eq!(result, Err(StoreError::DuplicateTitle("Buy milk".into())));
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get("Buy milk").map(Task::description),
            Some("details")
        );
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut store = store_with(&[("Buy milk", false)]);
        assert!(store.add(Task::new("buy milk", "other", false)).is_ok());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_keeps_relative_order_of_others() {
        let mut store = store_with(&[("a", false), ("b", true), ("c", false), ("d", true)]);
        let removed = store
            .remove("b")
            .unwrap_or_else(|err| panic!("remove b: {err}"));
        assert_eq!(removed.title(), "b");
        assert!(removed.priority());
        assert_eq!(titles(&store), vec!["a", "c", "d"]);
    }

    #[test]
    fn remove_missing_title_reports_not_found() {
        let mut store = store_with(&[("a", false)]);
        assert_eq!(store.remove("z"), Err(StoreError::NotFound("z".into())));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sort_orders_by_title_and_is_idempotent() {
        let mut store = store_with(&[("pear", false), ("Apple", true), ("apple", false), ("banana", true)]);
        store.sort_by_title();
        let once: Vec<String> = titles(&store).into_iter().map(str::to_owned).collect();
        store.sort_by_title();
        assert_eq!(titles(&store), once);
        assert_eq!(once, vec!["Apple", "apple", "banana", "pear"]);
        assert!(once.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn list_priority_keeps_store_order() {
        let mut store = store_with(&[("c", true), ("a", false), ("b", true)]);
        let before: Vec<&str> = store.list_priority().map(Task::title).collect();
        assert_eq!(before, vec!["c", "b"]);

        store.sort_by_title();
        let after: Vec<&str> = store.list_priority().map(Task::title).collect();
        assert_eq!(after, vec!["b", "c"]);
    }

    #[test]
    fn empty_store_queries() {
        let store = TaskStore::new();
        assert!(store.is_empty());
        assert!(!store.contains_title("anything"));
        assert_eq!(store.list_priority().count(), 0);
    }
}
