//! Named transition actions.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Side effect run against the host when a transition is taken.
pub type TransitionAction<H> = Arc<dyn Fn(&mut H) + Send + Sync>;

/// Table of callables addressable by name.
///
/// Transition records configured with [`named_action`] and JSON machine
/// definitions resolve their actions here.
///
/// # Example
///
/// ```rust
/// use ingreatstate::machine::ActionTable;
///
/// struct Issue {
///     log: Vec<String>,
/// }
///
/// let table = ActionTable::new()
///     .with("notify", |issue: &mut Issue| issue.log.push("notified".into()));
///
/// assert!(table.contains("notify"));
/// assert!(!table.contains("archive"));
/// ```
///
/// [`named_action`]: crate::machine::TransitionRecord::named_action
pub struct ActionTable<H> {
    actions: HashMap<String, TransitionAction<H>>,
}

impl<H> ActionTable<H> {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Register a callable under `name`, replacing any previous one.
    pub fn with<F>(mut self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&mut H) + Send + Sync + 'static,
    {
        self.insert(name, action);
        self
    }

    pub fn insert<F>(&mut self, name: impl Into<String>, action: F)
    where
        F: Fn(&mut H) + Send + Sync + 'static,
    {
        self.actions.insert(name.into(), Arc::new(action));
    }

    /// Look up a callable by name.
    pub fn get(&self, name: &str) -> Option<&TransitionAction<H>> {
        self.actions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<H> Default for ActionTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Clone for ActionTable<H> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
        }
    }
}

impl<H> fmt::Debug for ActionTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ActionTable").field("actions", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        hits: usize,
    }

    #[test]
    fn registered_actions_are_callable_by_name() {
        let table = ActionTable::new().with("bump", |c: &mut Counter| c.hits += 1);
        let mut counter = Counter { hits: 0 };

        let action = table.get("bump").unwrap();
        action(&mut counter);
        action(&mut counter);

        assert_eq!(counter.hits, 2);
    }

    #[test]
    fn insert_replaces_existing_name() {
        let mut table = ActionTable::new().with("bump", |c: &mut Counter| c.hits += 1);
        table.insert("bump", |c: &mut Counter| c.hits += 10);

        let mut counter = Counter { hits: 0 };
        (table.get("bump").unwrap())(&mut counter);

        assert_eq!(table.len(), 1);
        assert_eq!(counter.hits, 10);
    }

    #[test]
    fn debug_lists_sorted_names() {
        let table = ActionTable::<Counter>::new()
            .with("zeta", |_| {})
            .with("alpha", |_| {});

        assert_eq!(format!("{table:?}"), r#"ActionTable { actions: ["alpha", "zeta"] }"#);
    }
}
