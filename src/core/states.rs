//! The fixed set of legal states for a machine kind.

use super::state::State;
use crate::definition::DefinitionError;

/// Ordered list of unique state identifiers.
///
/// Immutable once built. Transition records validate every state they are
/// configured with against this list.
///
/// # Example
///
/// ```rust
/// use ingreatstate::core::AllowedStates;
///
/// let states = AllowedStates::new(["open", "closed", "in progress"]).unwrap();
/// assert!(states.contains(&"closed"));
/// assert!(!states.contains(&"archived"));
/// assert_eq!(states.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AllowedStates<S: State> {
    states: Vec<S>,
}

impl<S: State> AllowedStates<S> {
    /// Build the list, preserving declaration order.
    ///
    /// Fails on an empty list or when the same state is declared twice.
    pub fn new<I>(states: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
    {
        let mut collected: Vec<S> = Vec::new();
        for state in states {
            if collected.contains(&state) {
                return Err(DefinitionError::DuplicateState(state.name().to_string()));
            }
            collected.push(state);
        }

        if collected.is_empty() {
            return Err(DefinitionError::NoStates);
        }

        Ok(Self { states: collected })
    }

    /// Check whether a state belongs to the list.
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Iterate over the states in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.states.iter()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false` for a list built by [`new`](Self::new).
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<'a, S: State> IntoIterator for &'a AllowedStates<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_declaration_order() {
        let states = AllowedStates::new(["open", "closed", "in progress"]).unwrap();
        assert_eq!(states.as_slice(), &["open", "closed", "in progress"]);
    }

    #[test]
    fn rejects_duplicate_states() {
        let result = AllowedStates::new(["open", "closed", "open"]);
        assert!(matches!(result, Err(DefinitionError::DuplicateState(ref s)) if s == "open"));
    }

    #[test]
    fn rejects_empty_state_list() {
        let result = AllowedStates::<String>::new(Vec::new());
        assert!(matches!(result, Err(DefinitionError::NoStates)));
    }

    #[test]
    fn contains_only_declared_states() {
        let states = AllowedStates::new(vec!["open".to_string(), "closed".to_string()]).unwrap();
        assert!(states.contains(&"open".to_string()));
        assert!(!states.contains(&"Open".to_string()));
        assert!(!states.is_empty());
    }
}
