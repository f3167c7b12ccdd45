//! Reducer logic for the to-do slice.
//!
//! Both transitions are total: any text is accepted and removing an unknown
//! id leaves the list as it was. Neither produces effects.

use crate::types::{TodoAction, TodoId, TodoRecord, TodoState};
use slicekit_core::{
    effect::Effect, environment::IdGenerator, reducer::Reducer, slice::Slice, SmallVec,
};
use std::sync::Arc;

/// Environment dependencies for the to-do reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of ids for appended records
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl std::fmt::Debug for TodoEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoEnvironment").finish_non_exhaustive()
    }
}

/// Reducer for the to-do slice
#[derive(Clone, Copy, Debug, Default)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn add_todo(state: &mut TodoState, text: String, env: &TodoEnvironment) {
        let id = TodoId::from(env.ids.generate());
        tracing::debug!(%id, "Appending todo");
        state.todos.push(TodoRecord { id, text });
    }

    fn remove_todo(state: &mut TodoState, id: &TodoId) {
        let before = state.todos.len();
        state.todos.retain(|todo| &todo.id != id);
        tracing::debug!(%id, removed = before - state.todos.len(), "Removed todo");
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            TodoAction::AddTodo { text } => Self::add_todo(state, text, env),
            TodoAction::RemoveTodo { id } => Self::remove_todo(state, &id),
        }

        SmallVec::new()
    }
}

impl Slice for TodoReducer {
    const NAME: &'static str = "todo";

    fn initial_state() -> TodoState {
        TodoState::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slicekit_testing::{assertions, ConstantIdGenerator, ReducerTest, SequentialIdGenerator};

    fn create_test_env() -> TodoEnvironment {
        TodoEnvironment::new(Arc::new(SequentialIdGenerator::starting_at(2)))
    }

    #[test]
    fn test_slice_name_prefixes_action_types() {
        assert!(TodoAction::ADD_TODO.starts_with(&format!("{}/", TodoReducer::NAME)));
        assert!(TodoAction::REMOVE_TODO.starts_with(&format!("{}/", TodoReducer::NAME)));
        assert_eq!(TodoReducer::initial_state(), TodoState::seeded());
    }

    #[test]
    fn test_add_todo_appends_with_generated_id() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::seeded())
            .when_action(TodoAction::add_todo("Buy milk"))
            .then_state(|state| {
                assert_eq!(
                    state.todos,
                    vec![
                        TodoRecord::new("1", "Hello world"),
                        TodoRecord::new("2", "Buy milk"),
                    ]
                );
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_add_todo_accepts_empty_text() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::default())
            .when_action(TodoAction::add_todo(""))
            .then_state(|state| {
                assert_eq!(state.todos, vec![TodoRecord::new("2", "")]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_remove_todo_keeps_order_of_others() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::seeded())
            .when_action(TodoAction::add_todo("a"))
            .when_action(TodoAction::add_todo("b"))
            .when_action(TodoAction::add_todo("c"))
            .when_action(TodoAction::remove_todo("3"))
            .then_state(|state| {
                let texts: Vec<&str> = state.todos.iter().map(|t| t.text.as_str()).collect();
                assert_eq!(texts, vec!["Hello world", "a", "c"]);
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::seeded())
            .when_action(TodoAction::remove_todo("missing"))
            .then_state(|state| assert_eq!(state, &TodoState::seeded()))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_remove_from_empty_list() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::default())
            .when_action(TodoAction::remove_todo("1"))
            .then_state(|state| assert!(state.is_empty()))
            .run();
    }

    #[test]
    fn test_remove_drops_every_record_sharing_the_id() {
        ReducerTest::new(TodoReducer::new())
            .with_env(TodoEnvironment::new(Arc::new(ConstantIdGenerator::new("dup"))))
            .given_state(TodoState::seeded())
            .when_action(TodoAction::add_todo("x"))
            .when_action(TodoAction::add_todo("y"))
            .when_action(TodoAction::remove_todo("dup"))
            .then_state(|state| assert_eq!(state, &TodoState::seeded()))
            .run();
    }

    #[test]
    fn test_remove_seed_record() {
        ReducerTest::new(TodoReducer::new())
            .with_env(create_test_env())
            .given_state(TodoState::seeded())
            .when_action(TodoAction::remove_todo("1"))
            .then_state(|state| assert!(state.is_empty()))
            .run();
    }
}
