//! `TodoStore`: the to-do slice mounted in a runtime store.

use crate::reducer::{TodoEnvironment, TodoReducer};
use crate::types::{TodoAction, TodoId, TodoRecord, TodoState};
use slicekit_core::environment::IdGenerator;
use slicekit_runtime::{Store, StoreConfig, SubscriptionId};
use std::sync::Arc;

type InnerStore = Store<TodoState, TodoAction, TodoEnvironment, TodoReducer>;

/// Single source of truth for one session's to-do list
///
/// Starts from the seed list and changes only through [`append`](Self::append)
/// and [`remove`](Self::remove). Neither can fail.
///
/// # Example
///
/// ```
/// use slicekit_core::environment::NanoIdGenerator;
/// use std::sync::Arc;
/// use todo::TodoStore;
///
/// let mut store = TodoStore::new(Arc::new(NanoIdGenerator::new()));
/// store.append("Buy milk");
/// store.remove(&"1".into());
///
/// let todos = store.list();
/// assert_eq!(todos.len(), 1);
/// assert_eq!(todos[0].text, "Buy milk");
/// ```
pub struct TodoStore {
    inner: InnerStore,
}

impl TodoStore {
    /// Creates a store holding the seed list
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self::with_config(ids, StoreConfig::default())
    }

    /// Creates a store holding the seed list, with custom runtime configuration
    #[must_use]
    pub fn with_config(ids: Arc<dyn IdGenerator>, config: StoreConfig) -> Self {
        let env = TodoEnvironment::new(ids);
        Self {
            inner: Store::with_config(TodoState::seeded(), TodoReducer::new(), env, config),
        }
    }

    /// Appends a record with a fresh id and the given text
    pub fn append(&mut self, text: impl Into<String>) {
        self.dispatch(TodoAction::add_todo(text));
    }

    /// Removes every record with this id; unknown ids are ignored
    pub fn remove(&mut self, id: &TodoId) {
        self.dispatch(TodoAction::remove_todo(id.clone()));
    }

    /// Snapshot of the current records, in order
    #[must_use]
    pub fn list(&self) -> Vec<TodoRecord> {
        self.inner.state(|state| state.todos.clone())
    }

    /// Reads the current state through a closure
    pub fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&TodoState) -> T,
    {
        self.inner.state(f)
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.state(TodoState::len)
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.state(TodoState::is_empty)
    }

    /// Registers a listener called with the new state after every change
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TodoState) + 'static,
    {
        self.inner.subscribe(listener)
    }

    /// Removes a listener, returning `false` if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }

    fn dispatch(&mut self, action: TodoAction) {
        let kind = action.kind();
        // TodoReducer never emits effects, so the feedback limit cannot trip
        if let Err(error) = self.inner.send(action) {
            tracing::error!(action = kind, %error, "Todo action failed");
        }
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.list())
            .finish_non_exhaustive()
    }
}
