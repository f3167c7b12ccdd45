//! Domain types for the to-do slice.
//!
//! A to-do list is an ordered collection of records. Records are only ever
//! appended or removed; their id and text never change after creation.

use serde::{Deserialize, Serialize};

/// Id of the record every fresh list starts with
pub const SEED_ID: u64 = 1;

/// Text of the record every fresh list starts with
pub const SEED_TEXT: &str = "Hello world";

/// Opaque identifier of a to-do record
///
/// Generated ids are random strings; the seed record uses `"1"`.
///
/// Ids compare as strings. `TodoId::from(1_u64)` and `TodoId::from("1")`
/// are the same id, so removing a numeric `1` removes the seed record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    /// Returns the id as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single to-do record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    /// Unique identifier
    pub id: TodoId,
    /// Content of the to-do
    pub text: String,
}

impl TodoRecord {
    /// Creates a new record
    #[must_use]
    pub fn new(id: impl Into<TodoId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// State of the to-do slice
///
/// `todos` keeps insertion order. `Default` is the empty list; use
/// [`TodoState::seeded`] for the list a session starts with.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All records, oldest first
    pub todos: Vec<TodoRecord>,
}

impl TodoState {
    /// The initial list: a single `{1, "Hello world"}` record
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            todos: vec![TodoRecord::new(SEED_ID, SEED_TEXT)],
        }
    }

    /// Returns the number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the first record with the given id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoRecord> {
        self.todos.iter().find(|todo| &todo.id == id)
    }

    /// Checks if a record with the given id exists
    #[must_use]
    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Ids in list order
    pub fn ids(&self) -> impl Iterator<Item = &TodoId> {
        self.todos.iter().map(|todo| &todo.id)
    }
}

/// Actions understood by the to-do slice
///
/// Serialized in the usual `{"type": ..., "payload": ...}` shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum TodoAction {
    /// Append a record with a freshly generated id
    #[serde(rename = "todo/addTodo")]
    AddTodo {
        /// Content of the new record
        text: String,
    },

    /// Remove every record with this id
    #[serde(rename = "todo/removeTodo")]
    RemoveTodo {
        /// Record to remove
        id: TodoId,
    },
}

impl TodoAction {
    /// Action type of [`TodoAction::AddTodo`]
    pub const ADD_TODO: &'static str = "todo/addTodo";

    /// Action type of [`TodoAction::RemoveTodo`]
    pub const REMOVE_TODO: &'static str = "todo/removeTodo";

    /// Builds an `AddTodo` action
    #[must_use]
    pub fn add_todo(text: impl Into<String>) -> Self {
        Self::AddTodo { text: text.into() }
    }

    /// Builds a `RemoveTodo` action
    #[must_use]
    pub fn remove_todo(id: impl Into<TodoId>) -> Self {
        Self::RemoveTodo { id: id.into() }
    }

    /// The action's type string
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddTodo { .. } => Self::ADD_TODO,
            Self::RemoveTodo { .. } => Self::REMOVE_TODO,
        }
    }
}
