//! To-do list slice built on slicekit.
//!
//! The list starts with a single `{1, "Hello world"}` record. Records are
//! appended with ids from an injected [`IdGenerator`] and removed by id.
//!
//! - [`types`]: records, state and actions
//! - [`reducer`]: the slice's reducer and environment
//! - [`store`]: [`TodoStore`], the facade callers use
//!
//! # Quick Start
//!
//! ```
//! use slicekit_core::environment::NanoIdGenerator;
//! use std::sync::Arc;
//! use todo::{TodoId, TodoStore};
//!
//! let mut store = TodoStore::new(Arc::new(NanoIdGenerator::new()));
//!
//! store.append("Buy milk");
//! let milk = store.list()[1].id.clone();
//!
//! store.remove(&TodoId::from("1"));
//! assert_eq!(store.list().len(), 1);
//!
//! store.remove(&milk);
//! assert!(store.is_empty());
//! ```
//!
//! [`IdGenerator`]: slicekit_core::environment::IdGenerator

pub mod reducer;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use reducer::{TodoEnvironment, TodoReducer};
pub use store::TodoStore;
pub use types::{TodoAction, TodoId, TodoRecord, TodoState};
