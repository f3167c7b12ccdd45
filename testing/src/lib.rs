//! # Slicekit Testing
//!
//! Testing utilities and helpers for slicekit reducers.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers
//! - Property-based testing strategies
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use slicekit_testing::{ReducerTest, SequentialIdGenerator};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(TodoEnvironment::new(Arc::new(SequentialIdGenerator::starting_at(2))))
//!     .given_state(TodoState::seeded())
//!     .when_action(TodoAction::add_todo("Buy milk"))
//!     .then_state(|state| assert_eq!(state.len(), 2))
//!     .run();
//! ```

use slicekit_core::environment::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};


/// Mock implementations of Environment traits
pub mod mocks {
    use super::{AtomicU64, IdGenerator, Ordering};

    /// Predictable id generator for deterministic tests
    ///
    /// Hands out decimal ids counting up from the start value.
    ///
    /// `new()` and `Default` start at 1. Behind a store whose seed data
    /// already uses id `"1"` (the to-do list does), start at 2 with
    /// [`starting_at`](Self::starting_at) or the first generated id will
    /// duplicate the seed.
    ///
    /// # Example
    ///
    /// ```
    /// use slicekit_testing::mocks::SequentialIdGenerator;
    /// use slicekit_core::environment::IdGenerator;
    ///
    /// let ids = SequentialIdGenerator::starting_at(2);
    /// assert_eq!(ids.generate(), "2");
    /// assert_eq!(ids.generate(), "3");
    /// ```
    #[derive(Debug)]
    pub struct SequentialIdGenerator {
        next: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Start counting at 1
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(1)
        }

        /// Start counting at `start`
        #[must_use]
        pub const fn starting_at(start: u64) -> Self {
            Self {
                next: AtomicU64::new(start),
            }
        }

        /// The id the next call to `generate` will return
        #[must_use]
        pub fn peek(&self) -> u64 {
            self.next.load(Ordering::Acquire)
        }
    }

    impl Default for SequentialIdGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn generate(&self) -> String {
            self.next.fetch_add(1, Ordering::AcqRel).to_string()
        }
    }

    /// Id generator that always returns the same value
    ///
    /// Breaks the uniqueness contract on purpose, for exercising what a
    /// reducer does with colliding ids.
    #[derive(Debug, Clone)]
    pub struct ConstantIdGenerator {
        id: String,
    }

    impl ConstantIdGenerator {
        /// Always hand out `id`
        #[must_use]
        pub fn new(id: impl Into<String>) -> Self {
            Self { id: id.into() }
        }
    }

    impl IdGenerator for ConstantIdGenerator {
        fn generate(&self) -> String {
            self.id.clone()
        }
    }
}

/// Property-based testing strategies using proptest
pub mod properties {
    use proptest::prelude::*;

    /// Arbitrary text payloads, including empty and whitespace-only strings
    pub fn any_text() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            "[ \t\n]{1,4}",
            "[a-zA-Z0-9 ]{1,24}",
            any::<String>(),
        ]
    }

    /// Ordered lists of text payloads
    pub fn text_batch(max_len: usize) -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(any_text(), 0..=max_len)
    }
}

// Re-export commonly used items
pub use mocks::{ConstantIdGenerator, SequentialIdGenerator};
pub use reducer_test::{assertions, ReducerTest};
