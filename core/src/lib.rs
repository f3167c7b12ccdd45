//! # Slicekit Core
//!
//! Core traits and types for building state containers out of reducers.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state owned by a store
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Pure function `(State, Action, Environment) → (State, Effects)`
//! - **Slice**: A named reducer that knows its initial state
//! - **Effect**: Follow-up work described as a value (not executed here)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Example
//!
//! ```
//! use slicekit_core::{effect::Effect, reducer::Reducer, slice::Slice, smallvec, SmallVec};
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! impl Slice for CounterReducer {
//!     const NAME: &'static str = "counter";
//!
//!     fn initial_state() -> CounterState {
//!         CounterState::default()
//!     }
//! }
//!
//! let mut state = CounterReducer::initial_state();
//! CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

// Re-export commonly used types
pub use serde::{Deserialize, Serialize};
pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`
///
/// They contain all business logic and are deterministic given their environment.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// This function:
        /// 1. Updates state in place
        /// 2. Returns effect descriptions for the store to process
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Slice module - Named reducers with an initial state
pub mod slice {
    use super::reducer::Reducer;

    /// A reducer that owns one named part of application state.
    ///
    /// The name doubles as the prefix of the slice's action types
    /// (`"todo/addTodo"`), and `initial_state` is what a store starts from
    /// when it is built from the slice alone.
    pub trait Slice: Reducer {
        /// Name of the slice
        const NAME: &'static str;

        /// State the slice starts with
        fn initial_state() -> Self::State;
    }
}

/// Effect module - Follow-up work descriptions
///
/// Effects are values returned from reducers. The store walks them after the
/// reducer returns; nothing here executes anything.
pub mod effect {
    /// Effect type - describes follow-up work for the store
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can feed back
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Feed an action back into the reducer once the current one is done
        Dispatch(Box<Action>),

        /// Run effects in order
        Sequential(Vec<Effect<Action>>),
    }

    impl<Action> Effect<Action> {
        /// Dispatch an action after the current one
        #[must_use]
        pub fn dispatch(action: Action) -> Self {
            Self::Dispatch(Box::new(action))
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Self>) -> Self {
            Self::Sequential(effects)
        }

        /// Whether this effect (and everything it contains) does nothing
        #[must_use]
        pub fn is_none(&self) -> bool {
            match self {
                Self::None => true,
                Self::Dispatch(_) => false,
                Self::Sequential(effects) => effects.iter().all(Self::is_none),
            }
        }

        /// Flatten the effect tree into the actions it dispatches, in order
        #[must_use]
        pub fn into_actions(self) -> Vec<Action> {
            let mut actions = Vec::new();
            self.collect_actions(&mut actions);
            actions
        }

        fn collect_actions(self, out: &mut Vec<Action>) {
            match self {
                Self::None => {},
                Self::Dispatch(action) => out.push(*action),
                Self::Sequential(effects) => {
                    for effect in effects {
                        effect.collect_actions(out);
                    }
                },
            }
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use rand::Rng;

    /// Url-safe alphabet used by [`NanoIdGenerator`]
    pub const URL_ALPHABET: &[u8; 64] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

    /// Default length of ids produced by [`NanoIdGenerator`]
    pub const DEFAULT_ID_SIZE: usize = 21;

    /// Shortest id [`NanoIdGenerator`] will produce (96 bits of randomness)
    pub const MIN_ID_SIZE: usize = 16;

    /// `IdGenerator` trait - source of unique identifiers
    ///
    /// Implementations must never return a value equal to an identifier
    /// they handed out before and that may still be live.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - random url-safe ids
    /// let ids = NanoIdGenerator::new();
    ///
    /// // Test - predictable ids
    /// let ids = SequentialIdGenerator::starting_at(2);
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Produce a fresh identifier
        fn generate(&self) -> String;
    }

    /// Random id generator in the style of `nanoid`
    ///
    /// With the default size of 21 characters over a 64-symbol alphabet
    /// there are 126 bits of randomness per id.
    #[derive(Debug, Clone, Copy)]
    pub struct NanoIdGenerator {
        size: usize,
    }

    impl NanoIdGenerator {
        /// Create a generator producing [`DEFAULT_ID_SIZE`]-character ids
        #[must_use]
        pub const fn new() -> Self {
            Self {
                size: DEFAULT_ID_SIZE,
            }
        }

        /// Set the id length
        ///
        /// Sizes below [`MIN_ID_SIZE`] are raised to it, so ids stay unique
        /// in practice and never collide with short hand-made ids like `"1"`.
        #[must_use]
        pub const fn with_size(mut self, size: usize) -> Self {
            self.size = if size < MIN_ID_SIZE { MIN_ID_SIZE } else { size };
            self
        }

        /// Length of the ids this generator produces
        #[must_use]
        pub const fn size(&self) -> usize {
            self.size
        }
    }

    impl Default for NanoIdGenerator {
        fn default() -> Self {
            Self::new()
        }
    }

    impl IdGenerator for NanoIdGenerator {
        fn generate(&self) -> String {
            let mut rng = rand::thread_rng();
            (0..self.size)
                .map(|_| char::from(URL_ALPHABET[rng.gen_range(0..URL_ALPHABET.len())]))
                .collect()
        }
    }
}
