//! # Slicekit Runtime
//!
//! Runtime implementation for slicekit reducers.
//!
//! This crate provides the Store that owns state, drives the reducer and
//! processes the effects it returns.
//!
//! ## Core Components
//!
//! - **Store**: Owns state and runs the action → reducer → effects loop
//! - **`StoreConfig`**: Limits for the feedback loop
//! - **Subscriptions**: Listeners notified after every reduced action
//!
//! ## Execution Model
//!
//! Everything runs on the caller's thread. [`Store::send`] reduces the action,
//! then reduces every action fed back through [`Effect::Dispatch`] in FIFO
//! order, and only returns once the queue is empty.
//!
//! ## Example
//!
//! ```ignore
//! use slicekit_runtime::Store;
//!
//! let mut store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething)?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field);
//! ```

use slicekit_core::{effect::Effect, reducer::Reducer};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum StoreError {
        /// Too many actions were fed back while handling a single `send`
        ///
        /// State changes made before the limit was hit are kept.
        #[error("Feedback limit of {limit} actions exceeded in a single send")]
        FeedbackLimitExceeded {
            /// The configured limit
            limit: usize,
        },
    }

    /// Errors from loading a [`StoreConfig`](crate::config::StoreConfig)
    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum ConfigError {
        /// A configuration variable held a value that could not be used
        #[error("Invalid value for {var}: {value:?}")]
        InvalidValue {
            /// Variable name
            var: String,
            /// The rejected value
            value: String,
        },
    }
}

/// Store configuration
pub mod config {
    use super::error::ConfigError;

    /// Environment variable overriding [`StoreConfig::max_feedback_actions`]
    pub const MAX_FEEDBACK_ACTIONS_VAR: &str = "SLICEKIT_MAX_FEEDBACK_ACTIONS";

    /// Default limit on fed-back actions per `send`
    pub const DEFAULT_MAX_FEEDBACK_ACTIONS: usize = 64;

    /// Configuration for Store instances
    ///
    /// # Example
    ///
    /// ```
    /// use slicekit_runtime::StoreConfig;
    ///
    /// let config = StoreConfig::default().with_max_feedback_actions(8);
    /// assert_eq!(config.max_feedback_actions, 8);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StoreConfig {
        /// Maximum number of actions fed back through effects while handling
        /// one `send`, not counting the sent action itself
        pub max_feedback_actions: usize,
    }

    impl StoreConfig {
        /// Create a configuration with the given feedback limit
        #[must_use]
        pub const fn new(max_feedback_actions: usize) -> Self {
            Self {
                max_feedback_actions,
            }
        }

        /// Set the feedback limit
        #[must_use]
        pub const fn with_max_feedback_actions(mut self, limit: usize) -> Self {
            self.max_feedback_actions = limit;
            self
        }

        /// Load configuration from process environment variables
        ///
        /// Unset variables fall back to defaults.
        ///
        /// # Errors
        ///
        /// Returns [`ConfigError::InvalidValue`] if a variable is set to
        /// something that does not parse.
        pub fn from_env() -> Result<Self, ConfigError> {
            Self::from_lookup(|var| std::env::var(var).ok())
        }

        /// Load configuration through an arbitrary variable lookup
        ///
        /// # Errors
        ///
        /// Returns [`ConfigError::InvalidValue`] if a variable is set to
        /// something that does not parse.
        pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where
            F: Fn(&str) -> Option<String>,
        {
            let mut config = Self::default();

            if let Some(raw) = lookup(MAX_FEEDBACK_ACTIONS_VAR) {
                let limit = raw
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidValue {
                        var: MAX_FEEDBACK_ACTIONS_VAR.to_string(),
                        value: raw.clone(),
                    })?;
                config = config.with_max_feedback_actions(limit);
            }

            Ok(config)
        }
    }

    impl Default for StoreConfig {
        fn default() -> Self {
            Self::new(DEFAULT_MAX_FEEDBACK_ACTIONS)
        }
    }
}

pub use config::StoreConfig;
pub use error::{ConfigError, StoreError};

/// Store module - The runtime for reducers
pub mod store {
    use super::{Effect, Reducer, StoreConfig, StoreError};
    use slicekit_core::slice::Slice;
    use std::collections::VecDeque;

    /// Identifies a listener registered with [`Store::subscribe`]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SubscriptionId(u64);

    type Listener<S> = Box<dyn FnMut(&S)>;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (exclusively owned, mutated only by the reducer)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Effect processing (with feedback loop)
    /// 5. Listeners notified after each reduced action
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: S,
        reducer: R,
        environment: E,
        config: StoreConfig,
        listeners: Vec<(SubscriptionId, Listener<S>)>,
        next_subscription: u64,
        actions_processed: u64,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        /// Create a new store with initial state, reducer, and environment
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self::with_config(initial_state, reducer, environment, StoreConfig::default())
        }

        /// Create a new Store with custom configuration
        #[must_use]
        pub fn with_config(initial_state: S, reducer: R, environment: E, config: StoreConfig) -> Self {
            Self {
                state: initial_state,
                reducer,
                environment,
                config,
                listeners: Vec::new(),
                next_subscription: 0,
                actions_processed: 0,
            }
        }

        /// Configuration this store was built with
        #[must_use]
        pub const fn config(&self) -> &StoreConfig {
            &self.config
        }

        /// Total number of actions reduced, including fed-back ones
        #[must_use]
        pub const fn actions_processed(&self) -> u64 {
            self.actions_processed
        }

        /// Send an action to the store
        ///
        /// The action is reduced immediately. Actions dispatched by the
        /// returned effects are queued and reduced in order before this
        /// returns. Listeners run after every reduced action.
        ///
        /// # Errors
        ///
        /// Returns [`StoreError::FeedbackLimitExceeded`] when more than
        /// `config.max_feedback_actions` actions are fed back. Actions reduced
        /// up to that point stay applied.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub fn send(&mut self, action: A) -> Result<(), StoreError> {
            let limit = self.config.max_feedback_actions;
            let mut queue = VecDeque::from([action]);
            let mut fed_back = 0usize;

            while let Some(action) = queue.pop_front() {
                let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
                self.actions_processed += 1;
                metrics::counter!("store.actions.processed").increment(1);
                tracing::debug!(
                    actions_processed = self.actions_processed,
                    queued = queue.len(),
                    "Action reduced"
                );

                self.notify();

                for next in effects.into_iter().flat_map(Effect::into_actions) {
                    fed_back += 1;
                    if fed_back > limit {
                        metrics::counter!("store.feedback.limit_exceeded").increment(1);
                        tracing::warn!(limit, "Feedback limit exceeded, dropping queued actions");
                        return Err(StoreError::FeedbackLimitExceeded { limit });
                    }
                    queue.push_back(next);
                }
            }

            Ok(())
        }

        /// Read current state via a closure
        pub fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            f(&self.state)
        }

        /// Register a listener called with the new state after each reduced action
        pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
        where
            F: FnMut(&S) + 'static,
        {
            let id = SubscriptionId(self.next_subscription);
            self.next_subscription += 1;
            self.listeners.push((id, Box::new(listener)));
            tracing::debug!(listeners = self.listeners.len(), "Listener subscribed");
            id
        }

        /// Remove a listener
        ///
        /// Returns `false` if the subscription was already gone.
        pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
            let before = self.listeners.len();
            self.listeners.retain(|(existing, _)| *existing != id);
            before != self.listeners.len()
        }

        fn notify(&mut self) {
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Slice<State = S, Action = A, Environment = E>,
    {
        /// Create a store starting from the slice's initial state
        #[must_use]
        pub fn from_slice(reducer: R, environment: E) -> Self {
            Self::new(R::initial_state(), reducer, environment)
        }
    }
}

pub use store::{Store, SubscriptionId};

#[cfg(test)]
mod tests {
    use super::*;
    use slicekit_core::{slice::Slice, smallvec, SmallVec};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Default)]
    struct TestState {
        value: i32,
    }

    #[derive(Debug, Clone)]
    enum TestAction {
        Increment,
        NoOp,
        IncrementTwice,
        Chain(u32),
        Loop,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TestAction::Increment => {
                    state.value += 1;
                    smallvec![Effect::None]
                },
                TestAction::NoOp => SmallVec::new(),
                TestAction::IncrementTwice => smallvec![Effect::chain(vec![
                    Effect::dispatch(TestAction::Increment),
                    Effect::dispatch(TestAction::Increment),
                ])],
                TestAction::Chain(0) => SmallVec::new(),
                TestAction::Chain(n) => {
                    state.value += 1;
                    smallvec![Effect::dispatch(TestAction::Chain(n - 1))]
                },
                TestAction::Loop => {
                    state.value += 1;
                    smallvec![Effect::dispatch(TestAction::Loop)]
                },
            }
        }
    }

    impl Slice for TestReducer {
        const NAME: &'static str = "test";

        fn initial_state() -> TestState {
            TestState { value: 10 }
        }
    }

    #[test]
    fn test_store_creation() {
        let store = Store::new(TestState::default(), TestReducer, ());
        assert_eq!(store.state(|s| s.value), 0);
        assert_eq!(store.actions_processed(), 0);
        assert_eq!(store.config(), &StoreConfig::default());
    }

    #[test]
    fn test_from_slice_uses_initial_state() {
        let store = Store::from_slice(TestReducer, ());
        assert_eq!(store.state(|s| s.value), 10);
    }

    #[test]
    fn test_send_reduces_action() {
        let mut store = Store::new(TestState::default(), TestReducer, ());
        assert!(store.send(TestAction::Increment).is_ok());
        assert!(store.send(TestAction::NoOp).is_ok());
        assert_eq!(store.state(|s| s.value), 1);
        assert_eq!(store.actions_processed(), 2);
    }

    #[test]
    fn test_dispatch_effects_are_fed_back() {
        let mut store = Store::new(TestState::default(), TestReducer, ());
        assert!(store.send(TestAction::IncrementTwice).is_ok());
        assert_eq!(store.state(|s| s.value), 2);
        assert_eq!(store.actions_processed(), 3);
    }

    #[test]
    fn test_feedback_within_limit() {
        let config = StoreConfig::default().with_max_feedback_actions(5);
        let mut store = Store::with_config(TestState::default(), TestReducer, (), config);
        assert!(store.send(TestAction::Chain(5)).is_ok());
        assert_eq!(store.state(|s| s.value), 5);
    }

    #[test]
    fn test_feedback_limit_exceeded_keeps_applied_changes() {
        let config = StoreConfig::default().with_max_feedback_actions(3);
        let mut store = Store::with_config(TestState::default(), TestReducer, (), config);

        let result = store.send(TestAction::Loop);

        assert_eq!(result, Err(StoreError::FeedbackLimitExceeded { limit: 3 }));
        assert_eq!(store.state(|s| s.value), 4);

        // Store remains usable afterwards
        assert!(store.send(TestAction::Increment).is_ok());
        assert_eq!(store.state(|s| s.value), 5);
    }

    #[test]
    fn test_listeners_see_every_reduced_action() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new(TestState::default(), TestReducer, ());

        let sink = Rc::clone(&seen);
        store.subscribe(move |state: &TestState| sink.borrow_mut().push(state.value));

        assert!(store.send(TestAction::IncrementTwice).is_ok());
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = Store::new(TestState::default(), TestReducer, ());

        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_: &TestState| *counter.borrow_mut() += 1);

        assert!(store.send(TestAction::Increment).is_ok());
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        assert!(store.send(TestAction::Increment).is_ok());

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_config_from_lookup_defaults() {
        let config = StoreConfig::from_lookup(|_| None);
        assert_eq!(config, Ok(StoreConfig::default()));
    }

    #[test]
    fn test_config_from_lookup_override() {
        let config = StoreConfig::from_lookup(|var| {
            (var == config::MAX_FEEDBACK_ACTIONS_VAR).then(|| " 12 ".to_string())
        });
        assert_eq!(config, Ok(StoreConfig::new(12)));
    }

    #[test]
    fn test_config_from_lookup_invalid() {
        let config = StoreConfig::from_lookup(|_| Some("many".to_string()));
        assert_eq!(
            config,
            Err(ConfigError::InvalidValue {
                var: config::MAX_FEEDBACK_ACTIONS_VAR.to_string(),
                value: "many".to_string(),
            })
        );
    }
}
