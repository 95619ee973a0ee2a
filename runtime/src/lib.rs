//! # Boxoffice Runtime
//!
//! Runtime implementation for the Boxoffice architecture.
//!
//! This crate provides the Store runtime that owns feature state, runs the
//! reducer, and executes the effect descriptions the reducer returns.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Effect execution**: Drives `Delay`, `Future`, `Parallel`, and
//!   `Sequential` effects, feeding produced actions back into the reducer
//!
//! ## Dispatch model
//!
//! `Store::send` is a *settled* dispatch: the reducer runs synchronously
//! under the state lock, and any resulting effects (including actions they
//! feed back) are driven to completion before `send` returns. Hosting views
//! can therefore read fully consistent state immediately after a send. The
//! booking reducers are pure state machines, so in practice their dispatches
//! involve no waiting at all.
//!
//! ## Example
//!
//! ```ignore
//! use boxoffice_runtime::Store;
//!
//! let store = Store::new(initial_state, reducer, environment);
//!
//! // Send an action
//! store.send(Action::DoSomething).await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use boxoffice_core::{effect::Effect, reducer::Reducer};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::RwLock;

/// The Store runtime - owns state and coordinates reducer execution
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type (injected dependencies)
/// - `R`: Reducer implementation
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Send + Sync,
    S: Send + Sync,
    A: Send + 'static,
    E: Send + Sync,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
        }
    }

    /// Dispatch an action and drive all resulting effects to completion
    ///
    /// The reducer runs under an exclusive state lock; the lock is released
    /// before effects execute, so effects that feed actions back re-enter the
    /// reducer without deadlocking.
    pub async fn send(&self, action: A) {
        let effects = {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, action, &self.environment)
        };

        for effect in effects {
            self.execute(effect).await;
        }
    }

    /// Read a projection of the current state
    pub async fn state<T>(&self, read: impl FnOnce(&S) -> T) -> T {
        let state = self.state.read().await;
        read(&state)
    }

    /// Execute a single effect, feeding any produced actions back into `send`
    ///
    /// Boxed because `Delay` and `Future` effects recurse through `send`.
    fn execute<'a>(&'a self, effect: Effect<A>) -> Pin<Box<dyn Future<Output = ()> + Send + 'a>> {
        Box::pin(async move {
            match effect {
                Effect::None => {},
                Effect::Parallel(effects) => {
                    futures::future::join_all(effects.into_iter().map(|e| self.execute(e))).await;
                },
                Effect::Sequential(effects) => {
                    for e in effects {
                        self.execute(e).await;
                    }
                },
                Effect::Delay { duration, action } => {
                    tracing::trace!(?duration, "executing Delay effect");
                    tokio::time::sleep(duration).await;
                    self.send(*action).await;
                },
                Effect::Future(future) => {
                    if let Some(action) = future.await {
                        self.send(action).await;
                    }
                },
            }
        })
    }
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    S: Clone,
{
    /// Snapshot the entire state
    ///
    /// Convenience for presentation layers that re-render from a full copy.
    pub async fn snapshot(&self) -> S {
        self.state.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxoffice_core::{SmallVec, smallvec};
    use std::time::Duration;

    #[derive(Clone, Debug, Default)]
    struct TallyState {
        count: i64,
        log: Vec<&'static str>,
    }

    #[derive(Clone, Debug)]
    enum TallyAction {
        Bump,
        BumpLater,
        BumpFromFuture,
        BumpTwiceInParallel,
    }

    struct TallyEnv;

    struct TallyReducer;

    impl Reducer for TallyReducer {
        type State = TallyState;
        type Action = TallyAction;
        type Environment = TallyEnv;

        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            _env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]> {
            match action {
                TallyAction::Bump => {
                    state.count += 1;
                    state.log.push("bump");
                    smallvec![Effect::None]
                },
                TallyAction::BumpLater => {
                    state.log.push("bump-later");
                    smallvec![Effect::Delay {
                        duration: Duration::from_millis(5),
                        action: Box::new(TallyAction::Bump),
                    }]
                },
                TallyAction::BumpFromFuture => {
                    state.log.push("bump-from-future");
                    smallvec![Effect::Future(Box::pin(async {
                        Some(TallyAction::Bump)
                    }))]
                },
                TallyAction::BumpTwiceInParallel => {
                    state.log.push("bump-parallel");
                    smallvec![Effect::Parallel(vec![
                        Effect::Future(Box::pin(async { Some(TallyAction::Bump) })),
                        Effect::Future(Box::pin(async { Some(TallyAction::Bump) })),
                    ])]
                },
            }
        }
    }

    fn tally_store() -> Store<TallyState, TallyAction, TallyEnv, TallyReducer> {
        Store::new(TallyState::default(), TallyReducer, TallyEnv)
    }

    #[tokio::test]
    async fn send_runs_reducer() {
        let store = tally_store();
        store.send(TallyAction::Bump).await;
        assert_eq!(store.state(|s| s.count).await, 1);
    }

    #[tokio::test]
    async fn delay_effect_feeds_action_back() {
        let store = tally_store();
        store.send(TallyAction::BumpLater).await;
        // send is settled: the delayed action has already been processed
        assert_eq!(store.state(|s| s.count).await, 1);
        assert_eq!(store.state(|s| s.log.clone()).await, vec!["bump-later", "bump"]);
    }

    #[tokio::test]
    async fn future_effect_feeds_action_back() {
        let store = tally_store();
        store.send(TallyAction::BumpFromFuture).await;
        assert_eq!(store.state(|s| s.count).await, 1);
    }

    #[tokio::test]
    async fn parallel_effects_all_execute() {
        let store = tally_store();
        store.send(TallyAction::BumpTwiceInParallel).await;
        assert_eq!(store.state(|s| s.count).await, 2);
    }

    #[test]
    fn snapshot_clones_state() {
        let store = tally_store();
        let snapshot = tokio_test::block_on(async {
            store.send(TallyAction::Bump).await;
            store.snapshot().await
        });
        assert_eq!(snapshot.count, 1);
    }
}
