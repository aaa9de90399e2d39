//! Single-value Actor owning one piece of carousel state
//!
//! The Actor holds a `Mutable<T>` and a task draining Relay streams.
//! Nothing outside that task mutates the value.

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Reactive state container driven by Relay events.
///
/// - **Single Point of Mutation**: only the processor task writes the state
/// - **Sequential Processing**: events are handled one at a time, in order
/// - **Reactive Signals**: views subscribe through `signal_ref`
///
/// # Examples
///
/// ```rust
/// let (next_clicked_relay, mut next_clicked_stream) = relay::<()>();
///
/// let index = Actor::new(0usize, async move |state| {
///     while next_clicked_stream.next().await.is_some() {
///         state.update_mut(|index| *index = (*index + 1) % 5);
///     }
/// });
///
/// next_clicked_relay.send(());
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Mutable<T>,
    // Dropping the last clone aborts the processor
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
    #[cfg(debug_assertions)]
    #[allow(dead_code)]
    creation_location: &'static std::panic::Location<'static>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Spawn the processor with the given initial state.
    ///
    /// The processor usually loops over a `select!` of Relay streams and
    /// returns once every stream is closed.
    #[track_caller]
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));

        Self {
            state,
            task_handle,
            #[cfg(debug_assertions)]
            creation_location: std::panic::Location::caller(),
        }
    }

    /// Project the state without cloning all of it.
    pub fn signal_ref<U>(
        &self,
        f: impl Fn(&T) -> U + Send + Sync + 'static,
    ) -> impl Signal<Item = U>
    where
        U: PartialEq + Send + Sync + 'static,
    {
        self.state.signal_ref(f)
    }
}
