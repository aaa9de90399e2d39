//! Event channel feeding DOM events into Actors
//!
//! Each DOM listener owns a sending half; the owning Actor drains the
//! receiving half inside its `select!` loop.

use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
#[cfg(debug_assertions)]
use std::sync::{Arc, OnceLock};

/// Type-safe event channel from a DOM listener to an Actor.
///
/// # Event-Source Naming Convention
///
/// Relays follow the `{source}_{event}_relay` pattern:
/// - `next_clicked_relay` - user clicked the "next" control
/// - `pointer_released_relay` - pointer lifted over the track
/// - `window_resized_relay` - browser window changed size
///
/// # Examples
///
/// ```rust
/// use crate::dataflow::relay;
///
/// let (next_clicked_relay, mut next_clicked_stream) = relay::<()>();
///
/// // From the click listener
/// next_clicked_relay.send(());
///
/// // Inside the Actor loop
/// while let Some(()) = next_clicked_stream.next().await {
///     state.update_mut(|carousel| carousel.advance());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T = ()>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Relay {
                sender,
                #[cfg(debug_assertions)]
                emit_location: Arc::new(OnceLock::new()),
            },
            receiver,
        )
    }

    /// Panics when this relay was already sent from another call site.
    #[cfg(debug_assertions)]
    #[track_caller]
    fn assert_single_source(&self) {
        let caller = std::panic::Location::caller();
        let first = *self.emit_location.get_or_init(|| caller);
        if first != caller {
            panic!("relay sent from {} after being sent from {}", caller, first);
        }
    }

    /// Send an event, silently dropping it if the Actor is gone.
    ///
    /// Panics in debug builds when the same relay is sent from two
    /// different call sites.
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        self.assert_single_source();

        let _ = self.sender.unbounded_send(value);
    }
}

/// Create a relay together with the stream its Actor consumes.
pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_events_arrive_in_order() {
        let (pointer_released_relay, mut stream) = relay::<f64>();

        for x in [10.0, 42.5, -3.0] {
            pointer_released_relay.send(x);
        }

        assert_eq!(stream.next().await, Some(10.0));
        assert_eq!(stream.next().await, Some(42.5));
        assert_eq!(stream.next().await, Some(-3.0));
    }

    #[tokio::test]
    async fn test_clones_share_one_channel() {
        let (window_resized_relay, mut stream) = relay::<()>();
        let listener_copy = window_resized_relay.clone();
        let resize = |relay: &Relay| relay.send(());

        resize(&window_resized_relay);
        resize(&listener_copy);

        assert_eq!(stream.next().await, Some(()));
        assert_eq!(stream.next().await, Some(()));
    }

    #[tokio::test]
    async fn test_send_after_actor_gone_is_dropped() {
        let (next_clicked_relay, stream) = relay::<()>();
        drop(stream);
        next_clicked_relay.send(());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "after being sent from")]
    fn test_second_call_site_panics() {
        let (pointer_pressed_relay, _stream) = relay::<f64>();
        pointer_pressed_relay.send(1.0);
        pointer_pressed_relay.send(2.0);
    }
}
