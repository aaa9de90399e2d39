//! Carousel controller using the Actor+Relay architecture
//!
//! Data flows: DOM Events → Relays → State Actor → Frame Signal → View

use crate::carousel::state::{CarouselEvent, CarouselState, Frame};
use crate::dataflow::{relay, Actor, Relay};
use futures::{select, StreamExt};
use zoon::{Signal, SignalExt};

/// One carousel instance's state and the relays feeding it.
#[derive(Clone)]
pub struct CarouselController {
    state_actor: Actor<CarouselState>,

    pub next_clicked_relay: Relay,
    pub prev_clicked_relay: Relay,
    pub wheel_scrolled_relay: Relay<f64>,
    pub pointer_pressed_relay: Relay<f64>,
    pub pointer_released_relay: Relay<f64>,
    pub pointer_cancelled_relay: Relay,
    pub window_resized_relay: Relay,
}

impl CarouselController {
    pub fn new(initial_state: CarouselState) -> Self {
        let (next_clicked_relay, mut next_clicked_stream) = relay::<()>();
        let (prev_clicked_relay, mut prev_clicked_stream) = relay::<()>();
        let (wheel_scrolled_relay, mut wheel_scrolled_stream) = relay::<f64>();
        let (pointer_pressed_relay, mut pointer_pressed_stream) = relay::<f64>();
        let (pointer_released_relay, mut pointer_released_stream) = relay::<f64>();
        let (pointer_cancelled_relay, mut pointer_cancelled_stream) = relay::<()>();
        let (window_resized_relay, mut window_resized_stream) = relay::<()>();

        let state_actor = Actor::new(initial_state, async move |state| {
            loop {
                let event = select! {
                    clicked = next_clicked_stream.next() => match clicked {
                        Some(()) => CarouselEvent::NextClicked,
                        None => break,
                    },
                    clicked = prev_clicked_stream.next() => match clicked {
                        Some(()) => CarouselEvent::PrevClicked,
                        None => break,
                    },
                    delta_y = wheel_scrolled_stream.next() => match delta_y {
                        Some(delta_y) => CarouselEvent::WheelScrolled { delta_y },
                        None => break,
                    },
                    x = pointer_pressed_stream.next() => match x {
                        Some(x) => CarouselEvent::PointerPressed { x },
                        None => break,
                    },
                    x = pointer_released_stream.next() => match x {
                        Some(x) => CarouselEvent::PointerReleased { x },
                        None => break,
                    },
                    cancelled = pointer_cancelled_stream.next() => match cancelled {
                        Some(()) => CarouselEvent::PointerCancelled,
                        None => break,
                    },
                    resized = window_resized_stream.next() => match resized {
                        Some(()) => CarouselEvent::WindowResized,
                        None => break,
                    },
                };
                state.lock_mut().handle(event);
            }
        });

        Self {
            state_actor,
            next_clicked_relay,
            prev_clicked_relay,
            wheel_scrolled_relay,
            pointer_pressed_relay,
            pointer_released_relay,
            pointer_cancelled_relay,
            window_resized_relay,
        }
    }

    /// Emits whenever the view has to re-render, starting with the initial frame.
    ///
    /// Drag bookkeeping changes the state without changing the frame, so
    /// duplicates are filtered out here.
    pub fn frame_signal(&self) -> impl Signal<Item = Frame> {
        self.state_actor.signal_ref(|state| state.frame()).dedupe()
    }
}
