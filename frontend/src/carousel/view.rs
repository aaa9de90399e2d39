//! DOM binding: event listeners and the render task
//!
//! Listeners do the synchronous part of each event (`preventDefault`,
//! pointer capture) and forward the rest into the controller's relays.

use crate::carousel::controller::CarouselController;
use crate::carousel::layout::{translate_x, TrackMetrics};
use crate::carousel::markup::{CarouselMarkup, InstanceOptions};
use crate::carousel::state::{active_flags, CarouselState, Frame};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Element, EventTarget, HtmlElement, MouseEvent, PointerEvent,
    WheelEvent,
};
use zoon::{eprintln, SignalExt, SignalExtExt, Task, TaskHandle};

/// A carousel wired to the page. Dropping it stops rendering; the
/// listeners stay attached for the page lifetime.
pub struct MountedCarousel {
    // Owns the state Actor; relays alone don't keep it running
    #[allow(dead_code)]
    controller: CarouselController,
    #[allow(dead_code)]
    render_task: TaskHandle,
}

/// Attach listeners and start rendering. `None` when the markup has no slides.
pub fn mount(markup: CarouselMarkup, options: InstanceOptions) -> Option<MountedCarousel> {
    let state = CarouselState::new(markup.slides.len(), options.drag_threshold)?;
    let controller = CarouselController::new(state);

    attach_listeners(&markup, &options, &controller);

    let view = TrackView {
        container: markup.container,
        track: markup.track,
        slides: markup.slides,
        slide_gap: options.slide_gap,
        active_class: options.active_class,
    };
    // The first emitted frame performs the initial layout
    let render_task = Task::start_droppable(
        controller
            .frame_signal()
            .for_each_sync(move |frame| view.render(frame)),
    );

    Some(MountedCarousel {
        controller,
        render_task,
    })
}

fn attach_listeners(
    markup: &CarouselMarkup,
    options: &InstanceOptions,
    controller: &CarouselController,
) {
    if let Some(prev) = &markup.prev {
        let prev_clicked_relay = controller.prev_clicked_relay.clone();
        listen(prev, "click", move |_: MouseEvent| prev_clicked_relay.send(()));
    }
    if let Some(next) = &markup.next {
        let next_clicked_relay = controller.next_clicked_relay.clone();
        listen(next, "click", move |_: MouseEvent| next_clicked_relay.send(()));
    }

    if options.wheel_navigation {
        let suppress_scroll = options.suppress_wheel_scroll;
        let wheel_scrolled_relay = controller.wheel_scrolled_relay.clone();
        let wheel_options = AddEventListenerOptions::new();
        // preventDefault is ignored on passive listeners
        wheel_options.set_passive(!suppress_scroll);
        listen_with_options(&markup.container, "wheel", &wheel_options, move |event: WheelEvent| {
            if suppress_scroll {
                event.prevent_default();
            }
            wheel_scrolled_relay.send(event.delta_y());
        });
    }

    {
        let track = markup.track.clone();
        let pointer_pressed_relay = controller.pointer_pressed_relay.clone();
        listen(&markup.track, "pointerdown", move |event: PointerEvent| {
            if let Err(error) = track.set_pointer_capture(event.pointer_id()) {
                eprintln!("⚠️ Carousel: pointer capture failed: {:?}", error);
            }
            pointer_pressed_relay.send(f64::from(event.client_x()));
        });
    }
    {
        let pointer_released_relay = controller.pointer_released_relay.clone();
        listen(&markup.track, "pointerup", move |event: PointerEvent| {
            pointer_released_relay.send(f64::from(event.client_x()));
        });
    }
    {
        let pointer_cancelled_relay = controller.pointer_cancelled_relay.clone();
        listen(&markup.track, "pointercancel", move |_: PointerEvent| {
            pointer_cancelled_relay.send(());
        });
    }

    match web_sys::window() {
        Some(window) => {
            let window_resized_relay = controller.window_resized_relay.clone();
            listen(&window, "resize", move |_: web_sys::Event| window_resized_relay.send(()));
        }
        None => eprintln!("⚠️ Carousel: no window, resize tracking disabled"),
    }
}

/// Register a listener that lives as long as the page.
pub(crate) fn listen<E>(target: &EventTarget, event_type: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    listen_with_options(target, event_type, &AddEventListenerOptions::new(), handler);
}

pub(crate) fn listen_with_options<E>(
    target: &EventTarget,
    event_type: &str,
    options: &AddEventListenerOptions,
    handler: impl FnMut(E) + 'static,
) where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(error) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event_type,
        closure.as_ref().unchecked_ref(),
        options,
    ) {
        eprintln!("⚠️ Carousel: failed to listen for '{}': {:?}", event_type, error);
    }
    closure.forget();
}

struct TrackView {
    container: Element,
    track: HtmlElement,
    slides: Vec<Element>,
    slide_gap: f64,
    active_class: String,
}

impl TrackView {
    fn render(&self, frame: Frame) {
        let flags = active_flags(self.slides.len(), frame.index);
        for (slide, active) in self.slides.iter().zip(flags) {
            if let Err(error) = slide.class_list().toggle_with_force(&self.active_class, active) {
                eprintln!("⚠️ Carousel: failed to toggle '{}': {:?}", self.active_class, error);
            }
        }

        let Some(first_slide) = self.slides.first() else {
            return;
        };
        let metrics = TrackMetrics {
            slide_width: first_slide.get_bounding_client_rect().width(),
            container_width: self.container.get_bounding_client_rect().width(),
            slide_gap: self.slide_gap,
        };
        let transform = translate_x(metrics.offset_for(frame.index));
        if let Err(error) = self.track.style().set_property("transform", &transform) {
            eprintln!("⚠️ Carousel: failed to move track: {:?}", error);
        }
    }
}
