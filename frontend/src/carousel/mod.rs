//! Carousel domain
//!
//! DOM Events → Relays → [`controller::CarouselController`] → Frame Signal → [`view`]
//!
//! `state` and `layout` are DOM-free; `markup`, `view` and `registry` talk
//! to the page through `web-sys`.

pub mod controller;
pub mod layout;
pub mod markup;
pub mod registry;
pub mod state;
pub mod view;

pub use registry::boot;
