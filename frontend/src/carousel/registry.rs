//! Page-level registry: one controller per carousel container
//!
//! The registry is built once when the document is ready and kept for the
//! page lifetime.

use crate::carousel::markup::{CarouselMarkup, InstanceOptions, MarkupError};
use crate::carousel::view::{self, MountedCarousel};
use shared::CarouselConfig;
use std::sync::OnceLock;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, DocumentReadyState, Element};
use zoon::{eprintln, println};

static MOUNTED_CAROUSELS: OnceLock<Vec<MountedCarousel>> = OnceLock::new();

/// Mount every carousel on the page, waiting for `DOMContentLoaded` if the
/// document is still loading.
pub fn boot(config: CarouselConfig) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        eprintln!("⚠️ Carousel: no document available - nothing to mount");
        return;
    };

    if document.ready_state() != DocumentReadyState::Loading {
        register(&document, &config);
        return;
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let ready_document = document.clone();
    view::listen_with_options(&document, "DOMContentLoaded", &options, move |_: web_sys::Event| {
        register(&ready_document, &config);
    });
}

fn register(document: &Document, config: &CarouselConfig) {
    if MOUNTED_CAROUSELS.get().is_some() {
        eprintln!("⚠️ Carousels already mounted - ignoring duplicate initialization");
        return;
    }

    let mounted = mount_all(document, config);
    println!("🎠 Mounted {} carousel(s)", mounted.len());
    let _ = MOUNTED_CAROUSELS.set(mounted);
}

/// Scan `document` for carousel containers and mount each one.
///
/// Containers that fail discovery are skipped without affecting the rest.
pub fn mount_all(document: &Document, config: &CarouselConfig) -> Vec<MountedCarousel> {
    let containers = match document.query_selector_all(&config.markup.container) {
        Ok(containers) => containers,
        Err(error) => {
            eprintln!(
                "⚠️ Carousel: invalid container selector '{}': {:?}",
                config.markup.container, error
            );
            return Vec::new();
        }
    };

    (0..containers.length())
        .filter_map(|i| containers.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|container| mount_container(container, config))
        .collect()
}

fn mount_container(container: Element, config: &CarouselConfig) -> Option<MountedCarousel> {
    let (options, rejected) = InstanceOptions::for_container(&container, config);
    for invalid in rejected {
        eprintln!("⚠️ Carousel: {}", invalid);
    }

    match CarouselMarkup::discover(container, &config.markup) {
        Ok(markup) => view::mount(markup, options),
        // Empty carousels are left untouched on purpose
        Err(MarkupError::NoSlides) => None,
        Err(error) => {
            eprintln!("⚠️ Carousel skipped: {}", error);
            None
        }
    }
}
