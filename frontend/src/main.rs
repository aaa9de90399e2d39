//! Carousel frontend entry point
//!
//! Enhances server-rendered `[data-carousel]` markup; nothing is rendered
//! from Rust.

mod carousel;
mod config;
mod dataflow;

pub fn main() {
    let config = config::load();
    carousel::boot(config);
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
