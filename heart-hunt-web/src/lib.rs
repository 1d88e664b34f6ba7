#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod content;
pub mod cookies;
pub mod dom;
pub mod pages;
pub mod paths;
pub mod router;
pub mod timers;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        dom::console_error(&format!("logger already initialised: {err}"));
    }
    yew::Renderer::<app::App>::new().render();
}
