use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlMediaElement, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// The document as an `HtmlDocument`, which is where `document.cookie` lives.
#[must_use]
pub fn html_document() -> Option<HtmlDocument> {
    document().and_then(|doc| doc.dyn_into::<HtmlDocument>().ok())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Milliseconds since the epoch from the browser clock.
#[must_use]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Seed for decorative randomness. Fixed off-browser so server renders are
/// reproducible.
#[must_use]
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = (js_sys::Math::random() * f64::from(u32::MAX)) as u64 ^ (now_ms() as u64);
        seed
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0x4845_4152_5453
    }
}

/// Start media playback and wait for the browser's verdict.
///
/// # Errors
/// Returns the rejection value when playback is refused, typically because
/// autoplay is blocked until the first user gesture.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn play_media(media: &HtmlMediaElement) -> Result<(), JsValue> {
    let promise = media.play()?;
    JsFuture::from(promise).await?;
    Ok(())
}
