//! Browser timers that cancel themselves when dropped.
//!
//! Views keep these in hook state so tearing the view down clears any pending
//! callback instead of letting it fire into an unmounted component.

use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

fn millis(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}

/// One-shot `setTimeout` handle.
pub struct Timeout {
    id: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    /// Schedule `callback` after `delay`. Outside a browser nothing is
    /// scheduled and the returned handle is inert.
    pub fn new<F: FnOnce() + 'static>(delay: Duration, callback: F) -> Self {
        let mut callback = Some(callback);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(cb) = callback.take() {
                cb();
            }
        });
        let id = crate::dom::window().and_then(|win| {
            win.set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis(delay),
            )
            .map_err(|err| log::warn!("setTimeout failed: {}", crate::dom::js_error_message(&err)))
            .ok()
        });
        Self {
            id,
            _callback: closure,
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let (Some(id), Some(win)) = (self.id.take(), crate::dom::window()) {
            win.clear_timeout_with_handle(id);
        }
    }
}

/// Repeating `setInterval` handle.
pub struct Interval {
    id: Option<i32>,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new<F: FnMut() + 'static>(period: Duration, callback: F) -> Self {
        let closure = Closure::<dyn FnMut()>::new(callback);
        let id = crate::dom::window().and_then(|win| {
            win.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis(period),
            )
            .map_err(|err| log::warn!("setInterval failed: {}", crate::dom::js_error_message(&err)))
            .ok()
        });
        Self {
            id,
            _callback: closure,
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let (Some(id), Some(win)) = (self.id.take(), crate::dom::window()) {
            win.clear_interval_with_handle(id);
        }
    }
}
