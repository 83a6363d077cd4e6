//! DOM event listeners that detach themselves when dropped

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A callback registered on an event target
///
/// The closure stays alive as long as this value; dropping it removes the
/// listener from the target.
pub struct EventListener {
    target: web_sys::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    /// Register `handler` for `event` on `target`
    pub fn attach<F>(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: F,
    ) -> Result<Self, JsValue>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
