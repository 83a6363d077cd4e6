//! requestAnimationFrame loop

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::util::log;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running flag and pending request id shared with the frame callback
#[derive(Debug, Default)]
struct FrameState {
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
}

impl FrameState {
    fn started() -> Self {
        Self {
            running: Cell::new(true),
            pending: Cell::new(None),
        }
    }

    /// Record the outcome of requesting the next frame. A failed request
    /// ends the loop.
    fn scheduled<E>(&self, request: Result<Option<i32>, E>) -> bool {
        match request {
            Ok(id) => {
                self.pending.set(id);
                true
            }
            Err(_) => {
                self.running.set(false);
                self.pending.set(None);
                false
            }
        }
    }

    /// Mark stopped and hand back the request to cancel, if any
    fn stop(&self) -> Option<i32> {
        self.running.set(false);
        self.pending.take()
    }
}

/// One frame callback per display refresh until stopped
///
/// The callback holds a handle to itself so it can reschedule; `stop`
/// drops it, which breaks that cycle.
pub struct FrameLoop {
    window: web_sys::Window,
    state: Rc<FrameState>,
    callback: FrameCallback,
}

impl FrameLoop {
    /// Run `on_frame` on every animation frame, starting with the next one
    pub fn start<F>(window: web_sys::Window, mut on_frame: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let state = Rc::new(FrameState::started());
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let this_frame = callback.clone();
        let frame_window = window.clone();
        let frame_state = state.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_state.pending.set(None);
            if !frame_state.running.get() {
                return;
            }
            on_frame();
            if !frame_state.scheduled(schedule(&frame_window, &this_frame)) {
                log("[folio] requestAnimationFrame failed, frame loop stopped");
            }
        }) as Box<dyn FnMut()>));

        state.pending.set(schedule(&window, &callback)?);

        Ok(Self {
            window,
            state,
            callback,
        })
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Cancel the pending frame and release the callback
    pub fn stop(&self) {
        if let Some(id) = self.state.stop() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(window: &web_sys::Window, callback: &FrameCallback) -> Result<Option<i32>, JsValue> {
    match callback.borrow().as_ref() {
        Some(closure) => window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map(Some),
        None => Ok(None),
    }
}
