//! `requestAnimationFrame` scheduling behind the core `FrameLoop`.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use pagefx::{FrameHandle, FrameLoop, FrameScheduler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

type FrameCallback = Closure<dyn FnMut(f64)>;

struct RafScheduler {
    window: Window,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameScheduler for RafScheduler {
    type Error = JsValue;

    fn request_frame(&self) -> Result<FrameHandle, JsValue> {
        let callback = self.callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| JsValue::from_str("frame callback not installed"))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if let Err(err) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame failed: {:?}", err);
        }
    }
}

struct Inner {
    frames: RefCell<FrameLoop>,
    scheduler: RafScheduler,
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.frames.borrow_mut().stop(&self.scheduler);
    }
}

/// A repeating per-frame task with an explicit start/stop handle.
///
/// The step closure receives the frame timestamp and returns whether another
/// frame is wanted. Dropping the last handle cancels any pending frame.
#[derive(Clone)]
pub struct AnimationLoop {
    inner: Rc<Inner>,
}

impl AnimationLoop {
    pub fn new<F>(window: &Window, mut step: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
        let inner = Rc::new(Inner {
            frames: RefCell::new(FrameLoop::new()),
            scheduler: RafScheduler {
                window: window.clone(),
                callback: callback.clone(),
            },
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.frames.borrow_mut().begin_frame() {
                return;
            }
            let keep_going = step(timestamp);
            if let Err(err) = inner.frames.borrow_mut().end_frame(&inner.scheduler, keep_going) {
                log::warn!("requestAnimationFrame failed: {:?}", err);
            };
        }) as Box<dyn FnMut(f64)>));

        Self { inner }
    }

    /// Schedule frames. Does nothing if a frame is already pending.
    pub fn start(&self) {
        let started = self.inner.frames.borrow_mut().start(&self.inner.scheduler);
        if let Err(err) = started {
            log::warn!("requestAnimationFrame failed: {:?}", err);
        }
    }

    /// Withdraw the pending frame; the current frame, if any, finishes normally.
    pub fn stop(&self) {
        self.inner.frames.borrow_mut().stop(&self.inner.scheduler);
    }

    pub fn is_running(&self) -> bool {
        self.inner.frames.borrow().is_running()
    }
}
