use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// The "pending work" flag: at most one frame callback in flight.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Bookkeeping for a single in-flight animation frame.
#[derive(Debug, Default)]
pub struct PendingFrame {
    gate: FrameGate,
    id: Option<i32>,
}

impl PendingFrame {
    /// Calls `request_frame` only if no frame is already pending. A `None`
    /// from `request_frame` means the request failed and releases the gate.
    pub fn schedule(&mut self, request_frame: impl FnOnce() -> Option<i32>) -> bool {
        if !self.gate.request() {
            return false;
        }
        match request_frame() {
            Some(id) => {
                self.id = Some(id);
                true
            }
            None => {
                self.gate.complete();
                false
            }
        }
    }

    pub fn fired(&mut self) {
        self.id = None;
        self.gate.complete();
    }

    /// Returns the id of a frame that still has to be cancelled.
    pub fn cancel(&mut self) -> Option<i32> {
        if !self.gate.is_pending() {
            return None;
        }
        self.gate.complete();
        self.id.take()
    }
}

/// Runs `work` on the next animation frame, coalescing every
/// [`schedule`](FrameDebouncer::schedule) call made before that frame.
/// Dropping it cancels a frame that has not fired yet.
pub struct FrameDebouncer {
    frame: Rc<RefCell<PendingFrame>>,
    on_frame: Closure<dyn FnMut(f64)>,
}

impl FrameDebouncer {
    pub fn new(mut work: impl FnMut() + 'static) -> Self {
        let frame = Rc::new(RefCell::new(PendingFrame::default()));

        let on_frame = {
            let frame = frame.clone();
            Closure::wrap(Box::new(move |_timestamp: f64| {
                work();
                frame.borrow_mut().fired();
            }) as Box<dyn FnMut(f64)>)
        };

        Self { frame, on_frame }
    }

    pub fn schedule(&self) {
        self.frame.borrow_mut().schedule(|| {
            let window = web_sys::window()?;
            match window.request_animation_frame(self.on_frame.as_ref().unchecked_ref()) {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!("requestAnimationFrame failed, dropping viewport update");
                    None
                }
            }
        });
    }
}

impl Drop for FrameDebouncer {
    fn drop(&mut self) {
        if let Some(id) = self.frame.borrow_mut().cancel() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// A window event subscription that unsubscribes itself when dropped.
pub struct WindowListener {
    window: Window,
    events: &'static [&'static str],
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(events: &'static [&'static str], callback: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        for event in events {
            if window
                .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                .is_err()
            {
                warn!("Could not subscribe to window '{}' events", event);
            }
        }
        Some(Self {
            window,
            events,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        for event in self.events {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref());
        }
    }
}

pub const SCROLL_AND_RESIZE: &[&str] = &["scroll", "resize"];

/// Frame-debounced reaction to window scroll and resize. `work` also runs
/// once on the first frame after creation.
pub struct ViewportWatch {
    _listener: Option<WindowListener>,
    _debouncer: Rc<FrameDebouncer>,
}

impl ViewportWatch {
    pub fn new(work: impl FnMut() + 'static) -> Self {
        let debouncer = Rc::new(FrameDebouncer::new(work));
        let listener = {
            let debouncer = debouncer.clone();
            WindowListener::new(SCROLL_AND_RESIZE, move || debouncer.schedule())
        };
        debouncer.schedule();
        Self {
            _listener: listener,
            _debouncer: debouncer,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{FrameGate, PendingFrame};

    #[test]
    fn gate_coalesces_requests_within_a_frame() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());

        gate.complete();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }

    #[test]
    fn repeated_schedules_request_one_frame() {
        let requests = Cell::new(0);
        let mut frame = PendingFrame::default();
        let request = || {
            requests.set(requests.get() + 1);
            Some(7)
        };

        assert!(frame.schedule(request));
        assert!(!frame.schedule(request));
        assert!(!frame.schedule(request));
        assert_eq!(requests.get(), 1);

        frame.fired();
        assert!(frame.schedule(request));
        assert_eq!(requests.get(), 2);
    }

    #[test]
    fn failed_request_does_not_block_the_next_one() {
        let mut frame = PendingFrame::default();
        assert!(!frame.schedule(|| None));
        assert!(frame.schedule(|| Some(3)));
    }

    #[test]
    fn cancel_only_yields_frames_still_in_flight() {
        let mut frame = PendingFrame::default();
        assert_eq!(frame.cancel(), None);

        frame.schedule(|| Some(42));
        assert_eq!(frame.cancel(), Some(42));
        assert_eq!(frame.cancel(), None);

        frame.schedule(|| Some(43));
        frame.fired();
        assert_eq!(frame.cancel(), None);
    }
}
