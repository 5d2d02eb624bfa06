//! Timer-driven reveal driver
//!
//! Bridges the clock-free [`RevealAnimator`] to a host timer facility.
//! One timer is outstanding at any moment and its handle is retained, so
//! teardown can always cancel the run; the completion callback fires at
//! most once and never after cancellation.
use std::cell::RefCell;
use std::rc::Rc;

use crate::animator::{RevealAnimator, RevealFrame};

/// Scheduling seam between the reveal driver and its host environment.
///
/// Implementations must drop-cancel: once the returned handle is dropped,
/// the pending callback must never run. Callbacks must be invoked
/// asynchronously, never from inside `schedule_after` itself.
pub trait TimerHost {
    type Handle;

    fn schedule_after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

struct DriverState<H: TimerHost> {
    host: H,
    animator: RevealAnimator,
    pending: Option<H::Handle>,
    on_frame: Rc<dyn Fn(RevealFrame)>,
    on_complete: Option<Box<dyn FnOnce()>>,
    cancelled: bool,
}

/// Drives one reveal run over a [`TimerHost`]
pub struct RevealDriver<H: TimerHost + 'static> {
    state: Rc<RefCell<DriverState<H>>>,
}

impl<H: TimerHost + 'static> RevealDriver<H> {
    /// Start the run: emit the initial frame and schedule the first tick.
    pub fn start(
        host: H,
        animator: RevealAnimator,
        on_frame: impl Fn(RevealFrame) + 'static,
        on_complete: impl FnOnce() + 'static,
    ) -> Self {
        let first = animator.initial_frame();
        let state = Rc::new(RefCell::new(DriverState {
            host,
            animator,
            pending: None,
            on_frame: Rc::new(on_frame),
            on_complete: Some(Box::new(on_complete)),
            cancelled: false,
        }));

        let emit = Rc::clone(&state.borrow().on_frame);
        emit(first);
        if let Some(delay) = first.delay_to_next_ms {
            Self::schedule(&state, delay);
        }
        Self { state }
    }

    /// Lineup position currently on display
    #[must_use]
    pub fn display_index(&self) -> usize {
        self.state.borrow().animator.display_index()
    }

    /// Whether the run has produced its completion frame
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state.borrow().animator.is_done()
    }

    /// Cancel the run: drop the pending timer and forget the completion
    /// callback. Idempotent; safe to call at any phase.
    pub fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        state.cancelled = true;
        // Dropping the handle cancels the host timer.
        state.pending = None;
        state.on_complete = None;
    }

    fn schedule(state: &Rc<RefCell<DriverState<H>>>, delay_ms: u32) {
        let for_callback = Rc::clone(state);
        let handle = {
            let borrowed = state.borrow();
            borrowed
                .host
                .schedule_after(delay_ms, Box::new(move || Self::fire(&for_callback)))
        };
        state.borrow_mut().pending = Some(handle);
    }

    fn fire(state: &Rc<RefCell<DriverState<H>>>) {
        // Advance without holding the borrow across user callbacks.
        let (frame, on_frame) = {
            let mut borrowed = state.borrow_mut();
            borrowed.pending = None;
            if borrowed.cancelled {
                return;
            }
            let Ok(frame) = borrowed.animator.advance() else {
                return;
            };
            (frame, Rc::clone(&borrowed.on_frame))
        };

        on_frame(frame);

        match frame.delay_to_next_ms {
            Some(delay) => {
                if !state.borrow().cancelled {
                    Self::schedule(state, delay);
                }
            }
            None => {
                let complete = {
                    let mut borrowed = state.borrow_mut();
                    if borrowed.cancelled {
                        None
                    } else {
                        borrowed.on_complete.take()
                    }
                };
                if let Some(complete) = complete {
                    complete();
                }
            }
        }
    }
}

impl<H: TimerHost + 'static> Drop for RevealDriver<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}
