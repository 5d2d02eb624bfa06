//! Browser timer host for the core reveal driver.
use gloo::timers::callback::Timeout;
use shufflebox_core::TimerHost;

/// `TimerHost` backed by `window.setTimeout` through gloo.
///
/// Gloo's `Timeout` clears its underlying browser timer when dropped,
/// which gives the driver its drop-cancels handle contract for free.
#[derive(Clone, Copy, Default)]
pub struct BrowserTimerHost;

impl TimerHost for BrowserTimerHost {
    type Handle = Timeout;

    fn schedule_after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        Timeout::new(delay_ms, callback)
    }
}
