//! Delayed state transitions.
//!
//! State machines never touch the browser clock. They hand back a
//! [`Scheduled`] request and the component running them arms a [`TimerSlot`]
//! that delivers the event as a component message. Slots cancel on re-arm and
//! on drop, so an unmounted component never receives a late callback.

use gloo_timers::callback::Timeout;
use yew::html::Scope;
use yew::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled<E> {
    pub delay_ms: u32,
    pub event: E,
}

impl<E> Scheduled<E> {
    pub fn after(delay_ms: u32, event: E) -> Self {
        Self { delay_ms, event }
    }

    pub fn map<F>(self, f: impl FnOnce(E) -> F) -> Scheduled<F> {
        Scheduled {
            delay_ms: self.delay_ms,
            event: f(self.event),
        }
    }
}

/// Holds at most one pending browser timeout.
#[derive(Default)]
pub struct TimerSlot {
    pending: Option<Timeout>,
}

impl TimerSlot {
    pub fn arm(&mut self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        // Replacing the old Timeout drops it, which clears it.
        self.pending = Some(Timeout::new(delay_ms, callback));
    }

    /// Arms the slot so that `scheduled.event` reaches `link` wrapped by `wrap`.
    pub fn schedule<C, E>(&mut self, link: &Scope<C>, scheduled: Scheduled<E>, wrap: fn(E) -> C::Message)
    where
        C: Component,
        E: 'static,
    {
        let link = link.clone();
        let Scheduled { delay_ms, event } = scheduled;
        self.arm(delay_ms, move || link.send_message(wrap(event)));
    }

    /// Forget the handle of a timeout that has just fired.
    pub fn fired(&mut self) {
        self.pending = None;
    }

    pub fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            drop(timeout);
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_keeps_delay() {
        let scheduled = Scheduled::after(150, 7u8).map(|n| n as u32 * 2);
        assert_eq!(scheduled, Scheduled::after(150, 14u32));
    }

    #[test]
    fn empty_slot_is_not_armed() {
        let mut slot = TimerSlot::default();
        assert!(!slot.is_armed());
        slot.cancel();
        slot.fired();
        assert!(!slot.is_armed());
    }
}
