//! Virtual time for driving the state machines without a browser.

#![allow(dead_code)]

use hivesurf::storage::MemoryStore;
use hivesurf::theme::ThemeController;
use hivesurf::timers::Scheduled;

pub struct VirtualClock<E> {
    now: u64,
    seq: u64,
    pending: Vec<(u64, u64, E)>,
}

impl<E> VirtualClock<E> {
    pub fn new() -> Self {
        Self {
            now: 0,
            seq: 0,
            pending: Vec::new(),
        }
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn schedule(&mut self, scheduled: Option<Scheduled<E>>) {
        if let Some(Scheduled { delay_ms, event }) = scheduled {
            self.seq += 1;
            self.pending.push((self.now + u64::from(delay_ms), self.seq, event));
        }
    }

    /// Pops the earliest event due no later than `until`, moving the clock to it.
    pub fn next_due(&mut self, until: u64) -> Option<E> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, (due, _, _))| *due <= until)
            .min_by_key(|(_, (due, seq, _))| (*due, *seq))
            .map(|(index, _)| index)?;
        let (due, _, event) = self.pending.remove(index);
        self.now = due;
        Some(event)
    }

    pub fn advance_to(&mut self, at: u64) {
        self.now = self.now.max(at);
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Runs theme timers up to `until` and returns the clock time of every flip.
pub fn run_theme(controller: &mut ThemeController, clock: &mut VirtualClock<hivesurf::theme::ThemeTimer>, until: u64) -> Vec<u64> {
    let mut flips = Vec::new();
    while let Some(timer) = clock.next_due(until) {
        let step = controller.on_timer(timer);
        if step.flipped.is_some() {
            flips.push(clock.now());
        }
        clock.schedule(step.next);
    }
    clock.advance_to(until);
    flips
}

pub fn theme_with(store: &MemoryStore) -> ThemeController {
    ThemeController::new(Box::new(store.clone()))
}
