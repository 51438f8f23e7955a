//! Opening the lead modal from a marketing card.
//!
//! Pressing a card first plays the card's press animation, then opens the
//! modal. Once the modal goes away the card stays highlighted a little longer
//! before it is released.

use crate::config::{CARD_CLEAR_AFTER_CLOSE_MS, CARD_CLEAR_AFTER_SUBMIT_MS, CARD_OPEN_DELAY_MS};
use crate::timers::Scheduled;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalVisibility {
    pub is_open: bool,
    /// Card that launched the modal. Display only.
    pub source_card_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchTimer {
    OpenModal { epoch: u32 },
    ReleaseCard { epoch: u32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardLaunch {
    visibility: ModalVisibility,
    card_transitioning: bool,
    epoch: u32,
}

impl CardLaunch {
    pub fn visibility(&self) -> &ModalVisibility {
        &self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open
    }

    pub fn is_card_transitioning(&self) -> bool {
        self.card_transitioning
    }

    pub fn is_active_card(&self, card_id: &str) -> bool {
        self.visibility.source_card_id.as_deref() == Some(card_id)
    }

    /// Opens immediately, not tied to any card.
    pub fn start_now(&mut self) {
        self.epoch += 1;
        self.visibility = ModalVisibility {
            is_open: true,
            source_card_id: None,
        };
        self.card_transitioning = false;
    }

    pub fn press_card(&mut self, card_id: &str) -> Option<Scheduled<LaunchTimer>> {
        if self.visibility.is_open || self.card_transitioning {
            return None;
        }
        self.epoch += 1;
        self.visibility.source_card_id = Some(card_id.to_string());
        self.card_transitioning = true;
        Some(Scheduled::after(
            CARD_OPEN_DELAY_MS,
            LaunchTimer::OpenModal { epoch: self.epoch },
        ))
    }

    /// The modal was dismissed without completing.
    pub fn modal_closed(&mut self) -> Option<Scheduled<LaunchTimer>> {
        self.hide(CARD_CLEAR_AFTER_CLOSE_MS)
    }

    /// The modal reported a captured lead.
    pub fn form_completed(&mut self) -> Option<Scheduled<LaunchTimer>> {
        self.hide(CARD_CLEAR_AFTER_SUBMIT_MS)
    }

    pub fn on_timer(&mut self, timer: LaunchTimer) {
        match timer {
            LaunchTimer::OpenModal { epoch } if epoch == self.epoch && self.card_transitioning => {
                self.visibility.is_open = true;
            }
            LaunchTimer::ReleaseCard { epoch } if epoch == self.epoch && !self.visibility.is_open => {
                self.visibility.source_card_id = None;
                self.card_transitioning = false;
            }
            _ => {}
        }
    }

    fn hide(&mut self, release_after_ms: u32) -> Option<Scheduled<LaunchTimer>> {
        self.visibility.is_open = false;
        self.epoch += 1;
        if self.visibility.source_card_id.is_none() && !self.card_transitioning {
            return None;
        }
        Some(Scheduled::after(
            release_after_ms,
            LaunchTimer::ReleaseCard { epoch: self.epoch },
        ))
    }
}
