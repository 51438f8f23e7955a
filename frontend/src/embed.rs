//! The HubSpot hosted variant of the lead capture flow.
//!
//! The hosted script owns the fields. All this side knows is whether the
//! modal is showing and whether HubSpot has reported a submission.

use log::debug;
use serde::Deserialize;

use crate::lead::{CompletionMode, FlowOutcome, LeadTimer};
use crate::timers::Scheduled;

/// Payload HubSpot posts to `window` for form lifecycle callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HubSpotMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "eventName")]
    pub event_name: String,
    #[serde(default)]
    pub id: Option<String>,
}

impl HubSpotMessage {
    pub fn is_submission_of(&self, form_id: &str) -> bool {
        self.kind == "hsFormCallback"
            && self.event_name == "onFormSubmitted"
            && self.id.as_deref().map_or(true, |id| id == form_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddedFlow {
    open: bool,
    submitted: bool,
    mode: CompletionMode,
    session: u32,
}

impl EmbeddedFlow {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn open(&mut self, mode: CompletionMode) {
        self.reset();
        self.mode = mode;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.reset();
        self.open = false;
    }

    pub fn form_submitted(&mut self) -> Option<Scheduled<LeadTimer>> {
        if !self.open || self.submitted {
            debug!("Ignoring HubSpot submission, flow not waiting for one");
            return None;
        }
        self.submitted = true;
        Some(self.mode.timer(self.session))
    }

    pub fn on_timer(&mut self, timer: LeadTimer) -> Option<FlowOutcome> {
        match timer {
            LeadTimer::Notify { session } if session == self.session && self.submitted => {
                Some(FlowOutcome::Completed)
            }
            LeadTimer::AutoReset { session } if session == self.session && self.submitted => {
                self.close();
                Some(FlowOutcome::Closed)
            }
            _ => None,
        }
    }

    fn reset(&mut self) {
        self.submitted = false;
        self.session = self.session.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AUTO_RESET_DELAY_MS, HUBSPOT_FORM_ID};

    #[test]
    fn parses_submission_callback() {
        let raw = format!(
            r#"{{"type":"hsFormCallback","eventName":"onFormSubmitted","id":"{}","data":[]}}"#,
            HUBSPOT_FORM_ID
        );
        let message: HubSpotMessage = serde_json::from_str(&raw).unwrap();
        assert!(message.is_submission_of(HUBSPOT_FORM_ID));
        assert!(!message.is_submission_of("another-form"));
    }

    #[test]
    fn ready_callback_is_not_a_submission() {
        let message: HubSpotMessage =
            serde_json::from_str(r#"{"type":"hsFormCallback","eventName":"onFormReady"}"#).unwrap();
        assert!(!message.is_submission_of(HUBSPOT_FORM_ID));
    }

    #[test]
    fn submission_auto_resets() {
        let mut flow = EmbeddedFlow::default();
        flow.open(CompletionMode::AutoReset);
        let timer = flow.form_submitted().unwrap();
        assert_eq!(timer.delay_ms, AUTO_RESET_DELAY_MS);
        assert!(flow.is_submitted());
        assert!(flow.form_submitted().is_none());
        assert_eq!(flow.on_timer(timer.event), Some(FlowOutcome::Closed));
        assert!(!flow.is_open());
        assert!(!flow.is_submitted());
    }

    #[test]
    fn timer_after_close_is_ignored() {
        let mut flow = EmbeddedFlow::default();
        flow.open(CompletionMode::Notify);
        let timer = flow.form_submitted().unwrap();
        flow.close();
        assert_eq!(flow.on_timer(timer.event), None);
    }

    #[test]
    fn closed_flow_ignores_submissions() {
        let mut flow = EmbeddedFlow::default();
        assert!(flow.form_submitted().is_none());
    }
}
