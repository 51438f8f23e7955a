//! Lead capture form state.
//!
//! `LeadForm` drives both the three step "Start Now" wizard and the single
//! page inquiry forms on the services page. It only ever moves through
//! `Editing -> Submitting -> Submitted | Failed`; what happens after a
//! successful submission is decided up front by a [`CompletionMode`].

use std::str::FromStr;

use log::{debug, warn};
use serde::Serialize;

use crate::config::{AUTO_RESET_DELAY_MS, COMPLETION_NOTIFY_DELAY_MS};
use crate::error::{FlowError, SubmitError};
use crate::timers::Scheduled;

pub const SERVICE_OPTIONS: [&str; 7] = [
    "Search Engine Optimization (SEO)",
    "Social Media Marketing",
    "Content Marketing",
    "Pay-Per-Click (PPC)",
    "Email Marketing",
    "Mobile Marketing",
    "Not Sure - Need Consultation",
];

pub const BUDGET_OPTIONS: [(&str, &str); 4] = [
    ("500-1000", "$500 - $1,000/month"),
    ("1000-2000", "$1,000 - $2,000/month"),
    ("2000-5000", "$2,000 - $5,000/month"),
    ("5000+", "$5,000+/month"),
];

pub const TIMELINE_OPTIONS: [(&str, &str); 4] = [
    ("immediate", "Immediate start"),
    ("1-2-weeks", "1-2 weeks"),
    ("1-month", "1 month"),
    ("flexible", "Flexible"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Phone,
    Company,
    Service,
    Message,
    Budget,
    Timeline,
}

impl LeadField {
    pub fn as_str(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
            LeadField::Company => "company",
            LeadField::Service => "service",
            LeadField::Message => "message",
            LeadField::Budget => "budget",
            LeadField::Timeline => "timeline",
        }
    }
}

impl FromStr for LeadField {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(LeadField::Name),
            "email" => Ok(LeadField::Email),
            "phone" => Ok(LeadField::Phone),
            "company" => Ok(LeadField::Company),
            "service" => Ok(LeadField::Service),
            "message" => Ok(LeadField::Message),
            "budget" => Ok(LeadField::Budget),
            "timeline" => Ok(LeadField::Timeline),
            other => Err(FlowError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service: String,
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub budget: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub timeline: String,
}

impl LeadFields {
    pub fn with_service(service: &str) -> Self {
        Self {
            service: service.to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
            LeadField::Company => &self.company,
            LeadField::Service => &self.service,
            LeadField::Message => &self.message,
            LeadField::Budget => &self.budget,
            LeadField::Timeline => &self.timeline,
        }
    }

    pub fn set(&mut self, field: LeadField, value: String) {
        let slot = match field {
            LeadField::Name => &mut self.name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
            LeadField::Company => &mut self.company,
            LeadField::Service => &mut self.service,
            LeadField::Message => &mut self.message,
            LeadField::Budget => &mut self.budget,
            LeadField::Timeline => &mut self.timeline,
        };
        *slot = value;
    }

    /// First required field that is still blank.
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            Some("name")
        } else if self.email.trim().is_empty() {
            Some("email")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadPhase {
    Editing,
    Submitting,
    Submitted,
    /// The submission call failed. Fields are kept so the user can retry.
    Failed(String),
}

/// What the flow does once a submission has gone through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompletionMode {
    /// Report [`FlowOutcome::Completed`] after a short pause; the opener closes the modal.
    Notify,
    /// Show the thank-you screen, then reset and report [`FlowOutcome::Closed`].
    #[default]
    AutoReset,
}

impl CompletionMode {
    pub fn timer(self, session: u32) -> Scheduled<LeadTimer> {
        match self {
            CompletionMode::Notify => {
                Scheduled::after(COMPLETION_NOTIFY_DELAY_MS, LeadTimer::Notify { session })
            }
            CompletionMode::AutoReset => {
                Scheduled::after(AUTO_RESET_DELAY_MS, LeadTimer::AutoReset { session })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadTimer {
    Notify { session: u32 },
    AutoReset { session: u32 },
}

/// Reported to whoever opened the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// A lead was captured and the opener asked to be told.
    Completed,
    /// The flow is done and wants to be hidden.
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadForm {
    fields: LeadFields,
    seed_service: String,
    step: u8,
    total_steps: u8,
    phase: LeadPhase,
    mode: CompletionMode,
    session: u32,
    open: bool,
}

impl LeadForm {
    pub const WIZARD_STEPS: u8 = 3;

    pub fn wizard() -> Self {
        Self::with_steps(Self::WIZARD_STEPS, String::new())
    }

    /// One page form whose `service` field starts out as `service`.
    pub fn single_page(service: impl Into<String>) -> Self {
        Self::with_steps(1, service.into())
    }

    fn with_steps(total_steps: u8, seed_service: String) -> Self {
        Self {
            fields: LeadFields::with_service(&seed_service),
            seed_service,
            step: 1,
            total_steps,
            phase: LeadPhase::Editing,
            mode: CompletionMode::default(),
            session: 0,
            open: false,
        }
    }

    pub fn fields(&self) -> &LeadFields {
        &self.fields
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn total_steps(&self) -> u8 {
        self.total_steps
    }

    pub fn phase(&self) -> &LeadPhase {
        &self.phase
    }

    pub fn mode(&self) -> CompletionMode {
        self.mode
    }

    pub fn session(&self) -> u32 {
        self.session
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LeadPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == LeadPhase::Submitted
    }

    pub fn is_final_step(&self) -> bool {
        self.step == self.total_steps
    }

    pub fn progress_percent(&self) -> u32 {
        u32::from(self.step) * 100 / u32::from(self.total_steps)
    }

    /// Starts a fresh session. Anything still in flight from an earlier
    /// session is ignored when it reports back.
    pub fn open(&mut self, mode: CompletionMode) {
        self.reset();
        self.mode = mode;
        self.open = true;
    }

    /// Discards everything typed so far. Refused while submitting.
    pub fn close(&mut self) -> Result<(), FlowError> {
        if self.is_submitting() {
            return Err(FlowError::Busy);
        }
        self.reset();
        self.open = false;
        Ok(())
    }

    /// Drops the session no matter what phase it is in. For hosts that stop
    /// showing the flow outright; a result still in flight will not match.
    pub fn discard(&mut self) {
        self.reset();
        self.open = false;
    }

    pub fn update_field(&mut self, field: LeadField, value: impl Into<String>) -> Result<(), FlowError> {
        self.ensure_editable()?;
        self.fields.set(field, value.into());
        if matches!(self.phase, LeadPhase::Failed(_)) {
            self.phase = LeadPhase::Editing;
        }
        Ok(())
    }

    /// Whether the UI should offer "Next". The first page needs name and email.
    pub fn can_advance(&self) -> bool {
        self.ensure_editable().is_ok()
            && self.step < self.total_steps
            && (self.step != 1 || self.fields.missing_required().is_none())
    }

    pub fn go_next(&mut self) -> bool {
        if self.ensure_editable().is_err() || self.step >= self.total_steps {
            return false;
        }
        self.step += 1;
        true
    }

    pub fn go_previous(&mut self) -> bool {
        if self.ensure_editable().is_err() || self.step <= 1 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Moves to `Submitting` and hands back the payload to send.
    pub fn submit(&mut self) -> Result<LeadFields, FlowError> {
        self.ensure_editable()?;
        if !self.is_final_step() {
            return Err(FlowError::NotOnFinalStep);
        }
        if let Some(field) = self.fields.missing_required() {
            return Err(FlowError::MissingRequired(field));
        }
        self.phase = LeadPhase::Submitting;
        Ok(self.fields.clone())
    }

    pub fn finish_submission(
        &mut self,
        session: u32,
        result: Result<(), SubmitError>,
    ) -> Option<Scheduled<LeadTimer>> {
        if session != self.session || !self.is_submitting() {
            debug!("Ignoring submission result from session {}", session);
            return None;
        }
        match result {
            Ok(()) => {
                self.phase = LeadPhase::Submitted;
                Some(self.mode.timer(session))
            }
            Err(e) => {
                warn!("Lead submission failed: {}", e);
                self.phase = LeadPhase::Failed(e.to_string());
                None
            }
        }
    }

    pub fn on_timer(&mut self, timer: LeadTimer) -> Option<FlowOutcome> {
        match timer {
            LeadTimer::Notify { session } if session == self.session && self.is_submitted() => {
                Some(FlowOutcome::Completed)
            }
            LeadTimer::AutoReset { session } if session == self.session && self.is_submitted() => {
                self.reset();
                self.open = false;
                Some(FlowOutcome::Closed)
            }
            stale => {
                debug!("Ignoring stale lead timer {:?}", stale);
                None
            }
        }
    }

    fn ensure_editable(&self) -> Result<(), FlowError> {
        if !self.open {
            return Err(FlowError::NotOpen);
        }
        match self.phase {
            LeadPhase::Submitting => Err(FlowError::Busy),
            LeadPhase::Submitted => Err(FlowError::AlreadySubmitted),
            LeadPhase::Editing | LeadPhase::Failed(_) => Ok(()),
        }
    }

    fn reset(&mut self) {
        self.fields = LeadFields::with_service(&self.seed_service);
        self.step = 1;
        self.phase = LeadPhase::Editing;
        self.session = self.session.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_wizard() -> LeadForm {
        let mut form = LeadForm::wizard();
        form.open(CompletionMode::AutoReset);
        form.update_field(LeadField::Name, "Ann").unwrap();
        form.update_field(LeadField::Email, "a@b.com").unwrap();
        form
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("email".parse::<LeadField>(), Ok(LeadField::Email));
        assert_eq!(
            "fax".parse::<LeadField>(),
            Err(FlowError::UnknownField("fax".to_string()))
        );
    }

    #[test]
    fn closed_form_rejects_edits() {
        let mut form = LeadForm::wizard();
        assert_eq!(form.update_field(LeadField::Name, "X"), Err(FlowError::NotOpen));
        assert!(!form.go_next());
    }

    #[test]
    fn steps_stay_in_bounds() {
        let mut form = filled_wizard();
        assert!(!form.go_previous());
        assert!(form.go_next());
        assert!(form.go_next());
        assert!(!form.go_next());
        assert_eq!(form.step(), 3);
        assert!(form.go_previous());
        assert_eq!(form.step(), 2);
    }

    #[test]
    fn first_step_needs_name_and_email_to_advance() {
        let mut form = LeadForm::wizard();
        form.open(CompletionMode::AutoReset);
        assert!(!form.can_advance());
        form.update_field(LeadField::Name, "Ann").unwrap();
        assert!(!form.can_advance());
        form.update_field(LeadField::Email, "a@b.com").unwrap();
        assert!(form.can_advance());
    }

    #[test]
    fn submit_requires_final_step() {
        let mut form = filled_wizard();
        let before = form.clone();
        assert_eq!(form.submit(), Err(FlowError::NotOnFinalStep));
        assert_eq!(form, before);
    }

    #[test]
    fn submit_requires_name_and_email() {
        let mut form = LeadForm::wizard();
        form.open(CompletionMode::AutoReset);
        form.update_field(LeadField::Name, "Ann").unwrap();
        form.go_next();
        form.go_next();
        let before = form.clone();
        assert_eq!(form.submit(), Err(FlowError::MissingRequired("email")));
        assert_eq!(form, before);
    }

    #[test]
    fn blank_name_counts_as_missing() {
        let mut fields = LeadFields::default();
        fields.name = "   ".to_string();
        fields.email = "a@b.com".to_string();
        assert_eq!(fields.missing_required(), Some("name"));
    }

    #[test]
    fn submitted_form_is_locked() {
        let mut form = filled_wizard();
        form.go_next();
        form.go_next();
        let payload = form.submit().unwrap();
        assert_eq!(payload.name, "Ann");
        assert_eq!(form.close(), Err(FlowError::Busy));

        let timer = form.finish_submission(form.session(), Ok(())).unwrap();
        assert_eq!(timer.delay_ms, AUTO_RESET_DELAY_MS);
        assert!(form.is_submitted());
        assert_eq!(
            form.update_field(LeadField::Message, "late"),
            Err(FlowError::AlreadySubmitted)
        );
        assert!(!form.go_previous());
    }

    #[test]
    fn failure_keeps_fields_and_allows_retry() {
        let mut form = filled_wizard();
        form.go_next();
        form.go_next();
        form.submit().unwrap();
        let timer = form.finish_submission(form.session(), Err(SubmitError::Rejected(500)));
        assert_eq!(timer, None);
        assert!(matches!(form.phase(), LeadPhase::Failed(_)));
        assert_eq!(form.fields().name, "Ann");
        assert!(form.submit().is_ok());
        assert!(form.is_submitting());
    }

    #[test]
    fn result_from_an_old_session_is_ignored() {
        let mut form = filled_wizard();
        form.go_next();
        form.go_next();
        form.submit().unwrap();
        let old = form.session();
        form.open(CompletionMode::AutoReset);
        assert_eq!(form.finish_submission(old, Ok(())), None);
        assert_eq!(form.phase(), &LeadPhase::Editing);
    }

    #[test]
    fn discard_while_submitting_drops_the_result() {
        let mut form = filled_wizard();
        form.go_next();
        form.go_next();
        form.submit().unwrap();
        let session = form.session();
        form.discard();
        assert!(!form.is_open());
        assert_eq!(form.finish_submission(session, Ok(())), None);
        assert_eq!(form.fields(), &LeadFields::default());
    }

    #[test]
    fn notify_mode_reports_completion() {
        let mut form = LeadForm::wizard();
        form.open(CompletionMode::Notify);
        form.update_field(LeadField::Name, "Ann").unwrap();
        form.update_field(LeadField::Email, "a@b.com").unwrap();
        form.go_next();
        form.go_next();
        form.submit().unwrap();
        let timer = form.finish_submission(form.session(), Ok(())).unwrap();
        assert_eq!(timer.delay_ms, COMPLETION_NOTIFY_DELAY_MS);
        assert_eq!(form.on_timer(timer.event), Some(FlowOutcome::Completed));
        assert!(form.is_open());
        assert_eq!(form.close(), Ok(()));
        assert_eq!(form.fields(), &LeadFields::default());
    }

    #[test]
    fn single_page_reseeds_service() {
        let mut form = LeadForm::single_page("Email Marketing");
        form.open(CompletionMode::AutoReset);
        assert!(form.is_final_step());
        assert_eq!(form.progress_percent(), 100);
        form.update_field(LeadField::Service, "Other").unwrap();
        form.update_field(LeadField::Budget, "5000+").unwrap();
        form.close().unwrap();
        assert_eq!(form.fields(), &LeadFields::with_service("Email Marketing"));
    }

    #[test]
    fn payload_omits_empty_inquiry_extras() {
        let mut fields = LeadFields::default();
        fields.name = "Ann".to_string();
        let json = serde_json::to_value(&fields).unwrap();
        assert!(json.get("budget").is_none());
        assert_eq!(json["name"], "Ann");
    }
}
