mod common;

use common::VirtualClock;
use hivesurf::config::{AUTO_RESET_DELAY_MS, COMPLETION_NOTIFY_DELAY_MS, SUBMIT_SIMULATED_LATENCY_MS};
use hivesurf::embed::EmbeddedFlow;
use hivesurf::error::{FlowError, SubmitError};
use hivesurf::lead::{CompletionMode, FlowOutcome, LeadField, LeadFields, LeadForm, LeadPhase, LeadTimer};
use pretty_assertions::assert_eq;

const LATENCY: u64 = SUBMIT_SIMULATED_LATENCY_MS as u64;

fn open_wizard(mode: CompletionMode) -> LeadForm {
    let mut form = LeadForm::wizard();
    form.open(mode);
    form
}

fn fill_contact(form: &mut LeadForm) {
    form.update_field(LeadField::Name, "Ann").unwrap();
    form.update_field(LeadField::Email, "a@b.com").unwrap();
}

fn to_final_step(form: &mut LeadForm) {
    while form.go_next() {}
}

/// Delivers due lead timers and collects what the flow reported.
fn run_lead(form: &mut LeadForm, clock: &mut VirtualClock<LeadTimer>, until: u64) -> Vec<(u64, FlowOutcome)> {
    let mut outcomes = Vec::new();
    while let Some(timer) = clock.next_due(until) {
        if let Some(outcome) = form.on_timer(timer) {
            outcomes.push((clock.now(), outcome));
        }
    }
    clock.advance_to(until);
    outcomes
}

#[test]
fn step_never_leaves_bounds() {
    let mut form = open_wizard(CompletionMode::AutoReset);
    // Deterministic pseudo-random walk.
    let mut seed: u32 = 0x2545_f491;
    for i in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        if (seed >> 16) % 2 == 0 {
            form.go_next();
        } else {
            form.go_previous();
        }
        if i == 250 {
            fill_contact(&mut form);
        }
        assert!((1..=3).contains(&form.step()), "step {} out of bounds", form.step());
    }
}

#[test]
fn next_and_previous_stop_at_the_edges() {
    let mut form = open_wizard(CompletionMode::AutoReset);
    assert!(!form.go_previous());
    assert_eq!(form.step(), 1);
    assert!(form.go_next());
    assert!(form.go_next());
    assert!(!form.go_next());
    assert_eq!(form.step(), 3);
    assert_eq!(form.progress_percent(), 100);
}

#[test]
fn advancing_hint_needs_name_and_email() {
    let mut form = open_wizard(CompletionMode::AutoReset);
    assert!(!form.can_advance());
    form.update_field(LeadField::Name, "Ann").unwrap();
    assert!(!form.can_advance());
    form.update_field(LeadField::Email, "a@b.com").unwrap();
    assert!(form.can_advance());
}

#[test]
fn submit_is_gated_on_step_and_required_fields() {
    let mut form = open_wizard(CompletionMode::AutoReset);

    for _ in 0..2 {
        let before = form.clone();
        assert_eq!(form.submit(), Err(FlowError::NotOnFinalStep));
        assert_eq!(form, before);
        form.go_next();
    }

    let before = form.clone();
    assert_eq!(form.submit(), Err(FlowError::MissingRequired("name")));
    assert_eq!(form, before);

    form.update_field(LeadField::Name, "Ann").unwrap();
    let before = form.clone();
    assert_eq!(form.submit(), Err(FlowError::MissingRequired("email")));
    assert_eq!(form, before);

    form.update_field(LeadField::Email, "   ").unwrap();
    assert_eq!(form.submit(), Err(FlowError::MissingRequired("email")));

    form.update_field(LeadField::Email, "a@b.com").unwrap();
    let payload = form.submit().unwrap();
    assert_eq!(payload.name, "Ann");
    assert!(form.is_submitting());
}

#[test]
fn submitted_flow_is_frozen() {
    let mut form = open_wizard(CompletionMode::Notify);
    fill_contact(&mut form);
    to_final_step(&mut form);
    form.submit().unwrap();
    assert_eq!(form.update_field(LeadField::Name, "Bob"), Err(FlowError::Busy));

    let timer = form.finish_submission(form.session(), Ok(())).unwrap();
    assert!(form.is_submitted());
    assert!(!form.is_submitting());
    assert_eq!(timer.delay_ms, COMPLETION_NOTIFY_DELAY_MS);

    assert_eq!(form.update_field(LeadField::Name, "Bob"), Err(FlowError::AlreadySubmitted));
    assert!(!form.go_previous());
    assert_eq!(form.submit(), Err(FlowError::AlreadySubmitted));
    assert_eq!(form.fields().name, "Ann");
}

#[test]
fn happy_path_auto_resets_and_closes() {
    let mut form = open_wizard(CompletionMode::AutoReset);
    let mut clock = VirtualClock::new();

    fill_contact(&mut form);
    assert!(form.go_next());
    assert_eq!(form.step(), 2);
    assert!(form.go_next());
    assert_eq!(form.step(), 3);

    form.submit().unwrap();
    clock.advance_to(LATENCY);
    clock.schedule(form.finish_submission(form.session(), Ok(())));
    assert!(form.is_submitted());

    let reset_at = LATENCY + u64::from(AUTO_RESET_DELAY_MS);
    assert!(run_lead(&mut form, &mut clock, reset_at - 1).is_empty());
    assert!(form.is_submitted());

    assert_eq!(run_lead(&mut form, &mut clock, reset_at), vec![(reset_at, FlowOutcome::Closed)]);
    assert_eq!(form.step(), 1);
    assert_eq!(form.fields(), &LeadFields::default());
    assert_eq!(form.phase(), &LeadPhase::Editing);
    assert!(!form.is_open());
}

#[test]
fn notify_mode_reports_completion_and_keeps_the_thank_you() {
    let mut form = open_wizard(CompletionMode::Notify);
    let mut clock = VirtualClock::new();
    fill_contact(&mut form);
    to_final_step(&mut form);
    form.submit().unwrap();
    clock.schedule(form.finish_submission(form.session(), Ok(())));

    let done_at = u64::from(COMPLETION_NOTIFY_DELAY_MS);
    assert_eq!(run_lead(&mut form, &mut clock, 10_000), vec![(done_at, FlowOutcome::Completed)]);
    assert!(form.is_submitted());
    assert!(form.is_open());
}

#[test]
fn close_discards_everything() {
    let mut form = open_wizard(CompletionMode::AutoReset);
    form.update_field(LeadField::Name, "X").unwrap();
    form.go_next();
    form.close().unwrap();
    assert!(!form.is_open());

    form.open(CompletionMode::AutoReset);
    assert_eq!(form.fields(), &LeadFields::default());
    assert_eq!(form.step(), 1);
}

#[test]
fn close_is_refused_while_submitting() {
    let mut form = open_wizard(CompletionMode::AutoReset);
    fill_contact(&mut form);
    to_final_step(&mut form);
    form.submit().unwrap();
    assert_eq!(form.close(), Err(FlowError::Busy));
    assert!(form.is_open());
    assert!(form.is_submitting());
}

#[test]
fn results_from_an_abandoned_session_are_ignored() {
    let mut form = open_wizard(CompletionMode::AutoReset);
    let mut clock = VirtualClock::new();
    fill_contact(&mut form);
    to_final_step(&mut form);
    form.submit().unwrap();
    let abandoned = form.session();

    form.discard();
    form.open(CompletionMode::AutoReset);
    assert_eq!(form.finish_submission(abandoned, Ok(())), None);
    assert!(!form.is_submitted());

    // A reset timer from an old session must not close the new one.
    clock.schedule(Some(CompletionMode::AutoReset.timer(abandoned)));
    assert!(run_lead(&mut form, &mut clock, 10_000).is_empty());
    assert!(form.is_open());
}

#[test]
fn failed_submission_keeps_fields_for_retry() {
    let mut form = open_wizard(CompletionMode::AutoReset);
    fill_contact(&mut form);
    to_final_step(&mut form);
    form.submit().unwrap();

    let timer = form.finish_submission(form.session(), Err(SubmitError::Rejected(503)));
    assert_eq!(timer, None);
    assert!(matches!(form.phase(), LeadPhase::Failed(_)));
    assert_eq!(form.fields().email, "a@b.com");

    form.update_field(LeadField::Message, "Please call").unwrap();
    assert_eq!(form.phase(), &LeadPhase::Editing);
    assert!(form.submit().is_ok());
}

#[test]
fn single_page_form_submits_with_seeded_service() {
    let mut form = LeadForm::single_page("Starter");
    form.open(CompletionMode::AutoReset);
    assert!(form.is_final_step());
    fill_contact(&mut form);
    form.update_field(LeadField::Budget, "1000-2000").unwrap();
    let payload = form.submit().unwrap();
    assert_eq!(payload.service, "Starter");
    assert_eq!(payload.budget, "1000-2000");
}

#[test]
fn embedded_submission_follows_the_same_timing() {
    let mut flow = EmbeddedFlow::default();
    let mut clock = VirtualClock::new();
    flow.open(CompletionMode::AutoReset);
    clock.schedule(flow.form_submitted());
    assert!(flow.is_submitted());

    let reset_at = u64::from(AUTO_RESET_DELAY_MS);
    let mut outcomes = Vec::new();
    while let Some(timer) = clock.next_due(reset_at) {
        outcomes.extend(flow.on_timer(timer));
    }
    assert_eq!(outcomes, vec![FlowOutcome::Closed]);
    assert!(!flow.is_open());
}
