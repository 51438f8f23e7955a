mod common;

use common::VirtualClock;
use hivesurf::config::{CARD_CLEAR_AFTER_CLOSE_MS, CARD_CLEAR_AFTER_SUBMIT_MS, CARD_OPEN_DELAY_MS};
use hivesurf::content::HOME_CARDS;
use hivesurf::inquiry::{inquiry_for_service, InquiryKind};
use hivesurf::launch::{CardLaunch, LaunchTimer};

fn run(launch: &mut CardLaunch, clock: &mut VirtualClock<LaunchTimer>, until: u64) {
    while let Some(timer) = clock.next_due(until) {
        launch.on_timer(timer);
    }
    clock.advance_to(until);
}

#[test]
fn card_opens_modal_and_releases_after_completion() {
    let mut launch = CardLaunch::default();
    let mut clock = VirtualClock::new();
    let open_at = u64::from(CARD_OPEN_DELAY_MS);

    clock.schedule(launch.press_card(HOME_CARDS[1].id));
    run(&mut launch, &mut clock, open_at - 1);
    assert!(!launch.is_open());
    assert!(launch.is_card_transitioning());

    run(&mut launch, &mut clock, open_at);
    assert!(launch.is_open());
    assert_eq!(launch.visibility().source_card_id.as_deref(), Some("free-trial"));

    clock.schedule(launch.form_completed());
    assert!(!launch.is_open());
    run(&mut launch, &mut clock, open_at + u64::from(CARD_CLEAR_AFTER_SUBMIT_MS));
    assert!(!launch.is_card_transitioning());
    assert_eq!(launch.visibility().source_card_id, None);
}

#[test]
fn reopening_before_release_keeps_the_new_card() {
    let mut launch = CardLaunch::default();
    let mut clock = VirtualClock::new();

    clock.schedule(launch.press_card("bundle-kits"));
    run(&mut launch, &mut clock, 1_000);
    clock.schedule(launch.modal_closed());

    // Released card timers from the first press must not clear the second.
    run(&mut launch, &mut clock, 1_000 + u64::from(CARD_CLEAR_AFTER_CLOSE_MS) - 1);
    launch.start_now();
    run(&mut launch, &mut clock, 10_000);
    assert!(launch.is_open());
    assert_eq!(launch.visibility().source_card_id, None);
}

#[test]
fn every_home_card_has_a_distinct_id() {
    let mut ids: Vec<_> = HOME_CARDS.iter().map(|card| card.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), HOME_CARDS.len());
}

#[test]
fn service_buttons_route_to_matching_inquiries() {
    assert_eq!(inquiry_for_service("7-Day Free Trial").kind, InquiryKind::Trial);
    assert_eq!(inquiry_for_service("Bundle Kits").kind, InquiryKind::Pricing);
    assert_eq!(inquiry_for_service("Content Marketing").kind, InquiryKind::General);
}
