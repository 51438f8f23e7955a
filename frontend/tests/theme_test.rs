mod common;

use common::{run_theme, theme_with, VirtualClock};
use hivesurf::config::{THEME_FLIP_DELAY_MS, THEME_SETTLE_DELAY_MS, THEME_STORAGE_KEY};
use hivesurf::error::StorageError;
use hivesurf::storage::{MemoryStore, PreferenceStore};
use hivesurf::theme::{ThemeController, ThemeMode, DARK_COLORS, LIGHT_COLORS};
use pretty_assertions::assert_eq;

const FLIP: u64 = THEME_FLIP_DELAY_MS as u64;
const SETTLED: u64 = (THEME_FLIP_DELAY_MS + THEME_SETTLE_DELAY_MS) as u64;

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".to_string()))
    }
}

#[test]
fn fresh_install_defaults_to_dark() {
    let controller = theme_with(&MemoryStore::default());
    let state = controller.state();
    assert!(state.is_dark);
    assert!(!state.is_transitioning);
    assert_eq!(state.colors, DARK_COLORS);
}

#[test]
fn toggle_is_staged() {
    let mut controller = theme_with(&MemoryStore::default());
    let mut clock = VirtualClock::new();

    clock.schedule(controller.toggle());
    assert!(controller.state().is_transitioning);
    assert!(controller.state().is_dark);

    let flips = run_theme(&mut controller, &mut clock, FLIP - 1);
    assert!(flips.is_empty());
    assert!(controller.state().is_dark);

    let flips = run_theme(&mut controller, &mut clock, FLIP);
    assert_eq!(flips, vec![FLIP]);
    let state = controller.state();
    assert!(!state.is_dark);
    assert!(state.is_transitioning);
    assert_eq!(state.colors, LIGHT_COLORS);

    run_theme(&mut controller, &mut clock, SETTLED - 1);
    assert!(controller.is_transitioning());
    run_theme(&mut controller, &mut clock, SETTLED);
    assert!(!controller.is_transitioning());
    assert!(clock.is_idle());
}

#[test]
fn rapid_toggles_flip_once() {
    let mut controller = theme_with(&MemoryStore::default());
    let mut clock = VirtualClock::new();

    clock.schedule(controller.toggle());
    assert_eq!(controller.toggle(), None);
    run_theme(&mut controller, &mut clock, 100);
    clock.schedule(controller.toggle());
    run_theme(&mut controller, &mut clock, 200);
    clock.schedule(controller.toggle());

    let flips = run_theme(&mut controller, &mut clock, 10_000);
    assert_eq!(flips, vec![FLIP]);
    assert_eq!(controller.mode(), ThemeMode::Light);
}

#[test]
fn toggling_after_settle_flips_back() {
    let mut controller = theme_with(&MemoryStore::default());
    let mut clock = VirtualClock::new();

    clock.schedule(controller.toggle());
    run_theme(&mut controller, &mut clock, SETTLED);
    clock.schedule(controller.toggle());
    let flips = run_theme(&mut controller, &mut clock, 2 * SETTLED);
    assert_eq!(flips, vec![SETTLED + FLIP]);
    assert_eq!(controller.mode(), ThemeMode::Dark);
}

#[test]
fn preference_survives_restart() {
    let store = MemoryStore::default();
    let mut controller = theme_with(&store);
    let mut clock = VirtualClock::new();
    assert_eq!(store.get(THEME_STORAGE_KEY), None);

    clock.schedule(controller.toggle());
    run_theme(&mut controller, &mut clock, SETTLED);
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));

    let restarted = theme_with(&store);
    assert_eq!(restarted.state().is_dark, controller.state().is_dark);
    assert_eq!(restarted.mode(), ThemeMode::Light);
}

#[test]
fn stored_dark_is_respected() {
    let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "dark");
    assert_eq!(theme_with(&store).mode(), ThemeMode::Dark);
}

#[test]
fn broken_storage_keeps_theme_in_memory() {
    let mut controller = ThemeController::new(Box::new(BrokenStore));
    let mut clock = VirtualClock::new();
    assert_eq!(controller.mode(), ThemeMode::Dark);

    clock.schedule(controller.toggle());
    let flips = run_theme(&mut controller, &mut clock, SETTLED);
    assert_eq!(flips.len(), 1);
    assert_eq!(controller.mode(), ThemeMode::Light);
    assert!(!controller.is_transitioning());
}
