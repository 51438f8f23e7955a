//! Light/dark theme state.
//!
//! A toggle is staged: the controller first enters a transition, flips the
//! mode after [`THEME_FLIP_DELAY_MS`] and leaves the transition after a further
//! [`THEME_SETTLE_DELAY_MS`]. Toggles requested while a transition is in
//! flight are dropped.

use log::{debug, info, warn};

use crate::config::{THEME_FLIP_DELAY_MS, THEME_SETTLE_DELAY_MS, THEME_STORAGE_KEY};
use crate::storage::PreferenceStore;
use crate::timers::Scheduled;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// Interprets the persisted preference. Missing or empty means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("dark") => ThemeMode::Dark,
            Some(_) => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Class put on `<body>` so plain CSS can follow the theme.
    pub fn body_class(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark-theme",
            ThemeMode::Light => "light-theme",
        }
    }

    pub fn colors(self) -> ThemeColors {
        match self {
            ThemeMode::Dark => DARK_COLORS,
            ThemeMode::Light => LIGHT_COLORS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub glass: &'static str,
}

pub const DARK_COLORS: ThemeColors = ThemeColors {
    primary: "#0ea5e9",
    secondary: "#d946ef",
    accent: "#f97316",
    background: "#0f172a",
    surface: "#1e293b",
    text: "#f8fafc",
    text_secondary: "#cbd5e1",
    border: "rgba(255, 255, 255, 0.1)",
    glass: "rgba(255, 255, 255, 0.1)",
};

pub const LIGHT_COLORS: ThemeColors = ThemeColors {
    primary: "#0284c7",
    secondary: "#c026d3",
    accent: "#ea580c",
    background: "#f8fafc",
    surface: "#ffffff",
    text: "#0f172a",
    text_secondary: "#475569",
    border: "rgba(0, 0, 0, 0.1)",
    glass: "rgba(255, 255, 255, 0.8)",
};

/// What consumers read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub is_dark: bool,
    pub is_transitioning: bool,
    pub colors: ThemeColors,
}

impl ThemeState {
    pub fn settled(mode: ThemeMode) -> Self {
        Self {
            is_dark: mode.is_dark(),
            is_transitioning: false,
            colors: mode.colors(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        if self.is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeTimer {
    Flip { epoch: u64 },
    Settle { epoch: u64 },
}

/// Result of delivering a [`ThemeTimer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeStep {
    pub next: Option<Scheduled<ThemeTimer>>,
    /// Set when the mode changed and the body marker must follow.
    pub flipped: Option<ThemeMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Idle,
    AwaitingFlip,
    Settling,
}

pub struct ThemeController {
    mode: ThemeMode,
    stage: Stage,
    epoch: u64,
    store: Box<dyn PreferenceStore>,
}

impl ThemeController {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        let stored = match store.load(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("Could not read theme preference: {}", e);
                None
            }
        };
        let mode = ThemeMode::from_stored(stored.as_deref());
        debug!("Theme initialised as {}", mode.as_str());

        Self {
            mode,
            stage: Stage::Idle,
            epoch: 0,
            store,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_transitioning(&self) -> bool {
        self.stage != Stage::Idle
    }

    pub fn state(&self) -> ThemeState {
        ThemeState {
            is_dark: self.mode.is_dark(),
            is_transitioning: self.is_transitioning(),
            colors: self.mode.colors(),
        }
    }

    /// Starts a transition, or does nothing if one is already running.
    pub fn toggle(&mut self) -> Option<Scheduled<ThemeTimer>> {
        if self.is_transitioning() {
            debug!("Theme toggle ignored, transition in progress");
            return None;
        }
        self.epoch += 1;
        self.stage = Stage::AwaitingFlip;
        Some(Scheduled::after(
            THEME_FLIP_DELAY_MS,
            ThemeTimer::Flip { epoch: self.epoch },
        ))
    }

    pub fn on_timer(&mut self, timer: ThemeTimer) -> ThemeStep {
        match timer {
            ThemeTimer::Flip { epoch } if epoch == self.epoch && self.stage == Stage::AwaitingFlip => {
                self.mode = self.mode.toggled();
                self.stage = Stage::Settling;
                info!("Theme switched to {}", self.mode.as_str());
                self.persist();
                ThemeStep {
                    next: Some(Scheduled::after(
                        THEME_SETTLE_DELAY_MS,
                        ThemeTimer::Settle { epoch },
                    )),
                    flipped: Some(self.mode),
                }
            }
            ThemeTimer::Settle { epoch } if epoch == self.epoch && self.stage == Stage::Settling => {
                self.stage = Stage::Idle;
                ThemeStep::default()
            }
            stale => {
                debug!("Ignoring stale theme timer {:?}", stale);
                ThemeStep::default()
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(THEME_STORAGE_KEY, self.mode.as_str()) {
            warn!("Theme preference not saved: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn flip_and_settle(controller: &mut ThemeController) {
        let flip = controller.toggle().expect("toggle should start a transition");
        let step = controller.on_timer(flip.event);
        let settle = step.next.expect("flip should schedule settle");
        assert_eq!(settle.delay_ms, THEME_SETTLE_DELAY_MS);
        assert_eq!(controller.on_timer(settle.event), ThemeStep::default());
    }

    #[test]
    fn stored_values_map_to_modes() {
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("garbage")), ThemeMode::Light);
    }

    #[test]
    fn fresh_install_is_dark() {
        let controller = ThemeController::new(Box::new(MemoryStore::default()));
        let state = controller.state();
        assert!(state.is_dark);
        assert!(!state.is_transitioning);
        assert_eq!(state.colors, DARK_COLORS);
    }

    #[test]
    fn toggle_is_staged() {
        let mut controller = ThemeController::new(Box::new(MemoryStore::default()));
        let flip = controller.toggle().unwrap();
        assert_eq!(flip.delay_ms, THEME_FLIP_DELAY_MS);
        assert!(controller.state().is_transitioning);
        assert!(controller.state().is_dark);

        let step = controller.on_timer(flip.event);
        assert_eq!(step.flipped, Some(ThemeMode::Light));
        assert!(!controller.state().is_dark);
        assert!(controller.state().is_transitioning);
        assert_eq!(controller.state().colors, LIGHT_COLORS);

        controller.on_timer(step.next.unwrap().event);
        assert!(!controller.state().is_transitioning);
    }

    #[test]
    fn toggle_while_transitioning_is_ignored() {
        let mut controller = ThemeController::new(Box::new(MemoryStore::default()));
        let flip = controller.toggle().unwrap();
        assert!(controller.toggle().is_none());

        let step = controller.on_timer(flip.event);
        assert!(controller.toggle().is_none());
        controller.on_timer(step.next.unwrap().event);

        assert_eq!(controller.mode(), ThemeMode::Light);
        assert!(controller.toggle().is_some());
    }

    #[test]
    fn duplicate_flip_does_not_flip_twice() {
        let mut controller = ThemeController::new(Box::new(MemoryStore::default()));
        let flip = controller.toggle().unwrap();
        controller.on_timer(flip.event);
        let again = controller.on_timer(flip.event);
        assert_eq!(again, ThemeStep::default());
        assert_eq!(controller.mode(), ThemeMode::Light);
    }

    #[test]
    fn flip_is_persisted_and_reloaded() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::new(Box::new(store.clone()));
        flip_and_settle(&mut controller);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));

        let reloaded = ThemeController::new(Box::new(store.clone()));
        assert_eq!(reloaded.mode(), ThemeMode::Light);
    }

    #[test]
    fn empty_stored_preference_falls_back_to_dark() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "");
        let controller = ThemeController::new(Box::new(store));
        assert!(controller.state().is_dark);
        assert_eq!(controller.state().colors, DARK_COLORS);
    }

    #[test]
    fn stored_light_preference_is_respected() {
        let store = MemoryStore::with_entry(THEME_STORAGE_KEY, "light");
        let controller = ThemeController::new(Box::new(store));
        assert!(!controller.state().is_dark);
    }
}
