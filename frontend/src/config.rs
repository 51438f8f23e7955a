
/// Which implementation backs the "Start Now" lead capture modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadCaptureVariant {
    /// Self-hosted three step form.
    Wizard,
    /// Third-party HubSpot form injected by script.
    Embedded,
}

#[cfg(debug_assertions)]
pub fn lead_endpoint() -> Option<&'static str> {
    None // No lead API when running locally, submissions are simulated
}

#[cfg(not(debug_assertions))]
pub fn lead_endpoint() -> Option<&'static str> {
    option_env!("HIVESURF_LEAD_ENDPOINT")
}

pub fn lead_capture_variant() -> LeadCaptureVariant {
    match option_env!("HIVESURF_LEAD_VARIANT") {
        Some("embedded") => LeadCaptureVariant::Embedded,
        _ => LeadCaptureVariant::Wizard,
    }
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

pub const ROUTER_BASENAME: &str = "/landingpage";

pub const THEME_STORAGE_KEY: &str = "hivesurf-theme";
pub const THEME_FLIP_DELAY_MS: u32 = 150;
pub const THEME_SETTLE_DELAY_MS: u32 = 300;

pub const SUBMIT_SIMULATED_LATENCY_MS: u32 = 2000;
pub const COMPLETION_NOTIFY_DELAY_MS: u32 = 1000;
pub const AUTO_RESET_DELAY_MS: u32 = 3000;

pub const CARD_OPEN_DELAY_MS: u32 = 300;
pub const CARD_CLEAR_AFTER_CLOSE_MS: u32 = 300;
pub const CARD_CLEAR_AFTER_SUBMIT_MS: u32 = 500;

pub const LOADING_SCREEN_MS: u32 = 2000;
pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;

pub const HUBSPOT_PORTAL_ID: &str = "243516569";
pub const HUBSPOT_FORM_ID: &str = "7a88f6de-c616-4a7e-a938-46f981035858";
pub const HUBSPOT_REGION: &str = "na2";
pub const HUBSPOT_SCRIPT_URL: &str = "https://js-na2.hsforms.net/forms/embed/243516569.js";

pub const CONTACT_PHONE: &str = "+91 7008310868";
pub const CONTACT_PHONE_HREF: &str = "tel:+917008310868";
pub const CONTACT_EMAIL: &str = "info@hivesurf.com";
