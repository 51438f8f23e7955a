pub mod config;
pub mod error;
pub mod timers;
pub mod storage;
pub mod theme;
pub mod lead;
pub mod embed;
pub mod launch;
pub mod inquiry;
pub mod content;
pub mod submit;
pub mod app;

pub mod components {
    pub mod theme;
    pub mod decor;
    pub mod form_kit;
    pub mod start_now_modal;
    pub mod hubspot_form;
    pub mod service_modal;
    pub mod navbar;
    pub mod footer;
}
pub mod pages {
    pub mod home;
    pub mod about;
    pub mod services;
    pub mod contact;
}

pub use app::{App, Route};
