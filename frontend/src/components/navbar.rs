use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::decor::HiveSurfLogo;
use crate::components::start_now_modal::StartNowModal;
use crate::components::theme::{use_theme, ThemeToggle};
use crate::config;
use crate::lead::{CompletionMode, FlowOutcome};

const NAV_ITEMS: [(&str, Route); 4] = [
    ("Home", Route::Home),
    ("About", Route::About),
    ("Services", Route::Services),
    ("Contact", Route::Contact),
];

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let show_start_modal = use_state(|| false);
    let current = use_route::<Route>();
    let theme = use_theme();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > config::NAV_SCROLLED_THRESHOLD);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let open_start = {
        let show_start_modal = show_start_modal.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            show_start_modal.set(true);
            menu_open.set(false);
        })
    };

    let on_outcome = {
        let show_start_modal = show_start_modal.clone();
        Callback::from(move |_: FlowOutcome| show_start_modal.set(false))
    };

    let link_class = |route: &Route| {
        classes!(
            "nav-link",
            (current.as_ref() == Some(route)).then(|| "active"),
            if theme.state.is_dark { "on-dark" } else { "on-light" }
        )
    };

    let links = |mobile: bool| {
        NAV_ITEMS.iter().map(|(name, route)| {
            html! {
                <div class="nav-item" key={*name} onclick={close_menu.clone()}>
                    <Link<Route> to={route.clone()} classes={link_class(route)}>
                        {*name}
                    </Link<Route>>
                    if !mobile && current.as_ref() == Some(route) {
                        <div class="nav-underline"></div>
                    }
                </div>
            }
        }).collect::<Html>()
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <HiveSurfLogo size={40} />
                    <span class="gradient-text">{"HiveSurf"}</span>
                </Link<Route>>

                <div class="nav-links">
                    { links(false) }
                </div>

                <div class="nav-actions">
                    <ThemeToggle />
                    <a href={config::CONTACT_PHONE_HREF} class="nav-phone">
                        {"📞 "}{config::CONTACT_PHONE}
                    </a>
                    <button class="nav-cta" onclick={open_start.clone()}>
                        {"Get Started"}
                    </button>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <div class="mobile-menu">
                    { links(true) }
                    <div class="mobile-menu-footer">
                        <ThemeToggle />
                        <a href={config::CONTACT_PHONE_HREF} class="nav-phone">
                            {"📞 "}{config::CONTACT_PHONE}
                        </a>
                        <button class="nav-cta full-width" onclick={open_start}>
                            {"Get Started"}
                        </button>
                    </div>
                </div>
            }

            <StartNowModal
                is_open={*show_start_modal}
                completion={CompletionMode::AutoReset}
                source={"navbar"}
                on_outcome={on_outcome}
            />
        </nav>
    }
}
