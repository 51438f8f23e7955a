use log::info;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::decor::{AnimatedBackground, LoadingScreen};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::theme::{use_theme, ThemeProvider};
use crate::config;
use crate::pages::{about::About, contact::Contact, home::Home, services::Services};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <ThemeProvider>
            <Shell />
        </ThemeProvider>
    }
}

#[function_component]
fn Shell() -> Html {
    let loading = use_state(|| true);
    let theme = use_theme();

    {
        let loading = loading.clone();
        use_timeout(
            move || {
                info!("Loading finished");
                loading.set(false);
            },
            config::LOADING_SCREEN_MS,
        );
    }

    if *loading {
        return html! { <LoadingScreen /> };
    }

    let colors = theme.state.colors;
    let palette = format!(
        "--primary: {}; --secondary: {}; --accent: {}; --background: {}; --surface: {}; \
         --text: {}; --text-secondary: {}; --border: {}; --glass: {};",
        colors.primary,
        colors.secondary,
        colors.accent,
        colors.background,
        colors.surface,
        colors.text,
        colors.text_secondary,
        colors.border,
        colors.glass,
    );

    html! {
        <BrowserRouter basename={config::ROUTER_BASENAME}>
            <div class="app" style={palette}>
                <style>{GLOBAL_STYLES}</style>
                <div class="background-layer">
                    <AnimatedBackground />
                </div>
                <div class="content-layer">
                    <Navbar />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </div>
            </div>
        </BrowserRouter>
    }
}

const GLOBAL_STYLES: &str = r#"
    body {
        margin: 0;
        font-family: 'Inter', system-ui, sans-serif;
        transition: background-color 0.3s, color 0.3s;
    }
    body.dark-theme {
        background: linear-gradient(135deg, #0f172a 0%, #1e293b 50%, #0f172a 100%);
        color: #f8fafc;
    }
    body.light-theme {
        background: linear-gradient(135deg, #f8fafc 0%, #e2e8f0 50%, #f8fafc 100%);
        color: #0f172a;
    }
    .theme-transition.transitioning * {
        transition: background-color 0.3s, color 0.3s, border-color 0.3s !important;
    }
    .app {
        min-height: 100vh;
        position: relative;
        color: var(--text);
    }
    .background-layer {
        position: fixed;
        inset: 0;
        z-index: 0;
    }
    .content-layer {
        position: relative;
        z-index: 10;
    }
    .gradient-text {
        background: linear-gradient(90deg, var(--primary), var(--secondary));
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .page {
        min-height: 100vh;
        padding-top: 5rem;
    }
    .page-hero {
        padding: 5rem 1rem;
        text-align: center;
    }
    .page-hero h1 {
        font-size: clamp(3rem, 6vw, 3.75rem);
        margin-bottom: 1.5rem;
    }
    .lead-text {
        font-size: 1.25rem;
        line-height: 1.7;
        max-width: 48rem;
        margin: 0 auto;
        color: var(--text-secondary);
    }
    .muted-text {
        color: var(--text-secondary);
        font-size: 0.875rem;
    }
    .section {
        padding: 5rem 1rem;
    }
    .section > * {
        max-width: 80rem;
        margin-left: auto;
        margin-right: auto;
    }
    .section.muted {
        background: rgba(15, 23, 42, 0.3);
    }
    .section.cta {
        text-align: center;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2, .section.cta h2 {
        font-size: 2.25rem;
        margin-bottom: 1rem;
    }
    .card-grid {
        display: grid;
        gap: 2rem;
    }
    .card-grid.one { grid-template-columns: 1fr; }
    .card-grid.two { grid-template-columns: repeat(2, 1fr); }
    .card-grid.three { grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); }
    .card-grid.four { grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); }
    .split {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
        gap: 3rem;
        align-items: center;
    }
    .glass-card {
        background: var(--glass);
        border: 1px solid var(--border);
        backdrop-filter: blur(12px);
        border-radius: 0.75rem;
        padding: 2rem;
        margin-bottom: 1rem;
        transition: transform 0.3s;
    }
    .glass-card:hover {
        transform: translateY(-4px);
    }
    .glass-card.centered {
        text-align: center;
    }
    .icon-badge {
        width: 4rem;
        height: 4rem;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.75rem;
        margin-bottom: 1.5rem;
        background: linear-gradient(135deg, var(--primary), var(--secondary));
    }
    .icon-badge.large {
        width: 5rem;
        height: 5rem;
        border-radius: 50%;
    }
    .stat {
        text-align: center;
    }
    .stat-icon {
        font-size: 2rem;
    }
    .stat-number {
        font-size: 2.5rem;
        font-weight: 700;
    }
    .stat-label {
        color: var(--text-secondary);
    }
    .check-list, .dot-list {
        list-style: none;
        padding: 0;
    }
    .check-list li, .dot-list li {
        margin-bottom: 0.75rem;
    }
    .check-list.compact li {
        font-size: 0.875rem;
        margin-bottom: 0.25rem;
    }
    .btn-primary, .btn-secondary {
        display: inline-block;
        padding: 1rem 2rem;
        border-radius: 0.5rem;
        font-weight: 600;
        font-size: 1.125rem;
        cursor: pointer;
        text-decoration: none;
        transition: transform 0.2s, box-shadow 0.2s;
    }
    .btn-primary {
        border: none;
        color: #fff;
        background: linear-gradient(90deg, var(--primary), var(--secondary));
    }
    .btn-primary:hover {
        transform: scale(1.05);
        box-shadow: 0 10px 25px rgba(14, 165, 233, 0.25);
    }
    .btn-secondary {
        color: var(--text);
        background: var(--glass);
        border: 1px solid var(--border);
    }
    .btn-primary.small {
        padding: 0.5rem 1rem;
        font-size: 0.875rem;
    }
    .full-width {
        width: 100%;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 40;
        transition: background 0.3s, backdrop-filter 0.3s;
    }
    .top-nav.scrolled {
        background: rgba(15, 23, 42, 0.8);
        backdrop-filter: blur(12px);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
    }
    body.light-theme .top-nav.scrolled {
        background: rgba(255, 255, 255, 0.8);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        height: 4rem;
        padding: 0 1rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 1.5rem;
        font-weight: 700;
        text-decoration: none;
    }
    .nav-links, .nav-actions {
        display: flex;
        align-items: center;
        gap: 2rem;
    }
    .nav-item {
        position: relative;
    }
    .nav-link {
        text-decoration: none;
        font-weight: 500;
        color: var(--text-secondary);
    }
    .nav-link.active {
        color: var(--primary);
    }
    .nav-underline {
        position: absolute;
        bottom: -0.25rem;
        left: 0;
        right: 0;
        height: 2px;
        background: linear-gradient(90deg, var(--primary), var(--secondary));
    }
    .nav-phone {
        color: var(--text-secondary);
        text-decoration: none;
    }
    .nav-cta {
        padding: 0.5rem 1.5rem;
        border: none;
        border-radius: 0.5rem;
        color: #fff;
        font-weight: 600;
        cursor: pointer;
        background: linear-gradient(90deg, var(--primary), var(--secondary));
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        font-size: 1.5rem;
        color: var(--text);
        cursor: pointer;
    }
    .mobile-menu {
        padding: 1rem;
        background: var(--surface);
        border-top: 1px solid var(--border);
    }
    .mobile-menu .nav-item {
        padding: 0.75rem 0;
    }
    .mobile-menu-footer {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        padding-top: 1rem;
    }
    .theme-toggle {
        position: relative;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        border: 1px solid var(--border);
        background: var(--glass);
        cursor: pointer;
        overflow: hidden;
    }
    .theme-toggle:disabled {
        cursor: wait;
    }
    .theme-toggle-icon {
        display: inline-block;
        transition: transform 0.3s;
    }
    .theme-toggle-icon.rotated {
        transform: rotate(180deg);
    }
    @media (max-width: 768px) {
        .nav-links, .nav-actions {
            display: none;
        }
        .burger-menu {
            display: block;
        }
        .card-grid.two {
            grid-template-columns: 1fr;
        }
    }
"#;
