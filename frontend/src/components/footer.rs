use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::decor::HiveSurfLogo;
use crate::config;

const COMPANY_LINKS: [(&str, Route); 3] = [
    ("About Us", Route::About),
    ("Services", Route::Services),
    ("Contact", Route::Contact),
];

const SERVICE_LINKS: [&str; 4] = ["Digital Marketing", "SEO Optimization", "Social Media", "Content Marketing"];

const SUPPORT_LINKS: [&str; 3] = ["Help Center", "Privacy Policy", "Terms of Service"];

const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Facebook", "f"),
    ("Twitter", "𝕏"),
    ("Instagram", "◎"),
    ("LinkedIn", "in"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid rgba(51, 65, 85, 0.6);
                        background: rgba(15, 23, 42, 0.5);
                        padding: 3rem 1rem 2rem;
                        position: relative;
                        z-index: 1;
                    }
                    .footer-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                        gap: 2rem;
                    }
                    .footer-brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .site-footer ul {
                        list-style: none;
                        padding: 0;
                    }
                    .site-footer li {
                        margin-bottom: 0.5rem;
                        font-size: 0.875rem;
                    }
                    .footer-bottom {
                        max-width: 80rem;
                        margin: 2rem auto 0;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(51, 65, 85, 0.6);
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 1rem;
                        font-size: 0.875rem;
                    }
                    .social-links a {
                        margin-left: 1rem;
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <HiveSurfLogo size={40} />
                        <span class="gradient-text">{"HiveSurf"}</span>
                    </div>
                    <p>
                        {"Riding the wave of innovation with expert digital marketing solutions. \
                          We help businesses grow and succeed in the digital world."}
                    </p>
                    <ul class="footer-contact">
                        <li><a href={config::CONTACT_PHONE_HREF}>{"📞 "}{config::CONTACT_PHONE}</a></li>
                        <li><a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{"✉️ "}{config::CONTACT_EMAIL}</a></li>
                        <li>{"📍 India"}</li>
                    </ul>
                </div>

                <div>
                    <h3>{"Company"}</h3>
                    <ul>
                        { for COMPANY_LINKS.iter().map(|(name, route)| html! {
                            <li key={*name}><Link<Route> to={route.clone()}>{*name}</Link<Route>></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3>{"Services"}</h3>
                    <ul>
                        { for SERVICE_LINKS.iter().map(|name| html! {
                            <li key={*name}><Link<Route> to={Route::Services}>{*name}</Link<Route>></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3>{"Support"}</h3>
                    <ul>
                        { for SUPPORT_LINKS.iter().map(|name| html! {
                            <li key={*name}><a href="#">{*name}</a></li>
                        }) }
                    </ul>
                </div>
            </div>

            <div class="footer-bottom">
                <span>{format!("© {} HiveSurf. All rights reserved.", year)}</span>
                <div class="social-links">
                    { for SOCIAL_LINKS.iter().map(|(label, glyph)| html! {
                        <a href="#" aria-label={*label} key={*label}>{*glyph}</a>
                    }) }
                </div>
            </div>
        </footer>
    }
}
