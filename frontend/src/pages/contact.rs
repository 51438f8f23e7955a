use yew::prelude::*;

use crate::components::hubspot_form::HubSpotForm;
use crate::content::CONTACT_INFO;

const REASONS: [(&str, &str); 4] = [
    ("Expert Team", "Experienced digital marketing professionals"),
    ("Custom Strategies", "Tailored solutions for your business"),
    ("Proven Results", "Track record of successful campaigns"),
    ("24/7 Support", "Always here when you need us"),
];

const PERKS: [&str; 3] = ["Free consultation", "Custom strategy development", "No long-term contracts"];

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="page contact-page">
            <section class="page-hero">
                <h1>{"Get in "}<span class="gradient-text">{"Touch"}</span></h1>
                <p class="lead-text">
                    {"Ready to start your digital marketing journey? We'd love to hear from you. \
                      Let's discuss how we can help your business grow and succeed online."}
                </p>
            </section>

            <section class="section muted">
                <div class="card-grid four">
                    { for CONTACT_INFO.iter().map(|info| html! {
                        <div class="glass-card centered" key={info.title}>
                            <div class="icon-badge">{info.icon}</div>
                            <h3>{info.title}</h3>
                            <p class="contact-value">{info.value}</p>
                            <p class="muted-text">{info.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section">
                <div class="split">
                    <HubSpotForm
                        title="Send Us a Message"
                        subtitle="Fill out the form below and we'll get back to you within 24 hours."
                        source="Contact Page"
                    />
                    <div>
                        <div class="glass-card">
                            <h3>{"Why Choose "}<span class="gradient-text">{"HiveSurf"}</span>{"?"}</h3>
                            <ul class="check-list">
                                { for REASONS.iter().map(|(title, detail)| html! {
                                    <li key={*title}>
                                        <strong>{"✔ "}{*title}</strong>
                                        <p>{*detail}</p>
                                    </li>
                                }) }
                            </ul>
                        </div>
                        <div class="glass-card">
                            <h3>{"Get Started Today"}</h3>
                            <p>
                                {"Ready to transform your digital presence? Let's discuss your goals and create \
                                  a custom strategy that drives results."}
                            </p>
                            <ul class="dot-list">
                                { for PERKS.iter().map(|perk| html! { <li key={*perk}>{*perk}</li> }) }
                            </ul>
                        </div>
                    </div>
                </div>
            </section>

            <section class="section muted">
                <div class="section-heading">
                    <h2>{"Visit Our "}<span class="gradient-text">{"Office"}</span></h2>
                </div>
                <div class="glass-card centered">
                    <h3>{"HiveSurf Office"}</h3>
                    <p>{"India"}</p>
                    <p class="muted-text">{"Mon - Fri: 9AM - 6PM"}</p>
                </div>
            </section>
        </div>
    }
}
