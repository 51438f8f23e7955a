use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::content::{ACHIEVEMENTS, TEAM, VALUES};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="page about-page">
            <style>
                {r#"
                    .team-photo {
                        width: 8rem;
                        height: 8rem;
                        border-radius: 50%;
                        object-fit: cover;
                        margin: 0 auto 1rem;
                        display: block;
                    }
                    .team-role {
                        color: var(--primary);
                        font-weight: 500;
                        margin-bottom: 0.75rem;
                    }
                    .achievement-number {
                        font-size: 2rem;
                        font-weight: 700;
                    }
                "#}
            </style>

            <section class="page-hero">
                <h1>{"About "}<span class="gradient-text">{"HiveSurf"}</span></h1>
                <p class="lead-text">
                    {"We are a team of passionate digital marketing professionals dedicated to helping businesses \
                      thrive in the digital landscape. Our mission is to make your marketing journey as enjoyable, \
                      rewarding, and effective as possible."}
                </p>
            </section>

            <section class="section muted">
                <div class="split">
                    <div>
                        <h2>{"Our "}<span class="gradient-text">{"Mission"}</span></h2>
                        <p>
                            {"Our aim is to make your marketing journey as enjoyable, rewarding, and effective as \
                              possible. We believe that every business deserves to grow to its fullest potential, and \
                              we're here to make that happen through innovative digital marketing strategies."}
                        </p>
                    </div>
                    <div class="glass-card">
                        <h3>{"For Every Business"}</h3>
                        <p>
                            {"All strategies are tailored to meet each client's unique needs. This approach will help \
                              your business grow to its fullest potential."}
                        </p>
                        <div class="card-grid two">
                            { for ACHIEVEMENTS.iter().map(|(number, label)| html! {
                                <div class="stat" key={*label}>
                                    <div class="achievement-number gradient-text">{*number}</div>
                                    <div class="stat-label">{*label}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section-heading">
                    <h2>{"Our "}<span class="gradient-text">{"Values"}</span></h2>
                    <p>{"The principles that guide everything we do."}</p>
                </div>
                <div class="card-grid four">
                    { for VALUES.iter().map(|value| html! {
                        <div class="glass-card" key={value.title}>
                            <div class="icon-badge" style={format!("background: {};", value.gradient)}>{value.icon}</div>
                            <h3>{value.title}</h3>
                            <p>{value.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section muted">
                <div class="section-heading">
                    <h2>{"Meet Our "}<span class="gradient-text">{"Team"}</span></h2>
                    <p>{"The experts behind your success."}</p>
                </div>
                <div class="card-grid four">
                    { for TEAM.iter().map(|member| html! {
                        <div class="glass-card centered" key={member.name}>
                            <img class="team-photo" src={member.image} alt={member.name} />
                            <h3>{member.name}</h3>
                            <p class="team-role">{member.role}</p>
                            <p>{member.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="section cta">
                <h2><span class="gradient-text">{"Open-Door Policy"}</span></h2>
                <p>
                    {"You are welcome to schedule a consultation and meet our team at your convenience. \
                      We believe in transparency and building strong relationships with our clients."}
                </p>
                <Link<Route> to={Route::Contact} classes="btn-primary">
                    {"Schedule a Consultation"}
                </Link<Route>>
            </section>
        </div>
    }
}
