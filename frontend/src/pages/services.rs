use log::info;
use web_sys::window;
use yew::prelude::*;

use crate::components::service_modal::ServiceFormModal;
use crate::content::{Service, PRICING_PLANS, SERVICES, TESTIMONIALS};
use crate::inquiry::{inquiry_for_service, Inquiry};
use crate::lead::FlowOutcome;

#[function_component(Services)]
pub fn services() -> Html {
    let active_service = use_state(|| 0usize);
    let inquiry = use_state(|| None::<Inquiry>);

    let open_inquiry = {
        let inquiry = inquiry.clone();
        Callback::from(move |next: Inquiry| {
            info!("Opening {:?} inquiry for {}", next.kind, next.subject);
            inquiry.set(Some(next));
        })
    };

    let on_outcome = {
        let inquiry = inquiry.clone();
        Callback::from(move |_: FlowOutcome| inquiry.set(None))
    };

    let view_pricing = Callback::from(|_: MouseEvent| {
        if let Some(section) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("pricing-section"))
        {
            section.scroll_into_view();
        }
    });

    let service_card = |(index, service): (usize, &Service)| {
        let is_active = *active_service == index;
        let select = {
            let active_service = active_service.clone();
            Callback::from(move |_: MouseEvent| active_service.set(index))
        };
        let get_started = {
            let open_inquiry = open_inquiry.clone();
            let title = service.title;
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                open_inquiry.emit(inquiry_for_service(title));
            })
        };
        html! {
            <div key={service.title} class={classes!("glass-card", "service-card", is_active.then(|| "active"))} onclick={select}>
                <div class="icon-badge" style={format!("background: {};", service.gradient)}>{service.icon}</div>
                <h3>{service.title}</h3>
                <p>{service.description}</p>
                <ul class="check-list compact">
                    { for service.features.iter().take(3).map(|feature| html! { <li key={*feature}>{"✔ "}{*feature}</li> }) }
                </ul>
                <div class="card-price gradient-text">{service.price}</div>
                <button class="btn-primary small" onclick={get_started}>{"Get Started"}</button>
            </div>
        }
    };

    let plans = PRICING_PLANS.iter().map(|plan| {
        let is_starter = plan.name == "Starter";
        let choose = {
            let open_inquiry = open_inquiry.clone();
            let plan = *plan;
            Callback::from(move |_: MouseEvent| {
                let next = if is_starter { Inquiry::trial() } else { Inquiry::for_plan(&plan, false) };
                open_inquiry.emit(next);
            })
        };
        html! {
            <div key={plan.name} class={classes!("glass-card", "plan-card", plan.popular.then(|| "popular"))}>
                if plan.popular {
                    <span class="popular-badge">{"Most Popular"}</span>
                }
                <h3>{plan.name}</h3>
                <p class="muted-text">{plan.description}</p>
                <div class="plan-price">
                    <span class="gradient-text">{plan.price}</span><span>{"/month"}</span>
                </div>
                <div class="plan-yearly">
                    <span>{plan.yearly_price}</span><span>{"/month (yearly)"}</span>
                </div>
                <ul class="check-list">
                    { for plan.features.iter().map(|feature| html! { <li key={*feature}>{"✔ "}{*feature}</li> }) }
                </ul>
                <button class={if plan.popular { "btn-primary full-width" } else { "btn-secondary full-width" }} onclick={choose}>
                    { if is_starter { "Start Free Trial" } else { "Get Started" } }
                </button>
            </div>
        }
    });

    let active = SERVICES[(*active_service).min(SERVICES.len() - 1)];
    let active_get_started = {
        let open_inquiry = open_inquiry.clone();
        Callback::from(move |_: MouseEvent| open_inquiry.emit(inquiry_for_service(active.title)))
    };
    let consultation = {
        let open_inquiry = open_inquiry.clone();
        Callback::from(move |_: MouseEvent| open_inquiry.emit(Inquiry::consultation()))
    };

    html! {
        <div class="page services-page">
            <style>
                {r#"
                    .service-card {
                        cursor: pointer;
                    }
                    .service-card.active {
                        box-shadow: 0 0 0 2px var(--primary);
                    }
                    .plan-card {
                        position: relative;
                        text-align: center;
                    }
                    .plan-card.popular {
                        box-shadow: 0 0 0 2px var(--primary);
                        transform: scale(1.05);
                    }
                    .popular-badge {
                        position: absolute;
                        top: -1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        color: #fff;
                        font-size: 0.875rem;
                        background: linear-gradient(90deg, #0ea5e9, #d946ef);
                    }
                    .plan-price {
                        font-size: 2.25rem;
                        font-weight: 700;
                    }
                    .plan-yearly {
                        color: #34d399;
                        margin: 0.5rem 0 1.5rem;
                    }
                    .testimonial-avatar {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        object-fit: cover;
                    }
                "#}
            </style>

            <section class="page-hero">
                <h1>{"Our "}<span class="gradient-text">{"Services"}</span></h1>
                <p class="lead-text">
                    {"We will propose to your business innovative marketing strategies, engaging, diverse, and \
                      tailored to your goals. Our comprehensive digital marketing services help you ride the wave \
                      of innovation with confidence."}
                </p>
            </section>

            <section class="section muted">
                <div class="card-grid three">
                    { for SERVICES.iter().enumerate().map(service_card) }
                </div>
            </section>

            <section class="section" id="pricing-section">
                <div class="section-heading">
                    <h2>{"Choose Your "}<span class="gradient-text">{"Plan"}</span></h2>
                    <p>{"Flexible pricing options designed to fit your business needs and budget."}</p>
                </div>
                <div class="card-grid three">
                    { for plans }
                </div>
            </section>

            <section class="section muted">
                <div class="split">
                    <div>
                        <div class="icon-badge large" style={format!("background: {};", active.gradient)}>{active.icon}</div>
                        <h2>{active.title}</h2>
                        <p class="lead-text">{active.description}</p>
                        <ul class="check-list">
                            { for active.features.iter().map(|feature| html! { <li key={*feature}>{"✔ "}{*feature}</li> }) }
                        </ul>
                        <button class="btn-primary" onclick={active_get_started}>
                            {"Get Started with "}{active.title}
                        </button>
                    </div>
                    <div class="glass-card centered">
                        <h3>{"Starting at"}</h3>
                        <div class="plan-price gradient-text">{active.price}</div>
                        <p class="muted-text">{"Custom packages available for every business size."}</p>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="section-heading">
                    <h2>{"What Our "}<span class="gradient-text">{"Clients Say"}</span></h2>
                </div>
                <div class="card-grid three">
                    { for TESTIMONIALS.iter().map(|testimonial| {
                        let stars = String::from("★").repeat(usize::from(testimonial.rating));
                        html! {
                        <div class="glass-card" key={testimonial.name}>
                            <div class="testimonial-head">
                                <img class="testimonial-avatar" src={testimonial.avatar} alt={testimonial.name} />
                                <div>
                                    <h4>{testimonial.name}</h4>
                                    <p class="muted-text">{testimonial.company}</p>
                                </div>
                            </div>
                            <div class="stars">{stars}</div>
                            <p>{format!("\"{}\"", testimonial.comment)}</p>
                        </div>
                        }
                    }) }
                </div>
            </section>

            <section class="section cta">
                <h2>{"Ready to "}<span class="gradient-text">{"Transform"}</span>{" Your Business?"}</h2>
                <p>{"Let's discuss how our digital marketing services can help you achieve your goals."}</p>
                <div class="hero-actions">
                    <button class="btn-primary" onclick={consultation}>{"Get Free Consultation"}</button>
                    <button class="btn-secondary" onclick={view_pricing}>{"View Pricing"}</button>
                </div>
            </section>

            if let Some(current) = (*inquiry).clone() {
                <ServiceFormModal is_open={true} inquiry={current} on_outcome={on_outcome} />
            }
        </div>
    }
}
