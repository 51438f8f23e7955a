use log::{debug, info};
use web_sys::window;
use yew::prelude::*;

use crate::components::decor::{Globe, HiveSurfLogo};
use crate::components::start_now_modal::StartNowModal;
use crate::content::{ServiceCard, HERO_BADGES, HOME_CARDS, HOME_FEATURES, HOME_STATS};
use crate::launch::{CardLaunch, LaunchTimer};
use crate::lead::{CompletionMode, FlowOutcome};
use crate::timers::TimerSlot;

pub enum Msg {
    StartNow,
    PressCard(&'static str),
    LearnMore,
    Outcome(FlowOutcome),
    Timer(LaunchTimer),
}

pub struct Home {
    launch: CardLaunch,
    timer: TimerSlot,
}

impl Component for Home {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            launch: CardLaunch::default(),
            timer: TimerSlot::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StartNow => {
                self.timer.cancel();
                self.launch.start_now();
                true
            }
            Msg::PressCard(card_id) => match self.launch.press_card(card_id) {
                Some(open) => {
                    info!("Card {} pressed", card_id);
                    self.timer.schedule(ctx.link(), open, Msg::Timer);
                    true
                }
                None => false,
            },
            Msg::LearnMore => {
                if let Some(features) = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.get_element_by_id("features"))
                {
                    features.scroll_into_view();
                }
                false
            }
            Msg::Outcome(outcome) => {
                debug!("Start Now modal reported {:?}", outcome);
                let release = match outcome {
                    FlowOutcome::Completed => self.launch.form_completed(),
                    FlowOutcome::Closed => self.launch.modal_closed(),
                };
                match release {
                    Some(release) => self.timer.schedule(ctx.link(), release, Msg::Timer),
                    None => self.timer.cancel(),
                }
                true
            }
            Msg::Timer(timer) => {
                self.timer.fired();
                self.launch.on_timer(timer);
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.timer.cancel();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let visibility = self.launch.visibility();

        html! {
            <div class="page home-page">
                <style>
                    {r#"
                        .hero {
                            min-height: 100vh;
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            text-align: center;
                            padding: 8rem 1rem 4rem;
                            position: relative;
                        }
                        .hero h1 {
                            font-size: clamp(3rem, 7vw, 4.5rem);
                            margin-bottom: 1.5rem;
                        }
                        .hero-badges {
                            display: flex;
                            flex-wrap: wrap;
                            justify-content: center;
                            gap: 1.5rem;
                            margin: 2rem 0;
                            color: var(--accent);
                        }
                        .hero-actions {
                            display: flex;
                            flex-wrap: wrap;
                            gap: 1rem;
                            justify-content: center;
                        }
                        .scroll-indicator {
                            position: absolute;
                            bottom: 2rem;
                            width: 1.5rem;
                            height: 2.5rem;
                            border: 2px solid currentColor;
                            border-radius: 9999px;
                            opacity: 0.5;
                            animation: bob 2s infinite;
                        }
                        @keyframes bob {
                            0%, 100% { transform: translateY(0); }
                            50% { transform: translateY(10px); }
                        }
                        .launch-card {
                            cursor: pointer;
                            transition: transform 0.3s, box-shadow 0.3s;
                        }
                        .launch-card.opening {
                            transform: scale(1.05);
                            box-shadow: 0 0 40px rgba(14, 165, 233, 0.5);
                        }
                        .launch-card .card-price {
                            font-weight: 700;
                            margin: 1rem 0;
                        }
                    "#}
                </style>

                <section class="hero">
                    <HiveSurfLogo size={100} />
                    <h1>
                        <span>{"Welcome to "}</span>
                        <span class="gradient-text">{"HiveSurf"}</span>
                    </h1>
                    <p class="lead-text">
                        {"At "}<strong>{"HiveSurf"}</strong>
                        {", we believe the digital world is a hive of limitless opportunity, and we're here to help \
                          you surf it with confidence. Just like a surfer rides the waves, our clients ride the wave \
                          of innovation, guided by our expert solutions."}
                    </p>
                    <div class="hero-badges">
                        { for HERO_BADGES.iter().map(|(icon, text)| html! {
                            <span key={*text}>{*icon}{" "}{*text}</span>
                        }) }
                    </div>
                    <div class="hero-actions">
                        <button class="btn-primary" onclick={link.callback(|_| Msg::StartNow)}>
                            {"Start Now →"}
                        </button>
                        <button class="btn-secondary" onclick={link.callback(|_| Msg::LearnMore)}>
                            {"Learn More"}
                        </button>
                    </div>
                    <div class="scroll-indicator"></div>
                </section>

                <section class="section muted">
                    <div class="section-heading">
                        <h2>{"Trusted by "}<span class="gradient-text">{"2,000+ businesses"}</span></h2>
                        <p>{"Entrust us with your marketing and focus on growing your business with peace of mind."}</p>
                    </div>
                    <div class="card-grid four">
                        { for HOME_STATS.iter().map(|stat| html! {
                            <div class="stat" key={stat.label}>
                                <div class="stat-icon">{stat.icon}</div>
                                <div class="stat-number gradient-text">{stat.number}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </section>

                <section class="section" id="features">
                    <div class="section-heading">
                        <h2>{"Why Choose "}<span class="gradient-text">{"HiveSurf"}</span>{"?"}</h2>
                        <p>{"We combine creativity with data-driven strategies to deliver exceptional results."}</p>
                    </div>
                    <div class="split">
                        <div class="card-grid one">
                            { for HOME_FEATURES.iter().map(|feature| html! {
                                <div class="glass-card" key={feature.title}>
                                    <div class="icon-badge" style={format!("background: {};", feature.gradient)}>
                                        {feature.icon}
                                    </div>
                                    <h3>{feature.title}</h3>
                                    <p>{feature.description}</p>
                                </div>
                            }) }
                        </div>
                        <Globe />
                    </div>
                </section>

                <section class="section muted">
                    <div class="section-heading">
                        <h2>{"Choose Your "}<span class="gradient-text">{"Path"}</span></h2>
                        <p>{"Pick the way you want to start working with us."}</p>
                    </div>
                    <div class="card-grid three">
                        { for HOME_CARDS.iter().map(|card| self.view_card(ctx, card)) }
                    </div>
                </section>

                <section class="section cta">
                    <h2>{"Ready to "}<span class="gradient-text">{"Ride the Wave"}</span>{"?"}</h2>
                    <p>{"Join thousands of businesses that trust HiveSurf to grow their digital presence."}</p>
                    <button class="btn-primary" onclick={link.callback(|_| Msg::StartNow)}>
                        {"Get Started Today"}
                    </button>
                </section>

                <StartNowModal
                    is_open={visibility.is_open}
                    completion={CompletionMode::Notify}
                    source={"home"}
                    source_card_id={visibility.source_card_id.clone().map(AttrValue::from)}
                    on_outcome={link.callback(Msg::Outcome)}
                />
            </div>
        }
    }
}

impl Home {
    fn view_card(&self, ctx: &Context<Self>, card: &ServiceCard) -> Html {
        let card_id = card.id;
        let opening = self.launch.is_active_card(card_id) && self.launch.is_card_transitioning();

        html! {
            <div
                key={card_id}
                class={classes!("glass-card", "launch-card", opening.then(|| "opening"))}
                onclick={ctx.link().callback(move |_| Msg::PressCard(card_id))}
            >
                <div class="icon-badge">{card.icon}</div>
                <h3>{card.title}</h3>
                <p>{card.description}</p>
                <div class="card-price gradient-text">{card.price}</div>
                <span class="card-action">{"Get Started →"}</span>
            </div>
        }
    }
}
