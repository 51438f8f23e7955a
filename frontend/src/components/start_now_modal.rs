use log::debug;
use yew::prelude::*;

use crate::components::decor::HiveSurfLogo;
use crate::components::form_kit::{
    labelled, on_select_change, on_text_input, on_textarea_input, select_options, stop_propagation,
    submit_label, success_panel, MODAL_STYLES,
};
use crate::components::hubspot_form::EmbeddedModal;
use crate::config::{self, LeadCaptureVariant};
use crate::error::SubmitError;
use crate::lead::{CompletionMode, FlowOutcome, LeadField, LeadForm, LeadPhase, LeadTimer, SERVICE_OPTIONS};
use crate::submit::submit_lead;
use crate::timers::TimerSlot;

#[derive(Properties, PartialEq, Clone)]
pub struct StartNowModalProps {
    pub is_open: bool,
    #[prop_or_default]
    pub completion: CompletionMode,
    /// Where the modal was opened from, sent along with the lead.
    #[prop_or(AttrValue::from("website"))]
    pub source: AttrValue,
    #[prop_or_default]
    pub source_card_id: Option<AttrValue>,
    pub on_outcome: Callback<FlowOutcome>,
}

impl StartNowModalProps {
    pub(crate) fn lead_source(&self) -> String {
        self.source_card_id.as_ref().unwrap_or(&self.source).to_string()
    }
}

/// The "Start Now" lead capture modal. Which implementation renders is fixed
/// by configuration.
#[function_component(StartNowModal)]
pub fn start_now_modal(props: &StartNowModalProps) -> Html {
    match config::lead_capture_variant() {
        LeadCaptureVariant::Wizard => html! {
            <WizardModal
                is_open={props.is_open}
                completion={props.completion}
                source={props.source.clone()}
                source_card_id={props.source_card_id.clone()}
                on_outcome={props.on_outcome.clone()}
            />
        },
        LeadCaptureVariant::Embedded => html! {
            <EmbeddedModal
                is_open={props.is_open}
                completion={props.completion}
                source={props.source.clone()}
                source_card_id={props.source_card_id.clone()}
                on_outcome={props.on_outcome.clone()}
            />
        },
    }
}

pub enum WizardMsg {
    RequestClose,
    Update(LeadField, String),
    Next,
    Previous,
    Submit,
    Submitted { session: u32, result: Result<(), SubmitError> },
    Timer(LeadTimer),
}

pub struct WizardModal {
    form: LeadForm,
    timer: TimerSlot,
    error: Option<String>,
}

impl Component for WizardModal {
    type Message = WizardMsg;
    type Properties = StartNowModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut form = LeadForm::wizard();
        if ctx.props().is_open {
            form.open(ctx.props().completion);
        }
        Self {
            form,
            timer: TimerSlot::default(),
            error: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if props.is_open && !old_props.is_open {
            self.timer.cancel();
            self.error = None;
            self.form.open(props.completion);
        } else if !props.is_open && old_props.is_open && self.form.is_open() {
            // Hidden by the parent; nothing from this session may come back.
            self.timer.cancel();
            self.error = None;
            self.form.discard();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            WizardMsg::RequestClose => match self.form.close() {
                Ok(()) => {
                    self.timer.cancel();
                    self.error = None;
                    ctx.props().on_outcome.emit(FlowOutcome::Closed);
                    true
                }
                Err(e) => {
                    debug!("Close ignored: {}", e);
                    false
                }
            },
            WizardMsg::Update(field, value) => {
                if let Err(e) = self.form.update_field(field, value) {
                    debug!("Edit of {} ignored: {}", field.as_str(), e);
                }
                self.error = None;
                true
            }
            WizardMsg::Next => {
                if self.form.can_advance() {
                    self.form.go_next();
                    self.error = None;
                } else if self.form.step() == 1 {
                    self.error = Some("Please enter your name and email to continue".to_string());
                }
                true
            }
            WizardMsg::Previous => {
                self.form.go_previous();
                self.error = None;
                true
            }
            WizardMsg::Submit => {
                match self.form.submit() {
                    Ok(fields) => {
                        self.error = None;
                        let session = self.form.session();
                        let source = ctx.props().lead_source();
                        ctx.link().send_future(async move {
                            WizardMsg::Submitted {
                                session,
                                result: submit_lead(fields, source).await,
                            }
                        });
                    }
                    Err(e) => self.error = Some(e.to_string()),
                }
                true
            }
            WizardMsg::Submitted { session, result } => {
                if let Some(timer) = self.form.finish_submission(session, result) {
                    self.timer.schedule(ctx.link(), timer, WizardMsg::Timer);
                }
                true
            }
            WizardMsg::Timer(timer) => {
                self.timer.fired();
                if let Some(outcome) = self.form.on_timer(timer) {
                    ctx.props().on_outcome.emit(outcome);
                }
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.timer.cancel();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().is_open {
            return html! {};
        }
        let link = ctx.link();
        let submitting = self.form.is_submitting();
        let close = link.callback(|_: MouseEvent| WizardMsg::RequestClose);

        html! {
            <div class="modal-overlay" onclick={close.clone()}>
                <style>{MODAL_STYLES}</style>
                <div class="modal-panel" onclick={stop_propagation()}>
                    <div class="modal-header">
                        <div class="modal-title">
                            <HiveSurfLogo size={32} />
                            <h2>{"Start Your Journey"}</h2>
                        </div>
                        <button class="modal-close" onclick={close} disabled={submitting}>{"✕"}</button>
                    </div>

                    { self.view_progress() }

                    if self.form.is_submitted() {
                        { success_panel(ctx.props().source_card_id.is_some()) }
                    } else {
                        { self.view_step(ctx) }
                        if let LeadPhase::Failed(reason) = self.form.phase() {
                            <div class="form-error">
                                {format!("We couldn't send your request ({}). Please try again.", reason)}
                            </div>
                        }
                        if let Some(error) = &self.error {
                            <div class="form-error">{error.clone()}</div>
                        }
                        { self.view_nav(ctx) }
                    }
                </div>
            </div>
        }
    }
}

impl WizardModal {
    fn view_progress(&self) -> Html {
        let step = self.form.step();
        html! {
            <div class="wizard-progress">
                <div class="step-dots">
                    { for (1..=self.form.total_steps()).map(|n| html! {
                        <div class={classes!("step-dot", (step >= n).then(|| "reached"))}>{n}</div>
                    }) }
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style={format!("width: {}%;", self.form.progress_percent())}></div>
                </div>
            </div>
        }
    }

    fn view_step(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let fields = self.form.fields();

        match self.form.step() {
            1 => html! {
                <div class="wizard-step" key="step-1">
                    <h3>{"Basic Information"}</h3>
                    { labelled("Full Name", true, html! {
                        <input type="text" name="name" placeholder="Enter your full name"
                            value={fields.name.clone()}
                            oninput={on_text_input(link, LeadField::Name, WizardMsg::Update)} />
                    }) }
                    { labelled("Email Address", true, html! {
                        <input type="email" name="email" placeholder="Enter your email"
                            value={fields.email.clone()}
                            oninput={on_text_input(link, LeadField::Email, WizardMsg::Update)} />
                    }) }
                    { labelled("Phone Number", false, html! {
                        <input type="tel" name="phone" placeholder="Enter your phone number"
                            value={fields.phone.clone()}
                            oninput={on_text_input(link, LeadField::Phone, WizardMsg::Update)} />
                    }) }
                </div>
            },
            2 => {
                let services: Vec<(&str, &str)> = SERVICE_OPTIONS.iter().map(|s| (*s, *s)).collect();
                html! {
                    <div class="wizard-step" key="step-2">
                        <h3>{"Business Details"}</h3>
                        { labelled("Company Name", false, html! {
                            <input type="text" name="company" placeholder="Enter your company name"
                                value={fields.company.clone()}
                                oninput={on_text_input(link, LeadField::Company, WizardMsg::Update)} />
                        }) }
                        { labelled("Service Interest", true, html! {
                            <select name="service" onchange={on_select_change(link, LeadField::Service, WizardMsg::Update)}>
                                { select_options("Select a service", &fields.service, &services) }
                            </select>
                        }) }
                    </div>
                }
            }
            _ => html! {
                <div class="wizard-step" key="step-3">
                    <h3>{"Project Details"}</h3>
                    { labelled("Project Description", false, html! {
                        <textarea name="message" rows="4"
                            placeholder="Tell us about your project goals and requirements..."
                            value={fields.message.clone()}
                            oninput={on_textarea_input(link, LeadField::Message, WizardMsg::Update)} />
                    }) }
                </div>
            },
        }
    }

    fn view_nav(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let submitting = self.form.is_submitting();

        html! {
            <div class="modal-nav">
                if self.form.step() > 1 {
                    <button class="modal-secondary" disabled={submitting}
                        onclick={link.callback(|_: MouseEvent| WizardMsg::Previous)}>
                        {"Previous"}
                    </button>
                }
                if self.form.is_final_step() {
                    <button class="modal-primary" disabled={submitting}
                        onclick={link.callback(|_: MouseEvent| WizardMsg::Submit)}>
                        { submit_label(submitting) }
                    </button>
                } else {
                    <button class="modal-primary"
                        onclick={link.callback(|_: MouseEvent| WizardMsg::Next)}>
                        {"Next →"}
                    </button>
                }
            </div>
        }
    }
}
