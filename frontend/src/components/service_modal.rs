use log::{debug, info};
use yew::prelude::*;

use crate::components::form_kit::{
    labelled, on_select_change, on_text_input, on_textarea_input, select_options, stop_propagation,
    submit_label, success_panel, MODAL_STYLES,
};
use crate::error::SubmitError;
use crate::inquiry::Inquiry;
use crate::lead::{
    CompletionMode, FlowOutcome, LeadField, LeadForm, LeadPhase, LeadTimer, BUDGET_OPTIONS, TIMELINE_OPTIONS,
};
use crate::submit::submit_lead;
use crate::timers::TimerSlot;

#[derive(Properties, PartialEq, Clone)]
pub struct ServiceFormModalProps {
    pub is_open: bool,
    pub inquiry: Inquiry,
    pub on_outcome: Callback<FlowOutcome>,
}

pub enum ServiceMsg {
    RequestClose,
    Update(LeadField, String),
    Submit,
    Submitted { session: u32, result: Result<(), SubmitError> },
    Timer(LeadTimer),
}

/// Single page inquiry form opened from the services page.
pub struct ServiceFormModal {
    form: LeadForm,
    timer: TimerSlot,
    error: Option<String>,
}

impl ServiceFormModal {
    fn fresh_form(props: &ServiceFormModalProps) -> LeadForm {
        let mut form = LeadForm::single_page(props.inquiry.seed_service());
        if props.is_open {
            form.open(CompletionMode::AutoReset);
        }
        form
    }
}

impl Component for ServiceFormModal {
    type Message = ServiceMsg;
    type Properties = ServiceFormModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: Self::fresh_form(ctx.props()),
            timer: TimerSlot::default(),
            error: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        let reopened = props.is_open && !old_props.is_open;
        if reopened || props.inquiry != old_props.inquiry || (!props.is_open && old_props.is_open) {
            self.timer.cancel();
            self.error = None;
            self.form = Self::fresh_form(props);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ServiceMsg::RequestClose => match self.form.close() {
                Ok(()) => {
                    self.timer.cancel();
                    ctx.props().on_outcome.emit(FlowOutcome::Closed);
                    true
                }
                Err(e) => {
                    debug!("Close ignored: {}", e);
                    false
                }
            },
            ServiceMsg::Update(field, value) => {
                if let Err(e) = self.form.update_field(field, value) {
                    debug!("Edit of {} ignored: {}", field.as_str(), e);
                }
                self.error = None;
                true
            }
            ServiceMsg::Submit => {
                match self.form.submit() {
                    Ok(fields) => {
                        self.error = None;
                        let session = self.form.session();
                        let inquiry = &ctx.props().inquiry;
                        info!("Submitting {:?} inquiry for {}", inquiry.kind, inquiry.subject);
                        let source = format!("services:{}", inquiry.subject);
                        ctx.link().send_future(async move {
                            ServiceMsg::Submitted {
                                session,
                                result: submit_lead(fields, source).await,
                            }
                        });
                    }
                    Err(e) => self.error = Some(e.to_string()),
                }
                true
            }
            ServiceMsg::Submitted { session, result } => {
                if let Some(timer) = self.form.finish_submission(session, result) {
                    self.timer.schedule(ctx.link(), timer, ServiceMsg::Timer);
                }
                true
            }
            ServiceMsg::Timer(timer) => {
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
        let props = ctx.props();
        if !props.is_open {
            return html! {};
        }
        let link = ctx.link();
        let fields = self.form.fields();
        let submitting = self.form.is_submitting();
        let close = link.callback(|_: MouseEvent| ServiceMsg::RequestClose);
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ServiceMsg::Submit
        });

        html! {
            <div class="modal-overlay" onclick={close.clone()}>
                <style>{MODAL_STYLES}</style>
                <div class="modal-panel wide" onclick={stop_propagation()}>
                    <div class="modal-header">
                        <div>
                            <h2>{props.inquiry.title()}</h2>
                            <p class="modal-subtitle">{props.inquiry.description()}</p>
                        </div>
                        <button class="modal-close" onclick={close} disabled={submitting}>{"✕"}</button>
                    </div>

                    if let Some(price) = &props.inquiry.price {
                        <div class="plan-price-note">
                            {format!("{} plan, {} per month", props.inquiry.subject, price)}
                        </div>
                    }

                    if self.form.is_submitted() {
                        { success_panel(false) }
                    } else {
                        <form {onsubmit}>
                            <div class="form-grid">
                                { labelled("Full Name", true, html! {
                                    <input type="text" name="name" placeholder="Your full name"
                                        value={fields.name.clone()}
                                        oninput={on_text_input(link, LeadField::Name, ServiceMsg::Update)} />
                                }) }
                                { labelled("Email Address", true, html! {
                                    <input type="email" name="email" placeholder="your@email.com"
                                        value={fields.email.clone()}
                                        oninput={on_text_input(link, LeadField::Email, ServiceMsg::Update)} />
                                }) }
                                { labelled("Phone Number", false, html! {
                                    <input type="tel" name="phone" placeholder="+91 XXXXX XXXXX"
                                        value={fields.phone.clone()}
                                        oninput={on_text_input(link, LeadField::Phone, ServiceMsg::Update)} />
                                }) }
                                { labelled("Company Name", false, html! {
                                    <input type="text" name="company" placeholder="Your company name"
                                        value={fields.company.clone()}
                                        oninput={on_text_input(link, LeadField::Company, ServiceMsg::Update)} />
                                }) }
                                { labelled("Budget Range", false, html! {
                                    <select name="budget" onchange={on_select_change(link, LeadField::Budget, ServiceMsg::Update)}>
                                        { select_options("Select budget range", &fields.budget, &BUDGET_OPTIONS) }
                                    </select>
                                }) }
                                { labelled("Timeline", false, html! {
                                    <select name="timeline" onchange={on_select_change(link, LeadField::Timeline, ServiceMsg::Update)}>
                                        { select_options("Select timeline", &fields.timeline, &TIMELINE_OPTIONS) }
                                    </select>
                                }) }
                            </div>
                            { labelled("Project Details", false, html! {
                                <textarea name="message" rows="4"
                                    placeholder="Tell us about your project, goals, and any specific requirements..."
                                    value={fields.message.clone()}
                                    oninput={on_textarea_input(link, LeadField::Message, ServiceMsg::Update)} />
                            }) }

                            if let LeadPhase::Failed(reason) = self.form.phase() {
                                <div class="form-error">
                                    {format!("We couldn't send your request ({}). Please try again.", reason)}
                                </div>
                            }
                            if let Some(error) = &self.error {
                                <div class="form-error">{error.clone()}</div>
                            }

                            <div class="modal-nav">
                                <button type="submit" class="modal-primary" disabled={submitting}>
                                    { submit_label(submitting) }
                                </button>
                            </div>
                        </form>
                    }
                </div>
            </div>
        }
    }
}
