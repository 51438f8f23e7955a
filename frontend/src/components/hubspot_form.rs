use log::{debug, error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, MessageEvent, Window};
use yew::prelude::*;

use crate::components::decor::HiveSurfLogo;
use crate::components::form_kit::{stop_propagation, success_panel, MODAL_STYLES};
use crate::components::start_now_modal::StartNowModalProps;
use crate::config;
use crate::embed::{EmbeddedFlow, HubSpotMessage};
use crate::error::EmbedError;
use crate::lead::{FlowOutcome, LeadTimer};
use crate::timers::TimerSlot;

/// A `<script>` tag appended to `<head>`. Removed again when dropped.
pub struct ScriptGuard {
    script: HtmlScriptElement,
}

impl ScriptGuard {
    pub fn inject(src: &str) -> Result<Self, EmbedError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(EmbedError::NoDocument)?;
        let head = document.head().ok_or(EmbedError::NoDocument)?;
        let script: HtmlScriptElement = document
            .create_element("script")?
            .dyn_into()
            .map_err(|_| EmbedError::Dom("created element is not a script".to_string()))?;
        script.set_src(src);
        script.set_defer(true);
        head.append_child(&script)?;
        debug!("Injected script {}", src);
        Ok(Self { script })
    }
}

impl Drop for ScriptGuard {
    fn drop(&mut self) {
        if let Some(parent) = self.script.parent_node() {
            let _ = parent.remove_child(&self.script);
        }
    }
}

/// Window `message` listener that only passes on HubSpot form callbacks.
pub struct MessageListener {
    window: Window,
    callback: Closure<dyn FnMut(MessageEvent)>,
}

impl MessageListener {
    pub fn new(on_message: impl Fn(HubSpotMessage) + 'static) -> Result<Self, EmbedError> {
        let window = web_sys::window().ok_or(EmbedError::NoDocument)?;
        let callback = Closure::wrap(Box::new(move |event: MessageEvent| {
            // Other scripts post to the window too.
            if let Ok(message) = serde_wasm_bindgen::from_value::<HubSpotMessage>(event.data()) {
                on_message(message);
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        window.add_event_listener_with_callback("message", callback.as_ref().unchecked_ref())?;
        Ok(Self { window, callback })
    }
}

impl Drop for MessageListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("message", self.callback.as_ref().unchecked_ref());
    }
}

#[derive(Properties, PartialEq)]
pub struct HubSpotFormProps {
    #[prop_or(AttrValue::from("Get Started with HiveSurf"))]
    pub title: AttrValue,
    #[prop_or(AttrValue::from("Fill out the form below and we'll get back to you within 24 hours."))]
    pub subtitle: AttrValue,
    #[prop_or(AttrValue::from("Website"))]
    pub source: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(HubSpotForm)]
pub fn hubspot_form(props: &HubSpotFormProps) -> Html {
    use_effect_with_deps(
        |_| {
            let guard = match ScriptGuard::inject(config::HUBSPOT_SCRIPT_URL) {
                Ok(guard) => {
                    info!("HubSpot form script requested");
                    Some(guard)
                }
                Err(e) => {
                    error!("Failed to load HubSpot form script: {}", e);
                    None
                }
            };
            move || drop(guard)
        },
        (),
    );

    html! {
        <div class={classes!("hubspot-form-container", props.class.clone())}>
            <style>
                {r#"
                    .hubspot-form-container h2 {
                        font-size: 1.875rem;
                        margin-bottom: 1rem;
                    }
                    .hubspot-form-wrapper {
                        min-height: 400px;
                        border-radius: 0.75rem;
                        padding: 2rem;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                    }
                "#}
            </style>
            <div class="hubspot-form-heading">
                <h2>{props.title.clone()}</h2>
                <p>{props.subtitle.clone()}</p>
            </div>
            <div class="hubspot-form-wrapper">
                <input type="hidden" name="source" value={props.source.clone()} />
                <div
                    class="hs-form-frame"
                    data-region={config::HUBSPOT_REGION}
                    data-form-id={config::HUBSPOT_FORM_ID}
                    data-portal-id={config::HUBSPOT_PORTAL_ID}
                />
            </div>
        </div>
    }
}

pub enum EmbeddedMsg {
    RequestClose,
    HubSpot(HubSpotMessage),
    Timer(LeadTimer),
}

/// Start Now modal backed by the hosted HubSpot form.
pub struct EmbeddedModal {
    flow: EmbeddedFlow,
    timer: TimerSlot,
    listener: Option<MessageListener>,
}

impl EmbeddedModal {
    fn start(&mut self, ctx: &Context<Self>) {
        self.timer.cancel();
        self.flow.open(ctx.props().completion);
        let link = ctx.link().clone();
        self.listener = match MessageListener::new(move |message| link.send_message(EmbeddedMsg::HubSpot(message))) {
            Ok(listener) => Some(listener),
            Err(e) => {
                error!("Cannot listen for HubSpot callbacks: {}", e);
                None
            }
        };
    }

    fn stop(&mut self) {
        self.timer.cancel();
        self.listener = None;
        self.flow.close();
    }
}

impl Component for EmbeddedModal {
    type Message = EmbeddedMsg;
    type Properties = StartNowModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut modal = Self {
            flow: EmbeddedFlow::default(),
            timer: TimerSlot::default(),
            listener: None,
        };
        if ctx.props().is_open {
            modal.start(ctx);
        }
        modal
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let is_open = ctx.props().is_open;
        if is_open && !old_props.is_open {
            self.start(ctx);
        } else if !is_open && old_props.is_open {
            self.stop();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            EmbeddedMsg::RequestClose => {
                self.stop();
                ctx.props().on_outcome.emit(FlowOutcome::Closed);
                true
            }
            EmbeddedMsg::HubSpot(message) => {
                if !message.is_submission_of(config::HUBSPOT_FORM_ID) {
                    debug!("HubSpot callback {} ignored", message.event_name);
                    return false;
                }
                info!("HubSpot form submitted from {}", ctx.props().lead_source());
                match self.flow.form_submitted() {
                    Some(timer) => {
                        self.timer.schedule(ctx.link(), timer, EmbeddedMsg::Timer);
                        true
                    }
                    None => false,
                }
            }
            EmbeddedMsg::Timer(timer) => {
                self.timer.fired();
                match self.flow.on_timer(timer) {
                    Some(outcome) => {
                        if !self.flow.is_open() {
                            self.listener = None;
                        }
                        ctx.props().on_outcome.emit(outcome);
                        true
                    }
                    None => false,
                }
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.stop();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().is_open {
            return html! {};
        }
        let close = ctx.link().callback(|_: MouseEvent| EmbeddedMsg::RequestClose);

        html! {
            <div class="modal-overlay" onclick={close.clone()}>
                <style>{MODAL_STYLES}</style>
                <div class="modal-panel wide" onclick={stop_propagation()}>
                    <div class="modal-header">
                        <div class="modal-title">
                            <HiveSurfLogo size={32} />
                            <h2>{"Start Your Journey"}</h2>
                        </div>
                        <button class="modal-close" onclick={close}>{"✕"}</button>
                    </div>
                    if self.flow.is_submitted() {
                        { success_panel(ctx.props().source_card_id.is_some()) }
                    } else {
                        <HubSpotForm
                            title="Let's Grow Together"
                            subtitle="Tell us about your business and we'll be in touch within 24 hours."
                            source={ctx.props().lead_source()}
                        />
                    }
                </div>
            </div>
        }
    }
}
