//! Pieces shared by the lead capture modals.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::lead::LeadField;

pub fn on_text_input<C: Component>(
    link: &Scope<C>,
    field: LeadField,
    wrap: fn(LeadField, String) -> C::Message,
) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        wrap(field, input.value())
    })
}

pub fn on_textarea_input<C: Component>(
    link: &Scope<C>,
    field: LeadField,
    wrap: fn(LeadField, String) -> C::Message,
) -> Callback<InputEvent> {
    link.callback(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        wrap(field, area.value())
    })
}

pub fn on_select_change<C: Component>(
    link: &Scope<C>,
    field: LeadField,
    wrap: fn(LeadField, String) -> C::Message,
) -> Callback<Event> {
    link.callback(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        wrap(field, select.value())
    })
}

pub fn stop_propagation() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| e.stop_propagation())
}

pub fn labelled(label: &str, required: bool, control: Html) -> Html {
    html! {
        <div class="form-row">
            <label>
                {label}
                if required { {" *"} }
            </label>
            {control}
        </div>
    }
}

pub fn select_options(placeholder: &str, current: &str, options: &[(&str, &str)]) -> Html {
    html! {
        <>
            <option value="" selected={current.is_empty()}>{placeholder.to_string()}</option>
            { for options.iter().map(|(value, label)| html! {
                <option value={value.to_string()} selected={current == *value}>{label.to_string()}</option>
            }) }
        </>
    }
}

pub fn success_panel(returning: bool) -> Html {
    html! {
        <div class="modal-success">
            <div class="success-check">{"✔"}</div>
            <h3>{"Thank You!"}</h3>
            <p>{"We've received your request and will contact you within 24 hours."}</p>
            if returning {
                <div class="success-note">{"Returning to your selected service..."}</div>
            }
        </div>
    }
}

pub fn submit_label(submitting: bool) -> Html {
    if submitting {
        html! { <><span class="spinner"></span><span>{"Submitting..."}</span></> }
    } else {
        html! { <><span>{"Submit Request"}</span><span>{" →"}</span></> }
    }
}

pub const MODAL_STYLES: &str = r#"
    .modal-overlay {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.5);
        backdrop-filter: blur(4px);
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        animation: modal-fade 0.3s ease-out;
    }
    .modal-panel {
        background: rgba(15, 23, 42, 0.95);
        border: 1px solid rgba(51, 65, 85, 0.5);
        border-radius: 1rem;
        padding: 2rem;
        width: 100%;
        max-width: 28rem;
        max-height: 90vh;
        overflow-y: auto;
        color: #f8fafc;
        animation: modal-pop 0.3s ease-out;
    }
    .modal-panel.wide {
        max-width: 42rem;
    }
    .modal-header {
        display: flex;
        align-items: center;
        justify-content: space-between;
        margin-bottom: 1.5rem;
    }
    .modal-close {
        background: none;
        border: none;
        color: #94a3b8;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .modal-close:disabled {
        opacity: 0.4;
        cursor: not-allowed;
    }
    .step-dots {
        display: flex;
        justify-content: space-between;
        margin-bottom: 0.5rem;
    }
    .step-dot {
        width: 2rem;
        height: 2rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        background: #334155;
        color: #94a3b8;
        font-weight: 600;
    }
    .step-dot.reached {
        background: linear-gradient(90deg, #0ea5e9, #d946ef);
        color: #fff;
    }
    .progress-track {
        height: 0.5rem;
        border-radius: 9999px;
        background: #334155;
        margin-bottom: 1.5rem;
    }
    .progress-fill {
        height: 100%;
        border-radius: 9999px;
        background: linear-gradient(90deg, #0ea5e9, #d946ef);
        transition: width 0.3s;
    }
    .form-row {
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        margin-bottom: 1rem;
    }
    .form-row input, .form-row select, .form-row textarea {
        padding: 0.75rem 1rem;
        background: #1e293b;
        border: 1px solid #475569;
        border-radius: 0.5rem;
        color: #fff;
    }
    .form-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 0 1rem;
    }
    .form-error {
        color: #f87171;
        font-size: 0.875rem;
        margin-top: 0.5rem;
    }
    .modal-nav {
        display: flex;
        justify-content: space-between;
        margin-top: 2rem;
    }
    .modal-primary {
        margin-left: auto;
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 0.5rem;
        font-weight: 600;
        color: #fff;
        background: linear-gradient(90deg, #0ea5e9, #d946ef);
        cursor: pointer;
    }
    .modal-primary:disabled {
        opacity: 0.5;
    }
    .modal-secondary {
        padding: 0.75rem 1.5rem;
        background: none;
        border: none;
        color: #cbd5e1;
        cursor: pointer;
    }
    .modal-success {
        text-align: center;
        padding: 2rem 0;
    }
    .success-check {
        font-size: 3rem;
        color: #4ade80;
    }
    .spinner {
        display: inline-block;
        width: 1rem;
        height: 1rem;
        border: 2px solid #fff;
        border-top-color: transparent;
        border-radius: 50%;
        animation: spin 1s linear infinite;
        margin-right: 0.5rem;
    }
    @keyframes spin {
        to { transform: rotate(360deg); }
    }
    @keyframes modal-fade {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes modal-pop {
        from { opacity: 0; transform: scale(0.8) translateY(50px); }
        to { opacity: 1; transform: scale(1) translateY(0); }
    }
"#;
