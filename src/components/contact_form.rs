use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use log::error;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::phone::{format_phone_number, is_complete};
use crate::contact::submission::{
    submit_contact, BrowserTransport, ContactForm as ContactFields, SubmitStatus, SUBJECTS,
};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let fields = use_state(ContactFields::default);
    let status = use_state(|| SubmitStatus::Idle);

    let update = |apply: fn(&mut ContactFields, String)| {
        let fields = fields.clone();
        Callback::from(move |value: String| {
            let mut next = (*fields).clone();
            apply(&mut next, value);
            fields.set(next);
        })
    };

    let on_name = update(|f, v| f.name = v);
    let on_email = update(|f, v| f.email = v);
    let on_phone = update(|f, v| f.phone = format_phone_number(&v));
    let on_subject = update(|f, v| f.subject = v);
    let on_message = update(|f, v| f.message = v);

    let on_consent = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.consent = input.checked();
            fields.set(next);
        })
    };

    let on_honeypot = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.honeypot = input.checked();
            fields.set(next);
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Submitting {
                return;
            }
            status.set(SubmitStatus::Submitting);

            let form = (*fields).clone();
            let fields = fields.clone();
            let status = status.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = submit_contact(
                    &form,
                    &BrowserTransport,
                    config::get_webhook_url(),
                    Utc::now(),
                    |ms| TimeoutFuture::new(ms),
                )
                .await;

                match result {
                    Ok(()) => {
                        fields.set(ContactFields::default());
                        status.set(SubmitStatus::Success);
                    }
                    Err(e) => {
                        error!("Form submission error: {}", e);
                        status.set(SubmitStatus::Error);
                    }
                }
            });
        })
    };

    let submitting = *status == SubmitStatus::Submitting;
    let phone_incomplete = !fields.phone.is_empty() && !is_complete(&fields.phone);

    html! {
        <form class="contact-form" onsubmit={onsubmit}>
            <div class="honeypot" aria-hidden="true">
                <input
                    type="checkbox"
                    id="robot_check"
                    name="honeypot"
                    tabindex="-1"
                    autocomplete="off"
                    checked={fields.honeypot}
                    onchange={on_honeypot}
                />
                <label for="robot_check">{"I am not a robot"}</label>
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label for="name">{"Name *"}</label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        required={true}
                        placeholder="Jane Smith"
                        value={fields.name.clone()}
                        oninput={on_name.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
                    />
                </div>
                <div class="form-field">
                    <label for="email">{"Email *"}</label>
                    <input
                        type="email"
                        id="email"
                        name="email"
                        required={true}
                        placeholder="example@example.com"
                        value={fields.email.clone()}
                        oninput={on_email.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
                    />
                </div>
            </div>

            <div class="form-row">
                <div class="form-field">
                    <label for="phone">{"Phone *"}</label>
                    <input
                        type="tel"
                        id="phone"
                        name="phone"
                        required={true}
                        pattern={r"^\(\d{3}\) \d{3}-\d{4}$"}
                        class={classes!(phone_incomplete.then(|| "incomplete"))}
                        aria-invalid={phone_incomplete.to_string()}
                        placeholder="(123) 456-7890"
                        value={fields.phone.clone()}
                        oninput={on_phone.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value())}
                    />
                </div>
                <div class="form-field">
                    <label for="subject">{"Subject *"}</label>
                    <select
                        id="subject"
                        name="subject"
                        required={true}
                        onchange={on_subject.reform(|e: Event| e.target_unchecked_into::<HtmlSelectElement>().value())}
                    >
                        <option value="" selected={fields.subject.is_empty()}>{"Select a subject"}</option>
                        { SUBJECTS.iter().map(|subject| html! {
                            <option value={*subject} selected={fields.subject == *subject}>{*subject}</option>
                        }).collect::<Html>() }
                    </select>
                </div>
            </div>

            <div class="form-field">
                <label for="message">{"Message *"}</label>
                <textarea
                    id="message"
                    name="message"
                    required={true}
                    rows="3"
                    placeholder="I need..."
                    value={fields.message.clone()}
                    oninput={on_message.reform(|e: InputEvent| e.target_unchecked_into::<HtmlTextAreaElement>().value())}
                />
            </div>

            <div class="form-consent">
                <input
                    type="checkbox"
                    id="consent"
                    name="consent"
                    required={true}
                    checked={fields.consent}
                    onchange={on_consent}
                />
                <label for="consent">
                    {"I consent to receive SMS/calls from Centerline Aviation INC. Msg & data rates may apply. Reply STOP to opt-out. Not a condition of purchase. *"}
                </label>
            </div>

            {
                match *status {
                    SubmitStatus::Success => html! {
                        <div class="form-status success">
                            <p>{"Thank you! Your message has been sent. We'll get back to you soon."}</p>
                        </div>
                    },
                    SubmitStatus::Error => html! {
                        <div class="form-status error">
                            <p>{"There was an error sending your message. Please try again or call us directly."}</p>
                        </div>
                    },
                    _ => html! {},
                }
            }

            <button type="submit" class="cta-button" disabled={submitting}>
                <span>{ if submitting { "Sending..." } else { "Submit form" } }</span>
            </button>

            <style>
                {r#"
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-form .honeypot {
                    position: absolute;
                    left: -9999px;
                    width: 1px;
                    height: 1px;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .form-field label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #fff;
                    margin-bottom: 0.5rem;
                }
                .form-field input,
                .form-field select,
                .form-field textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    background: rgba(46, 46, 46, 0.5);
                    border: 1px solid rgba(46, 46, 46, 0.5);
                    color: #fff;
                    border-radius: 0.5rem;
                    outline: none;
                }
                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    border-color: #fff;
                }
                .form-field input.incomplete {
                    border-color: rgba(250, 204, 21, 0.6);
                }
                .form-field textarea {
                    resize: none;
                    min-height: 100px;
                }
                .form-consent {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.5rem;
                    font-size: 0.75rem;
                    color: #9ca3af;
                }
                .form-status {
                    padding: 1rem;
                    border-radius: 0.5rem;
                }
                .form-status.success {
                    background: rgba(20, 83, 45, 0.3);
                    border: 1px solid rgba(34, 197, 94, 0.5);
                    color: #86efac;
                }
                .form-status.error {
                    background: rgba(127, 29, 29, 0.3);
                    border: 1px solid rgba(239, 68, 68, 0.5);
                    color: #fca5a5;
                }
                .contact-form button[disabled] {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                @media (max-width: 768px) {
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </form>
    }
}
