use std::collections::HashSet;

use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::config::use_site_config;
use crate::contact::{needs_attention, validate, ContactFields, ContactSubmission, Field};
use crate::phone::format_phone;

const SERVICE_TYPES: [(&str, &str); 5] = [
    ("", "Velg tjeneste"),
    ("bad", "Baderom"),
    ("kjokken", "Kjøkken"),
    ("varme", "Varme og varmepumpe"),
    ("reparasjon", "Reparasjon og lekkasje"),
];

/// Current value of whichever form control fired the event.
fn control_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn report_submission(submission: &ContactSubmission) {
    match serde_wasm_bindgen::to_value(submission) {
        Ok(record) => gloo_console::log!("Form submitted:", record),
        Err(_) => info!(
            "Form submitted: {}",
            serde_json::to_string(submission).unwrap_or_default()
        ),
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let config = use_site_config();
    let fields = use_state(ContactFields::default);
    let flagged = use_state(HashSet::<Field>::new);
    let submitted = use_state_eq(|| false);
    let success_ref = use_node_ref();

    {
        let success_ref = success_ref.clone();
        use_effect_with_deps(
            move |submitted: &bool| {
                if *submitted {
                    if let Some(panel) = success_ref.cast::<Element>() {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Center);
                        panel.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                }
                || ()
            },
            *submitted,
        );
    }

    let on_value = |field: Field| {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let mut next = (*fields).clone();
            next.set(field, control_value(&e));
            fields.set(next);
        })
    };

    let on_phone = {
        let fields = fields.clone();
        let max_digits = config.phone_max_digits;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let formatted = format_phone(&input.value(), max_digits);
            input.set_value(&formatted);
            let mut next = (*fields).clone();
            next.phone = formatted;
            fields.set(next);
        })
    };

    let on_site_visit = {
        let fields = fields.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*fields).clone();
            next.site_visit = input.checked();
            fields.set(next);
        })
    };

    let on_blur = |field: Field| {
        let flagged = flagged.clone();
        Callback::from(move |e: FocusEvent| {
            let mut next = (*flagged).clone();
            if needs_attention(field.is_required(), &control_value(&e)) {
                next.insert(field);
            } else {
                next.remove(&field);
            }
            flagged.set(next);
        })
    };

    let on_focus = |field: Field| {
        let flagged = flagged.clone();
        Callback::from(move |_: FocusEvent| {
            if flagged.contains(&field) {
                let mut next = (*flagged).clone();
                next.remove(&field);
                flagged.set(next);
            }
        })
    };

    let onsubmit = {
        let fields = fields.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate(&fields) {
                Ok(submission) => {
                    report_submission(&submission);
                    submitted.set(true);
                }
                Err(err) => {
                    warn!("Contact form rejected: {:?}", err);
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&err.to_string());
                    }
                }
            }
        })
    };

    let border = |field: Field| flagged.contains(&field).then_some("border-color: var(--error)");

    let text_input = |field: Field, label: &'static str, kind: &'static str| {
        html! {
            <div class="form-group">
                <label for={field.id()}>
                    {label}
                    if field.is_required() { <span class="required">{" *"}</span> }
                </label>
                <input
                    type={kind}
                    id={field.id()}
                    name={field.id()}
                    class="form-input"
                    required={field.is_required()}
                    value={fields.value(field).to_string()}
                    style={border(field)}
                    oninput={on_value(field).reform(|e: InputEvent| Event::from(e))}
                    onblur={on_blur(field)}
                    onfocus={on_focus(field)}
                />
            </div>
        }
    };

    html! {
        <>
            <form
                id="contact-form"
                class="contact-form"
                novalidate=true
                style={(*submitted).then_some("display: none")}
                {onsubmit}
            >
                <div class="form-row">
                    { text_input(Field::Name, "Navn", "text") }
                    { text_input(Field::Email, "E-post", "email") }
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for={Field::Phone.id()}>
                            {"Telefon"}<span class="required">{" *"}</span>
                        </label>
                        <input
                            type="tel"
                            id={Field::Phone.id()}
                            name={Field::Phone.id()}
                            class="form-input"
                            required=true
                            placeholder="123 45 678"
                            value={fields.phone.clone()}
                            style={border(Field::Phone)}
                            oninput={on_phone}
                            onblur={on_blur(Field::Phone)}
                            onfocus={on_focus(Field::Phone)}
                        />
                    </div>
                    { text_input(Field::Address, "Adresse", "text") }
                </div>
                <div class="form-group">
                    <label for={Field::ServiceType.id()}>{"Type oppdrag"}</label>
                    <select
                        id={Field::ServiceType.id()}
                        name={Field::ServiceType.id()}
                        class="form-select"
                        style={border(Field::ServiceType)}
                        onchange={on_value(Field::ServiceType)}
                        onblur={on_blur(Field::ServiceType)}
                        onfocus={on_focus(Field::ServiceType)}
                    >
                        { for SERVICE_TYPES.iter().map(|(value, label)| html! {
                            <option value={*value} selected={fields.service_type == *value}>{*label}</option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label for={Field::Message.id()}>
                        {"Beskriv oppdraget"}<span class="required">{" *"}</span>
                    </label>
                    <textarea
                        id={Field::Message.id()}
                        name={Field::Message.id()}
                        class="form-textarea"
                        rows="5"
                        required=true
                        value={fields.message.clone()}
                        style={border(Field::Message)}
                        oninput={on_value(Field::Message).reform(|e: InputEvent| Event::from(e))}
                        onblur={on_blur(Field::Message)}
                        onfocus={on_focus(Field::Message)}
                    />
                </div>
                <label class="form-checkbox" for="site-visit">
                    <input
                        type="checkbox"
                        id="site-visit"
                        name="site-visit"
                        checked={fields.site_visit}
                        onchange={on_site_visit}
                    />
                    {"Jeg ønsker befaring"}
                </label>
                <button type="submit" class="btn btn-primary btn-block">{"Send forespørsel"}</button>
            </form>
            <div
                id="form-success"
                ref={success_ref}
                class={classes!("form-success", (*submitted).then_some("show"))}
            >
                <h3>{"Takk for henvendelsen!"}</h3>
                <p>{"Vi tar kontakt med deg så snart som mulig, normalt innen én arbeidsdag."}</p>
            </div>
        </>
    }
}
