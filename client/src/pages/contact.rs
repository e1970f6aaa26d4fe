//! Contact page: company details, map, and the enquiry form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form is driven by [`ContactForm`]. Submitting validates locally, moves
//! the status to `Submitting`, then posts to the server relay; the response
//! settles the status to `Success` (fields cleared) or `Error` (fields kept).
//! The page sections fade in as one staggered reveal.

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::reveal::use_staggered_reveal;
use crate::content::company::{
    ADDRESS_LINES, BUSINESS_HOURS, EMAIL, MAP_EMBED_URL, PHONE_DISPLAY, PHONE_HREF, SOCIAL_LINKS,
};
use crate::state::contact::{ContactForm, Field, FormStatus};
use crate::state::reveal::reveal_class;

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Reveal delays for header, info card, map, and form.
const STAGE_DELAYS_MS: &[u32] = &[0, 300, 600, 900];
const STAGE_HEADER: usize = 0;
const STAGE_INFO: usize = 1;
const STAGE_MAP: usize = 2;
const STAGE_FORM: usize = 3;

const SUCCESS_MESSAGE: &str = "Thank you for your message! We'll get back to you soon.";

/// Label for the submit button in each status.
fn submit_label(status: &FormStatus) -> &'static str {
    if *status == FormStatus::Submitting { "Sending..." } else { "Send Message" }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let container = NodeRef::<Div>::new();
    let stagger = use_staggered_reveal(container, STAGE_DELAYS_MS);
    let stage_class = move |base: &'static str, stage: usize| {
        move || format!("{base} {}", reveal_class(stagger.with(|s| s.is_stage_revealed(stage))))
    };

    view! {
        <section class="contact">
            <div class="contact__container" node_ref=container>
                <header class=stage_class("contact__header", STAGE_HEADER)>
                    <span class="section-eyebrow">"Get In Touch"</span>
                    <h1 class="section-title">"Contact Us"</h1>
                    <p class="section-lead">
                        "Have a question about our products or want to discuss a supply contract? Our team is ready to help."
                    </p>
                </header>

                <div class="contact__grid">
                    <div class=stage_class("contact__info", STAGE_INFO)>
                        <ContactInfo />
                    </div>
                    <div class=stage_class("contact__map", STAGE_MAP)>
                        <iframe
                            src=MAP_EMBED_URL
                            title="Office location"
                            class="contact__map-frame"
                            {..::leptos::attr::loading("lazy")}
                            referrerpolicy="no-referrer-when-downgrade"
                            allowfullscreen=true
                        ></iframe>
                    </div>
                </div>

                <div class=stage_class("contact__form-wrap", STAGE_FORM)>
                    <ContactFormPanel />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <div class="contact-card">
            <h2 class="contact-card__title">"Contact Information"</h2>

            <div class="contact-card__row">
                <h3 class="contact-card__label">"Address"</h3>
                <address class="contact-card__value">
                    {ADDRESS_LINES.iter().map(|line| view! { <span>{*line}</span> }).collect_view()}
                </address>
            </div>

            <div class="contact-card__row">
                <h3 class="contact-card__label">"Phone"</h3>
                <a href=PHONE_HREF class="contact-card__value">{PHONE_DISPLAY}</a>
            </div>

            <div class="contact-card__row">
                <h3 class="contact-card__label">"Email"</h3>
                <a href=format!("mailto:{EMAIL}") class="contact-card__value">{EMAIL}</a>
            </div>

            <div class="contact-card__row">
                <h3 class="contact-card__label">"Business Hours"</h3>
                <ul class="contact-card__value">
                    {BUSINESS_HOURS.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
                </ul>
            </div>

            <ul class="contact-card__social">
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href aria-label=link.name>{link.name}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ContactFormPanel() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let notice = RwSignal::new(None::<String>);

    let on_input = move |ev: leptos::ev::Event| {
        let name = event_target_name(&ev);
        let Some(field) = Field::from_name(&name) else {
            return;
        };
        form.update(|f| f.set_field(field, event_target_value(&ev)));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut outcome = None;
        form.update(|f| outcome = Some(f.begin_submit()));
        let request = match outcome {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                notice.set(Some(e.to_string()));
                return;
            }
            None => return,
        };
        notice.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_contact(&request).await;
            if let Ok(reference) = &result {
                leptos::logging::log!("contact submission accepted: {reference}");
            }
            form.try_update(|f| f.finish(result.map(|_| ())));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let value_of = move |field: Field| move || form.with(|f| f.fields.get(field).to_owned());
    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <form class="contact-form" on:submit=on_submit novalidate=true>
            <h2 class="contact-form__title">"Send Us a Message"</h2>

            <div class="contact-form__row">
                <label class="contact-form__field">
                    <span>"Full Name *"</span>
                    <input
                        type="text"
                        name="name"
                        required=true
                        autocomplete="name"
                        prop:value=value_of(Field::Name)
                        on:input=on_input
                    />
                </label>
                <label class="contact-form__field">
                    <span>"Email Address *"</span>
                    <input
                        type="email"
                        name="email"
                        required=true
                        autocomplete="email"
                        prop:value=value_of(Field::Email)
                        on:input=on_input
                    />
                </label>
            </div>

            <label class="contact-form__field">
                <span>"Phone Number"</span>
                <input type="tel" name="phone" autocomplete="tel" prop:value=value_of(Field::Phone) on:input=on_input />
            </label>

            <label class="contact-form__field">
                <span>"Message *"</span>
                <textarea name="message" rows="5" required=true prop:value=value_of(Field::Message) on:input=on_input></textarea>
            </label>

            {move || notice.get().map(|text| view! { <p class="contact-form__notice" role="alert">{text}</p> })}

            {move || match form.with(|f| f.status.clone()) {
                FormStatus::Success => {
                    Some(view! { <p class="contact-form__status contact-form__status--success" role="status">{SUCCESS_MESSAGE}</p> }.into_any())
                }
                FormStatus::Error(message) => {
                    Some(view! { <p class="contact-form__status contact-form__status--error" role="alert">{message}</p> }.into_any())
                }
                FormStatus::Idle | FormStatus::Submitting => None,
            }}

            <button type="submit" class="btn btn--primary contact-form__submit" disabled=submitting>
                {move || form.with(|f| submit_label(&f.status))}
            </button>
        </form>
    }
}

/// `name` attribute of the input that fired `ev`.
fn event_target_name(ev: &leptos::ev::Event) -> String {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        ev.target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.get_attribute("name"))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
        String::new()
    }
}
