use std::rc::Rc;

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use wasm_bindgen_futures::spawn_local;
use log::{info, warn};

use crate::components::accordion::FaqList;
use crate::config;
use crate::data::{BUDGET_OPTIONS, CONTACT_CARDS, CONTACT_SUBTITLE, FAQ, SITE, TIMELINE_OPTIONS};
use crate::intake::{ContactForm, Field, FormKind, SubmitRefused, SubmitStatus};
use crate::webhook::{self, WebhookError, WebhookPayload};

pub enum ContactAction {
    Edit(Field, String),
    Switch(FormKind),
    Begin,
    Finish(Result<(), WebhookError>),
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.edit(field, value),
            ContactAction::Switch(kind) => next.switch_kind(kind),
            ContactAction::Begin => {
                if !next.mark_submitting() {
                    warn!("Contact form was already submitting");
                }
            }
            ContactAction::Finish(outcome) => next.finish(outcome),
        }
        next.into()
    }
}

// Inputs are bound to draft fields through their `name` attribute.
fn dispatch_edit(dispatcher: &UseReducerDispatcher<ContactForm>, name: &str, value: String) {
    match Field::from_key(name) {
        Some(field) => dispatcher.dispatch(ContactAction::Edit(field, value)),
        None => warn!("Ignoring input for unknown contact field {:?}", name),
    }
}

fn input_callback(form: &UseReducerHandle<ContactForm>) -> Callback<InputEvent> {
    let dispatcher = form.dispatcher();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        dispatch_edit(&dispatcher, &input.name(), input.value());
    })
}

fn select_callback(form: &UseReducerHandle<ContactForm>) -> Callback<Event> {
    let dispatcher = form.dispatcher();
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        dispatch_edit(&dispatcher, &select.name(), select.value());
    })
}

fn select_options(options: &[(&'static str, &'static str)], current: &str) -> Html {
    html! {
        <>
            <option value="" selected={current.is_empty()}>{"Select..."}</option>
            {
                for options.iter().map(|(code, label)| html! {
                    <option value={*code} selected={current == *code}>{*label}</option>
                })
            }
        </>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(|| ContactForm::new(FormKind::Project));
    let submitting = form.is_submitting();

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let mut snapshot = (*form).clone();
            let embed = match snapshot.begin_submit(webhook::now_timestamp()) {
                Ok(embed) => embed,
                Err(SubmitRefused::AlreadySubmitting) => return,
                Err(SubmitRefused::MissingFields(fields)) => {
                    warn!("Contact form missing required fields: {:?}", fields);
                    return;
                }
            };

            info!("Submitting {} form", snapshot.kind.label());
            form.dispatch(ContactAction::Begin);

            let dispatcher = form.dispatcher();
            spawn_local(async move {
                let payload = WebhookPayload::single(embed);
                let outcome = webhook::send(config::contact_webhook_url(), &payload).await;
                dispatcher.dispatch(ContactAction::Finish(outcome));
            });
        })
    };

    let switch_to = |kind: FormKind| {
        let dispatcher = form.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ContactAction::Switch(kind)))
    };

    let onmessage = {
        let dispatcher = form.dispatcher();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            dispatch_edit(&dispatcher, &area.name(), area.value());
        })
    };

    let is_project = form.kind == FormKind::Project;
    let draft = &form.draft;

    html! {
        <div class="contact-page">
            <section class="page-header">
                <div class="container">
                    <h1 class="section-title">
                        {"Get In "}<span class="byte-glow">{"Touch"}</span>
                    </h1>
                    <p class="page-subtitle">{CONTACT_SUBTITLE}</p>
                </div>
            </section>

            <section class="contact-info-section">
                <div class="container">
                    <div class="contact-cards">
                        {
                            for CONTACT_CARDS.iter().filter(|card| !card.value.trim().is_empty()).map(|card| html! {
                                <div class="contact-card">
                                    <div class="contact-icon">
                                        <i class={card.icon_class}></i>
                                    </div>
                                    <h3>{card.title}</h3>
                                    <p class="contact-value">{card.value}</p>
                                    <p class="contact-note">{card.note}</p>
                                </div>
                            })
                        }
                    </div>
                </div>
            </section>

            <section class="contact-form-section">
                <div class="container">
                    <div class="form-toggle">
                        {
                            for [FormKind::Project, FormKind::General].into_iter().map(|kind| html! {
                                <button
                                    type="button"
                                    class={classes!("toggle-btn", (form.kind == kind).then(|| "active"))}
                                    onclick={switch_to(kind)}
                                    disabled={submitting}
                                >
                                    {kind.label()}
                                </button>
                            })
                        }
                    </div>

                    <form class="contact-form" {onsubmit}>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="name">{"Name *"}</label>
                                <input
                                    type="text"
                                    id="name"
                                    name={Field::Name.key()}
                                    value={draft.name.clone()}
                                    oninput={input_callback(&form)}
                                    required=true
                                    disabled={submitting}
                                />
                            </div>
                            <div class="form-group">
                                <label for="email">{"Email *"}</label>
                                <input
                                    type="email"
                                    id="email"
                                    name={Field::Email.key()}
                                    value={draft.email.clone()}
                                    oninput={input_callback(&form)}
                                    required=true
                                    disabled={submitting}
                                />
                            </div>
                        </div>

                        if is_project {
                            <div class="form-group">
                                <label for="company">{"Company"}</label>
                                <input
                                    type="text"
                                    id="company"
                                    name={Field::Company.key()}
                                    value={draft.company.clone()}
                                    oninput={input_callback(&form)}
                                    disabled={submitting}
                                />
                            </div>
                            <div class="form-row">
                                <div class="form-group">
                                    <label for="budget">{"Budget"}</label>
                                    <select
                                        id="budget"
                                        name={Field::Budget.key()}
                                        onchange={select_callback(&form)}
                                        disabled={submitting}
                                    >
                                        {select_options(&BUDGET_OPTIONS, &draft.budget)}
                                    </select>
                                </div>
                                <div class="form-group">
                                    <label for="timeline">{"Timeline"}</label>
                                    <select
                                        id="timeline"
                                        name={Field::Timeline.key()}
                                        onchange={select_callback(&form)}
                                        disabled={submitting}
                                    >
                                        {select_options(&TIMELINE_OPTIONS, &draft.timeline)}
                                    </select>
                                </div>
                            </div>
                        }

                        <div class="form-group">
                            <label for="message">
                                {if is_project { "Project Description *" } else { "Message *" }}
                            </label>
                            <textarea
                                id="message"
                                name={Field::Message.key()}
                                rows="6"
                                value={draft.message.clone()}
                                oninput={onmessage}
                                required=true
                                disabled={submitting}
                            />
                        </div>

                        <button type="submit" class="btn btn-primary submit-btn" disabled={submitting}>
                            <span class="btn-glow"></span>
                            if submitting {
                                <i class="fas fa-spinner fa-spin"></i>{" Sending..."}
                            } else {
                                {if is_project { "Send Project Request" } else { "Send Message" }}
                            }
                        </button>

                        {
                            match form.status {
                                SubmitStatus::Success => html! {
                                    <div class="alert alert-success">
                                        <i class="fas fa-check-circle"></i>
                                        {" Thank you! Your message has been sent. We'll get back to you soon."}
                                    </div>
                                },
                                SubmitStatus::Error => html! {
                                    <div class="alert alert-error">
                                        <i class="fas fa-exclamation-circle"></i>
                                        {format!(" Something went wrong. Please try again or email us at {}.", SITE.contact_email)}
                                    </div>
                                },
                                SubmitStatus::Idle | SubmitStatus::Submitting => html! {},
                            }
                        }
                    </form>
                </div>
            </section>

            <section class="faq-section">
                <div class="container">
                    <h2 class="section-subtitle">{"Frequently Asked Questions"}</h2>
                    <FaqList items={&FAQ[..]} />
                </div>
            </section>
            <style>
                {r#"
                .contact-cards {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .contact-card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    border-radius: 12px;
                    padding: 2rem;
                    text-align: center;
                }
                .contact-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }
                .contact-value {
                    color: #fff;
                    font-weight: 600;
                }
                .contact-note {
                    color: #888;
                    font-size: 0.9rem;
                }
                .form-toggle {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 2rem;
                }
                .toggle-btn {
                    padding: 0.7rem 1.5rem;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: transparent;
                    color: #ccc;
                    cursor: pointer;
                }
                .toggle-btn.active {
                    background: #fff;
                    color: #000;
                }
                .contact-form {
                    max-width: 720px;
                    margin: 0 auto;
                }
                .submit-btn {
                    width: 100%;
                    margin-top: 1rem;
                }
                .faq-section {
                    padding: 4rem 0;
                }
                "#}
            </style>
        </div>
    }
}
