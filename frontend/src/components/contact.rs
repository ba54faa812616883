//! Contact section: contact details and the request form.
//!
//! The form posts to the Web3Forms relay through [`use_form_handler`]. While a
//! request is in flight the submit button is disabled and further submit
//! events are ignored, so at most one request is outstanding.

use leptos::*;
use web_sys::HtmlFormElement;

use crate::config::RelayConfig;
use crate::content::{SECTION_CONTACT, SITE};
use crate::services::{run_submission, SubmissionStatus, Web3FormsRelay};
use crate::theme::{Theme, ENTER};

/// Reactive handle on the form's [`SubmissionStatus`].
#[derive(Clone, Copy)]
pub struct FormHandler {
    pub status: RwSignal<SubmissionStatus>,
}

pub fn use_form_handler() -> FormHandler {
    FormHandler {
        status: create_rw_signal(SubmissionStatus::default()),
    }
}

impl FormHandler {
    /// Send the form's current values. The caller has already prevented the
    /// browser's own submission.
    pub fn submit(self, form: HtmlFormElement) {
        if !self.status.try_update(claim).unwrap_or(false) {
            log::debug!("Submission already in flight, ignoring");
            return;
        }

        spawn_local(async move {
            let config = RelayConfig::resolve();
            let relay = config.as_ref().map(Web3FormsRelay::new).unwrap_or_default();
            let outcome = run_submission(&form, config, &relay).await;
            self.status.update(|status| {
                status.resolve(outcome);
            });
        });
    }

    /// Back to the empty form after a success or an error.
    pub fn reset(self) {
        self.status.update(SubmissionStatus::reset);
    }
}

/// Enter `Submitting` unless a request is already in flight.
fn claim(status: &mut SubmissionStatus) -> bool {
    if status.is_submitting() {
        return false;
    }
    status.begin();
    true
}

#[component]
pub fn ContactSection(theme: Theme) -> impl IntoView {
    let palette = theme.palette();
    let contacts = &SITE.contacts;

    view! {
        <section id=SECTION_CONTACT class=palette.section_alt>
            <div class="container mx-auto max-w-4xl">
                <h2 class=palette.heading>
                    "Свяжитесь " <span class=palette.accent>"с нами"</span>
                </h2>
                <p class=palette.lead>"Оставьте заявку и мы перезвоним в течение 15 минут"</p>

                <div class="grid md:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <ContactPoint theme=theme icon="📞" title="Телефон" note=contacts.phone_hours>
                            <a href=contacts.phone_href class=palette.contact_link>{contacts.phone_display}</a>
                        </ContactPoint>
                        <ContactPoint theme=theme icon="✉️" title="Email" note=contacts.email_note>
                            <a href=SITE.email_href() class=palette.contact_link>{contacts.email}</a>
                        </ContactPoint>
                        <ContactPoint theme=theme icon="📍" title="Адрес" note=contacts.pickup_hours>
                            <p class="text-lg font-semibold">{contacts.address}</p>
                        </ContactPoint>

                        <div class=palette.guarantee>
                            <h3 class=format!("{} flex items-center gap-2", palette.card_title)>
                                "🏆 Гарантия качества"
                            </h3>
                            <p class=palette.card_body>{SITE.guarantee}</p>
                        </div>
                    </div>

                    <div class=palette.form_card>
                        <ContactForm theme=theme/>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactPoint(
    theme: Theme,
    icon: &'static str,
    title: &'static str,
    note: &'static str,
    children: Children,
) -> impl IntoView {
    let palette = theme.palette();

    view! {
        <div class="flex items-start gap-4">
            <div class=format!("{} p-3 text-2xl", palette.logo_badge)>{icon}</div>
            <div>
                <h3 class=format!("{} mb-1", palette.card_title)>{title}</h3>
                {children()}
                <p class=palette.note>{note}</p>
            </div>
        </div>
    }
}

#[component]
pub fn ContactForm(theme: Theme) -> impl IntoView {
    let palette = theme.palette();
    let handler = use_form_handler();
    let status = handler.status;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let form: HtmlFormElement = event_target(&ev);
        handler.submit(form);
    };

    let success = move || {
        view! {
            <div class=format!("text-center py-8 {}", ENTER)>
                <div class="bg-green-500/20 w-20 h-20 rounded-full flex items-center justify-center mx-auto mb-6 text-4xl">
                    "✅"
                </div>
                <h3 class=palette.success_title>"Заявка отправлена!"</h3>
                <p class=format!("{} mb-8 max-w-md mx-auto", palette.card_body)>
                    "Спасибо за обращение! Мы свяжемся с вами в ближайшее время для уточнения деталей заказа."
                </p>
                <button class=palette.reset_link on:click=move |_| handler.reset()>
                    "Отправить ещё одну заявку"
                </button>
            </div>
        }
    };

    view! {
        <Show when=move || !status.with(SubmissionStatus::is_success) fallback=success>
            <form class=format!("space-y-5 {}", ENTER) on:submit=on_submit>
                <div>
                    <label class=palette.label for="contact-name">"Ваше имя"</label>
                    <input
                        id="contact-name"
                        type="text"
                        name="name"
                        placeholder="Иван Иванов"
                        required=true
                        class=palette.input
                    />
                </div>

                <div>
                    <label class=palette.label for="contact-phone">"Телефон"</label>
                    <input
                        id="contact-phone"
                        type="tel"
                        name="phone"
                        placeholder="+7 (900) 123-45-67"
                        required=true
                        class=palette.input
                    />
                </div>

                <div>
                    <label class=palette.label for="contact-email">"Email (необязательно)"</label>
                    <input
                        id="contact-email"
                        type="email"
                        name="email"
                        placeholder="ivan@example.com"
                        class=palette.input
                    />
                </div>

                <div>
                    <label class=palette.label for="contact-message">"Сообщение"</label>
                    <textarea
                        id="contact-message"
                        name="message"
                        placeholder="Что вас интересует?"
                        rows="4"
                        required=true
                        class=format!("{} resize-none", palette.input)
                    ></textarea>
                </div>

                <Show when=move || status.with(SubmissionStatus::is_error) fallback=|| view! {}>
                    <div class=format!("{} {}", palette.error_box, ENTER) role="alert">
                        {move || status.with(|s| s.error_message().to_string())}
                    </div>
                </Show>

                <button
                    type="submit"
                    class=palette.submit_button
                    disabled=move || status.with(SubmissionStatus::is_submitting)
                >
                    {move || if status.with(SubmissionStatus::is_submitting) {
                        view! {
                            <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                            "Отправка..."
                        }
                        .into_view()
                    } else {
                        view! { "✈️ Отправить заявку" }.into_view()
                    }}
                </button>
            </form>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_from_idle_and_error() {
        for mut status in [SubmissionStatus::Idle, SubmissionStatus::Failed { message: "x".into() }] {
            assert!(claim(&mut status));
            assert_eq!(status, SubmissionStatus::Submitting);
        }
    }

    #[test]
    fn test_claim_while_in_flight_is_ignored() {
        let mut status = SubmissionStatus::Submitting;
        assert!(!claim(&mut status));
        assert_eq!(status, SubmissionStatus::Submitting);
    }
}
