//! Footer component

use leptos::*;

use crate::content::SITE;
use crate::services::{scroll_to_section, DomViewport};
use crate::theme::Theme;

#[component]
pub fn Footer(theme: Theme) -> impl IntoView {
    let palette = theme.palette();
    let contacts = &SITE.contacts;

    view! {
        <footer class=palette.footer>
            <div class="container mx-auto">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div>
                        <div class="flex items-center space-x-3 mb-4">
                            <div class=palette.logo_badge>"👨‍🍳"</div>
                            <span class="text-2xl font-black text-white">{SITE.brand}</span>
                        </div>
                        <p class=palette.footer_text>{SITE.brand_blurb}</p>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold text-white mb-4">"Навигация"</h3>
                        <div class="space-y-2">
                            {theme
                                .nav()
                                .iter()
                                .map(|item| {
                                    let target = item.target;
                                    view! {
                                        <button
                                            class=palette.footer_link
                                            on:click=move |_| scroll_to_section(&DomViewport, target, || ())
                                        >
                                            {item.label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold text-white mb-4">"Контакты"</h3>
                        <div class=format!("space-y-3 {}", palette.footer_text)>
                            <div class="flex items-center gap-2">
                                "📞 " <a href=contacts.phone_href class="hover:underline">{contacts.phone_display}</a>
                            </div>
                            <div class="flex items-center gap-2">
                                "✉️ " <a href=SITE.email_href() class="hover:underline">{contacts.email}</a>
                            </div>
                            <div class="flex items-center gap-2">"📍 " {contacts.address}</div>
                        </div>
                    </div>
                </div>

                <div class=palette.footer_rule>{SITE.copyright}</div>
            </div>
        </footer>
    }
}
