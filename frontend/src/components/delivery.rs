//! Delivery and payment terms.

use leptos::*;

use crate::content::{TermsBlock, SECTION_DELIVERY, SITE};
use crate::theme::{Theme, REVEAL};

#[component]
pub fn Delivery(theme: Theme) -> impl IntoView {
    let palette = theme.palette();

    view! {
        <section id=SECTION_DELIVERY class=palette.section>
            <div class="container mx-auto max-w-4xl">
                <h2 class=palette.heading>
                    "Доставка " <span class=palette.accent>"и оплата"</span>
                </h2>
                <p class=palette.lead>"Удобные условия для вашего комфорта"</p>

                <div class="grid md:grid-cols-2 gap-8">
                    <TermsCard theme=theme block=SITE.delivery/>
                    <TermsCard theme=theme block=SITE.payment/>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TermsCard(theme: Theme, block: TermsBlock) -> impl IntoView {
    let palette = theme.palette();

    view! {
        <div class=format!("{} {}", palette.terms_card, REVEAL)>
            <div class=palette.terms_icon>{block.icon}</div>
            <h3 class=palette.card_title>{block.title}</h3>
            <ul class=palette.terms_list>
                {block
                    .items
                    .iter()
                    .map(|term| view! {
                        <li class="flex items-start gap-3">
                            <span class="flex-shrink-0">"⭐"</span>
                            <span><strong>{term.lead}</strong>{term.rest}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
