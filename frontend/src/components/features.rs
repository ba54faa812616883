use leptos::*;

use crate::content::{SECTION_FEATURES, SITE};
use crate::theme::{stagger_style, Theme, REVEAL};

#[component]
pub fn Features(theme: Theme) -> impl IntoView {
    let palette = theme.palette();

    view! {
        <section id=SECTION_FEATURES class=palette.section>
            <div class="container mx-auto">
                <h2 class=palette.heading>
                    "Почему " <span class=palette.accent>"выбирают нас?"</span>
                </h2>
                <p class=palette.lead>"Качество, проверенное временем и тысячами довольных клиентов"</p>

                <div class="grid md:grid-cols-4 gap-8">
                    {SITE
                        .features
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! {
                            <div class=format!("{} {}", palette.card, REVEAL) style=stagger_style(index)>
                                <div class=palette.icon_badge>{feature.icon}</div>
                                <h3 class=palette.card_title>{feature.title}</h3>
                                <p class=palette.card_body>{feature.body}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
