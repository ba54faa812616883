use leptos::*;

use crate::content::{SECTION_PROCESS, SITE};
use crate::theme::{stagger_style, Theme, REVEAL};

#[component]
pub fn Process(theme: Theme) -> impl IntoView {
    let palette = theme.palette();

    view! {
        <section id=SECTION_PROCESS class=palette.process_section>
            <div class="absolute inset-0 opacity-10">
                <img src=SITE.process_image_url alt="Процесс копчения" class="w-full h-full object-cover"/>
            </div>

            <div class="container mx-auto relative z-10">
                <h2 class="text-5xl md:text-6xl font-black text-white text-center mb-4">
                    "Технология " <span class=palette.accent>"копчения"</span>
                </h2>
                <p class=format!("text-xl mb-16 max-w-2xl mx-auto {}", palette.process_body)>"Каждый этап контролируется мастерами с многолетним опытом"</p>

                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    {SITE
                        .process
                        .iter()
                        .enumerate()
                        .map(|(index, step)| view! {
                            <div class=format!("{} {}", palette.process_card, REVEAL) style=stagger_style(index * 2)>
                                <div class=palette.process_number>{step.number}</div>
                                <h3 class="text-2xl font-bold text-white mb-4 text-center">{step.title}</h3>
                                <p class=palette.process_body>{step.body}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
