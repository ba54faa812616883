//! Hero section component

use leptos::*;

use crate::content::{SECTION_CONTACT, SECTION_PRODUCTS, SITE};
use crate::services::{scroll_to_section, DomViewport};
use crate::theme::Theme;

#[component]
pub fn Hero(theme: Theme) -> impl IntoView {
    let palette = theme.palette();
    let hero = &SITE.hero;

    view! {
        <section class="relative pt-32 pb-24 px-6 overflow-hidden">
            <div class="absolute inset-0 z-0">
                <img src=hero.image_url alt="Копчёные продукты" class="w-full h-full object-cover"/>
                <div class="absolute inset-0 bg-gradient-to-r from-black/80 via-black/60 to-black/40"></div>
            </div>

            <div class="relative z-10 container mx-auto">
                <div class="max-w-3xl">
                    <h1 class="text-6xl md:text-8xl font-black text-white mb-6 tracking-tight leading-tight">
                        {hero.title}
                        <br/>
                        <span class=palette.accent>{hero.title_accent}</span>
                    </h1>
                    <p class=palette.hero_tagline>{hero.tagline}</p>
                    <p class="text-xl text-gray-200 mb-10 leading-relaxed max-w-2xl">{hero.description}</p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <button
                            class=format!("px-10 py-5 text-lg flex items-center justify-center gap-2 {}", palette.primary_button)
                            on:click=move |_| scroll_to_section(&DomViewport, SECTION_PRODUCTS, || ())
                        >
                            {hero.primary_cta}
                            " ›"
                        </button>
                        <button
                            class="bg-white/10 hover:bg-white/20 text-white px-10 py-5 rounded-xl text-lg font-bold transition-all backdrop-blur-sm border-2 border-white/30 hover:border-white/50"
                            on:click=move |_| scroll_to_section(&DomViewport, SECTION_CONTACT, || ())
                        >
                            {hero.secondary_cta}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
