use leptos::*;

use crate::content::{SECTION_CONTACT, SITE};
use crate::services::{scroll_to_section, DomViewport};
use crate::theme::{Theme, ENTER};

#[component]
pub fn Header(theme: Theme) -> impl IntoView {
    let palette = theme.palette();
    let (menu_open, set_menu_open) = create_signal(false);

    // Jump to a section, closing the mobile menu once it is found
    let go = move |target: &'static str| {
        scroll_to_section(&DomViewport, target, move || set_menu_open.set(false));
    };

    let nav_buttons = move || {
        theme
            .nav()
            .iter()
            .map(|item| {
                let target = item.target;
                view! {
                    <button class=palette.nav_link on:click=move |_| go(target)>
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class=palette.header>
            <nav class="container mx-auto px-6 py-4 flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <div class=palette.logo_badge>"👨‍🍳"</div>
                    <span class=palette.brand>{SITE.brand}</span>
                </div>

                <div class="hidden md:flex space-x-8">{nav_buttons()}</div>

                <button
                    class=format!("hidden md:block px-6 py-2.5 {}", palette.primary_button)
                    on:click=move |_| go(SECTION_CONTACT)
                >
                    {SITE.order_label}
                </button>

                <button
                    class=palette.menu_toggle
                    aria-label="Меню"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>

            <Show when=move || menu_open.get() fallback=|| view! {}>
                <div class=format!("{} {}", palette.mobile_menu, ENTER)>
                    <div class="container mx-auto px-6 py-4 flex flex-col space-y-4">
                        {nav_buttons()}
                    </div>
                </div>
            </Show>
        </header>
    }
}
