//! Product catalog: one grid per category.

use leptos::*;

use crate::content::{SECTION_CONTACT, SECTION_PRODUCTS, SITE};
use crate::services::{scroll_to_section, DomViewport};
use crate::theme::{stagger_style, Theme, REVEAL};
use crate::types::{Product, ProductCategory};

#[component]
pub fn Catalog(theme: Theme) -> impl IntoView {
    let palette = theme.palette();

    view! {
        <section id=SECTION_PRODUCTS class=palette.section_alt>
            <div class="container mx-auto">
                <h2 class=palette.heading>
                    "Наш " <span class=palette.accent>"ассортимент"</span>
                </h2>
                <p class=palette.lead>"Широкий выбор копчёной рыбы и мяса на любой вкус"</p>

                {SITE
                    .catalog
                    .iter()
                    .map(|category| view! { <CategoryGrid theme=theme category=*category/> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn CategoryGrid(theme: Theme, category: ProductCategory) -> impl IntoView {
    let palette = theme.palette();

    view! {
        <div class="mb-20 last:mb-0" data-category=category.key>
            <h3 class=palette.category_title>"📦 " {category.title}</h3>
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                {category
                    .products
                    .iter()
                    .enumerate()
                    .map(|(index, product)| view! {
                        <div class=REVEAL style=stagger_style(index)>
                            <ProductCard theme=theme product=*product/>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ProductCard(theme: Theme, product: Product) -> impl IntoView {
    let palette = theme.palette();

    view! {
        <div class=palette.product_card>
            <div class="relative h-56 overflow-hidden">
                <img
                    src=product.image_url
                    alt=product.name
                    class="w-full h-full object-cover transform hover:scale-110 transition-transform duration-500"
                />
                <div class=palette.price_tag>{product.price_label}</div>
            </div>
            <div class="p-6">
                <h4 class=format!("{} mb-3", palette.card_title)>{product.name}</h4>
                <p class=format!("{} mb-4", palette.card_body)>{product.description}</p>
                <button
                    class=format!("w-full py-3 {}", palette.primary_button)
                    on:click=move |_| {
                        log::debug!("Order requested for {}", product.name);
                        scroll_to_section(&DomViewport, SECTION_CONTACT, || ());
                    }
                >
                    {SITE.order_label}
                </button>
            </div>
        </div>
    }
}
