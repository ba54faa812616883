//! Koptilnya - Landing page in Rust/Leptos
//!
//! A WebAssembly landing page for a smoked fish and meat workshop, with a
//! contact form relayed through Web3Forms.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation, mobile menu)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LandingPage                                                 │
//! │  ├── Hero                                                    │
//! │  ├── Features          #features                             │
//! │  ├── Catalog           #products                             │
//! │  ├── Process           #process                              │
//! │  ├── Delivery          #delivery                             │
//! │  └── ContactSection    #contact  (form → Web3Forms)          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Relay endpoint, access key resolution, messages
//! - [`types`] - Common types (Product, RelayOutcome, AppError, etc.)
//! - [`content`] - Page copy and catalog shared by both themes
//! - [`theme`] - Amber and slate palettes
//! - [`components`] - UI components (Header, Catalog, ContactSection, etc.)
//! - [`services`] - Form submission, relay client, scrolling

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod content;
pub mod theme;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Catalog
    Product, ProductCategory,
    // Form
    ContactFormInput, RelayOutcome, RelayResponse,
    // Errors
    AppError, AppResult,
};

// Theme
pub use theme::{Palette, Theme};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the app on `<body>`.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🐟 Koptilnya - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="ru"/>
        <Title text="Коптильня — копчёная рыба и мясо"/>
        <Router>
            <Routes>
                <Route path="/*any" view=LandingPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn LandingPage() -> impl IntoView {
    // ?theme=slate switches to the dark variant
    let query = use_query_map();
    let theme = query.with_untracked(|q| Theme::from_query(q.get("theme").map(String::as_str)));
    log::info!("🎨 Rendering {:?} theme", theme);

    view! {
        <div class=theme.palette().page>
            <Header theme=theme/>
            <main>
                <Hero theme=theme/>
                <Features theme=theme/>
                <Catalog theme=theme/>
                <Process theme=theme/>
                <Delivery theme=theme/>
                <ContactSection theme=theme/>
            </main>
            <Footer theme=theme/>
        </div>
    }
}
