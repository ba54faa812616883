//! Visual themes.
//!
//! Both themes render the same [`SITE`](crate::content::SITE) content; a
//! theme only supplies Tailwind class strings and the navigation order.

use crate::content::{
    NavItem, SECTION_CONTACT, SECTION_DELIVERY, SECTION_FEATURES, SECTION_PROCESS,
    SECTION_PRODUCTS,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light page with amber/orange accents
    #[default]
    Amber,
    /// Dark slate page
    Slate,
}

impl Theme {
    /// Parse the `?theme=` query value. Unknown values fall back to the default.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("slate") | Some("dark") => Theme::Slate,
            Some("amber") | Some("light") | None => Theme::Amber,
            Some(other) => {
                log::warn!("Unknown theme '{}', using amber", other);
                Theme::Amber
            }
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Amber => &AMBER,
            Theme::Slate => &SLATE,
        }
    }

    /// Header, mobile menu and footer links.
    pub fn nav(self) -> &'static [NavItem] {
        match self {
            Theme::Amber => &AMBER_NAV,
            Theme::Slate => &SLATE_NAV,
        }
    }
}

/// Fade-and-rise entrance for cards; keyframes live in `index.html`.
pub const REVEAL: &str = "animate-reveal";

/// Short fade for elements swapped in place (mobile menu, form/success).
pub const ENTER: &str = "animate-enter";

/// Inline style delaying a card's entrance by its position in the grid.
pub fn stagger_style(index: usize) -> String {
    format!("animation-delay: {}ms", index * 100)
}

const AMBER_NAV: [NavItem; 4] = [
    NavItem { label: "Продукция", target: SECTION_PRODUCTS },
    NavItem { label: "Технология", target: SECTION_PROCESS },
    NavItem { label: "Доставка", target: SECTION_DELIVERY },
    NavItem { label: "Контакты", target: SECTION_CONTACT },
];

const SLATE_NAV: [NavItem; 4] = [
    NavItem { label: "Продукция", target: SECTION_PRODUCTS },
    NavItem { label: "Особенности", target: SECTION_FEATURES },
    NavItem { label: "Доставка", target: SECTION_DELIVERY },
    NavItem { label: "Контакты", target: SECTION_CONTACT },
];

/// Class strings for every styled element on the page.
#[derive(Debug, PartialEq, Eq)]
pub struct Palette {
    pub page: &'static str,
    // Header
    pub header: &'static str,
    pub logo_badge: &'static str,
    pub brand: &'static str,
    pub nav_link: &'static str,
    pub menu_toggle: &'static str,
    pub mobile_menu: &'static str,
    pub primary_button: &'static str,
    // Sections
    pub section: &'static str,
    pub section_alt: &'static str,
    pub heading: &'static str,
    pub accent: &'static str,
    pub lead: &'static str,
    pub hero_tagline: &'static str,
    pub card: &'static str,
    pub icon_badge: &'static str,
    pub card_title: &'static str,
    pub card_body: &'static str,
    // Catalog
    pub category_title: &'static str,
    pub product_card: &'static str,
    pub price_tag: &'static str,
    // Process
    pub process_section: &'static str,
    pub process_card: &'static str,
    pub process_number: &'static str,
    pub process_body: &'static str,
    // Delivery
    pub terms_card: &'static str,
    pub terms_icon: &'static str,
    pub terms_list: &'static str,
    // Contact
    pub contact_link: &'static str,
    pub note: &'static str,
    pub guarantee: &'static str,
    pub form_card: &'static str,
    pub label: &'static str,
    pub input: &'static str,
    pub error_box: &'static str,
    pub submit_button: &'static str,
    pub success_title: &'static str,
    pub reset_link: &'static str,
    // Footer
    pub footer: &'static str,
    pub footer_text: &'static str,
    pub footer_link: &'static str,
    pub footer_rule: &'static str,
}

pub static AMBER: Palette = Palette {
    page: "min-h-screen bg-gradient-to-b from-amber-50 via-orange-50 to-amber-50",
    header: "fixed top-0 w-full bg-white/95 backdrop-blur-md z-50 border-b border-amber-200 shadow-sm",
    logo_badge: "bg-gradient-to-br from-amber-600 to-orange-600 p-2 rounded-xl text-2xl leading-none",
    brand: "text-2xl font-black text-gray-900",
    nav_link: "text-gray-700 hover:text-amber-600 transition-colors font-semibold text-left",
    menu_toggle: "md:hidden text-gray-900 text-2xl",
    mobile_menu: "md:hidden bg-white border-t border-amber-200",
    primary_button: "bg-gradient-to-r from-amber-600 to-orange-600 hover:from-amber-700 hover:to-orange-700 text-white rounded-xl font-bold transition-all transform hover:scale-105 shadow-lg shadow-amber-600/30",
    section: "py-24 px-6 bg-white",
    section_alt: "py-24 px-6 bg-gradient-to-b from-white to-amber-50",
    heading: "text-5xl md:text-6xl font-black text-gray-900 text-center mb-4",
    accent: "text-transparent bg-clip-text bg-gradient-to-r from-amber-600 to-orange-600",
    lead: "text-xl text-gray-600 text-center mb-16 max-w-2xl mx-auto",
    hero_tagline: "text-2xl md:text-3xl text-amber-300 mb-6 font-bold",
    card: "bg-gradient-to-br from-amber-50 to-orange-50 p-8 rounded-2xl border-2 border-amber-200 hover:border-amber-400 transition-all transform hover:scale-105 hover:shadow-xl",
    icon_badge: "bg-gradient-to-br from-amber-600 to-orange-600 w-16 h-16 rounded-xl flex items-center justify-center mb-6 shadow-lg text-3xl",
    card_title: "text-2xl font-bold text-gray-900 mb-4",
    card_body: "text-gray-600 leading-relaxed",
    category_title: "text-4xl font-black text-gray-900 mb-10 flex items-center gap-3",
    product_card: "bg-white rounded-2xl overflow-hidden shadow-lg hover:shadow-2xl transition-all transform hover:scale-105 border-2 border-transparent hover:border-amber-400",
    price_tag: "absolute top-4 right-4 bg-amber-600 text-white px-4 py-2 rounded-full font-bold text-lg shadow-lg",
    process_section: "py-24 px-6 bg-gradient-to-br from-gray-900 via-amber-900 to-gray-900 relative overflow-hidden",
    process_card: "bg-white/10 backdrop-blur-md p-8 rounded-2xl border-2 border-amber-400/30 hover:border-amber-400 transition-all",
    process_number: "bg-gradient-to-br from-amber-500 to-orange-500 w-16 h-16 rounded-full flex items-center justify-center mb-6 mx-auto text-white font-black text-3xl shadow-xl",
    process_body: "text-amber-100 leading-relaxed text-center",
    terms_card: "bg-gradient-to-br from-amber-50 to-orange-50 p-8 rounded-2xl border-2 border-amber-200",
    terms_icon: "text-5xl mb-6",
    terms_list: "space-y-3 text-gray-700",
    contact_link: "text-lg text-amber-600 hover:text-amber-700 transition-colors font-semibold",
    note: "text-gray-600 text-sm mt-1",
    guarantee: "bg-gradient-to-br from-amber-100 to-orange-100 p-6 rounded-2xl border-2 border-amber-300 mt-8",
    form_card: "bg-white p-8 rounded-2xl shadow-xl border-2 border-amber-200",
    label: "block text-sm font-semibold text-gray-700 mb-2",
    input: "w-full px-4 py-3 bg-amber-50 border-2 border-amber-200 rounded-xl text-gray-900 placeholder-gray-500 focus:outline-none focus:border-amber-500 transition-colors",
    error_box: "text-red-600 text-sm bg-red-50 p-3 rounded-lg border border-red-200",
    submit_button: "w-full bg-gradient-to-r from-amber-600 to-orange-600 hover:from-amber-700 hover:to-orange-700 disabled:from-gray-400 disabled:to-gray-500 disabled:cursor-not-allowed text-white px-8 py-4 rounded-xl font-bold transition-all flex items-center justify-center gap-2 shadow-lg",
    success_title: "text-3xl font-bold text-gray-900 mb-4",
    reset_link: "text-amber-600 hover:text-amber-700 font-bold transition-colors text-lg",
    footer: "bg-gradient-to-br from-gray-900 via-amber-900 to-gray-900 py-12 px-6 border-t-4 border-amber-600",
    footer_text: "text-amber-200 leading-relaxed",
    footer_link: "block text-amber-200 hover:text-amber-400 transition-colors",
    footer_rule: "border-t border-amber-700/50 pt-8 text-center text-amber-300 text-sm",
};

pub static SLATE: Palette = Palette {
    page: "min-h-screen bg-slate-950 text-slate-100",
    header: "fixed top-0 w-full bg-slate-900/95 backdrop-blur-md z-50 border-b border-slate-800 shadow-sm",
    logo_badge: "bg-gradient-to-br from-orange-500 to-red-600 p-2 rounded-xl text-2xl leading-none",
    brand: "text-2xl font-black text-white",
    nav_link: "text-slate-300 hover:text-orange-400 transition-colors font-semibold text-left",
    menu_toggle: "md:hidden text-white text-2xl",
    mobile_menu: "md:hidden bg-slate-900 border-t border-slate-800",
    primary_button: "bg-gradient-to-r from-orange-500 to-red-600 hover:from-orange-600 hover:to-red-700 text-white rounded-xl font-bold transition-all transform hover:scale-105 shadow-lg shadow-orange-500/20",
    section: "py-24 px-6 bg-slate-950",
    section_alt: "py-24 px-6 bg-gradient-to-b from-slate-950 to-slate-900",
    heading: "text-5xl md:text-6xl font-black text-white text-center mb-4",
    accent: "text-transparent bg-clip-text bg-gradient-to-r from-orange-400 to-red-500",
    lead: "text-xl text-slate-400 text-center mb-16 max-w-2xl mx-auto",
    hero_tagline: "text-2xl md:text-3xl text-orange-300 mb-6 font-bold",
    card: "bg-slate-900 p-8 rounded-2xl border border-slate-800 hover:border-orange-500/60 transition-all transform hover:scale-105 hover:shadow-xl",
    icon_badge: "bg-gradient-to-br from-orange-500 to-red-600 w-16 h-16 rounded-xl flex items-center justify-center mb-6 shadow-lg text-3xl",
    card_title: "text-2xl font-bold text-white mb-4",
    card_body: "text-slate-400 leading-relaxed",
    category_title: "text-4xl font-black text-white mb-10 flex items-center gap-3",
    product_card: "bg-slate-900 rounded-2xl overflow-hidden shadow-lg hover:shadow-2xl transition-all transform hover:scale-105 border border-slate-800 hover:border-orange-500/60",
    price_tag: "absolute top-4 right-4 bg-orange-500 text-white px-4 py-2 rounded-full font-bold text-lg shadow-lg",
    process_section: "py-24 px-6 bg-gradient-to-br from-slate-900 via-slate-800 to-slate-900 relative overflow-hidden",
    process_card: "bg-slate-950/60 backdrop-blur-md p-8 rounded-2xl border border-slate-700 hover:border-orange-500 transition-all",
    process_number: "bg-gradient-to-br from-orange-500 to-red-600 w-16 h-16 rounded-full flex items-center justify-center mb-6 mx-auto text-white font-black text-3xl shadow-xl",
    process_body: "text-slate-300 leading-relaxed text-center",
    terms_card: "bg-slate-900 p-8 rounded-2xl border border-slate-800",
    terms_icon: "text-5xl mb-6",
    terms_list: "space-y-3 text-slate-300",
    contact_link: "text-lg text-orange-400 hover:text-orange-300 transition-colors font-semibold",
    note: "text-slate-500 text-sm mt-1",
    guarantee: "bg-slate-900 p-6 rounded-2xl border border-orange-500/40 mt-8",
    form_card: "bg-slate-900 p-8 rounded-2xl shadow-xl border border-slate-800",
    label: "block text-sm font-semibold text-slate-300 mb-2",
    input: "w-full px-4 py-3 bg-slate-950 border border-slate-700 rounded-xl text-white placeholder-slate-500 focus:outline-none focus:border-orange-500 transition-colors",
    error_box: "text-red-300 text-sm bg-red-950/60 p-3 rounded-lg border border-red-800",
    submit_button: "w-full bg-gradient-to-r from-orange-500 to-red-600 hover:from-orange-600 hover:to-red-700 disabled:from-slate-600 disabled:to-slate-700 disabled:cursor-not-allowed text-white px-8 py-4 rounded-xl font-bold transition-all flex items-center justify-center gap-2 shadow-lg",
    success_title: "text-3xl font-bold text-white mb-4",
    reset_link: "text-orange-400 hover:text-orange-300 font-bold transition-colors text-lg",
    footer: "bg-slate-900 py-12 px-6 border-t border-slate-800",
    footer_text: "text-slate-400 leading-relaxed",
    footer_link: "block text-slate-400 hover:text-orange-400 transition-colors",
    footer_rule: "border-t border-slate-800 pt-8 text-center text-slate-500 text-sm",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SECTIONS;

    #[test]
    fn test_from_query() {
        assert_eq!(Theme::from_query(None), Theme::Amber);
        assert_eq!(Theme::from_query(Some("slate")), Theme::Slate);
        assert_eq!(Theme::from_query(Some(" Dark ")), Theme::Slate);
        assert_eq!(Theme::from_query(Some("neon")), Theme::Amber);
    }

    #[test]
    fn test_nav_targets_exist_on_page() {
        for theme in [Theme::Amber, Theme::Slate] {
            for item in theme.nav() {
                assert!(SECTIONS.contains(&item.target), "{:?}: {}", theme, item.target);
            }
        }
    }

    #[test]
    fn test_second_nav_item_is_theme_dependent() {
        assert_eq!(Theme::Amber.nav()[1].target, SECTION_PROCESS);
        assert_eq!(Theme::Slate.nav()[1].target, SECTION_FEATURES);
        assert_eq!(Theme::Amber.nav()[1].label, "Технология");
        assert_eq!(Theme::Slate.nav()[1].label, "Особенности");
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Amber.palette(), Theme::Slate.palette());
    }

    #[test]
    fn test_stagger_style() {
        assert_eq!(stagger_style(0), "animation-delay: 0ms");
        assert_eq!(stagger_style(3), "animation-delay: 300ms");
    }
}
