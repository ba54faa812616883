//! Page copy and catalog shared by both themes.
//!
//! Everything the page shows lives in [`SITE`]; components only decide how
//! it looks.

use crate::types::{Product, ProductCategory};

// =============================================================================
// Section anchors
// =============================================================================

pub const SECTION_FEATURES: &str = "features";
pub const SECTION_PRODUCTS: &str = "products";
pub const SECTION_PROCESS: &str = "process";
pub const SECTION_DELIVERY: &str = "delivery";
pub const SECTION_CONTACT: &str = "contact";

/// Every anchor rendered on the page.
pub const SECTIONS: [&str; 5] = [
    SECTION_FEATURES,
    SECTION_PRODUCTS,
    SECTION_PROCESS,
    SECTION_DELIVERY,
    SECTION_CONTACT,
];

// =============================================================================
// Content types
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessStep {
    pub number: u8,
    pub title: &'static str,
    pub body: &'static str,
}

/// A bullet rendered as a bold lead followed by plain text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Term {
    pub lead: &'static str,
    pub rest: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TermsBlock {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'static [Term],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contacts {
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub phone_hours: &'static str,
    pub email: &'static str,
    pub email_note: &'static str,
    pub address: &'static str,
    pub pickup_hours: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub title_accent: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteContent {
    pub brand: &'static str,
    pub brand_blurb: &'static str,
    pub order_label: &'static str,
    pub hero: Hero,
    pub features: &'static [Feature],
    pub catalog: &'static [ProductCategory],
    pub process_image_url: &'static str,
    pub process: &'static [ProcessStep],
    pub delivery: TermsBlock,
    pub payment: TermsBlock,
    pub contacts: Contacts,
    pub guarantee: &'static str,
    pub copyright: &'static str,
}

// =============================================================================
// Catalog
// =============================================================================

const FISH: [Product; 4] = [
    Product {
        name: "Скумбрия копчёная",
        price_label: "450₽/кг",
        image_url: "https://images.unsplash.com/photo-1519708227418-c8fd9a32b7a2?w=800&q=80",
        description: "Горячего копчения, нежная и ароматная",
    },
    Product {
        name: "Сёмга копчёная",
        price_label: "1200₽/кг",
        image_url: "https://images.unsplash.com/photo-1580959375944-0b7b1b8b1e1f?w=800&q=80",
        description: "Холодного копчения, премиум качество",
    },
    Product {
        name: "Форель копчёная",
        price_label: "950₽/кг",
        image_url: "https://images.unsplash.com/photo-1534604973900-c43ab4c2e0ab?w=800&q=80",
        description: "Золотистая корочка, изысканный вкус",
    },
    Product {
        name: "Окунь копчёный",
        price_label: "380₽/кг",
        image_url: "https://images.unsplash.com/photo-1615141982883-c7ad0e69fd62?w=800&q=80",
        description: "Традиционный рецепт, натуральное дерево",
    },
];

const MEAT: [Product; 4] = [
    Product {
        name: "Грудинка копчёная",
        price_label: "650₽/кг",
        image_url: "https://images.unsplash.com/photo-1607623814075-e51df1bdc82f?w=800&q=80",
        description: "Сочная, с пряными травами",
    },
    Product {
        name: "Рёбрышки свиные",
        price_label: "550₽/кг",
        image_url: "https://images.unsplash.com/photo-1544025162-d76694265947?w=800&q=80",
        description: "Горячего копчения, с хрустящей корочкой",
    },
    Product {
        name: "Куриные крылья",
        price_label: "420₽/кг",
        image_url: "https://images.unsplash.com/photo-1527477396000-e27163b481c2?w=800&q=80",
        description: "Пикантный маринад, дымная нотка",
    },
    Product {
        name: "Колбаски домашние",
        price_label: "580₽/кг",
        image_url: "https://images.unsplash.com/photo-1599904575706-d8e8e4b5dae3?w=800&q=80",
        description: "Авторский рецепт, натуральные специи",
    },
];

// =============================================================================
// Site
// =============================================================================

pub static SITE: SiteContent = SiteContent {
    brand: "Коптильня",
    brand_blurb: "Копчёная рыба и мясо по традиционным рецептам. Натуральные продукты без химии и консервантов.",
    order_label: "Заказать",
    hero: Hero {
        title: "Копчёные",
        title_accent: "деликатесы",
        tagline: "Рыба и мясо по традиционным рецептам",
        description: "Используем только натуральное дерево и проверенные технологии копчения. \
                      Без химии и консервантов — только вкус и традиции.",
        image_url: "https://images.unsplash.com/photo-1544025162-d76694265947?w=1920&q=80",
        primary_cta: "Смотреть ассортимент",
        secondary_cta: "Связаться с нами",
    },
    features: &[
        Feature {
            icon: "🛡️",
            title: "100% натурально",
            body: "Только свежие продукты, без химических добавок и консервантов. Копчение на натуральном дереве.",
        },
        Feature {
            icon: "🏆",
            title: "Традиции",
            body: "Рецепты передаются из поколения в поколение. Соблюдаем технологию и время копчения.",
        },
        Feature {
            icon: "🕘",
            title: "Свежесть",
            body: "Готовим ежедневно небольшими партиями. Продукция всегда свежая, ароматная и вкусная.",
        },
        Feature {
            icon: "🚚",
            title: "Доставка",
            body: "Быстрая доставка по городу и области. Упаковка сохраняет свежесть и аромат продуктов.",
        },
    ],
    catalog: &[
        ProductCategory { key: "fish", title: "Копчёная рыба", products: &FISH },
        ProductCategory { key: "meat", title: "Копчёное мясо", products: &MEAT },
    ],
    process_image_url: "https://images.unsplash.com/photo-1532550907401-a500c9a57435?w=1920&q=80",
    process: &[
        ProcessStep {
            number: 1,
            title: "Подготовка",
            body: "Отбор свежих продуктов, маринование по авторским рецептам с натуральными специями и травами.",
        },
        ProcessStep {
            number: 2,
            title: "Копчение",
            body: "Процесс копчения на натуральных опилках ольхи, яблони и вишни при строго контролируемой температуре.",
        },
        ProcessStep {
            number: 3,
            title: "Упаковка",
            body: "Вакуумная упаковка сразу после копчения для сохранения свежести, аромата и всех полезных свойств.",
        },
    ],
    delivery: TermsBlock {
        icon: "🚚",
        title: "Условия доставки",
        items: &[
            Term { lead: "Бесплатно", rest: " при заказе от 2000₽" },
            Term { lead: "По городу:", rest: " 200₽, доставка в день заказа" },
            Term { lead: "Область:", rest: " 350₽, доставка на следующий день" },
            Term { lead: "Самовывоз:", rest: " бесплатно, готово через 2 часа" },
        ],
    },
    payment: TermsBlock {
        icon: "📦",
        title: "Способы оплаты",
        items: &[
            Term { lead: "Наличными", rest: " курьеру при получении" },
            Term { lead: "Картой", rest: " при получении (терминал у курьера)" },
            Term { lead: "Онлайн", rest: " переводом на карту" },
            Term { lead: "Для юр. лиц:", rest: " безналичный расчёт" },
        ],
    },
    contacts: Contacts {
        phone_display: "+7 (900) 123-45-67",
        phone_href: "tel:+79001234567",
        phone_hours: "Ежедневно с 9:00 до 21:00",
        email: "info@koptilnya.ru",
        email_note: "Ответим в течение часа",
        address: "ул. Производственная, 15",
        pickup_hours: "Самовывоз с 10:00 до 20:00",
    },
    guarantee: "Если вам не понравится наша продукция — вернём деньги без вопросов. \
                Мы уверены в качестве каждого продукта!",
    copyright: "© 2024 Коптильня. Все права защищены. Копчение рыбы и мяса с 2015 года.",
};

impl SiteContent {
    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.contacts.email)
    }

    pub fn category(&self, key: &str) -> Option<&ProductCategory> {
        self.catalog.iter().find(|c| c.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_two_categories_of_four() {
        assert_eq!(SITE.catalog.len(), 2);
        for key in ["fish", "meat"] {
            let category = SITE.category(key).unwrap();
            assert_eq!(category.products.len(), 4);
        }
        assert!(SITE.category("cheese").is_none());
    }

    #[test]
    fn test_prices_are_preformatted() {
        for category in SITE.catalog {
            for product in category.products {
                assert!(product.price_label.ends_with("₽/кг"), "{}", product.name);
                assert!(product.image_url.starts_with("https://"));
            }
        }
    }

    #[test]
    fn test_terms_blocks() {
        assert_eq!(SITE.delivery.items.len(), 4);
        assert_eq!(SITE.payment.items.len(), 4);
        assert_eq!(SITE.process.iter().map(|s| s.number).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn test_email_href() {
        assert_eq!(SITE.email_href(), "mailto:info@koptilnya.ru");
    }
}
