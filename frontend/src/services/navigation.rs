//! In-page smooth-scroll navigation.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Something that can bring a section into view by element id.
pub trait Viewport {
    /// Returns `false` when no element carries `section_id`.
    fn scroll_into_view(&self, section_id: &str) -> bool;
}

/// The browser document.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_into_view(&self, section_id: &str) -> bool {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section_id))
        else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Scroll to `section_id` and run `on_arrived` (e.g. close the mobile menu).
/// Unknown ids are a silent no-op.
pub fn scroll_to_section<V: Viewport>(viewport: &V, section_id: &str, on_arrived: impl FnOnce()) {
    if viewport.scroll_into_view(section_id) {
        on_arrived();
    } else {
        log::debug!("No section with id '{}', ignoring", section_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct FakeViewport {
        ids: &'static [&'static str],
        scrolled: RefCell<Vec<String>>,
    }

    impl Viewport for FakeViewport {
        fn scroll_into_view(&self, section_id: &str) -> bool {
            if self.ids.contains(&section_id) {
                self.scrolled.borrow_mut().push(section_id.to_string());
                true
            } else {
                false
            }
        }
    }

    fn page() -> FakeViewport {
        FakeViewport {
            ids: &["products", "process", "delivery", "contact"],
            scrolled: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_scroll_closes_menu() {
        let viewport = page();
        let menu_open = Cell::new(true);

        scroll_to_section(&viewport, "contact", || menu_open.set(false));

        assert_eq!(*viewport.scrolled.borrow(), vec!["contact".to_string()]);
        assert!(!menu_open.get());
    }

    #[test]
    fn test_unknown_section_is_noop() {
        let viewport = page();
        let menu_open = Cell::new(true);

        scroll_to_section(&viewport, "nonexistent", || menu_open.set(false));

        assert!(viewport.scrolled.borrow().is_empty());
        assert!(menu_open.get());
    }
}
