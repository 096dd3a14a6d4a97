//! Scroll-triggered reveal animations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render asynchronously as their documents arrive, so tagging is
//! re-run by a document-wide `MutationObserver` on every subtree change.
//! Tagged elements are handed to one shared, one-shot
//! `IntersectionObserver`; CSS does the actual animation off the `reveal`,
//! `in-view` and `data-reveal-delay` markers.
//!
//! DESIGN
//! ======
//! Tagging is written against the small `RevealRoot` / `RevealNode` traits so
//! the idempotence rules run in tests without a DOM. The browser
//! implementation of those traits and the observer wiring are `csr`-only.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const REVEAL_CLASS: &str = "reveal";
pub const IN_VIEW_CLASS: &str = "in-view";
pub const REVEAL_DELAY_ATTR: &str = "data-reveal-delay";

/// Elements that animate in. The delay bucket comes from the position in
/// this list, not from document order.
pub const REVEAL_SELECTORS: [&str; 9] = [
    ".sectionContainer",
    ".introCard",
    ".projectCard",
    ".contactCard",
    ".expSidebar",
    ".job-panel",
    ".projects .project-card-container > *",
    ".skillsContainer > *",
    ".blogsContainer > *",
];

/// Tagged elements that have not been revealed yet.
pub const PENDING_SELECTOR: &str = ".reveal:not(.in-view)";

pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";
/// Delay before re-observing after a resize or orientation change.
pub const REOBSERVE_DELAY_MS: u32 = 200;

pub trait RevealNode {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn set_attr(&self, name: &str, value: &str);
}

pub trait RevealRoot {
    type Node: RevealNode;

    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
}

/// Stagger bucket (1..=3) for the selector at `selector_index`.
pub fn stagger_delay(selector_index: usize) -> usize {
    selector_index % 3 + 1
}

/// Tag every untagged match of every reveal selector. Returns how many
/// elements were newly tagged; a second run over an unchanged tree tags none.
pub fn tag_revealables<R: RevealRoot>(root: &R) -> usize {
    let mut tagged = 0;
    for (index, selector) in REVEAL_SELECTORS.iter().enumerate() {
        let delay = stagger_delay(index).to_string();
        for node in root.query_all(selector) {
            if node.has_class(REVEAL_CLASS) {
                continue;
            }
            node.add_class(REVEAL_CLASS);
            node.set_attr(REVEAL_DELAY_ATTR, &delay);
            tagged += 1;
        }
    }
    tagged
}

/// Reveal everything tagged but not yet shown. Used when motion is reduced.
pub fn mark_all_in_view<R: RevealRoot>(root: &R) -> usize {
    let pending = root.query_all(PENDING_SELECTOR);
    for node in &pending {
        node.add_class(IN_VIEW_CLASS);
    }
    pending.len()
}

/// Start the animator. Call once, after the app is mounted.
pub fn install() {
    #[cfg(feature = "csr")]
    browser::install();
}

#[cfg(feature = "csr")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{
        Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
        MutationObserver, MutationObserverInit,
    };

    use super::*;
    use crate::state::layout::REDUCED_MOTION_QUERY;

    impl RevealNode for Element {
        fn has_class(&self, class: &str) -> bool {
            self.class_list().contains(class)
        }

        fn add_class(&self, class: &str) {
            let _ = self.class_list().add_1(class);
        }

        fn set_attr(&self, name: &str, value: &str) {
            let _ = self.set_attribute(name, value);
        }
    }

    impl RevealRoot for Document {
        type Node = Element;

        fn query_all(&self, selector: &str) -> Vec<Element> {
            let Ok(list) = self.query_selector_all(selector) else {
                return Vec::new();
            };
            (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect()
        }
    }

    type Pass = Rc<dyn Fn()>;

    pub(super) fn install() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let reduced_motion = crate::util::media::matches(REDUCED_MOTION_QUERY);
        let observer = if reduced_motion { None } else { intersection_observer() };
        let watches_viewport = observer.is_some();

        let pass: Pass = {
            let document = document.clone();
            Rc::new(move || run_pass(&document, observer.as_ref()))
        };
        pass();
        watch_mutations(&document, Rc::clone(&pass));
        if watches_viewport {
            watch_viewport(pass);
        }
        leptos::logging::log!("reveal: animator installed (reduced motion: {reduced_motion})");
    }

    fn run_pass(document: &Document, observer: Option<&IntersectionObserver>) {
        tag_revealables(document);
        match observer {
            Some(observer) => {
                for el in document.query_all(PENDING_SELECTOR) {
                    observer.observe(&el);
                }
            }
            None => {
                mark_all_in_view(document);
            }
        }
    }

    fn intersection_observer() -> Option<IntersectionObserver> {
        let callback = Closure::<dyn Fn(js_sys::Array, IntersectionObserver)>::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    target.add_class(IN_VIEW_CLASS);
                    observer.unobserve(&target);
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_root_margin(REVEAL_ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                callback.forget();
                Some(observer)
            }
            Err(e) => {
                leptos::logging::warn!("reveal: intersection observer unavailable: {e:?}");
                None
            }
        }
    }

    fn watch_mutations(document: &Document, pass: Pass) {
        let Some(root) = document.document_element() else {
            return;
        };
        let callback =
            Closure::<dyn Fn(js_sys::Array, MutationObserver)>::new(move |_: js_sys::Array, _: MutationObserver| pass());
        let Ok(observer) = MutationObserver::new(callback.as_ref().unchecked_ref()) else {
            return;
        };
        let options = MutationObserverInit::new();
        options.set_child_list(true);
        options.set_subtree(true);
        match observer.observe_with_options(&root, &options) {
            Ok(()) => callback.forget(),
            Err(e) => leptos::logging::warn!("reveal: mutation observer not attached: {e:?}"),
        }
    }

    /// Re-observe after resize/orientation settles. Replacing the pending
    /// `Timeout` drops, and so cancels, the previous one.
    fn watch_viewport(pass: Pass) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::default();
        let schedule = Closure::<dyn Fn()>::new(move || {
            let pass = Rc::clone(&pass);
            *pending.borrow_mut() = Some(Timeout::new(REOBSERVE_DELAY_MS, move || pass()));
        });
        for event in ["resize", "orientationchange"] {
            if let Err(e) = window.add_event_listener_with_callback(event, schedule.as_ref().unchecked_ref()) {
                leptos::logging::warn!("reveal: {event} listener not installed: {e:?}");
            }
        }
        schedule.forget();
    }
}
