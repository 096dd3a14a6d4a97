use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use super::*;

#[derive(Default)]
struct FakeElement {
    selectors: Vec<&'static str>,
    classes: RefCell<BTreeSet<String>>,
    attrs: RefCell<BTreeMap<String, String>>,
}

#[derive(Clone)]
struct FakeNode(Rc<FakeElement>);

impl RevealNode for FakeNode {
    fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().contains(class)
    }

    fn add_class(&self, class: &str) {
        self.0.classes.borrow_mut().insert(class.to_owned());
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.0.attrs.borrow_mut().insert(name.to_owned(), value.to_owned());
    }
}

#[derive(Default)]
struct FakeDom {
    elements: Vec<Rc<FakeElement>>,
}

impl FakeDom {
    fn add(&mut self, selectors: &[&'static str]) -> Rc<FakeElement> {
        let el = Rc::new(FakeElement { selectors: selectors.to_vec(), ..FakeElement::default() });
        self.elements.push(Rc::clone(&el));
        el
    }
}

impl RevealRoot for FakeDom {
    type Node = FakeNode;

    fn query_all(&self, selector: &str) -> Vec<FakeNode> {
        self.elements
            .iter()
            .filter(|el| {
                if selector == PENDING_SELECTOR {
                    let classes = el.classes.borrow();
                    classes.contains(REVEAL_CLASS) && !classes.contains(IN_VIEW_CLASS)
                } else {
                    el.selectors.contains(&selector)
                }
            })
            .map(|el| FakeNode(Rc::clone(el)))
            .collect()
    }
}

fn delay_of(el: &FakeElement) -> Option<String> {
    el.attrs.borrow().get(REVEAL_DELAY_ATTR).cloned()
}

#[test]
fn stagger_cycles_through_three_buckets() {
    let delays = (0..REVEAL_SELECTORS.len()).map(stagger_delay).collect::<Vec<_>>();
    assert_eq!(delays, vec![1, 2, 3, 1, 2, 3, 1, 2, 3]);
}

#[test]
fn tagging_marks_matches_with_selector_delay() {
    let mut dom = FakeDom::default();
    let section = dom.add(&[".sectionContainer"]);
    let panel = dom.add(&[".job-panel"]);
    let skill = dom.add(&[".skillsContainer > *"]);
    let plain = dom.add(&[]);

    assert_eq!(tag_revealables(&dom), 3);
    assert!(section.classes.borrow().contains(REVEAL_CLASS));
    assert_eq!(delay_of(&section).as_deref(), Some("1"));
    assert_eq!(delay_of(&panel).as_deref(), Some("3"));
    assert_eq!(delay_of(&skill).as_deref(), Some("2"));
    assert!(plain.classes.borrow().is_empty());
}

#[test]
fn tagging_twice_changes_nothing() {
    let mut dom = FakeDom::default();
    let card = dom.add(&[".projectCard"]);
    assert_eq!(tag_revealables(&dom), 1);
    card.attrs.borrow_mut().insert(REVEAL_DELAY_ATTR.to_owned(), "custom".to_owned());

    assert_eq!(tag_revealables(&dom), 0);
    assert_eq!(delay_of(&card).as_deref(), Some("custom"));
    assert_eq!(card.classes.borrow().len(), 1);
}

#[test]
fn element_matching_two_selectors_keeps_first_delay() {
    let mut dom = FakeDom::default();
    let el = dom.add(&[".introCard", ".projectCard"]);
    assert_eq!(tag_revealables(&dom), 1);
    assert_eq!(delay_of(&el).as_deref(), Some("2"));
}

#[test]
fn late_rendered_elements_are_tagged_on_the_next_pass() {
    let mut dom = FakeDom::default();
    dom.add(&[".sectionContainer"]);
    tag_revealables(&dom);
    let late = dom.add(&[".projects .project-card-container > *"]);
    assert_eq!(tag_revealables(&dom), 1);
    assert_eq!(delay_of(&late).as_deref(), Some("1"));
}

#[test]
fn reduced_motion_reveals_only_pending_elements() {
    let mut dom = FakeDom::default();
    let shown = dom.add(&[".sectionContainer"]);
    let waiting = dom.add(&[".expSidebar"]);
    let untagged = dom.add(&[]);
    tag_revealables(&dom);
    shown.classes.borrow_mut().insert(IN_VIEW_CLASS.to_owned());

    assert_eq!(mark_all_in_view(&dom), 1);
    assert!(waiting.classes.borrow().contains(IN_VIEW_CLASS));
    assert!(!untagged.classes.borrow().contains(IN_VIEW_CLASS));
    assert_eq!(mark_all_in_view(&dom), 0);
}
