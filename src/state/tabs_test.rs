use super::*;

fn three() -> TabList<&'static str> {
    TabList::new(vec!["a", "b", "c"])
}

#[test]
fn first_tab_is_active_initially() {
    let tabs = three();
    assert_eq!(tabs.selected_index(), 0);
    assert_eq!(tabs.selected(), Some(&"a"));
    assert_eq!(tabs.aria_selected(0), "true");
}

#[test]
fn select_leaves_exactly_one_active_tab() {
    let mut tabs = three();
    for target in 0..tabs.len() {
        assert!(tabs.select(target));
        let active = (0..tabs.len()).filter(|&i| tabs.is_active(i)).collect::<Vec<_>>();
        assert_eq!(active, vec![target]);
        let selected_attrs = (0..tabs.len()).filter(|&i| tabs.aria_selected(i) == "true").count();
        assert_eq!(selected_attrs, 1);
    }
}

#[test]
fn out_of_range_select_is_ignored() {
    let mut tabs = three();
    tabs.select(1);
    assert!(!tabs.select(3));
    assert_eq!(tabs.selected_index(), 1);
}

#[test]
fn empty_list_has_no_active_tab() {
    let mut tabs = TabList::<String>::default();
    assert!(tabs.is_empty());
    assert!(tabs.selected().is_none());
    assert!(!tabs.is_active(0));
    assert!(!tabs.select(0));
}
