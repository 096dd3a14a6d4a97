use super::*;

#[test]
fn menu_starts_closed() {
    let menu = MenuState::default();
    assert!(!menu.open);
    assert_eq!(menu.aria_expanded(), "false");
}

#[test]
fn toggle_flips_and_close_is_idempotent() {
    let mut menu = MenuState::default();
    menu.toggle();
    assert!(menu.open);
    assert_eq!(menu.aria_expanded(), "true");
    menu.close();
    menu.close();
    assert!(!menu.open);
}
