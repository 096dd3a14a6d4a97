use super::*;
use crate::app::Viewport;
use crate::config::SiteConfig;
use crate::state::theme::ThemePreference;

fn ctx() -> AppContext {
    AppContext::new(SiteConfig::default(), ThemePreference::default(), Viewport::fixed(false, false, false))
}

fn link(name: &str, href: &str, icon: Option<&str>) -> NavLink {
    NavLink { name: name.to_owned(), href: href.to_owned(), icon: icon.map(str::to_owned) }
}

#[test]
fn renders_one_item_per_link_in_order() {
    let links = RwSignal::new(LinkSet {
        nav: vec![link("Home", "#home", Some("fa-solid fa-house")), link("Work", "#work", None)],
        social: Vec::new(),
    });
    let html = view! { <NavMenu ctx=ctx() links/> }.to_html();

    assert_eq!(html.matches("class=\"nav-li\"").count(), 2);
    let home = html.find("Home").expect("home link rendered");
    let work = html.find("Work").expect("work link rendered");
    assert!(home < work);
    assert!(html.contains("href=\"#work\""));
    assert_eq!(html.matches("fa-solid fa-house").count(), 1);
}

#[test]
fn empty_link_list_renders_bare_menu() {
    let html = view! { <NavMenu ctx=ctx() links=RwSignal::new(LinkSet::default())/> }.to_html();
    assert!(html.contains("id=\"nav-ul\""));
    assert!(!html.contains("nav-li"));
}

#[test]
fn closing_the_menu_resets_aria_expanded() {
    let ctx = ctx();
    ctx.menu.update(crate::state::menu::MenuState::toggle);
    assert_eq!(ctx.menu.get_untracked().aria_expanded(), "true");
    ctx.close_menu();
    assert_eq!(ctx.menu.get_untracked().aria_expanded(), "false");
}
