use super::*;
use crate::app::Viewport;
use crate::config::SiteConfig;
use crate::state::theme::ThemePreference;

fn ctx() -> AppContext {
    AppContext::new(SiteConfig::default(), ThemePreference::default(), Viewport::fixed(false, false, false))
}

#[test]
fn wide_layout_has_no_toggle_and_standalone_about() {
    let ctx = ctx();
    let links = RwSignal::new(LinkSet::default());
    let hero = view! { <HeroCard ctx links/> }.to_html();
    assert!(!hero.contains("flipToggleBtn"));
    assert!(!hero.contains("id=\"about\""));

    let about = view! { <AboutSection ctx/> }.to_html();
    assert!(about.contains("id=\"about\""));
}

#[test]
fn stacked_layout_moves_about_to_back_face() {
    let ctx = ctx();
    ctx.hero.update(|h| h.set_stacked(true));
    let links = RwSignal::new(LinkSet::default());

    let hero = view! { <HeroCard ctx links/> }.to_html();
    assert!(hero.contains("flipToggleBtn"));
    assert!(hero.contains("aboutBack"));
    assert!(hero.contains("Show About"));
    assert!(hero.contains("aria-pressed=\"false\""));

    let about = view! { <AboutSection ctx/> }.to_html();
    assert!(!about.contains("id=\"about\""));
}

#[test]
fn flipped_hero_renders_back_label() {
    let ctx = ctx();
    ctx.hero.update(|h| {
        h.set_stacked(true);
        h.show_about();
    });
    let links = RwSignal::new(LinkSet::default());
    let hero = view! { <HeroCard ctx links/> }.to_html();
    assert!(hero.contains("Back to Intro"));
    assert!(hero.contains("aria-pressed=\"true\""));
}
