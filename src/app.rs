//! Root application component and the shared page context.
//!
//! DESIGN
//! ======
//! `AppContext` is built once here and handed to every section as a prop
//! rather than provided as ambient context, so each component's inputs are
//! visible in its signature. It is `Copy`: every field is a reactive handle.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::pages::home::HomePage;
use crate::state::hero::HeroState;
use crate::state::layout::{COMPACT_HEADER_QUERY, HERO_STACKED_QUERY, PROJECTS_STACKED_QUERY};
use crate::state::menu::MenuState;
use crate::state::theme::ThemePreference;
use crate::util;

/// Breakpoint signals shared by the sections.
#[derive(Clone, Copy)]
pub struct Viewport {
    /// Theme button lives in the header.
    pub compact_header: Signal<bool>,
    /// Projects render as a stacked list.
    pub projects_stacked: Signal<bool>,
    /// About becomes the hero's back face.
    pub hero_stacked: Signal<bool>,
}

impl Viewport {
    /// Live `matchMedia` signals. Call once per page.
    pub fn from_media() -> Self {
        Self {
            compact_header: util::media::use_media_query(COMPACT_HEADER_QUERY),
            projects_stacked: util::media::use_media_query(PROJECTS_STACKED_QUERY),
            hero_stacked: util::media::use_media_query(HERO_STACKED_QUERY),
        }
    }

    /// Constant breakpoints, for rendering outside a browser.
    pub fn fixed(compact_header: bool, projects_stacked: bool, hero_stacked: bool) -> Self {
        Self {
            compact_header: Signal::derive(move || compact_header),
            projects_stacked: Signal::derive(move || projects_stacked),
            hero_stacked: Signal::derive(move || hero_stacked),
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<SiteConfig>,
    pub theme: RwSignal<ThemePreference>,
    pub menu: RwSignal<MenuState>,
    pub hero: RwSignal<HeroState>,
    pub viewport: Viewport,
}

impl AppContext {
    pub fn new(config: SiteConfig, theme: ThemePreference, viewport: Viewport) -> Self {
        Self {
            config: StoredValue::new(config),
            theme: RwSignal::new(theme),
            menu: RwSignal::new(MenuState::default()),
            hero: RwSignal::new(HeroState::default()),
            viewport,
        }
    }

    pub fn close_menu(self) {
        self.menu.update(MenuState::close);
    }
}

/// Root application component.
///
/// Applies the stored theme, builds the page context and starts the reveal
/// animator once the page is mounted.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = util::theme::read_preference();
    util::theme::apply(theme);
    let ctx = AppContext::new(SiteConfig::from_build_env(), theme, Viewport::from_media());

    Effect::new(move || util::reveal::install());

    view! {
        <Title text="Portfolio"/>
        <Meta name="color-scheme" content="dark light"/>
        <HomePage ctx/>
    }
}
